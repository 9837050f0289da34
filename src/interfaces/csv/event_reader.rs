use crate::application::event::RestaurantEvent;
use crate::domain::employee::AllowanceKind;
use crate::domain::money::Amount;
use crate::domain::payment::{Order, PaymentMethod};
use crate::error::{OpsError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Request,
    Fix,
    Pay,
    Salary,
}

/// One row of the event script: `type, table, amount, method, allowances`.
///
/// Which columns are required depends on `type`; the rest are left empty.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct EventRecord {
    pub r#type: EventType,
    pub table: Option<u16>,
    pub amount: Option<Decimal>,
    pub method: Option<String>,
    /// `;`-separated allowance names, applied innermost first.
    pub allowances: Option<String>,
}

fn required<T>(value: Option<T>, what: &str, event: EventType) -> Result<T> {
    value.ok_or_else(|| OpsError::ValidationError(format!("{event:?} event requires {what}")))
}

impl TryFrom<EventRecord> for RestaurantEvent {
    type Error = OpsError;

    fn try_from(record: EventRecord) -> Result<Self> {
        let kind = record.r#type;
        match kind {
            EventType::Request => Ok(Self::Request {
                table: required(record.table, "a table", kind)?,
            }),
            EventType::Fix => Ok(Self::Fix {
                table: required(record.table, "a table", kind)?,
            }),
            EventType::Pay => {
                let amount = Amount::non_negative(required(record.amount, "an amount", kind)?)?;
                let method: PaymentMethod = required(record.method, "a method", kind)?.parse()?;
                Ok(Self::Pay(Order::new(amount, method)))
            }
            EventType::Salary => {
                let base = Amount::non_negative(required(record.amount, "a base salary", kind)?)?;
                let allowances = record
                    .allowances
                    .as_deref()
                    .unwrap_or_default()
                    .split(';')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(str::parse::<AllowanceKind>)
                    .collect::<Result<Vec<_>>>()?;
                Ok(Self::salary(base, allowances))
            }
        }
    }
}

/// Reads restaurant events from a CSV source.
///
/// This reader wraps `csv::Reader` and provides an iterator over
/// `Result<RestaurantEvent>`. It handles whitespace trimming and flexible
/// record lengths automatically.
pub struct EventReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> EventReader<R> {
    /// Creates a new `EventReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads, deserializes and validates events.
    pub fn events(self) -> impl Iterator<Item = Result<RestaurantEvent>> {
        self.reader.into_deserialize().map(|result| {
            let record: EventRecord = result.map_err(OpsError::from)?;
            RestaurantEvent::try_from(record)
        })
    }
}
