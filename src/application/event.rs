use super::engine::RestaurantEngine;
use crate::domain::employee::{AllowanceKind, BaseEmployee, EmployeeRef, stack_allowances};
use crate::domain::money::Amount;
use crate::domain::payment::{Order, Settlement};
use crate::domain::table::TableStatus;
use std::fmt;
use std::sync::Arc;

/// A restaurant event, validated and ready to apply.
pub enum RestaurantEvent {
    /// A table handles its next request.
    Request { table: u16 },
    /// An operator takes a table out of service.
    Fix { table: u16 },
    /// An order is settled.
    Pay(Order),
    /// An employee's salary is computed.
    Salary(EmployeeRef),
}

impl RestaurantEvent {
    pub fn salary(base: Amount, allowances: impl IntoIterator<Item = AllowanceKind>) -> Self {
        let base: EmployeeRef = Arc::new(BaseEmployee::new(base));
        Self::Salary(stack_allowances(base, allowances))
    }
}

impl fmt::Debug for RestaurantEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Request { table } => f.debug_struct("Request").field("table", table).finish(),
            Self::Fix { table } => f.debug_struct("Fix").field("table", table).finish(),
            Self::Pay(order) => f.debug_tuple("Pay").field(order).finish(),
            Self::Salary(employee) => f
                .debug_tuple("Salary")
                .field(&employee.breakdown())
                .finish(),
        }
    }
}

/// What applying a [`RestaurantEvent`] produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Table { table: u16, status: TableStatus },
    Settled(Settlement),
    Salary(Amount),
}

impl RestaurantEngine {
    pub async fn apply(&self, event: RestaurantEvent) -> Outcome {
        match event {
            RestaurantEvent::Request { table } => Outcome::Table {
                table,
                status: self.handle_request(table).await,
            },
            RestaurantEvent::Fix { table } => {
                self.set_status(table, TableStatus::Fixing).await;
                Outcome::Table {
                    table,
                    status: TableStatus::Fixing,
                }
            }
            RestaurantEvent::Pay(order) => Outcome::Settled(self.process_payment(&order)),
            RestaurantEvent::Salary(employee) => Outcome::Salary(self.salary(employee.as_ref())),
        }
    }
}
