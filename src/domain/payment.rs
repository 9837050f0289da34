use super::money::Amount;
use super::ports::LogSink;
use crate::error::OpsError;
use std::fmt;
use std::str::FromStr;

/// Settlement behavior for an order amount.
pub trait PaymentStrategy: Send + Sync {
    /// Settles `amount`, recording exactly one line on `sink`.
    fn pay(&self, amount: Amount, sink: &dyn LogSink) -> Settlement;
}

/// The supported ways of settling an order.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum PaymentMethod {
    Cash,
    BankTransfer,
    Momo,
    VnPay,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [Self::Cash, Self::BankTransfer, Self::Momo, Self::VnPay];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::BankTransfer => "bank_transfer",
            Self::Momo => "momo",
            Self::VnPay => "vnpay",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = OpsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cash" => Ok(Self::Cash),
            "bank_transfer" | "bank" => Ok(Self::BankTransfer),
            "momo" => Ok(Self::Momo),
            "vnpay" => Ok(Self::VnPay),
            _ => Err(OpsError::UnknownPaymentMethod(s.to_string())),
        }
    }
}

impl PaymentStrategy for PaymentMethod {
    fn pay(&self, amount: Amount, sink: &dyn LogSink) -> Settlement {
        let settlement = Settlement {
            amount,
            method: *self,
        };
        sink.record(&settlement.to_string());
        settlement
    }
}

/// Record of an order amount paid through a method.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Settlement {
    pub amount: Amount,
    pub method: PaymentMethod,
}

impl fmt::Display for Settlement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.method {
            PaymentMethod::Cash => write!(f, "paid {} in cash", self.amount),
            PaymentMethod::BankTransfer => write!(f, "bank transfer of {} received", self.amount),
            PaymentMethod::Momo => write!(f, "paid {} via Momo", self.amount),
            PaymentMethod::VnPay => write!(f, "paid {} via VNPay", self.amount),
        }
    }
}

/// An order total bound to the method that will settle it.
///
/// Neither the amount nor the method can change after construction; paying
/// with another method means building a new order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Order {
    amount: Amount,
    method: PaymentMethod,
}

impl Order {
    pub fn new(amount: impl Into<Amount>, method: PaymentMethod) -> Self {
        Self {
            amount: amount.into(),
            method,
        }
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn method(&self) -> PaymentMethod {
        self.method
    }

    pub fn process_payment(&self, sink: &dyn LogSink) -> Settlement {
        self.method.pay(self.amount, sink)
    }
}
