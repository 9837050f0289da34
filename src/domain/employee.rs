use super::money::Amount;
use crate::error::OpsError;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Anything that can report a salary.
pub trait Employee: Send + Sync {
    fn salary(&self) -> Amount;

    /// Salary lines from the outermost layer down to the base salary.
    ///
    /// The amounts always sum to [`Employee::salary`].
    fn breakdown(&self) -> Vec<SalaryLine>;
}

pub type EmployeeRef = Arc<dyn Employee>;

/// One line of a salary breakdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalaryLine {
    pub label: String,
    pub amount: Amount,
}

/// The leaf of every compensation chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseEmployee {
    base_salary: Amount,
}

impl BaseEmployee {
    pub fn new(base_salary: impl Into<Amount>) -> Self {
        Self {
            base_salary: base_salary.into(),
        }
    }
}

impl Employee for BaseEmployee {
    fn salary(&self) -> Amount {
        self.base_salary
    }

    fn breakdown(&self) -> Vec<SalaryLine> {
        vec![SalaryLine {
            label: "base".to_string(),
            amount: self.base_salary,
        }]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllowanceKind {
    Manager,
    Director,
    Accountant,
    Custom(Amount),
}

impl AllowanceKind {
    pub fn amount(self) -> Amount {
        match self {
            Self::Manager => Amount::from(5_000_000u64),
            Self::Director => Amount::from(10_000_000u64),
            Self::Accountant => Amount::from(3_000_000u64),
            Self::Custom(amount) => amount,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Manager => "manager allowance",
            Self::Director => "director allowance",
            Self::Accountant => "accountant allowance",
            Self::Custom(_) => "allowance",
        }
    }
}

impl fmt::Display for AllowanceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AllowanceKind {
    type Err = OpsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "manager" => Ok(Self::Manager),
            "director" => Ok(Self::Director),
            "accountant" => Ok(Self::Accountant),
            _ => Err(OpsError::UnknownAllowance(s.to_string())),
        }
    }
}

/// An allowance layered over another employee.
///
/// The wrapped employee is fixed at construction. Several layers may wrap the
/// same employee; each resulting chain is evaluated on its own.
#[derive(Clone)]
pub struct Allowance {
    wrapped: EmployeeRef,
    kind: AllowanceKind,
}

impl Allowance {
    pub fn new(wrapped: EmployeeRef, kind: AllowanceKind) -> Self {
        Self { wrapped, kind }
    }

    pub fn kind(&self) -> AllowanceKind {
        self.kind
    }
}

impl Employee for Allowance {
    fn salary(&self) -> Amount {
        self.kind.amount() + self.wrapped.salary()
    }

    fn breakdown(&self) -> Vec<SalaryLine> {
        let mut lines = vec![SalaryLine {
            label: self.kind.label().to_string(),
            amount: self.kind.amount(),
        }];
        lines.extend(self.wrapped.breakdown());
        lines
    }
}

impl fmt::Debug for Allowance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Allowance")
            .field("kind", &self.kind)
            .field("wrapped_salary", &self.wrapped.salary())
            .finish()
    }
}

/// Builds allowance layers on top of a shared employee.
pub trait WithAllowance {
    fn with_allowance(&self, kind: AllowanceKind) -> EmployeeRef;
}

impl WithAllowance for EmployeeRef {
    fn with_allowance(&self, kind: AllowanceKind) -> EmployeeRef {
        Arc::new(Allowance::new(Arc::clone(self), kind))
    }
}

/// Wraps `base` in one layer per allowance, in the order given.
///
/// The last allowance ends up as the outermost layer.
pub fn stack_allowances(
    base: EmployeeRef,
    allowances: impl IntoIterator<Item = AllowanceKind>,
) -> EmployeeRef {
    allowances
        .into_iter()
        .fold(base, |employee, kind| employee.with_allowance(kind))
}
