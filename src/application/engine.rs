use crate::domain::employee::Employee;
use crate::domain::money::Amount;
use crate::domain::payment::{Order, Settlement};
use crate::domain::ports::SharedSink;
use crate::domain::table::{SharedTable, TableStatus};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Final status of one table, as reported by [`RestaurantEngine::into_results`].
#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
pub struct TableSnapshot {
    pub table: u16,
    pub status: TableStatus,
}

/// The main entry point for routing restaurant events to the domain.
///
/// `RestaurantEngine` owns the log sink every operation records to and the
/// registry of tables seen so far. Tables are created on first use in the
/// `Free` status. Each table has its own lock, so requests for different
/// tables never wait on each other.
pub struct RestaurantEngine {
    sink: SharedSink,
    tables: Arc<RwLock<HashMap<u16, SharedTable>>>,
}

impl RestaurantEngine {
    /// Creates a new `RestaurantEngine` recording to `sink`.
    pub fn new(sink: SharedSink) -> Self {
        Self {
            sink,
            tables: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub fn sink(&self) -> &SharedSink {
        &self.sink
    }

    async fn table(&self, table_no: u16) -> SharedTable {
        if let Some(table) = self.tables.read().await.get(&table_no) {
            return table.clone();
        }
        let mut tables = self.tables.write().await;
        tables.entry(table_no).or_default().clone()
    }

    /// Advances `table_no` by one step and returns its new status.
    pub async fn handle_request(&self, table_no: u16) -> TableStatus {
        let table = self.table(table_no).await;
        let status = table.handle_request(self.sink.as_ref()).await;
        tracing::info!(table = table_no, %status, "request handled");
        status
    }

    /// Operator override of a table's status.
    pub async fn set_status(&self, table_no: u16, status: TableStatus) {
        self.table(table_no).await.set_status(status).await;
        tracing::info!(table = table_no, %status, "status overridden");
    }

    /// Current status of `table_no`; tables never seen read as `Free`.
    pub async fn status(&self, table_no: u16) -> TableStatus {
        let table = self.tables.read().await.get(&table_no).cloned();
        match table {
            Some(table) => table.status().await,
            None => TableStatus::default(),
        }
    }

    /// Settles `order` through its bound payment method.
    pub fn process_payment(&self, order: &Order) -> Settlement {
        let settlement = order.process_payment(self.sink.as_ref());
        tracing::info!(amount = %settlement.amount, method = %settlement.method, "order settled");
        settlement
    }

    /// Computes the salary of `employee` and records a payroll line.
    pub fn salary(&self, employee: &dyn Employee) -> Amount {
        let salary = employee.salary();
        self.sink.record(&format!("salary computed: {salary}"));
        salary
    }

    /// Consumes the engine and returns the final status of every table seen,
    /// ordered by table number.
    pub async fn into_results(self) -> Vec<TableSnapshot> {
        let tables = self.tables.read().await;
        let mut snapshots = Vec::with_capacity(tables.len());
        for (&table, shared) in tables.iter() {
            snapshots.push(TableSnapshot {
                table,
                status: shared.status().await,
            });
        }
        snapshots.sort_by_key(|s| s.table);
        snapshots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::employee::{AllowanceKind, BaseEmployee, EmployeeRef, stack_allowances};
    use crate::domain::payment::PaymentMethod;
    use crate::infrastructure::in_memory::InMemorySink;

    fn engine() -> (RestaurantEngine, InMemorySink) {
        let sink = InMemorySink::new();
        (RestaurantEngine::new(Arc::new(sink.clone())), sink)
    }

    #[tokio::test]
    async fn test_tables_start_free_and_advance() {
        let (engine, sink) = engine();
        assert_eq!(engine.status(7).await, TableStatus::Free);

        assert_eq!(engine.handle_request(7).await, TableStatus::Ordered);
        assert_eq!(engine.handle_request(7).await, TableStatus::Done);
        assert_eq!(engine.status(7).await, TableStatus::Done);
        assert_eq!(sink.len(), 2);
    }

    #[tokio::test]
    async fn test_tables_are_independent() {
        let (engine, _) = engine();
        engine.handle_request(1).await;
        engine.set_status(2, TableStatus::Fixing).await;

        assert_eq!(engine.status(1).await, TableStatus::Ordered);
        assert_eq!(engine.status(2).await, TableStatus::Fixing);
        assert_eq!(engine.handle_request(2).await, TableStatus::Done);
        assert_eq!(engine.status(1).await, TableStatus::Ordered);
    }

    #[tokio::test]
    async fn test_process_payment_records_settlement() {
        let (engine, sink) = engine();
        let settlement =
            engine.process_payment(&Order::new(750_000u64, PaymentMethod::Momo));

        assert_eq!(settlement.method, PaymentMethod::Momo);
        assert_eq!(sink.records(), vec!["paid 750000 via Momo"]);
    }

    #[tokio::test]
    async fn test_salary_records_payroll_line() {
        let (engine, sink) = engine();
        let base: EmployeeRef = Arc::new(BaseEmployee::new(15_000_000u64));
        let director = stack_allowances(base, [AllowanceKind::Director]);

        assert_eq!(engine.salary(director.as_ref()), Amount::from(25_000_000u64));
        assert_eq!(sink.records(), vec!["salary computed: 25000000"]);
    }

    #[tokio::test]
    async fn test_into_results_sorted_by_table() {
        let (engine, _) = engine();
        for table in [9, 3, 5] {
            engine.handle_request(table).await;
        }
        engine.handle_request(3).await;

        let results = engine.into_results().await;
        assert_eq!(
            results,
            vec![
                TableSnapshot { table: 3, status: TableStatus::Done },
                TableSnapshot { table: 5, status: TableStatus::Ordered },
                TableSnapshot { table: 9, status: TableStatus::Ordered },
            ]
        );
    }
}
