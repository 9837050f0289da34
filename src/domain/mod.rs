//! Domain layer: the table lifecycle, payment strategies and compensation
//! chains, plus the log sink port they record to.

pub mod employee;
pub mod money;
pub mod payment;
pub mod ports;
pub mod table;
