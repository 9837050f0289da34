//! Log sink adapters and the wiring that selects one at startup.

pub mod console;
pub mod factory;
pub mod file;
pub mod global;
pub mod in_memory;
