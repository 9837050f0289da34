//! Application layer containing the restaurant event orchestration.
//!
//! This module defines the `RestaurantEngine` which acts as the primary entry
//! point for table requests, payments and payroll. It owns the injected log
//! sink and a registry of per-table locks.

pub mod engine;
pub mod event;
