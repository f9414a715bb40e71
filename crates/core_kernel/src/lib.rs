//! Core Kernel - Foundational types and utilities for the car insurance system
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Money types with precise decimal arithmetic
//! - Calendar date ranges with inclusive overlap semantics and an injectable clock
//! - Strongly-typed identifiers
//! - Port infrastructure shared by every storage adapter

pub mod money;
pub mod temporal;
pub mod identifiers;
pub mod ports;

pub use money::{Money, Currency, MoneyError};
pub use temporal::{DateRange, TemporalError, Clock, SystemClock, FixedClock, overlaps};
pub use identifiers::{OwnerId, CarId, PolicyId, ClaimId};
pub use ports::{
    PortError, DomainPort, HealthCheckable, HealthCheckResult, AdapterHealth,
};
