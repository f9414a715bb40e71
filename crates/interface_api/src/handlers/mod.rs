//! Request handlers

pub mod health;
pub mod owners;
pub mod cars;
pub mod policies;
pub mod claims;
pub mod history;
