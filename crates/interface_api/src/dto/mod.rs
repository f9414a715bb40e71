//! Request and response bodies

pub mod vehicles;
pub mod policies;
pub mod claims;
