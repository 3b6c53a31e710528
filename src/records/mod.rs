//! Record assembly from metadata and price history

pub mod builder;

pub use builder::*;
