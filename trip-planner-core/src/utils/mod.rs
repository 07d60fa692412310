//! Utility functions

pub mod datetime;
pub mod filter;
pub mod sort;
