//! Command handlers behind the two binaries.

pub mod check;
pub mod generate;
