//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between identifier generation and an
//! external system (randomness, filesystem). Implementations live in
//! `src/adapters/`.

pub mod filesystem;
pub mod id_gen;

pub use filesystem::FileSystem;
pub use id_gen::IdGenerator;
