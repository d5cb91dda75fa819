//! Live adapters for real external interactions.

pub mod filesystem;
pub mod id_gen;

pub use filesystem::LiveFileSystem;
pub use id_gen::LiveIdGenerator;
