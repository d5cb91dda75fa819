//! Seeded adapters producing reproducible output.

pub mod id_gen;

pub use id_gen::SeededIdGenerator;
