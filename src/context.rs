//! Service context bundling the port trait objects.

use crate::adapters::live::{LiveFileSystem, LiveIdGenerator};
use crate::adapters::seeded::SeededIdGenerator;
use crate::ports::filesystem::FileSystem;
use crate::ports::id_gen::IdGenerator;

/// Bundles the port trait objects a run needs.
///
/// Constructors wire up different adapter implementations (live, seeded).
pub struct ServiceContext {
    /// Random source for identifiers.
    pub id_gen: Box<dyn IdGenerator>,
    /// Filesystem for the output and input files.
    pub fs: Box<dyn FileSystem>,
}

impl ServiceContext {
    /// Creates a live context: unseeded randomness and real disk I/O.
    #[must_use]
    pub fn live() -> Self {
        Self { id_gen: Box::new(LiveIdGenerator::new()), fs: Box::new(LiveFileSystem) }
    }

    /// Creates a context whose identifiers are reproducible for `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self { id_gen: Box::new(SeededIdGenerator::new(seed)), fs: Box::new(LiveFileSystem) }
    }

    /// Picks [`Self::seeded`] when a seed is given, [`Self::live`] otherwise.
    #[must_use]
    pub fn for_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::live, Self::seeded)
    }

    /// Creates a context from explicit adapters.
    #[must_use]
    pub fn new(id_gen: Box<dyn IdGenerator>, fs: Box<dyn FileSystem>) -> Self {
        Self { id_gen, fs }
    }
}
