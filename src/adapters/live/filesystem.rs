//! Live filesystem adapter using `std::fs`.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::ports::filesystem::FileSystem;

/// Live filesystem adapter backed by real disk I/O.
///
/// Parent directories are never created; a missing one is an error.
pub struct LiveFileSystem;

impl FileSystem for LiveFileSystem {
    fn create(&self, path: &Path) -> io::Result<Box<dyn Write>> {
        let file = File::create(path)?;
        Ok(Box::new(BufWriter::new(file)))
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_truncates_existing_content() {
        let dir = std::env::temp_dir().join("psi_inputs_live_fs_truncate");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("inputs.txt");
        std::fs::write(&path, "stale content that is long\n").unwrap();

        {
            let mut out = LiveFileSystem.create(&path).unwrap();
            out.write_all(b"AB\n").unwrap();
            out.flush().unwrap();
        }

        assert_eq!(LiveFileSystem.read_to_string(&path).unwrap(), "AB\n");
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn create_fails_without_parent_directory() {
        let path = std::env::temp_dir()
            .join("psi_inputs_live_fs_missing")
            .join("no_such_dir")
            .join("inputs.txt");
        assert!(LiveFileSystem.create(&path).is_err());
    }

    #[test]
    fn read_missing_file_errors() {
        let path = std::env::temp_dir().join("psi_inputs_live_fs_absent.txt");
        let _ = std::fs::remove_file(&path);
        assert!(LiveFileSystem.read_to_string(&path).is_err());
    }
}
