use memmap2::Mmap;
use std::fs::{self, File};
use std::ops::Deref;
use std::path::Path;
use tracing::trace;

use crate::errors::{MtfindResult, SearchError};

// Files at or above this size are memory mapped instead of read into a Vec.
pub(crate) const MMAP_THRESHOLD: u64 = 10 * 1024 * 1024; // 10MB

/// An owned, immutable input buffer. All match views borrow from it.
#[derive(Debug)]
pub enum Buffer {
    Owned(Vec<u8>),
    Mapped(Mmap),
}

impl Deref for Buffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            Buffer::Owned(bytes) => bytes,
            Buffer::Mapped(mmap) => mmap,
        }
    }
}

impl AsRef<[u8]> for Buffer {
    fn as_ref(&self) -> &[u8] {
        self
    }
}

fn map_io_error(e: std::io::Error, path: &Path) -> SearchError {
    match e.kind() {
        std::io::ErrorKind::NotFound => SearchError::file_not_found(path),
        std::io::ErrorKind::PermissionDenied => SearchError::permission_denied(path),
        _ => SearchError::IoError(e),
    }
}

/// Reads the input file into a [`Buffer`], memory mapping large files.
pub fn read_input(path: &Path) -> MtfindResult<Buffer> {
    let metadata = fs::metadata(path).map_err(|e| map_io_error(e, path))?;

    if metadata.len() >= MMAP_THRESHOLD {
        trace!("Memory mapping input file: {}", path.display());
        let file = File::open(path).map_err(|e| map_io_error(e, path))?;
        let mmap = unsafe { Mmap::map(&file) }.map_err(SearchError::IoError)?;
        Ok(Buffer::Mapped(mmap))
    } else {
        trace!("Reading input file: {}", path.display());
        fs::read(path)
            .map(Buffer::Owned)
            .map_err(|e| map_io_error(e, path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_read_small_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("input.txt");
        fs::write(&path, "foo\nbar\n").unwrap();

        let buffer = read_input(&path).unwrap();
        assert!(matches!(buffer, Buffer::Owned(_)));
        assert_eq!(&*buffer, b"foo\nbar\n");
    }

    #[test]
    fn test_read_empty_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        fs::write(&path, "").unwrap();

        let buffer = read_input(&path).unwrap();
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_missing_file_is_reported() {
        let dir = tempdir().unwrap();
        let err = read_input(&dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, SearchError::FileNotFound(_)));
    }
}
