//! Document sources for file-based runs.

use std::fs;
use std::io;
use std::path::Path;

/// Reads the text of one document.
///
/// Only I/O failures are reported; a source must not turn other failures
/// into `io::Error`. Closures of the right shape are sources too, which
/// keeps tests free of the filesystem.
///
/// # Example
///
/// ```rust
/// use std::io;
/// use std::path::Path;
/// use wordtally::pipeline::TextSource;
///
/// let source = |path: &Path| -> io::Result<String> {
///     Ok(format!("contents of {}", path.display()))
/// };
///
/// assert_eq!(source.read_text(Path::new("a.txt")).unwrap(), "contents of a.txt");
/// ```
pub trait TextSource {
    fn read_text(&self, path: &Path) -> io::Result<String>;
}

/// Reads documents from the local filesystem as UTF-8.
///
/// Files that are not valid UTF-8 fail with `io::ErrorKind::InvalidData`.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsSource;

impl TextSource for FsSource {
    fn read_text(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }
}

impl<F> TextSource for F
where
    F: Fn(&Path) -> io::Result<String>,
{
    fn read_text(&self, path: &Path) -> io::Result<String> {
        self(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn fs_source_reads_utf8_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Lorem ipsum").unwrap();

        assert_eq!(FsSource.read_text(file.path()).unwrap(), "Lorem ipsum");
    }

    #[test]
    fn fs_source_rejects_invalid_utf8() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0x7b, 0x5c, 0xff, 0xfe, 0x00, 0xc3]).unwrap();

        let error = FsSource.read_text(file.path()).unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn fs_source_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let error = FsSource
            .read_text(&dir.path().join("missing.txt"))
            .unwrap_err();

        assert_eq!(error.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn closures_are_sources() {
        let source = |_: &Path| -> io::Result<String> { Err(io::ErrorKind::PermissionDenied.into()) };

        assert_eq!(
            source.read_text(Path::new("x")).unwrap_err().kind(),
            io::ErrorKind::PermissionDenied
        );
    }
}
