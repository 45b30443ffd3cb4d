//! Staged transfer through a host-managed temporary file.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::{Builder, NamedTempFile};

use super::{Export, StorageError};
use crate::config::DOWNLOAD_STEM;
use crate::encode::EncodedImage;

/// Export by writing the bytes to a fresh temp file.
#[derive(Debug, Clone, Default)]
pub struct StagedExport {
    dir: Option<PathBuf>,
}

impl StagedExport {
    /// Stage files in the system temp directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage files in `dir` instead of the system temp directory.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(dir.into()),
        }
    }
}

impl Export for StagedExport {
    type Output = StagedDownload;

    fn export(&self, image: &EncodedImage) -> Result<StagedDownload, StorageError> {
        let prefix = format!("{}-", DOWNLOAD_STEM);
        let suffix = format!(".{}", image.format().extension());
        let mut builder = Builder::new();
        builder.prefix(&prefix).suffix(&suffix);

        let mut file = match &self.dir {
            Some(dir) => builder.tempfile_in(dir),
            None => builder.tempfile(),
        }
        .map_err(StorageError::Create)?;

        // On failure `file` is dropped here, which removes it
        write_flushed(&mut file, image.bytes())?;

        tracing::debug!(path = %file.path().display(), bytes = image.len(), "staged download");

        Ok(StagedDownload {
            file,
            file_name: image.file_name(),
            mime: image.format().mime_type(),
            len: image.len(),
        })
    }
}

fn write_flushed(out: &mut impl Write, bytes: &[u8]) -> Result<(), StorageError> {
    out.write_all(bytes)
        .and_then(|()| out.flush())
        .map_err(StorageError::Write)
}

/// A staged download. Owns the temp file for as long as it lives.
///
/// Dropping the guard deletes the file; [`StagedDownload::finish`] does the
/// same but reports a failed removal instead of ignoring it.
#[derive(Debug)]
pub struct StagedDownload {
    file: NamedTempFile,
    file_name: String,
    mime: &'static str,
    len: usize,
}

impl StagedDownload {
    /// Location of the staged bytes, for the host to serve.
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Suggested download name, e.g. `converted_image.jpg`.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn mime(&self) -> &'static str {
        self.mime
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// End the download session and delete the staged file.
    pub fn finish(self) -> Result<(), StorageError> {
        let path = self.file.path().to_path_buf();
        self.file.close().map_err(|e| {
            tracing::warn!(path = %path.display(), error = %e, "failed to remove staged download");
            StorageError::Cleanup(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::PixelGrid;
    use crate::encode::{encode, OutputFormat};

    fn sample_image() -> EncodedImage {
        let grid = PixelGrid::gray(10, 10, vec![50; 100]);
        encode(&grid, OutputFormat::Jpeg).unwrap()
    }

    #[test]
    fn test_staged_file_contains_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let image = sample_image();

        let download = StagedExport::in_dir(dir.path()).export(&image).unwrap();

        assert_eq!(std::fs::read(download.path()).unwrap(), image.bytes());
        assert_eq!(download.file_name(), "converted_image.jpg");
        assert_eq!(download.mime(), "image/jpeg");
        assert_eq!(download.len(), image.len());
        assert!(download.path().starts_with(dir.path()));
    }

    #[test]
    fn test_staged_file_named_uniquely() {
        let dir = tempfile::tempdir().unwrap();
        let export = StagedExport::in_dir(dir.path());
        let image = sample_image();

        let a = export.export(&image).unwrap();
        let b = export.export(&image).unwrap();

        assert_ne!(a.path(), b.path());
        let name = a.path().file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("converted_image-"));
        assert!(name.ends_with(".jpg"));
    }

    #[test]
    fn test_finish_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let download = StagedExport::in_dir(dir.path()).export(&sample_image()).unwrap();
        let path = download.path().to_path_buf();

        assert!(path.exists());
        download.finish().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_drop_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = {
            let download = StagedExport::in_dir(dir.path()).export(&sample_image()).unwrap();
            download.path().to_path_buf()
        };

        assert!(!path.exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_finish_reports_failed_removal() {
        let dir = tempfile::tempdir().unwrap();
        let download = StagedExport::in_dir(dir.path()).export(&sample_image()).unwrap();

        std::fs::remove_file(download.path()).unwrap();
        assert!(matches!(download.finish(), Err(StorageError::Cleanup(_))));
    }

    #[test]
    fn test_write_failure_maps_to_write_error() {
        struct FullDisk;

        impl Write for FullDisk {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::Other, "no space left"))
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let result = write_flushed(&mut FullDisk, sample_image().bytes());
        assert!(matches!(result, Err(StorageError::Write(_))));

        let mut sink = Vec::new();
        write_flushed(&mut sink, b"abc").unwrap();
        assert_eq!(sink, b"abc");
    }

    #[test]
    fn test_missing_dir_fails_to_create() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");

        let result = StagedExport::in_dir(missing).export(&sample_image());
        assert!(matches!(result, Err(StorageError::Create(_))));
    }
}
