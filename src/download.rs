use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

pub const DOWNLOAD_FILE_NAME: &str = "publications.bib";
pub const DOWNLOAD_CONTENT_TYPE: &str = "text/plain";

/// The fetched bibliography offered back as a file, byte for byte
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub file_name: &'static str,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

impl Download {
    pub fn from_source(source_text: &str) -> Self {
        Self {
            file_name: DOWNLOAD_FILE_NAME,
            content_type: DOWNLOAD_CONTENT_TYPE,
            bytes: source_text.as_bytes().to_vec(),
        }
    }

    /// Write into a directory under the download file name
    pub fn save_to_dir<P: AsRef<Path>>(&self, dir: P) -> Result<PathBuf> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
        let path = dir.join(self.file_name);
        fs::write(&path, &self.bytes)
            .with_context(|| format!("Failed to write download: {}", path.display()))?;
        info!("Wrote {} ({} bytes)", path.display(), self.bytes.len());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_download_is_byte_identical() {
        let source = "@article{k,\r\n title={Caf\\'e}\r\n}\n% trailing comment ü\n";
        let download = Download::from_source(source);
        assert_eq!(download.file_name, "publications.bib");
        assert_eq!(download.content_type, "text/plain");
        assert_eq!(download.bytes, source.as_bytes());
    }

    #[test]
    fn test_save_to_dir() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("nested");
        let path = Download::from_source("@misc{x,}").save_to_dir(&target).unwrap();
        assert_eq!(path, target.join("publications.bib"));
        assert_eq!(fs::read_to_string(path).unwrap(), "@misc{x,}");
    }
}
