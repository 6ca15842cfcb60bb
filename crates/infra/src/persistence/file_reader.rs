// crates/infra/src/persistence/file_reader.rs
use std::{
    fs::File,
    io::{ErrorKind, Read},
    path::Path,
};

use log::debug;
use product_grouper_ports::storage::InputSource;
use product_grouper_shared_kernel::{InfrastructureError, Result};

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path`.
    pub fn open(path: &Path) -> std::io::Result<File> {
        File::open(path)
    }

    /// Read the entire file into memory.
    pub fn read_to_end(path: &Path) -> std::io::Result<Vec<u8>> {
        let mut file = Self::open(path)?;
        let mut buf = Vec::new();
        file.read_to_end(&mut buf)?;
        Ok(buf)
    }
}

/// Filesystem adapter implementing the `InputSource` port.
#[derive(Debug, Default)]
pub struct FileInputSource;

impl InputSource for FileInputSource {
    fn load(&self, path: &Path) -> Result<Vec<u8>> {
        debug!("reading {}", path.display());
        FileReader::read_to_end(path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                InfrastructureError::InputNotFound { path: path.to_path_buf() }.into()
            } else {
                InfrastructureError::FileRead { path: path.to_path_buf(), source }.into()
            }
        })
    }
}
