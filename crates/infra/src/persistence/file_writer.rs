// crates/infra/src/persistence/file_writer.rs
use std::{
    fs,
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use log::debug;
use product_grouper_ports::storage::OutputTarget;
use product_grouper_shared_kernel::{InfrastructureError, Result};

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Create a buffered writer targeting `path`.
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<BufWriter<File>> {
        File::create(path.as_ref()).map(BufWriter::new)
    }

    /// Atomically write `data` to `path` via a temp file and rename.
    /// The temp file is removed again if writing or renaming fails, so a failed
    /// call leaves the destination untouched.
    pub fn atomic_write<P: AsRef<Path>>(path: P, data: &[u8]) -> std::io::Result<()> {
        let path = path.as_ref();
        let tmp = temp_path_for(path)?;

        let result = write_and_rename(&tmp, path, data);
        if result.is_err() {
            let _ = fs::remove_file(&tmp);
        }
        result
    }
}

// Temp file lives next to the destination so the rename stays on one filesystem.
fn temp_path_for(path: &Path) -> std::io::Result<PathBuf> {
    let name = path.file_name().ok_or_else(|| std::io::Error::other("path has no file name"))?;
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    Ok(parent.join(format!(".{}.{}.{}.tmp", name.to_string_lossy(), std::process::id(), nanos)))
}

fn write_and_rename(tmp: &Path, path: &Path, data: &[u8]) -> std::io::Result<()> {
    let mut w = FileWriter::create(tmp)?;
    w.write_all(data)?;
    w.flush()?;
    let _ = w.get_ref().sync_all();
    drop(w);

    fs::rename(tmp, path)?;

    // Attempt to sync parent directory to make the rename durable on Unix.
    #[cfg(unix)]
    {
        if let Some(dir) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if let Ok(dir) = File::open(dir) {
                let _ = dir.sync_all();
            }
        }
    }

    Ok(())
}

/// Filesystem adapter implementing the `OutputTarget` port with an atomic replace.
#[derive(Debug, Default)]
pub struct AtomicFileTarget;

impl OutputTarget for AtomicFileTarget {
    fn persist(&self, path: &Path, data: &[u8]) -> Result<()> {
        debug!("writing {} bytes to {}", data.len(), path.display());
        FileWriter::atomic_write(path, data)
            .map_err(|source| InfrastructureError::FileWrite { path: path.to_path_buf(), source }.into())
    }
}
