// crates/ports/src/storage.rs
use std::path::Path;

use product_grouper_shared_kernel::Result;

/// Port for loading a whole input document into memory.
pub trait InputSource {
    fn load(&self, path: &Path) -> Result<Vec<u8>>;
}

/// Port for persisting a complete output document in one pass.
///
/// Implementations must leave no partially written destination behind on failure.
pub trait OutputTarget {
    fn persist(&self, path: &Path, data: &[u8]) -> Result<()>;
}
