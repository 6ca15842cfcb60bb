// crates/infra/src/persistence.rs
mod file_reader;
mod file_writer;

pub use file_reader::{FileInputSource, FileReader};
pub use file_writer::{AtomicFileTarget, FileWriter};
