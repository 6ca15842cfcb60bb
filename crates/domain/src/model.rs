pub mod header;
pub mod record;

pub use header::Header;
pub use record::Record;
