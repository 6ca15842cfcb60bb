// src/config.rs
use std::path::PathBuf;

use product_grouper_domain::{config::GroupingConfig, options::DataFormat};
use product_grouper_shared_kernel::DomainError;

use crate::args::Args;

/// Validated settings for one run, resolved once from the command line.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub input_format: DataFormat,
    pub output_format: DataFormat,
    pub verbose: bool,
    pub grouping: GroupingConfig,
}

impl TryFrom<Args> for RunConfig {
    type Error = DomainError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let input_format: DataFormat = args.format.parse()?;
        let output_format = match args.output_format.as_deref() {
            Some(value) => value.parse()?,
            None => input_format,
        };
        Ok(Self {
            input: args.file,
            output: args.unique_combinations,
            input_format,
            output_format,
            verbose: args.verbose,
            grouping: GroupingConfig::default(),
        })
    }
}
