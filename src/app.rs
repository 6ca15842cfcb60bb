// src/app.rs
use anyhow::Result;
use log::debug;
use product_grouper_infra::{AtomicFileTarget, FileInputSource, FormatAdapter};
use product_grouper_usecase::{GroupCombinations, GroupingOutput, GroupingRequest};

use crate::config::RunConfig;

/// Runs one grouping pass with the filesystem and the configured format adapters.
pub fn run(config: &RunConfig) -> Result<GroupingOutput> {
    debug!(
        "product_grouper v{} · {} -> {}",
        crate::VERSION,
        config.input_format,
        config.output_format
    );

    let reader = FormatAdapter::for_format(config.input_format);
    let writer = FormatAdapter::for_format(config.output_format);
    let command = GroupCombinations::new(&FileInputSource, &reader, &writer, &AtomicFileTarget, &config.grouping);

    let request = GroupingRequest { input: config.input.clone(), output: config.output.clone() };
    Ok(command.run(&request)?)
}
