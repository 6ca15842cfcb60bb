use log::{debug, info};
use product_grouper_domain::{
    analytics::{AggregationResult, Aggregator},
    config::GroupingConfig,
    model::{Header, Record},
    validation::validate_required_fields,
};
use product_grouper_ports::{
    dataset::{DatasetReader, RawDataset},
    storage::{InputSource, OutputTarget},
    table::{GroupTable, GroupTableWriter, GroupedRow},
};
use product_grouper_shared_kernel::Result;

use crate::dto::{GroupingOutput, GroupingRequest};

/// Groups the records of one input document by the configured fields and
/// persists the counted combinations.
///
/// Nothing reaches the output target unless every earlier step succeeded.
pub struct GroupCombinations<'a> {
    source: &'a dyn InputSource,
    reader: &'a dyn DatasetReader,
    writer: &'a dyn GroupTableWriter,
    target: &'a dyn OutputTarget,
    config: &'a GroupingConfig,
}

impl<'a> GroupCombinations<'a> {
    pub fn new(
        source: &'a dyn InputSource,
        reader: &'a dyn DatasetReader,
        writer: &'a dyn GroupTableWriter,
        target: &'a dyn OutputTarget,
        config: &'a GroupingConfig,
    ) -> Self {
        Self { source, reader, writer, target, config }
    }

    pub fn run(&self, request: &GroupingRequest) -> Result<GroupingOutput> {
        let bytes = self.source.load(&request.input)?;
        debug!("loaded {} bytes from {}", bytes.len(), request.input.display());

        let result = self.group(&bytes)?;
        let table = result_to_table(&result, self.config);

        let mut encoded = Vec::new();
        self.writer.write(&table, &mut encoded)?;
        self.target.persist(&request.output, &encoded)?;

        info!(
            "grouped {} records into {} combinations -> {}",
            result.total_records(),
            result.len(),
            request.output.display()
        );
        Ok(GroupingOutput {
            records_read: result.total_records(),
            groups_written: result.len(),
            output: request.output.clone(),
        })
    }

    /// Decodes, validates and aggregates an in-memory document.
    pub fn group(&self, input: &[u8]) -> Result<AggregationResult> {
        let (header, records) = dataset_to_domain(self.reader.read(input)?);
        debug!("header [{header}] with {} records", records.len());

        validate_required_fields(&header, self.config.required_fields())?;
        Ok(Aggregator::new(self.config).aggregate(&records))
    }
}

fn dataset_to_domain(dataset: RawDataset) -> (Header, Vec<Record>) {
    let header: Header = dataset.header.into_iter().collect();
    let records = dataset.records.into_iter().map(|raw| Record::from_pairs(raw.fields)).collect();
    (header, records)
}

fn result_to_table(result: &AggregationResult, config: &GroupingConfig) -> GroupTable {
    GroupTable {
        columns: result.fields().iter().map(|f| f.to_string()).collect(),
        count_column: config.count_field().to_string(),
        rows: result
            .entries()
            .map(|entry| GroupedRow { values: entry.values().to_vec(), count: entry.count() })
            .collect(),
    }
}
