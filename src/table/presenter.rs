use crate::error::Result;
use crate::github::types::Record;
use crate::table::fields::{self, FieldSpec, FIELDS};
use crate::table::render::Table;
use itertools::Itertools;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationMode {
    Default,
    GroupBy(&'static FieldSpec),
    SortByName,
}

impl PresentationMode {
    /// Grouping takes precedence over sorting when both are requested.
    pub fn from_flags(group: Option<&str>, sort: bool) -> Result<Self> {
        match group {
            Some(name) => fields::lookup(name).map(PresentationMode::GroupBy),
            None if sort => Ok(PresentationMode::SortByName),
            None => Ok(PresentationMode::Default),
        }
    }
}

pub fn build_table(records: &[Record], mode: PresentationMode) -> Table {
    match mode {
        PresentationMode::Default => field_table(records.iter()),
        PresentationMode::SortByName => {
            field_table(records.iter().sorted_by_cached_key(|r| r.name.to_lowercase()))
        }
        PresentationMode::GroupBy(field) => grouped_table(records, field),
    }
}

fn field_table<'a>(records: impl Iterator<Item = &'a Record>) -> Table {
    let mut table = Table::new(fields::field_names().map(str::to_string).collect());
    for record in records {
        table.push(FIELDS.iter().map(|f| f.extract(record)).collect());
    }
    table
}

/// Buckets keep first-encounter order; names inside a bucket keep fetch order.
fn grouped_table(records: &[Record], field: &FieldSpec) -> Table {
    let mut buckets: Vec<(String, Vec<&str>)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        let key = field.extract(record);
        match index.get(&key) {
            Some(&i) => buckets[i].1.push(record.name.as_str()),
            None => {
                index.insert(key.clone(), buckets.len());
                buckets.push((key, vec![record.name.as_str()]));
            }
        }
    }

    let mut table = Table::new(vec![field.name.to_string(), "Repository".to_string()]);
    for (key, names) in buckets {
        table.push(vec![key, names.join("\n")]);
    }
    table
}
