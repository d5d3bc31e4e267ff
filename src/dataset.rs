use crate::errors::DatasetError;
use crate::models::{COUNTRY_COLUMN, Metric, RANK_COLUMN, Row};
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::info;

/// The immutable table every view is derived from.
///
/// Rows keep the order of the data file. A `Dataset` is never empty and its
/// country names and ranks are unique; the constructors reject anything else.
#[derive(Debug, Clone)]
pub struct Dataset {
    rows: Vec<Row>,
    by_name: HashMap<String, usize>,
}

impl Dataset {
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let file = File::open(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::from_reader(file)?;
        info!(
            "loaded {} countries from {}",
            dataset.len(),
            path.display()
        );
        Ok(dataset)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        let required = [RANK_COLUMN, COUNTRY_COLUMN]
            .into_iter()
            .chain(Metric::ALL.iter().map(|metric| metric.column()));
        for column in required {
            if !headers.iter().any(|header| header == column) {
                return Err(DatasetError::MissingColumn(column));
            }
        }

        let mut rows = Vec::new();
        for result in reader.deserialize() {
            let row: Row = result?;
            rows.push(row);
        }

        Self::from_rows(rows)
    }

    pub fn from_rows(rows: Vec<Row>) -> Result<Self, DatasetError> {
        if rows.is_empty() {
            return Err(DatasetError::Empty);
        }

        let mut by_name = HashMap::with_capacity(rows.len());
        let mut ranks = HashSet::with_capacity(rows.len());
        for (index, row) in rows.iter().enumerate() {
            validate_row(row)?;
            if by_name.insert(row.country.clone(), index).is_some() {
                return Err(DatasetError::DuplicateCountry(row.country.clone()));
            }
            if !ranks.insert(row.rank) {
                return Err(DatasetError::DuplicateRank(row.rank));
            }
        }

        Ok(Self { rows, by_name })
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub(crate) fn position(&self, country: &str) -> Option<usize> {
        self.by_name.get(country).copied()
    }
}

fn validate_row(row: &Row) -> Result<(), DatasetError> {
    if row.country.is_empty() {
        return Err(DatasetError::InvalidValue {
            country: format!("rank {}", row.rank),
            column: COUNTRY_COLUMN,
            value: String::new(),
        });
    }
    if row.rank == 0 {
        return Err(DatasetError::InvalidValue {
            country: row.country.clone(),
            column: RANK_COLUMN,
            value: row.rank.to_string(),
        });
    }
    for metric in Metric::ALL {
        let value = row.value(metric);
        if !value.is_finite() || value < 0.0 {
            return Err(DatasetError::InvalidValue {
                country: row.country.clone(),
                column: metric.column(),
                value: value.to_string(),
            });
        }
    }
    Ok(())
}
