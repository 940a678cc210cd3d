//! Streamed reader for the delimiter-separated postal-code table.

use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use regionfix_model::RegionPair;
use tracing::debug;

use crate::error::ReferenceError;

/// Column layout of the reference dataset.
///
/// The defaults describe `tr_postal_codes.csv`:
/// `il;ilce;semt_bucak_belde;Mahalle;PK;...` with a header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetLayout {
    pub delimiter: u8,
    pub province_column: usize,
    pub district_column: usize,
    pub has_header: bool,
}

impl Default for DatasetLayout {
    fn default() -> Self {
        Self {
            delimiter: b';',
            province_column: 0,
            district_column: 1,
            has_header: true,
        }
    }
}

impl DatasetLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_columns(mut self, province: usize, district: usize) -> Self {
        self.province_column = province;
        self.district_column = district;
        self
    }

    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    fn validate(&self) -> Result<(), ReferenceError> {
        if self.province_column == self.district_column {
            return Err(ReferenceError::InvalidLayout {
                message: format!(
                    "province and district share column {}",
                    self.province_column
                ),
            });
        }
        Ok(())
    }

    fn pair_from(&self, record: &StringRecord) -> Option<RegionPair> {
        let province = record
            .get(self.province_column)?
            .trim_matches('\u{feff}')
            .trim();
        let district = record.get(self.district_column)?.trim();
        if province.is_empty() || district.is_empty() {
            return None;
        }
        Some(RegionPair::new(province, district))
    }
}

/// Streams every usable (province, district) row of the dataset into `visit`.
///
/// Rows are yielded in file order, duplicates included. Rows with a missing
/// or blank province/district, and rows that are not valid UTF-8, are
/// skipped. Quotes carry no meaning, so a stray `"` stays inside its own
/// field. Only I/O failures abort the read.
pub fn visit_region_pairs(
    path: &Path,
    layout: &DatasetLayout,
    mut visit: impl FnMut(RegionPair),
) -> Result<(), ReferenceError> {
    layout.validate()?;
    let file = File::open(path).map_err(|err| ReferenceError::io(path, err))?;
    let mut reader = ReaderBuilder::new()
        .delimiter(layout.delimiter)
        .has_headers(layout.has_header)
        .quoting(false)
        .flexible(true)
        .from_reader(file);

    let mut skipped = 0usize;
    for (line, record) in reader.records().enumerate() {
        let record = match record {
            Ok(record) => record,
            Err(err) if err.is_io_error() => return Err(ReferenceError::csv(path, err)),
            Err(err) => {
                debug!(line, error = %err, "skipping unreadable dataset row");
                skipped += 1;
                continue;
            }
        };
        match layout.pair_from(&record) {
            Some(pair) => visit(pair),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        debug!(path = %path.display(), skipped, "dataset rows skipped");
    }
    Ok(())
}

/// Reads every usable row into memory. See [`visit_region_pairs`].
pub fn read_region_pairs(
    path: &Path,
    layout: &DatasetLayout,
) -> Result<Vec<RegionPair>, ReferenceError> {
    let mut pairs = Vec::new();
    visit_region_pairs(path, layout, |pair| pairs.push(pair))?;
    Ok(pairs)
}
