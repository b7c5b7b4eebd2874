//! Dataset parsing from whitespace-separated text
//!
//! Each dataset is `rows cols` followed by `rows` row tokens of exactly `cols`
//! characters. `*` marks a special cell; any other character is ordinary.
//! Datasets repeat until the input is exhausted.

use std::io::Read;
use std::str::SplitWhitespace;

use crate::io::configuration::{MAX_GRID_DIMENSION, SPECIAL_MARKER};
use crate::io::error::{Result, malformed_input};
use crate::spatial::grid::Grid;

/// Iterator over the datasets of an input text
///
/// Yields one `Grid` per dataset. After the first error the iterator is fused
/// and yields nothing more.
pub struct DatasetParser<'a> {
    tokens: SplitWhitespace<'a>,
    dataset: usize,
    failed: bool,
}

impl<'a> DatasetParser<'a> {
    /// Create a parser over the full input text
    pub fn new(input: &'a str) -> Self {
        Self {
            tokens: input.split_whitespace(),
            dataset: 0,
            failed: false,
        }
    }

    fn parse_dimension(&self, token: Option<&str>, name: &str) -> Result<usize> {
        let token = token.ok_or_else(|| {
            malformed_input(self.dataset, &format!("missing {name} after row count"))
        })?;
        let value = token.parse::<usize>().map_err(|error| {
            malformed_input(self.dataset, &format!("{name} '{token}' is not a count: {error}"))
        })?;
        if value > MAX_GRID_DIMENSION {
            return Err(malformed_input(
                self.dataset,
                &format!("{name} {value} exceeds limit {MAX_GRID_DIMENSION}"),
            ));
        }
        Ok(value)
    }

    fn parse_grid(&mut self, rows_token: &str) -> Result<Grid> {
        let rows = self.parse_dimension(Some(rows_token), "rows")?;
        let cols_token = self.tokens.next();
        let cols = self.parse_dimension(cols_token, "columns")?;

        // A zero-width row cannot be written as a token
        if cols == 0 {
            return Grid::from_markers(rows, cols, Vec::new());
        }

        // Storage grows only with validated rows
        let mut markers = Vec::new();
        for row in 0..rows {
            let token = self.tokens.next().ok_or_else(|| {
                malformed_input(
                    self.dataset,
                    &format!("input ended at row {row} of {rows}"),
                )
            })?;

            let length = token.chars().count();
            if length != cols {
                return Err(malformed_input(
                    self.dataset,
                    &format!("row {row} has {length} cells, expected {cols}"),
                ));
            }

            markers.reserve(cols);
            markers.extend(token.chars().map(|marker| marker == SPECIAL_MARKER));
        }

        Grid::from_markers(rows, cols, markers)
    }
}

impl Iterator for DatasetParser<'_> {
    type Item = Result<Grid>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let rows_token = self.tokens.next()?;
        let result = self.parse_grid(rows_token);
        self.failed = result.is_err();
        self.dataset += 1;
        Some(result)
    }
}

/// Parse every dataset of an input text
///
/// # Errors
///
/// Returns `MalformedInput` for the first dataset that cannot be parsed
pub fn parse_datasets(input: &str) -> Result<Vec<Grid>> {
    DatasetParser::new(input).collect()
}

/// Read a stream to the end and parse every dataset in it
///
/// # Errors
///
/// Returns `FileSystem` if reading fails, or `MalformedInput` for the first bad dataset
pub fn read_datasets<R: Read>(mut reader: R) -> Result<Vec<Grid>> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    parse_datasets(&input)
}
