use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use thiserror::Error;

use super::model::Dataset;

/// How many leading values per column are echoed at `debug` level.
const PREVIEW_VALUES: usize = 5;

/// Structural problems with a tabular file.
#[derive(Debug, Error, PartialEq)]
pub enum LoadError {
    #[error("file has no columns (empty or missing header row)")]
    NoColumns,

    #[error("column '{0}' appears more than once in the header")]
    DuplicateColumn(String),

    #[error("line {line}: expected {expected} fields but found {found}")]
    RaggedRow {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("line {line}, column '{column}': '{value}' is not a number")]
    NotANumber {
        line: u64,
        column: String,
        value: String,
    },
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a tabular dataset from a file.  The delimiter is picked by extension:
///
/// * `.tsv` / `.tab` – tab separated
/// * anything else  – comma separated
pub fn load_file(path: &Path) -> Result<Dataset> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening data file {}", path.display()))?;
    let dataset = load_reader(file, delimiter_for(path), path)
        .with_context(|| format!("parsing {}", path.display()))?;

    log::info!(
        "Loaded {} rows with columns {:?} from {}",
        dataset.row_count(),
        dataset.headers,
        path.display()
    );
    log_preview(&dataset);

    Ok(dataset)
}

/// Parse delimited text from any reader.  `source` is only recorded on the
/// resulting [`Dataset`].
pub fn load_reader<R: Read>(reader: R, delimiter: u8, source: &Path) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = read_headers(&mut reader)?;
    let mut columns: Vec<Vec<f64>> = vec![Vec::new(); headers.len()];

    for result in reader.records() {
        let record = result.context("reading CSV record")?;
        let line = record.position().map_or(0, |p| p.line());

        if record.len() != headers.len() {
            return Err(LoadError::RaggedRow {
                line,
                expected: headers.len(),
                found: record.len(),
            }
            .into());
        }

        for (col_idx, value) in record.iter().enumerate() {
            let parsed = parse_cell(value).ok_or_else(|| LoadError::NotANumber {
                line,
                column: headers[col_idx].clone(),
                value: value.to_string(),
            })?;
            columns[col_idx].push(parsed);
        }
    }

    Ok(Dataset {
        source: source.to_path_buf(),
        headers,
        columns,
    })
}

/// Field delimiter for a data file, chosen by extension.
pub fn delimiter_for(path: &Path) -> u8 {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "tsv" | "tab" => b'\t',
        _ => b',',
    }
}

// -- helpers --

fn read_headers<R: Read>(reader: &mut csv::Reader<R>) -> Result<Vec<String>> {
    let raw = reader.headers().context("reading CSV header")?;
    if raw.is_empty() {
        return Err(LoadError::NoColumns.into());
    }

    let headers: Vec<String> = raw
        .iter()
        .enumerate()
        .map(|(idx, h)| {
            if h.is_empty() {
                format!("Unnamed: {idx}")
            } else {
                h.to_string()
            }
        })
        .collect();

    let mut seen = BTreeSet::new();
    for h in &headers {
        if !seen.insert(h.as_str()) {
            return Err(LoadError::DuplicateColumn(h.clone()).into());
        }
    }

    Ok(headers)
}

/// Empty cells are missing values.
fn parse_cell(s: &str) -> Option<f64> {
    if s.is_empty() {
        return Some(f64::NAN);
    }
    s.parse::<f64>().ok()
}

fn log_preview(dataset: &Dataset) {
    if !log::log_enabled!(log::Level::Debug) {
        return;
    }
    for (name, values) in dataset.headers.iter().zip(dataset.columns.iter()) {
        let head: Vec<f64> = values.iter().take(PREVIEW_VALUES).copied().collect();
        log::debug!("{name}: {head:?}");
    }
}
