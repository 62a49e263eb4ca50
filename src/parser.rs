use crate::error::{ChartError, ChartResult};
use crate::ir::{ChartData, PieSeries};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

static VALUE_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s,;]+").unwrap());

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DataFile {
    Values(Vec<f64>),
    Series(Vec<SeriesFile>),
    Wrapped { series: Vec<SeriesFile> },
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SeriesFile {
    Bare(f64),
    Full { value: f64, color: Option<String> },
}

impl From<SeriesFile> for PieSeries {
    fn from(file: SeriesFile) -> Self {
        match file {
            SeriesFile::Bare(value) => PieSeries::new(value),
            SeriesFile::Full { value, color } => PieSeries { value, color },
        }
    }
}

/// Parses chart data from JSON5 (`[1, 2]`, `[{value, color}]`,
/// `{series: [...]}`) or a plain list of numbers.
pub fn parse_chart_data(input: &str) -> ChartResult<ChartData> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(ChartData::new());
    }
    if trimmed.starts_with('[') || trimmed.starts_with('{') {
        let parsed: DataFile = json5::from_str(trimmed)?;
        let data = match parsed {
            DataFile::Values(values) => ChartData::from(values),
            DataFile::Series(series) | DataFile::Wrapped { series } => {
                ChartData::from(series.into_iter().map(PieSeries::from).collect::<Vec<_>>())
            }
        };
        return Ok(data);
    }
    parse_value_list(trimmed)
}

fn parse_value_list(input: &str) -> ChartResult<ChartData> {
    let mut data = ChartData::new();
    for token in VALUE_SEPARATOR.split(input) {
        if token.is_empty() {
            continue;
        }
        let value: f64 = token
            .parse()
            .map_err(|_| ChartError::invalid_value(token))?;
        data.push(PieSeries::new(value));
    }
    Ok(data)
}
