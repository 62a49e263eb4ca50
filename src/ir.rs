/// Values drawn by the stock demo chart.
pub const SAMPLE_VALUES: [f64; 6] = [48.0, 21.0, 65.0, 30.0, 16.0, 2.0];

#[derive(Debug, Clone, PartialEq)]
pub struct PieSeries {
    pub value: f64,
    pub color: Option<String>,
}

impl PieSeries {
    pub fn new(value: f64) -> Self {
        Self { value, color: None }
    }

    pub fn with_color(value: f64, color: impl Into<String>) -> Self {
        Self {
            value,
            color: Some(color.into()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartData {
    pub series: Vec<PieSeries>,
}

impl ChartData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sample() -> Self {
        Self::from(&SAMPLE_VALUES[..])
    }

    pub fn push(&mut self, series: PieSeries) {
        self.series.push(series);
    }

    pub fn values(&self) -> Vec<f64> {
        self.series.iter().map(|series| series.value).collect()
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

impl From<&[f64]> for ChartData {
    fn from(values: &[f64]) -> Self {
        Self {
            series: values.iter().copied().map(PieSeries::new).collect(),
        }
    }
}

impl From<Vec<f64>> for ChartData {
    fn from(values: Vec<f64>) -> Self {
        Self::from(values.as_slice())
    }
}

impl From<Vec<PieSeries>> for ChartData {
    fn from(series: Vec<PieSeries>) -> Self {
        Self { series }
    }
}
