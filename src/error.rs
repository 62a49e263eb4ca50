pub type ChartResult<T> = Result<T, ChartError>;

#[derive(thiserror::Error, Debug)]
pub enum ChartError {
    #[error("invalid data value `{token}`")]
    InvalidValue { token: String },

    #[error("malformed chart data: {0}")]
    Data(#[from] json5::Error),

    #[error("segment index {index} out of range (chart has {len} segments)")]
    SegmentOutOfRange { index: usize, len: usize },

    #[error("chart has not been initialized")]
    NotInitialized,
}

impl ChartError {
    pub fn invalid_value(token: impl Into<String>) -> Self {
        Self::InvalidValue {
            token: token.into(),
        }
    }
}
