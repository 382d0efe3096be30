use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid color `{input}`")]
    InvalidColor { input: String },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

/// Fatal dataset preconditions checked before any layout or drawing happens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("dataset collection must not be empty")]
    EmptyDatasets,

    #[error("series {series} has no data sequence")]
    MissingSeriesData { series: usize },

    #[error("series {series} has an empty data sequence")]
    EmptySeriesData { series: usize },

    #[error("all series must have the same length")]
    MismatchedSeriesLengths,
}
