use crate::core::Series;
use crate::error::ConfigurationError;

/// Checks that every series carries data and reports whether lengths agree.
///
/// Missing or empty data is always an error, whatever the other series look
/// like. A length mismatch is reported as `Ok(false)`; callers decide how to
/// surface it (the layout pipeline treats it as fatal).
pub fn datasets_same_length(datasets: &[Series]) -> Result<bool, ConfigurationError> {
    if datasets.is_empty() {
        return Err(ConfigurationError::EmptyDatasets);
    }

    let mut lengths = Vec::with_capacity(datasets.len());
    for (series, dataset) in datasets.iter().enumerate() {
        match dataset.data.as_deref() {
            None => return Err(ConfigurationError::MissingSeriesData { series }),
            Some([]) => return Err(ConfigurationError::EmptySeriesData { series }),
            Some(values) => lengths.push(values.len()),
        }
    }

    let first = lengths[0];
    Ok(lengths.iter().all(|&len| len == first))
}

/// Validates datasets and turns a length mismatch into a fatal error.
///
/// Returns the shared column count.
pub fn validate_datasets(datasets: &[Series]) -> Result<usize, ConfigurationError> {
    if !datasets_same_length(datasets)? {
        return Err(ConfigurationError::MismatchedSeriesLengths);
    }
    Ok(datasets[0].data.as_ref().map_or(0, Vec::len))
}
