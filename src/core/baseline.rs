use serde::{Deserialize, Serialize};

use crate::core::Layer;

/// Minimized-wiggle baseline, one value-space offset per column.
///
/// For column `i` with `m` layers in stacking order:
/// `baseline[i] = (1/m) * sum_j (m - j - 0.5) * width[j][i]`.
///
/// Returns an empty baseline when there are no layers.
#[must_use]
pub fn minimized_wiggle_baseline(layers: &[Layer]) -> Vec<f64> {
    let Some(first) = layers.first() else {
        return Vec::new();
    };
    let columns = first.len();
    let m = layers.len() as f64;

    (0..columns)
        .map(|column| {
            let weighted: f64 = layers
                .iter()
                .enumerate()
                .map(|(j, layer)| (m - j as f64 - 0.5) * layer.data[column].width)
                .sum();
            weighted / m
        })
        .collect()
}

/// Stacks layers outward from the baseline, in stacking order.
///
/// At every column the first layer's `y1` equals the baseline, and each
/// following layer starts exactly where the previous one ended
/// (`y0[j] == y1[j + 1]`).
pub fn apply_baseline(layers: &mut [Layer], baseline: &[f64]) {
    let mut current = baseline.to_vec();
    for layer in layers {
        for (datum, offset) in layer.data.iter_mut().zip(current.iter_mut()) {
            datum.y1 = *offset;
            datum.y0 = datum.y1 - datum.width;
            *offset = datum.y0;
        }
    }
}

/// Stacked extrema used to configure the value range: the smallest `y1` and
/// the largest `y0` over every layer and column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StackedExtent {
    pub min: f64,
    pub max: f64,
}

#[must_use]
pub fn stacked_extent(layers: &[Layer]) -> Option<StackedExtent> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for datum in layers.iter().flat_map(|layer| layer.data.iter()) {
        max = max.max(datum.y0);
        min = min.min(datum.y1);
    }

    (min.is_finite() && max.is_finite()).then_some(StackedExtent { min, max })
}
