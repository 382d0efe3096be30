use crate::core::Layer;

/// Reorders layers so they alternate outward from the center.
///
/// Each layer goes to whichever of the top/bottom buckets holds fewer layers
/// (ties go to the bottom). The result is the bottom bucket followed by the
/// top bucket, both in append order.
///
/// Buckets are balanced by count, not by layer magnitude.
#[must_use]
pub fn reorder_layers_outward(layers: Vec<Layer>) -> Vec<Layer> {
    let mut top = Vec::with_capacity(layers.len() / 2);
    let mut bottom = Vec::with_capacity(layers.len().div_ceil(2));
    let mut top_weight = 0usize;
    let mut bottom_weight = 0usize;

    for layer in layers {
        if top_weight < bottom_weight {
            top.push(layer);
            top_weight += 1;
        } else {
            bottom.push(layer);
            bottom_weight += 1;
        }
    }

    bottom.extend(top);
    bottom
}
