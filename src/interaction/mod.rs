use serde::{Deserialize, Serialize};

use crate::core::{HitResult, Layer};

/// Layer and column currently under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HoverState {
    pub layer_index: Option<usize>,
    pub column_index: Option<usize>,
}

impl HoverState {
    #[must_use]
    pub fn from_hit(hit: HitResult) -> Self {
        Self {
            layer_index: hit.layer_index,
            column_index: hit.column_index,
        }
    }

    #[must_use]
    pub fn is_active(self) -> bool {
        self.layer_index.is_some()
    }
}

/// Whether a pointer event changed what is hovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoverTransition {
    Unchanged,
    Changed { previous: HoverState, current: HoverState },
}

impl HoverTransition {
    #[must_use]
    pub fn needs_redraw(self) -> bool {
        matches!(self, Self::Changed { .. })
    }
}

/// Pointer position plus resolved hover, owned by one chart instance.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InteractionState {
    cursor: Option<(f64, f64)>,
    hover: HoverState,
}

impl InteractionState {
    #[must_use]
    pub fn cursor(self) -> Option<(f64, f64)> {
        self.cursor
    }

    #[must_use]
    pub fn hover(self) -> HoverState {
        self.hover
    }

    /// Records the pointer and the hit it resolved to.
    pub fn on_pointer_move(&mut self, x: f64, y: f64, hit: HitResult) -> HoverTransition {
        self.cursor = Some((x, y));
        self.replace_hover(HoverState::from_hit(hit))
    }

    pub fn on_pointer_leave(&mut self) -> HoverTransition {
        self.cursor = None;
        self.replace_hover(HoverState::default())
    }

    /// Drops hover without a pointer event, e.g. after the layers were rebuilt.
    pub fn reset(&mut self) {
        self.cursor = None;
        self.hover = HoverState::default();
    }

    fn replace_hover(&mut self, current: HoverState) -> HoverTransition {
        let previous = self.hover;
        if previous == current {
            return HoverTransition::Unchanged;
        }
        self.hover = current;
        HoverTransition::Changed { previous, current }
    }
}

/// Sets `hover` on the hovered layer and clears it everywhere else.
pub fn apply_hover_flags(layers: &mut [Layer], hover: HoverState) {
    for (index, layer) in layers.iter_mut().enumerate() {
        layer.hover = hover.layer_index == Some(index);
    }
}
