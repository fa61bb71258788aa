// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;

/// Height assumed for geometry when a card has not been measured yet.
///
/// Only layout math uses it; renderers keep their natural height.
pub const FALLBACK_HEIGHT: f64 = 360.0;

/// Width assumed for geometry when a card has no fixed design width.
pub const FALLBACK_WIDTH: f64 = 320.0;

/// Possibly-unknown card dimensions.
///
/// Width is usually fixed by design; height is learned from a measurement
/// callback after the card first renders.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardSize {
    /// Design width, if known.
    pub width: Option<f64>,
    /// Measured height, if known.
    pub height: Option<f64>,
}

impl CardSize {
    /// A card with a fixed width and no measured height yet.
    #[must_use]
    pub const fn with_width(width: f64) -> Self {
        Self {
            width: Some(width),
            height: None,
        }
    }

    /// A card with both dimensions known.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
        }
    }

    /// Dimensions used for geometry, substituting [`FALLBACK_WIDTH`] and
    /// [`FALLBACK_HEIGHT`] for unknown values.
    #[must_use]
    pub fn resolved(&self) -> Size {
        Size::new(
            self.width.unwrap_or(FALLBACK_WIDTH),
            self.height.unwrap_or(FALLBACK_HEIGHT),
        )
    }
}
