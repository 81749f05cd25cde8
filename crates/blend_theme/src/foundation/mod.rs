//! Foundation tokens
//!
//! The global primitive palette every component table is assembled from:
//! - Color ramps
//! - Spacing units
//! - Font sizes, weights and line heights
//! - Border radii and widths
//! - Shadows
//!
//! Component tables read these by direct lookup and never mutate them.

mod color;
mod scale;
mod shadow;

pub use color::*;
pub use scale::*;
pub use shadow::*;

use serde::Serialize;

/// The complete primitive palette
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FoundationTokens {
    pub colors: ColorPalette,
    pub unit: SpacingScale,
    pub font: FontTokens,
    pub border_radius: RadiusScale,
    pub border: BorderWidths,
    pub shadows: Shadows,
}

impl Default for FoundationTokens {
    fn default() -> Self {
        Self {
            colors: ColorPalette::default(),
            unit: SpacingScale::default(),
            font: FontTokens::default(),
            border_radius: RadiusScale::default(),
            border: BorderWidths::default(),
            shadows: Shadows::default(),
        }
    }
}
