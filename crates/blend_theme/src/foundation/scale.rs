//! Spacing, typography, radius and border scales

use crate::variant::{token_key, VariantTable};
use serde::Serialize;

token_key! {
    /// Spacing units in logical pixels
    pub enum Unit {
        U0 => "0",
        U2 => "2",
        U4 => "4",
        U6 => "6",
        U8 => "8",
        U10 => "10",
        U12 => "12",
        U14 => "14",
        U16 => "16",
        U20 => "20",
        U24 => "24",
        U32 => "32",
        U40 => "40",
    }
}

/// Spacing scale
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SpacingScale(VariantTable<Unit, f32>);

impl SpacingScale {
    pub fn get(&self, unit: Unit) -> f32 {
        *self.0.get(unit)
    }
}

impl Default for SpacingScale {
    fn default() -> Self {
        Self(VariantTable::from_fn(|unit| match unit {
            Unit::U0 => 0.0,
            Unit::U2 => 2.0,
            Unit::U4 => 4.0,
            Unit::U6 => 6.0,
            Unit::U8 => 8.0,
            Unit::U10 => 10.0,
            Unit::U12 => 12.0,
            Unit::U14 => 14.0,
            Unit::U16 => 16.0,
            Unit::U20 => 20.0,
            Unit::U24 => 24.0,
            Unit::U32 => 32.0,
            Unit::U40 => 40.0,
        }))
    }
}

token_key! {
    /// Font size steps
    pub enum FontSize {
        BodyXs => "body.xs",
        BodySm => "body.sm",
        BodyMd => "body.md",
        BodyLg => "body.lg",
        HeadingSm => "heading.sm",
        HeadingMd => "heading.md",
        HeadingLg => "heading.lg",
    }
}

token_key! {
    pub enum FontWeight {
        Regular => "400",
        Medium => "500",
        Semibold => "600",
        Bold => "700",
    }
}

/// Typography primitives
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FontTokens {
    pub family: String,
    pub size: VariantTable<FontSize, f32>,
    pub line_height: VariantTable<FontSize, f32>,
    pub weight: VariantTable<FontWeight, u16>,
}

impl FontTokens {
    pub fn size(&self, size: FontSize) -> f32 {
        *self.size.get(size)
    }

    pub fn line_height(&self, size: FontSize) -> f32 {
        *self.line_height.get(size)
    }

    pub fn weight(&self, weight: FontWeight) -> u16 {
        *self.weight.get(weight)
    }
}

impl Default for FontTokens {
    fn default() -> Self {
        Self {
            family: "Inter".to_string(),
            size: VariantTable::from_fn(|size| match size {
                FontSize::BodyXs => 12.0,
                FontSize::BodySm => 13.0,
                FontSize::BodyMd => 14.0,
                FontSize::BodyLg => 16.0,
                FontSize::HeadingSm => 18.0,
                FontSize::HeadingMd => 20.0,
                FontSize::HeadingLg => 24.0,
            }),
            line_height: VariantTable::from_fn(|size| match size {
                FontSize::BodyXs => 18.0,
                FontSize::BodySm => 20.0,
                FontSize::BodyMd => 20.0,
                FontSize::BodyLg => 24.0,
                FontSize::HeadingSm => 26.0,
                FontSize::HeadingMd => 28.0,
                FontSize::HeadingLg => 32.0,
            }),
            weight: VariantTable::from_fn(|weight| match weight {
                FontWeight::Regular => 400,
                FontWeight::Medium => 500,
                FontWeight::Semibold => 600,
                FontWeight::Bold => 700,
            }),
        }
    }
}

token_key! {
    pub enum Radius {
        None => "0",
        R2 => "2",
        R4 => "4",
        R6 => "6",
        R8 => "8",
        R10 => "10",
        R12 => "12",
        R16 => "16",
        Full => "full",
    }
}

/// Border radius scale
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RadiusScale(VariantTable<Radius, f32>);

impl RadiusScale {
    pub fn get(&self, radius: Radius) -> f32 {
        *self.0.get(radius)
    }
}

impl Default for RadiusScale {
    fn default() -> Self {
        Self(VariantTable::from_fn(|radius| match radius {
            Radius::None => 0.0,
            Radius::R2 => 2.0,
            Radius::R4 => 4.0,
            Radius::R6 => 6.0,
            Radius::R8 => 8.0,
            Radius::R10 => 10.0,
            Radius::R12 => 12.0,
            Radius::R16 => 16.0,
            Radius::Full => 9999.0,
        }))
    }
}

/// Border widths
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BorderWidths {
    pub none: f32,
    pub thin: f32,
    pub thick: f32,
}

impl Default for BorderWidths {
    fn default() -> Self {
        Self {
            none: 0.0,
            thin: 1.0,
            thick: 2.0,
        }
    }
}
