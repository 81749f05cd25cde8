//! Shadow primitives

use crate::variant::{token_key, VariantTable};
use blend_core::Color;
use serde::Serialize;

token_key! {
    pub enum Elevation {
        None => "none",
        Xs => "xs",
        Sm => "sm",
        Md => "md",
        Lg => "lg",
        Focus => "focus",
    }
}

/// A box shadow definition
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Shadow {
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur: f32,
    pub spread: f32,
    pub color: Color,
}

impl Shadow {
    pub const fn new(offset_x: f32, offset_y: f32, blur: f32, spread: f32, color: Color) -> Self {
        Self {
            offset_x,
            offset_y,
            blur,
            spread,
            color,
        }
    }

    pub const fn none() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0, Color::TRANSPARENT)
    }

    /// Ring shadow with no offset or blur
    pub const fn ring(width: f32, color: Color) -> Self {
        Self::new(0.0, 0.0, 0.0, width, color)
    }
}

impl Default for Shadow {
    fn default() -> Self {
        Self::none()
    }
}

/// Shadow scale of the foundation palette
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Shadows(VariantTable<Elevation, Shadow>);

impl Shadows {
    pub fn get(&self, elevation: Elevation) -> Shadow {
        *self.0.get(elevation)
    }
}

impl Default for Shadows {
    fn default() -> Self {
        let ink = Color::from_hex(0x101828);
        Self(VariantTable::from_fn(|elevation| match elevation {
            Elevation::None => Shadow::none(),
            Elevation::Xs => Shadow::new(0.0, 1.0, 2.0, 0.0, ink.with_alpha(0.05)),
            Elevation::Sm => Shadow::new(0.0, 1.0, 3.0, 0.0, ink.with_alpha(0.1)),
            Elevation::Md => Shadow::new(0.0, 4.0, 8.0, -2.0, ink.with_alpha(0.1)),
            Elevation::Lg => Shadow::new(0.0, 12.0, 16.0, -4.0, ink.with_alpha(0.08)),
            Elevation::Focus => Shadow::ring(3.0, Color::from_hex(0x2B7FFF).with_alpha(0.25)),
        }))
    }
}
