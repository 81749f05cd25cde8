//! Tag tokens
//!
//! Tags fan out over seven semantic colors, three fill variants, four sizes
//! and two shapes. Colors vary by scheme; sizing varies by breakpoint.

use super::{ComponentTokens, Padding};
use crate::breakpoint::{Breakpoint, Responsive};
use crate::foundation::{ColorRamp, FontSize, FontTokens, FontWeight, FoundationTokens, Radius, Shade, Unit};
use crate::registry::{SchemeTables, TokenRegistry};
use crate::theme::ColorScheme;
use crate::variant::{token_key, VariantTable};
use blend_core::Color;
use serde::Serialize;

token_key! {
    /// Semantic tag color
    pub enum TagColor {
        Neutral => "neutral",
        Primary => "primary",
        Success => "success",
        Error => "error",
        Warning => "warning",
        Purple => "purple",
        Orange => "orange",
    }
}

token_key! {
    /// Fill treatment
    pub enum TagVariant {
        NoFill => "noFill",
        Attentive => "attentive",
        Subtle => "subtle",
    }
}

token_key! {
    pub enum TagSize {
        Xs => "xs",
        Sm => "sm",
        Md => "md",
        Lg => "lg",
    }
}

token_key! {
    pub enum TagShape {
        Rounded => "rounded",
        Squarical => "squarical",
    }
}

/// Color table indexed by variant, then semantic color
pub type TagColorTable = VariantTable<TagVariant, VariantTable<TagColor, Color>>;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TagTokens {
    pub background_color: TagColorTable,
    pub color: TagColorTable,
    pub border_color: TagColorTable,
    pub border_width: VariantTable<TagVariant, f32>,
    pub border_radius: VariantTable<TagShape, VariantTable<TagSize, f32>>,
    pub padding: VariantTable<TagSize, Padding>,
    pub gap: VariantTable<TagSize, f32>,
    pub height: VariantTable<TagSize, f32>,
    pub font_size: VariantTable<TagSize, f32>,
    pub font_weight: VariantTable<TagSize, u16>,
}

impl TagTokens {
    pub fn background(&self, variant: TagVariant, color: TagColor) -> Color {
        self.background_color[variant][color]
    }

    pub fn text_color(&self, variant: TagVariant, color: TagColor) -> Color {
        self.color[variant][color]
    }

    pub fn border(&self, variant: TagVariant, color: TagColor) -> Color {
        self.border_color[variant][color]
    }

    pub fn radius(&self, shape: TagShape, size: TagSize) -> f32 {
        self.border_radius[shape][size]
    }
}

fn ramp(foundation: &FoundationTokens, color: TagColor) -> &ColorRamp {
    let palette = &foundation.colors;
    match color {
        TagColor::Neutral => &palette.gray,
        TagColor::Primary => &palette.primary,
        TagColor::Success => &palette.green,
        TagColor::Error => &palette.red,
        TagColor::Warning => &palette.yellow,
        TagColor::Purple => &palette.purple,
        TagColor::Orange => &palette.orange,
    }
}

/// (background, text, border) for one variant/color pair
fn tag_colors(
    foundation: &FoundationTokens,
    scheme: ColorScheme,
    variant: TagVariant,
    color: TagColor,
) -> (Color, Color, Color) {
    let ramp = ramp(foundation, color);
    let gray = &foundation.colors.gray;
    match (scheme, variant) {
        (ColorScheme::Light, TagVariant::NoFill) => (
            foundation.colors.white,
            ramp.get(Shade::S700),
            ramp.get(Shade::S600),
        ),
        (ColorScheme::Light, TagVariant::Attentive) => (
            ramp.get(Shade::S600),
            foundation.colors.white,
            ramp.get(Shade::S600),
        ),
        (ColorScheme::Light, TagVariant::Subtle) => (
            ramp.get(Shade::S50),
            ramp.get(Shade::S700),
            ramp.get(Shade::S100),
        ),
        (ColorScheme::Dark, TagVariant::NoFill) => (
            gray.get(Shade::S1000),
            ramp.get(Shade::S300),
            ramp.get(Shade::S400),
        ),
        (ColorScheme::Dark, TagVariant::Attentive) => (
            ramp.get(Shade::S500),
            gray.get(Shade::S1000),
            ramp.get(Shade::S500),
        ),
        (ColorScheme::Dark, TagVariant::Subtle) => (
            ramp.get(Shade::S900),
            ramp.get(Shade::S200),
            ramp.get(Shade::S800),
        ),
    }
}

fn color_table(
    foundation: &FoundationTokens,
    scheme: ColorScheme,
    pick: impl Fn((Color, Color, Color)) -> Color,
) -> TagColorTable {
    VariantTable::from_fn(|variant| {
        VariantTable::from_fn(|color| pick(tag_colors(foundation, scheme, variant, color)))
    })
}

fn font_size(font: &FontTokens, size: TagSize) -> f32 {
    match size {
        TagSize::Xs | TagSize::Sm => font.size(FontSize::BodyXs),
        TagSize::Md => font.size(FontSize::BodySm),
        TagSize::Lg => font.size(FontSize::BodyMd),
    }
}

fn build_for(foundation: &FoundationTokens, scheme: ColorScheme, bp: Breakpoint) -> TagTokens {
    let unit = &foundation.unit;
    let radius = &foundation.border_radius;
    // Small screens get taller tags for touch targets
    let touch = matches!(bp, Breakpoint::Sm);

    TagTokens {
        background_color: color_table(foundation, scheme, |(bg, _, _)| bg),
        color: color_table(foundation, scheme, |(_, text, _)| text),
        border_color: color_table(foundation, scheme, |(_, _, border)| border),
        border_width: VariantTable::splat(foundation.border.thin),
        border_radius: VariantTable::from_fn(|shape| {
            VariantTable::from_fn(|size| match (shape, size) {
                (TagShape::Rounded, _) => radius.get(Radius::Full),
                (TagShape::Squarical, TagSize::Xs | TagSize::Sm) => radius.get(Radius::R6),
                (TagShape::Squarical, TagSize::Md) => radius.get(Radius::R6),
                (TagShape::Squarical, TagSize::Lg) => radius.get(Radius::R8),
            })
        }),
        padding: VariantTable::from_fn(|size| {
            let (x, y) = match size {
                TagSize::Xs => (Unit::U6, Unit::U2),
                TagSize::Sm => (Unit::U8, Unit::U2),
                TagSize::Md => (Unit::U10, Unit::U4),
                TagSize::Lg => (Unit::U12, Unit::U4),
            };
            let y = if touch { unit.get(y) + 2.0 } else { unit.get(y) };
            Padding::new(unit.get(x), y)
        }),
        gap: VariantTable::from_fn(|size| match size {
            TagSize::Xs | TagSize::Sm => unit.get(Unit::U4),
            TagSize::Md | TagSize::Lg => unit.get(Unit::U6),
        }),
        height: VariantTable::from_fn(|size| {
            let base = match size {
                TagSize::Xs => 20.0,
                TagSize::Sm => 22.0,
                TagSize::Md => 24.0,
                TagSize::Lg => 28.0,
            };
            if touch {
                base + 4.0
            } else {
                base
            }
        }),
        font_size: VariantTable::from_fn(|size| font_size(&foundation.font, size)),
        font_weight: VariantTable::splat(foundation.font.weight(FontWeight::Semibold)),
    }
}

impl ComponentTokens for TagTokens {
    const NAME: &'static str = "tag";

    fn build(foundation: &FoundationTokens, scheme: ColorScheme) -> Responsive<Self> {
        Responsive::from_fn(|bp| build_for(foundation, scheme, bp))
    }

    fn tables(registry: &TokenRegistry) -> &SchemeTables<Self> {
        &registry.tag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attentive_light_uses_600_fill() {
        let foundation = FoundationTokens::default();
        let tokens = TagTokens::build(&foundation, ColorScheme::Light);
        assert_eq!(
            tokens.lg.background(TagVariant::Attentive, TagColor::Error),
            foundation.colors.red.get(Shade::S600)
        );
        assert_eq!(
            tokens.lg.text_color(TagVariant::Attentive, TagColor::Error),
            Color::WHITE
        );
    }

    #[test]
    fn small_breakpoint_is_taller() {
        let tokens = TagTokens::build(&FoundationTokens::default(), ColorScheme::Light);
        assert!(tokens.sm.height[TagSize::Md] > tokens.lg.height[TagSize::Md]);
        assert_eq!(tokens.sm.background_color, tokens.lg.background_color);
    }

    #[test]
    fn rounded_shape_is_pill() {
        let tokens = TagTokens::build(&FoundationTokens::default(), ColorScheme::Dark);
        assert_eq!(tokens.lg.radius(TagShape::Rounded, TagSize::Xs), 9999.0);
        assert_eq!(tokens.lg.radius(TagShape::Squarical, TagSize::Lg), 8.0);
    }
}
