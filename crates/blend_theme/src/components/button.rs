//! Button tokens

use super::{ComponentTokens, Padding};
use crate::breakpoint::{Breakpoint, Responsive};
use crate::foundation::{
    ColorRamp, Elevation, FontSize, FontWeight, FoundationTokens, Radius, Shade, Shadow, Unit,
};
use crate::registry::{SchemeTables, TokenRegistry};
use crate::theme::ColorScheme;
use crate::variant::{token_key, VariantTable};
use blend_core::Color;
use serde::Serialize;

token_key! {
    pub enum ButtonType {
        Primary => "primary",
        Secondary => "secondary",
        Danger => "danger",
        Success => "success",
    }
}

token_key! {
    pub enum ButtonSubType {
        Default => "default",
        IconOnly => "iconOnly",
        Inline => "inline",
    }
}

token_key! {
    pub enum ButtonSize {
        Sm => "sm",
        Md => "md",
        Lg => "lg",
    }
}

token_key! {
    /// Interaction state
    pub enum ButtonState {
        Default => "default",
        Hover => "hover",
        Active => "active",
        Disabled => "disabled",
    }
}

/// Color table indexed by type, sub-type, then state
pub type ButtonColorTable =
    VariantTable<ButtonType, VariantTable<ButtonSubType, VariantTable<ButtonState, Color>>>;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ButtonTokens {
    pub background_color: ButtonColorTable,
    pub color: ButtonColorTable,
    pub border_color: ButtonColorTable,
    pub border_radius: VariantTable<ButtonSize, f32>,
    pub padding: VariantTable<ButtonSize, VariantTable<ButtonSubType, Padding>>,
    pub gap: f32,
    pub font_size: VariantTable<ButtonSize, f32>,
    pub font_weight: u16,
    pub focus_ring: Shadow,
}

impl ButtonTokens {
    pub fn background(&self, ty: ButtonType, sub: ButtonSubType, state: ButtonState) -> Color {
        self.background_color[ty][sub][state]
    }

    pub fn text_color(&self, ty: ButtonType, sub: ButtonSubType, state: ButtonState) -> Color {
        self.color[ty][sub][state]
    }

    pub fn border(&self, ty: ButtonType, sub: ButtonSubType, state: ButtonState) -> Color {
        self.border_color[ty][sub][state]
    }
}

struct StateColors {
    background: Color,
    text: Color,
    border: Color,
}

fn filled(ramp: &ColorRamp, on: Color, scheme: ColorScheme, state: ButtonState) -> StateColors {
    let shade = match (scheme, state) {
        (ColorScheme::Light, ButtonState::Default) => Shade::S600,
        (ColorScheme::Light, ButtonState::Hover) => Shade::S500,
        (ColorScheme::Light, ButtonState::Active) => Shade::S700,
        (ColorScheme::Light, ButtonState::Disabled) => Shade::S300,
        (ColorScheme::Dark, ButtonState::Default) => Shade::S500,
        (ColorScheme::Dark, ButtonState::Hover) => Shade::S400,
        (ColorScheme::Dark, ButtonState::Active) => Shade::S600,
        (ColorScheme::Dark, ButtonState::Disabled) => Shade::S800,
    };
    StateColors {
        background: ramp.get(shade),
        text: on,
        border: ramp.get(shade),
    }
}

fn inline(ramp: &ColorRamp, scheme: ColorScheme, state: ButtonState) -> StateColors {
    let shade = match (scheme, state) {
        (ColorScheme::Light, ButtonState::Default) => Shade::S600,
        (ColorScheme::Light, ButtonState::Hover) => Shade::S700,
        (ColorScheme::Light, ButtonState::Active) => Shade::S800,
        (ColorScheme::Light, ButtonState::Disabled) => Shade::S300,
        (ColorScheme::Dark, ButtonState::Default) => Shade::S400,
        (ColorScheme::Dark, ButtonState::Hover) => Shade::S300,
        (ColorScheme::Dark, ButtonState::Active) => Shade::S200,
        (ColorScheme::Dark, ButtonState::Disabled) => Shade::S700,
    };
    StateColors {
        background: Color::TRANSPARENT,
        text: ramp.get(shade),
        border: Color::TRANSPARENT,
    }
}

fn outlined(gray: &ColorRamp, scheme: ColorScheme, state: ButtonState) -> StateColors {
    let (bg, text, border) = match (scheme, state) {
        (ColorScheme::Light, ButtonState::Default) => (Shade::S0, Shade::S700, Shade::S200),
        (ColorScheme::Light, ButtonState::Hover) => (Shade::S50, Shade::S800, Shade::S300),
        (ColorScheme::Light, ButtonState::Active) => (Shade::S100, Shade::S900, Shade::S300),
        (ColorScheme::Light, ButtonState::Disabled) => (Shade::S50, Shade::S300, Shade::S100),
        (ColorScheme::Dark, ButtonState::Default) => (Shade::S900, Shade::S100, Shade::S700),
        (ColorScheme::Dark, ButtonState::Hover) => (Shade::S800, Shade::S50, Shade::S600),
        (ColorScheme::Dark, ButtonState::Active) => (Shade::S700, Shade::S0, Shade::S600),
        (ColorScheme::Dark, ButtonState::Disabled) => (Shade::S900, Shade::S600, Shade::S800),
    };
    StateColors {
        background: gray.get(bg),
        text: gray.get(text),
        border: gray.get(border),
    }
}

fn state_colors(
    foundation: &FoundationTokens,
    scheme: ColorScheme,
    ty: ButtonType,
    sub: ButtonSubType,
    state: ButtonState,
) -> StateColors {
    let palette = &foundation.colors;
    let on = match scheme {
        ColorScheme::Light => palette.white,
        ColorScheme::Dark => palette.gray.get(Shade::S1000),
    };
    let ramp = match ty {
        ButtonType::Primary => &palette.primary,
        ButtonType::Secondary => &palette.gray,
        ButtonType::Danger => &palette.red,
        ButtonType::Success => &palette.green,
    };
    match (ty, sub) {
        (_, ButtonSubType::Inline) => inline(ramp, scheme, state),
        (ButtonType::Secondary, _) => outlined(&palette.gray, scheme, state),
        _ => filled(ramp, on, scheme, state),
    }
}

fn color_table(
    foundation: &FoundationTokens,
    scheme: ColorScheme,
    pick: impl Fn(StateColors) -> Color,
) -> ButtonColorTable {
    VariantTable::from_fn(|ty| {
        VariantTable::from_fn(|sub| {
            VariantTable::from_fn(|state| pick(state_colors(foundation, scheme, ty, sub, state)))
        })
    })
}

fn build_for(foundation: &FoundationTokens, scheme: ColorScheme, bp: Breakpoint) -> ButtonTokens {
    let unit = &foundation.unit;
    let font = &foundation.font;

    ButtonTokens {
        background_color: color_table(foundation, scheme, |c| c.background),
        color: color_table(foundation, scheme, |c| c.text),
        border_color: color_table(foundation, scheme, |c| c.border),
        border_radius: VariantTable::from_fn(|size| match size {
            ButtonSize::Sm => foundation.border_radius.get(Radius::R6),
            ButtonSize::Md | ButtonSize::Lg => foundation.border_radius.get(Radius::R10),
        }),
        padding: VariantTable::from_fn(|size| {
            VariantTable::from_fn(|sub| {
                let (x, y) = match (size, bp) {
                    (ButtonSize::Sm, _) => (Unit::U12, Unit::U6),
                    (ButtonSize::Md, Breakpoint::Sm) => (Unit::U14, Unit::U10),
                    (ButtonSize::Md, Breakpoint::Lg) => (Unit::U14, Unit::U8),
                    (ButtonSize::Lg, Breakpoint::Sm) => (Unit::U16, Unit::U12),
                    (ButtonSize::Lg, Breakpoint::Lg) => (Unit::U16, Unit::U10),
                };
                match sub {
                    ButtonSubType::Default => Padding::new(unit.get(x), unit.get(y)),
                    ButtonSubType::IconOnly => Padding::new(unit.get(y), unit.get(y)),
                    ButtonSubType::Inline => Padding::new(unit.get(Unit::U0), unit.get(Unit::U0)),
                }
            })
        }),
        gap: unit.get(Unit::U6),
        font_size: VariantTable::from_fn(|size| match (size, bp) {
            (ButtonSize::Sm, _) => font.size(FontSize::BodySm),
            (ButtonSize::Md, _) => font.size(FontSize::BodyMd),
            (ButtonSize::Lg, Breakpoint::Sm) => font.size(FontSize::BodyMd),
            (ButtonSize::Lg, Breakpoint::Lg) => font.size(FontSize::BodyLg),
        }),
        font_weight: font.weight(FontWeight::Semibold),
        focus_ring: foundation.shadows.get(Elevation::Focus),
    }
}

impl ComponentTokens for ButtonTokens {
    const NAME: &'static str = "button";

    fn build(foundation: &FoundationTokens, scheme: ColorScheme) -> Responsive<Self> {
        Responsive::from_fn(|bp| build_for(foundation, scheme, bp))
    }

    fn tables(registry: &TokenRegistry) -> &SchemeTables<Self> {
        &registry.button
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_hover_is_lighter_than_active() {
        let foundation = FoundationTokens::default();
        let tokens = ButtonTokens::build(&foundation, ColorScheme::Light);
        let lg = &tokens.lg;
        let ty = ButtonType::Primary;
        let sub = ButtonSubType::Default;
        assert_eq!(
            lg.background(ty, sub, ButtonState::Hover),
            foundation.colors.primary.get(Shade::S500)
        );
        assert_eq!(
            lg.background(ty, sub, ButtonState::Active),
            foundation.colors.primary.get(Shade::S700)
        );
    }

    #[test]
    fn inline_buttons_have_no_fill_or_padding() {
        let tokens = ButtonTokens::build(&FoundationTokens::default(), ColorScheme::Dark);
        for ty in [ButtonType::Primary, ButtonType::Danger] {
            assert_eq!(
                tokens.sm.background(ty, ButtonSubType::Inline, ButtonState::Default),
                Color::TRANSPARENT
            );
        }
        assert_eq!(
            tokens.sm.padding[ButtonSize::Lg][ButtonSubType::Inline],
            Padding::new(0.0, 0.0)
        );
    }

    #[test]
    fn icon_only_padding_is_square() {
        let tokens = ButtonTokens::build(&FoundationTokens::default(), ColorScheme::Light);
        let p = tokens.lg.padding[ButtonSize::Md][ButtonSubType::IconOnly];
        assert_eq!(p.x, p.y);
    }
}
