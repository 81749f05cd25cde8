//! Chat input tokens
//!
//! Besides the visual container and attachment chip values, the table carries
//! the overflow metrics used to decide how many attachment chips fit before
//! the "+N more" trigger.

use super::{ComponentTokens, Padding};
use crate::breakpoint::{Breakpoint, Responsive};
use crate::foundation::{Elevation, FontSize, FoundationTokens, Radius, Shade, Shadow, Unit};
use crate::registry::{SchemeTables, TokenRegistry};
use crate::theme::ColorScheme;
use crate::variant::{token_key, VariantTable};
use blend_core::Color;
use serde::Serialize;

token_key! {
    pub enum ChatInputState {
        Default => "default",
        Hover => "hover",
        Focus => "focus",
        Disabled => "disabled",
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChatInputContainerTokens {
    pub background_color: VariantTable<ChatInputState, Color>,
    pub border_color: VariantTable<ChatInputState, Color>,
    pub box_shadow: VariantTable<ChatInputState, Shadow>,
    pub border_radius: f32,
    pub padding: Padding,
    pub gap: f32,
    pub min_height: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChatInputTextTokens {
    pub color: VariantTable<ChatInputState, Color>,
    pub placeholder_color: Color,
    pub font_size: f32,
    pub line_height: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AttachmentChipTokens {
    pub height: f32,
    pub max_width: f32,
    pub padding: Padding,
    pub gap: f32,
    pub icon_size: f32,
    pub background_color: Color,
    pub border_color: Color,
    pub border_radius: f32,
    pub font_size: f32,
    pub name_color: Color,
    pub meta_color: Color,
}

/// Layout metrics consumed by the overflow cutoff calculation
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct OverflowTokens {
    /// Gap between adjacent chips
    pub gap: f32,
    /// Space kept free at the end of the row
    pub buffer: f32,
    /// Estimated width of the "+N more" trigger
    pub more_trigger_width: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChatInputTokens {
    pub container: ChatInputContainerTokens,
    pub text: ChatInputTextTokens,
    pub attachment: AttachmentChipTokens,
    pub overflow: OverflowTokens,
}

fn build_for(foundation: &FoundationTokens, scheme: ColorScheme, bp: Breakpoint) -> ChatInputTokens {
    let gray = &foundation.colors.gray;
    let primary = &foundation.colors.primary;
    let unit = &foundation.unit;
    let font = &foundation.font;
    let dark = scheme.is_dark();

    // (light, dark) shade pairs
    let shade = |light: Shade, dark_shade: Shade| gray.get(if dark { dark_shade } else { light });

    let container = ChatInputContainerTokens {
        background_color: VariantTable::from_fn(|state| match state {
            ChatInputState::Default | ChatInputState::Focus => shade(Shade::S0, Shade::S900),
            ChatInputState::Hover => shade(Shade::S50, Shade::S800),
            ChatInputState::Disabled => shade(Shade::S50, Shade::S1000),
        }),
        border_color: VariantTable::from_fn(|state| match state {
            ChatInputState::Default => shade(Shade::S200, Shade::S700),
            ChatInputState::Hover => shade(Shade::S300, Shade::S600),
            ChatInputState::Focus => primary.get(if dark { Shade::S400 } else { Shade::S500 }),
            ChatInputState::Disabled => shade(Shade::S100, Shade::S800),
        }),
        box_shadow: VariantTable::from_fn(|state| match state {
            ChatInputState::Focus => foundation.shadows.get(Elevation::Focus),
            _ => foundation.shadows.get(Elevation::Xs),
        }),
        border_radius: foundation.border_radius.get(Radius::R12),
        padding: match bp {
            Breakpoint::Sm => Padding::new(unit.get(Unit::U10), unit.get(Unit::U8)),
            Breakpoint::Lg => Padding::new(unit.get(Unit::U12), unit.get(Unit::U10)),
        },
        gap: unit.get(Unit::U8),
        min_height: match bp {
            Breakpoint::Sm => 44.0,
            Breakpoint::Lg => 52.0,
        },
    };

    let text = ChatInputTextTokens {
        color: VariantTable::from_fn(|state| match state {
            ChatInputState::Disabled => shade(Shade::S400, Shade::S600),
            _ => shade(Shade::S800, Shade::S50),
        }),
        placeholder_color: shade(Shade::S400, Shade::S500),
        font_size: font.size(FontSize::BodyMd),
        line_height: font.line_height(FontSize::BodyMd),
    };

    let attachment = AttachmentChipTokens {
        height: match bp {
            Breakpoint::Sm => 28.0,
            Breakpoint::Lg => 32.0,
        },
        max_width: match bp {
            Breakpoint::Sm => 160.0,
            Breakpoint::Lg => 200.0,
        },
        padding: Padding::new(unit.get(Unit::U8), unit.get(Unit::U4)),
        gap: unit.get(Unit::U6),
        icon_size: unit.get(Unit::U16),
        background_color: shade(Shade::S50, Shade::S800),
        border_color: shade(Shade::S200, Shade::S700),
        border_radius: foundation.border_radius.get(Radius::R8),
        font_size: font.size(FontSize::BodySm),
        name_color: shade(Shade::S700, Shade::S100),
        meta_color: shade(Shade::S500, Shade::S400),
    };

    let overflow = match bp {
        Breakpoint::Sm => OverflowTokens {
            gap: unit.get(Unit::U6),
            buffer: unit.get(Unit::U24),
            more_trigger_width: 88.0,
        },
        Breakpoint::Lg => OverflowTokens {
            gap: unit.get(Unit::U8),
            buffer: 30.0,
            more_trigger_width: 100.0,
        },
    };

    ChatInputTokens {
        container,
        text,
        attachment,
        overflow,
    }
}

impl ComponentTokens for ChatInputTokens {
    const NAME: &'static str = "chat-input";

    fn build(foundation: &FoundationTokens, scheme: ColorScheme) -> Responsive<Self> {
        Responsive::from_fn(|bp| build_for(foundation, scheme, bp))
    }

    fn tables(registry: &TokenRegistry) -> &SchemeTables<Self> {
        &registry.chat_input
    }
}
