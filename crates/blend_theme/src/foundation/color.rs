//! Color ramps

use crate::variant::{token_key, TokenKey, VariantTable};
use blend_core::Color;
use serde::Serialize;

token_key! {
    /// Position on a color ramp, from lightest (`S0`) to darkest (`S1000`)
    pub enum Shade {
        S0 => "0",
        S50 => "50",
        S100 => "100",
        S200 => "200",
        S300 => "300",
        S400 => "400",
        S500 => "500",
        S600 => "600",
        S700 => "700",
        S800 => "800",
        S900 => "900",
        S1000 => "1000",
    }
}

/// Twelve-step color ramp
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ColorRamp(VariantTable<Shade, Color>);

impl ColorRamp {
    /// Build a ramp from hex literals ordered like [`Shade::ALL`]
    pub fn from_hex(hex: [u32; 12]) -> Self {
        Self(VariantTable::from_fn(|shade: Shade| {
            Color::from_hex(hex[shade.index()])
        }))
    }

    pub fn get(&self, shade: Shade) -> Color {
        *self.0.get(shade)
    }
}

/// Named color ramps of the foundation palette
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ColorPalette {
    pub white: Color,
    pub black: Color,
    pub gray: ColorRamp,
    pub primary: ColorRamp,
    pub purple: ColorRamp,
    pub orange: ColorRamp,
    pub red: ColorRamp,
    pub green: ColorRamp,
    pub yellow: ColorRamp,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            white: Color::WHITE,
            black: Color::BLACK,
            gray: ColorRamp::from_hex([
                0xFFFFFF, 0xF9FAFB, 0xF2F4F7, 0xE4E7EC, 0xD0D5DD, 0x98A2B3, 0x667085, 0x475467,
                0x344054, 0x1D2939, 0x101828, 0x0C111D,
            ]),
            primary: ColorRamp::from_hex([
                0xFFFFFF, 0xEFF6FF, 0xDBEAFE, 0xBFDBFE, 0x93C5FD, 0x60A5FA, 0x2B7FFF, 0x155DFC,
                0x1447E6, 0x193CB8, 0x1C398E, 0x162456,
            ]),
            purple: ColorRamp::from_hex([
                0xFFFFFF, 0xFAF5FF, 0xF3E8FF, 0xE9D4FF, 0xDAB2FF, 0xC27AFF, 0xAD46FF, 0x9810FA,
                0x8200DB, 0x6E11B0, 0x59168B, 0x3C0366,
            ]),
            orange: ColorRamp::from_hex([
                0xFFFFFF, 0xFFF7ED, 0xFFEDD4, 0xFFD6A7, 0xFFB86A, 0xFF8904, 0xFF6900, 0xF54900,
                0xCA3500, 0x9F2D00, 0x7E2A0C, 0x441306,
            ]),
            red: ColorRamp::from_hex([
                0xFFFFFF, 0xFEF2F2, 0xFFE2E2, 0xFFC9C9, 0xFFA2A2, 0xFF6467, 0xFB2C36, 0xE7000B,
                0xC10007, 0x9F0712, 0x82181A, 0x460809,
            ]),
            green: ColorRamp::from_hex([
                0xFFFFFF, 0xF0FDF4, 0xDCFCE7, 0xB9F8CF, 0x7BF1A8, 0x05DF72, 0x00C950, 0x00A63E,
                0x008236, 0x016630, 0x0D542B, 0x032E15,
            ]),
            yellow: ColorRamp::from_hex([
                0xFFFFFF, 0xFEFCE8, 0xFEF9C2, 0xFFF085, 0xFFDF20, 0xFDC700, 0xF0B100, 0xD08700,
                0xA65F00, 0x894B00, 0x733E0A, 0x432004,
            ]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramps_run_light_to_dark() {
        let palette = ColorPalette::default();
        for ramp in [&palette.gray, &palette.primary, &palette.red, &palette.green] {
            assert_eq!(ramp.get(Shade::S0), Color::WHITE);
            let luma = |c: Color| 0.299 * c.r + 0.587 * c.g + 0.114 * c.b;
            assert!(luma(ramp.get(Shade::S100)) > luma(ramp.get(Shade::S900)));
        }
    }

    #[test]
    fn primary_600_matches_palette() {
        let palette = ColorPalette::default();
        assert_eq!(palette.primary.get(Shade::S600).to_hex_string(), "#155dfc");
    }
}
