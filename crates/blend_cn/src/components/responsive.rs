//! Responsive helpers for picking breakpoint-specific token tables.

use blend_theme::{Breakpoint, BreakpointWidths, ColorScheme, ComponentTokens, Responsive, TokenRegistry};

/// Device-class abstraction derived from the viewport width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceClass {
    /// Width < 768px
    Mobile,
    /// 768px <= width < `lg`
    Tablet,
    /// width >= `lg`
    Desktop,
}

/// Width below which a viewport counts as mobile.
pub const MOBILE_MAX_WIDTH: f32 = 768.0;

/// Classify a viewport width into mobile/tablet/desktop.
pub fn device_class_for_width(width: f32, widths: &BreakpointWidths) -> DeviceClass {
    match width {
        w if w < MOBILE_MAX_WIDTH => DeviceClass::Mobile,
        w if w < widths.lg => DeviceClass::Tablet,
        _ => DeviceClass::Desktop,
    }
}

/// Pick the table for the breakpoint a viewport width falls in.
pub fn use_responsive_tokens<'a, T>(
    tokens: &'a Responsive<T>,
    viewport_width: f32,
    widths: &BreakpointWidths,
) -> &'a T {
    tokens.for_width(viewport_width, widths)
}

/// Viewport and theme a component renders under.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResponsiveContext {
    pub viewport_width: f32,
    pub widths: BreakpointWidths,
    pub scheme: ColorScheme,
}

impl ResponsiveContext {
    pub fn new(viewport_width: f32, scheme: ColorScheme) -> Self {
        Self {
            viewport_width,
            widths: BreakpointWidths::default(),
            scheme,
        }
    }

    pub fn with_widths(mut self, widths: BreakpointWidths) -> Self {
        self.widths = widths;
        self
    }

    pub fn breakpoint(&self) -> Breakpoint {
        Breakpoint::for_width(self.viewport_width, &self.widths)
    }

    pub fn device_class(&self) -> DeviceClass {
        device_class_for_width(self.viewport_width, &self.widths)
    }

    /// Resolve a component's tokens from a registry for this context.
    pub fn tokens<'r, T: ComponentTokens>(&self, registry: &'r TokenRegistry) -> &'r T {
        use_responsive_tokens(
            registry.tokens::<T>(self.scheme),
            self.viewport_width,
            &self.widths,
        )
    }
}

impl Default for ResponsiveContext {
    fn default() -> Self {
        Self::new(BreakpointWidths::DEFAULT.lg, ColorScheme::Light)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blend_theme::TagTokens;

    #[test]
    fn test_device_class_breakpoints() {
        let widths = BreakpointWidths::default();
        assert_eq!(device_class_for_width(375.0, &widths), DeviceClass::Mobile);
        assert_eq!(device_class_for_width(767.0, &widths), DeviceClass::Mobile);
        assert_eq!(device_class_for_width(768.0, &widths), DeviceClass::Tablet);
        assert_eq!(device_class_for_width(1023.0, &widths), DeviceClass::Tablet);
        assert_eq!(device_class_for_width(1024.0, &widths), DeviceClass::Desktop);
        assert_eq!(device_class_for_width(1440.0, &widths), DeviceClass::Desktop);
    }

    #[test]
    fn test_context_picks_breakpoint_table() {
        let registry = TokenRegistry::shared();
        let ctx = ResponsiveContext::new(400.0, ColorScheme::Dark);
        assert_eq!(ctx.breakpoint(), Breakpoint::Sm);

        let tag: &TagTokens = ctx.tokens(registry);
        assert_eq!(tag, registry.resolve_tag(ColorScheme::Dark, Breakpoint::Sm));
    }

    #[test]
    fn test_custom_thresholds() {
        let ctx = ResponsiveContext::new(900.0, ColorScheme::Light)
            .with_widths(BreakpointWidths { lg: 880.0 });
        assert_eq!(ctx.breakpoint(), Breakpoint::Lg);
        assert_eq!(ctx.device_class(), DeviceClass::Desktop);
    }
}
