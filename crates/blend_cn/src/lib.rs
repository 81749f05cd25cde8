//! Blend Components
//!
//! Component-side consumers of the Blend token tables:
//!
//! - responsive lookup of a component's tokens for the current viewport
//! - the attachment overflow calculation and its resize controller
//! - the chat input that puts both together
//!
//! Components are headless. They hold state and resolved tokens; the host
//! renders them, reports container sizes and chip measurements, and ticks
//! them once per frame.
//!
//! ```rust
//! use blend_cn::prelude::*;
//!
//! let ctx = ResponsiveContext::new(1280.0, ColorScheme::Dark);
//! let tokens: &ChatInputTokens = ctx.tokens(TokenRegistry::shared());
//! let metrics = OverflowMetrics::from(&tokens.overflow);
//! assert_eq!(compute_cutoff(&[80.0, 90.0, 70.0, 60.0, 50.0], 5, 400.0, &metrics), 3);
//! ```

pub mod components;

pub use components::*;

/// Common imports for hosts embedding Blend components
pub mod prelude {
    pub use crate::components::*;
    pub use blend_theme::{Breakpoint, BreakpointWidths, ChatInputTokens, ColorScheme, TokenRegistry};
}
