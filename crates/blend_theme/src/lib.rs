//! Blend Theme System
//!
//! Design tokens and the per-component token tables that Blend components
//! read at render time.
//!
//! # Overview
//!
//! - **Foundation tokens**: the primitive palette (color ramps, spacing units,
//!   font sizes/weights/line heights, radii, border widths, shadows)
//! - **Color scheme**: light/dark selection, with unknown names falling back
//!   to light
//! - **Breakpoints**: `sm`/`lg` keys and the [`Responsive`] wrapper holding one
//!   value per breakpoint
//! - **Component tokens**: fully populated tables for every variant
//!   combination a component declares ([`TagTokens`], [`ButtonTokens`],
//!   [`ChatInputTokens`])
//!
//! # Quick Start
//!
//! ```rust
//! use blend_theme::{Breakpoint, ColorScheme, TagColor, TagVariant, TokenRegistry};
//!
//! let registry = TokenRegistry::shared();
//! let tag = registry.resolve_tag(ColorScheme::from_name("dark"), Breakpoint::Lg);
//! let bg = tag.background(TagVariant::Attentive, TagColor::Success);
//! assert_eq!(bg.a, 1.0);
//! ```
//!
//! # Totality
//!
//! Variant axes are closed enums and every table is a [`VariantTable`], which
//! can only be constructed by supplying a value for every enum member. A
//! resolved token set therefore has no missing leaves for any combination.

mod variant;

pub mod breakpoint;
pub mod components;
pub mod foundation;
pub mod registry;
pub mod theme;

pub use breakpoint::{Breakpoint, BreakpointWidths, Responsive, UnknownBreakpoint};
pub use components::*;
pub use foundation::*;
pub use registry::{get_tokens, SchemeTables, TokenRegistry};
pub use theme::ColorScheme;
pub use variant::{TokenKey, VariantTable};
