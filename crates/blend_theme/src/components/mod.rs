//! Per-component token tables
//!
//! Each component declares its variant axes as closed enums and a token set
//! built from the foundation palette for one color scheme, with one entry per
//! breakpoint.

mod button;
mod chat_input;
mod tag;

pub use button::*;
pub use chat_input::*;
pub use tag::*;

use crate::breakpoint::Responsive;
use crate::foundation::FoundationTokens;
use crate::registry::{SchemeTables, TokenRegistry};
use crate::theme::ColorScheme;
use serde::Serialize;

/// Horizontal and vertical padding
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Padding {
    pub x: f32,
    pub y: f32,
}

impl Padding {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A component's complete token set for one breakpoint
pub trait ComponentTokens: Clone + PartialEq + Serialize + Sized + 'static {
    /// Component name used in logs and the CLI
    const NAME: &'static str;

    /// Assemble the table for `scheme` from foundation primitives
    fn build(foundation: &FoundationTokens, scheme: ColorScheme) -> Responsive<Self>;

    /// The prebuilt light/dark tables held by a registry
    fn tables(registry: &TokenRegistry) -> &SchemeTables<Self>;
}
