//! Prebuilt token tables
//!
//! Tables are assembled once per foundation and color scheme and never
//! mutated afterwards, so a single registry can be shared by every component.

use crate::breakpoint::{Breakpoint, Responsive};
use crate::components::{ButtonTokens, ChatInputTokens, ComponentTokens, TagTokens};
use crate::foundation::FoundationTokens;
use crate::theme::ColorScheme;
use std::sync::OnceLock;

/// Registry built over the default foundation palette
static SHARED_REGISTRY: OnceLock<TokenRegistry> = OnceLock::new();

/// Light and dark tables for one component
#[derive(Clone, Debug, PartialEq)]
pub struct SchemeTables<T> {
    light: Responsive<T>,
    dark: Responsive<T>,
}

impl<T: ComponentTokens> SchemeTables<T> {
    pub fn build(foundation: &FoundationTokens) -> Self {
        Self {
            light: T::build(foundation, ColorScheme::Light),
            dark: T::build(foundation, ColorScheme::Dark),
        }
    }

    pub fn for_scheme(&self, scheme: ColorScheme) -> &Responsive<T> {
        match scheme {
            ColorScheme::Light => &self.light,
            ColorScheme::Dark => &self.dark,
        }
    }
}

/// Every component's tables for both color schemes
#[derive(Clone, Debug, PartialEq)]
pub struct TokenRegistry {
    foundation: FoundationTokens,
    pub(crate) tag: SchemeTables<TagTokens>,
    pub(crate) button: SchemeTables<ButtonTokens>,
    pub(crate) chat_input: SchemeTables<ChatInputTokens>,
}

impl TokenRegistry {
    pub fn new(foundation: FoundationTokens) -> Self {
        let registry = Self {
            tag: SchemeTables::build(&foundation),
            button: SchemeTables::build(&foundation),
            chat_input: SchemeTables::build(&foundation),
            foundation,
        };
        tracing::debug!("built token tables for tag, button and chat-input");
        registry
    }

    /// Registry over [`FoundationTokens::default`], built on first use
    pub fn shared() -> &'static TokenRegistry {
        SHARED_REGISTRY.get_or_init(|| TokenRegistry::new(FoundationTokens::default()))
    }

    pub fn foundation(&self) -> &FoundationTokens {
        &self.foundation
    }

    /// All breakpoints of a component's table for `scheme`
    pub fn tokens<T: ComponentTokens>(&self, scheme: ColorScheme) -> &Responsive<T> {
        T::tables(self).for_scheme(scheme)
    }

    /// A component's table for one scheme and breakpoint
    pub fn resolve<T: ComponentTokens>(&self, scheme: ColorScheme, breakpoint: Breakpoint) -> &T {
        self.tokens::<T>(scheme).get(breakpoint)
    }

    pub fn resolve_tag(&self, scheme: ColorScheme, breakpoint: Breakpoint) -> &TagTokens {
        self.resolve(scheme, breakpoint)
    }

    pub fn resolve_button(&self, scheme: ColorScheme, breakpoint: Breakpoint) -> &ButtonTokens {
        self.resolve(scheme, breakpoint)
    }

    pub fn resolve_chat_input(
        &self,
        scheme: ColorScheme,
        breakpoint: Breakpoint,
    ) -> &ChatInputTokens {
        self.resolve(scheme, breakpoint)
    }
}

impl Default for TokenRegistry {
    fn default() -> Self {
        Self::new(FoundationTokens::default())
    }
}

/// Build a component's responsive table from a foundation and a theme name.
///
/// Unknown theme names produce the light table.
pub fn get_tokens<T: ComponentTokens>(foundation: &FoundationTokens, theme: &str) -> Responsive<T> {
    T::build(foundation, ColorScheme::from_name(theme))
}
