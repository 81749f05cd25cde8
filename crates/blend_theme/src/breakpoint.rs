//! Responsive breakpoints
//!
//! Component tables carry one value per [`Breakpoint`]. The active breakpoint
//! is derived from the viewport width, and selecting the table for it is a
//! plain field lookup.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

/// Breakpoint keys used by component token tables
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Breakpoint {
    /// Below the `lg` threshold
    Sm,
    /// At or above the `lg` threshold
    Lg,
}

impl Breakpoint {
    pub const ALL: [Breakpoint; 2] = [Breakpoint::Sm, Breakpoint::Lg];

    pub fn as_str(self) -> &'static str {
        match self {
            Breakpoint::Sm => "sm",
            Breakpoint::Lg => "lg",
        }
    }

    /// Classify a viewport width
    pub fn for_width(width: f32, widths: &BreakpointWidths) -> Self {
        if width >= widths.lg {
            Breakpoint::Lg
        } else {
            Breakpoint::Sm
        }
    }
}

impl Display for Breakpoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognized breakpoint name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown breakpoint `{0}` (expected `sm` or `lg`)")]
pub struct UnknownBreakpoint(pub String);

impl FromStr for Breakpoint {
    type Err = UnknownBreakpoint;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sm" => Ok(Breakpoint::Sm),
            "lg" => Ok(Breakpoint::Lg),
            _ => Err(UnknownBreakpoint(s.to_string())),
        }
    }
}

/// Breakpoint thresholds in logical pixels
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreakpointWidths {
    /// Minimum width of the `lg` breakpoint
    pub lg: f32,
}

impl BreakpointWidths {
    pub const DEFAULT: Self = Self { lg: 1024.0 };
}

impl Default for BreakpointWidths {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// One value per breakpoint
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Responsive<T> {
    pub sm: T,
    pub lg: T,
}

impl<T> Responsive<T> {
    pub fn from_fn(mut f: impl FnMut(Breakpoint) -> T) -> Self {
        Self {
            sm: f(Breakpoint::Sm),
            lg: f(Breakpoint::Lg),
        }
    }

    pub fn get(&self, breakpoint: Breakpoint) -> &T {
        match breakpoint {
            Breakpoint::Sm => &self.sm,
            Breakpoint::Lg => &self.lg,
        }
    }

    /// Value for the breakpoint a viewport width falls in
    pub fn for_width(&self, width: f32, widths: &BreakpointWidths) -> &T {
        self.get(Breakpoint::for_width(width, widths))
    }

    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> Responsive<U> {
        Responsive {
            sm: f(&self.sm),
            lg: f(&self.lg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint_for_width() {
        let widths = BreakpointWidths::default();
        assert_eq!(Breakpoint::for_width(375.0, &widths), Breakpoint::Sm);
        assert_eq!(Breakpoint::for_width(1023.0, &widths), Breakpoint::Sm);
        assert_eq!(Breakpoint::for_width(1024.0, &widths), Breakpoint::Lg);
        assert_eq!(Breakpoint::for_width(1920.0, &widths), Breakpoint::Lg);
    }

    #[test]
    fn test_breakpoint_parse() {
        assert_eq!("sm".parse::<Breakpoint>(), Ok(Breakpoint::Sm));
        assert_eq!(" LG".parse::<Breakpoint>(), Ok(Breakpoint::Lg));
        let err = "md".parse::<Breakpoint>().unwrap_err();
        assert_eq!(err, UnknownBreakpoint("md".into()));
        assert!(err.to_string().contains("`md`"));
    }

    #[test]
    fn test_responsive_lookup() {
        let values = Responsive::from_fn(|bp| bp.as_str().to_uppercase());
        assert_eq!(values.get(Breakpoint::Sm), "SM");
        assert_eq!(values.for_width(2000.0, &BreakpointWidths::default()), "LG");
        assert_eq!(values.map(|s| s.len()), Responsive { sm: 2, lg: 2 });
    }
}
