//! Subcommand implementations
//!
//! Each command renders its output to a `String` so `main` stays a thin
//! dispatcher.

use crate::config::BlendConfig;
use anyhow::{Context, Result};
use blend_cn::components::{compute_cutoff, OverflowMetrics, OverflowSplit};
use blend_monitor::{CostEstimate, PricingCalculator, UsageSnapshot};
use blend_theme::{Breakpoint, ColorScheme, TokenRegistry};
use clap::ValueEnum;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Components with token tables
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Component {
    Tag,
    Button,
    ChatInput,
}

/// Where the breakpoint for `tokens` comes from
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BreakpointSource {
    Explicit(Breakpoint),
    Width(f32),
    Default,
}

impl BreakpointSource {
    pub fn resolve(self, config: &BlendConfig) -> Breakpoint {
        match self {
            BreakpointSource::Explicit(bp) => bp,
            BreakpointSource::Width(width) => Breakpoint::for_width(width, &config.breakpoints),
            BreakpointSource::Default => Breakpoint::Lg,
        }
    }
}

/// Resolved token table as pretty JSON
pub fn tokens(
    config: &BlendConfig,
    component: Component,
    theme: Option<&str>,
    breakpoint: BreakpointSource,
) -> Result<String> {
    let scheme = theme.map_or(config.theme.scheme, ColorScheme::from_name);
    let bp = breakpoint.resolve(config);
    tracing::debug!("resolving {:?} tokens for {} at {}", component, scheme, bp);

    let registry = TokenRegistry::shared();
    let json = match component {
        Component::Tag => serde_json::to_string_pretty(registry.resolve_tag(scheme, bp)),
        Component::Button => serde_json::to_string_pretty(registry.resolve_button(scheme, bp)),
        Component::ChatInput => {
            serde_json::to_string_pretty(registry.resolve_chat_input(scheme, bp))
        }
    };
    json.context("Failed to serialize token table")
}

/// Per-flag overrides of the configured overflow metrics
#[derive(Clone, Copy, Debug, Default)]
pub struct MetricOverrides {
    pub gap: Option<f32>,
    pub buffer: Option<f32>,
    pub more_trigger_width: Option<f32>,
}

impl MetricOverrides {
    pub fn apply(self, base: OverflowMetrics) -> OverflowMetrics {
        OverflowMetrics {
            gap: self.gap.unwrap_or(base.gap),
            buffer: self.buffer.unwrap_or(base.buffer),
            more_trigger_width: self.more_trigger_width.unwrap_or(base.more_trigger_width),
        }
    }
}

/// Cutoff for a row of chip widths
pub fn cutoff(
    config: &BlendConfig,
    container: f32,
    widths: &[f32],
    overrides: MetricOverrides,
) -> String {
    let metrics = overrides.apply(config.overflow.metrics.unwrap_or_default());
    let cutoff = compute_cutoff(widths, widths.len(), container, &metrics);
    let split = OverflowSplit::new(cutoff, widths.len());

    let mut out = String::new();
    let _ = writeln!(out, "container: {container}px");
    let _ = writeln!(
        out,
        "metrics:   gap {} / buffer {} / more {}",
        metrics.gap, metrics.buffer, metrics.more_trigger_width
    );
    let _ = writeln!(out, "cutoff:    {}", split.cutoff);
    let _ = writeln!(out, "hidden:    {}", split.hidden_count());
    out
}

/// Read a usage snapshot from a JSON file
pub fn load_usage(path: &Path) -> Result<UsageSnapshot> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Cost estimate table
pub fn pricing(config: &BlendConfig, usage: &UsageSnapshot, days: u32) -> String {
    let estimate = PricingCalculator::new(config.pricing).estimate(usage, days);
    format_estimate(&estimate)
}

fn format_estimate(estimate: &CostEstimate) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<24} {:>14} {:>14} {:>14} {:>10}",
        "Metric", "Usage", "Free", "Billable", "Cost"
    );
    for item in &estimate.items {
        let _ = writeln!(
            out,
            "{:<24} {:>14.2} {:>14.2} {:>14.2} {:>10}",
            item.metric.label(),
            item.usage,
            item.free_allowance,
            item.billable,
            format!("${:.2}", item.cost)
        );
    }
    let _ = writeln!(
        out,
        "{:<24} {:>55}",
        format!("Total ({} days)", estimate.days),
        format!("${:.2}", estimate.total())
    );
    out
}
