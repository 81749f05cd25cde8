//! Resize-aware overflow state
//!
//! [`OverflowController`] owns the cutoff for one mounted list of chips and
//! decides when to recompute it:
//!
//! - Resize notifications are debounced; only the settled width is acted on.
//! - Shrinking by more than `shrink_threshold` recomputes immediately.
//! - Growing by more than `grow_threshold` first resets to "show all", waits
//!   for the chips to be laid out, then recomputes against fresh widths.
//!   Hidden chips have no measurable width, so this is the only way the
//!   cutoff can grow.
//! - Smaller changes are ignored.
//! - A change to the item list always resets to "show all" and recomputes
//!   once the new layout has settled.
//!
//! Settling ends either when the host reports a committed layout through
//! [`OverflowController::on_layout_committed`] or when the settle timer runs
//! out, whichever happens first.
//!
//! ```rust
//! use std::time::{Duration, Instant};
//! use blend_cn::components::{OverflowConfig, OverflowController};
//!
//! let t0 = Instant::now();
//! let widths = [80.0f32, 90.0, 70.0, 60.0, 50.0];
//! let mut ctrl = OverflowController::new(OverflowConfig::default(), widths.len());
//!
//! ctrl.on_resize(400.0, t0);
//! ctrl.tick(t0 + Duration::from_millis(150), &widths[..]);
//! assert_eq!(ctrl.cutoff(), 3);
//! ```

use super::overflow::{compute_cutoff, OverflowMetrics, OverflowSplit};
use blend_core::fsm::{EventId, StateId, StateMachine};
use blend_core::timer::{DebounceConfig, Debouncer, Timeout};
use serde::Deserialize;
use smallvec::SmallVec;
use std::time::{Duration, Instant};

/// Supplies measurements of the chips currently in the layout
pub trait LayoutProbe {
    /// Widths of the rendered chips, left to right
    fn rendered_item_widths(&self) -> SmallVec<[f32; 8]>;
}

impl LayoutProbe for [f32] {
    fn rendered_item_widths(&self) -> SmallVec<[f32; 8]> {
        SmallVec::from_slice(self)
    }
}

impl LayoutProbe for Vec<f32> {
    fn rendered_item_widths(&self) -> SmallVec<[f32; 8]> {
        self.as_slice().rendered_item_widths()
    }
}

/// Resize and settle tuning
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct OverflowConfig {
    /// Overrides the metrics from the component's tokens when set
    pub metrics: Option<OverflowMetrics>,
    /// Shrinks larger than this recompute the cutoff
    pub shrink_threshold: f32,
    /// Growth larger than this re-expands and remeasures
    pub grow_threshold: f32,
    /// Quiet period before a resize burst is acted on
    pub debounce_ms: u64,
    /// Fallback delay before remeasuring a fresh layout
    pub settle_ms: u64,
}

impl Default for OverflowConfig {
    fn default() -> Self {
        Self {
            metrics: None,
            shrink_threshold: 10.0,
            grow_threshold: 50.0,
            debounce_ms: 150,
            settle_ms: 100,
        }
    }
}

impl OverflowConfig {
    fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }
}

const IDLE: StateId = 0;
const SETTLING: StateId = 1;
const UNMOUNTED: StateId = 2;

const REMEASURE: EventId = 1;
const SETTLED: EventId = 2;
const UNMOUNT: EventId = 3;

fn phases() -> StateMachine {
    StateMachine::builder(IDLE)
        .on_any(&[IDLE, SETTLING], REMEASURE, SETTLING)
        .on(SETTLING, SETTLED, IDLE)
        .on_any(&[IDLE, SETTLING], UNMOUNT, UNMOUNTED)
        .build()
}

/// Cutoff state for one mounted chip row
#[derive(Debug)]
pub struct OverflowController {
    config: OverflowConfig,
    metrics: OverflowMetrics,
    item_count: usize,
    cutoff: usize,
    committed_width: Option<f32>,
    pending_width: Option<f32>,
    phase: StateMachine,
    debouncer: Debouncer,
    settle: Timeout,
    recompute_count: u64,
}

impl OverflowController {
    /// Start with every item visible
    pub fn new(config: OverflowConfig, item_count: usize) -> Self {
        Self {
            metrics: config.metrics.unwrap_or_default(),
            debouncer: Debouncer::new(DebounceConfig::from_millis(config.debounce_ms)),
            config,
            item_count,
            cutoff: item_count,
            committed_width: None,
            pending_width: None,
            phase: phases(),
            settle: Timeout::new(),
            recompute_count: 0,
        }
    }

    /// Replace the spacing metrics, e.g. after a breakpoint change.
    ///
    /// Config overrides win over metrics supplied here.
    pub fn set_metrics(&mut self, metrics: OverflowMetrics) {
        self.metrics = self.config.metrics.unwrap_or(metrics);
    }

    /// Swap metrics on a mounted row. A change shows every item again and
    /// recomputes once the layout settles, like a change to the item list.
    pub fn on_metrics_changed(&mut self, metrics: OverflowMetrics, now: Instant) {
        let before = self.metrics;
        self.set_metrics(metrics);
        if self.metrics == before || !self.is_mounted() {
            return;
        }
        tracing::trace!("overflow: metrics changed, remeasuring");
        self.expand(now);
    }

    pub fn metrics(&self) -> &OverflowMetrics {
        &self.metrics
    }

    pub fn cutoff(&self) -> usize {
        self.cutoff
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn split(&self) -> OverflowSplit {
        OverflowSplit::new(self.cutoff, self.item_count)
    }

    /// Last container width acted on
    pub fn container_width(&self) -> Option<f32> {
        self.committed_width
    }

    pub fn is_settling(&self) -> bool {
        self.phase.is_in(SETTLING)
    }

    pub fn is_mounted(&self) -> bool {
        !self.phase.is_in(UNMOUNTED)
    }

    /// True while a debounced resize or settle remeasure is outstanding
    pub fn has_pending_work(&self) -> bool {
        self.debouncer.is_pending() || self.settle.is_pending()
    }

    /// Number of times chip widths have been measured
    pub fn recompute_count(&self) -> u64 {
        self.recompute_count
    }

    /// Container resize notification
    pub fn on_resize(&mut self, width: f32, now: Instant) {
        if !self.is_mounted() {
            return;
        }
        self.pending_width = Some(width);
        self.debouncer.trigger(now);
    }

    /// The item list changed; show everything until the new layout settles
    pub fn on_items_changed(&mut self, item_count: usize, now: Instant) {
        if !self.is_mounted() {
            return;
        }
        tracing::trace!(
            "overflow: item count {} -> {}",
            self.item_count,
            item_count
        );
        self.item_count = item_count;
        self.expand(now);
    }

    /// Advance timers. Returns true if the cutoff changed.
    pub fn tick<P: LayoutProbe + ?Sized>(&mut self, now: Instant, probe: &P) -> bool {
        if !self.is_mounted() {
            return false;
        }
        let before = self.cutoff;

        if self.debouncer.poll(now) {
            if let Some(width) = self.pending_width.take() {
                self.apply_width(width, now, probe);
            }
        }

        if self.settle.poll(now) {
            self.finish_settle(probe);
        }

        self.cutoff != before
    }

    /// The host finished laying out the current chips. Ends a pending
    /// settle immediately. Returns true if the cutoff changed.
    pub fn on_layout_committed<P: LayoutProbe + ?Sized>(&mut self, probe: &P) -> bool {
        if !self.is_settling() {
            return false;
        }
        let before = self.cutoff;
        self.settle.cancel();
        self.finish_settle(probe);
        self.cutoff != before
    }

    /// Cancel all pending work. Every later call is a no-op.
    pub fn unmount(&mut self) {
        self.debouncer.cancel();
        self.settle.cancel();
        self.pending_width = None;
        self.phase.send(UNMOUNT);
    }

    fn apply_width<P: LayoutProbe + ?Sized>(&mut self, width: f32, now: Instant, probe: &P) {
        let Some(previous) = self.committed_width else {
            self.committed_width = Some(width);
            if !self.is_settling() {
                self.recompute(probe);
            }
            return;
        };

        let delta = width - previous;
        if delta < -self.config.shrink_threshold {
            self.committed_width = Some(width);
            // a settling row is remeasured when it settles
            if !self.is_settling() {
                self.recompute(probe);
            }
        } else if delta > self.config.grow_threshold {
            self.committed_width = Some(width);
            self.expand(now);
        } else {
            tracing::trace!("overflow: ignoring resize delta {:.1}px", delta);
        }
    }

    fn expand(&mut self, now: Instant) {
        self.cutoff = self.item_count;
        self.phase.send(REMEASURE);
        self.settle.arm(now, self.config.settle_delay());
    }

    fn finish_settle<P: LayoutProbe + ?Sized>(&mut self, probe: &P) {
        self.phase.send(SETTLED);
        self.recompute(probe);
    }

    fn recompute<P: LayoutProbe + ?Sized>(&mut self, probe: &P) {
        if self.item_count == 0 {
            self.cutoff = 0;
            return;
        }
        let Some(width) = self.committed_width else {
            return;
        };

        self.recompute_count += 1;
        let widths = probe.rendered_item_widths();
        let cutoff = compute_cutoff(&widths, self.item_count, width, &self.metrics);
        if cutoff != self.cutoff {
            tracing::debug!(
                "overflow: cutoff {} -> {} of {} at {:.0}px",
                self.cutoff,
                cutoff,
                self.item_count,
                width
            );
        }
        self.cutoff = cutoff;
    }
}
