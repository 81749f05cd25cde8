//! Chat input with an attachment row
//!
//! The input owns its attached files and the [`OverflowController`] that
//! decides how many of them render as chips. Everything past the cutoff is
//! collapsed behind a "+N more" trigger.
//!
//! The host drives it with three kinds of calls:
//!
//! - list changes ([`ChatInput::attach`], [`ChatInput::detach`])
//! - container resizes ([`ChatInput::on_container_resize`])
//! - frame ticks and layout commits, which hand over chip measurements
//!
//! ```rust
//! use std::time::{Duration, Instant};
//! use blend_cn::components::{AttachedFile, ChatInput};
//!
//! let t0 = Instant::now();
//! let mut input = ChatInput::new();
//! for (id, name) in [("1", "a.png"), ("2", "b.pdf"), ("3", "c.csv")] {
//!     input.attach(AttachedFile::new(id, name), t0);
//! }
//! input.on_container_resize(300.0, t0);
//! input.on_layout_committed(&[100.0f32, 100.0, 100.0][..]);
//! input.tick(t0 + Duration::from_millis(150), &[100.0f32, 100.0, 100.0][..]);
//!
//! assert_eq!(input.visible_files().len(), 1);
//! assert_eq!(input.more_label().as_deref(), Some("+2 more"));
//! ```

use super::attachment::{AttachedFile, AttachmentList};
use super::overflow::OverflowMetrics;
use super::overflow_controller::{LayoutProbe, OverflowConfig, OverflowController};
use super::responsive::{DeviceClass, ResponsiveContext};
use blend_theme::{ChatInputState, ChatInputTokens, TokenRegistry};
use std::time::Instant;

/// Text and files taken from the input on submit
#[derive(Clone, Debug, PartialEq)]
pub struct ChatSubmission {
    pub text: String,
    pub attachments: Vec<AttachedFile>,
}

#[derive(Debug)]
pub struct ChatInput {
    registry: &'static TokenRegistry,
    context: ResponsiveContext,
    files: AttachmentList,
    overflow: OverflowController,
    value: String,
    placeholder: String,
    focused: bool,
    hovered: bool,
    disabled: bool,
}

impl ChatInput {
    pub fn new() -> Self {
        Self::with_config(OverflowConfig::default())
    }

    pub fn with_config(config: OverflowConfig) -> Self {
        let mut input = Self {
            registry: TokenRegistry::shared(),
            context: ResponsiveContext::default(),
            files: AttachmentList::new(),
            overflow: OverflowController::new(config, 0),
            value: String::new(),
            placeholder: String::new(),
            focused: false,
            hovered: false,
            disabled: false,
        };
        input.sync_metrics();
        input
    }

    /// Render against a specific viewport and color scheme
    pub fn context(mut self, context: ResponsiveContext) -> Self {
        self.context = context;
        self.sync_metrics();
        self
    }

    /// Resolve tokens from a registry other than the shared one
    pub fn registry(mut self, registry: &'static TokenRegistry) -> Self {
        self.registry = registry;
        self.sync_metrics();
        self
    }

    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn tokens(&self) -> &ChatInputTokens {
        self.context.tokens(self.registry)
    }

    pub fn responsive_context(&self) -> &ResponsiveContext {
        &self.context
    }

    /// Viewport changed. Crossing a breakpoint swaps the overflow metrics
    /// and remeasures the attachment row.
    pub fn set_viewport_width(&mut self, width: f32, now: Instant) {
        let before = self.context.breakpoint();
        self.context.viewport_width = width;
        if self.context.breakpoint() != before {
            tracing::debug!("chat input: breakpoint {} -> {}", before, self.context.breakpoint());
            let metrics = self.token_metrics();
            self.overflow.on_metrics_changed(metrics, now);
        }
    }

    fn token_metrics(&self) -> OverflowMetrics {
        OverflowMetrics::from(&self.tokens().overflow)
    }

    fn sync_metrics(&mut self) {
        let metrics = self.token_metrics();
        self.overflow.set_metrics(metrics);
    }

    // Attachments

    /// Attach a file. Returns false if its id is already attached.
    pub fn attach(&mut self, file: AttachedFile, now: Instant) -> bool {
        if !self.files.add(file) {
            return false;
        }
        self.overflow.on_items_changed(self.files.len(), now);
        true
    }

    pub fn detach(&mut self, id: &str, now: Instant) -> Option<AttachedFile> {
        let removed = self.files.remove(id)?;
        self.overflow.on_items_changed(self.files.len(), now);
        Some(removed)
    }

    pub fn attachments(&self) -> &AttachmentList {
        &self.files
    }

    pub fn visible_files(&self) -> Vec<&AttachedFile> {
        self.files.iter().take(self.overflow.cutoff()).collect()
    }

    pub fn hidden_files(&self) -> Vec<&AttachedFile> {
        self.files.iter().skip(self.overflow.cutoff()).collect()
    }

    /// Trigger label, `None` when every file is visible.
    ///
    /// Mobile viewports use the compact `+N` form.
    pub fn more_label(&self) -> Option<String> {
        let split = self.overflow.split();
        if !split.has_overflow() {
            return None;
        }
        let hidden = split.hidden_count();
        Some(match self.context.device_class() {
            DeviceClass::Mobile => format!("+{hidden}"),
            DeviceClass::Tablet | DeviceClass::Desktop => format!("+{hidden} more"),
        })
    }

    // Layout

    pub fn on_container_resize(&mut self, width: f32, now: Instant) {
        self.overflow.on_resize(width, now);
    }

    /// Returns true if the set of visible chips changed
    pub fn tick<P: LayoutProbe + ?Sized>(&mut self, now: Instant, chips: &P) -> bool {
        self.overflow.tick(now, chips)
    }

    /// Returns true if the set of visible chips changed
    pub fn on_layout_committed<P: LayoutProbe + ?Sized>(&mut self, chips: &P) -> bool {
        self.overflow.on_layout_committed(chips)
    }

    pub fn overflow(&self) -> &OverflowController {
        &self.overflow
    }

    pub fn unmount(&mut self) {
        self.overflow.unmount();
    }

    // Text and interaction

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn placeholder_text(&self) -> &str {
        &self.placeholder
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub fn state(&self) -> ChatInputState {
        if self.disabled {
            ChatInputState::Disabled
        } else if self.focused {
            ChatInputState::Focus
        } else if self.hovered {
            ChatInputState::Hover
        } else {
            ChatInputState::Default
        }
    }

    pub fn can_submit(&self) -> bool {
        !self.disabled && (!self.value.trim().is_empty() || !self.files.is_empty())
    }

    /// Take the trimmed text and all attachments, leaving the input empty.
    pub fn submit(&mut self, now: Instant) -> Option<ChatSubmission> {
        if !self.can_submit() {
            return None;
        }
        let text = self.value.trim().to_string();
        self.value.clear();
        let attachments = self.files.iter().cloned().collect();
        self.files.clear();
        self.overflow.on_items_changed(0, now);
        Some(ChatSubmission { text, attachments })
    }
}

impl Default for ChatInput {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blend_theme::ColorScheme;
    use std::time::Duration;

    fn files(n: usize) -> Vec<AttachedFile> {
        (0..n)
            .map(|i| AttachedFile::new(i.to_string(), format!("file-{i}.png")))
            .collect()
    }

    #[test]
    fn test_attach_duplicate_does_not_reset() {
        let t0 = Instant::now();
        let mut input = ChatInput::new();
        assert!(input.attach(AttachedFile::new("a", "a.png"), t0));
        input.on_layout_committed(&[50.0f32][..]);
        assert!(!input.overflow().is_settling());
        assert!(!input.attach(AttachedFile::new("a", "other.png"), t0));
        assert!(!input.overflow().is_settling());
        assert_eq!(input.attachments().len(), 1);
    }

    #[test]
    fn test_compact_label_on_mobile() {
        let t0 = Instant::now();
        let mut input =
            ChatInput::new().context(ResponsiveContext::new(375.0, ColorScheme::Light));
        for file in files(4) {
            input.attach(file, t0);
        }
        input.on_container_resize(200.0, t0);
        input.tick(t0 + Duration::from_millis(150), &[90.0f32; 4][..]);
        assert_eq!(input.visible_files().len(), 1);
        assert_eq!(input.hidden_files().len(), 3);
        assert_eq!(input.more_label().as_deref(), Some("+3"));
    }

    #[test]
    fn test_metrics_follow_breakpoint() {
        let mut input = ChatInput::new();
        let lg = *input.overflow().metrics();
        input.set_viewport_width(500.0, Instant::now());
        let sm = *input.overflow().metrics();
        assert_ne!(lg, sm);
        assert_eq!(sm, OverflowMetrics::from(&input.tokens().overflow));
    }

    #[test]
    fn test_breakpoint_switch_recomputes_cutoff() {
        let t0 = Instant::now();
        let chips = [100.0f32; 3];
        let mut input = ChatInput::new();
        for file in files(3) {
            input.attach(file, t0);
        }
        input.on_container_resize(330.0, t0);
        input.tick(t0 + Duration::from_millis(150), &chips[..]);
        assert_eq!(input.visible_files().len(), 1);

        // sm metrics fit a second chip: 100 + 6 + 100 + 24 + 88 + 6 = 324
        input.set_viewport_width(500.0, t0 + Duration::from_millis(200));
        assert!(input.overflow().is_settling());
        assert!(input.on_layout_committed(&chips[..]));
        assert_eq!(input.visible_files().len(), 2);
        assert_eq!(input.more_label().as_deref(), Some("+1"));

        // staying within sm changes nothing
        input.set_viewport_width(600.0, t0 + Duration::from_millis(300));
        assert!(!input.overflow().is_settling());
    }

    #[test]
    fn test_state_priority() {
        let mut input = ChatInput::new();
        assert_eq!(input.state(), ChatInputState::Default);
        input.set_hovered(true);
        assert_eq!(input.state(), ChatInputState::Hover);
        input.set_focused(true);
        assert_eq!(input.state(), ChatInputState::Focus);
        input.set_disabled(true);
        assert_eq!(input.state(), ChatInputState::Disabled);
    }

    #[test]
    fn test_submit_drains_input() {
        let t0 = Instant::now();
        let mut input = ChatInput::new().placeholder("Ask anything");
        assert!(input.submit(t0).is_none());

        input.set_value("  hello  ");
        input.attach(AttachedFile::new("1", "a.pdf").with_size(2048), t0);
        let sent = input.submit(t0).unwrap();
        assert_eq!(sent.text, "hello");
        assert_eq!(sent.attachments.len(), 1);
        assert_eq!(input.value(), "");
        assert!(input.attachments().is_empty());
        assert_eq!(input.more_label(), None);
        assert_eq!(input.placeholder_text(), "Ask anything");
    }
}
