//! Components and the layout state they own

mod attachment;
mod chat_input;
mod overflow;
mod overflow_controller;
mod responsive;

pub use attachment::{file_size_label, AttachedFile, AttachmentKind, AttachmentList};
pub use chat_input::{ChatInput, ChatSubmission};
pub use overflow::{compute_cutoff, OverflowMetrics, OverflowSplit};
pub use overflow_controller::{LayoutProbe, OverflowConfig, OverflowController};
pub use responsive::{
    device_class_for_width, use_responsive_tokens, DeviceClass, ResponsiveContext,
    MOBILE_MAX_WIDTH,
};
