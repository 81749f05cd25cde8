//! Blend Core Primitives
//!
//! This crate provides the building blocks shared by every Blend crate:
//!
//! - **Color**: RGBA color values used by foundation and component tokens
//! - **State Machines**: Flat statecharts for component phases
//! - **Timers**: Frame-driven debounce and timeout primitives that take the
//!   current `Instant` as an argument instead of reading the clock
//!
//! # Example
//!
//! ```rust
//! use std::time::{Duration, Instant};
//! use blend_core::timer::{DebounceConfig, Debouncer};
//!
//! let start = Instant::now();
//! let mut debouncer = Debouncer::new(DebounceConfig::default());
//!
//! debouncer.trigger(start);
//! assert!(!debouncer.poll(start + Duration::from_millis(100)));
//! assert!(debouncer.poll(start + Duration::from_millis(150)));
//! ```

pub mod color;
pub mod fsm;
pub mod timer;

pub use color::Color;
pub use fsm::{EventId, StateId, StateMachine, StateMachineBuilder};
pub use timer::{DebounceConfig, Debouncer, Timeout};
