//! Blend Monitor
//!
//! Backend for the design system's monitoring dashboard:
//!
//! - [`store`]: the realtime store interface and an in-memory implementation
//! - [`usage`]: usage samples kept in the store
//! - [`pricing`]: cost estimates for a usage sample
//!
//! ```rust
//! use blend_monitor::{MemoryStore, PricingCalculator, UsageClient, UsageSnapshot};
//!
//! let mut client = UsageClient::new(MemoryStore::new());
//! client.record(&UsageSnapshot { firestore_reads: 80_000, ..Default::default() })?;
//!
//! let latest = client.latest().unwrap_or_default();
//! let estimate = PricingCalculator::default().estimate(&latest, 1);
//! assert!(estimate.total() > 0.0);
//! # Ok::<(), blend_monitor::StoreError>(())
//! ```

pub mod pricing;
pub mod push_id;
pub mod store;
pub mod usage;

pub use pricing::{
    AllowancePeriod, CostEstimate, LineItem, Metric, PriceTier, PricingCalculator,
    PricingSchedule,
};
pub use push_id::{decode_timestamp, PushIdGenerator};
pub use store::{
    ChildAddedCallback, ListenerId, MemoryStore, Store, StoreError, StorePath,
};
pub use usage::{UsageClient, UsageSnapshot};
