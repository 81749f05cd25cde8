//! Cost estimates from usage samples
//!
//! Every metric has a free allowance and a price per billing unit past it.
//! Database storage and download allowances are monthly; Firestore
//! allowances are daily and scale with the number of days in the estimate.

use crate::usage::UsageSnapshot;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How often a free allowance resets
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AllowancePeriod {
    Daily,
    Monthly,
}

/// Free allowance and overage price for one metric
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceTier {
    /// Usage free per period
    pub free: f64,
    pub period: AllowancePeriod,
    /// Dollars per `unit` of billable usage
    pub price: f64,
    pub unit: f64,
}

impl PriceTier {
    pub const fn new(free: f64, period: AllowancePeriod, price: f64, unit: f64) -> Self {
        Self {
            free,
            period,
            price,
            unit,
        }
    }

    /// Free allowance over an estimate of `days` days
    pub fn allowance(&self, days: u32) -> f64 {
        match self.period {
            AllowancePeriod::Daily => self.free * f64::from(days.max(1)),
            AllowancePeriod::Monthly => self.free,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    DatabaseStorage,
    DatabaseDownload,
    FirestoreReads,
    FirestoreWrites,
    FirestoreDeletes,
    FunctionInvocations,
}

impl Metric {
    pub const ALL: [Metric; 6] = [
        Metric::DatabaseStorage,
        Metric::DatabaseDownload,
        Metric::FirestoreReads,
        Metric::FirestoreWrites,
        Metric::FirestoreDeletes,
        Metric::FunctionInvocations,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Metric::DatabaseStorage => "Database storage (GB)",
            Metric::DatabaseDownload => "Database download (GB)",
            Metric::FirestoreReads => "Firestore reads",
            Metric::FirestoreWrites => "Firestore writes",
            Metric::FirestoreDeletes => "Firestore deletes",
            Metric::FunctionInvocations => "Function invocations",
        }
    }

    fn usage(self, snapshot: &UsageSnapshot) -> f64 {
        match self {
            Metric::DatabaseStorage => snapshot.database_storage_gb,
            Metric::DatabaseDownload => snapshot.database_download_gb,
            Metric::FirestoreReads => snapshot.firestore_reads as f64,
            Metric::FirestoreWrites => snapshot.firestore_writes as f64,
            Metric::FirestoreDeletes => snapshot.firestore_deletes as f64,
            Metric::FunctionInvocations => snapshot.function_invocations as f64,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Price list, defaulting to the published pay-as-you-go rates
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingSchedule {
    pub database_storage: PriceTier,
    pub database_download: PriceTier,
    pub firestore_reads: PriceTier,
    pub firestore_writes: PriceTier,
    pub firestore_deletes: PriceTier,
    pub function_invocations: PriceTier,
}

impl Default for PricingSchedule {
    fn default() -> Self {
        use AllowancePeriod::*;
        Self {
            database_storage: PriceTier::new(1.0, Monthly, 5.0, 1.0),
            database_download: PriceTier::new(10.0, Monthly, 1.0, 1.0),
            firestore_reads: PriceTier::new(50_000.0, Daily, 0.06, 100_000.0),
            firestore_writes: PriceTier::new(20_000.0, Daily, 0.18, 100_000.0),
            firestore_deletes: PriceTier::new(20_000.0, Daily, 0.02, 100_000.0),
            function_invocations: PriceTier::new(2_000_000.0, Monthly, 0.40, 1_000_000.0),
        }
    }
}

impl PricingSchedule {
    pub fn tier(&self, metric: Metric) -> &PriceTier {
        match metric {
            Metric::DatabaseStorage => &self.database_storage,
            Metric::DatabaseDownload => &self.database_download,
            Metric::FirestoreReads => &self.firestore_reads,
            Metric::FirestoreWrites => &self.firestore_writes,
            Metric::FirestoreDeletes => &self.firestore_deletes,
            Metric::FunctionInvocations => &self.function_invocations,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LineItem {
    pub metric: Metric,
    pub usage: f64,
    pub free_allowance: f64,
    pub billable: f64,
    /// Dollars
    pub cost: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CostEstimate {
    pub days: u32,
    pub items: Vec<LineItem>,
}

impl CostEstimate {
    /// Dollars across every line item
    pub fn total(&self) -> f64 {
        self.items.iter().map(|item| item.cost).sum()
    }

    pub fn item(&self, metric: Metric) -> Option<&LineItem> {
        self.items.iter().find(|item| item.metric == metric)
    }

    /// True when all usage fits in the free tier
    pub fn is_free(&self) -> bool {
        self.items.iter().all(|item| item.billable == 0.0)
    }
}

#[derive(Clone, Debug, Default)]
pub struct PricingCalculator {
    schedule: PricingSchedule,
}

impl PricingCalculator {
    pub fn new(schedule: PricingSchedule) -> Self {
        Self { schedule }
    }

    pub fn schedule(&self) -> &PricingSchedule {
        &self.schedule
    }

    /// Estimate the bill for `snapshot` accumulated over `days` days.
    ///
    /// A zero-day window is treated as one day.
    pub fn estimate(&self, snapshot: &UsageSnapshot, days: u32) -> CostEstimate {
        let items = Metric::ALL
            .iter()
            .map(|&metric| {
                let tier = self.schedule.tier(metric);
                let usage = metric.usage(snapshot).max(0.0);
                let free_allowance = tier.allowance(days);
                let billable = (usage - free_allowance).max(0.0);
                let cost = if tier.unit > 0.0 {
                    billable / tier.unit * tier.price
                } else {
                    0.0
                };
                LineItem {
                    metric,
                    usage,
                    free_allowance,
                    billable,
                    cost,
                }
            })
            .collect();

        let estimate = CostEstimate {
            days: days.max(1),
            items,
        };
        tracing::debug!("estimated ${:.2} over {} days", estimate.total(), estimate.days);
        estimate
    }
}
