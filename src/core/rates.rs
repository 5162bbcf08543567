//! Hourly-rate lookup used by every labour-cost computation.

use crate::models::Employee;
use std::collections::HashMap;

/// Rate applied when neither the employee record nor the config provides one.
pub const DEFAULT_FALLBACK_RATE: f64 = 25.0;

/// Employee id → hourly rate, built from the current employee list.
///
/// Rates are never cached on entries: build a new book whenever the employee
/// list changes.
#[derive(Debug, Clone)]
pub struct RateBook {
    rates: HashMap<String, Option<f64>>,
    fallback: f64,
}

impl RateBook {
    /// Missing, zero, negative or non-finite rates fall back to `fallback`.
    /// With duplicated ids the first record wins, as in name lookups.
    pub fn new(employees: &[Employee], fallback: f64) -> Self {
        let mut rates = HashMap::new();
        for e in employees {
            rates
                .entry(e.id.clone())
                .or_insert_with(|| e.hourly_rate.filter(|r| r.is_finite() && *r > 0.0));
        }

        Self { rates, fallback }
    }

    pub fn fallback(&self) -> f64 {
        self.fallback
    }

    pub fn rate_for(&self, employee_id: &str) -> f64 {
        self.rates
            .get(employee_id)
            .copied()
            .flatten()
            .unwrap_or(self.fallback)
    }

    pub fn cost(&self, employee_id: &str, hours: f64) -> f64 {
        self.rate_for(employee_id) * hours
    }
}
