//! In-memory loyalty points store.
//!
//! Holds one non-negative balance per customer and enforces the earn/redeem
//! rules. Customers are created on their first `earn` and never removed.

use crate::error::InvalidArgument;
use crate::notifier::{ConsoleNotifier, Notifier};
use log::debug;
use std::collections::HashMap;

/// Balances strictly below this value trigger a warning after a redemption.
pub const LOW_BALANCE_THRESHOLD: i64 = 10;

/// The points store.
///
/// Owns the balance map and reports low balances through its notifier.
///
/// # Invariants
///
/// - Every stored balance is `>= 0`
/// - Unknown customers have an implicit balance of 0 and are not inserted by reads
pub struct PointsStore<N: Notifier = ConsoleNotifier> {
    /// Balances indexed by customer id.
    balances: HashMap<String, i64>,

    notifier: N,
}

impl PointsStore<ConsoleNotifier> {
    /// Creates an empty store that warns on the terminal.
    pub fn new() -> Self {
        Self::with_notifier(ConsoleNotifier)
    }
}

impl Default for PointsStore<ConsoleNotifier> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Notifier> PointsStore<N> {
    /// Creates an empty store that reports through `notifier`.
    pub fn with_notifier(notifier: N) -> Self {
        PointsStore {
            balances: HashMap::new(),
            notifier,
        }
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Returns the balance for a customer, or 0 if the customer is unknown.
    pub fn balance(&self, customer_id: &str) -> Result<i64, InvalidArgument> {
        validate_customer_id(customer_id)?;
        Ok(self.current(customer_id))
    }

    /// Adds `points` to the customer's balance.
    ///
    /// Fails if the customer id is blank or `points` is not positive.
    pub fn earn(&mut self, customer_id: &str, points: i64) -> Result<(), InvalidArgument> {
        validate_customer_id(customer_id)?;
        validate_points(points)?;

        let balance = self.current(customer_id).saturating_add(points);
        self.balances.insert(customer_id.to_string(), balance);
        debug!("Customer {} earned {} points (balance {})", customer_id, points, balance);

        Ok(())
    }

    /// Deducts `points` from the customer's balance.
    ///
    /// Returns `Ok(false)` without touching the balance when the customer has
    /// fewer than `points`. On success, warns through the notifier if the new
    /// balance is below [`LOW_BALANCE_THRESHOLD`].
    pub fn redeem(&mut self, customer_id: &str, points: i64) -> Result<bool, InvalidArgument> {
        validate_customer_id(customer_id)?;
        validate_points(points)?;

        let current = self.current(customer_id);
        if current < points {
            debug!(
                "Customer {} cannot redeem {} points (balance {})",
                customer_id, points, current
            );
            return Ok(false);
        }

        let balance = current - points;
        self.balances.insert(customer_id.to_string(), balance);
        debug!("Customer {} redeemed {} points (balance {})", customer_id, points, balance);

        if balance < LOW_BALANCE_THRESHOLD {
            self.notifier.warning(&format!(
                "Warning: Customer {} has a low balance: {} points",
                customer_id, balance
            ));
        }

        Ok(true)
    }

    /// Number of customers with a materialized balance.
    #[cfg(test)]
    pub(crate) fn customer_count(&self) -> usize {
        self.balances.len()
    }

    fn current(&self, customer_id: &str) -> i64 {
        self.balances.get(customer_id).copied().unwrap_or(0)
    }
}

fn validate_customer_id(customer_id: &str) -> Result<(), InvalidArgument> {
    if customer_id.trim().is_empty() {
        return Err(InvalidArgument::EmptyCustomerId);
    }
    Ok(())
}

fn validate_points(points: i64) -> Result<(), InvalidArgument> {
    if points <= 0 {
        return Err(InvalidArgument::NonPositivePoints(points));
    }
    Ok(())
}
