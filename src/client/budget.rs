/**
 * Budget Ledger
 *
 * Local-only daily and monthly budgets. Nothing here talks to the server.
 *
 * A daily budget stays in force until another one is set: looking up a day
 * without its own entry walks back one day at a time, up to 30 days, and
 * returns the nearest earlier entry. Past that window the budget is 0.
 */

use chrono::Days;
use std::collections::BTreeMap;

use crate::client::error::ClientError;
use crate::client::storage::Storage;
use crate::shared::dates::{format_date, parse_date};

pub const DAILY_BUDGETS_KEY: &str = "dailyBudgets";
pub const MONTHLY_BUDGET_KEY: &str = "monthlyBudget";

/// Days searched before a lookup gives up
pub const LOOKBACK_DAYS: u64 = 30;

#[derive(Debug, Clone)]
pub struct BudgetLedger {
    storage: Storage,
}

impl BudgetLedger {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    fn daily_budgets(&self) -> BTreeMap<String, f64> {
        self.storage.get_json(DAILY_BUDGETS_KEY).unwrap_or_default()
    }

    /// Store `amount` as the budget for `date` (`YYYY-MM-DD`)
    pub fn set_daily_budget(&self, amount: f64, date: &str) -> Result<(), ClientError> {
        let mut budgets = self.daily_budgets();
        budgets.insert(date.to_string(), amount);
        self.storage.set_json(DAILY_BUDGETS_KEY, &budgets)
    }

    /// Budget in force on `date`
    pub fn daily_budget(&self, date: &str) -> f64 {
        let budgets = self.daily_budgets();
        if let Some(amount) = budgets.get(date) {
            return *amount;
        }

        let Some(day) = parse_date(date) else {
            return 0.0;
        };
        (1..=LOOKBACK_DAYS)
            .filter_map(|back| day.checked_sub_days(Days::new(back)))
            .map(format_date)
            .find_map(|key| budgets.get(&key).copied())
            .unwrap_or(0.0)
    }

    pub fn set_monthly_budget(&self, amount: f64) -> Result<(), ClientError> {
        self.storage.set_json(MONTHLY_BUDGET_KEY, &amount)
    }

    /// Monthly budget, 0 when never set
    pub fn monthly_budget(&self) -> f64 {
        self.storage.get_json(MONTHLY_BUDGET_KEY).unwrap_or(0.0)
    }
}
