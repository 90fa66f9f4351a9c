/**
 * Expenses Cache
 *
 * Mirror of the caller's expenses under the `expenses` key. Each mutation
 * patches the local list with the server's answer and then refetches the
 * whole collection. A failed refetch leaves the patched list in place.
 */

use crate::client::api::ApiClient;
use crate::client::cache::{report_failure, require_auth, save_mirror};
use crate::client::error::ClientError;
use crate::client::notify::Notifier;
use crate::client::storage::Storage;
use crate::shared::{DeleteResponse, Expense, ExpenseUpdate, NewExpense};

pub const EXPENSES_KEY: &str = "expenses";

#[derive(Debug)]
pub struct ExpenseCache {
    api: ApiClient,
    storage: Storage,
    notifier: Notifier,
    expenses: Vec<Expense>,
}

impl ExpenseCache {
    pub fn new(api: ApiClient, storage: Storage, notifier: Notifier) -> Self {
        let expenses = storage.get_json(EXPENSES_KEY).unwrap_or_default();
        Self {
            api,
            storage,
            notifier,
            expenses,
        }
    }

    pub fn all(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn by_date(&self, date: &str) -> Vec<&Expense> {
        self.expenses.iter().filter(|e| e.date == date).collect()
    }

    /// Expenses whose date starts with `month` (`YYYY-MM`)
    pub fn by_month(&self, month: &str) -> Vec<&Expense> {
        self.expenses
            .iter()
            .filter(|e| e.date.starts_with(month))
            .collect()
    }

    pub fn total_by_date(&self, date: &str) -> f64 {
        self.by_date(date).iter().map(|e| e.amount).sum()
    }

    pub fn total_by_month(&self, month: &str) -> f64 {
        self.by_month(month).iter().map(|e| e.amount).sum()
    }

    pub async fn fetch(&mut self) -> Result<(), ClientError> {
        if !self.api.has_token() {
            self.replace(Vec::new());
            return Ok(());
        }

        let expenses: Vec<Expense> = self.api.get("/api/expenses").await.map_err(|e| {
            tracing::error!("Failed to fetch expenses: {}", e);
            e
        })?;
        self.replace(expenses);
        Ok(())
    }

    pub async fn add(&mut self, expense: &NewExpense) -> Result<Expense, ClientError> {
        require_auth(&self.api, &self.notifier, "add expenses")?;

        let created: Expense = self
            .api
            .post("/api/expenses", expense)
            .await
            .map_err(|e| report_failure(&self.notifier, "add expense", e))?;

        self.expenses.push(created.clone());
        self.save();
        self.notifier.success("Expense added!");
        self.refetch().await;
        Ok(created)
    }

    pub async fn edit(&mut self, id: &str, update: &ExpenseUpdate) -> Result<Expense, ClientError> {
        require_auth(&self.api, &self.notifier, "edit expenses")?;

        let updated: Expense = self
            .api
            .put(&format!("/api/expenses/{id}"), update)
            .await
            .map_err(|e| report_failure(&self.notifier, "edit expense", e))?;

        if let Some(slot) = self.expenses.iter_mut().find(|e| e.id == updated.id) {
            *slot = updated.clone();
            self.save();
        }
        self.notifier.success("Expense updated!");
        self.refetch().await;
        Ok(updated)
    }

    pub async fn delete(&mut self, id: &str) -> Result<(), ClientError> {
        require_auth(&self.api, &self.notifier, "delete expenses")?;

        let _: DeleteResponse = self
            .api
            .delete(&format!("/api/expenses/{id}"))
            .await
            .map_err(|e| report_failure(&self.notifier, "delete expense", e))?;

        self.expenses.retain(|e| e.id != id);
        self.save();
        self.notifier.success("Expense deleted!");
        self.refetch().await;
        Ok(())
    }

    async fn refetch(&mut self) {
        // fetch logs its own failure
        let _ = self.fetch().await;
    }

    fn replace(&mut self, expenses: Vec<Expense>) {
        self.expenses = expenses;
        self.save();
    }

    fn save(&self) {
        save_mirror(&self.storage, EXPENSES_KEY, &self.expenses);
    }
}
