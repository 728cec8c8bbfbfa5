//! Budget session
//!
//! A session owns the ledger, the category registry and the goal table for
//! one run of the application. The front end calls `load_all` once, issues
//! commands, and calls `save_all` once on the way out. Every command runs to
//! completion synchronously and failed commands leave the session usable.

use chrono::NaiveDate;

use crate::config::{BudgetPaths, Settings};
use crate::error::BudgetResult;
use crate::models::{BudgetGoals, CategoryRegistry, Ledger, Money, Totals};
use crate::services::{
    goal_progress, CategoryService, FilterQuery, GoalProgress, GoalService, InclusionSet,
    TransactionService,
};
use crate::storage::Storage;

pub struct BudgetSession {
    storage: Storage,
}

impl BudgetSession {
    /// Create a session; nothing is read until `load_all`
    pub fn new(paths: BudgetPaths, settings: &Settings) -> Self {
        Self {
            storage: Storage::new(paths, settings),
        }
    }

    /// Read every store. Missing data is not an error.
    pub fn load_all(&mut self) {
        self.storage.load_all();
    }

    /// Write every store
    pub fn save_all(&self) -> BudgetResult<()> {
        self.storage.save_all()
    }

    pub fn add_transaction(
        &mut self,
        amount_text: &str,
        category: &str,
        date: NaiveDate,
    ) -> BudgetResult<Totals> {
        TransactionService::new(&mut self.storage).add_transaction(amount_text, category, date)
    }

    pub fn clear_all(&mut self) -> Totals {
        TransactionService::new(&mut self.storage).clear_all()
    }

    pub fn run_filter(
        &self,
        search_text: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> InclusionSet {
        self.filter(&FilterQuery::new(search_text, start_date, end_date))
    }

    pub fn filter(&self, query: &FilterQuery) -> InclusionSet {
        crate::services::filter(self.ledger(), query)
    }

    pub fn add_category(&mut self, name: &str) -> BudgetResult<()> {
        CategoryService::new(&mut self.storage).add_category(name)
    }

    pub fn set_budget_goal(&mut self, category: &str, amount: Money) -> BudgetResult<()> {
        GoalService::new(&mut self.storage).set_budget_goal(category, amount)
    }

    pub fn get_goal(&self, category: &str) -> Option<Money> {
        self.goals().get_goal(category)
    }

    pub fn goal_progress(&self) -> Vec<GoalProgress> {
        goal_progress(self.goals(), self.ledger())
    }

    pub fn totals(&self) -> Totals {
        self.ledger().totals()
    }

    pub fn ledger(&self) -> &Ledger {
        self.storage.transactions.ledger()
    }

    pub fn categories(&self) -> &CategoryRegistry {
        self.storage.categories.registry()
    }

    pub fn goals(&self) -> &BudgetGoals {
        self.storage.goals.goals()
    }

    pub fn paths(&self) -> &BudgetPaths {
        self.storage.paths()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    fn open(dir: &TempDir, settings: &Settings) -> BudgetSession {
        let mut session = BudgetSession::new(BudgetPaths::with_base_dir(dir.path()), settings);
        session.load_all();
        session
    }

    #[test]
    fn test_full_session_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let settings = Settings::default();

        let mut session = open(&temp_dir, &settings);
        session.add_transaction("100.00", "Salary", date(5)).unwrap();
        session.add_transaction("30.00", "Food", date(6)).unwrap();
        session.add_category("Groceries").unwrap();
        session
            .set_budget_goal("Food", Money::from_cents(20000))
            .unwrap();
        session.save_all().unwrap();

        let reopened = open(&temp_dir, &settings);
        assert_eq!(reopened.ledger().serialize(), session.ledger().serialize());
        assert_eq!(reopened.totals(), session.totals());
        assert_eq!(reopened.totals().budget, Money::from_cents(7000));
        assert_eq!(reopened.categories().all().last().unwrap(), "Groceries");
        // Goals are session-only unless persistence is enabled
        assert_eq!(reopened.get_goal("Food"), None);
    }

    #[test]
    fn test_goals_survive_when_persisted() {
        let temp_dir = TempDir::new().unwrap();
        let settings = Settings {
            persist_goals: true,
            ..Settings::default()
        };

        let mut session = open(&temp_dir, &settings);
        session
            .set_budget_goal("Food", Money::from_cents(20000))
            .unwrap();
        session.save_all().unwrap();

        let reopened = open(&temp_dir, &settings);
        assert_eq!(reopened.get_goal("Food"), Some(Money::from_cents(20000)));
        assert_eq!(reopened.get_goal("Rent"), None);
    }

    #[test]
    fn test_run_filter_scenario() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = open(&temp_dir, &Settings::default());
        session.add_transaction("100.00", "Salary", date(5)).unwrap();
        session.add_transaction("30.00", "Food", date(6)).unwrap();

        let set = session.run_filter("food", date(1), date(31));
        assert_eq!(set.as_slice(), [false, true]);

        let all = session.run_filter("", date(5), date(6));
        assert_eq!(all.count(), 2);
        assert_eq!(session.ledger().len(), 2);
    }

    #[test]
    fn test_session_usable_after_failures() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = open(&temp_dir, &Settings::default());

        assert!(session.add_transaction("-1", "Food", date(1)).is_err());
        assert!(session.add_category("  ").is_err());
        assert!(session
            .set_budget_goal("Food", Money::from_cents(-100))
            .is_err());

        let totals = session.add_transaction("5", "Food", date(1)).unwrap();
        assert_eq!(totals.expenses, Money::from_cents(500));
        assert_eq!(session.clear_all(), Totals::default());
    }
}
