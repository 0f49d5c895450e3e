use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Whole persisted document under the `fieldWorkerSalaries` key:
/// year -> month -> table. Serializes with stringified numeric keys,
/// e.g. `{"2025": {"6": {...}}}`.
pub type SalaryBook = BTreeMap<i32, BTreeMap<u32, SalaryTable>>;

/// One month of daily field-worker salaries.
///
/// Invariant: every date in `data` lies within the table's month and
/// carries an entry for every name in `workers`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct SalaryTable {
    /// Roster in display order; names are unique.
    #[schema(example = json!(["שלמה", "אבי"]))]
    pub workers: Vec<String>,

    /// date -> worker -> daily amount.
    #[schema(value_type = Object)]
    pub data: BTreeMap<NaiveDate, BTreeMap<String, f64>>,
}

impl SalaryTable {
    /// New table with the one cell replaced. A date row created here is
    /// first zero-filled for the whole roster, so the per-worker entries
    /// stay complete.
    pub fn set_amount(&self, date: NaiveDate, worker: &str, amount: f64) -> SalaryTable {
        let mut next = self.clone();
        let row = next.data.entry(date).or_insert_with(|| {
            self.workers.iter().map(|w| (w.clone(), 0.0)).collect()
        });
        row.insert(worker.to_string(), amount);
        next
    }

    /// New table with `name` appended to the roster and a zero entry
    /// backfilled on every existing date. A name already on the roster is
    /// silently ignored.
    pub fn add_worker(&self, name: &str) -> SalaryTable {
        if self.workers.iter().any(|w| w == name) {
            return self.clone();
        }
        let mut next = self.clone();
        next.workers.push(name.to_string());
        for row in next.data.values_mut() {
            row.insert(name.to_string(), 0.0);
        }
        next
    }

    pub fn total_for_worker(&self, worker: &str) -> f64 {
        self.data.values().filter_map(|row| row.get(worker)).sum()
    }

    pub fn total_for_date(&self, date: NaiveDate) -> f64 {
        self.data
            .get(&date)
            .map(|row| row.values().sum())
            .unwrap_or(0.0)
    }

    pub fn grand_total(&self) -> f64 {
        self.workers
            .iter()
            .map(|worker| self.total_for_worker(worker))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn two_day_table() -> SalaryTable {
        let mut data = BTreeMap::new();
        data.insert(
            date("2025-06-01"),
            BTreeMap::from([("A".to_string(), 100.0), ("B".to_string(), 50.0)]),
        );
        data.insert(
            date("2025-06-02"),
            BTreeMap::from([("A".to_string(), 0.0), ("B".to_string(), 0.0)]),
        );
        SalaryTable {
            workers: vec!["A".to_string(), "B".to_string()],
            data,
        }
    }

    #[test]
    fn totals_match_across_rows_columns_and_grand() {
        let table = two_day_table();

        assert_eq!(table.total_for_worker("A"), 100.0);
        assert_eq!(table.total_for_worker("B"), 50.0);
        assert_eq!(table.total_for_date(date("2025-06-01")), 150.0);
        assert_eq!(table.total_for_date(date("2025-06-02")), 0.0);
        assert_eq!(table.grand_total(), 150.0);

        let by_dates: f64 = table.data.keys().map(|d| table.total_for_date(*d)).sum();
        let by_workers: f64 = table
            .workers
            .iter()
            .map(|w| table.total_for_worker(w))
            .sum();
        assert_eq!(table.grand_total(), by_dates);
        assert_eq!(table.grand_total(), by_workers);
    }

    #[test]
    fn set_amount_replaces_one_cell_only() {
        let table = two_day_table();
        let next = table.set_amount(date("2025-06-02"), "B", 75.0);

        assert_eq!(next.data[&date("2025-06-02")]["B"], 75.0);
        assert_eq!(next.data[&date("2025-06-02")]["A"], 0.0);
        assert_eq!(next.data[&date("2025-06-01")], table.data[&date("2025-06-01")]);
        // the original is untouched
        assert_eq!(table.data[&date("2025-06-02")]["B"], 0.0);
    }

    #[test]
    fn set_amount_zero_fills_a_fresh_date_row() {
        let table = two_day_table();
        let next = table.set_amount(date("2025-06-03"), "A", 20.0);

        let row = &next.data[&date("2025-06-03")];
        assert_eq!(row["A"], 20.0);
        assert_eq!(row["B"], 0.0);
        assert_eq!(next.grand_total(), 170.0);
    }

    #[test]
    fn add_worker_backfills_zero_on_every_date() {
        let table = two_day_table();
        let next = table.add_worker("C");

        assert_eq!(next.workers, vec!["A", "B", "C"]);
        for row in next.data.values() {
            assert_eq!(row["C"], 0.0);
        }
        assert_eq!(next.grand_total(), table.grand_total());
    }

    #[test]
    fn add_worker_ignores_duplicates() {
        let table = two_day_table();
        let next = table.add_worker("B");
        assert_eq!(next, table);
    }

    #[test]
    fn book_round_trips_through_json_with_numeric_keys() {
        let mut book = SalaryBook::new();
        book.entry(2025).or_default().insert(6, two_day_table());

        let value = serde_json::to_value(&book).unwrap();
        assert!(value.get("2025").and_then(|y| y.get("6")).is_some());

        let back: SalaryBook = serde_json::from_value(value).unwrap();
        assert_eq!(back, book);
    }
}
