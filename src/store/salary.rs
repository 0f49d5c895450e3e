use once_cell::sync::Lazy;
use rand::Rng;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::db::Backend;
use crate::errors::StoreError;
use crate::model::salary::{SalaryBook, SalaryTable};
use crate::store::Collection;
use crate::utils::dates::month_dates;

/// Roster a month starts out with before anyone is added.
static DEFAULT_WORKERS: Lazy<Vec<String>> = Lazy::new(|| {
    ["שלמה", "אבי", "שקד", "מאיר", "מאי", "יעקב"]
        .into_iter()
        .map(String::from)
        .collect()
});

/// Sample amounts fall in this range, like the seeded demo data.
const PLACEHOLDER_RANGE: std::ops::RangeInclusive<u32> = 250..=310;

/// Month-keyed salary tables behind the `fieldWorkerSalaries` document.
/// Writes follow the same persist-then-commit rule as the record stores.
pub struct SalaryGrid {
    backend: Arc<dyn Backend>,
    book: RwLock<SalaryBook>,
}

impl SalaryGrid {
    pub async fn open(backend: Arc<dyn Backend>) -> Result<Self, StoreError> {
        let key = Self::key();
        let book = match backend.get(&key).await {
            Ok(Some(value)) => serde_json::from_value(value)
                .map_err(|source| StoreError::Corrupt { key, source })?,
            Ok(None) => SalaryBook::new(),
            Err(source) => return Err(StoreError::Persistence { key, source }),
        };
        Ok(Self {
            backend,
            book: RwLock::new(book),
        })
    }

    fn key() -> String {
        Collection::FieldWorkerSalaries.to_string()
    }

    /// Whole document, all years and months.
    pub async fn book(&self) -> SalaryBook {
        self.book.read().await.clone()
    }

    /// The stored table for the month, or a freshly synthesized default.
    /// Synthesized tables are ephemeral until saved.
    pub async fn table(&self, year: i32, month: u32) -> SalaryTable {
        let book = self.book.read().await;
        if let Some(table) = book.get(&year).and_then(|months| months.get(&month)) {
            return table.clone();
        }
        drop(book);
        Self::default_table(year, month)
    }

    /// Default roster with a placeholder amount for every calendar day of
    /// the month.
    fn default_table(year: i32, month: u32) -> SalaryTable {
        let mut rng = rand::thread_rng();
        let mut data = BTreeMap::new();
        for date in month_dates(year, month) {
            let row = DEFAULT_WORKERS
                .iter()
                .map(|worker| {
                    let amount = rng.gen_range(PLACEHOLDER_RANGE) as f64;
                    (worker.clone(), amount)
                })
                .collect();
            data.insert(date, row);
        }
        SalaryTable {
            workers: DEFAULT_WORKERS.clone(),
            data,
        }
    }

    /// Replaces the month's table wholesale, last write wins.
    pub async fn save(
        &self,
        year: i32,
        month: u32,
        table: SalaryTable,
    ) -> Result<SalaryTable, StoreError> {
        let mut book = self.book.write().await;
        let mut next = book.clone();
        next.entry(year).or_default().insert(month, table.clone());
        self.persist(&next).await?;
        *book = next;
        Ok(table)
    }

    /// Replaces the whole document, all years and months at once.
    pub async fn replace_book(&self, next: SalaryBook) -> Result<SalaryBook, StoreError> {
        let mut book = self.book.write().await;
        self.persist(&next).await?;
        *book = next.clone();
        Ok(next)
    }

    async fn persist(&self, book: &SalaryBook) -> Result<(), StoreError> {
        let key = Self::key();
        let value = serde_json::to_value(book)
            .map_err(|source| StoreError::Corrupt { key: key.clone(), source })?;
        self.backend
            .set(&key, &value)
            .await
            .map_err(|source| StoreError::Persistence { key, source })
    }
}
