use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::store::Collection;
use crate::store::records::Record;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Expense {
    #[schema(example = 1)]
    pub id: u64,

    #[schema(example = 1800.0)]
    pub amount: f64,

    #[schema(example = "cleaning supplies")]
    pub description: String,

    #[schema(example = "equipment")]
    pub category: String,

    #[schema(example = "2025-06-03", value_type = String, format = "date")]
    pub date: NaiveDate,
}

impl Record for Expense {
    const COLLECTION: Collection = Collection::Expenses;

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
}
