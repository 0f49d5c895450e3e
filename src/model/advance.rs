use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::store::Collection;
use crate::store::records::Record;

/// Salary advance paid out to an employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Advance {
    #[schema(example = 1)]
    pub id: u64,

    #[schema(example = "צח")]
    pub employee: String,

    #[schema(example = 2500.0)]
    pub amount: f64,

    #[schema(example = "advance on salary")]
    pub description: String,

    /// Payment method, free text from the form ("מזומן", "העברה בנקאית", ...).
    #[schema(example = "מזומן")]
    pub method: String,

    #[schema(example = "2025-06-05", value_type = String, format = "date")]
    pub date: NaiveDate,
}

impl Record for Advance {
    const COLLECTION: Collection = Collection::Advances;

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
}
