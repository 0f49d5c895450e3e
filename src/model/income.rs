use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::store::Collection;
use crate::store::records::Record;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "amount": 25000.0,
        "description": "monthly retainer - client A",
        "category": "monthly",
        "date": "2025-06-01"
    })
)]
pub struct Income {
    #[schema(example = 1)]
    pub id: u64,

    #[schema(example = 25000.0)]
    pub amount: f64,

    #[schema(example = "monthly retainer - client A")]
    pub description: String,

    #[schema(example = "monthly")]
    pub category: String,

    #[schema(example = "2025-06-01", value_type = String, format = "date")]
    pub date: NaiveDate,
}

impl Record for Income {
    const COLLECTION: Collection = Collection::Income;

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
}
