use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::store::Collection;
use crate::store::records::Record;

/// Customer with an open debt and the date payment is due.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OutstandingCustomer {
    #[schema(example = 1)]
    pub id: u64,

    #[schema(example = "מלון הים התיכון")]
    pub name: String,

    #[schema(example = 12500.0)]
    pub amount: f64,

    #[schema(example = "monthly cleaning services")]
    pub description: String,

    #[serde(rename = "dueDate")]
    #[schema(example = "2025-07-15", value_type = String, format = "date")]
    pub due_date: NaiveDate,
}

impl Record for OutstandingCustomer {
    const COLLECTION: Collection = Collection::OutstandingCustomers;

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
}
