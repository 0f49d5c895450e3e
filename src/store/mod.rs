pub mod records;
pub mod salary;

use std::sync::Arc;
use strum_macros::Display;

use crate::db::Backend;
use crate::errors::StoreError;
use crate::model::advance::Advance;
use crate::model::expense::Expense;
use crate::model::income::Income;
use crate::model::outstanding_customer::OutstandingCustomer;
use self::records::RecordStore;
use self::salary::SalaryGrid;

/// Storage keys of the persisted documents. The names are the ones the
/// clients already use as endpoints and localStorage suffixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Collection {
    #[strum(serialize = "income")]
    Income,
    #[strum(serialize = "expenses")]
    Expenses,
    #[strum(serialize = "advances")]
    Advances,
    #[strum(serialize = "outstandingCustomers")]
    OutstandingCustomers,
    #[strum(serialize = "fieldWorkerSalaries")]
    FieldWorkerSalaries,
}

/// All stores, opened once at startup and shared through `web::Data`.
pub struct AppState {
    pub income: RecordStore<Income>,
    pub expenses: RecordStore<Expense>,
    pub advances: RecordStore<Advance>,
    pub outstanding_customers: RecordStore<OutstandingCustomer>,
    pub salaries: SalaryGrid,
}

impl AppState {
    pub async fn open(backend: Arc<dyn Backend>) -> Result<Self, StoreError> {
        Ok(Self {
            income: RecordStore::open(backend.clone()).await?,
            expenses: RecordStore::open(backend.clone()).await?,
            advances: RecordStore::open(backend.clone()).await?,
            outstanding_customers: RecordStore::open(backend.clone()).await?,
            salaries: SalaryGrid::open(backend).await?,
        })
    }
}
