use crate::api::advance::{CreateAdvance, UpdateAdvance};
use crate::api::expense::{CreateExpense, UpdateExpense};
use crate::api::income::{CreateIncome, UpdateIncome};
use crate::api::outstanding_customer::{CreateOutstandingCustomer, UpdateOutstandingCustomer};
use crate::api::salary::{AddWorker, SetCell, TableTotals};
use crate::model::advance::Advance;
use crate::model::expense::Expense;
use crate::model::income::Income;
use crate::model::outstanding_customer::OutstandingCustomer;
use crate::model::salary::SalaryTable;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "VIP Finance API",
        version = "1.0.0",
        description = r#"
## VIP Finance

Backend for a small-business financial tracking dashboard.

### 🔹 Key Features
- **Income & Expenses**
  - Record, edit and delete transactions with category and date
- **Employee Advances**
  - Track salary advances and how they were paid out
- **Outstanding Customers**
  - Open debts with due dates
- **Field Worker Salaries**
  - Per-day, per-worker salary grid with row, column and grand totals

### 📦 Response Format
- JSON-based RESTful responses
- List endpoints come back sorted by the business date

### 💾 Storage
Collections persist as keyed JSON documents, on disk or in memory.

---
Built with **Rust**, **Actix Web**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::income::list_income,
        crate::api::income::create_income,
        crate::api::income::update_income,
        crate::api::income::delete_income,

        crate::api::expense::list_expenses,
        crate::api::expense::create_expense,
        crate::api::expense::update_expense,
        crate::api::expense::delete_expense,

        crate::api::advance::list_advances,
        crate::api::advance::create_advance,
        crate::api::advance::update_advance,
        crate::api::advance::delete_advance,

        crate::api::outstanding_customer::list_outstanding_customers,
        crate::api::outstanding_customer::create_outstanding_customer,
        crate::api::outstanding_customer::update_outstanding_customer,
        crate::api::outstanding_customer::delete_outstanding_customer,

        crate::api::salary::get_book,
        crate::api::salary::replace_book,
        crate::api::salary::get_table,
        crate::api::salary::save_table,
        crate::api::salary::add_worker,
        crate::api::salary::set_cell,
        crate::api::salary::totals
    ),
    components(
        schemas(
            Income,
            CreateIncome,
            UpdateIncome,
            Expense,
            CreateExpense,
            UpdateExpense,
            Advance,
            CreateAdvance,
            UpdateAdvance,
            OutstandingCustomer,
            CreateOutstandingCustomer,
            UpdateOutstandingCustomer,
            SalaryTable,
            AddWorker,
            SetCell,
            TableTotals
        )
    ),
    tags(
        (name = "Income", description = "Income record APIs"),
        (name = "Expenses", description = "Expense record APIs"),
        (name = "Advances", description = "Employee advance APIs"),
        (name = "Outstanding Customers", description = "Customer debt APIs"),
        (name = "Field Worker Salaries", description = "Daily salary grid APIs"),
    )
)]
pub struct ApiDoc;
