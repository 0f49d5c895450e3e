use actix_web::{HttpResponse, Responder, web};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::model::expense::Expense;
use crate::store::AppState;
use crate::utils::amount::lenient_f64;

#[derive(Deserialize, ToSchema)]
pub struct CreateExpense {
    #[schema(example = 1800.0, value_type = f64)]
    #[serde(deserialize_with = "lenient_f64")]
    pub amount: f64,

    #[schema(example = "cleaning supplies")]
    pub description: String,

    #[schema(example = "equipment")]
    pub category: String,

    #[schema(example = "2025-06-03", value_type = String, format = "date")]
    pub date: NaiveDate,
}

#[derive(Deserialize, ToSchema)]
pub struct UpdateExpense {
    #[schema(example = 2000.0, value_type = f64)]
    #[serde(deserialize_with = "lenient_f64")]
    pub amount: f64,

    #[schema(example = "cleaning supplies")]
    pub description: String,

    #[schema(example = "equipment")]
    pub category: String,

    #[schema(example = "2025-06-03", value_type = String, format = "date")]
    pub date: NaiveDate,
}

#[utoipa::path(
    get,
    path = "/api/expenses",
    responses(
        (status = 200, description = "All expense records, newest first", body = [Expense])
    ),
    tag = "Expenses"
)]
pub async fn list_expenses(state: web::Data<AppState>) -> impl Responder {
    let mut items = state.expenses.list().await;
    items.sort_by(|a, b| b.date.cmp(&a.date));
    HttpResponse::Ok().json(items)
}

#[utoipa::path(
    post,
    path = "/api/expenses",
    request_body = CreateExpense,
    responses(
        (status = 201, description = "Expense record created", body = Expense),
        (status = 500, description = "Persistence failure")
    ),
    tag = "Expenses"
)]
pub async fn create_expense(
    state: web::Data<AppState>,
    payload: web::Json<CreateExpense>,
) -> actix_web::Result<impl Responder> {
    let payload = payload.into_inner();
    let record = state
        .expenses
        .create(Expense {
            id: 0,
            amount: payload.amount,
            description: payload.description,
            category: payload.category,
            date: payload.date,
        })
        .await?;
    Ok(HttpResponse::Created().json(record))
}

#[utoipa::path(
    put,
    path = "/api/expenses/{id}",
    request_body = UpdateExpense,
    params(("id", description = "Expense record ID")),
    responses(
        (status = 200, description = "Expense record replaced", body = Expense),
        (status = 404, description = "No record with this id")
    ),
    tag = "Expenses"
)]
pub async fn update_expense(
    state: web::Data<AppState>,
    path: web::Path<u64>,
    payload: web::Json<UpdateExpense>,
) -> actix_web::Result<impl Responder> {
    let id = path.into_inner();
    let payload = payload.into_inner();
    let record = state
        .expenses
        .update(
            id,
            Expense {
                id,
                amount: payload.amount,
                description: payload.description,
                category: payload.category,
                date: payload.date,
            },
        )
        .await?;
    Ok(HttpResponse::Ok().json(record))
}

#[utoipa::path(
    delete,
    path = "/api/expenses/{id}",
    params(("id", description = "Expense record ID")),
    responses(
        (status = 204, description = "Expense record deleted"),
        (status = 404, description = "No record with this id")
    ),
    tag = "Expenses"
)]
pub async fn delete_expense(
    state: web::Data<AppState>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    state.expenses.delete(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
