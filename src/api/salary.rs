use actix_web::{HttpResponse, Responder, web};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::BTreeMap;
use utoipa::ToSchema;

use crate::model::salary::{SalaryBook, SalaryTable};
use crate::store::AppState;
use crate::utils::amount::lenient_f64;

#[derive(Deserialize, ToSchema)]
pub struct AddWorker {
    #[schema(example = "יוסי")]
    pub name: String,
}

#[derive(Deserialize, ToSchema)]
pub struct SetCell {
    #[schema(example = "2025-06-01", value_type = String, format = "date")]
    pub date: NaiveDate,

    #[schema(example = "שלמה")]
    pub worker: String,

    /// Blank or unparseable input counts as 0.
    #[schema(example = 275.0, value_type = f64)]
    #[serde(deserialize_with = "lenient_f64")]
    pub amount: f64,
}

/// Grid footer sums: per worker, per date, and the grand total.
#[derive(Serialize, ToSchema)]
pub struct TableTotals {
    #[schema(value_type = Object)]
    pub per_worker: BTreeMap<String, f64>,

    #[schema(value_type = Object)]
    pub per_date: BTreeMap<NaiveDate, f64>,

    pub grand_total: f64,
}

fn month_exists(month: u32) -> bool {
    (1..=12).contains(&month)
}

#[utoipa::path(
    get,
    path = "/api/fieldWorkerSalaries",
    responses(
        (status = 200, description = "The whole salary document, year -> month -> table", body = Object)
    ),
    tag = "Field Worker Salaries"
)]
pub async fn get_book(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.salaries.book().await)
}

#[utoipa::path(
    put,
    path = "/api/fieldWorkerSalaries",
    request_body = Object,
    responses(
        (status = 200, description = "Document replaced wholesale", body = Object),
        (status = 500, description = "Persistence failure")
    ),
    tag = "Field Worker Salaries"
)]
pub async fn replace_book(
    state: web::Data<AppState>,
    payload: web::Json<SalaryBook>,
) -> actix_web::Result<impl Responder> {
    let book = state.salaries.replace_book(payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(book))
}

#[utoipa::path(
    get,
    path = "/api/fieldWorkerSalaries/{year}/{month}",
    params(
        ("year", description = "Calendar year"),
        ("month", description = "Month, 1-12")
    ),
    responses(
        (status = 200, description = "Stored table, or a synthesized default for an unseen month", body = SalaryTable),
        (status = 404, description = "Invalid month")
    ),
    tag = "Field Worker Salaries"
)]
pub async fn get_table(
    state: web::Data<AppState>,
    path: web::Path<(i32, u32)>,
) -> impl Responder {
    let (year, month) = path.into_inner();
    if !month_exists(month) {
        return HttpResponse::NotFound().json(json!({ "error": "Not found" }));
    }
    HttpResponse::Ok().json(state.salaries.table(year, month).await)
}

#[utoipa::path(
    put,
    path = "/api/fieldWorkerSalaries/{year}/{month}",
    request_body = SalaryTable,
    params(
        ("year", description = "Calendar year"),
        ("month", description = "Month, 1-12")
    ),
    responses(
        (status = 200, description = "Month replaced wholesale, last write wins", body = SalaryTable),
        (status = 404, description = "Invalid month"),
        (status = 500, description = "Persistence failure")
    ),
    tag = "Field Worker Salaries"
)]
pub async fn save_table(
    state: web::Data<AppState>,
    path: web::Path<(i32, u32)>,
    payload: web::Json<SalaryTable>,
) -> actix_web::Result<impl Responder> {
    let (year, month) = path.into_inner();
    if !month_exists(month) {
        return Ok(HttpResponse::NotFound().json(json!({ "error": "Not found" })));
    }
    let table = state.salaries.save(year, month, payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(table))
}

#[utoipa::path(
    post,
    path = "/api/fieldWorkerSalaries/{year}/{month}/workers",
    request_body = AddWorker,
    params(
        ("year", description = "Calendar year"),
        ("month", description = "Month, 1-12")
    ),
    responses(
        (status = 200, description = "Worker added with a zero entry on every date; duplicates are a no-op", body = SalaryTable),
        (status = 404, description = "Invalid month"),
        (status = 500, description = "Persistence failure")
    ),
    tag = "Field Worker Salaries"
)]
pub async fn add_worker(
    state: web::Data<AppState>,
    path: web::Path<(i32, u32)>,
    payload: web::Json<AddWorker>,
) -> actix_web::Result<impl Responder> {
    let (year, month) = path.into_inner();
    if !month_exists(month) {
        return Ok(HttpResponse::NotFound().json(json!({ "error": "Not found" })));
    }

    let table = state.salaries.table(year, month).await;
    let name = payload.name.trim();
    if name.is_empty() {
        return Ok(HttpResponse::Ok().json(table));
    }

    let table = state.salaries.save(year, month, table.add_worker(name)).await?;
    Ok(HttpResponse::Ok().json(table))
}

#[utoipa::path(
    put,
    path = "/api/fieldWorkerSalaries/{year}/{month}/cell",
    request_body = SetCell,
    params(
        ("year", description = "Calendar year"),
        ("month", description = "Month, 1-12")
    ),
    responses(
        (status = 200, description = "One cell replaced", body = SalaryTable),
        (status = 404, description = "Invalid month, unrostered worker, or date outside the month"),
        (status = 500, description = "Persistence failure")
    ),
    tag = "Field Worker Salaries"
)]
pub async fn set_cell(
    state: web::Data<AppState>,
    path: web::Path<(i32, u32)>,
    payload: web::Json<SetCell>,
) -> actix_web::Result<impl Responder> {
    let (year, month) = path.into_inner();
    if !month_exists(month) {
        return Ok(HttpResponse::NotFound().json(json!({ "error": "Not found" })));
    }
    let payload = payload.into_inner();
    if (payload.date.year(), payload.date.month()) != (year, month) {
        return Ok(HttpResponse::NotFound().json(json!({ "error": "Not found" })));
    }

    let table = state.salaries.table(year, month).await;
    if !table.workers.iter().any(|w| *w == payload.worker) {
        return Ok(HttpResponse::NotFound().json(json!({ "error": "Not found" })));
    }

    let next = table.set_amount(payload.date, &payload.worker, payload.amount);
    let table = state.salaries.save(year, month, next).await?;
    Ok(HttpResponse::Ok().json(table))
}

#[utoipa::path(
    get,
    path = "/api/fieldWorkerSalaries/{year}/{month}/totals",
    params(
        ("year", description = "Calendar year"),
        ("month", description = "Month, 1-12")
    ),
    responses(
        (status = 200, description = "Per-worker, per-date and grand totals", body = TableTotals),
        (status = 404, description = "Invalid month")
    ),
    tag = "Field Worker Salaries"
)]
pub async fn totals(
    state: web::Data<AppState>,
    path: web::Path<(i32, u32)>,
) -> impl Responder {
    let (year, month) = path.into_inner();
    if !month_exists(month) {
        return HttpResponse::NotFound().json(json!({ "error": "Not found" }));
    }

    let table = state.salaries.table(year, month).await;
    let per_worker: BTreeMap<String, f64> = table
        .workers
        .iter()
        .map(|w| (w.clone(), table.total_for_worker(w)))
        .collect();
    let per_date: BTreeMap<NaiveDate, f64> = table
        .data
        .keys()
        .map(|d| (*d, table.total_for_date(*d)))
        .collect();
    HttpResponse::Ok().json(TableTotals {
        per_worker,
        per_date,
        grand_total: table.grand_total(),
    })
}
