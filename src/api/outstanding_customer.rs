use actix_web::{HttpResponse, Responder, web};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::model::outstanding_customer::OutstandingCustomer;
use crate::store::AppState;
use crate::utils::amount::lenient_f64;

#[derive(Deserialize, ToSchema)]
pub struct CreateOutstandingCustomer {
    #[schema(example = "מלון הים התיכון")]
    pub name: String,

    #[schema(example = 12500.0, value_type = f64)]
    #[serde(deserialize_with = "lenient_f64")]
    pub amount: f64,

    #[schema(example = "monthly cleaning services")]
    pub description: String,

    #[serde(rename = "dueDate")]
    #[schema(example = "2025-07-15", value_type = String, format = "date")]
    pub due_date: NaiveDate,
}

#[derive(Deserialize, ToSchema)]
pub struct UpdateOutstandingCustomer {
    #[schema(example = "מלון הים התיכון")]
    pub name: String,

    #[schema(example = 8000.0, value_type = f64)]
    #[serde(deserialize_with = "lenient_f64")]
    pub amount: f64,

    #[schema(example = "remaining balance")]
    pub description: String,

    #[serde(rename = "dueDate")]
    #[schema(example = "2025-07-20", value_type = String, format = "date")]
    pub due_date: NaiveDate,
}

#[utoipa::path(
    get,
    path = "/api/outstandingCustomers",
    responses(
        (status = 200, description = "All outstanding customers, earliest due date first", body = [OutstandingCustomer])
    ),
    tag = "Outstanding Customers"
)]
pub async fn list_outstanding_customers(state: web::Data<AppState>) -> impl Responder {
    let mut items = state.outstanding_customers.list().await;
    items.sort_by(|a, b| a.due_date.cmp(&b.due_date));
    HttpResponse::Ok().json(items)
}

#[utoipa::path(
    post,
    path = "/api/outstandingCustomers",
    request_body = CreateOutstandingCustomer,
    responses(
        (status = 201, description = "Outstanding customer created", body = OutstandingCustomer),
        (status = 500, description = "Persistence failure")
    ),
    tag = "Outstanding Customers"
)]
pub async fn create_outstanding_customer(
    state: web::Data<AppState>,
    payload: web::Json<CreateOutstandingCustomer>,
) -> actix_web::Result<impl Responder> {
    let payload = payload.into_inner();
    let record = state
        .outstanding_customers
        .create(OutstandingCustomer {
            id: 0,
            name: payload.name,
            amount: payload.amount,
            description: payload.description,
            due_date: payload.due_date,
        })
        .await?;
    Ok(HttpResponse::Created().json(record))
}

#[utoipa::path(
    put,
    path = "/api/outstandingCustomers/{id}",
    request_body = UpdateOutstandingCustomer,
    params(("id", description = "Outstanding customer ID")),
    responses(
        (status = 200, description = "Outstanding customer replaced", body = OutstandingCustomer),
        (status = 404, description = "No record with this id")
    ),
    tag = "Outstanding Customers"
)]
pub async fn update_outstanding_customer(
    state: web::Data<AppState>,
    path: web::Path<u64>,
    payload: web::Json<UpdateOutstandingCustomer>,
) -> actix_web::Result<impl Responder> {
    let id = path.into_inner();
    let payload = payload.into_inner();
    let record = state
        .outstanding_customers
        .update(
            id,
            OutstandingCustomer {
                id,
                name: payload.name,
                amount: payload.amount,
                description: payload.description,
                due_date: payload.due_date,
            },
        )
        .await?;
    Ok(HttpResponse::Ok().json(record))
}

#[utoipa::path(
    delete,
    path = "/api/outstandingCustomers/{id}",
    params(("id", description = "Outstanding customer ID")),
    responses(
        (status = 204, description = "Outstanding customer deleted"),
        (status = 404, description = "No record with this id")
    ),
    tag = "Outstanding Customers"
)]
pub async fn delete_outstanding_customer(
    state: web::Data<AppState>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    state.outstanding_customers.delete(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
