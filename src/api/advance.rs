use actix_web::{HttpResponse, Responder, web};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::model::advance::Advance;
use crate::store::AppState;
use crate::utils::amount::lenient_f64;

#[derive(Deserialize, ToSchema)]
pub struct CreateAdvance {
    #[schema(example = "צח")]
    pub employee: String,

    #[schema(example = 2500.0, value_type = f64)]
    #[serde(deserialize_with = "lenient_f64")]
    pub amount: f64,

    #[schema(example = "advance on salary")]
    pub description: String,

    #[schema(example = "מזומן")]
    pub method: String,

    #[schema(example = "2025-06-05", value_type = String, format = "date")]
    pub date: NaiveDate,
}

#[derive(Deserialize, ToSchema)]
pub struct UpdateAdvance {
    #[schema(example = "צח")]
    pub employee: String,

    #[schema(example = 3000.0, value_type = f64)]
    #[serde(deserialize_with = "lenient_f64")]
    pub amount: f64,

    #[schema(example = "advance on salary")]
    pub description: String,

    #[schema(example = "העברה בנקאית")]
    pub method: String,

    #[schema(example = "2025-06-05", value_type = String, format = "date")]
    pub date: NaiveDate,
}

#[utoipa::path(
    get,
    path = "/api/advances",
    responses(
        (status = 200, description = "All advance records, newest first", body = [Advance])
    ),
    tag = "Advances"
)]
pub async fn list_advances(state: web::Data<AppState>) -> impl Responder {
    let mut items = state.advances.list().await;
    items.sort_by(|a, b| b.date.cmp(&a.date));
    HttpResponse::Ok().json(items)
}

#[utoipa::path(
    post,
    path = "/api/advances",
    request_body = CreateAdvance,
    responses(
        (status = 201, description = "Advance record created", body = Advance),
        (status = 500, description = "Persistence failure")
    ),
    tag = "Advances"
)]
pub async fn create_advance(
    state: web::Data<AppState>,
    payload: web::Json<CreateAdvance>,
) -> actix_web::Result<impl Responder> {
    let payload = payload.into_inner();
    let record = state
        .advances
        .create(Advance {
            id: 0,
            employee: payload.employee,
            amount: payload.amount,
            description: payload.description,
            method: payload.method,
            date: payload.date,
        })
        .await?;
    Ok(HttpResponse::Created().json(record))
}

#[utoipa::path(
    put,
    path = "/api/advances/{id}",
    request_body = UpdateAdvance,
    params(("id", description = "Advance record ID")),
    responses(
        (status = 200, description = "Advance record replaced", body = Advance),
        (status = 404, description = "No record with this id")
    ),
    tag = "Advances"
)]
pub async fn update_advance(
    state: web::Data<AppState>,
    path: web::Path<u64>,
    payload: web::Json<UpdateAdvance>,
) -> actix_web::Result<impl Responder> {
    let id = path.into_inner();
    let payload = payload.into_inner();
    let record = state
        .advances
        .update(
            id,
            Advance {
                id,
                employee: payload.employee,
                amount: payload.amount,
                description: payload.description,
                method: payload.method,
                date: payload.date,
            },
        )
        .await?;
    Ok(HttpResponse::Ok().json(record))
}

#[utoipa::path(
    delete,
    path = "/api/advances/{id}",
    params(("id", description = "Advance record ID")),
    responses(
        (status = 204, description = "Advance record deleted"),
        (status = 404, description = "No record with this id")
    ),
    tag = "Advances"
)]
pub async fn delete_advance(
    state: web::Data<AppState>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    state.advances.delete(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
