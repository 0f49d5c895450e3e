use actix_web::{HttpResponse, Responder, web};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::model::income::Income;
use crate::store::AppState;
use crate::utils::amount::lenient_f64;

#[derive(Deserialize, ToSchema)]
pub struct CreateIncome {
    #[schema(example = 25000.0, value_type = f64)]
    #[serde(deserialize_with = "lenient_f64")]
    pub amount: f64,

    #[schema(example = "monthly retainer - client A")]
    pub description: String,

    #[schema(example = "monthly")]
    pub category: String,

    #[schema(example = "2025-06-01", value_type = String, format = "date")]
    pub date: NaiveDate,
}

/// PUT substitutes the whole record, so all fields are required.
#[derive(Deserialize, ToSchema)]
pub struct UpdateIncome {
    #[schema(example = 26000.0, value_type = f64)]
    #[serde(deserialize_with = "lenient_f64")]
    pub amount: f64,

    #[schema(example = "monthly retainer - client A")]
    pub description: String,

    #[schema(example = "monthly")]
    pub category: String,

    #[schema(example = "2025-06-01", value_type = String, format = "date")]
    pub date: NaiveDate,
}

#[utoipa::path(
    get,
    path = "/api/income",
    responses(
        (status = 200, description = "All income records, newest first", body = [Income])
    ),
    tag = "Income"
)]
pub async fn list_income(state: web::Data<AppState>) -> impl Responder {
    let mut items = state.income.list().await;
    items.sort_by(|a, b| b.date.cmp(&a.date));
    HttpResponse::Ok().json(items)
}

#[utoipa::path(
    post,
    path = "/api/income",
    request_body = CreateIncome,
    responses(
        (status = 201, description = "Income record created", body = Income),
        (status = 500, description = "Persistence failure")
    ),
    tag = "Income"
)]
pub async fn create_income(
    state: web::Data<AppState>,
    payload: web::Json<CreateIncome>,
) -> actix_web::Result<impl Responder> {
    let payload = payload.into_inner();
    let record = state
        .income
        .create(Income {
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
    path = "/api/income/{id}",
    request_body = UpdateIncome,
    params(("id", description = "Income record ID")),
    responses(
        (status = 200, description = "Income record replaced", body = Income),
        (status = 404, description = "No record with this id")
    ),
    tag = "Income"
)]
pub async fn update_income(
    state: web::Data<AppState>,
    path: web::Path<u64>,
    payload: web::Json<UpdateIncome>,
) -> actix_web::Result<impl Responder> {
    let id = path.into_inner();
    let payload = payload.into_inner();
    let record = state
        .income
        .update(
            id,
            Income {
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
    path = "/api/income/{id}",
    params(("id", description = "Income record ID")),
    responses(
        (status = 204, description = "Income record deleted"),
        (status = 404, description = "No record with this id")
    ),
    tag = "Income"
)]
pub async fn delete_income(
    state: web::Data<AppState>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    state.income.delete(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use crate::config::{Config, StorageKind};
    use crate::db::MemoryBackend;
    use crate::routes;
    use crate::store::AppState;
    use actix_web::{App, test, web};
    use serde_json::{Value, json};
    use std::sync::Arc;

    fn test_config() -> Config {
        Config {
            server_addr: String::new(),
            storage: StorageKind::Memory,
            data_dir: String::new(),
            namespace: "vip-finance".to_string(),
            api_prefix: "/api".to_string(),
        }
    }

    #[actix_web::test]
    async fn income_crud_over_http() {
        let state = web::Data::new(
            AppState::open(Arc::new(MemoryBackend::new())).await.unwrap(),
        );
        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .configure(|cfg| routes::configure(cfg, test_config())),
        )
        .await;

        // create; the string amount coerces leniently
        let req = test::TestRequest::post()
            .uri("/api/income")
            .set_json(json!({
                "amount": "100",
                "description": "x",
                "category": "daily",
                "date": "2025-06-01"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 201);
        let created: Value = test::read_body_json(resp).await;
        assert_eq!(created["id"], 1);
        assert_eq!(created["amount"], 100.0);

        let req = test::TestRequest::post()
            .uri("/api/income")
            .set_json(json!({
                "amount": 50,
                "description": "y",
                "category": "daily",
                "date": "2025-06-05"
            }))
            .to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(created["id"], 2);

        // list comes back newest first
        let req = test::TestRequest::get().uri("/api/income").to_request();
        let listed: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(listed[0]["id"], 2);
        assert_eq!(listed[1]["id"], 1);

        // update unknown id -> the mock API's 404 body
        let req = test::TestRequest::put()
            .uri("/api/income/99")
            .set_json(json!({
                "amount": 1,
                "description": "z",
                "category": "daily",
                "date": "2025-06-01"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"error": "Not found"}));

        // delete
        let req = test::TestRequest::delete().uri("/api/income/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 204);

        let req = test::TestRequest::get().uri("/api/income").to_request();
        let listed: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(listed.as_array().unwrap().len(), 1);
        assert_eq!(listed[0]["id"], 2);
    }
}
