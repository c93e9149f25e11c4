//! # Price Handlers
//!
//! `GET /prices` quotes a ticket; `PUT /prices` sets a base price.
//!
//! ## Quote Flow
//! ```text
//! ?type=1jour&age=70&date=2019-02-11
//!       │
//!       ▼
//! validation::parse_*        type strict, age/date lenient
//!       │
//!       ▼
//! PriceCatalog::base_price   None → 404
//! HolidayCalendar::holidays  only for a dated day ticket
//!       │
//!       ▼
//! pricing::quote             pure
//!       │
//!       ▼
//! {"cost": 23}
//! ```

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use tracing::{debug, info, warn};

use lift_core::validation::{parse_age, parse_base_price, parse_ticket_type, parse_visit_date};
use lift_core::{pricing, CoreError, HolidaySet, PriceResponse, PricingRule};

use crate::error::ApiResult;
use crate::AppState;

/// Query string of `GET /prices`.
///
/// Every field is optional text so that parsing policy lives in
/// `lift_core::validation`, not in the extractor.
#[derive(Debug, Default, Deserialize)]
pub struct PriceQuery {
    #[serde(rename = "type")]
    pub ticket_type: Option<String>,
    pub age: Option<String>,
    pub date: Option<String>,
}

/// Query string of `PUT /prices`.
#[derive(Debug, Default, Deserialize)]
pub struct SetPriceQuery {
    #[serde(rename = "type")]
    pub ticket_type: Option<String>,
    pub cost: Option<String>,
}

/// `GET /prices?type=&age=&date=`
pub async fn get_price(
    State(state): State<AppState>,
    Query(query): Query<PriceQuery>,
) -> ApiResult<Json<PriceResponse>> {
    let ticket_type = parse_ticket_type(query.ticket_type.as_deref())?;

    let age = parse_age(query.age.as_deref());
    if age.is_none() {
        if let Some(raw) = query.age.as_deref().filter(|raw| !raw.trim().is_empty()) {
            warn!(age = %raw, "Unparseable age, pricing without age");
        }
    }

    let date = parse_visit_date(query.date.as_deref());
    if date.is_none() {
        if let Some(raw) = query.date.as_deref().filter(|raw| !raw.trim().is_empty()) {
            warn!(date = %raw, "Unparseable date, pricing without date");
        }
    }

    let base_price = state
        .prices
        .base_price(&ticket_type)
        .await?
        .ok_or_else(|| CoreError::BasePriceNotFound(ticket_type.to_string()))?;

    // Holidays only matter for a dated day-rule ticket
    let holidays = match (ticket_type.pricing_rule(), date) {
        (PricingRule::Day, Some(_)) => state.holidays.holidays().await?,
        _ => HolidaySet::new(),
    };

    let quote = pricing::quote(&ticket_type, age, date, base_price, &holidays);

    debug!(
        ticket_type = %ticket_type,
        base_price = %base_price,
        bracket = ?quote.bracket,
        reduction = quote.reduction_percent,
        cost = %quote.cost,
        "Priced ticket"
    );

    Ok(Json(PriceResponse::from(quote)))
}

/// `PUT /prices?type=&cost=`
pub async fn set_base_price(
    State(state): State<AppState>,
    Query(query): Query<SetPriceQuery>,
) -> ApiResult<()> {
    let ticket_type = parse_ticket_type(query.ticket_type.as_deref())?;
    let price = parse_base_price(query.cost.as_deref())?;

    state.prices.set_base_price(&ticket_type, price).await?;

    info!(ticket_type = %ticket_type, cost = %price, "Base price updated");
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use axum::Router;
    use chrono::NaiveDate;
    use tower::ServiceExt;

    use lift_core::{InMemoryCatalog, Price, TicketType};

    use crate::{router, AppState};

    fn reference_catalog() -> Arc<InMemoryCatalog> {
        let holidays = [(2019, 2, 18), (2019, 2, 25), (2019, 3, 4)]
            .into_iter()
            .map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap());

        Arc::new(InMemoryCatalog::with_data(
            [
                (TicketType::from("1jour"), Price::from_units(35)),
                (TicketType::Night, Price::from_units(19)),
            ],
            holidays,
        ))
    }

    fn app() -> Router {
        let catalog = reference_catalog();
        router(AppState::new(catalog.clone(), catalog))
    }

    async fn send(app: &Router, method: Method, uri: &str) -> (StatusCode, String) {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    async fn cost_of(app: &Router, uri: &str) -> u32 {
        let (status, body) = send(app, Method::GET, uri).await;
        assert_eq!(status, StatusCode::OK, "GET {} → {}", uri, body);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        json["cost"].as_u64().unwrap() as u32
    }

    #[tokio::test]
    async fn test_get_returns_cost_json() {
        let app = app();
        let (status, body) = send(&app, Method::GET, "/prices?type=1jour").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, r#"{"cost":35}"#);
    }

    #[tokio::test]
    async fn test_day_pricing_over_http() {
        let app = app();
        // 2019-02-11 is a plain Monday, 2019-02-18 a holiday Monday
        assert_eq!(cost_of(&app, "/prices?type=1jour&date=2019-02-11").await, 23);
        assert_eq!(cost_of(&app, "/prices?type=1jour&date=2019-02-18").await, 35);
        assert_eq!(cost_of(&app, "/prices?type=1jour&age=5").await, 0);
        assert_eq!(cost_of(&app, "/prices?type=1jour&age=10&date=2019-02-11").await, 25);
        // 35 × 0.75 × 0.65 = 17.06 → 18
        assert_eq!(cost_of(&app, "/prices?type=1jour&age=70&date=2019-02-11").await, 18);
    }

    #[tokio::test]
    async fn test_night_pricing_over_http() {
        let app = app();
        assert_eq!(cost_of(&app, "/prices?type=night").await, 0);
        assert_eq!(cost_of(&app, "/prices?type=night&age=30").await, 19);
        assert_eq!(cost_of(&app, "/prices?type=night&age=70").await, 8);
    }

    #[tokio::test]
    async fn test_bad_age_and_date_degrade() {
        let app = app();
        assert_eq!(cost_of(&app, "/prices?type=1jour&age=abc").await, 35);
        assert_eq!(cost_of(&app, "/prices?type=1jour&date=not-a-date").await, 35);
        assert_eq!(cost_of(&app, "/prices?type=night&age=-3").await, 0);
    }

    #[tokio::test]
    async fn test_numeric_age_uses_leading_integer() {
        let app = app();
        // 12.5 is a youth: 35 × 0.7 = 24.5 → 25
        assert_eq!(cost_of(&app, "/prices?type=1jour&age=12.5").await, 25);
        // Past u32::MAX is still a senior: 19 × 0.4 = 7.6 → 8
        assert_eq!(cost_of(&app, "/prices?type=night&age=4294967296").await, 8);
    }

    #[tokio::test]
    async fn test_missing_type_is_bad_request() {
        let app = app();
        let (status, body) = send(&app, Method::GET, "/prices?age=30").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("VALIDATION_ERROR"));
    }

    #[tokio::test]
    async fn test_unknown_type_is_not_found() {
        let app = app();
        let (status, body) = send(&app, Method::GET, "/prices?type=week").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("NOT_FOUND"));
    }

    #[tokio::test]
    async fn test_put_then_get() {
        let app = app();

        let (status, body) = send(&app, Method::PUT, "/prices?type=week&cost=120").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.is_empty());

        assert_eq!(cost_of(&app, "/prices?type=week&age=30").await, 120);

        // Overwrite
        send(&app, Method::PUT, "/prices?type=night&cost=25").await;
        assert_eq!(cost_of(&app, "/prices?type=night&age=30").await, 25);
    }

    #[tokio::test]
    async fn test_put_rejects_invalid_cost() {
        let app = app();
        for uri in [
            "/prices?type=night",
            "/prices?type=night&cost=abc",
            "/prices?type=night&cost=-5",
            "/prices?type=night&cost=12.5",
            "/prices?cost=10",
        ] {
            let (status, _) = send(&app, Method::PUT, uri).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "PUT {}", uri);
        }

        // Unchanged
        assert_eq!(cost_of(&app, "/prices?type=night&age=30").await, 19);
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(&app(), Method::GET, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "OK");
    }
}
