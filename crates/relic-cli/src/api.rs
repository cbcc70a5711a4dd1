use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use relic_core::{RelicError, Report};
use relic_probe::SignalCollector;
use serde::Deserialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

pub struct ApiState {
    pub collector: SignalCollector,
}

pub fn api_router(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/api/analyze", post(analyze_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "relic-api"
    }))
}

#[derive(Deserialize)]
struct AnalyzeBody {
    domain: String,
}

async fn analyze_handler(
    State(state): State<Arc<ApiState>>,
    Json(body): Json<AnalyzeBody>,
) -> Result<Json<Report>, (StatusCode, Json<serde_json::Value>)> {
    match state.collector.collect(&body.domain).await {
        Ok(signals) => {
            let report = relic_score::assemble(signals);
            info!(
                domain = %report.signals.domain,
                score = report.score,
                risk = ?report.risk,
                "analysis served"
            );
            Ok(Json(report))
        }
        Err(RelicError::InvalidDomain(reason)) => Err((
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": format!("invalid domain: {reason}") })),
        )),
        Err(e) => {
            error!(error = %e, "analysis failed");
            // Internal detail stays out of the response body.
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": "internal error" })),
            ))
        }
    }
}

pub async fn run_api(
    bind: &str,
    port: u16,
    collector: SignalCollector,
) -> Result<(), Box<dyn std::error::Error>> {
    let state = Arc::new(ApiState { collector });
    let router = api_router(state);

    let addr = format!("{}:{}", bind, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("API server listening on {}", addr);
    axum::serve(listener, router).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request};
    use relic_probe::ProbeConfig;
    use tower::ServiceExt;

    fn router() -> Router {
        let collector = SignalCollector::new(ProbeConfig::default());
        api_router(Arc::new(ApiState { collector }))
    }

    async fn post_analyze(router: Router, body: &str) -> (StatusCode, serde_json::Value) {
        let resp = router
            .oneshot(
                Request::post("/api/analyze")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = serde_json::from_slice(&bytes).unwrap();
        (status, value)
    }

    #[tokio::test]
    async fn empty_domain_returns_400_with_error_body() {
        let (status, body) = post_analyze(router(), r#"{"domain": ""}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]
            .as_str()
            .unwrap()
            .starts_with("invalid domain"));
    }

    #[tokio::test]
    async fn malformed_domain_returns_400() {
        let (status, body) = post_analyze(router(), r#"{"domain": "no-tld"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.get("error").is_some());
    }

    #[tokio::test]
    async fn health_endpoint_reports_ok() {
        let resp = router()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
