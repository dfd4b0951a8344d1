use axum::{
    Router,
    extract::{Json, Query},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Deserializer, Serialize};
use std::net::SocketAddr;
use tokio::net::TcpListener;

use crate::render::{ChartCapture, InputError, ListCapture, PortfolioView, Presenter, RawInputs};

const INDEX_HTML: &str = include_str!("../../web/index.html");
const STYLES_CSS: &str = include_str!("../../web/styles.css");
const APP_JS: &str = include_str!("../../web/app.js");

const DEFAULT_AGE: &str = "30";
const DEFAULT_SIMPLICITY: &str = "1";
const DEFAULT_RISK_LEVEL: &str = "2";

/// A form field as it arrives over the wire: query strings carry text, JSON
/// bodies may carry numbers, text or an explicit `null`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
enum FieldValue {
    Number(f64),
    Text(String),
    Null,
}

impl FieldValue {
    /// `null` reads as an empty field, which no parser accepts as a number.
    fn into_text(self) -> String {
        match self {
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Text(s) => s,
            FieldValue::Null => String::new(),
        }
    }
}

/// Missing fields take the page defaults; a present field, `null` included,
/// is kept as sent.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct PortfolioPayload {
    #[serde(deserialize_with = "present_field")]
    age: Option<FieldValue>,
    #[serde(deserialize_with = "present_field")]
    simplicity: Option<FieldValue>,
    #[serde(deserialize_with = "present_field")]
    risk_level: Option<FieldValue>,
}

fn present_field<'de, D>(deserializer: D) -> Result<Option<FieldValue>, D::Error>
where
    D: Deserializer<'de>,
{
    FieldValue::deserialize(deserializer).map(Some)
}

#[derive(Debug)]
struct FormFields {
    age: String,
    simplicity: String,
    risk_level: String,
}

impl FormFields {
    fn from_payload(payload: PortfolioPayload) -> Self {
        let field = |value: Option<FieldValue>, default: &str| {
            value
                .map(FieldValue::into_text)
                .unwrap_or_else(|| default.to_string())
        };
        Self {
            age: field(payload.age, DEFAULT_AGE),
            simplicity: field(payload.simplicity, DEFAULT_SIMPLICITY),
            risk_level: field(payload.risk_level, DEFAULT_RISK_LEVEL),
        }
    }

    fn raw(&self) -> RawInputs<'_> {
        RawInputs {
            age: &self.age,
            simplicity: &self.simplicity,
            risk_level: &self.risk_level,
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

pub fn router() -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/index.html", get(index_handler))
        .route("/styles.css", get(styles_handler))
        .route("/app.js", get(app_js_handler))
        .route("/api/health", get(health_handler))
        .route(
            "/api/portfolio",
            get(portfolio_get_handler).post(portfolio_post_handler),
        )
        .fallback(not_found_handler)
}

pub async fn run_http_server(addr: SocketAddr) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Portfolio builder listening on http://{addr}");
    tracing::info!("Local access: http://127.0.0.1:{}/", addr.port());

    axum::serve(listener, router()).await
}

async fn index_handler() -> impl IntoResponse {
    with_cache_control(Html(INDEX_HTML))
}

async fn styles_handler() -> impl IntoResponse {
    with_cache_control((
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        STYLES_CSS,
    ))
}

async fn app_js_handler() -> impl IntoResponse {
    with_cache_control((
        [(
            header::CONTENT_TYPE,
            "application/javascript; charset=utf-8",
        )],
        APP_JS,
    ))
}

async fn health_handler() -> Response {
    json_response(StatusCode::OK, HealthResponse { status: "ok" })
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn portfolio_get_handler(Query(payload): Query<PortfolioPayload>) -> Response {
    portfolio_handler_impl(payload)
}

async fn portfolio_post_handler(Json(payload): Json<PortfolioPayload>) -> Response {
    portfolio_handler_impl(payload)
}

fn portfolio_handler_impl(payload: PortfolioPayload) -> Response {
    let fields = FormFields::from_payload(payload);
    match build_portfolio_response(&fields) {
        Ok(response) => json_response(StatusCode::OK, response),
        Err(err) => error_response(StatusCode::UNPROCESSABLE_ENTITY, &err.to_string()),
    }
}

/// Each request gets its own presenter, so nothing is shared between requests.
fn build_portfolio_response(fields: &FormFields) -> Result<PortfolioView, InputError> {
    let mut presenter = Presenter::new(ChartCapture::default(), ListCapture::default());
    presenter.update(&fields.raw())
}

fn with_cache_control<R: IntoResponse>(response: R) -> Response {
    let mut response = response.into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        header::HeaderValue::from_static("no-store"),
    );
    response
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    with_cache_control((status, Json(body)))
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}

#[cfg(test)]
fn fields_from_json(json: &str) -> Result<FormFields, String> {
    let payload = serde_json::from_str::<PortfolioPayload>(json)
        .map_err(|e| format!("Invalid API JSON payload: {e}"))?;
    Ok(FormFields::from_payload(payload))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    fn assert_golden_snapshot(path: &str, actual: &str) {
        let update = matches!(
            std::env::var("UPDATE_GOLDEN").as_deref(),
            Ok("1") | Ok("true") | Ok("TRUE")
        );
        let snapshot_path = Path::new(path);

        if update {
            if let Some(parent) = snapshot_path.parent() {
                fs::create_dir_all(parent).expect("failed to create snapshot directory");
            }
            fs::write(snapshot_path, actual).expect("failed to write golden snapshot");
            return;
        }

        let expected = fs::read_to_string(snapshot_path).unwrap_or_else(|_| {
            panic!("missing golden snapshot at {path}; run with UPDATE_GOLDEN=1 to generate")
        });
        assert_eq!(
            actual, expected,
            "snapshot mismatch for {path}; run with UPDATE_GOLDEN=1 to refresh if expected"
        );
    }

    #[test]
    fn fields_from_json_accepts_numbers_and_text() {
        let fields = fields_from_json(r#"{"age": 65, "simplicity": "2", "riskLevel": 1}"#)
            .expect("json should parse");
        assert_eq!(fields.age, "65");
        assert_eq!(fields.simplicity, "2");
        assert_eq!(fields.risk_level, "1");
    }

    #[test]
    fn fields_default_to_page_defaults() {
        let fields = fields_from_json("{}").expect("json should parse");
        assert_eq!(fields.age, DEFAULT_AGE);
        assert_eq!(fields.simplicity, DEFAULT_SIMPLICITY);
        assert_eq!(fields.risk_level, DEFAULT_RISK_LEVEL);
    }

    fn fields_from_query(uri: &str) -> FormFields {
        let uri: axum::http::Uri = uri.parse().expect("valid uri");
        let Query(payload) =
            Query::<PortfolioPayload>::try_from_uri(&uri).expect("query should decode");
        FormFields::from_payload(payload)
    }

    #[test]
    fn null_age_is_rejected_not_defaulted() {
        let fields = fields_from_json(r#"{"age": null}"#).expect("json should parse");
        assert_eq!(fields.age, "");
        let err = build_portfolio_response(&fields).expect_err("null age must be rejected");
        assert_eq!(err, InputError::AgeNotNumeric(String::new()));

        let payload = serde_json::from_str::<PortfolioPayload>(r#"{"age": null}"#)
            .expect("json should parse");
        let response = portfolio_handler_impl(payload);
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn null_simplicity_falls_back_to_simple() {
        let fields = fields_from_json(r#"{"age": 30, "simplicity": null, "riskLevel": 2}"#)
            .expect("json should parse");
        let response = build_portfolio_response(&fields).expect("valid inputs");
        assert_eq!(response.chart.labels, vec!["FZROX", "FXNAX"]);
    }

    #[test]
    fn query_string_decodes_page_fields() {
        let fields = fields_from_query("/api/portfolio?age=65&simplicity=2&riskLevel=1");
        let response = build_portfolio_response(&fields).expect("valid inputs");
        assert_eq!(response.stock_label, "35%");
        assert_eq!(response.chart.labels, vec!["FZROX", "FZILX", "FXNAX"]);
    }

    #[test]
    fn query_string_with_empty_age_is_rejected() {
        let fields = fields_from_query("/api/portfolio?age=&simplicity=1&riskLevel=2");
        let err = build_portfolio_response(&fields).expect_err("empty age must be rejected");
        assert_eq!(err, InputError::AgeNotNumeric(String::new()));
    }

    #[test]
    fn bare_query_uses_page_defaults() {
        let fields = fields_from_query("/api/portfolio");
        let response = build_portfolio_response(&fields).expect("valid inputs");
        assert_eq!(response.stock_label, "90%");
    }

    #[test]
    fn fractional_age_truncates_like_the_form() {
        let fields = fields_from_json(r#"{"age": 30.7}"#).expect("json should parse");
        let response = build_portfolio_response(&fields).expect("valid inputs");
        assert_eq!(response.stock_label, "90%");
    }

    #[test]
    fn response_rejects_underage() {
        let fields = fields_from_json(r#"{"age": 17}"#).expect("json should parse");
        let err = build_portfolio_response(&fields).expect_err("age 17 must be rejected");
        assert_eq!(err, InputError::AgeOutOfRange(17));
    }

    #[test]
    fn response_rejects_unknown_risk_level() {
        let fields = fields_from_json(r#"{"riskLevel": 7}"#).expect("json should parse");
        let err = build_portfolio_response(&fields).expect_err("risk 7 must be rejected");
        assert!(err.to_string().contains("risk level"));
    }

    #[test]
    fn handler_maps_rejected_inputs_to_unprocessable_entity() {
        let ok = portfolio_handler_impl(PortfolioPayload::default());
        assert_eq!(ok.status(), StatusCode::OK);

        let payload = PortfolioPayload {
            age: Some(FieldValue::Text("abc".to_string())),
            ..PortfolioPayload::default()
        };
        let rejected = portfolio_handler_impl(payload);
        assert_eq!(rejected.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            rejected.headers().get(header::CACHE_CONTROL),
            Some(&header::HeaderValue::from_static("no-store"))
        );
    }

    #[test]
    fn response_serialization_contains_expected_fields() {
        let fields = fields_from_json(r#"{"age": 20, "simplicity": 3, "riskLevel": 3}"#)
            .expect("json should parse");
        let response = build_portfolio_response(&fields).expect("valid inputs");
        let json = serde_json::to_string(&response).expect("response should serialize");
        assert!(json.contains("\"stockLabel\":\"100%\""));
        assert!(json.contains("\"bondLabel\":\"0%\""));
        assert!(json.contains("\"allocationPercentText\""));
        assert!(json.contains("\"styleTag\":\"stock\""));
        assert!(json.contains("\"tooltips\""));
        assert!(!json.contains("FXNAX"));
        assert!(!json.contains("FIPSX"));
    }

    #[test]
    fn golden_snapshot_balanced_simple_json() {
        let fields = fields_from_json(r#"{"age": 30, "simplicity": 1, "riskLevel": 2}"#)
            .expect("json should parse");
        let response = build_portfolio_response(&fields).expect("valid inputs");
        let json = format!(
            "{}\n",
            serde_json::to_string(&response).expect("response should serialize")
        );

        assert_golden_snapshot("tests/golden/balanced_simple.json", &json);
    }
}
