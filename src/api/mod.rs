mod inputs;

use axum::{
    Router,
    extract::{
        Json, Query,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use clap::Parser;
use serde::Serialize;
use std::net::SocketAddr;
use std::process::ExitCode;
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

use crate::core::{
    ProjectionYear, RentalEconomicsResult, ScenarioInputs, ScenarioResult, ScenarioSummary,
    run_scenario,
};
use crate::report::render_text_summary;

pub use inputs::{InputError, MAX_PROJECTION_YEARS};
use inputs::{Cli, OutputFormat, SimulatePayload, build_inputs, inputs_from_payload};

const INDEX_HTML: &str = include_str!("../../web/index.html");
const STYLES_CSS: &str = include_str!("../../web/styles.css");
const APP_JS: &str = include_str!("../../web/app.js");

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SimulateResponse {
    rental: RentalEconomicsResult,
    summary: ScenarioSummary,
    years: Vec<ProjectionYear>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

/// Parses command-line flags, runs one scenario and prints it.
pub fn run_cli<I, T>(args: I) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => e.exit(),
    };

    let inputs = match build_inputs(&cli) {
        Ok(inputs) => inputs,
        Err(e) => {
            eprintln!("Invalid input: {e}");
            return ExitCode::from(2);
        }
    };
    debug!(?inputs, "running scenario from command line");

    let result = run_scenario(&inputs);
    match cli.format {
        OutputFormat::Text => print!("{}", render_text_summary(&result)),
        OutputFormat::Json => {
            let response = build_simulate_response(&result);
            match serde_json::to_string_pretty(&response) {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    eprintln!("Failed to serialize result: {e}");
                    return ExitCode::FAILURE;
                }
            }
        }
    }
    ExitCode::SUCCESS
}

pub async fn run_http_server(port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;
    info!("optimiser HTTP API listening on http://{addr}");
    info!("local access: http://127.0.0.1:{port}/");

    axum::serve(listener, router()).await
}

fn router() -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/index.html", get(index_handler))
        .route("/styles.css", get(styles_handler))
        .route("/app.js", get(app_js_handler))
        .route(
            "/api/simulate",
            get(simulate_get_handler).post(simulate_post_handler),
        )
        .fallback(not_found_handler)
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

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn simulate_get_handler(query: Result<Query<SimulatePayload>, QueryRejection>) -> Response {
    match query {
        Ok(Query(payload)) => simulate_handler_impl(payload),
        Err(rejection) => rejection_response(&rejection.body_text()),
    }
}

async fn simulate_post_handler(body: Result<Json<SimulatePayload>, JsonRejection>) -> Response {
    match body {
        Ok(Json(payload)) => simulate_handler_impl(payload),
        Err(rejection) => rejection_response(&rejection.body_text()),
    }
}

fn rejection_response(msg: &str) -> Response {
    warn!(error = msg, "unparseable simulate request");
    error_response(StatusCode::BAD_REQUEST, msg)
}

fn simulate_handler_impl(payload: SimulatePayload) -> Response {
    let inputs = match inputs_from_payload(payload) {
        Ok(inputs) => inputs,
        Err(e) => {
            warn!(error = %e, "rejected simulate request");
            return error_response(StatusCode::BAD_REQUEST, &e.to_string());
        }
    };

    json_response(StatusCode::OK, simulate(&inputs))
}

fn simulate(inputs: &ScenarioInputs) -> SimulateResponse {
    let result = run_scenario(inputs);
    debug!(
        years = inputs.settings.projection_years,
        cash_freed = result.summary.annual_cash_freed,
        "simulate request served"
    );
    build_simulate_response(&result)
}

fn build_simulate_response(result: &ScenarioResult) -> SimulateResponse {
    SimulateResponse {
        rental: result.rental,
        summary: result.summary,
        years: result.projection.years.clone(),
    }
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
mod tests {
    use super::*;
    use super::inputs::default_cli;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use tower::ServiceExt;

    async fn send(request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = router()
            .oneshot(request)
            .await
            .expect("router never fails");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should be readable");
        let body = serde_json::from_slice(&bytes).expect("body should be JSON");
        (status, body)
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("valid request")
    }

    fn post_json(uri: &str, json: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json))
            .expect("valid request")
    }

    fn sample_inputs() -> ScenarioInputs {
        build_inputs(&default_cli()).expect("valid inputs")
    }

    #[test]
    fn simulate_response_serialization_contains_expected_fields() {
        let response = simulate(&sample_inputs());
        let json = serde_json::to_string(&response).expect("response should serialize");

        assert!(json.contains("\"rental\""));
        assert!(json.contains("\"summary\""));
        assert!(json.contains("\"years\""));
        assert!(json.contains("\"annualRent\""));
        assert!(json.contains("\"estimatedTaxSaved\""));
        assert!(json.contains("\"annualCashFreed\""));
        assert!(json.contains("\"totalExtraPaid\""));
        assert!(json.contains("\"payoffYear\":null"));
        assert!(json.contains("\"cumulativePrincipalRedirected\""));
        assert!(json.contains("\"cumulativeInterestSaved\""));
        assert!(json.contains("\"interestSavedThisYear\""));
    }

    #[test]
    fn simulate_response_has_one_row_per_projection_year() {
        let mut inputs = sample_inputs();
        inputs.settings.projection_years = 8;

        let response = simulate(&inputs);
        assert_eq!(response.years.len(), 8);
        assert_eq!(response.summary.projection_years, 8);

        let value = serde_json::to_value(&response).expect("response should serialize");
        let years = value["years"].as_array().expect("years array");
        assert_eq!(years.len(), 8);
        assert_eq!(years[0]["year"], 1);
        assert_eq!(years[7]["year"], 8);
    }

    #[test]
    fn simulate_handler_rejects_invalid_payload_with_bad_request() {
        let payload = serde_json::from_str::<SimulatePayload>(r#"{ "taxRate": -5 }"#)
            .expect("json should parse");
        let response = simulate_handler_impl(payload);

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL),
            Some(&header::HeaderValue::from_static("no-store"))
        );
    }

    #[test]
    fn simulate_handler_accepts_empty_payload() {
        let payload = SimulatePayload::default();
        let response = simulate_handler_impl(payload);
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn error_response_serializes_message() {
        let json = serde_json::to_string(&ErrorResponse {
            error: "Not found".to_string(),
        })
        .expect("error should serialize");
        assert_eq!(json, r#"{"error":"Not found"}"#);
    }

    #[tokio::test]
    async fn unparseable_query_answers_json_bad_request() {
        let (status, body) = send(get_request("/api/simulate?projectionYears=abc")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let msg = body["error"].as_str().expect("error message");
        assert!(msg.contains("query string"));
    }

    #[tokio::test]
    async fn unparseable_json_body_answers_json_bad_request() {
        let (status, body) = send(post_json("/api/simulate", r#"{"rentalTermYears":30.5}"#)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn out_of_range_query_answers_validation_message() {
        let (status, body) = send(get_request("/api/simulate?projectionYears=11")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"],
            "--projection-years must be between 1 and 10, got 11"
        );
    }

    #[tokio::test]
    async fn simulate_routes_serve_get_and_post() {
        let (status, body) = send(get_request("/api/simulate?projectionYears=3&repaymentType=pni")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["years"].as_array().expect("years").len(), 3);
        assert_eq!(body["summary"]["interestOnlyEnabled"], false);

        let (status, body) = send(post_json("/api/simulate", r#"{"projectionYears":2}"#)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["years"].as_array().expect("years").len(), 2);
    }

    #[tokio::test]
    async fn unknown_route_answers_json_not_found() {
        let (status, body) = send(get_request("/nope")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, serde_json::json!({ "error": "Not found" }));
    }
}
