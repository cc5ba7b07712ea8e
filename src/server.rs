use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;

use crate::api::{ApiCareerRequest, ApiLoveRequest, ApiPersonalRequest, ApiWealthRequest};
use kader_matrisi::config::EngineConfig;
use kader_matrisi::prompt::{build_completion_request, CompletionRequest, PromptRequest};
use kader_matrisi::{
    calculate_career_reading, calculate_love_compatibility, calculate_numerology,
    calculate_wealth_analysis, CareerReading, LoveCompatibilityResult, NumerologyError,
    NumerologyReport, ReadingOptions, WealthAnalysisResult,
};

#[derive(Clone)]
struct AppState {
    config: Arc<EngineConfig>,
}

type ApiError = (StatusCode, String);

pub async fn serve(args: crate::ServeArgs, config: EngineConfig) -> Result<(), String> {
    let state = AppState {
        config: Arc::new(config),
    };

    let app = Router::new()
        .route("/api/health", get(health))
        .route("/api/personal", post(personal_handler))
        .route("/api/love", post(love_handler))
        .route("/api/wealth", post(wealth_handler))
        .route("/api/career", post(career_handler))
        .route("/api/prompt", post(prompt_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|err| format!("invalid bind address: {}", err))?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|err| format!("failed to bind server: {}", err))?;
    tracing::info!(%addr, "kader-matrisi listening");

    axum::serve(listener, app)
        .await
        .map_err(|err| format!("server error: {}", err))?;

    Ok(())
}

async fn health() -> impl IntoResponse {
    StatusCode::OK
}

async fn personal_handler(
    State(state): State<AppState>,
    Json(request): Json<ApiPersonalRequest>,
) -> Result<Json<NumerologyReport>, ApiError> {
    let options = request.options.apply(base_options(&state)).map_err(bad_request)?;
    let person = request.person.into_person("person").map_err(bad_request)?;
    let report = calculate_numerology(&person, &options).map_err(engine_error)?;
    Ok(Json(report))
}

async fn love_handler(
    State(state): State<AppState>,
    Json(request): Json<ApiLoveRequest>,
) -> Result<Json<LoveCompatibilityResult>, ApiError> {
    let (user, partner, overrides) = request.into_people().map_err(bad_request)?;
    let options = overrides.apply(base_options(&state)).map_err(bad_request)?;
    let result = calculate_love_compatibility(&user, &partner, &options, &state.config.love)
        .map_err(engine_error)?;
    Ok(Json(result))
}

async fn wealth_handler(
    State(state): State<AppState>,
    Json(request): Json<ApiWealthRequest>,
) -> Result<Json<WealthAnalysisResult>, ApiError> {
    let (business, overrides) = request.into_business().map_err(bad_request)?;
    let options = overrides.apply(base_options(&state)).map_err(bad_request)?;
    let result = calculate_wealth_analysis(&business, &options).map_err(engine_error)?;
    Ok(Json(result))
}

async fn career_handler(
    State(state): State<AppState>,
    Json(request): Json<ApiCareerRequest>,
) -> Result<Json<CareerReading>, ApiError> {
    let options = request.options.apply(base_options(&state)).map_err(bad_request)?;
    let person = request.person.into_person("person").map_err(bad_request)?;
    let reading = calculate_career_reading(&person, request.company_name.as_deref(), &options)
        .map_err(engine_error)?;
    Ok(Json(reading))
}

async fn prompt_handler(
    State(state): State<AppState>,
    Json(request): Json<PromptRequest>,
) -> Json<CompletionRequest> {
    Json(build_completion_request(&request, &state.config.prompt))
}

fn base_options(state: &AppState) -> ReadingOptions {
    ReadingOptions::now(&state.config)
}

fn bad_request(message: String) -> ApiError {
    (StatusCode::BAD_REQUEST, message)
}

fn engine_error(err: NumerologyError) -> ApiError {
    tracing::warn!(error = %err, "rejected reading request");
    (StatusCode::BAD_REQUEST, err.to_string())
}
