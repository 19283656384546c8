use crate::{
    config::AppConfig,
    error::{AppError, AppResult},
    handlers::ExampleHandler,
    models::{ExampleRequest, ValidationErrorBody},
};
use serde::Deserialize;
use std::convert::Infallible;
use std::sync::Arc;
use tracing::{error, info, instrument};
use warp::{http::StatusCode, Filter, Rejection, Reply};

/// Main server implementation
pub struct ExampleApiServer {
    config: AppConfig,
    handler: Arc<ExampleHandler>,
}

/// Query string accepted by `GET /example`
#[derive(Debug, Deserialize)]
struct GetExampleQuery {
    #[serde(default)]
    id: Option<i64>,
}

impl ExampleApiServer {
    /// Create a new server instance
    pub fn new(config: AppConfig) -> AppResult<Self> {
        let handler = Arc::new(ExampleHandler::new(&config));

        Ok(Self { config, handler })
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Run the server
    #[instrument(skip(self))]
    pub async fn run(self) -> AppResult<()> {
        let addr = self.config.server_address();
        info!("Starting server on {}", addr);

        let addr: std::net::SocketAddr = addr
            .parse()
            .map_err(|e| AppError::Config(format!("Invalid server address: {}", e)))?;

        let routes = self.create_routes();

        warp::serve(routes).run(addr).await;

        Ok(())
    }

    /// Create the application routes
    pub(crate) fn create_routes(
        self,
    ) -> impl Filter<Extract = impl Reply, Error = Infallible> + Clone {
        let config = self.config.clone();
        let handler = self.handler.clone();

        // Fetch-by-id endpoint
        let get_route = warp::path("example")
            .and(warp::path::end())
            .and(warp::get())
            .and(warp::query::<GetExampleQuery>())
            .and(with_handler(handler.clone()))
            .and(with_config(config.clone()))
            .and_then(handle_get_example);

        // Create endpoint
        let create_route = warp::path("example")
            .and(warp::path::end())
            .and(warp::post())
            .and(warp::body::content_length_limit(
                config.server.max_request_size as u64,
            ))
            .and(warp::body::json())
            .and(with_handler(handler))
            .and(with_config(config))
            .and_then(handle_create_example);

        get_route.or(create_route).recover(handle_rejection)
    }
}

/// Handle `GET /example?id=<int>`
#[instrument(skip(handler, config))]
async fn handle_get_example(
    query: GetExampleQuery,
    handler: Arc<ExampleHandler>,
    config: AppConfig,
) -> Result<warp::reply::Response, Rejection> {
    let id = query.id.unwrap_or_default();

    if config.server.enable_request_logging {
        info!(id, "Processing fetch request");
    }

    match handler.get_example(id) {
        Some(record) => Ok(warp::reply::with_status(
            warp::reply::json(&record),
            StatusCode::OK,
        )
        .into_response()),
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}

/// Handle `POST /example`
#[instrument(skip(request, handler, config))]
async fn handle_create_example(
    request: ExampleRequest,
    handler: Arc<ExampleHandler>,
    config: AppConfig,
) -> Result<warp::reply::Response, Rejection> {
    if config.server.enable_request_logging {
        info!("Processing create request");
    }

    match handler.create_example(&request) {
        Ok(()) => Ok(StatusCode::OK.into_response()),
        Err(errors) => {
            info!(violations = errors.len(), "Request validation failed");
            Ok(warp::reply::with_status(
                warp::reply::json(&ValidationErrorBody::new(errors)),
                StatusCode::BAD_REQUEST,
            )
            .into_response())
        }
    }
}

/// Map rejections onto structured client responses.
///
/// A malformed body is a distinct, earlier failure mode than field
/// validation: it short-circuits before any rule runs and carries no
/// field-error list.
async fn handle_rejection(err: Rejection) -> Result<warp::reply::Response, Infallible> {
    let (status, message) = if err.is_not_found() {
        (StatusCode::NOT_FOUND, None)
    } else if let Some(e) = err.find::<warp::filters::body::BodyDeserializeError>() {
        (
            StatusCode::BAD_REQUEST,
            Some(format!("malformed request body: {}", e)),
        )
    } else if err.find::<warp::reject::InvalidQuery>().is_some() {
        (
            StatusCode::BAD_REQUEST,
            Some("invalid query string".to_string()),
        )
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        (
            StatusCode::METHOD_NOT_ALLOWED,
            Some("method not allowed".to_string()),
        )
    } else if err.find::<warp::reject::PayloadTooLarge>().is_some() {
        (
            StatusCode::PAYLOAD_TOO_LARGE,
            Some("request body too large".to_string()),
        )
    } else {
        error!(?err, "Unhandled rejection");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Some("internal server error".to_string()),
        )
    };

    let response = match message {
        Some(message) => warp::reply::with_status(
            warp::reply::json(&serde_json::json!({ "error": message })),
            status,
        )
        .into_response(),
        None => status.into_response(),
    };

    Ok(response)
}

/// Helper function to inject the handler into a route
fn with_handler(
    handler: Arc<ExampleHandler>,
) -> impl Filter<Extract = (Arc<ExampleHandler>,), Error = Infallible> + Clone {
    warp::any().map(move || handler.clone())
}

/// Helper function to inject configuration into a route
fn with_config(
    config: AppConfig,
) -> impl Filter<Extract = (AppConfig,), Error = Infallible> + Clone {
    warp::any().map(move || config.clone())
}
