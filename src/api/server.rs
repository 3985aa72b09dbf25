use axum::routing::{get, post};
use axum::Router;
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::{HeaderName, HeaderValue, Method};
use tower_http::cors::CorsLayer;

use crate::api::action::container::create::create as container_create;
use crate::api::action::healthz::healthz;
use crate::api::action::root::root;
use crate::config::config::Config;

// Origin of the web frontend driving this API.
const FRONTEND_ORIGIN: &str = "http://localhost:3000";

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(FRONTEND_ORIGIN.parse::<HeaderValue>().unwrap())
        .allow_methods([Method::GET, Method::PUT, Method::POST, Method::DELETE])
        .allow_headers([
            CONTENT_TYPE,
            AUTHORIZATION,
            HeaderName::from_static("x-csrf-header"),
        ])
        .allow_credentials(true)
}

pub(crate) fn app() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/healthz", get(healthz))
        .route("/create/:create_os/:container_name", post(container_create))
        .layer(cors_layer())
}

pub(crate) async fn start(configuration: Config) {
    info!("Starting server on {}", configuration.get_api_url());

    let address = format!("{}:{}", configuration.host, configuration.api.port);
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .unwrap();

    axum::serve(listener, app()).await.unwrap();
}

#[cfg(test)]
pub(crate) mod tests {
    use axum::Router;
    use axum_test::TestServer;
    use http::header::ORIGIN;
    use http::{HeaderName, HeaderValue, Method, StatusCode};

    pub(crate) fn new_test_app() -> Router {
        super::app()
    }

    #[tokio::test]
    async fn test_cors_preflight_allows_frontend_origin() {
        let server = TestServer::new(new_test_app()).unwrap();

        let response = server
            .method(Method::OPTIONS, &"/create/ubuntu/mybox")
            .add_header(ORIGIN, HeaderValue::from_static("http://localhost:3000"))
            .add_header(
                HeaderName::from_static("access-control-request-method"),
                HeaderValue::from_static("POST"),
            )
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(
            response.header("access-control-allow-origin"),
            HeaderValue::from_static("http://localhost:3000")
        );
        assert_eq!(
            response.header("access-control-allow-credentials"),
            HeaderValue::from_static("true")
        );
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let server = TestServer::new(new_test_app()).unwrap();

        let response = server.get(&"/containers").await;

        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    }
}
