use poem::middleware::{Cors, Tracing};
use poem::{Endpoint, EndpointExt, Route, Server as PoemServer, listener::TcpListener};
use poem_openapi::OpenApiService;

use crate::api::rate_limit::RateLimit;
use crate::config::app_config::AppConfig;
use crate::config::rate_limit_config::RateLimitConfig;
use crate::setup::dependency_injection::DependencyContainer;

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let app = Self::build_app(
            container,
            config.cors,
            config.rate_limit,
            format!("http://{}", addr),
        );

        tracing::info!("Server running at http://{}", addr);
        tracing::info!("Swagger UI at http://{}/docs", addr);
        tracing::info!("OpenAPI JSON at http://{}/openapi.json", addr);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }

    pub fn build_app(
        container: DependencyContainer,
        cors: Cors,
        rate_limit: RateLimitConfig,
        server_url: String,
    ) -> impl Endpoint {
        let api_service = OpenApiService::new(
            (container.health_api, container.suggestion_api),
            "EchoSphere API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(server_url);
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();
        Route::new()
            .nest("/", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .with_if(
                rate_limit.enabled(),
                RateLimit::per_minute(rate_limit.per_minute),
            )
            .with(cors)
            .with(Tracing)
    }
}
