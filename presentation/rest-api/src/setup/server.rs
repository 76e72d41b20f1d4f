use poem::{EndpointExt, Route, Server as PoemServer, listener::TcpListener, middleware::Tracing};
use poem_openapi::OpenApiService;

use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

impl Server {
    /// API routes plus the Swagger UI at `/docs` and the document at `/openapi.json`.
    pub fn routes(container: DependencyContainer) -> Route {
        let api_service = OpenApiService::new(
            (container.health_api, container.item_api, container.cart_api),
            "Shop API",
            env!("CARGO_PKG_VERSION"),
        );
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();

        Route::new()
            .nest("/", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
    }

    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let app = Self::routes(container).with(config.cors).with(Tracing);

        tracing::info!(%addr, "server listening");
        tracing::info!("swagger UI at http://{}/docs", addr);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}
