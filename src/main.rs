use std::sync::Arc;

use rmcp::{
    ErrorData, RoleServer, ServerHandler, ServiceExt,
    tool_router, tool_handler, tool,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{
        ServerInfo, ServerCapabilities, Implementation,
        ListResourcesResult, ReadResourceResult, ReadResourceRequestParam,
        ListResourceTemplatesResult, PaginatedRequestParam,
        CallToolResult,
    },
    service::RequestContext,
    transport::{
        stdio,
        streamable_http_server::{
            StreamableHttpServerConfig, StreamableHttpService,
            session::local::LocalSessionManager,
        },
    },
};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod tools;
mod widget;

use config::{Config, Transport};
use widget::WidgetAssets;

#[derive(Clone)]
pub struct KitchenSinkServer {
    assets: Arc<WidgetAssets>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl KitchenSinkServer {
    pub fn new(assets: Arc<WidgetAssets>) -> Self {
        Self { assets, tool_router: Self::tool_router() }
    }

    #[tool(
        name = "kitchen-sink-show",
        description = "Render the kitchen sink lite widget with a message, optional accent color and optional details."
    )]
    async fn kitchen_sink_show(
        &self,
        args: Parameters<tools::kitchen_sink_show::ShowArgs>,
    ) -> Result<CallToolResult, ErrorData> {
        tools::kitchen_sink_show::kitchen_sink_show(args).await
    }

    #[tool(
        name = "kitchen-sink-refresh",
        description = "Echo a message back to the kitchen sink lite widget. Called by the widget itself via window.openai.callTool."
    )]
    async fn kitchen_sink_refresh(
        &self,
        args: Parameters<tools::kitchen_sink_refresh::RefreshArgs>,
    ) -> Result<CallToolResult, ErrorData> {
        tools::kitchen_sink_refresh::kitchen_sink_refresh(args).await
    }
}

#[tool_handler]
impl ServerHandler for KitchenSinkServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            server_info: Implementation {
                name: "kitchen-sink-rust".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            instructions: Some(
                "Tools: kitchen-sink-show renders the widget, kitchen-sink-refresh echoes a message from inside it. \
                 The widget template is the resource ui://widget/kitchen-sink-lite.html."
                    .into(),
            ),
            ..Default::default()
        }
    }

    async fn list_resources(
        &self,
        _req: Option<PaginatedRequestParam>,
        _ctx: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, ErrorData> {
        Ok(ListResourcesResult {
            resources: vec![self.assets.resource()],
            next_cursor: None,
        })
    }

    async fn read_resource(
        &self,
        req: ReadResourceRequestParam,
        _ctx: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, ErrorData> {
        debug!(uri = %req.uri, "read_resource");
        self.assets.read(&req.uri)
    }

    async fn list_resource_templates(
        &self,
        _req: Option<PaginatedRequestParam>,
        _ctx: RequestContext<RoleServer>,
    ) -> Result<ListResourceTemplatesResult, ErrorData> {
        Ok(ListResourceTemplatesResult {
            resource_templates: vec![],
            next_cursor: None,
        })
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // stdout belongs to the stdio transport.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}

async fn serve_stdio(assets: Arc<WidgetAssets>) -> Result<(), Box<dyn std::error::Error>> {
    let service = KitchenSinkServer::new(assets).serve(stdio()).await?;
    info!("MCP server running on stdio");
    service.waiting().await?;
    Ok(())
}

async fn serve_http(config: &Config, assets: Arc<WidgetAssets>) -> Result<(), Box<dyn std::error::Error>> {
    // Stateless: every request is independent, sessions share only the asset cache.
    let service = StreamableHttpService::new(
        move || Ok(KitchenSinkServer::new(assets.clone())),
        LocalSessionManager::default().into(),
        StreamableHttpServerConfig {
            stateful_mode: false,
            ..Default::default()
        },
    );

    let router = if config.mcp_path == "/" {
        axum::Router::new().fallback_service(service)
    } else {
        axum::Router::new().nest_service(&config.mcp_path, service)
    };

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    info!(addr = %config.bind, path = %config.mcp_path, "MCP server listening on streamable HTTP");
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(%err, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;
    init_logging();
    debug!(?config, "loaded configuration");

    let assets = Arc::new(WidgetAssets::new(&config.assets_dir));
    assets.warm();

    match config.transport {
        Transport::Stdio => serve_stdio(assets).await,
        Transport::Http => serve_http(&config, assets).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::serde_json::{self, json};
    use tempfile::TempDir;

    fn server_with(dir: &std::path::Path) -> KitchenSinkServer {
        KitchenSinkServer::new(Arc::new(WidgetAssets::new(dir)))
    }

    #[test]
    fn advertises_tools_and_resources() {
        let dir = TempDir::new().unwrap();
        let info = server_with(dir.path()).get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_some());
        assert_eq!(info.server_info.name, "kitchen-sink-rust");
    }

    #[test]
    fn routes_both_tools() {
        let dir = TempDir::new().unwrap();
        let server = server_with(dir.path());
        let mut names: Vec<String> = server
            .tool_router
            .list_all()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect();
        names.sort();
        assert_eq!(names, ["kitchen-sink-refresh", "kitchen-sink-show"]);
    }

    #[tokio::test]
    async fn handler_delegates_to_tool_modules() {
        let dir = TempDir::new().unwrap();
        let server = server_with(dir.path());
        let args = serde_json::from_value(json!({ "message": "Hello" })).unwrap();

        // No asset on disk: tools never touch the HTML.
        let result = server.kitchen_sink_show(Parameters(args)).await.unwrap();
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["structuredContent"]["fromTool"], json!("kitchen-sink-show"));
    }

    #[test]
    fn sessions_share_one_html_cache() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("kitchen-sink-lite.html");
        std::fs::write(&file, "v1").unwrap();

        let assets = Arc::new(WidgetAssets::new(dir.path()));
        let first = KitchenSinkServer::new(assets.clone());
        let second = KitchenSinkServer::new(assets);

        first.assets.read(widget::TEMPLATE_URI).unwrap();
        std::fs::write(&file, "v2").unwrap();
        assert_eq!(&*second.assets.html().unwrap(), "v1");
    }
}
