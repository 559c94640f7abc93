//! HTTP transport
//!
//! Serves the MCP protocol as JSON-RPC over `POST /mcp`, plus a `GET /health`
//! endpoint for monitoring and load balancers.

use crate::config::Config;
use crate::error::Result;
use crate::mcp::{create_error_response, McpErrorCode, McpRequest, McpServer};
use actix_web::{web, App, HttpResponse, HttpServer, Responder};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

/// Run the HTTP transport until shutdown
pub async fn run_http_server(server: Arc<McpServer>, config: Config) -> Result<()> {
    let host = config.server.host.clone();
    let port = config.server.port;
    info!("HTTP server starting at http://{}:{}/mcp", host, port);
    info!("Health check endpoint: http://{}:{}/health", host, port);

    let config = web::Data::new(config);
    let server = web::Data::new(server);

    HttpServer::new(move || {
        App::new()
            .app_data(server.clone())
            .app_data(config.clone())
            .configure(configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await?;

    Ok(())
}

/// Route table, shared between the real server and tests
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/mcp", web::post().to(handle_mcp))
        .route("/health", web::get().to(health_check));
}

/// One JSON-RPC request per POST body
async fn handle_mcp(server: web::Data<Arc<McpServer>>, body: web::Bytes) -> impl Responder {
    let request: McpRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            return HttpResponse::Ok()
                .content_type("application/json")
                .body(create_error_response(
                    None,
                    McpErrorCode::ParseError,
                    &format!("Invalid JSON-RPC message: {e}"),
                ))
        }
    };

    match server.handle_mcp_request(request).await {
        Some(response) => HttpResponse::Ok()
            .content_type("application/json")
            .body(response),
        // Notifications produce no response body
        None => HttpResponse::Accepted().finish(),
    }
}

/// Health check endpoint for monitoring and load balancers
async fn health_check(config: web::Data<Config>) -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "CATS MCP Server",
        "api_configured": config.api_configured(),
        "api_base_url": config.api.base_url,
    }))
}
