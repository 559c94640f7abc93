use anyhow::Result;
use cats_mcp::api::CatsClient;
use cats_mcp::config::{parse_toolset_list, Config, Transport};
use cats_mcp::mcp::{create_error_response, McpErrorCode, McpRequest, McpServer};
use cats_mcp::registry::{self, catalog, ALL_SENTINEL, DEFAULT_TOOLSETS};
use clap::Parser;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = env!("CARGO_PKG_NAME"))]
#[command(about = env!("CARGO_PKG_DESCRIPTION"))]
#[command(version)]
struct Cli {
    /// Comma-separated list of toolsets to load (default: core set)
    #[arg(long)]
    toolsets: Option<String>,

    /// List available toolsets and exit
    #[arg(long)]
    list_toolsets: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Run in stdio mode regardless of CATS_TRANSPORT
    #[arg(long)]
    stdio: bool,

    /// HTTP server host
    #[arg(long)]
    host: Option<String>,

    /// HTTP server port
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    init_logging(&cli.log_level);

    if cli.list_toolsets {
        print_toolset_listing();
        return Ok(());
    }

    let mut config = Config::from_env()?;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if cli.stdio {
        config.transport = Transport::Stdio;
    }

    // Selection source precedence: CLI flag > environment > built-in default.
    // Evaluated once; there is no mid-session re-selection.
    let requested: BTreeSet<String> = if let Some(ref flag) = cli.toolsets {
        parse_toolset_list(flag).into_iter().collect()
    } else if let Some(ref from_env) = config.toolsets {
        from_env.iter().cloned().collect()
    } else {
        DEFAULT_TOOLSETS.iter().map(|s| s.to_string()).collect()
    };

    let selection = registry::resolve(&requested).map_err(|e| {
        error!("{}", e);
        error!("Use --list-toolsets to see all available toolsets");
        e
    })?;

    let client = Arc::new(CatsClient::new(&config.api)?);
    let mut server = McpServer::new(&config.limits);
    let report = registry::register(selection, &mut server, &client)?;

    info!("Starting CATS MCP server");
    info!("Transport: {:?}", config.transport);
    info!("API base URL: {}", config.api.base_url);
    info!(
        "API key configured: {}",
        if config.api_configured() { "Yes" } else { "No" }
    );
    info!("Serving {} tools", report.total);

    match config.transport {
        Transport::Stdio => run_stdio_mode(server).await,
        Transport::Http => {
            cats_mcp::web::run_http_server(Arc::new(server), config).await?;
            Ok(())
        }
    }
}

/// Run the server in stdio mode: newline-delimited JSON-RPC on stdin/stdout,
/// logs on stderr.
async fn run_stdio_mode(server: McpServer) -> Result<()> {
    use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

    let stdin = tokio::io::stdin();
    let mut stdout = tokio::io::stdout();
    let mut reader = BufReader::new(stdin);
    let mut line = String::new();

    info!("Server ready for STDIO connections");

    loop {
        line.clear();
        match reader.read_line(&mut line).await {
            Ok(0) => {
                // EOF - client disconnected
                info!("stdin closed, shutting down stdio mode");
                break;
            }
            Ok(_) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }

                let response = match serde_json::from_str::<McpRequest>(trimmed) {
                    Ok(request) => server.handle_mcp_request(request).await,
                    Err(e) => Some(create_error_response(
                        None,
                        McpErrorCode::ParseError,
                        &format!("Invalid JSON-RPC message: {e}"),
                    )),
                };

                if let Some(response) = response {
                    stdout.write_all(response.as_bytes()).await?;
                    stdout.write_all(b"\n").await?;
                    stdout.flush().await?;
                }
            }
            Err(e) => {
                error!("Failed to read from stdin: {}", e);
                break;
            }
        }
    }

    Ok(())
}

/// Print the toolset catalog with per-toolset operation counts
fn print_toolset_listing() {
    println!("CATS MCP Server - Available Toolsets\n");

    println!("DEFAULT toolsets (loaded when no selection is given):");
    for entry in catalog().iter().filter(|e| DEFAULT_TOOLSETS.contains(&e.name)) {
        println!(
            "  - {} ({} tools) - {}",
            entry.name,
            entry.tool_count(),
            entry.description
        );
    }

    println!("\nOptional toolsets:");
    for entry in catalog().iter().filter(|e| !DEFAULT_TOOLSETS.contains(&e.name)) {
        println!(
            "  - {} ({} tools) - {}",
            entry.name,
            entry.tool_count(),
            entry.description
        );
    }

    let total: usize = catalog().iter().map(|e| e.tool_count()).sum();
    println!("\nUsage:");
    println!("  cats-mcp                                   # Default toolsets");
    println!("  cats-mcp --toolsets candidates,jobs        # Specific toolsets");
    println!(
        "  cats-mcp --toolsets {ALL_SENTINEL}                        # All {total} tools"
    );
    println!("  CATS_TOOLSETS='candidates,companies' cats-mcp");
}

fn init_logging(level: &str) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                // Logs go to stderr so stdio transport keeps stdout clean
                .with_writer(std::io::stderr),
        )
        .with(env_filter)
        .init();
}
