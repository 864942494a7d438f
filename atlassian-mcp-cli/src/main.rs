use std::process;

use anyhow::Context;
use atlassian_mcp_cli::cli::{Cli, Commands};
use atlassian_mcp_cli::error::{handle_cli_result, CliError, CliResult, IntoCliResult};
use atlassian_mcp_cli::exit_codes::{EXIT_SUCCESS, EXIT_WARNING};
use atlassian_mcp_cli::logging;
use clap::CommandFactory;

#[tokio::main]
async fn main() {
    let cli = Cli::parse_args();

    // Fast path for help - avoid initialization
    let Some(command) = cli.command else {
        if let Err(e) = Cli::command().print_help() {
            eprintln!("Failed to print help: {e}");
        }
        process::exit(EXIT_SUCCESS);
    };

    let log_level = logging::log_level(cli.quiet, cli.debug, cli.verbose);
    let log_file = logging::log_file_from_env();
    logging::init_logging(log_level, log_file.as_deref());

    let exit_code = match command {
        Commands::Serve => {
            tracing::info!("Starting MCP server");
            handle_cli_result(run_server().await)
        }
        Commands::Doctor => {
            tracing::debug!("Running diagnostics");
            run_doctor()
        }
    };

    process::exit(exit_code);
}

async fn run_server() -> CliResult<()> {
    use atlassian_mcp::{mcp::McpServer, AtlassianConfig};
    use rmcp::serve_server;
    use rmcp::transport::io::stdio;
    use tokio_util::sync::CancellationToken;

    // Configuration problems stop startup before the transport is opened
    let config = AtlassianConfig::from_env().cli_configuration_error()?;
    let server = McpServer::new(config).cli_configuration_error()?;
    tracing::info!("Registered tools: {}", server.tool_names().join(", "));

    // Set up cancellation token
    let ct = CancellationToken::new();
    let ct_clone = ct.clone();

    // Set up signal handlers
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::info!("Shutdown signal received");
                ct_clone.cancel();
            }
            Err(e) => tracing::error!("Failed to listen for ctrl+c: {}", e),
        }
    });

    // Start the rmcp SDK server with stdio transport
    let running = serve_server(server, stdio())
        .await
        .map_err(|e| anyhow::anyhow!("{e}"))
        .context("MCP server failed to start")
        .map_err(|e| CliError::new(format!("{e:#}"), EXIT_WARNING))?;
    tracing::info!("MCP server started successfully");

    tokio::select! {
        _ = ct.cancelled() => {
            tracing::info!("MCP server exited successfully");
            Ok(())
        }
        quit = running.waiting() => match quit {
            Ok(reason) => {
                tracing::info!("MCP session ended: {:?}", reason);
                Ok(())
            }
            Err(e) => Err(CliError::from_error(e, EXIT_WARNING)),
        }
    }
}

fn run_doctor() -> i32 {
    use atlassian_mcp_cli::doctor::Doctor;

    let mut doctor = Doctor::new();
    doctor.run_diagnostics()
}
