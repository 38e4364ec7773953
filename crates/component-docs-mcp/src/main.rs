//! Component docs MCP server entry point.

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use component_docs_mcp::protocol::ProtocolHandler;
use component_docs_mcp::tools::ToolRegistry;
use component_docs_mcp::transport::StdioTransport;
use component_docs_mcp::{build_service, logging, ConfigArgs, ServerConfig};

#[derive(Parser)]
#[command(
    name = "component-docs-mcp",
    about = "MCP server for component docs: local Markdown docs and live field references",
    version
)]
struct Cli {
    #[command(flatten)]
    config: ConfigArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start MCP server over stdio (default).
    Serve,

    /// Start MCP server over HTTP.
    #[cfg(feature = "http")]
    ServeHttp {
        /// Listen address (host:port).
        #[arg(long, default_value = "127.0.0.1:3100")]
        addr: String,

        /// Bearer token for authentication.
        /// Also reads from COMPONENT_DOCS_TOKEN env var.
        #[arg(long)]
        token: Option<String>,
    },

    /// Extract one field reference and print it as JSON.
    Field {
        /// Field identifier, e.g. text-input.
        subject: String,
    },

    /// Print server capabilities as JSON.
    Info,

    /// Generate shell completion scripts.
    ///
    /// Examples:
    ///   component-docs-mcp completions bash > ~/.local/share/bash-completion/completions/component-docs-mcp
    ///   component-docs-mcp completions zsh > ~/.zfunc/_component-docs-mcp
    Completions {
        /// Shell type (bash, zsh, fish, powershell, elvish).
        shell: Shell,
    },

    /// Launch interactive REPL mode.
    Repl,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = ServerConfig::resolve(&cli.config);
    logging::init(&config.log)?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            let service = build_service(&config)?;
            let transport = StdioTransport::new(ProtocolHandler::new(service));
            transport.run().await?;
        }

        #[cfg(feature = "http")]
        Commands::ServeHttp { addr, token } => {
            use component_docs_mcp::transport::HttpTransport;

            let effective_token = token.or_else(|| std::env::var("COMPONENT_DOCS_TOKEN").ok());
            if effective_token.is_some() {
                tracing::info!("Auth: bearer token required");
            }

            let service = build_service(&config)?;
            let transport = HttpTransport::new(ProtocolHandler::new(service), effective_token);
            transport.run(&addr).await?;
        }

        Commands::Field { subject } => {
            let service = build_service(&config)?;
            let record = service.field_reference(&subject).await?;
            println!("{}", serde_json::to_string_pretty(&*record)?);
        }

        Commands::Info => {
            let capabilities = component_docs_mcp::types::InitializeResult::default_result();
            let tools = ToolRegistry::list_tools();
            let info = serde_json::json!({
                "server": capabilities.server_info,
                "protocol_version": capabilities.protocol_version,
                "capabilities": capabilities.capabilities,
                "tools": tools.iter().map(|t| &t.name).collect::<Vec<_>>(),
                "tool_count": tools.len(),
                "base_url": config.base_url,
                "docs_dir": config.docs_dir.as_ref().map(|d| d.display().to_string()),
            });
            println!("{}", serde_json::to_string_pretty(&info)?);
        }

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "component-docs-mcp", &mut std::io::stdout());
        }

        Commands::Repl => {
            component_docs_mcp::repl::run(&config).await?;
        }
    }

    Ok(())
}
