//! Command-line interface for newsdesk
//!
//! `newsdesk serve` runs the MCP stdio server (the default). The other
//! subcommands run a single analysis and print it to stdout.

use anyhow::Context;
use clap::{Parser, Subcommand};
use newsdesk_mcp::MCPServer;
use newsdesk_news::engine::DEFAULT_BUZZ_LIMIT;
use newsdesk_news::{NewsAnalystPrompt, NewsConfig, NewsEngine, register_news_tools};
use newsdesk_tools::ToolRegistry;
use newsdesk_utils::{LogFormat, LoggingConfig, init_tracing_with};
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

const SERVER_NAME: &str = "news_server";

const INSTRUCTIONS: &str = "Financial news tools: recent company news with per-article \
sentiment, aggregate company sentiment with trend, and the most mentioned companies \
in market news. Companies are identified by stock ticker.";

#[derive(Parser, Debug)]
#[command(name = "newsdesk")]
#[command(version, about = "Financial news sentiment served as MCP tools", long_about = None)]
struct Args {
    /// Log line format (logs are written to stderr)
    #[arg(long, global = true, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Print the structured result as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// Run the MCP server on stdin/stdout
    Serve,
    /// Recent news for a company
    News {
        /// Stock ticker, e.g. AAPL
        ticker: String,
        #[arg(long, default_value_t = 7)]
        days: u32,
    },
    /// Sentiment report for a company
    Sentiment {
        /// Stock ticker, e.g. AAPL
        ticker: String,
        #[arg(long, default_value_t = 30)]
        days: u32,
    },
    /// Most mentioned companies in market news
    Buzz {
        #[arg(long, default_value_t = 3)]
        days: u32,
        #[arg(long, default_value_t = DEFAULT_BUZZ_LIMIT)]
        limit: usize,
    },
    /// List the MCP tools this server exposes
    Tools,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_tracing_with(&LoggingConfig {
        default_filter: args.log_level.clone(),
        format: args.log_format,
    });

    let config = NewsConfig::from_env().context("failed to load news configuration")?;
    let engine = Arc::new(NewsEngine::from_config(config).context("failed to build news engine")?);

    match args.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            info!("Starting newsdesk MCP server");
            build_server(engine).serve_stdio().await?;
        }
        Command::News { ticker, days } => {
            let digest = engine.company_news(&ticker, days).await?;
            print_result(&digest.to_string(), &digest, args.json)?;
        }
        Command::Sentiment { ticker, days } => {
            let outcome = engine.sentiment_analysis(&ticker, days).await?;
            print_result(&outcome.to_string(), &outcome, args.json)?;
        }
        Command::Buzz { days, limit } => {
            let buzz = engine.market_buzz(days, limit).await?;
            print_result(&buzz.to_string(), &buzz, args.json)?;
        }
        Command::Tools => {
            let registry = ToolRegistry::new();
            register_news_tools(&registry, engine);
            for tool in registry.list_tools() {
                println!("{}: {}", tool.name(), tool.description());
            }
        }
    }

    Ok(())
}

fn build_server(engine: Arc<NewsEngine>) -> MCPServer {
    let registry = Arc::new(ToolRegistry::new());
    register_news_tools(&registry, engine);

    MCPServer::new(SERVER_NAME, env!("CARGO_PKG_VERSION"), registry)
        .with_prompt(Arc::new(NewsAnalystPrompt))
        .with_instructions(INSTRUCTIONS)
}

fn print_result(text: &str, structured: &impl serde::Serialize, json: bool) -> anyhow::Result<()> {
    if json {
        let value: Value = serde_json::to_value(structured)?;
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        print!("{text}");
        if !text.ends_with('\n') {
            println!();
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_serve() {
        let args = Args::try_parse_from(["newsdesk"]).unwrap();
        assert_eq!(args.command, None);
        assert_eq!(args.log_format, LogFormat::Text);
    }

    #[test]
    fn test_subcommand_defaults() {
        let args = Args::try_parse_from(["newsdesk", "sentiment", "AAPL"]).unwrap();
        assert_eq!(
            args.command,
            Some(Command::Sentiment {
                ticker: "AAPL".to_string(),
                days: 30
            })
        );

        let args = Args::try_parse_from(["newsdesk", "buzz", "--log-format", "json"]).unwrap();
        assert_eq!(args.command, Some(Command::Buzz { days: 3, limit: 5 }));
        assert_eq!(args.log_format, LogFormat::Json);
    }

    #[test]
    fn test_rejects_unknown_log_format() {
        assert!(Args::try_parse_from(["newsdesk", "--log-format", "yaml"]).is_err());
    }
}
