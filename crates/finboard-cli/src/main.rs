//! Finboard CLI - Market news search
//!
//! Terminal front-end for the Finboard market search proxy.

mod api;
mod config;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use api::MarketSearchClient;
use config::Config;
use finboard::{SearchResponse, SearchType};

#[derive(Parser)]
#[command(name = "finboard")]
#[command(about = "Finboard CLI - Market news search", long_about = None)]
#[command(version)]
struct Cli {
    /// API base URL (overrides config file)
    #[arg(long, global = true, env = "FINBOARD_URL")]
    url: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search market news
    Search {
        /// Company, bank or bond to search for
        query: String,
        /// Search type: company, bank, bond
        #[arg(short = 't', long = "type", default_value = "company")]
        search_type: String,
        /// Print the raw JSON envelope
        #[arg(long)]
        json: bool,
    },

    /// Check that the API is reachable
    Health,

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set the API base URL
    SetUrl {
        /// e.g. https://finboard.example.com
        url: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Search {
            query,
            search_type,
            json,
        } => cmd_search(cli.url.as_deref(), &query, &search_type, json).await,
        Commands::Health => cmd_health(cli.url.as_deref()).await,
        Commands::Config { action } => cmd_config(cli.url.as_deref(), action),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_search(url: Option<&str>, query: &str, search_type: &str, json: bool) -> Result<()> {
    let config = Config::load()?;
    let client = MarketSearchClient::new(&config.resolve_base_url(url));

    let search_type = SearchType::from(search_type);
    let response = client.search(query, search_type).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print_response(query, search_type, &response);
    }

    if !response.success {
        std::process::exit(1);
    }

    Ok(())
}

fn print_response(query: &str, search_type: SearchType, response: &SearchResponse) {
    if !response.success {
        let error = response.error.as_deref().unwrap_or("Search failed");
        eprintln!("{} {}", "✗".red(), error);
        return;
    }

    if let Some(info) = &response.company_info {
        println!("{}", info.name.cyan().bold());
        if let Some(sector) = &info.sector {
            println!("  {}", sector.dimmed());
        }
        println!("{}\n", info.description.dimmed());
    }

    if response.news.is_empty() {
        println!("No results for '{}' ({}).", query, search_type);
        return;
    }

    println!(
        "{} ({} results, {})",
        "News:".bold(),
        response.news.len(),
        search_type
    );
    for (index, item) in response.news.iter().enumerate() {
        let date = item.published_date.as_deref().unwrap_or("-");
        println!(
            "{:>3}. {} {} {}",
            index + 1,
            item.title.bold(),
            format!("[{}]", item.source).cyan(),
            date.dimmed()
        );
        println!("     {}", item.url.underline());
        if !item.description.is_empty() {
            println!("     {}", item.description.replace('\n', " ").dimmed());
        }
    }
}

async fn cmd_health(url: Option<&str>) -> Result<()> {
    let config = Config::load()?;
    let base_url = config.resolve_base_url(url);
    let client = MarketSearchClient::new(&base_url);

    print!("Checking {}... ", base_url);

    match client.health().await {
        Ok(true) => {
            println!("{}", "OK".green());
            Ok(())
        }
        _ => {
            println!("{}", "Failed".red());
            bail!("Could not reach Finboard API at {}", base_url);
        }
    }
}

fn cmd_config(url: Option<&str>, action: Option<ConfigAction>) -> Result<()> {
    let mut config = Config::load()?;

    match action.unwrap_or(ConfigAction::Show) {
        ConfigAction::Show => {
            println!("{}", "Configuration:".bold());
            println!("  Config file: {:?}", Config::config_path()?);
            println!("  Base URL:    {}", config.base_url.cyan());
            if let Some(url) = url {
                println!("  Override:    {} {}", url.cyan(), "(--url / FINBOARD_URL)".dimmed());
            }
        }
        ConfigAction::SetUrl { url } => {
            config.set_base_url(&url)?;
            config.save()?;
            println!("{} Base URL set to {}", "✓".green(), config.base_url);
        }
    }

    Ok(())
}
