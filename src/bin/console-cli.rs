use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde_json::Value;

use admin_console::api::{self, ApiClient};
use admin_console::config::loader::load_or_default;
use admin_console::observability::init_tracing;
use admin_console::routing::{console_routes, Route};

#[derive(Parser)]
#[command(name = "console-cli")]
#[command(about = "Management CLI for the admin console shell", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file; defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the configuration and the canonical route table
    Check,
    /// Print the navigation surface
    Routes,
    /// Issue a GET request through the configured API client
    Request {
        /// Path relative to the API base path (e.g., /users/list)
        path: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = load_or_default(cli.config.as_deref())?;
    init_tracing(&config.observability);

    match cli.command {
        Commands::Check => {
            let table = console_routes()?;
            let client = ApiClient::new(&config.api)?;
            println!("configuration ok");
            println!("  api base url: {}", client.base_url());
            println!("  timeout: {:?}", client.timeout());
            println!("  routes: {}", count_routes(table.routes()));
        }
        Commands::Routes => {
            let table = console_routes()?;
            for route in table.routes() {
                print_route(route, 0);
            }
        }
        Commands::Request { path } => {
            let client = Arc::new(ApiClient::new(&config.api)?);
            api::install(client.clone());

            match client.get(&path).await {
                Ok(response) => print_response(&response.body),
                Err(error) => {
                    eprintln!("Error: {}", error);
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}

fn count_routes(routes: &[Route]) -> usize {
    routes
        .iter()
        .map(|r| 1 + count_routes(&r.children))
        .sum()
}

fn print_route(route: &Route, depth: usize) {
    println!(
        "{:indent$}{:<20} {}",
        "",
        route.name,
        route.path,
        indent = depth * 2
    );
    for child in &route.children {
        print_route(child, depth + 1);
    }
}

fn print_response(body: &str) {
    match serde_json::from_str::<Value>(body) {
        Ok(json) => match serde_json::to_string_pretty(&json) {
            Ok(pretty) => println!("{}", pretty),
            Err(_) => println!("{}", body),
        },
        Err(_) => println!("{}", body),
    }
}
