//! grounded-search: web-grounded answers with cited sources
//!
//! Usage:
//!   grounded-search               - Open the search window
//!   grounded-search ask <query>   - Print one answer and its sources
//!   grounded-search help          - Show help

mod app;
mod backend;
mod commands;
mod config;
mod native;
mod ui;

use std::env;

use app::GroundedSearch;
use backend::SearchClient;
use commands::Command;
use config::Config;
use iced::{window, Size, Task};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> iced::Result {
    init_logging();

    let args: Vec<String> = env::args().skip(1).collect();

    match Command::parse(args.as_slice()) {
        Command::Gui => start_gui(),
        Command::Ask { query } => {
            run_ask(&query);
            Ok(())
        }
        Command::Help => {
            println!("{}", Command::help_text());
            Ok(())
        }
        Command::Unknown { name } => {
            eprintln!("Unknown command: {}", name);
            eprintln!("Run 'grounded-search help' for usage");
            Ok(())
        }
    }
}

fn init_logging() {
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// Load config and build the client, or exit with a message
fn client_or_exit() -> SearchClient {
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if config.has_placeholder_key() {
        tracing::warn!(
            "No API key configured; set {} or add api_key to {:?}",
            config::ENV_API_KEY,
            Config::default_path()
        );
    }

    match SearchClient::from_config(&config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_ask(query: &str) {
    let client = client_or_exit();
    let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");

    match rt.block_on(commands::run_ask(&client, query)) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            tracing::error!("Search failed: {}", e);
            eprintln!("{}", e.user_message());
            std::process::exit(1);
        }
    }
}

fn start_gui() -> iced::Result {
    let client = client_or_exit();

    tracing::info!("Starting search window");

    iced::application(app::WINDOW_TITLE, GroundedSearch::update, GroundedSearch::view)
        .subscription(GroundedSearch::subscription)
        .theme(GroundedSearch::theme)
        .window(window::Settings {
            size: Size::new(720.0, 520.0),
            position: window::Position::Centered,
            resizable: true,
            ..Default::default()
        })
        .antialiasing(true)
        .run_with(move || (GroundedSearch::new(client), Task::none()))
}
