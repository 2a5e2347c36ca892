//! # Duka POS Terminal
//!
//! Interactive till for the Duka POS backend.
//!
//! ## Module Organization
//! ```text
//! duka_terminal/
//! ├── lib.rs          ◄─── You are here (startup & REPL loop)
//! ├── config.rs       ◄─── Store settings from DUKA_* env vars
//! ├── command.rs      ◄─── Line -> Command parsing
//! ├── till.rs         ◄─── Session state & command handlers
//! └── render.rs       ◄─── Pure text rendering
//! ```
//!
//! ## Startup Sequence
//! ```text
//! 1. Initialize logging (stderr, RUST_LOG override)
//! 2. Load TerminalConfig + ApiConfig from the environment
//! 3. Sign in (credentials from env or prompt) -> SessionContext
//! 4. Build catalog/ledger clients from the session
//! 5. Load the catalog, print the banner, enter the REPL
//! ```
//!
//! The prompt mirrors the checkout phase: `duka>` while ringing up,
//! `pay>` while the payment screen is open.

pub mod command;
pub mod config;
pub mod render;
pub mod till;

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::info;
use tracing_subscriber::EnvFilter;

use duka_api::{ApiConfig, AuthClient, CatalogClient, LedgerClient};

use crate::command::Command;
use crate::config::TerminalConfig;
use crate::till::Till;

type InputLines = Lines<BufReader<Stdin>>;

/// Runs the terminal until `quit` or end of input.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    info!("Starting Duka POS terminal");

    let config = TerminalConfig::from_env();
    let api_config = ApiConfig::from_env();
    info!(api_url = %api_config.base_url, store = %config.store_name, "Configuration loaded");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    let auth = AuthClient::new(api_config.clone())?;
    let (username, password) = credentials(&config, &mut lines).await?;
    let session = match auth.login(&username, &password).await {
        Ok(session) => session,
        Err(err) => {
            eprintln!("Login failed: {err}");
            return Ok(());
        }
    };

    let catalog = CatalogClient::new(api_config.clone(), session.clone())?;
    let ledger = LedgerClient::new(api_config, session.clone())?;
    let mut till = Till::new(config, session, catalog, ledger);

    println!("{}", till.banner());
    println!("{}", till.load_catalog().await);

    loop {
        prompt(till.prompt())?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match Command::parse(line) {
            Ok(command) => {
                let quit = matches!(command, Command::Quit);
                let output = till.dispatch(command).await;
                println!("{output}");
                if quit {
                    break;
                }
            }
            Err(err) => println!("{err}"),
        }
    }

    info!("Terminal session ended");
    Ok(())
}

/// Credentials from the environment, prompting for whatever is missing.
async fn credentials(
    config: &TerminalConfig,
    lines: &mut InputLines,
) -> Result<(String, String), Box<dyn std::error::Error>> {
    let username = match &config.username {
        Some(username) => username.clone(),
        None => read_line("Username: ", lines).await?,
    };
    let password = match &config.password {
        Some(password) => password.clone(),
        None => read_line("Password: ", lines).await?,
    };
    Ok((username, password))
}

async fn read_line(
    label: &str,
    lines: &mut InputLines,
) -> Result<String, Box<dyn std::error::Error>> {
    prompt(label)?;
    let line = lines.next_line().await?.ok_or("input closed")?;
    Ok(line.trim().to_string())
}

fn prompt(text: &str) -> std::io::Result<()> {
    print!("{text}");
    std::io::stdout().flush()
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so the interactive screen on stdout stays clean.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages from everything
/// - `RUST_LOG=duka_api=debug` - Trace the wire calls only
/// - Default: INFO for the duka crates, WARN for dependencies
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("warn,duka_core=info,duka_api=info,duka_terminal=info")
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
