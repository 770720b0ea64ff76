//! Terminal front-end for the cart client.
//!
//! Reads one command per line from stdin and prints both containers after
//! every change:
//!
//! ```text
//! inc <id> | dec <id> | add <id> | del <id> | checkout | show | quit
//! ```

use std::path::PathBuf;

use clap::Parser;
use figment::providers::Serialized;
use serde::Serialize;
use tokio::io::{AsyncBufReadExt, BufReader};

use cart_client::view::{CART_CONTAINER, INVENTORY_CONTAINER};
use cart_client::{
    telemetry, CartError, ClientConfig, Controller, HttpCartApi, MemoryDocument, Store, UiEvent,
};

#[derive(Debug, Parser, Serialize)]
#[command(name = "cart-client", version, about = "Shopping-cart client for a JSON CRUD backend")]
struct Cli {
    /// Backend origin, e.g. http://localhost:3000
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    base_url: Option<String>,

    /// TOML configuration file
    #[arg(long)]
    #[serde(skip)]
    config: Option<PathBuf>,

    /// Log level filter (RUST_LOG takes precedence)
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    log_level: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    timeout_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<(), CartError> {
    let cli = Cli::parse();
    let config: ClientConfig = ClientConfig::figment(cli.config.as_deref())
        .merge(Serialized::defaults(&cli))
        .extract()?;
    telemetry::init_tracing(&config.log_level);

    let api = HttpCartApi::from_config(&config)?;
    let document = MemoryDocument::with_mount_points();
    let controller = Controller::new(api, Store::new(), document.clone());
    controller.init().await?;
    print_document(&document);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        match line {
            "" => continue,
            "quit" | "exit" => break,
            "show" => {
                print_document(&document);
                continue;
            }
            _ => {}
        }

        let event = match line.parse::<UiEvent>() {
            Ok(event) => event,
            Err(e) => {
                eprintln!("{}", e);
                continue;
            }
        };
        match controller.dispatch(event).await {
            Ok(()) => print_document(&document),
            Err(e) => eprintln!("error: {}", e),
        }
    }
    Ok(())
}

fn print_document(document: &MemoryDocument) {
    for selector in [INVENTORY_CONTAINER, CART_CONTAINER] {
        println!("── {} ──", selector);
        print!("{}", document.inner_html(selector).unwrap_or_default());
    }
}
