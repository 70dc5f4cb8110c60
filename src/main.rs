//! # tickerdeck — terminal portfolio client
//!
//! Bootstraps the synchronization controller, loads the initial portfolio
//! and summary, then drives the controller from a line-based command loop.

use std::io::Write;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tickerdeck::config::Config;
use tickerdeck::controller::Controller;
use tickerdeck::model::Ticker;
use tickerdeck::render::render;
use tickerdeck::transport::ApiClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::from_default_env()
                .add_directive("tickerdeck=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    let config = Config::from_env().context("Failed to load config")?;
    let client = reqwest::Client::new();

    info!(backend = %config.backend_url, "tickerdeck started");

    let api = ApiClient::new(client, config.backend_url);
    let mut controller = Controller::new(api);

    // One-time bootstrap; the loop below never calls start() again.
    controller.start().await;

    println!("📈 Stock Portfolio Tracker");
    println!("commands: add <ticker> | rm <ticker> | refresh | report | quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("{}\n> ", render(controller.state()));
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break; // stdin closed
        };

        let (command, rest) = match line.trim().split_once(' ') {
            Some((command, rest)) => (command, rest),
            None => (line.trim(), ""),
        };

        match command {
            "add" => {
                controller.set_pending_input(rest);
                controller.add_ticker(rest).await;
            }
            "rm" => {
                if let Some(ticker) = Ticker::parse(rest) {
                    controller.remove_ticker(&ticker).await;
                }
            }
            "refresh" => {
                controller.refresh_portfolio().await;
                controller.refresh_summary().await;
            }
            "report" => controller.send_report().await,
            "quit" | "exit" => break,
            "" => {} // re-render only
            other => println!("unknown command: {other}"),
        }
    }

    Ok(())
}
