//! Sparta - workout session runtime
//!
//! Main entry point. Reads commands from stdin, one per line.

use anyhow::Context;
use sparta_core::workout::timers::RestCountdown;
use sparta_lib::commands::HELP;
use sparta_lib::{AppContext, Driver};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::watch;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file before tracing reads its filter
    let dotenv = dotenvy::dotenv();

    sparta_infra::observability::init_tracing();

    match dotenv {
        Ok(path) => info!(path = %path.display(), "Loaded .env"),
        Err(e) => warn!(error = %e, "Could not load .env file"),
    }

    let ctx = AppContext::from_env().context("failed to initialise application context")?;
    let mut driver = Driver::new(ctx);
    info!("Sparta started");

    let mut stdout = tokio::io::stdout();
    write_lines(&mut stdout, &[HELP.to_string()]).await?;
    write_lines(&mut stdout, &driver.render()).await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut rest = driver.rest_updates();
    let mut last_rest = RestCountdown::default();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if line.trim().is_empty() {
                    continue;
                }

                let reply = driver.handle(&line);
                write_lines(&mut stdout, &reply.lines).await?;
                if reply.quit {
                    break;
                }
                rest = driver.rest_updates();
                last_rest = rest.as_ref().map(|rx| *rx.borrow()).unwrap_or_default();
            }
            changed = rest_changed(rest.as_mut()) => {
                let Some(countdown) = changed else {
                    rest = None;
                    continue;
                };
                if countdown.finished_after(&last_rest) {
                    write_lines(&mut stdout, &["Rest over".to_string()]).await?;
                }
                last_rest = countdown;
            }
        }
    }

    driver.shutdown().await;
    info!("Sparta stopped");
    Ok(())
}

/// Next rest countdown value. Pends forever without a session and yields
/// `None` once the clock is gone.
async fn rest_changed(rest: Option<&mut watch::Receiver<RestCountdown>>) -> Option<RestCountdown> {
    let Some(rx) = rest else {
        return std::future::pending().await;
    };
    rx.changed().await.ok()?;
    Some(*rx.borrow_and_update())
}

async fn write_lines(stdout: &mut tokio::io::Stdout, lines: &[String]) -> anyhow::Result<()> {
    for line in lines {
        stdout.write_all(line.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
    }
    stdout.flush().await?;
    Ok(())
}
