//! Interactive terminal front end
//!
//! This module contains the line-oriented session that stands in for the
//! browser presenter: it searches the catalog, renders result cards and drives
//! the shopping list.

pub mod commands;
pub mod session;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::debug;

use crate::catalog::CatalogClient;

pub use commands::Command;
pub use session::{Reply, Session};

/// Read commands from stdin until `quit` or end of input
pub async fn run(session: &mut Session, catalog: &CatalogClient, welcome: &str) -> Result<()> {
    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    stdout.write_all(format!("{welcome}\n> ").as_bytes()).await?;
    stdout.flush().await?;

    while let Some(line) = lines.next_line().await? {
        let command = Command::parse(&line);
        debug!(?command, "Command received");

        match session.execute(command, catalog).await {
            Reply::Text(text) => {
                if !text.is_empty() {
                    stdout.write_all(text.trim_end().as_bytes()).await?;
                    stdout.write_all(b"\n").await?;
                }
            }
            Reply::Quit(text) => {
                stdout.write_all(format!("{text}\n").as_bytes()).await?;
                stdout.flush().await?;
                return Ok(());
            }
        }

        stdout.write_all(b"> ").await?;
        stdout.flush().await?;
    }

    Ok(())
}
