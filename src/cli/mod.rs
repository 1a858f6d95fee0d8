//! # CLI Module
//!
//! The command-line layer of lineupcli. It resolves user input (flags,
//! environment, interactive prompts), calls into [`crate::spotify`] and
//! [`crate::lineup`], and renders the results.
//!
//! ## Commands
//!
//! - [`playlists`] - Lists a user's playlists in a numbered table
//! - [`scan`] - Matches one playlist against a lineup and prints the common
//!   artists table and the related artists tree
//!
//! ## Error Handling
//!
//! Errors from the core are reported with the crate's `error!` macro, which
//! prints the message and exits with status 1. Recoverable oddities (an
//! empty lineup, no matches) are reported with `warning!`.
//!
//! ## Usage Patterns
//!
//! ```bash
//! lineupcli playlists --user someuser
//! lineupcli scan --user someuser --playlist 3 --lineup lineup.txt
//! RUST_LOG=lineupcli=debug lineupcli scan
//! ```

mod playlists;
mod render;
mod scan;

use std::{io::Write, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader, Lines, Stdin};

use crate::{config::Config, error::Result};

pub use playlists::playlists;
pub use render::{artist_song_rows, playlist_rows, render_related_tree};
pub use scan::scan;

fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}

/// Line-oriented reader for interactive answers.
///
/// One `Prompt` is created per command and shared by every question it asks,
/// so input that was buffered while reading one answer (e.g. piped stdin)
/// is still there for the next.
pub struct Prompt<R> {
    lines: Lines<BufReader<R>>,
}

impl Prompt<Stdin> {
    pub fn stdin() -> Self {
        Self::new(tokio::io::stdin())
    }
}

impl<R: AsyncRead + Unpin> Prompt<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: BufReader::new(reader).lines(),
        }
    }

    /// Prints `label` and reads one trimmed line. End of input yields an
    /// empty answer.
    pub async fn ask(&mut self, label: &str) -> Result<String> {
        {
            use colored::Colorize;
            print!("{} ", label.bold());
        }
        std::io::stdout().flush()?;

        let line = self.lines.next_line().await?.unwrap_or_default();
        Ok(line.trim().to_string())
    }
}

/// Flag first, then `SPOTIFY_USER_ID`, then an interactive prompt.
pub async fn resolve_user<R: AsyncRead + Unpin>(
    config: &Config,
    user: Option<String>,
    prompt: &mut Prompt<R>,
) -> Result<String> {
    if let Some(user) = user.or_else(|| config.user_id.clone()) {
        return Ok(user);
    }
    prompt.ask("User ID:").await
}
