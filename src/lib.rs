//! Chartspot Library
//!
//! Workshop helpers for exploring music data: fetch Billboard chart runs and
//! Spotify audio features, reshape them into tidy tables and turn them into
//! Vega-Lite plot specifications.
//!
//! # Modules
//!
//! - `billboard` - Chart endpoint client
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Error type shared by every module
//! - `plot` - Plot specifications and the chart/feature renderers
//! - `spotify` - Login, session handle and Spotify Web API operations
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use chartspot::{config::Endpoints, plot, spotify::Session};
//!
//! #[tokio::main]
//! async fn main() -> chartspot::Result<()> {
//!     let mut session = Session::new();
//!     session.login(&Endpoints::from_env(), None).await?;
//!     let feats = chartspot::spotify::fetch_features(&session, "album-id").await?;
//!     let spec = plot::render_avg_features(&feats, &["energy"], "Energy")?;
//!     println!("{}", spec.to_vega_lite());
//!     Ok(())
//! }
//! ```

pub mod billboard;
pub mod cli;
pub mod config;
pub mod error;
pub mod plot;
pub mod spotify;
pub mod types;
pub mod utils;

pub use error::{Error, Result};

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Fetching {}", url);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Logged in to spotify");
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only used by the command-line layer for failures the user has to fix
/// before trying again. Library code returns [`Error`] instead.
///
/// # Example
///
/// ```
/// error!("Cannot fetch chart data. Err: {}", e);
/// // Program exits here
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// # Example
///
/// ```
/// warning!("Failed to open browser");
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
