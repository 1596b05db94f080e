//! # CLI Module
//!
//! User-facing commands of the `chartspot` binary. Each command calls into
//! the library, shows a spinner while the network is busy and reports the
//! outcome with the crate's output macros. Failures end the process through
//! [`error!`](crate::error), so these functions return nothing.
//!
//! ## Commands
//!
//! - [`hits`] - fetch chart data and plot highest rank against weeks on chart
//! - [`login`] - check that a Spotify session can be created
//! - [`search`] - list albums matching a query
//! - [`features`] - plot audio features of an album's tracks
//!
//! ## Output
//!
//! Plots are printed to stdout as Vega-Lite JSON unless `--out` names a
//! file. `--html` writes a standalone page instead and `--open` shows the
//! written file in the default browser.
//!
//! ## Usage Patterns
//!
//! ```bash
//! chartspot hits "http://billboard.modulo.site/search/artist?q=kanye" --field songs --out hits.json
//! chartspot search "Faster Than the Speed of Night"
//! chartspot features 2Xq0xGWb1ufL1QQ5l5BO3s --columns energy,valence --average --html --out feats.html --open
//! ```

mod albums;
mod auth;
mod hits;

pub use albums::{FeatureOptions, features, search};
pub use auth::login;
pub use hits::hits;

use std::{path::PathBuf, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    config::Endpoints, error, plot::PlotSpec, spotify::Session, success, utils, warning,
};

/// Where and how a rendered plot is written.
#[derive(Debug, Clone, Default)]
pub struct OutputOptions {
    pub out: Option<PathBuf>,
    pub html: bool,
    pub open: bool,
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}

async fn logged_in_session(endpoints: &Endpoints, token: Option<String>) -> Session {
    let mut session = Session::new();
    let pb = spinner("Logging in to spotify...");
    let result = session.login(endpoints, token).await.map(|_| ());
    pb.finish_and_clear();

    if let Err(e) = result {
        error!("Cannot log in to spotify. Err: {}", e);
    }
    session
}

async fn emit(spec: &PlotSpec, output: &OutputOptions) {
    let contents = if output.html {
        spec.to_html()
    } else {
        match serde_json::to_string_pretty(&spec.to_vega_lite()) {
            Ok(json) => json,
            Err(e) => error!("Cannot serialize plot. Err: {}", e),
        }
    };

    let Some(path) = &output.out else {
        println!("{}", contents);
        return;
    };

    if let Err(e) = utils::write_output(path, &contents).await {
        error!("Cannot write plot to {}. Err: {}", path.display(), e);
    }
    success!("Wrote plot to {}", path.display());

    if !output.open {
        return;
    }
    let opened = utils::file_url(path).is_some_and(|url| webbrowser::open(&url).is_ok());
    if !opened {
        warning!(
            "Failed to open browser. Please open the following file manually:\n{}",
            path.display()
        );
    }
}
