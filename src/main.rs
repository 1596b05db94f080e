use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use chartspot::{
    cli::{self, FeatureOptions, OutputOptions},
    config::{self, Endpoints},
    error,
    plot::{DEFAULT_FEATURES, DEFAULT_TITLE},
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Spotify bearer token (defaults to SPOTIFY_TOKEN, then the workshop token)
    #[clap(long, global = true)]
    token: Option<String>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Plot highest rank against weeks on chart from a Billboard endpoint
    Hits(HitsOptions),

    /// Check that logging in to Spotify works
    Login,

    /// Search Spotify albums by name
    Search(SearchOptions),

    /// Plot audio features of an album's tracks
    Features(FeaturesOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

impl Command {
    /// Only the Spotify commands read `.env` settings.
    fn needs_config(&self) -> bool {
        matches!(
            self,
            Command::Login | Command::Search(_) | Command::Features(_)
        )
    }
}

#[derive(Parser, Debug, Clone)]
pub struct OutputArgs {
    /// Write the plot to this file instead of stdout
    #[clap(long)]
    pub out: Option<PathBuf>,

    /// Write a standalone HTML page instead of Vega-Lite JSON
    #[clap(long)]
    pub html: bool,

    /// Open the written file in the browser
    #[clap(long, requires = "out")]
    pub open: bool,
}

impl From<OutputArgs> for OutputOptions {
    fn from(args: OutputArgs) -> Self {
        OutputOptions {
            out: args.out,
            html: args.html,
            open: args.open,
        }
    }
}

#[derive(Parser, Debug, Clone)]
pub struct HitsOptions {
    /// Chart endpoint URL, e.g. http://billboard.modulo.site/search/artist?q=kanye
    pub url: String,

    /// Take the records from this field of the response (e.g. songs)
    #[clap(long)]
    pub field: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOptions {
    /// Album name to look for
    pub query: String,
}

#[derive(Parser, Debug, Clone)]
pub struct FeaturesOptions {
    /// Spotify album id (see `chartspot search`)
    pub album_id: String,

    /// Features to plot, comma separated
    #[clap(long, value_delimiter = ',', default_values = DEFAULT_FEATURES)]
    pub columns: Vec<String>,

    /// Plot title
    #[clap(long, default_value = DEFAULT_TITLE)]
    pub title: String,

    /// Average each feature over all tracks
    #[clap(long)]
    pub average: bool,

    /// Print the reshaped table instead of a plot
    #[clap(long)]
    pub table: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if cli.command.needs_config() {
        if let Err(e) = config::load_env().await {
            error!("Cannot load environment. Err: {}", e);
        }
    }

    let endpoints = Endpoints::from_env();
    let token = cli.token.or_else(config::spotify_token);

    match cli.command {
        Command::Hits(opt) => cli::hits(&opt.url, opt.field, &opt.output.into()).await,
        Command::Login => cli::login(&endpoints, token).await,
        Command::Search(opt) => cli::search(&endpoints, token, &opt.query).await,
        Command::Features(opt) => {
            let options = FeatureOptions {
                columns: opt.columns,
                title: opt.title,
                average: opt.average,
                table: opt.table,
            };
            cli::features(
                &endpoints,
                token,
                &opt.album_id,
                &options,
                &opt.output.into(),
            )
            .await
        }
        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
