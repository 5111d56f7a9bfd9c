use clap::{
    Args, CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use moodlist::{
    cli::{self, CatalogSource, GenerateArgs},
    config, utils, warning,
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
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List your Spotify playlists
    Playlists,

    /// Fetch the tracks of a playlist into your library
    Tracks(TracksOptions),

    /// Browse the local track library
    Library(LibraryOptions),

    #[clap(about = "Curate a mood playlist from your tracks")]
    Generate(GenerateOptions),

    /// Show previously generated playlists
    History(HistoryOptions),

    /// Popularity and genre statistics of generated playlists
    Stats(StatsOptions),

    /// Test the connection to the AI service
    Check,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct TracksOptions {
    /// Spotify playlist id
    playlist: String,

    /// Number of tracks to fetch (at most 100)
    #[clap(long, default_value_t = 50)]
    limit: usize,
}

#[derive(Parser, Debug, Clone)]
pub struct LibraryOptions {
    /// Order by last request instead of popularity
    #[clap(long)]
    recent: bool,

    #[clap(long, default_value_t = 20)]
    limit: usize,
}

#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct SourceOptions {
    /// Spotify playlist id to take the tracks from
    #[clap(long)]
    playlist: Option<String>,

    /// Use the most popular tracks of the local library
    #[clap(long)]
    library: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct GenerateOptions {
    #[command(flatten)]
    source: SourceOptions,

    /// Mood or theme, e.g. "rainy sunday morning"
    #[clap(long)]
    mood: String,

    /// Playlist name (defaults to "<Mood> Mix")
    #[clap(long)]
    name: Option<String>,

    /// Number of tracks offered to the model
    #[clap(long, default_value = "50", value_parser = utils::parse_track_count)]
    tracks: usize,

    /// Number of tracks in the generated playlist
    #[clap(long, default_value = "20", value_parser = utils::parse_track_count)]
    size: usize,

    /// Publish the playlist to your Spotify account
    #[clap(long)]
    publish: bool,

    /// Sampling temperature of the model
    #[clap(long)]
    temperature: Option<f32>,

    /// Upper bound for the model's answer length
    #[clap(long)]
    max_output_tokens: Option<u32>,
}

#[derive(Parser, Debug, Clone)]
pub struct HistoryOptions {
    /// Show the tracks of one generated playlist
    #[clap(long)]
    id: Option<u64>,
}

#[derive(Parser, Debug, Clone)]
pub struct StatsOptions {
    #[clap(long, default_value_t = 10)]
    limit: usize,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        warning!("Cannot load .env file, using the process environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Playlists => cli::list_playlists().await,
        Command::Tracks(opt) => cli::fetch_tracks(opt.playlist, opt.limit).await,
        Command::Library(opt) => cli::library(opt.recent, opt.limit).await,
        Command::Generate(opt) => {
            let source = match opt.source.playlist {
                Some(id) => CatalogSource::Playlist(id),
                None => CatalogSource::Library,
            };
            cli::generate(GenerateArgs {
                source,
                mood: opt.mood,
                name: opt.name,
                catalog_size: opt.tracks,
                size: opt.size,
                publish: opt.publish,
                temperature: opt.temperature,
                max_output_tokens: opt.max_output_tokens,
            })
            .await
        }
        Command::History(opt) => cli::history(opt.id).await,
        Command::Stats(opt) => cli::stats(opt.limit).await,
        Command::Check => cli::check().await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
