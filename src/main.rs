use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use sparcli::{cli, config, error, tally::CountSelector, types::DisplayMode, utils};

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
  args_conflicts_with_subcommands = true,
  subcommand_negates_reqs = true,
)]
struct Cli {
    /// Spotify playlist URL, share link, URI or bare id (must be public or unlisted)
    #[clap(required = true)]
    playlist: Option<String>,

    /// How many top artists to display: a number or 'all'
    #[clap(long, default_value = "all", value_parser = utils::parse_count_selector)]
    top: CountSelector,

    /// Display option: 'pie' or 'list'
    #[clap(long, default_value = "pie", value_parser = utils::parse_display_mode)]
    display: DisplayMode,

    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(e) = config::load_env() {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match (cli.command, cli.playlist) {
        (Some(Command::Completions(opt)), _) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
        (None, Some(playlist)) => cli::artists(playlist, cli.top, cli.display).await,
        (None, None) => error!("A playlist URL or id is required."),
    }
}
