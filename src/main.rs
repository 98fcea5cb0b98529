use anyhow::Context;
use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

use depth_cards::shell::config::{ConfigFile, Overrides, ResolvedConfig};

#[derive(Parser)]
#[command(name = "depth-cards", about = "Draw conversation cards from four decks of increasing depth")]
struct Args {
    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// JSON deck file (array of four {label, cards} objects)
    #[arg(short, long)]
    decks: Option<PathBuf>,

    /// Directory holding the cover, deck images and sounds
    #[arg(short, long)]
    assets: Option<PathBuf>,

    /// Seed for card draws, to replay a session
    #[arg(short, long)]
    seed: Option<u64>,

    /// Disable all sound
    #[arg(long)]
    mute: bool,

    /// Where to write the log
    #[arg(long, default_value = "depth-cards.log")]
    log_file: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // File logger keeps log lines out of the game screen
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file = match &args.config {
        Some(path) => ConfigFile::load(path)?,
        None => ConfigFile::default(),
    };
    let overrides = Overrides {
        seed: args.seed,
        decks: args.decks,
        assets: args.assets,
        mute: args.mute,
    };
    let config = ResolvedConfig::resolve(file, overrides);
    log::info!("depth-cards starting: {:?}", config);

    depth_cards::shell::run(config)
        .await
        .context("game aborted")
}
