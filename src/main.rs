//! Bíblia TUI - Entry Point

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use biblia_tui::model::{Theme, Translation};

/// Bíblia TUI - Portuguese scripture reader for the terminal
#[derive(Parser, Debug)]
#[command(name = "biblia-tui")]
#[command(version)]
#[command(about = "Terminal reader for the Bible in Portuguese (AA, ACF, NVI)")]
pub struct Args {
    /// Translation to open at startup (aa, acf or nvi)
    #[arg(short, long)]
    pub translation: Option<Translation>,

    /// Color theme (claro, dark, homem or mulher)
    #[arg(long)]
    pub theme: Option<Theme>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Resolve configuration with full precedence chain:
    // Defaults → Saved Theme → Config File → Env Vars → CLI Args
    let config = {
        let config_file = biblia_tui::config::load_config_with_precedence(args.config.clone())?;
        let merged =
            biblia_tui::config::merge_config(config_file, biblia_tui::config::load_saved_theme())?;
        let with_env = biblia_tui::config::apply_env_overrides(merged)?;
        biblia_tui::config::apply_cli_overrides(with_env, args.theme, args.translation)
    };

    // Initialize tracing with the configured log file path
    biblia_tui::logging::init(&config.log_file_path)?;

    info!(
        theme = %config.theme,
        translation = %config.translation,
        "Configuration loaded and resolved"
    );

    let colors = biblia_tui::view::ColorConfig::from_env_and_args(args.no_color);

    // Load the three built-in translations
    let corpora = biblia_tui::corpus::CorpusSet::load_builtin()?;

    biblia_tui::view::run_app(corpora, config, colors)?;

    Ok(())
}
