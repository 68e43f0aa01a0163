//! codexv - Entry Point

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// codexv - TUI for browsing codex search results
#[derive(Parser, Debug)]
#[command(name = "codexv")]
#[command(version)]
#[command(about = "TUI application for browsing grouped codex search results")]
pub struct Args {
    /// Path to a search-results JSON file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Replace the query shown in the results header
    #[arg(short, long)]
    pub query: Option<String>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Load dialog and page templates from this directory
    #[arg(long)]
    pub template_dir: Option<PathBuf>,

    /// Quit without asking for confirmation
    #[arg(long)]
    pub no_confirm_quit: bool,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = codexv::config::load_config_with_precedence(args.config.clone())?;
        let merged = codexv::config::merge_config(config_file);
        let with_env = codexv::config::apply_env_overrides(merged);

        // Only override confirm_quit if the flag was explicitly set
        let confirm_override = if args.no_confirm_quit { Some(false) } else { None };
        codexv::config::apply_cli_overrides(with_env, args.template_dir.clone(), confirm_override)
    };

    codexv::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let data = codexv::source::load_data_object(args.file.clone())?;
    let data = codexv::source::override_query(data, args.query.clone());

    let options = codexv::view::ViewerOptions {
        template_dir: config.template_dir,
        confirm_quit: config.confirm_quit,
        color: codexv::view::ColorConfig::from_env_and_args(args.no_color),
    };
    codexv::view::run_viewer(data, options)?;

    Ok(())
}
