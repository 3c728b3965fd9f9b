use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use roster::ui::install_panic_hook;
use roster::{util, App, Config, EXAMPLE_CONFIG};

/// Terminal roster editor: add, search, edit, delete and export records.
#[derive(Parser, Debug)]
#[command(name = "roster", version, about, long_about = None)]
struct Args {
    /// Config file to load instead of <data-dir>/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Directory for config and logs (default: ~/.roster)
    #[arg(long, value_name = "PATH")]
    data_dir: Option<PathBuf>,

    /// Records per table page
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u16).range(1..))]
    page_size: Option<u16>,

    /// Directory CSV exports are written to
    #[arg(long, value_name = "PATH")]
    export_dir: Option<PathBuf>,

    /// Print the bundled example config and exit
    #[arg(long)]
    print_default_config: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.print_default_config {
        print!("{}", EXAMPLE_CONFIG);
        return Ok(());
    }

    util::init_data_dir(args.data_dir.clone());

    // Initialize logging to file (<data-dir>/logs/roster.log)
    fs::create_dir_all(util::logs_dir())
        .with_context(|| format!("creating {}", util::logs_dir().display()))?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(util::log_file_path())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(log_file)
        .with_ansi(false) // Disable ANSI colors in log file
        .init();

    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };
    if let Some(page_size) = args.page_size {
        config = config.with_page_size(page_size as usize);
    }
    if let Some(dir) = args.export_dir {
        config = config.with_export_dir(dir);
    }

    install_panic_hook();

    let mut app = App::new(config);
    app.run().await
}
