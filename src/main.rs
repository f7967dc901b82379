use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use glot::core::config;
use glot::core::lang::Language;
use glot::tui;

#[derive(Parser)]
#[command(name = "glot", about = "Terminal translation & romanization companion")]
struct Args {
    /// Target language code (hi, en, fr, es, ja, tr, de, nl, ko, ru, la, zh-CN)
    #[arg(short, long)]
    target: Option<String>,

    /// Base URL of the translation backend
    #[arg(short, long)]
    backend: Option<String>,

    /// Disable the decorative animation
    #[arg(long)]
    no_motion: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to glot.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("glot.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let cli_target = match args.target.as_deref() {
        Some(code) => match Language::from_code(code) {
            Some(lang) => Some(lang),
            None => {
                eprintln!("Unknown target language code: {code}");
                eprintln!("Supported: hi, en, fr, es, ja, tr, de, nl, ko, ru, la, zh-CN");
                std::process::exit(1);
            }
        },
        None => None,
    };

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };
    let resolved = config::resolve(
        &file_config,
        cli_target,
        args.backend.as_deref(),
        args.no_motion,
    );

    log::info!(
        "Glot starting up (target={}, backend={})",
        resolved.target.code(),
        resolved.backend_base_url
    );

    tui::run(resolved)
}
