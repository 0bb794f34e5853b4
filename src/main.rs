use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use herodex::core::config;
use herodex::tui;

#[derive(Parser)]
#[command(name = "herodex", about = "Terminal browser for comic-book characters")]
struct Args {
    /// superheroapi.com access token (overrides config file and env var)
    #[arg(long)]
    api_key: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to herodex.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("herodex.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("herodex: {e}");
            std::process::exit(1);
        }
    };
    let resolved = config::resolve(&file_config, args.api_key.as_deref());

    log::info!("Herodex starting up (base_url: {})", resolved.base_url);

    tui::run(resolved)
}
