use anyhow::{Context, Result};
use audioscope::AppConfig;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "audioscope")]
#[command(about = "Upload audio files, get waveform and spectrogram plots", long_about = None)]
struct Args {
    /// Address to listen on
    #[arg(short = 'b', long, default_value = "127.0.0.1:8000")]
    bind: SocketAddr,

    /// Directory uploaded files are saved to
    #[arg(short = 'u', long, default_value = "uploads")]
    upload_dir: String,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Expand ~ and create the upload directory up front
    let upload_dir = PathBuf::from(shellexpand::tilde(&args.upload_dir).as_ref());
    std::fs::create_dir_all(&upload_dir)
        .with_context(|| format!("Failed to create upload directory: {:?}", upload_dir))?;
    log::info!("Upload directory: {:?}", upload_dir);

    let app = audioscope::router(AppConfig::new(upload_dir));

    let listener = tokio::net::TcpListener::bind(args.bind)
        .await
        .with_context(|| format!("Failed to bind {}", args.bind))?;
    log::info!("Listening on http://{}", args.bind);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
