use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn log_directory() -> PathBuf {
    ProjectDirs::from("com", "blogtui", "blogtui")
        .map(|dirs| dirs.data_local_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn initialize_logging() -> color_eyre::Result<()> {
    let directory = log_directory();
    fs::create_dir_all(&directory)?;
    let log_file = fs::File::create(directory.join("blogtui.log"))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file_layer = fmt::layer()
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
