use std::fs;
use std::path::Path;

use tracing::info;
use tracing_subscriber::EnvFilter;

use aswcomic::{LayoutParams, process_image};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

pub fn load_params(config: Option<&Path>) -> Result<LayoutParams, AppError> {
    let Some(path) = config else {
        return Ok(LayoutParams::default());
    };
    let text = fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    let params: LayoutParams =
        serde_json::from_str(&text).map_err(|source| AppError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
    params.validate()?;
    info!("Using layout from {:?}: {:?}", path, params);
    Ok(params)
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        init_logging();
    }

    if !args.img.exists() {
        return Err(AppError::MissingInput { path: args.img }.into());
    }

    let params = load_params(args.config.as_deref())?;

    info!("Processing: {:?}", args.img);
    let report = process_image(&args.img, &params, args.comic).map_err(AppError::from)?;

    info!("Run complete!");
    info!("Removed stale batch directories: {}", report.removed.len());
    info!(
        "Resized: {:?} ({}x{})",
        report.resized, report.resized_dimensions.0, report.resized_dimensions.1
    );
    info!("Squares: {}", report.squares.len());
    if args.comic.is_some() {
        info!("Comic strips: {}", report.comics.len());
    }
    info!("Slides: {}", report.slides.len());

    Ok(())
}
