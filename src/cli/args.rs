use clap::Parser;
use std::path::PathBuf;

use aswcomic::ComicLayout;

#[derive(Parser, Debug)]
#[command(
    name = "aswcomic",
    version,
    about = "Create \"A Softer World\"-style comic from image."
)]
pub struct CliArgs {
    /// Path to the image
    #[arg(long = "img", value_name = "FILE PATH")]
    pub img: PathBuf,

    /// JSON file overriding the grid geometry (square_size, border_size,
    /// padding, num_batches, num_squares, saturation, contrast)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Also assemble each batch into a comic strip (horizontal or vertical)
    #[arg(long, value_enum)]
    pub comic: Option<ComicLayout>,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
