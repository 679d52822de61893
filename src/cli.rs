use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_OUTPUT_DIR: &str = "./app_icon_output";
pub const USAGE_EXAMPLE: &str = "Example: appicon icon.png ./output";

#[derive(Parser)]
#[command(
    name = "appicon",
    version,
    about = "Turn any image into a rounded 1024x1024 app icon",
    after_help = USAGE_EXAMPLE
)]
pub struct Cli {
    /// Source image (PNG, JPEG, ...)
    pub input: PathBuf,

    /// Directory to write AppIcon-1024.png into (created if missing)
    #[arg(default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,
}
