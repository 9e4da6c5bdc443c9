use std::path::PathBuf;

use crate::image_model::Model;

/// Generates one image per prompt line of the input file
#[derive(Debug, clap::Parser)]
pub struct Cli {
    /// File with one image prompt per line, blank lines are skipped
    #[arg(default_value = "descriptions.txt")]
    pub descriptions_file: PathBuf,

    /// Directory the generated images are written to
    #[arg(short, long, default_value = "generated_images")]
    pub output_dir: PathBuf,

    /// Model used for generation
    #[arg(long, value_enum, default_value_t)]
    pub model: Model,

    /// API key, read from OPENAI_API_KEY when not given
    #[arg(long)]
    pub api_key: Option<String>,
}
