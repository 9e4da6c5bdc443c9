use std::{
    fs,
    path::{Path, PathBuf},
};

use color_eyre::{Result, eyre::WrapErr as _};
use log::debug;

use crate::{config::Config, image_model::ImageModel, prompts};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub generated: usize,
    pub failed: usize,
}

/// Runs one full pass over the prompt file: every prompt gets one generation
/// attempt, failures are reported and skipped, nothing is retried.
pub async fn run(config: &Config, model: &dyn ImageModel) -> Result<BatchSummary> {
    fs::create_dir_all(&config.output_dir).wrap_err_with(|| {
        format!(
            "Couldn't create output directory {}",
            config.output_dir.display()
        )
    })?;

    let prompts = match prompts::load(&config.descriptions_file) {
        Ok(prompts) => prompts,
        Err(e) => {
            eprintln!("Error: {e:#}");
            vec![]
        }
    };

    if prompts.is_empty() {
        println!(
            "No prompts found in {}, nothing to do.",
            config.descriptions_file.display()
        );
        return Ok(BatchSummary::default());
    }

    println!(
        "Generating {} images with {} into {}",
        prompts.len(),
        config.model,
        config.output_dir.display()
    );

    let mut summary = BatchSummary::default();
    for (i, prompt) in prompts.iter().enumerate() {
        let index = i + 1;
        println!("\nGenerating image {index}/{} for '{prompt}'", prompts.len());

        match generate_image(model, prompt, &config.output_dir, index).await {
            Ok(path) => {
                summary.generated += 1;
                println!("Saved {}", path.display());
            }
            Err(e) => {
                summary.failed += 1;
                eprintln!("Failed to generate image for '{prompt}': {e:#}");
            }
        }
    }

    println!(
        "\nDone: {} generated, {} failed.",
        summary.generated, summary.failed
    );
    Ok(summary)
}

/// One prompt end to end: generate, download, write `image_<index>.png`.
/// Existing files at that path are overwritten.
async fn generate_image(
    model: &dyn ImageModel,
    prompt: &str,
    output_dir: &Path,
    index: usize,
) -> Result<PathBuf> {
    let image = model.get_image(prompt).await?;

    if let Some(revised) = &image.revised_prompt {
        debug!("Revised prompt for image {index}: {revised}");
    }

    let path = output_dir.join(format!("image_{index}.png"));
    fs::write(&path, &image.data).wrap_err_with(|| format!("Couldn't write {}", path.display()))?;

    Ok(path)
}
