// System status — artifact presence, vocabulary size, metrics, age.

use anyhow::Result;
use chrono::Utc;
use colored::Colorize;

use crate::config::Config;
use crate::model::{ModelBundle, ModelKind};

/// Print the artifact status for the configured model directory.
pub fn show(config: &Config) -> Result<()> {
    println!("\n{}", "=== Litmus Status ===".bold());
    println!("  Model dir: {}", config.model_dir.display());

    if !ModelBundle::artifacts_present(&config.model_dir) {
        println!(
            "  {}",
            "No trained artifacts found. Run `litmus train` first.".yellow()
        );
        return Ok(());
    }

    let bundle = ModelBundle::load(&config.model_dir)?;
    println!("  Vocabulary: {} terms", bundle.vectorizer.n_features());

    for kind in ModelKind::ALL {
        let artifact = bundle.artifact(kind);
        let age_days = (Utc::now() - artifact.trained_at).num_days();
        println!(
            "\n  {} — trained {} ({} days ago, {} samples)",
            kind.display_name().bold(),
            artifact.trained_at.format("%Y-%m-%d %H:%M UTC"),
            age_days,
            artifact.n_training_samples,
        );
        println!(
            "    accuracy {:.3}  precision {:.3}  recall {:.3}  f1 {:.3}",
            artifact.metrics.accuracy,
            artifact.metrics.precision,
            artifact.metrics.recall,
            artifact.metrics.f1,
        );
    }

    println!();
    Ok(())
}
