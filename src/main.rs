use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;

use litmus::config::Config;
use litmus::model::{ModelBundle, ModelKind};

/// Litmus: dual-model sentiment analysis for text reviews.
///
/// Classifies a review as positive or negative with one of two linear
/// models, explains the verdict word by word, and serves the whole thing
/// over an embedded web page.
#[derive(Parser)]
#[command(name = "litmus", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train both classifiers from a labeled CSV dataset
    Train {
        /// Dataset path (columns: review, sentiment). Defaults to LITMUS_DATA_PATH.
        #[arg(long)]
        data: Option<PathBuf>,

        /// Vocabulary cap for the TF-IDF vectorizer
        #[arg(long, default_value = "5000")]
        max_features: usize,

        /// Held-out fraction for evaluation
        #[arg(long, default_value = "0.2")]
        test_ratio: f64,

        /// Seed for the shuffle-split and SGD reshuffles
        #[arg(long, default_value = "42")]
        seed: u64,
    },

    /// Analyze one review from the command line
    Analyze {
        /// The review text
        text: String,

        /// Which model to use: logistic or sgd
        #[arg(long, default_value = "logistic")]
        model: String,

        /// Positive-class decision threshold (0.0 to 1.0)
        #[arg(long, default_value = "0.5")]
        threshold: f64,
    },

    /// Run the web service with the embedded page
    Serve {
        #[arg(long, default_value = "8080")]
        port: u16,

        #[arg(long, default_value = "127.0.0.1")]
        bind: String,
    },

    /// Show artifact status (vocabulary size, metrics, training age)
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("litmus=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Train {
            data,
            max_features,
            test_ratio,
            seed,
        } => {
            let data_path = data.unwrap_or_else(|| PathBuf::from(&config.data_path));
            println!("Training from {}...", data_path.display());

            let opts = litmus::train::TrainOptions {
                max_features,
                test_ratio,
                seed,
            };
            let report = litmus::train::run(&data_path, &config.model_dir, &opts)?;

            println!("\n{}", "Training complete.".bold());
            println!(
                "  Samples: {} train / {} test   Features: {}",
                report.n_train, report.n_test, report.n_features
            );
            for (name, m) in [("Logistic", &report.logistic), ("SGD", &report.sgd)] {
                println!(
                    "  {:<9} accuracy {:.3}  precision {:.3}  recall {:.3}  f1 {:.3}",
                    name.bold(),
                    m.accuracy,
                    m.precision,
                    m.recall,
                    m.f1
                );
            }
            println!("\nArtifacts saved to {}", config.model_dir.display());
        }

        Commands::Analyze {
            text,
            model,
            threshold,
        } => {
            let kind = match ModelKind::parse(&model) {
                Some(kind) => kind,
                None => anyhow::bail!("Unknown model \"{model}\" — expected logistic or sgd"),
            };
            if !(0.0..=1.0).contains(&threshold) {
                anyhow::bail!("Threshold must be between 0.0 and 1.0");
            }

            let bundle = ModelBundle::load(&config.model_dir)?;

            match litmus::analysis::analyze(&bundle, kind, &text, threshold) {
                Ok(result) => litmus::output::terminal::display_analysis(&result),
                Err(rejection) => println!("{}", format!("Warning: {rejection}").yellow()),
            }
        }

        Commands::Serve { port, bind } => {
            let bundle = ModelBundle::load(&config.model_dir)?;
            litmus::web::run_server(config, bundle, port, &bind).await?;
        }

        Commands::Status => {
            litmus::status::show(&config)?;
        }
    }

    Ok(())
}
