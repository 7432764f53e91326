use anyhow::Result;
use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use captionfetch::clean::CleanOptions;
use captionfetch::cli::{Cli, Commands, OutputFormat};
use captionfetch::config::Config;
use captionfetch::service::TranscriptFetcher;
use captionfetch::{output, utils};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let default_filter = if cli.verbose {
        "captionfetch=debug"
    } else {
        "captionfetch=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Fetch {
            video,
            output,
            format,
            languages,
            keep_emoji,
        } => {
            let video_id = utils::extract_video_id(&video).ok_or_else(|| {
                anyhow::anyhow!("Could not extract a YouTube video ID from: {}", video)
            })?;

            let language_override = match languages {
                Some(raw) => {
                    let parsed = utils::parse_language_list(&raw);
                    if parsed.is_empty() {
                        anyhow::bail!("No valid language codes in: {}", raw);
                    }
                    Some(parsed)
                }
                None => None,
            };

            let mut config = Config::load().await?;
            if let Some(langs) = language_override {
                config.fetch.languages = langs;
            }

            let format = match format {
                Some(format) => format,
                None => OutputFormat::from_str(&config.app.default_output_format, true)
                    .map_err(|_| {
                        anyhow::anyhow!(
                            "Unknown output format in config: {}",
                            config.app.default_output_format
                        )
                    })?,
            };

            let fetcher = TranscriptFetcher::new(&config).with_clean_options(CleanOptions {
                strip_emoji: !keep_emoji,
            });

            tracing::info!("Starting transcript fetch for video: {}", video_id);

            let progress = if cli.quiet {
                None
            } else {
                let spinner = ProgressBar::new_spinner();
                spinner.set_style(
                    ProgressStyle::default_spinner()
                        .template("{spinner:.green} {msg}")
                        .unwrap(),
                );
                spinner.set_message("Fetching transcript...");
                spinner.enable_steady_tick(Duration::from_millis(100));
                Some(spinner)
            };

            let result = fetcher.fetch(&video_id).await;
            if let Some(spinner) = progress {
                spinner.finish_and_clear();
            }

            let result = result
                .map_err(|e| anyhow::anyhow!("{} (status code {})", e, e.status_code()))?;

            match output {
                Some(path) => {
                    output::save_to_file(&result, &path, &format).await?;
                    println!("Transcript saved to: {}", path.display());
                }
                None => {
                    output::print_to_console(&result, &format)?;
                }
            }
        }
        Commands::Config { show } => {
            let config = Config::load().await?;
            if show {
                config.display();
            } else {
                println!("Configuration file: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}
