use anyhow::Result;
use clap::Parser;
use leetcode_export::config::Config;
use leetcode_export::export::ExporterBuilder;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "leetcode-export", about = "Export solved problems as markdown docs")]
struct Args {
    /// Path to the TOML config file
    #[arg(long, default_value = "leetcode.toml")]
    config: PathBuf,
    /// Override the configured output directory
    #[arg(long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = Config::load(&args.config)?;
    let output_dir = args.output.unwrap_or_else(|| config.output_dir.clone());

    let exporter = ExporterBuilder::default()
        .base_url(config.base_url)
        .username(config.username)
        .password(config.password)
        .language(config.language)
        .output_dir(output_dir)
        .build()?;

    match exporter.run().await {
        Ok(outcome) => {
            tracing::info!(
                files = outcome.generated.len(),
                summary = %outcome.summary_path.display(),
                "export complete"
            );
            Ok(())
        }
        Err(err) => {
            tracing::error!(error = %err, "export failed");
            std::process::exit(1);
        }
    }
}
