use builder::{BuildEvent, BuildObserver, BuildSummary, KnowledgeBaseBuilder};
use clap::Parser;
use colored::Colorize;
use kb_loader::{BuildConfig, OutputFormat};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::debug;

/// kb-build - assemble the recommendations knowledge base
///
/// With no arguments, reads ./recommendations/*.json and ./features.json
/// and writes ./kb-build.json.
#[derive(Parser, Debug)]
#[command(name = "kb-build")]
#[command(about = "Build kb-build.json from recommendation files and the feature catalog", long_about = None)]
struct Cli {
    /// Project root containing recommendations/ and features.json
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Directory of per-recommendation .json files (default: <root>/recommendations)
    #[arg(long)]
    recommendations_dir: Option<PathBuf>,

    /// Feature catalog file (default: <root>/features.json)
    #[arg(long)]
    features: Option<PathBuf>,

    /// Knowledge base output file (default: <root>/kb-build.json)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Indent the output instead of writing it on one line
    #[arg(long)]
    pretty: bool,
}

impl Cli {
    fn into_config(self) -> BuildConfig {
        let mut config = BuildConfig::from_root(&self.root);
        if let Some(dir) = self.recommendations_dir {
            config.recommendations_dir = dir;
        }
        if let Some(path) = self.features {
            config.features_path = path;
        }
        if let Some(path) = self.output {
            config.output_path = path;
        }
        if self.pretty {
            config.format = OutputFormat::Pretty;
        }
        config
    }
}

/// Prints build progress to the console in colour
struct ConsoleObserver;

impl BuildObserver for ConsoleObserver {
    fn on_event(&self, event: &BuildEvent) {
        match event {
            BuildEvent::ListedRecommendations { count } => {
                println!("{}", format!("Found {} recommendation files...", count).blue())
            }
            BuildEvent::LoadedFeatures { count } => {
                println!("{}", format!("Found {} feature entries...", count).blue())
            }
            BuildEvent::LoadedRecommendations { count } => println!(
                "{}",
                format!("Successfully loaded {} recommendations...", count).bright_green()
            ),
            BuildEvent::Assembling => println!("{}", "Constructing recommendations object...".blue()),
            BuildEvent::RemovingPrevious { .. } => {
                println!("{}", "Removing old knowledge base...".blue())
            }
            BuildEvent::Written { .. } => {
                println!("{}", "Successfully built knowledge base!".bright_green())
            }
            // main prints the full error chain once the build returns
            BuildEvent::Failed { stage, message } => debug!("{} failed: {}", stage, message),
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Cli::parse().into_config();
    debug!("Resolved build configuration: {:?}", config);

    let builder = KnowledgeBaseBuilder::with_observer(config, Arc::new(ConsoleObserver));
    match builder.build().await {
        Ok(summary) => {
            print_summary(&summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", format_error(&e).bright_red());
            ExitCode::FAILURE
        }
    }
}

/// One line with the stage and every underlying cause
fn format_error(error: &anyhow::Error) -> String {
    format!("{:#}", error)
}

/// Helper function to print what the build produced
fn print_summary(summary: &BuildSummary) {
    println!(
        "{} {} ({} recommendations, {} features, {} bytes) in {:.2?}",
        "✓".green(),
        summary.output_path.display(),
        summary.recommendations,
        summary.features,
        summary.bytes_written,
        summary.elapsed
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_no_arguments_uses_fixed_layout() {
        let config = Cli::parse_from(["kb-build"]).into_config();
        assert_eq!(config, BuildConfig::from_root("."));
    }

    #[test]
    fn test_error_line_includes_cause_chain() {
        let error = anyhow::anyhow!("Failed to parse recommendations/a1.json: expected value")
            .context("Error loading recommendations");
        assert_eq!(
            format_error(&error),
            "Error loading recommendations: Failed to parse recommendations/a1.json: expected value"
        );
    }

    #[test]
    fn test_overrides() {
        let config = Cli::parse_from([
            "kb-build",
            "--root",
            "/srv/kb",
            "--output",
            "/tmp/out.json",
            "--pretty",
        ])
        .into_config();

        assert_eq!(config.recommendations_dir, Path::new("/srv/kb/recommendations"));
        assert_eq!(config.features_path, Path::new("/srv/kb/features.json"));
        assert_eq!(config.output_path, Path::new("/tmp/out.json"));
        assert_eq!(config.format, OutputFormat::Pretty);
    }
}
