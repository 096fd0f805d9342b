//! CLI command definitions, routing, and tracing setup.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use indicatif::{ProgressBar, ProgressStyle};
use timeline_enrich_core::pipeline::{EnrichResult, ProgressReporter};
use timeline_enrich_core::report::EnrichmentReport;
use timeline_enrich_shared::{AppConfig, EnrichConfig, init_config, load_config, load_config_from};
use tracing::info;

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// timeline-enrich: add curated biography and editorial content to a timeline.
#[derive(Parser)]
#[command(
    name = "timeline-enrich",
    version,
    about = "Merge curated biography, decade summaries and work descriptions into timeline-data.json.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file to use instead of ~/.timeline-enrich/timeline-enrich.toml.
    #[arg(long, env = "TIMELINE_ENRICH_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Defaults to `enrich` with configured paths.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Enrich the timeline document and write it back.
    Enrich {
        /// Timeline JSON to read (defaults to the configured path).
        #[arg(short, long)]
        timeline: Option<PathBuf>,

        /// Where to write the result (defaults to overwriting the input).
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Merge and print the summary without writing anything.
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the enrichment summary of a document without changing it.
    Report {
        /// Timeline JSON to inspect (defaults to the configured path).
        #[arg(short, long)]
        timeline: Option<PathBuf>,

        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags. Logs go to stderr; stdout carries
/// the progress lines and the summary.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "timeline_enrich=info",
        1 => "timeline_enrich=debug",
        _ => "timeline_enrich=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) fn run(cli: Cli) -> Result<()> {
    let config = resolve_config(cli.config.as_deref())?;

    match cli.command {
        None => cmd_enrich(&config, None, None, false),
        Some(Command::Enrich {
            timeline,
            output,
            dry_run,
        }) => cmd_enrich(&config, timeline, output, dry_run),
        Some(Command::Report { timeline, json }) => cmd_report(&config, timeline, json),
        Some(Command::Config { action }) => match action {
            ConfigAction::Init => cmd_config_init(),
            ConfigAction::Show => cmd_config_show(&config),
        },
    }
}

fn resolve_config(path: Option<&Path>) -> Result<AppConfig> {
    let config = match path {
        Some(path) => load_config_from(path)?,
        None => load_config()?,
    };
    Ok(config)
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

fn cmd_enrich(
    config: &AppConfig,
    timeline: Option<PathBuf>,
    output: Option<PathBuf>,
    dry_run: bool,
) -> Result<()> {
    let enrich_config = resolve_enrich_config(config, timeline, output, dry_run);

    info!(
        timeline = %enrich_config.timeline_path.display(),
        output = %enrich_config.output_path.display(),
        dry_run,
        "enriching timeline"
    );

    let reporter = CliProgress::new();
    let result = timeline_enrich_core::pipeline::enrich_timeline(&enrich_config, &reporter)?;

    println!();
    println!("{}", result.report);
    match &result.write {
        Some(write) if write.unchanged => {
            println!();
            println!("Output saved to: {} (no changes)", write.path.display());
        }
        Some(write) => {
            println!();
            println!("Output saved to: {}", write.path.display());
        }
        None => {
            println!();
            println!("Dry run: nothing written to {}", result.output_path.display());
        }
    }
    println!("Time: {:.2}s", result.elapsed.as_secs_f64());

    Ok(())
}

/// Layer the `enrich` flags over the config file. Without any output setting
/// the document is rewritten in place.
fn resolve_enrich_config(
    config: &AppConfig,
    timeline: Option<PathBuf>,
    output: Option<PathBuf>,
    dry_run: bool,
) -> EnrichConfig {
    let mut enrich_config = EnrichConfig::from(config);
    if let Some(timeline) = timeline {
        // An explicit input without an explicit output still means in-place.
        if output.is_none() && config.paths.output.is_none() {
            enrich_config.output_path = timeline.clone();
        }
        enrich_config.timeline_path = timeline;
    }
    if let Some(output) = output {
        enrich_config.output_path = output;
    }
    enrich_config.dry_run = dry_run;
    enrich_config
}

fn cmd_report(config: &AppConfig, timeline: Option<PathBuf>, json: bool) -> Result<()> {
    let path = timeline.unwrap_or_else(|| PathBuf::from(&config.paths.timeline));
    info!(path = %path.display(), "reporting on timeline");

    let doc = timeline_enrich_core::loader::load_timeline(&path)?;
    let report = EnrichmentReport::from_document(&doc);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }
    Ok(())
}

fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

fn cmd_config_show(config: &AppConfig) -> Result<()> {
    let toml_str = toml::to_string_pretty(config)?;
    println!("{toml_str}");
    Ok(())
}

// ---------------------------------------------------------------------------
// CLI progress reporter
// ---------------------------------------------------------------------------

/// Prints each stage line and keeps an indicatif spinner running beneath it.
struct CliProgress {
    spinner: ProgressBar,
}

impl CliProgress {
    fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        let style = ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]);
        spinner.set_style(style);
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        Self { spinner }
    }
}

impl ProgressReporter for CliProgress {
    fn phase(&self, name: &str) {
        self.spinner.suspend(|| println!("{name}"));
        self.spinner.set_message(name.to_string());
    }

    fn done(&self, _result: &EnrichResult) {
        self.spinner.finish_and_clear();
    }
}

impl Drop for CliProgress {
    fn drop(&mut self) {
        // Clears the spinner when the pipeline bails out with an error.
        if !self.spinner.is_finished() {
            self.spinner.finish_and_clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_enrich() {
        let cli = Cli::try_parse_from(["timeline-enrich"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn parses_enrich_flags() {
        let cli = Cli::try_parse_from([
            "timeline-enrich",
            "-vv",
            "enrich",
            "--timeline",
            "in.json",
            "--output",
            "out.json",
            "--dry-run",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Some(Command::Enrich {
                timeline,
                output,
                dry_run,
            }) => {
                assert_eq!(timeline, Some(PathBuf::from("in.json")));
                assert_eq!(output, Some(PathBuf::from("out.json")));
                assert!(dry_run);
            }
            _ => panic!("expected enrich"),
        }
    }

    #[test]
    fn parses_report_json() {
        let cli = Cli::try_parse_from(["timeline-enrich", "report", "--json"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Report { json: true, timeline: None })
        ));
    }

    #[test]
    fn timeline_flag_alone_enriches_in_place() {
        let config = AppConfig::default();
        let enrich = resolve_enrich_config(&config, Some("in.json".into()), None, false);
        assert_eq!(enrich.timeline_path, PathBuf::from("in.json"));
        assert_eq!(enrich.output_path, PathBuf::from("in.json"));
        assert!(!enrich.dry_run);
    }

    #[test]
    fn configured_output_beats_in_place_default() {
        let mut config = AppConfig::default();
        config.paths.output = Some("configured.json".into());
        let enrich = resolve_enrich_config(&config, Some("in.json".into()), None, true);
        assert_eq!(enrich.timeline_path, PathBuf::from("in.json"));
        assert_eq!(enrich.output_path, PathBuf::from("configured.json"));
        assert!(enrich.dry_run);
    }

    #[test]
    fn output_flag_beats_everything() {
        let mut config = AppConfig::default();
        config.paths.output = Some("configured.json".into());
        let enrich = resolve_enrich_config(
            &config,
            Some("in.json".into()),
            Some("out.json".into()),
            false,
        );
        assert_eq!(enrich.output_path, PathBuf::from("out.json"));

        let enrich = resolve_enrich_config(&config, None, Some("out.json".into()), false);
        assert_eq!(enrich.timeline_path, PathBuf::from("assets/data/timeline-data.json"));
        assert_eq!(enrich.output_path, PathBuf::from("out.json"));
    }
}
