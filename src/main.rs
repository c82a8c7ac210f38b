mod calc;
mod cmd;
mod data;
mod display;
mod error;
mod logging;
mod ui;

use clap::{Args, Parser, Subcommand};
use data::{QuoteSettings, QuoteVariant};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "quotecalc", about = "traffic and storage service quotes")]
struct Cli {
    /// Path to the data directory containing config.yaml (default: ./config)
    #[arg(long, default_value = "./config")]
    data_dir: PathBuf,

    /// Bill a fixed 7-day week without asking for work days
    #[arg(long, global = true)]
    fixed_week: bool,

    /// Use this date as today (YYYY-MM-DD) instead of the clock
    #[arg(long, global = true)]
    today: Option<chrono::NaiveDate>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default config.yaml
    Init,
    /// Compute a single quote and print it
    Quote(QuoteCommand),
    /// Show the effective settings
    Settings,
}

#[derive(Args)]
struct QuoteCommand {
    /// Daily traffic count
    #[arg(long, allow_hyphen_values = true)]
    traffic: Option<String>,
    /// Daily storage count
    #[arg(long, allow_hyphen_values = true)]
    storage: Option<String>,
    /// Cost per traffic unit (default from config)
    #[arg(long, allow_hyphen_values = true)]
    traffic_unit_cost: Option<String>,
    /// Cost per storage unit (default from config)
    #[arg(long, allow_hyphen_values = true)]
    storage_unit_cost: Option<String>,
    /// Number of billed days (default from config)
    #[arg(long, allow_hyphen_values = true)]
    work_days: Option<String>,
    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

impl QuoteCommand {
    fn into_args(self, today: Option<chrono::NaiveDate>) -> cmd::quote::QuoteArgs {
        cmd::quote::QuoteArgs {
            traffic: self.traffic,
            storage: self.storage,
            traffic_unit_cost: self.traffic_unit_cost,
            storage_unit_cost: self.storage_unit_cost,
            work_days: self.work_days,
            today,
            json: self.json,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Resolve data_dir to an absolute path so file I/O works regardless of
    // future directory changes within the process.
    let data_dir = if cli.data_dir.is_absolute() {
        cli.data_dir.clone()
    } else {
        std::env::current_dir()?.join(&cli.data_dir)
    };
    data::persistence::set_data_dir(data_dir.clone());

    if cli.command.is_none() {
        logging::init_file_logging(&data_dir)?;
    } else {
        logging::init_stderr_logging();
    }

    // Auto-init when there is no config.yaml yet and the user did not
    // explicitly invoke the `init` subcommand.
    let is_init_command = matches!(cli.command, Some(Commands::Init));
    if !is_init_command && dir_needs_init(&data_dir) {
        auto_init(&data_dir, &mut std::io::stderr())?;
    }

    if is_init_command {
        return cmd::init::run();
    }

    let settings = QuoteSettings::load()?;
    let variant = effective_variant(&settings, cli.fixed_week);

    match cli.command {
        None => cmd::root::run(settings, variant, cli.today),
        Some(Commands::Init) => Ok(()), // handled above
        Some(Commands::Quote(q)) => cmd::quote::run(&q.into_args(cli.today), &settings, variant),
        Some(Commands::Settings) => cmd::settings::run(&settings),
    }
}

/// Writes the default config before another command runs. Every notice
/// goes to `log`, never stdout, so `quote --json` output stays parseable.
fn auto_init<W: std::io::Write>(dir: &std::path::Path, log: &mut W) -> anyhow::Result<()> {
    writeln!(log, "No config.yaml in '{}', running init...", dir.display())?;
    cmd::init::write_init(dir, log)
}

/// `--fixed-week` wins over the configured variant.
fn effective_variant(settings: &QuoteSettings, fixed_week: bool) -> QuoteVariant {
    if fixed_week {
        QuoteVariant::FixedWeek
    } else {
        settings.variant
    }
}

/// Returns true when `dir` does not exist or exists but contains no config.
fn dir_needs_init(dir: &std::path::Path) -> bool {
    if !dir.exists() {
        return true;
    }
    !dir.join("config.yaml").exists()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_dir_needs_init_nonexistent() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("does_not_exist");
        assert!(dir_needs_init(&missing));
    }

    #[test]
    fn test_dir_needs_init_empty_dir() {
        let tmp = TempDir::new().unwrap();
        assert!(dir_needs_init(tmp.path()));
    }

    #[test]
    fn test_dir_needs_init_only_log_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(logging::LOG_FILE_NAME), "").unwrap();
        assert!(dir_needs_init(tmp.path()));
    }

    #[test]
    fn test_dir_needs_init_with_config() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.yaml"), "settings: {}").unwrap();
        assert!(!dir_needs_init(tmp.path()));
    }

    #[test]
    fn test_auto_init_leaves_json_output_parseable() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("cfg");
        let mut stderr = Vec::new();
        auto_init(&dir, &mut stderr).unwrap();
        assert!(!dir_needs_init(&dir));
        assert!(String::from_utf8(stderr).unwrap().contains("Config initialized in"));

        let settings = QuoteSettings::load_from(&dir).unwrap();
        let args = cmd::quote::QuoteArgs {
            traffic: Some("100".to_string()),
            today: chrono::NaiveDate::from_ymd_opt(2025, 3, 10),
            json: true,
            ..cmd::quote::QuoteArgs::default()
        };
        let mut stdout = Vec::new();
        cmd::quote::write_quote(&args, &settings, settings.variant, &mut stdout).unwrap();
        let v: serde_json::Value = serde_json::from_slice(&stdout).unwrap();
        assert_eq!(v["status"], "ok");
        assert_eq!(v["total"], 35000);
    }

    #[test]
    fn test_fixed_week_flag_overrides_config() {
        let settings = QuoteSettings::default();
        assert_eq!(effective_variant(&settings, false), QuoteVariant::Scheduled);
        assert_eq!(effective_variant(&settings, true), QuoteVariant::FixedWeek);
    }

    #[test]
    fn test_cli_parses_negative_count() {
        let cli = Cli::try_parse_from(["quotecalc", "quote", "--traffic", "-5", "--json"]).unwrap();
        match cli.command {
            Some(Commands::Quote(q)) => {
                assert_eq!(q.traffic.as_deref(), Some("-5"));
                assert!(q.json);
            }
            _ => panic!("expected quote subcommand"),
        }
    }

    #[test]
    fn test_cli_parses_today() {
        let cli = Cli::try_parse_from([
            "quotecalc",
            "--fixed-week",
            "quote",
            "--traffic",
            "1",
            "--today",
            "2025-03-10",
        ])
        .unwrap();
        assert!(cli.fixed_week);
        assert_eq!(cli.today, chrono::NaiveDate::from_ymd_opt(2025, 3, 10));
        match cli.command {
            Some(Commands::Quote(q)) => {
                let args = q.into_args(cli.today);
                assert_eq!(args.traffic.as_deref(), Some("1"));
                assert_eq!(args.today, cli.today);
            }
            _ => panic!("expected quote subcommand"),
        }
    }
}
