mod checks;
mod client;
mod reports;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use gate_core::{Coordinates, DEFAULT_API_BASE, Endpoints};
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::time::Instant;

use checks::{Check, CheckCtx, CheckResult, run_check};
use client::{NativeForecast, NativeGateApi};

#[derive(Debug, Parser)]
#[command(name = "gate-tester", version)]
#[command(about = "Probe the gate access service and the weather provider")]
struct Args {
    /// Base URL of the PIN / barrier service
    #[arg(long, default_value = DEFAULT_API_BASE)]
    api_url: String,

    /// Checks to run (comma-separated, or "all")
    #[arg(long, default_value = "device,weather")]
    checks: String,

    /// List all available checks and exit
    #[arg(long)]
    list_checks: bool,

    /// Barrier PIN used by the "open" check
    #[arg(long)]
    pin: Option<String>,

    /// Admin PIN used by the "generate" check
    #[arg(long)]
    admin_pin: Option<String>,

    /// Latitude for the weather check
    #[arg(long, allow_negative_numbers = true)]
    lat: Option<f64>,

    /// Longitude for the weather check
    #[arg(long, allow_negative_numbers = true)]
    lon: Option<f64>,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["json", "console"])]
    report: String,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if maybe_list_checks(&args)? {
        return Ok(());
    }

    announce_banner();

    let start_time = Instant::now();
    let checks = expand_checks(&args.checks);
    let results = run_checks(&args, &checks).await?;
    write_reports(&args, &results, start_time)?;

    if results.iter().any(|r| !r.passed()) {
        std::process::exit(1);
    }

    Ok(())
}

fn maybe_list_checks(args: &Args) -> Result<bool> {
    if !args.list_checks {
        return Ok(false);
    }
    let mut output_target = OutputTarget::new(args.output.clone())?;
    writeln!(output_target.writer(), "Available checks:")?;
    for check in Check::ALL {
        writeln!(
            output_target.writer(),
            "  {:10} - {}",
            check.name(),
            check.description()
        )?;
    }
    output_target.flush_inner()?;
    Ok(true)
}

fn announce_banner() {
    println!("{}", "🚧 Gate Service Tester".bright_cyan().bold());
    println!("{}", "======================".cyan());
}

fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Resolve names to checks, warning about unknown ones.
fn expand_checks(checks_arg: &str) -> Vec<Check> {
    let mut checks = Vec::new();
    for name in split_csv(checks_arg) {
        let found: Vec<Check> = if name == "all" {
            Check::ALL.to_vec()
        } else if let Some(check) = Check::from_name(&name) {
            vec![check]
        } else {
            eprintln!("⚠️  Unknown check: {}", name.yellow());
            Vec::new()
        };
        for check in found {
            if !checks.contains(&check) {
                checks.push(check);
            }
        }
    }
    checks
}

async fn run_checks(args: &Args, checks: &[Check]) -> Result<Vec<CheckResult>> {
    if checks.is_empty() {
        return Ok(Vec::new());
    }
    let api = NativeGateApi::new(Endpoints::new(&args.api_url))
        .context("building the gate service client")?;
    let forecast = NativeForecast::new().context("building the weather client")?;
    log::info!("probing {}", api.endpoints().base());

    let ctx = CheckCtx {
        api: &api,
        forecast: &forecast,
        coords: Coordinates::or_default(args.lat, args.lon),
        pin: args.pin.as_deref(),
        admin_pin: args.admin_pin.as_deref(),
    };

    let mut results = Vec::with_capacity(checks.len());
    for check in checks {
        let result = run_check(*check, &ctx).await;
        if args.verbose {
            println!("  {} → {}", check.name().bold(), result.detail);
        }
        results.push(result);
    }
    Ok(results)
}

fn write_reports(args: &Args, results: &[CheckResult], start_time: Instant) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;

    match args.report.as_str() {
        "json" => {
            if results.is_empty() {
                writeln!(&mut output_target, "[]")?;
            } else {
                reports::generate_json_report(&mut output_target, &args.api_url, results)?;
            }
        }
        _ => {
            if results.is_empty() {
                writeln!(&mut output_target, "No checks executed.")?;
            } else {
                reports::generate_console_report(
                    &mut output_target,
                    results,
                    start_time.elapsed(),
                )?;
            }
            writeln!(&mut output_target)?;
            writeln!(
                &mut output_target,
                "🏁 Total time: {:?}",
                start_time.elapsed()
            )?;
        }
    }

    output_target.flush_inner()?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checks_expand_and_dedupe() {
        assert_eq!(
            expand_checks("device, WEATHER,device"),
            vec![Check::Device, Check::Weather]
        );
        assert_eq!(expand_checks("all").len(), Check::ALL.len());
        assert!(expand_checks("bogus,,").is_empty());
    }

    #[test]
    fn arguments_parse_with_negative_coordinates() {
        let args = Args::try_parse_from([
            "gate-tester",
            "--checks",
            "weather",
            "--lat",
            "44.43",
            "--lon",
            "-26.1",
            "--report",
            "json",
        ])
        .expect("valid args");
        assert_eq!(args.lon, Some(-26.1));
        assert_eq!(args.api_url, DEFAULT_API_BASE);
        assert!(Args::try_parse_from(["gate-tester", "--report", "yaml"]).is_err());
    }
}
