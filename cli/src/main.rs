use std::fmt::Write as _;
use std::path::PathBuf;
use std::sync::Once;

use anyhow::Context;
use clap::Parser;
use seqbench_core::{ALL_SELECTOR, BenchConfig, ConsoleProgress, CsvSink, ElementKind, Runner, TimeUnit, Workload};


static TRACE_INIT: Once = Once::new();
const DEFAULT_TRACE_FILTER: &str = "seqbench_core=info,seqbench=info";
const TRACE_ENV: &str = "SEQBENCH_TRACE";

#[derive(Debug, Parser)]
#[command(
    name = "seqbench",
    author,
    version,
    about = "Compare list, deque and vector containers under common workloads",
    long_about = None
)]
struct CliArgs {
    /// Benchmarks to run; repeat the flag or separate names with commas
    #[arg(short = 't', long = "test", value_name = "NAME", num_args = 1.., value_delimiter = ',')]
    tests: Vec<String>,

    /// List the available benchmarks
    #[arg(short, long)]
    list: bool,

    /// TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory the CSV tables are written below
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Trials averaged per size
    #[arg(short, long)]
    repeats: Option<u32>,

    /// Seed for the shared random source
    #[arg(long)]
    seed: Option<u64>,

    /// Reported time unit (ns, us, ms)
    #[arg(long, value_parser = parse_time_unit)]
    unit: Option<TimeUnit>,

    /// Restrict element types (small, medium, large, huge, monster)
    #[arg(short, long = "element", value_name = "TYPE", value_delimiter = ',', value_parser = parse_element)]
    elements: Vec<ElementKind>,

    /// Plain progress lines without ANSI colours
    #[arg(long)]
    no_color: bool,
}

fn parse_time_unit(raw: &str) -> Result<TimeUnit, String> {
    raw.parse::<TimeUnit>().map_err(|e| e.to_string())
}

fn parse_element(raw: &str) -> Result<ElementKind, String> {
    ElementKind::from_key(raw).ok_or_else(|| {
        let known: Vec<_> = ElementKind::ALL.iter().map(|k| k.key()).collect();
        format!("unknown element type '{}' (expected one of {})", raw, known.join(", "))
    })
}

fn env_toggle_enabled(raw: &str) -> bool {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return false;
    }
    !(trimmed.eq_ignore_ascii_case("0") || trimmed.eq_ignore_ascii_case("false") || trimmed.eq_ignore_ascii_case("off"))
}

fn filter_expr_from(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("1")
        || trimmed.eq_ignore_ascii_case("true")
        || trimmed.eq_ignore_ascii_case("on")
    {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn maybe_init_tracing() {
    let raw = match std::env::var(TRACE_ENV) {
        Ok(value) => value,
        Err(_) => return,
    };

    if !env_toggle_enabled(&raw) {
        return;
    }

    TRACE_INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;
        use tracing_subscriber::fmt;

        let filter_expr = filter_expr_from(&raw).or_else(|| std::env::var("RUST_LOG").ok());

        let builder = fmt().with_writer(std::io::stderr);

        let builder = match filter_expr.and_then(|expr| EnvFilter::try_new(expr).ok()) {
            Some(filter) => builder.with_env_filter(filter),
            None => builder.with_env_filter(DEFAULT_TRACE_FILTER),
        };

        let _ = builder.try_init();
    });
}

fn list_tests() -> String {
    let mut out = String::from("seqbench - sequence container tester\n\nAvailable Tests:\n");
    let _ = writeln!(out, "{:<13} - Run all tests", ALL_SELECTOR);
    for workload in Workload::ALL {
        let _ = writeln!(out, "{:<13} - {}", workload.key(), workload.description());
    }
    out
}

/// Config file first, then command line overrides.
fn resolve_config(args: &CliArgs) -> anyhow::Result<BenchConfig> {
    let mut config = match &args.config {
        Some(path) => BenchConfig::load(path)?,
        None => BenchConfig::default(),
    };
    if let Some(dir) = &args.output {
        config.output_dir = dir.clone();
    }
    if let Some(repeats) = args.repeats {
        config.repeats = repeats;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(unit) = args.unit {
        config.unit = unit;
    }
    if args.no_color {
        config.color = false;
    }
    config.validate().context("invalid command line overrides")?;
    Ok(config)
}

fn selected_elements(args: &CliArgs) -> Vec<ElementKind> {
    if args.elements.is_empty() {
        return ElementKind::ALL.to_vec();
    }
    // Catalog order regardless of how the flags were given.
    ElementKind::ALL
        .into_iter()
        .filter(|kind| args.elements.contains(kind))
        .collect()
}

fn main() -> anyhow::Result<()> {
    maybe_init_tracing();

    let args = CliArgs::parse();

    if args.list || args.tests.is_empty() {
        print!("{}", list_tests());
        if args.tests.is_empty() {
            return Ok(());
        }
    }

    let config = resolve_config(&args)?;
    let elements = selected_elements(&args);
    tracing::debug!(?config, ?elements, tests = ?args.tests, "starting benchmarks");

    let sink = CsvSink::new(config.output_dir.clone());
    let progress = ConsoleProgress::new(config.color);
    let mut runner = Runner::new(config, sink, progress)?;
    runner.run_selected(&args.tests, &elements)
}
