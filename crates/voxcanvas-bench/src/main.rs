mod report;
mod runner;
mod scenes;

use std::path::PathBuf;
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

use voxcanvas_core::config::WorldConfig;

use runner::BenchmarkRunner;

struct CliArgs {
    baseline_path: Option<PathBuf>,
    output_path: Option<PathBuf>,
    regression_threshold: f64,
    iterations: u32,
}

fn parse_args() -> CliArgs {
    let mut cli = CliArgs {
        baseline_path: None,
        output_path: None,
        regression_threshold: 10.0,
        iterations: 20,
    };

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        let mut value = |flag: &str| args.next().unwrap_or_else(|| usage_error(flag));
        match arg.as_str() {
            "--baseline" => cli.baseline_path = Some(PathBuf::from(value("--baseline"))),
            "--output" => cli.output_path = Some(PathBuf::from(value("--output"))),
            "--regression-threshold" => {
                cli.regression_threshold = value("--regression-threshold")
                    .parse()
                    .unwrap_or_else(|_| usage_error("--regression-threshold"));
            }
            "--iterations" => {
                cli.iterations = value("--iterations")
                    .parse()
                    .unwrap_or_else(|_| usage_error("--iterations"));
            }
            "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {other}");
                print_usage();
                process::exit(1);
            }
        }
    }
    cli
}

fn usage_error(flag: &str) -> ! {
    eprintln!("Missing or invalid value for {flag}");
    print_usage();
    process::exit(1);
}

fn print_usage() {
    eprintln!("Usage: bench-runner [OPTIONS]");
    eprintln!("  --baseline <path>              Load baseline JSON for comparison");
    eprintln!("  --output <path>                Save current results as JSON baseline");
    eprintln!("  --regression-threshold <pct>   Regression threshold percentage (default: 10)");
    eprintln!("  --iterations <n>               Samples per scene (default: 20)");
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = parse_args();

    let runner = BenchmarkRunner::new(WorldConfig::default(), cli.iterations);
    let mut results = Vec::new();
    for scene in &scenes::standard_scenes() {
        log::info!("Running scene '{}'...", scene.name);
        results.push(runner.run_full_remesh(scene));
        results.push(runner.run_incremental(scene));
    }

    println!("\n## Benchmark Results\n");
    println!("{}", report::format_markdown(&results));

    if let Some(ref path) = cli.output_path {
        let baseline = report::Baseline {
            timestamp: unix_timestamp(),
            results: results.clone(),
        };
        report::save_baseline(path, &baseline).expect("failed to save baseline");
        log::info!("Saved baseline to {}", path.display());
    }

    if let Some(ref path) = cli.baseline_path {
        match report::load_baseline(path) {
            Some(baseline) => {
                let regressions = report::compare(&results, &baseline, cli.regression_threshold);
                println!(
                    "{}",
                    report::format_comparison(&regressions, cli.regression_threshold)
                );
                if !regressions.is_empty() {
                    process::exit(1);
                }
            }
            None => log::warn!("could not load baseline from {}", path.display()),
        }
    }
}

fn unix_timestamp() -> String {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs().to_string())
        .unwrap_or_else(|_| "0".to_string())
}
