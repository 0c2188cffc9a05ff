mod browser;
mod common;
mod logic;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::time::Instant;

use browser::{BrowserConfig, BrowserKind, new_session};
use common::scenario::{
    BrowserScenario, ScenarioCtx, all_scenario_keys, get_scenario, list_scenarios,
};
use common::{artifacts_dir, capture_artifacts, split_csv};
use logic::LogicTester;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TestMode {
    /// Booking engine against the in-memory backend (fast, no browser)
    Logic,
    /// Browser automation against a deployed build
    Browser,
    /// Run both logic and browser tests
    Both,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum HeadlessMode {
    /// Run browsers in headless mode
    Headless,
    /// Run browsers with visible windows
    Windowed,
}

impl HeadlessMode {
    const fn is_headless(self) -> bool {
        matches!(self, Self::Headless)
    }
}

#[derive(Debug, Parser)]
#[command(name = "strike-tester", version)]
#[command(about = "Automated QA for the Strike booking form - booking logic and browser automation")]
struct Args {
    /// Test mode: logic (fast), browser (visual), or both
    #[arg(long, value_enum, default_value_t = TestMode::Logic)]
    mode: TestMode,

    /// Scenarios to run (comma-separated, `all` for every scenario)
    #[arg(long, default_value = "smoke")]
    scenarios: String,

    /// List all available scenarios and exit
    #[arg(long)]
    list_scenarios: bool,

    /// Seeds to run (comma-separated)
    #[arg(long, default_value = "1337")]
    seeds: String,

    /// Number of iterations per scenario and seed (logic mode only)
    #[arg(long, default_value_t = 10)]
    iterations: usize,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["json", "markdown", "console"])]
    report: String,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    // Browser-specific options
    /// Browsers to run (chrome,edge,firefox,safari) - browser mode only
    #[arg(long, default_value = "chrome")]
    browsers: String,

    /// Base URL of the deployed booking form
    #[arg(long, default_value = "http://localhost:8080/")]
    base_url: String,

    /// Artifacts directory for screenshots and logs
    #[arg(long, default_value = "target/test-artifacts")]
    artifacts_dir: String,

    /// Connect to a Selenium Grid/Appium hub instead of local drivers
    #[arg(long)]
    hub: Option<String>,

    /// Run headless where supported
    #[arg(long, value_enum, default_value_t = HeadlessMode::Headless)]
    headless: HeadlessMode,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if maybe_list_scenarios(&args)? {
        return Ok(());
    }

    announce_banner();

    let start_time = Instant::now();
    let scenarios = expand_scenarios(&args.scenarios);
    let seeds = parse_seeds(&args.seeds)?;

    let logic_results = run_logic_scenarios(&args, &scenarios, &seeds).await;
    let browser_failures = run_browser_scenarios(&args, &scenarios, &seeds).await?;

    write_reports(&args, &logic_results, start_time)?;

    if browser_failures > 0 || logic_results.iter().any(|r| !r.passed) {
        std::process::exit(1);
    }

    Ok(())
}

fn maybe_list_scenarios(args: &Args) -> Result<bool> {
    if !args.list_scenarios {
        return Ok(false);
    }
    let mut output_target = OutputTarget::new(args.output.clone())?;
    writeln!(output_target.writer(), "Available scenarios:")?;
    for (key, description) in list_scenarios() {
        writeln!(output_target.writer(), "  {key:20} - {description}")?;
    }
    output_target.flush_inner()?;
    Ok(true)
}

fn announce_banner() {
    println!("{}", "🎳 Strike Automated Tester".bright_cyan().bold());
    println!("{}", "==========================".cyan());
}

fn expand_scenarios(scenarios_arg: &str) -> Vec<String> {
    let mut scenarios = split_csv(scenarios_arg);
    if scenarios.iter().any(|s| s == "all") {
        scenarios.retain(|s| s != "all");
        for key in all_scenario_keys() {
            if !scenarios.contains(&key) {
                scenarios.push(key);
            }
        }
    }
    scenarios
}

fn parse_seeds(seeds_arg: &str) -> Result<Vec<u64>> {
    split_csv(seeds_arg)
        .iter()
        .map(|token| {
            token
                .parse::<u64>()
                .with_context(|| format!("invalid seed {token:?}"))
        })
        .collect()
}

fn build_browser_config(args: &Args) -> BrowserConfig {
    BrowserConfig {
        headless: args.headless.is_headless(),
        implicit_wait_secs: 3,
        remote_hub: args.hub.clone(),
    }
}

fn scenario_artifacts_dir(args: &Args, kind: BrowserKind, scenario: &str, seed: u64) -> String {
    artifacts_dir(&args.artifacts_dir, kind.label(), scenario, seed)
}

async fn run_logic_scenarios(
    args: &Args,
    scenarios: &[String],
    seeds: &[u64],
) -> Vec<logic::ScenarioResult> {
    let mut results: Vec<logic::ScenarioResult> = Vec::new();
    if !matches!(args.mode, TestMode::Logic | TestMode::Both) {
        return results;
    }

    println!("{}", "🧠 Running Logic Tests".bright_yellow().bold());
    println!("{}", "-".repeat(30).yellow());

    let logic_tester = LogicTester::new(args.verbose);

    for scenario_name in scenarios {
        let Some(combined_scenario) = get_scenario(scenario_name) else {
            eprintln!("⚠️  Unknown scenario: {}", scenario_name.yellow());
            continue;
        };
        if let Some(logic_scenario) = combined_scenario.as_logic_scenario() {
            let scenario_results = logic_tester
                .run_scenario(&logic_scenario, seeds, args.iterations)
                .await;
            results.extend(scenario_results);
        } else {
            eprintln!(
                "⚠️  Scenario {} has no logic test implementation",
                scenario_name.yellow()
            );
        }
    }

    results
}

/// Returns the number of failed browser runs.
async fn run_browser_scenarios(args: &Args, scenarios: &[String], seeds: &[u64]) -> Result<usize> {
    if !matches!(args.mode, TestMode::Browser | TestMode::Both) {
        return Ok(0);
    }

    println!("{}", "🌐 Running Browser Tests".bright_blue().bold());
    println!("{}", "-".repeat(30).blue());

    let mut failures = 0;
    for browser_name in split_csv(&args.browsers) {
        let Some(kind) = BrowserKind::parse(&browser_name) else {
            eprintln!("⚠️  Unknown browser: {}", browser_name.yellow());
            continue;
        };

        let driver = match new_session(kind, &build_browser_config(args)).await {
            Ok(d) => d,
            Err(e) => {
                eprintln!("❌ Could not start {}: {e}", kind.label());
                continue;
            }
        };

        failures += run_browser_scenarios_for_driver(args, scenarios, seeds, kind, &driver).await;
        let _ = driver.quit().await;
    }

    Ok(failures)
}

async fn run_browser_scenarios_for_driver(
    args: &Args,
    scenarios: &[String],
    seeds: &[u64],
    kind: BrowserKind,
    driver: &thirtyfour::WebDriver,
) -> usize {
    let mut failures = 0;
    for scenario_name in scenarios {
        let Some(scenario) = get_scenario(scenario_name) else {
            eprintln!("⚠️  Unknown scenario: {}", scenario_name.yellow());
            continue;
        };
        for &seed in seeds {
            let ctx = ScenarioCtx {
                base_url: args.base_url.clone(),
                seed,
                verbose: args.verbose,
            };

            let scenario_start = Instant::now();
            match scenario.run_browser(driver, &ctx).await {
                Ok(()) => {
                    println!(
                        "✅ [{} seed {seed}] {scenario_name} - {:?}",
                        kind.label().green(),
                        scenario_start.elapsed()
                    );
                }
                Err(e) => {
                    failures += 1;
                    eprintln!(
                        "❌ [{} seed {seed}] {scenario_name} - {:?}: {e:#}",
                        kind.label().red(),
                        scenario_start.elapsed()
                    );
                    let dir = scenario_artifacts_dir(args, kind, scenario_name, seed);
                    if let Err(capture_err) = capture_artifacts(driver, &dir, &e).await {
                        log::warn!("could not capture artifacts in {dir}: {capture_err:#}");
                    }
                }
            }
        }
    }
    failures
}

fn write_reports(
    args: &Args,
    results: &[logic::ScenarioResult],
    start_time: Instant,
) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;

    match args.report.as_str() {
        "json" => logic::reports::generate_json_report(&mut output_target, results)?,
        "markdown" => {
            if results.is_empty() {
                writeln!(
                    &mut output_target,
                    "# Strike Logic Test Results\n\n_No scenarios executed._"
                )?;
            } else {
                logic::reports::generate_markdown_report(&mut output_target, results)?;
            }
        }
        _ => {
            if results.is_empty() {
                writeln!(&mut output_target, "No logic scenarios executed.")?;
            } else {
                logic::reports::generate_console_report(
                    &mut output_target,
                    results,
                    start_time.elapsed(),
                )?;
            }
        }
    }

    if args.report != "json" {
        writeln!(&mut output_target)?;
        writeln!(&mut output_target, "🏁 Total time: {:?}", start_time.elapsed())?;
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
    use std::time::Duration;

    fn base_args() -> Args {
        Args {
            mode: TestMode::Logic,
            scenarios: "smoke".to_string(),
            list_scenarios: false,
            seeds: "1337".to_string(),
            iterations: 1,
            report: "json".to_string(),
            verbose: false,
            output: None,
            browsers: "chrome".to_string(),
            base_url: "http://localhost:8080/".to_string(),
            artifacts_dir: "target/test-artifacts".to_string(),
            hub: None,
            headless: HeadlessMode::Headless,
        }
    }

    fn temp_file(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("strike-{}-{name}", std::process::id()))
    }

    fn sample_result(passed: bool) -> logic::ScenarioResult {
        logic::ScenarioResult {
            scenario_name: "Happy Path".to_string(),
            seed: 1337,
            passed,
            iterations_run: 3,
            successful_iterations: if passed { 3 } else { 2 },
            failures: if passed {
                Vec::new()
            } else {
                vec!["Iteration 3 (seed 1339): wrong price".to_string()]
            },
            average_duration: Duration::from_millis(2),
        }
    }

    #[test]
    fn expands_all_scenarios_keyword() {
        let expanded = expand_scenarios("outage,all");
        assert_eq!(expanded[0], "outage");
        assert!(expanded.contains(&"happy-path".to_string()));
        assert_eq!(
            expanded.iter().filter(|s| s.as_str() == "outage").count(),
            1
        );
        assert!(!expanded.contains(&"all".to_string()));
    }

    #[test]
    fn expand_scenarios_without_all_preserves_order() {
        let expanded = expand_scenarios("smoke,navigation");
        assert_eq!(expanded, vec!["smoke".to_string(), "navigation".to_string()]);
    }

    #[test]
    fn seeds_must_be_numbers() {
        assert_eq!(parse_seeds("1, 2,3").expect("seeds"), vec![1, 2, 3]);
        let err = parse_seeds("1,abc").expect_err("bad seed");
        assert!(err.to_string().contains("abc"));
    }

    #[test]
    fn run_logic_scenarios_skips_when_not_enabled() {
        let args = Args {
            mode: TestMode::Browser,
            ..base_args()
        };
        let results =
            tokio_test::block_on(run_logic_scenarios(&args, &["smoke".to_string()], &[42]));
        assert!(results.is_empty());
    }

    #[test]
    fn run_logic_scenarios_runs_each_seed() {
        let args = Args {
            iterations: 2,
            ..base_args()
        };
        let scenarios = vec!["happy-path".to_string(), "unknown".to_string()];
        let results = tokio_test::block_on(run_logic_scenarios(&args, &scenarios, &[1, 2]));
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.passed), "{results:?}");
    }

    #[test]
    fn run_browser_scenarios_skips_when_not_enabled() {
        let failures = tokio_test::block_on(run_browser_scenarios(
            &base_args(),
            &["smoke".to_string()],
            &[42],
        ))
        .expect("browser scenarios should skip");
        assert_eq!(failures, 0);
    }

    #[test]
    fn run_browser_scenarios_ignores_unknown_browser() {
        let args = Args {
            mode: TestMode::Browser,
            browsers: "unknown".to_string(),
            ..base_args()
        };
        let failures = tokio_test::block_on(run_browser_scenarios(
            &args,
            &["smoke".to_string()],
            &[42],
        ))
        .expect("unknown browser should be skipped");
        assert_eq!(failures, 0);
    }

    #[test]
    fn maybe_list_scenarios_writes_output() {
        let temp = temp_file("scenarios.txt");
        let args = Args {
            list_scenarios: true,
            output: Some(temp.clone()),
            ..base_args()
        };
        assert!(maybe_list_scenarios(&args).expect("list"));
        let content = std::fs::read_to_string(temp).expect("read list");
        assert!(content.contains("Available scenarios"));
        assert!(content.contains("too-many-players"));
    }

    #[test]
    fn maybe_list_scenarios_returns_false_when_disabled() {
        assert!(!maybe_list_scenarios(&base_args()).expect("list"));
    }

    #[test]
    fn write_reports_emits_json_for_results() {
        let temp = temp_file("report.json");
        let args = Args {
            output: Some(temp.clone()),
            ..base_args()
        };
        write_reports(&args, &[sample_result(true)], Instant::now()).expect("report");
        let content = std::fs::read_to_string(temp).expect("read report");
        let value: serde_json::Value = serde_json::from_str(&content).expect("valid json");
        assert_eq!(value[0]["scenario_name"], "Happy Path");
    }

    #[test]
    fn write_reports_markdown_empty_results() {
        let temp = temp_file("empty.md");
        let args = Args {
            report: "markdown".to_string(),
            output: Some(temp.clone()),
            ..base_args()
        };
        write_reports(&args, &[], Instant::now()).expect("report");
        let content = std::fs::read_to_string(temp).expect("read report");
        assert!(content.contains("No scenarios executed"));
        assert!(content.contains("Total time"));
    }

    #[test]
    fn write_reports_console_lists_failures() {
        let temp = temp_file("console.txt");
        let args = Args {
            report: "console".to_string(),
            output: Some(temp.clone()),
            ..base_args()
        };
        write_reports(&args, &[sample_result(false)], Instant::now()).expect("report");
        let content = std::fs::read_to_string(temp).expect("read report");
        assert!(content.contains("Happy Path"));
        assert!(content.contains("wrong price"));
    }

    #[test]
    fn build_browser_config_respects_headless_and_hub() {
        let args = Args {
            headless: HeadlessMode::Windowed,
            hub: Some("http://remote.example".to_string()),
            ..base_args()
        };
        let cfg = build_browser_config(&args);
        assert!(!cfg.headless);
        assert_eq!(cfg.remote_hub.as_deref(), Some("http://remote.example"));
    }

    #[test]
    fn scenario_artifacts_dir_includes_seed() {
        let dir = scenario_artifacts_dir(&base_args(), BrowserKind::Chrome, "happy-path", 42);
        assert!(dir.contains("chrome/happy-path/seed-42"));
    }

    #[test]
    fn output_target_stdout_writes() {
        let mut target = OutputTarget::new(None).expect("stdout target");
        target.write_all(b"ok").expect("write");
        target.flush().expect("flush");
    }
}
