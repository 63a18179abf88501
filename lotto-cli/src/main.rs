mod prompt;
mod render;
mod reports;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write, stdout};
use std::path::PathBuf;

use lotto_game::{
    LottoConfig, NumberSet, SimulationEvent, entropy_seed, parse_player_numbers, seeded_simulation,
};
use prompt::{SHOW_DRAWS_PROMPT, read_player_numbers, read_yes_no};
use reports::{RunReport, write_console_report, write_json_report};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Toggle {
    Yes,
    No,
}

impl Toggle {
    const fn enabled(self) -> bool {
        matches!(self, Self::Yes)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Console,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "lotto", version)]
#[command(about = "Plays the lotto every week until your numbers come up")]
struct Args {
    /// Your lotto numbers; asked for interactively when missing or invalid
    #[arg(allow_negative_numbers = true)]
    numbers: Vec<String>,

    /// Show both number sets for every weekly draw (asked for when omitted)
    #[arg(long, value_enum)]
    show_draws: Option<Toggle>,

    /// Seed for reproducible draws
    #[arg(long)]
    seed: Option<u64>,

    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Amount of numbers drawn each week
    #[arg(long)]
    draw_size: Option<usize>,

    /// Highest number in the pool
    #[arg(long)]
    pool_size: Option<u32>,

    /// Years after which a win is too late and the simulation starts over
    #[arg(long)]
    lifespan: Option<u64>,

    /// Weeks per year used for the year conversion
    #[arg(long)]
    weeks_per_year: Option<f64>,

    /// Print a summary once the simulation finishes
    #[arg(long, value_enum)]
    report: Option<ReportFormat>,

    /// Optional path to write the report to instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    run(&args)
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn run(args: &Args) -> Result<()> {
    let cfg = resolve_config(args)?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = BufWriter::new(stdout().lock());

    let player = resolve_player_numbers(args, &cfg, &mut input, &mut out)?;
    let show_draws = match (args.show_draws, &args.config) {
        (Some(toggle), _) => toggle.enabled(),
        (None, Some(_)) => cfg.show_draws,
        (None, None) => read_yes_no(&mut input, &mut out, SHOW_DRAWS_PROMPT)?,
    };
    let cfg = cfg.with_show_draws(show_draws);

    let seed = args.seed.unwrap_or_else(entropy_seed);
    log::info!("simulating {} of {} with seed {seed}", cfg.draw_size, cfg.pool_size);

    let mut simulation =
        seeded_simulation(cfg, player, seed).context("invalid simulation configuration")?;
    let summary = simulation
        .try_run(|event| {
            render::write_event(&mut out, event)?;
            // Round details are flushed in bulk; progress lines show up right away.
            if matches!(event, SimulationEvent::RoundDrawn { .. }) {
                Ok(())
            } else {
                out.flush()
            }
        })
        .context("failed to write simulation output")?;
    out.flush()?;

    if let Some(format) = args.report {
        let report = RunReport {
            seed,
            player: simulation.player(),
            config: simulation.config(),
            random_calls: simulation.source().rng().draws(),
            summary: &summary,
        };
        let mut target = OutputTarget::new(args.output.clone())?;
        match format {
            ReportFormat::Console => write_console_report(target.writer(), &report)?,
            ReportFormat::Json => write_json_report(target.writer(), &report)?,
        }
        target.flush_inner()?;
    }

    Ok(())
}

/// Layer command-line overrides on top of the configuration file or defaults.
fn resolve_config(args: &Args) -> Result<LottoConfig> {
    let mut cfg = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            LottoConfig::from_json(&raw)
                .with_context(|| format!("failed to load {}", path.display()))?
        }
        None => LottoConfig::default(),
    };
    if let Some(draw_size) = args.draw_size {
        cfg.draw_size = draw_size;
    }
    if let Some(pool_size) = args.pool_size {
        cfg.pool_size = pool_size;
    }
    if let Some(lifespan) = args.lifespan {
        cfg.lifespan_years = lifespan;
    }
    if let Some(weeks_per_year) = args.weeks_per_year {
        cfg.weeks_per_year = weeks_per_year;
    }
    cfg.validate().context("invalid configuration")?;
    Ok(cfg)
}

fn resolve_player_numbers<R, W>(
    args: &Args,
    cfg: &LottoConfig,
    input: &mut R,
    out: &mut W,
) -> Result<NumberSet>
where
    R: io::BufRead,
    W: Write,
{
    if !args.numbers.is_empty() {
        match parse_player_numbers(args.numbers.as_slice(), cfg) {
            Ok(set) => return Ok(set),
            Err(err) => log::warn!("ignoring command-line numbers: {err}"),
        }
    }
    read_player_numbers(input, out, cfg)
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("lotto").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn parses_numbers_and_flags() {
        let args = parse(&[
            "1", "2", "3", "4", "5", "6", "7", "--show-draws", "yes", "--seed", "9", "--report",
            "json",
        ]);
        assert_eq!(args.numbers.len(), 7);
        assert_eq!(args.show_draws, Some(Toggle::Yes));
        assert_eq!(args.seed, Some(9));
        assert_eq!(args.report, Some(ReportFormat::Json));
    }

    #[test]
    fn negative_numbers_reach_validation() {
        let args = parse(&["-1", "2", "3", "4", "5", "6", "7"]);
        assert_eq!(args.numbers[0], "-1");
    }

    #[test]
    fn overrides_apply_on_top_of_defaults() {
        let args = parse(&["--pool-size", "10", "--draw-size", "3", "--lifespan", "80"]);
        let cfg = resolve_config(&args).unwrap();
        assert_eq!(cfg.pool_size, 10);
        assert_eq!(cfg.draw_size, 3);
        assert_eq!(cfg.lifespan_years, 80);
        assert!((cfg.weeks_per_year - 52.14).abs() < f64::EPSILON);
    }

    #[test]
    fn invalid_overrides_are_fatal() {
        let args = parse(&["--pool-size", "5"]);
        let err = resolve_config(&args).unwrap_err();
        assert!(format!("{err:#}").contains("pool size 5 is smaller than draw size 7"));
    }

    #[test]
    fn config_file_is_loaded() {
        let path = std::env::temp_dir().join(format!(
            "lotto-config-{}.json",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos()
        ));
        std::fs::write(&path, r#"{ "draw_size": 5, "pool_size": 30 }"#).unwrap();
        let args = parse(&["--config", path.to_str().unwrap(), "--pool-size", "35"]);
        let cfg = resolve_config(&args).unwrap();
        assert_eq!(cfg.draw_size, 5);
        assert_eq!(cfg.pool_size, 35);
    }

    #[test]
    fn invalid_arguments_fall_back_to_prompt() {
        let args = parse(&["1", "1", "2", "3", "4", "5", "6"]);
        let cfg = LottoConfig::default();
        let mut input = Cursor::new(b"7\n6\n5\n4\n3\n2\n1\n".to_vec());
        let mut out = Vec::new();
        let set = resolve_player_numbers(&args, &cfg, &mut input, &mut out).unwrap();
        assert_eq!(set.as_slice(), &[1, 2, 3, 4, 5, 6, 7]);
        assert!(!out.is_empty());
    }

    #[test]
    fn valid_arguments_skip_prompt() {
        let args = parse(&["40", "1", "2", "3", "4", "5", "6"]);
        let cfg = LottoConfig::default();
        let mut out = Vec::new();
        let set =
            resolve_player_numbers(&args, &cfg, &mut Cursor::new(Vec::new()), &mut out).unwrap();
        assert_eq!(set.as_slice(), &[1, 2, 3, 4, 5, 6, 40]);
        assert!(out.is_empty());
    }

    #[test]
    fn output_target_writes_file() {
        let path = std::env::temp_dir().join(format!(
            "lotto-report-{}.txt",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos()
        ));
        let mut target = OutputTarget::new(Some(path.clone())).unwrap();
        target.writer().write_all(b"ok").unwrap();
        target.flush_inner().unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "ok");
    }
}
