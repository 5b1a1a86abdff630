mod check;
mod query;
mod reports;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use pedagogy_core::{PhaseFilter, Strategy, distinct_phases, parse_catalog};
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::{Path, PathBuf};

use check::check_catalog;
use query::Query;
use reports::Report;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Colored human-readable summary
    Console,
    /// Machine-readable JSON document
    Json,
    /// Markdown suitable for CI summaries
    Markdown,
}

#[derive(Debug, Parser)]
#[command(name = "pedagogy-tester", version)]
#[command(about = "Validate and query the pedagogy strategy catalog")]
struct Args {
    /// Catalog file to load
    #[arg(long, default_value = "pedagogy-web/static/data/strategies.json")]
    catalog: PathBuf,

    /// Validate the catalog (the default when no query flag is given)
    #[arg(long)]
    check: bool,

    /// Case-insensitive search over titles and command words
    #[arg(long)]
    search: Option<String>,

    /// Restrict matches to one phase (`all` for no restriction)
    #[arg(long)]
    phase: Option<String>,

    /// Favorite ids (comma-separated)
    #[arg(long)]
    favorites: Option<String>,

    /// Only list favorites
    #[arg(long)]
    favorites_only: bool,

    /// Print the distinct phases and exit
    #[arg(long)]
    list_phases: bool,

    /// Output report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

impl Args {
    fn wants_query(&self) -> bool {
        self.search.is_some()
            || self.phase.is_some()
            || self.favorites.is_some()
            || self.favorites_only
    }

    fn wants_check(&self) -> bool {
        self.check || (!self.wants_query() && !self.list_phases)
    }

    fn query(&self) -> Query {
        Query {
            search: self.search.clone().unwrap_or_default(),
            phase: self
                .phase
                .as_deref()
                .map(PhaseFilter::from_select)
                .unwrap_or_default(),
            favorites: self
                .favorites
                .as_deref()
                .map(split_csv)
                .unwrap_or_default()
                .into_iter()
                .collect(),
            favorites_only: self.favorites_only,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let strategies = load_catalog(&args.catalog)?;
    log::info!(
        "Loaded {} strategies from {}",
        strategies.len(),
        args.catalog.display()
    );

    let report = build_report(&args, &strategies);
    let mut output_target = OutputTarget::new(args.output.clone())?;
    match args.report {
        ReportFormat::Json => reports::generate_json_report(output_target.writer(), &report)?,
        ReportFormat::Markdown => {
            reports::generate_markdown_report(output_target.writer(), &report)?;
        }
        ReportFormat::Console => {
            reports::generate_console_report(output_target.writer(), &report)?;
        }
    }
    output_target.flush_inner()?;

    if report.check.as_ref().is_some_and(|c| !c.passed()) {
        eprintln!("{}", "Catalog check failed".red().bold());
        std::process::exit(1);
    }
    Ok(())
}

fn load_catalog(path: &Path) -> Result<Vec<Strategy>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_catalog(&raw).with_context(|| format!("failed to parse {}", path.display()))
}

fn build_report<'a>(args: &Args, strategies: &'a [Strategy]) -> Report<'a> {
    let mut report = Report {
        catalog: args.catalog.display().to_string(),
        ..Report::default()
    };
    if args.list_phases {
        report.phases = Some(
            distinct_phases(strategies)
                .into_iter()
                .map(str::to_string)
                .collect(),
        );
    }
    if args.wants_check() {
        report.check = Some(check_catalog(strategies));
    }
    if args.wants_query() {
        report.matches = Some(args.query().run(strategies));
    }
    report
}

fn split_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
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

    fn base_args() -> Args {
        Args {
            catalog: PathBuf::from("catalog.json"),
            check: false,
            search: None,
            phase: None,
            favorites: None,
            favorites_only: false,
            list_phases: false,
            report: ReportFormat::Json,
            output: None,
        }
    }

    #[test]
    fn check_is_default_without_query_flags() {
        let args = base_args();
        assert!(args.wants_check());
        assert!(!args.wants_query());

        let args = Args {
            search: Some("go".into()),
            ..base_args()
        };
        assert!(!args.wants_check());
        assert!(args.wants_query());

        let args = Args {
            list_phases: true,
            ..base_args()
        };
        assert!(!args.wants_check());
    }

    #[test]
    fn favorites_flag_is_split_and_trimmed() {
        let args = Args {
            favorites: Some(" a, b,,c ".into()),
            favorites_only: true,
            ..base_args()
        };
        let query = args.query();
        assert_eq!(query.favorites.len(), 3);
        assert!(query.favorites.contains("b"));
        assert!(query.favorites_only);
    }

    #[test]
    fn bundled_catalog_loads() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../pedagogy-web/static/data/strategies.json");
        let strategies = load_catalog(&path).unwrap();
        let report = build_report(&base_args(), &strategies);
        assert!(report.check.unwrap().passed());
    }
}
