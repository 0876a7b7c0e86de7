//! Keyfill CLI
//!
//! Usage:
//!   keyfill [OPTIONS] madlib [STORY_OPTIONS]
//!   keyfill [OPTIONS] payslip [PAYSLIP_OPTIONS]
//!
//! Options:
//!   -c, --config <FILE>   Settings file (TOML format)
//!   -v, --verbose         Debug logging (RUST_LOG overrides)
//!   -h, --help            Print help

use std::path::PathBuf;
use std::process;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use keyfill::template::seeded;
use keyfill::{
    generate_payslips, generate_story, DocumentBuilder, PassThrough, PayPeriod, PayrollRun,
    Publisher, RecordPolicy, Settings,
};

#[derive(Parser)]
#[command(name = "keyfill")]
#[command(about = "Fill story and payslip templates by keyword substitution")]
struct Cli {
    /// Settings file (TOML format)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory for intermediate rendered files
    #[arg(long, global = true)]
    work_dir: Option<PathBuf>,

    /// Publish the rendered text instead of running the document builder
    #[arg(long, global = true)]
    no_build: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fill a story template with random words
    Madlib {
        /// Story template
        #[arg(default_value = "madlib_template.tex")]
        template: PathBuf,

        /// Directory the finished story is moved to
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Seed for reproducible word choices
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Compute pay from a timesheet and fill one payslip per employee
    Payslip {
        /// Payslip template
        #[arg(default_value = "payslip_template.tex")]
        template: PathBuf,

        /// Weekly timesheet (CSV with header row)
        #[arg(short, long, default_value = "timesheet.csv")]
        timesheet: PathBuf,

        /// Directory the finished payslips are moved to
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Issue date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Skip rows that fail to parse instead of stopping
        #[arg(long)]
        skip_malformed: bool,
    },
}

fn setup_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    // Load settings
    let settings = match &cli.config {
        Some(path) => match Settings::from_file(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error loading settings '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => Settings::default(),
    };

    let builder: Box<dyn DocumentBuilder> = if cli.no_build {
        Box::new(PassThrough)
    } else {
        Box::new(settings.build.clone())
    };
    let work_dir = cli.work_dir.clone().unwrap_or_else(|| settings.paths.work_dir.clone());

    match cli.command {
        Command::Madlib {
            template,
            output_dir,
            seed,
        } => {
            let output_dir = output_dir.unwrap_or_else(|| settings.paths.madlib_dir.clone());
            let publisher = Publisher::new(builder, work_dir, output_dir);
            let mut rng = seeded(seed);
            match generate_story(&template, &settings.vocabulary, &mut rng, &publisher) {
                Ok(path) => println!("{}", path.display()),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    process::exit(1);
                }
            }
        }
        Command::Payslip {
            template,
            timesheet,
            output_dir,
            date,
            skip_malformed,
        } => {
            let output_dir = output_dir.unwrap_or_else(|| settings.paths.payslip_dir.clone());
            let publisher = Publisher::new(builder, work_dir, output_dir);
            let period = date.map(PayPeriod::new).unwrap_or_else(PayPeriod::today);
            let policy = if skip_malformed {
                RecordPolicy::Skip
            } else {
                RecordPolicy::Abort
            };
            let run = PayrollRun::new(period)
                .with_rates(settings.rates.clone())
                .with_policy(policy);

            let report = match generate_payslips(&template, &timesheet, &run, &publisher) {
                Ok(report) => report,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    process::exit(1);
                }
            };

            for path in &report.published {
                println!("{}", path.display());
            }
            for err in &report.skipped {
                eprintln!("Skipped: {}", err);
            }
            for failure in &report.failed {
                eprintln!("Failed: {}: {}", failure.employee, failure.error);
            }
        }
    }
}
