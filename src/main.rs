//! Compound Interest CLI
//!
//! Command-line front end for the accumulation engine
//!
//! - `compound_interest calc` - one calculation
//! - `compound_interest batch --input <csv>` - every scenario in a CSV file
//! - `compound_interest sensitivity --rates 3,5,7` - one input at several rates

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use compound_interest::{
    engine::{AccumulationEngine, GrowthSchedule},
    input::load_scenarios,
    presentation::{format_currency, frequency_label, result_line},
    scenario::write_results,
    CalculationInput, ContributionFrequency, DisplayConfig, Language, RawInput, RunnerConfig,
    ScenarioRunner,
};
use log::info;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "compound_interest")]
#[command(author, version, about = "Compound interest calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Future value for one set of inputs
    Calc {
        #[command(flatten)]
        fields: InputArgs,

        #[command(flatten)]
        display: DisplayArgs,

        /// Print principal and contribution components
        #[arg(long)]
        breakdown: bool,

        /// Print a year-by-year schedule
        #[arg(long)]
        schedule: bool,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Run every scenario in a CSV file
    Batch {
        /// Scenario file (ScenarioID,Principal,AnnualRatePercent,Years,Contribution,Frequency)
        #[arg(short, long)]
        input: PathBuf,

        /// Output CSV (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Disable parallel execution
        #[arg(long)]
        sequential: bool,
    },

    /// Re-run one input at several annual rates
    Sensitivity {
        #[command(flatten)]
        fields: InputArgs,

        #[command(flatten)]
        display: DisplayArgs,

        /// Comma separated annual rates in percent
        #[arg(long, value_delimiter = ',', required = true)]
        rates: Vec<f64>,
    },
}

/// The four form fields plus frequency; kept as text so blanks are caught by validation
#[derive(Args)]
struct InputArgs {
    /// Initial amount
    #[arg(short, long)]
    principal: String,

    /// Annual interest rate in percent
    #[arg(short, long)]
    rate: String,

    /// Duration in whole years (at most 1000)
    #[arg(short, long)]
    years: String,

    /// Amount paid in each period
    #[arg(short, long)]
    contribution: String,

    /// monthly or annually
    #[arg(short, long, default_value = "monthly")]
    frequency: ContributionFrequency,
}

impl InputArgs {
    fn validate(&self) -> Result<CalculationInput> {
        let raw = RawInput::new(
            self.principal.as_str(),
            self.rate.as_str(),
            self.years.as_str(),
            self.contribution.as_str(),
            self.frequency,
        );
        Ok(raw.validate()?)
    }
}

#[derive(Args)]
struct DisplayArgs {
    /// Currency symbol for formatted amounts
    #[arg(long, default_value = "$")]
    currency: String,

    /// Decimal places for formatted amounts
    #[arg(long, default_value_t = 2)]
    decimals: usize,

    /// Label language
    #[arg(long, value_enum, default_value_t = Language::English)]
    lang: Language,
}

impl From<&DisplayArgs> for DisplayConfig {
    fn from(args: &DisplayArgs) -> Self {
        DisplayConfig {
            currency_symbol: args.currency.clone(),
            decimals: args.decimals,
            language: args.lang,
        }
    }
}

#[derive(Serialize)]
struct CalcOutput<'a> {
    input: &'a CalculationInput,
    total_future_value: f64,
    formatted: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    breakdown: Option<compound_interest::AccumulationBreakdown>,
    #[serde(skip_serializing_if = "Option::is_none")]
    schedule: Option<GrowthSchedule>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Calc {
            fields,
            display,
            breakdown,
            schedule,
            json,
        } => run_calc(&fields, &(&display).into(), breakdown, schedule, json),
        Commands::Batch {
            input,
            output,
            sequential,
        } => run_batch(&input, output.as_deref(), sequential),
        Commands::Sensitivity {
            fields,
            display,
            rates,
        } => run_sensitivity(&fields, &(&display).into(), &rates),
    }
}

fn run_calc(
    fields: &InputArgs,
    display: &DisplayConfig,
    show_breakdown: bool,
    show_schedule: bool,
    json: bool,
) -> Result<()> {
    let input = fields.validate()?;
    let engine = AccumulationEngine::new();
    let breakdown = engine.breakdown(&input);
    let schedule = show_schedule.then(|| GrowthSchedule::build(&input));

    if json {
        let output = CalcOutput {
            input: &input,
            total_future_value: breakdown.total_future_value,
            formatted: format_currency(breakdown.total_future_value, display),
            breakdown: show_breakdown.then_some(breakdown),
            schedule,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!(
        "Contributions: {} {}",
        format_currency(input.contribution_amount, display),
        frequency_label(input.contribution_frequency, display.language)
    );
    println!("{}", result_line(breakdown.total_future_value, display));

    if show_breakdown {
        println!();
        println!("  Principal value:      {:>16}", format_currency(breakdown.future_value_of_principal, display));
        println!("  Contributions value:  {:>16}", format_currency(breakdown.future_value_of_contributions, display));
        println!("  Total contributed:    {:>16}", format_currency(breakdown.total_contributed, display));
        println!("  Interest earned:      {:>16}", format_currency(breakdown.interest_earned, display));
    }

    if let Some(schedule) = schedule {
        println!();
        println!("{:>5} {:>16} {:>16} {:>16} {:>16}", "Year", "Principal", "Contributions", "Contributed", "Balance");
        println!("{}", "-".repeat(73));
        for row in &schedule.rows {
            println!(
                "{:>5} {:>16} {:>16} {:>16} {:>16}",
                row.year,
                format_currency(row.principal_value, display),
                format_currency(row.contributions_value, display),
                format_currency(row.total_contributed, display),
                format_currency(row.balance, display),
            );
        }
    }

    Ok(())
}

fn run_batch(input: &std::path::Path, output: Option<&std::path::Path>, sequential: bool) -> Result<()> {
    let scenarios = load_scenarios(input)
        .with_context(|| format!("Failed to load scenarios from {}", input.display()))?;
    info!("Loaded {} scenarios from {}", scenarios.len(), input.display());

    let runner = ScenarioRunner::with_config(RunnerConfig { parallel: !sequential });
    let results = runner.run_batch(&scenarios);

    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Unable to create {}", path.display()))?;
            write_results(BufWriter::new(file), &results)?;
            println!("{} results written to {}", results.len(), path.display());
        }
        None => write_results(io::stdout().lock(), &results)?,
    }

    Ok(())
}

fn run_sensitivity(fields: &InputArgs, display: &DisplayConfig, rates: &[f64]) -> Result<()> {
    let input = fields.validate()?;
    let runner = ScenarioRunner::new();

    println!("{:>10} {:>18}", "Rate %", "Future value");
    println!("{}", "-".repeat(29));
    for (rate, result) in runner.rate_sensitivity(&input, rates) {
        println!("{:>10.3} {:>18}", rate, format_currency(result.total_future_value, display));
    }

    Ok(())
}
