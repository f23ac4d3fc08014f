use chrono::{Local, NaiveDate};
use clap::{Parser, ValueEnum};
use plan_tool::Scheduler;
use plan_tool::persistence::{
    DATE_FORMAT, PersistenceError, PersistenceResult, load_days_off_from_csv, load_tasks_from_csv,
    save_plan_to_csv, save_plan_to_json,
};
use std::path::PathBuf;

/// Generate a project plan from a task CSV file and a days-off CSV file.
#[derive(Parser)]
#[command(name = "plan-tool")]
struct Args {
    /// Path to the task CSV file (rows of name, effort in days, owner).
    #[arg(long, value_name = "FILE")]
    tasks: PathBuf,

    /// Path to the days-off CSV file (rows of owner, date or date range).
    #[arg(long = "days-off", value_name = "FILE")]
    days_off: PathBuf,

    /// Path to the output file.
    #[arg(long = "output-file", value_name = "FILE")]
    output_file: PathBuf,

    /// Start date of the project in the format MM/DD/YYYY. Default is today's date.
    #[arg(long = "start-date", value_name = "DATE")]
    start_date: Option<String>,

    /// Output format for the generated plan.
    #[arg(long, value_enum, default_value = "csv")]
    format: OutputFormat,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Csv,
    Json,
}

fn main() {
    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> PersistenceResult<()> {
    let start_date = match &args.start_date {
        Some(input) => NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|err| {
            PersistenceError::InvalidDate(format!("start date '{input}': {err}"))
        })?,
        None => Local::now().date_naive(),
    };

    let tasks = load_tasks_from_csv(&args.tasks)?;
    let calendar = load_days_off_from_csv(&args.days_off)?;
    let plan = Scheduler::new(&calendar).execute(&tasks, start_date);

    match args.format {
        OutputFormat::Csv => save_plan_to_csv(&plan, &args.output_file)?,
        OutputFormat::Json => save_plan_to_json(&plan, &args.output_file)?,
    }

    println!(
        "Project plan has been generated and saved to {}.",
        args.output_file.display()
    );
    Ok(())
}
