//! Pension Projection CLI
//!
//! Projects pay to superannuation and compares NPS and UPS payouts

use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::NaiveDate;
use clap::Parser;

use pension_projection::{
    presenter::render_report, Assumptions, MonthRow, RawEmployeeInput, ScenarioRunner,
};

#[derive(Parser, Debug)]
#[command(
    name = "pension_projection",
    about = "Project salary to retirement and compare NPS and UPS payouts"
)]
struct Args {
    #[arg(long, help = "Employee input as JSON; flags below override its fields")]
    input: Option<PathBuf>,

    #[arg(long, help = "Date of birth (YYYY-MM-DD)")]
    dob: Option<NaiveDate>,

    #[arg(long, help = "Date of joining (YYYY-MM-DD)")]
    doj: Option<NaiveDate>,

    #[arg(long, help = "Date from which the current basic pay is drawn (YYYY-MM-DD)")]
    effective_date: Option<NaiveDate>,

    #[arg(long, help = "Current basic pay")]
    basic: Option<f64>,

    #[arg(long, help = "Current DA rate in percent, e.g. 53")]
    da_rate: Option<f64>,

    #[arg(long, help = "Grade pay: 6000, 7000, 8000, 9000 or 10000")]
    grade_pay: Option<String>,

    #[arg(long, help = "JSON file overriding policy assumptions")]
    assumptions: Option<PathBuf>,

    #[arg(long, help = "Print the report as JSON")]
    json: bool,

    #[arg(long, help = "Write the monthly pay and corpus schedule to this CSV file")]
    schedule: Option<PathBuf>,
}

impl Args {
    fn raw_input(&self) -> anyhow::Result<RawEmployeeInput> {
        let mut raw = match &self.input {
            Some(path) => RawEmployeeInput::from_json_path(path)?,
            None => RawEmployeeInput::default(),
        };

        raw.date_of_birth = self.dob.or(raw.date_of_birth);
        raw.date_of_joining = self.doj.or(raw.date_of_joining);
        raw.effective_pay_date = self.effective_date.or(raw.effective_pay_date);
        raw.current_basic_pay = self.basic.or(raw.current_basic_pay);
        raw.current_da_rate_percent = self.da_rate.or(raw.current_da_rate_percent);
        if let Some(grade) = &self.grade_pay {
            raw.grade_pay = Some(grade.clone());
        }

        Ok(raw)
    }
}

fn write_schedule(path: &Path, rows: &[MonthRow]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Unable to create {}", path.display()))?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    let assumptions = match &args.assumptions {
        Some(path) => Assumptions::from_json_path(path)?,
        None => Assumptions::default_pricing(),
    };

    let today = chrono::Local::now().date_naive();
    let employee = args.raw_input()?.validate(today)?;

    let runner = ScenarioRunner::with_assumptions(assumptions);
    let (report, schedule) = runner.run_detailed(&employee);

    if let Some(path) = &args.schedule {
        write_schedule(path, &schedule)?;
        log::info!("Monthly schedule ({} rows) written to {}", schedule.len(), path.display());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_report(&report));
    }

    Ok(())
}
