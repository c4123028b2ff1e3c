//! `tqt fleet` command - trip-independent cost dashboard

use clap::Subcommand;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use crate::cli::helpers::{format_eur, format_eur_per_km};
use crate::cli::table;
use crate::cli::OutputFormat;
use crate::core::fleet::{average_cost_per_km, monthly_fixed_costs};
use crate::core::project::Project;

#[derive(Subcommand, Debug)]
pub enum FleetCommands {
    /// Show monthly fixed costs and average cost per km
    Summary(SummaryArgs),
}

#[derive(clap::Args, Debug)]
pub struct SummaryArgs {
    /// Output format
    #[arg(long, short = 'f', default_value = "auto")]
    pub format: OutputFormat,
}

/// Dashboard figures derived from the truck parameters alone
#[derive(Debug, Serialize)]
struct FleetSummary {
    truck: String,
    annual_fixed_costs: f64,
    monthly_fixed_costs: f64,
    average_cost_per_km: f64,
}

pub fn run(cmd: FleetCommands) -> Result<()> {
    match cmd {
        FleetCommands::Summary(args) => summary(args),
    }
}

fn summary(args: SummaryArgs) -> Result<()> {
    let project = Project::discover()?;
    let truck = project.load_truck()?;

    let summary = FleetSummary {
        truck: format!("{} {} ({})", truck.brand, truck.model, truck.license_plate),
        annual_fixed_costs: truck.annual_fixed_costs(),
        monthly_fixed_costs: monthly_fixed_costs(&truck)?,
        average_cost_per_km: average_cost_per_km(&truck)?,
    };

    // The dashboard defaults to the table
    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&summary).into_diagnostic()?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(&summary).into_diagnostic()?);
        }
        OutputFormat::Auto | OutputFormat::Table => {
            let rows = vec![
                vec!["Truck".to_string(), summary.truck.clone()],
                vec![
                    "Annual fixed costs".to_string(),
                    format_eur(summary.annual_fixed_costs),
                ],
                vec![
                    "Monthly fixed costs".to_string(),
                    format_eur(summary.monthly_fixed_costs),
                ],
                vec![
                    "Average cost per km".to_string(),
                    format_eur_per_km(summary.average_cost_per_km),
                ],
            ];
            println!("{}", table::render(&["METRIC", "VALUE"], rows));
        }
    }

    Ok(())
}
