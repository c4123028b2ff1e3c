//! `tqt truck` command - truck parameter management

use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::{format_eur, format_eur_per_km};
use crate::cli::output::effective_format;
use crate::cli::table;
use crate::cli::OutputFormat;
use crate::core::project::Project;
use crate::entities::truck::TruckParameters;

#[derive(Subcommand, Debug)]
pub enum TruckCommands {
    /// Show the truck parameters
    Show(ShowArgs),

    /// Update truck parameters field by field
    Set(SetArgs),
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Output format
    #[arg(long, short = 'f', default_value = "auto")]
    pub format: OutputFormat,
}

#[derive(clap::Args, Debug)]
pub struct SetArgs {
    /// Manufacturer
    #[arg(long)]
    pub brand: Option<String>,

    /// Model name
    #[arg(long)]
    pub model: Option<String>,

    /// Registration year
    #[arg(long)]
    pub year: Option<u32>,

    /// License plate
    #[arg(long)]
    pub license_plate: Option<String>,

    /// Load capacity in tonnes
    #[arg(long)]
    pub capacity: Option<f64>,

    /// Purchase value
    #[arg(long)]
    pub value: Option<f64>,

    /// Amortization period in years
    #[arg(long)]
    pub amortization_years: Option<f64>,

    /// Annual insurance premium
    #[arg(long)]
    pub insurance: Option<f64>,

    /// Annual road tax
    #[arg(long)]
    pub road_tax: Option<f64>,

    /// Annual inspection fee
    #[arg(long)]
    pub inspection: Option<f64>,

    /// Annual tachograph fee
    #[arg(long)]
    pub tachograph: Option<f64>,

    /// Fuel cost per km
    #[arg(long)]
    pub fuel_cost: Option<f64>,

    /// Tire cost per km
    #[arg(long)]
    pub tires_cost: Option<f64>,

    /// Toll cost per km
    #[arg(long)]
    pub toll_cost: Option<f64>,

    /// Food and lodging cost per day
    #[arg(long)]
    pub food_lodging_cost: Option<f64>,

    /// Load/unload cost per hour
    #[arg(long)]
    pub load_unload_cost: Option<f64>,

    /// Maintenance cost per km
    #[arg(long)]
    pub maintenance_cost: Option<f64>,
}

impl SetArgs {
    /// Apply the provided flags onto an existing record
    fn apply(&self, truck: &mut TruckParameters) {
        if let Some(v) = &self.brand {
            truck.brand = v.clone();
        }
        if let Some(v) = &self.model {
            truck.model = v.clone();
        }
        if let Some(v) = self.year {
            truck.year = v;
        }
        if let Some(v) = &self.license_plate {
            truck.license_plate = v.clone();
        }
        if let Some(v) = self.capacity {
            truck.capacity = v;
        }
        if let Some(v) = self.value {
            truck.value = v;
        }
        if let Some(v) = self.amortization_years {
            truck.amortization_years = v;
        }
        if let Some(v) = self.insurance {
            truck.insurance = v;
        }
        if let Some(v) = self.road_tax {
            truck.road_tax = v;
        }
        if let Some(v) = self.inspection {
            truck.inspection = v;
        }
        if let Some(v) = self.tachograph {
            truck.tachograph = v;
        }
        if let Some(v) = self.fuel_cost {
            truck.fuel_cost = v;
        }
        if let Some(v) = self.tires_cost {
            truck.tires_cost = v;
        }
        if let Some(v) = self.toll_cost {
            truck.toll_cost = v;
        }
        if let Some(v) = self.food_lodging_cost {
            truck.food_lodging_cost = v;
        }
        if let Some(v) = self.load_unload_cost {
            truck.load_unload_cost = v;
        }
        if let Some(v) = self.maintenance_cost {
            truck.maintenance_cost = v;
        }
    }
}

pub fn run(cmd: TruckCommands) -> Result<()> {
    match cmd {
        TruckCommands::Show(args) => show(args),
        TruckCommands::Set(args) => set(args),
    }
}

fn show(args: ShowArgs) -> Result<()> {
    let project = Project::discover()?;
    let truck = project.load_truck()?;

    match effective_format(args.format, false) {
        OutputFormat::Yaml | OutputFormat::Auto => {
            print!("{}", serde_yml::to_string(&truck).into_diagnostic()?);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&truck).into_diagnostic()?);
        }
        OutputFormat::Table => {
            let rows = vec![
                vec!["Truck".to_string(), format!("{} {} ({})", truck.brand, truck.model, truck.year)],
                vec!["Plate".to_string(), truck.license_plate.clone()],
                vec!["Capacity".to_string(), format!("{} t", truck.capacity)],
                vec!["Value".to_string(), format_eur(truck.value)],
                vec!["Amortization".to_string(), format!("{} years", truck.amortization_years)],
                vec!["Insurance/year".to_string(), format_eur(truck.insurance)],
                vec!["Road tax/year".to_string(), format_eur(truck.road_tax)],
                vec!["Inspection/year".to_string(), format_eur(truck.inspection)],
                vec!["Tachograph/year".to_string(), format_eur(truck.tachograph)],
                vec!["Fuel".to_string(), format_eur_per_km(truck.fuel_cost)],
                vec!["Tires".to_string(), format_eur_per_km(truck.tires_cost)],
                vec!["Tolls".to_string(), format_eur_per_km(truck.toll_cost)],
                vec!["Food/lodging per day".to_string(), format_eur(truck.food_lodging_cost)],
                vec!["Load/unload per hour".to_string(), format_eur(truck.load_unload_cost)],
                vec!["Maintenance".to_string(), format_eur_per_km(truck.maintenance_cost)],
            ];
            println!("{}", table::render(&["FIELD", "VALUE"], rows));
        }
    }

    Ok(())
}

fn set(args: SetArgs) -> Result<()> {
    let project = Project::discover()?;
    let mut truck = project.load_truck()?;

    args.apply(&mut truck);
    project.save_truck(&truck)?;

    println!(
        "{} Updated truck parameters for {} {}",
        style("✓").green().bold(),
        truck.brand,
        truck.model
    );

    Ok(())
}
