//! `tqt tax` command - tax settings management

use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::output::effective_format;
use crate::cli::table;
use crate::cli::OutputFormat;
use crate::core::project::Project;
use crate::entities::tax::{Regime, TaxSettings};

#[derive(Subcommand, Debug)]
pub enum TaxCommands {
    /// Show the tax settings
    Show(ShowArgs),

    /// Update tax settings field by field
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
    /// Fiscal regime (forfettario or ordinario)
    #[arg(long)]
    pub regime: Option<Regime>,

    /// IRPEF rate (percent)
    #[arg(long)]
    pub irpef: Option<f64>,

    /// Regional surtax rate (percent)
    #[arg(long)]
    pub regional_tax: Option<f64>,

    /// Municipal surtax rate (percent)
    #[arg(long)]
    pub municipal_tax: Option<f64>,

    /// INPS contribution rate (percent)
    #[arg(long)]
    pub inps: Option<f64>,

    /// VAT rate (percent)
    #[arg(long)]
    pub vat: Option<f64>,

    /// Whether new quotes default to VAT-liable
    #[arg(long)]
    pub apply_vat_by_default: Option<bool>,

    /// Disclosure note for VAT-liable quotes
    #[arg(long)]
    pub vat_note: Option<String>,

    /// Remove the VAT note
    #[arg(long, conflicts_with = "vat_note")]
    pub clear_vat_note: bool,
}

impl SetArgs {
    fn apply(&self, tax: &mut TaxSettings) {
        if let Some(v) = self.regime {
            tax.regime = v;
        }
        if let Some(v) = self.irpef {
            tax.irpef = v;
        }
        if let Some(v) = self.regional_tax {
            tax.regional_tax = v;
        }
        if let Some(v) = self.municipal_tax {
            tax.municipal_tax = v;
        }
        if let Some(v) = self.inps {
            tax.inps = v;
        }
        if let Some(v) = self.vat {
            tax.vat = v;
        }
        if let Some(v) = self.apply_vat_by_default {
            tax.apply_vat_by_default = v;
        }
        if let Some(v) = &self.vat_note {
            tax.vat_note = Some(v.clone());
        }
        if self.clear_vat_note {
            tax.vat_note = None;
        }
    }
}

pub fn run(cmd: TaxCommands) -> Result<()> {
    match cmd {
        TaxCommands::Show(args) => show(args),
        TaxCommands::Set(args) => set(args),
    }
}

fn show(args: ShowArgs) -> Result<()> {
    let project = Project::discover()?;
    let tax = project.load_tax()?;

    match effective_format(args.format, false) {
        OutputFormat::Yaml | OutputFormat::Auto => {
            print!("{}", serde_yml::to_string(&tax).into_diagnostic()?);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&tax).into_diagnostic()?);
        }
        OutputFormat::Table => {
            let rows = vec![
                vec!["Regime".to_string(), tax.regime.to_string()],
                vec!["IRPEF".to_string(), format!("{}%", tax.irpef)],
                vec!["Regional surtax".to_string(), format!("{}%", tax.regional_tax)],
                vec!["Municipal surtax".to_string(), format!("{}%", tax.municipal_tax)],
                vec!["INPS".to_string(), format!("{}%", tax.inps)],
                vec!["VAT".to_string(), format!("{}%", tax.vat)],
                vec![
                    "Apply VAT by default".to_string(),
                    tax.apply_vat_by_default.to_string(),
                ],
                vec![
                    "VAT note".to_string(),
                    tax.vat_note.clone().unwrap_or_else(|| "-".to_string()),
                ],
            ];
            println!("{}", table::render(&["FIELD", "VALUE"], rows));
        }
    }

    Ok(())
}

fn set(args: SetArgs) -> Result<()> {
    let project = Project::discover()?;
    let mut tax = project.load_tax()?;

    args.apply(&mut tax);
    project.save_tax(&tax)?;

    println!(
        "{} Updated tax settings ({} regime, {}% VAT)",
        style("✓").green().bold(),
        tax.regime,
        tax.vat
    );

    Ok(())
}
