//! `tqt quote` command - compute and manage trip quotes

use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;

use crate::cli::filters::StatusFilter;
use crate::cli::helpers::{format_eur, truncate_str};
use crate::cli::output::effective_format;
use crate::cli::table;
use crate::cli::OutputFormat;
use crate::core::pricing::calculate_quote;
use crate::core::project::Project;
use crate::entities::quote::{CostCategory, QuoteDetails, QuoteRecord, QuoteStatus};
use crate::entities::trip::{RoadType, Trip};

#[derive(Subcommand, Debug)]
pub enum QuoteCommands {
    /// Compute a quote for a trip and save it as pending
    New(NewArgs),

    /// List saved quotes
    List(ListArgs),

    /// Show one quote in full
    Show(ShowArgs),

    /// Mark a quote as confirmed by the client
    Confirm(IdArgs),

    /// Mark a quote as rejected by the client
    Reject(IdArgs),

    /// Delete a quote
    Delete(DeleteArgs),

    /// Export the quote book as CSV
    Export(ExportArgs),
}

#[derive(clap::Args, Debug)]
pub struct NewArgs {
    /// Departure location
    #[arg(long)]
    pub from: String,

    /// Arrival location
    #[arg(long)]
    pub to: String,

    /// Trip distance in km
    #[arg(long, short = 'd')]
    pub distance: f64,

    /// Travel duration in hours
    #[arg(long)]
    pub hours: f64,

    /// Road type (autostrada, statale, or misto)
    #[arg(long, default_value = "autostrada")]
    pub road_type: RoadType,

    /// Hours spent loading and unloading
    #[arg(long, default_value_t = 0.0)]
    pub load_unload_hours: f64,

    /// Apply VAT (defaults to the tax settings' apply_vat_by_default)
    #[arg(long, overrides_with = "no_vat")]
    pub vat: bool,

    /// Do not apply VAT
    #[arg(long, overrides_with = "vat")]
    pub no_vat: bool,

    /// Margin rate in percent (defaults to the project's default margin)
    #[arg(long, short = 'm')]
    pub margin: Option<f64>,

    /// Compute and print without saving
    #[arg(long)]
    pub dry_run: bool,

    /// Output format
    #[arg(long, short = 'f', default_value = "auto")]
    pub format: OutputFormat,
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Filter by status
    #[arg(long, short = 's', default_value = "all")]
    pub status: StatusFilter,

    /// Limit number of results
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    /// Output format
    #[arg(long, short = 'f', default_value = "auto")]
    pub format: OutputFormat,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Quote id
    pub id: u32,

    /// Output format
    #[arg(long, short = 'f', default_value = "auto")]
    pub format: OutputFormat,
}

#[derive(clap::Args, Debug)]
pub struct IdArgs {
    /// Quote id
    pub id: u32,
}

#[derive(clap::Args, Debug)]
pub struct DeleteArgs {
    /// Quote id
    pub id: u32,

    /// Skip the confirmation prompt
    #[arg(long)]
    pub force: bool,
}

#[derive(clap::Args, Debug)]
pub struct ExportArgs {
    /// Write to a file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Filter by status
    #[arg(long, short = 's', default_value = "all")]
    pub status: StatusFilter,
}

pub fn run(cmd: QuoteCommands) -> Result<()> {
    match cmd {
        QuoteCommands::New(args) => new(args),
        QuoteCommands::List(args) => list(args),
        QuoteCommands::Show(args) => show(args),
        QuoteCommands::Confirm(args) => set_status(args.id, QuoteStatus::Confirmed),
        QuoteCommands::Reject(args) => set_status(args.id, QuoteStatus::Rejected),
        QuoteCommands::Delete(args) => delete(args),
        QuoteCommands::Export(args) => export(args),
    }
}

fn new(args: NewArgs) -> Result<()> {
    let project = Project::discover()?;
    let truck = project.load_truck()?;
    let tax = project.load_tax()?;

    let has_vat = if args.vat {
        true
    } else if args.no_vat {
        false
    } else {
        tax.apply_vat_by_default
    };

    let trip = Trip {
        origin: args.from,
        destination: args.to,
        distance: args.distance,
        hours: args.hours,
        road_type: args.road_type,
        load_unload_hours: args.load_unload_hours,
        has_vat,
    };

    let margin = args.margin.or(Some(project.config().default_margin_rate));
    let details = calculate_quote(&truck, &tax, &trip, margin)?;

    // A freshly computed quote defaults to the human-readable summary.
    // Machine formats own stdout; status lines go to stderr.
    let machine_format = matches!(args.format, OutputFormat::Json | OutputFormat::Yaml);
    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&details).into_diagnostic()?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(&details).into_diagnostic()?);
        }
        OutputFormat::Auto | OutputFormat::Table => {
            print_quote_details(&details, tax.vat_note.as_deref())
        }
    }

    let status_line = |line: String| {
        if machine_format {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    };

    if args.dry_run {
        status_line(format!("{}", style("Dry run: quote not saved").yellow()));
    } else {
        let record = project.save_quote(details)?;
        status_line(format!(
            "{} Saved quote {} ({})",
            style("✓").green().bold(),
            style(format!("#{}", record.id)).cyan(),
            record.status
        ));
    }

    Ok(())
}

/// Pretty-print a quote: route header, breakdown table, commercial totals
fn print_quote_details(details: &QuoteDetails, vat_note: Option<&str>) {
    println!(
        "{} {} {} {} ({} km, {} h, {})",
        style("Quote:").bold(),
        details.origin,
        style("→").dim(),
        details.destination,
        details.distance,
        details.hours,
        details.road_type
    );

    let rows: Vec<Vec<String>> = details
        .costs
        .iter()
        .map(|item| {
            vec![
                item.name.clone(),
                item.category.to_string(),
                format_eur(item.amount),
            ]
        })
        .collect();
    println!("{}", table::render(&["ITEM", "CATEGORY", "AMOUNT"], rows));

    println!(
        "  Fixed costs:    {}",
        format_eur(details.category_total(CostCategory::Fixed))
    );
    println!(
        "  Variable costs: {}",
        format_eur(details.category_total(CostCategory::Variable))
    );
    println!("  Total cost:     {}", format_eur(details.total_cost));
    println!(
        "  Margin ({}%):   {}",
        details.margin_rate,
        format_eur(details.margin)
    );
    println!("  Subtotal:       {}", format_eur(details.subtotal));
    match details.vat_amount {
        Some(vat) => println!("  VAT:            {}", format_eur(vat)),
        None => println!("  VAT:            not applied"),
    }
    println!(
        "  {} {}",
        style("Final price:   ").bold(),
        style(format_eur(details.final_price)).green().bold()
    );
    println!(
        "  Cost/km: {}   Price/km: {}",
        format_eur(details.cost_per_km),
        format_eur(details.price_per_km)
    );
    if details.vat_amount.is_some() {
        if let Some(note) = vat_note {
            println!("  {}", style(note).italic().dim());
        }
    }
}

fn list(args: ListArgs) -> Result<()> {
    let project = Project::discover()?;
    let mut quotes: Vec<QuoteRecord> = project
        .list_quotes()?
        .into_iter()
        .filter(|q| args.status.matches(&q.status))
        .collect();

    if let Some(limit) = args.limit {
        quotes.truncate(limit);
    }

    match effective_format(args.format, true) {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&quotes).into_diagnostic()?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(&quotes).into_diagnostic()?);
        }
        _ => {
            if quotes.is_empty() {
                println!("No quotes found");
                return Ok(());
            }
            let rows: Vec<Vec<String>> = quotes
                .iter()
                .map(|q| {
                    vec![
                        q.id.to_string(),
                        q.created.format("%Y-%m-%d").to_string(),
                        truncate_str(
                            &format!("{} → {}", q.details.origin, q.details.destination),
                            32,
                        ),
                        format!("{}", q.details.distance),
                        format_eur(q.details.total_cost),
                        format_eur(q.details.final_price),
                        q.status.to_string(),
                    ]
                })
                .collect();
            println!(
                "{}",
                table::render(
                    &["ID", "DATE", "ROUTE", "KM", "COST", "PRICE", "STATUS"],
                    rows
                )
            );
        }
    }

    Ok(())
}

fn show(args: ShowArgs) -> Result<()> {
    let project = Project::discover()?;
    let record = project.get_quote(args.id)?;

    match effective_format(args.format, false) {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&record).into_diagnostic()?);
        }
        OutputFormat::Yaml | OutputFormat::Auto => {
            print!("{}", serde_yml::to_string(&record).into_diagnostic()?);
        }
        OutputFormat::Table => {
            println!(
                "Quote #{} ({}, created {})",
                record.id,
                record.status,
                record.created.format("%Y-%m-%d %H:%M")
            );
            let tax = project.load_tax()?;
            print_quote_details(&record.details, tax.vat_note.as_deref());
        }
    }

    Ok(())
}

fn set_status(id: u32, status: QuoteStatus) -> Result<()> {
    let project = Project::discover()?;
    let record = project.update_quote_status(id, status)?;

    println!(
        "{} Quote #{} is now {}",
        style("✓").green().bold(),
        record.id,
        style(record.status).bold()
    );

    Ok(())
}

fn delete(args: DeleteArgs) -> Result<()> {
    let project = Project::discover()?;
    // Load first so a missing id fails before the prompt
    let record = project.get_quote(args.id)?;

    if !args.force {
        let confirmed = dialoguer::Confirm::new()
            .with_prompt(format!(
                "Delete quote #{} ({} → {})?",
                record.id, record.details.origin, record.details.destination
            ))
            .default(false)
            .interact()
            .into_diagnostic()?;
        if !confirmed {
            println!("Aborted");
            return Ok(());
        }
    }

    project.delete_quote(args.id)?;
    println!("{} Deleted quote #{}", style("✓").green().bold(), args.id);

    Ok(())
}

fn export(args: ExportArgs) -> Result<()> {
    let project = Project::discover()?;
    let quotes: Vec<QuoteRecord> = project
        .list_quotes()?
        .into_iter()
        .filter(|q| args.status.matches(&q.status))
        .collect();

    let mut writer: csv::Writer<Box<dyn std::io::Write>> = match &args.output {
        Some(path) => {
            let file = std::fs::File::create(path).into_diagnostic()?;
            csv::Writer::from_writer(Box::new(file))
        }
        None => csv::Writer::from_writer(Box::new(std::io::stdout())),
    };

    writer
        .write_record([
            "id",
            "created",
            "status",
            "origin",
            "destination",
            "distance_km",
            "hours",
            "road_type",
            "load_unload_hours",
            "has_vat",
            "total_cost",
            "margin",
            "margin_rate",
            "subtotal",
            "vat_amount",
            "final_price",
            "cost_per_km",
            "price_per_km",
        ])
        .into_diagnostic()?;

    for q in &quotes {
        let d = &q.details;
        writer
            .write_record([
                q.id.to_string(),
                q.created.to_rfc3339(),
                q.status.to_string(),
                d.origin.clone(),
                d.destination.clone(),
                d.distance.to_string(),
                d.hours.to_string(),
                d.road_type.to_string(),
                d.load_unload_hours.to_string(),
                d.has_vat.to_string(),
                format!("{:.2}", d.total_cost),
                format!("{:.2}", d.margin),
                d.margin_rate.to_string(),
                format!("{:.2}", d.subtotal),
                d.vat_amount.map_or(String::new(), |v| format!("{:.2}", v)),
                format!("{:.2}", d.final_price),
                format!("{:.4}", d.cost_per_km),
                format!("{:.4}", d.price_per_km),
            ])
            .into_diagnostic()?;
    }
    writer.flush().into_diagnostic()?;

    if let Some(path) = &args.output {
        println!(
            "{} Exported {} quotes to {}",
            style("✓").green().bold(),
            quotes.len(),
            path.display()
        );
    }

    Ok(())
}
