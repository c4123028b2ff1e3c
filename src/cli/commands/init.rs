//! `tqt init` command - create and seed a project

use console::style;
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;

use crate::core::pricing::DEFAULT_MARGIN_RATE;
use crate::core::project::{Project, ProjectConfig};

#[derive(clap::Args, Debug)]
pub struct InitArgs {
    /// Directory to initialize (defaults to the current directory)
    pub path: Option<PathBuf>,

    /// Operator/business name
    #[arg(long, short = 'n', default_value = "Autotrasporti")]
    pub name: String,

    /// Default margin rate for new quotes (percent)
    #[arg(long, default_value_t = DEFAULT_MARGIN_RATE)]
    pub margin: f64,

    /// Re-seed an existing project with defaults
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs) -> Result<()> {
    let root = match args.path {
        Some(path) => {
            std::fs::create_dir_all(&path).into_diagnostic()?;
            path
        }
        None => std::env::current_dir().into_diagnostic()?,
    };

    let config = ProjectConfig {
        name: args.name,
        default_margin_rate: args.margin,
    };
    let project = Project::init(&root, config, args.force)?;

    println!(
        "{} Initialized tqt project at {}",
        style("✓").green().bold(),
        style(project.root().display()).cyan()
    );
    println!(
        "  Seeded default truck parameters ({}) and tax settings ({}% VAT)",
        style("truck.tqt.yaml").dim(),
        project.load_tax()?.vat
    );
    println!(
        "  Adjust them with {} and {}",
        style("tqt truck set").yellow(),
        style("tqt tax set").yellow()
    );

    Ok(())
}
