//! Project directory - plain-text storage for truck, tax, and quote records
//!
//! A project is a directory holding one `tqt.yaml` config, one truck
//! parameter file, one tax settings file, and a `quotes/` directory with one
//! YAML file per saved quote. The store assigns quote identities, creation
//! timestamps, and the initial `pending` status; the calculation engine never
//! sees any of that.

use chrono::Utc;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

use crate::core::pricing::DEFAULT_MARGIN_RATE;
use crate::entities::quote::{QuoteDetails, QuoteRecord, QuoteStatus};
use crate::entities::tax::TaxSettings;
use crate::entities::truck::TruckParameters;
use crate::yaml::{parse_yaml_file, write_yaml_file, YamlError};

/// Project marker/config file name
pub const CONFIG_FILE: &str = "tqt.yaml";

/// Truck parameters file name
pub const TRUCK_FILE: &str = "truck.tqt.yaml";

/// Tax settings file name
pub const TAX_FILE: &str = "tax.tqt.yaml";

/// Directory holding saved quotes
pub const QUOTES_DIR: &str = "quotes";

/// Errors from project discovery and storage
#[derive(Debug, Error, Diagnostic)]
pub enum ProjectError {
    #[error("not inside a tqt project (no {CONFIG_FILE} found in this or any parent directory)")]
    #[diagnostic(
        code(tqt::project::not_found),
        help("run `tqt init` to create a project here")
    )]
    NotFound,

    #[error("a tqt project already exists at {0}")]
    #[diagnostic(code(tqt::project::already_exists), help("pass --force to re-seed it"))]
    AlreadyExists(PathBuf),

    #[error("quote {0} not found")]
    #[diagnostic(code(tqt::project::quote_not_found))]
    QuoteNotFound(u32),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Yaml(#[from] YamlError),

    #[error(transparent)]
    #[diagnostic(code(tqt::project::io))]
    Io(#[from] std::io::Error),
}

/// Project-level configuration stored in `tqt.yaml`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Operator/business name
    pub name: String,

    /// Margin rate applied to new quotes unless overridden (percent)
    #[serde(default = "default_margin_rate")]
    pub default_margin_rate: f64,
}

fn default_margin_rate() -> f64 {
    DEFAULT_MARGIN_RATE
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: "Autotrasporti".to_string(),
            default_margin_rate: DEFAULT_MARGIN_RATE,
        }
    }
}

/// Handle to an initialized project directory
#[derive(Debug)]
pub struct Project {
    root: PathBuf,
    config: ProjectConfig,
}

impl Project {
    /// Create a new project at `root`, seeding default truck parameters and
    /// tax settings. Fails if the directory already holds a project, unless
    /// `force` re-seeds it.
    pub fn init(root: &Path, config: ProjectConfig, force: bool) -> Result<Self, ProjectError> {
        let config_path = root.join(CONFIG_FILE);
        if config_path.exists() && !force {
            return Err(ProjectError::AlreadyExists(root.to_path_buf()));
        }

        std::fs::create_dir_all(root.join(QUOTES_DIR))?;
        write_yaml_file(&config_path, &config)?;
        write_yaml_file(&root.join(TRUCK_FILE), &TruckParameters::default())?;
        write_yaml_file(&root.join(TAX_FILE), &TaxSettings::default())?;

        Ok(Self {
            root: root.to_path_buf(),
            config,
        })
    }

    /// Find the project containing `start`, walking up parent directories
    pub fn find(start: &Path) -> Result<Self, ProjectError> {
        let mut dir = Some(start);
        while let Some(d) = dir {
            let config_path = d.join(CONFIG_FILE);
            if config_path.is_file() {
                let config: ProjectConfig = parse_yaml_file(&config_path)?;
                return Ok(Self {
                    root: d.to_path_buf(),
                    config,
                });
            }
            dir = d.parent();
        }
        Err(ProjectError::NotFound)
    }

    /// Find the project containing the current working directory
    pub fn discover() -> Result<Self, ProjectError> {
        let cwd = std::env::current_dir()?;
        Self::find(&cwd)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    /// Load the truck parameters record
    pub fn load_truck(&self) -> Result<TruckParameters, ProjectError> {
        Ok(parse_yaml_file(&self.root.join(TRUCK_FILE))?)
    }

    /// Overwrite the truck parameters record
    pub fn save_truck(&self, truck: &TruckParameters) -> Result<(), ProjectError> {
        Ok(write_yaml_file(&self.root.join(TRUCK_FILE), truck)?)
    }

    /// Load the tax settings record
    pub fn load_tax(&self) -> Result<TaxSettings, ProjectError> {
        Ok(parse_yaml_file(&self.root.join(TAX_FILE))?)
    }

    /// Overwrite the tax settings record
    pub fn save_tax(&self, tax: &TaxSettings) -> Result<(), ProjectError> {
        Ok(write_yaml_file(&self.root.join(TAX_FILE), tax)?)
    }

    fn quote_path(&self, id: u32) -> PathBuf {
        self.root.join(QUOTES_DIR).join(format!("Q-{:04}.tqt.yaml", id))
    }

    /// Persist a computed quote, assigning the next sequential id, the
    /// creation timestamp, and the initial `pending` status.
    pub fn save_quote(&self, details: QuoteDetails) -> Result<QuoteRecord, ProjectError> {
        let next_id = self
            .list_quotes()?
            .iter()
            .map(|q| q.id)
            .max()
            .map_or(1, |max| max + 1);

        let record = QuoteRecord {
            id: next_id,
            status: QuoteStatus::Pending,
            created: Utc::now(),
            details,
        };
        write_yaml_file(&self.quote_path(record.id), &record)?;
        Ok(record)
    }

    /// Load all quotes, sorted by id
    pub fn list_quotes(&self) -> Result<Vec<QuoteRecord>, ProjectError> {
        let quotes_dir = self.root.join(QUOTES_DIR);
        if !quotes_dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut quotes = Vec::new();
        for entry in WalkDir::new(&quotes_dir)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if entry.file_type().is_file()
                && entry.path().to_string_lossy().ends_with(".tqt.yaml")
            {
                let record: QuoteRecord = parse_yaml_file(entry.path())?;
                quotes.push(record);
            }
        }
        quotes.sort_by_key(|q| q.id);
        Ok(quotes)
    }

    /// Load one quote by id
    pub fn get_quote(&self, id: u32) -> Result<QuoteRecord, ProjectError> {
        let path = self.quote_path(id);
        if !path.is_file() {
            return Err(ProjectError::QuoteNotFound(id));
        }
        Ok(parse_yaml_file(&path)?)
    }

    /// Transition a quote to a new status
    pub fn update_quote_status(
        &self,
        id: u32,
        status: QuoteStatus,
    ) -> Result<QuoteRecord, ProjectError> {
        let mut record = self.get_quote(id)?;
        record.status = status;
        write_yaml_file(&self.quote_path(id), &record)?;
        Ok(record)
    }

    /// Remove a quote file
    pub fn delete_quote(&self, id: u32) -> Result<(), ProjectError> {
        let path = self.quote_path(id);
        if !path.is_file() {
            return Err(ProjectError::QuoteNotFound(id));
        }
        std::fs::remove_file(path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pricing::calculate_quote;
    use crate::entities::trip::{RoadType, Trip};

    fn sample_trip() -> Trip {
        Trip {
            origin: "Milano".to_string(),
            destination: "Verona".to_string(),
            distance: 160.0,
            hours: 2.5,
            road_type: RoadType::Autostrada,
            load_unload_hours: 1.0,
            has_vat: true,
        }
    }

    fn sample_details() -> QuoteDetails {
        calculate_quote(
            &TruckParameters::default(),
            &TaxSettings::default(),
            &sample_trip(),
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_init_seeds_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let project = Project::init(tmp.path(), ProjectConfig::default(), false).unwrap();

        assert_eq!(project.load_truck().unwrap(), TruckParameters::default());
        assert_eq!(project.load_tax().unwrap(), TaxSettings::default());
        assert!(project.list_quotes().unwrap().is_empty());
    }

    #[test]
    fn test_init_refuses_existing_project() {
        let tmp = tempfile::tempdir().unwrap();
        Project::init(tmp.path(), ProjectConfig::default(), false).unwrap();

        let err = Project::init(tmp.path(), ProjectConfig::default(), false).unwrap_err();
        assert!(matches!(err, ProjectError::AlreadyExists(_)));

        // --force re-seeds
        Project::init(tmp.path(), ProjectConfig::default(), true).unwrap();
    }

    #[test]
    fn test_find_from_nested_directory() {
        let tmp = tempfile::tempdir().unwrap();
        Project::init(tmp.path(), ProjectConfig::default(), false).unwrap();

        let nested = tmp.path().join("a/b");
        std::fs::create_dir_all(&nested).unwrap();
        let project = Project::find(&nested).unwrap();
        assert_eq!(project.root(), tmp.path());
    }

    #[test]
    fn test_find_fails_outside_project() {
        let tmp = tempfile::tempdir().unwrap();
        let err = Project::find(tmp.path()).unwrap_err();
        assert!(matches!(err, ProjectError::NotFound));
    }

    #[test]
    fn test_save_quote_assigns_sequential_ids() {
        let tmp = tempfile::tempdir().unwrap();
        let project = Project::init(tmp.path(), ProjectConfig::default(), false).unwrap();

        let first = project.save_quote(sample_details()).unwrap();
        let second = project.save_quote(sample_details()).unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.status, QuoteStatus::Pending);
        assert_eq!(project.list_quotes().unwrap().len(), 2);
    }

    #[test]
    fn test_ids_are_not_reused_after_delete_of_lower_id() {
        let tmp = tempfile::tempdir().unwrap();
        let project = Project::init(tmp.path(), ProjectConfig::default(), false).unwrap();

        project.save_quote(sample_details()).unwrap();
        project.save_quote(sample_details()).unwrap();
        project.delete_quote(1).unwrap();

        let third = project.save_quote(sample_details()).unwrap();
        assert_eq!(third.id, 3);
    }

    #[test]
    fn test_status_lifecycle() {
        let tmp = tempfile::tempdir().unwrap();
        let project = Project::init(tmp.path(), ProjectConfig::default(), false).unwrap();

        let record = project.save_quote(sample_details()).unwrap();
        assert_eq!(record.status, QuoteStatus::Pending);

        let confirmed = project
            .update_quote_status(record.id, QuoteStatus::Confirmed)
            .unwrap();
        assert_eq!(confirmed.status, QuoteStatus::Confirmed);

        let reloaded = project.get_quote(record.id).unwrap();
        assert_eq!(reloaded.status, QuoteStatus::Confirmed);
        assert_eq!(reloaded.details, record.details);
    }

    #[test]
    fn test_missing_quote_is_a_typed_error() {
        let tmp = tempfile::tempdir().unwrap();
        let project = Project::init(tmp.path(), ProjectConfig::default(), false).unwrap();

        assert!(matches!(
            project.get_quote(99).unwrap_err(),
            ProjectError::QuoteNotFound(99)
        ));
        assert!(matches!(
            project.update_quote_status(99, QuoteStatus::Rejected).unwrap_err(),
            ProjectError::QuoteNotFound(99)
        ));
        assert!(matches!(
            project.delete_quote(99).unwrap_err(),
            ProjectError::QuoteNotFound(99)
        ));
    }

    #[test]
    fn test_truck_update_roundtrip() {
        let tmp = tempfile::tempdir().unwrap();
        let project = Project::init(tmp.path(), ProjectConfig::default(), false).unwrap();

        let mut truck = project.load_truck().unwrap();
        truck.fuel_cost = 0.55;
        project.save_truck(&truck).unwrap();

        assert_eq!(project.load_truck().unwrap().fuel_cost, 0.55);
    }
}
