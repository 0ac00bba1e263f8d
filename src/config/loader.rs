//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the sheet layout
//! from a configuration directory.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::SheetLayout;

/// Name of the layout file inside a configuration directory.
pub const LAYOUT_FILE_NAME: &str = "layout.yaml";

/// Loads and provides access to the engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// └── layout.yaml   # Sheet layout descriptor (all fields optional)
/// ```
///
/// # Example
///
/// ```no_run
/// use timesheet_payroll::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Shift keyword: {}", loader.layout().shift_keyword);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    layout: SheetLayout,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if `layout.yaml` is missing, is not valid YAML, or
    /// describes a contradictory layout.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use timesheet_payroll::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/default")?;
    /// # Ok::<(), timesheet_payroll::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let layout_path = path.as_ref().join(LAYOUT_FILE_NAME);
        let layout = Self::load_yaml::<SheetLayout>(&layout_path)?;
        layout.validate()?;

        info!(
            path = %layout_path.display(),
            day_slots = layout.day_slots,
            anchors = layout.anchor_letters.len(),
            "Loaded sheet layout"
        );

        Ok(Self { layout })
    }

    /// Wraps an already constructed layout.
    pub fn from_layout(layout: SheetLayout) -> EngineResult<Self> {
        layout.validate()?;
        Ok(Self { layout })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the sheet layout.
    pub fn layout(&self) -> &SheetLayout {
        &self.layout
    }
}
