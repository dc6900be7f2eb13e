//! # Project Data Structures
//!
//! The `Project` struct groups several beam designs under one job, with
//! shared defaults for new beams. Projects serialize to human-readable JSON.
//!
//! ## Structure
//!
//! ```text
//! Project
//! ├── meta: ProjectMetadata (version, engineer, job info, timestamps)
//! ├── settings: GlobalSettings (design code, default materials)
//! └── items: HashMap<Uuid, CalculationItem> (all calculations)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use rcbeam_core::project::Project;
//!
//! let project = Project::new("Jane Engineer", "25-042", "ACME Corp");
//! let json = serde_json::to_string_pretty(&project).unwrap();
//! assert!(json.contains("EN 1992-1-1"));
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::calculations::bending::{DesignMoment, DEFAULT_REDISTRIBUTION_PERCENT};
use crate::calculations::{CalculationItem, CalculationOutput, RcBeamInput};
use crate::errors::CalcResult;
use crate::materials::{ConcreteClass, MaterialOverrides};
use crate::reinforcement::BarLayer;
use crate::section::SectionGeometry;

/// Current schema version for project files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root project container.
///
/// Items are stored in a flat UUID-keyed map for O(1) lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Project metadata (version, engineer, job info)
    pub meta: ProjectMetadata,

    /// Global settings (design code, default materials)
    #[serde(default)]
    pub settings: GlobalSettings,

    /// All calculation items, keyed by UUID
    #[serde(default)]
    pub items: HashMap<Uuid, CalculationItem>,
}

impl Project {
    /// Create a new empty project.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rcbeam_core::project::Project;
    ///
    /// let project = Project::new("John Doe", "25-001", "Client Corp");
    /// assert_eq!(project.meta.engineer, "John Doe");
    /// ```
    pub fn new(engineer: impl Into<String>, job_id: impl Into<String>, client: impl Into<String>) -> Self {
        let now = Utc::now();
        Project {
            meta: ProjectMetadata {
                version: SCHEMA_VERSION.to_string(),
                engineer: engineer.into(),
                job_id: job_id.into(),
                client: client.into(),
                created: now,
                modified: now,
            },
            settings: GlobalSettings::default(),
            items: HashMap::new(),
        }
    }

    /// Add a calculation item to the project.
    ///
    /// Returns the UUID assigned to the item.
    pub fn add_item(&mut self, item: CalculationItem) -> Uuid {
        let id = Uuid::new_v4();
        self.items.insert(id, item);
        self.touch();
        id
    }

    /// Remove a calculation item by UUID.
    ///
    /// Returns the removed item if it existed.
    pub fn remove_item(&mut self, id: &Uuid) -> Option<CalculationItem> {
        let item = self.items.remove(id);
        if item.is_some() {
            self.touch();
        }
        item
    }

    /// Get a calculation item by UUID.
    pub fn get_item(&self, id: &Uuid) -> Option<&CalculationItem> {
        self.items.get(id)
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Items sorted by label, for stable report order
    pub fn items_by_label(&self) -> Vec<(&Uuid, &CalculationItem)> {
        let mut items: Vec<_> = self.items.iter().collect();
        items.sort_by(|a, b| a.1.label().cmp(b.1.label()));
        items
    }

    /// Run every item, sorted by label.
    ///
    /// A failing item does not stop the others; its error is returned in
    /// its slot.
    pub fn calculate_all(&self) -> Vec<(Uuid, &CalculationItem, CalcResult<CalculationOutput>)> {
        self.items_by_label()
            .into_iter()
            .map(|(id, item)| {
                let output = item.calculate();
                if let Err(e) = &output {
                    warn!(label = item.label(), error = %e, "calculation failed");
                }
                (*id, item, output)
            })
            .collect()
    }
}

impl Default for Project {
    fn default() -> Self {
        Project::new("", "", "")
    }
}

/// Project metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Name of the responsible engineer
    pub engineer: String,

    /// Job/project number
    pub job_id: String,

    /// Client name
    pub client: String,

    /// When the project was created
    pub created: DateTime<Utc>,

    /// When the project was last modified
    pub modified: DateTime<Utc>,
}

/// Global project settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalSettings {
    /// Design code label shown on reports
    pub code: String,

    /// Concrete class for new beams
    pub default_concrete_class: ConcreteClass,

    /// Steel strengths and partial factors for new beams
    pub default_materials: MaterialOverrides,

    /// Moment redistribution (%) for new beams
    pub default_redistribution_percent: f64,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        GlobalSettings {
            code: "EN 1992-1-1:2004".to_string(),
            default_concrete_class: ConcreteClass::C30_37,
            default_materials: MaterialOverrides::default(),
            default_redistribution_percent: DEFAULT_REDISTRIBUTION_PERCENT,
        }
    }
}

impl GlobalSettings {
    /// New beam input seeded from the project defaults
    pub fn new_beam(
        &self,
        label: impl Into<String>,
        geometry: SectionGeometry,
        moment_knm: f64,
        tension_layers: Vec<BarLayer>,
    ) -> RcBeamInput {
        RcBeamInput {
            label: label.into(),
            concrete_class: self.default_concrete_class,
            materials: self.default_materials,
            geometry,
            moment: DesignMoment::new(moment_knm).with_redistribution(self.default_redistribution_percent),
            tension_layers,
            compression_layers: Vec::new(),
        }
    }
}
