//! Reinforcement Layout
//!
//! Bars on each face of the beam are entered as up to six layers of
//! `(diameter, count)`, ordered from the face inward. A blank entry (zero
//! diameter and zero count) ends the list, the way an empty row ends the
//! table on the input form.
//!
//! ## Centroid Rule
//!
//! Each layer's depth follows [`layer_centroid_depths`]; the face centroid is
//! the area-weighted mean of the layer depths.
//!
//! - Tension face: at least one layer with non-zero area is required.
//! - Compression face: may be empty, in which case its centroid is 0.

use serde::{Deserialize, Serialize};

use crate::equations::section::layer_centroid_depths;
use crate::errors::{CalcError, CalcResult};
use crate::materials::bar_area_mm2;

/// Maximum number of bar layers per face
pub const MAX_LAYERS_PER_FACE: usize = 6;

/// Face of the section a layout belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Face {
    Tension,
    Compression,
}

impl Face {
    pub fn display_name(&self) -> &'static str {
        match self {
            Face::Tension => "tension",
            Face::Compression => "compression",
        }
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One layer of identical bars.
///
/// ## JSON Example
///
/// ```json
/// { "diameter_mm": 20.0, "count": 6 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarLayer {
    /// Bar diameter φ (mm)
    pub diameter_mm: f64,
    /// Number of bars in the layer
    pub count: u32,
}

impl BarLayer {
    pub fn new(diameter_mm: f64, count: u32) -> Self {
        BarLayer { diameter_mm, count }
    }

    /// A blank row terminates the layer list
    pub fn is_blank(&self) -> bool {
        self.diameter_mm == 0.0 && self.count == 0
    }

    /// Layer area n·π·φ²/4 (mm²)
    pub fn area_mm2(&self) -> f64 {
        bar_area_mm2(self.diameter_mm) * f64::from(self.count)
    }

    /// Short bar notation, e.g. "6H20"
    pub fn designation(&self) -> String {
        format!("{}H{}", self.count, self.diameter_mm)
    }
}

/// Per-layer breakdown of a centroid calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayerResult {
    pub diameter_mm: f64,
    pub count: u32,
    /// Area of the layer (mm²)
    pub area_mm2: f64,
    /// Depth from the face to the layer centre (mm)
    pub depth_mm: f64,
}

/// Total area and centroid depth of one face's bars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CentroidResult {
    pub face: Face,
    /// Σ layer areas (mm²)
    pub total_area_mm2: f64,
    /// Area-weighted centroid depth from the face (mm); 0 for an empty face
    pub centroid_mm: f64,
    pub layers: Vec<LayerResult>,
}

impl CentroidResult {
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

/// Validated bar layers of one face.
#[derive(Debug, Clone, PartialEq)]
pub struct ReinforcementLayout {
    face: Face,
    layers: Vec<BarLayer>,
}

impl ReinforcementLayout {
    /// Build a layout from form rows, stopping at the first blank row.
    ///
    /// # Errors
    ///
    /// * `InvalidInput` if more than [`MAX_LAYERS_PER_FACE`] layers precede the blank
    /// * `NonPositiveValue` if a present layer has a non-positive diameter or zero count
    pub fn from_layers(face: Face, rows: &[BarLayer]) -> CalcResult<Self> {
        let layers: Vec<BarLayer> = rows.iter().copied().take_while(|row| !row.is_blank()).collect();

        if layers.len() > MAX_LAYERS_PER_FACE {
            return Err(CalcError::invalid_input(
                format!("{}_layers", face.display_name()),
                layers.len().to_string(),
                format!("At most {} layers per face", MAX_LAYERS_PER_FACE),
            ));
        }

        for (i, layer) in layers.iter().enumerate() {
            if !layer.diameter_mm.is_finite() || layer.diameter_mm <= 0.0 {
                return Err(CalcError::non_positive(
                    format!("{}_layers[{}].diameter_mm", face.display_name(), i),
                    layer.diameter_mm,
                    "Bar diameter must be positive",
                ));
            }
            if layer.count == 0 {
                return Err(CalcError::non_positive(
                    format!("{}_layers[{}].count", face.display_name(), i),
                    0.0,
                    "Bar count must be positive",
                ));
            }
        }

        Ok(ReinforcementLayout { face, layers })
    }

    /// Same as [`from_layers`](Self::from_layers) for `(diameter, count)` pairs
    pub fn from_entries(face: Face, entries: &[(f64, u32)]) -> CalcResult<Self> {
        let rows: Vec<BarLayer> = entries.iter().map(|&(d, n)| BarLayer::new(d, n)).collect();
        Self::from_layers(face, &rows)
    }

    pub fn face(&self) -> Face {
        self.face
    }

    pub fn layers(&self) -> &[BarLayer] {
        &self.layers
    }

    /// Σ layer areas (mm²)
    pub fn total_area_mm2(&self) -> f64 {
        self.layers.iter().map(BarLayer::area_mm2).sum()
    }

    /// Compute total area and centroid depth.
    ///
    /// # Errors
    ///
    /// * `EmptyReinforcement` for a tension face with no layers or zero area
    pub fn centroid(&self) -> CalcResult<CentroidResult> {
        let diameters: Vec<f64> = self.layers.iter().map(|l| l.diameter_mm).collect();
        let depths = layer_centroid_depths(&diameters);

        let layers: Vec<LayerResult> = self
            .layers
            .iter()
            .zip(depths)
            .map(|(layer, depth_mm)| LayerResult {
                diameter_mm: layer.diameter_mm,
                count: layer.count,
                area_mm2: layer.area_mm2(),
                depth_mm,
            })
            .collect();

        let total_area_mm2: f64 = layers.iter().map(|l| l.area_mm2).sum();

        if total_area_mm2 <= 0.0 {
            if self.face == Face::Tension {
                return Err(CalcError::empty_reinforcement(
                    self.face.display_name(),
                    "at least one layer of tension bars is required",
                ));
            }
            return Ok(CentroidResult {
                face: self.face,
                total_area_mm2: 0.0,
                centroid_mm: 0.0,
                layers,
            });
        }

        let first_moment: f64 = layers.iter().map(|l| l.area_mm2 * l.depth_mm).sum();

        Ok(CentroidResult {
            face: self.face,
            total_area_mm2,
            centroid_mm: first_moment / total_area_mm2,
            layers,
        })
    }
}
