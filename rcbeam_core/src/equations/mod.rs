//! # Design Equations
//!
//! The closed-form equations behind the bending design, kept apart from the
//! input/result plumbing so each one can be checked against the code clause
//! it implements.
//!
//! ## Modules
//!
//! - [`flexure`] - EC2 rectangular-section bending (K, K_bal, lever arm, areas)
//! - [`section`] - Section area and bar layer geometry
//!
//! ## Sign Conventions
//!
//! - **Moment**: Positive puts the tension face in tension (sagging for a
//!   bottom tension face)
//! - **Depths**: Measured inward from the face in question
//!
//! ## References
//!
//! - EN 1992-1-1:2004 Eurocode 2: Design of concrete structures
//! - How to Design Concrete Structures using Eurocode 2 (The Concrete Centre)

pub mod flexure;
pub mod section;

pub use flexure::{
    balanced_moment,
    balanced_tension_area,
    compression_area,
    compression_steel_stress,
    k_balanced,
    lever_arm,
    max_tension_area,
    min_tension_area,
    moment_coefficient,
    redistribution_ratio,
    LeverArm,
};

pub use section::{layer_centroid_depths, layer_clear_spacing, rectangular_area};
