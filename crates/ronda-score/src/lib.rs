#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Component scoring and composite aggregation.
//!
//! Features map to component sub-scores through validated band tables
//! (coarse, auditable step functions), and component scores combine into a
//! composite in [0, 1] via a fixed weight vector that must sum to one.
//! Invalid configurations fail at model construction, never per symbol.

pub mod band;
pub mod component;
pub mod model;
pub mod models;
pub mod registry;

pub use band::BandTable;
pub use component::{Component, ComponentScore};
pub use model::{ModelScore, ModelSpec, Rating, RatingTable, WEIGHT_TOLERANCE};
pub use registry::{available_models, create_model, get_model_info, ModelInfo};
