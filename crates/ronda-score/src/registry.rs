//! Model registry for discovering and instantiating built-in models.

use ronda_traits::{Result, RondaError};
use serde::Serialize;

use crate::model::ModelSpec;
use crate::models;

/// Metadata about a built-in model.
#[derive(Debug, Clone, Serialize)]
pub struct ModelInfo {
    /// Unique identifier for the model.
    pub name: &'static str,

    /// Human-readable description.
    pub description: &'static str,

    /// Component names in model order.
    pub components: &'static [&'static str],

    /// Whether the model reads fundamental ratios.
    pub requires_fundamentals: bool,
}

/// Get information about all built-in models.
#[must_use]
pub fn available_models() -> Vec<ModelInfo> {
    vec![
        ModelInfo {
            name: "quality_momentum",
            description: "Quality fundamentals blended with price momentum",
            components: &["Quality", "Momentum", "Trend"],
            requires_fundamentals: true,
        },
        ModelInfo {
            name: "trend_strength",
            description: "Multi-horizon trend persistence and stability",
            components: &["Trend", "Persistence", "Stability"],
            requires_fundamentals: false,
        },
        ModelInfo {
            name: "mean_reversion",
            description: "Short-horizon reversion with fast factor decay",
            components: &["Reversion", "Decay", "Oscillator"],
            requires_fundamentals: false,
        },
    ]
}

/// Get information about a specific model by name.
#[must_use]
pub fn get_model_info(name: &str) -> Option<ModelInfo> {
    available_models().into_iter().find(|info| info.name == name)
}

/// Instantiate a model by name.
///
/// Accepts a few common aliases alongside the canonical names.
///
/// # Errors
///
/// Returns [`RondaError::Configuration`] for an unknown model name.
pub fn create_model(name: &str) -> Result<ModelSpec> {
    match name {
        "quality_momentum" | "quality" | "qm" => models::quality_momentum(),
        "trend_strength" | "trend" | "ts" => models::trend_strength(),
        "mean_reversion" | "reversion" | "mr" => models::mean_reversion(),
        _ => Err(RondaError::Configuration(format!(
            "Unknown model: '{name}'. Use 'ronda models' to list available models."
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_available_models() {
        let infos = available_models();
        assert_eq!(infos.len(), 3);
        assert!(infos.iter().any(|i| i.name == "quality_momentum"));
    }

    #[test]
    fn test_get_model_info() {
        let info = get_model_info("trend_strength").unwrap();
        assert_eq!(info.components, &["Trend", "Persistence", "Stability"]);
        assert!(!info.requires_fundamentals);
        assert!(get_model_info("nonexistent").is_none());
    }

    #[test]
    fn test_create_model_and_aliases() {
        assert!(create_model("quality_momentum").is_ok());
        assert!(create_model("qm").is_ok());
        assert!(create_model("trend").is_ok());
        assert!(create_model("mr").is_ok());
    }

    #[test]
    fn test_create_unknown_model() {
        let result = create_model("gmm_regime");
        assert!(matches!(result, Err(RondaError::Configuration(_))));
    }

    #[test]
    fn test_registry_matches_constructors() {
        for info in available_models() {
            let model = create_model(info.name).unwrap();
            assert_eq!(model.name(), info.name);
            assert_eq!(model.component_names(), info.components);
        }
    }
}
