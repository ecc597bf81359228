//! Pipelines of operations read from JSON.
//!
//! ```json
//! { "steps": [
//!     { "script": "Add dead voxels (beneath lowest z)" },
//!     { "op": "adjust_colors", "hue": 15, "saturation": -10 }
//! ] }
//! ```

use crate::{ApplyReport, Error, Operation, Result, ScriptRegistry, Volume};

use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RecipeStep {
    /// Refers to a script in the registry by name.
    Script { script: String },
    Inline(Operation),
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Recipe {
    pub steps: Vec<RecipeStep>,
}

impl Recipe {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;

        Self::from_json_str(&json)
    }

    /// Looks up every step, failing on the first unknown script or invalid inline operation.
    pub fn resolve<'a>(&'a self, registry: &'a ScriptRegistry) -> Result<Vec<&'a Operation>> {
        self.steps
            .iter()
            .map(|step| match step {
                RecipeStep::Script { script } => registry
                    .get(script)
                    .ok_or_else(|| Error::UnknownScript(script.clone())),
                RecipeStep::Inline(operation) => operation.validate().map(|()| operation),
            })
            .collect()
    }

    pub fn validate(&self, registry: &ScriptRegistry) -> Result<()> {
        self.resolve(registry).map(|_| ())
    }

    /// Runs the steps in order. Nothing is applied unless every step resolves.
    pub fn apply<V: Volume>(
        &self,
        registry: &ScriptRegistry,
        volume: &mut V,
    ) -> Result<Vec<ApplyReport>> {
        let operations = self.resolve(registry)?;
        let reports = operations
            .into_iter()
            .enumerate()
            .map(|(i, operation)| {
                let report = operation.apply(volume);
                info!(
                    "step {} ({}): changed {} of {} voxels",
                    i + 1,
                    operation,
                    report.changed,
                    report.visited
                );

                report
            })
            .collect();

        Ok(reports)
    }
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ChunkedVolume, Point, Rgba, DEAD_BROWN};

    const RECIPE: &str = r#"{
        "steps": [
            { "script": "Add dead voxels (beneath lowest z)" },
            { "op": "lighten", "amount": 20 },
            { "script": "Remove dead voxels" }
        ]
    }"#;

    #[test]
    fn test_parse_mixed_steps() {
        let recipe = Recipe::from_json_str(RECIPE).unwrap();

        assert_eq!(
            recipe.steps,
            vec![
                RecipeStep::Script {
                    script: "Add dead voxels (beneath lowest z)".to_string()
                },
                RecipeStep::Inline(Operation::Lighten { amount: 20 }),
                RecipeStep::Script {
                    script: "Remove dead voxels".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_apply_runs_steps_in_order() {
        let registry = ScriptRegistry::builtin();
        let recipe = Recipe::from_json_str(RECIPE).unwrap();
        let mut volume: ChunkedVolume = vec![(Point::new(0, 0, 2), Rgba::opaque(10, 10, 10))]
            .into_iter()
            .collect();

        let reports = recipe.apply(&registry, &mut volume).unwrap();

        // Lightened dead brown no longer matches, so it survives the cleanup.
        assert_eq!(reports.iter().map(|r| r.changed).collect::<Vec<_>>(), vec![2, 3, 0]);
        assert_eq!(volume.get_at(&[0, 0, 2].into()), Rgba::opaque(30, 30, 30));
        assert_eq!(volume.get_at(&[0, 0, 0].into()), Rgba::opaque(123, 84, 60));
    }

    #[test]
    fn test_unknown_script_aborts_before_applying() {
        let registry = ScriptRegistry::builtin();
        let recipe = Recipe::from_json_str(
            r#"{"steps": [{"script": "Add dead voxels (beneath lowest z)"}, {"script": "Sharpen"}]}"#,
        )
        .unwrap();
        let mut volume: ChunkedVolume = vec![(Point::new(0, 0, 3), Rgba::opaque(1, 1, 1))]
            .into_iter()
            .collect();

        match recipe.apply(&registry, &mut volume) {
            Err(Error::UnknownScript(name)) => assert_eq!(name, "Sharpen"),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(volume.num_voxels(), 1);
        assert_ne!(volume.get_at(&[0, 0, 0].into()), DEAD_BROWN);
    }

    #[test]
    fn test_invalid_inline_step_fails_validation() {
        let registry = ScriptRegistry::builtin();
        let recipe =
            Recipe::from_json_str(r#"{"steps": [{"op": "contrast", "factor": -2.0}]}"#).unwrap();

        assert!(recipe.validate(&registry).is_err());
    }

    #[test]
    fn test_malformed_json_is_a_recipe_error() {
        match Recipe::from_json_str(r#"{"steps": [{"op": "explode"}]}"#) {
            Err(Error::Recipe(_)) => (),
            other => panic!("unexpected {:?}", other),
        }
    }
}
