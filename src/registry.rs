use crate::{ApplyReport, Error, Operation, Result, Volume};

use indexmap::IndexMap;
use log::info;

const CONTRAST_SCRIPTS: [(&str, f32); 4] = [
    ("Increase contrast (by 20%)", 1.2),
    ("Increase contrast (by 50%)", 1.5),
    ("Decrease contrast (by 20%)", 0.8),
    ("Decrease contrast (by 50%)", 0.5),
];
const LIGHTNESS_STEPS: [i32; 5] = [2, 5, 10, 20, 50];
const SATURATION_STEPS: [i32; 3] = [5, 10, 20];

/// Named operations, listed in registration order.
#[derive(Clone, Debug, Default)]
pub struct ScriptRegistry {
    scripts: IndexMap<String, Operation>,
}

impl ScriptRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock scripts: dead voxel handling, contrast, darken/lighten and saturate/desaturate.
    pub fn builtin() -> Self {
        let mut scripts = IndexMap::new();
        scripts.insert(
            "Add dead voxels (beneath lowest z)".to_string(),
            Operation::AddDeadVoxels,
        );
        scripts.insert("Remove dead voxels".to_string(), Operation::RemoveDeadVoxels);
        for (name, factor) in CONTRAST_SCRIPTS.iter() {
            scripts.insert(name.to_string(), Operation::Contrast { factor: *factor });
        }
        for step in LIGHTNESS_STEPS.iter() {
            scripts.insert(
                format!("Darken (by {})", step),
                Operation::Lighten { amount: -step },
            );
        }
        for step in LIGHTNESS_STEPS.iter() {
            scripts.insert(
                format!("Lighten (by {})", step),
                Operation::Lighten { amount: *step },
            );
        }
        for step in SATURATION_STEPS.iter() {
            scripts.insert(
                format!("Saturate (by {})", step),
                Operation::Saturate { amount: *step },
            );
        }
        for step in SATURATION_STEPS.iter() {
            scripts.insert(
                format!("Desaturate (by {})", step),
                Operation::Saturate { amount: -step },
            );
        }

        ScriptRegistry { scripts }
    }

    /// Adds a script. The operation is validated up front so `execute` can't hit bad parameters.
    pub fn register(&mut self, name: impl Into<String>, operation: Operation) -> Result<()> {
        let name = name.into();
        if self.scripts.contains_key(&name) {
            return Err(Error::DuplicateScript(name));
        }
        operation.validate()?;
        self.scripts.insert(name, operation);

        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Operation> {
        self.scripts.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.scripts.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.scripts.keys().map(|k| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.scripts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty()
    }

    pub fn execute<V: Volume>(&self, name: &str, volume: &mut V) -> Result<ApplyReport> {
        let operation = self
            .get(name)
            .ok_or_else(|| Error::UnknownScript(name.to_string()))?;
        let report = operation.apply(volume);
        info!(
            "{}: changed {} of {} voxels",
            name, report.changed, report.visited
        );

        Ok(report)
    }
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝
