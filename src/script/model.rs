use std::path::Path;

use anyhow::Context as _;

use crate::{
    entry::value::Value,
    foundation::{
        core::{Corner, Point, Rect},
        error::{VarScopeError, VarScopeResult},
    },
    layout::address::{Address, Arrangement},
    scene::config::LayoutConfig,
};

/// A scene's worth of scope operations, replayed in order.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Script {
    #[serde(default)]
    pub config: LayoutConfig,
    #[serde(default)]
    pub area: AreaSpec,
    pub steps: Vec<Step>,
}

/// Initial placement of the variable area.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AreaSpec {
    pub vars_per_row: Arrangement,
    /// Where `corner` of the area goes; the area stays centered on the origin when absent.
    pub anchor: Option<Point>,
    pub corner: Corner,
}

impl Default for AreaSpec {
    fn default() -> Self {
        Self {
            vars_per_row: Arrangement::Stack,
            anchor: None,
            corner: Corner::UpperRight,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    /// New variable in the active scope.
    Create {
        name: String,
        value: Value,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        at: Option<Address>,
    },
    /// New value for an existing variable in the active scope.
    Update { name: String, value: Value },
    Push {
        #[serde(default)]
        initial_lines: usize,
        #[serde(default)]
        vars_per_row: Arrangement,
    },
    Pop,
    /// Extra element owned by the active scope.
    Attach { key: String, bounds: Rect },
    /// Move the whole area.
    Align { point: Point, corner: Corner },
}

impl Script {
    pub fn from_json_str(s: &str) -> VarScopeResult<Self> {
        let script: Self = serde_json::from_str(s)?;
        script.validate()?;
        Ok(script)
    }

    pub fn from_path(path: &Path) -> VarScopeResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read script '{}'", path.display()))?;
        Self::from_json_str(&s).map_err(|e| e.context(path.display()))
    }

    /// Static checks that do not need a layout pass.
    pub fn validate(&self) -> VarScopeResult<()> {
        self.config.validate()?;
        for (idx, step) in self.steps.iter().enumerate() {
            let name = match step {
                Step::Create { name, .. } | Step::Update { name, .. } => name,
                Step::Attach { key, .. } => key,
                Step::Push { .. } | Step::Pop | Step::Align { .. } => continue,
            };
            if name.trim().is_empty() {
                return Err(VarScopeError::validation(format!(
                    "step {idx}: name must not be empty"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/script/model.rs"]
mod tests;
