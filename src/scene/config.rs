use std::path::Path;

use anyhow::Context as _;

use crate::foundation::{
    error::{VarScopeError, VarScopeResult},
    math::is_non_negative_finite,
};

/// Layout constants, in scene units unless noted otherwise.
///
/// Every field has a default, so a JSON document only needs the keys it overrides.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Gap between neighbouring entry boxes (vertical, and horizontal between grid columns).
    pub entry_gap: f64,
    /// Inset of the first entry from the shelf's upper-left corner.
    pub shelf_inset: f64,
    /// Horizontal room added to the widest entry when sizing the shelf.
    pub shelf_width_margin: f64,
    /// Width of a fresh base shelf.
    pub min_shelf_width: f64,
    pub box_margin_h: f64,
    pub box_margin_v: f64,
    /// Gap between the name and the contents inside a box.
    pub name_value_gap: f64,
    /// Font size (points) of names and contents.
    pub entry_font_size: f64,
    /// Font size (points) of the area title.
    pub title_font_size: f64,
    pub title_gap: f64,
    /// Offset of a pushed scope from the previous top scope's upper-left corner.
    pub push_inset: f64,
    /// Distance beyond the camera frame's top edge where off-screen scopes park.
    pub offscreen_clearance: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            entry_gap: 0.1,
            shelf_inset: 0.1,
            shelf_width_margin: 0.2,
            min_shelf_width: 4.0,
            box_margin_h: 0.3,
            box_margin_v: 0.2,
            name_value_gap: 0.3,
            entry_font_size: 18.0,
            title_font_size: 36.0,
            title_gap: 0.1,
            push_inset: 0.09,
            offscreen_clearance: 0.1,
        }
    }
}

impl LayoutConfig {
    pub fn from_json_str(s: &str) -> VarScopeResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: &Path) -> VarScopeResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read layout config '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    pub fn validate(&self) -> VarScopeResult<()> {
        let fields = [
            ("entry_gap", self.entry_gap),
            ("shelf_inset", self.shelf_inset),
            ("shelf_width_margin", self.shelf_width_margin),
            ("min_shelf_width", self.min_shelf_width),
            ("box_margin_h", self.box_margin_h),
            ("box_margin_v", self.box_margin_v),
            ("name_value_gap", self.name_value_gap),
            ("entry_font_size", self.entry_font_size),
            ("title_font_size", self.title_font_size),
            ("title_gap", self.title_gap),
            ("push_inset", self.push_inset),
            ("offscreen_clearance", self.offscreen_clearance),
        ];
        for (name, v) in fields {
            if !is_non_negative_finite(v) {
                return Err(VarScopeError::validation(format!(
                    "layout config '{name}' must be finite and >= 0 (got {v})"
                )));
            }
        }
        if self.entry_font_size == 0.0 || self.title_font_size == 0.0 {
            return Err(VarScopeError::validation("font sizes must be > 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/config.rs"]
mod tests;
