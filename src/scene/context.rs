use crate::{
    foundation::{
        core::{CameraFrame, Size},
        error::VarScopeResult,
    },
    scene::{
        config::LayoutConfig,
        measure::{MonospaceMeasure, TextMeasure},
    },
};

/// Everything a layout call needs to know about the surrounding scene.
///
/// Passed explicitly into every operation instead of living in engine-global state.
pub struct SceneContext {
    pub config: LayoutConfig,
    pub frame: CameraFrame,
    measure: Box<dyn TextMeasure>,
}

impl std::fmt::Debug for SceneContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SceneContext")
            .field("config", &self.config)
            .field("frame", &self.frame)
            .finish_non_exhaustive()
    }
}

impl Default for SceneContext {
    fn default() -> Self {
        Self::headless()
    }
}

impl SceneContext {
    pub fn new(
        config: LayoutConfig,
        frame: CameraFrame,
        measure: Box<dyn TextMeasure>,
    ) -> VarScopeResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            frame,
            measure,
        })
    }

    /// Default constants, the default camera frame, and monospace measurement.
    pub fn headless() -> Self {
        Self {
            config: LayoutConfig::default(),
            frame: CameraFrame::default(),
            measure: Box::new(MonospaceMeasure::default()),
        }
    }

    pub fn with_config(config: LayoutConfig) -> VarScopeResult<Self> {
        Self::new(
            config,
            CameraFrame::default(),
            Box::new(MonospaceMeasure::default()),
        )
    }

    pub fn measure_entry_text(&self, text: &str) -> Size {
        self.measure.measure(text, self.config.entry_font_size)
    }

    pub fn measure_title(&self, text: &str) -> Size {
        self.measure.measure(text, self.config.title_font_size)
    }
}
