use crate::foundation::core::Size;

/// Lowercase letters whose glyphs dip below the baseline.
pub const DESCENDERS: &str = "gjpqy";

pub fn has_descender(s: &str) -> bool {
    s.chars().any(|c| DESCENDERS.contains(c))
}

/// Size oracle for rendered text.
///
/// The rendering engine owns fonts and shaping; layout only needs the extents of a rendered
/// string at a given font size.
pub trait TextMeasure {
    fn measure(&self, text: &str, font_size: f64) -> Size;
}

/// Headless measurer for monospace fonts: every glyph advances by the same fraction of an em.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MonospaceMeasure {
    /// Scene units per font point.
    pub units_per_point: f64,
    /// Glyph advance, in ems.
    pub advance_em: f64,
    /// Height above the baseline, in ems.
    pub ascent_em: f64,
    /// Extra height when the string has descenders, in ems.
    pub descent_em: f64,
}

impl Default for MonospaceMeasure {
    fn default() -> Self {
        Self {
            units_per_point: 0.01,
            advance_em: 0.6,
            ascent_em: 0.5,
            descent_em: 0.15,
        }
    }
}

impl TextMeasure for MonospaceMeasure {
    fn measure(&self, text: &str, font_size: f64) -> Size {
        let em = font_size * self.units_per_point;
        let widest = text
            .lines()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0);
        let lines = text.lines().count().max(1);
        let descent = if has_descender(text) {
            self.descent_em
        } else {
            0.0
        };
        let line_height = (self.ascent_em + descent) * em;
        Size::new(widest as f64 * self.advance_em * em, line_height * lines as f64)
    }
}

impl<T: TextMeasure + ?Sized> TextMeasure for &T {
    fn measure(&self, text: &str, font_size: f64) -> Size {
        (**self).measure(text, font_size)
    }
}

impl<T: TextMeasure + ?Sized> TextMeasure for Box<T> {
    fn measure(&self, text: &str, font_size: f64) -> Size {
        (**self).measure(text, font_size)
    }
}
