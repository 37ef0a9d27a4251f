/// Rate curve applied to a transition's progress.
///
/// `Smooth` is a normalized logistic curve; the rush/slow variants are built from it the way
/// inspector scenes pace entries sliding in and out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    Linear,
    #[default]
    Smooth,
    /// Slow start, full speed at the end.
    RushInto,
    /// Full speed at the start, slow finish.
    RushFrom,
    SlowInto,
    /// Two `Smooth` halves back to back.
    DoubleSmooth,
}

const INFLECTION: f64 = 10.0;

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

fn smooth(t: f64) -> f64 {
    let err = sigmoid(-INFLECTION / 2.0);
    ((sigmoid(INFLECTION * (t - 0.5)) - err) / (1.0 - 2.0 * err)).clamp(0.0, 1.0)
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Smooth => smooth(t),
            Self::RushInto => 2.0 * smooth(t / 2.0),
            Self::RushFrom => 2.0 * smooth(t / 2.0 + 0.5) - 1.0,
            Self::SlowInto => (1.0 - (1.0 - t) * (1.0 - t)).sqrt(),
            Self::DoubleSmooth => {
                if t < 0.5 {
                    0.5 * smooth(2.0 * t)
                } else {
                    0.5 * (1.0 + smooth(2.0 * t - 1.0))
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
