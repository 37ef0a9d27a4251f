use std::fmt;

/// Numeric value as it reads in source code: integers and floats print differently.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) if v.is_nan() => f.write_str("nan"),
            Self::Float(v) if v.is_infinite() => {
                f.write_str(if v > 0.0 { "inf" } else { "-inf" })
            }
            Self::Float(v) => write_float(f, v),
        }
    }
}

/// Shortest round-trip digits; scientific notation (`1e+16`, `2.5e-05`) outside
/// `1e-4 <= |v| < 1e16`. Integral floats keep a trailing ".0" so `108.0` never reads as an int.
fn write_float(f: &mut fmt::Formatter<'_>, v: f64) -> fmt::Result {
    let sci = format!("{v:e}");
    let Some((mantissa, exp)) = sci
        .split_once('e')
        .and_then(|(m, e)| e.parse::<i32>().ok().map(|e| (m, e)))
    else {
        return write!(f, "{v}");
    };
    if v == 0.0 || (-4..16).contains(&exp) {
        if v.fract() == 0.0 {
            write!(f, "{v:.1}")
        } else {
            write!(f, "{v}")
        }
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        write!(f, "{mantissa}e{sign}{:02}", exp.unsigned_abs())
    }
}

/// Value shown in a variable box.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Value {
    Text(String),
    Number(Number),
    /// Opaque reference to a list drawn elsewhere; the label identifies it to the caller.
    ListRef(String),
}

impl Value {
    /// Contents string displayed to the right of the name.
    pub fn display(&self) -> String {
        match self {
            Self::Text(s) => format_text(s),
            Self::Number(n) => format_number(*n),
            Self::ListRef(_) => format_list_ref(),
        }
    }
}

pub fn format_text(s: &str) -> String {
    format!("\"{s}\"")
}

pub fn format_number(n: Number) -> String {
    n.to_string()
}

pub fn format_list_ref() -> String {
    "<list>".to_string()
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Number(Number::Int(v))
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Number(Number::Int(i64::from(v)))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(Number::Float(v))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/entry/value.rs"]
mod tests;
