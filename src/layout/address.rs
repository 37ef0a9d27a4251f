use crate::foundation::error::{VarScopeError, VarScopeResult};

/// Columns in grid mode.
pub const GRID_COLUMNS: usize = 2;

/// Where an entry lives inside its scope.
///
/// Serialized as a bare index (`3`) in stack mode and a `[row, col]` pair in grid mode.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(untagged)]
pub enum Address {
    Stack(usize),
    Grid(usize, usize),
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stack(i) => write!(f, "{i}"),
            Self::Grid(row, col) => write!(f, "({row}, {col})"),
        }
    }
}

/// How a scope addresses its entries: one column, or a fixed two-column grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum Arrangement {
    #[default]
    Stack,
    Grid,
}

impl Arrangement {
    pub fn vars_per_row(self) -> usize {
        match self {
            Self::Stack => 1,
            Self::Grid => GRID_COLUMNS,
        }
    }

    /// Address an entry gets when the caller does not pick one: fill in creation order.
    pub fn next_address(self, count: usize) -> Address {
        match self {
            Self::Stack => Address::Stack(count),
            Self::Grid => Address::Grid(count / GRID_COLUMNS, count % GRID_COLUMNS),
        }
    }

    /// Rejects addresses whose shape does not fit this arrangement.
    pub fn check(self, address: Address) -> VarScopeResult<()> {
        match (self, address) {
            (Self::Stack, Address::Stack(_)) => Ok(()),
            (Self::Grid, Address::Grid(_, col)) if col < GRID_COLUMNS => Ok(()),
            (Self::Grid, Address::Grid(_, col)) => Err(VarScopeError::layout(format!(
                "grid column {col} out of range (grid has {GRID_COLUMNS} columns)"
            ))),
            (Self::Stack, Address::Grid(..)) => Err(VarScopeError::layout(format!(
                "stack scope takes an index address, got {address}"
            ))),
            (Self::Grid, Address::Stack(_)) => Err(VarScopeError::layout(format!(
                "grid scope takes a (row, col) address, got {address}"
            ))),
        }
    }
}

impl TryFrom<usize> for Arrangement {
    type Error = VarScopeError;

    fn try_from(vars_per_row: usize) -> Result<Self, Self::Error> {
        match vars_per_row {
            1 => Ok(Self::Stack),
            GRID_COLUMNS => Ok(Self::Grid),
            n => Err(VarScopeError::validation(format!(
                "vars_per_row must be 1 or {GRID_COLUMNS} (got {n})"
            ))),
        }
    }
}

impl From<Arrangement> for usize {
    fn from(a: Arrangement) -> Self {
        a.vars_per_row()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/address.rs"]
mod tests;
