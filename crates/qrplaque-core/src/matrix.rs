//! Square boolean grid of QR modules.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PlaqueError, Result};

/// A square, row-major grid of QR modules, `true` meaning a filled module.
///
/// Produced by an external encoder with a zero-width quiet zone. The only
/// guarantees enforced here are a side of at least one and a square shape.
///
/// Serialized as a list of rows; deserialization applies the same checks as
/// [`ModuleMatrix::from_rows`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<bool>>", into = "Vec<Vec<bool>>")]
pub struct ModuleMatrix {
    side: usize,
    modules: Vec<bool>,
}

impl ModuleMatrix {
    /// Builds a matrix from rows, rejecting empty or non-square input.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self> {
        let side = rows.len();
        if side == 0 {
            return Err(PlaqueError::Encoding("module matrix is empty".into()));
        }

        let mut modules = Vec::with_capacity(side * side);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != side {
                return Err(PlaqueError::Encoding(format!(
                    "module matrix is not square: row {i} has {} modules, expected {side}",
                    row.len()
                )));
            }
            modules.extend(row);
        }

        Ok(Self { side, modules })
    }

    /// Parses a text grid, one row per line, `#` or `1` for filled modules.
    ///
    /// Any other character is an empty module. Blank lines are skipped.
    pub fn from_ascii(grid: &str) -> Result<Self> {
        let rows = grid
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .map(|line| line.chars().map(|c| c == '#' || c == '1').collect())
            .collect();
        Self::from_rows(rows)
    }

    /// Side length N of the N×N grid.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Returns whether the module at `(row, col)` is filled.
    ///
    /// Out-of-range positions read as empty.
    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.side && col < self.side && self.modules[row * self.side + col]
    }

    /// Number of filled modules.
    pub fn filled_count(&self) -> usize {
        self.modules.iter().filter(|&&m| m).count()
    }

    /// Iterates over the `(row, col)` positions of filled modules, row-major.
    pub fn filled(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let side = self.side;
        self.modules
            .iter()
            .enumerate()
            .filter(|(_, m)| **m)
            .map(move |(i, _)| (i / side, i % side))
    }
}

impl TryFrom<Vec<Vec<bool>>> for ModuleMatrix {
    type Error = PlaqueError;

    fn try_from(rows: Vec<Vec<bool>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl From<ModuleMatrix> for Vec<Vec<bool>> {
    fn from(matrix: ModuleMatrix) -> Self {
        matrix
            .modules
            .chunks(matrix.side)
            .map(<[bool]>::to_vec)
            .collect()
    }
}

impl fmt::Display for ModuleMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.modules.chunks(self.side) {
            for &m in row {
                f.write_str(if m { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
