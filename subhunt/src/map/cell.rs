// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use std::fmt;

use serde::{Deserialize, Serialize};

/// A cell of the map, addressed by 0-indexed `row` and `col`. Serialized as a
/// `[row, col]` pair.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(from = "(usize, usize)", into = "(usize, usize)")]
pub struct Cell {
    /// Vertical position of the cell, growing southwards.
    pub row: usize,
    /// Horizontal position of the cell, growing eastwards.
    pub col: usize,
}

impl Cell {
    /// Construct a [`Cell`] from the given `row` and `col`.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Taxicab distance between two cells.
    pub fn manhattan(&self, other: &Cell) -> usize {
        diff(self.row, other.row) + diff(self.col, other.col)
    }

    /// King-move distance between two cells. Cells sharing only a corner are at
    /// distance 1.
    pub fn chebyshev(&self, other: &Cell) -> usize {
        diff(self.row, other.row).max(diff(self.col, other.col))
    }
}

fn diff(a: usize, b: usize) -> usize {
    if a > b {
        a - b
    } else {
        b - a
    }
}

impl From<(usize, usize)> for Cell {
    /// Construct a [`Cell`] from the given `(row, col)` pair.
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl From<Cell> for (usize, usize) {
    /// Convert the [`Cell`] into a `(row, col)` pair.
    fn from(cell: Cell) -> Self {
        (cell.row, cell.col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
