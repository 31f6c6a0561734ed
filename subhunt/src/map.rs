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

//! The static ocean: grid dimensions, islands and the cell to sector mapping.
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

pub use self::{cell::Cell, errors::MapError, settings::MapSettings};

mod cell;
mod errors;
mod settings;

/// One of the four cardinal headings. Also names the sections of the engineering
/// board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// All directions, in engineering board section order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Position of this direction in [`Direction::ALL`].
    pub fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::South => 1,
            Direction::East => 2,
            Direction::West => 3,
        }
    }

    /// Heading pointing the other way.
    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Lowercase name of the direction.
    pub fn name(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Error returned when parsing an unknown direction name.
#[derive(Debug, thiserror::Error)]
#[error("invalid direction {0:?}, choose \"north\", \"south\", \"east\" or \"west\"")]
pub struct ParseDirectionError(String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    /// Accepts full names and single letter abbreviations, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "north" | "n" => Ok(Direction::North),
            "south" | "s" => Ok(Direction::South),
            "east" | "e" => Ok(Direction::East),
            "west" | "w" => Ok(Direction::West),
            _ => Err(ParseDirectionError(s.to_owned())),
        }
    }
}

/// A validated map. Immutable once built.
#[derive(Debug, Clone)]
pub struct Map {
    /// Settings the map was built from, retained for serialization.
    settings: MapSettings,
    /// Row-major island mask.
    islands: Box<[bool]>,
}

impl Map {
    /// Build a map from settings, validating dimensions and island positions.
    pub fn new(settings: MapSettings) -> Result<Self, MapError> {
        let MapSettings {
            rows,
            cols,
            sector_size,
            ..
        } = settings;
        if rows == 0 || cols == 0 {
            return Err(MapError::ZeroSize { rows, cols });
        }
        let total = rows
            .checked_mul(cols)
            .ok_or(MapError::TooLarge { rows, cols })?;
        if sector_size == 0 {
            return Err(MapError::ZeroSectorSize);
        }
        if sector_size > rows.max(cols) {
            return Err(MapError::SectorTooLarge {
                sector_size,
                rows,
                cols,
            });
        }
        let mut islands = vec![false; total].into_boxed_slice();
        for island in settings.islands.iter() {
            if island.row >= rows || island.col >= cols {
                return Err(MapError::IslandOutOfBounds(*island));
            }
            islands[island.row * cols + island.col] = true;
        }
        Ok(Self { settings, islands })
    }

    /// Island-free map of the given size.
    pub fn open(rows: usize, cols: usize, sector_size: usize) -> Result<Self, MapError> {
        Self::new(MapSettings::open(rows, cols, sector_size))
    }

    /// The settings this map was built from.
    pub fn settings(&self) -> &MapSettings {
        &self.settings
    }

    pub fn name(&self) -> &str {
        &self.settings.name
    }

    pub fn rows(&self) -> usize {
        self.settings.rows
    }

    pub fn cols(&self) -> usize {
        self.settings.cols
    }

    pub fn sector_size(&self) -> usize {
        self.settings.sector_size
    }

    /// Convert a cell to its row-major index. Returns `None` if the cell is out of
    /// bounds.
    fn try_linearize(&self, cell: &Cell) -> Option<usize> {
        if self.in_bounds(cell) {
            Some(cell.row * self.cols() + cell.col)
        } else {
            None
        }
    }

    /// Check if the cell lies within the grid.
    pub fn in_bounds(&self, cell: &Cell) -> bool {
        cell.row < self.rows() && cell.col < self.cols()
    }

    /// Check if the cell is an island. Cells outside the grid are not islands.
    pub fn is_island(&self, cell: &Cell) -> bool {
        self.try_linearize(cell)
            .map_or(false, |idx| self.islands[idx])
    }

    /// Check if a submarine could ever occupy the cell: in bounds and not an island.
    pub fn is_water(&self, cell: &Cell) -> bool {
        self.try_linearize(cell)
            .map_or(false, |idx| !self.islands[idx])
    }

    /// Iterate over all island cells in row-major order.
    pub fn islands(&self) -> impl '_ + Iterator<Item = Cell> {
        let cols = self.cols();
        self.islands
            .iter()
            .enumerate()
            .filter(|&(_, &island)| island)
            .map(move |(idx, _)| Cell::new(idx / cols, idx % cols))
    }

    /// Number of sectors in one band of sectors, rounding partial sectors up.
    pub fn sectors_per_row(&self) -> usize {
        ceil_div(self.cols(), self.sector_size())
    }

    /// Total number of sectors. Sector numbers run from 1 to this value.
    pub fn sector_count(&self) -> usize {
        ceil_div(self.rows(), self.sector_size()) * self.sectors_per_row()
    }

    /// 1-indexed sector containing the cell.
    pub fn sector_of(&self, cell: &Cell) -> usize {
        let size = self.sector_size();
        (cell.row / size) * self.sectors_per_row() + cell.col / size + 1
    }

    /// Check if the number names a sector of this map.
    pub fn has_sector(&self, sector: usize) -> bool {
        sector >= 1 && sector <= self.sector_count()
    }

    /// The neighbouring cell in the given direction, if it is still in bounds. Does
    /// not consider islands.
    pub fn step(&self, cell: Cell, dir: Direction) -> Option<Cell> {
        let next = match dir {
            Direction::North => Cell::new(cell.row.checked_sub(1)?, cell.col),
            Direction::South => Cell::new(cell.row + 1, cell.col),
            Direction::West => Cell::new(cell.row, cell.col.checked_sub(1)?),
            Direction::East => Cell::new(cell.row, cell.col + 1),
        };
        if self.in_bounds(&next) {
            Some(next)
        } else {
            None
        }
    }

    /// Iterate the in-bounds cardinal neighbours of a cell together with the
    /// direction leading to them.
    pub fn neighbors(&self, cell: Cell) -> impl '_ + Iterator<Item = (Direction, Cell)> {
        Direction::ALL
            .iter()
            .filter_map(move |&dir| self.step(cell, dir).map(|next| (dir, next)))
    }

    /// Get an iterator over rows of this grid. Each row is an iterator over the cells
    /// of that row.
    pub fn iter_cells(&self) -> impl Iterator<Item = impl Iterator<Item = Cell>> {
        let cols = self.cols();
        (0..self.rows()).map(move |row| (0..cols).map(move |col| Cell::new(row, col)))
    }
}

impl Default for Map {
    /// The built-in map. Its settings are known to be valid.
    fn default() -> Self {
        match Self::new(MapSettings::default()) {
            Ok(map) => map,
            Err(err) => unreachable!("built-in map is invalid: {}", err),
        }
    }
}

fn ceil_div(a: usize, b: usize) -> usize {
    a / b + usize::from(a % b != 0)
}

/// Spreadsheet style label for a column: `A` to `Z`, then `AA`, `AB` and so on.
pub fn column_label(col: usize) -> String {
    let mut label = Vec::new();
    let mut n = col + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        label.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    label.reverse();
    String::from_utf8_lossy(&label).into_owned()
}
