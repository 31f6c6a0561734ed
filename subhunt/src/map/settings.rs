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

//! Serializable map configuration.
use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::map::{Cell, MapError};

/// Islands of the built-in map. Kept away from the edges so every border cell is
/// navigable.
const ALPHA_ISLANDS: [(usize, usize); 14] = [
    (2, 2),
    (2, 3),
    (3, 11),
    (4, 7),
    (6, 2),
    (6, 12),
    (7, 7),
    (8, 4),
    (9, 11),
    (10, 6),
    (11, 2),
    (11, 3),
    (12, 9),
    (12, 12),
];

/// Settings describing a map. Any field left out of a settings document takes its
/// value from [`MapSettings::default`].
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapSettings {
    /// Display name of the map.
    pub name: String,
    /// Number of rows in the grid.
    pub rows: usize,
    /// Number of columns in the grid.
    pub cols: usize,
    /// Width and height of a square sector.
    pub sector_size: usize,
    /// Impassable cells.
    pub islands: Vec<Cell>,
}

impl MapSettings {
    /// Settings for an island-free map of the given size.
    pub fn open(rows: usize, cols: usize, sector_size: usize) -> Self {
        Self {
            name: "Open Water".to_owned(),
            rows,
            cols,
            sector_size,
            islands: Vec::new(),
        }
    }

    /// Decode settings from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, MapError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decode settings from a reader producing a JSON document.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, MapError> {
        Ok(serde_json::from_reader(reader)?)
    }
}

impl Default for MapSettings {
    /// The built-in 15x15 map with 5x5 sectors.
    fn default() -> Self {
        Self {
            name: "Alpha".to_owned(),
            rows: 15,
            cols: 15,
            sector_size: 5,
            islands: ALPHA_ISLANDS.iter().copied().map(Cell::from).collect(),
        }
    }
}
