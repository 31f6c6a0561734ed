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

//! Errors raised while building a [`Map`][crate::map::Map].

use thiserror::Error;

use crate::map::Cell;

/// Reason why a map could not be constructed from its settings.
#[derive(Debug, Error)]
pub enum MapError {
    /// One of the dimensions was zero.
    #[error("map dimensions must be nonzero, got {rows}x{cols}")]
    ZeroSize { rows: usize, cols: usize },

    /// The total cell count does not fit in a `usize`.
    #[error("map dimensions too large: {rows} * {cols} > {}", usize::max_value())]
    TooLarge { rows: usize, cols: usize },

    /// Sectors must span at least one cell.
    #[error("sector size must be nonzero")]
    ZeroSectorSize,

    /// Sectors may not be larger than the map itself.
    #[error("sector size {sector_size} exceeds the {rows}x{cols} map")]
    SectorTooLarge {
        sector_size: usize,
        rows: usize,
        cols: usize,
    },

    /// An island was listed outside of the grid.
    #[error("island {0} lies outside of the map")]
    IslandOutOfBounds(Cell),

    /// The settings document could not be decoded.
    #[error("could not read map settings")]
    Parse(#[from] serde_json::Error),
}
