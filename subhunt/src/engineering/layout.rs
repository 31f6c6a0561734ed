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

//! Fixed wiring of the engineering board. Sections are indexed by
//! [`Direction::index`][crate::map::Direction::index]: north, south, east, west.
use crate::systems::Color::{self, Green, Radiation, Red, Yellow};

/// Number of nodes in one direction section.
pub const NODES_PER_SECTION: usize = 6;

/// Number of direction sections.
pub const SECTIONS: usize = 4;

/// Identifier of a circuit, 1 to 3.
pub type CircuitId = u8;

/// Static description of a single node.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct NodeSpec {
    pub color: Color,
    pub circuit: Option<CircuitId>,
}

const fn node(color: Color, circuit: Option<CircuitId>) -> NodeSpec {
    NodeSpec { color, circuit }
}

pub const LAYOUT: [[NodeSpec; NODES_PER_SECTION]; SECTIONS] = [
    // north
    [
        node(Red, Some(1)),
        node(Yellow, Some(2)),
        node(Green, Some(3)),
        node(Red, None),
        node(Yellow, None),
        node(Radiation, None),
    ],
    // south
    [
        node(Green, Some(1)),
        node(Red, Some(2)),
        node(Yellow, Some(3)),
        node(Yellow, None),
        node(Green, None),
        node(Radiation, None),
    ],
    // east
    [
        node(Yellow, Some(1)),
        node(Red, Some(2)),
        node(Green, Some(3)),
        node(Red, None),
        node(Green, None),
        node(Radiation, None),
    ],
    // west
    [
        node(Yellow, Some(1)),
        node(Red, Some(2)),
        node(Green, Some(3)),
        node(Green, None),
        node(Red, None),
        node(Radiation, None),
    ],
];

/// Member nodes of each circuit as `(section, index)`, indexed by `circuit - 1`.
pub const CIRCUITS: [[(usize, usize); SECTIONS]; 3] = [
    [(0, 0), (1, 0), (2, 0), (3, 0)],
    [(0, 1), (1, 1), (2, 1), (3, 1)],
    [(0, 2), (1, 2), (2, 2), (3, 2)],
];

/// The radiation node of every section as `(section, index)`.
pub const RADIATION: [(usize, usize); SECTIONS] = [(0, 5), (1, 5), (2, 5), (3, 5)];
