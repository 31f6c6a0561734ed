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

//! Requests a crew member can submit to the game.
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    game::Team,
    map::{Cell, Direction, Map},
    systems::System,
};

/// A single request against the game. Every action names the team submitting it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Put the submarine on its starting cell.
    Place { team: Team, cell: Cell },
    /// Captain: move one cell and announce the heading.
    Move { team: Team, direction: Direction },
    /// Captain: surface instead of moving.
    Surface { team: Team },
    /// Captain: dive after surfacing.
    Dive { team: Team },
    /// Engineer: mark a node in the section of this turn's heading.
    MarkNode {
        team: Team,
        direction: Direction,
        index: usize,
    },
    /// First mate: add one charge to a system.
    Charge { team: Team, system: System },
    FireTorpedo { team: Team, target: Cell },
    PlaceMine { team: Team, target: Cell },
    /// Detonate the mine at `index` in the team's list of laid mines.
    DetonateMine { team: Team, index: usize },
    LaunchDrone { team: Team, sector: usize },
    ActivateSonar { team: Team },
    /// Enemy captain: answer a sonar with one true and one false claim.
    RespondSonar {
        team: Team,
        claims: [SonarClaim; 2],
    },
    /// Move up to 4 cells in a straight line without announcing the heading.
    Stealth {
        team: Team,
        direction: Direction,
        steps: usize,
    },
    EndTurn { team: Team },
}

impl Action {
    /// The team submitting the action.
    pub fn team(&self) -> Team {
        match *self {
            Action::Place { team, .. }
            | Action::Move { team, .. }
            | Action::Surface { team }
            | Action::Dive { team }
            | Action::MarkNode { team, .. }
            | Action::Charge { team, .. }
            | Action::FireTorpedo { team, .. }
            | Action::PlaceMine { team, .. }
            | Action::DetonateMine { team, .. }
            | Action::LaunchDrone { team, .. }
            | Action::ActivateSonar { team }
            | Action::RespondSonar { team, .. }
            | Action::Stealth { team, .. }
            | Action::EndTurn { team } => team,
        }
    }

    /// Snake case name of the action, as used in the `action` tag.
    pub fn name(&self) -> &'static str {
        match self {
            Action::Place { .. } => "place",
            Action::Move { .. } => "move",
            Action::Surface { .. } => "surface",
            Action::Dive { .. } => "dive",
            Action::MarkNode { .. } => "mark_node",
            Action::Charge { .. } => "charge",
            Action::FireTorpedo { .. } => "fire_torpedo",
            Action::PlaceMine { .. } => "place_mine",
            Action::DetonateMine { .. } => "detonate_mine",
            Action::LaunchDrone { .. } => "launch_drone",
            Action::ActivateSonar { .. } => "activate_sonar",
            Action::RespondSonar { .. } => "respond_sonar",
            Action::Stealth { .. } => "stealth",
            Action::EndTurn { .. } => "end_turn",
        }
    }
}

/// What a sonar claim is about.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimKind {
    Row,
    Col,
    Sector,
}

impl fmt::Display for ClaimKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            ClaimKind::Row => "row",
            ClaimKind::Col => "column",
            ClaimKind::Sector => "sector",
        })
    }
}

/// One statement about the responder's position.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum SonarClaim {
    Row(usize),
    Col(usize),
    /// 1-indexed sector number.
    Sector(usize),
}

impl SonarClaim {
    pub fn kind(&self) -> ClaimKind {
        match self {
            SonarClaim::Row(_) => ClaimKind::Row,
            SonarClaim::Col(_) => ClaimKind::Col,
            SonarClaim::Sector(_) => ClaimKind::Sector,
        }
    }

    /// Whether the claim is true for a submarine at `cell`.
    pub fn holds(&self, map: &Map, cell: &Cell) -> bool {
        match *self {
            SonarClaim::Row(row) => cell.row == row,
            SonarClaim::Col(col) => cell.col == col,
            SonarClaim::Sector(sector) => map.sector_of(cell) == sector,
        }
    }
}

impl fmt::Display for SonarClaim {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SonarClaim::Row(row) => write!(f, "row {}", row),
            SonarClaim::Col(col) => write!(f, "column {}", col),
            SonarClaim::Sector(sector) => write!(f, "sector {}", sector),
        }
    }
}
