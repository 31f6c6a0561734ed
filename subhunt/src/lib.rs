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

//! Rules engine for a two-team submarine duel played on a hidden grid.
//!
//! Each team steers a submarine it keeps secret from the other. Captains announce
//! their headings, engineers absorb the wear every move causes, first mates charge
//! the weapons, and radio operators try to work out where the enemy is from what
//! gets announced. The first submarine to lose all of its hull points loses.
//!
//! The [`Game`] owns all state. Crew members submit [`Action`]s through
//! [`Game::apply`], which returns the [`Event`]s they caused. [`Game::snapshot`]
//! and [`Game::log_for`] give each [`Viewer`] only what it is allowed to know.
//!
//! ```
//! use subhunt::{Action, Cell, Direction, Game, Map, Team};
//!
//! let mut game = Game::new(Map::default(), Team::Blue);
//! game.apply(Action::Place { team: Team::Blue, cell: Cell::new(0, 0) }).unwrap();
//! game.apply(Action::Place { team: Team::Red, cell: Cell::new(14, 14) }).unwrap();
//! game.apply(Action::Move { team: Team::Blue, direction: Direction::East }).unwrap();
//! assert_eq!(game.submarine(Team::Blue).position(), Some(Cell::new(0, 1)));
//! ```

pub use crate::{
    engineering::{BoardView, EngineeringBoard, MarkError, MarkOutcome, Overload},
    game::{
        Action, ActionError, ClaimKind, Course, DamageCause, ErrorKind, Event, Game,
        LogEntry, Outcome, Phase, ReplayError, SonarClaim, SurfaceBonus, Team,
    },
    map::{Cell, Direction, Map, MapError, MapSettings},
    submarine::Submarine,
    systems::{Color, System, Systems},
    view::{Snapshot, Viewer},
};

pub mod engineering;
pub mod game;
pub mod map;
pub mod submarine;
pub mod systems;
pub mod view;
