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

//! The engineer's breakdown board.
//!
//! Every announced course forces the engineer to mark one node in the section of
//! that heading. Marked nodes block the systems of their colour. Marks go away in
//! three ways, checked in this order after every mark:
//!
//! 1. filling all six nodes of one section overloads the board: everything is
//!    cleared and the hull takes one damage;
//! 2. marking all four radiation nodes does the same;
//! 3. completing a circuit clears just that circuit's four nodes, without damage.
use enumflags2::BitFlags;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use self::layout::{CircuitId, NODES_PER_SECTION};
use self::layout::{CIRCUITS, LAYOUT, RADIATION, SECTIONS};
use crate::{
    map::Direction,
    systems::{Color, System},
};

mod layout;

/// Reason why a node could not be marked.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum MarkError {
    /// There is no node with that index in the section.
    #[error("no node {0} in a section, indices run from 0 to 5")]
    NoSuchNode(usize),
    /// The node is already marked.
    #[error("node {index} of the {direction} section is already marked")]
    AlreadyMarked { direction: Direction, index: usize },
}

/// Which overload rule fired.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Overload {
    /// Every node of one section was marked.
    Direction { direction: Direction },
    /// Every radiation node was marked.
    Radiation,
}

/// Result of a successful mark.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MarkOutcome {
    /// The node stays marked.
    Marked,
    /// The node completed a circuit, whose four nodes were cleared.
    CircuitCleared(CircuitId),
    /// The whole board was cleared and the hull takes one damage.
    Overload(Overload),
}

impl MarkOutcome {
    /// Hull damage caused by this mark.
    pub fn damage(&self) -> i32 {
        match self {
            MarkOutcome::Overload(_) => 1,
            MarkOutcome::Marked | MarkOutcome::CircuitCleared(_) => 0,
        }
    }
}

/// One node of the board, as seen from outside.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub color: Color,
    pub circuit: Option<CircuitId>,
    pub marked: bool,
}

/// Engineering board of one submarine. Only the marks are stored; colours and
/// wiring come from the fixed layout.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct EngineeringBoard {
    marks: [[bool; NODES_PER_SECTION]; SECTIONS],
}

impl EngineeringBoard {
    /// A board with nothing marked.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a node. Returns `None` if the index is out of range.
    pub fn node(&self, direction: Direction, index: usize) -> Option<Node> {
        let section = direction.index();
        LAYOUT[section].get(index).map(|spec| Node {
            color: spec.color,
            circuit: spec.circuit,
            marked: self.marks[section][index],
        })
    }

    /// Iterate the nodes of one section in index order.
    pub fn section(&self, direction: Direction) -> impl '_ + Iterator<Item = Node> {
        (0..NODES_PER_SECTION).filter_map(move |index| self.node(direction, index))
    }

    /// Indices of the nodes of a section that can still be marked.
    pub fn unmarked(&self, direction: Direction) -> impl '_ + Iterator<Item = usize> {
        let section = direction.index();
        (0..NODES_PER_SECTION).filter(move |&index| !self.marks[section][index])
    }

    /// Total number of marked nodes.
    pub fn marked_count(&self) -> usize {
        self.marks
            .iter()
            .flat_map(|section| section.iter())
            .filter(|&&marked| marked)
            .count()
    }

    /// Check whether a mark on the node would be accepted.
    pub fn check_mark(&self, direction: Direction, index: usize) -> Result<(), MarkError> {
        match self.marks[direction.index()].get(index) {
            None => Err(MarkError::NoSuchNode(index)),
            Some(true) => Err(MarkError::AlreadyMarked { direction, index }),
            Some(false) => Ok(()),
        }
    }

    /// Mark a node and resolve the overload and circuit rules.
    pub fn mark(&mut self, direction: Direction, index: usize) -> Result<MarkOutcome, MarkError> {
        self.check_mark(direction, index)?;
        let section = direction.index();
        self.marks[section][index] = true;

        if self.marks[section].iter().all(|&marked| marked) {
            self.clear();
            return Ok(MarkOutcome::Overload(Overload::Direction { direction }));
        }
        if RADIATION.iter().all(|&(s, i)| self.marks[s][i]) {
            self.clear();
            return Ok(MarkOutcome::Overload(Overload::Radiation));
        }
        if let Some(circuit) = LAYOUT[section][index].circuit {
            let members = &CIRCUITS[usize::from(circuit) - 1];
            if members.iter().all(|&(s, i)| self.marks[s][i]) {
                for &(s, i) in members.iter() {
                    self.marks[s][i] = false;
                }
                return Ok(MarkOutcome::CircuitCleared(circuit));
            }
        }
        Ok(MarkOutcome::Marked)
    }

    /// Unmark every node.
    pub fn clear(&mut self) {
        self.marks = Default::default();
    }

    /// Set of systems blocked by marked nodes.
    pub fn blocked_systems(&self) -> BitFlags<System> {
        let mut blocked = BitFlags::empty();
        for (section, marks) in self.marks.iter().enumerate() {
            for (index, &marked) in marks.iter().enumerate() {
                if marked {
                    blocked |= LAYOUT[section][index].color.systems();
                }
            }
        }
        blocked
    }

    /// Whether any node of the system's colour is marked.
    pub fn is_blocked(&self, system: System) -> bool {
        self.blocked_systems().contains(system)
    }
}

/// Serializable copy of a board, one list of nodes per section.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct BoardView {
    pub north: Vec<Node>,
    pub south: Vec<Node>,
    pub east: Vec<Node>,
    pub west: Vec<Node>,
}

impl From<&EngineeringBoard> for BoardView {
    fn from(board: &EngineeringBoard) -> Self {
        Self {
            north: board.section(Direction::North).collect(),
            south: board.section(Direction::South).collect(),
            east: board.section(Direction::East).collect(),
            west: board.section(Direction::West).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mark_all(board: &mut EngineeringBoard, nodes: &[(Direction, usize)]) {
        for &(direction, index) in nodes {
            assert_eq!(board.mark(direction, index), Ok(MarkOutcome::Marked));
        }
    }

    #[test]
    fn marking_twice_fails() {
        let mut board = EngineeringBoard::new();
        board.mark(Direction::East, 3).unwrap();
        assert_eq!(
            board.mark(Direction::East, 3),
            Err(MarkError::AlreadyMarked {
                direction: Direction::East,
                index: 3
            })
        );
        assert_eq!(board.mark(Direction::East, 6), Err(MarkError::NoSuchNode(6)));
    }

    #[test]
    fn circuit_clears_only_its_nodes() {
        let mut board = EngineeringBoard::new();
        mark_all(
            &mut board,
            &[
                (Direction::West, 0),
                (Direction::North, 0),
                (Direction::South, 0),
                (Direction::North, 3),
            ],
        );
        let outcome = board.mark(Direction::East, 0).unwrap();
        assert_eq!(outcome, MarkOutcome::CircuitCleared(1));
        assert_eq!(outcome.damage(), 0);
        assert_eq!(board.marked_count(), 1);
        assert!(board.node(Direction::North, 3).unwrap().marked);
        assert!(!board.node(Direction::East, 0).unwrap().marked);
    }

    #[test]
    fn direction_overload_beats_circuit() {
        let mut board = EngineeringBoard::new();
        // Circuit 1 is one mark from completion and east is one mark from full.
        mark_all(
            &mut board,
            &[
                (Direction::West, 0),
                (Direction::North, 0),
                (Direction::South, 0),
                (Direction::East, 1),
                (Direction::East, 2),
                (Direction::East, 3),
                (Direction::East, 4),
            ],
        );
        mark_all(&mut board, &[(Direction::East, 5)]);
        let outcome = board.mark(Direction::East, 0).unwrap();
        assert_eq!(
            outcome,
            MarkOutcome::Overload(Overload::Direction {
                direction: Direction::East
            })
        );
        assert_eq!(outcome.damage(), 1);
        assert_eq!(board.marked_count(), 0);
    }

    #[test]
    fn radiation_overload_clears_whole_board() {
        let mut board = EngineeringBoard::new();
        mark_all(
            &mut board,
            &[
                (Direction::North, 5),
                (Direction::South, 5),
                (Direction::East, 5),
                (Direction::West, 3),
            ],
        );
        let outcome = board.mark(Direction::West, 5).unwrap();
        assert_eq!(outcome, MarkOutcome::Overload(Overload::Radiation));
        assert_eq!(board.marked_count(), 0);
    }

    #[test]
    fn marks_block_their_colour() {
        let mut board = EngineeringBoard::new();
        assert!(board.blocked_systems().is_empty());
        // east 1 is red.
        board.mark(Direction::East, 1).unwrap();
        assert!(board.is_blocked(System::Torpedo));
        assert!(board.is_blocked(System::Mine));
        assert!(!board.is_blocked(System::Sonar));
        assert!(!board.is_blocked(System::Stealth));
        // radiation blocks nothing.
        board.mark(Direction::East, 5).unwrap();
        assert_eq!(
            board.blocked_systems(),
            BitFlags::from(System::Torpedo) | System::Mine
        );
        board.clear();
        assert!(!board.is_blocked(System::Torpedo));
    }

    #[test]
    fn view_lists_every_section() {
        let mut board = EngineeringBoard::new();
        board.mark(Direction::South, 4).unwrap();
        let view = BoardView::from(&board);
        assert_eq!(view.south.len(), NODES_PER_SECTION);
        assert!(view.south[4].marked);
        assert_eq!(view.south[4].color, Color::Green);
        assert_eq!(view.north[5].color, Color::Radiation);
    }
}
