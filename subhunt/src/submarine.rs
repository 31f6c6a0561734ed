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

//! State of a single team's submarine.
use enumflags2::BitFlags;

use crate::{
    engineering::EngineeringBoard,
    map::{Cell, Direction, Map},
    systems::{System, Systems},
};

/// Hull points of a fresh submarine.
pub const STARTING_HEALTH: i32 = 4;

/// A submarine, its wake and its internal systems.
#[derive(Debug, Clone)]
pub struct Submarine {
    /// Current cell. `None` until placed.
    position: Option<Cell>,

    /// Cells visited since placement or the last surfacing, ending with the current
    /// position.
    trail: Vec<Cell>,

    /// Remaining hull points. Only drops to zero or below as the game ends.
    health: i32,

    /// Undetonated mines in the order they were laid.
    mines: Vec<Cell>,

    systems: Systems,

    engineering: EngineeringBoard,

    /// Set between surfacing and diving.
    surfaced: bool,
}

impl Default for Submarine {
    fn default() -> Self {
        Self {
            position: None,
            trail: Vec::new(),
            health: STARTING_HEALTH,
            mines: Vec::new(),
            systems: Systems::default(),
            engineering: EngineeringBoard::new(),
            surfaced: false,
        }
    }
}

impl Submarine {
    pub fn position(&self) -> Option<Cell> {
        self.position
    }

    pub fn trail(&self) -> &[Cell] {
        &self.trail
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn mines(&self) -> &[Cell] {
        &self.mines
    }

    pub fn systems(&self) -> &Systems {
        &self.systems
    }

    pub fn engineering(&self) -> &EngineeringBoard {
        &self.engineering
    }

    pub fn surfaced(&self) -> bool {
        self.surfaced
    }

    /// Whether the submarine has been placed on the map.
    pub fn placed(&self) -> bool {
        self.position.is_some()
    }

    /// Whether the cell was already visited since the last surfacing.
    pub fn visited(&self, cell: &Cell) -> bool {
        self.trail.contains(cell)
    }

    /// Whether one of this submarine's own mines lies on the cell.
    pub fn has_mine_at(&self, cell: &Cell) -> bool {
        self.mines.contains(cell)
    }

    /// Whether the submarine may enter the cell: open water that is neither in the
    /// trail nor holding one of its own mines.
    pub fn can_enter(&self, map: &Map, cell: &Cell) -> bool {
        map.is_water(cell) && !self.visited(cell) && !self.has_mine_at(cell)
    }

    /// Directions the submarine could legally move in from its current position.
    pub fn legal_moves<'a>(&'a self, map: &'a Map) -> impl 'a + Iterator<Item = Direction> {
        self.position.into_iter().flat_map(move |pos| {
            map.neighbors(pos)
                .filter(move |(_, next)| self.can_enter(map, next))
                .map(|(dir, _)| dir)
        })
    }

    /// Systems that are both fully charged and not blocked.
    pub fn ready_systems(&self) -> BitFlags<System> {
        self.systems.full() & !self.engineering.blocked_systems()
    }

    pub(crate) fn place(&mut self, cell: Cell) {
        self.position = Some(cell);
        self.trail = vec![cell];
    }

    /// Move to an adjacent cell, extending the trail.
    pub(crate) fn advance(&mut self, cell: Cell) {
        self.position = Some(cell);
        self.trail.push(cell);
    }

    /// Surface: forget the trail except the current cell and repair the engineering
    /// board.
    pub(crate) fn surface(&mut self) {
        self.trail = self.position.into_iter().collect();
        self.engineering.clear();
        self.surfaced = true;
    }

    pub(crate) fn dive(&mut self) {
        self.surfaced = false;
    }

    pub(crate) fn take_damage(&mut self, amount: i32) -> i32 {
        self.health -= amount;
        self.health
    }

    pub(crate) fn lay_mine(&mut self, cell: Cell) {
        self.mines.push(cell);
    }

    /// Remove the mine with the given index. Returns `None` if there is no such mine.
    pub(crate) fn take_mine(&mut self, index: usize) -> Option<Cell> {
        if index < self.mines.len() {
            Some(self.mines.remove(index))
        } else {
            None
        }
    }

    /// Remove every mine on the cell, returning how many there were.
    pub(crate) fn clear_mines_at(&mut self, cell: &Cell) -> usize {
        let before = self.mines.len();
        self.mines.retain(|mine| mine != cell);
        before - self.mines.len()
    }

    pub(crate) fn systems_mut(&mut self) -> &mut Systems {
        &mut self.systems
    }

    pub(crate) fn engineering_mut(&mut self) -> &mut EngineeringBoard {
        &mut self.engineering
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surfacing_keeps_only_current_cell() {
        let mut sub = Submarine::default();
        sub.place(Cell::new(2, 2));
        sub.advance(Cell::new(2, 3));
        sub.advance(Cell::new(3, 3));
        sub.engineering_mut().mark(Direction::North, 0).unwrap();
        sub.surface();
        assert_eq!(sub.trail(), &[Cell::new(3, 3)]);
        assert_eq!(sub.engineering().marked_count(), 0);
        assert!(sub.surfaced());
        sub.dive();
        assert!(!sub.surfaced());
    }

    #[test]
    fn legal_moves_skip_trail_and_own_mines() {
        let map = Map::open(5, 5, 5).unwrap();
        let mut sub = Submarine::default();
        sub.place(Cell::new(0, 1));
        sub.advance(Cell::new(1, 1));
        sub.lay_mine(Cell::new(1, 2));
        let moves: Vec<_> = sub.legal_moves(&map).collect();
        assert_eq!(moves, vec![Direction::South, Direction::West]);
    }

    #[test]
    fn mines_are_removed_by_index_and_by_cell() {
        let mut sub = Submarine::default();
        sub.lay_mine(Cell::new(1, 1));
        sub.lay_mine(Cell::new(2, 2));
        assert_eq!(sub.take_mine(5), None);
        assert_eq!(sub.take_mine(0), Some(Cell::new(1, 1)));
        assert_eq!(sub.clear_mines_at(&Cell::new(2, 2)), 1);
        assert!(sub.mines().is_empty());
    }
}
