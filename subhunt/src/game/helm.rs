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

//! The captain's actions: placement, movement, surfacing and stealth.
use crate::{
    game::{
        errors::ActionError,
        event::Event,
        turn::{Course, SurfaceBonus, BONUS_TURNS},
        Game, Phase, Team,
    },
    map::{Cell, Direction},
    systems::System,
};

/// Furthest a stealth move may go.
pub const MAX_STEALTH_STEPS: usize = 4;

impl Game {
    pub(super) fn place(
        &mut self,
        team: Team,
        cell: Cell,
        events: &mut Vec<Event>,
    ) -> Result<(), ActionError> {
        match self.phase {
            Phase::Placement => {}
            Phase::Playing => return Err(ActionError::PlacementOver),
            Phase::Ended => return Err(ActionError::GameOver),
        }
        if self.submarine(team).placed() {
            return Err(ActionError::AlreadyPlaced(team));
        }
        self.check_water(&cell)?;

        self.submarine_mut(team).place(cell);
        events.push(Event::Placed { team });
        events.push(Event::PositionChanged { team, cell });

        if Team::ALL.iter().all(|&t| self.submarine(t).placed()) {
            let first = self.turn_order[0];
            log::info!("both submarines placed, {} starts", first);
            self.phase = Phase::Playing;
            self.active = first;
            events.push(Event::GameStarted { first });
            self.begin_turn(events);
        }
        Ok(())
    }

    pub(super) fn move_sub(
        &mut self,
        team: Team,
        direction: Direction,
        events: &mut Vec<Event>,
    ) -> Result<(), ActionError> {
        self.admit(team)?;
        if self.turn_state.moved() {
            return Err(ActionError::AlreadyMoved);
        }
        if self.submarine(team).surfaced() {
            return Err(ActionError::Surfaced);
        }
        let path = self.plot_course(team, direction, 1)?;

        let sub = self.submarine_mut(team);
        for &cell in path.iter() {
            sub.advance(cell);
        }
        self.turn_state.course = Some(Course::Announced(direction));
        events.push(Event::Moved { team, direction });
        if let Some(&cell) = path.last() {
            events.push(Event::PositionChanged { team, cell });
        }
        Ok(())
    }

    pub(super) fn surface(&mut self, team: Team, events: &mut Vec<Event>) -> Result<(), ActionError> {
        self.admit(team)?;
        if self.turn_state.moved() {
            return Err(ActionError::AlreadyMoved);
        }
        if self.submarine(team).surfaced() {
            return Err(ActionError::AlreadySurfaced);
        }
        self.surface_transition(team, events);
        Ok(())
    }

    /// Bring the submarine up: the trail and engineering board reset and the enemy
    /// gets a run of bonus turns. Used both by the captain's order and by blackout.
    pub(super) fn surface_transition(&mut self, team: Team, events: &mut Vec<Event>) {
        self.submarine_mut(team).surface();
        let sector = self
            .submarine(team)
            .position()
            .map_or(0, |cell| self.map.sector_of(&cell));
        self.turn_state.course = Some(Course::Surfaced);
        self.surface_bonus = Some(SurfaceBonus {
            team: team.other(),
            turns_remaining: BONUS_TURNS,
        });
        log::debug!("{} surfaced in sector {}", team, sector);
        events.push(Event::Surfaced {
            team,
            sector,
            bonus_turns: BONUS_TURNS,
        });
    }

    pub(super) fn dive(&mut self, team: Team, events: &mut Vec<Event>) -> Result<(), ActionError> {
        self.admit(team)?;
        if !self.submarine(team).surfaced() {
            return Err(ActionError::NotSurfaced);
        }
        self.submarine_mut(team).dive();
        events.push(Event::Dived { team });
        Ok(())
    }

    pub(super) fn stealth(
        &mut self,
        team: Team,
        direction: Direction,
        steps: usize,
        events: &mut Vec<Event>,
    ) -> Result<(), ActionError> {
        self.admit(team)?;
        if self.turn_state.moved() {
            return Err(ActionError::AlreadyMoved);
        }
        self.check_system(team, System::Stealth)?;
        if steps > MAX_STEALTH_STEPS {
            return Err(ActionError::TooManySteps(steps));
        }
        let path = self.plot_course(team, direction, steps)?;

        self.activate(team, System::Stealth, events);
        let sub = self.submarine_mut(team);
        for &cell in path.iter() {
            sub.advance(cell);
        }
        self.turn_state.course = Some(Course::Silent(direction));
        events.push(Event::StealthUsed { team });
        if let Some(cell) = self.submarine(team).position() {
            events.push(Event::PositionChanged { team, cell });
        }
        Ok(())
    }

    /// Cells the submarine would pass through going `steps` cells towards
    /// `direction`, checking every one of them.
    fn plot_course(
        &self,
        team: Team,
        direction: Direction,
        steps: usize,
    ) -> Result<Vec<Cell>, ActionError> {
        let sub = self.submarine(team);
        let mut cell = sub.position().ok_or(ActionError::NotStarted)?;
        let mut path = Vec::with_capacity(steps);
        for _ in 0..steps {
            cell = self
                .map
                .step(cell, direction)
                .ok_or(ActionError::OffMap(direction))?;
            if self.map.is_island(&cell) {
                return Err(ActionError::Island(cell));
            }
            if sub.visited(&cell) {
                return Err(ActionError::Revisit(cell));
            }
            if sub.has_mine_at(&cell) {
                return Err(ActionError::OwnMine(cell));
            }
            path.push(cell);
        }
        Ok(path)
    }
}
