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

//! Per-turn bookkeeping and the rules for passing control between teams.
use serde::{Deserialize, Serialize};

use crate::{
    game::{errors::ActionError, event::Event, Game, Team},
    map::Direction,
};

/// Number of consecutive turns the enemy of a surfacing submarine receives.
pub const BONUS_TURNS: u8 = 3;

/// What the captain did this turn.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Course {
    /// A normal move with a publicly announced heading.
    Announced(Direction),
    /// A stealth move. Only the moving team learns the heading.
    Silent(Direction),
    /// The captain surfaced, so there is no heading.
    Surfaced,
}

impl Course {
    /// The heading the engineer must follow, if there is one.
    pub fn heading(self) -> Option<Direction> {
        match self {
            Course::Announced(dir) | Course::Silent(dir) => Some(dir),
            Course::Surfaced => None,
        }
    }
}

/// Something the game is waiting on before the turn can go on.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Pending {
    /// `from` must answer a sonar launched by the other team.
    Sonar { from: Team },
}

/// A run of consecutive turns granted to `team` after its enemy surfaced.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct SurfaceBonus {
    pub team: Team,
    pub turns_remaining: u8,
}

/// Progress of the active team through its turn.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct TurnState {
    pub(super) course: Option<Course>,
    pub(super) engineer_done: bool,
    pub(super) first_mate_done: bool,
    pub(super) system_used: bool,
    pub(super) pending: Option<Pending>,
}

impl TurnState {
    pub fn course(&self) -> Option<Course> {
        self.course
    }

    /// Whether the captain moved, used stealth or surfaced this turn.
    pub fn moved(&self) -> bool {
        self.course.is_some()
    }

    /// Publicly announced heading of this turn.
    pub fn direction(&self) -> Option<Direction> {
        match self.course {
            Some(Course::Announced(dir)) => Some(dir),
            _ => None,
        }
    }

    /// Heading of this turn's stealth move.
    pub fn stealth_direction(&self) -> Option<Direction> {
        match self.course {
            Some(Course::Silent(dir)) => Some(dir),
            _ => None,
        }
    }

    /// Heading the engineer must mark, announced or silent.
    pub fn heading(&self) -> Option<Direction> {
        self.course.and_then(Course::heading)
    }

    pub fn engineer_done(&self) -> bool {
        self.engineer_done
    }

    pub fn first_mate_done(&self) -> bool {
        self.first_mate_done
    }

    pub fn system_used(&self) -> bool {
        self.system_used
    }

    pub fn pending(&self) -> Option<Pending> {
        self.pending
    }
}

impl Game {
    /// Finish the active team's turn and start the next one.
    pub(super) fn end_turn(
        &mut self,
        team: Team,
        events: &mut Vec<Event>,
    ) -> Result<(), ActionError> {
        self.admit(team)?;
        let course = self.turn_state.course.ok_or(ActionError::NotMoved)?;
        if course.heading().is_some() {
            if !self.turn_state.engineer_done {
                return Err(ActionError::EngineerPending);
            }
            if !self.turn_state.first_mate_done && !self.submarine(team).systems().all_full() {
                return Err(ActionError::FirstMatePending);
            }
        }

        events.push(Event::TurnEnded { team });
        self.active = self.next_team(team);
        self.turn += 1;
        self.turn_state = TurnState::default();
        self.begin_turn(events);
        Ok(())
    }

    /// Pick the team that plays after `ending`, consuming one bonus turn if
    /// `ending` was playing one.
    fn next_team(&mut self, ending: Team) -> Team {
        match self.surface_bonus {
            Some(bonus) if bonus.team == ending => {
                let turns_remaining = bonus.turns_remaining.saturating_sub(1);
                if turns_remaining > 0 {
                    self.surface_bonus = Some(SurfaceBonus {
                        team: ending,
                        turns_remaining,
                    });
                    ending
                } else {
                    log::debug!("{} used up its surface bonus", ending);
                    self.surface_bonus = None;
                    ending.other()
                }
            }
            Some(bonus) => bonus.team,
            None => ending.other(),
        }
    }

    /// Announce the active team's turn and force it to surface if it cannot move.
    pub(super) fn begin_turn(&mut self, events: &mut Vec<Event>) {
        let team = self.active;
        events.push(Event::TurnStarted {
            team,
            turn: self.turn,
        });
        let sub = self.submarine(team);
        if !sub.surfaced() && sub.legal_moves(&self.map).next().is_none() {
            log::info!("{} is boxed in and blacks out", team);
            events.push(Event::Blackout { team });
            self.surface_transition(team, events);
        }
    }
}
