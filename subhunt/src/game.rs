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

//! The match state machine. Every change goes through [`Game::apply`], which either
//! accepts an [`Action`] and returns the [`Event`]s it caused, or rejects it and
//! leaves the game untouched.
use std::{fmt, str::FromStr};

#[cfg(feature = "rng_gen")]
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};
use serde::{Deserialize, Serialize};

pub use self::{
    action::{Action, ClaimKind, SonarClaim},
    errors::{ActionError, ErrorKind, ReplayError},
    event::{Audience, DamageCause, Event, LogEntry, Outcome},
    helm::MAX_STEALTH_STEPS,
    turn::{Course, Pending, SurfaceBonus, TurnState, BONUS_TURNS},
    weapons::{blast_damage, TORPEDO_RANGE},
};
use crate::{
    map::{Cell, Map},
    submarine::Submarine,
};

mod action;
mod crew;
mod errors;
mod event;
mod helm;
mod turn;
mod weapons;


/// One of the two crews.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    Blue,
    Red,
}

impl Team {
    pub const ALL: [Team; 2] = [Team::Blue, Team::Red];

    /// The opposing team.
    pub fn other(self) -> Self {
        match self {
            Team::Blue => Team::Red,
            Team::Red => Team::Blue,
        }
    }

    /// Position of this team in [`Team::ALL`].
    pub fn index(self) -> usize {
        match self {
            Team::Blue => 0,
            Team::Red => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Team::Blue => "blue",
            Team::Red => "red",
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Error returned when parsing an unknown team name.
#[derive(Debug, thiserror::Error)]
#[error("unknown team {0:?}")]
pub struct ParseTeamError(String);

impl FromStr for Team {
    type Err = ParseTeamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "blue" | "b" => Ok(Team::Blue),
            "red" | "r" => Ok(Team::Red),
            _ => Err(ParseTeamError(s.to_owned())),
        }
    }
}

#[cfg(feature = "rng_gen")]
impl Distribution<Team> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Team {
        if rng.gen::<bool>() {
            Team::Blue
        } else {
            Team::Red
        }
    }
}

/// Stage of the match.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Waiting for both submarines to be placed.
    Placement,
    Playing,
    /// A submarine was sunk. No more actions are accepted.
    Ended,
}

/// A single match between two submarines.
#[derive(Debug, Clone)]
pub struct Game {
    map: Map,

    phase: Phase,

    /// Order in which the teams take their first turns.
    turn_order: [Team; 2],

    /// Team whose turn it is. Meaningless during placement.
    active: Team,

    /// Number of the current turn, starting from 1.
    turn: u32,

    turn_state: TurnState,

    surface_bonus: Option<SurfaceBonus>,

    /// Submarines indexed by [`Team::index`].
    subs: [Submarine; 2],

    /// Every event produced so far.
    log: Vec<LogEntry>,

    /// Every accepted action, in order.
    history: Vec<Action>,

    winner: Option<Team>,
}

impl Game {
    /// Start a new match on the map. `first` takes the first turn.
    pub fn new(map: Map, first: Team) -> Self {
        Self {
            map,
            phase: Phase::Placement,
            turn_order: [first, first.other()],
            active: first,
            turn: 1,
            turn_state: TurnState::default(),
            surface_bonus: None,
            subs: Default::default(),
            log: Vec::new(),
            history: Vec::new(),
            winner: None,
        }
    }

    /// Start a new match with a randomly chosen first team.
    #[cfg(feature = "rng_gen")]
    pub fn with_random_order<R: Rng + ?Sized>(map: Map, rng: &mut R) -> Self {
        Self::new(map, rng.gen())
    }

    /// Rebuild a match by applying a recorded history of actions to a fresh game.
    pub fn replay<I>(map: Map, first: Team, actions: I) -> Result<Self, ReplayError>
    where
        I: IntoIterator<Item = Action>,
    {
        let mut game = Self::new(map, first);
        for (index, action) in actions.into_iter().enumerate() {
            game.apply(action)
                .map_err(|reason| ReplayError::new(index, reason))?;
        }
        Ok(game)
    }

    pub fn map(&self) -> &Map {
        &self.map
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn turn_order(&self) -> [Team; 2] {
        self.turn_order
    }

    /// The team whose turn it is, once play has started.
    pub fn active_team(&self) -> Option<Team> {
        match self.phase {
            Phase::Playing => Some(self.active),
            Phase::Placement | Phase::Ended => None,
        }
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn turn_state(&self) -> &TurnState {
        &self.turn_state
    }

    pub fn surface_bonus(&self) -> Option<SurfaceBonus> {
        self.surface_bonus
    }

    pub fn submarine(&self, team: Team) -> &Submarine {
        &self.subs[team.index()]
    }

    fn submarine_mut(&mut self, team: Team) -> &mut Submarine {
        &mut self.subs[team.index()]
    }

    /// The full, unredacted event log.
    pub fn log(&self) -> &[LogEntry] {
        &self.log
    }

    /// Every accepted action, suitable for [`Game::replay`].
    pub fn history(&self) -> &[Action] {
        &self.history
    }

    pub fn winner(&self) -> Option<Team> {
        self.winner
    }

    /// Try to apply an action. On success the produced events are returned and
    /// appended to the log. On failure the game is unchanged.
    pub fn apply(&mut self, action: Action) -> Result<Vec<Event>, ActionError> {
        let turn = self.turn;
        let mut events = Vec::new();
        let result = match action {
            Action::Place { team, cell } => self.place(team, cell, &mut events),
            Action::Move { team, direction } => self.move_sub(team, direction, &mut events),
            Action::Surface { team } => self.surface(team, &mut events),
            Action::Dive { team } => self.dive(team, &mut events),
            Action::MarkNode {
                team,
                direction,
                index,
            } => self.mark_node(team, direction, index, &mut events),
            Action::Charge { team, system } => self.charge(team, system, &mut events),
            Action::FireTorpedo { team, target } => self.fire_torpedo(team, target, &mut events),
            Action::PlaceMine { team, target } => self.place_mine(team, target, &mut events),
            Action::DetonateMine { team, index } => self.detonate_mine(team, index, &mut events),
            Action::LaunchDrone { team, sector } => self.launch_drone(team, sector, &mut events),
            Action::ActivateSonar { team } => self.activate_sonar(team, &mut events),
            Action::RespondSonar { team, claims } => self.respond_sonar(team, claims, &mut events),
            Action::Stealth {
                team,
                direction,
                steps,
            } => self.stealth(team, direction, steps, &mut events),
            Action::EndTurn { team } => self.end_turn(team, &mut events),
        };
        match result {
            Ok(()) => {
                log::trace!("turn {}: accepted {:?}", turn, action);
                self.history.push(action);
                self.log.extend(
                    events
                        .iter()
                        .cloned()
                        .map(|event| LogEntry { turn, event }),
                );
                Ok(events)
            }
            Err(err) => {
                log::debug!("turn {}: rejected {}: {}", turn, action.name(), err);
                Err(err)
            }
        }
    }

    /// Check that `team` may take a turn action right now.
    fn admit(&self, team: Team) -> Result<(), ActionError> {
        match self.phase {
            Phase::Playing => {}
            Phase::Placement => return Err(ActionError::NotStarted),
            Phase::Ended => return Err(ActionError::GameOver),
        }
        if team != self.active {
            return Err(ActionError::NotYourTurn(team));
        }
        if self.turn_state.pending.is_some() {
            return Err(ActionError::AwaitingSonar);
        }
        Ok(())
    }

    /// Check that the cell is open water on the map.
    fn check_water(&self, cell: &Cell) -> Result<(), ActionError> {
        if !self.map.in_bounds(cell) {
            Err(ActionError::OutOfBounds(*cell))
        } else if self.map.is_island(cell) {
            Err(ActionError::Island(*cell))
        } else {
            Ok(())
        }
    }

    /// Damage a submarine, ending the game if it sinks. Does nothing once the game
    /// is over.
    fn inflict(&mut self, team: Team, amount: i32, cause: DamageCause, events: &mut Vec<Event>) {
        if self.phase == Phase::Ended || amount <= 0 {
            return;
        }
        let health = self.submarine_mut(team).take_damage(amount);
        events.push(Event::Damage {
            team,
            amount,
            health,
            cause,
        });
        if health <= 0 {
            let winner = team.other();
            log::info!("{} was sunk, {} wins", team, winner);
            self.phase = Phase::Ended;
            self.winner = Some(winner);
            self.turn_state.pending = None;
            events.push(Event::GameOver {
                winner,
                loser: team,
            });
        }
    }
}
