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

//! Reasons an action is rejected.
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    engineering::MarkError,
    game::{action::ClaimKind, Team},
    map::{Cell, Direction},
    systems::System,
};

/// Broad category of a rejection.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The acting team may not act right now.
    TurnOwnership,
    /// The game is not in a phase that allows the action.
    Phase,
    /// An earlier step of the turn is missing or this step was already taken.
    Precondition,
    /// Not enough charge, blocked by engineering, or the turn's system is spent.
    Resource,
    /// The target or path is not allowed.
    Geometry,
    /// The sonar answer does not follow the rules.
    Protocol,
}

/// Reason why an action was rejected. A rejected action never changes the game.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum ActionError {
    #[error("the game is already over")]
    GameOver,
    #[error("both submarines must be placed before play starts")]
    NotStarted,
    #[error("submarines can only be placed before play starts")]
    PlacementOver,

    #[error("it is not {0}'s turn")]
    NotYourTurn(Team),
    #[error("{0} was not asked to answer a sonar")]
    NotResponder(Team),

    #[error("{0} has already placed its submarine")]
    AlreadyPlaced(Team),
    #[error("waiting for the enemy captain to answer the sonar")]
    AwaitingSonar,
    #[error("no sonar is waiting for an answer")]
    NoSonarPending,
    #[error("the captain already set a course this turn")]
    AlreadyMoved,
    #[error("the captain has not set a course this turn")]
    NotMoved,
    #[error("the submarine is surfaced, dive first")]
    Surfaced,
    #[error("the submarine is already surfaced")]
    AlreadySurfaced,
    #[error("the submarine is not surfaced")]
    NotSurfaced,
    #[error("no heading was set this turn, nothing to mark or charge after surfacing")]
    NoHeading,
    #[error("the engineer already marked a node this turn")]
    EngineerDone,
    #[error("the first mate already charged a system this turn")]
    FirstMateDone,
    #[error("waiting for the engineer to mark a node")]
    EngineerPending,
    #[error("waiting for the first mate to charge a system")]
    FirstMatePending,
    #[error("the course was {expected}, mark a node in the {expected} section")]
    WrongSection {
        expected: Direction,
        got: Direction,
    },
    #[error(transparent)]
    Node(#[from] MarkError),

    #[error("{0} is already fully charged")]
    AlreadyFull(System),
    #[error("{0} is not charged")]
    NotCharged(System),
    #[error("{0} is blocked by engineering damage")]
    Blocked(System),
    #[error("a system was already activated this turn")]
    SystemUsed,

    #[error("heading {0} leaves the map")]
    OffMap(Direction),
    #[error("{0} is outside of the map")]
    OutOfBounds(Cell),
    #[error("{0} is an island")]
    Island(Cell),
    #[error("cannot revisit {0}, it is in the trail")]
    Revisit(Cell),
    #[error("{0} holds one of your own mines")]
    OwnMine(Cell),
    #[error("target is {0} cells away, torpedoes reach 1 to 4 cells")]
    OutOfRange(usize),
    #[error("mines must be laid next to the submarine, {0} is not adjacent")]
    NotAdjacent(Cell),
    #[error("no mine with index {0}")]
    NoSuchMine(usize),
    #[error("there is no sector {0}")]
    NoSuchSector(usize),
    #[error("stealth moves at most 4 cells, got {0}")]
    TooManySteps(usize),

    #[error("both claims are about the {0}, give two different kinds")]
    SameClaimKind(ClaimKind),
    #[error("both claims are true, exactly one must be false")]
    BothTrue,
    #[error("both claims are false, exactly one must be true")]
    BothFalse,
}

impl ActionError {
    /// Category of this rejection.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ActionError::GameOver | ActionError::NotStarted | ActionError::PlacementOver => {
                ErrorKind::Phase
            }
            ActionError::NotYourTurn(_) | ActionError::NotResponder(_) => {
                ErrorKind::TurnOwnership
            }
            ActionError::AlreadyPlaced(_)
            | ActionError::AwaitingSonar
            | ActionError::AlreadyMoved
            | ActionError::NotMoved
            | ActionError::Surfaced
            | ActionError::AlreadySurfaced
            | ActionError::NotSurfaced
            | ActionError::NoHeading
            | ActionError::EngineerDone
            | ActionError::FirstMateDone
            | ActionError::EngineerPending
            | ActionError::FirstMatePending
            | ActionError::WrongSection { .. }
            | ActionError::Node(MarkError::AlreadyMarked { .. }) => ErrorKind::Precondition,
            ActionError::AlreadyFull(_)
            | ActionError::NotCharged(_)
            | ActionError::Blocked(_)
            | ActionError::SystemUsed => ErrorKind::Resource,
            ActionError::Node(MarkError::NoSuchNode(_))
            | ActionError::OffMap(_)
            | ActionError::OutOfBounds(_)
            | ActionError::Island(_)
            | ActionError::Revisit(_)
            | ActionError::OwnMine(_)
            | ActionError::OutOfRange(_)
            | ActionError::NotAdjacent(_)
            | ActionError::NoSuchMine(_)
            | ActionError::NoSuchSector(_)
            | ActionError::TooManySteps(_) => ErrorKind::Geometry,
            ActionError::NoSonarPending
            | ActionError::SameClaimKind(_)
            | ActionError::BothTrue
            | ActionError::BothFalse => ErrorKind::Protocol,
        }
    }
}

/// Error returned when a recorded action history cannot be replayed.
#[derive(Debug, Error)]
#[error("action {index} of the history was rejected")]
pub struct ReplayError {
    /// Position of the rejected action in the history.
    index: usize,
    #[source]
    reason: ActionError,
}

impl ReplayError {
    pub(super) fn new(index: usize, reason: ActionError) -> Self {
        Self { index, reason }
    }

    /// Position of the rejected action in the history.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Why the action was rejected.
    pub fn reason(&self) -> ActionError {
        self.reason
    }
}
