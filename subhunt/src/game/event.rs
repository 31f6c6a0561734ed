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

//! Facts produced by accepted actions.
use serde::{Deserialize, Serialize};

use crate::{
    engineering::{CircuitId, Overload},
    game::{
        action::SonarClaim,
        errors::{ActionError, ErrorKind},
        Team,
    },
    map::{Cell, Direction},
    systems::System,
    view::Viewer,
};

/// Who may see an event.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Audience {
    Everyone,
    Team(Team),
}

/// What caused a submarine to lose hull points.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DamageCause {
    /// A torpedo or mine went off at `cell`.
    Explosion { cell: Cell },
    /// The engineering board overloaded.
    Overload,
}

/// Something that happened in the game.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    Placed {
        team: Team,
    },
    /// The submarine's real position. Only its own crew sees this.
    PositionChanged {
        team: Team,
        cell: Cell,
    },
    GameStarted {
        first: Team,
    },
    TurnStarted {
        team: Team,
        turn: u32,
    },
    TurnEnded {
        team: Team,
    },
    Moved {
        team: Team,
        direction: Direction,
    },
    /// The submarine surfaced in `sector`. The other team now has `bonus_turns`
    /// turns in a row.
    Surfaced {
        team: Team,
        sector: usize,
        bonus_turns: u8,
    },
    Dived {
        team: Team,
    },
    /// The submarine could not move and was forced to surface.
    Blackout {
        team: Team,
    },
    NodeMarked {
        team: Team,
        direction: Direction,
        index: usize,
    },
    CircuitCleared {
        team: Team,
        circuit: CircuitId,
    },
    Overload {
        team: Team,
        overload: Overload,
    },
    SystemCharged {
        team: Team,
        system: System,
        charge: u8,
        max: u8,
    },
    SystemActivated {
        team: Team,
        system: System,
    },
    TorpedoFired {
        team: Team,
        target: Cell,
    },
    MinePlaced {
        team: Team,
        cell: Cell,
    },
    MineDetonated {
        team: Team,
        cell: Cell,
    },
    /// A torpedo destroyed a mine of `team` without setting it off.
    MineDestroyed {
        team: Team,
        cell: Cell,
    },
    DroneResult {
        team: Team,
        sector: usize,
        found: bool,
    },
    /// The claims `responder` gave to the sonar of `team`.
    SonarResult {
        team: Team,
        responder: Team,
        claims: [SonarClaim; 2],
    },
    StealthUsed {
        team: Team,
    },
    Damage {
        team: Team,
        amount: i32,
        health: i32,
        cause: DamageCause,
    },
    GameOver {
        winner: Team,
        loser: Team,
    },
}

impl Event {
    /// Who may see this event.
    pub fn audience(&self) -> Audience {
        match *self {
            Event::PositionChanged { team, .. }
            | Event::NodeMarked { team, .. }
            | Event::CircuitCleared { team, .. }
            | Event::Overload { team, .. }
            | Event::SystemCharged { team, .. }
            | Event::MinePlaced { team, .. }
            | Event::MineDestroyed { team, .. } => Audience::Team(team),
            _ => Audience::Everyone,
        }
    }

    /// Whether `viewer` may see this event.
    pub fn visible_to(&self, viewer: Viewer) -> bool {
        match (self.audience(), viewer) {
            (Audience::Everyone, _) | (_, Viewer::Spectator) => true,
            (Audience::Team(owner), Viewer::Team(team)) => owner == team,
        }
    }

    /// Whether this event tells `team`'s radio operator something about the enemy:
    /// the enemy's headings, blasts, mine laying, surfacing and stealth use, and the
    /// answers to `team`'s own sonar and drone.
    pub fn is_intercept_for(&self, team: Team) -> bool {
        let enemy = team.other();
        match *self {
            Event::Moved { team: actor, .. }
            | Event::Surfaced { team: actor, .. }
            | Event::TorpedoFired { team: actor, .. }
            | Event::MineDetonated { team: actor, .. }
            | Event::StealthUsed { team: actor } => actor == enemy,
            Event::SystemActivated {
                team: actor,
                system: System::Mine,
            } => actor == enemy,
            Event::DroneResult { team: actor, .. } => actor == team,
            Event::SonarResult { responder, .. } => responder == enemy,
            _ => false,
        }
    }
}

/// An event together with the turn during which it happened.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub turn: u32,
    #[serde(flatten)]
    pub event: Event,
}

/// Serializable result of applying an action: either the events it produced, or
/// why it was rejected.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ErrorKind>,
    #[serde(default)]
    pub events: Vec<Event>,
}

impl From<Result<Vec<Event>, ActionError>> for Outcome {
    fn from(result: Result<Vec<Event>, ActionError>) -> Self {
        match result {
            Ok(events) => Self {
                ok: true,
                reason: None,
                kind: None,
                events,
            },
            Err(err) => Self {
                ok: false,
                reason: Some(err.to_string()),
                kind: Some(err.kind()),
                events: Vec::new(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn private_events_reach_only_their_team() {
        let event = Event::MinePlaced {
            team: Team::Blue,
            cell: Cell::new(1, 1),
        };
        assert!(event.visible_to(Viewer::Team(Team::Blue)));
        assert!(!event.visible_to(Viewer::Team(Team::Red)));
        assert!(event.visible_to(Viewer::Spectator));

        let event = Event::Moved {
            team: Team::Blue,
            direction: Direction::East,
        };
        assert!(event.visible_to(Viewer::Team(Team::Red)));
        assert!(event.is_intercept_for(Team::Red));
        assert!(!event.is_intercept_for(Team::Blue));

        let laid = Event::SystemActivated {
            team: Team::Blue,
            system: System::Mine,
        };
        assert!(laid.visible_to(Viewer::Team(Team::Red)));
        assert!(laid.is_intercept_for(Team::Red));
        assert!(!laid.is_intercept_for(Team::Blue));
        let drone = Event::SystemActivated {
            team: Team::Blue,
            system: System::Drone,
        };
        assert!(!drone.is_intercept_for(Team::Red));
    }

    #[test]
    fn outcome_carries_reason_and_kind() {
        let outcome = Outcome::from(Err(ActionError::NotYourTurn(Team::Red)));
        assert!(!outcome.ok);
        assert_eq!(outcome.kind, Some(ErrorKind::TurnOwnership));
        assert_eq!(outcome.reason.as_deref(), Some("it is not red's turn"));

        let json = serde_json::to_value(&Outcome::from(Ok(vec![Event::Dived {
            team: Team::Blue,
        }])))
        .unwrap();
        assert_eq!(json["ok"], true);
        assert_eq!(json["events"][0]["type"], "dived");
        assert!(json.get("reason").is_none());
    }

    #[test]
    fn log_entries_flatten_the_event() {
        let entry = LogEntry {
            turn: 3,
            event: Event::TurnEnded { team: Team::Red },
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["turn"], 3);
        assert_eq!(json["type"], "turn_ended");
        assert_eq!(json["team"], "red");
    }
}
