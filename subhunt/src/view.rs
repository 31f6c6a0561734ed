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

//! What each participant is allowed to know about a match.
//!
//! A team sees everything about its own submarine but only the public facts about
//! the enemy: health, charges, mine count, whether it is surfaced and, while it is,
//! its sector. A spectator sees everything.
use serde::{Deserialize, Serialize};

use crate::{
    engineering::BoardView,
    game::{Game, LogEntry, Phase, SurfaceBonus, Team},
    map::{Cell, Direction, MapSettings},
    systems::System,
};

/// Someone looking at the game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Viewer {
    /// A member of a crew.
    Team(Team),
    /// An observer who may see both submarines.
    Spectator,
}

impl Viewer {
    /// Whether the viewer may see the private state of `team`.
    pub fn sees_inside(self, team: Team) -> bool {
        match self {
            Viewer::Team(own) => own == team,
            Viewer::Spectator => true,
        }
    }
}

impl From<Team> for Viewer {
    fn from(team: Team) -> Self {
        Viewer::Team(team)
    }
}

/// Charge state of one system.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct SystemView {
    pub system: System,
    pub charge: u8,
    pub max: u8,
    /// Only present for viewers allowed to see the engineering board.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocked: Option<bool>,
}

/// One submarine as seen by a viewer. Private fields are `None` when hidden.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct SubmarineView {
    pub team: Team,
    pub health: i32,
    pub surfaced: bool,
    pub mine_count: usize,
    pub systems: Vec<SystemView>,
    pub sector: Option<usize>,
    pub position: Option<Cell>,
    pub trail: Option<Vec<Cell>>,
    pub mines: Option<Vec<Cell>>,
    pub engineering: Option<BoardView>,
}

/// Progress of the current turn.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct TurnView {
    pub moved: bool,
    /// Announced heading.
    pub direction: Option<Direction>,
    /// Heading of a stealth move, only shown to the team that made it.
    pub stealth_direction: Option<Direction>,
    pub engineer_done: bool,
    pub first_mate_done: bool,
    pub system_used: bool,
    /// `"sonar_response"` while a sonar is unanswered.
    pub waiting_for: Option<String>,
}

/// Redacted copy of the game for one viewer.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub viewer: Viewer,
    pub map: MapSettings,
    pub phase: Phase,
    pub turn: u32,
    pub turn_order: [Team; 2],
    pub active_team: Option<Team>,
    pub turn_state: TurnView,
    pub surface_bonus: Option<SurfaceBonus>,
    /// Both submarines, blue first.
    pub submarines: Vec<SubmarineView>,
    pub winner: Option<Team>,
}

impl Snapshot {
    /// The view of one team's submarine.
    pub fn submarine(&self, team: Team) -> Option<&SubmarineView> {
        self.submarines.iter().find(|sub| sub.team == team)
    }
}

fn submarine_view(game: &Game, team: Team, viewer: Viewer) -> SubmarineView {
    let sub = game.submarine(team);
    let inside = viewer.sees_inside(team);
    let engineering = sub.engineering();
    let sector = sub
        .position()
        .filter(|_| inside || sub.surfaced())
        .map(|cell| game.map().sector_of(&cell));
    SubmarineView {
        team,
        health: sub.health(),
        surfaced: sub.surfaced(),
        mine_count: sub.mines().len(),
        systems: sub
            .systems()
            .iter()
            .map(|(system, charge)| SystemView {
                system,
                charge,
                max: system.max_charge(),
                blocked: if inside {
                    Some(engineering.is_blocked(system))
                } else {
                    None
                },
            })
            .collect(),
        sector,
        position: sub.position().filter(|_| inside),
        trail: if inside {
            Some(sub.trail().to_vec())
        } else {
            None
        },
        mines: if inside {
            Some(sub.mines().to_vec())
        } else {
            None
        },
        engineering: if inside {
            Some(BoardView::from(engineering))
        } else {
            None
        },
    }
}

impl Game {
    /// Build the view of the game `viewer` is allowed to see.
    pub fn snapshot(&self, viewer: Viewer) -> Snapshot {
        let state = self.turn_state();
        let active = self.active_team();
        let owns_turn = match (viewer, active) {
            (Viewer::Spectator, _) => true,
            (Viewer::Team(team), Some(active)) => team == active,
            (Viewer::Team(_), None) => false,
        };
        Snapshot {
            viewer,
            map: self.map().settings().clone(),
            phase: self.phase(),
            turn: self.turn(),
            turn_order: self.turn_order(),
            active_team: active,
            turn_state: TurnView {
                moved: state.moved(),
                direction: state.direction(),
                stealth_direction: state.stealth_direction().filter(|_| owns_turn),
                engineer_done: state.engineer_done(),
                first_mate_done: state.first_mate_done(),
                system_used: state.system_used(),
                waiting_for: state.pending().map(|_| "sonar_response".to_owned()),
            },
            surface_bonus: self.surface_bonus(),
            submarines: Team::ALL
                .iter()
                .map(|&team| submarine_view(self, team, viewer))
                .collect(),
            winner: self.winner(),
        }
    }

    /// The part of the event log `viewer` may see.
    pub fn log_for(&self, viewer: Viewer) -> impl '_ + Iterator<Item = &LogEntry> {
        self.log()
            .iter()
            .filter(move |entry| entry.event.visible_to(viewer))
    }

    /// Facts about the enemy that `team`'s radio operator tracks.
    pub fn intercepts(&self, team: Team) -> impl '_ + Iterator<Item = &LogEntry> {
        self.log()
            .iter()
            .filter(move |entry| entry.event.is_intercept_for(team))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Action;
    use crate::map::Map;

    fn started() -> Game {
        let mut game = Game::new(Map::open(10, 10, 5).unwrap(), Team::Blue);
        game.apply(Action::Place {
            team: Team::Blue,
            cell: Cell::new(1, 1),
        })
        .unwrap();
        game.apply(Action::Place {
            team: Team::Red,
            cell: Cell::new(8, 8),
        })
        .unwrap();
        game
    }

    #[test]
    fn enemy_details_are_hidden() {
        let game = started();
        let snapshot = game.snapshot(Viewer::Team(Team::Blue));
        let own = snapshot.submarine(Team::Blue).unwrap();
        assert_eq!(own.position, Some(Cell::new(1, 1)));
        assert_eq!(own.sector, Some(1));
        assert!(own.engineering.is_some());
        assert_eq!(own.systems[0].blocked, Some(false));

        let enemy = snapshot.submarine(Team::Red).unwrap();
        assert_eq!(enemy.position, None);
        assert_eq!(enemy.sector, None);
        assert_eq!(enemy.trail, None);
        assert_eq!(enemy.mines, None);
        assert!(enemy.engineering.is_none());
        assert_eq!(enemy.systems[0].blocked, None);
        assert_eq!(enemy.health, 4);
    }

    #[test]
    fn spectator_sees_both_submarines() {
        let game = started();
        let snapshot = game.snapshot(Viewer::Spectator);
        for sub in snapshot.submarines.iter() {
            assert!(sub.position.is_some());
            assert!(sub.engineering.is_some());
        }
        assert_eq!(snapshot.active_team, Some(Team::Blue));
    }

    #[test]
    fn surfaced_enemy_reveals_its_sector() {
        let mut game = started();
        game.apply(Action::Surface { team: Team::Blue }).unwrap();
        let snapshot = game.snapshot(Viewer::Team(Team::Red));
        let enemy = snapshot.submarine(Team::Blue).unwrap();
        assert!(enemy.surfaced);
        assert_eq!(enemy.sector, Some(1));
        assert_eq!(enemy.position, None);
    }

    #[test]
    fn private_log_entries_are_filtered() {
        let game = started();
        let red_view: Vec<_> = game.log_for(Viewer::Team(Team::Red)).collect();
        let everything: Vec<_> = game.log_for(Viewer::Spectator).collect();
        assert!(red_view.len() < everything.len());
        assert_eq!(everything.len(), game.log().len());
        assert!(red_view
            .iter()
            .all(|entry| entry.event.visible_to(Viewer::Team(Team::Red))));
    }
}
