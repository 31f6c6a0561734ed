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

//! Whole matches played through the public interface only.
use serde_json::json;

use subhunt::{
    Action, Cell, Color, Direction, Event, Game, Map, MapSettings, Outcome, Phase, System,
    Team, Viewer,
};

/// Move, let the engineer mark a node that does not block weapons, charge
/// torpedoes if possible and end the turn.
fn turn(game: &mut Game, team: Team, direction: Direction) {
    game.apply(Action::Move { team, direction }).unwrap();
    let index = game
        .submarine(team)
        .engineering()
        .section(direction)
        .position(|node| !node.marked && node.color != Color::Red && node.color != Color::Radiation)
        .expect("no harmless node left");
    game.apply(Action::MarkNode {
        team,
        direction,
        index,
    })
    .unwrap();
    let system = if game.submarine(team).systems().is_full(System::Torpedo) {
        System::Mine
    } else {
        System::Torpedo
    };
    game.apply(Action::Charge { team, system }).unwrap();
    game.apply(Action::EndTurn { team }).unwrap();
}

#[test]
fn charged_torpedo_hits_the_enemy() {
    let mut game = Game::new(Map::open(10, 10, 5).unwrap(), Team::Blue);
    game.apply(Action::Place {
        team: Team::Blue,
        cell: Cell::new(1, 1),
    })
    .unwrap();
    game.apply(Action::Place {
        team: Team::Red,
        cell: Cell::new(9, 9),
    })
    .unwrap();

    let blue = [Direction::East, Direction::South];
    let red = [Direction::North, Direction::West];
    for round in 0..6 {
        turn(&mut game, Team::Blue, blue[round % 2]);
        turn(&mut game, Team::Red, red[round % 2]);
    }
    assert_eq!(game.submarine(Team::Blue).position(), Some(Cell::new(4, 4)));
    assert_eq!(game.submarine(Team::Red).position(), Some(Cell::new(6, 6)));
    assert!(game.submarine(Team::Blue).ready_systems().contains(System::Torpedo));

    game.apply(Action::Move {
        team: Team::Blue,
        direction: Direction::South,
    })
    .unwrap();
    let fire: Action = serde_json::from_value(json!({
        "action": "fire_torpedo",
        "team": "blue",
        "target": [6, 6],
    }))
    .unwrap();
    let outcome = Outcome::from(game.apply(fire));
    assert!(outcome.ok);
    assert!(outcome.events.contains(&Event::TorpedoFired {
        team: Team::Blue,
        target: Cell::new(6, 6),
    }));
    assert_eq!(game.submarine(Team::Red).health(), 2);
    assert_eq!(game.submarine(Team::Blue).health(), 4);

    let red_view = game.snapshot(Viewer::Team(Team::Red));
    let blue_seen_by_red = red_view.submarine(Team::Blue).unwrap();
    assert_eq!(blue_seen_by_red.position, None);
    assert_eq!(blue_seen_by_red.systems[0].charge, 0);

    let intercepted: Vec<_> = game
        .intercepts(Team::Red)
        .map(|entry| entry.event.clone())
        .collect();
    assert_eq!(
        intercepted
            .iter()
            .filter(|event| matches!(event, Event::Moved { .. }))
            .count(),
        7
    );
    assert_eq!(
        intercepted.last(),
        Some(&Event::TorpedoFired {
            team: Team::Blue,
            target: Cell::new(6, 6),
        })
    );
    assert_eq!(game.phase(), Phase::Playing);
}

#[test]
fn rejected_outcome_serializes_reason_and_kind() {
    let mut game = Game::new(Map::default(), Team::Red);
    game.apply(Action::Place {
        team: Team::Blue,
        cell: Cell::new(0, 0),
    })
    .unwrap();
    game.apply(Action::Place {
        team: Team::Red,
        cell: Cell::new(14, 14),
    })
    .unwrap();

    let outcome = Outcome::from(game.apply(Action::Surface { team: Team::Blue }));
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["ok"], false);
    assert_eq!(json["kind"], "turn_ownership");
    assert_eq!(json["reason"], "it is not blue's turn");
    assert_eq!(json["events"], json!([]));
}

#[test]
fn custom_maps_load_from_json() {
    let settings = MapSettings::from_json(
        r#"{"name": "Reef", "rows": 8, "cols": 8, "sector_size": 4, "islands": [[3, 3], [4, 5]]}"#,
    )
    .unwrap();
    let map = Map::new(settings).unwrap();
    assert_eq!(map.name(), "Reef");
    assert_eq!(map.sector_count(), 4);
    assert!(map.is_island(&Cell::new(4, 5)));

    let mut game = Game::new(map, Team::Blue);
    let err = game
        .apply(Action::Place {
            team: Team::Blue,
            cell: Cell::new(3, 3),
        })
        .unwrap_err();
    assert_eq!(err.to_string(), "(3, 3) is an island");
}

#[test]
fn events_are_tagged_for_the_wire() {
    let mut game = Game::new(Map::default(), Team::Blue);
    let events = game
        .apply(Action::Place {
            team: Team::Blue,
            cell: Cell::new(0, 0),
        })
        .unwrap();
    let json = serde_json::to_value(&events).unwrap();
    assert_eq!(
        json,
        json!([
            {"type": "placed", "team": "blue"},
            {"type": "position_changed", "team": "blue", "cell": [0, 0]},
        ])
    );
    assert_eq!(game.log_for(Viewer::Team(Team::Red)).count(), 1);
}
