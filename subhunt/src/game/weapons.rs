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

//! Torpedoes, mines, drones and sonar.
use crate::{
    game::{
        action::SonarClaim,
        errors::ActionError,
        event::{DamageCause, Event},
        turn::Pending,
        Game, Phase, Team,
    },
    map::Cell,
    systems::System,
};

/// Furthest a torpedo can reach, in Manhattan distance.
pub const TORPEDO_RANGE: usize = 4;

/// Damage dealt to a submarine at `cell` by an explosion at `center`: 2 for a
/// direct hit, 1 when the cells touch, even diagonally, and 0 otherwise.
pub fn blast_damage(center: &Cell, cell: &Cell) -> i32 {
    match center.chebyshev(cell) {
        0 => 2,
        1 => 1,
        _ => 0,
    }
}

impl Game {
    /// Check that the system could be activated right now, apart from the
    /// requirement to move first.
    pub(super) fn check_system(&self, team: Team, system: System) -> Result<(), ActionError> {
        let sub = self.submarine(team);
        if sub.surfaced() {
            return Err(ActionError::Surfaced);
        }
        if self.turn_state.system_used {
            return Err(ActionError::SystemUsed);
        }
        if !sub.systems().is_full(system) {
            return Err(ActionError::NotCharged(system));
        }
        if sub.engineering().is_blocked(system) {
            return Err(ActionError::Blocked(system));
        }
        Ok(())
    }

    /// Full check for activating a weapon or detection system.
    fn check_activation(&self, team: Team, system: System) -> Result<(), ActionError> {
        self.admit(team)?;
        if !self.turn_state.moved() {
            return Err(ActionError::NotMoved);
        }
        self.check_system(team, system)
    }

    /// Drain the system and spend the turn's activation.
    pub(super) fn activate(&mut self, team: Team, system: System, events: &mut Vec<Event>) {
        self.submarine_mut(team).systems_mut().drain(system);
        self.turn_state.system_used = true;
        events.push(Event::SystemActivated { team, system });
    }

    /// Apply an explosion at `center` to both submarines in turn order.
    fn blast(&mut self, center: Cell, events: &mut Vec<Event>) {
        let order = self.turn_order;
        for &team in order.iter() {
            let amount = match self.submarine(team).position() {
                Some(cell) => blast_damage(&center, &cell),
                None => 0,
            };
            if amount > 0 {
                self.inflict(team, amount, DamageCause::Explosion { cell: center }, events);
            }
        }
    }

    pub(super) fn fire_torpedo(
        &mut self,
        team: Team,
        target: Cell,
        events: &mut Vec<Event>,
    ) -> Result<(), ActionError> {
        self.check_activation(team, System::Torpedo)?;
        self.check_water(&target)?;
        let from = self
            .submarine(team)
            .position()
            .ok_or(ActionError::NotStarted)?;
        let distance = from.manhattan(&target);
        if distance == 0 || distance > TORPEDO_RANGE {
            return Err(ActionError::OutOfRange(distance));
        }

        self.activate(team, System::Torpedo, events);
        events.push(Event::TorpedoFired { team, target });
        for &owner in Team::ALL.iter() {
            if self.submarine_mut(owner).clear_mines_at(&target) > 0 {
                events.push(Event::MineDestroyed {
                    team: owner,
                    cell: target,
                });
            }
        }
        self.blast(target, events);
        Ok(())
    }

    pub(super) fn place_mine(
        &mut self,
        team: Team,
        target: Cell,
        events: &mut Vec<Event>,
    ) -> Result<(), ActionError> {
        self.check_activation(team, System::Mine)?;
        self.check_water(&target)?;
        let sub = self.submarine(team);
        let from = sub.position().ok_or(ActionError::NotStarted)?;
        if from.manhattan(&target) != 1 {
            return Err(ActionError::NotAdjacent(target));
        }
        if sub.visited(&target) {
            return Err(ActionError::Revisit(target));
        }
        if sub.has_mine_at(&target) {
            return Err(ActionError::OwnMine(target));
        }

        self.activate(team, System::Mine, events);
        self.submarine_mut(team).lay_mine(target);
        events.push(Event::MinePlaced { team, cell: target });
        Ok(())
    }

    /// Set off one of the team's mines. The submarine can never enter one of its
    /// own mines, so a direct hit from [`blast_damage`] only ever lands on the
    /// enemy.
    pub(super) fn detonate_mine(
        &mut self,
        team: Team,
        index: usize,
        events: &mut Vec<Event>,
    ) -> Result<(), ActionError> {
        self.admit(team)?;
        if self.submarine(team).surfaced() {
            return Err(ActionError::Surfaced);
        }
        if self.turn_state.system_used {
            return Err(ActionError::SystemUsed);
        }
        let cell = self
            .submarine_mut(team)
            .take_mine(index)
            .ok_or(ActionError::NoSuchMine(index))?;

        self.turn_state.system_used = true;
        events.push(Event::MineDetonated { team, cell });
        self.blast(cell, events);
        Ok(())
    }

    pub(super) fn launch_drone(
        &mut self,
        team: Team,
        sector: usize,
        events: &mut Vec<Event>,
    ) -> Result<(), ActionError> {
        self.check_activation(team, System::Drone)?;
        if !self.map.has_sector(sector) {
            return Err(ActionError::NoSuchSector(sector));
        }

        self.activate(team, System::Drone, events);
        let found = self
            .submarine(team.other())
            .position()
            .map_or(false, |cell| self.map.sector_of(&cell) == sector);
        events.push(Event::DroneResult {
            team,
            sector,
            found,
        });
        Ok(())
    }

    pub(super) fn activate_sonar(
        &mut self,
        team: Team,
        events: &mut Vec<Event>,
    ) -> Result<(), ActionError> {
        self.check_activation(team, System::Sonar)?;

        self.activate(team, System::Sonar, events);
        self.turn_state.pending = Some(Pending::Sonar { from: team.other() });
        Ok(())
    }

    pub(super) fn respond_sonar(
        &mut self,
        team: Team,
        claims: [SonarClaim; 2],
        events: &mut Vec<Event>,
    ) -> Result<(), ActionError> {
        match self.phase {
            Phase::Playing => {}
            Phase::Placement => return Err(ActionError::NotStarted),
            Phase::Ended => return Err(ActionError::GameOver),
        }
        match self.turn_state.pending {
            None => return Err(ActionError::NoSonarPending),
            Some(Pending::Sonar { from }) if from != team => {
                return Err(ActionError::NotResponder(team))
            }
            Some(Pending::Sonar { .. }) => {}
        }
        let [first, second] = claims;
        if first.kind() == second.kind() {
            return Err(ActionError::SameClaimKind(first.kind()));
        }
        let cell = self
            .submarine(team)
            .position()
            .ok_or(ActionError::NotStarted)?;
        match (first.holds(&self.map, &cell), second.holds(&self.map, &cell)) {
            (true, true) => return Err(ActionError::BothTrue),
            (false, false) => return Err(ActionError::BothFalse),
            _ => {}
        }

        self.turn_state.pending = None;
        events.push(Event::SonarResult {
            team: team.other(),
            responder: team,
            claims,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blast_damage_falls_off() {
        let center = Cell::new(5, 5);
        assert_eq!(blast_damage(&center, &Cell::new(5, 5)), 2);
        assert_eq!(blast_damage(&center, &Cell::new(4, 4)), 1);
        assert_eq!(blast_damage(&center, &Cell::new(5, 6)), 1);
        assert_eq!(blast_damage(&center, &Cell::new(5, 7)), 0);
        assert_eq!(blast_damage(&center, &Cell::new(3, 4)), 0);
    }
}
