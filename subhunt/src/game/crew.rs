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

//! Engineer and first mate duties that follow every heading.
use crate::{
    engineering::MarkOutcome,
    game::{
        errors::ActionError,
        event::{DamageCause, Event},
        Game, Team,
    },
    map::Direction,
    systems::System,
};

impl Game {
    /// The heading the crew must follow this turn.
    fn crew_heading(&self, team: Team) -> Result<Direction, ActionError> {
        self.admit(team)?;
        let course = self.turn_state.course.ok_or(ActionError::NotMoved)?;
        course.heading().ok_or(ActionError::NoHeading)
    }

    pub(super) fn mark_node(
        &mut self,
        team: Team,
        direction: Direction,
        index: usize,
        events: &mut Vec<Event>,
    ) -> Result<(), ActionError> {
        let heading = self.crew_heading(team)?;
        if self.turn_state.engineer_done {
            return Err(ActionError::EngineerDone);
        }
        if direction != heading {
            return Err(ActionError::WrongSection {
                expected: heading,
                got: direction,
            });
        }
        self.submarine(team)
            .engineering()
            .check_mark(direction, index)?;

        let outcome = self
            .submarine_mut(team)
            .engineering_mut()
            .mark(direction, index)?;
        self.turn_state.engineer_done = true;
        events.push(Event::NodeMarked {
            team,
            direction,
            index,
        });
        match outcome {
            MarkOutcome::Marked => {}
            MarkOutcome::CircuitCleared(circuit) => {
                events.push(Event::CircuitCleared { team, circuit });
            }
            MarkOutcome::Overload(overload) => {
                log::debug!("{} engineering overloaded: {:?}", team, overload);
                events.push(Event::Overload { team, overload });
                self.inflict(team, outcome.damage(), DamageCause::Overload, events);
            }
        }
        Ok(())
    }

    pub(super) fn charge(
        &mut self,
        team: Team,
        system: System,
        events: &mut Vec<Event>,
    ) -> Result<(), ActionError> {
        self.crew_heading(team)?;
        if self.turn_state.first_mate_done {
            return Err(ActionError::FirstMateDone);
        }
        if self.submarine(team).systems().is_full(system) {
            return Err(ActionError::AlreadyFull(system));
        }

        let charge = self.submarine_mut(team).systems_mut().add_charge(system);
        self.turn_state.first_mate_done = true;
        events.push(Event::SystemCharged {
            team,
            system,
            charge,
            max: system.max_charge(),
        });
        Ok(())
    }
}
