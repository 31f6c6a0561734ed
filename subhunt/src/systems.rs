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

//! Weapon and utility systems and their charge counters.
use std::{fmt, str::FromStr};

use enumflags2::BitFlags;
use serde::{Deserialize, Serialize};

/// A system the first mate charges and the captain activates.
#[derive(BitFlags, Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum System {
    Torpedo = 0b00001,
    Mine = 0b00010,
    Sonar = 0b00100,
    Drone = 0b01000,
    Stealth = 0b10000,
}

impl System {
    /// All systems, in charge table order.
    pub const ALL: [System; 5] = [
        System::Torpedo,
        System::Mine,
        System::Sonar,
        System::Drone,
        System::Stealth,
    ];

    /// Position of this system in [`System::ALL`].
    pub fn index(self) -> usize {
        match self {
            System::Torpedo => 0,
            System::Mine => 1,
            System::Sonar => 2,
            System::Drone => 3,
            System::Stealth => 4,
        }
    }

    /// Charge needed before the system can be activated.
    pub fn max_charge(self) -> u8 {
        match self {
            System::Torpedo | System::Mine | System::Sonar | System::Drone => 6,
            System::Stealth => 4,
        }
    }

    /// Colour of the engineering nodes that block this system.
    pub fn color(self) -> Color {
        match self {
            System::Torpedo | System::Mine => Color::Red,
            System::Sonar | System::Drone => Color::Green,
            System::Stealth => Color::Yellow,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            System::Torpedo => "torpedo",
            System::Mine => "mine",
            System::Sonar => "sonar",
            System::Drone => "drone",
            System::Stealth => "stealth",
        }
    }
}

impl fmt::Display for System {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Error returned when parsing an unknown system name.
#[derive(Debug, thiserror::Error)]
#[error("unknown system {0:?}")]
pub struct ParseSystemError(String);

impl FromStr for System {
    type Err = ParseSystemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "torpedo" | "torp" => Ok(System::Torpedo),
            "mine" => Ok(System::Mine),
            "sonar" => Ok(System::Sonar),
            "drone" => Ok(System::Drone),
            "stealth" | "silence" => Ok(System::Stealth),
            _ => Err(ParseSystemError(s.to_owned())),
        }
    }
}

/// Colour of an engineering node.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Green,
    Yellow,
    Radiation,
}

impl Color {
    /// Systems blocked while a node of this colour is marked. Radiation blocks
    /// nothing on its own.
    pub fn systems(self) -> BitFlags<System> {
        match self {
            Color::Red => BitFlags::from(System::Torpedo) | System::Mine,
            Color::Green => BitFlags::from(System::Sonar) | System::Drone,
            Color::Yellow => BitFlags::from(System::Stealth),
            Color::Radiation => BitFlags::empty(),
        }
    }
}

/// Charge counters for every system of one submarine.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Systems {
    charge: [u8; 5],
}

impl Systems {
    /// Current charge of the system.
    pub fn charge(&self, system: System) -> u8 {
        self.charge[system.index()]
    }

    /// Whether the system has reached its maximum charge.
    pub fn is_full(&self, system: System) -> bool {
        self.charge(system) >= system.max_charge()
    }

    /// Set of systems at maximum charge.
    pub fn full(&self) -> BitFlags<System> {
        System::ALL
            .iter()
            .filter(|&&system| self.is_full(system))
            .fold(BitFlags::empty(), |set, &system| set | system)
    }

    /// Whether every system is at maximum charge.
    pub fn all_full(&self) -> bool {
        self.full() == BitFlags::all()
    }

    /// Add one unit of charge, capped at the maximum. Returns the new charge.
    pub(crate) fn add_charge(&mut self, system: System) -> u8 {
        let slot = &mut self.charge[system.index()];
        *slot = (*slot + 1).min(system.max_charge());
        *slot
    }

    /// Drain the system after activation.
    pub(crate) fn drain(&mut self, system: System) {
        self.charge[system.index()] = 0;
    }

    #[cfg(test)]
    pub(crate) fn fill(&mut self, system: System) {
        self.charge[system.index()] = system.max_charge();
    }

    /// Iterate over every system and its current charge.
    pub fn iter(&self) -> impl '_ + Iterator<Item = (System, u8)> {
        System::ALL
            .iter()
            .map(move |&system| (system, self.charge(system)))
    }
}
