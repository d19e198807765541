use crate::agents::{Firm, Household};
use serde::{Deserialize, Serialize};
use slotmapd::{new_key_type, HopSlotMap};

new_key_type! {
    pub struct HouseholdID;
    pub struct FirmID;
}

/// Holds every agent of the economy in slotmap arenas.
///
/// Agents are only ever inserted at seeding time and never removed, so
/// iteration order is the insertion order and every run over the same
/// configuration visits agents in the same sequence.
#[derive(Default, Serialize, Deserialize)]
pub struct World {
    pub households: HopSlotMap<HouseholdID, Household>,
    pub firms: HopSlotMap<FirmID, Firm>,
}

impl World {
    pub fn insert_household(&mut self, h: Household) -> HouseholdID {
        self.households.insert(h)
    }

    pub fn insert_firm(&mut self, f: Firm) -> FirmID {
        self.firms.insert(f)
    }

    /// Number of representative agents (classes), not of underlying units.
    pub fn n_agents(&self) -> usize {
        self.households.len() + self.firms.len()
    }

    /// Total household units across all classes, counting multiplicity.
    pub fn household_units(&self) -> u64 {
        self.households.values().map(|h| u64::from(h.n)).sum()
    }

    /// Total firm units across all classes, counting multiplicity.
    pub fn firm_units(&self) -> u64 {
        self.firms.values().map(|f| u64::from(f.n)).sum()
    }
}
