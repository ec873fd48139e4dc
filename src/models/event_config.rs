use serde::{Deserialize, Serialize};

/// The single event the gate admits members into.
///
/// `Default` is the inactive, zeroed state a fresh store starts from and
/// the state a full reset returns to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventConfig {
    pub active: bool,
    pub name: String,
    pub capacity: u32,
    pub member_password: String,
    pub total: u32,
}

impl EventConfig {
    /// Seats still available; zero when the event is full or inactive.
    pub fn remaining(&self) -> u32 {
        if !self.active {
            return 0;
        }
        self.capacity.saturating_sub(self.total)
    }

    /// Overwrite the configurable fields and activate; `total` is kept.
    pub fn apply_setup(&mut self, setup: &EventSetup) {
        self.name = setup.name.clone();
        self.capacity = setup.capacity;
        self.member_password = setup.member_password.clone();
        self.active = true;
    }
}

/// Admin-provided configuration for `configure_and_activate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventSetup {
    pub name: String,
    pub capacity: u32,
    pub member_password: String,
}

impl EventSetup {
    pub fn new(name: &str, capacity: u32, member_password: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            capacity,
            member_password: member_password.to_string(),
        }
    }
}
