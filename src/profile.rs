//! Profile and connection records.

use soroban_sdk::{contracttype, Address, String, Vec};

/// Registered user profile.
///
/// One record exists per registered address. The record's presence in
/// storage is what marks the address as registered.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Profile {
    /// Owner address. Never changes after registration.
    pub identity: Address,

    /// Display name (non-empty, not unique).
    pub name: String,

    /// Free-form biography (non-empty).
    pub bio: String,

    /// Skill tags in the order they were supplied.
    pub skills: Vec<String>,

    /// Number of entries in this address's adjacency list.
    pub connection_count: u32,

    /// Ledger timestamp of registration.
    pub registered_at: u64,

    /// Ledger timestamp of the last profile write.
    pub updated_at: u64,
}

impl Profile {
    /// Create a new profile with no connections.
    pub fn new(
        identity: Address,
        name: String,
        bio: String,
        skills: Vec<String>,
        registered_at: u64,
    ) -> Self {
        Self {
            identity,
            name,
            bio,
            skills,
            connection_count: 0,
            registered_at,
            updated_at: registered_at,
        }
    }

    /// Replace the user-editable fields.
    pub fn apply_update(&mut self, name: String, bio: String, skills: Vec<String>, now: u64) {
        self.name = name;
        self.bio = bio;
        self.skills = skills;
        self.updated_at = now;
    }
}

/// A mutual connection between two registered addresses.
///
/// `low` and `high` hold the endpoints in canonical order, so the record is
/// the same whichever side initiated it.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Connection {
    pub low: Address,
    pub high: Address,
    pub created_at: u64,
    pub active: bool,
}

/// Aggregate registry counters.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Statistics {
    pub registered_users: u64,
    pub active_connections: u64,
}
