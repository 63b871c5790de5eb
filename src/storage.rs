//! Storage key definitions for the connection registry contract.

use soroban_sdk::{contracttype, Address, BytesN, Env};

/// Storage keys for the connection registry contract.
///
/// Instance keys hold contract-wide configuration and counters; every other
/// key lives in persistent storage.
#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    /// Contract administrator address.
    Admin,

    /// Number of profiles ever registered.
    TotalUsers,

    /// Number of connections ever created.
    TotalConnections,

    /// Registration-order index: position -> Address.
    UserAt(u64),

    /// Maps Address to Profile struct.
    Profile(Address),

    /// Ordered list of addresses connected to an address.
    Adjacency(Address),

    /// Maps canonical pair key to Connection struct.
    Connection(BytesN<32>),
}

/// Time-to-live for registry data in ledger entries.
pub const PROFILE_TTL_THRESHOLD: u32 = 518400; // ~30 days
pub const PROFILE_TTL_EXTEND: u32 = 2592000; // ~150 days

pub(crate) fn extend_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PROFILE_TTL_THRESHOLD, PROFILE_TTL_EXTEND);
}

pub(crate) fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(PROFILE_TTL_THRESHOLD, PROFILE_TTL_EXTEND);
}

/// Read a counter from instance storage, defaulting to zero.
pub(crate) fn read_counter(env: &Env, key: &DataKey) -> u64 {
    env.storage().instance().get(key).unwrap_or(0)
}

/// Increment a counter in instance storage and return the previous value.
pub(crate) fn bump_counter(env: &Env, key: &DataKey) -> u64 {
    let count = read_counter(env, key);
    env.storage().instance().set(key, &(count + 1));
    count
}
