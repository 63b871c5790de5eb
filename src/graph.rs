//! Connection graph: undirected mutual connections between registered
//! profiles.
//!
//! A connection is stored once under its canonical pair key and mirrored in
//! both endpoints' adjacency lists. Each endpoint's `connection_count` and the
//! global connection counter move together with those lists.

use soroban_sdk::{log, Address, Env, Vec};

use crate::events::emit_connection_created;
use crate::pairing::{canonical_pair_key, order_pair};
use crate::profile::{Connection, Profile};
use crate::registry::{load_profile, require_initialized, store_profile};
use crate::storage::{bump_counter, extend_instance, extend_persistent, DataKey};
use crate::RegistryError;

pub(crate) fn connect(env: &Env, caller: Address, target: Address) -> Result<(), RegistryError> {
    caller.require_auth();
    require_initialized(env)?;

    if caller == target {
        return Err(RegistryError::InvalidTarget);
    }

    let mut caller_profile = load_profile(env, &caller)?;
    let mut target_profile = load_profile(env, &target)?;

    let pair_key = canonical_pair_key(env, &caller, &target);
    let connection_key = DataKey::Connection(pair_key);
    if is_active(env, &connection_key) {
        return Err(RegistryError::AlreadyConnected);
    }

    let now = env.ledger().timestamp();
    let (low, high) = order_pair(env, &caller, &target);
    let connection = Connection {
        low,
        high,
        created_at: now,
        active: true,
    };
    env.storage().persistent().set(&connection_key, &connection);
    extend_persistent(env, &connection_key);

    link(env, &mut caller_profile, &target);
    link(env, &mut target_profile, &caller);

    bump_counter(env, &DataKey::TotalConnections);
    extend_instance(env);

    log!(env, "connected", caller, target);
    emit_connection_created(env, &caller, &target, now);

    Ok(())
}

/// Append `peer` to the profile's adjacency list and bump its count.
fn link(env: &Env, profile: &mut Profile, peer: &Address) {
    let key = DataKey::Adjacency(profile.identity.clone());
    let mut adjacency = read_adjacency(env, &profile.identity);
    adjacency.push_back(peer.clone());
    env.storage().persistent().set(&key, &adjacency);
    extend_persistent(env, &key);

    profile.connection_count = adjacency.len();
    store_profile(env, profile);
}

fn read_adjacency(env: &Env, identity: &Address) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::Adjacency(identity.clone()))
        .unwrap_or_else(|| Vec::new(env))
}

fn is_active(env: &Env, connection_key: &DataKey) -> bool {
    env.storage()
        .persistent()
        .get::<_, Connection>(connection_key)
        .map(|c| c.active)
        .unwrap_or(false)
}

pub(crate) fn are_connected(env: &Env, a: &Address, b: &Address) -> bool {
    if a == b {
        return false;
    }
    is_active(env, &DataKey::Connection(canonical_pair_key(env, a, b)))
}

pub(crate) fn get_connection(env: &Env, a: &Address, b: &Address) -> Option<Connection> {
    env.storage()
        .persistent()
        .get(&DataKey::Connection(canonical_pair_key(env, a, b)))
}

pub(crate) fn list_connections(env: &Env, identity: &Address) -> Result<Vec<Address>, RegistryError> {
    load_profile(env, identity)?;
    Ok(read_adjacency(env, identity))
}
