//! Event emission helpers for the connection registry contract.

use soroban_sdk::{Address, Env, String, Symbol};

/// Emit an event when a profile is registered.
pub fn emit_user_registered(env: &Env, identity: &Address, name: &String, timestamp: u64) {
    let topics = (Symbol::new(env, "user_registered"), identity.clone());
    env.events().publish(topics, (name.clone(), timestamp));
}

/// Emit an event when a profile's editable fields are replaced.
pub fn emit_profile_updated(env: &Env, identity: &Address, name: &String, timestamp: u64) {
    let topics = (Symbol::new(env, "profile_updated"), identity.clone());
    env.events().publish(topics, (name.clone(), timestamp));
}

/// Emit an event when two profiles become connected.
pub fn emit_connection_created(env: &Env, caller: &Address, target: &Address, timestamp: u64) {
    let topics = (
        Symbol::new(env, "connection_created"),
        caller.clone(),
        target.clone(),
    );
    env.events().publish(topics, timestamp);
}
