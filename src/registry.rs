//! Profile registry: profile records, registration order and user count.

use soroban_sdk::{log, Address, Env, String, Vec};

use crate::events::{emit_profile_updated, emit_user_registered};
use crate::profile::Profile;
use crate::storage::{bump_counter, extend_instance, extend_persistent, read_counter, DataKey};
use crate::validation::validate_profile_input;
use crate::RegistryError;

pub(crate) fn require_initialized(env: &Env) -> Result<(), RegistryError> {
    if env.storage().instance().has(&DataKey::Admin) {
        Ok(())
    } else {
        Err(RegistryError::NotInitialized)
    }
}

pub(crate) fn register(
    env: &Env,
    identity: Address,
    name: String,
    bio: String,
    skills: Vec<String>,
) -> Result<(), RegistryError> {
    identity.require_auth();
    require_initialized(env)?;

    let profile_key = DataKey::Profile(identity.clone());
    if env.storage().persistent().has(&profile_key) {
        return Err(RegistryError::AlreadyRegistered);
    }

    if !validate_profile_input(&name, &bio, &skills) {
        return Err(RegistryError::InvalidInput);
    }

    let now = env.ledger().timestamp();
    let profile = Profile::new(identity.clone(), name.clone(), bio, skills, now);
    env.storage().persistent().set(&profile_key, &profile);
    extend_persistent(env, &profile_key);

    let adjacency_key = DataKey::Adjacency(identity.clone());
    env.storage()
        .persistent()
        .set(&adjacency_key, &Vec::<Address>::new(env));
    extend_persistent(env, &adjacency_key);

    // Append to the registration-order index
    let position = bump_counter(env, &DataKey::TotalUsers);
    let index_key = DataKey::UserAt(position);
    env.storage().persistent().set(&index_key, &identity);
    extend_persistent(env, &index_key);
    extend_instance(env);

    log!(env, "registered profile", identity, position);
    emit_user_registered(env, &identity, &name, now);

    Ok(())
}

pub(crate) fn update_profile(
    env: &Env,
    identity: Address,
    name: String,
    bio: String,
    skills: Vec<String>,
) -> Result<(), RegistryError> {
    identity.require_auth();
    require_initialized(env)?;

    let mut profile = load_profile(env, &identity)?;

    if !validate_profile_input(&name, &bio, &skills) {
        return Err(RegistryError::InvalidInput);
    }

    let now = env.ledger().timestamp();
    profile.apply_update(name.clone(), bio, skills, now);
    store_profile(env, &profile);
    extend_instance(env);

    log!(env, "updated profile", identity);
    emit_profile_updated(env, &identity, &name, now);

    Ok(())
}

pub(crate) fn is_registered(env: &Env, identity: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Profile(identity.clone()))
}

/// Load a profile, failing with `NotRegistered` when absent.
pub(crate) fn load_profile(env: &Env, identity: &Address) -> Result<Profile, RegistryError> {
    env.storage()
        .persistent()
        .get(&DataKey::Profile(identity.clone()))
        .ok_or(RegistryError::NotRegistered)
}

pub(crate) fn store_profile(env: &Env, profile: &Profile) {
    let key = DataKey::Profile(profile.identity.clone());
    env.storage().persistent().set(&key, profile);
    extend_persistent(env, &key);
}

/// All registered identities in registration order.
pub(crate) fn list_all(env: &Env) -> Vec<Address> {
    let total = read_counter(env, &DataKey::TotalUsers);
    let mut identities = Vec::new(env);

    for position in 0..total {
        if let Some(identity) = env
            .storage()
            .persistent()
            .get::<_, Address>(&DataKey::UserAt(position))
        {
            identities.push_back(identity);
        }
    }

    identities
}
