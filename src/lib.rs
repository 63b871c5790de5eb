//! # Soroban Connection Registry
//!
//! Profile registry and mutual-connection graph for the Soroban blockchain.
//!
//! Addresses register a profile, connect with one another, and any
//! application can query the resulting undirected graph. Features include:
//!
//! - Validated profiles with name, bio and skill tags
//! - Symmetric connections keyed by an order-independent pair hash
//! - Per-profile connection counts and global statistics
//! - Registration-order listing of every identity
//!
//! ## Usage
//!
//! ```rust,ignore
//! // Register two profiles
//! client.register(&alice, &name, &bio, &skills);
//! client.register(&bob, &name, &bio, &skills);
//!
//! // Connect them (either side may initiate)
//! client.connect(&alice, &bob);
//! assert!(client.are_connected(&bob, &alice));
//!
//! // Aggregate counters
//! let stats = client.get_statistics();
//! ```

#![no_std]

mod events;
mod graph;
mod pairing;
mod profile;
mod registry;
mod storage;
mod validation;

pub use profile::{Connection, Profile, Statistics};
pub use storage::DataKey;
pub use validation::{MAX_BIO_LENGTH, MAX_NAME_LENGTH, MAX_SKILLS, MAX_SKILL_LENGTH};

use soroban_sdk::{contract, contracterror, contractimpl, Address, BytesN, Env, String, Vec};

use crate::storage::read_counter;

/// Error codes for the connection registry contract.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RegistryError {
    /// Contract has already been initialized.
    AlreadyInitialized = 1,
    /// Contract has not been initialized.
    NotInitialized = 2,
    /// A required field is empty or out of bounds.
    InvalidInput = 3,
    /// Profile already exists for this address.
    AlreadyRegistered = 4,
    /// Caller or target has no profile.
    NotRegistered = 5,
    /// Connection target is the caller itself.
    InvalidTarget = 6,
    /// The pair is already connected.
    AlreadyConnected = 7,
}

#[contract]
pub struct ConnectionRegistryContract;

#[contractimpl]
impl ConnectionRegistryContract {
    // ========== Initialization ==========

    /// Initialize the contract with an admin address.
    ///
    /// Both counters start at zero. This must be called once before any
    /// mutating operation.
    pub fn init(env: Env, admin: Address) -> Result<(), RegistryError> {
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(RegistryError::AlreadyInitialized);
        }

        admin.require_auth();
        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(&DataKey::TotalUsers, &0u64);
        env.storage().instance().set(&DataKey::TotalConnections, &0u64);
        storage::extend_instance(&env);

        Ok(())
    }

    /// Get the admin address.
    pub fn admin(env: Env) -> Result<Address, RegistryError> {
        env.storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(RegistryError::NotInitialized)
    }

    /// Upgrade the contract WASM (admin only).
    pub fn upgrade(env: Env, new_wasm_hash: BytesN<32>) -> Result<(), RegistryError> {
        let admin = Self::admin(env.clone())?;
        admin.require_auth();

        env.deployer().update_current_contract_wasm(new_wasm_hash);
        Ok(())
    }

    // ========== Profiles ==========

    /// Register a new profile for `identity`.
    ///
    /// # Errors
    /// - `AlreadyRegistered` if `identity` already has a profile
    /// - `InvalidInput` if name, bio or skills are empty or too long
    pub fn register(
        env: Env,
        identity: Address,
        name: String,
        bio: String,
        skills: Vec<String>,
    ) -> Result<(), RegistryError> {
        registry::register(&env, identity, name, bio, skills)
    }

    /// Replace the name, bio and skills of an existing profile.
    ///
    /// Connection count and registration time are left untouched.
    pub fn update_profile(
        env: Env,
        identity: Address,
        name: String,
        bio: String,
        skills: Vec<String>,
    ) -> Result<(), RegistryError> {
        registry::update_profile(&env, identity, name, bio, skills)
    }

    /// Get the profile for an address.
    pub fn get_profile(env: Env, identity: Address) -> Result<Profile, RegistryError> {
        registry::load_profile(&env, &identity)
    }

    pub fn is_registered(env: Env, identity: Address) -> bool {
        registry::is_registered(&env, &identity)
    }

    /// Every registered address, in registration order.
    pub fn list_all_users(env: Env) -> Vec<Address> {
        registry::list_all(&env)
    }

    // ========== Connections ==========

    /// Connect `caller` with `target`.
    ///
    /// The connection is mutual: both profiles gain one connection.
    ///
    /// # Errors
    /// - `InvalidTarget` if `target` is `caller`
    /// - `NotRegistered` if either side has no profile
    /// - `AlreadyConnected` if the pair is already connected
    pub fn connect(env: Env, caller: Address, target: Address) -> Result<(), RegistryError> {
        graph::connect(&env, caller, target)
    }

    /// Check whether two addresses are connected, in either order.
    pub fn are_connected(env: Env, a: Address, b: Address) -> bool {
        graph::are_connected(&env, &a, &b)
    }

    /// Addresses connected to `identity`, oldest connection first.
    pub fn list_connections(env: Env, identity: Address) -> Result<Vec<Address>, RegistryError> {
        graph::list_connections(&env, &identity)
    }

    pub fn get_connection(env: Env, a: Address, b: Address) -> Option<Connection> {
        graph::get_connection(&env, &a, &b)
    }

    /// Order-independent storage key for the pair {a, b}.
    pub fn canonical_pair_key(env: Env, a: Address, b: Address) -> BytesN<32> {
        pairing::canonical_pair_key(&env, &a, &b)
    }

    // ========== Statistics ==========

    pub fn get_statistics(env: Env) -> Statistics {
        Statistics {
            registered_users: read_counter(&env, &DataKey::TotalUsers),
            active_connections: read_counter(&env, &DataKey::TotalConnections),
        }
    }
}
