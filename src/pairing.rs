//! Canonical ordering and keying of address pairs.
//!
//! Addresses are totally ordered by byte-wise lexicographic comparison of
//! their XDR `ScVal` encoding. The pair key is the SHA-256 of the smaller
//! encoding followed by the larger one. XDR encodings are self-delimiting, so
//! distinct unordered pairs always hash distinct preimages.

use soroban_sdk::{xdr::ToXdr, Address, Bytes, BytesN, Env};

/// Encode an address for ordering and hashing.
fn encode(env: &Env, address: &Address) -> Bytes {
    address.clone().to_xdr(env)
}

/// Order two addresses canonically, smaller first.
pub fn order_pair(env: &Env, a: &Address, b: &Address) -> (Address, Address) {
    if encode(env, a) <= encode(env, b) {
        (a.clone(), b.clone())
    } else {
        (b.clone(), a.clone())
    }
}

/// Derive the order-independent key identifying the pair {a, b}.
pub fn canonical_pair_key(env: &Env, a: &Address, b: &Address) -> BytesN<32> {
    let a_bytes = encode(env, a);
    let b_bytes = encode(env, b);

    let (mut preimage, high) = if a_bytes <= b_bytes {
        (a_bytes, b_bytes)
    } else {
        (b_bytes, a_bytes)
    };
    preimage.append(&high);

    env.crypto().sha256(&preimage).to_bytes()
}
