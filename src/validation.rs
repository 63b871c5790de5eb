//! Profile input validation.
//!
//! Every text field must be non-empty and every field has an upper bound so
//! a single profile entry stays small:
//! - Name: 1-64 bytes
//! - Bio: 1-512 bytes
//! - Skills: 1-32 tags, each 1-32 bytes

use soroban_sdk::{String, Vec};

/// Maximum name length in bytes.
pub const MAX_NAME_LENGTH: u32 = 64;

/// Maximum bio length in bytes.
pub const MAX_BIO_LENGTH: u32 = 512;

/// Maximum number of skill tags.
pub const MAX_SKILLS: u32 = 32;

/// Maximum length of a single skill tag in bytes.
pub const MAX_SKILL_LENGTH: u32 = 32;

/// Validate the user-editable profile fields.
///
/// Returns true if all fields are within bounds, false otherwise.
pub fn validate_profile_input(name: &String, bio: &String, skills: &Vec<String>) -> bool {
    if !within(name, MAX_NAME_LENGTH) || !within(bio, MAX_BIO_LENGTH) {
        return false;
    }

    let count = skills.len();
    if count == 0 || count > MAX_SKILLS {
        return false;
    }

    skills.iter().all(|skill| within(&skill, MAX_SKILL_LENGTH))
}

#[inline]
fn within(value: &String, max: u32) -> bool {
    let len = value.len();
    len > 0 && len <= max
}
