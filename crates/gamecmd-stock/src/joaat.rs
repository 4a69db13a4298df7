//! Jenkins one-at-a-time hash, the game's name-to-id scheme for models and
//! weapons

/// Hash a model or weapon name. Input is lowercased first.
#[must_use]
pub fn joaat(input: &str) -> u32 {
    let mut hash: u32 = 0;
    for byte in input.bytes().map(|b| b.to_ascii_lowercase()) {
        hash = hash.wrapping_add(u32::from(byte));
        hash = hash.wrapping_add(hash << 10);
        hash ^= hash >> 6;
    }
    hash = hash.wrapping_add(hash << 3);
    hash ^= hash >> 11;
    hash.wrapping_add(hash << 15)
}
