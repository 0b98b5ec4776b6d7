//! Identifier generation
//!
//! Session codes are short join codes, not security tokens: 6 characters
//! from `[A-Z0-9]`, re-drawn on collision against the store's current key
//! set. User and order ids combine a millisecond timestamp with a random
//! base-36 suffix, unique for the lifetime of a store instance.

use rand::Rng;
use shared::util::now_millis;

const SESSION_CODE_LEN: usize = 6;
const SESSION_CODE_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

const SUFFIX_LEN: usize = 9;
const SUFFIX_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Draw a session code not matched by `taken`
///
/// The 36^6 keyspace makes the retry loop practically unbounded-safe.
pub fn session_code<F>(taken: F) -> String
where
    F: Fn(&str) -> bool,
{
    let mut rng = rand::thread_rng();
    loop {
        let code: String = (0..SESSION_CODE_LEN)
            .map(|_| {
                let idx = rng.gen_range(0..SESSION_CODE_CHARSET.len());
                SESSION_CODE_CHARSET[idx] as char
            })
            .collect();
        if !taken(&code) {
            return code;
        }
    }
}

/// Generate a unique user id: `user_{millis}_{suffix}`
pub fn user_id() -> String {
    format!("user_{}_{}", now_millis(), random_suffix())
}

/// Generate a unique order id: `order_{millis}_{suffix}`
pub fn order_id() -> String {
    format!("order_{}_{}", now_millis(), random_suffix())
}

fn random_suffix() -> String {
    let mut rng = rand::thread_rng();
    (0..SUFFIX_LEN)
        .map(|_| {
            let idx = rng.gen_range(0..SUFFIX_CHARSET.len());
            SUFFIX_CHARSET[idx] as char
        })
        .collect()
}
