//! Small pure helpers shared across the workspace.

use chrono::Utc;
use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;
use uuid::Uuid;

/// Default alphabet for [`random_characters`]. Strong enough for throwaway
/// passwords and demo payloads.
pub const RANDOM_WISHLIST: &str =
    "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz~!@-#$";

/// Default length for [`random_characters`].
pub const RANDOM_LENGTH: usize = 20;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Collapse newlines and repeated whitespace into single spaces.
///
/// Used to keep logged SQL statements on one line.
pub fn strip_string(input: &str) -> String {
    WHITESPACE.replace_all(input.trim(), " ").into_owned()
}

/// Random string of [`RANDOM_LENGTH`] characters from [`RANDOM_WISHLIST`].
pub fn random_characters() -> String {
    random_characters_from(RANDOM_LENGTH, RANDOM_WISHLIST)
}

/// Random string of `length` characters drawn from `wishlist`.
pub fn random_characters_from(length: usize, wishlist: &str) -> String {
    let chars: Vec<char> = wishlist.chars().collect();
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| chars[rng.gen_range(0..chars.len())])
        .collect()
}

/// Random number scaled by the current timestamp.
pub fn random_number() -> u64 {
    let ceiling = (Utc::now().timestamp_millis() / 1000) as u64;
    rand::thread_rng().gen_range(0..ceiling)
}

/// Fresh RFC 4122 v4 unique id.
pub fn uniqid() -> Uuid {
    Uuid::new_v4()
}

/// Current Unix timestamp in whole seconds.
pub fn current_unix_timestamp() -> i64 {
    Utc::now().timestamp()
}

/// Unique values of `input`, first occurrence wins, order preserved.
pub fn unique_values<T: PartialEq + Clone>(input: &[T]) -> Vec<T> {
    let mut out: Vec<T> = Vec::with_capacity(input.len());
    for value in input {
        if !out.contains(value) {
            out.push(value.clone());
        }
    }
    out
}
