use crate::*;
use near_sdk::json_types::U64;

pub const FIRST_WORDS: [&str; 10] = [
    "Shoot", "Task", "Couple", "Senior", "Attack", "Bed", "Assume", "News", "Drive", "Quality",
];
pub const SECOND_WORDS: [&str; 10] = [
    "Behind", "Body", "Front", "Year", "Three", "Everything", "Head", "Middle", "Happy",
    "Everything",
];
pub const THIRD_WORDS: [&str; 10] = [
    "Push", "Break", "Ten", "Begin", "Until", "Even", "Board", "Order", "Lead", "Moment",
];

const FIRST_WORD_SALT: &str = "FIRST_WORD";
const SECOND_WORD_SALT: &str = "SECOND_WORD";
const THIRD_WORD_SALT: &str = "THIRD_WORD";

// Demo-grade word selection: sha256(salt ++ seed) modulo the list length.
// Deterministic given the seed and trivially predictable.
pub(crate) fn word_index(salt: &str, seed: u64) -> usize {
    let mut bytes = Vec::with_capacity(salt.len() + 8);
    bytes.extend_from_slice(salt.as_bytes());
    bytes.extend_from_slice(&seed.to_le_bytes());
    let hash = env::sha256(&bytes);
    let mut head = [0u8; 8];
    head.copy_from_slice(&hash[..8]);
    (u64::from_le_bytes(head) % WORD_LIST_LEN) as usize
}

#[near]
impl Contract {
    pub fn pick_random_first_word(&self, seed: U64) -> String {
        FIRST_WORDS[word_index(FIRST_WORD_SALT, seed.0)].to_string()
    }

    pub fn pick_random_second_word(&self, seed: U64) -> String {
        SECOND_WORDS[word_index(SECOND_WORD_SALT, seed.0)].to_string()
    }

    pub fn pick_random_third_word(&self, seed: U64) -> String {
        THIRD_WORDS[word_index(THIRD_WORD_SALT, seed.0)].to_string()
    }
}
