//! Chronologically sortable keys for pushed children
//!
//! A key is 20 characters from a 64-character web-safe alphabet whose ASCII
//! order matches its digit order: 8 characters of millisecond timestamp
//! followed by 12 characters of a per-millisecond counter. Plain string
//! comparison of two keys therefore orders them by creation.

/// Alphabet in ascending ASCII order
pub const PUSH_CHARS: &[u8; 64] =
    b"-0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ_abcdefghijklmnopqrstuvwxyz";

pub const PUSH_ID_LEN: usize = 20;
const TIMESTAMP_LEN: usize = 8;
const COUNTER_LEN: usize = 12;

/// Generates strictly increasing push keys
#[derive(Clone, Debug, Default)]
pub struct PushIdGenerator {
    last_timestamp: Option<u64>,
    counter: u64,
}

impl PushIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key for an event at `timestamp_ms`.
    ///
    /// If the clock has not advanced (or has gone backwards) since the last
    /// key, the previous timestamp is reused and the counter is bumped.
    pub fn generate(&mut self, timestamp_ms: u64) -> String {
        match self.last_timestamp {
            Some(last) if timestamp_ms <= last => self.counter += 1,
            _ => {
                self.last_timestamp = Some(timestamp_ms);
                self.counter = 0;
            }
        }
        let timestamp = self.last_timestamp.unwrap_or(timestamp_ms);

        let mut id = String::with_capacity(PUSH_ID_LEN);
        encode(&mut id, timestamp, TIMESTAMP_LEN);
        encode(&mut id, self.counter, COUNTER_LEN);
        id
    }
}

fn encode(out: &mut String, mut value: u64, len: usize) {
    let mut digits = [PUSH_CHARS[0]; COUNTER_LEN];
    for digit in digits[..len].iter_mut().rev() {
        *digit = PUSH_CHARS[(value % 64) as usize];
        value /= 64;
    }
    out.extend(digits[..len].iter().map(|&b| char::from(b)));
}

/// Millisecond timestamp encoded in a push key
pub fn decode_timestamp(id: &str) -> Option<u64> {
    if id.len() != PUSH_ID_LEN {
        return None;
    }
    id.bytes().take(TIMESTAMP_LEN).try_fold(0u64, |acc, b| {
        let digit = PUSH_CHARS.iter().position(|&c| c == b)?;
        Some(acc * 64 + digit as u64)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_is_sorted() {
        assert!(PUSH_CHARS.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_same_millisecond_keys_increase() {
        let mut ids = PushIdGenerator::new();
        let keys: Vec<_> = (0..200).map(|_| ids.generate(1_700_000_000_000)).collect();
        assert!(keys.iter().all(|k| k.len() == PUSH_ID_LEN));
        assert!(keys.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_clock_going_backwards() {
        let mut ids = PushIdGenerator::new();
        let a = ids.generate(5_000);
        let b = ids.generate(4_000);
        let c = ids.generate(6_000);
        assert!(a < b && b < c);
        assert_eq!(decode_timestamp(&b), Some(5_000));
        assert_eq!(decode_timestamp(&c), Some(6_000));
    }

    #[test]
    fn test_decode_rejects_foreign_keys() {
        assert_eq!(decode_timestamp("short"), None);
        assert_eq!(decode_timestamp("!!!!!!!!000000000000"), None);
    }
}
