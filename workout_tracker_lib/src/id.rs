use chrono::{DateTime, Utc};

const ID_DIGITS: usize = 10;

/// Hands out workout ids derived from the creation time.
///
/// The id is the last ten digits of the millisecond timestamp. Within a
/// session ids are strictly increasing: a second workout created in the same
/// millisecond (or with a clock that stepped back) gets the next free value.
#[derive(Debug, Default, Clone)]
pub struct IdGenerator {
    last_issued: Option<i64>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self, now: DateTime<Utc>) -> String {
        let now_ms = now.timestamp_millis();
        let candidate = match self.last_issued {
            Some(last) if now_ms <= last => last + 1,
            _ => now_ms,
        };
        self.last_issued = Some(candidate);

        let digits = candidate.to_string();
        digits[digits.len().saturating_sub(ID_DIGITS)..].to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_last_ten_digits() {
        let mut ids = IdGenerator::new();
        let now = DateTime::from_timestamp_millis(1_714_555_800_123).unwrap();

        assert_eq!(ids.next_id(now), "4555800123");
    }

    #[test]
    fn same_millisecond_does_not_collide() {
        let mut ids = IdGenerator::new();
        let now = DateTime::from_timestamp_millis(1_714_555_800_123).unwrap();

        let first = ids.next_id(now);
        let second = ids.next_id(now);
        let earlier = ids.next_id(DateTime::from_timestamp_millis(1_714_555_800_000).unwrap());

        assert_eq!(first, "4555800123");
        assert_eq!(second, "4555800124");
        assert_eq!(earlier, "4555800125");
    }

    #[test]
    fn follows_the_clock_when_it_moves_forward() {
        let mut ids = IdGenerator::new();
        ids.next_id(DateTime::from_timestamp_millis(1_000).unwrap());

        assert_eq!(ids.next_id(DateTime::from_timestamp_millis(5_000).unwrap()), "5000");
    }
}
