use time::{Date, OffsetDateTime, UtcOffset};

/// Shift a timestamp into the local offset, falling back to UTC when the
/// local offset cannot be determined.
pub fn to_local(dt: OffsetDateTime) -> OffsetDateTime {
    if let Ok(local_offset) = UtcOffset::current_local_offset() {
        dt.to_offset(local_offset)
    } else {
        dt
    }
}

/// The calendar day `dt` falls on for the local user.
pub fn local_day(dt: OffsetDateTime) -> Date {
    to_local(dt).date()
}

/// Today's local calendar day.
pub fn today() -> Date {
    local_day(OffsetDateTime::now_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_day_is_stable_across_offsets() {
        // Whatever the host offset, converting twice lands on the same day.
        let dt = OffsetDateTime::now_utc();
        assert_eq!(local_day(dt), local_day(to_local(dt)));
    }

    #[test]
    fn today_matches_a_fresh_now() {
        let before = today();
        let after = today();
        // May differ across a midnight boundary, otherwise equal.
        assert!(before == after || before.next_day() == Some(after));
    }
}
