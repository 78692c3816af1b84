//! Taskbar clock: a repeating timer plus a validated strftime pattern

use crate::error::{ShellError, ShellResult};
use crate::shell::types::Feature;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, TimeZone};
use std::fmt::{Display, Write};
use std::time::{Duration, Instant};

pub struct Clock {
    format: String,
    interval: Duration,
    next_tick: Instant,
}

impl Clock {
    /// The first tick is due at `now`.
    pub fn new(format: &str, interval: Duration, now: Instant) -> ShellResult<Self> {
        if interval.is_zero() {
            return Err(ShellError::init(Feature::Clock, "interval must be positive"));
        }
        if format.is_empty() {
            return Err(ShellError::init(Feature::Clock, "empty clock format"));
        }
        if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
            return Err(ShellError::init(
                Feature::Clock,
                format!("invalid clock format {:?}", format),
            ));
        }

        Ok(Clock {
            format: format.to_string(),
            interval,
            next_tick: now,
        })
    }

    /// Returns true once per elapsed interval and schedules the next tick.
    ///
    /// Missed ticks are not replayed; the next one is due a full interval
    /// after `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next_tick {
            return false;
        }
        self.next_tick = now + self.interval;
        true
    }

    /// Time left until the next tick is due
    pub fn until_next_tick(&self, now: Instant) -> Duration {
        self.next_tick.saturating_duration_since(now)
    }

    pub fn render<Tz: TimeZone>(&self, time: &DateTime<Tz>) -> ShellResult<String>
    where
        Tz::Offset: Display,
    {
        let mut text = String::new();
        write!(text, "{}", time.format(&self.format))
            .map_err(|_| ShellError::handler("clock update", "time formatting failed"))?;
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    const SECOND: Duration = Duration::from_millis(1000);

    #[test]
    fn test_first_tick_is_immediate() {
        let now = Instant::now();
        let mut clock = Clock::new("%H:%M:%S", SECOND, now).unwrap();
        assert!(clock.poll(now));
        assert!(!clock.poll(now));
    }

    #[test]
    fn test_ticks_once_per_interval() {
        let start = Instant::now();
        let mut clock = Clock::new("%H:%M:%S", SECOND, start).unwrap();
        assert!(clock.poll(start));

        assert!(!clock.poll(start + Duration::from_millis(400)));
        assert!(!clock.poll(start + Duration::from_millis(999)));
        assert!(clock.poll(start + SECOND));
        assert!(!clock.poll(start + Duration::from_millis(1500)));
    }

    #[test]
    fn test_missed_ticks_collapse() {
        let start = Instant::now();
        let mut clock = Clock::new("%H:%M:%S", SECOND, start).unwrap();
        assert!(clock.poll(start));

        let late = start + Duration::from_secs(10);
        assert!(clock.poll(late));
        assert!(!clock.poll(late));
        assert_eq!(clock.until_next_tick(late), SECOND);
    }

    #[test]
    fn test_until_next_tick() {
        let start = Instant::now();
        let mut clock = Clock::new("%H:%M:%S", SECOND, start).unwrap();
        assert_eq!(clock.until_next_tick(start), Duration::ZERO);
        clock.poll(start);
        assert_eq!(
            clock.until_next_tick(start + Duration::from_millis(250)),
            Duration::from_millis(750)
        );
    }

    #[test]
    fn test_render() {
        let clock = Clock::new("%H:%M:%S", SECOND, Instant::now()).unwrap();
        let time = Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 3).unwrap();
        assert_eq!(clock.render(&time).unwrap(), "07:05:03");

        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(clock.render(&time.with_timezone(&offset)).unwrap(), "09:05:03");
    }

    #[test]
    fn test_invalid_setup() {
        let now = Instant::now();
        assert!(Clock::new("%H:%Q", SECOND, now).is_err());
        assert!(Clock::new("", SECOND, now).is_err());
        assert!(Clock::new("%H", Duration::ZERO, now).is_err());

        let err = Clock::new("%", SECOND, now).err().unwrap();
        assert!(matches!(err, ShellError::Init { feature: Feature::Clock, .. }));
    }
}
