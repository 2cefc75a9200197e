mod tests {
    use std::cell::Cell;

    use embassy_time::{Duration, Instant};
    use vindiktrig::time::{Clock, Deadline, is_due};

    struct ManualClock {
        now_ms: Cell<u64>,
    }

    impl Clock for ManualClock {
        fn now(&self) -> Instant {
            let now = self.now_ms.get();
            self.now_ms.set(now + 10);
            Instant::from_millis(now)
        }
    }

    #[test]
    fn test_is_due() {
        let interval = Duration::from_millis(10);
        assert!(is_due(None, interval, Instant::from_millis(0)));
        assert!(!is_due(Some(Instant::from_millis(100)), interval, Instant::from_millis(109)));
        assert!(is_due(Some(Instant::from_millis(100)), interval, Instant::from_millis(110)));
    }

    #[test]
    fn test_is_due_with_clock_behind_guard() {
        // A timestamp from the future never counts as elapsed
        let interval = Duration::from_millis(10);
        assert!(!is_due(Some(Instant::from_millis(500)), interval, Instant::from_millis(100)));
    }

    #[test]
    fn test_deadline_expiry() {
        let deadline = Deadline::new(Instant::from_millis(1000), Duration::from_millis(100));
        assert!(!deadline.is_expired(Instant::from_millis(1000)));
        assert!(!deadline.is_expired(Instant::from_millis(1100)));
        assert!(deadline.is_expired(Instant::from_millis(1101)));
    }

    #[test]
    fn test_poll_returns_first_value() {
        let clock = ManualClock {
            now_ms: Cell::new(0),
        };
        let deadline = Deadline::new(Instant::from_millis(0), Duration::from_millis(100));

        let mut attempts = 0;
        let result: Result<Option<u32>, ()> = deadline.poll(&clock, || {
            attempts += 1;
            Ok((attempts == 3).then_some(42))
        });
        assert_eq!(result, Ok(Some(42)));
        assert_eq!(attempts, 3);
    }

    #[test]
    fn test_poll_gives_up_after_deadline() {
        let clock = ManualClock {
            now_ms: Cell::new(0),
        };
        let deadline = Deadline::new(Instant::from_millis(0), Duration::from_millis(100));

        let mut attempts = 0;
        let result: Result<Option<u32>, ()> = deadline.poll(&clock, || {
            attempts += 1;
            Ok(None)
        });
        assert_eq!(result, Ok(None));
        // Clock reads 0, 10, .., 110; the last one is past the deadline
        assert_eq!(attempts, 12);
    }

    #[test]
    fn test_poll_stops_on_error() {
        let clock = ManualClock {
            now_ms: Cell::new(0),
        };
        let deadline = Deadline::new(Instant::from_millis(0), Duration::from_millis(100));

        let result: Result<Option<u32>, &str> = deadline.poll(&clock, || Err("broken"));
        assert_eq!(result, Err("broken"));
    }
}
