use std::fmt;
use std::time::{Duration, Instant};

/// Elapsed-time clock for one game. Freezes once the puzzle is solved.
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    started: Instant,
    stopped: Option<Duration>,
}

impl Clock {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
            stopped: None,
        }
    }

    pub fn stop(&mut self) {
        if self.stopped.is_none() {
            self.stopped = Some(self.started.elapsed());
        }
    }

    pub fn is_running(&self) -> bool {
        self.stopped.is_none()
    }

    pub fn elapsed(&self) -> Duration {
        self.stopped.unwrap_or_else(|| self.started.elapsed())
    }
}

/// Formats whole seconds as `MM:SS`. Minutes are not wrapped at an hour.
pub fn format_clock(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Result line shown when a game is won.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub size: usize,
    pub moves: u32,
    pub seconds: u64,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Grid {}×{} • {} moves • {}s",
            self.size, self.size, self.moves, self.seconds
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_format() {
        assert_eq!(format_clock(Duration::ZERO), "00:00");
        assert_eq!(format_clock(Duration::from_millis(59_999)), "00:59");
        assert_eq!(format_clock(Duration::from_secs(61)), "01:01");
        assert_eq!(format_clock(Duration::from_secs(3_725)), "62:05");
    }

    #[test]
    fn stopped_clock_is_frozen() {
        let mut clock = Clock::start();
        assert!(clock.is_running());
        clock.stop();
        let frozen = clock.elapsed();
        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(clock.elapsed(), frozen);
        assert!(!clock.is_running());

        clock.stop();
        assert_eq!(clock.elapsed(), frozen);
    }

    #[test]
    fn summary_text() {
        let summary = Summary {
            size: 4,
            moves: 37,
            seconds: 52,
        };
        assert_eq!(summary.to_string(), "Grid 4×4 • 37 moves • 52s");
    }
}
