use std::time::{Duration, Instant};

/// Debounce clock for repeat-triggered actions. A trigger inside the window
/// is rejected; the clock only advances on an accepted trigger, so hammering
/// the action does not keep pushing the window forward.
#[derive(Debug, Clone)]
pub struct Cooldown {
    window: Duration,
    last_accepted: Option<Instant>,
}

impl Cooldown {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_accepted: None,
        }
    }

    pub fn try_accept(&mut self) -> bool {
        self.try_accept_at(Instant::now())
    }

    pub fn try_accept_at(&mut self, now: Instant) -> bool {
        match self.last_accepted {
            Some(last) if now.duration_since(last) <= self.window => false,
            _ => {
                self.last_accepted = Some(now);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_trigger_is_always_accepted() {
        let mut cooldown = Cooldown::new(Duration::from_millis(1000));
        assert!(cooldown.try_accept_at(Instant::now()));
    }

    #[test]
    fn repeat_inside_window_is_rejected_and_later_retry_accepted() {
        let mut cooldown = Cooldown::new(Duration::from_millis(1000));
        let start = Instant::now();

        assert!(cooldown.try_accept_at(start));
        assert!(!cooldown.try_accept_at(start + Duration::from_millis(500)));
        assert!(cooldown.try_accept_at(start + Duration::from_millis(1100)));
    }

    #[test]
    fn rejected_trigger_does_not_slide_the_window() {
        let mut cooldown = Cooldown::new(Duration::from_millis(1000));
        let start = Instant::now();

        assert!(cooldown.try_accept_at(start));
        // Rejections at 600 and 900 ms must not reset the clock; 1100 ms
        // after the accepted trigger is past the window.
        assert!(!cooldown.try_accept_at(start + Duration::from_millis(600)));
        assert!(!cooldown.try_accept_at(start + Duration::from_millis(900)));
        assert!(cooldown.try_accept_at(start + Duration::from_millis(1100)));
    }
}
