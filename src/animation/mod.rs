mod timing;

pub use timing::TimingFunction;

use std::time::{Duration, Instant};

/// Animated move of a scroll offset from one value to another
#[derive(Clone, Debug)]
pub struct ScrollAnimation {
    from: f32,
    to: f32,
    start: Instant,
    duration: Duration,
    timing: TimingFunction,
}

impl ScrollAnimation {
    pub fn new(from: f32, to: f32, start: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            start,
            duration,
            timing: TimingFunction::Linear,
        }
    }

    /// Set the timing function
    pub fn timing(mut self, timing: TimingFunction) -> Self {
        self.timing = timing;
        self
    }

    /// Offset at `now`. Reaches the target exactly once the duration elapsed.
    pub fn sample(&self, now: Instant) -> f32 {
        if self.is_finished(now) {
            return self.to;
        }
        let elapsed = now.saturating_duration_since(self.start).as_secs_f32();
        let t = elapsed / self.duration.as_secs_f32();
        self.from + (self.to - self.from) * self.timing.evaluate(t)
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.duration.is_zero() || now.saturating_duration_since(self.start) >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_progress() {
        let start = Instant::now();
        let anim = ScrollAnimation::new(100.0, 300.0, start, Duration::from_millis(200));

        assert_eq!(anim.sample(start), 100.0);
        assert!((anim.sample(start + Duration::from_millis(100)) - 200.0).abs() < 1e-3);
        assert!(!anim.is_finished(start + Duration::from_millis(199)));
        assert_eq!(anim.sample(start + Duration::from_millis(200)), 300.0);
        assert!(anim.is_finished(start + Duration::from_millis(250)));
    }

    #[test]
    fn test_zero_duration_jumps() {
        let start = Instant::now();
        let anim = ScrollAnimation::new(0.0, 50.0, start, Duration::ZERO);
        assert!(anim.is_finished(start));
        assert_eq!(anim.sample(start), 50.0);
    }
}
