mod tests {
    use embassy_time::{Duration, Instant};
    use rotary_encoder_driver::debounce::RotationDebounce;

    #[test]
    fn first_transition_is_accepted() {
        let mut gate = RotationDebounce::new(Duration::from_millis(1));
        assert!(gate.accept(Instant::from_millis(0)));
    }

    #[test]
    fn transitions_inside_the_interval_are_rejected() {
        let mut gate = RotationDebounce::new(Duration::from_millis(1));
        assert!(gate.accept(Instant::from_micros(0)));
        assert!(!gate.accept(Instant::from_micros(200)));
        assert!(!gate.accept(Instant::from_micros(999)));
        assert!(gate.accept(Instant::from_micros(1000)));
    }

    #[test]
    fn rejection_does_not_extend_the_window() {
        let mut gate = RotationDebounce::new(Duration::from_millis(1));
        assert!(gate.accept(Instant::from_micros(0)));
        // A rejected edge at 900 µs must not push the reference point
        // forward; 1.1 ms after the last *accepted* edge is clean.
        assert!(!gate.accept(Instant::from_micros(900)));
        assert!(gate.accept(Instant::from_micros(1100)));
    }

    #[test]
    fn zero_interval_accepts_everything() {
        let mut gate = RotationDebounce::new(Duration::from_ticks(0));
        let now = Instant::from_millis(5);
        assert!(gate.accept(now));
        assert!(gate.accept(now));
        assert!(gate.accept(now));
    }

    #[test]
    fn tick_wraparound_yields_a_sane_interval() {
        let mut gate = RotationDebounce::new(Duration::from_ticks(100));
        assert!(gate.accept(Instant::from_ticks(u64::MAX - 50)));
        // 71 ticks elapsed, counted across the wrap point: rejected.
        assert!(!gate.accept(Instant::from_ticks(20)));
        // Exactly 100 ticks elapsed across the wrap point: accepted.
        assert!(gate.accept(Instant::from_ticks(49)));
    }
}
