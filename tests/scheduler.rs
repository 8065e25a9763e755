mod tests {
    use ledstrip_controller::scheduler::StepScheduler;

    #[test]
    fn test_step_delay() {
        assert_eq!(StepScheduler::step_delay(0, 1_000), 101_000);
        assert_eq!(StepScheduler::step_delay(1, 1_000), 100_000);
        assert_eq!(StepScheduler::step_delay(100, 1_000), 1_000);
        assert_eq!(StepScheduler::step_delay(50, 20), 2_000);
    }

    #[test]
    fn test_speed_is_clamped() {
        assert_eq!(
            StepScheduler::step_delay(127, 1_000),
            StepScheduler::step_delay(100, 1_000)
        );
    }

    #[test]
    fn test_schedule_and_due() {
        let mut scheduler = StepScheduler::new();
        assert_eq!(scheduler.schedule(1_000, 100, 1_000), 2_000);
        assert!(!scheduler.is_overflow());
        assert!(!scheduler.is_due(1_500));
        assert!(!scheduler.is_due(2_000));
        assert!(scheduler.is_due(2_001));
    }

    #[test]
    fn test_overflow_holds_until_clock_wraps() {
        let mut scheduler = StepScheduler::new();
        let now = u32::MAX - 10;
        let deadline = scheduler.schedule(now, 100, 1_000);
        assert_eq!(deadline, 989);
        assert!(scheduler.is_overflow());

        // Numerically past the deadline, but the clock has not wrapped yet.
        assert!(!scheduler.is_due(u32::MAX));
        scheduler.settle(u32::MAX);
        assert!(scheduler.is_overflow());

        scheduler.settle(5);
        assert!(!scheduler.is_overflow());
        assert!(!scheduler.is_due(5));
        assert!(scheduler.is_due(990));
    }
}
