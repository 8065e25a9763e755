mod tests {
    use ledstrip_controller::mode::{MODE_COUNT, ModeId};

    #[test]
    fn test_mode_round_trip() {
        for mode in ModeId::ALL {
            assert_eq!(ModeId::from_raw(mode.as_raw()), Some(mode));
            assert_eq!(ModeId::parse_from_str(mode.as_str()), Some(mode));
        }
        assert_eq!(ModeId::ALL.len(), usize::from(MODE_COUNT));
    }

    #[test]
    fn test_mode_names() {
        assert_eq!(ModeId::Stroboscope.as_str(), "stroboscope");
        assert_eq!(ModeId::Schedule.as_str(), "schedule");
        assert_eq!(ModeId::parse_from_str("Waves"), None);
        assert_eq!(ModeId::parse_from_str("sparkle"), None);
        assert_eq!(ModeId::from_raw(MODE_COUNT), None);
        assert_eq!(ModeId::default(), ModeId::Off);
    }

    #[test]
    fn test_mode_groups() {
        assert_eq!(ModeId::Snowflake.step_base(), 20);
        assert_eq!(ModeId::Rainbow.step_base(), 1_000);

        let special: Vec<_> = ModeId::ALL.into_iter().filter(|m| m.is_special()).collect();
        assert_eq!(special, [ModeId::Cycle, ModeId::Schedule]);

        let cyclable: Vec<_> = ModeId::ALL.into_iter().filter(|m| m.is_cyclable()).collect();
        assert_eq!(cyclable.first(), Some(&ModeId::Waves));
        assert_eq!(cyclable.last(), Some(&ModeId::Pulse));
        assert_eq!(cyclable.len(), 7);
    }
}
