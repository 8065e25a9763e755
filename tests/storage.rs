mod tests {
    use embassy_time::{Duration, Instant};
    use ledstrip_controller::color::{Rgb, SignedColor};
    use ledstrip_controller::config::{Configuration, ScheduleState};
    use ledstrip_controller::mode::ModeId;
    use ledstrip_controller::storage::{
        self, AUTOSAVE_DELAY, Autosave, CONFIGURATION_SIZE, EXTENSION_SIZE, LoadError,
        MemoryStore, STORE_SIZE, StoredState,
    };

    fn sample_config() -> Configuration {
        let mut config = Configuration::default();
        config.mode = ModeId::Snake;
        config.waves.color_max = Rgb::new(255, 0, 0);
        config.waves.speed = SignedColor::new(-100, 5, 0);
        config.rainbow.colors[7] = Rgb::new(1, 2, 3);
        config.rainbow.count = 8;
        config.lines.speed = -42;
        config.lines.multi_color = true;
        config.snowflake.flake_size = 3;
        config.cycle.period = 600;
        config.cycle.next_change = 123_456;
        config.working.position = -1;
        config.working.direction = 1;
        config.working.effect_creating = 70_000;
        config
    }

    #[test]
    fn test_blob_round_trip() {
        let config = sample_config();
        let schedule = ScheduleState {
            count: 3,
            current: 1,
        };
        let blob = storage::encode(&config, &schedule);
        assert_eq!(
            storage::decode(&blob),
            Ok(StoredState { config, schedule })
        );
    }

    #[test]
    fn test_blob_layout() {
        assert_eq!(STORE_SIZE, CONFIGURATION_SIZE + EXTENSION_SIZE);
        let blob = storage::encode(&Configuration::default(), &ScheduleState::default());
        assert_eq!(
            u16::from_le_bytes([blob[0], blob[1]]),
            CONFIGURATION_SIZE as u16
        );
        assert_eq!(u16::from_le_bytes([blob[2], blob[3]]), EXTENSION_SIZE as u16);
    }

    #[test]
    fn test_store_round_trip() {
        let config = sample_config();
        let mut store = MemoryStore::new();
        assert!(storage::save(&mut store, &config, &ScheduleState::default()).is_ok());
        assert_eq!(store.commits(), 1);

        let state = storage::load(&store).expect("valid blob");
        assert_eq!(state.config, config);
    }

    #[test]
    fn test_erased_store_is_rejected() {
        let store = MemoryStore::new();
        assert_eq!(
            storage::load(&store),
            Err(LoadError::HeaderMismatch {
                expected: CONFIGURATION_SIZE as u16,
                found: 0xFFFF,
            })
        );
    }

    #[test]
    fn test_extension_mismatch_is_rejected() {
        let mut store = MemoryStore::new();
        assert!(storage::save(&mut store, &sample_config(), &ScheduleState::default()).is_ok());
        store.bytes_mut()[2] = 0;
        store.bytes_mut()[3] = 0;

        let error = storage::load(&store).expect_err("corrupted extension size");
        assert_eq!(
            error,
            LoadError::ExtensionMismatch {
                expected: EXTENSION_SIZE as u16,
                found: 0,
            }
        );
        assert_eq!(
            error.to_string(),
            format!("extension size 0, expected {EXTENSION_SIZE}")
        );
    }

    #[test]
    fn test_unknown_mode_decodes_as_off() {
        let mut store = MemoryStore::new();
        assert!(storage::save(&mut store, &sample_config(), &ScheduleState::default()).is_ok());
        store.bytes_mut()[4] = 200;

        let state = storage::load(&store).expect("valid sizes");
        assert_eq!(state.config.mode, ModeId::Off);
        assert_eq!(state.config.lines.speed, -42);
    }

    #[test]
    fn test_load_restarts_special_mode() {
        let mut config = sample_config();
        config.mode = ModeId::Lines;
        config.special_mode = ModeId::Cycle;

        let mut store = MemoryStore::new();
        assert!(storage::save(&mut store, &config, &ScheduleState::default()).is_ok());

        let state = storage::load(&store).expect("valid blob");
        assert_eq!(state.config.mode, ModeId::Cycle);
        assert_eq!(state.config.special_mode, ModeId::Cycle);
    }

    #[test]
    fn test_autosave_debounce() {
        let mut autosave = Autosave::new();
        let start = Instant::from_secs(10);
        assert!(!autosave.is_pending());
        assert!(!autosave.is_due(start + AUTOSAVE_DELAY * 2));

        autosave.mark(start);
        assert!(autosave.is_pending());
        assert!(!autosave.is_due(start + AUTOSAVE_DELAY));
        assert!(autosave.is_due(start + AUTOSAVE_DELAY + Duration::from_millis(1)));

        // A later change restarts the quiet period.
        autosave.mark(start + Duration::from_secs(30));
        assert!(!autosave.is_due(start + AUTOSAVE_DELAY + Duration::from_millis(1)));

        autosave.clear();
        assert!(!autosave.is_pending());
    }
}
