mod tests {
    use ledstrip_controller::color::{BLACK, Rgb, SignedColor};
    use ledstrip_controller::command::value::{
        parse_bool, parse_color, parse_i8, parse_i32, parse_signed, parse_u8, parse_u32,
    };
    use ledstrip_controller::command::{
        Command, OptionOutcome, OptionValue, apply_option, for_each_option, format_line,
    };
    use ledstrip_controller::config::Configuration;
    use ledstrip_controller::mode::ModeId;
    use ledstrip_controller::transport::MAX_REPLY_LEN;

    fn config_for(mode: ModeId) -> Configuration {
        Configuration {
            mode,
            ..Configuration::default()
        }
    }

    #[test]
    fn test_parse_command() {
        assert_eq!(Command::parse("#waves"), Some(Command::SelectMode("waves")));
        assert_eq!(
            Command::parse("$speed:10"),
            Some(Command::SetOption {
                name: "speed",
                value: "10"
            })
        );
        assert_eq!(
            Command::parse("@colorMax:255;0;0"),
            Some(Command::SetOption {
                name: "colorMax",
                value: "255;0;0"
            })
        );
        assert_eq!(Command::parse("?"), Some(Command::Dump));
        assert_eq!(Command::parse("hello"), Some(Command::Unknown));
        assert_eq!(Command::parse(""), Some(Command::Unknown));
    }

    #[test]
    fn test_set_option_without_value_is_dropped() {
        assert_eq!(Command::parse("$speed"), None);
        assert_eq!(Command::parse("$speed:"), None);
        assert_eq!(Command::parse("$:5"), None);
    }

    #[test]
    fn test_parse_integers_leniently() {
        assert_eq!(parse_i32("42"), 42);
        assert_eq!(parse_i32("  -7"), -7);
        assert_eq!(parse_i32("+15abc"), 15);
        assert_eq!(parse_i32("abc"), 0);
        assert_eq!(parse_i32(""), 0);
        assert_eq!(parse_i32("99999999999"), i32::MAX);
        assert_eq!(parse_i32("-99999999999"), i32::MIN);
    }

    #[test]
    fn test_parse_narrow_integers_saturate() {
        assert_eq!(parse_u8("300"), 255);
        assert_eq!(parse_u8("-3"), 0);
        assert_eq!(parse_i8("-200"), -128);
        assert_eq!(parse_i8("50"), 50);
        assert_eq!(parse_u32("-1"), 0);
        assert_eq!(parse_u32("120"), 120);
    }

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("true"));
        assert!(parse_bool("1"));
        assert!(parse_bool("5"));
        assert!(!parse_bool("false"));
        assert!(!parse_bool("0"));
        assert!(!parse_bool("yes"));
    }

    #[test]
    fn test_parse_triples() {
        assert_eq!(parse_color("255;0;10"), Rgb::new(255, 0, 10));
        assert_eq!(parse_color("1;;2;3"), Rgb::new(1, 2, 3));
        assert_eq!(parse_color("400;-5;0"), Rgb::new(255, 0, 0));
        assert_eq!(parse_color("1;2"), BLACK);
        assert_eq!(parse_color("1;2;3;4"), BLACK);
        assert_eq!(parse_signed("20;0;-20"), SignedColor::new(20, 0, -20));
        assert_eq!(parse_signed("nope"), SignedColor::default());
    }

    #[test]
    fn test_waves_options_reinitialize() {
        let mut config = config_for(ModeId::Waves);
        assert_eq!(
            apply_option(&mut config, "colorMax", "255;0;0", 0),
            OptionOutcome::Reinitialize
        );
        assert_eq!(config.waves.color_max, Rgb::new(255, 0, 0));
        assert_eq!(
            apply_option(&mut config, "speed", "-5;5;0", 0),
            OptionOutcome::Reinitialize
        );
        assert_eq!(config.waves.speed, SignedColor::new(-5, 5, 0));
    }

    #[test]
    fn test_unknown_option_is_ignored() {
        let mut config = config_for(ModeId::Waves);
        let before = config.clone();
        assert_eq!(
            apply_option(&mut config, "bogus", "1", 0),
            OptionOutcome::Ignored
        );
        assert_eq!(config, before);

        let mut config = config_for(ModeId::Off);
        assert_eq!(
            apply_option(&mut config, "speed", "1", 0),
            OptionOutcome::Ignored
        );
    }

    #[test]
    fn test_rainbow_options() {
        let mut config = config_for(ModeId::Rainbow);
        assert_eq!(
            apply_option(&mut config, "rainbowRev", "1", 0),
            OptionOutcome::Updated
        );
        assert!(config.rainbow.reverse);
        assert_eq!(
            apply_option(&mut config, "color3", "1;2;3", 0),
            OptionOutcome::Reinitialize
        );
        assert_eq!(config.rainbow.colors[3], Rgb::new(1, 2, 3));
        assert_eq!(
            apply_option(&mut config, "color10", "1;2;3", 0),
            OptionOutcome::Ignored
        );
        assert_eq!(
            apply_option(&mut config, "speed", "-30", 0),
            OptionOutcome::Updated
        );
        assert_eq!(config.rainbow.speed, -30);
    }

    #[test]
    fn test_lines_speed_reinitializes_on_sign_flip() {
        let mut config = config_for(ModeId::Lines);
        assert_eq!(
            apply_option(&mut config, "speed", "-5", 0),
            OptionOutcome::Reinitialize
        );
        assert_eq!(
            apply_option(&mut config, "speed", "-7", 0),
            OptionOutcome::Updated
        );
        assert_eq!(
            apply_option(&mut config, "linesMC", "true", 0),
            OptionOutcome::Updated
        );
        assert!(config.lines.multi_color);
    }

    #[test]
    fn test_lines_speed_from_zero_is_not_a_flip() {
        let mut config = config_for(ModeId::Lines);
        assert_eq!(
            apply_option(&mut config, "speed", "0", 0),
            OptionOutcome::Updated
        );
        assert_eq!(
            apply_option(&mut config, "speed", "-3", 0),
            OptionOutcome::Updated
        );
        assert_eq!(config.lines.speed, -3);
        assert_eq!(
            apply_option(&mut config, "speed", "4", 0),
            OptionOutcome::Reinitialize
        );
    }

    #[test]
    fn test_snowflake_options_saturate() {
        let mut config = config_for(ModeId::Snowflake);
        assert_eq!(
            apply_option(&mut config, "flakeSize", "300", 0),
            OptionOutcome::Updated
        );
        assert_eq!(config.snowflake.flake_size, 255);
        assert_eq!(
            apply_option(&mut config, "snowflakeMC", "0", 0),
            OptionOutcome::Updated
        );
        assert!(!config.snowflake.multi_color);
    }

    #[test]
    fn test_special_mode_controls_options() {
        let mut config = config_for(ModeId::Lines);
        config.special_mode = ModeId::Cycle;
        assert_eq!(
            apply_option(&mut config, "speed", "50", 5_000),
            OptionOutcome::Ignored
        );
        assert_eq!(config.lines.speed, 1);
        assert_eq!(
            apply_option(&mut config, "period", "10", 5_000),
            OptionOutcome::Updated
        );
        assert_eq!(config.cycle.period, 10);
        assert_eq!(config.cycle.next_change, 15_000);
    }

    #[test]
    fn test_format_line() {
        assert_eq!(
            format_line(
                ModeId::Waves,
                "colorMax",
                OptionValue::Color(Rgb::new(255, 0, 0))
            )
            .as_str(),
            "waves:colorMax:255;0;0"
        );
        assert_eq!(
            format_line(ModeId::Lines, "reverse", OptionValue::Bool(true)).as_str(),
            "lines:reverse:true"
        );
        assert_eq!(
            format_line(ModeId::Waves, "speed", OptionValue::Signed(SignedColor::new(20, 0, -20)))
                .as_str(),
            "waves:speed:20;0;-20"
        );
    }

    #[test]
    fn test_format_line_truncates_to_reply_size() {
        let option = "x".repeat(MAX_REPLY_LEN * 2);
        let line = format_line(ModeId::Pulse, &option, OptionValue::Int(1));
        assert!(line.len() <= MAX_REPLY_LEN);
        assert!(line.starts_with("pulse:"));
    }

    #[test]
    fn test_section_contents() {
        let config = Configuration::default();
        let mut names = Vec::new();
        for_each_option(&config, ModeId::Rainbow, |name, _| names.push(name));
        assert_eq!(names.len(), 13);
        assert_eq!(&names[..3], ["speed", "count", "reverse"]);
        assert_eq!(names[12], "color9");

        let mut cycle = Vec::new();
        for_each_option(&config, ModeId::Cycle, |name, value| cycle.push((name, value)));
        assert_eq!(
            cycle,
            [
                ("period", OptionValue::Int(60)),
                ("isRandom", OptionValue::Bool(false)),
                ("fading", OptionValue::Int(0)),
            ]
        );

        let mut off = 0;
        for_each_option(&config, ModeId::Off, |_, _| off += 1);
        assert_eq!(off, 0);
    }
}
