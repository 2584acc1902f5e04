mod tests {
    use larson_light_engine::pattern::{
        ChasePattern, DisplayMode, Fill, GlowPattern, IntensityPattern, KnightRiderPattern,
        LarsonPattern, Pattern, PatternSlot,
    };
    use larson_light_engine::{
        Direction, Frame, ScanState, Settings, MAX_BRIGHTNESS, NUM_LEDS, POSITION_LIMIT,
        POSITION_MIN,
    };

    fn scan(position: u8, direction: Direction) -> ScanState {
        ScanState {
            position,
            direction,
        }
    }

    #[test]
    fn test_every_mode_stays_within_brightness_range() {
        for raw in 0..6 {
            let mode = DisplayMode::from_raw(raw).unwrap();
            for skinny in [false, true] {
                let mut settings = Settings {
                    skinny_eye_enabled: skinny,
                    ..Settings::default()
                };
                settings.apply_eye_profile();

                let mut slot = mode.to_slot();
                let mut frame: Frame = [0; NUM_LEDS];
                for direction in [Direction::Forward, Direction::Backward] {
                    for position in POSITION_MIN..=POSITION_LIMIT {
                        // Repeat so stateful patterns cover their whole cycle.
                        for _ in 0..200 {
                            slot.render(&scan(position, direction), &settings, &mut frame);
                            for &level in &frame {
                                assert!(level <= MAX_BRIGHTNESS);
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_larson_coincident_slots_accumulate() {
        let settings = Settings {
            speed_level: 1,
            ..Settings::default()
        };

        let mut pattern = LarsonPattern::new();
        let mut frame: Frame = [0; NUM_LEDS];
        let state = scan(1, Direction::Forward);

        // First call renders from fine position 1: the two tail slots fold
        // onto LED 1 (60 from the eye body, 15 from the reflected tail).
        pattern.render(&state, &settings, &mut frame);
        assert_eq!(frame, [30, 75, 15, 0, 0, 0, 0, 0, 0]);

        // Five more steps of 25 put the fine counter at 126, pressing the
        // eye against the right edge: slots [10, 9, 8, 7, 6] reflect to
        // [6, 7, 8, 7, 6] and LED 7 collects four contributions.
        for _ in 0..5 {
            pattern.render(&state, &settings, &mut frame);
        }
        assert_eq!(frame, [0, 0, 0, 0, 0, 0, 15, 71, 34]);
    }

    #[test]
    fn test_larson_skinny_profile_narrows_the_eye() {
        let mut settings = Settings {
            speed_level: 1,
            skinny_eye_enabled: true,
            ..Settings::default()
        };
        settings.apply_eye_profile();

        let mut pattern = LarsonPattern::new();
        let mut frame: Frame = [0; NUM_LEDS];
        pattern.render(&scan(1, Direction::Forward), &settings, &mut frame);

        // Weights {0,4,1,0}: only the eye body contributes.
        assert_eq!(frame, [15, 60, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_chase_lights_center_and_neighbors() {
        let settings = Settings::default();
        let mut pattern = ChasePattern;
        let mut frame: Frame = [0; NUM_LEDS];

        pattern.render(&scan(5, Direction::Forward), &settings, &mut frame);
        assert_eq!(frame, [0, 0, 0, 15, 70, 15, 0, 0, 0]);

        // At the edges the out-of-range neighbor is skipped.
        pattern.render(&scan(1, Direction::Forward), &settings, &mut frame);
        assert_eq!(frame, [70, 15, 0, 0, 0, 0, 0, 0, 0]);

        pattern.render(&scan(9, Direction::Backward), &settings, &mut frame);
        assert_eq!(frame, [0, 0, 0, 0, 0, 0, 0, 15, 70]);
    }

    #[test]
    fn test_knight_rider_trail_follows_behind() {
        let settings = Settings::default();
        let mut pattern = KnightRiderPattern;
        let mut frame: Frame = [0; NUM_LEDS];

        // Moving forward: ramp decays down the low side, one LED ahead.
        pattern.render(&scan(5, Direction::Forward), &settings, &mut frame);
        assert_eq!(frame, [0, 5, 10, 15, 70, 15, 0, 0, 0]);

        // Moving backward: mirrored.
        pattern.render(&scan(5, Direction::Backward), &settings, &mut frame);
        assert_eq!(frame, [0, 0, 0, 15, 70, 15, 10, 5, 0]);
    }

    #[test]
    fn test_intensity_middle_grows_symmetrically() {
        let settings = Settings::default();
        let mut pattern = IntensityPattern::new(Fill::FromMiddle);
        let mut frame: Frame = [0; NUM_LEDS];

        // Position 5 -> intensity 50 -> four lit steps around the middle.
        pattern.render(&scan(5, Direction::Forward), &settings, &mut frame);
        assert_eq!(frame, [0, 50, 50, 50, 50, 50, 50, 50, 0]);

        // Position 1 -> intensity 6 -> nothing lights.
        pattern.render(&scan(1, Direction::Forward), &settings, &mut frame);
        assert_eq!(frame, [0; NUM_LEDS]);
    }

    #[test]
    fn test_intensity_left_fills_like_a_vu_meter() {
        let settings = Settings::default();
        let mut pattern = IntensityPattern::new(Fill::FromLeft);
        let mut frame: Frame = [0; NUM_LEDS];

        pattern.render(&scan(5, Direction::Forward), &settings, &mut frame);
        assert_eq!(frame, [50, 50, 50, 50, 0, 0, 0, 0, 0]);

        // Position 9 -> intensity 94 -> the whole strip lights.
        pattern.render(&scan(9, Direction::Forward), &settings, &mut frame);
        assert_eq!(frame, [50; NUM_LEDS]);
    }

    #[test]
    fn test_glow_advances_after_crossing_threshold() {
        let settings = Settings::default();
        let mut pattern = GlowPattern::new();
        let mut frame: Frame = [0; NUM_LEDS];
        let state = scan(1, Direction::Forward);

        for _ in 0..50 {
            pattern.render(&state, &settings, &mut frame);
        }
        assert_eq!(frame[0], 50);

        // The very next call works on LED 1 and keeps everything above dark.
        pattern.render(&state, &settings, &mut frame);
        assert_eq!(frame[1], 1);
        assert!(frame[2..].iter().all(|&level| level == 0));
    }

    #[test]
    fn test_glow_only_updates_below_position_gate() {
        let settings = Settings::default();
        let mut pattern = GlowPattern::new();
        let mut frame: Frame = [0; NUM_LEDS];

        for _ in 0..10 {
            pattern.render(&scan(6, Direction::Forward), &settings, &mut frame);
        }
        assert_eq!(frame, [0; NUM_LEDS]);

        pattern.render(&scan(5, Direction::Forward), &settings, &mut frame);
        assert_eq!(frame[0], 1);
    }

    #[test]
    fn test_mode_cycle_wraps() {
        let mut mode = DisplayMode::OriginalLarson;
        let expected = [
            DisplayMode::ThreeLedChase,
            DisplayMode::KnightRider,
            DisplayMode::IntensityMiddle,
            DisplayMode::IntensityLeft,
            DisplayMode::GlowLeft,
            DisplayMode::OriginalLarson,
        ];
        for want in expected {
            mode = mode.next();
            assert_eq!(mode, want);
        }
    }

    #[test]
    fn test_mode_from_raw_rejects_out_of_range() {
        assert_eq!(DisplayMode::from_raw(5), Some(DisplayMode::GlowLeft));
        assert_eq!(DisplayMode::from_raw(6), None);
        assert_eq!(DisplayMode::from_raw(0xFF), None);
    }

    #[test]
    fn test_slot_reports_its_mode() {
        for raw in 0..6 {
            let mode = DisplayMode::from_raw(raw).unwrap();
            assert_eq!(mode.to_slot().id(), mode);
        }
    }

    #[test]
    fn test_slot_default_is_original_larson() {
        assert_eq!(PatternSlot::default().id(), DisplayMode::OriginalLarson);
    }
}
