mod tests {
    use led_geometry::{
        ColorScheduler, HueWalk, Rgb, SchedulerError, ThemeStrategy, color::hue_to_rgb,
    };
    use rand::{SeedableRng, rngs::SmallRng};

    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Alternates between black and white themes
    struct BlackWhite;

    impl ThemeStrategy for BlackWhite {
        fn initial_color(&self) -> Rgb {
            BLACK
        }

        fn next_end_color(&mut self, previous_end: Rgb) -> Rgb {
            if previous_end == BLACK { WHITE } else { BLACK }
        }
    }

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(0x5eed)
    }

    #[test]
    fn test_zero_cycle_is_rejected() {
        assert_eq!(
            ColorScheduler::with_cycle(0, rng()).err(),
            Some(SchedulerError::ZeroCycle)
        );
        assert_eq!(
            ColorScheduler::new(0, BlackWhite).err(),
            Some(SchedulerError::ZeroCycle)
        );

        let mut scheduler = ColorScheduler::new(4, BlackWhite).unwrap();
        assert_eq!(scheduler.set_cycle(0), Err(SchedulerError::ZeroCycle));
        assert_eq!(scheduler.cycle(), 4);
    }

    #[test]
    fn test_inverted_hue_deltas_are_rejected() {
        assert_eq!(
            ColorScheduler::with_hue_walk(10, 0, 100, 50, rng()).err(),
            Some(SchedulerError::InvertedHueDeltas { min: 100, max: 50 })
        );

        let mut scheduler = ColorScheduler::with_hue_walk(10, 0, 10, 20, rng()).unwrap();
        assert_eq!(
            scheduler.set_hue_deltas(9, 3),
            Err(SchedulerError::InvertedHueDeltas { min: 9, max: 3 })
        );
        assert_eq!(scheduler.theme().hue_deltas(), (10, 20));

        assert_eq!(scheduler.set_hue_deltas(5, 5), Ok(()));
        assert_eq!(scheduler.theme().hue_deltas(), (5, 5));
    }

    #[test]
    fn test_continuous_mode_interpolates() {
        let mut scheduler = ColorScheduler::new(4, BlackWhite).unwrap();
        assert_eq!(scheduler.start_color(), BLACK);
        assert_eq!(scheduler.end_color(), WHITE);

        let grey = |v: u8| Rgb { r: v, g: v, b: v };
        assert_eq!(scheduler.next_color(), grey(0));
        assert_eq!(scheduler.next_color(), grey(63));
        assert_eq!(scheduler.next_color(), grey(127));
        assert_eq!(scheduler.next_color(), grey(191));

        // New theme starts where the last one ended
        assert_eq!(scheduler.progress(), 0);
        assert_eq!(scheduler.start_color(), WHITE);
        assert_eq!(scheduler.end_color(), BLACK);
        assert_eq!(scheduler.next_color(), WHITE);
        assert_eq!(scheduler.current_color(), WHITE);
    }

    #[test]
    fn test_cycle_hands_end_color_over_to_start() {
        let mut scheduler = ColorScheduler::with_cycle(30, rng()).unwrap();
        for _ in 0..5 {
            let previous_end = scheduler.end_color();
            for _ in 0..scheduler.cycle() {
                scheduler.next_color();
            }
            assert_eq!(scheduler.progress(), 0);
            assert_eq!(scheduler.start_color(), previous_end);
        }
    }

    #[test]
    fn test_discrete_mode_holds_color_for_whole_cycle() {
        let mut scheduler = ColorScheduler::new(5, BlackWhite).unwrap();
        scheduler.set_discrete_mode();
        assert!(scheduler.is_discrete());

        for _ in 0..5 {
            assert_eq!(scheduler.next_color(), BLACK);
        }
        for _ in 0..5 {
            assert_eq!(scheduler.next_color(), WHITE);
        }
        assert_eq!(scheduler.next_color(), BLACK);
    }

    #[test]
    fn test_mode_switch_keeps_progress() {
        let mut scheduler = ColorScheduler::new(10, BlackWhite).unwrap();
        scheduler.next_color();
        scheduler.next_color();
        scheduler.set_discrete_mode();
        assert_eq!(scheduler.progress(), 2);
        assert_eq!(scheduler.next_color(), BLACK);
        scheduler.set_continuous_mode();
        assert_eq!(scheduler.progress(), 3);
        assert_eq!(scheduler.start_color(), BLACK);
        assert_eq!(scheduler.end_color(), WHITE);
    }

    #[test]
    fn test_get_progress_is_scaled() {
        let mut scheduler = ColorScheduler::new(4, BlackWhite).unwrap();
        let mut seen = [0u8; 4];
        for slot in &mut seen {
            *slot = scheduler.get_progress();
            scheduler.next_color();
        }
        assert_eq!(seen, [0, 63, 127, 191]);
        assert_eq!(scheduler.get_progress(), 0);
    }

    #[test]
    fn test_set_cycle_restarts_without_new_theme() {
        let mut scheduler = ColorScheduler::new(8, BlackWhite).unwrap();
        scheduler.next_color();
        scheduler.next_color();
        scheduler.next_color();

        assert_eq!(scheduler.set_cycle(3), Ok(()));
        assert_eq!(scheduler.progress(), 0);
        assert_eq!(scheduler.cycle(), 3);
        assert_eq!(scheduler.start_color(), BLACK);
        assert_eq!(scheduler.end_color(), WHITE);
    }

    #[test]
    fn test_hue_walk_steps_within_deltas() {
        let mut scheduler = ColorScheduler::with_hue_walk(2, 200, 10, 20, rng()).unwrap();
        for _ in 0..50 {
            let before = scheduler.theme().hue();
            scheduler.change_theme();
            let after = scheduler.theme().hue();
            let step = after.wrapping_sub(before);
            assert!((10..=20).contains(&step), "hue step {}", step);
            assert_eq!(scheduler.end_color(), hue_to_rgb(after));
        }
    }

    #[test]
    fn test_hue_walk_fixed_step_wraps() {
        let mut walk = HueWalk::new(250, 30, 30, rng()).unwrap();
        assert_eq!(walk.initial_color(), hue_to_rgb(250));
        assert_eq!(walk.next_end_color(BLACK), hue_to_rgb(24));
        assert_eq!(walk.hue(), 24);
        assert_eq!(walk.next_end_color(BLACK), hue_to_rgb(54));
    }
}
