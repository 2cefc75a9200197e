mod tests {
    use vindiktrig::color::{
        Breakpoint, CO2_BREAKPOINTS, CO2_SCALE, ColorScale, GREEN, ORANGE, PURPLE, RED, Rgb,
        ScaleError, YELLOW, color_for,
    };

    const TWO_POINTS: &[Breakpoint] = &[Breakpoint::new(400, GREEN), Breakpoint::new(800, YELLOW)];

    #[test]
    fn test_clamps_below_first_threshold() {
        for value in [0, 1, 200, 399, 400] {
            assert_eq!(CO2_SCALE.color_for(value), GREEN);
        }
    }

    #[test]
    fn test_clamps_above_last_threshold() {
        for value in [3000, 3001, 5000, u16::MAX] {
            assert_eq!(CO2_SCALE.color_for(value), PURPLE);
        }
    }

    #[test]
    fn test_exact_interior_thresholds() {
        assert_eq!(CO2_SCALE.color_for(800), YELLOW);
        assert_eq!(CO2_SCALE.color_for(1200), ORANGE);
        assert_eq!(CO2_SCALE.color_for(2000), RED);
    }

    #[test]
    fn test_midpoint_between_two_breakpoints() {
        let scale = ColorScale::new(TWO_POINTS).unwrap();
        // Green (0, 128, 0) and yellow (255, 255, 0) at t = 0.5, truncated
        assert_eq!(color_for(600, &scale), Rgb::new(127, 191, 0));
    }

    #[test]
    fn test_quarter_step() {
        let scale = ColorScale::new(TWO_POINTS).unwrap();
        assert_eq!(scale.color_for(500), Rgb::new(63, 159, 0));
    }

    #[test]
    fn test_descending_channel_is_truncated() {
        let points = [
            Breakpoint::new(0, Rgb::new(255, 0, 0)),
            Breakpoint::new(2, Rgb::new(0, 0, 0)),
        ];
        let scale = ColorScale::new(&points).unwrap();
        // 255 - 127.5 = 127.5
        assert_eq!(scale.color_for(1), Rgb::new(127, 0, 0));
    }

    #[test]
    fn test_monotonic_between_breakpoints() {
        // Green channel rises from 128 to 255 between 400 and 800 ppm
        let mut previous = CO2_SCALE.color_for(400).g;
        for value in 401..=800 {
            let g = CO2_SCALE.color_for(value).g;
            assert!(g >= previous, "green dropped at {value} ppm");
            previous = g;
        }

        // Green channel falls from 165 to 0 between 1200 and 2000 ppm
        let mut previous = CO2_SCALE.color_for(1200).g;
        for value in 1201..=2000 {
            let g = CO2_SCALE.color_for(value).g;
            assert!(g <= previous, "green rose at {value} ppm");
            previous = g;
        }
    }

    #[test]
    fn test_red_segment_fades_to_purple() {
        let color = CO2_SCALE.color_for(2500);
        assert_eq!(color, Rgb::new(191, 0, 64));
    }

    #[test]
    fn test_rejects_too_few_breakpoints() {
        assert_eq!(
            ColorScale::new(&[]).unwrap_err(),
            ScaleError::TooFewBreakpoints
        );
        assert_eq!(
            ColorScale::new(&[Breakpoint::new(400, GREEN)]).unwrap_err(),
            ScaleError::TooFewBreakpoints
        );
    }

    #[test]
    fn test_rejects_non_increasing_thresholds() {
        let equal = [
            Breakpoint::new(400, GREEN),
            Breakpoint::new(800, YELLOW),
            Breakpoint::new(800, RED),
        ];
        assert_eq!(
            ColorScale::new(&equal).unwrap_err(),
            ScaleError::NotIncreasing { index: 2 }
        );

        let descending = [Breakpoint::new(800, YELLOW), Breakpoint::new(400, GREEN)];
        assert_eq!(
            ColorScale::new(&descending).unwrap_err(),
            ScaleError::NotIncreasing { index: 1 }
        );
    }

    #[test]
    fn test_co2_scale_bounds() {
        assert_eq!(CO2_SCALE.points(), CO2_BREAKPOINTS);
        assert_eq!(CO2_SCALE.first(), Breakpoint::new(400, GREEN));
        assert_eq!(CO2_SCALE.last(), Breakpoint::new(3000, PURPLE));
    }
}
