mod tests {
    use myrtio_apa102::color::{Hsl, HueDirection, interpolate};

    fn hues(start: i32, end: i32, steps: i32, direction: HueDirection) -> Vec<i32> {
        let gradient = interpolate(
            Hsl::new(start, 100, 50),
            Hsl::new(end, 100, 50),
            steps,
            direction,
        );
        gradient.iter().map(Hsl::hue).collect()
    }

    #[test]
    fn test_gradient_length_matches_steps() {
        let start = Hsl::new(10, 20, 30);
        let end = Hsl::new(200, 80, 70);
        for steps in [1, 2, 3, 7, 50] {
            let gradient = interpolate(start, end, steps, HueDirection::Shortest);
            assert_eq!(gradient.len(), steps as usize);
            assert_eq!(gradient.iter().count(), steps as usize);
            assert_eq!(gradient.iter().len(), steps as usize);
        }
    }

    #[test]
    fn test_gradient_keeps_endpoints() {
        let start = Hsl::new(10, 20, 30);
        let end = Hsl::new(200, 80, 70);
        for steps in [2, 3, 9] {
            let gradient = interpolate(start, end, steps, HueDirection::CounterClockwise);
            assert_eq!(gradient.get(0), Some(start));
            assert_eq!(gradient.get(steps as usize - 1), Some(end));
            assert_eq!(gradient.get(steps as usize), None);
        }
    }

    #[test]
    fn test_non_positive_steps_yield_single_step() {
        let start = Hsl::new(10, 20, 30);
        let end = Hsl::new(200, 80, 70);
        for steps in [0, -5, 1] {
            let gradient = interpolate(start, end, steps, HueDirection::Clockwise);
            assert_eq!(gradient.len(), 1);
            assert_eq!(gradient.get(0), Some(Hsl::new(200, 80, 70)));
        }
    }

    #[test]
    fn test_single_step_moves_one_step_from_start() {
        let gradient = interpolate(
            Hsl::new(0, 100, 50),
            Hsl::new(90, 100, 50),
            1,
            HueDirection::Clockwise,
        );
        assert_eq!(gradient.get(0), Some(Hsl::new(90, 100, 50)));

        let gradient = interpolate(
            Hsl::new(0, 100, 50),
            Hsl::new(90, 100, 50),
            1,
            HueDirection::CounterClockwise,
        );
        assert_eq!(gradient.get(0), Some(Hsl::new(90, 100, 50)));
    }

    #[test]
    fn test_shortest_direction_takes_short_way() {
        // 10 -> 350 is 20 degrees counterclockwise, 340 clockwise
        assert_eq!(hues(10, 350, 3, HueDirection::Shortest), [10, 3, 350]);
        assert_eq!(hues(10, 350, 3, HueDirection::CounterClockwise), [10, 3, 350]);
        assert_eq!(hues(10, 350, 3, HueDirection::Clockwise), [10, 123, 350]);
    }

    #[test]
    fn test_shortest_direction_wraps_through_zero() {
        assert_eq!(
            hues(350, 10, 5, HueDirection::Shortest),
            [350, 354, 358, 2, 10]
        );
    }

    #[test]
    fn test_shortest_direction_tie_is_clockwise() {
        assert_eq!(hues(0, 180, 3, HueDirection::Shortest), [0, 60, 180]);
    }

    #[test]
    fn test_counter_clockwise_stays_non_negative() {
        assert_eq!(
            hues(10, 200, 4, HueDirection::CounterClockwise),
            [10, 328, 285, 200]
        );
    }

    #[test]
    fn test_saturation_and_luminosity_are_linear() {
        let gradient = interpolate(
            Hsl::new(0, 0, 10),
            Hsl::new(0, 90, 50),
            4,
            HueDirection::Clockwise,
        );
        let saturation: Vec<i32> = gradient.iter().map(Hsl::saturation).collect();
        let luminosity: Vec<i32> = gradient.iter().map(Hsl::luminosity).collect();
        assert_eq!(saturation, [0, 22, 45, 90]);
        assert_eq!(luminosity, [10, 20, 30, 50]);
    }

    #[test]
    fn test_gradient_can_be_walked_repeatedly() {
        let gradient = interpolate(
            Hsl::new(30, 100, 50),
            Hsl::new(300, 60, 40),
            6,
            HueDirection::Shortest,
        );
        let first: Vec<Hsl> = gradient.iter().collect();
        let second: Vec<Hsl> = (&gradient).into_iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_gradient_to_vec() {
        let gradient = interpolate(
            Hsl::new(30, 100, 50),
            Hsl::new(300, 60, 40),
            5,
            HueDirection::Clockwise,
        );
        let colors = gradient.to_vec::<8>().unwrap();
        assert_eq!(colors.len(), 5);
        assert!(colors.iter().copied().eq(gradient.iter()));
        assert!(gradient.to_vec::<4>().is_none());
    }
}
