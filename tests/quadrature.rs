mod tests {
    use rotary_encoder_driver::quadrature::{channel_state, transition_code};
    use rotary_encoder_driver::Direction;

    /// Walk a sequence of channel states and sum the classified steps.
    fn decode(initial: u8, states: &[u8]) -> i32 {
        let mut previous = initial;
        let mut position = 0;
        for &current in states {
            match Direction::from_transition(transition_code(previous, current)) {
                Direction::Clockwise => position += 1,
                Direction::CounterClockwise => position -= 1,
                Direction::None => {}
            }
            previous = current;
        }
        position
    }

    #[test]
    fn channel_state_packs_a_high_b_low() {
        assert_eq!(channel_state(false, false), 0b00);
        assert_eq!(channel_state(false, true), 0b01);
        assert_eq!(channel_state(true, false), 0b10);
        assert_eq!(channel_state(true, true), 0b11);
    }

    #[test]
    fn endpoint_codes_classify_by_direction() {
        assert_eq!(Direction::from_transition(0b1011), Direction::Clockwise);
        assert_eq!(Direction::from_transition(0b0100), Direction::Clockwise);
        assert_eq!(Direction::from_transition(0b1110), Direction::CounterClockwise);
        assert_eq!(Direction::from_transition(0b0001), Direction::CounterClockwise);
    }

    #[test]
    fn non_endpoint_codes_classify_as_none() {
        for code in 0u8..16 {
            if matches!(code, 0b1011 | 0b0100 | 0b1110 | 0b0001) {
                continue;
            }
            assert_eq!(
                Direction::from_transition(code),
                Direction::None,
                "code {code:#06b}"
            );
        }
    }

    #[test]
    fn duplicate_sample_is_no_step() {
        for state in 0u8..4 {
            assert_eq!(
                Direction::from_transition(transition_code(state, state)),
                Direction::None
            );
        }
    }

    #[test]
    fn clockwise_detents_count_up_on_either_path() {
        // A detent resting at 11 completes via B falling while A is low
        // (01 -> 00); one resting at 00 completes via B rising while A is
        // high (10 -> 11). Both must count, or hardware taking the other
        // path under-counts.
        assert_eq!(decode(0b11, &[0b01, 0b00]), 1);
        assert_eq!(decode(0b00, &[0b10, 0b11]), 1);
    }

    #[test]
    fn counterclockwise_detents_count_down_on_either_path() {
        assert_eq!(decode(0b11, &[0b10, 0b00]), -1);
        assert_eq!(decode(0b00, &[0b01, 0b11]), -1);
    }

    #[test]
    fn consecutive_detents_count_one_step_each() {
        // Six clockwise detents: the rest state alternates 11 -> 00 -> 11,
        // so consecutive clicks take the two endpoint paths alternately.
        let states = [0b01, 0b00, 0b10, 0b11, 0b01, 0b00, 0b10, 0b11, 0b01, 0b00, 0b10, 0b11];
        assert_eq!(decode(0b11, &states), 6);

        // Same spin counterclockwise.
        let states = [0b01, 0b11, 0b10, 0b00, 0b01, 0b11, 0b10, 0b00];
        assert_eq!(decode(0b00, &states), -4);
    }

    #[test]
    fn single_endpoint_transition_counts_exactly_once() {
        assert_eq!(decode(0b10, &[0b11]), 1);
        assert_eq!(decode(0b01, &[0b00]), 1);
        assert_eq!(decode(0b11, &[0b10]), -1);
        assert_eq!(decode(0b00, &[0b01]), -1);
    }
}
