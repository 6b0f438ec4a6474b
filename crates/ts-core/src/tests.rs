//! Unit tests for ts-core primitives.

#[cfg(test)]
mod ids {
    use crate::PersonId;

    #[test]
    fn index_roundtrip() {
        let id = PersonId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(PersonId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering_follows_input_position() {
        assert!(PersonId(0) < PersonId(1));
        assert!(PersonId(100) > PersonId(99));
    }

    #[test]
    fn display() {
        assert_eq!(PersonId(7).to_string(), "PersonId(7)");
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick::ZERO + 0, Tick::ZERO);
    }

    #[test]
    fn clock_advances_one_tick() {
        let mut clock = SimClock::new(Tick::ZERO);
        clock.advance();
        clock.advance();
        assert_eq!(clock.current_tick, Tick(2));
        assert_eq!(clock.elapsed(), 2);
        assert_eq!(clock.idle_jumps, 0);
    }

    #[test]
    fn jump_only_moves_forward() {
        let mut clock = SimClock::new(Tick(5));
        assert!(!clock.jump_to(Tick(5)));
        assert!(!clock.jump_to(Tick(3)));
        assert_eq!(clock.current_tick, Tick(5));

        assert!(clock.jump_to(Tick(9)));
        assert_eq!(clock.current_tick, Tick(9));
        assert_eq!(clock.idle_jumps, 1);
        assert_eq!(clock.elapsed(), 4);
    }

    #[test]
    fn display() {
        assert_eq!(Tick(3).to_string(), "T3");
    }
}

#[cfg(test)]
mod direction {
    use crate::{CoreError, Direction, LastDirection};

    #[test]
    fn codes_roundtrip() {
        assert_eq!(Direction::from_code(0).unwrap(), Direction::Enter);
        assert_eq!(Direction::from_code(1).unwrap(), Direction::Exit);
        assert_eq!(Direction::Enter.code(), 0);
        assert_eq!(Direction::Exit.code(), 1);
    }

    #[test]
    fn unknown_code_rejected() {
        assert_eq!(
            Direction::from_code(2),
            Err(CoreError::InvalidDirection("2".into()))
        );
    }

    #[test]
    fn parses_codes_and_names() {
        assert_eq!("0".parse::<Direction>().unwrap(), Direction::Enter);
        assert_eq!(" 1 ".parse::<Direction>().unwrap(), Direction::Exit);
        assert_eq!("Enter".parse::<Direction>().unwrap(), Direction::Enter);
        assert_eq!("EXIT".parse::<Direction>().unwrap(), Direction::Exit);
        assert!("sideways".parse::<Direction>().is_err());
        assert!("-1".parse::<Direction>().is_err());
    }

    #[test]
    fn last_direction_defaults_to_idle() {
        assert!(LastDirection::default().is_idle());
        assert_eq!(LastDirection::from(Direction::Exit), LastDirection::Exit);
        assert_eq!(LastDirection::from(Direction::Enter), LastDirection::Enter);
        assert!(!LastDirection::Enter.is_idle());
    }
}

#[cfg(test)]
mod person {
    use crate::{CoreError, Direction, Person, PersonId, Tick, people_from_columns};

    #[test]
    fn creation_sets_fields() {
        let p = Person::new(PersonId(5), Tick(10), Direction::Enter);
        assert_eq!(p.id(), PersonId(5));
        assert_eq!(p.arrival(), Tick(10));
        assert_eq!(p.direction(), Direction::Enter);
        assert!(p.is_entering());
        assert!(!p.is_exiting());
    }

    #[test]
    fn shorthand_constructors() {
        assert!(Person::enter(0, 0).is_entering());
        assert!(Person::exit(1, 0).is_exiting());
    }

    #[test]
    fn has_arrived_is_inclusive() {
        let p = Person::exit(0, 4);
        assert!(!p.has_arrived(Tick(3)));
        assert!(p.has_arrived(Tick(4)));
        assert!(p.has_arrived(Tick(5)));
    }

    #[test]
    fn columns_build_people_in_position_order() {
        let people = people_from_columns(&[0, 0, 1, 5], &[0, 1, 1, 0]).unwrap();
        assert_eq!(
            people,
            vec![
                Person::enter(0, 0),
                Person::exit(1, 0),
                Person::exit(2, 1),
                Person::enter(3, 5),
            ]
        );
    }

    #[test]
    fn column_length_mismatch_rejected() {
        let err = people_from_columns(&[0, 1, 2], &[0, 1]).unwrap_err();
        assert_eq!(
            err,
            CoreError::LengthMismatch { expected: 3, got: 2, what: "direction column" }
        );
    }

    #[test]
    fn bad_direction_code_rejected() {
        assert!(matches!(
            people_from_columns(&[0, 1], &[0, 7]),
            Err(CoreError::InvalidDirection(_))
        ));
    }
}

#[cfg(test)]
mod config {
    use crate::{CandidateScan, SimConfig, Tick};

    #[test]
    fn defaults() {
        let c = SimConfig::default();
        assert_eq!(c.candidate_scan, CandidateScan::Indexed);
        assert!(c.require_sorted_arrivals);
        assert_eq!(c.start_tick, Tick::ZERO);
    }
}

#[cfg(test)]
mod rng {
    use crate::{PersonId, ScenarioRng, ScenarioSpec};

    #[test]
    fn same_seed_same_scenario() {
        let spec = ScenarioSpec { count: 50, max_gap: 4, exit_ratio: 0.3 };
        let a = ScenarioRng::new(7).people(&spec).unwrap();
        let b = ScenarioRng::new(7).people(&spec).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn generated_input_is_valid() {
        let spec = ScenarioSpec { count: 200, max_gap: 5, exit_ratio: 0.5 };
        let people = ScenarioRng::new(99).people(&spec).unwrap();
        assert_eq!(people.len(), 200);
        for (i, p) in people.iter().enumerate() {
            assert_eq!(p.id(), PersonId(i as u32));
        }
        assert!(people.windows(2).all(|w| w[0].arrival() <= w[1].arrival()));
    }

    #[test]
    fn zero_gap_puts_everyone_at_tick_zero() {
        let spec = ScenarioSpec { count: 10, max_gap: 0, exit_ratio: 0.5 };
        let people = ScenarioRng::new(1).people(&spec).unwrap();
        assert!(people.iter().all(|p| p.arrival().0 == 0));
    }

    #[test]
    fn exit_ratio_extremes() {
        let all_exit = ScenarioSpec { count: 20, max_gap: 2, exit_ratio: 1.0 };
        assert!(ScenarioRng::new(3).people(&all_exit).unwrap().iter().all(|p| p.is_exiting()));

        let all_enter = ScenarioSpec { exit_ratio: 0.0, ..all_exit };
        assert!(ScenarioRng::new(3).people(&all_enter).unwrap().iter().all(|p| p.is_entering()));
    }

    #[test]
    fn huge_gaps_report_overflow_instead_of_wrapping() {
        let spec = ScenarioSpec { count: 200, max_gap: u64::MAX, exit_ratio: 0.5 };
        let err = ScenarioRng::new(4).people(&spec).unwrap_err();
        assert!(matches!(err, crate::CoreError::Scenario(ref msg) if msg.contains("overflows")), "{err}");
    }

    #[test]
    fn bad_exit_ratio_rejected() {
        let spec = ScenarioSpec { count: 3, max_gap: 1, exit_ratio: 1.5 };
        assert!(ScenarioRng::new(0).people(&spec).is_err());
    }
}
