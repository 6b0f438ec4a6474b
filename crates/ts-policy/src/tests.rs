//! Unit tests for ts-policy.

use std::collections::BTreeSet;

use ts_core::PersonId;

fn lane(ids: &[u32]) -> BTreeSet<PersonId> {
    ids.iter().map(|&i| PersonId(i)).collect()
}

#[cfg(test)]
mod dispatch {
    use ts_core::{Direction, LastDirection, PersonId};

    use crate::PriorityRule;

    #[test]
    fn state_maps_to_rule() {
        assert_eq!(PriorityRule::for_state(LastDirection::Idle), PriorityRule::IdlePreferExit);
        assert_eq!(PriorityRule::for_state(LastDirection::Exit), PriorityRule::PreviousExitPreferExit);
        assert_eq!(
            PriorityRule::for_state(LastDirection::Enter),
            PriorityRule::PreviousEnterPreferExit
        );
    }

    #[test]
    fn every_rule_takes_exit_when_both_lanes_wait() {
        let entering = super::lane(&[0, 2]);
        let exiting = super::lane(&[1]);
        for last in [LastDirection::Idle, LastDirection::Exit, LastDirection::Enter] {
            let s = crate::select_next(last, &entering, &exiting).unwrap();
            assert_eq!(s.direction, Direction::Exit, "after {last}");
            assert_eq!(s.person, PersonId(1));
        }
    }

    #[test]
    fn labels() {
        assert_eq!(PriorityRule::IdlePreferExit.to_string(), "idle_prefer_exit");
        assert_eq!(PriorityRule::PreviousEnterPreferExit.as_str(), "previous_enter_prefer_exit");
    }
}

#[cfg(test)]
mod idle_rule {
    use ts_core::{Direction, LastDirection, PersonId};

    use super::*;
    use crate::{PolicyError, PriorityRule, select_next};

    #[test]
    fn both_lanes_selects_exit() {
        let s = select_next(LastDirection::Idle, &lane(&[0]), &lane(&[1])).unwrap();
        assert_eq!(s.person, PersonId(1));
        assert_eq!(s.direction, Direction::Exit);
        assert_eq!(s.rule, PriorityRule::IdlePreferExit);
    }

    #[test]
    fn only_entering_selects_enter() {
        let s = select_next(LastDirection::Idle, &lane(&[0]), &lane(&[])).unwrap();
        assert_eq!(s.person, PersonId(0));
        assert_eq!(s.direction, Direction::Enter);
    }

    #[test]
    fn empty_lanes_is_an_error() {
        let err = select_next(LastDirection::Idle, &lane(&[]), &lane(&[])).unwrap_err();
        assert_eq!(err, PolicyError::NoCandidates(PriorityRule::IdlePreferExit));
    }
}

#[cfg(test)]
mod continuity_rules {
    use ts_core::{Direction, LastDirection, PersonId};

    use super::*;
    use crate::{PolicyError, PriorityRule, select_next};

    #[test]
    fn after_exit_both_lanes_selects_exit() {
        let s = select_next(LastDirection::Exit, &lane(&[0]), &lane(&[1])).unwrap();
        assert_eq!(s.person, PersonId(1));
        assert_eq!(s.direction, Direction::Exit);
        assert_eq!(s.rule, PriorityRule::PreviousExitPreferExit);
    }

    #[test]
    fn after_exit_only_entering_selects_enter() {
        let s = select_next(LastDirection::Exit, &lane(&[4]), &lane(&[])).unwrap();
        assert_eq!(s.person, PersonId(4));
    }

    #[test]
    fn after_enter_both_lanes_selects_exit() {
        let s = select_next(LastDirection::Enter, &lane(&[0]), &lane(&[1])).unwrap();
        assert_eq!(s.person, PersonId(1));
        assert_eq!(s.direction, Direction::Exit);
        assert_eq!(s.rule, PriorityRule::PreviousEnterPreferExit);
    }

    #[test]
    fn after_enter_only_entering_selects_enter() {
        let s = select_next(LastDirection::Enter, &lane(&[3, 7]), &lane(&[])).unwrap();
        assert_eq!(s.person, PersonId(3));
        assert_eq!(s.direction, Direction::Enter);
    }

    #[test]
    fn after_enter_only_exiting_selects_exit() {
        let s = select_next(LastDirection::Enter, &lane(&[]), &lane(&[2, 5])).unwrap();
        assert_eq!(s.person, PersonId(2));
        assert_eq!(s.direction, Direction::Exit);
    }

    #[test]
    fn every_rule_rejects_empty_lanes() {
        for last in [LastDirection::Exit, LastDirection::Enter] {
            assert_eq!(
                select_next(last, &lane(&[]), &lane(&[])),
                Err(PolicyError::NoCandidates(PriorityRule::for_state(last)))
            );
        }
    }
}

#[cfg(test)]
mod same_direction {
    use ts_core::{LastDirection, PersonId};

    use super::*;
    use crate::{CandidateLane, select_next};

    #[test]
    fn lowest_index_wins_regardless_of_insert_order() {
        let mut entering = BTreeSet::new();
        for i in [3, 1, 2] {
            entering.insert(PersonId(i));
        }
        let s = select_next(LastDirection::Enter, &entering, &lane(&[])).unwrap();
        assert_eq!(s.person, PersonId(1));
    }

    #[test]
    fn sorted_vec_lanes_work_like_sets() {
        let entering: Vec<PersonId> = vec![PersonId(2), PersonId(6)];
        let exiting: Vec<PersonId> = vec![PersonId(3)];
        assert_eq!(entering.head(), Some(PersonId(2)));
        assert_eq!(CandidateLane::len(&exiting), 1);

        let s = select_next(LastDirection::Enter, entering.as_slice(), exiting.as_slice()).unwrap();
        assert_eq!(s.person, PersonId(3));
        let s = select_next(LastDirection::Enter, entering.as_slice(), &Vec::<PersonId>::new()).unwrap();
        assert_eq!(s.person, PersonId(2));
        let s = select_next(LastDirection::Idle, &entering, &exiting).unwrap();
        assert_eq!(s.person, PersonId(3));
    }

    #[test]
    fn selection_does_not_consume_lanes() {
        let entering = lane(&[0, 1]);
        let exiting = lane(&[]);
        select_next(LastDirection::Idle, &entering, &exiting).unwrap();
        assert_eq!(CandidateLane::len(&entering), 2);
        assert!(CandidateLane::is_empty(&exiting));
    }
}
