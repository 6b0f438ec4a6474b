//! Unit tests for ts-queue.

use ts_core::{Person, PersonId};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn ids(lane: &std::collections::BTreeSet<PersonId>) -> Vec<u32> {
    lane.iter().map(|id| id.0).collect()
}

fn four_people() -> Vec<Person> {
    vec![
        Person::enter(0, 0),
        Person::exit(1, 0),
        Person::enter(2, 0),
        Person::exit(3, 0),
    ]
}

// ── WaitingQueue ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod waiting_queue {
    use ts_core::{Direction, Tick};

    use super::*;
    use crate::WaitingQueue;

    #[test]
    fn admit_separates_by_direction() {
        let mut q = WaitingQueue::new();
        let admitted = q.admit(&four_people(), Tick(0), |_| false);
        assert_eq!(admitted, 4);
        assert_eq!(q.entering_count(), 2);
        assert_eq!(q.exiting_count(), 2);
        assert_eq!(q.len(), 4);
    }

    #[test]
    fn admit_only_takes_arrived_people() {
        let people = vec![Person::enter(0, 0), Person::exit(1, 5), Person::enter(2, 10)];
        let mut q = WaitingQueue::new();
        q.admit(&people, Tick(5), |_| false);
        assert_eq!(ids(q.entering()), vec![0]);
        assert_eq!(ids(q.exiting()), vec![1]);
    }

    #[test]
    fn admit_skips_processed_people() {
        let mut q = WaitingQueue::new();
        q.admit(&four_people(), Tick(0), |id| id == PersonId(1));
        assert_eq!(ids(q.exiting()), vec![3]);
    }

    #[test]
    fn admit_is_idempotent() {
        let people = four_people();
        let mut q = WaitingQueue::new();
        assert_eq!(q.admit(&people, Tick(0), |_| false), 4);
        assert_eq!(q.admit(&people, Tick(0), |_| false), 0);
        assert_eq!(q.len(), 4);
    }

    #[test]
    fn lanes_are_ordered_by_index() {
        let people = vec![
            Person::enter(3, 0),
            Person::enter(1, 0),
            Person::enter(2, 0),
        ];
        let mut q = WaitingQueue::new();
        q.admit(&people, Tick(0), |_| false);
        assert_eq!(ids(q.lane(Direction::Enter)), vec![1, 2, 3]);
        assert_eq!(q.head(Direction::Enter), Some(PersonId(1)));
        assert_eq!(q.head(Direction::Exit), None);
    }

    #[test]
    fn has_waiting_tracks_contents() {
        let mut q = WaitingQueue::new();
        assert!(!q.has_waiting());
        assert!(q.is_empty());

        let p = Person::enter(0, 0);
        assert!(q.insert(&p));
        assert!(!q.insert(&p));
        assert!(q.has_waiting());
    }

    #[test]
    fn remove_from_correct_lane() {
        let people = four_people();
        let mut q = WaitingQueue::new();
        q.admit(&people, Tick(0), |_| false);

        assert!(q.remove(&people[0]));
        assert!(!q.remove(&people[0]));
        assert_eq!(ids(q.entering()), vec![2]);
        assert_eq!(ids(q.exiting()), vec![1, 3]);
    }
}

// ── ArrivalFeed ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod arrival_feed {
    use ts_core::Tick;

    use super::*;
    use crate::{ArrivalFeed, WaitingQueue};

    #[test]
    fn admits_up_to_clock_and_stops() {
        let people = vec![
            Person::enter(0, 0),
            Person::exit(1, 0),
            Person::exit(2, 1),
            Person::enter(3, 5),
        ];
        let mut feed = ArrivalFeed::in_input_order(&people);
        let mut q = WaitingQueue::new();

        assert_eq!(feed.admit_until(&people, Tick(0), &mut q), 2);
        assert_eq!(feed.next_arrival(&people), Some(Tick(1)));
        assert_eq!(feed.admit_until(&people, Tick(0), &mut q), 0);

        assert_eq!(feed.admit_until(&people, Tick(4), &mut q), 1);
        assert_eq!(feed.remaining(), 1);
        assert_eq!(feed.next_arrival(&people), Some(Tick(5)));

        assert_eq!(feed.admit_until(&people, Tick(5), &mut q), 1);
        assert!(feed.is_exhausted());
        assert_eq!(feed.next_arrival(&people), None);
        assert_eq!(q.len(), 4);
    }

    #[test]
    fn sorted_feed_handles_unsorted_input() {
        let people = vec![
            Person::enter(0, 7),
            Person::exit(1, 2),
            Person::enter(2, 2),
            Person::exit(3, 0),
        ];
        let mut feed = ArrivalFeed::sorted_by_arrival(&people);
        let mut q = WaitingQueue::new();

        assert_eq!(feed.next_arrival(&people), Some(Tick(0)));
        assert_eq!(feed.admit_until(&people, Tick(0), &mut q), 1);
        assert_eq!(feed.next_arrival(&people), Some(Tick(2)));
        assert_eq!(feed.admit_until(&people, Tick(2), &mut q), 2);
        assert_eq!(ids(q.exiting()), vec![1, 3]);
        assert_eq!(ids(q.entering()), vec![2]);
        assert_eq!(feed.next_arrival(&people), Some(Tick(7)));
    }

    #[test]
    fn empty_feed_is_exhausted() {
        let feed = ArrivalFeed::in_input_order(&[]);
        assert!(feed.is_exhausted());
        assert_eq!(feed.remaining(), 0);
    }
}

// ── Loaders ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use ts_core::CoreError;

    use super::*;
    use crate::{QueueError, load_people_csv, load_people_reader, read_people_text};

    #[test]
    fn text_format_parses() {
        let input = "4\n0 0 1 5\n0 1 1 0\n";
        let people = read_people_text(Cursor::new(input)).unwrap();
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
    fn text_format_skips_blank_and_comment_lines() {
        let input = "# sample\n\n2\n\n1000000000 1000000000\n0 1\n";
        let people = read_people_text(Cursor::new(input)).unwrap();
        assert_eq!(people, vec![Person::enter(0, 1_000_000_000), Person::exit(1, 1_000_000_000)]);
    }

    #[test]
    fn text_format_count_mismatch() {
        let err = read_people_text(Cursor::new("3\n0 1\n0 1 1\n")).unwrap_err();
        assert!(matches!(
            err,
            QueueError::Core(CoreError::LengthMismatch { expected: 3, got: 2, what: "arrival line" })
        ));

        let err = read_people_text(Cursor::new("2\n0 1\n0\n")).unwrap_err();
        assert!(matches!(
            err,
            QueueError::Core(CoreError::LengthMismatch { expected: 2, got: 1, what: "direction line" })
        ));
    }

    #[test]
    fn text_format_rejects_garbage() {
        assert!(matches!(
            read_people_text(Cursor::new("two\n0 1\n0 1\n")),
            Err(QueueError::Parse(_))
        ));
        assert!(matches!(
            read_people_text(Cursor::new("2\n0 -1\n0 1\n")),
            Err(QueueError::Parse(_))
        ));
        assert!(matches!(read_people_text(Cursor::new("")), Err(QueueError::Parse(_))));
    }

    #[test]
    fn text_format_bad_direction_code() {
        assert!(matches!(
            read_people_text(Cursor::new("2\n0 1\n0 2\n")),
            Err(QueueError::Core(CoreError::InvalidDirection(_)))
        ));
    }

    #[test]
    fn csv_reader_accepts_codes_and_names() {
        let csv = "index,arrival,direction\n0,0,enter\n1, 0, 1\n# comment\n2,3,Exit\n";
        let people = load_people_reader(Cursor::new(csv)).unwrap();
        assert_eq!(
            people,
            vec![Person::enter(0, 0), Person::exit(1, 0), Person::exit(2, 3)]
        );
    }

    #[test]
    fn csv_reader_keeps_file_order() {
        let csv = "index,arrival,direction\n1,0,exit\n0,0,enter\n";
        let people = load_people_reader(Cursor::new(csv)).unwrap();
        assert_eq!(people[0].id(), PersonId(1));
        assert_eq!(people[1].id(), PersonId(0));
    }

    #[test]
    fn csv_reader_rejects_bad_rows() {
        let csv = "index,arrival,direction\n0,soon,enter\n";
        assert!(matches!(load_people_reader(Cursor::new(csv)), Err(QueueError::Parse(_))));

        let csv = "index,arrival,direction\n0,0,up\n";
        assert!(matches!(
            load_people_reader(Cursor::new(csv)),
            Err(QueueError::Core(CoreError::InvalidDirection(_)))
        ));
    }

    #[test]
    fn csv_file_loads() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("people.csv");
        std::fs::write(&path, "index,arrival,direction\n0,5,exit\n").unwrap();
        assert_eq!(load_people_csv(&path).unwrap(), vec![Person::exit(0, 5)]);
    }

    #[test]
    fn missing_csv_file_is_io_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let err = load_people_csv(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, QueueError::Io(_)));
    }
}
