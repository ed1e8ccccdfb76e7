use inlay::Optional;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Operation {
    Set(i64),
    Emplace(i64),
    Reset,
    Take,
    CloneFrom(Option<i64>),
    MoveFrom(Option<i64>),
}

proptest! {
    #[test]
    fn test_optional_matches_std_option(ops in proptest::collection::vec(
        prop_oneof![
            any::<i64>().prop_map(Operation::Set),
            any::<i64>().prop_map(Operation::Emplace),
            Just(Operation::Reset),
            Just(Operation::Take),
            proptest::option::of(any::<i64>()).prop_map(Operation::CloneFrom),
            proptest::option::of(any::<i64>()).prop_map(Operation::MoveFrom),
        ],
        1..64
    )) {
        let mut model: Option<i64> = None;
        let mut subject: Optional<i64> = Optional::new();

        for op in ops {
            match op {
                Operation::Set(v) => {
                    model = Some(v);
                    subject.set(v);
                }
                Operation::Emplace(v) => {
                    model = Some(v);
                    let placed = subject.emplace(v);
                    prop_assert_eq!(*placed, v);
                }
                Operation::Reset => {
                    model = None;
                    subject.reset();
                }
                Operation::Take => {
                    prop_assert_eq!(subject.take(), model.take());
                }
                Operation::CloneFrom(src) => {
                    let source = Optional::from(src);
                    subject.clone_from(&source);
                    // The source is untouched by a copy-assignment.
                    prop_assert_eq!(source.has_value(), src.is_some());
                    model = src;
                }
                Operation::MoveFrom(src) => {
                    let mut source = Optional::from(src);
                    subject.move_from(&mut source);
                    // Every move path disengages the source.
                    prop_assert!(!source.has_value());
                    model = src;
                }
            }

            prop_assert_eq!(subject.has_value(), model.is_some());
            prop_assert_eq!(subject.as_option(), model.as_ref());
        }

        // Final consistency check: draining the subject matches the model.
        prop_assert_eq!(Option::from(subject), model);
    }

    #[test]
    fn test_value_round_trip(v in any::<i64>()) {
        let subject = Optional::some(v);
        prop_assert!(subject.has_value());
        prop_assert_eq!(subject.value().copied(), Ok(v));
        prop_assert_eq!(subject.into_value(), Ok(v));
    }
}
