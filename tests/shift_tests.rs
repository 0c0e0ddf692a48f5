use stepvec::{StepVec, StepVecError};

#[test]
fn test_push_scenario() {
    let mut v = StepVec::new(5).unwrap();

    assert!(v.push_back(1));
    assert_eq!(v.capacity(), 5);
    assert_eq!(v.as_slice(), &[1]);

    assert!(!v.push_back(2));
    assert!(!v.push_back(3));
    assert_eq!(v.capacity(), 5);
    assert_eq!(v.as_slice(), &[1, 2, 3]);

    assert!(!v.push_front(4));
    assert_eq!(v.as_slice(), &[4, 1, 2, 3]);

    assert_eq!(v.remove(1), Ok(1));
    assert_eq!(v.as_slice(), &[4, 2, 3]);
    assert_eq!(v.capacity(), 4);
}

#[test]
fn test_insert_scenario() {
    let mut v = StepVec::from_sequence([1, 2, 3], 5).unwrap();

    assert_eq!(v.insert(1, 4), Ok(true));
    assert_eq!(v.capacity(), 8);
    assert_eq!(v.as_slice(), &[1, 4, 2, 3]);

    assert_eq!(v.insert(2, 5), Ok(false));
    assert_eq!(v.as_slice(), &[1, 4, 5, 2, 3]);

    // what a signed `-1` index turns into
    assert_eq!(
        v.insert(usize::MAX, 1),
        Err(StepVecError::IndexOutOfBounds {
            index: usize::MAX,
            length: 5
        })
    );
    assert_eq!(v.as_slice(), &[1, 4, 5, 2, 3]);
    assert_eq!(v.capacity(), 8);
}

#[test]
fn test_insert_at_end_appends() {
    let mut v = StepVec::from_sequence([1, 2], 1).unwrap();

    assert_eq!(v.insert(2, 3), Ok(true));
    assert_eq!(v.as_slice(), &[1, 2, 3]);
}

#[test]
fn test_insert_into_empty() {
    let mut v = StepVec::new(1).unwrap();

    assert_eq!(v.insert(0, "only"), Ok(true));
    assert_eq!(v.as_slice(), &["only"]);
    assert!(v.insert(2, "late").is_err());
}

#[test]
fn test_insert_then_remove_round_trip() {
    let mut v = StepVec::from_sequence(vec![10, 20, 30, 40], 3).unwrap();

    for index in 0..=4 {
        v.insert(index, 99).unwrap();
        assert_eq!(v.len(), 5);
        assert_eq!(v.remove(index), Ok(99));
        assert_eq!(v.as_slice(), &[10, 20, 30, 40]);
    }
}

#[test]
fn test_remove_last_and_first() {
    let mut v = StepVec::from_sequence(vec!['a', 'b', 'c', 'd'], 2).unwrap();

    assert_eq!(v.remove(3), Ok('d'));
    assert_eq!(v.remove(0), Ok('a'));
    assert_eq!(v.as_slice(), &['b', 'c']);
    assert_eq!(v.capacity(), 2);
}

#[test]
fn test_remove_out_of_bounds_is_noop() {
    let mut v = StepVec::from_sequence([1, 2, 3], 5).unwrap();

    assert_eq!(
        v.remove(3),
        Err(StepVecError::IndexOutOfBounds {
            index: 3,
            length: 3
        })
    );
    assert_eq!(v.as_slice(), &[1, 2, 3]);
    assert_eq!(v.capacity(), 3);
}

#[test]
fn test_remove_from_empty() {
    let mut v = StepVec::<i32>::with_capacity(4, 1).unwrap();

    assert!(v.remove(0).is_err());
    assert_eq!(v.capacity(), 4);
}

#[test]
fn test_remove_shrinks_spare_capacity_too() {
    let mut v = StepVec::with_capacity(10, 1).unwrap();
    v.push_back(1);
    v.push_back(2);

    assert_eq!(v.remove(0), Ok(1));
    assert_eq!(v.capacity(), 9);
    assert_eq!(v.len(), 1);
}

#[test]
fn test_remove_returns_owned_value() {
    let mut v = StepVec::from_sequence(vec![String::from("keep"), String::from("take")], 1).unwrap();

    let taken: String = v.remove(1).unwrap();
    assert_eq!(taken, "take");
    assert_eq!(v.as_slice(), &["keep"]);
}
