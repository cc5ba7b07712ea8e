use kader_matrisi::reduce::{digit_sum, is_master, reduce_keeping_masters, reduce_to_single_digit};

#[test]
fn single_digit_reduction_is_idempotent() {
    for n in 0..5000 {
        let once = reduce_to_single_digit(n);
        assert_eq!(reduce_to_single_digit(once), once, "n = {}", n);
        assert!(once <= 9);
    }
}

#[test]
fn master_numbers_survive_only_when_kept() {
    assert_eq!(reduce_keeping_masters(11), 11);
    assert_eq!(reduce_keeping_masters(22), 22);
    assert_eq!(reduce_keeping_masters(33), 33);

    assert_eq!(reduce_to_single_digit(11), 2);
    assert_eq!(reduce_to_single_digit(22), 4);
    assert_eq!(reduce_to_single_digit(33), 6);
}

#[test]
fn reduction_stops_on_a_master_reached_midway() {
    assert_eq!(reduce_keeping_masters(29), 11);
    assert_eq!(reduce_keeping_masters(2009), 11);
    assert_eq!(reduce_to_single_digit(2009), 2);
    assert_eq!(reduce_keeping_masters(1990), 1);
}

#[test]
fn kept_reduction_lands_in_valid_range() {
    for n in 1..5000 {
        let value = reduce_keeping_masters(n);
        assert!((1..=9).contains(&value) || is_master(value), "n = {} -> {}", n, value);
    }
}

#[test]
fn zero_stays_zero() {
    assert_eq!(reduce_keeping_masters(0), 0);
    assert_eq!(reduce_to_single_digit(0), 0);
    assert_eq!(digit_sum(0), 0);
    assert_eq!(digit_sum(1990), 19);
}
