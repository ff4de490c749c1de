use std::time::Duration;

use listing_core::{Debouncer, SEARCH_DEBOUNCE};

#[test]
fn rapid_keystrokes_settle_only_the_final_value() {
    let mut debouncer = Debouncer::new(String::new(), SEARCH_DEBOUNCE);
    let generations: Vec<_> = ["c", "ca", "cat"]
        .into_iter()
        .map(|text| debouncer.input(text.to_string()).expect("new input arms a timer"))
        .collect();
    assert_eq!(generations, vec![1, 2, 3]);
    assert!(debouncer.is_pending());

    // Superseded timers fire late and must not publish anything.
    let mut propagated = Vec::new();
    for generation in generations {
        if let Some(value) = debouncer.elapse(generation) {
            propagated.push(value.clone());
        }
    }
    assert_eq!(propagated, vec!["cat".to_string()]);
    assert_eq!(debouncer.settled(), "cat");
    assert!(!debouncer.is_pending());
}

#[test]
fn repeating_the_current_value_arms_nothing() {
    let mut debouncer = Debouncer::new("cat".to_string(), Duration::from_millis(10));
    assert_eq!(debouncer.input("cat".to_string()), None);

    let generation = debouncer.input("cats".to_string()).unwrap();
    assert_eq!(debouncer.input("cats".to_string()), None);
    assert_eq!(debouncer.elapse(generation).map(String::as_str), Some("cats"));
}

#[test]
fn returning_to_the_settled_value_still_restarts_the_timer() {
    let mut debouncer = Debouncer::new("cat".to_string(), SEARCH_DEBOUNCE);
    let first = debouncer.input("cats".to_string()).unwrap();
    let second = debouncer.input("cat".to_string()).unwrap();
    assert_eq!(debouncer.elapse(first), None);
    assert_eq!(debouncer.elapse(second).map(String::as_str), Some("cat"));
}

#[test]
fn cancel_makes_the_armed_timer_stale() {
    let mut debouncer = Debouncer::new(String::new(), SEARCH_DEBOUNCE);
    let generation = debouncer.input("monet".to_string()).unwrap();
    assert!(debouncer.cancel());
    assert_eq!(debouncer.elapse(generation), None);
    assert_eq!(debouncer.settled(), "");
    assert!(!debouncer.cancel());
}

#[test]
fn elapsing_twice_publishes_once() {
    let mut debouncer = Debouncer::new(String::new(), SEARCH_DEBOUNCE);
    let generation = debouncer.input("x".to_string()).unwrap();
    assert!(debouncer.elapse(generation).is_some());
    assert!(debouncer.elapse(generation).is_none());
}
