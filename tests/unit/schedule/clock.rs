use super::*;

#[test]
fn fixed_clock_yields_bounded_steps() {
    let mut clock = FixedClock::new(0.25, 3).unwrap();
    assert_eq!(clock.next_frame(), Some(0.25));
    assert_eq!(clock.remaining(), 2);
    assert_eq!(clock.next_frame(), Some(0.25));
    assert_eq!(clock.next_frame(), Some(0.25));
    assert_eq!(clock.next_frame(), None);
    assert_eq!(clock.next_frame(), None);
}

#[test]
fn fixed_clock_at_fps() {
    let mut clock = FixedClock::at_fps(60.0, 1).unwrap();
    let dt = clock.next_frame().unwrap();
    assert!((dt - 1.0 / 60.0).abs() < 1e-12);
}

#[test]
fn invalid_rates_are_rejected() {
    assert!(FixedClock::new(0.0, 1).is_err());
    assert!(FixedClock::new(f64::NAN, 1).is_err());
    assert!(FixedClock::at_fps(-1.0, 1).is_err());
    assert!(RealtimeClock::new(0.0).is_err());
    assert!(RealtimeClock::new(f64::INFINITY).is_err());
}

#[test]
fn realtime_clock_paces_refreshes() {
    let mut clock = RealtimeClock::new(200.0).unwrap().bounded(3);
    let start = Instant::now();
    let first = clock.next_frame().unwrap();
    assert!((first - 0.005).abs() < 1e-9);
    let second = clock.next_frame().unwrap();
    let third = clock.next_frame().unwrap();
    assert!(second >= 0.005 && third >= 0.005);
    assert!(start.elapsed() >= Duration::from_millis(10));
    assert_eq!(clock.next_frame(), None);
}
