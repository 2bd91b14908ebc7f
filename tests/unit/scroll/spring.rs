use super::*;

const DT: f64 = 1.0 / 60.0;

fn run_until_settled(s: &mut Spring, max_steps: usize) -> Option<usize> {
    (1..=max_steps).find(|_| {
        s.step(DT);
        s.is_settled()
    })
}

#[test]
fn default_config_is_overdamped() {
    let cfg = SpringConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.omega(), 10.0);
    assert!((cfg.damping_ratio() - 1.5).abs() < 1e-12);
}

#[test]
fn default_spring_settles_without_overshoot() {
    let mut s = Spring::new(SpringConfig::default(), 0.0);
    s.set_target(1.0);
    assert!(!s.is_settled());

    let mut last = 0.0;
    let mut steps = 0;
    while !s.is_settled() && steps < 600 {
        let p = s.step(DT);
        assert!(p >= last - 1e-12, "non-monotonic at step {steps}");
        assert!(p <= 1.0 + 1e-12, "overshoot at step {steps}: {p}");
        last = p;
        steps += 1;
    }
    assert!(s.is_settled());
    assert!(steps <= 180, "took {steps} steps");
    assert_eq!(s.position(), 1.0);
    assert_eq!(s.velocity(), 0.0);
}

#[test]
fn underdamped_and_critical_springs_settle() {
    for damping in [5.0, 20.0] {
        let cfg = SpringConfig {
            damping,
            ..SpringConfig::default()
        };
        let mut s = Spring::new(cfg, 0.0);
        s.set_target(1.0);
        assert!(run_until_settled(&mut s, 2000).is_some(), "damping {damping}");
        assert_eq!(s.position(), 1.0);
    }
}

#[test]
fn underdamped_spring_overshoots() {
    let cfg = SpringConfig {
        damping: 2.0,
        ..SpringConfig::default()
    };
    let mut s = Spring::new(cfg, 0.0);
    s.set_target(1.0);
    let peak = (0..120).map(|_| s.step(DT)).fold(f64::MIN, f64::max);
    assert!(peak > 1.0);
}

#[test]
fn closed_form_is_step_size_independent() {
    let mut a = Spring::new(SpringConfig::default(), 0.0);
    let mut b = Spring::new(SpringConfig::default(), 0.0);
    a.set_target(1.0);
    b.set_target(1.0);
    a.step(0.2);
    for _ in 0..4 {
        b.step(0.05);
    }
    assert!((a.position() - b.position()).abs() < 1e-9);
    assert!((a.velocity() - b.velocity()).abs() < 1e-9);
}

#[test]
fn tiny_retarget_at_rest_snaps() {
    let mut s = Spring::new(SpringConfig::default(), 0.5);
    s.set_target(0.5005);
    assert!(s.is_settled());
    assert_eq!(s.position(), 0.5005);
}

#[test]
fn non_finite_inputs_are_ignored() {
    let mut s = Spring::new(SpringConfig::default(), 0.25);
    s.set_target(f64::NAN);
    assert_eq!(s.target(), 0.25);
    s.set_target(1.0);
    assert_eq!(s.step(f64::NAN), 0.25);
    assert_eq!(s.step(-1.0), 0.25);
}

#[test]
fn validation_rejects_bad_parameters() {
    let bad = [
        SpringConfig {
            stiffness: 0.0,
            ..SpringConfig::default()
        },
        SpringConfig {
            mass: -1.0,
            ..SpringConfig::default()
        },
        SpringConfig {
            damping: -0.1,
            ..SpringConfig::default()
        },
        SpringConfig {
            rest_delta: 0.0,
            ..SpringConfig::default()
        },
        SpringConfig {
            stiffness: f64::INFINITY,
            ..SpringConfig::default()
        },
    ];
    for cfg in bad {
        assert!(cfg.validate().is_err(), "{cfg:?}");
    }
}
