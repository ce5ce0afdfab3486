use shot_finder::solver::{
    Calibration, Displacement, POWER_CAP, SelectionRule, ShotCandidate, ShotError,
    enumerate_candidates, power_for_angle, select_optimal, solve,
};

fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "actual={actual}, expected={expected}, tolerance={tolerance}"
    );
}

fn sample_displacements() -> Vec<Displacement> {
    let mut out = Vec::new();
    for dx in [1.0, 35.0, 120.0, 400.0, 777.5, 1500.0] {
        for dy in [-600.0, -100.0, 0.0, 42.0, 300.0, 1200.0] {
            out.push(Displacement::new(dx, dy));
        }
    }
    out
}

#[test]
fn golden_power_at_seventy_one_degrees() {
    let power = power_for_angle(Displacement::new(400.0, 100.0), 71, &Calibration::default())
        .expect("calculation should succeed");
    assert_close(power, 59.65209936191159, 1e-9);
}

#[test]
fn powers_are_deterministic_and_non_negative() {
    let calibration = Calibration::default();
    for displacement in sample_displacements() {
        for angle in 1..90 {
            let first = power_for_angle(displacement, angle, &calibration);
            let second = power_for_angle(displacement, angle, &calibration);
            match (first, second) {
                (Ok(a), Ok(b)) => {
                    assert_eq!(a.to_bits(), b.to_bits());
                    assert!(a >= 0.0 && a.is_finite(), "{displacement:?} at {angle}: {a}");
                }
                (Err(a), Err(b)) => assert_eq!(a, b),
                other => panic!("non-deterministic result: {other:?}"),
            }
        }
    }
}

#[test]
fn candidates_respect_table_and_cap() {
    let calibration = Calibration {
        angles: vec![62, 69, 75, 81, 87],
        ..Calibration::default()
    };
    for displacement in sample_displacements() {
        let candidates = enumerate_candidates(displacement, &calibration);
        assert!(candidates.iter().all(|c| calibration.angles.contains(&c.angle)));
        assert!(candidates.iter().all(|c| c.power < POWER_CAP));
        assert!(candidates.windows(2).all(|w| w[0].angle < w[1].angle));
    }
}

#[test]
fn selection_comes_from_its_input() {
    let calibration = Calibration::default();
    for rule in [SelectionRule::Literal, SelectionRule::NearestHalf] {
        for displacement in sample_displacements() {
            let candidates = enumerate_candidates(displacement, &calibration);
            match select_optimal(&candidates, rule) {
                Ok(best) => {
                    let source = candidates
                        .iter()
                        .find(|c| c.angle == best.angle)
                        .expect("selected angle is a candidate");
                    assert_close(best.power, source.power, 0.005 + 1e-9);
                }
                Err(err) => {
                    assert!(candidates.is_empty());
                    assert_eq!(err, ShotError::NoFeasibleShot);
                }
            }
        }
    }
}

#[test]
fn solve_is_idempotent() {
    let calibration = Calibration::default();
    for displacement in sample_displacements() {
        let first = solve(displacement, &calibration);
        let second = solve(displacement, &calibration);
        match (first, second) {
            (Ok(a), Ok(b)) => {
                assert_eq!(a.angle, b.angle);
                assert_eq!(a.power.to_bits(), b.power.to_bits());
            }
            (a, b) => assert_eq!(a, b),
        }
    }
}

#[test]
fn vertical_click_pair_has_no_shot() {
    let calibration = Calibration::default();
    assert!(enumerate_candidates(Displacement::new(0.0, 50.0), &calibration).is_empty());
    assert_eq!(
        solve(Displacement::new(0.0, 50.0), &calibration),
        Err(ShotError::NoFeasibleShot)
    );
}

#[test]
fn literal_rule_prefers_the_fraction_furthest_from_half() {
    let candidates = [
        ShotCandidate { angle: 66, power: 55.501 },
        ShotCandidate { angle: 72, power: 60.999 },
    ];
    let literal = select_optimal(&candidates, SelectionRule::Literal).expect("selection");
    assert_eq!(literal.angle, 72);
    assert_close(literal.power, 61.0, 1e-12);

    let nearest = select_optimal(&candidates, SelectionRule::NearestHalf).expect("selection");
    assert_eq!(nearest.angle, 66);
    assert_close(nearest.power, 55.5, 1e-12);
}

#[test]
fn narrow_legacy_table_is_just_configuration() {
    let calibration = Calibration {
        angles: (69..=87).collect(),
        ..Calibration::default()
    };
    let best = solve(Displacement::new(400.0, 100.0), &calibration).expect("shot");
    assert!((69..=84).contains(&best.angle));
}
