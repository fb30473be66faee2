use enclosure::numbers::F64;
use enclosure::{Interval, IntervalError, IntervalVector};
use expect_test::expect;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn sample(rng: &mut StdRng, iv: Interval<f64>) -> f64 {
    rng.gen_range(iv.lo()..=iv.hi())
}

#[test]
fn arithmetic_encloses_sampled_points() {
    let mut rng = StdRng::seed_from_u64(1);
    let a = Interval::new(1.0, 2.0).unwrap();
    let b = Interval::new(-3.0, 4.0).unwrap();
    let d = Interval::new(0.5, 2.0).unwrap();
    for _ in 0..1000 {
        let x = sample(&mut rng, a);
        let y = sample(&mut rng, b);
        let z = sample(&mut rng, d);
        assert!((a + b).contains(x + y));
        assert!((a - b).contains(x - y));
        assert!((a * b).contains(x * y));
        assert!(a.checked_div(d).unwrap().contains(x / z));
        assert!(a.pow(3).unwrap().contains(x.powi(3)));
        assert!(b.pow(2).unwrap().contains(y * y));
        assert!(a.sqrt().unwrap().contains(x.sqrt()));
        assert!(a.exp().contains(x.exp()));
        assert!(a.log().contains(x.ln()));
        assert!(b.abs().contains(y.abs()));
    }
}

#[test]
fn naive_polynomial_evaluation_stays_an_enclosure() {
    // (x - 1)^2 evaluated as x·x - 2x + 1 over x ∈ [0, 2]. The repeated
    // occurrence of x makes the interval result wider than the true range,
    // but every pointwise evaluation must stay inside it.
    let x = Interval::new(0.0, 2.0).unwrap();
    let bound = x * x - x * 2.0 + 1.0;
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..1000 {
        let p = rng.gen_range(0.0..=2.0);
        assert!(bound.contains(p * p - 2.0 * p + 1.0));
    }
}

#[test]
fn norm_encloses_pointwise_norms() {
    let v = IntervalVector::from_bounds(vec![(1.0, 2.0), (3.0, 4.0), (-1.0, 1.0)]).unwrap();
    let norm = v.norm().unwrap();
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..1000 {
        let p: Vec<f64> = v.iter().map(|iv| sample(&mut rng, *iv)).collect();
        let pointwise = p.iter().map(|c| c * c).sum::<f64>().sqrt();
        assert!(norm.contains(pointwise));
    }
    // Scaling the box scales the pointwise norms along with the enclosure.
    let scaled = v.scale(Interval::point(2.0));
    assert!(scaled.norm().unwrap().ge(norm.lo()));
}

#[test]
fn dominance_steers_branch_decisions() {
    // The conservative comparisons are what an interval optimizer branches
    // on: discard a candidate box only when its objective enclosure is
    // entirely worse than the incumbent's.
    let incumbent = Interval::new(1.0, 5.0).unwrap();
    let candidate = Interval::new(2.0, 3.0).unwrap();
    assert!(!candidate.ge(incumbent));
    assert!(!incumbent.ge(candidate));
    let worse = Interval::new(6.0, 7.0).unwrap();
    assert!(worse.gt(incumbent));
    assert!(worse.ge(5.0) && !worse.le(6.5) && worse.lt(8.0));
}

#[test]
fn rendering_snapshots() {
    let v = IntervalVector::from_bounds(vec![(1.0, 2.0), (3.5, 4.0), (-1.0, 1.0)]).unwrap();
    expect![[r#"
        ([1 , 2]
         [3.5 , 4]
         [-1 , 1])"#]]
    .assert_eq(&v.to_string());

    let w = IntervalVector::from_bounds(vec![
        (F64::from(0.1), F64::from(0.25)),
        (F64::from(-1.5), F64::from(0.0)),
    ])
    .unwrap();
    expect![[r#"
        ([0.1 , 0.25]
         [-1.5 , 0.0])"#]]
    .assert_eq(&w.to_string());

    expect![["[1 , 2.5]"]].assert_eq(&Interval::new(1.0, 2.5).unwrap().to_string());
}

#[test]
fn failures_surface_at_the_offending_operation() {
    let v = IntervalVector::from_bounds(vec![(1.0, 2.0), (3.0, 4.0)]).unwrap();
    assert_eq!(
        v.get(2),
        Err(IntervalError::IndexOutOfRange { index: 2, len: 2 })
    );
    assert_eq!(v.mul_vector(&v), Err(IntervalError::VectorTimesVector));
    assert_eq!(
        Interval::new(1.0, 2.0)
            .unwrap()
            .checked_div(Interval::new(-1.0, 1.0).unwrap()),
        Err(IntervalError::DivisorContainsZero)
    );
    assert_eq!(
        IntervalError::DivisorContainsZero.to_string(),
        "division by an interval containing zero"
    );
    assert_eq!(
        v.get(5).unwrap_err().to_string(),
        "index 5 out of range for interval vector of length 2"
    );
}

#[test]
fn outward_widening_absorbs_rounding() {
    // Opt-in rigor: after widening, the bounds enclose the real-valued
    // result even when the bound arithmetic itself rounded inward.
    let a = Interval::new(0.1, 0.2).unwrap();
    let b = Interval::new(0.3, 0.4).unwrap();
    let widened = (a * b).outward();
    assert!(widened.lo() < (a * b).lo());
    assert!(widened.hi() > (a * b).hi());
    assert!(widened.contains(0.1 * 0.3) && widened.contains(0.2 * 0.4));
}
