use approx::assert_abs_diff_eq;
use std::f64::consts::PI;

use vec_quad::{IntegralCalculator, IntegrationMethod,
               SimpsonIntegralCalculator, TrapezoidalIntegralCalculator};

fn square(x: f64) -> f64 {
    x * x
}

#[test]
fn both_calculators_agree_on_same_input(){
    let trap = TrapezoidalIntegralCalculator::new(square);
    let simp = SimpsonIntegralCalculator::new(square);
    let expected = 8.0 / 3.0;
    assert_abs_diff_eq!(trap.calculate(0.0, 2.0, 1000).unwrap(), expected, epsilon = 1e-3);
    assert_abs_diff_eq!(simp.calculate(0.0, 2.0, 1000).unwrap(), expected, epsilon = 1e-3);
}

#[test]
fn orientation_is_antisymmetric(){
    let f = |x: f64| (3.0 * x).sin() + x;
    for m in IntegrationMethod::ALL.iter(){
        let calc = m.calculator::<f64, _>(f);
        for &(a, b) in [(0.0, 1.0), (-2.5, 0.5), (1.0, 10.0)].iter(){
            for &n in [1usize, 5, 64].iter(){
                let fwd = calc.calculate(a, b, n).unwrap();
                let rev = calc.calculate(b, a, n).unwrap();
                assert_abs_diff_eq!(rev, -fwd, epsilon = 1e-12 * (1.0 + fwd.abs()));
            }
        }
    }
}

#[test]
fn more_subdivisions_improve_accuracy(){
    let trap = TrapezoidalIntegralCalculator::new(f64::sin);
    let simp = SimpsonIntegralCalculator::new(f64::sin);
    let err = |c: &dyn IntegralCalculator<TField=f64>, n| (c.calculate(0.0, PI, n).unwrap() - 2.0).abs();
    assert!(err(&trap, 1000) < err(&trap, 10));
    assert!(err(&simp, 1000) < err(&simp, 10));
}

#[test]
fn calculators_are_shareable_across_threads(){
    let calc = SimpsonIntegralCalculator::new(|x: f64| x.cos());
    let expected = 1.0f64.sin();
    std::thread::scope(|s| {
        let handles: Vec<_> = (1..=8usize)
            .map(|k| {
                let calc = &calc;
                s.spawn(move || calc.calculate(0.0, 1.0, 100 * k).unwrap())
            })
            .collect();
        for h in handles{
            assert_abs_diff_eq!(h.join().unwrap(), expected, epsilon = 1e-8);
        }
    });
}

#[test]
fn method_selected_by_name(){
    let method: IntegrationMethod = "trapezoidal".parse().unwrap();
    let calc = method.calculator::<f64, _>(|x: f64| 4.0 * x * x * x);
    assert_abs_diff_eq!(calc.calculate(0.0, 1.0, 2000).unwrap(), 1.0, epsilon = 1e-5);
    assert_eq!(method.to_string(), "trapezoidal");
}
