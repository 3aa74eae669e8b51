use avenger_ticks::{nice_tick_values, tick_of_single_value};
use rstest::rstest;

#[rstest]
#[case((0.0, 100.0), 6, vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0])]
#[case((-10.0, 100.0), 6, vec![-25.0, 0.0, 25.0, 50.0, 75.0, 100.0])]
#[case((0.0, 1.0), 6, vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0])]
#[case((0.0, 1.0), 5, vec![0.0, 0.25, 0.5, 0.75, 1.0])]
#[case((0.0, 0.3), 6, vec![0.0, 0.06, 0.12, 0.18, 0.24, 0.3])]
#[case((1.1, 10.9), 6, vec![0.0, 3.0, 6.0, 9.0, 12.0, 15.0])]
#[case((3.0, 97.0), 6, vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0])]
#[case((-100.0, 100.0), 5, vec![-100.0, -50.0, 0.0, 50.0, 100.0])]
#[case((-100.0, 100.0), 6, vec![-100.0, -50.0, 0.0, 50.0, 100.0, 150.0])]
#[case((0.001, 0.009), 6, vec![0.0, 0.002, 0.004, 0.006, 0.008, 0.01])]
#[case((-0.5, 0.5), 6, vec![-0.5, -0.25, 0.0, 0.25, 0.5, 0.75])]
#[case((12.0, 13.0), 6, vec![12.0, 12.2, 12.4, 12.6, 12.8, 13.0])]
#[case((-1.0, 1.0), 3, vec![-1.0, 0.0, 1.0])]
#[case((-3.0, 7.0), 5, vec![-3.0, 0.0, 3.0, 6.0, 9.0])]
#[case((0.1, 0.35), 6, vec![0.1, 0.15, 0.2, 0.25, 0.3, 0.35])]
#[case((1e6, 5e6), 5, vec![1e6, 2e6, 3e6, 4e6, 5e6])]
#[case((-250.0, -30.0), 4, vec![-255.0, -170.0, -85.0, 0.0])]
#[case((17.0, 83.0), 8, vec![11.0, 22.0, 33.0, 44.0, 55.0, 66.0, 77.0, 88.0])]
#[case((5.0, 2000.0), 6, vec![0.0, 400.0, 800.0, 1200.0, 1600.0, 2000.0])]
fn test_nice_tick_values(
    #[case] domain: (f64, f64),
    #[case] tick_count: usize,
    #[case] expected: Vec<f64>,
) {
    assert_eq!(nice_tick_values(domain, tick_count, true), expected);
}

#[rstest]
#[case((0.0, 1.0), 6, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0])]
#[case((12.0, 13.0), 6, vec![12.0, 13.0, 14.0, 15.0, 16.0, 17.0])]
#[case((-0.5, 0.5), 6, vec![-1.0, 0.0, 1.0, 2.0, 3.0, 4.0])]
#[case((0.0, 100.0), 6, vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0])]
fn test_nice_tick_values_integers(
    #[case] domain: (f64, f64),
    #[case] tick_count: usize,
    #[case] expected: Vec<f64>,
) {
    assert_eq!(nice_tick_values(domain, tick_count, false), expected);
}

#[test]
fn test_reversed_domain() {
    assert_eq!(
        nice_tick_values((100.0, 0.0), 6, true),
        vec![100.0, 80.0, 60.0, 40.0, 20.0, 0.0]
    );

    let domains = [(0.0, 100.0), (-10.0, 100.0), (1.1, 10.9), (-250.0, -30.0), (0.1, 0.35)];
    for (a, b) in domains {
        let mut reversed = nice_tick_values((b, a), 6, true);
        reversed.reverse();
        assert_eq!(nice_tick_values((a, b), 6, true), reversed);
    }
}

#[test]
fn test_tick_count_is_at_least_two() {
    assert_eq!(nice_tick_values((0.0, 10.0), 0, true), vec![0.0, 10.0]);
    assert_eq!(nice_tick_values((0.0, 10.0), 1, true), vec![0.0, 10.0]);
}

#[test]
fn test_zero_is_included() {
    let domains = [(-10.0, 100.0), (-3.0, 7.0), (-0.02, 0.13), (-97.5, 3.2), (-1e-3, 1e-3)];
    for domain in domains {
        for tick_count in 2..10 {
            let ticks = nice_tick_values(domain, tick_count, true);
            assert!(
                ticks.contains(&0.0),
                "{domain:?} with {tick_count} ticks: {ticks:?}"
            );
        }
    }
}

#[test]
fn test_ticks_are_monotonic_and_cover_domain() {
    let domains = [
        (0.0, 100.0),
        (-10.0, 100.0),
        (1.1, 10.9),
        (-250.0, -30.0),
        (0.33, 0.55),
        (123.4, 98765.4),
        (0.0483847, 0.051800000000000006),
        (-0.008045885006864706, 70369915.62701909),
    ];
    for (min, max) in domains {
        for tick_count in 2..12 {
            let ticks = nice_tick_values((min, max), tick_count, true);
            assert!(ticks.len() >= 2, "{ticks:?}");
            assert!(ticks.windows(2).all(|w| w[0] < w[1]), "{ticks:?}");
            assert!(ticks[0] <= min && *ticks.last().unwrap() >= max, "{ticks:?}");

            let descending = nice_tick_values((max, min), tick_count, true);
            assert!(descending.windows(2).all(|w| w[0] > w[1]), "{descending:?}");
        }
    }
}

#[test]
fn test_bounds_just_off_the_grid() {
    assert_eq!(
        nice_tick_values((0.0483847, 0.051800000000000006), 6, true),
        vec![0.048, 0.0488, 0.0496, 0.0504, 0.0512, 0.052]
    );
    assert_eq!(
        nice_tick_values((-0.008045885006864706, 70369915.62701909), 3, true),
        vec![-75000000.0, 0.0, 75000000.0]
    );
}

#[test]
fn test_infinite_bounds() {
    let inf = f64::INFINITY;
    assert_eq!(
        nice_tick_values((-inf, 5.0), 4, true),
        vec![-inf, -inf, -inf, 5.0]
    );
    assert_eq!(
        nice_tick_values((5.0, -inf), 4, true),
        vec![5.0, -inf, -inf, -inf]
    );
    assert_eq!(nice_tick_values((0.0, inf), 3, true), vec![0.0, inf, inf]);
    assert_eq!(nice_tick_values((inf, 0.0), 3, true), vec![inf, inf, 0.0]);
    assert_eq!(nice_tick_values((-inf, inf), 2, true), vec![-inf, inf]);
}

#[test]
fn test_single_value_domain() {
    assert_eq!(nice_tick_values((5.0, 5.0), 4, true), vec![4.0, 5.0, 6.0, 7.0]);
    assert_eq!(nice_tick_values((0.0, 0.0), 4, true), vec![0.0, 1.0, 2.0, 3.0]);
    assert_eq!(nice_tick_values((7.0, 7.0), 1, true), vec![7.0]);
    assert_eq!(
        nice_tick_values((0.05, 0.05), 3, true),
        tick_of_single_value(0.05, 3, true)
    );
    assert_eq!(tick_of_single_value(0.05, 3, true), vec![0.04, 0.05, 0.06]);
}
