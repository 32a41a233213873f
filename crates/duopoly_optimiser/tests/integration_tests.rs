//! Integration tests for the optimal price search and quality sweep.
//!
//! These tests check the search against closed-form optima of the model and
//! verify the sweep reproduces the individual searches.

use approx::assert_relative_eq;
use duopoly_core::market::{best_response_price, compute_shares};
use duopoly_optimiser::{
    search_optimal_price, sweep_optimal_profit, LinearGrid, OptimalPriceSearch, OptimiserError,
    QualitySweep, SearchConfig, SweepConfig,
};
use proptest::prelude::*;

// ============================================================================
// Optimal Price Search
// ============================================================================

/// At quality 4 the incumbent's interior reply gives s1 = 0.5 - 0.5x with
/// x = p1/1000, so profit peaks at x = 0.5 on the grid.
#[test]
fn test_reference_search_at_quality_four() {
    let best = search_optimal_price(4.0).unwrap();

    assert_eq!(best.price, 500.0);
    assert_relative_eq!(best.profit, 12_500.0, epsilon = 1e-6);
}

/// The reported profit is exactly the model's profit at the reported price.
#[test]
fn test_reported_profit_is_consistent() {
    let best = search_optimal_price(4.0).unwrap();

    let incumbent_price = best_response_price(best.price, 4.0, 6.0);
    let outcome = compute_shares(best.price, 4.0, incumbent_price, 6.0);
    let expected = outcome.share1 * best.price * 100.0;

    assert_eq!(best.profit.to_bits(), expected.to_bits());
}

#[test]
fn test_search_is_deterministic() {
    let first = search_optimal_price(4.0).unwrap();
    for _ in 0..5 {
        let again = search_optimal_price(4.0).unwrap();
        assert_eq!(first.price.to_bits(), again.price.to_bits());
        assert_eq!(first.profit.to_bits(), again.profit.to_bits());
    }
}

#[test]
fn test_search_with_custom_grid() {
    let config = SearchConfig::default().with_price_grid(LinearGrid::new(100.0, 1000.0, 100.0));
    let best = OptimalPriceSearch::new(config).search(4.0).unwrap();

    assert_eq!(best.price, 500.0);
}

#[test]
fn test_search_rejects_invalid_quality() {
    let err = search_optimal_price(0.0).unwrap_err();
    assert!(matches!(err, OptimiserError::InvalidQuality(_)));
    assert!(format!("{}", err).starts_with("Quality must be greater than 0"));
}

// ============================================================================
// Quality Sweep
// ============================================================================

#[test]
fn test_reference_sweep() {
    let curve = sweep_optimal_profit().unwrap();

    assert_eq!(curve.len(), 55);
    for (i, point) in curve.iter().enumerate() {
        assert_relative_eq!(point.quality, 0.5 + 0.1 * i as f64, epsilon = 1e-12);
        assert!(point.profit > 0.0);
        assert!((10.0..=3000.0).contains(&point.price));
    }
}

/// The incumbent's quality advantage shrinks as the responsive firm
/// approaches it, so the low end of the curve earns more than the top end.
#[test]
fn test_sweep_profit_falls_near_incumbent_quality() {
    let curve = sweep_optimal_profit().unwrap();
    let last = curve.last().unwrap();
    let peak = curve
        .iter()
        .map(|p| p.profit)
        .fold(f64::NEG_INFINITY, f64::max);

    assert!(last.profit < peak);
}

#[test]
fn test_sweep_matches_searches() {
    let config = SweepConfig::default().with_quality_grid(LinearGrid::new(1.0, 5.0, 0.5));
    let curve = QualitySweep::new(config).run().unwrap();

    assert_eq!(curve.len(), 9);
    for point in &curve {
        let best = search_optimal_price(point.quality).unwrap();
        assert_eq!(point.price, best.price);
        assert_eq!(point.profit, best.profit);
    }
}

#[test]
fn test_sweep_rejects_bad_grid() {
    let config = SweepConfig::default().with_quality_grid(LinearGrid::new(5.0, 1.0, 0.1));
    let err = QualitySweep::new(config).run().unwrap_err();

    assert!(matches!(err, OptimiserError::InvalidGrid { name: "quality", .. }));
}

// ============================================================================
// Property-Based Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_optimum_dominates_grid(quality in 0.1..5.9f64) {
        let best = search_optimal_price(quality).unwrap();
        for price in LinearGrid::reference_prices().points().step_by(7) {
            let p2 = best_response_price(price, quality, 6.0);
            let share = compute_shares(price, quality, p2, 6.0).share1;
            prop_assert!(share * price * 100.0 <= best.profit);
        }
    }
}
