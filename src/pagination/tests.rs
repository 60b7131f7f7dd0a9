//! Tests for page number selection

use super::*;
use crate::config::PaginationOptions;
use test_case::test_case;

fn indices(pages: &[ResolvedPage]) -> Vec<usize> {
    pages.iter().filter_map(ResolvedPage::index).collect()
}

fn limiter_count(pages: &[ResolvedPage]) -> usize {
    pages.iter().filter(|p| p.is_limiter()).count()
}

fn around(n: usize) -> NumberLimit {
    NumberLimit::Around(n)
}

// ============================================================================
// NumberLimit Tests
// ============================================================================

#[test]
fn test_number_limit_from_i64() {
    assert_eq!(NumberLimit::try_from(-1).unwrap(), NumberLimit::Unlimited);
    assert_eq!(NumberLimit::try_from(0).unwrap(), NumberLimit::Around(0));
    assert_eq!(NumberLimit::try_from(4).unwrap(), NumberLimit::Around(4));
    assert!(NumberLimit::try_from(-2).is_err());
    assert_eq!(i64::from(NumberLimit::Unlimited), -1);
    assert_eq!(i64::from(NumberLimit::Around(3)), 3);
}

// ============================================================================
// Scenario Tests
// ============================================================================

#[test]
fn test_neighbours_without_limiters() {
    let params = ResolveParams::new(5, 10).with_number_limit(around(2));
    let pages = resolve(&params);

    assert_eq!(
        pages,
        vec![
            ResolvedPage::Number(3),
            ResolvedPage::Number(4),
            ResolvedPage::Current(5),
            ResolvedPage::Number(6),
            ResolvedPage::Number(7),
        ]
    );
}

#[test]
fn test_large_page_numbers_with_limiters() {
    let params = ResolveParams::new(10, 20)
        .with_number_limit(around(1))
        .with_large_pages(1, 5);
    let pages = resolve(&params);

    assert_eq!(
        pages,
        vec![
            ResolvedPage::Number(5),
            ResolvedPage::Limiter,
            ResolvedPage::Number(9),
            ResolvedPage::Current(10),
            ResolvedPage::Number(11),
            ResolvedPage::Limiter,
            ResolvedPage::Number(15),
        ]
    );
}

#[test]
fn test_single_page() {
    let params = ResolveParams::new(0, 1).with_number_limit(around(3));
    assert_eq!(resolve(&params), vec![ResolvedPage::Current(0)]);

    let params = ResolveParams::new(0, 1);
    assert_eq!(resolve(&params), vec![ResolvedPage::Current(0)]);
}

#[test]
fn test_zero_limit_shows_current_only() {
    let params = ResolveParams::new(4, 10).with_number_limit(around(0));
    assert_eq!(resolve(&params), vec![ResolvedPage::Current(4)]);
}

#[test]
fn test_unlimited_shows_every_page() {
    let params = ResolveParams::new(3, 7);
    let pages = resolve(&params);
    assert_eq!(indices(&pages), (0..7).collect::<Vec<_>>());
    assert_eq!(limiter_count(&pages), 0);
    assert_eq!(pages[3], ResolvedPage::Current(3));
}

#[test]
fn test_neighbours_clamped_at_edges() {
    let params = ResolveParams::new(0, 10).with_number_limit(around(2));
    assert_eq!(indices(&resolve(&params)), vec![0, 1, 2]);

    let params = ResolveParams::new(9, 10).with_number_limit(around(2));
    assert_eq!(indices(&resolve(&params)), vec![7, 8, 9]);
}

#[test]
fn test_large_pages_out_of_bounds_skipped() {
    // Only 2 + 10 fits; 2 - 10 does not exist
    let params = ResolveParams::new(2, 15)
        .with_number_limit(around(0))
        .with_large_pages(3, 10);
    let pages = resolve(&params);
    assert_eq!(
        pages,
        vec![
            ResolvedPage::Current(2),
            ResolvedPage::Limiter,
            ResolvedPage::Number(12),
        ]
    );
}

#[test]
fn test_large_pages_merge_with_neighbours() {
    // Large stride of 1 overlaps the neighbours; no duplicates, no limiters
    let params = ResolveParams::new(5, 10)
        .with_number_limit(around(1))
        .with_large_pages(2, 1);
    let pages = resolve(&params);
    assert_eq!(indices(&pages), vec![3, 4, 5, 6, 7]);
    assert_eq!(limiter_count(&pages), 0);
}

#[test]
fn test_huge_large_limit_terminates() {
    let params = ResolveParams::new(50, 100)
        .with_number_limit(around(0))
        .with_large_pages(usize::MAX, 25);
    assert_eq!(indices(&resolve(&params)), vec![0, 25, 50, 75]);
}

#[test]
fn test_out_of_range_inputs_clamped() {
    let params = ResolveParams::new(40, 5).with_number_limit(around(1));
    assert_eq!(
        resolve(&params),
        vec![ResolvedPage::Number(3), ResolvedPage::Current(4)]
    );

    let params = ResolveParams::new(0, 0);
    assert_eq!(resolve(&params), vec![ResolvedPage::Current(0)]);
}

#[test_case(0, 10, 0 ; "first page")]
#[test_case(9, 10, 0 ; "last page")]
#[test_case(0, 100, 3 ; "first page many")]
#[test_case(50, 100, 3 ; "middle many")]
#[test_case(99, 100, 2 ; "last page many")]
fn test_current_always_present(current: usize, total: usize, limit: usize) {
    let params = ResolveParams::new(current, total)
        .with_number_limit(around(limit))
        .with_large_pages(2, 10);
    let pages = resolve(&params);
    let currents: Vec<_> = pages.iter().filter(|p| p.is_current()).collect();
    assert_eq!(currents, vec![&ResolvedPage::Current(current)]);
}

// ============================================================================
// Invariant Tests
// ============================================================================

fn assert_invariants(params: &ResolveParams, pages: &[ResolvedPage]) {
    let idx = indices(pages);
    assert!(!idx.is_empty(), "{params:?}");
    assert!(idx.windows(2).all(|w| w[0] < w[1]), "{params:?}: {idx:?}");
    assert!(idx.iter().all(|&i| i < params.total_pages), "{params:?}");

    // Limiters sit exactly where the gap exceeds one page
    let expected_limiters = idx.windows(2).filter(|w| w[1] - w[0] > 1).count();
    assert_eq!(limiter_count(pages), expected_limiters, "{params:?}");
    assert!(!pages.first().is_some_and(ResolvedPage::is_limiter));
    assert!(!pages.last().is_some_and(ResolvedPage::is_limiter));
    for pair in pages.windows(2) {
        assert!(!(pair[0].is_limiter() && pair[1].is_limiter()), "{params:?}");
        if let (Some(a), Some(b)) = (pair[0].index(), pair[1].index()) {
            assert_eq!(b - a, 1, "adjacent pages without limiter: {params:?}");
        }
    }
}

#[test]
fn test_invariants_hold_across_configurations() {
    let limits = [
        NumberLimit::Unlimited,
        around(0),
        around(1),
        around(2),
        around(5),
    ];

    for total in [1usize, 2, 3, 7, 20, 101] {
        for current in [0, 1, total / 2, total.saturating_sub(2), total - 1] {
            for limit in limits {
                for (large_limit, interval) in [(0, 10), (1, 5), (3, 3), (2, 1)] {
                    let params = ResolveParams::new(current.min(total - 1), total)
                        .with_number_limit(limit)
                        .with_large_pages(large_limit, interval);
                    let pages = resolve(&params);
                    assert_invariants(&params, &pages);

                    if limit == NumberLimit::Unlimited {
                        assert_eq!(pages.len(), total);
                        assert_eq!(limiter_count(&pages), 0);
                    }
                }
            }
        }
    }
}

#[test]
fn test_resolve_is_idempotent() {
    let params = ResolveParams::new(33, 200)
        .with_number_limit(around(2))
        .with_large_pages(4, 10);
    assert_eq!(resolve(&params), resolve(&params));
}

// ============================================================================
// Resolver Trait Tests
// ============================================================================

#[test]
fn test_neighbor_resolver_matches_resolve() {
    let params = ResolveParams::new(7, 30)
        .with_number_limit(around(2))
        .with_large_pages(1, 10);
    let resolver: Box<dyn PageSetResolver> = Box::new(NeighborResolver::new());
    assert_eq!(resolver.resolve(&params), resolve(&params));
}

#[test]
fn test_params_from_options() {
    let mut options = PaginationOptions::new();
    options.set_total_pages(20);
    options.set_current_page(11);
    options.set_number_limit(1).unwrap();
    options.set_large_page_number_limit(1);
    options.set_large_page_number_interval(5);

    let params = ResolveParams::from_options(&options).unwrap();
    assert_eq!(params.current_page_index, 10);
    assert_eq!(params.total_pages, 20);
    assert_eq!(params.number_limit, NumberLimit::Around(1));
    assert_eq!(indices(&resolve(&params)), vec![5, 9, 10, 11, 15]);
}

#[test]
fn test_params_from_options_rejects_bad_limit() {
    let options = PaginationOptions {
        number_limit: -3,
        ..Default::default()
    };
    assert!(ResolveParams::from_options(&options).is_err());
}

#[test]
fn test_resolved_page_serializes() {
    let json = serde_json::to_value(ResolvedPage::Current(3)).unwrap();
    assert_eq!(json, serde_json::json!({"kind": "current", "page_index": 3}));
    let json = serde_json::to_value(ResolvedPage::Limiter).unwrap();
    assert_eq!(json, serde_json::json!({"kind": "limiter"}));
}
