use nqueens::search::enumerate::{count_solutions_within, solve, solve_within};
use nqueens::search::{SearchError, SearchLimits};

#[test]
fn default_limits_do_not_disturb_results() {
    let budgeted = solve_within(8, SearchLimits::default()).unwrap();
    assert_eq!(budgeted.len(), 92);
    assert_eq!(budgeted, solve(8));
}

#[test]
fn count_within_matches_solve_within() {
    let limits = SearchLimits::default();
    let count = count_solutions_within(6, limits).unwrap();
    assert_eq!(count, solve_within(6, limits).unwrap().len() as u64);
}

#[test]
fn tiny_solution_budget_is_reported_as_limit_exceeded() {
    let limits = SearchLimits {
        max_solutions: 5,
        ..SearchLimits::default()
    };

    let err = solve_within(8, limits).unwrap_err();
    match err {
        SearchError::LimitExceeded {
            metric,
            limit,
            observed,
            counts,
            ..
        } => {
            assert_eq!(metric, "solutions");
            assert_eq!(limit, 5);
            assert_eq!(observed, 6);
            assert_eq!(counts.solutions, 6);
        }
        other => panic!("expected LimitExceeded, got: {other}"),
    }
}

#[test]
fn tiny_node_budget_is_reported_as_limit_exceeded() {
    let limits = SearchLimits {
        max_nodes: 10,
        ..SearchLimits::default()
    };

    let err = count_solutions_within(8, limits).unwrap_err();
    match err {
        SearchError::LimitExceeded { metric, limit, .. } => {
            assert_eq!(metric, "nodes");
            assert_eq!(limit, 10);
        }
        other => panic!("expected LimitExceeded, got: {other}"),
    }
}

#[test]
fn trivial_boards_fit_any_budget() {
    // n=0 examines no candidate squares at all.
    let limits = SearchLimits {
        max_solutions: 1,
        max_nodes: 0,
    };
    let solutions = solve_within(0, limits).unwrap();
    assert_eq!(solutions.len(), 1);
}
