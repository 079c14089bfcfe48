use nqueens::placement::Placement;
use nqueens::search::enumerate::{count_solutions, solve};
use rustc_hash::FxHashSet;

#[test]
fn zero_board_has_exactly_the_empty_solution() {
    let solutions = solve(0);
    assert_eq!(solutions.len(), 1);
    assert!(solutions.contains(&Placement::empty()));
}

#[test]
fn one_board_has_exactly_column_zero() {
    let solutions = solve(1);
    assert_eq!(solutions.len(), 1);
    assert!(solutions.contains(&Placement::from_cols(vec![0])));
}

#[test]
fn boards_two_and_three_have_no_solutions() {
    assert!(solve(2).is_empty());
    assert!(solve(3).is_empty());
}

#[test]
fn four_board_has_exactly_the_two_known_solutions() {
    let expected: FxHashSet<Placement> = [vec![1u16, 3, 0, 2], vec![2, 0, 3, 1]]
        .into_iter()
        .map(Placement::from_cols)
        .collect();
    assert_eq!(solve(4), expected);
}

#[test]
fn known_counts_up_to_eight() {
    assert_eq!(count_solutions(5), 10);
    assert_eq!(count_solutions(6), 4);
    assert_eq!(count_solutions(7), 40);
    assert_eq!(count_solutions(8), 92);
}

#[test]
fn eight_board_has_92_solutions() {
    assert_eq!(solve(8).len(), 92);
}

#[test]
fn solving_twice_yields_equal_sets() {
    assert_eq!(solve(6), solve(6));
    assert_eq!(solve(8), solve(8));
}
