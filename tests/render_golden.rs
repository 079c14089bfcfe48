use nqueens::placement::Placement;
use nqueens::render::render;
use nqueens::search::enumerate::solve;

#[test]
fn four_by_four_known_solution_renders_exactly() {
    let p = Placement::from_cols(vec![2, 0, 3, 1]);
    assert_eq!(render(&p), "--Q-\nQ---\n---Q\n-Q--");
}

#[test]
fn empty_placement_renders_as_empty_string() {
    assert_eq!(render(&Placement::empty()), "");
}

#[test]
fn rendered_boards_have_one_queen_per_line_in_the_right_column() {
    for p in solve(5) {
        let out = render(&p);
        let lines: Vec<&str> = out.split('\n').collect();
        assert_eq!(lines.len(), 5);

        for (row, line) in lines.iter().enumerate() {
            assert_eq!(line.chars().count(), 5);
            assert_eq!(line.chars().filter(|&c| c == 'Q').count(), 1);

            let queen_at = line.chars().position(|c| c == 'Q').unwrap();
            assert_eq!(queen_at, usize::from(p.col(row)));
        }
    }
}
