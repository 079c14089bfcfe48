//! Backtracking enumeration of non-attacking placements.
//!
//! Rows are filled top to bottom; at each row every column is tested with
//! [`is_safe`] and safe candidates are pushed, recursed into, and popped on
//! return. The recursion depth equals the board size.
//!
//! The callback primitives ([`try_for_each_solution`], [`for_each_solution`])
//! visit each solution exactly once without materializing the set; the
//! `solve*` entry points collect into a hash set. `*_within` variants charge
//! every examined candidate square and every emitted solution against a
//! [`SearchLimits`] budget.

use rustc_hash::FxHashSet;

use crate::placement::{Placement, MAX_BOARD};
use crate::rules::is_safe;
use crate::search::resources::ResourceTracker;
use crate::search::{SearchError, SearchLimits};

/// Enumerate all solutions for an `n`×`n` board.
///
/// The callback borrows the search's working buffer; clone the placement to
/// keep it. `n == 0` yields exactly one solution, the empty placement.
pub fn for_each_solution(n: usize, mut f: impl FnMut(&Placement)) {
    // A wrapper that cannot fail.
    try_for_each_solution(n, |p| {
        f(p);
        Ok(())
    })
    .unwrap_or_else(|never: std::convert::Infallible| match never {});
}

/// Like [`for_each_solution`], but allows early exit via a fallible callback.
pub fn try_for_each_solution<E>(
    n: usize,
    mut f: impl FnMut(&Placement) -> Result<(), E>,
) -> Result<(), E> {
    assert!(n <= MAX_BOARD);

    let mut partial = Placement::empty();
    rec(n, &mut partial, &mut f)
}

fn rec<E>(
    n: usize,
    partial: &mut Placement,
    f: &mut dyn FnMut(&Placement) -> Result<(), E>,
) -> Result<(), E> {
    if partial.len() == n {
        return f(partial);
    }
    for col in 0..n as u16 {
        if !is_safe(col, partial) {
            continue;
        }
        partial.push(col);
        rec(n, partial, f)?;
        partial.pop();
    }
    Ok(())
}

/// The full solution set for an `n`×`n` board.
///
/// Total over all `n`: boards without solutions (n=2, n=3) produce an empty
/// set, not an error. The search never generates a placement twice, so the
/// set insert is a pure type-level statement of set semantics.
pub fn solve(n: usize) -> FxHashSet<Placement> {
    let mut out: FxHashSet<Placement> = FxHashSet::default();
    for_each_solution(n, |p| {
        out.insert(p.clone());
    });
    out
}

/// Count solutions without materializing them.
pub fn count_solutions(n: usize) -> u64 {
    let mut count = 0u64;
    for_each_solution(n, |_| count += 1);
    count
}

/// Like [`solve`], but aborts with [`SearchError::LimitExceeded`] once the
/// given budget is exhausted.
pub fn solve_within(
    n: usize,
    limits: SearchLimits,
) -> Result<FxHashSet<Placement>, SearchError> {
    assert!(n <= MAX_BOARD);

    let mut tracker = ResourceTracker::new(limits);
    let mut out: FxHashSet<Placement> = FxHashSet::default();
    let mut partial = Placement::empty();

    rec_within(n, &mut partial, &mut tracker, &mut |p, tracker| {
        tracker.bump_solutions("solve_within", 1)?;
        out.insert(p.clone());
        Ok(())
    })?;

    Ok(out)
}

/// Budgeted [`count_solutions`].
pub fn count_solutions_within(n: usize, limits: SearchLimits) -> Result<u64, SearchError> {
    assert!(n <= MAX_BOARD);

    let mut tracker = ResourceTracker::new(limits);
    let mut count = 0u64;
    let mut partial = Placement::empty();

    rec_within(n, &mut partial, &mut tracker, &mut |_, tracker| {
        tracker.bump_solutions("count_within", 1)?;
        count += 1;
        Ok(())
    })?;

    Ok(count)
}

fn rec_within(
    n: usize,
    partial: &mut Placement,
    tracker: &mut ResourceTracker,
    emit: &mut dyn FnMut(&Placement, &mut ResourceTracker) -> Result<(), SearchError>,
) -> Result<(), SearchError> {
    if partial.len() == n {
        return emit(partial, tracker);
    }
    for col in 0..n as u16 {
        tracker.bump_nodes("enumerate", 1)?;
        if !is_safe(col, partial) {
            continue;
        }
        partial.push(col);
        rec_within(n, partial, tracker, emit)?;
        partial.pop();
    }
    Ok(())
}
