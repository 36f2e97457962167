//! Breadth-first search as repeated matrix-vector multiplication.

use crate::context::Context;
use crate::core::traits::{Matrix, Vector};
use crate::error::{Result, SemlaError};
use crate::kernel::matmul::multiply_vector;
use crate::ops::semiring;
use crate::vector::SparseVector;

/// BFS over a boolean adjacency matrix from `source`, returning the level
/// at which each vertex is first reached (`None` for unreachable).
///
/// `a[r][c] = true` is an edge from vertex c to vertex r (column is the
/// source), so one step of the frontier is exactly `a x frontier` under
/// the (or, and) semiring. Vertices already levelled are dropped from each
/// new frontier, which also bounds the walk at one pass per vertex.
pub fn breadth_first_search(
    ctx: &Context,
    a: &dyn Matrix<bool>,
    source: usize,
) -> Result<Vec<Option<usize>>> {
    let n = a.rows();
    if a.cols() != n {
        return Err(SemlaError::DimensionMismatch {
            op: "breadth_first_search",
            lhs: a.dims(),
            rhs: (n, n),
        });
    }
    if source >= n {
        return Err(SemlaError::IndexOutOfRange {
            row: source,
            col: 0,
            rows: n,
            cols: 1,
        });
    }

    let hops = semiring::lor_land();
    let mut levels = vec![None; n];
    levels[source] = Some(0);
    let mut frontier = SparseVector::new(n);
    frontier.set(source, true)?;

    let mut depth = 0;
    while frontier.nnz() > 0 {
        ctx.checkpoint()?;
        depth += 1;
        let mut reached = SparseVector::new(n);
        multiply_vector(ctx, a, &frontier, None, &mut reached, &hops)?;

        let mut next = SparseVector::new(n);
        reached.iterate(&mut |i, _| {
            if levels[i].is_none() {
                levels[i] = Some(depth);
                next.set(i, true).is_ok()
            } else {
                true
            }
        });
        frontier = next;
    }
    Ok(levels)
}
