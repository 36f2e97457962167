//! Cross-layout storage tests: the three matrix layouts must be
//! indistinguishable through the storage contract.

use semla::{CscMatrix, CsrMatrix, DenseMatrix, Matrix, Vector};

fn storages(rows: usize, cols: usize) -> Vec<(&'static str, Box<dyn Matrix<f64>>)> {
    vec![
        ("DenseMatrix", Box::new(DenseMatrix::new(rows, cols))),
        ("CscMatrix", Box::new(CscMatrix::new(rows, cols))),
        ("CsrMatrix", Box::new(CsrMatrix::new(rows, cols))),
    ]
}

fn setup(m: &mut dyn Matrix<f64>) {
    m.set(0, 0, 4.0).unwrap();
    m.set(0, 1, 0.0).unwrap();
    m.set(1, 0, 1.0).unwrap();
    m.set(1, 1, -9.0).unwrap();
}

#[test]
fn get_set_roundtrip() {
    for (name, mut m) in storages(2, 2) {
        setup(m.as_mut());
        assert_eq!(m.get(0, 0).unwrap(), 4.0, "{name}");
        assert_eq!(m.get(0, 1).unwrap(), 0.0, "{name}");
        assert_eq!(m.get(1, 1).unwrap(), -9.0, "{name}");
    }
}

#[test]
fn update_applies_a_function_to_the_cell() {
    for (name, mut m) in storages(2, 2) {
        setup(m.as_mut());
        m.update(0, 0, &|v| v / 2.0).unwrap();
        assert_eq!(m.get(0, 0).unwrap(), 2.0, "{name}");
    }
}

#[test]
fn update_to_zero_removes_sparse_entries() {
    for (name, mut m) in storages(2, 2) {
        setup(m.as_mut());
        m.update(0, 0, &|_| 0.0).unwrap();
        assert_eq!(m.get(0, 0).unwrap(), 0.0, "{name}");
        assert_eq!(m.nnz(), 2, "{name}: only (1,0) and (1,1) remain");
    }
}

#[test]
fn unset_leaves_an_empty_two_by_two() {
    // set then unset one cell of an empty 2x2: nnz drops back to zero
    let mut m = CscMatrix::new(2, 2);
    m.set(0, 0, 2.0).unwrap();
    m.set(0, 0, 0.0).unwrap();
    assert_eq!(m.nnz(), 0);
    for r in 0..2 {
        for c in 0..2 {
            assert_eq!(m.get(r, c).unwrap(), 0.0);
        }
    }
}

#[test]
fn sparse_iteration_agrees_with_dense() {
    let cells = [
        (0, 0, 9.0),
        (0, 2, 7.0),
        (2, 0, 3.0),
        (2, 2, 1.0),
    ];
    let mut dense = DenseMatrix::new(3, 3);
    for &(r, c, v) in &cells {
        dense.set(r, c, v).unwrap();
    }

    for (name, mut m) in storages(3, 3) {
        for &(r, c, v) in &cells {
            m.set(r, c, v).unwrap();
        }
        let mut count = 0;
        let complete = m.iterate(&mut |r, c, v| {
            count += 1;
            assert_eq!(dense.get(r, c).unwrap(), v, "{name} at ({r}, {c})");
            true
        });
        assert!(complete, "{name}");
        assert_eq!(count, cells.len(), "{name}: every non-zero exactly once");
    }
}

#[test]
fn iteration_can_stop_early() {
    for (name, mut m) in storages(3, 3) {
        setup(m.as_mut());
        let mut visits = 0;
        let complete = m.iterate(&mut |_, _, _| {
            visits += 1;
            false
        });
        assert!(!complete, "{name}");
        assert_eq!(visits, 1, "{name}");
    }
}

#[test]
fn structural_count_tracks_logical_nonzeros() {
    // a write sequence mixing inserts, overwrites and deletes
    let writes = [
        (0, 0, 2.0),
        (1, 2, 5.0),
        (1, 2, 0.0),
        (2, 1, 3.0),
        (0, 0, 7.0),
        (2, 2, 4.0),
        (2, 1, 0.0),
    ];
    for (name, mut m) in storages(3, 3) {
        for &(r, c, v) in &writes {
            m.set(r, c, v).unwrap();
        }
        let mut logical = 0;
        for r in 0..3 {
            for c in 0..3 {
                if m.get(r, c).unwrap() != 0.0 {
                    logical += 1;
                }
            }
        }
        assert_eq!(m.nnz(), logical, "{name}");
        assert_eq!(logical, 2, "{name}: (0,0) and (2,2) survive");
    }
}

#[test]
fn row_and_col_have_copy_semantics() {
    for (name, mut m) in storages(2, 3) {
        m.set(0, 1, 5.0).unwrap();
        m.set(1, 2, 6.0).unwrap();
        let row = m.row(0).unwrap();
        m.set(0, 1, 99.0).unwrap();
        assert_eq!(row.get(1).unwrap(), 5.0, "{name}: extracted row must not alias");
        let col = m.col(2).unwrap();
        assert_eq!(col.len(), 2, "{name}");
        assert_eq!(col.get(1).unwrap(), 6.0, "{name}");
    }
}

#[test]
fn clear_preserves_dimensions() {
    for (name, mut m) in storages(2, 3) {
        setup(m.as_mut());
        m.clear();
        assert_eq!(m.dims(), (2, 3), "{name}");
        assert_eq!(m.nnz(), 0, "{name}");
        assert_eq!(m.get(1, 1).unwrap(), 0.0, "{name}");
    }
}

#[test]
fn out_of_range_indices_error() {
    for (name, mut m) in storages(2, 2) {
        assert!(m.get(2, 0).is_err(), "{name}");
        assert!(m.get(0, 2).is_err(), "{name}");
        assert!(m.set(2, 0, 1.0).is_err(), "{name}");
        assert!(m.update(0, 2, &|v| v).is_err(), "{name}");
        assert!(m.row(2).is_err(), "{name}");
        assert!(m.col(2).is_err(), "{name}");
    }
}
