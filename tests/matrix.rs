use strided_linalg::{Idx, Matrix, StridedError, Vector, ALL};

fn m(rows: &[&[f64]]) -> Matrix {
    Matrix::from_rows(rows).unwrap()
}

fn row(values: &[f64]) -> Matrix {
    Matrix::from_row(values).unwrap()
}

fn v(values: &[f64]) -> Vector {
    Vector::from_slice(values).unwrap()
}

#[test]
fn test_initialize() {
    assert_eq!(Matrix::new(5, 5).unwrap().shape(), (5, 5));
    let zero = Matrix::zeros(5, 5).unwrap();
    assert!(zero.is_zero());
    assert!(zero.is_square());
    assert_eq!(
        Matrix::identity(2).unwrap(),
        m(&[&[1.0, 0.0], &[0.0, 1.0]])
    );
    assert_eq!(Matrix::new(0, 1).unwrap_err(), StridedError::InvalidSize);
}

#[test]
fn test_text() {
    assert_eq!(row(&[0.0, 0.0, 0.0]).to_string(), "[0.0 0.0 0.0]");
    assert_eq!(
        m(&[&[1.0, 2.0, 3.0], &[2.0, 3.0, 4.0]]).to_string(),
        "[1.0 2.0 3.0;\n 2.0 3.0 4.0]"
    );
    assert_eq!(
        m(&[&[1.0, 2.0, 3.0], &[2.0, 3.0, 4.0]]).join(" "),
        "1.0 2.0 3.0 2.0 3.0 4.0"
    );
    assert_eq!(row(&[0.0, 1.0, 2.0]).to_vec(), vec![vec![0.0, 1.0, 2.0]]);
}

#[test]
fn test_equal() {
    let a = m(&[&[1.0, 2.0, 3.0], &[2.0, 3.0, 4.0]]);
    assert_eq!(a, a.clone());
    assert_eq!(Matrix::from_fn(2, 3, |i, j| (i + j) as f64).unwrap(), m(&[&[0.0, 1.0, 2.0], &[1.0, 2.0, 3.0]]));
    assert_ne!(row(&[1.0, 2.0]), m(&[&[1.0], &[2.0]]));
}

#[test]
fn test_set_get() {
    let mut a = m(&[&[1.0, 2.0, 3.0], &[2.0, 3.0, 4.0]]);
    a.set(0, 0, 3.0).unwrap();
    assert_eq!(a, m(&[&[3.0, 2.0, 3.0], &[2.0, 3.0, 4.0]]));
    assert_eq!(a.get(1, 0).unwrap(), 2.0);
    assert_eq!(a.get(-1, -1).unwrap(), 4.0);
    assert!(a.get(2, 0).is_err());
}

#[test]
fn test_iteration() {
    let a = m(&[&[1.0, 2.0, 3.0], &[3.0, 4.0, 5.0]]);
    assert_eq!(a.iter().collect::<Vec<_>>(), vec![1.0, 2.0, 3.0, 3.0, 4.0, 5.0]);

    let by_rows: Vec<f64> = a.rows_iter().flat_map(|r| r.iter().collect::<Vec<_>>()).collect();
    assert_eq!(by_rows, vec![1.0, 2.0, 3.0, 3.0, 4.0, 5.0]);
    let by_columns: Vec<f64> = a
        .columns_iter()
        .flat_map(|c| c.iter().collect::<Vec<_>>())
        .collect();
    assert_eq!(by_columns, vec![1.0, 3.0, 2.0, 4.0, 3.0, 5.0]);

    let vec_rows: Vec<f64> = a.vector_rows().flat_map(|r| r.to_vec()).collect();
    assert_eq!(vec_rows, vec![1.0, 2.0, 3.0, 3.0, 4.0, 5.0]);
    let vec_columns: Vec<f64> = a.vector_columns().flat_map(|c| c.to_vec()).collect();
    assert_eq!(vec_columns, vec![1.0, 3.0, 2.0, 4.0, 3.0, 5.0]);

    let last = a.iter_indexed().last().unwrap();
    assert_eq!(last, ((1, 2), 5.0));
}

#[test]
fn test_wildcard_select() {
    let a = m(&[&[1.0, 2.0, 3.0], &[2.0, 3.0, 4.0]]);
    assert!(std::ptr::eq(a.select(ALL, ALL).unwrap().matrix().unwrap(), &a));
    assert_eq!(a.select(0, ALL).unwrap().vector().unwrap(), v(&[1.0, 2.0, 3.0]));
    assert_eq!(a.select(1, ALL).unwrap().vector().unwrap(), v(&[2.0, 3.0, 4.0]));
    assert_eq!(a.select(ALL, 2).unwrap().vector().unwrap(), v(&[3.0, 4.0]));
    assert_eq!(a.select(Idx::At(-1), 0).unwrap().element(), Some(2.0));

    // A huge unsigned index is out of range, not the last row.
    assert_eq!(
        a.select(usize::MAX, ALL).unwrap_err(),
        StridedError::OutOfBounds { index: isize::MAX, len: 2 }
    );
    assert!(a.select(ALL, usize::MAX).is_err());
    assert!(a.select(usize::MAX, 0usize).is_err());
}

#[test]
fn test_wildcard_assign() {
    let mut a = m(&[&[1.0, 2.0, 3.0], &[2.0, 3.0, 4.0]]);
    a.assign(0, ALL, 1.0).unwrap();
    assert_eq!(a, m(&[&[1.0, 1.0, 1.0], &[2.0, 3.0, 4.0]]));
    a.assign(0, ALL, &v(&[1.0, 2.0, 4.0])).unwrap();
    assert_eq!(a, m(&[&[1.0, 2.0, 4.0], &[2.0, 3.0, 4.0]]));

    a.assign(ALL, 0, 1.0).unwrap();
    assert_eq!(a, m(&[&[1.0, 2.0, 4.0], &[1.0, 3.0, 4.0]]));
    a.assign(ALL, 0, &v(&[1.0, 2.0])).unwrap();
    assert_eq!(a, m(&[&[1.0, 2.0, 4.0], &[2.0, 3.0, 4.0]]));

    assert_eq!(
        a.assign(ALL, 0, &v(&[1.0, 2.0, 3.0])).unwrap_err(),
        StridedError::SizeMismatch(2, 3)
    );

    a.assign(ALL, ALL, 1.0).unwrap();
    assert_eq!(a, Matrix::filled(2, 3, 1.0).unwrap());

    assert!(a.assign(usize::MAX, ALL, 0.0).is_err());
    assert_eq!(a, Matrix::filled(2, 3, 1.0).unwrap());
}

#[test]
fn test_rows_and_columns() {
    let mut a = Matrix::zeros(2, 2).unwrap();
    a.set_row(0, &v(&[1.0, 2.0])).unwrap();
    a.set_column(-1, &v(&[5.0, 6.0])).unwrap();
    assert_eq!(a, m(&[&[1.0, 5.0], &[0.0, 6.0]]));
    assert_eq!(a.get_row(1).unwrap(), v(&[0.0, 6.0]));
    assert_eq!(a.get_column(0).unwrap(), v(&[1.0, 0.0]));
}

#[test]
fn test_operators() {
    let a = m(&[&[1.0, 2.0, 3.0], &[2.0, 3.0, 4.0]]);
    assert_eq!(
        (&a + &m(&[&[0.0, 2.0, 0.0], &[0.0, 1.0, 0.0]])).unwrap(),
        m(&[&[1.0, 4.0, 3.0], &[2.0, 4.0, 4.0]])
    );
    let shifted = m(&[&[1.5, 2.5, 3.5], &[2.5, 3.5, 4.5]]);
    assert_eq!((&a + 0.5).unwrap(), shifted);
    assert_eq!((0.5 + &a).unwrap(), shifted);

    let column = row(&[1.0, 2.0, 3.0]).transpose().unwrap();
    assert_eq!(
        (&column * &v(&[0.0, 2.0, 0.0]).to_matrix().unwrap()).unwrap(),
        m(&[&[0.0, 2.0, 0.0], &[0.0, 4.0, 0.0], &[0.0, 6.0, 0.0]])
    );
    assert_eq!(
        (&a * &v(&[0.0, 2.0, 0.0]).transpose().unwrap()).unwrap(),
        m(&[&[4.0], &[6.0]])
    );
    assert_eq!(
        (&m(&[&[1.0, 2.0], &[3.0, 4.0]]) * 3.0).unwrap(),
        m(&[&[3.0, 6.0], &[9.0, 12.0]])
    );
    assert_eq!(
        (3.0 * &m(&[&[1.0, 2.0], &[3.0, 4.0]])).unwrap(),
        m(&[&[3.0, 6.0], &[9.0, 12.0]])
    );

    let b = m(&[&[0.0, 2.0, 0.0], &[0.0, 1.0, 0.0]]);
    assert_eq!(
        (&b * &m(&[&[1.0, 2.0], &[2.0, 3.0], &[4.0, 5.0]])).unwrap(),
        m(&[&[4.0, 6.0], &[2.0, 3.0]])
    );
    assert_eq!((&b ^ &b).unwrap(), m(&[&[0.0, 4.0, 0.0], &[0.0, 1.0, 0.0]]));
    assert_eq!(b.multiply(&b).unwrap(), (&b ^ &b).unwrap());

    assert!(matches!(&a + &b.transpose().unwrap(), Err(StridedError::ShapeMismatch(_, _))));
    assert!(matches!(&a * &a, Err(StridedError::ShapeMismatch(_, _))));
}

#[test]
fn test_matrix_vector_product() {
    let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
    assert_eq!((&a * &v(&[1.0, 1.0])).unwrap(), v(&[3.0, 7.0]));
    assert_eq!(
        (&a * &v(&[1.0, 1.0, 1.0])).unwrap_err(),
        StridedError::SizeMismatch(2, 3)
    );
}

#[test]
fn test_transpose() {
    let a = m(&[&[1.0, 2.0, 3.0], &[2.0, 3.0, 4.0]]);
    assert_eq!(a.transpose().unwrap().transpose().unwrap(), a);

    let mut sq = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
    sq.transpose_in_place().unwrap();
    assert_eq!(sq, m(&[&[1.0, 3.0], &[2.0, 4.0]]));
}

#[test]
fn test_swaps() {
    let mut a = m(&[&[1.0, 2.0, 3.0], &[2.0, 3.0, 4.0], &[3.0, 4.0, 5.0]]);
    a.swap_rows(0, 1).unwrap();
    assert_eq!(a, m(&[&[2.0, 3.0, 4.0], &[1.0, 2.0, 3.0], &[3.0, 4.0, 5.0]]));
    a.swap_columns(0, 1).unwrap();
    assert_eq!(a, m(&[&[3.0, 2.0, 4.0], &[2.0, 1.0, 3.0], &[4.0, 3.0, 5.0]]));
    a.swap_row_column(0, 0).unwrap();
    assert_eq!(a, m(&[&[3.0, 2.0, 4.0], &[2.0, 1.0, 3.0], &[4.0, 3.0, 5.0]]));

    let mut wide = Matrix::zeros(2, 3).unwrap();
    assert_eq!(
        wide.swap_row_column(0, 1).unwrap_err(),
        StridedError::NonSquare { rows: 2, cols: 3 }
    );
}

#[test]
fn test_map_variants() {
    let mut a = Matrix::zeros(2, 2).unwrap();
    a.map_indexed(|i, j| (10 * i + j) as f64);
    assert_eq!(a, m(&[&[0.0, 1.0], &[10.0, 11.0]]));
    a.map_with_index(|x, i, _| x + i as f64);
    assert_eq!(a, m(&[&[0.0, 1.0], &[11.0, 12.0]]));
    assert_eq!(a.map(|x| x * 2.0).unwrap(), m(&[&[0.0, 2.0], &[22.0, 24.0]]));
}

#[test]
fn test_scans() {
    let a = m(&[&[4.0, -2.0], &[7.0, 7.0]]);
    assert_eq!(a.min_max(), (-2.0, 7.0));
    assert_eq!(a.min_index(), (0, 1));
    assert_eq!(a.max_index(), (1, 0));
    assert!(!a.is_positive());
}

#[test]
fn test_coerce() {
    let a = m(&[&[1.0, 2.0]]);
    let (converted, copy) = a.coerce(&v(&[5.0, 6.0])).unwrap();
    assert_eq!(converted, row(&[5.0, 6.0]));
    assert_eq!(copy, a);

    let (filled, _) = a.coerce(2.0).unwrap();
    assert_eq!(filled, row(&[2.0, 2.0]));
}

#[test]
fn test_submatrix_copy() {
    let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], &[7.0, 8.0, 9.0]]);
    let mut sub = a.submatrix(1, 1, 2, 2).unwrap();
    sub.set(0, 0, 0.0).unwrap();
    assert_eq!(sub, m(&[&[0.0, 6.0], &[8.0, 9.0]]));
    assert_eq!(a.get(1, 1).unwrap(), 5.0);
}
