use strided_linalg::{Matrix, StridedError, Vector};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn m(rows: &[&[f64]]) -> Matrix {
    Matrix::from_rows(rows).unwrap()
}

#[test]
fn test_vector_view_writes_through() {
    init_tracing();
    let mut owner = Vector::from_fn(10, |i| i as f64).unwrap();
    {
        let mut odd = owner.view_mut(1, None, 2).unwrap();
        assert_eq!(odd.len(), 5);
        assert_eq!(odd.stride(), 2);
        odd.mul_in_place(-1.0).unwrap();
        odd.set(-1, 100.0).unwrap();
    }
    assert_eq!(
        owner.to_vec(),
        vec![0.0, -1.0, 2.0, -3.0, 4.0, -5.0, 6.0, -7.0, 8.0, 100.0]
    );
}

#[test]
fn test_vector_view_reads() {
    let owner = Vector::from_fn(7, |i| i as f64).unwrap();
    let view = owner.view(2, Some(3), 2).unwrap();
    assert_eq!(view.to_vec(), vec![2.0, 4.0, 6.0]);
    assert_eq!(view.sum(), 12.0);
    assert_eq!(view.max_index(), 2);
    assert_eq!(view.to_string(), "[2.0, 4.0, 6.0]");

    // Copies out of a view are independent owners.
    let mut copy = view.to_vector().unwrap();
    copy.set(0, -1.0).unwrap();
    assert_eq!(owner.get(2).unwrap(), 2.0);
}

#[test]
fn test_vector_view_errors() {
    let owner = Vector::zeros(4).unwrap();
    assert_eq!(owner.view(0, None, 0).unwrap_err(), StridedError::InvalidStride(0));
    assert_eq!(owner.view(0, None, -1).unwrap_err(), StridedError::InvalidStride(-1));
    assert!(owner.view(1, Some(4), 1).is_err());

    let view = owner.view(0, None, 1).unwrap();
    assert_eq!(view.view(0, None, 1).unwrap_err(), StridedError::ViewOfView);
}

#[test]
fn test_sort_through_strided_view() {
    let mut owner = Vector::from_slice(&[5.0, 0.0, 3.0, 0.0, 1.0, 0.0]).unwrap();
    owner.view_mut(0, None, 2).unwrap().sort();
    assert_eq!(owner.to_vec(), vec![1.0, 0.0, 3.0, 0.0, 5.0, 0.0]);
}

#[test]
fn test_matrix_view_writes_through() {
    init_tracing();
    let mut a = m(&[&[1.0, 2.0, 3.0], &[2.0, 3.0, 4.0]]);
    {
        let mut view = a.view_mut(0, 0, None, None).unwrap();
        view.set(0, 0, 3.0).unwrap();
    }
    assert_eq!(a, m(&[&[3.0, 2.0, 3.0], &[2.0, 3.0, 4.0]]));
    assert_eq!(a.view(0, 0, None, None).unwrap(), a);
    assert_eq!(
        a.view(1, 1, None, None).unwrap(),
        Matrix::from_row(&[3.0, 4.0]).unwrap()
    );
    assert_eq!(
        a.view(0, 0, None, Some(1)).unwrap().transpose().unwrap(),
        Matrix::from_row(&[3.0, 2.0]).unwrap()
    );
    assert_eq!(a.column_view(0, 0, None).unwrap(), m(&[&[3.0], &[2.0]]));
    assert_eq!(
        a.row_view(0, 0, None).unwrap(),
        Matrix::from_row(&[3.0, 2.0, 3.0]).unwrap()
    );
}

#[test]
fn test_matrix_view_arithmetic() {
    let mut a = Matrix::zeros(3, 3).unwrap();
    {
        let mut inner = a.view_mut(1, 1, None, None).unwrap();
        inner.add_in_place(1.0).unwrap();
        inner.set_identity();
    }
    assert_eq!(
        a,
        m(&[&[0.0, 0.0, 0.0], &[0.0, 1.0, 0.0], &[0.0, 0.0, 1.0]])
    );
}

#[test]
fn test_matrix_vector_views() {
    let mut a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], &[7.0, 8.0, 9.0]]);
    let column = a.column_vector_view(1, 1, None).unwrap();
    assert_eq!(column.to_vec(), vec![5.0, 8.0]);
    assert_eq!(column.stride(), 3);
    assert_eq!(column.view(0, None, 1).unwrap_err(), StridedError::ViewOfView);

    let row = a.row_vector_view(2, 0, Some(2)).unwrap();
    assert_eq!(row.to_vec(), vec![7.0, 8.0]);

    assert_eq!(
        a.row_vector_view(usize::MAX, 0, None).unwrap_err(),
        StridedError::OutOfBounds { index: isize::MAX, len: 3 }
    );
    assert!(a.column_vector_view(usize::MAX, 0, None).is_err());
    assert!(a.row_vector_view_mut(3, 0, None).is_err());

    a.column_vector_view_mut(0, 0, None).unwrap().fill(0.0);
    a.row_vector_view_mut(0, 1, None).unwrap().reverse();
    assert_eq!(
        a,
        m(&[&[0.0, 3.0, 2.0], &[0.0, 5.0, 6.0], &[0.0, 8.0, 9.0]])
    );
}

#[test]
fn test_matrix_view_errors() {
    let mut a = Matrix::zeros(2, 2).unwrap();
    assert_eq!(
        a.view(2, 0, None, None).unwrap_err(),
        StridedError::OutOfBounds { index: 2, len: 2 }
    );
    // A window running past the owner reports the last row or column it needs.
    assert_eq!(
        a.view(0, 0, Some(3), None).unwrap_err(),
        StridedError::OutOfBounds { index: 2, len: 2 }
    );
    assert_eq!(
        a.view(1, 0, None, Some(3)).unwrap_err(),
        StridedError::OutOfBounds { index: 2, len: 2 }
    );

    let view = a.view(0, 0, None, None).unwrap();
    assert_eq!(
        view.view(0, 0, None, None).unwrap_err(),
        StridedError::ViewOfView
    );
    let mut view_mut = a.view_mut(0, 0, None, None).unwrap();
    assert_eq!(
        view_mut.view_mut(0, 0, None, None).unwrap_err(),
        StridedError::ViewOfView
    );
}

#[test]
fn test_view_as_operand() {
    let a = Matrix::from_fn(2, 4, |i, j| (4 * i + j) as f64).unwrap();
    let mut b = Matrix::zeros(2, 2).unwrap();
    b.add_in_place(a.view(0, 2, None, None).unwrap()).unwrap();
    assert_eq!(b, m(&[&[2.0, 3.0], &[6.0, 7.0]]));

    let mut x = Vector::zeros(2).unwrap();
    x.add_in_place(a.row_vector_view(1, 2, None).unwrap()).unwrap();
    assert_eq!(x.to_vec(), vec![6.0, 7.0]);
}
