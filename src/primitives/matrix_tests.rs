use super::*;

#[test]
fn test_from_vec_valid() {
    let m = Matrix::from_vec(2, 2, vec![1.0_f32, 2.0, 3.0, 4.0]).expect("valid dimensions");
    assert_eq!(m.shape(), (2, 2));
    assert_eq!(m.get(0, 1), 2.0);
    assert_eq!(m.get(1, 0), 3.0);
}

#[test]
fn test_from_vec_length_mismatch() {
    let result = Matrix::from_vec(2, 2, vec![1.0_f32, 2.0, 3.0]);
    assert!(result.is_err());
}

#[test]
fn test_set_get() {
    let mut m = Matrix::<f32>::zeros(2, 3);
    m.set(1, 2, 7.5);
    assert_eq!(m.get(1, 2), 7.5);
    assert_eq!(m.get(0, 0), 0.0);
}

#[test]
fn test_row_and_row_slice() {
    let m = Matrix::from_vec(2, 3, vec![1.0_f32, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("valid");
    assert_eq!(m.row_slice(1), &[4.0, 5.0, 6.0]);
    let row = m.row(0);
    assert_eq!(row.as_slice(), &[1.0, 2.0, 3.0]);
}

#[test]
fn test_column() {
    let m = Matrix::from_vec(2, 3, vec![1.0_f32, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("valid");
    let col = m.column(2);
    assert_eq!(col.as_slice(), &[3.0, 6.0]);
}

#[test]
fn test_zeros_f64() {
    let m = Matrix::<f64>::zeros(3, 0);
    assert_eq!(m.shape(), (3, 0));
    assert!(m.as_slice().is_empty());
}

#[test]
fn test_empty_matrix() {
    let m = Matrix::<f32>::from_vec(0, 0, Vec::new()).expect("empty is valid");
    assert_eq!(m.n_rows(), 0);
    assert_eq!(m.n_cols(), 0);
}
