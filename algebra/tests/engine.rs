use algebra::{random::random_matrix, sentinel::*, Matrix, MatrixError, MAX_DIM};
use rand::SeedableRng;
use rand_pcg::Pcg32;

fn m(rows: &[&[f64]]) -> Matrix {
    Matrix::from_rows(rows).unwrap()
}

#[test]
fn test_end_to_end() {
    let mut a = create_matrix(2, 2);
    a[(0, 0)] = 1.0;
    a[(1, 1)] = 1.0;
    let mut b = create_matrix(2, 2);
    for i in 0..2 {
        for j in 0..2 {
            b[(i, j)] = 2.0;
        }
    }

    let sum = add_matrix(a, b);
    assert_eq!(sum, m(&[&[3., 2.], &[2., 3.]]));
    assert_eq!(mul_matrix(a, b), m(&[&[2., 2.], &[2., 2.]]));
    assert_eq!(det_matrix(a), 1.0);

    let text = format_matrix(sum);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, ["3.00    2.00    ", "2.00    3.00    "]);
    assert!(lines.iter().all(|line| line.len() == 16));
}

#[test]
fn test_checked_and_sentinel_agree() {
    let mut rng = Pcg32::seed_from_u64(2024);
    for n in 1..=4 {
        let a = random_matrix(n, n, &mut rng).unwrap();
        let b = random_matrix(n, n, &mut rng).unwrap();
        assert_eq!(add_matrix(a, b), a.try_add(&b).unwrap());
        assert_eq!(sub_matrix(a, b), a.try_sub(&b).unwrap());
        assert_eq!(mul_matrix(a, b), a.try_mul(&b).unwrap());
        assert_eq!(det_matrix(a), a.determinant().unwrap());
        assert_eq!(inv_matrix(a), a.inverse().unwrap());
        assert_eq!(trace_matrix(a), a.trace().unwrap());
        assert_eq!(rank_matrix(a), a.rank());
    }
}

#[test]
fn test_zero_row_determinant() {
    let mut rng = Pcg32::seed_from_u64(5);
    for n in 2..=5 {
        for zero_row in 0..n {
            let mut a = random_matrix(n, n, &mut rng).unwrap();
            for j in 0..n {
                a[(zero_row, j)] = 0.0;
            }
            assert_eq!(a.determinant(), Ok(0.0));
            assert_eq!(a.inverse(), Err(MatrixError::Singular));
            assert!(a.rank() < n);
        }
    }
}

#[test]
fn test_largest_matrix() {
    let a = Matrix::identity(MAX_DIM).unwrap();
    assert_eq!(a.rank(), MAX_DIM);
    assert_eq!(a.trace(), Ok(MAX_DIM as f64));
    assert_eq!(a.transpose(), a);
    assert_eq!(a.try_mul(&a), Ok(a));
}

#[test]
fn test_scale_and_subtract() {
    let a = m(&[&[1., 2.], &[3., 4.]]);
    let doubled = scale_matrix(a, 2.0);
    assert_eq!(sub_matrix(doubled, a), a);
    assert_eq!(add_matrix(a, sub_matrix(create_matrix(2, 2), a)), create_matrix(2, 2));
}
