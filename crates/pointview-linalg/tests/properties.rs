use approx::assert_relative_eq;
use pointview_linalg::{vector, Layout, LinalgError, Matrix, RowReduceParams, Vector};
use rand::{rngs::StdRng, Rng, SeedableRng};

const EPSILON: f32 = 1e-5;

fn random_vector(rng: &mut StdRng, len: usize) -> Vector {
    (0..len)
        .map(|_| rng.random_range(-1.0..1.0))
        .collect::<Vec<f32>>()
        .into()
}

#[test]
fn test_times_is_linear_combination_of_columns() -> Result<(), LinalgError> {
    let mut rng = StdRng::seed_from_u64(7);
    for (m, n) in [(1, 1), (3, 3), (2, 5), (6, 4)] {
        let a = Matrix::random_with_rng(m, n, &mut rng)?;
        let x = random_vector(&mut rng, n);

        let mut expected = Vector::zeros(m);
        for i in 0..n {
            expected.add(&a.column_vector(i)?.scale(x[i]))?;
        }

        let y = a.times(&x)?;
        assert_eq!(y.len(), m);
        assert_relative_eq!(y, expected, epsilon = EPSILON);
    }
    Ok(())
}

#[test]
fn test_product_is_associative() -> Result<(), LinalgError> {
    let mut rng = StdRng::seed_from_u64(11);
    let a = Matrix::random_with_rng(3, 4, &mut rng)?;
    let b = Matrix::random_with_rng(4, 2, &mut rng)?;
    let c = Matrix::random_with_rng(2, 5, &mut rng)?;

    let left = Matrix::product(&Matrix::product(&a, &b)?, &c)?;
    let right = Matrix::product(&a, &Matrix::product(&b, &c)?)?;
    assert_relative_eq!(left, right, epsilon = 1e-4);
    assert_relative_eq!(Matrix::product_chain(&[&a, &b, &c])?, right, epsilon = 1e-4);
    Ok(())
}

#[test]
fn test_product_requires_inner_dimensions() -> Result<(), LinalgError> {
    let a = Matrix::zeros(2, 3)?;
    let b = Matrix::zeros(2, 3)?;
    match Matrix::product(&a, &b) {
        Err(LinalgError::DimensionMismatch { .. }) => Ok(()),
        other => panic!("expected a dimension mismatch, got {other:?}"),
    }
}

#[test]
fn test_self_difference_is_zero() -> Result<(), LinalgError> {
    let mut rng = StdRng::seed_from_u64(3);
    let m = Matrix::random_with_rng(4, 6, &mut rng)?;
    let zero = Matrix::difference(&m, &m)?;
    assert!(zero.iter_columns().flatten().all(|x| x.abs() < EPSILON));
    assert_relative_eq!(Matrix::sum(&m, &zero)?, m);
    Ok(())
}

#[test]
fn test_rref_is_idempotent_and_pure() -> Result<(), LinalgError> {
    let mut rng = StdRng::seed_from_u64(19);
    for (m, n) in [(2, 2), (3, 5), (5, 3), (4, 4)] {
        let a = Matrix::random_with_rng(m, n, &mut rng)?;
        let before = a.clone();
        let once = a.rref();
        assert_eq!(a, before);
        assert_relative_eq!(once.rref(), once, epsilon = EPSILON);
    }
    Ok(())
}

#[test]
fn test_rref_of_random_square_is_identity() -> Result<(), LinalgError> {
    let mut rng = StdRng::seed_from_u64(23);
    let a = Matrix::random_with_rng(4, 4, &mut rng)?;
    // random entries give a non-singular matrix with overwhelming probability
    assert_eq!(a.rank(), 4);
    assert_relative_eq!(a.rref(), Matrix::identity(4)?, epsilon = 1e-4);
    Ok(())
}

#[test]
fn test_rref_leaves_pivots_alone_in_their_columns() -> Result<(), LinalgError> {
    let a = Matrix::from_slice(
        3,
        4,
        &[1.0, 2.0, -1.0, 4.0, 2.0, 4.0, 0.0, 6.0, -1.0, -2.0, 3.0, -6.0],
        Layout::RowMajor,
    )?;
    let params = RowReduceParams::default();
    let r = a.rref();
    let pivots = r.pivot_columns(&params);
    assert_eq!(pivots, vec![0, 2]);
    for (row, &col) in pivots.iter().enumerate() {
        let column = r.column(col)?;
        for (i, &x) in column.iter().enumerate() {
            let expected = if i == row { 1.0 } else { 0.0 };
            assert_relative_eq!(x, expected, epsilon = EPSILON);
        }
    }
    Ok(())
}

#[test]
fn test_rotation_round_trip() -> Result<(), LinalgError> {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..16 {
        let theta = rng.random_range(-360.0..360.0);
        let p = vector![rng.random_range(-500.0..500.0), rng.random_range(-500.0..500.0), 1.0];
        let back = Matrix::product_chain(&[&Matrix::rotation(-theta), &Matrix::rotation(theta)])?;
        assert_relative_eq!(back.times(&p)?, p, epsilon = 1e-2);
    }
    Ok(())
}

#[test]
fn test_transform_scenarios() -> Result<(), LinalgError> {
    let p = Matrix::translation(5.0, -3.0).times(&vector![10.0, 10.0, 1.0])?;
    assert_eq!(p.as_slice(), &[15.0, 7.0, 1.0]);

    let q = Matrix::scaling(2.0).times(&vector![3.0, 4.0, 1.0])?;
    assert_eq!(q.as_slice(), &[6.0, 8.0, 1.0]);
    Ok(())
}

#[test]
fn test_add_column_keeps_original() -> Result<(), LinalgError> {
    let mut rng = StdRng::seed_from_u64(13);
    let m = Matrix::random_with_rng(3, 4, &mut rng)?;
    let before = m.clone();
    let grown = m.add_column(vector![1.0, 2.0, 1.0])?;

    assert_eq!(grown.shape(), (3, 5));
    for j in 0..4 {
        assert_eq!(grown.column(j)?, m.column(j)?);
    }
    assert_eq!(grown.column(4)?, &[1.0, 2.0, 1.0]);
    assert_eq!(m, before);
    Ok(())
}
