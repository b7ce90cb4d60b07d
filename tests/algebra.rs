use mathlib::{
    fixed_vector, matrix, AlgebraicContainer, FixedMatrix, FixedVector, MatrixError, PrintOptions,
};
use proptest::prelude::*;
use rug::Rational;

fn assert_near_identity<const N: usize>(m: &FixedMatrix<f64, N, N>, tol: f64) {
    for i in 0..N {
        for j in 0..N {
            let expected = if i == j { 1. } else { 0. };
            assert!(
                (m[(i, j)] - expected).abs() < tol,
                "entry ({}, {}) of {} is not close to the identity",
                i,
                j,
                m
            );
        }
    }
}

#[test]
fn determinants() {
    assert_eq!(FixedMatrix::<i32, 2, 2>::identity().determinant(), Ok(1));
    assert_eq!(matrix![[1i32, 2], [3, 4]].determinant(), Ok(-2));
    assert_eq!(matrix![[7i64]].determinant(), Ok(7));
    assert_eq!(
        matrix![[2i32, 0, 1], [1, 3, 2], [1, 1, 2]].determinant(),
        Ok(6)
    );

    assert_eq!(
        FixedMatrix::<i32, 2, 3>::new().determinant(),
        Err(MatrixError::NotSquare { nrows: 2, ncols: 3 })
    );
    assert_eq!(
        FixedMatrix::<i32, 4, 4>::identity().determinant(),
        Err(MatrixError::UnsupportedDimension(4))
    );
}

#[test]
fn inverses() {
    let a = matrix![[1i32, 2], [3, 4]];
    let inv = a.inverse().unwrap();
    assert_eq!(inv, matrix![[-2., 1.], [1.5, -0.5]]);
    assert_near_identity(&a.multiply(&inv), 1e-12);

    let b: FixedMatrix<f64, 3, 3> = matrix![[2., 0., 1.], [1., 3., 2.], [1., 1., 2.]];
    assert_near_identity(&b.multiply(&b.inverse().unwrap()), 1e-12);

    assert_eq!(matrix![[4f32]].inverse(), Ok(matrix![[0.25]]));

    assert_eq!(
        matrix![[1i32, 2], [2, 4]].inverse(),
        Err(MatrixError::Singular)
    );
    assert_eq!(
        FixedMatrix::<f64, 3, 2>::new().inverse(),
        Err(MatrixError::NotSquare { nrows: 3, ncols: 2 })
    );
    assert_eq!(
        FixedMatrix::<f64, 4, 4>::identity().inverse(),
        Err(MatrixError::UnsupportedDimension(4))
    );
}

#[test]
fn vectors() {
    let x = fixed_vector![1i32, 0, 0];
    let y = fixed_vector![0i32, 1, 0];
    assert_eq!(x.cross_product(&y), Ok(fixed_vector![0, 0, 1]));

    let a = fixed_vector![1i32, 2, 3];
    let b = fixed_vector![4i32, 5, 6];
    assert_eq!(a.dot_product(&b), 32);

    assert_eq!(fixed_vector![3f64, 4.].magnitude(), 5.);

    let v = fixed_vector![1i32, 2];
    let m = matrix![[1i32, 2], [3, 4]];
    assert_eq!(v.multiply(&m), fixed_vector![7, 10]);

    assert_eq!(
        a.get(3),
        Err(MatrixError::IndexOutOfBounds {
            index: (0, 3),
            shape: (1, 3)
        })
    );
}

#[test]
fn exact_entries() {
    let half = Rational::from((1, 2));
    let a = matrix![[half.clone(), Rational::from(1)], [Rational::new(), half]];
    let b = matrix![[2i32, 0], [0, 2]];

    let c = a.multiply(&b);
    assert_eq!(c[(0, 0)], 1);
    assert_eq!(c[(0, 1)], 2);
    assert_eq!(a.determinant(), Ok(Rational::from((1, 4))));
    assert_eq!(c.to_string(), "[[1, 2], [0, 1]]");
}

#[test]
fn rendering() {
    let m = matrix![[1i32, 2], [3, 4]];
    assert_eq!(m.to_string(), "[[1, 2], [3, 4]]");
    assert_eq!(m.render(&PrintOptions::pretty()), "[[1, 2],\n [3, 4]]");
    assert_eq!(fixed_vector![1i32, 2].to_string(), "[1, 2]");
    assert_eq!(FixedMatrix::<i32, 0, 0>::new().to_string(), "[]");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn add_then_subtract(
        a in prop::array::uniform3(prop::array::uniform3(-1000i64..1000)),
        b in prop::array::uniform3(prop::array::uniform3(-1000i64..1000)),
    ) {
        let a = FixedMatrix::from_rows(a);
        let b = FixedMatrix::from_rows(b);
        prop_assert_eq!(&(&a + &b) - &b, a);
    }

    #[test]
    fn transpose_twice(
        a in prop::array::uniform2(prop::array::uniform3(-1000i32..1000)),
    ) {
        let a = FixedMatrix::from_rows(a);
        prop_assert_eq!(a.transpose().transpose(), a);
    }

    #[test]
    fn inverse_is_two_sided(
        a in prop::array::uniform3(prop::array::uniform3(-10f64..10.)),
    ) {
        let a = FixedMatrix::from_rows(a);
        let det = a.determinant().unwrap();
        prop_assume!(det.abs() > 0.5);

        let inv = a.inverse().unwrap();
        for p in [a.multiply(&inv), inv.multiply(&a)] {
            for i in 0..3 {
                for j in 0..3 {
                    let expected = if i == j { 1. } else { 0. };
                    prop_assert!((p[(i, j)] - expected).abs() < 1e-8, "{} is not the identity", p);
                }
            }
        }
    }

    #[test]
    fn normalized_length(
        v in prop::array::uniform3(-100f64..100.),
    ) {
        let v = FixedVector::from_array(v);
        prop_assume!(v.norm_squared() > 1e-6);

        let n = v.normalize().unwrap();
        prop_assert!((n.magnitude() - 1.).abs() < 1e-12);
    }

    #[test]
    fn row_vector_product(
        v in prop::array::uniform2(-100i64..100),
        m in prop::array::uniform2(prop::array::uniform3(-100i64..100)),
    ) {
        let v = FixedVector::from_array(v);
        let m = FixedMatrix::from_rows(m);
        let row = v.into_matrix().multiply(&m)[0];
        prop_assert_eq!(v.multiply(&m), FixedVector::from_array(row));
    }
}
