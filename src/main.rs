use log::LevelFilter;
use mathlib::{fixed_vector, matrix, FixedMatrix, FixedVector, MatrixError};

fn matrix_examples() -> Result<(), MatrixError> {
    println!("=== Matrix Examples ===\n");

    println!("1. Matrix Initialization:");
    let a: FixedMatrix<i32, 2, 2> = matrix![[1, 2], [3, 4]];
    let b: FixedMatrix<i32, 2, 2> = matrix![[5, 6], [7, 8]];
    println!("Matrix A:\n{:#}", a);
    println!("Matrix B:\n{:#}\n", b);

    println!("2. Matrix Addition:");
    println!("A + B:\n{:#}\n", &a + &b);

    println!("3. Matrix Subtraction:");
    println!("A - B:\n{:#}\n", &a - &b);

    println!("4. Matrix Multiplication:");
    println!("A * B:\n{:#}\n", &a * &b);

    println!("5. Matrix Transpose:");
    println!("A^T:\n{:#}\n", a.transpose());

    println!("6. Matrix Determinant:");
    println!("det(A) = {}\n", a.determinant()?);

    println!("7. Matrix Inverse:");
    let g: FixedMatrix<f32, 2, 2> = matrix![[1., 2.], [3., 4.]];
    match g.inverse() {
        Ok(h) => println!("G^-1:\n{:#}\n", h),
        Err(e @ MatrixError::Singular) => println!("Error: {}\n", e),
        Err(e) => return Err(e),
    }

    Ok(())
}

fn vector_examples() -> Result<(), MatrixError> {
    println!("=== Vector Examples ===\n");

    println!("1. Vector Initialization:");
    let v1: FixedVector<i32, 3> = fixed_vector![1, 2, 3];
    let v2: FixedVector<i32, 3> = fixed_vector![4, 5, 6];
    println!("Vector v1: {}", v1);
    println!("Vector v2: {}\n", v2);

    println!("2. Vector Scalar Multiplication:");
    let mut v3 = v1;
    v3 *= 2;
    println!("v1 * 2: {}\n", v3);

    println!("3. Dot Product:");
    println!("v1 · v2 = {}\n", v1.dot_product(&v2));

    println!("4. Cross Product (3D):");
    println!("v1 × v2: {}\n", v1.cross_product(&v2)?);

    println!("5. Vector Magnitude:");
    println!("|v1| = {}\n", v1.magnitude());

    println!("6. Vector Normalization:");
    let v5: FixedVector<f64, 3> = fixed_vector![1., 2., 3.];
    let v6 = v5.normalize()?;
    println!("v5 normalized: {}", v6);
    println!("Magnitude of normalized vector: {}\n", v6.magnitude());

    println!("7. Matrix-Vector Multiplication:");
    let v7: FixedVector<i32, 2> = fixed_vector![1, 2];
    let m: FixedMatrix<i32, 2, 2> = matrix![[1, 2], [3, 4]];
    println!("v7 * M: {}", v7.multiply(&m));

    Ok(())
}

fn main() -> Result<(), MatrixError> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Warn)
        .parse_env(env_logger::Env::default().filter_or("MATHLIB_LOG", "warn"))
        .init();

    matrix_examples()?;
    vector_examples()
}
