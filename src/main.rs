use algebra::{random::random_matrix, sentinel::*, Matrix};
use rand::SeedableRng;
use rand_pcg::Pcg32;
use std::error::Error;

const DEFAULT_SEED: u64 = 0x2545_f491_4f6c_dd1d;
const RANDOM_DIM: usize = 4;

fn show(label: &str, m: Matrix) {
    println!("{} ({}x{}):", label, m.rows(), m.cols());
    print_matrix(m);
}

fn seed_from_args() -> Result<u64, Box<dyn Error>> {
    match std::env::args().nth(1) {
        Some(arg) => Ok(arg.parse()?),
        None => Ok(DEFAULT_SEED),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let a = Matrix::from_rows(&[[1.0, 0.0], [0.0, 1.0]])?;
    let b = Matrix::from_rows(&[[2.0, 2.0], [2.0, 2.0]])?;

    show("A", a);
    show("B", b);
    show("A + B", add_matrix(a, b));
    show("A - B", sub_matrix(a, b));
    show("A * B", mul_matrix(a, b));
    show("3 * B", scale_matrix(b, 3.0));
    println!("det(A) = {:.2}", det_matrix(a));
    println!("tr(B) = {:.2}", trace_matrix(b));
    println!("rank(B) = {}", rank_matrix(b));

    // B is singular: logs a diagnostic and yields the empty matrix
    show("inv(B)", inv_matrix(b));

    let seed = seed_from_args()?;
    log::info!("random matrix seed {}", seed);
    let mut rng = Pcg32::seed_from_u64(seed);
    let r = random_matrix(RANDOM_DIM, RANDOM_DIM, &mut rng)?;
    let r_inv = r.inverse()?;
    show("R", r);
    show("R^T", transpose_matrix(r));
    show("inv(R)", r_inv);
    show("R * inv(R)", r.try_mul(&r_inv)?);
    println!("det(R) = {:.4}", r.determinant()?);
    println!("rank(R) = {}", r.rank());
    println!("{}", serde_json::to_string(&r)?);

    Ok(())
}
