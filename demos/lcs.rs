//! Example: LCS of two DNA fragments.
//!
//! Run with:
//! `cargo run --example lcs`

use lcs_dp::LcsCalculator;

fn main() {
    let left = b"ACCGGTCGAGTGCGCGGAAGCCGGCCGAA";
    let right = b"GTCGTTCGGAATGCCGTTGCTCTGTAAA";

    let calc = LcsCalculator::new(left, right);

    println!("LCS length: {}", calc.length());
    println!("LCS: {}", String::from_utf8_lossy(calc.values()));

    for pair in calc.index_pairs() {
        println!(
            "left[{}] == right[{}] == {}",
            pair.left,
            pair.right,
            char::from(left[pair.left])
        );
    }
}
