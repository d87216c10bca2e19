//! Walks through one split/recover cycle over a freshly generated field.
//!
//! Run with:
//!   cargo run --example split_and_recover --release

use std::time::Instant;

use shamir_protocol::config::FieldConfig;
use shamir_protocol::field::FieldPrime;
use shamir_protocol::sharing::{generate, reconstruct};
use shamir_protocol::SharingError;

fn main() -> Result<(), SharingError> {
    let started = Instant::now();
    let field = FieldPrime::generate_default(&FieldConfig::default())?;
    println!("field prime ({} bits, {:?}):", field.bits(), started.elapsed());
    println!("  {}", field);

    let (secret, shares) = generate(3, 5, &field)?;
    println!("\nsecret:\n  {}", secret);
    println!("\nshares (any 3 of 5 recover the secret):");
    for share in &shares {
        println!("  x={}  y={}", share.x, share.y);
    }

    let subset = [shares[0].clone(), shares[2].clone(), shares[4].clone()];
    let recovered = reconstruct(&subset, &field)?;
    println!("\nrecovered from x=1,3,5:\n  {}", recovered);
    println!("  match: {}", recovered == secret);

    let short = reconstruct(&shares[..2], &field)?;
    println!("\nrecovered from only x=1,2 (below threshold):\n  {}", short);
    println!("  match: {}", short == secret);

    Ok(())
}
