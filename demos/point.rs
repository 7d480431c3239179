//! Example: build a `Point` whose `x` and `y` must be set.
//!
//! Demonstrates:
//! 1. Declaring field selectors
//! 2. Setting required fields in any order
//! 3. Setting optional fields once the build is complete
//! 4. Handing an unfinished build to the runtime-checked builder
//!
//! Run with: cargo run --example point

use proof_builder::*;

#[derive(Debug, Default, PartialEq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
    pub label: String,
}

selectors! {
    pub mod point for Point {
        x: i32,
        y: i32,
        label: String,
    }
}

type PointBuilder = required![Point; point::x, point::y];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let p = PointBuilder::default()
        .set(point::x, 3)
        .set(point::y, 4)
        .build();
    println!("x then y: {p:?}");

    let q = PointBuilder::default()
        .set(point::y, 4)
        .set(point::x, 3)
        .set(point::label, "corner".to_string())
        .build();
    println!("y then x, labelled: {q:?}");

    let partial = PointBuilder::default().set(point::x, 3);
    println!("Still missing: {:?}", partial.remaining());

    // `partial.build()` would not compile here; the checked builder reports it instead.
    match partial.into_checked().build() {
        Ok(point) => println!("Unexpectedly complete: {point:?}"),
        Err(e) => println!("Checked build refused: {e}"),
    }

    Ok(())
}
