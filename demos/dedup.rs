//! Deduplicates a small point set and prints the result.
//!
//! Run with `RUST_LOG=geolis_points=trace cargo run --example dedup` to see
//! the per-point trace.

use geolis_points::operations::modification::RemoveDuplicates;
use geolis_points::{contains, Point2, Result, Tolerance};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let points = vec![
        Point2::new(0.0, 0.0),
        Point2::new(0.005, 0.005),
        Point2::new(5.0, 5.0),
        Point2::new(5.003, 4.998),
        Point2::new(-2.5, 1.0),
    ];
    let tol = Tolerance::new(0.01)?;

    let (unique, mapping) = RemoveDuplicates::new(Some(&points[..]))
        .with_tolerance(tol)
        .execute_indexed()?;

    println!("{} points -> {} unique", points.len(), unique.len());
    for (i, pt) in points.iter().enumerate() {
        println!("  ({:>6.3}, {:>6.3}) -> #{}", pt.x, pt.y, mapping[i]);
    }

    let query = Point2::new(1.0, 1.0);
    println!(
        "contains ({}, {}): {}",
        query.x,
        query.y,
        contains(Some(&unique[..]), &query, Some(tol))?
    );
    Ok(())
}
