use std::time::Instant;

use miette::*;

use aoc2023_day_1::part1;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let input = include_str!("../../input1.txt");
    let started = Instant::now();
    let result = part1::process(input)?;
    tracing::info!(elapsed = ?started.elapsed(), "part 1 solved");
    println!("Result: {}", result);
    Ok(())
}
