use std::time::Instant;

use miette::*;

use aoc2023_day_1::part2;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let input = include_str!("../../input2.txt");
    let started = Instant::now();
    let result = part2::process(input)?;
    tracing::info!(elapsed = ?started.elapsed(), "part 2 solved");
    println!("Result: {}", result);
    Ok(())
}
