use divan::black_box;

// Load inputs at compile time to avoid I/O noise in the benchmark
const INPUT1: &str = include_str!("../input1.txt");
const INPUT2: &str = include_str!("../input2.txt");

fn main() {
    divan::main();
}

#[divan::bench]
fn part1() {
    aoc2023_day_3::part1::process(black_box(INPUT1)).unwrap();
}

#[divan::bench]
fn part2() {
    aoc2023_day_3::part2::process(black_box(INPUT2)).unwrap();
}
