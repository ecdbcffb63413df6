use itertools::Itertools;
use miette::*;

#[derive(Debug)]
struct Number {
    value: u32,
    start: usize,
    end: usize,
}

impl Number {
    /// A '*' at `col` on this row or a neighboring one is adjacent when it
    /// falls inside the number's span widened by one column on each side.
    fn touches(&self, col: usize) -> bool {
        col + 1 >= self.start && col <= self.end + 1
    }
}

#[derive(Debug, Default)]
struct Row {
    numbers: Vec<Number>,
    gears: Vec<usize>,
}

/// Splits a schematic row into its number tokens and the columns holding
/// '*' cells, the only symbol that can form a gear.
fn parse_row(line: &str) -> Row {
    let mut row = Row::default();
    let mut run: Option<(usize, u32)> = None;

    for (col, byte) in line.bytes().enumerate() {
        if byte.is_ascii_digit() {
            let digit = (byte - b'0') as u32;
            run = Some(match run {
                Some((start, value)) => (start, value * 10 + digit),
                None => (col, digit),
            });
            continue;
        }

        if let Some((start, value)) = run.take() {
            row.numbers.push(Number {
                value,
                start,
                end: col - 1,
            });
        }

        if byte == b'*' {
            row.gears.push(col);
        }
    }

    if let Some((start, value)) = run {
        row.numbers.push(Number {
            value,
            start,
            end: line.len() - 1,
        });
    }

    row
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let rows: Vec<Row> = input
        .lines()
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(parse_row)
        .collect();

    let mut sum = 0u64;
    let mut gears = 0usize;

    for (index, row) in rows.iter().enumerate() {
        for &col in &row.gears {
            let above = index.saturating_sub(1);
            let below = (index + 1).min(rows.len() - 1);

            // A gear is a '*' with exactly two adjacent numbers; any other
            // count disqualifies it.
            let Some((a, b)) = rows[above..=below]
                .iter()
                .flat_map(|row| row.numbers.iter())
                .filter(|number| number.touches(col))
                .collect_tuple()
            else {
                continue;
            };

            sum += u64::from(a.value) * u64::from(b.value);
            gears += 1;
        }
    }

    tracing::debug!(gears, "summed gear ratios");
    Ok(sum.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = "467..114..
...*......
..35..633.
......#...
617*......
.....+.58.
..592.....
......755.
...$.*....
.664.598..";
        assert_eq!("467835", process(input)?);
        Ok(())
    }

    #[test]
    fn gear_between_numbers_on_one_row() -> Result<()> {
        assert_eq!("15", process("3*5")?);
        Ok(())
    }

    #[test]
    fn star_with_one_neighbor_is_not_a_gear() -> Result<()> {
        let input = "617*......
..........";
        assert_eq!("0", process(input)?);
        Ok(())
    }

    #[test]
    fn star_with_three_neighbors_is_not_a_gear() -> Result<()> {
        let input = "1.2
.*.
3..";
        assert_eq!("0", process(input)?);
        Ok(())
    }
}
