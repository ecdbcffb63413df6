use miette::*;

/// Digit words recognized inside a line, in digit order.
const DIGIT_WORDS: [&str; 9] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// Whether `window` could still grow into one of the digit words.
fn is_word_prefix(window: &str) -> bool {
    DIGIT_WORDS.iter().any(|word| word.starts_with(window))
}

/// The digit spelled by `window`, if it is exactly one of the digit words.
fn word_digit(window: &str) -> Option<u32> {
    DIGIT_WORDS
        .iter()
        .position(|word| *word == window)
        .map(|index| index as u32 + 1)
}

/// Extracts the first and last digit of a line where digits may be written
/// numerically or spelled out ("one" through "nine").
///
/// A sliding window walks the line one byte at a time. A numeric digit
/// records itself and restarts the window after it. Otherwise the window
/// shrinks from the front until it is a prefix of some digit word again,
/// and an exact match records that word's digit. A match restarts the
/// window on its own final character, so overlapping words are each
/// recognized ("twone" yields 2 and then 1).
fn calibration_value(line: &str) -> Option<u32> {
    let bytes = line.as_bytes();
    let mut first = None;
    let mut last = None;
    let mut start = 0;

    for end in 0..bytes.len() {
        if bytes[end].is_ascii_digit() {
            let digit = (bytes[end] - b'0') as u32;
            first.get_or_insert(digit);
            last = Some(digit);
            start = end + 1;
            continue;
        }

        while start < end && !is_word_prefix(&line[start..=end]) {
            start += 1;
        }

        if let Some(digit) = word_digit(&line[start..=end]) {
            first.get_or_insert(digit);
            last = Some(digit);
            start = end;
        }
    }

    Some(first? * 10 + last?)
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let mut sum = 0u32;
    let mut processed = 0usize;

    for (index, line) in input.lines().enumerate() {
        // Hand-curated inputs may contain comment and spacer lines.
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let value = calibration_value(line).ok_or_else(|| {
            miette!("no digit or digit word in line {}: {:?}", index + 1, line)
        })?;

        sum += value;
        processed += 1;
    }

    tracing::debug!(processed, "summed calibration values");
    Ok(sum.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case("twone", 21)]
    #[case("eightwothree", 83)]
    #[case("zoneight234", 14)]
    #[case("sevenine", 79)]
    #[case("xtwone3four", 24)]
    #[case("one", 11)]
    #[case("a1b2c", 12)]
    fn extracts_spelled_and_numeric_digits(#[case] line: &str, #[case] expected: u32) {
        assert_eq!(Some(expected), calibration_value(line));
    }

    #[test]
    fn line_without_digits_has_no_value() {
        assert_eq!(None, calibration_value("xyzzy"));
    }

    #[test]
    fn it_works() -> Result<()> {
        let input = "two1nine
eightwothree
abcone2threexyz
xtwone3four
4nineeightseven2
zoneight234
7pqrstsixteen";
        assert_eq!("281", process(input)?);
        Ok(())
    }

    #[test]
    fn skips_comments_and_blank_lines() -> Result<()> {
        let input = "# spelled digits

twone

sevenine";
        assert_eq!("100", process(input)?);
        Ok(())
    }

    #[test]
    fn digit_free_line_is_fatal() {
        assert!(process("two1nine\nxyzzy").is_err());
    }
}
