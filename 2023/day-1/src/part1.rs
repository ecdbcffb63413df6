use miette::*;

/// Finds the first and last digit of a line by walking a pointer inward from
/// each end. Both pointers halt on the first digit they meet, and when they
/// cross with only the front digit found, that digit doubles as the last one
/// so the stretch already covered is never rescanned.
///
/// Returns `None` for a line without any digit.
fn calibration_value(line: &str) -> Option<u32> {
    let bytes = line.as_bytes();
    let mut front = 0;
    let mut back = bytes.len().checked_sub(1)?;
    let mut first = None;
    let mut last = None;

    while front < bytes.len() && (first.is_none() || last.is_none()) {
        // Pointers crossed with only the front digit in hand: reuse it.
        if front >= back && first.is_some() && last.is_none() {
            last = first;
            break;
        }

        if first.is_none() {
            match (bytes[front] as char).to_digit(10) {
                Some(digit) => first = Some(digit),
                None => front += 1,
            }
        }

        if last.is_none() && back > 0 {
            match (bytes[back] as char).to_digit(10) {
                Some(digit) => last = Some(digit),
                None => back -= 1,
            }
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

        let value = calibration_value(line)
            .ok_or_else(|| miette!("no digit in line {}: {:?}", index + 1, line))?;

        sum += value;
        processed += 1;
    }

    tracing::debug!(processed, "summed calibration values");
    Ok(sum.to_string())
}
