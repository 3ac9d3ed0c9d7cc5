/// Largest value that is used as a table key without further reduction.
pub const REDUCTION_THRESHOLD: u32 = 22;

/// Hard cap on digit-sum passes.
pub const MAX_REDUCTION_STEPS: usize = 5;

pub const MIN_DAY: u32 = 1;
pub const MAX_DAY: u32 = 31;

pub fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Collapse `n` by digit sums until it is at most [`REDUCTION_THRESHOLD`].
pub fn reduce(n: u32) -> u32 {
    let mut value = n;
    for _ in 0..MAX_REDUCTION_STEPS {
        if value <= REDUCTION_THRESHOLD {
            break;
        }
        value = digit_sum(value);
    }
    value
}

/// Parse a day-of-month typed (or tapped) by the user.
pub fn parse_day(text: &str) -> Option<u32> {
    let text = text.trim();
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let day = text.parse::<u32>().ok()?;
    (MIN_DAY..=MAX_DAY).contains(&day).then_some(day)
}
