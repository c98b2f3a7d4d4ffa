/// argmin returns the index of the minimum value in the array x (first one on ties).
pub fn argmin<T: std::cmp::PartialOrd>(x: &[T]) -> usize {
    let (min_idx, _min_val) =
        x.iter()
            .enumerate()
            .fold((0, &x[0]), |(idx_min, val_min), (idx, val)| {
                if val < val_min {
                    (idx, val)
                } else {
                    (idx_min, val_min)
                }
            });
    min_idx
}

/// max returns the maximum value in the array x.
pub fn max<T: std::cmp::PartialOrd + std::marker::Copy>(x: &[T]) -> T {
    let &max_val = x.iter().fold(
        &x[0],
        |val_max, val| {
            if val_max > val {
                val_max
            } else {
                val
            }
        },
    );
    max_val
}

/// min returns the minimum value in the array x.
pub fn min<T: std::cmp::PartialOrd + std::marker::Copy>(x: &[T]) -> T {
    let &min_val = x.iter().fold(
        &x[0],
        |val_min, val| {
            if val_min < val {
                val_min
            } else {
                val
            }
        },
    );
    min_val
}

/// ordinal returns the number with its English ordinal suffix, e.g. 1st, 2nd, 3rd, 11th, 22nd.
pub fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

/// fmt_racetime formats a duration in seconds as MM:SS.ff (minutes are not wrapped into hours).
/// Negative values are clamped to zero.
pub fn fmt_racetime(t: f64) -> String {
    let hundredths = (t.max(0.0) * 100.0).round() as u64;
    let minutes = hundredths / 6000;
    let seconds = (hundredths % 6000) / 100;
    format!("{:02}:{:02}.{:02}", minutes, seconds, hundredths % 100)
}

/// fmt_delta formats a time difference with an explicit sign, e.g. +0.25 or -1.30.
pub fn fmt_delta(delta: f64) -> String {
    if delta < 0.0 {
        format!("{:.2}", delta)
    } else {
        format!("+{:.2}", delta)
    }
}
