/// Groups digits in threes with `sep`, e.g. `1.234.567`.
pub fn group_thousands(n: u64, sep: char) -> String {
    let digits = n.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(sep);
        }
        result.push(ch);
    }
    result
}

/// Response size column of the request log. `-` when the size is unknown.
pub fn format_body_size(size: Option<u64>) -> String {
    match size {
        Some(n) => group_thousands(n, '.'),
        None => "-".to_string(),
    }
}
