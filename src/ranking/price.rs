/// Parse locale formatted price text ("₹45,000", "48,500.00") into a number.
///
/// Every character other than ASCII digits and `.` is dropped before parsing.
/// Anything that still fails to parse, or yields a negative or non-finite
/// value, is treated as 0.
pub fn parse_price(price: &str) -> f64 {
    let digits: String = price
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    match digits.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => v,
        _ => 0.0,
    }
}
