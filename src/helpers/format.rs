/// Group the digits of a count with commas: 12345 → "12,345".
pub fn format_number(value: u64) -> String {
    let raw = value.to_string();
    let mut out = String::with_capacity(raw.len() + raw.len() / 3);
    for (index, ch) in raw.chars().rev().enumerate() {
        if index > 0 && index % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.chars().rev().collect()
}

/// Dollar amount with two decimals, without the currency sign.
pub fn format_price(value: f64) -> String {
    format!("{value:.2}")
}
