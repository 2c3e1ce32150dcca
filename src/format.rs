use chrono::NaiveDate;

/// Groups digits the Indian way: last three, then pairs (`12,34,567`).
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

/// Rounds to paise and drops trailing zero decimals, like `toLocaleString('en-IN')`.
pub fn format_number(value: f64) -> String {
    let cents = (value * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    let whole = group_indian(&(cents / 100).to_string());
    match cents % 100 {
        0 => format!("{}{}", sign, whole),
        frac if frac % 10 == 0 => format!("{}{}.{}", sign, whole, frac / 10),
        frac => format!("{}{}.{:02}", sign, whole, frac),
    }
}

pub fn format_currency(value: f64, symbol: &str) -> String {
    format!("{}{}", symbol, format_number(value))
}

pub fn format_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
