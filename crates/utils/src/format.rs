use chrono::NaiveDate;

/// Render an amount in cents as US dollars, e.g. `123456` -> `$1,234.56`.
pub fn format_amount(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    let dollars = (abs / 100).to_string();

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, digit) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{}${}.{:02}", sign, grouped, abs % 100)
}

/// Render a NACHA `YYMMDD` date as `M/D/20YY`.
///
/// Anything that is not six digits forming a real date is returned unchanged.
pub fn format_date(date: &str) -> String {
    if date.len() != 6 || !date.bytes().all(|b| b.is_ascii_digit()) {
        return date.to_string();
    }

    match NaiveDate::parse_from_str(&format!("20{}", date), "%Y%m%d") {
        Ok(parsed) => parsed.format("%-m/%-d/%Y").to_string(),
        Err(_) => date.to_string(),
    }
}
