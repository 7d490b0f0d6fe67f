/// Group digits in threes: `1234567` → `"1,234,567"`.
pub fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Whole-dollar amount with separators: `123456.7` → `"$123,457"`.
pub fn usd(amount: f64) -> String {
    if !amount.is_finite() {
        return "$0".to_string();
    }
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}${}", thousands(amount.abs().round() as u64))
}

/// Compact axis label: `125000.0` → `"125k"`.
pub fn usd_short(amount: f64) -> String {
    if amount.abs() >= 1_000_000.0 {
        format!("{:.1}M", amount / 1_000_000.0)
    } else if amount.abs() >= 1_000.0 {
        format!("{:.0}k", amount / 1_000.0)
    } else {
        format!("{amount:.0}")
    }
}
