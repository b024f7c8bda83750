//! Display formatting for Pakistani rupee prices.

/// `Rs 12,500`, `Rs 99.5`, `-Rs 1,000`.
///
/// Rounds to at most two fraction digits and drops trailing zeros.
/// Any finite magnitude is grouped in full; non-finite amounts render as `Rs 0`.
pub fn format_pkr(amount: f64) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let abs = amount.abs();
    let mut whole = abs.trunc();
    // Exact: the fractional part of a finite f64 is representable
    let mut cents = ((abs - whole) * 100.0).round() as u8;
    if cents == 100 {
        whole += 1.0;
        cents = 0;
    }

    let fraction = match cents {
        0 => String::new(),
        f if f % 10 == 0 => format!(".{}", f / 10),
        f => format!(".{:02}", f),
    };

    let sign = if amount < 0.0 && (whole > 0.0 || cents > 0) { "-" } else { "" };
    let whole = group_thousands(&format!("{whole:.0}"));
    format!("{sign}Rs {whole}{fraction}")
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
