//! Currency and percentage formatting for console output.

/// Formats a currency amount with two decimals, e.g. `$1234.50`.
pub fn money(value: f64) -> String {
    if value < 0.0 {
        format!("-${:.2}", -value)
    } else {
        format!("${:.2}", value)
    }
}

/// Formats an already-scaled percentage, e.g. `3.25%`.
pub fn percent(value: f64) -> String {
    format!("{:.2}%", value)
}

/// Formats a fractional rate as a percentage (0.05 becomes `5.00%`).
pub fn rate(value: f64) -> String {
    percent(value * 100.0)
}

/// Formats a month count with its year equivalent.
pub fn months(count: u32) -> String {
    format!("{} months ({:.1} years)", count, f64::from(count) / 12.0)
}

pub fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_keeps_the_sign_outside_the_symbol() {
        assert_eq!(money(1234.5), "$1234.50");
        assert_eq!(money(-200.0), "-$200.00");
    }

    #[test]
    fn rate_scales_fractions_to_percent() {
        assert_eq!(rate(0.05), "5.00%");
        assert_eq!(percent(12.345), "12.35%");
    }

    #[test]
    fn months_include_year_equivalent() {
        assert_eq!(months(18), "18 months (1.5 years)");
    }
}
