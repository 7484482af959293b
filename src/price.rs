//! Price formatting
//!
//! One currency, one locale: whole Pakistani rupees with western 3-digit
//! grouping, matching the storefront's `en-PK`/PKR display with zero
//! fraction digits.

/// Format a whole-rupee amount, e.g. `499999` -> `"Rs 499,999"`.
pub fn format_price(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(3 + digits.len() + digits.len() / 3);
    out.push_str("Rs ");
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_renders_without_grouping() {
        assert_eq!(format_price(0), "Rs 0");
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(format_price(999), "Rs 999");
        assert_eq!(format_price(1_000), "Rs 1,000");
        assert_eq!(format_price(250_000), "Rs 250,000");
        assert_eq!(format_price(499_999), "Rs 499,999");
        assert_eq!(format_price(1_239_998), "Rs 1,239,998");
    }

    #[test]
    fn catalog_price_sum_formats() {
        // Two most expensive phones in the catalog
        assert_eq!(format_price(499_999 + 489_999), "Rs 989,998");
    }

    #[test]
    fn monotonic_over_increasing_amounts() {
        // String comparison is not numeric order, so compare by parsing back
        let parse = |s: &str| -> u64 {
            s.trim_start_matches("Rs ")
                .replace(',', "")
                .parse()
                .unwrap()
        };
        let samples = [0u64, 1, 9, 10, 999, 1_000, 99_999, 100_000, 12_345_678];
        for pair in samples.windows(2) {
            assert!(parse(&format_price(pair[0])) <= parse(&format_price(pair[1])));
        }
    }

    #[test]
    fn round_trips_digits() {
        for amount in [0u64, 7, 42, 1_234, 987_654_321] {
            let formatted = format_price(amount);
            let back: u64 = formatted
                .trim_start_matches("Rs ")
                .replace(',', "")
                .parse()
                .unwrap();
            assert_eq!(back, amount);
        }
    }
}
