//! Horizontal text bar charts

use crate::models::Money;

/// Width of the longest bar, in characters
pub const DEFAULT_BAR_WIDTH: usize = 30;

/// Render `(label, amount)` rows as a horizontal bar chart
///
/// Bars are scaled against the largest amount. Any non-zero amount gets at
/// least one block so small groups stay visible.
pub fn format_bar_chart(rows: &[(String, Money)], currency_symbol: &str, width: usize) -> String {
    if rows.is_empty() {
        return String::new();
    }

    let label_width = rows.iter().map(|(l, _)| l.chars().count()).max().unwrap_or(0);
    let max = rows.iter().map(|(_, m)| m.cents()).max().unwrap_or(0).max(1);

    let mut output = String::new();
    for (label, amount) in rows {
        let cents = amount.cents().max(0);
        let mut len = ((cents as u128 * width as u128) / max as u128) as usize;
        if len == 0 && cents > 0 {
            len = 1;
        }

        output.push_str(&format!(
            "{:<lw$} │{:<w$} {}\n",
            label,
            "█".repeat(len),
            amount.format_with_symbol(currency_symbol),
            lw = label_width,
            w = width
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_chart() {
        assert_eq!(format_bar_chart(&[], "₹", 10), "");
    }

    #[test]
    fn test_bars_scale_to_max() {
        let rows = vec![
            ("Food".to_string(), Money::from_cents(1000)),
            ("Bills".to_string(), Money::from_cents(500)),
            ("Other".to_string(), Money::from_cents(1)),
        ];
        let chart = format_bar_chart(&rows, "$", 10);
        let lines: Vec<_> = chart.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].matches('█').count(), 10);
        assert_eq!(lines[1].matches('█').count(), 5);
        assert_eq!(lines[2].matches('█').count(), 1);
        assert!(lines[0].starts_with("Food "));
        assert!(lines[1].ends_with("$5.00"));
    }
}
