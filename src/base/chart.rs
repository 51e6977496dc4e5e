//! Horizontal bar chart of the expense-category breakdown, the terminal
//! stand-in for the category pie chart.

use crate::base::Cents;
use crate::base::Charset;
use crate::base::Stats;

const BOUNDING_SPACES_COUNT: usize = 2;
const MIN_TERM_WIDTH: usize = 60;
/// Room for the trailing ` (100.0%)` share annotation.
const SHARE_SUFFIX_CHARLEN: usize = 9;
/// Labels longer than this are truncated so they can never eat the whole
/// row budget.
const MAX_LABEL_CHARLEN: usize = MIN_TERM_WIDTH / 2;

pub struct Chart<'a> {
    charset: &'a Charset,
    stats: &'a Stats,
    label_charlen: usize,
    max_value: Cents,
    max_barlen: usize,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Config {
    pub charset: Charset,
    pub term_width: usize,
    pub stats: Stats,
}

impl Config {
    pub fn to_chart(&'_ self) -> Chart<'_> {
        let label_charlen = self
            .stats
            .expense_by_category
            .iter()
            .map(|c| c.name.chars().count())
            .max()
            .unwrap_or_default()
            .min(MAX_LABEL_CHARLEN);
        let max_value = self
            .stats
            .expense_by_category
            .iter()
            .map(|c| c.value)
            .max()
            .unwrap_or_default();
        // The fixed row parts can exceed even the minimum width when the top
        // value is very large, so the bar budget saturates at zero.
        let max_barlen = self
            .term_width
            .max(MIN_TERM_WIDTH)
            .saturating_sub(label_charlen)
            .saturating_sub(BOUNDING_SPACES_COUNT + 1) // spaces and the vertical axis
            .saturating_sub(max_value.charlen())
            .saturating_sub(SHARE_SUFFIX_CHARLEN);

        Chart {
            charset: &self.charset,
            stats: &self.stats,
            label_charlen,
            max_value,
            max_barlen,
        }
    }
}

impl Chart<'_> {
    fn barlen(&self, value: Cents) -> usize {
        if self.max_value <= Cents::ZERO {
            return 0;
        }
        let x = (value.0 as f64) / (self.max_value.0 as f64) * (self.max_barlen as f64);
        self.max_barlen.min(x.round() as usize)
    }

    fn share(&self, value: Cents) -> f64 {
        if self.stats.total_expenses <= Cents::ZERO {
            return 0.0;
        }
        (value.0 as f64) / (self.stats.total_expenses.0 as f64) * 100.0
    }
}

/// Parses a `#rrggbb` palette entry.
pub(crate) fn rgb(hex: &str) -> (u8, u8, u8) {
    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16).expect("palette entries should be #rrggbb")
    };
    (channel(1), channel(3), channel(5))
}

impl std::fmt::Display for Chart<'_> {
    /// Writes a terminating newline after each row; empty breakdowns write
    /// nothing (the caller owns the placeholder message).
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for entry in &self.stats.expense_by_category {
            let label: String = entry.name.chars().take(self.label_charlen).collect();
            write!(
                f,
                "{:<width$} {}",
                label,
                self.charset.chart_axis,
                width = self.label_charlen
            )?;
            let barlen = self.barlen(entry.value);
            if barlen > 0 {
                let mut bars = self.charset.chart_bar.to_string().repeat(barlen);
                if self.charset.color {
                    let (r, g, b) = rgb(entry.color);
                    bars = colored::Colorize::truecolor(bars.as_str(), r, g, b).to_string();
                }
                f.write_str(&bars)?;
                f.write_str(" ")?;
            }
            writeln!(f, "{} ({:.1}%)", entry.value, self.share(entry.value))?;
        }
        Ok(())
    }
}
