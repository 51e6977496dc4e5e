//! Text rendering of the aggregate totals and the expense-category
//! breakdown.

use crate::base::Cents;
use crate::base::Charset;
use crate::base::Stats;
use crate::base::chart;

const BOUNDING_SPACES_COUNT: usize = 2;
const MIN_DASHES_COUNT: usize = 2;

pub struct Summary<'a> {
    charset: &'a Charset,
    /// Income, expenses and balance, in that order.
    totals: [(&'static str, Cents); 3],
    stats: &'a Stats,
    alignment_charlen: usize,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Config {
    pub charset: Charset,
    pub stats: Stats,
}

impl Config {
    pub fn to_summary(&'_ self) -> Summary<'_> {
        let totals = [
            ("Income", self.stats.total_income),
            ("Expenses", self.stats.total_expenses),
            ("Balance", self.stats.balance),
        ];

        fn char_count(label: &str, value: Cents) -> usize {
            label.chars().count()
                + BOUNDING_SPACES_COUNT
                + MIN_DASHES_COUNT
                + value.charlen_for_alignment()
        }
        let alignment_charlen = usize::max(
            totals
                .iter()
                .map(|&(label, value)| char_count(label, value))
                .max()
                .unwrap_or_default(),
            self.stats
                .expense_by_category
                .iter()
                .map(|c| char_count(&c.name, c.value))
                .max()
                .unwrap_or_default(),
        );

        Summary {
            charset: &self.charset,
            totals,
            stats: &self.stats,
            alignment_charlen,
        }
    }
}

impl Summary<'_> {
    fn draw(&self, w: &mut impl std::fmt::Write, label: &str, value: Cents) -> std::fmt::Result {
        let dash_count = self.alignment_charlen
            - label.chars().count()
            - BOUNDING_SPACES_COUNT
            - value.charlen_for_alignment();
        w.write_str(label)?;
        w.write_char(' ')?;
        for _ in 0..dash_count {
            w.write_char(self.charset.dash)?;
        }
        w.write_char(' ')?;
        write!(w, "{}", value)?;
        Ok(())
    }

    fn share(&self, value: Cents) -> f64 {
        if self.stats.total_expenses <= Cents::ZERO {
            return 0.0;
        }
        (value.0 as f64) / (self.stats.total_expenses.0 as f64) * 100.0
    }
}

impl std::fmt::Display for Summary<'_> {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use std::fmt::Write;
        for &(label, value) in &self.totals {
            self.draw(f, label, value)?;
            f.write_char('\n')?;
        }
        if self.stats.expense_by_category.is_empty() {
            return Ok(());
        }
        for _ in 1..self.alignment_charlen {
            f.write_char('=')?;
        }
        f.write_char('\n')?;
        for entry in &self.stats.expense_by_category {
            if self.charset.color {
                let (r, g, b) = chart::rgb(entry.color);
                let label =
                    colored::Colorize::truecolor(entry.name.as_str(), r, g, b).to_string();
                // The colored label carries invisible escape codes, so the
                // dashes are counted off the plain one.
                let dash_count = self.alignment_charlen
                    - entry.name.chars().count()
                    - BOUNDING_SPACES_COUNT
                    - entry.value.charlen_for_alignment();
                f.write_str(&label)?;
                f.write_char(' ')?;
                for _ in 0..dash_count {
                    f.write_char(self.charset.dash)?;
                }
                write!(f, " {}", entry.value)?;
            } else {
                self.draw(f, &entry.name, entry.value)?;
            }
            writeln!(f, " ({:.1}%)", self.share(entry.value))?;
        }
        Ok(())
    }
}
