//! Columnar rendering of a transaction listing.

use crate::base::Charset;
use crate::base::Transaction;
use crate::base::TxnKind;

const SEPARATOR: &str = "  ";

struct Widths {
    id: usize,
    date: usize,
    kind: usize,
    category: usize,
    amount: usize,
}

pub struct Table<'a> {
    charset: &'a Charset,
    txns: &'a [Transaction],
    widths: Widths,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Config {
    pub charset: Charset,
    pub txns: Vec<Transaction>,
}

impl Config {
    const HEADERS: [&'static str; 6] = ["ID", "DATE", "TYPE", "CATEGORY", "AMOUNT", "DESCRIPTION"];

    pub fn to_table(&'_ self) -> Table<'_> {
        let max = |header: usize, cell: fn(&Transaction) -> usize| {
            self.txns
                .iter()
                .map(cell)
                .max()
                .unwrap_or_default()
                .max(header)
        };
        let widths = Widths {
            id: max(Self::HEADERS[0].len(), |t| t.id().str().chars().count()),
            // ISO dates are always 10 characters wide.
            date: max(Self::HEADERS[1].len(), |_| 10),
            kind: max(Self::HEADERS[2].len(), |t| t.kind().to_string().len()),
            category: max(Self::HEADERS[3].len(), |t| t.category().chars().count()),
            amount: max(Self::HEADERS[4].len(), |t| t.amount().charlen()),
        };
        Table {
            charset: &self.charset,
            txns: &self.txns,
            widths,
        }
    }
}

impl Table<'_> {
    fn draw_kind(&self, w: &mut impl std::fmt::Write, kind: TxnKind) -> std::fmt::Result {
        let plain = kind.to_string();
        let pad = self.widths.kind - plain.len();
        if self.charset.color {
            // Escape codes would confuse format-width padding, so the cell is
            // padded off the plain string.
            let cell = match kind {
                TxnKind::Income => colored::Colorize::green(plain.as_str()),
                TxnKind::Expense => colored::Colorize::red(plain.as_str()),
            };
            write!(w, "{}", cell)?;
        } else {
            w.write_str(&plain)?;
        }
        for _ in 0..pad {
            w.write_char(' ')?;
        }
        Ok(())
    }
}

impl std::fmt::Display for Table<'_> {
    /// Writes a terminating newline after each row; an empty listing writes
    /// nothing (the caller owns the placeholder message).
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use std::fmt::Write;
        if self.txns.is_empty() {
            return Ok(());
        }
        let [id_h, date_h, kind_h, cat_h, amount_h, desc_h] = Config::HEADERS;
        writeln!(
            f,
            "{:<id_w$}{sep}{:<date_w$}{sep}{:<kind_w$}{sep}{:<cat_w$}{sep}{:>amount_w$}{sep}{}",
            id_h,
            date_h,
            kind_h,
            cat_h,
            amount_h,
            desc_h,
            id_w = self.widths.id,
            date_w = self.widths.date,
            kind_w = self.widths.kind,
            cat_w = self.widths.category,
            amount_w = self.widths.amount,
            sep = SEPARATOR,
        )?;
        for t in self.txns {
            // Several cell types bypass format-width padding in their Display
            // impls, so cells are padded as strings.
            write!(
                f,
                "{:<id_w$}{sep}{:<date_w$}{sep}",
                t.id().str(),
                t.date().to_string(),
                id_w = self.widths.id,
                date_w = self.widths.date,
                sep = SEPARATOR,
            )?;
            self.draw_kind(f, t.kind())?;
            write!(
                f,
                "{sep}{:<cat_w$}{sep}{:>amount_w$}",
                t.category(),
                t.amount().to_string(),
                cat_w = self.widths.category,
                amount_w = self.widths.amount,
                sep = SEPARATOR,
            )?;
            if !t.description().is_empty() {
                write!(f, "{sep}{}", t.description(), sep = SEPARATOR)?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}
