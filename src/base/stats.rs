//! The aggregator: totals, net balance, and the ranked expense-category
//! breakdown behind the category chart.

use crate::base::Cents;
use crate::base::Transaction;
use crate::base::TxnKind;

/// Chart slice colors, assigned to breakdown entries by descending-value
/// rank (`rank % PALETTE.len()`).
pub const PALETTE: [&str; 10] = [
    "#0088fe", "#00c49f", "#ffbb28", "#ff8042", "#8884d8", "#82ca9d", "#a4de6c", "#d0ed57",
    "#ffc658", "#ff7f50",
];

/// One ranked expense category: total spent and its assigned display color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySummary {
    pub name: String,
    pub value: Cents,
    pub color: &'static str,
}

/// Derived financial totals. Recomputed from scratch after every mutation of
/// the book; never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stats {
    pub total_income: Cents,
    pub total_expenses: Cents,
    pub balance: Cents,
    pub expense_by_category: Vec<CategorySummary>,
}

impl Stats {
    /// Breakdown entries beyond this rank are dropped.
    pub const BREAKDOWN_LIMIT: usize = 10;

    /// Pure single-pass aggregation. Trusts its input: amounts are not
    /// validated here (the creation and import paths own that).
    ///
    /// Expense categories group by exact string match, no normalization or
    /// case folding. The sort by summed value is stable, so equal-value
    /// groups rank in first-encounter order.
    pub fn compute(txns: &[Transaction]) -> Self {
        let mut total_income = Cents::ZERO;
        let mut total_expenses = Cents::ZERO;
        let mut groups = Vec::<(String, Cents)>::new();
        let mut index = std::collections::HashMap::<String, usize>::new();
        for t in txns {
            match t.kind() {
                TxnKind::Income => total_income += t.amount(),
                TxnKind::Expense => {
                    total_expenses += t.amount();
                    match index.get(t.category()) {
                        Some(&i) => groups[i].1 += t.amount(),
                        None => {
                            index.insert(t.category().to_string(), groups.len());
                            groups.push((t.category().to_string(), t.amount()));
                        }
                    }
                }
            }
        }

        groups.sort_by(|a, b| b.1.cmp(&a.1));
        groups.truncate(Self::BREAKDOWN_LIMIT);
        let expense_by_category = groups
            .into_iter()
            .enumerate()
            .map(|(rank, (name, value))| CategorySummary {
                name,
                value,
                color: PALETTE[rank % PALETTE.len()],
            })
            .collect();

        Self {
            total_income,
            total_expenses,
            balance: total_income - total_expenses,
            expense_by_category,
        }
    }
}
