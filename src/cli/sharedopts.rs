use crate::base;

pub fn charset_from_config(config: &base::Config) -> base::Charset {
    let mut charset = base::Charset::default();
    if config.use_unicode_symbols {
        charset = charset.with_unicode()
    }
    if config.use_colored_output {
        charset = charset.with_color()
    }
    charset
}

/// Projection options shared by the commands that display or export a
/// transaction listing.
#[derive(clap::Args)]
pub struct ViewOpts {
    /// Field to sort by [default: from config]
    #[arg(short, long, value_name = "KEY")]
    pub sort: Option<base::view::SortKey>,

    /// Sort direction [default: from config]
    #[arg(short, long, value_name = "DIR")]
    pub direction: Option<base::view::SortDir>,

    /// Only include transactions with exactly this category, case-sensitive
    #[arg(short, long, value_name = "CATEGORY")]
    pub category: Option<String>,
}

impl ViewOpts {
    /// Applies the filter and sort, falling back to the configured defaults
    /// for options left unset.
    pub fn project(
        &self,
        txns: &[base::Transaction],
        config: &base::Config,
    ) -> Vec<base::Transaction> {
        base::view::project(
            txns,
            self.sort.unwrap_or(config.default_sort_key),
            self.direction.unwrap_or(config.default_sort_direction),
            self.category.as_deref(),
        )
    }
}
