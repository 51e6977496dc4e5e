const ISO: &[time::format_description::BorrowedFormatItem<'static>] =
    time::macros::format_description!("[year]-[month]-[day]");

/// A calendar date without time or timezone information. The canonical string
/// form is ISO 8601 `yyyy-mm-dd`, on which lexicographic order is equivalent
/// to chronological order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Deserialize, serde::Serialize,
)]
#[serde(try_from = "&str", into = "String")]
pub struct Date(time::Date);

impl Date {
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Option<Self> {
        let month = time::Month::try_from(month).ok()?;
        time::Date::from_calendar_date(year, month, day)
            .ok()
            .map(Self)
    }

    /// Returns the local date.
    #[cfg(not(test))]
    pub fn today() -> Self {
        let now = time::OffsetDateTime::now_local().unwrap_or_else(|_| {
            // No local offset available (e.g. inside some containers); UTC is
            // an acceptable approximation for a calendar date.
            time::OffsetDateTime::now_utc()
        });
        Self(now.date())
    }

    /// Returns the local date.
    #[cfg(test)]
    pub fn today() -> Self {
        Self::from_ymd(2024, 6, 15).expect("'today' for tests should be valid")
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = self.0.format(ISO).map_err(|_| std::fmt::Error)?;
        f.write_str(&s)
    }
}

impl From<Date> for String {
    fn from(dt: Date) -> Self {
        dt.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid date, expected yyyy-mm-dd")]
pub struct ParseError(#[from] time::error::Parse);

impl std::str::FromStr for Date {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(time::Date::parse(s, ISO)?))
    }
}

impl TryFrom<&str> for Date {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
