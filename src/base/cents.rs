/// Integral representation of monetary quantities up to two decimal places.
///
/// Transaction amounts are always non-negative; the sign of a flow is carried
/// by the transaction type. Negative values appear only in derived numbers
/// such as the net balance.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    derive_more::From,
    derive_more::Into,
    derive_more::Neg,
    derive_more::Sum,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::Sub,
)]
pub struct Cents(pub i64);

impl Cents {
    pub const ZERO: Self = Self(0);

    pub const fn abs(self) -> Self {
        Self(self.0.abs())
    }

    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Converts a quantity expressed in currency units (e.g. `12.345`) to
    /// cents, rounding to the nearest cent.
    pub fn from_units(units: f64) -> Self {
        Self((units * 100.0).round() as i64)
    }

    /// The representation used in the JSON files: no thousands separators, a
    /// leading `-` for negative quantities, always two decimal places.
    pub fn plain(self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.abs().0;
        format!("{}{}.{:02}", sign, abs / 100, abs % 100)
    }

    /// Length of the Display form, computed without building the string.
    pub fn charlen(self) -> usize {
        let mut units_len = 1;
        let mut n = self.abs().0 / 100;
        while n >= 10 {
            n /= 10;
            units_len += 1;
        }
        let commas = (units_len - 1) / 3;
        let parens = if self.0 < 0 { 2 } else { 0 };
        units_len + commas + 3 + parens // 3 for ".XX"
    }

    /// Like [`Self::charlen`], but counting a phantom trailing space on
    /// non-negative quantities. Every quantity then has three characters
    /// after the decimal point, so right-aligning on this length aligns the
    /// decimal points of a mixed-sign column.
    pub fn charlen_for_alignment(self) -> usize {
        self.charlen() + (self >= Self(0)) as usize
    }
}

impl std::fmt::Display for Cents {
    /// Formats with two decimal places and thousands separators. Negative
    /// quantities are wrapped in parentheses.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let abs = self.abs().0;
        let units = (abs / 100).to_string();
        let mut out = String::with_capacity(self.charlen());
        if self.0 < 0 {
            out.push('(');
        }
        for (i, c) in units.chars().enumerate() {
            if i != 0 && (units.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(c);
        }
        out.push('.');
        out.push((b'0' + (abs / 10 % 10) as u8) as char);
        out.push((b'0' + (abs % 10) as u8) as char);
        if self.0 < 0 {
            out.push(')');
        }
        f.write_str(&out)
    }
}

impl std::str::FromStr for Cents {
    type Err = std::num::ParseIntError;

    /// Parses a cents quantity from a human-readable string, which may contain
    /// comma thousands separators and any number of decimal places. Decimal
    /// places beyond the second are discarded.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.replace(',', "");
        let (units, fraction) = s.split_once('.').unwrap_or((s.as_str(), ""));
        let has_digit = |part: &str| part.contains(|c: char| c.is_ascii_digit());
        if !has_digit(units) && !has_digit(fraction) {
            // Nothing numeric anywhere ("", "+", "-.", ...); let the integer
            // parser produce the error.
            return s.parse::<i64>().map(Self);
        }
        let mut digits = String::with_capacity(units.len() + 2);
        digits.push_str(units);
        digits.extend(fraction.chars().chain(['0', '0']).take(2));
        digits.parse::<i64>().map(Self)
    }
}

impl TryFrom<&str> for Cents {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}

impl serde::Serialize for Cents {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.plain())
    }
}

impl<'de> serde::Deserialize<'de> for Cents {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct Visitor;

        impl serde::de::Visitor<'_> for Visitor {
            type Value = Cents;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a decimal amount string such as \"12.50\"")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                v.parse::<Cents>().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(Visitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Cents(0), "0.00")]
    #[case(Cents(10), "0.10")]
    #[case(Cents(-123), "(1.23)")]
    #[case(Cents(123456789), "1,234,567.89")]
    #[case(Cents(-10), "(0.10)")]
    #[case(Cents(-123456789), "(1,234,567.89)")]
    fn test_to_string(#[case] cents: Cents, #[case] want: String) {
        let got = cents.to_string();
        assert_eq!(got, want);
        assert_eq!(cents.charlen(), got.len());
    }

    #[rstest]
    #[case(Cents(0), "0.00")]
    #[case(Cents(10), "0.10")]
    #[case(Cents(-123), "-1.23")]
    #[case(Cents(123456789), "1234567.89")]
    #[case(Cents(-123456789), "-1234567.89")]
    fn test_plain(#[case] cents: Cents, #[case] want: &str) {
        assert_eq!(cents.plain(), want)
    }

    #[rstest]
    #[case("0", Cents(0))]
    #[case("0.", Cents(0))]
    #[case(".0", Cents(0))]
    #[case("-0", Cents(0))]
    #[case("1", Cents(100))]
    #[case("+1.", Cents(100))]
    #[case("-.1", Cents(-10))]
    #[case("123456", Cents(12345600))]
    #[case("1234.56", Cents(123456))]
    #[case("1,234.56", Cents(123456))]
    #[case("0001,234.56789", Cents(123456))]
    fn test_from_str(#[case] s: &str, #[case] want: Cents) {
        assert_eq!(s.parse::<Cents>().unwrap(), want)
    }

    #[rstest]
    #[case("")]
    #[case("+")]
    #[case("-")]
    #[case(".")]
    #[case("abc")]
    #[case("+a.")]
    #[case("--0.")]
    fn test_from_str_failing(#[case] s: &str) {
        assert!(s.parse::<Cents>().is_err())
    }

    #[rstest]
    #[case(Cents(250), "\"2.50\"")]
    #[case(Cents(-123456), "\"-1234.56\"")]
    fn test_serde(#[case] cents: Cents, #[case] want_json: &str) {
        assert_eq!(serde_json::to_string(&cents).unwrap(), want_json);
        assert_eq!(serde_json::from_str::<Cents>(want_json).unwrap(), cents);
    }

    #[test]
    fn test_deserialize_rejects_numbers() {
        assert!(serde_json::from_str::<Cents>("250").is_err())
    }

    #[rstest]
    #[case(0.0, Cents(0))]
    #[case(12.5, Cents(1250))]
    #[case(12.345, Cents(1235))]
    #[case(-3.0, Cents(-300))]
    fn test_from_units(#[case] units: f64, #[case] want: Cents) {
        assert_eq!(Cents::from_units(units), want)
    }
}
