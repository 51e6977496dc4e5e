#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    pub dash: char,
    pub chart_axis: char,
    pub chart_bar: char,
    pub color: bool,
}

impl Default for Charset {
    /// Only ASCII characters. No color.
    fn default() -> Self {
        Self {
            dash: '-',
            chart_axis: '|',
            chart_bar: '#',
            color: false,
        }
    }
}

impl Charset {
    pub fn with_unicode(self) -> Self {
        Self {
            dash: '\u{2500}',
            chart_axis: '\u{2502}',
            chart_bar: '\u{2588}',
            ..self
        }
    }

    pub fn with_color(self) -> Self {
        Self {
            color: true,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_plain_ascii() {
        let charset = Charset::default();
        assert!(!charset.color);
        assert_eq!(charset.dash, '-');
        assert_eq!(charset.chart_bar, '#');
    }

    #[test]
    fn test_builders_compose() {
        let charset = Charset::default().with_unicode().with_color();
        assert!(charset.color);
        assert_eq!(charset.chart_bar, '\u{2588}');
        assert_eq!(charset.chart_axis, '\u{2502}');
    }
}
