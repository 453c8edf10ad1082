/// Options of a copyright notice.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FormatOptions {
    /// Leading symbol, `©` unless overridden. Empty string omits it.
    pub prefix: String,
    /// Copyright holder, printed after the year.
    pub name: Option<String>,
    /// First year of the range. Only shown when it precedes the current year.
    pub start_year: Option<i32>,
    /// Joins prefix, year and name.
    pub separator: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            prefix: String::from("©"),
            name: None,
            start_year: None,
            separator: String::from(" "),
        }
    }
}

impl FormatOptions {
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_start_year(mut self, start_year: i32) -> Self {
        self.start_year = Some(start_year);
        self
    }

    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}
