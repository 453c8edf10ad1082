use std::fmt;
use std::str::FromStr;

/// Inline style: ordered `property: value` declarations.
///
/// Property names are compared case-insensitively and stored lowercase.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Style(Vec<(String, String)>);

impl Style {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a property, replacing the previous value in place.
    ///
    /// Declarations that would not parse back (empty property, `:` or `;` in
    /// the property, `;` in the value) are dropped.
    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let property = property.into().trim().to_ascii_lowercase();
        let value = value.into().trim().to_string();
        if property.is_empty() || property.contains([':', ';']) || value.contains(';') {
            tracing::debug!(%property, %value, "dropping invalid style declaration");
            return;
        }
        match self.0.iter_mut().find(|(name, _)| *name == property) {
            Some((_, existing)) => *existing = value,
            None => self.0.push((property, value)),
        }
    }

    #[must_use]
    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }

    #[must_use]
    pub fn get(&self, property: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(property))
            .map(|(_, value)| value.as_str())
    }

    /// Applies `other` on top of `self`.
    pub fn merge(&mut self, other: &Style) {
        for (property, value) in other.iter() {
            self.set(property, value);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|(property, value)| (property.as_str(), value.as_str()))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Style {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut style = Style::new();
        for (property, value) in iter {
            style.set(property, value);
        }
        style
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (property, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{property}: {value}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid style declaration: {0:?}")]
pub struct InvalidStyleError(pub String);

impl FromStr for Style {
    type Err = InvalidStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut style = Style::new();
        for declaration in s.split(';').map(str::trim) {
            if declaration.is_empty() {
                continue;
            }
            let Some((property, value)) = declaration.split_once(':') else {
                return Err(InvalidStyleError(declaration.to_string()));
            };
            if property.trim().is_empty() {
                return Err(InvalidStyleError(declaration.to_string()));
            }
            style.set(property, value);
        }
        Ok(style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        let style: Style = "color: red; Font-Size:12px;; ".parse().unwrap();
        assert_eq!(style.len(), 2);
        assert_eq!(style.get("color"), Some("red"));
        assert_eq!(style.get("font-size"), Some("12px"));
        assert_eq!(style.to_string(), "color: red; font-size: 12px");
    }

    #[test]
    fn parse_empty() {
        assert_eq!("".parse::<Style>(), Ok(Style::new()));
        assert_eq!(" ; ".parse::<Style>(), Ok(Style::new()));
    }

    #[test]
    fn parse_error() {
        assert_eq!(
            "color red".parse::<Style>(),
            Err(InvalidStyleError(String::from("color red")))
        );
        assert_eq!(
            ": red".parse::<Style>(),
            Err(InvalidStyleError(String::from(": red")))
        );
    }

    #[test]
    fn set_replaces_in_place() {
        let mut style = Style::new().with("color", "red").with("margin", "0");
        style.set("COLOR", "blue");
        assert_eq!(style.to_string(), "color: blue; margin: 0");
    }

    #[test]
    fn set_drops_invalid_declarations() {
        let style = Style::new()
            .with("font-family", "a;b")
            .with(" ", "red")
            .with("col:or", "red")
            .with("color", "red");
        assert_eq!(style.to_string(), "color: red");
        assert_eq!(style.to_string().parse::<Style>(), Ok(style));
    }

    #[test]
    fn merge() {
        let mut base: Style = [("color", "gray"), ("font-size", "10px")]
            .into_iter()
            .collect();
        base.merge(&Style::new().with("color", "black").with("font-style", "italic"));
        assert_eq!(
            base.to_string(),
            "color: black; font-size: 10px; font-style: italic"
        );
    }
}
