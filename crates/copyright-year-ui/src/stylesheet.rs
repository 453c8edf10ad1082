use std::collections::BTreeMap;

use copyright_year::Style;

/// Styles by class name, applied below the inline style.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stylesheet(BTreeMap<String, Style>);

impl Stylesheet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, class: impl Into<String>, style: Style) {
        self.0.insert(class.into(), style);
    }

    #[must_use]
    pub fn with(mut self, class: impl Into<String>, style: Style) -> Self {
        self.insert(class, style);
        self
    }

    #[must_use]
    pub fn get(&self, class: &str) -> Option<&Style> {
        self.0.get(class)
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Effective style of an element: every class in the space separated
    /// `class` list in order, then `inline` on top.
    #[must_use]
    pub fn resolve(&self, class: Option<&str>, inline: &Style) -> Style {
        let mut style = Style::new();
        for name in class.unwrap_or_default().split_whitespace() {
            match self.get(name) {
                Some(class_style) => style.merge(class_style),
                None => tracing::trace!(class = name, "no style for class"),
            }
        }
        style.merge(inline);
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stylesheet() -> Stylesheet {
        Stylesheet::new()
            .with("muted", Style::new().with("color", "#888888").with("font-size", "12px"))
            .with("brand", Style::new().with("color", "#ff0000").with("font-weight", "bold"))
    }

    #[test]
    fn no_class() {
        let inline = Style::new().with("color", "#000000");
        assert_eq!(stylesheet().resolve(None, &inline), inline);
    }

    #[test]
    fn class_order() {
        let style = stylesheet().resolve(Some("muted brand"), &Style::new());
        assert_eq!(
            style.to_string(),
            "color: #ff0000; font-size: 12px; font-weight: bold"
        );
    }

    #[test]
    fn inline_wins() {
        let inline = Style::new().with("font-size", "20px");
        let style = stylesheet().resolve(Some("muted"), &inline);
        assert_eq!(style.to_string(), "color: #888888; font-size: 20px");
    }

    #[test]
    fn unknown_class() {
        let style = stylesheet().resolve(Some("missing"), &Style::new());
        assert!(style.is_empty());
    }

    #[test]
    fn classes() {
        assert_eq!(stylesheet().classes().collect::<Vec<_>>(), ["brand", "muted"]);
    }
}
