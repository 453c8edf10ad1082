mod element;
mod style;
mod tag;

pub use self::element::Element;
pub use self::style::{InvalidStyleError, Style};
pub use self::tag::{Tag, UnknownTagError};

use crate::clock::current_year;
use crate::format::{format_copyright, format_year};
use crate::options::FormatOptions;

/// Wraps the bare year into an element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Year {
    pub tag: Tag,
    pub class: Option<String>,
    pub style: Style,
}

impl Year {
    #[must_use]
    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tag = tag;
        self
    }

    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn element(&self, current_year: i32) -> Element {
        Element {
            tag: self.tag,
            class: self.class.clone(),
            style: self.style.clone(),
            text: format_year(current_year),
        }
    }

    /// Same as [`Year::element`] with the year of the system clock.
    #[must_use]
    pub fn render(&self) -> Element {
        self.element(current_year())
    }
}

/// Wraps a copyright notice into an element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Copyright {
    pub tag: Tag,
    pub class: Option<String>,
    pub style: Style,
    pub options: FormatOptions,
}

impl Copyright {
    #[must_use]
    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tag = tag;
        self
    }

    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: FormatOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn element(&self, current_year: i32) -> Element {
        Element {
            tag: self.tag,
            class: self.class.clone(),
            style: self.style.clone(),
            text: format_copyright(&self.options, current_year),
        }
    }

    /// Same as [`Copyright::element`] with the year of the system clock.
    #[must_use]
    pub fn render(&self) -> Element {
        self.element(current_year())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_defaults() {
        let element = Year::default().element(2026);
        assert_eq!(element.to_string(), "<span>2026</span>");
    }

    #[test]
    fn year() {
        let element = Year::default()
            .with_tag(Tag::Small)
            .with_class("year")
            .with_style("color: gray".parse().unwrap())
            .element(2026);
        assert_eq!(
            element.to_string(),
            r#"<small class="year" style="color: gray">2026</small>"#
        );
    }

    #[test]
    fn copyright() {
        let element = Copyright::default()
            .with_tag(Tag::Footer)
            .with_class("copyright")
            .with_options(
                FormatOptions::default()
                    .with_name("Acme Inc")
                    .with_start_year(2020),
            )
            .element(2026);
        assert_eq!(
            element.to_string(),
            r#"<footer class="copyright">© 2020-2026 Acme Inc</footer>"#
        );
    }

    #[test]
    fn render_uses_clock() {
        let element = Copyright::default().render();
        assert_eq!(element.tag, Tag::Span);
        assert!(element.text.starts_with("© "));
        let year: i32 = element.text["© ".len()..].parse().unwrap();
        assert!(year >= 2024);
    }
}
