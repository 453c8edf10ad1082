use std::fmt;

use super::style::Style;
use super::tag::Tag;

/// Text wrapped in a container element with optional class and inline style.
///
/// `Display` renders HTML, escaping text and attribute values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub tag: Tag,
    pub class: Option<String>,
    pub style: Style,
    pub text: String,
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        if let Some(class) = self.class.as_deref().filter(|class| !class.is_empty()) {
            write!(f, " class=\"{}\"", Escaped(class))?;
        }
        if !self.style.is_empty() {
            write!(f, " style=\"{}\"", Escaped(&self.style.to_string()))?;
        }
        write!(f, ">{}</{}>", Escaped(&self.text), self.tag)
    }
}

struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rest = self.0;
        while let Some(index) = rest.find(['&', '<', '>', '"', '\'']) {
            f.write_str(&rest[..index])?;
            f.write_str(match rest.as_bytes()[index] {
                b'&' => "&amp;",
                b'<' => "&lt;",
                b'>' => "&gt;",
                b'"' => "&quot;",
                _ => "&#39;",
            })?;
            rest = &rest[index + 1..];
        }
        f.write_str(rest)
    }
}
