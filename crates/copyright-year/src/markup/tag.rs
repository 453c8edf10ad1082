use std::fmt;
use std::str::FromStr;

/// Markup tag of the container element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Tag {
    #[default]
    Span,
    Div,
    P,
    Small,
    Strong,
    Em,
    Footer,
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl Tag {
    pub const ALL: [Tag; 13] = [
        Tag::Span,
        Tag::Div,
        Tag::P,
        Tag::Small,
        Tag::Strong,
        Tag::Em,
        Tag::Footer,
        Tag::H1,
        Tag::H2,
        Tag::H3,
        Tag::H4,
        Tag::H5,
        Tag::H6,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Span => "span",
            Tag::Div => "div",
            Tag::P => "p",
            Tag::Small => "small",
            Tag::Strong => "strong",
            Tag::Em => "em",
            Tag::Footer => "footer",
            Tag::H1 => "h1",
            Tag::H2 => "h2",
            Tag::H3 => "h3",
            Tag::H4 => "h4",
            Tag::H5 => "h5",
            Tag::H6 => "h6",
        }
    }

    /// Heading level, `None` for non-heading tags.
    #[must_use]
    pub fn heading_level(&self) -> Option<u8> {
        match self {
            Tag::H1 => Some(1),
            Tag::H2 => Some(2),
            Tag::H3 => Some(3),
            Tag::H4 => Some(4),
            Tag::H5 => Some(5),
            Tag::H6 => Some(6),
            _ => None,
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tag: {0:?}")]
pub struct UnknownTagError(pub String);

impl FromStr for Tag {
    type Err = UnknownTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Tag::ALL
            .into_iter()
            .find(|tag| tag.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnknownTagError(s.to_string()))
    }
}
