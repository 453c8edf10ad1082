use eframe::egui::{Color32, Label, Response, RichText, Ui, Widget};

use copyright_year::{Element, Style, Tag};

use crate::stylesheet::Stylesheet;

const HEADING_SIZES: [f32; 6] = [32.0, 26.0, 22.0, 18.0, 16.0, 14.0];

/// Shows an [`Element`] as a label, styled by its tag, class and inline
/// style.
pub struct CopyrightLabel<'a> {
    element: &'a Element,
    stylesheet: Option<&'a Stylesheet>,
}

impl<'a> CopyrightLabel<'a> {
    #[must_use]
    pub fn new(element: &'a Element) -> Self {
        Self {
            element,
            stylesheet: None,
        }
    }

    #[must_use]
    pub fn with_stylesheet(mut self, stylesheet: &'a Stylesheet) -> Self {
        self.stylesheet = Some(stylesheet);
        self
    }

    fn text_format(&self) -> TextFormat {
        let style = match self.stylesheet {
            Some(stylesheet) => {
                stylesheet.resolve(self.element.class.as_deref(), &self.element.style)
            }
            None => self.element.style.clone(),
        };
        TextFormat::new(self.element.tag, &style)
    }
}

impl Widget for CopyrightLabel<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let text = self.text_format().apply(RichText::new(&self.element.text));
        ui.add(Label::new(text))
    }
}

/// Text properties the label understands.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct TextFormat {
    heading: bool,
    small: bool,
    size: Option<f32>,
    color: Option<Color32>,
    background: Option<Color32>,
    strong: bool,
    italics: bool,
    underline: bool,
    strikethrough: bool,
    monospace: bool,
}

impl TextFormat {
    fn new(tag: Tag, style: &Style) -> Self {
        let mut format = TextFormat::default();
        match tag {
            Tag::Small => format.small = true,
            Tag::Strong => format.strong = true,
            Tag::Em => format.italics = true,
            tag => {
                if let Some(level) = tag.heading_level() {
                    format.heading = true;
                    format.size = Some(HEADING_SIZES[usize::from(level - 1)]);
                }
            }
        }

        for (property, value) in style.iter() {
            match property {
                "color" => format.color = parse_color(value),
                "background-color" | "background" => format.background = parse_color(value),
                "font-size" => format.size = parse_size(value).or(format.size),
                "font-weight" => format.strong = is_bold(value),
                "font-style" => format.italics = value.eq_ignore_ascii_case("italic"),
                "font-family" => format.monospace = value.eq_ignore_ascii_case("monospace"),
                "text-decoration" => {
                    for decoration in value.split_whitespace() {
                        match decoration.to_ascii_lowercase().as_str() {
                            "underline" => format.underline = true,
                            "line-through" => format.strikethrough = true,
                            "none" => {
                                format.underline = false;
                                format.strikethrough = false;
                            }
                            _ => {}
                        }
                    }
                }
                _ => tracing::trace!(property, value, "unsupported style property"),
            }
        }
        format
    }

    fn apply(self, mut text: RichText) -> RichText {
        if self.heading {
            text = text.heading();
        }
        if self.small {
            text = text.small();
        }
        if self.monospace {
            text = text.monospace();
        }
        if let Some(size) = self.size {
            text = text.size(size);
        }
        if let Some(color) = self.color {
            text = text.color(color);
        }
        if let Some(background) = self.background {
            text = text.background_color(background);
        }
        if self.strong {
            text = text.strong();
        }
        if self.italics {
            text = text.italics();
        }
        if self.underline {
            text = text.underline();
        }
        if self.strikethrough {
            text = text.strikethrough();
        }
        text
    }
}

fn parse_color(value: &str) -> Option<Color32> {
    let value = value.trim();
    if value.starts_with('#') {
        return Color32::from_hex(value).ok();
    }
    match value.to_ascii_lowercase().as_str() {
        "black" => Some(Color32::BLACK),
        "white" => Some(Color32::WHITE),
        "gray" | "grey" => Some(Color32::GRAY),
        "red" => Some(Color32::RED),
        "green" => Some(Color32::GREEN),
        "blue" => Some(Color32::BLUE),
        "yellow" => Some(Color32::YELLOW),
        "transparent" => Some(Color32::TRANSPARENT),
        _ => None,
    }
}

fn parse_size(value: &str) -> Option<f32> {
    let value = value.trim();
    value
        .strip_suffix("px")
        .unwrap_or(value)
        .trim()
        .parse::<f32>()
        .ok()
        .filter(|size| size.is_finite() && *size > 0.0)
}

fn is_bold(value: &str) -> bool {
    match value.trim().to_ascii_lowercase().as_str() {
        "bold" | "bolder" => true,
        weight => weight.parse::<u16>().is_ok_and(|weight| weight >= 600),
    }
}
