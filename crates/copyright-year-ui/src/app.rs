use eframe::egui::{
    Align, Button, CentralPanel, ComboBox, Context, DragValue, FontDefinitions, Grid, Label,
    Layout, RichText, TextEdit, TopBottomPanel, Ui,
};
use eframe::CreationContext;

use copyright_year::{Copyright, FormatOptions, InvalidStyleError, Style, Tag, Year};

use crate::stylesheet::Stylesheet;
use crate::theme::Theme;
use crate::widgets::copyright_label::CopyrightLabel;

/// Everything the preview window edits. Lives in memory only.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    pub theme: Theme,
    pub year: i32,
    pub prefix: String,
    pub name: String,
    pub start_year: Option<i32>,
    pub separator: String,
    pub tag: Tag,
    pub class: String,
    pub style: String,
    pub stylesheet: Stylesheet,
}

impl State {
    #[must_use]
    pub fn new(year: i32) -> Self {
        let defaults = FormatOptions::default();
        Self {
            theme: Theme::default(),
            year,
            prefix: defaults.prefix,
            name: String::new(),
            start_year: None,
            separator: defaults.separator,
            tag: Tag::default(),
            class: String::new(),
            style: String::new(),
            stylesheet: default_stylesheet(),
        }
    }

    #[must_use]
    pub fn options(&self) -> FormatOptions {
        FormatOptions {
            prefix: self.prefix.clone(),
            name: Some(self.name.clone()).filter(|name| !name.is_empty()),
            start_year: self.start_year,
            separator: self.separator.clone(),
        }
    }

    fn class(&self) -> Option<String> {
        Some(self.class.trim().to_string()).filter(|class| !class.is_empty())
    }

    /// # Errors
    ///
    /// Will return an error if the inline style does not parse.
    pub fn copyright(&self) -> Result<Copyright, InvalidStyleError> {
        Ok(Copyright {
            tag: self.tag,
            class: self.class(),
            style: self.style.parse::<Style>()?,
            options: self.options(),
        })
    }

    /// # Errors
    ///
    /// Will return an error if the inline style does not parse.
    pub fn year(&self) -> Result<Year, InvalidStyleError> {
        Ok(Year {
            tag: self.tag,
            class: self.class(),
            style: self.style.parse::<Style>()?,
        })
    }
}

fn default_stylesheet() -> Stylesheet {
    Stylesheet::new()
        .with(
            "muted",
            Style::new().with("color", "#8a8a8a").with("font-size", "12px"),
        )
        .with("brand", Style::new().with("font-weight", "bold"))
        .with("legal", Style::new().with("font-style", "italic"))
}

pub struct App {
    state: State,
}

impl App {
    #[must_use]
    pub fn new(cc: &CreationContext<'_>, state: State) -> Self {
        let mut fonts = FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);

        cc.egui_ctx.set_fonts(fonts);
        cc.egui_ctx.set_visuals(state.theme.into());

        Self { state }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        TopBottomPanel::top("top_bar").show(ctx, |ui| top_bar_ui(ui, &mut self.state));
        CentralPanel::default().show(ctx, |ui| {
            options_ui(ui, &mut self.state);
            ui.separator();
            preview_ui(ui, &self.state);
        });
    }
}

fn top_bar_ui(ui: &mut Ui, state: &mut State) {
    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
        let (icon, hover) = match state.theme {
            Theme::Dark => (egui_phosphor::regular::SUN, "Switch to light mode"),
            Theme::Light => (egui_phosphor::regular::MOON, "Switch to dark mode"),
        };
        if ui
            .add(Button::new(icon).frame(false))
            .on_hover_text(hover)
            .clicked()
        {
            state.theme = state.theme.toggled();
            tracing::debug!(theme = ?state.theme, "switched theme");
            ui.ctx().set_visuals(state.theme.into());
        }
    });
}

fn options_ui(ui: &mut Ui, state: &mut State) {
    Grid::new("options").num_columns(2).show(ui, |ui| {
        ui.label("Year");
        ui.add(DragValue::new(&mut state.year));
        ui.end_row();

        ui.label("Prefix");
        ui.add(TextEdit::singleline(&mut state.prefix));
        ui.end_row();

        ui.label("Name");
        ui.add(TextEdit::singleline(&mut state.name));
        ui.end_row();

        ui.label("Start year");
        ui.horizontal(|ui| {
            let mut enabled = state.start_year.is_some();
            if ui.checkbox(&mut enabled, "").changed() {
                state.start_year = enabled.then_some(state.year);
            }
            let mut start_year = state.start_year.unwrap_or(state.year);
            if ui
                .add_enabled(enabled, DragValue::new(&mut start_year))
                .changed()
            {
                state.start_year = Some(start_year);
            }
        });
        ui.end_row();

        ui.label("Separator");
        ui.add(TextEdit::singleline(&mut state.separator));
        ui.end_row();

        ui.label("Tag");
        ComboBox::from_id_salt("tag")
            .selected_text(state.tag.as_str())
            .show_ui(ui, |ui| {
                for tag in Tag::ALL {
                    ui.selectable_value(&mut state.tag, tag, tag.as_str());
                }
            });
        ui.end_row();

        ui.label("Class");
        ui.add(TextEdit::singleline(&mut state.class))
            .on_hover_text(format!(
                "Known classes: {}",
                state.stylesheet.classes().collect::<Vec<_>>().join(", ")
            ));
        ui.end_row();

        ui.label("Style");
        ui.add(TextEdit::singleline(&mut state.style).hint_text("color: #888888; font-size: 12px"));
        ui.end_row();
    });
}

fn preview_ui(ui: &mut Ui, state: &State) {
    let (copyright, year) = match (state.copyright(), state.year()) {
        (Ok(copyright), Ok(year)) => (copyright, year),
        (Err(error), _) | (_, Err(error)) => {
            ui.colored_label(ui.visuals().error_fg_color, error.to_string());
            return;
        }
    };

    for element in [copyright.element(state.year), year.element(state.year)] {
        ui.add(Label::new(RichText::new(element.to_string()).monospace()).selectable(true));
        ui.add(CopyrightLabel::new(&element).with_stylesheet(&state.stylesheet));
        ui.add_space(8.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let state = State::new(2026);
        let copyright = state.copyright().unwrap();
        assert_eq!(copyright.element(2026).to_string(), "<span>© 2026</span>");
        assert_eq!(state.year().unwrap().element(2026).to_string(), "<span>2026</span>");
    }

    #[test]
    fn edited() {
        let state = State {
            name: String::from("Acme Inc"),
            start_year: Some(2020),
            tag: Tag::Footer,
            class: String::from(" muted "),
            style: String::from("font-size: 10px"),
            ..State::new(2026)
        };
        assert_eq!(
            state.copyright().unwrap().element(2026).to_string(),
            r#"<footer class="muted" style="font-size: 10px">© 2020-2026 Acme Inc</footer>"#
        );
    }

    #[test]
    fn empty_name_is_none() {
        assert_eq!(State::new(2026).options().name, None);
    }

    #[test]
    fn invalid_style() {
        let state = State {
            style: String::from("color"),
            ..State::new(2026)
        };
        assert_eq!(
            state.copyright(),
            Err(InvalidStyleError(String::from("color")))
        );
        assert!(state.year().is_err());
    }

    #[test]
    fn stylesheet_classes() {
        let state = State::new(2026);
        assert_eq!(
            state.stylesheet.classes().collect::<Vec<_>>(),
            ["brand", "legal", "muted"]
        );
    }
}
