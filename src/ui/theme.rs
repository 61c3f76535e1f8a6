use crate::ui::style::{Color, Style};

#[derive(Debug, Clone)]
pub struct Theme {
    pub title: Style,
    pub prompt: Style,
    pub placeholder: Style,
    pub suggestion: Style,
    pub highlighted: Style,
    pub no_match: Style,
    pub hint: Style,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            title: Style::new().color(Color::Cyan).bold(),
            prompt: Style::new().bold(),
            placeholder: Style::new().color(Color::DarkGrey),
            suggestion: Style::new().color(Color::Blue),
            highlighted: Style::new()
                .color(Color::White)
                .background(Color::Blue)
                .bold(),
            no_match: Style::new().color(Color::Yellow),
            hint: Style::new().color(Color::DarkGrey),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}
