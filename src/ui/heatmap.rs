use std::str::FromStr;

use anyhow::{Result, anyhow};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::theme;

pub const DEFAULT_WEB_URL: &str = "https://github.com";

pub const DEFAULT_PALETTE: [&str; 5] = ["#161b22", "#0e4429", "#006d32", "#26a641", "#39d353"];

/// Colour ramp for contribution levels, lowest activity first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeatmapTheme {
    pub levels: Vec<Color>,
}

impl Default for HeatmapTheme {
    fn default() -> Self {
        Self {
            levels: vec![
                Color::Rgb(0x16, 0x1b, 0x22),
                Color::Rgb(0x0e, 0x44, 0x29),
                Color::Rgb(0x00, 0x6d, 0x32),
                Color::Rgb(0x26, 0xa6, 0x41),
                Color::Rgb(0x39, 0xd3, 0x53),
            ],
        }
    }
}

impl HeatmapTheme {
    pub fn from_palette<S: AsRef<str>>(palette: &[S]) -> Result<Self> {
        if palette.is_empty() {
            return Err(anyhow!("Heatmap palette must contain at least one colour"));
        }
        let levels = palette
            .iter()
            .map(|c| {
                Color::from_str(c.as_ref())
                    .map_err(|_| anyhow!("Invalid heatmap colour: {}", c.as_ref()))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { levels })
    }
}

/// Draws a user's contribution activity. The calendar itself is an external
/// concern; the application only hands over the area, login and colours.
pub trait ContributionCalendar {
    fn render(&self, f: &mut Frame, area: Rect, username: &str, theme: &HeatmapTheme);
}

/// Shows the theme's colour ramp and where the full calendar lives.
#[derive(Debug, Clone)]
pub struct CalendarLegend {
    web_url: String,
}

impl Default for CalendarLegend {
    fn default() -> Self {
        Self::new(DEFAULT_WEB_URL)
    }
}

impl CalendarLegend {
    /// `web_url` is the site root profiles live under, e.g.
    /// `https://github.com`.
    pub fn new(web_url: &str) -> Self {
        Self {
            web_url: web_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn profile_link(&self, username: &str) -> String {
        format!("{}/{}?tab=overview", self.web_url, username)
    }
}

impl ContributionCalendar for CalendarLegend {
    fn render(&self, f: &mut Frame, area: Rect, username: &str, theme: &HeatmapTheme) {
        let block = Block::default()
            .title(" Contribution Activity ")
            .borders(Borders::ALL)
            .border_style(theme::BORDER_UNFOCUSED);

        let mut ramp = vec![Span::styled("Less ", theme::DIM)];
        for color in &theme.levels {
            ramp.push(Span::styled("■ ", Style::new().fg(*color)));
        }
        ramp.push(Span::styled("More", theme::DIM));

        let lines = vec![
            Line::from(ramp),
            Line::from(Span::styled(self.profile_link(username), theme::LINK)),
        ];

        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}
