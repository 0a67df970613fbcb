use ratatui::style::{Color, Modifier, Style};

pub const TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

pub const HEADER: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

pub const DIM: Style = Style::new().fg(Color::DarkGray);

pub const TEXT: Style = Style::new().fg(Color::Gray);

pub const ERROR: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);

pub const LOADING: Style = Style::new().fg(Color::LightBlue);

pub const LINK: Style = Style::new()
    .fg(Color::LightBlue)
    .add_modifier(Modifier::BOLD);

pub const BORDER_FOCUSED: Style = Style::new().fg(Color::Indexed(63));

pub const BORDER_UNFOCUSED: Style = Style::new().fg(Color::DarkGray);

pub const CARD_SELECTED: Style = Style::new().fg(Color::Indexed(63));

pub const BUTTON: Style = Style::new().fg(Color::White).bg(Color::DarkGray);

pub const BUTTON_DISABLED: Style = Style::new().fg(Color::DarkGray);

pub const STATUS_BAR: Style = Style::new().fg(Color::White).bg(Color::DarkGray);
