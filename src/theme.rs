// Theme support for the TUI
//
// Provides color palettes that can be configured via config file.
// "auto" uses terminal's ANSI palette, named themes use true color (RGB).

use crate::events::EventType;
use crate::feed::AlertType;
use ratatui::style::Color;
use ratatui::widgets::BorderType;

/// Color palette for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // Event badge colors
    pub recommendation: Color,
    pub like: Color,
    pub follow: Color,
    pub unfollow: Color,
    pub block: Color,
    pub playlist: Color,
    pub unknown: Color,

    // Text
    pub foreground: Color,
    pub link: Color,
    pub muted: Color,
    pub current_listen: Color,

    // Alerts
    pub alert_success: Color,
    pub alert_info: Color,
    pub alert_warning: Color,
    pub alert_danger: Color,

    // UI element colors
    pub background: Color,
    pub status_bar: Color,
    pub title: Color,
    pub border: Color,
    pub selection: Color,
    pub selection_fg: Color,
    pub border_type: BorderType,
}

impl Theme {
    /// Load theme by name
    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "dracula" => Self::dracula(),
            "nord" => Self::nord(),
            "gruvbox" => Self::gruvbox(),
            _ => Self::auto(), // "auto" or unknown
        }
    }

    /// Auto theme - uses terminal's ANSI palette
    pub fn auto() -> Self {
        Self {
            name: "auto".to_string(),
            recommendation: Color::Cyan,
            like: Color::Red,
            follow: Color::Green,
            unfollow: Color::Yellow,
            block: Color::Magenta,
            playlist: Color::Blue,
            unknown: Color::DarkGray,
            foreground: Color::Reset,
            link: Color::LightBlue,
            muted: Color::DarkGray,
            current_listen: Color::Yellow,
            alert_success: Color::Green,
            alert_info: Color::Cyan,
            alert_warning: Color::Yellow,
            alert_danger: Color::Red,
            background: Color::Reset,
            status_bar: Color::Green,
            title: Color::Cyan,
            border: Color::White,
            selection: Color::DarkGray,
            selection_fg: Color::White,
            border_type: BorderType::Rounded,
        }
    }

    /// Dracula theme - https://draculatheme.com
    pub fn dracula() -> Self {
        Self {
            name: "dracula".to_string(),
            recommendation: Color::Rgb(0x8b, 0xe9, 0xfd), // cyan
            like: Color::Rgb(0xff, 0x79, 0xc6),           // pink
            follow: Color::Rgb(0x50, 0xfa, 0x7b),         // green
            unfollow: Color::Rgb(0xff, 0xb8, 0x6c),       // orange
            block: Color::Rgb(0xff, 0x55, 0x55),          // red
            playlist: Color::Rgb(0xbd, 0x93, 0xf9),       // purple
            unknown: Color::Rgb(0x62, 0x72, 0xa4),        // comment
            foreground: Color::Rgb(0xf8, 0xf8, 0xf2),
            link: Color::Rgb(0x8b, 0xe9, 0xfd),
            muted: Color::Rgb(0x62, 0x72, 0xa4),
            current_listen: Color::Rgb(0xf1, 0xfa, 0x8c), // yellow
            alert_success: Color::Rgb(0x50, 0xfa, 0x7b),
            alert_info: Color::Rgb(0x8b, 0xe9, 0xfd),
            alert_warning: Color::Rgb(0xf1, 0xfa, 0x8c),
            alert_danger: Color::Rgb(0xff, 0x55, 0x55),
            background: Color::Rgb(0x28, 0x2a, 0x36),
            status_bar: Color::Rgb(0x50, 0xfa, 0x7b),
            title: Color::Rgb(0x8b, 0xe9, 0xfd),
            border: Color::Rgb(0x62, 0x72, 0xa4),
            selection: Color::Rgb(0x44, 0x47, 0x5a),
            selection_fg: Color::Rgb(0xf8, 0xf8, 0xf2),
            border_type: BorderType::Rounded,
        }
    }

    /// Nord theme - https://nordtheme.com
    pub fn nord() -> Self {
        Self {
            name: "nord".to_string(),
            recommendation: Color::Rgb(0x88, 0xc0, 0xd0), // frost cyan
            like: Color::Rgb(0xb4, 0x8e, 0xad),           // aurora purple
            follow: Color::Rgb(0xa3, 0xbe, 0x8c),         // aurora green
            unfollow: Color::Rgb(0xd0, 0x87, 0x70),       // aurora orange
            block: Color::Rgb(0xbf, 0x61, 0x6a),          // aurora red
            playlist: Color::Rgb(0x81, 0xa1, 0xc1),       // frost blue
            unknown: Color::Rgb(0x4c, 0x56, 0x6a),        // polar night
            foreground: Color::Rgb(0xd8, 0xde, 0xe9),
            link: Color::Rgb(0x88, 0xc0, 0xd0),
            muted: Color::Rgb(0x61, 0x6e, 0x88),
            current_listen: Color::Rgb(0xeb, 0xcb, 0x8b), // aurora yellow
            alert_success: Color::Rgb(0xa3, 0xbe, 0x8c),
            alert_info: Color::Rgb(0x88, 0xc0, 0xd0),
            alert_warning: Color::Rgb(0xeb, 0xcb, 0x8b),
            alert_danger: Color::Rgb(0xbf, 0x61, 0x6a),
            background: Color::Rgb(0x2e, 0x34, 0x40),
            status_bar: Color::Rgb(0xa3, 0xbe, 0x8c),
            title: Color::Rgb(0x88, 0xc0, 0xd0),
            border: Color::Rgb(0x4c, 0x56, 0x6a),
            selection: Color::Rgb(0x43, 0x4c, 0x5e),
            selection_fg: Color::Rgb(0xec, 0xef, 0xf4),
            border_type: BorderType::Plain,
        }
    }

    /// Gruvbox theme - https://github.com/morhetz/gruvbox
    pub fn gruvbox() -> Self {
        Self {
            name: "gruvbox".to_string(),
            recommendation: Color::Rgb(0x83, 0xa5, 0x98), // aqua
            like: Color::Rgb(0xd3, 0x86, 0x9b),           // purple
            follow: Color::Rgb(0xb8, 0xbb, 0x26),         // green
            unfollow: Color::Rgb(0xfe, 0x80, 0x19),       // orange
            block: Color::Rgb(0xfb, 0x49, 0x34),          // red
            playlist: Color::Rgb(0x45, 0x85, 0x88),       // blue
            unknown: Color::Rgb(0x92, 0x83, 0x74),        // gray
            foreground: Color::Rgb(0xeb, 0xdb, 0xb2),
            link: Color::Rgb(0x83, 0xa5, 0x98),
            muted: Color::Rgb(0x92, 0x83, 0x74),
            current_listen: Color::Rgb(0xfa, 0xbd, 0x2f), // yellow
            alert_success: Color::Rgb(0xb8, 0xbb, 0x26),
            alert_info: Color::Rgb(0x83, 0xa5, 0x98),
            alert_warning: Color::Rgb(0xfa, 0xbd, 0x2f),
            alert_danger: Color::Rgb(0xfb, 0x49, 0x34),
            background: Color::Rgb(0x28, 0x28, 0x28),
            status_bar: Color::Rgb(0xb8, 0xbb, 0x26),
            title: Color::Rgb(0x83, 0xa5, 0x98),
            border: Color::Rgb(0x92, 0x83, 0x74),
            selection: Color::Rgb(0x50, 0x49, 0x45),
            selection_fg: Color::Rgb(0xfb, 0xf1, 0xc7),
            border_type: BorderType::Plain,
        }
    }

    /// Badge color for an event type
    pub fn event_color(&self, event_type: EventType) -> Color {
        match event_type {
            EventType::RecordingRecommendation => self.recommendation,
            EventType::Like => self.like,
            EventType::Follow => self.follow,
            EventType::StopFollow => self.unfollow,
            EventType::BlockFollow => self.block,
            EventType::PlaylistCreated => self.playlist,
            EventType::Unknown => self.unknown,
        }
    }

    pub fn alert_color(&self, alert_type: AlertType) -> Color {
        match alert_type {
            AlertType::Success => self.alert_success,
            AlertType::Info => self.alert_info,
            AlertType::Warning => self.alert_warning,
            AlertType::Danger => self.alert_danger,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::auto()
    }
}
