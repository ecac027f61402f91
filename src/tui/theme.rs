//! Centralized theme and color scheme for the dashboard.

use ratatui::prelude::*;
use std::sync::{PoisonError, RwLock};

/// Semantic colors for dashboard elements.
#[derive(Debug, Clone, Copy)]
pub struct ColorScheme {
    // Badge colors, by how urgent the value reads
    pub critical: Color,
    pub high: Color,
    pub medium: Color,
    pub low: Color,

    // UI element colors
    pub primary: Color,
    pub accent: Color,
    pub muted: Color,
    pub border: Color,
    pub border_focused: Color,
    pub text: Color,
    pub text_muted: Color,
    pub selection: Color,
    pub background_alt: Color,

    // Status colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,

    pub badge_fg: Color,
}

impl ColorScheme {
    /// Dark theme (default)
    pub const fn dark() -> Self {
        Self {
            critical: Color::Magenta,
            high: Color::Red,
            medium: Color::Yellow,
            low: Color::Cyan,
            primary: Color::Cyan,
            accent: Color::Yellow,
            muted: Color::DarkGray,
            border: Color::DarkGray,
            border_focused: Color::Cyan,
            text: Color::White,
            text_muted: Color::Gray,
            selection: Color::Rgb(60, 60, 80),
            background_alt: Color::Rgb(30, 30, 40),
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            badge_fg: Color::Black,
        }
    }

    /// Light theme
    pub const fn light() -> Self {
        Self {
            critical: Color::Magenta,
            high: Color::Red,
            medium: Color::Rgb(180, 120, 0),
            low: Color::Blue,
            primary: Color::Blue,
            accent: Color::Rgb(180, 120, 0),
            muted: Color::Gray,
            border: Color::Gray,
            border_focused: Color::Blue,
            text: Color::Black,
            text_muted: Color::DarkGray,
            selection: Color::Rgb(210, 220, 240),
            background_alt: Color::Rgb(235, 235, 240),
            success: Color::Rgb(0, 130, 0),
            warning: Color::Rgb(180, 120, 0),
            error: Color::Red,
            badge_fg: Color::White,
        }
    }

    /// Badge background for a status, priority or severity value.
    pub fn badge_color(&self, value: &str) -> Color {
        match value.to_lowercase().as_str() {
            "critical" | "urgent" | "overdue" | "non_compliant" | "expired" => self.critical,
            "high" | "open" | "on_hold" => self.high,
            "medium" | "pending" | "under_review" | "needs_review" | "mitigating"
            | "in_progress" | "draft" | "monitoring" => self.medium,
            "completed" | "active" | "approved" | "executed" | "compliant" | "closed" => {
                self.success
            }
            "low" => self.low,
            _ => self.muted,
        }
    }
}

/// Theme configuration
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub colors: ColorScheme,
    pub name: &'static str,
}

impl Theme {
    pub const fn dark() -> Self {
        Self {
            colors: ColorScheme::dark(),
            name: "dark",
        }
    }

    pub const fn light() -> Self {
        Self {
            colors: ColorScheme::light(),
            name: "light",
        }
    }

    /// Get the next theme in the rotation
    pub fn next(&self) -> Self {
        match self.name {
            "dark" => Self::light(),
            _ => Self::dark(),
        }
    }
}

/// Global theme instance (runtime switchable)
static THEME: RwLock<Theme> = RwLock::new(Theme::dark());

/// Toggle to the next theme in rotation
pub fn toggle_theme() -> &'static str {
    let mut theme = THEME.write().unwrap_or_else(PoisonError::into_inner);
    *theme = theme.next();
    theme.name
}

/// Convenience function to get current colors
pub fn colors() -> ColorScheme {
    THEME.read().unwrap_or_else(PoisonError::into_inner).colors
}

// ============================================================================
// Style Helpers
// ============================================================================

/// Common style presets for consistent UI elements
pub struct Styles;

impl Styles {
    pub fn header_title() -> Style {
        Style::default().fg(colors().primary).bold()
    }

    pub fn text() -> Style {
        Style::default().fg(colors().text)
    }

    pub fn text_muted() -> Style {
        Style::default().fg(colors().text_muted)
    }

    pub fn label() -> Style {
        Style::default().fg(colors().muted)
    }

    /// Value text style (for data values)
    pub fn value() -> Style {
        Style::default().fg(colors().text).bold()
    }

    pub fn selected() -> Style {
        Style::default()
            .bg(colors().selection)
            .fg(colors().text)
            .bold()
    }

    pub fn border() -> Style {
        Style::default().fg(colors().border)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(colors().border_focused)
    }

    pub fn status_bar() -> Style {
        Style::default().bg(colors().background_alt)
    }

    pub fn shortcut_key() -> Style {
        Style::default().fg(colors().accent)
    }

    pub fn shortcut_desc() -> Style {
        Style::default().fg(colors().text_muted)
    }

    pub fn error() -> Style {
        Style::default().fg(colors().error)
    }
}

/// Render a badge cell value (`executed`, `critical`, ...) as a colored tag.
pub fn value_badge(value: &str) -> Span<'static> {
    let scheme = colors();
    Span::styled(
        format!(" {} ", value.replace('_', " ")),
        Style::default()
            .fg(scheme.badge_fg)
            .bg(scheme.badge_color(value))
            .bold(),
    )
}

/// Render a filter chip (`status: executed`)
pub fn filter_chip(chip: &str) -> Span<'static> {
    let scheme = colors();
    Span::styled(
        format!(" {chip} "),
        Style::default().fg(scheme.badge_fg).bg(scheme.accent),
    )
}

// ============================================================================
// Footer Hints
// ============================================================================

/// Context-specific footer hints
pub struct FooterHints;

impl FooterHints {
    /// Hints while the card grid has focus
    pub fn dashboard() -> Vec<(&'static str, &'static str)> {
        vec![
            ("←→↑↓/hjkl", "select card"),
            ("Enter", "drill down"),
            ("T", "theme"),
            ("q", "quit"),
        ]
    }

    /// Hints while a slide-over is open
    pub fn slide_over() -> Vec<(&'static str, &'static str)> {
        vec![
            ("↑↓/jk", "navigate"),
            ("PgUp/PgDn", "page"),
            ("r", "related"),
            ("Esc", "close"),
            ("q", "quit"),
        ]
    }
}

/// Render footer hints as spans
pub fn render_footer_hints(hints: &[(&str, &str)]) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(format!("[{key}]"), Styles::shortcut_key()));
        spans.push(Span::styled((*desc).to_string(), Styles::shortcut_desc()));
    }
    spans
}
