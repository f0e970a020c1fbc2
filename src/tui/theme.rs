//! Theme module for centralized color and style definitions
//!
//! This module provides semantic color constants and styles used throughout the UI,
//! including the mapping from console categories to colors.

use ratatui::style::{Color, Modifier, Style};

use crate::console::Category;

/// Application theme with all color definitions
#[derive(Debug, Clone)]
pub struct Theme {
    // === Console categories ===
    /// Messages containing "Error"
    pub category_error: Color,
    /// Messages containing "Success"
    pub category_success: Color,
    /// Messages containing "func"
    pub category_call: Color,
    /// Messages containing "DELETE"
    pub category_delete: Color,
    /// Everything else
    pub category_info: Color,

    // === UI Elements ===
    /// Primary accent color (headers, titles)
    pub accent: Color,
    /// Text color for normal content
    pub text: Color,
    /// Text color for muted/secondary content
    pub text_muted: Color,
    /// Color for selected/focused items
    pub selected: Color,

    // === Banners ===
    /// Error banner background
    pub error_bg: Color,
    /// Error banner foreground
    pub error_fg: Color,
    /// Info banner foreground
    pub info_fg: Color,

    // === Borders ===
    /// Normal border color
    pub border: Color,
    /// Warning border color
    pub border_warning: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            // Console categories
            category_error: Color::Red,
            category_success: Color::Green,
            category_call: Color::Blue,
            category_delete: Color::Rgb(255, 165, 0),
            category_info: Color::White,

            // UI elements
            accent: Color::Cyan,
            text: Color::White,
            text_muted: Color::DarkGray,
            selected: Color::White,

            // Banners
            error_bg: Color::Red,
            error_fg: Color::White,
            info_fg: Color::Green,

            // Borders
            border: Color::White,
            border_warning: Color::Yellow,
        }
    }

    /// Get the color for a console category
    pub fn category_color(&self, category: Category) -> Color {
        match category {
            Category::Error => self.category_error,
            Category::Success => self.category_success,
            Category::Call => self.category_call,
            Category::Delete => self.category_delete,
            Category::Info => self.category_info,
        }
    }

    // === Style Builders ===

    /// Style for headers/titles
    pub fn header_style(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// Style for muted text
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Style for selected items
    pub fn selected_style(&self) -> Style {
        Style::default()
            .fg(self.selected)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    }

    /// Style for error banners
    pub fn error_banner_style(&self) -> Style {
        Style::default().fg(self.error_fg).bg(self.error_bg)
    }

    /// Style for info banners
    pub fn info_banner_style(&self) -> Style {
        Style::default().fg(self.info_fg)
    }
}

/// Global theme instance
static THEME: std::sync::OnceLock<Theme> = std::sync::OnceLock::new();

/// Get the current theme
pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::default)
}
