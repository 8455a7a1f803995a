use eframe::egui::{Color32, CornerRadius, Frame, Margin, Stroke};

use crate::config::DASHBOARD;

pub use crate::ui::ui_text::UI_TEXT;

/// UI Colors for consistent theming
#[derive(Clone, Copy)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub card: Color32,
    pub border: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub card_radius: u8,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: DASHBOARD.colors.text_subdued,
        heading: DASHBOARD.colors.text_primary,
        central_panel: DASHBOARD.colors.background,
        side_panel: DASHBOARD.colors.panel,
        card: DASHBOARD.colors.card,
        border: DASHBOARD.colors.border,
    },
    card_radius: 12,
};

impl UiConfig {
    /// Frame for the Top Toolbar (Standard padding)
    pub fn top_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.central_panel,
            stroke: Stroke::new(1.0, self.colors.border),
            inner_margin: Margin::symmetric(16, 12),
            ..Default::default()
        }
    }

    /// Frame for Bottom Status bar (Tighter vertical padding)
    pub fn bottom_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.central_panel,
            stroke: Stroke::new(1.0, self.colors.border),
            inner_margin: Margin::symmetric(8, 10),
            ..Default::default()
        }
    }

    pub fn central_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.central_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(16),
            ..Default::default()
        }
    }

    /// Frame around one top card and around the table
    pub fn card_frame(&self) -> Frame {
        Frame {
            fill: self.colors.card,
            stroke: Stroke::new(1.0, self.colors.border),
            corner_radius: CornerRadius::same(self.card_radius),
            inner_margin: Margin::same(14),
            ..Default::default()
        }
    }
}
