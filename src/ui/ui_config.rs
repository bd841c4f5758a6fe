use eframe::egui::{Color32, CornerRadius, Frame, Margin, Shadow, Stroke};

/// UI Colors for consistent theming
#[derive(Clone, Copy)]
pub struct UiColors {
    pub page: Color32,
    pub panel: Color32,
    pub card: Color32,
    pub card_border: Color32,
    pub heading: Color32,
    pub label: Color32,
    pub muted: Color32,
    pub accent: Color32,
    pub success: Color32,
    pub danger: Color32,
    pub neutral: Color32,
    pub chart_strip: Color32,
    pub chart_bar: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub heading_size: f32,
    pub hero_title_size: f32,
    pub price_size: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        page: Color32::from_rgb(16, 18, 24),
        panel: Color32::from_rgb(22, 25, 33),
        card: Color32::from_rgb(28, 32, 42),
        card_border: Color32::from_rgb(48, 54, 68),
        heading: Color32::from_rgb(235, 238, 245),
        label: Color32::from_rgb(200, 205, 215),
        muted: Color32::from_rgb(130, 138, 152),
        accent: Color32::from_rgb(64, 130, 246),
        success: Color32::from_rgb(52, 199, 123),
        danger: Color32::from_rgb(235, 87, 87),
        neutral: Color32::from_rgb(150, 156, 168),
        chart_strip: Color32::from_rgb(34, 39, 50),
        chart_bar: Color32::from_rgb(94, 150, 246),
    },
    heading_size: 26.0,
    hero_title_size: 38.0,
    price_size: 28.0,
};

impl UiConfig {
    /// Frame for the sticky header bar
    pub fn header_frame(&self) -> Frame {
        Frame {
            fill: self.colors.panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(16, 10),
            ..Default::default()
        }
    }

    /// Frame for the scrolling page body
    pub fn page_frame(&self) -> Frame {
        Frame {
            fill: self.colors.page,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(24, 0),
            ..Default::default()
        }
    }

    /// Frame for one ticker card
    pub fn card_frame(&self) -> Frame {
        Frame {
            fill: self.colors.card,
            stroke: Stroke::new(1.0, self.colors.card_border),
            corner_radius: CornerRadius::same(10),
            inner_margin: Margin::same(16),
            shadow: Shadow::NONE,
            ..Default::default()
        }
    }

    /// Frame for the card's error view
    pub fn error_frame(&self) -> Frame {
        Frame {
            fill: self.colors.danger.linear_multiply(0.12),
            stroke: Stroke::new(1.0, self.colors.danger.linear_multiply(0.35)),
            corner_radius: CornerRadius::same(8),
            inner_margin: Margin::same(12),
            ..Default::default()
        }
    }

    /// Frame for the footer strip at the bottom of the page
    pub fn footer_frame(&self) -> Frame {
        Frame {
            fill: self.colors.panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(16, 24),
            ..Default::default()
        }
    }
}
