use {
    crate::{config::DASHBOARD, domain::Trend, ui::UI_CONFIG},
    eframe::egui::{Color32, RichText, Sense, Ui, Vec2},
};

pub trait DirectionColor {
    fn color(&self) -> Color32;
}

impl DirectionColor for Trend {
    fn color(&self) -> Color32 {
        match self {
            Self::Up => DASHBOARD.colors.trend_up,
            Self::Down => DASHBOARD.colors.trend_down,
        }
    }
}

pub(crate) trait UiStyleExt {
    fn label_subdued(&mut self, text: impl Into<String>);
    fn label_caption(&mut self, text: impl Into<String>);
    /// Small filled circle, vertically centred on the current row.
    fn status_dot(&mut self, color: Color32);
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(UI_CONFIG.colors.label));
    }

    fn label_caption(&mut self, text: impl Into<String>) {
        self.label(
            RichText::new(text)
                .small()
                .strong()
                .color(UI_CONFIG.colors.label),
        );
    }

    fn status_dot(&mut self, color: Color32) {
        let (rect, _) = self.allocate_exact_size(Vec2::splat(8.0), Sense::hover());
        self.painter().circle_filled(rect.center(), 4.0, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_change_paints_down_colour() {
        assert_eq!(
            Trend::from_change_pct(0.0).color(),
            DASHBOARD.colors.trend_down
        );
        assert_eq!(Trend::Down.color(), DASHBOARD.colors.trend_down);
        assert_eq!(Trend::from_change_pct(0.01).color(), DASHBOARD.colors.trend_up);
        assert_ne!(DASHBOARD.colors.trend_up, DASHBOARD.colors.trend_down);
    }
}
