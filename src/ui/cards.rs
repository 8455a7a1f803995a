use eframe::egui::{Align, Layout, RichText, Ui};

use crate::config::DASHBOARD;
use crate::domain::AssetSnapshot;
use crate::ui::sparkline::card_sparkline;
use crate::ui::utils::{format_pct, format_usd};
use crate::ui::{DirectionColor, UI_CONFIG, UI_TEXT, UiStyleExt};

/// Leading cards of the filtered list, side by side or stacked on narrow windows.
pub(crate) fn render_top_cards(ui: &mut Ui, cards: &[&AssetSnapshot]) {
    if cards.is_empty() {
        return;
    }

    if ui.available_width() < DASHBOARD.cards_breakpoint {
        for asset in cards {
            render_card(ui, asset);
            ui.add_space(8.0);
        }
    } else {
        ui.columns(DASHBOARD.top_cards, |columns| {
            for (column, asset) in columns.iter_mut().zip(cards) {
                render_card(column, asset);
            }
        });
    }
}

fn render_card(ui: &mut Ui, asset: &AssetSnapshot) {
    let trend = asset.trend();

    UI_CONFIG.card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label_caption(format!(
                    "{} {}",
                    asset.name.to_uppercase(),
                    UI_TEXT.card_trend_suffix
                ));
                ui.label(
                    RichText::new(format_usd(asset.current_price, 0, 3))
                        .size(22.0)
                        .strong()
                        .color(DASHBOARD.colors.text_primary),
                );
            });
            ui.with_layout(Layout::right_to_left(Align::Min), |ui| {
                ui.label(
                    RichText::new(format_pct(asset.price_change_percentage_24h))
                        .small()
                        .strong()
                        .color(trend.color())
                        .background_color(trend.color().gamma_multiply(0.12)),
                );
            });
        });
        ui.add_space(6.0);
        card_sparkline(
            ui,
            &format!("card_sparkline_{}", asset.id),
            asset.sparkline(),
            trend,
        );
    });
}
