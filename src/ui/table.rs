use eframe::egui::{Align, CornerRadius, Image, Layout, RichText, Ui, Vec2};
use egui_extras::{Column, TableBuilder};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use crate::config::DASHBOARD;
use crate::domain::{AssetSnapshot, Trend};
use crate::models::DashboardView;
use crate::ui::sparkline::row_sparkline;
use crate::ui::ui_text::{ICON_DOWN, ICON_UP};
use crate::ui::utils::format_usd;
use crate::ui::{DirectionColor, UI_CONFIG, UI_TEXT, UiStyleExt};

const HEADER_HEIGHT: f32 = 32.0;

/// Table columns, left to right. Header labels come from `Display`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub(crate) enum AssetColumn {
    #[strum(to_string = "ASSET")]
    Asset,
    #[strum(to_string = "PRICE")]
    Price,
    #[strum(to_string = "24H CHANGE")]
    Change,
    #[strum(to_string = "LAST 7 DAYS")]
    Sparkline,
    #[strum(to_string = "MARKET CAP")]
    MarketCap,
}

impl AssetColumn {
    fn sizing(self) -> Column {
        match self {
            Self::Asset => Column::remainder().at_least(200.0),
            Self::Price => Column::exact(140.0),
            Self::Change => Column::exact(110.0),
            Self::Sparkline => Column::exact(DASHBOARD.sparkline.row_width + 16.0),
            Self::MarketCap => Column::exact(200.0),
        }
    }

    fn right_aligned(self) -> bool {
        matches!(self, Self::Price | Self::Change | Self::MarketCap)
    }
}

/// Columns that fit in `available_width`. Market cap drops out below the breakpoint.
pub(crate) fn visible_columns(available_width: f32) -> Vec<AssetColumn> {
    let show_market_cap = available_width >= DASHBOARD.market_cap_breakpoint;
    AssetColumn::iter()
        .filter(|column| show_market_cap || *column != AssetColumn::MarketCap)
        .collect()
}

/// Full asset table. The body is swapped for a placeholder while loading.
pub(crate) fn render_asset_table(ui: &mut Ui, view: &DashboardView<'_>) {
    let columns = visible_columns(ui.available_width());
    let rows = view.table_rows();

    UI_CONFIG.card_frame().show(ui, |ui| {
        let mut table = TableBuilder::new(ui)
            .id_salt("asset_table")
            .striped(false)
            .resizable(false)
            .vscroll(false)
            .cell_layout(Layout::left_to_right(Align::Center));
        for column in &columns {
            table = table.column(column.sizing());
        }

        table
            .header(HEADER_HEIGHT, |mut header| {
                for column in &columns {
                    header.col(|ui| {
                        let label = column.to_string();
                        if column.right_aligned() {
                            right_aligned(ui, |ui| ui.label_caption(label));
                        } else {
                            ui.label_caption(label);
                        }
                    });
                }
            })
            .body(|body| {
                body.rows(DASHBOARD.row_height, rows.len(), |mut row| {
                    let asset = rows[row.index()];
                    for column in &columns {
                        row.col(|ui| asset_column_cell(ui, *column, asset));
                    }
                });
            });

        if view.show_loading_placeholder {
            loading_placeholder(ui, view.loading || view.refreshing);
        }
    });
}

fn asset_column_cell(ui: &mut Ui, column: AssetColumn, asset: &AssetSnapshot) {
    match column {
        AssetColumn::Asset => asset_cell(ui, asset),
        AssetColumn::Price => right_aligned(ui, |ui| {
            ui.label(
                RichText::new(format_usd(asset.current_price, 2, 2))
                    .monospace()
                    .strong()
                    .color(DASHBOARD.colors.text_primary),
            );
        }),
        AssetColumn::Change => right_aligned(ui, |ui| change_cell(ui, asset)),
        AssetColumn::Sparkline => row_sparkline(ui, asset.sparkline(), asset.trend()),
        AssetColumn::MarketCap => right_aligned(ui, |ui| {
            ui.label(
                RichText::new(format_usd(asset.market_cap, 0, 0))
                    .monospace()
                    .small()
                    .color(DASHBOARD.colors.text_subdued),
            );
        }),
    }
}

fn right_aligned(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui)) {
    ui.with_layout(Layout::right_to_left(Align::Center), add_contents);
}

fn asset_cell(ui: &mut Ui, asset: &AssetSnapshot) {
    let size = DASHBOARD.icon_size;
    ui.add(
        Image::new(asset.image.as_str())
            .fit_to_exact_size(Vec2::splat(size))
            .corner_radius(CornerRadius::same((size / 2.0) as u8)),
    );
    ui.add_space(8.0);
    ui.vertical(|ui| {
        ui.label(
            RichText::new(&asset.name)
                .strong()
                .color(DASHBOARD.colors.text_primary),
        );
        ui.label(
            RichText::new(asset.display_symbol())
                .monospace()
                .small()
                .color(DASHBOARD.colors.text_subdued),
        );
    });
}

fn change_cell(ui: &mut Ui, asset: &AssetSnapshot) {
    let trend = asset.trend();
    let icon = match trend {
        Trend::Up => ICON_UP,
        Trend::Down => ICON_DOWN,
    };
    // Right-to-left layout: the percentage lands right of the arrow.
    ui.label(
        RichText::new(format!("{:.2}%", asset.price_change_percentage_24h.abs()))
            .strong()
            .color(trend.color()),
    );
    ui.label(RichText::new(icon).small().color(trend.color()));
}

fn loading_placeholder(ui: &mut Ui, spinning: bool) {
    ui.vertical_centered(|ui| {
        ui.add_space(96.0);
        if spinning {
            ui.spinner();
            ui.add_space(12.0);
        }
        ui.label_caption(&UI_TEXT.table_loading);
        ui.add_space(96.0);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn market_cap_hidden_below_breakpoint() {
        let wide = visible_columns(DASHBOARD.market_cap_breakpoint);
        assert_eq!(wide.len(), 5);
        assert_eq!(wide.last(), Some(&AssetColumn::MarketCap));

        let narrow = visible_columns(DASHBOARD.market_cap_breakpoint - 1.0);
        assert_eq!(
            narrow,
            [
                AssetColumn::Asset,
                AssetColumn::Price,
                AssetColumn::Change,
                AssetColumn::Sparkline
            ]
        );
    }

    #[test]
    fn header_labels() {
        let labels: Vec<String> = AssetColumn::iter().map(|c| c.to_string()).collect();
        assert_eq!(
            labels,
            ["ASSET", "PRICE", "24H CHANGE", "LAST 7 DAYS", "MARKET CAP"]
        );
    }
}
