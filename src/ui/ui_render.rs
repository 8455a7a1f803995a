use eframe::egui::{
    Align, Button, CentralPanel, Context, Layout, RichText, ScrollArea, TextEdit, TopBottomPanel,
};
use web_time::Instant;

use crate::app::App;
use crate::config::DASHBOARD;
use crate::ui::cards::render_top_cards;
use crate::ui::table::render_asset_table;
use crate::ui::ui_text::ICON_TREND;
use crate::ui::{UI_CONFIG, UI_TEXT, UiStyleExt};
use crate::utils::{format_clock, format_duration};

impl App {
    pub(crate) fn render_top_panel(&mut self, ctx: &Context, now: Instant) {
        let mut refresh_clicked = false;
        let mut query_changed = false;

        let view = self.dashboard.view();
        let next_poll = self.dashboard.next_poll_in(now);
        let search_input = &mut self.search_input;

        TopBottomPanel::top("top_toolbar")
            .frame(UI_CONFIG.top_panel_frame())
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(ICON_TREND).size(26.0));
                    ui.vertical(|ui| {
                        ui.label(
                            RichText::new(&UI_TEXT.app_title)
                                .size(20.0)
                                .strong()
                                .color(UI_CONFIG.colors.heading),
                        );
                        ui.horizontal(|ui| {
                            if view.refreshing {
                                ui.status_dot(DASHBOARD.colors.status_updating);
                                ui.label_caption(&UI_TEXT.status_updating);
                            } else {
                                ui.status_dot(DASHBOARD.colors.status_live);
                                ui.label_caption(&UI_TEXT.status_live);
                            }
                            if let Some(updated) = &view.last_updated {
                                let mut status =
                                    format!("{} {}", UI_TEXT.label_updated, format_clock(updated));
                                if let Some(wait) = next_poll {
                                    status.push_str(&format!(
                                        " · {} {}",
                                        UI_TEXT.label_next_refresh,
                                        format_duration(wait.as_millis() as i64)
                                    ));
                                }
                                ui.label_subdued(status);
                            }
                        });
                    });

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let refresh = ui
                            .add_enabled(
                                view.can_refresh(),
                                Button::new(UI_TEXT.button_refresh.as_str())
                                    .fill(DASHBOARD.colors.accent),
                            )
                            .on_disabled_hover_text(UI_TEXT.hover_refresh_busy.as_str());
                        refresh_clicked = refresh.clicked();

                        if !view.can_refresh() {
                            ui.spinner();
                        }

                        let search = ui.add(
                            TextEdit::singleline(search_input)
                                .hint_text(UI_TEXT.search_hint.as_str())
                                .desired_width(DASHBOARD.search_width),
                        );
                        query_changed = search.changed();
                    });
                });
            });

        if query_changed {
            self.dashboard.set_query(self.search_input.clone());
        }
        if refresh_clicked {
            self.dashboard.refresh();
        }
    }

    pub(crate) fn render_status_panel(&self, ctx: &Context) {
        TopBottomPanel::bottom("status_panel")
            .frame(UI_CONFIG.bottom_panel_frame())
            .resizable(false)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label_subdued(UI_TEXT.footer_attribution.as_str());
                    ui.label_caption(UI_TEXT.footer_tagline.as_str());
                });
            });
    }

    pub(crate) fn render_central_panel(&self, ctx: &Context) {
        let view = self.dashboard.view();

        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        render_top_cards(ui, view.cards());
                        ui.add_space(20.0);
                        render_asset_table(ui, &view);
                    });
            });
    }
}
