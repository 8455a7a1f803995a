use eframe::egui::{Pos2, Rect, Sense, Shape, Stroke, Ui, Vec2};
use egui_plot::{Line, Plot, PlotPoints};

use crate::config::DASHBOARD;
use crate::domain::Trend;
use crate::ui::DirectionColor;
use crate::utils::{remap, smooth_data, value_range};

/// Screen points for a trend line fitted into `rect`.
///
/// The y-range is auto-fitted to the samples plus `y_padding_pct` of the span
/// on each side. A flat or single-sample series sits at mid-height.
pub fn sparkline_points(samples: &[f64], rect: Rect, y_padding_pct: f64) -> Vec<Pos2> {
    let Some((min, max)) = value_range(samples) else {
        return Vec::new();
    };

    let mid_y = rect.center().y;
    if samples.len() == 1 {
        return vec![Pos2::new(rect.left(), mid_y), Pos2::new(rect.right(), mid_y)];
    }

    let span = max - min;
    let pad = span * y_padding_pct;
    let (lo, hi) = (min - pad, max + pad);
    let last = (samples.len() - 1) as f64;

    samples
        .iter()
        .enumerate()
        .map(|(i, &price)| {
            let x = remap(i as f64, 0.0, last, rect.left() as f64, rect.right() as f64);
            let y = if span > 0.0 {
                remap(price, lo, hi, rect.bottom() as f64, rect.top() as f64) as f32
            } else {
                mid_y
            };
            Pos2::new(x as f32, y)
        })
        .collect()
}

/// Compact painter-drawn trend line for a table row.
pub fn row_sparkline(ui: &mut Ui, samples: &[f64], trend: Trend) {
    let cfg = &DASHBOARD.sparkline;
    let (rect, _) =
        ui.allocate_exact_size(Vec2::new(cfg.row_width, cfg.row_height), Sense::hover());
    if !ui.is_rect_visible(rect) {
        return;
    }

    let smoothed = smooth_data(samples, cfg.row_smoothing_window);
    let points = sparkline_points(&smoothed, rect.shrink(2.0), cfg.y_padding_pct);
    if points.len() >= 2 {
        ui.painter()
            .add(Shape::line(points, Stroke::new(cfg.stroke_width, trend.color())));
    }
}

/// Axis-less plot filling the card width.
pub fn card_sparkline(ui: &mut Ui, id: &str, samples: &[f64], trend: Trend) {
    let cfg = &DASHBOARD.sparkline;
    let series: PlotPoints = samples
        .iter()
        .enumerate()
        .map(|(i, &price)| [i as f64, price])
        .collect();

    let mut plot = Plot::new(id)
        .height(cfg.card_height)
        .show_axes(false)
        .show_grid(false)
        .show_background(false)
        .show_x(false)
        .show_y(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .allow_double_click_reset(false);

    if let Some((min, max)) = value_range(samples) {
        let pad = (max - min) * cfg.y_padding_pct;
        plot = plot.include_y(min - pad).include_y(max + pad);
    }

    plot.show(ui, |plot_ui| {
        plot_ui.line(
            Line::new("7d", series)
                .color(trend.color())
                .width(cfg.stroke_width),
        );
    });
}
