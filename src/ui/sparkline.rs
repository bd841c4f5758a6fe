use eframe::egui::{CornerRadius, Pos2, Rect, Sense, Ui, Vec2};

use crate::config::constants::{SPARKLINE_BARS, sparkline};
use crate::models::HistoricalPoint;
use crate::ui::styles::apply_opacity;
use crate::ui::ui_config::UI_CONFIG;

/// Min-max normalized bar heights for the last `SPARKLINE_BARS` points.
///
/// Empty input yields no bars. A flat series (max == min) maps every bar to
/// the fixed `BAR_FLAT` height instead of dividing by zero.
pub fn bar_heights(history: &[HistoricalPoint]) -> Vec<f32> {
    if history.is_empty() {
        return Vec::new();
    }

    let tail = &history[history.len().saturating_sub(SPARKLINE_BARS)..];
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for point in tail {
        min = min.min(point.close);
        max = max.max(point.close);
    }

    let range = max - min;
    if range <= f64::EPSILON {
        return vec![sparkline::BAR_FLAT; tail.len()];
    }

    tail.iter()
        .map(|p| (((p.close - min) / range) as f32) * sparkline::BAR_SPAN + sparkline::BAR_MIN)
        .collect()
}

/// Paints the history strip: bottom-aligned bars on a rounded background,
/// with the hovered bar's close price as a tooltip. Renders nothing at all
/// for an empty series.
pub fn render_sparkline(ui: &mut Ui, history: &[HistoricalPoint]) {
    let heights = bar_heights(history);
    if heights.is_empty() {
        return;
    }

    let tail = &history[history.len().saturating_sub(heights.len())..];
    let width = ui.available_width();
    let (rect, response) =
        ui.allocate_exact_size(Vec2::new(width, sparkline::STRIP_HEIGHT), Sense::hover());
    if !ui.is_rect_visible(rect) {
        return;
    }

    let painter = ui.painter().with_clip_rect(rect);
    painter.rect_filled(rect, CornerRadius::same(6), UI_CONFIG.colors.chart_strip);

    let n = heights.len() as f32;
    let bar_width = ((rect.width() - (n + 1.0) * sparkline::BAR_GAP) / n).max(1.0);
    let hover_pos = response.hover_pos();
    let mut hovered_close = None;

    for (i, (&height, point)) in heights.iter().zip(tail).enumerate() {
        let x = rect.min.x + sparkline::BAR_GAP + i as f32 * (bar_width + sparkline::BAR_GAP);
        let bar = Rect::from_min_max(
            Pos2::new(x, rect.max.y - height),
            Pos2::new(x + bar_width, rect.max.y),
        );

        let hovered = hover_pos.is_some_and(|pos| bar.expand2(Vec2::new(sparkline::BAR_GAP / 2.0, 0.0)).contains(pos));
        let color = if hovered {
            hovered_close = Some(point.close);
            apply_opacity(UI_CONFIG.colors.chart_bar, 0.8)
        } else {
            UI_CONFIG.colors.chart_bar
        };
        painter.rect_filled(bar, CornerRadius::same(sparkline::CORNER_RADIUS), color);
    }

    if let Some(close) = hovered_close {
        response.on_hover_text(format!("${close:.2}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(closes: &[f64]) -> Vec<HistoricalPoint> {
        closes.iter().map(|&close| HistoricalPoint { close }).collect()
    }

    #[test]
    fn empty_series_produces_no_bars() {
        assert!(bar_heights(&[]).is_empty());
    }

    #[test]
    fn long_series_uses_only_the_last_ten_points() {
        // 12 ascending closes; the tail is 3.0..=12.0
        let closes: Vec<f64> = (1..=12).map(f64::from).collect();
        let heights = bar_heights(&series(&closes));

        assert_eq!(heights.len(), SPARKLINE_BARS);
        // tail minimum (3.0) sits at the bottom of the range, tail max at the top
        assert_eq!(heights[0], sparkline::BAR_MIN);
        assert_eq!(
            heights[SPARKLINE_BARS - 1],
            sparkline::BAR_MIN + sparkline::BAR_SPAN
        );
    }

    #[test]
    fn short_series_renders_one_bar_per_point() {
        let heights = bar_heights(&series(&[10.0, 20.0, 30.0]));
        assert_eq!(heights.len(), 3);
    }

    #[test]
    fn flat_series_renders_fixed_height_bars() {
        let heights = bar_heights(&series(&[42.0; 10]));
        assert_eq!(heights, vec![sparkline::BAR_FLAT; 10]);
    }

    #[test]
    fn heights_stay_within_the_visual_range() {
        let heights = bar_heights(&series(&[5.0, 500.0, 0.01, 250.0]));
        for height in heights {
            assert!(height >= sparkline::BAR_MIN);
            assert!(height <= sparkline::BAR_MIN + sparkline::BAR_SPAN);
        }
    }
}
