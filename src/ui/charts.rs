use std::collections::BTreeMap;

use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints, Points};

use crate::color;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Scatter plot – full table, selectable axes, coloured by category
// ---------------------------------------------------------------------------

/// One point series per category group so each group gets a legend entry
/// and a stable colour.
pub fn scatter_plot(ui: &mut Ui, state: &AppState) {
    let mut groups: BTreeMap<String, Vec<[f64; 2]>> = BTreeMap::new();
    for song in &state.data.songs {
        let label = state.scatter_category.group_label(song);
        groups.entry(label).or_default().push([
            state.x_axis.value(song),
            state.y_axis.value(song),
        ]);
    }

    Plot::new("scatter_plot")
        .height(320.0)
        .legend(Legend::default())
        .x_axis_label(state.x_axis.label())
        .y_axis_label(state.y_axis.label())
        .show(ui, |plot_ui| {
            for (label, points) in groups {
                let color = state.scatter_colors.color_for(&label);
                let points: PlotPoints = points.into();
                plot_ui.points(Points::new(points).name(&label).color(color).radius(2.0));
            }
        });
}

// ---------------------------------------------------------------------------
// Bar chart – popularity per year over the filtered subset
// ---------------------------------------------------------------------------

/// Rows sharing a year stack into a single bar, so the rendered height is
/// the per-year popularity total.
pub fn popularity_bars(ui: &mut Ui, state: &AppState) {
    let mut totals: BTreeMap<i32, f64> = BTreeMap::new();
    for &i in &state.filtered_rows {
        let song = &state.data.songs[i];
        *totals.entry(song.year).or_default() += song.popularity;
    }

    let bars: Vec<Bar> = totals
        .into_iter()
        .map(|(year, total)| Bar::new(year as f64, total).width(0.7))
        .collect();

    Plot::new("popularity_bars")
        .height(280.0)
        .x_axis_label("year")
        .y_axis_label("popularity")
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(
                BarChart::new(bars)
                    .color(color::BAR_FILL)
                    .name("popularity"),
            );
        });
}

// ---------------------------------------------------------------------------
// Histogram – songs per genre over the filtered exploded view
// ---------------------------------------------------------------------------

/// Genre counts as fixed-colour bars with the genre names on the x axis.
pub fn genre_histogram(ui: &mut Ui, state: &AppState) {
    let labels: Vec<String> = state
        .genre_counts
        .iter()
        .map(|c| c.genre.clone())
        .collect();

    let bars: Vec<Bar> = state
        .genre_counts
        .iter()
        .enumerate()
        .map(|(i, c)| {
            Bar::new(i as f64, c.song_count as f64)
                .width(0.7)
                .name(&c.genre)
        })
        .collect();

    Plot::new("genre_histogram")
        .height(280.0)
        .y_axis_label("song_count")
        .x_axis_formatter(move |mark, _range| {
            let i = mark.value.round();
            if (mark.value - i).abs() < 1e-3 && i >= 0.0 && (i as usize) < labels.len() {
                labels[i as usize].clone()
            } else {
                String::new()
            }
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(
                BarChart::new(bars)
                    .color(color::HISTOGRAM_FILL)
                    .name("song_count"),
            );
        });
}

// ---------------------------------------------------------------------------
// Trend lines – mean popularity per year, one line per genre
// ---------------------------------------------------------------------------

pub fn trend_lines(ui: &mut Ui, state: &AppState) {
    // TrendPoints arrive sorted by (year, genre), so each series stays in
    // year order while grouping.
    let mut series: BTreeMap<&str, Vec<[f64; 2]>> = BTreeMap::new();
    for point in &state.genre_trend {
        series
            .entry(point.genre.as_str())
            .or_default()
            .push([point.year as f64, point.mean_popularity]);
    }

    Plot::new("genre_trend")
        .height(320.0)
        .legend(Legend::default())
        .x_axis_label("year")
        .y_axis_label("popularity")
        .show(ui, |plot_ui| {
            for (genre, points) in series {
                let color = state.trend_colors.color_for(genre);
                let points: PlotPoints = points.into();
                plot_ui.line(Line::new(points).name(genre).color(color).width(1.5));
            }
        });
}
