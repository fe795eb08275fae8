use eframe::egui::{ScrollArea, Ui};

use crate::color;
use crate::state::AppState;
use crate::ui::pie::{self, PieSlice};
use crate::ui::{charts, table};

// ---------------------------------------------------------------------------
// Central panel – the dashboard sections in reading order
// ---------------------------------------------------------------------------

pub fn central_panel(ui: &mut Ui, state: &AppState) {
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            let all_rows: Vec<usize> = (0..state.data.len()).collect();

            ui.heading("Dataset preview");
            table::song_table(ui, &state.data, &all_rows, "preview_grid");
            ui.separator();

            ui.heading(format!(
                "Scatter Plot of {} vs {}",
                state.x_axis.label(),
                state.y_axis.label()
            ));
            charts::scatter_plot(ui, state);
            ui.separator();

            ui.heading(format!(
                "Filtered Data (Category: {} = {})",
                state.filter_category.label(),
                state.filter_value
            ));
            table::song_table(ui, &state.data, &state.filtered_rows, "filtered_grid");
            ui.separator();

            ui.heading("Bar Chart for Filtered Data");
            charts::popularity_bars(ui, state);
            ui.separator();

            ui.heading(format!(
                "Total Songs Based on Genres ({}: {})",
                state.filter_category.label(),
                state.filter_value
            ));
            charts::genre_histogram(ui, state);
            ui.separator();

            ui.heading("Songs Having Explicit Content (Filtered by Year)");
            let slices: Vec<PieSlice> = state
                .explicit_counts
                .iter()
                .map(|c| PieSlice {
                    label: c.explicit.to_string(),
                    value: c.song_count as f64,
                    color: color::DONUT_FILLS[usize::from(c.explicit)],
                })
                .collect();
            pie::donut_chart(ui, &slices);
            ui.separator();

            ui.heading("Popularity Trend by Year");
            charts::trend_lines(ui, state);
        });
}
