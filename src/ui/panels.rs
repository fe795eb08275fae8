use eframe::egui::{self, ScrollArea, Slider, Ui};

use crate::data::filter::FilterValue;
use crate::data::model::{Category, NumericField};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – dashboard settings
// ---------------------------------------------------------------------------

/// Render the settings panel and apply any selection changes to the state.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Dashboard Settings");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Scatter plot controls ----
            ui.strong("Scatter Plot");
            axis_combo(ui, "x_axis", "X-axis", &mut state.x_axis);
            axis_combo(ui, "y_axis", "Y-axis", &mut state.y_axis);

            ui.label("Category");
            let current = state.scatter_category;
            egui::ComboBox::from_id_salt("scatter_category")
                .selected_text(current.label())
                .show_ui(ui, |ui: &mut Ui| {
                    for cat in Category::ALL {
                        if ui.selectable_label(current == cat, cat.label()).clicked() {
                            state.set_scatter_category(cat);
                        }
                    }
                });
            ui.separator();

            // ---- Filter controls ----
            ui.strong("Filter Data");
            ui.label("Filter by Category");
            let current = state.filter_category;
            egui::ComboBox::from_id_salt("filter_category")
                .selected_text(current.label())
                .show_ui(ui, |ui: &mut Ui| {
                    for cat in Category::ALL {
                        if ui.selectable_label(current == cat, cat.label()).clicked()
                            && cat != current
                        {
                            state.set_filter_category(cat);
                        }
                    }
                });

            ui.label(format!("Select {}", state.filter_category.label()));
            let values = state.data.category_values(state.filter_category);
            let mut selection: Option<FilterValue> = None;
            egui::ComboBox::from_id_salt("filter_value")
                .selected_text(state.filter_value.to_string())
                .show_ui(ui, |ui: &mut Ui| {
                    let is_all = state.filter_value == FilterValue::All;
                    if ui.selectable_label(is_all, "All").clicked() && !is_all {
                        selection = Some(FilterValue::All);
                    }
                    for value in &values {
                        let is_current = state.filter_value == FilterValue::Is(value.clone());
                        if ui.selectable_label(is_current, value).clicked() && !is_current {
                            selection = Some(FilterValue::Is(value.clone()));
                        }
                    }
                });
            if let Some(value) = selection {
                state.filter_value = value;
                state.recompute();
            }
            ui.separator();

            // ---- Year range ----
            ui.strong("Select Year Range");
            let (data_min, data_max) = (state.data.year_min, state.data.year_max);
            let (mut from, mut to) = state.year_range;
            let mut changed = false;
            changed |= ui
                .add(Slider::new(&mut from, data_min..=data_max).text("From"))
                .changed();
            changed |= ui
                .add(Slider::new(&mut to, data_min..=data_max).text("To"))
                .changed();
            if changed {
                state.set_year_range(from, to);
            }
        });
}

fn axis_combo(ui: &mut Ui, id: &str, label: &str, field: &mut NumericField) {
    ui.label(label);
    egui::ComboBox::from_id_salt(id)
        .selected_text(field.label())
        .show_ui(ui, |ui: &mut Ui| {
            for candidate in NumericField::ALL {
                if ui
                    .selectable_label(*field == candidate, candidate.label())
                    .clicked()
                {
                    *field = candidate;
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the title bar with the dataset and filter counts.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.heading("Song Analysis Dashboard");
        ui.separator();
        ui.label(format!(
            "{} songs loaded, {} matching filter",
            state.data.len(),
            state.filtered_rows.len()
        ));
    });
}
