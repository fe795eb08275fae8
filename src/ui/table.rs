use eframe::egui::{ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::{DataContext, Song};

// ---------------------------------------------------------------------------
// Data grid – renders any row-index view of the song table
// ---------------------------------------------------------------------------

/// Column headers and cell formatters, in CSV order.
const COLUMNS: &[(&str, fn(&Song) -> String)] = &[
    ("artist", |s| s.artist.clone()),
    ("song", |s| s.title.clone()),
    ("genre", |s| s.genre.join(", ")),
    ("explicit", |s| s.explicit.to_string()),
    ("year", |s| s.year.to_string()),
    ("popularity", |s| format!("{:.0}", s.popularity)),
    ("duration_ms", |s| s.duration_ms.to_string()),
    ("danceability", |s| format!("{:.3}", s.danceability)),
    ("energy", |s| format!("{:.3}", s.energy)),
    ("key", |s| s.key.to_string()),
    ("loudness", |s| format!("{:.3}", s.loudness)),
    ("mode", |s| s.mode.to_string()),
    ("speechiness", |s| format!("{:.4}", s.speechiness)),
    ("acousticness", |s| format!("{:.4}", s.acousticness)),
    ("instrumentalness", |s| format!("{:.4}", s.instrumentalness)),
    ("liveness", |s| format!("{:.4}", s.liveness)),
    ("valence", |s| format!("{:.3}", s.valence)),
    ("tempo", |s| format!("{:.3}", s.tempo)),
];

/// Render a grid over the given row indices. Rows are virtualized, so the
/// full table is cheap to hand over; an empty view renders headers only.
pub fn song_table(ui: &mut Ui, data: &DataContext, rows: &[usize], id: &str) {
    ui.push_id(id, |ui: &mut Ui| {
        ScrollArea::horizontal()
            .auto_shrink([false, true])
            .show(ui, |ui: &mut Ui| {
                TableBuilder::new(ui)
                    .striped(true)
                    .resizable(true)
                    .max_scroll_height(280.0)
                    .columns(Column::auto(), COLUMNS.len())
                    .header(20.0, |mut header| {
                        for (name, _) in COLUMNS {
                            header.col(|ui: &mut Ui| {
                                ui.strong(*name);
                            });
                        }
                    })
                    .body(|body| {
                        body.rows(18.0, rows.len(), |mut row| {
                            let song = &data.songs[rows[row.index()]];
                            for (_, cell) in COLUMNS {
                                row.col(|ui: &mut Ui| {
                                    ui.label(cell(song));
                                });
                            }
                        });
                    });
            });
    });
}
