use std::f32::consts::{FRAC_PI_2, TAU};

use eframe::egui::{
    Align2, Color32, FontId, Pos2, RichText, Sense, Shape, Stroke, Ui, Vec2,
};

// ---------------------------------------------------------------------------
// Donut chart – painted directly, egui_plot has no pie type
// ---------------------------------------------------------------------------

pub struct PieSlice {
    pub label: String,
    pub value: f64,
    pub color: Color32,
}

/// Hole radius as a fraction of the outer radius.
const HOLE: f32 = 0.6;

/// Angular step for tessellating a slice into convex quads.
const ARC_STEP: f32 = 0.05;

/// Render a donut chart with a count legend beside it. A zero total is
/// valid input and renders as a placeholder instead of failing.
pub fn donut_chart(ui: &mut Ui, slices: &[PieSlice]) {
    ui.horizontal(|ui: &mut Ui| {
        let desired = Vec2::new(ui.available_width().min(320.0), 240.0);
        let (response, painter) = ui.allocate_painter(desired, Sense::hover());
        let rect = response.rect;
        let center = rect.center();
        let outer = rect.width().min(rect.height()) * 0.45;
        let inner = outer * HOLE;

        let total: f64 = slices.iter().map(|s| s.value).sum();
        if total <= 0.0 {
            painter.text(
                center,
                Align2::CENTER_CENTER,
                "No data in range",
                FontId::proportional(14.0),
                ui.visuals().weak_text_color(),
            );
            return;
        }

        // Start at twelve o'clock and sweep clockwise.
        let mut angle = -FRAC_PI_2;
        for slice in slices {
            let sweep = (slice.value / total) as f32 * TAU;
            let steps = (sweep / ARC_STEP).ceil().max(1.0) as usize;
            for k in 0..steps {
                let a0 = angle + sweep * k as f32 / steps as f32;
                let a1 = angle + sweep * (k + 1) as f32 / steps as f32;
                let quad = vec![
                    polar(center, inner, a0),
                    polar(center, outer, a0),
                    polar(center, outer, a1),
                    polar(center, inner, a1),
                ];
                painter.add(Shape::convex_polygon(quad, slice.color, Stroke::NONE));
            }
            angle += sweep;
        }

        // ---- Legend with counts and shares ----
        ui.vertical(|ui: &mut Ui| {
            ui.add_space(24.0);
            for slice in slices {
                let share = 100.0 * slice.value / total;
                ui.horizontal(|ui: &mut Ui| {
                    ui.label(RichText::new("■").color(slice.color));
                    ui.label(format!(
                        "{} — {} songs ({share:.1}%)",
                        slice.label, slice.value
                    ));
                });
            }
        });
    });
}

fn polar(center: Pos2, radius: f32, angle: f32) -> Pos2 {
    Pos2::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}
