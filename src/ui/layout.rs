use crate::ui::egui_view::EguiView;
use egui::{CentralPanel, Context, Frame, RichText, Ui, Visuals};

/// Cabecera con la puntuación y el progreso (visible en todas las pantallas).
pub fn top_panel(view: &EguiView, ctx: &Context) {
    egui::TopBottomPanel::top("header_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            ui.label(RichText::new("🏅 Olympiad Quiz").strong());
            ui.separator();
            ui.label(&view.header.score);
            ui.with_layout(
                egui::Layout::right_to_left(egui::Align::Center),
                |ui| {
                    ui.label(&view.header.progress);
                },
            );
        });
    });
}

/// Botones de tema. Devuelve el nuevo valor de `dark_mode` si cambió.
pub fn bottom_panel(ctx: &Context, dark_mode: bool) -> Option<bool> {
    let mut changed = None;
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        ui.with_layout(
            egui::Layout::right_to_left(egui::Align::Center),
            |ui| {
                if ui.button("🌙 Dark mode").clicked() && !dark_mode {
                    ctx.set_visuals(Visuals::dark());
                    changed = Some(true);
                }
                if ui.button("☀ Light mode").clicked() && dark_mode {
                    ctx.set_visuals(Visuals::light());
                    changed = Some(false);
                }
            },
        );
    });
    changed
}

/// Panel centrado tanto vertical como horizontalmente,
/// con un tamaño de contenido máximo y un bloque interior `inner`.
pub fn centered_panel(
    ctx: &Context,
    est_height: f32,
    max_width: f32,
    inner: impl FnOnce(&mut Ui),
) {
    CentralPanel::default().show(ctx, |ui| {
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        ui.vertical_centered(|ui| {
            Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    let w = ui.available_width().min(max_width);
                    ui.set_width(w);
                    inner(ui);
                });
        });
        ui.add_space(extra);
    });
}

pub fn apply_theme(ctx: &Context, dark_mode: bool) {
    ctx.set_visuals(if dark_mode {
        Visuals::dark()
    } else {
        Visuals::light()
    });
}
