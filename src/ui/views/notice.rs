use crate::render::UiEvent;
use crate::ui::egui_view::EguiView;
use egui::{Align2, Context};

pub fn ui_notice(view: &EguiView, ctx: &Context, events: &mut Vec<UiEvent>) {
    let Some(message) = &view.notice else {
        return;
    };
    egui::Window::new("Notice")
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(message);
            ui.add_space(8.0);
            if ui.button("OK").clicked() {
                events.push(UiEvent::DismissNotice);
            }
        });
}
