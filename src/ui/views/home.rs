use crate::render::UiEvent;
use crate::ui::egui_view::EguiView;
use crate::ui::helpers::big_list_button;
use crate::ui::layout::centered_panel;

pub fn ui_home(view: &EguiView, ctx: &egui::Context, events: &mut Vec<UiEvent>) {
    let button_h = 48.0;
    let estimated_h = 120.0 + (button_h + 8.0) * (view.subjects.len() + 1) as f32;

    centered_panel(ctx, estimated_h, 420.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("👋 Welcome to the Olympiad Quiz!");
            ui.add_space(10.0);
            ui.label("Choose a subject to begin");
            ui.add_space(18.0);

            let width = ui.available_width();
            let ready = !view.subjects.is_empty();
            if big_list_button(ui, "▶ Start quiz".to_string(), width, button_h, ready) {
                events.push(UiEvent::StartDefaultQuiz);
            }
            ui.add_space(14.0);
            for card in &view.subjects {
                let label = format!("{}\n{}", card.label, card.caption());
                if big_list_button(ui, label, width, button_h, true) {
                    events.push(UiEvent::SelectSubject(card.key.clone()));
                }
                ui.add_space(8.0);
            }

            if view.subjects.is_empty() {
                ui.label("No subjects available.");
            }
        });
    });
}
