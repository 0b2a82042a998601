use crate::render::UiEvent;
use crate::ui::egui_view::{EguiView, Screen};
use crate::ui::helpers::answer_button;
use crate::ui::views::results::ui_results;
use egui::{Button, CentralPanel, Context, ProgressBar, RichText, ScrollArea};

pub fn ui_quiz(view: &EguiView, ctx: &Context, events: &mut Vec<UiEvent>) {
    CentralPanel::default().show(ctx, |ui| {
        let max_width = 650.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);

        ui.vertical_centered(|ui| {
            ui.set_width(panel_width);

            // Título de la asignatura + volver
            ui.horizontal(|ui| {
                if ui.button("⬅ Home").clicked() {
                    events.push(UiEvent::Home);
                }
                ui.heading(&view.subject_title);
            });
            ui.add_space(6.0);
            ui.add(ProgressBar::new(view.progress_fraction).desired_width(panel_width));
            ui.add_space(12.0);

            if view.screen == Screen::Results {
                ui_results(view, ui, events);
                return;
            }

            ScrollArea::vertical().max_height(160.0).show(ui, |ui| {
                ui.label(RichText::new(&view.question_text).heading());
            });
            ui.add_space(12.0);

            for (i, row) in view.answers.iter().enumerate() {
                if answer_button(ui, row, panel_width) {
                    events.push(UiEvent::AnswerSelected(i));
                }
                ui.add_space(6.0);
            }

            ui.add_space(10.0);
            if view.next_enabled {
                let next = ui
                    .add_sized([panel_width / 2.0, 36.0], Button::new("Next ➡"))
                    .on_hover_text("Enter");
                if next.clicked() {
                    events.push(UiEvent::Next);
                }
            }
        });
    });
}
