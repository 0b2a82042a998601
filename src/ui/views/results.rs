use crate::render::UiEvent;
use crate::ui::egui_view::EguiView;
use egui::{Button, RichText, Ui};

/// Pantalla final dentro de la página del quiz.
pub fn ui_results(view: &EguiView, ui: &mut Ui, events: &mut Vec<UiEvent>) {
    let button_w = (ui.available_width() / 2.5).max(140.0);

    ui.add_space(20.0);
    ui.heading("🎉 Quiz complete!");
    ui.add_space(10.0);
    ui.label(RichText::new(&view.final_message).size(18.0));
    ui.add_space(24.0);

    if ui
        .add_sized([button_w, 36.0], Button::new("🔄 Restart"))
        .clicked()
    {
        events.push(UiEvent::Restart);
    }
    ui.add_space(8.0);
    if ui
        .add_sized([button_w, 36.0], Button::new("Back to subjects"))
        .clicked()
    {
        events.push(UiEvent::Home);
    }
}
