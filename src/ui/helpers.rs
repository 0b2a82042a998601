// src/ui/helpers.rs
use crate::view_models::{AnswerRow, AnswerState};
use egui::{Button, Color32, RichText, Stroke, Ui, Vec2};

const CORRECT_FILL: Color32 = Color32::from_rgb(34, 120, 60);
const INCORRECT_FILL: Color32 = Color32::from_rgb(150, 40, 40);

pub fn big_list_button(ui: &mut Ui, label: String, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height)))
        .clicked()
}

/// Botón de respuesta con el estilo correcto/incorrecto ya aplicado.
/// Devuelve `true` si se pulsó (nunca cuando está bloqueado).
pub fn answer_button(ui: &mut Ui, row: &AnswerRow, width: f32) -> bool {
    let text = match row.state {
        AnswerState::Idle => RichText::new(&row.text),
        AnswerState::Correct => RichText::new(format!("✔ {}", row.text))
            .color(Color32::WHITE)
            .strong(),
        AnswerState::Incorrect => RichText::new(format!("✖ {}", row.text))
            .color(Color32::WHITE)
            .strong(),
    };
    let mut button = Button::new(text).min_size(Vec2::new(width, 44.0));
    button = match row.state {
        AnswerState::Idle => button,
        AnswerState::Correct => button
            .fill(CORRECT_FILL)
            .stroke(Stroke::new(2.0, Color32::LIGHT_GREEN)),
        AnswerState::Incorrect => button
            .fill(INCORRECT_FILL)
            .stroke(Stroke::new(2.0, Color32::LIGHT_RED)),
    };

    let response = ui.add_enabled(!row.locked, button);
    let response = if row.locked {
        response.on_disabled_hover_text("Already answered")
    } else {
        response
    };
    response.clicked()
}
