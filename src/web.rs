use crate::QuizApp;
use crate::data::QuestionBank;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

const CANVAS_ID: &str = "quiz_canvas";

fn canvas() -> Result<HtmlCanvasElement, JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| JsValue::from_str("canvas #quiz_canvas not found"))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str("#quiz_canvas is not a canvas"))
}

/// Arranca la app en el `<canvas id="quiz_canvas">` de la página.
#[wasm_bindgen]
pub async fn start() -> Result<(), JsValue> {
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let bank = QuestionBank::embedded().map_err(|err| JsValue::from_str(&err.to_string()))?;
    eframe::WebRunner::new()
        .start(
            canvas()?,
            eframe::WebOptions::default(),
            Box::new(move |cc| Ok(Box::new(QuizApp::from_creation_context(cc, bank)))),
        )
        .await
}
