//! Web entry point for tally using ratzilla.
//!
//! Renders the same screens as the terminal build into the browser and keeps
//! the ledger in LocalStorage.

use std::cell::RefCell;
use std::rc::Rc;

use ratatui::Terminal;
use ratzilla::event::KeyEvent as RatzillaKeyEvent;
use ratzilla::{DomBackend, WebRenderer};
use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::event::AppKeyEvent;
use crate::platform::WebStorage;

/// Set up event listener to prevent default browser behavior for captured keys.
fn setup_prevent_default() -> Result<(), JsValue> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
        let key = event.key();
        let ctrl = event.ctrl_key() || event.meta_key();

        // Tab cycles screens and Ctrl+S submits forms
        let should_prevent =
            matches!(key.as_str(), "Tab") || (ctrl && matches!(key.to_lowercase().as_str(), "s"));

        if should_prevent {
            event.prevent_default();
        }
    });

    document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;

    // Prevent the closure from being dropped
    closure.forget();
    Ok(())
}

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    crate::init_logging_web();

    tracing::info!("Tally web version starting");

    setup_prevent_default()?;

    let app = Rc::new(RefCell::new(App::new(Box::new(WebStorage::new()))));

    let backend = DomBackend::new().map_err(|e| JsValue::from_str(&e.to_string()))?;
    let terminal: Terminal<DomBackend> =
        Terminal::new(backend).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let app_clone = Rc::clone(&app);
    terminal.on_key_event(move |key_event: RatzillaKeyEvent| {
        let key: AppKeyEvent = (&key_event).into();
        let mut app = app_clone.borrow_mut();
        app.handle_key(key);
        if app.take_exit_request() {
            // A browser tab can't close itself; the page just stays put
            tracing::info!("Exit requested");
        }
    });

    terminal.draw_web(move |frame| {
        app.borrow_mut().draw(frame);
    });

    Ok(())
}
