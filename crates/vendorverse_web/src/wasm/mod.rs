//! `wasm-bindgen` entry points
//!
//! One [`ThemeManager`] lives per page in a thread-local. Switcher listeners
//! and the JS globals (`applyTheme`, `getCurrentTheme`, `toggleTheme`) all
//! route into it, and a single `setTimeout` is kept armed for the manager's
//! next step deadline.

mod dom;
mod storage;

pub use dom::WebDocument;
pub use storage::LocalStore;

use crate::bootstrap::{config_from_script, timeout_ms, CONFIG_SCRIPT_ID};
use crate::console::ConsoleMakeWriter;
use js_sys::Reflect;
use std::cell::RefCell;
use std::time::Duration;
use tracing::{info, warn, Level};
use tracing_subscriber::EnvFilter;
use vendorverse_core::events::event_names;
use vendorverse_core::{ControlEvent, ReadyState};
use vendorverse_theme::{SwitcherBindings, ThemeId, ThemeManager};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlSelectElement};

/// Console log directives
const LOG_FILTER: &str = "info";

struct Runtime {
    manager: ThemeManager<LocalStore, WebDocument>,
    timer: Option<i32>,
}

impl Runtime {
    fn new() -> Option<Self> {
        let document = WebDocument::current()?;
        let script = document
            .inner()
            .get_element_by_id(CONFIG_SCRIPT_ID)
            .and_then(|e| e.text_content());
        let config = config_from_script(script.as_deref());
        Some(Self {
            manager: ThemeManager::with_config(config, LocalStore, document),
            timer: None,
        })
    }

    /// Keep one timeout armed for the next pending step
    fn arm(&mut self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Some(handle) = self.timer.take() {
            window.clear_timeout_with_handle(handle);
        }
        let Some(deadline) = self.manager.next_deadline() else {
            return;
        };

        let callback = Closure::once_into_js(on_timer);
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            timeout_ms(deadline, now()),
        ) {
            Ok(handle) => self.timer = Some(handle),
            Err(e) => warn!("theme timer not armed: {}", storage::describe(&e)),
        }
    }
}

thread_local! {
    static RUNTIME: RefCell<Option<Runtime>> = const { RefCell::new(None) };
}

/// Run `f` against the page runtime, creating it on first use. Re-entrant
/// calls are dropped.
fn with_runtime<R>(f: impl FnOnce(&mut Runtime) -> R) -> Option<R> {
    RUNTIME.with(|cell| {
        let Ok(mut slot) = cell.try_borrow_mut() else {
            warn!("theme runtime busy, call dropped");
            return None;
        };
        if slot.is_none() {
            *slot = Runtime::new();
        }
        let rt = slot.as_mut()?;
        let out = f(rt);
        rt.arm();
        Some(out)
    })
}

/// Page clock
fn now() -> Duration {
    let ms = web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now);
    Duration::from_secs_f64(ms.max(0.0) / 1000.0)
}

fn on_timer() {
    with_runtime(|rt| {
        rt.timer = None;
        rt.manager.tick(now());
    });
}

fn dispatch(event: ControlEvent) {
    with_runtime(|rt| rt.manager.handle_event(&event, now()));
}

// ========== Startup ==========

#[wasm_bindgen(start)]
pub fn start() {
    install_panic_hook();
    init_logging();
    expose_globals();

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if ReadyState::parse(&document.ready_state()).must_defer() {
        let boot = Closure::once_into_js(boot);
        if let Err(e) = document.add_event_listener_with_callback(
            event_names::DOM_CONTENT_LOADED,
            boot.unchecked_ref(),
        ) {
            warn!("cannot wait for the document: {}", storage::describe(&e));
        }
    } else {
        boot();
    }
}

fn boot() {
    let bindings = with_runtime(|rt| {
        let bindings = rt.manager.initialize(now());
        let config = rt.manager.config();
        let document = rt.manager.document();
        listen(document, &config.switcher_id, &config.button_attribute, &bindings);
        bindings
    });
    if bindings.is_none() {
        warn!("theme system not started: no document");
    }
}

fn listen(
    document: &WebDocument,
    switcher_id: &str,
    attribute: &str,
    bindings: &SwitcherBindings,
) {
    if bindings.select {
        if let Some(select) = document.inner().get_element_by_id(switcher_id) {
            on(&select, event_names::CHANGE, |event| {
                let value = event
                    .current_target()
                    .and_then(|t| t.dyn_into::<HtmlSelectElement>().ok())
                    .map(|s| s.value());
                if let Some(value) = value {
                    dispatch(ControlEvent::SelectChanged(value));
                }
            });
        }
    }

    for button in document.tagged(attribute) {
        let attribute = attribute.to_string();
        on(&button, event_names::CLICK, move |event| {
            let value = event
                .current_target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|e| e.get_attribute(&attribute));
            if let Some(value) = value {
                dispatch(ControlEvent::ButtonActivated(value));
            }
        });
    }
}

/// Attach a listener for the lifetime of the page
fn on(target: &Element, name: &str, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(e) = target.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())
    {
        warn!("{name} listener not attached: {}", storage::describe(&e));
    }
    closure.forget();
}

// ========== JS API ==========

/// Apply a theme by id; `animate` defaults to true. Returns the applied id.
#[wasm_bindgen(js_name = applyTheme)]
pub fn apply_theme(theme: &str, animate: Option<bool>) -> String {
    let animate = animate.unwrap_or(true);
    with_runtime(|rt| rt.manager.apply_theme(theme, animate, now()))
        .unwrap_or_else(|| ThemeId::normalize(theme))
        .id()
        .to_string()
}

#[wasm_bindgen(js_name = getCurrentTheme)]
pub fn get_current_theme() -> String {
    with_runtime(|rt| rt.manager.current_theme())
        .unwrap_or_default()
        .id()
        .to_string()
}

#[wasm_bindgen(js_name = toggleTheme)]
pub fn toggle_theme() -> String {
    with_runtime(|rt| rt.manager.toggle_theme(now()))
        .unwrap_or_default()
        .id()
        .to_string()
}

/// Mirror the exports onto `window` for inline handlers
fn expose_globals() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let apply = Closure::<dyn Fn(String, Option<bool>) -> String>::new(
        |theme: String, animate: Option<bool>| apply_theme(&theme, animate),
    );
    let current = Closure::<dyn Fn() -> String>::new(get_current_theme);
    let toggle = Closure::<dyn Fn() -> String>::new(toggle_theme);

    for (name, f) in [
        ("applyTheme", apply.into_js_value()),
        ("getCurrentTheme", current.into_js_value()),
        ("toggleTheme", toggle.into_js_value()),
    ] {
        if Reflect::set(&window, &JsValue::from_str(name), &f).is_err() {
            warn!("window.{name} not exposed");
        }
    }
}

// ========== Diagnostics ==========

fn console_sink(level: Level, line: &str) {
    let msg = JsValue::from_str(line);
    match level {
        Level::ERROR => web_sys::console::error_1(&msg),
        Level::WARN => web_sys::console::warn_1(&msg),
        Level::INFO => web_sys::console::info_1(&msg),
        _ => web_sys::console::debug_1(&msg),
    }
}

fn init_logging() {
    let installed = tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter::new(console_sink))
        .with_ansi(false)
        .without_time()
        .with_env_filter(EnvFilter::new(LOG_FILTER))
        .try_init();
    if installed.is_ok() {
        info!("vendorverse theme runtime {}", env!("CARGO_PKG_VERSION"));
    }
}

fn install_panic_hook() {
    use std::sync::Once;

    static ONCE: Once = Once::new();
    ONCE.call_once(|| {
        std::panic::set_hook(Box::new(|info| {
            let msg = match info.location() {
                Some(loc) => format!("panic at {}:{}: {info}", loc.file(), loc.line()),
                None => format!("panic: {info}"),
            };
            web_sys::console::error_1(&JsValue::from_str(&msg));
        }));
    });
}
