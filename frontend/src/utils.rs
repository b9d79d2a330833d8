use web_sys::window;

/// Reading progress in percent for the given scroll metrics.
pub fn scroll_percent(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Current reading progress of the page.
pub fn page_scroll_percent() -> f64 {
    let Some(win) = window() else {
        return 0.0;
    };
    let scroll_top = win.scroll_y().unwrap_or(0.0);
    let viewport = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = win
        .document()
        .and_then(|doc| doc.document_element())
        .map(|el| f64::from(el.scroll_height()))
        .unwrap_or(0.0);
    scroll_percent(scroll_top, height, viewport)
}

pub fn viewport_width() -> f64 {
    window()
        .and_then(|win| win.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Set `overflow` on `<body>`; missing elements are ignored.
pub fn set_body_overflow(value: &str) {
    if let Some(body) = window().and_then(|win| win.document()).and_then(|doc| doc.body()) {
        let _ = body.style().set_property("overflow", value);
    }
}

pub fn alert(message: &str) {
    if let Some(win) = window() {
        let _ = win.alert_with_message(message);
    }
}

pub fn current_url() -> String {
    window().and_then(|win| win.location().href().ok()).unwrap_or_default()
}
