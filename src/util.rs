// Formatting and logging helpers shared by the page controllers.

use wasm_bindgen::JsValue;

pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

/// Local "HH:MM" for an RFC 3339 instant (kickoff display).
pub fn format_kickoff(utc_date: &str) -> String {
    let date = js_sys::Date::new(&JsValue::from_str(utc_date));
    format!("{:02}:{:02}", date.get_hours(), date.get_minutes())
}

/// Local "HH:MM:SS" for an RFC 3339 instant ("Saved at" display).
pub fn format_timestamp(iso: &str) -> String {
    let date = js_sys::Date::new(&JsValue::from_str(iso));
    format!(
        "{:02}:{:02}:{:02}",
        date.get_hours(),
        date.get_minutes(),
        date.get_seconds()
    )
}

pub fn last_updated_label() -> String {
    let now = js_sys::Date::new_0();
    format!(
        "Last updated: {:02}:{:02}:{:02}",
        now.get_hours(),
        now.get_minutes(),
        now.get_seconds()
    )
}

/// Locale date string used as the header of a saved prediction.
pub fn local_date_label() -> String {
    String::from(js_sys::Date::new_0().to_locale_date_string("en-US", &JsValue::UNDEFINED))
}

pub fn now_millis() -> u64 {
    js_sys::Date::now() as u64
}

pub fn now_iso() -> String {
    String::from(js_sys::Date::new_0().to_iso_string())
}
