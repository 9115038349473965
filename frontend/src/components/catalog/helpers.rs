//! Small rendering helpers for the catalog view.

use js_sys::Date;
use wasm_bindgen::JsValue;

/// Inline fallback cover shown when a record has no image URL.
pub const NO_IMAGE_PLACEHOLDER: &str = "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 120 160'%3E%3Crect width='120' height='160' fill='%23eceff1'/%3E%3Ctext x='60' y='84' text-anchor='middle' font-family='Arial' font-size='12' fill='%2390a4ae'%3ENo image%3C/text%3E%3C/svg%3E";

/// URL for a record's cover: the stored URL when non-empty, else the
/// placeholder.
pub fn cover_url(image_url: &Option<String>) -> String {
    match image_url {
        Some(url) if !url.is_empty() => url.clone(),
        _ => NO_IMAGE_PLACEHOLDER.to_string(),
    }
}

/// Formats a backend ISO-8601 timestamp as `HH:MM - dd/mm/yyyy` in the
/// browser's local time. Falls back to the raw string if the browser
/// cannot parse it.
pub fn format_created_at(iso: &str) -> String {
    let date = Date::new(&JsValue::from_str(iso));
    if date.get_time().is_nan() {
        return iso.to_string();
    }
    format!(
        "{:02}:{:02} - {:02}/{:02}/{}",
        date.get_hours(),
        date.get_minutes(),
        date.get_date(),
        date.get_month() + 1,
        date.get_full_year()
    )
}

/// Price column rendering; the model keeps the raw number.
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_empty_image_url_uses_the_placeholder() {
        assert_eq!(cover_url(&None), NO_IMAGE_PLACEHOLDER);
        assert_eq!(cover_url(&Some(String::new())), NO_IMAGE_PLACEHOLDER);
        assert_eq!(
            cover_url(&Some("https://covers.example/dune.jpg".to_string())),
            "https://covers.example/dune.jpg"
        );
    }

    #[test]
    fn prices_render_with_two_decimals() {
        assert_eq!(format_price(45.0), "$45.00");
        assert_eq!(format_price(25.5), "$25.50");
    }
}
