//! Verification codes rendered as inline SVG.

use qrcode::render::svg;
use qrcode::{EcLevel, QrCode};

use crate::error::CardsError;

const DARK: &str = "#000000";
const LIGHT: &str = "#ffffff";

/// Encode `text` at error-correction level H, at least `size` pixels square.
pub fn render_svg(text: &str, size: u32) -> Result<String, CardsError> {
    let code = QrCode::with_error_correction_level(text.as_bytes(), EcLevel::H)?;
    Ok(code
        .render::<svg::Color>()
        .min_dimensions(size, size)
        .dark_color(svg::Color(DARK))
        .light_color(svg::Color(LIGHT))
        .build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_svg() {
        let svg = render_svg("https://cards.example/?type=student&id=S1", 90).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains(DARK));
        assert!(svg.contains(LIGHT));
    }

    #[test]
    fn test_oversized_payload_is_an_error() {
        // Level H tops out well below 3 KB of binary data.
        let text = "x".repeat(4000);
        assert!(matches!(render_svg(&text, 90), Err(CardsError::Qr(_))));
    }
}
