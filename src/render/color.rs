/// Neutral gray used when a slide carries no usable background color.
pub const DEFAULT_BACKGROUND: &str = "6B7B7F";

/// A resolved slide color: six uppercase hex digits, no leading `#`.
///
/// Absent, empty, and unparsable inputs all normalize to the same
/// default, so `None`, `""`, `"#6B7B7F"`, and `"6B7B7F"` are
/// indistinguishable downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Color(String);

impl Color {
    pub fn resolve(raw: Option<&str>) -> Self {
        let cleaned = raw.unwrap_or("").trim().trim_start_matches('#');
        if cleaned.len() == 6 && hex::decode(cleaned).is_ok() {
            Color(cleaned.to_ascii_uppercase())
        } else {
            Color(DEFAULT_BACKGROUND.to_string())
        }
    }

    /// Hex form, as OOXML `srgbClr` wants it.
    pub fn hex(&self) -> &str {
        &self.0
    }

    /// Separate byte components, for renderers with no hex entry point.
    pub fn rgb(&self) -> (u8, u8, u8) {
        // The constructor guarantees six valid hex digits.
        let bytes = hex::decode(&self.0).unwrap_or_else(|_| vec![0x6B, 0x7B, 0x7F]);
        (bytes[0], bytes[1], bytes[2])
    }

    /// 50/50 blend with another color, used to fake the translucent
    /// accent box in the format that only draws opaque fills.
    pub fn blend(&self, other: &Color) -> Color {
        let (r1, g1, b1) = self.rgb();
        let (r2, g2, b2) = other.rgb();
        let mix = [
            (r1 as u16 + r2 as u16) / 2,
            (g1 as u16 + g2 as u16) / 2,
            (b1 as u16 + b2 as u16) / 2,
        ];
        Color(hex::encode_upper([mix[0] as u8, mix[1] as u8, mix[2] as u8]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_empty_and_default_all_resolve_identically() {
        assert_eq!(Color::resolve(None), Color::resolve(Some("")));
        assert_eq!(Color::resolve(None), Color::resolve(Some("#6B7B7F")));
        assert_eq!(Color::resolve(None), Color::resolve(Some("6B7B7F")));
        assert_eq!(Color::resolve(None).hex(), DEFAULT_BACKGROUND);
    }

    #[test]
    fn leading_hash_is_stripped() {
        assert_eq!(Color::resolve(Some("#5B6B6F")).hex(), "5B6B6F");
        assert_eq!(Color::resolve(Some("5B6B6F")).hex(), "5B6B6F");
    }

    #[test]
    fn lowercase_input_normalizes() {
        assert_eq!(Color::resolve(Some("#5b6b6f")).hex(), "5B6B6F");
    }

    #[test]
    fn garbage_falls_back_to_default() {
        assert_eq!(Color::resolve(Some("#xyzzyx")).hex(), DEFAULT_BACKGROUND);
        assert_eq!(Color::resolve(Some("#fff")).hex(), DEFAULT_BACKGROUND);
        assert_eq!(Color::resolve(Some("not a color")).hex(), DEFAULT_BACKGROUND);
    }

    #[test]
    fn rgb_components_split_correctly() {
        assert_eq!(Color::resolve(Some("#5B6B6F")).rgb(), (91, 107, 111));
        assert_eq!(Color::resolve(None).rgb(), (107, 123, 127));
    }

    #[test]
    fn blend_averages_channels() {
        let a = Color::resolve(Some("000000"));
        let b = Color::resolve(Some("2D2D2D"));
        // hex inputs of length 6 only; build via resolve
        assert_eq!(a.blend(&b).rgb(), (22, 22, 22));
    }
}
