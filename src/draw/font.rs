//! Font descriptor for text rendering.

/// Font configuration for text rendering.
///
/// Holds the descriptor string exactly as the caller supplied it, in CSS
/// shorthand (`"14px Terminus"`, `"italic bold 12pt Sans"`). The renderer
/// passes it through untouched; surfaces convert it to whatever their text
/// backend understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontDescriptor {
    spec: String,
}

impl FontDescriptor {
    /// Creates a new font descriptor from a CSS-style shorthand string.
    pub fn new(spec: impl Into<String>) -> Self {
        Self { spec: spec.into() }
    }

    /// The descriptor string as supplied.
    pub fn as_str(&self) -> &str {
        &self.spec
    }

    /// Converts this font descriptor to a Pango font description string.
    ///
    /// Format: "Family Style Weight Size"
    /// Example: `"bold 14px Terminus"` becomes `"Terminus Bold 14px"`.
    /// Strings without a recognizable size token are returned unchanged so
    /// native Pango descriptions keep working.
    pub fn to_pango_string(&self) -> String {
        let tokens: Vec<&str> = self.spec.split_whitespace().collect();
        let Some(size_idx) = tokens.iter().position(|t| parse_size(t).is_some()) else {
            return self.spec.clone();
        };
        let family = tokens[size_idx + 1..].join(" ");
        if family.is_empty() {
            return self.spec.clone();
        }

        let mut parts = vec![family];
        for modifier in &tokens[..size_idx] {
            // Pango has no notion of small-caps in the description string
            if modifier.eq_ignore_ascii_case("normal") || modifier.eq_ignore_ascii_case("small-caps")
            {
                continue;
            }
            parts.push(capitalize_first(modifier));
        }

        // Pango understands "px" natively and treats bare numbers as points
        let size = tokens[size_idx];
        match size.strip_suffix("pt") {
            Some(points) => parts.push(points.to_string()),
            None => parts.push(size.to_string()),
        }

        parts.join(" ")
    }
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self::new("14px Sans")
    }
}

impl From<&str> for FontDescriptor {
    fn from(spec: &str) -> Self {
        Self::new(spec)
    }
}

fn parse_size(token: &str) -> Option<f64> {
    token
        .strip_suffix("px")
        .or_else(|| token.strip_suffix("pt"))
        .and_then(|n| n.parse::<f64>().ok())
        .filter(|n| *n > 0.0)
}

/// Capitalizes the first letter of a string.
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pango_string_default() {
        let font = FontDescriptor::default();
        assert_eq!(font.to_pango_string(), "Sans 14px");
    }

    #[test]
    fn test_pango_string_css_shorthand() {
        let font = FontDescriptor::new("14px Terminus");
        assert_eq!(font.to_pango_string(), "Terminus 14px");
    }

    #[test]
    fn test_pango_string_modifiers() {
        let font = FontDescriptor::new("italic bold 24pt JetBrains Mono");
        assert_eq!(font.to_pango_string(), "JetBrains Mono Italic Bold 24");
    }

    #[test]
    fn test_pango_string_passthrough() {
        let font = FontDescriptor::new("Monospace Bold 12");
        assert_eq!(font.to_pango_string(), "Monospace Bold 12");
        assert_eq!(font.as_str(), "Monospace Bold 12");
    }
}
