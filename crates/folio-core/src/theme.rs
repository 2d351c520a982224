//! Visual theme constants
//!
//! Initialized once at startup and immutable afterwards. The shell
//! injects these as `:root` CSS custom properties so every view styles
//! itself off the same variables.

/// Process-wide visual constants
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub background: &'static str,
    pub text: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub font_mono: &'static str,
    pub font_sans: &'static str,
}

impl Theme {
    /// The site theme
    pub const DEFAULT: Theme = Theme {
        background: "#0a0a0a",
        text: "#e0e0e0",
        primary: "#00ff9d",
        secondary: "#6b3dd4",
        accent: "#ff00ff",
        font_mono: "'JetBrains Mono', 'Fira Code', monospace",
        font_sans: "'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif",
    };

    /// Render the theme as a `:root` custom-property block
    pub fn css_variables(&self) -> String {
        format!(
            ":root {{\n  --color-background: {};\n  --color-text: {};\n  --color-primary: {};\n  --color-secondary: {};\n  --color-accent: {};\n  --font-mono: {};\n  --font-sans: {};\n}}\n",
            self.background,
            self.text,
            self.primary,
            self.secondary,
            self.accent,
            self.font_mono,
            self.font_sans,
        )
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_variables_block() {
        let css = Theme::DEFAULT.css_variables();
        assert!(css.starts_with(":root {"));
        assert!(css.contains("--color-primary: #00ff9d;"));
        assert!(css.contains("--font-mono: 'JetBrains Mono'"));
        assert!(css.trim_end().ends_with('}'));
    }
}
