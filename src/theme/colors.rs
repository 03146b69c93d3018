//! Color palette for both reading modes.
//!
//! Manga mode is ink on paper with a red accent. Hacker mode swaps in a
//! terminal palette. Both are emitted as CSS custom properties so the
//! stylesheet only ever refers to `var(--...)`.

/// A named palette entry: CSS variable name, manga value, hacker value.
type Swatch = (&'static str, &'static str, &'static str);

pub const PALETTE: &[Swatch] = &[
    // === PAPER (Backgrounds) ===
    ("paper", "#fbf8f1", "#050805"),
    ("paper-shade", "#ece6d8", "#0b140b"),
    // === INK (Text, Borders) ===
    ("ink", "#111111", "#39ff14"),
    ("ink-soft", "rgba(17, 17, 17, 0.65)", "rgba(57, 255, 20, 0.65)"),
    ("ink-faint", "rgba(17, 17, 17, 0.15)", "rgba(57, 255, 20, 0.15)"),
    // === ACCENTS ===
    ("accent", "#e63946", "#00d4aa"),
    ("accent-glow", "rgba(230, 57, 70, 0.35)", "rgba(0, 212, 170, 0.35)"),
    ("highlight", "#ffd60a", "#f5f5f5"),
    ("danger", "#d62828", "#ff3366"),
];

/// Window background shown before the first paint, matching `--paper`.
pub const WINDOW_BACKGROUND: (u8, u8, u8, u8) = (0xfb, 0xf8, 0xf1, 0xff);

/// CSS custom properties for both modes.
///
/// Manga values go on `:root`, hacker values on `.hacker-mode` so they
/// cascade to everything inside the app shell.
pub fn css_variables() -> String {
    let mut css = String::from(":root {\n");
    for (name, manga, _) in PALETTE {
        css.push_str(&format!("  --{name}: {manga};\n"));
    }
    css.push_str("}\n.hacker-mode {\n");
    for (name, _, hacker) in PALETTE {
        css.push_str(&format!("  --{name}: {hacker};\n"));
    }
    css.push_str("}\n");
    css
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_swatch_has_both_modes() {
        let css = css_variables();
        for (name, manga, hacker) in PALETTE {
            assert!(css.contains(&format!("--{name}: {manga};")));
            assert!(css.contains(&format!("--{name}: {hacker};")));
        }
        assert!(css.starts_with(":root {"));
        assert!(css.contains(".hacker-mode {"));
    }

    #[test]
    fn window_background_matches_paper() {
        let (r, g, b, _) = WINDOW_BACKGROUND;
        let paper = PALETTE.iter().find(|(name, _, _)| *name == "paper").map(|s| s.1);
        assert_eq!(paper, Some(format!("#{r:02x}{g:02x}{b:02x}").as_str()));
    }
}
