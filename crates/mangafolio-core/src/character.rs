//! Character select data for the about section.

/// A skill bar on the character sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Percentage, 0..=100
    pub level: u8,
}

/// Selectable character styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CharacterStyle {
    #[default]
    Developer,
    CyberHacker,
    Designer,
}

impl CharacterStyle {
    pub const ALL: [CharacterStyle; 3] = [
        CharacterStyle::Developer,
        CharacterStyle::CyberHacker,
        CharacterStyle::Designer,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CharacterStyle::Developer => "The Developer",
            CharacterStyle::CyberHacker => "The Cyber Hacker",
            CharacterStyle::Designer => "The Designer",
        }
    }

    /// Label on the style picker button.
    pub fn button_label(&self) -> &'static str {
        match self {
            CharacterStyle::Developer => "DEFAULT",
            CharacterStyle::CyberHacker => "CYBERPUNK",
            CharacterStyle::Designer => "CREATIVE",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CharacterStyle::Developer => {
                "A coding hero with a passion for building amazing web experiences."
            }
            CharacterStyle::CyberHacker => {
                "A digital nomad navigating the neon-lit data streams of the web."
            }
            CharacterStyle::Designer => {
                "An artist with an eye for detail and a mind for user experience."
            }
        }
    }

    pub fn image(&self) -> &'static str {
        match self {
            CharacterStyle::Developer => {
                "https://images.unsplash.com/photo-1542831371-29b0f74f9713?q=80&w=1470&auto=format"
            }
            CharacterStyle::CyberHacker => {
                "https://images.unsplash.com/photo-1550439062-609e1531270e?q=80&w=1470&auto=format"
            }
            CharacterStyle::Designer => {
                "https://images.unsplash.com/photo-1618005182384-a83a8bd57fbe?q=80&w=1364&auto=format"
            }
        }
    }

    pub fn skills(&self) -> [Skill; 4] {
        let s = |name, level| Skill { name, level };
        match self {
            CharacterStyle::Developer => [
                s("React", 90),
                s("TypeScript", 85),
                s("CSS/Tailwind", 80),
                s("Node.js", 75),
            ],
            CharacterStyle::CyberHacker => [
                s("WebGL", 90),
                s("Three.js", 85),
                s("Algorithm Design", 80),
                s("System Architecture", 75),
            ],
            CharacterStyle::Designer => [
                s("UI/UX Design", 90),
                s("Animation", 85),
                s("Figma", 80),
                s("Creative Direction", 75),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_style_has_descending_skills() {
        for style in CharacterStyle::ALL {
            let skills = style.skills();
            assert!(skills.windows(2).all(|w| w[0].level >= w[1].level));
            assert!(skills.iter().all(|s| s.level <= 100));
        }
    }

    #[test]
    fn test_default_style() {
        assert_eq!(CharacterStyle::default().name(), "The Developer");
    }
}
