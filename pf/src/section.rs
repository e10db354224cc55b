//! Page sections and their in-page anchors

use std::fmt;
use std::str::FromStr;

use tracing::debug;

/// Sections of the portfolio, in page order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Hero,
    About,
    Education,
    Skills,
    Experience,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Self::Hero,
        Self::About,
        Self::Education,
        Self::Skills,
        Self::Experience,
        Self::Projects,
        Self::Contact,
    ];

    /// Anchor used for navigation (`#about`, `#experience`, ...)
    pub fn anchor(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::About => "about",
            Self::Education => "education",
            Self::Skills => "skills",
            Self::Experience => "experience",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    /// Navigation label
    pub fn label(self) -> &'static str {
        match self {
            Self::Hero => "Home",
            Self::About => "About",
            Self::Education => "Education",
            Self::Skills => "Skills",
            Self::Experience => "Experience",
            Self::Projects => "Projects",
            Self::Contact => "Get In Touch",
        }
    }

    /// Small numbered caption above the section heading
    pub fn eyebrow(self) -> Option<&'static str> {
        match self {
            Self::Hero => None,
            Self::About => Some("01. Identity"),
            Self::Education => Some("02. Academic Foundation"),
            Self::Skills => Some("03. Skillset"),
            Self::Experience => Some("04. Career Track"),
            Self::Projects => Some("05. Showcase"),
            Self::Contact => Some("Let's Build Something"),
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Self::Hero => "Welcome",
            Self::About => "Okay, But Who Am I?",
            Self::Education => "Education & Training",
            Self::Skills => "My Technical Jar of Tricks",
            Self::Experience => "Professional Journey",
            Self::Projects => "Project Labs",
            Self::Contact => "Get In Touch",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    /// Next section, wrapping to the top
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous section, wrapping to the bottom
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.anchor())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        debug!(%s, "Section::from_str: called");
        let anchor = s.trim().trim_start_matches('#').to_lowercase();
        Self::ALL
            .into_iter()
            .find(|section| section.anchor() == anchor)
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(|s| s.anchor()).collect();
                format!("Unknown section '{}'. Valid sections: {}", s, known.join(", "))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_anchor() {
        assert_eq!("experience".parse::<Section>(), Ok(Section::Experience));
        assert_eq!("#About".parse::<Section>(), Ok(Section::About));
        assert!("blog".parse::<Section>().is_err());
    }

    #[test]
    fn test_next_prev_wrap() {
        assert_eq!(Section::Hero.next(), Section::About);
        assert_eq!(Section::Contact.next(), Section::Hero);
        assert_eq!(Section::Hero.prev(), Section::Contact);
        for section in Section::ALL {
            assert_eq!(section.next().prev(), section);
        }
    }

    #[test]
    fn test_anchor_round_trip() {
        for section in Section::ALL {
            assert_eq!(section.to_string().parse::<Section>(), Ok(section));
        }
    }
}
