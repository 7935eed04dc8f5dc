use std::fmt;

/// Page sections in document order, top to bottom.
pub const PAGE_SECTIONS: [&str; 5] = ["hero", "about", "skills", "projects", "contact"];

/// Identifier of a page region, e.g. `"about"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SectionId(String);

impl SectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SectionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl PartialEq<str> for SectionId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for SectionId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Layout snapshot of one section: its id and vertical offset in pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: SectionId,
    pub offset_top: f64,
}

impl Section {
    pub fn new(id: impl Into<String>, offset_top: f64) -> Self {
        Self {
            id: SectionId::new(id),
            offset_top,
        }
    }
}

/// Lay the page sections out at a uniform height. Handy before the real
/// measurements arrive.
pub fn uniform_layout(section_height: f64) -> Vec<Section> {
    PAGE_SECTIONS
        .iter()
        .enumerate()
        .map(|(i, id)| Section::new(*id, i as f64 * section_height))
        .collect()
}

/// Navigation link: visible label and the section it scrolls to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub target: &'static str,
}

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem { label: "Home", target: "hero" },
    NavItem { label: "About", target: "about" },
    NavItem { label: "Skills", target: "skills" },
    NavItem { label: "Projects", target: "projects" },
    NavItem { label: "Contact", target: "contact" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_items_cover_page_sections() {
        let targets: Vec<&str> = NAV_ITEMS.iter().map(|n| n.target).collect();
        assert_eq!(targets, PAGE_SECTIONS);
    }

    #[test]
    fn test_uniform_layout() {
        let layout = uniform_layout(800.0);
        assert_eq!(layout.len(), 5);
        assert_eq!(layout[0], Section::new("hero", 0.0));
        assert_eq!(layout[4], Section::new("contact", 3200.0));
    }

    #[test]
    fn test_section_id_compares_with_str() {
        let id = SectionId::from("skills");
        assert!(id == "skills");
        assert_eq!(id.to_string(), "skills");
    }
}
