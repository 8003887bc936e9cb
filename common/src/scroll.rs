use tracing::debug;

// the vertical extent of a section[id] element, in document coordinates
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    // the top edge is inclusive and the bottom edge exclusive
    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

// scroll spy
//
// tracks which nav link is highlighted.  sections without a matching link are
// ignored, and when several windows contain the position the last one in document
// order wins.  if nothing matches, the previous highlight is kept
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollSpy {
    offset: f64,
    targets: Vec<String>,
    active: Option<String>,
}

impl ScrollSpy {
    pub fn new(offset: f64, targets: impl IntoIterator<Item = String>) -> Self {
        ScrollSpy {
            offset,
            targets: targets.into_iter().collect(),
            active: None,
        }
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_active(&self, target: &str) -> bool {
        self.active.as_deref() == Some(target)
    }

    pub fn link_class(&self, target: &str) -> &'static str {
        if self.is_active(target) {
            "nav-link active"
        } else {
            "nav-link"
        }
    }

    // returns true if the highlighted link changed
    pub fn update<'a>(
        &mut self,
        scroll_y: f64,
        sections: impl IntoIterator<Item = &'a SectionBounds>,
    ) -> bool {
        let position = scroll_y + self.offset;

        let hit = sections
            .into_iter()
            .filter(|s| self.targets.iter().any(|t| *t == s.id))
            .filter(|s| s.contains(position))
            .last();

        match hit {
            Some(section) if !self.is_active(&section.id) => {
                debug!({ section = %section.id, position }, "scroll spy moved");
                self.active = Some(section.id.clone());
                true
            }
            _ => false,
        }
    }
}
