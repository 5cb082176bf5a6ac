use serde::Deserialize;

/// One outbound download shortcut.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AddonLink {
    pub id: String,
    /// Button caption.
    pub label: String,
    /// Sentence rendered above the button.
    pub description: String,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddonLinkIndex {
    #[serde(default)]
    pub links: Vec<AddonLink>,
}

impl AddonLinkIndex {
    pub fn find(&self, id: &str) -> Option<&AddonLink> {
        self.links.iter().find(|link| link.id == id)
    }
}
