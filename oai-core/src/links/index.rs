use super::types::AddonLinkIndex;
use anyhow::{bail, Context};
use once_cell::sync::Lazy;
use std::path::Path;

pub static ADDON_LINKS: Lazy<anyhow::Result<AddonLinkIndex>> = Lazy::new(|| {
    let index = include_str!("../../../docs/addon-links.toml");
    parse_links(index).context("failed to parse docs/addon-links.toml (addon link index)")
});

pub fn addon_links() -> anyhow::Result<&'static AddonLinkIndex> {
    ADDON_LINKS
        .as_ref()
        .map_err(|err| anyhow::anyhow!("{:#}", err))
}

pub fn parse_links(toml_text: &str) -> anyhow::Result<AddonLinkIndex> {
    let index: AddonLinkIndex =
        toml::from_str(toml_text).context("failed to parse addon link TOML")?;
    for link in &index.links {
        if !link.url.starts_with("https://") && !link.url.starts_with("http://") {
            bail!("addon link '{}' has a non-http URL: {}", link.id, link.url);
        }
    }
    Ok(index)
}

pub fn load_links(path: &Path) -> anyhow::Result<AddonLinkIndex> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read addon link file: {}", path.display()))?;
    parse_links(&content).with_context(|| format!("Invalid addon link file: {}", path.display()))
}
