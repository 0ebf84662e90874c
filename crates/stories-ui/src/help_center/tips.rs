use serde::{Deserialize, Serialize};

/// Flow entry that closes every dynamically built navigation flow.
pub const DONE_TIP_ENTRY: &str = "done";

/// One quick tip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tip {
    pub title: String,
    pub description: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub figure_src: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl Tip {
    pub fn new(title: impl Into<String>, description: &[&str]) -> Self {
        Self {
            title: title.into(),
            description: description.iter().map(|s| s.to_string()).collect(),
            figure_src: None,
            href: None,
        }
    }

    pub fn with_figure(mut self, src: impl Into<String>) -> Self {
        self.figure_src = Some(src.into());
        self
    }

    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }
}

/// Ordered tip-key → tip map.
///
/// Order is the menu order and the order of the default navigation flow.
/// Keys are unique; adding an existing key replaces that tip in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TipCatalog {
    entries: Vec<(String, Tip)>,
}

impl TipCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in quick tips.
    pub fn quick_tips() -> Self {
        Self::new()
            .with_tip(
                "addBackgroundMedia",
                Tip::new(
                    "Add background media",
                    &["Drag your image or video to a page's edge to set it as the background."],
                )
                .with_figure("images/help-center/add_bg_module_1"),
            )
            .with_tip(
                "cropSelectedElements",
                Tip::new(
                    "Crop selected elements",
                    &["Double-click an image or video to crop it. Drag the handles to resize."],
                )
                .with_figure("images/help-center/media_edit_module_1"),
            )
            .with_tip(
                "cropElementsWithShapes",
                Tip::new(
                    "Crop elements with shapes",
                    &["Drop an image or video onto a shape to use the shape as a mask."],
                )
                .with_figure("images/help-center/media_edit_mask_1"),
            )
            .with_tip(
                "previewStory",
                Tip::new(
                    "Preview your story",
                    &["Open the preview to see your story the way readers will."],
                ),
            )
            .with_tip(
                "safeZone",
                Tip::new(
                    "Stay in the safe zone",
                    &["Keep text and important content inside the dashed area so it is never cropped."],
                )
                .with_figure("images/help-center/safe_zone_module_1"),
            )
            .with_tip(
                "storyAnimations",
                Tip::new(
                    "Animate your story",
                    &["Select an element and pick an animation in the Animation panel."],
                )
                .with_href("https://wp.stories.google/docs/"),
            )
    }

    /// Appends `tip` under `key`, replacing an existing tip with that key.
    pub fn with_tip(mut self, key: impl Into<String>, tip: Tip) -> Self {
        self.insert(key.into(), tip);
        self
    }

    /// Appends host-provided tips after the existing ones.
    pub fn with_additional(mut self, additional: impl IntoIterator<Item = (String, Tip)>) -> Self {
        for (key, tip) in additional {
            self.insert(key, tip);
        }
        self
    }

    fn insert(&mut self, key: String, tip: Tip) {
        if key == DONE_TIP_ENTRY {
            log::warn!("tip key '{key}' is reserved; skipped");
            return;
        }
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = tip,
            None => self.entries.push((key, tip)),
        }
    }

    pub fn keys(&self) -> Vec<String> {
        self.entries.iter().map(|(k, _)| k.clone()).collect()
    }

    pub fn get(&self, key: &str) -> Option<&Tip> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, t)| t)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Tip)> {
        self.entries.iter().map(|(k, t)| (k.as_str(), t))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quick_tips_keep_declaration_order() {
        let keys = TipCatalog::quick_tips().keys();
        assert_eq!(keys.first().map(String::as_str), Some("addBackgroundMedia"));
        assert_eq!(keys.len(), 6);
    }

    #[test]
    fn additional_tips_append_or_replace() {
        let catalog = TipCatalog::new()
            .with_tip("a", Tip::new("A", &[]))
            .with_additional([
                ("b".to_string(), Tip::new("B", &[])),
                ("a".to_string(), Tip::new("A2", &[])),
            ]);
        assert_eq!(catalog.keys(), vec!["a", "b"]);
        assert_eq!(catalog.get("a").map(|t| t.title.as_str()), Some("A2"));
    }

    #[test]
    fn done_key_is_reserved() {
        let catalog = TipCatalog::new().with_tip(DONE_TIP_ENTRY, Tip::new("x", &[]));
        assert!(catalog.is_empty());
    }

    #[test]
    fn tip_json_uses_camel_case() {
        let tip = Tip::new("T", &["line"]).with_figure("f.png");
        let json = serde_json::to_value(&tip).unwrap();
        assert_eq!(json["figureSrc"], "f.png");
        assert!(json.get("href").is_none());
    }
}
