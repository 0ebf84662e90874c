/// Local-storage key of the persisted help-center blob.
pub const DEFAULT_STORAGE_KEY: &str = "web_stories_help_center";

/// Help-center settings fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpCenterConfig {
    pub storage_key: String,
    /// Never auto-open after hydration. Defaults to the build-time
    /// `STORIES_DISABLE_QUICK_TIPS` flag.
    pub disable_quick_tips: bool,
}

impl Default for HelpCenterConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            disable_quick_tips: flag_set(option_env!("STORIES_DISABLE_QUICK_TIPS")),
        }
    }
}

fn flag_set(value: Option<&str>) -> bool {
    matches!(value.map(str::trim), Some(v) if !v.is_empty() && v != "0" && !v.eq_ignore_ascii_case("false"))
}
