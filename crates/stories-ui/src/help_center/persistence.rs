use serde::{Deserialize, Serialize};

/// Help-center fields kept in local storage between sessions.
///
/// Missing fields read as defaults; `unread_tips_count` stays `None` until a
/// session has written it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersistedHelpCenter {
    pub is_open: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unread_tips_count: Option<usize>,
}
