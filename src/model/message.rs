use serde::{Deserialize, Serialize};

/// One component of a chat message.
///
/// Commands and quotes store their text as an ordered sequence of components
/// (`text`, `emoji`, `tag`, `url`, `variable`). The backend treats the
/// sequence as opaque: components are stored and returned as-is, and the
/// mutation engine never inspects them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageComponent {
    /// Component kind, e.g. `"text"` or `"emoji"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Component payload. For `text` this is the raw text; for `emoji` the
    /// alpha code; for `variable` the variable expression.
    pub data: String,
}
