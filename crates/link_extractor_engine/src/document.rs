use serde::Deserialize;
use serde_json::{Map, Value};

/// Fragment `type` that marks a hyperlink.
pub const LINK_FRAGMENT_TYPE: &str = "link";

/// Root object of a chat export. A missing `messages` field means no messages.
///
/// Only JSON objects decode into this, [`Message`] and [`TypedFragment`];
/// arrays are rejected instead of being read positionally.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct ExportDocument {
    pub messages: Vec<Message>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Message {
    pub text: MessageText,
}

/// A message body: either a plain string or a sequence of fragments.
/// Anything else (including a missing field) decodes to `Other`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum MessageText {
    Plain(String),
    Fragments(Vec<TextFragment>),
    Other(Value),
}

impl Default for MessageText {
    fn default() -> Self {
        MessageText::Other(Value::Null)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TextFragment {
    Plain(String),
    Typed(TypedFragment),
    Other(Value),
}

/// Fragment object with a string `type`. `text` is kept only when it is a string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct TypedFragment {
    pub kind: String,
    pub text: Option<String>,
}

impl TryFrom<Map<String, Value>> for ExportDocument {
    type Error = String;

    fn try_from(mut object: Map<String, Value>) -> Result<Self, Self::Error> {
        let messages = match object.remove("messages") {
            Some(value) => serde_json::from_value(value).map_err(|e| format!("messages: {e}"))?,
            None => Vec::new(),
        };
        Ok(Self { messages })
    }
}

impl TryFrom<Map<String, Value>> for Message {
    type Error = String;

    fn try_from(mut object: Map<String, Value>) -> Result<Self, Self::Error> {
        let text = match object.remove("text") {
            Some(value) => serde_json::from_value(value).map_err(|e| format!("text: {e}"))?,
            None => MessageText::default(),
        };
        Ok(Self { text })
    }
}

impl TryFrom<Map<String, Value>> for TypedFragment {
    type Error = String;

    fn try_from(mut object: Map<String, Value>) -> Result<Self, Self::Error> {
        let kind = match object.remove("type") {
            Some(Value::String(kind)) => kind,
            _ => return Err("fragment has no string `type`".to_string()),
        };
        let text = match object.remove("text") {
            Some(Value::String(text)) => Some(text),
            _ => None,
        };
        Ok(Self { kind, text })
    }
}

impl ExportDocument {
    pub fn parse(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    /// Texts of every link fragment, in document order (duplicates included).
    pub fn link_texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.messages.iter().flat_map(|message| message.link_texts())
    }
}

impl Message {
    pub fn link_texts(&self) -> impl Iterator<Item = &str> + '_ {
        let fragments: &[TextFragment] = match &self.text {
            MessageText::Fragments(fragments) => fragments,
            MessageText::Plain(_) | MessageText::Other(_) => &[],
        };
        fragments.iter().filter_map(TextFragment::link_text)
    }
}

impl TextFragment {
    pub fn link_text(&self) -> Option<&str> {
        match self {
            TextFragment::Typed(fragment) if fragment.kind == LINK_FRAGMENT_TYPE => {
                fragment.text.as_deref()
            }
            _ => None,
        }
    }
}
