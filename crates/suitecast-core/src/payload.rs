//! Notification payload wire types (Slack legacy attachments).

use serde::{Deserialize, Serialize};

/// Root payload: bold title plus ordered attachment blocks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotificationPayload {
    pub text: String,

    pub attachments: Vec<Attachment>,
}

/// Status color of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Good,
    Danger,
}

/// One visually distinct section of a notification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Members rendered as markdown (`"text"`, `"fields"`).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mrkdwn_in: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<Field>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
}

/// A titled (or bare) value inside a block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    pub value: String,

    /// Render side by side with the neighbouring short field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short: Option<bool>,
}

impl Field {
    pub fn titled(title: impl Into<String>, value: impl Into<String>, short: bool) -> Self {
        Self {
            title: Some(title.into()),
            value: value.into(),
            short: Some(short),
        }
    }

    pub fn bare(value: impl Into<String>) -> Self {
        Self {
            title: None,
            value: value.into(),
            short: None,
        }
    }
}

impl Attachment {
    /// Look up a field by title.
    pub fn field(&self, title: &str) -> Option<&Field> {
        self.fields
            .iter()
            .find(|f| f.title.as_deref() == Some(title))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_members_omitted() {
        let att = Attachment {
            fallback: Some("links".into()),
            footer: Some("<a|b>".into()),
            ..Default::default()
        };
        let json = serde_json::to_value(&att).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"fallback": "links", "footer": "<a|b>"})
        );
    }

    #[test]
    fn test_color_serializes_lowercase() {
        let att = Attachment {
            color: Some(Color::Danger),
            fields: vec![Field::bare("x")],
            ..Default::default()
        };
        let json = serde_json::to_value(&att).unwrap();
        assert_eq!(json["color"], "danger");
        assert_eq!(json["fields"][0], serde_json::json!({"value": "x"}));
    }
}
