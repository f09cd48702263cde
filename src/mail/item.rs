//! Sendable items: messages and packages.

use serde::{Deserialize, Serialize};

/// Anything that can travel through the mailroom.
///
/// Every variant has a sender and a recipient. Handlers never mutate an
/// item in place; a changed item is a new value passed down the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Item {
    /// A letter carrying plain text.
    Message(MailMessage),
    /// A package with (optional) contents.
    Package(MailPackage),
}

impl Item {
    /// Build a message item.
    pub fn message(from: impl Into<String>, to: impl Into<String>, text: impl Into<String>) -> Self {
        Item::Message(MailMessage::new(from, to, text))
    }

    /// Build a package item.
    pub fn package(from: impl Into<String>, to: impl Into<String>, content: Option<Parcel>) -> Self {
        Item::Package(MailPackage::new(from, to, content))
    }

    /// Who sent the item.
    pub fn sender(&self) -> &str {
        match self {
            Item::Message(m) => &m.from,
            Item::Package(p) => &p.from,
        }
    }

    /// Who the item is addressed to.
    pub fn recipient(&self) -> &str {
        match self {
            Item::Message(m) => &m.to,
            Item::Package(p) => &p.to,
        }
    }

    /// Variant name, matching the serialized `kind` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Item::Message(_) => "message",
            Item::Package(_) => "package",
        }
    }

    pub fn is_message(&self) -> bool {
        matches!(self, Item::Message(_))
    }

    pub fn is_package(&self) -> bool {
        matches!(self, Item::Package(_))
    }
}

/// A letter with a text body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailMessage {
    pub from: String,
    pub to: String,
    pub text: String,
}

impl MailMessage {
    pub fn new(from: impl Into<String>, to: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            text: text.into(),
        }
    }
}

/// A package. `content` is `None` when nothing is attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailPackage {
    pub from: String,
    pub to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Parcel>,
}

impl MailPackage {
    pub fn new(from: impl Into<String>, to: impl Into<String>, content: Option<Parcel>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            content,
        }
    }
}

/// Contents of a package: a textual description and a declared value.
///
/// The declared value is not validated; zero and negative values are
/// accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parcel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub declared_value: i64,
}

impl Parcel {
    /// Create a described parcel.
    pub fn new(description: impl Into<String>, declared_value: i64) -> Self {
        Self {
            description: Some(description.into()),
            declared_value,
        }
    }

    /// Create a parcel with no description.
    pub fn undescribed(declared_value: i64) -> Self {
        Self {
            description: None,
            declared_value,
        }
    }
}
