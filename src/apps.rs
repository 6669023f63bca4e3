//! Launcher item model: component identities, intents and deck entries.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of an installed application: the package it ships in plus the
/// entry class inside that package.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComponentName {
    /// Package the application ships in.
    pub package: String,
    /// Entry class inside the package.
    pub class: String,
}

impl ComponentName {
    /// Build a component identity from its two parts.
    pub fn new(package: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            class: class.into(),
        }
    }
}

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.package, self.class)
    }
}

/// Launch request a shortcut carries. Only the fields the deck inspects.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    /// Action verb, e.g. `org.example.mail.COMPOSE`.
    pub action: String,
    /// Explicit component the intent resolves to, when it names one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<ComponentName>,
}

impl Intent {
    /// Intent with an action and no explicit component.
    pub fn for_action(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            component: None,
        }
    }

    /// Pin the intent to an explicit component.
    pub fn with_component(mut self, component: ComponentName) -> Self {
        self.component = Some(component);
        self
    }

    /// Component the intent resolves to, if any.
    pub fn component(&self) -> Option<&ComponentName> {
        self.component.as_ref()
    }
}

/// An application pinned to the deck.
#[derive(Clone, Debug, PartialEq)]
pub struct AppInfo {
    /// Display title.
    pub title: String,
    /// Identity of the installed application.
    pub component: ComponentName,
}

/// A shortcut into an application, launched through its intent.
#[derive(Clone, Debug, PartialEq)]
pub struct ShortcutInfo {
    /// Display title.
    pub title: String,
    /// Launch request the shortcut fires.
    pub intent: Intent,
}

/// A folder of related entries. Carries no single application identity.
#[derive(Clone, Debug, PartialEq)]
pub struct GroupInfo {
    /// Display title.
    pub title: String,
    /// Titles of the entries collected in the group.
    pub members: Vec<String>,
}

/// Descriptor of the thing being dragged across the shell.
#[derive(Clone, Debug, PartialEq)]
pub enum DeckItem {
    /// An application icon.
    App(AppInfo),
    /// A shortcut icon.
    Shortcut(ShortcutInfo),
    /// A group (folder) icon.
    Group(GroupInfo),
}

impl DeckItem {
    /// Display title of the dragged item.
    pub fn title(&self) -> &str {
        match self {
            DeckItem::App(app) => &app.title,
            DeckItem::Shortcut(shortcut) => &shortcut.title,
            DeckItem::Group(group) => &group.title,
        }
    }

    /// Component identifying the item's application, when one can be derived.
    pub fn component(&self) -> Option<&ComponentName> {
        match self {
            DeckItem::App(app) => Some(&app.component),
            DeckItem::Shortcut(shortcut) => shortcut.intent.component(),
            DeckItem::Group(_) => None,
        }
    }
}

/// What a persisted deck slot points at.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeckEntryKind {
    /// Installed application.
    App {
        /// Identity of the application.
        component: ComponentName,
    },
    /// Shortcut launched through an intent.
    Shortcut {
        /// Launch request the shortcut fires.
        intent: Intent,
    },
    /// Folder of related entries.
    Group {
        /// Titles collected in the group.
        #[serde(default)]
        members: Vec<String>,
    },
}

/// One persisted deck slot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeckEntry {
    /// Display title under the tile.
    pub title: String,
    /// Single glyph drawn on the tile.
    #[serde(default = "default_glyph")]
    pub glyph: String,
    /// Tile accent color as RGB.
    #[serde(default = "default_accent")]
    pub accent: [u8; 3],
    /// What the slot points at.
    pub kind: DeckEntryKind,
}

fn default_glyph() -> String {
    "●".into()
}

fn default_accent() -> [u8; 3] {
    [96, 176, 255]
}

impl DeckEntry {
    /// Component identity of the entry, when it has one.
    pub fn component(&self) -> Option<&ComponentName> {
        match &self.kind {
            DeckEntryKind::App { component } => Some(component),
            DeckEntryKind::Shortcut { intent } => intent.component(),
            DeckEntryKind::Group { .. } => None,
        }
    }

    /// Build the drag descriptor for this entry.
    pub fn item(&self) -> DeckItem {
        match &self.kind {
            DeckEntryKind::App { component } => DeckItem::App(AppInfo {
                title: self.title.clone(),
                component: component.clone(),
            }),
            DeckEntryKind::Shortcut { intent } => DeckItem::Shortcut(ShortcutInfo {
                title: self.title.clone(),
                intent: intent.clone(),
            }),
            DeckEntryKind::Group { members } => DeckItem::Group(GroupInfo {
                title: self.title.clone(),
                members: members.clone(),
            }),
        }
    }

    /// True when `item` was built from this entry.
    pub fn matches_item(&self, item: &DeckItem) -> bool {
        self.item() == *item
    }
}
