// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    Conversations,
    Calls,
    Keylogs,
    Contacts,
    Messages,
    InstalledApps,
}

impl Section {
    pub const ALL: [Self; 6] = [
        Self::Conversations,
        Self::Calls,
        Self::Keylogs,
        Self::Contacts,
        Self::Messages,
        Self::InstalledApps,
    ];

    /// Wire name used in `/get_data?section=...` and render-target ids.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Conversations => "conversations",
            Self::Calls => "calls",
            Self::Keylogs => "keylogs",
            Self::Contacts => "contacts",
            Self::Messages => "messages",
            Self::InstalledApps => "installed_apps",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "conversations" => Some(Self::Conversations),
            "calls" => Some(Self::Calls),
            "keylogs" => Some(Self::Keylogs),
            "contacts" => Some(Self::Contacts),
            "messages" => Some(Self::Messages),
            "installed_apps" => Some(Self::InstalledApps),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Conversations => "convos",
            Self::Calls => "calls",
            Self::Keylogs => "keylogs",
            Self::Contacts => "contacts",
            Self::Messages => "messages",
            Self::InstalledApps => "apps",
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Conversations => 0,
            Self::Calls => 1,
            Self::Keylogs => 2,
            Self::Contacts => 3,
            Self::Messages => 4,
            Self::InstalledApps => 5,
        }
    }

    pub const fn policy(self) -> SectionPolicy {
        match self {
            Self::Conversations => SectionPolicy {
                template: SectionTemplate::ThreadCard,
                overlay: Some(ThreadOverlayKind::Conversation),
            },
            Self::Calls => SectionPolicy {
                template: SectionTemplate::CallCard,
                overlay: None,
            },
            Self::Keylogs => SectionPolicy {
                template: SectionTemplate::KeylogTable,
                overlay: None,
            },
            Self::Contacts => SectionPolicy {
                template: SectionTemplate::ContactCard,
                overlay: None,
            },
            Self::Messages => SectionPolicy {
                template: SectionTemplate::ThreadCard,
                overlay: Some(ThreadOverlayKind::Message),
            },
            Self::InstalledApps => SectionPolicy {
                template: SectionTemplate::AppCard,
                overlay: None,
            },
        }
    }

    /// Container identity for the section's list pane.
    pub fn list_target(self) -> String {
        match self.policy().template {
            SectionTemplate::KeylogTable => format!("{}-table", self.as_str()),
            _ => format!("{}-list", self.as_str()),
        }
    }

    pub fn search_target(self) -> String {
        format!("search-results-{}", self.as_str())
    }

    pub fn pagination_target(self) -> String {
        format!("pagination-{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionTemplate {
    /// Table row: application, time, text. Not selectable.
    KeylogTable,
    /// Card with picture, name, last-message preview. Opens a thread overlay.
    ThreadCard,
    /// Card with picture, name, time.
    CallCard,
    /// Card with picture, name, phone number.
    ContactCard,
    /// Card with icon, name, version.
    AppCard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreadOverlayKind {
    Conversation,
    Message,
}

impl ThreadOverlayKind {
    pub const fn title(self) -> &'static str {
        match self {
            Self::Conversation => "conversation",
            Self::Message => "messages",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionPolicy {
    pub template: SectionTemplate,
    pub overlay: Option<ThreadOverlayKind>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ThreadMessage {
    #[serde(default)]
    pub sender: String,
    #[serde(default)]
    pub content: String,
}

/// One conversation or text-message thread. The backend sends the same
/// shape for both sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MessageThread {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub profile_pic: String,
    #[serde(default)]
    pub last_message: String,
    #[serde(default)]
    pub messages: Vec<ThreadMessage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CallEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub profile_pic: String,
    #[serde(default)]
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct KeylogEntry {
    #[serde(default)]
    pub application: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Contact {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub profile_pic: String,
    #[serde(default)]
    pub phone_number: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct InstalledApp {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub version: String,
}

/// The typed record vector for one section. Matching on the variant is
/// the only way to reach the rows, so a page can never be rendered
/// under the wrong section template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionRecords {
    Conversations(Vec<MessageThread>),
    Calls(Vec<CallEntry>),
    Keylogs(Vec<KeylogEntry>),
    Contacts(Vec<Contact>),
    Messages(Vec<MessageThread>),
    InstalledApps(Vec<InstalledApp>),
}

impl SectionRecords {
    pub fn empty(section: Section) -> Self {
        match section {
            Section::Conversations => Self::Conversations(Vec::new()),
            Section::Calls => Self::Calls(Vec::new()),
            Section::Keylogs => Self::Keylogs(Vec::new()),
            Section::Contacts => Self::Contacts(Vec::new()),
            Section::Messages => Self::Messages(Vec::new()),
            Section::InstalledApps => Self::InstalledApps(Vec::new()),
        }
    }

    pub const fn section(&self) -> Section {
        match self {
            Self::Conversations(_) => Section::Conversations,
            Self::Calls(_) => Section::Calls,
            Self::Keylogs(_) => Section::Keylogs,
            Self::Contacts(_) => Section::Contacts,
            Self::Messages(_) => Section::Messages,
            Self::InstalledApps(_) => Section::InstalledApps,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Conversations(rows) | Self::Messages(rows) => rows.len(),
            Self::Calls(rows) => rows.len(),
            Self::Keylogs(rows) => rows.len(),
            Self::Contacts(rows) => rows.len(),
            Self::InstalledApps(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The field the search filter matches against: `name` where the
    /// record has one, `application` for keylogs.
    pub fn search_field(&self, index: usize) -> Option<&str> {
        match self {
            Self::Conversations(rows) | Self::Messages(rows) => {
                rows.get(index).map(|row| row.name.as_str())
            }
            Self::Calls(rows) => rows.get(index).map(|row| row.name.as_str()),
            Self::Keylogs(rows) => rows.get(index).map(|row| row.application.as_str()),
            Self::Contacts(rows) => rows.get(index).map(|row| row.name.as_str()),
            Self::InstalledApps(rows) => rows.get(index).map(|row| row.name.as_str()),
        }
    }

    /// Thread data for the overlay, for sections that have one.
    pub fn thread(&self, index: usize) -> Option<&MessageThread> {
        match self {
            Self::Conversations(rows) | Self::Messages(rows) => rows.get(index),
            _ => None,
        }
    }
}

/// One page of a section as returned by the backend, already decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionPage {
    pub records: SectionRecords,
    pub page: u32,
    pub per_page: u32,
    pub total_pages: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadOutcome {
    pub reload_required: bool,
}
