// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

//! Deterministic fixtures for the other crates' tests: section records
//! with stable, index-derived field values, plus the JSON envelopes a
//! mock backend serves them in.

use argus_app::{
    CallEntry, Contact, InstalledApp, KeylogEntry, MessageThread, Section, SectionRecords,
    ThreadMessage,
};
use serde_json::{Value, json};

const FIRST_NAMES: [&str; 12] = [
    "Avery", "Jordan", "Taylor", "Riley", "Morgan", "Casey", "Alex", "Quinn", "Parker", "Drew",
    "Kai", "Elliot",
];
const LAST_NAMES: [&str; 10] = [
    "Walker", "Martin", "Hill", "Evans", "Lopez", "Gray", "Ward", "Young", "Diaz", "Reed",
];
const APPLICATIONS: [&str; 6] = ["Mail", "Browser", "Notes", "Camera", "Maps", "Terminal"];

pub fn person_name(index: usize) -> String {
    format!(
        "{} {}",
        FIRST_NAMES[index % FIRST_NAMES.len()],
        LAST_NAMES[index % LAST_NAMES.len()],
    )
}

pub fn thread(index: usize, message_count: usize) -> MessageThread {
    let messages = (0..message_count)
        .map(|offset| ThreadMessage {
            sender: if offset % 2 == 0 {
                person_name(index)
            } else {
                "me".to_owned()
            },
            content: format!("message {offset} in thread {index}"),
        })
        .collect::<Vec<_>>();
    let last_message = messages
        .last()
        .map(|message| message.content.clone())
        .unwrap_or_default();

    MessageThread {
        name: person_name(index),
        profile_pic: format!("avatar-{index}.png"),
        last_message,
        messages,
    }
}

pub fn call(index: usize) -> CallEntry {
    CallEntry {
        name: person_name(index),
        profile_pic: format!("avatar-{index}.png"),
        time: format!("2026-02-{:02} 09:{:02}", (index % 27) + 1, index % 60),
    }
}

pub fn keylog(index: usize) -> KeylogEntry {
    KeylogEntry {
        application: APPLICATIONS[index % APPLICATIONS.len()].to_owned(),
        time: format!("2026-02-{:02} 14:{:02}", (index % 27) + 1, index % 60),
        text: format!("typed text {index}"),
    }
}

pub fn contact(index: usize) -> Contact {
    Contact {
        name: person_name(index),
        profile_pic: format!("avatar-{index}.png"),
        phone_number: format!("555-{:04}", 100 + index),
    }
}

pub fn installed_app(index: usize) -> InstalledApp {
    InstalledApp {
        name: format!("App {index}"),
        icon: format!("icon-{index}.png"),
        version: format!("1.{index}.0"),
    }
}

/// `count` records for any section, fields derived from the index.
pub fn section_records(section: Section, count: usize) -> SectionRecords {
    match section {
        Section::Conversations => {
            SectionRecords::Conversations((0..count).map(|index| thread(index, 3)).collect())
        }
        Section::Calls => SectionRecords::Calls((0..count).map(call).collect()),
        Section::Keylogs => SectionRecords::Keylogs((0..count).map(keylog).collect()),
        Section::Contacts => SectionRecords::Contacts((0..count).map(contact).collect()),
        Section::Messages => {
            SectionRecords::Messages((0..count).map(|index| thread(index, 2)).collect())
        }
        Section::InstalledApps => {
            SectionRecords::InstalledApps((0..count).map(installed_app).collect())
        }
    }
}

fn records_value(records: &SectionRecords) -> Value {
    match records {
        SectionRecords::Conversations(rows) | SectionRecords::Messages(rows) => json!(rows),
        SectionRecords::Calls(rows) => json!(rows),
        SectionRecords::Keylogs(rows) => json!(rows),
        SectionRecords::Contacts(rows) => json!(rows),
        SectionRecords::InstalledApps(rows) => json!(rows),
    }
}

/// The paged response body a backend serves for `/get_data`.
pub fn page_envelope_json(
    records: &SectionRecords,
    page: u32,
    per_page: u32,
    total_pages: u32,
) -> String {
    json!({
        "data": records_value(records),
        "page": page,
        "per_page": per_page,
        "total_pages": total_pages,
    })
    .to_string()
}

/// The response body a backend serves for `/upload`.
pub fn upload_response_json(reload_required: bool) -> String {
    json!({ "reload_required": reload_required }).to_string()
}

#[cfg(test)]
mod tests {
    use super::{page_envelope_json, person_name, section_records};
    use argus_app::Section;

    #[test]
    fn fixtures_are_deterministic() {
        assert_eq!(person_name(0), person_name(0));
        let first = section_records(Section::Contacts, 4);
        let second = section_records(Section::Contacts, 4);
        assert_eq!(first, second);
    }

    #[test]
    fn envelope_round_trips_through_the_wire_shape() {
        let records = section_records(Section::Keylogs, 2);
        let body = page_envelope_json(&records, 1, 10, 1);
        let parsed: serde_json::Value = serde_json::from_str(&body).expect("valid JSON");
        assert_eq!(parsed["page"], 1);
        assert_eq!(parsed["data"].as_array().map(Vec::len), Some(2));
        assert!(parsed["data"][0]["application"].is_string());
    }
}
