// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::model::Section;

/// Fixed display profile painted by the inspector overlay. These are
/// cosmetic constants per record class, not values read from the
/// record; keylog rows carry no profile and never open the inspector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleProfile {
    pub element: &'static str,
    pub x: &'static str,
    pub y: &'static str,
    pub width: &'static str,
    pub height: &'static str,
    pub font_family: &'static str,
    pub font_size: &'static str,
    pub line_height: &'static str,
    pub text_align: &'static str,
    pub letter_spacing: &'static str,
    pub fill: &'static str,
}

const FONT_FAMILY: &str = "Helvetica, Arial, sans-serif";
const FONT_SIZE: &str = "12px";
const LINE_HEIGHT: &str = "16.08px";
const TEXT_ALIGN: &str = "start";
const LETTER_SPACING: &str = "normal";

pub const fn style_profile(section: Section) -> Option<StyleProfile> {
    let profile = match section {
        Section::Conversations => StyleProfile {
            element: "chat",
            x: "auto",
            y: "auto",
            width: "auto",
            height: "auto",
            font_family: FONT_FAMILY,
            font_size: FONT_SIZE,
            line_height: LINE_HEIGHT,
            text_align: TEXT_ALIGN,
            letter_spacing: LETTER_SPACING,
            fill: "#65676b",
        },
        Section::Calls => StyleProfile {
            element: "call",
            x: "auto",
            y: "auto",
            width: "auto",
            height: "auto",
            font_family: FONT_FAMILY,
            font_size: FONT_SIZE,
            line_height: LINE_HEIGHT,
            text_align: TEXT_ALIGN,
            letter_spacing: LETTER_SPACING,
            fill: "#385898",
        },
        Section::Keylogs => return None,
        Section::Contacts => StyleProfile {
            element: "contact",
            x: "32",
            y: "32",
            width: "32px",
            height: "32px",
            font_family: FONT_FAMILY,
            font_size: FONT_SIZE,
            line_height: LINE_HEIGHT,
            text_align: TEXT_ALIGN,
            letter_spacing: LETTER_SPACING,
            fill: "#1c1e21",
        },
        Section::Messages => StyleProfile {
            element: "sms",
            x: "auto",
            y: "auto",
            width: "auto",
            height: "auto",
            font_family: FONT_FAMILY,
            font_size: FONT_SIZE,
            line_height: LINE_HEIGHT,
            text_align: TEXT_ALIGN,
            letter_spacing: LETTER_SPACING,
            fill: "#1c1e21",
        },
        Section::InstalledApps => StyleProfile {
            element: "app",
            x: "20",
            y: "20",
            width: "20px",
            height: "20px",
            font_family: FONT_FAMILY,
            font_size: FONT_SIZE,
            line_height: LINE_HEIGHT,
            text_align: TEXT_ALIGN,
            letter_spacing: LETTER_SPACING,
            fill: "#65676b",
        },
    };
    Some(profile)
}
