// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::model::Section;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFocus {
    List,
    Search,
    Upload,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub active_section: Section,
    pub focus: InputFocus,
    pub status_line: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            active_section: Section::Conversations,
            focus: InputFocus::List,
            status_line: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    NextSection,
    PrevSection,
    ActivateSection(Section),
    FocusSearch,
    FocusUpload,
    FocusList,
    SetStatus(String),
    ClearStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    SectionChanged(Section),
    FocusChanged(InputFocus),
    StatusUpdated(String),
    StatusCleared,
}

impl AppState {
    pub fn dispatch(&mut self, command: AppCommand) -> Vec<AppEvent> {
        match command {
            AppCommand::NextSection => self.rotate_section(1),
            AppCommand::PrevSection => self.rotate_section(-1),
            AppCommand::ActivateSection(section) => {
                let mut events = Vec::new();
                if section != self.active_section {
                    self.active_section = section;
                    events.push(AppEvent::SectionChanged(section));
                }
                events.extend(self.set_focus(InputFocus::List));
                events
            }
            AppCommand::FocusSearch => self.set_focus(InputFocus::Search),
            AppCommand::FocusUpload => self.set_focus(InputFocus::Upload),
            AppCommand::FocusList => self.set_focus(InputFocus::List),
            AppCommand::SetStatus(message) => {
                self.status_line = Some(message.clone());
                vec![AppEvent::StatusUpdated(message)]
            }
            AppCommand::ClearStatus => {
                self.status_line = None;
                vec![AppEvent::StatusCleared]
            }
        }
    }

    fn rotate_section(&mut self, delta: isize) -> Vec<AppEvent> {
        let sections = Section::ALL;
        let current = self.active_section.index() as isize;
        let len = sections.len() as isize;
        let next = (current + delta).rem_euclid(len) as usize;
        self.active_section = sections[next];
        let mut events = vec![AppEvent::SectionChanged(self.active_section)];
        events.extend(self.set_focus(InputFocus::List));
        events
    }

    fn set_focus(&mut self, focus: InputFocus) -> Vec<AppEvent> {
        if self.focus == focus {
            return Vec::new();
        }
        self.focus = focus;
        vec![AppEvent::FocusChanged(focus)]
    }
}
