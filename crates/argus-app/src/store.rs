// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use time::OffsetDateTime;

use crate::model::{Section, SectionPage, SectionRecords};

pub const DEFAULT_PER_PAGE: u32 = 10;

/// Cached state for one section: the most recent page only, replaced
/// wholesale on every applied fetch. Never merged or diffed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSlot {
    records: SectionRecords,
    page: u32,
    per_page: u32,
    total_pages: u32,
    loaded: bool,
    fetched_at: Option<OffsetDateTime>,
    issued_seq: u64,
    applied_seq: u64,
}

impl SectionSlot {
    fn new(section: Section, per_page: u32) -> Self {
        Self {
            records: SectionRecords::empty(section),
            page: 1,
            per_page,
            total_pages: 1,
            loaded: false,
            fetched_at: None,
            issued_seq: 0,
            applied_seq: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied,
    /// A newer fetch was issued for the section after this one; the
    /// response is discarded so the latest user intent wins.
    Stale,
}

/// Session-scoped store mapping each section to its cached page.
/// Single writer per section: outcomes are applied on the UI thread
/// and filtered by fetch sequence number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionStore {
    slots: [SectionSlot; 6],
}

impl SectionStore {
    pub fn new(per_page: u32) -> Self {
        Self {
            slots: Section::ALL.map(|section| SectionSlot::new(section, per_page)),
        }
    }

    fn slot(&self, section: Section) -> &SectionSlot {
        &self.slots[section.index()]
    }

    fn slot_mut(&mut self, section: Section) -> &mut SectionSlot {
        &mut self.slots[section.index()]
    }

    /// Current records for a section; the empty collection if never loaded.
    pub fn records(&self, section: Section) -> &SectionRecords {
        &self.slot(section).records
    }

    pub fn loaded(&self, section: Section) -> bool {
        self.slot(section).loaded
    }

    pub fn page(&self, section: Section) -> u32 {
        self.slot(section).page
    }

    pub fn per_page(&self, section: Section) -> u32 {
        self.slot(section).per_page
    }

    pub fn total_pages(&self, section: Section) -> u32 {
        self.slot(section).total_pages
    }

    pub fn fetched_at(&self, section: Section) -> Option<OffsetDateTime> {
        self.slot(section).fetched_at
    }

    /// Issues the sequence number for the next fetch of this section.
    /// Any outcome carrying an older number is rejected by `apply`.
    pub fn begin_fetch(&mut self, section: Section) -> u64 {
        let slot = self.slot_mut(section);
        slot.issued_seq += 1;
        slot.issued_seq
    }

    /// Replaces the section's cache iff `seq` is still the latest
    /// issued fetch. A failed fetch never reaches this point, so the
    /// previous cache stays valid on error.
    pub fn apply(&mut self, section: Section, seq: u64, page: SectionPage) -> ApplyOutcome {
        self.apply_at(section, seq, page, OffsetDateTime::now_utc())
    }

    pub fn apply_at(
        &mut self,
        section: Section,
        seq: u64,
        page: SectionPage,
        now: OffsetDateTime,
    ) -> ApplyOutcome {
        let slot = self.slot_mut(section);
        if seq != slot.issued_seq || seq <= slot.applied_seq {
            return ApplyOutcome::Stale;
        }

        slot.records = page.records;
        slot.page = page.page;
        slot.per_page = page.per_page;
        slot.total_pages = page.total_pages;
        slot.loaded = true;
        slot.fetched_at = Some(now);
        slot.applied_seq = seq;
        ApplyOutcome::Applied
    }
}
