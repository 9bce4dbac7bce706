// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

/// Prev/next controls for one section's pagination strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationControls {
    pub prev_enabled: bool,
    pub next_enabled: bool,
    pub label: String,
}

/// Returns the controls for the current page, or `None` when a single
/// page exists and no controls render at all.
pub fn controls(page: u32, total_pages: u32) -> Option<PaginationControls> {
    if total_pages <= 1 {
        return None;
    }

    Some(PaginationControls {
        prev_enabled: page > 1,
        next_enabled: page < total_pages,
        label: format!("Page {page} of {total_pages}"),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStep {
    Previous,
    Next,
}

/// The page a step would load, clamped to `[1, total_pages]`. `None`
/// when the step is disabled at the current position.
pub fn step_target(page: u32, total_pages: u32, step: PageStep) -> Option<u32> {
    match step {
        PageStep::Previous if page > 1 => Some(page - 1),
        PageStep::Next if page < total_pages => Some(page + 1),
        _ => None,
    }
}
