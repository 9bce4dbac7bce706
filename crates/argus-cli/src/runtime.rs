// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::Result;
use argus_api::{Client, progress_percent};
use argus_app::{Section, SectionPage, UploadOutcome};
use argus_tui::{AppRuntime, FetchOutcome, InternalEvent, UploadEvent};
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use std::thread;

/// Backend-backed runtime. The spawn overrides run each request on its
/// own thread so the UI loop keeps drawing; outcomes come back over
/// the internal event channel.
pub struct HttpRuntime {
    client: Client,
}

impl HttpRuntime {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

fn upload_with_progress(
    client: &Client,
    path: &Path,
    tx: &Sender<InternalEvent>,
) -> Result<UploadOutcome> {
    let progress_tx = tx.clone();
    client.upload(path, move |sent, total| {
        let percent = progress_percent(sent, total);
        let _ = progress_tx.send(InternalEvent::Upload(UploadEvent::Progress { percent }));
    })
}

impl AppRuntime for HttpRuntime {
    fn load_page(&mut self, section: Section, page: u32, per_page: u32) -> Result<SectionPage> {
        self.client.fetch_page(section, page, per_page)
    }

    fn upload(&mut self, path: &Path, tx: &Sender<InternalEvent>) -> Result<UploadOutcome> {
        upload_with_progress(&self.client, path, tx)
    }

    fn spawn_page_load(
        &mut self,
        section: Section,
        seq: u64,
        page: u32,
        per_page: u32,
        tx: Sender<InternalEvent>,
    ) -> Result<()> {
        let client = self.client.clone();
        thread::spawn(move || {
            let outcome = match client.fetch_page(section, page, per_page) {
                Ok(page) => FetchOutcome::Loaded(Box::new(page)),
                Err(error) => FetchOutcome::Failed(format!("{error:#}")),
            };
            let _ = tx.send(InternalEvent::Fetch {
                section,
                seq,
                outcome,
            });
        });
        Ok(())
    }

    fn spawn_upload(&mut self, path: PathBuf, tx: Sender<InternalEvent>) -> Result<()> {
        let client = self.client.clone();
        thread::spawn(move || {
            let event = match upload_with_progress(&client, &path, &tx) {
                Ok(outcome) => InternalEvent::Upload(UploadEvent::Completed {
                    reload_required: outcome.reload_required,
                }),
                Err(error) => InternalEvent::Upload(UploadEvent::Failed {
                    error: format!("{error:#}"),
                }),
            };
            let _ = tx.send(event);
        });
        Ok(())
    }
}
