// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Result, anyhow};
use argus_api::Client;
use argus_app::{Section, SectionRecords};
use argus_testkit::{page_envelope_json, section_records, upload_response_json};
use std::io::Write;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;
use std::time::Duration;
use tiny_http::{Header, Response, Server};

fn json_header() -> Header {
    Header::from_bytes("Content-Type", "application/json").expect("valid content type header")
}

#[test]
fn fetch_error_names_the_unreachable_backend() {
    let client = Client::new("http://127.0.0.1:1", Duration::from_millis(50))
        .expect("client should initialize");

    let error = client
        .fetch_page(Section::Calls, 1, 10)
        .expect_err("fetch should fail for unreachable endpoint");
    let message = error.to_string();
    assert!(message.contains("127.0.0.1:1"));
    assert!(message.contains("backend"));
}

#[test]
fn fetch_page_round_trips_a_contacts_page() -> Result<()> {
    let server =
        Server::http("127.0.0.1:0").map_err(|error| anyhow!("start mock server: {error}"))?;
    let addr = format!("http://{}", server.server_addr());

    let handle = thread::spawn(move || {
        let request = server.recv().expect("request expected");
        assert_eq!(
            request.url(),
            "/get_data?section=contacts&page=1&per_page=10"
        );
        let body = r#"{
            "data": [{"name":"Alice","phone_number":"555-0100","profile_pic":"a.png"}],
            "page": 1, "per_page": 10, "total_pages": 2
        }"#;
        let response = Response::from_string(body)
            .with_status_code(200)
            .with_header(json_header());
        request.respond(response).expect("response should succeed");
    });

    let client = Client::new(&addr, Duration::from_secs(1))?;
    let page = client.fetch_page(Section::Contacts, 1, 10)?;

    assert_eq!(page.page, 1);
    assert_eq!(page.per_page, 10);
    assert_eq!(page.total_pages, 2);
    match page.records {
        SectionRecords::Contacts(rows) => {
            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0].name, "Alice");
            assert_eq!(rows[0].phone_number, "555-0100");
        }
        other => panic!("wrong records variant: {other:?}"),
    }

    handle.join().expect("server thread should join");
    Ok(())
}

#[test]
fn fetch_page_decodes_fixture_envelopes_for_every_section() -> Result<()> {
    let server =
        Server::http("127.0.0.1:0").map_err(|error| anyhow!("start mock server: {error}"))?;
    let addr = format!("http://{}", server.server_addr());

    let handle = thread::spawn(move || {
        for _ in Section::ALL {
            let request = server.recv().expect("request expected");
            let section = Section::ALL
                .into_iter()
                .find(|section| {
                    request
                        .url()
                        .contains(&format!("section={}", section.as_str()))
                })
                .expect("request names a known section");
            let body = page_envelope_json(&section_records(section, 3), 1, 10, 1);
            let response = Response::from_string(body)
                .with_status_code(200)
                .with_header(json_header());
            request.respond(response).expect("response should succeed");
        }
    });

    let client = Client::new(&addr, Duration::from_secs(1))?;
    for section in Section::ALL {
        let page = client.fetch_page(section, 1, 10)?;
        assert_eq!(page.records.section(), section);
        assert_eq!(page.records.len(), 3);
    }

    handle.join().expect("server thread should join");
    Ok(())
}

#[test]
fn server_error_body_surfaces_in_the_message() -> Result<()> {
    let server =
        Server::http("127.0.0.1:0").map_err(|error| anyhow!("start mock server: {error}"))?;
    let addr = format!("http://{}", server.server_addr());

    let handle = thread::spawn(move || {
        let request = server.recv().expect("request expected");
        let response = Response::from_string(r#"{"error":"unknown section"}"#)
            .with_status_code(400)
            .with_header(json_header());
        request.respond(response).expect("response should succeed");
    });

    let client = Client::new(&addr, Duration::from_secs(1))?;
    let error = client
        .fetch_page(Section::Calls, 1, 10)
        .expect_err("400 should fail");
    let message = error.to_string();
    assert!(message.contains("400"));
    assert!(message.contains("unknown section"));

    handle.join().expect("server thread should join");
    Ok(())
}

#[test]
fn malformed_page_body_is_rejected() -> Result<()> {
    let server =
        Server::http("127.0.0.1:0").map_err(|error| anyhow!("start mock server: {error}"))?;
    let addr = format!("http://{}", server.server_addr());

    let handle = thread::spawn(move || {
        let request = server.recv().expect("request expected");
        let response = Response::from_string("<html>not json</html>").with_status_code(200);
        request.respond(response).expect("response should succeed");
    });

    let client = Client::new(&addr, Duration::from_secs(1))?;
    let error = client
        .fetch_page(Section::Keylogs, 1, 10)
        .expect_err("malformed body should fail");
    assert!(error.to_string().contains("keylogs"));

    handle.join().expect("server thread should join");
    Ok(())
}

#[test]
fn upload_streams_the_file_and_reports_progress() -> Result<()> {
    let server =
        Server::http("127.0.0.1:0").map_err(|error| anyhow!("start mock server: {error}"))?;
    let addr = format!("http://{}", server.server_addr());

    let handle = thread::spawn(move || {
        let mut request = server.recv().expect("request expected");
        assert_eq!(request.url(), "/upload");
        let content_type = request
            .headers()
            .iter()
            .find(|header| header.field.equiv("Content-Type"))
            .map(|header| header.value.as_str().to_owned())
            .expect("multipart content type header");
        assert!(content_type.starts_with("multipart/form-data"));

        let mut body = Vec::new();
        std::io::copy(request.as_reader(), &mut body).expect("read upload body");
        let body = String::from_utf8_lossy(&body).into_owned();
        assert!(body.contains("name=\"file\""));
        assert!(body.contains("payload bytes"));

        let response = Response::from_string(upload_response_json(true))
            .with_status_code(200)
            .with_header(json_header());
        request.respond(response).expect("response should succeed");
    });

    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(b"payload bytes")?;
    file.flush()?;

    let reported = Arc::new(AtomicU64::new(0));
    let reported_in_callback = Arc::clone(&reported);

    let client = Client::new(&addr, Duration::from_secs(1))?;
    let outcome = client.upload(file.path(), move |sent, total| {
        assert!(sent <= total);
        reported_in_callback.store(sent, Ordering::SeqCst);
    })?;

    assert!(outcome.reload_required);
    assert_eq!(reported.load(Ordering::SeqCst), b"payload bytes".len() as u64);

    handle.join().expect("server thread should join");
    Ok(())
}

#[test]
fn upload_failure_status_is_an_error() -> Result<()> {
    let server =
        Server::http("127.0.0.1:0").map_err(|error| anyhow!("start mock server: {error}"))?;
    let addr = format!("http://{}", server.server_addr());

    let handle = thread::spawn(move || {
        let mut request = server.recv().expect("request expected");
        let mut body = Vec::new();
        std::io::copy(request.as_reader(), &mut body).expect("read upload body");
        let response = Response::from_string(r#"{"error":"disk full"}"#)
            .with_status_code(500)
            .with_header(json_header());
        request.respond(response).expect("response should succeed");
    });

    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(b"payload")?;
    file.flush()?;

    let client = Client::new(&addr, Duration::from_secs(1))?;
    let error = client
        .upload(file.path(), |_, _| {})
        .expect_err("500 should fail");
    assert!(error.to_string().contains("disk full"));

    handle.join().expect("server thread should join");
    Ok(())
}

#[test]
fn upload_of_a_missing_file_fails_before_any_request() {
    let client = Client::new("http://127.0.0.1:1", Duration::from_millis(50))
        .expect("client should initialize");
    let error = client
        .upload(std::path::Path::new("/nonexistent/upload.bin"), |_, _| {})
        .expect_err("missing file should fail");
    assert!(error.to_string().contains("/nonexistent/upload.bin"));
}
