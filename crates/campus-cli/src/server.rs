//! Read-only web view over the summary tables.
//!
//! One blocking `tiny_http` loop. Every request reruns the whole pipeline
//! from the source files, so edits to the files show up on reload.

use anyhow::anyhow;
use campus_config::CampusConfig;
use campus_engine::{EngineError, University};
use tiny_http::{Header, Response, Server};

use crate::cli::ReportSection;
use crate::output::html;
use crate::output::report::{TitledTable, instructor_table, major_table, report_tables, student_table};

/// Status, content type, and body of one response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
}

const HTML: &str = "text/html; charset=utf-8";
const JSON: &str = "application/json";
const TEXT: &str = "text/plain; charset=utf-8";

impl Reply {
    fn html(title: &str, tables: &[TitledTable]) -> Self {
        Self {
            status: 200,
            content_type: HTML,
            body: html::render_page(title, tables),
        }
    }

    fn not_found(path: &str) -> Self {
        Self {
            status: 404,
            content_type: TEXT,
            body: format!("not found: {path}\n"),
        }
    }

    fn error(status: u16, error: &dyn std::error::Error) -> Self {
        let mut body = error.to_string();
        let mut source = error.source();
        while let Some(cause) = source {
            body.push_str(": ");
            body.push_str(&cause.to_string());
            source = cause.source();
        }
        body.push('\n');
        Self {
            status,
            content_type: TEXT,
            body,
        }
    }
}

enum Route {
    Page(Option<ReportSection>),
    ApiReport,
}

fn parse_route(path: &str) -> Option<Route> {
    match path {
        "/" => Some(Route::Page(None)),
        "/students" => Some(Route::Page(Some(ReportSection::Students))),
        "/instructors" => Some(Route::Page(Some(ReportSection::Instructors))),
        "/majors" => Some(Route::Page(Some(ReportSection::Majors))),
        "/api/report" => Some(Route::ApiReport),
        _ => None,
    }
}

/// Answer a request for `url`, loading the university only for known routes.
pub fn respond(url: &str, load: impl FnOnce() -> Result<University, EngineError>) -> Reply {
    let path = url.split('?').next().unwrap_or(url);
    let Some(route) = parse_route(path) else {
        return Reply::not_found(path);
    };

    let university = match load() {
        Ok(university) => university,
        Err(error) => {
            tracing::warn!(%error, path, "failed to load university");
            return Reply::error(500, &error);
        }
    };
    let report = university.report();

    match route {
        Route::Page(None) => Reply::html("University", &report_tables(report, None)),
        Route::Page(Some(ReportSection::Students)) => {
            Reply::html("Students", &[student_table(&report.students)])
        }
        Route::Page(Some(ReportSection::Instructors)) => {
            Reply::html("Instructors", &[instructor_table(&report.instructors)])
        }
        Route::Page(Some(ReportSection::Majors)) => {
            Reply::html("Majors", &[major_table(&report.majors)])
        }
        Route::ApiReport => match serde_json::to_string_pretty(report) {
            Ok(body) => Reply {
                status: 200,
                content_type: JSON,
                body,
            },
            Err(error) => Reply::error(500, &error),
        },
    }
}

/// Serve until the process is stopped.
///
/// # Errors
///
/// Returns an error if `addr` cannot be bound.
pub fn serve(config: &CampusConfig, addr: &str) -> anyhow::Result<()> {
    let server =
        Server::http(addr).map_err(|error| anyhow!("failed to bind web view to {addr}: {error}"))?;
    eprintln!("Serving campus report on http://{addr}/");
    tracing::info!(addr, "web view started");

    loop {
        let request = match server.recv() {
            Ok(request) => request,
            Err(error) => {
                tracing::warn!(%error, "failed to receive request");
                continue;
            }
        };

        let reply = respond(request.url(), || University::from_config(config));
        tracing::debug!(url = request.url(), status = reply.status, "request handled");

        let content_type = Header::from_bytes("Content-Type", reply.content_type)
            .map_err(|()| anyhow!("invalid content type: {}", reply.content_type))?;
        let response = Response::from_string(reply.body)
            .with_status_code(reply.status)
            .with_header(content_type);
        if let Err(error) = request.respond(response) {
            tracing::warn!(%error, "failed to send response");
        }
    }
}
