//! Development server with a local lead-capture endpoint.
//!
//! Every page request re-resolves the config (mtime check) and renders
//! fresh, so `landing.json` edits show up on reload. A relative
//! `formAction` is handled here: the POST drives the submission tracker
//! and redirects to the thank-you page. Invalid configs degrade to the
//! template with an error banner instead of killing the server.

mod response;

use crate::cli::build::{render_index, resolve_theme, runtime_js};
use crate::config::{ConfigDiagnostics, Landing, ThemeMode, cfg, reload_config};
use crate::core::state;
use crate::dom::{Document, Element};
use crate::embed::css::STYLE_CSS;
use crate::embed::page;
use crate::form::{EventSink, FALLBACK_DELAY, FallbackDecision, NoopSink, SubmissionTracker};
use crate::populate::RenderTarget;
use crate::utils::mime::types;
use crate::widgets::utm;
use crate::{debug, log};
use anyhow::{Context, Result};
use percent_encoding::percent_decode_str;
use std::io::Read;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tiny_http::{Method, Request, Server};

const MAX_PORT_RETRIES: u16 = 10;

/// Upper bound on lead form bodies.
const MAX_BODY_BYTES: u64 = 64 * 1024;

/// Bind, register for shutdown, and run the request loop (blocking).
pub fn serve(interface: IpAddr, port: u16) -> Result<()> {
    let (server, addr) = bind_with_retry(interface, port)?;
    let server = Arc::new(server);
    state::register_server(Arc::clone(&server));
    state::set_serving();

    log!("serve"; "http://{}", addr);
    run_request_loop(&server);
    log!("serve"; "stopped");
    Ok(())
}

/// Try consecutive ports when the requested one is taken.
fn bind_with_retry(interface: IpAddr, base_port: u16) -> Result<(Server, SocketAddr)> {
    for offset in 0..MAX_PORT_RETRIES {
        let port = base_port.saturating_add(offset);
        let addr = SocketAddr::new(interface, port);

        match Server::http(addr) {
            Ok(server) => {
                if offset > 0 {
                    log!("serve"; "port {} in use, using {} instead", base_port, port);
                }
                return Ok((server, addr));
            }
            Err(_) if offset + 1 < MAX_PORT_RETRIES => continue,
            Err(e) => {
                return Err(anyhow::anyhow!(
                    "failed to bind after {} attempts (ports {}-{}): {}",
                    MAX_PORT_RETRIES,
                    base_port,
                    port,
                    e
                ));
            }
        }
    }
    unreachable!()
}

fn run_request_loop(server: &Server) {
    // Thread pool so a slow asset read never blocks the lead endpoint
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(4)
        .build()
        .expect("failed to create thread pool");

    for request in server.incoming_requests() {
        pool.spawn(move || {
            if let Err(e) = handle_request(request) {
                log!("serve"; "request error: {e}");
            }
        });
    }
}

/// Route a single request.
fn handle_request(request: Request) -> Result<()> {
    if state::is_shutdown() {
        return response::respond_unavailable(request);
    }

    let url = request.url().to_string();
    let (path, query) = split_query(&url);

    match request.method() {
        Method::Get => match path {
            "/" | "/index.html" => respond_index(request, query),
            "/thankyou.html" => response::send_html(request, page::THANKYOU_HTML.to_string()),
            "/style.css" => {
                response::send_body(request, 200, types::CSS, STYLE_CSS.as_bytes().to_vec())
            }
            "/runtime.js" => response::send_body(
                request,
                200,
                types::JAVASCRIPT,
                runtime_js().into_bytes(),
            ),
            path if path.starts_with("/assets/") => respond_asset(request, path),
            _ => response::respond_not_found(request),
        },
        Method::Post => handle_lead(request, path),
        _ => response::respond_not_found(request),
    }
}

fn split_query(url: &str) -> (&str, &str) {
    match url.split_once('?') {
        Some((path, query)) => (path, query),
        None => (url, ""),
    }
}

/// Render the landing page for one request, with per-request attribution.
fn respond_index(request: Request, query: &str) -> Result<()> {
    match reload_config() {
        Ok(true) => log!("serve"; "config reloaded"),
        Ok(false) => {}
        Err(err) => debug!("serve"; "config reload skipped: {err}"),
    }
    let config = cfg();
    let theme = resolve_theme(&config);

    let html = match config.validate() {
        Ok(()) => {
            let mut html = render_index(&config, theme)?;
            // Attribution the browser would capture client-side
            let source = utm::capture_source(query);
            let referrer =
                utm::referrer_or_direct(response::header_value(&request, "referer").as_deref());
            html = inject_attribution(&html, &source, &referrer)?;
            html
        }
        Err(diag) => render_degraded(theme, &diag)?,
    };

    response::send_html(request, html)
}

fn inject_attribution(html: &str, source: &str, referrer: &str) -> Result<String> {
    let mut doc = Document::parse(html).context("rendered page failed to re-parse")?;
    doc.set_value("utmSource", source);
    doc.set_value("referrerField", referrer);
    Ok(doc.render())
}

/// The template with an error banner: theme and navigation still work, the
/// config problems are visible on the page.
fn render_degraded(theme: ThemeMode, diag: &ConfigDiagnostics) -> Result<String> {
    let mut doc =
        Document::parse(page::INDEX_HTML).context("embedded page template failed to parse")?;
    doc.set_root_attr("data-theme", theme.as_str());

    let mut banner = Element::new("div");
    banner.set_attr("class", "config-error-banner");
    banner.set_text(&format!(
        "landing.json is invalid: {}",
        diag.fields().join(", ")
    ));
    if let Some(body) = doc.root.find_by_tag_mut("body") {
        body.push_elem(banner);
    }
    Ok(doc.render())
}

fn respond_asset(request: Request, path: &str) -> Result<()> {
    let rel = percent_decode_str(path.trim_start_matches('/')).decode_utf8_lossy();
    // No escaping the project root
    if rel.split('/').any(|part| part == "..") {
        return response::respond_not_found(request);
    }

    let file = cfg().root_join(rel.as_ref());
    if file.is_file() {
        response::respond_file(request, &file)
    } else {
        response::respond_not_found(request)
    }
}

/// Local lead endpoint: accept the POST, drive the submission tracker, and
/// answer with the navigation side-effect (303 to the thank-you page).
fn handle_lead(mut request: Request, path: &str) -> Result<()> {
    let config = cfg();
    if !is_local_action(&config, path) {
        return response::respond_not_found(request);
    }

    let mut body = String::new();
    request
        .as_reader()
        .take(MAX_BODY_BYTES)
        .read_to_string(&mut body)?;
    let fields: Vec<(String, String)> = url::form_urlencoded::parse(body.as_bytes())
        .into_owned()
        .collect();

    let source = field_value(&fields, "utmSource").unwrap_or(utm::DIRECT);
    let referrer = field_value(&fields, "referrerField").unwrap_or(utm::DIRECT);

    let tracker = SubmissionTracker::new();
    tracker.submit();
    NoopSink.event("form_submission", source, referrer);

    // Answering the request is the confirmation, so the fallback never
    // fires on the local path.
    tracker.confirm();
    if let FallbackDecision::FallbackShown = tracker.wait_for_outcome(FALLBACK_DELAY) {
        debug!("form"; "confirmation missed the deadline");
    }

    log!("form"; "lead received ({} fields, source: {source})", fields.len());
    response::redirect_see_other(request, "/thankyou.html")
}

fn field_value<'a>(fields: &'a [(String, String)], name: &str) -> Option<&'a str> {
    fields
        .iter()
        .find(|(k, v)| k == name && !v.is_empty())
        .map(|(_, v)| v.as_str())
}

/// Does this POST path match a relative `formAction`?
fn is_local_action(config: &Landing, path: &str) -> bool {
    if !config.form_action_is_local() {
        return false;
    }
    match config.form_action.as_deref() {
        Some(action) if !action.is_empty() => {
            let normalized = if action.starts_with('/') {
                action.to_string()
            } else {
                format!("/{action}")
            };
            normalized == path
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_valid_config;

    #[test]
    fn test_split_query() {
        assert_eq!(split_query("/"), ("/", ""));
        assert_eq!(
            split_query("/?utm_source=x&ref=y"),
            ("/", "utm_source=x&ref=y")
        );
        assert_eq!(split_query("/assets/a.png"), ("/assets/a.png", ""));
    }

    #[test]
    fn test_local_action_matching() {
        let mut config = test_valid_config();
        assert!(is_local_action(&config, "/lead"));
        assert!(!is_local_action(&config, "/other"));

        config.form_action = Some("lead".into());
        assert!(is_local_action(&config, "/lead"));

        config.form_action = Some("https://docs.google.com/forms/d/e/X/formResponse".into());
        assert!(!is_local_action(&config, "/lead"));
    }

    #[test]
    fn test_degraded_page_keeps_theme_and_shows_banner() {
        let diag = test_valid_config_missing_all();
        let html = render_degraded(ThemeMode::Light, &diag).unwrap();

        assert!(html.contains("data-theme=\"light\""));
        assert!(html.contains("config-error-banner"));
        assert!(html.contains("businessName"));
        // Navigation and runtime still present
        assert!(html.contains("nav-toggle"));
        assert!(html.contains("runtime.js"));
    }

    fn test_valid_config_missing_all() -> ConfigDiagnostics {
        crate::config::test_parse_config("{}").validate().unwrap_err()
    }

    #[test]
    fn test_attribution_injection() {
        let config = test_valid_config();
        let html = render_index(&config, ThemeMode::Dark).unwrap();
        let html = inject_attribution(&html, "newsletter", "https://blog.example/").unwrap();

        assert!(html.contains("value=\"newsletter\""));
        assert!(html.contains("value=\"https://blog.example/\""));
    }

    #[test]
    fn test_field_value_lookup() {
        let fields = vec![
            ("utmSource".to_string(), "banner".to_string()),
            ("name".to_string(), "Ada".to_string()),
        ];
        assert_eq!(field_value(&fields, "utmSource"), Some("banner"));
        assert_eq!(field_value(&fields, "referrerField"), None);
    }
}
