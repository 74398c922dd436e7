// HTML rendering: page templates are read from disk and filled in with
// `{{placeholder}}` substitution.
mod charts;
mod overview;
mod profile;
mod projects;

pub use overview::render_overview;
pub use profile::render_profile;
pub use projects::{render_delete_confirm, render_editor, render_project_list};

use chrono::NaiveDate;
use std::path::Path;
use crate::config::DashboardConfig;
use crate::errors::{AppError, AppResult};
use crate::models::PageQuery;
use crate::services::store::{parse_deadline, DashboardState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivePage {
    Overview,
    Projects,
    Profile,
}

pub fn load_template(config: &DashboardConfig, name: &str) -> AppResult<String> {
    let path = Path::new(&config.templates_dir).join(name);
    std::fs::read_to_string(&path).map_err(|e| {
        tracing::error!("Failed to read template {}: {}", path.display(), e);
        AppError::File(e)
    })
}

/// Replaces each `{{key}}` with its value in a single pass, so values are
/// never themselves scanned for placeholders. Unknown keys are left as is.
pub fn fill(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => {
                let key = after[..end].trim();
                match vars.iter().find(|(k, _)| *k == key) {
                    Some((_, value)) => out.push_str(value),
                    None => out.push_str(&rest[start..start + 2 + end + 2]),
                }
                rest = &after[end + 2..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// `$15,000`, or `$1,250.50` when there are cents.
pub fn format_currency(amount: f64) -> String {
    let magnitude = amount.abs();
    let (whole, fraction) = if magnitude < 1e15 {
        let cents = (magnitude * 100.0).round() as u64;
        ((cents / 100).to_string(), cents % 100)
    } else {
        // Past this magnitude an f64 carries no cents
        (format!("{:.0}", magnitude.round()), 0)
    };
    let sign = if amount < 0.0 && (whole != "0" || fraction != 0) { "-" } else { "" };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if fraction == 0 {
        format!("{}${}", sign, grouped)
    } else {
        format!("{}${}.{:02}", sign, grouped, fraction)
    }
}

pub fn format_deadline(deadline: &str) -> String {
    match parse_deadline(deadline) {
        Some(date) => format_date(date),
        None => deadline.to_string(),
    }
}

fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

fn nav_class(active: ActivePage, page: ActivePage) -> String {
    if active == page { "nav-link active".into() } else { "nav-link".into() }
}

fn flash_html(query: &PageQuery) -> String {
    let mut html = String::new();
    if let Some(message) = &query.message {
        html.push_str(&format!(r#"<div class="flash flash-success">{}</div>"#, escape_html(message)));
    }
    if let Some(error) = &query.error {
        html.push_str(&format!(r#"<div class="flash flash-error">{}</div>"#, escape_html(error)));
    }
    html
}

const CHANGE_FEED_SCRIPT: &str = r#"<script>
        // Reload when the dashboard state changes
        const feed = new EventSource('/events');
        feed.addEventListener('revision', () => window.location.reload());
    </script>"#;

/// Wraps page content in the layout: header with notifications, sidebar and
/// flash messages. `live_reload` adds the change feed script; pages holding
/// an unsaved draft pass `false` so a reload never discards user input.
pub fn page(
    config: &DashboardConfig,
    state: &DashboardState,
    active: ActivePage,
    title: &str,
    query: &PageQuery,
    content: String,
    live_reload: bool,
) -> AppResult<String> {
    let layout = load_template(config, "layout.html")?;
    let profile = state.profile();

    let notifications = state
        .recent_activities(config.notification_limit)
        .iter()
        .map(|activity| format!(
            r#"<li class="notification"><p>{}</p><span class="muted">{}</span></li>"#,
            escape_html(&activity.message),
            escape_html(&activity.timestamp)
        ))
        .collect::<Vec<_>>()
        .join("\n");

    Ok(fill(&layout, &[
        ("title", escape_html(title)),
        ("user_name", escape_html(&profile.name)),
        ("user_role", escape_html(&profile.role)),
        ("notifications", notifications),
        ("nav_overview", nav_class(active, ActivePage::Overview)),
        ("nav_projects", nav_class(active, ActivePage::Projects)),
        ("nav_profile", nav_class(active, ActivePage::Profile)),
        ("flash", flash_html(query)),
        ("content", content),
        ("change_feed", if live_reload { CHANGE_FEED_SCRIPT.to_string() } else { String::new() }),
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_single_pass() {
        let out = fill("<h1>{{title}}</h1>{{ body }}{{unknown}}", &[
            ("title", "{{body}}".to_string()),
            ("body", "<p>x</p>".to_string()),
        ]);
        assert_eq!(out, "<h1>{{body}}</h1><p>x</p>{{unknown}}");
    }

    #[test]
    fn test_fill_unterminated_placeholder() {
        assert_eq!(fill("a {{b", &[("b", "x".into())]), "a {{b");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(15000.0), "$15,000");
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(999.0), "$999");
        assert_eq!(format_currency(1234567.0), "$1,234,567");
        assert_eq!(format_currency(1250.5), "$1,250.50");
        assert_eq!(format_currency(-42.0), "-$42");
    }

    #[test]
    fn test_format_currency_huge_budgets() {
        assert_eq!(format_currency(1e17), "$100,000,000,000,000,000");
        assert_eq!(format_currency(1e20), "$100,000,000,000,000,000,000");
    }

    #[test]
    fn test_format_deadline() {
        assert_eq!(format_deadline("2024-02-15"), "Feb 15, 2024");
        assert_eq!(format_deadline("2024-03-01"), "Mar 1, 2024");
        assert_eq!(format_deadline("someday"), "someday");
    }
}
