use chrono::NaiveDate;
use crate::config::DashboardConfig;
use crate::errors::AppResult;
use crate::services::store::DashboardState;
use super::{charts, escape_html, fill, format_currency, load_template};

/// Overview page content: stat cards, earnings and status charts, and the
/// most recent activities.
pub fn render_overview(
    config: &DashboardConfig,
    state: &DashboardState,
    today: NaiveDate,
) -> AppResult<String> {
    let template = load_template(config, "overview.html")?;
    let stats = state.stats();

    let earnings = state.earnings_by_month(config.earnings_months, today);
    let earnings_chart = charts::earnings_bar_chart(&earnings)?;
    let earnings_labels = earnings
        .iter()
        .map(|point| format!(
            r#"<li><span class="label">{} {}</span><span class="value">{}</span></li>"#,
            point.month,
            point.year,
            format_currency(point.earnings)
        ))
        .collect::<Vec<_>>()
        .join("\n");

    let breakdown = state.status_breakdown();
    let status_chart = charts::status_pie_chart(&breakdown)?;
    let total: usize = breakdown.iter().map(|s| s.count).sum();
    let status_legend = breakdown
        .iter()
        .map(|slice| {
            let (r, g, b) = slice.status.chart_color();
            let percent = if total == 0 {
                0
            } else {
                (slice.count as f64 / total as f64 * 100.0).round() as u32
            };
            format!(
                r#"<li><span class="swatch" style="background: rgb({}, {}, {})"></span>{}: {} ({}%)</li>"#,
                r, g, b, slice.status, slice.count, percent
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let activities = state
        .recent_activities(config.recent_activity_limit)
        .iter()
        .map(|activity| format!(
            r#"<li class="activity">
                <span class="dot {}"></span>
                <div>
                    <p>{}</p>
                    <p class="muted">{}</p>
                </div>
            </li>"#,
            activity.kind.dot_class(),
            escape_html(&activity.message),
            escape_html(&activity.timestamp)
        ))
        .collect::<Vec<_>>()
        .join("\n");

    tracing::debug!("Rendering overview for {} projects", stats.total_projects);

    Ok(fill(&template, &[
        ("total_projects", stats.total_projects.to_string()),
        ("total_earnings", format_currency(stats.total_earnings)),
        ("tasks_due", stats.tasks_due.to_string()),
        ("completed_projects", stats.completed_projects.to_string()),
        ("earnings_chart", earnings_chart),
        ("earnings_labels", earnings_labels),
        ("status_chart", status_chart),
        ("status_legend", status_legend),
        ("activities", activities),
    ]))
}
