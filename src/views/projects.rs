use crate::config::DashboardConfig;
use crate::editor::ProjectEditor;
use crate::errors::AppResult;
use crate::models::{Project, ProjectForm, ProjectStatus};
use super::{escape_html, fill, format_currency, format_deadline, load_template};

fn status_badge(status: ProjectStatus) -> String {
    format!(r#"<span class="badge {}">{}</span>"#, status.badge_class(), status)
}

fn action_links(project: &Project) -> String {
    format!(
        r#"<a href="/projects/{id}" class="action-view" title="View">View</a>
           <a href="/projects/{id}/edit" class="action-edit" title="Edit">Edit</a>
           <a href="/projects/{id}/delete" class="action-delete" title="Delete">Delete</a>"#,
        id = urlencoding::encode(&project.id)
    )
}

/// Project list in store order, as table rows for wide screens and as cards
/// for narrow ones.
pub fn render_project_list(config: &DashboardConfig, projects: &[Project]) -> AppResult<String> {
    let template = load_template(config, "projects.html")?;

    let rows = projects
        .iter()
        .map(|project| format!(
            r#"<tr>
                <td><div class="project-name">{}</div><div class="muted">{}</div></td>
                <td>{}</td>
                <td>{}</td>
                <td>{}</td>
                <td>{}</td>
                <td class="action-cell">{}</td>
            </tr>"#,
            escape_html(&project.name),
            escape_html(&project.description),
            escape_html(&project.client),
            status_badge(project.status),
            escape_html(&format_deadline(&project.deadline)),
            format_currency(project.budget),
            action_links(project)
        ))
        .collect::<Vec<_>>()
        .join("\n");

    let cards = projects
        .iter()
        .map(|project| format!(
            r#"<div class="card project-card">
                <div class="card-header">
                    <div>
                        <h3>{}</h3>
                        <p class="muted">{}</p>
                    </div>
                    {}
                </div>
                <p>{}</p>
                <dl>
                    <dt>Deadline</dt><dd>{}</dd>
                    <dt>Budget</dt><dd>{}</dd>
                </dl>
                <div class="card-actions">{}</div>
            </div>"#,
            escape_html(&project.name),
            escape_html(&project.client),
            status_badge(project.status),
            escape_html(&project.description),
            escape_html(&format_deadline(&project.deadline)),
            format_currency(project.budget),
            action_links(project)
        ))
        .collect::<Vec<_>>()
        .join("\n");

    let empty = if projects.is_empty() {
        r#"<p class="empty">No projects yet.</p>"#.to_string()
    } else {
        String::new()
    };

    Ok(fill(&template, &[
        ("project_rows", rows),
        ("project_cards", cards),
        ("empty", empty),
    ]))
}

fn status_options(selected: &str) -> String {
    ProjectStatus::SELECT_ORDER
        .iter()
        .map(|status| {
            let marker = if status.label() == selected { " selected" } else { "" };
            format!(r#"<option value="{0}"{1}>{0}</option>"#, status.label(), marker)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// The editor form. `form` carries the values to show, which are the user's
/// input when re-rendering after a validation failure.
pub fn render_editor(
    config: &DashboardConfig,
    editor: &ProjectEditor,
    form: &ProjectForm,
    errors: &[String],
) -> AppResult<String> {
    let template = load_template(config, "project_form.html")?;

    let error_list = if errors.is_empty() {
        String::new()
    } else {
        let items = errors
            .iter()
            .map(|e| format!("<li>{}</li>", escape_html(e)))
            .collect::<Vec<_>>()
            .join("");
        format!(r#"<ul class="form-errors">{}</ul>"#, items)
    };

    // View mode renders no submit control
    let actions = if editor.is_read_only() {
        let edit_link = editor
            .project()
            .map(|p| format!(
                r#"<a href="/projects/{}/edit" class="btn btn-primary">Edit</a>"#,
                urlencoding::encode(&p.id)
            ))
            .unwrap_or_default();
        format!(
            r#"<div class="form-actions"><a href="/projects" class="btn btn-secondary">Close</a>{}</div>"#,
            edit_link
        )
    } else {
        format!(
            r#"<div class="form-actions">
                <a href="/projects" class="btn btn-secondary">Cancel</a>
                <button type="submit" class="btn btn-primary">{}</button>
            </div>"#,
            editor.submit_label()
        )
    };

    let disabled = if editor.is_read_only() { "disabled" } else { "" };

    Ok(fill(&template, &[
        ("form_title", editor.title().to_string()),
        ("action", editor.action().unwrap_or_default()),
        ("errors", error_list),
        ("disabled", disabled.to_string()),
        ("name", escape_html(&form.name)),
        ("client", escape_html(&form.client)),
        ("status_options", status_options(&form.status)),
        ("deadline", escape_html(&form.deadline)),
        ("budget", escape_html(&form.budget)),
        ("description", escape_html(&form.description)),
        ("actions", actions),
    ]))
}

pub fn render_delete_confirm(config: &DashboardConfig, project: &Project) -> AppResult<String> {
    let template = load_template(config, "confirm_delete.html")?;
    Ok(fill(&template, &[
        ("project_id", urlencoding::encode(&project.id).into_owned()),
        ("project_name", escape_html(&project.name)),
        ("client", escape_html(&project.client)),
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_options_mark_selected() {
        let html = status_options("On Hold");
        assert_eq!(html.matches("<option").count(), 4);
        assert!(html.contains(r#"<option value="On Hold" selected>On Hold</option>"#));
        assert_eq!(html.matches("selected").count(), 1);
    }

    #[test]
    fn test_status_badge() {
        assert_eq!(
            status_badge(ProjectStatus::InProgress),
            r#"<span class="badge badge-in-progress">In Progress</span>"#
        );
    }
}
