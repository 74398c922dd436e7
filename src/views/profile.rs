use crate::config::DashboardConfig;
use crate::errors::AppResult;
use crate::models::UserProfile;
use super::{escape_html, fill, load_template};

/// Profile page content. The personal information form is read-only unless
/// `editing` is set; the password form is always available.
pub fn render_profile(
    config: &DashboardConfig,
    profile: &UserProfile,
    editing: bool,
) -> AppResult<String> {
    let template = load_template(config, "profile.html")?;

    let (disabled, header_action, form_actions) = if editing {
        (
            "",
            String::new(),
            r#"<div class="form-actions">
                <a href="/profile" class="btn btn-secondary">Cancel</a>
                <button type="submit" class="btn btn-primary">Save Changes</button>
            </div>"#.to_string(),
        )
    } else {
        (
            "disabled",
            r#"<a href="/profile?edit=true" class="btn btn-link">Edit Profile</a>"#.to_string(),
            String::new(),
        )
    };

    let avatar = match &profile.avatar {
        Some(url) => format!(r#"<img src="{}" alt="avatar" class="avatar">"#, escape_html(url)),
        None => format!(
            r#"<div class="avatar avatar-initial">{}</div>"#,
            escape_html(&profile.name.chars().next().map(String::from).unwrap_or_default())
        ),
    };

    Ok(fill(&template, &[
        ("disabled", disabled.to_string()),
        ("header_action", header_action),
        ("form_actions", form_actions),
        ("avatar", avatar),
        ("name", escape_html(&profile.name)),
        ("email", escape_html(&profile.email)),
        ("role", escape_html(&profile.role)),
        ("bio", escape_html(profile.bio.as_deref().unwrap_or(""))),
    ]))
}
