use serde::Deserialize;

// Raw editor fields as posted by the browser. Parsing happens in the editor.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct ProjectForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub client: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub deadline: String,
    #[serde(default)]
    pub budget: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ProfileForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub bio: String,
}

#[derive(Debug, Deserialize)]
pub struct PasswordForm {
    #[serde(default)]
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

#[derive(Debug, Deserialize)]
pub struct DeleteConfirmForm {
    #[serde(default)]
    pub confirm: String,
}

// Redirect messages and page toggles carried in the query string
#[derive(Debug, Deserialize, Default)]
pub struct PageQuery {
    pub message: Option<String>,
    pub error: Option<String>,
    pub edit: Option<String>,
}

impl PageQuery {
    // `?edit`, `?edit=true` and `?edit=1` all open the edit view
    pub fn is_editing(&self) -> bool {
        match self.edit.as_deref() {
            Some(value) => !matches!(value.trim().to_ascii_lowercase().as_str(), "false" | "0" | "no" | "off"),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(edit: Option<&str>) -> PageQuery {
        PageQuery { edit: edit.map(String::from), ..Default::default() }
    }

    #[test]
    fn test_edit_toggle_is_lenient() {
        for on in ["true", "1", "", "yes", "TRUE"] {
            assert!(query(Some(on)).is_editing(), "edit={:?} should open the editor", on);
        }
        for off in ["false", "0", "off"] {
            assert!(!query(Some(off)).is_editing(), "edit={:?} should stay read-only", off);
        }
        assert!(!query(None).is_editing());
    }
}
