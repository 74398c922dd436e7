use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Project,
    Task,
    Payment,
}

impl ActivityKind {
    // CSS class of the activity dot
    pub fn dot_class(&self) -> &'static str {
        match self {
            ActivityKind::Project => "dot-project",
            ActivityKind::Payment => "dot-payment",
            ActivityKind::Task => "dot-task",
        }
    }
}

// Activities are seeded once and never mutated
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Activity {
    pub id: String,
    pub message: String,
    pub timestamp: String, // display text such as "2 hours ago"
    #[serde(rename = "type")]
    pub kind: ActivityKind,
}
