//! View Models
//!
//! Data structures the screens render. The api layer converts wire
//! responses into these before any component touches them.

use std::cell::Cell;

/// Identity of a question or option in the mood editor.
///
/// Entities returned by the server carry `Existing` ids; entities created
/// locally in the editor carry `Draft` ids until the next refetch replaces
/// them. The variant is fixed at creation time, so the save flow never has
/// to guess which entities the server already knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityId {
    /// Server-assigned identifier
    Existing(u64),
    /// Locally allocated draft identifier, never sent to the server
    Draft(u64),
}

thread_local! {
    static NEXT_DRAFT: Cell<u64> = const { Cell::new(1) };
}

impl EntityId {
    /// Allocate a fresh draft id (monotonic per page load)
    pub fn next_draft() -> Self {
        NEXT_DRAFT.with(|n| {
            let id = n.get();
            n.set(id + 1);
            EntityId::Draft(id)
        })
    }

    pub fn is_draft(&self) -> bool {
        matches!(self, EntityId::Draft(_))
    }

    /// Server id, if this entity has one
    pub fn server_id(&self) -> Option<u64> {
        match self {
            EntityId::Existing(id) => Some(*id),
            EntityId::Draft(_) => None,
        }
    }
}

/// Signed-in administrator profile
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Profile {
    pub username: String,
    pub email: String,
    pub role: String,
}

/// Administrator list row
#[derive(Debug, Clone, PartialEq)]
pub struct Administrator {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub access_level: String,
}

/// End-user list row
#[derive(Debug, Clone, PartialEq)]
pub struct UserAccount {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub subscription: String,
    pub phone: String,
}

/// One completed app session, as listed on the Sessions page
#[derive(Debug, Clone, PartialEq)]
pub struct SessionRow {
    pub user_name: String,
    pub average_mood: String,
    pub after_session: String,
}

/// Mood bucket with its question flow
#[derive(Debug, Clone, PartialEq)]
pub struct Mood {
    pub id: u64,
    pub name: String,
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    pub id: EntityId,
    pub text: String,
    pub options: Vec<AnswerOption>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnswerOption {
    pub id: EntityId,
    pub text: String,
}

impl Question {
    /// Empty draft question with the one option the editor always keeps
    pub fn draft() -> Self {
        Question {
            id: EntityId::next_draft(),
            text: String::new(),
            options: vec![AnswerOption::draft()],
        }
    }
}

impl AnswerOption {
    pub fn draft() -> Self {
        AnswerOption {
            id: EntityId::next_draft(),
            text: String::new(),
        }
    }
}

/// Uploaded background sound
#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundSound {
    pub id: u64,
    pub name: String,
    pub url: String,
}

/// Dashboard counters
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardSummary {
    pub total_users: u64,
    pub new_users_today: u64,
    pub positive_reviews: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_ids_are_unique_and_tagged() {
        let a = EntityId::next_draft();
        let b = EntityId::next_draft();
        assert_ne!(a, b);
        assert!(a.is_draft());
        assert_eq!(a.server_id(), None);
        assert_eq!(EntityId::Existing(7).server_id(), Some(7));
    }

    #[test]
    fn draft_question_keeps_one_option() {
        let q = Question::draft();
        assert!(q.id.is_draft());
        assert_eq!(q.options.len(), 1);
        assert!(q.options[0].id.is_draft());
    }
}
