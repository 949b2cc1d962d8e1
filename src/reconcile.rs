//! Mood Save Reconciler
//!
//! Turns a freely edited question/option tree into the additive calls the
//! backend understands. The server only offers "add a question with its
//! options" and "add options to an existing question"; there is no upsert,
//! so the client diffs its working copy itself. Deletions are issued
//! eagerly elsewhere and never pass through here.

use crate::models::Mood;

/// One network call the save flow will issue
#[derive(Debug, Clone, PartialEq)]
pub enum SaveCall {
    /// Create a question under a mood, carrying all of its option texts
    AddQuestion {
        mood_id: u64,
        text: String,
        options: Vec<String>,
    },
    /// Append options to a question the server already knows
    AddOptions {
        question_id: u64,
        options: Vec<String>,
    },
}

/// Compute the minimal additive call set for a mood's edited question list.
///
/// - An existing question contributes at most one `AddOptions` call, holding
///   exactly its draft options with non-empty text. Pre-existing options are
///   never re-sent.
/// - A draft question with non-empty text contributes one `AddQuestion` call
///   carrying every non-empty option in original order. The whole question is
///   being created fresh, so the options' own draft/existing split is
///   irrelevant there.
pub fn plan_mood_save(mood: &Mood) -> Vec<SaveCall> {
    let mut calls = Vec::new();

    for question in &mood.questions {
        match question.id.server_id() {
            Some(question_id) => {
                let options: Vec<String> = question
                    .options
                    .iter()
                    .filter(|o| o.id.is_draft() && !o.text.trim().is_empty())
                    .map(|o| o.text.trim().to_string())
                    .collect();
                if !options.is_empty() {
                    calls.push(SaveCall::AddOptions {
                        question_id,
                        options,
                    });
                }
            }
            None => {
                if question.text.trim().is_empty() {
                    continue;
                }
                let options: Vec<String> = question
                    .options
                    .iter()
                    .filter(|o| !o.text.trim().is_empty())
                    .map(|o| o.text.trim().to_string())
                    .collect();
                calls.push(SaveCall::AddQuestion {
                    mood_id: mood.id,
                    text: question.text.trim().to_string(),
                    options,
                });
            }
        }
    }

    calls
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AnswerOption, EntityId, Question};

    fn existing_option(id: u64, text: &str) -> AnswerOption {
        AnswerOption {
            id: EntityId::Existing(id),
            text: text.to_string(),
        }
    }

    fn draft_option(id: u64, text: &str) -> AnswerOption {
        AnswerOption {
            id: EntityId::Draft(id),
            text: text.to_string(),
        }
    }

    fn mood_with(questions: Vec<Question>) -> Mood {
        Mood {
            id: 42,
            name: "Stressed".to_string(),
            questions,
        }
    }

    #[test]
    fn draft_question_becomes_one_add_question_call() {
        let mood = mood_with(vec![Question {
            id: EntityId::Draft(100),
            text: "What's causing your stress?".to_string(),
            options: vec![
                draft_option(101, "Work pressure"),
                existing_option(7, "Financial concerns"),
                draft_option(102, ""),
                draft_option(103, "Health worries"),
            ],
        }]);

        let calls = plan_mood_save(&mood);
        assert_eq!(
            calls,
            vec![SaveCall::AddQuestion {
                mood_id: 42,
                text: "What's causing your stress?".to_string(),
                options: vec![
                    "Work pressure".to_string(),
                    "Financial concerns".to_string(),
                    "Health worries".to_string(),
                ],
            }]
        );
    }

    #[test]
    fn draft_question_without_text_is_skipped() {
        let mood = mood_with(vec![Question {
            id: EntityId::Draft(100),
            text: "   ".to_string(),
            options: vec![draft_option(101, "Orphaned option")],
        }]);
        assert!(plan_mood_save(&mood).is_empty());
    }

    #[test]
    fn existing_question_sends_only_new_options() {
        let mood = mood_with(vec![Question {
            id: EntityId::Existing(9),
            text: "How are you coping?".to_string(),
            options: vec![
                existing_option(1, "Taking breaks"),
                draft_option(200, "Talking to someone"),
                draft_option(201, "  "),
                draft_option(202, "Exercise"),
            ],
        }]);

        let calls = plan_mood_save(&mood);
        assert_eq!(
            calls,
            vec![SaveCall::AddOptions {
                question_id: 9,
                options: vec!["Talking to someone".to_string(), "Exercise".to_string()],
            }]
        );
    }

    #[test]
    fn untouched_existing_question_produces_no_call() {
        let mood = mood_with(vec![Question {
            id: EntityId::Existing(9),
            text: "How long have you felt this way?".to_string(),
            options: vec![existing_option(1, "Just today"), existing_option(2, "A few days")],
        }]);
        assert!(plan_mood_save(&mood).is_empty());
    }

    #[test]
    fn mixed_tree_keeps_question_order() {
        let mood = mood_with(vec![
            Question {
                id: EntityId::Existing(1),
                text: "Q1".to_string(),
                options: vec![draft_option(300, "new A")],
            },
            Question {
                id: EntityId::Draft(400),
                text: "Q2".to_string(),
                options: vec![draft_option(401, "opt")],
            },
        ]);

        let calls = plan_mood_save(&mood);
        assert_eq!(calls.len(), 2);
        assert!(matches!(calls[0], SaveCall::AddOptions { question_id: 1, .. }));
        assert!(matches!(calls[1], SaveCall::AddQuestion { mood_id: 42, .. }));
    }
}
