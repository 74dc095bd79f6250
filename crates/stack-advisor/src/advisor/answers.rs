use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::questions::QuestionSet;

/// Question id to chosen option value. Serialized as a flat JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<String, String>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, handy for fixtures and one-shot CLI parsing.
    pub fn with(mut self, question_id: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(question_id, value);
        self
    }

    /// Records an answer, returning the value it replaced.
    pub fn insert(
        &mut self,
        question_id: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.0.insert(question_id.into(), value.into())
    }

    pub fn get(&self, question_id: &str) -> Option<&str> {
        self.0.get(question_id).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|(question, value)| (question.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Question ids from `questions` that have no recorded answer, in questionnaire order.
    pub fn missing(&self, questions: &QuestionSet) -> Vec<&'static str> {
        questions
            .ids()
            .filter(|id| !self.0.contains_key(*id))
            .collect()
    }

    pub fn is_complete(&self, questions: &QuestionSet) -> bool {
        questions.ids().all(|id| self.0.contains_key(id))
    }
}

impl<K, V> FromIterator<(K, V)> for AnswerSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(question, value)| (question.into(), value.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_reports_unanswered_questions_in_order() {
        let questions = QuestionSet::standard();
        let answers = AnswerSet::new()
            .with("teamExperience", "expert")
            .with("learningCurve", "willing");

        assert_eq!(
            answers.missing(&questions),
            vec!["projectSize", "stateComplexity", "primaryUse", "performance"]
        );
        assert!(!answers.is_complete(&questions));
    }

    #[test]
    fn deserializes_from_flat_object() {
        let answers: AnswerSet =
            serde_json::from_str(r#"{"projectSize":"large","primaryUse":"api-data"}"#)
                .expect("answers parse");

        assert_eq!(answers.get("projectSize"), Some("large"));
        assert_eq!(answers.get("primaryUse"), Some("api-data"));
        assert_eq!(answers.len(), 2);
    }

    #[test]
    fn insert_replaces_previous_answer() {
        let mut answers = AnswerSet::new();
        assert_eq!(answers.insert("projectSize", "small"), None);
        assert_eq!(
            answers.insert("projectSize", "medium"),
            Some("small".to_string())
        );
        assert_eq!(answers.get("projectSize"), Some("medium"));
    }
}
