use serde::Serialize;

/// Selectable answer for a question; `value` is the token stored in an answer set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionOption {
    pub value: &'static str,
    pub label: &'static str,
    pub glyph: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub prompt: &'static str,
    pub options: Vec<QuestionOption>,
}

impl Question {
    pub fn option(&self, value: &str) -> Option<&QuestionOption> {
        self.options.iter().find(|option| option.value == value)
    }

    pub fn accepts(&self, value: &str) -> bool {
        self.option(value).is_some()
    }

    pub fn option_values(&self) -> Vec<&'static str> {
        self.options.iter().map(|option| option.value).collect()
    }
}

/// Ordered questionnaire. The flow controller walks it front to back.
#[derive(Debug, Clone)]
pub struct QuestionSet {
    questions: Vec<Question>,
}

impl QuestionSet {
    pub fn standard() -> Self {
        Self {
            questions: standard_questions(),
        }
    }

    pub fn from_questions(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn get(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == id)
    }

    pub fn at(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.questions.iter().map(|question| question.id)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

fn option(value: &'static str, label: &'static str, glyph: &'static str) -> QuestionOption {
    QuestionOption {
        value,
        label,
        glyph,
    }
}

fn standard_questions() -> Vec<Question> {
    vec![
        Question {
            id: "projectSize",
            prompt: "What is the size and scope of your project?",
            options: vec![
                option("small", "Small (< 10 components, simple app)", "🔸"),
                option(
                    "medium",
                    "Medium (10-50 components, moderate complexity)",
                    "🔹",
                ),
                option("large", "Large (50+ components, complex app)", "🔷"),
            ],
        },
        Question {
            id: "teamExperience",
            prompt: "What is your team's React experience level?",
            options: vec![
                option("beginner", "Beginner (< 1 year with React)", "🌱"),
                option("intermediate", "Intermediate (1-3 years with React)", "🌿"),
                option("expert", "Expert (3+ years with React)", "🌳"),
            ],
        },
        Question {
            id: "stateComplexity",
            prompt: "How complex is your state management needs?",
            options: vec![
                option("simple", "Simple (basic UI state, minimal sharing)", "📄"),
                option("moderate", "Moderate (some shared state, basic async)", "📋"),
                option("complex", "Complex (heavy sharing, complex async logic)", "📊"),
            ],
        },
        Question {
            id: "primaryUse",
            prompt: "What is your primary state management use case?",
            options: vec![
                option("forms", "Form state and validation", "📝"),
                option("api-data", "API data and server state", "🌐"),
                option("real-time", "Real-time updates and sync", "⚡"),
                option("shared-state", "Shared UI state across components", "🔄"),
            ],
        },
        Question {
            id: "performance",
            prompt: "How important is performance optimization?",
            options: vec![
                option(
                    "not-critical",
                    "Not critical (developer experience first)",
                    "😌",
                ),
                option("important", "Important (balance performance and DX)", "⚖️"),
                option("critical", "Critical (performance is top priority)", "🚀"),
            ],
        },
        Question {
            id: "learningCurve",
            prompt: "What is your preference for learning curve?",
            options: vec![
                option("gentle", "Gentle (quick to learn and implement)", "🎯"),
                option("willing", "Willing to invest (prefer powerful features)", "💪"),
            ],
        },
    ]
}
