use std::collections::BTreeMap;

use serde::Serialize;

/// Points awarded to one candidate when a question/answer pair matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RuleIncrement {
    pub candidate: &'static str,
    pub points: u32,
}

/// Hand-authored weights: question id, then answer value, then increments in authoring order.
#[derive(Debug, Clone, Default)]
pub struct ScoringRuleTable {
    rules: BTreeMap<&'static str, BTreeMap<&'static str, Vec<RuleIncrement>>>,
}

impl ScoringRuleTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn standard() -> Self {
        let mut table = Self::new();

        table.insert(
            "projectSize",
            "small",
            &[
                ("context-api", 30),
                ("zustand", 25),
                ("valtio", 20),
                ("jotai", 15),
            ],
        );
        table.insert(
            "projectSize",
            "medium",
            &[
                ("zustand", 30),
                ("jotai", 25),
                ("redux-toolkit", 20),
                ("react-query", 20),
            ],
        );
        table.insert(
            "projectSize",
            "large",
            &[("redux-toolkit", 35), ("zustand", 25), ("jotai", 20)],
        );

        table.insert(
            "teamExperience",
            "beginner",
            &[("context-api", 25), ("zustand", 20), ("valtio", 20)],
        );
        table.insert(
            "teamExperience",
            "intermediate",
            &[("zustand", 25), ("redux-toolkit", 20), ("jotai", 20)],
        );
        table.insert(
            "teamExperience",
            "expert",
            &[("redux-toolkit", 25), ("jotai", 20), ("zustand", 15)],
        );

        table.insert(
            "stateComplexity",
            "simple",
            &[("context-api", 25), ("zustand", 20), ("valtio", 15)],
        );
        table.insert(
            "stateComplexity",
            "moderate",
            &[("zustand", 25), ("jotai", 20), ("redux-toolkit", 15)],
        );
        table.insert(
            "stateComplexity",
            "complex",
            &[("redux-toolkit", 30), ("jotai", 20), ("zustand", 15)],
        );

        table.insert(
            "primaryUse",
            "forms",
            &[("context-api", 15), ("zustand", 15), ("jotai", 10)],
        );
        table.insert(
            "primaryUse",
            "api-data",
            &[("react-query", 35), ("redux-toolkit", 20), ("zustand", 15)],
        );
        table.insert(
            "primaryUse",
            "real-time",
            &[("redux-toolkit", 25), ("zustand", 20), ("react-query", 20)],
        );
        table.insert(
            "primaryUse",
            "shared-state",
            &[("redux-toolkit", 25), ("zustand", 20), ("jotai", 15)],
        );

        // "not-critical" deliberately awards nothing.
        table.insert(
            "performance",
            "critical",
            &[("jotai", 20), ("zustand", 15), ("redux-toolkit", 15)],
        );
        table.insert(
            "performance",
            "important",
            &[("zustand", 15), ("jotai", 10), ("redux-toolkit", 10)],
        );

        table.insert(
            "learningCurve",
            "gentle",
            &[("context-api", 20), ("zustand", 15), ("valtio", 15)],
        );
        table.insert(
            "learningCurve",
            "willing",
            &[("redux-toolkit", 15), ("jotai", 10), ("zustand", 10)],
        );

        table
    }

    /// Appends increments for a question/answer pair; repeated calls accumulate.
    pub fn insert(
        &mut self,
        question: &'static str,
        answer: &'static str,
        increments: &[(&'static str, u32)],
    ) {
        let entry = self
            .rules
            .entry(question)
            .or_default()
            .entry(answer)
            .or_default();
        entry.extend(
            increments
                .iter()
                .map(|&(candidate, points)| RuleIncrement { candidate, points }),
        );
    }

    pub fn lookup(&self, question: &str, answer: &str) -> Option<&[RuleIncrement]> {
        self.rules
            .get(question)
            .and_then(|answers| answers.get(answer))
            .map(Vec::as_slice)
    }

    /// Every `(question, answer, increment)` triple, used for consistency checks.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &'static str, &RuleIncrement)> {
        self.rules.iter().flat_map(|(question, answers)| {
            answers.iter().flat_map(move |(answer, increments)| {
                increments
                    .iter()
                    .map(move |increment| (*question, *answer, increment))
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_misses_unknown_pairs() {
        let table = ScoringRuleTable::standard();

        assert!(table.lookup("projectSize", "gigantic").is_none());
        assert!(table.lookup("budget", "small").is_none());
        assert!(table.lookup("performance", "not-critical").is_none());
    }

    #[test]
    fn lookup_preserves_authoring_order() {
        let table = ScoringRuleTable::standard();
        let increments = table
            .lookup("primaryUse", "api-data")
            .expect("api-data rule present");

        let candidates: Vec<_> = increments.iter().map(|inc| inc.candidate).collect();
        assert_eq!(candidates, vec!["react-query", "redux-toolkit", "zustand"]);
        assert_eq!(increments[0].points, 35);
    }

    #[test]
    fn insert_accumulates_repeated_pairs() {
        let mut table = ScoringRuleTable::new();
        table.insert("q", "a", &[("x", 5)]);
        table.insert("q", "a", &[("y", 7)]);

        assert_eq!(table.lookup("q", "a").map(<[_]>::len), Some(2));
        assert_eq!(table.entries().count(), 2);
    }
}
