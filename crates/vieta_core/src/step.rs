//! Derivation steps and the append-only log that collects them.

/// One explanatory step of a derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveStep {
    pub text: String,
    pub formula: Option<String>,
}

impl SolveStep {
    pub fn new(text: impl Into<String>, formula: Option<String>) -> Self {
        Self {
            text: text.into(),
            formula,
        }
    }

    pub fn with_formula(text: impl Into<String>, formula: impl Into<String>) -> Self {
        Self::new(text, Some(formula.into()))
    }
}

/// Ordered, append-only sequence of [`SolveStep`]s.
///
/// Position in the log is narrative order. Appended steps are never handed
/// out mutably.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepLog {
    steps: Vec<SolveStep>,
}

impl StepLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step with a displayed formula.
    pub fn push(&mut self, text: impl Into<String>, formula: impl Into<String>) {
        self.append(SolveStep::with_formula(text, formula));
    }

    /// Append an already built step.
    pub fn append(&mut self, step: SolveStep) {
        self.steps.push(step);
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SolveStep> {
        self.steps.iter()
    }

    pub fn into_steps(self) -> Vec<SolveStep> {
        self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_append_order() {
        let mut log = StepLog::new();
        log.push("first", "x = 1");
        log.append(SolveStep::new("second", None));
        log.push("third", "x = 3");

        let texts: Vec<&str> = log.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
        assert_eq!(log.iter().nth(1).and_then(|s| s.formula.clone()), None);
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn into_steps_hands_over_the_sequence() {
        let mut log = StepLog::new();
        assert!(log.is_empty());
        log.push("only", "u² = 0");
        let steps = log.into_steps();
        assert_eq!(steps, vec![SolveStep::new("only", Some("u² = 0".into()))]);
    }
}
