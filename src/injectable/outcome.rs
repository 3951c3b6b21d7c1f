/// Result of injecting a single namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjectOutcome {
    /// The namespace was new and is now registered.
    Inserted,
    /// A forced injection overwrote a different reducer.
    Replaced,
    /// The same reducer was already registered under the namespace.
    Unchanged,
    /// A different reducer was already registered; the injection was
    /// skipped with a warning.
    Skipped,
}

impl InjectOutcome {
    /// Whether the namespace mapping changed.
    pub fn changes_mapping(self) -> bool {
        matches!(self, InjectOutcome::Inserted | InjectOutcome::Replaced)
    }
}

/// Per-namespace outcomes of a batch injection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InjectReport {
    /// Outcome of every entry, in batch order.
    pub outcomes: Vec<(String, InjectOutcome)>,
    /// Whether the root reducer was rebuilt and installed.
    pub rebuilt: bool,
}

impl InjectReport {
    /// Namespaces that were inserted or replaced.
    pub fn applied(&self) -> Vec<&str> {
        self.filter(InjectOutcome::changes_mapping)
    }

    /// Namespaces skipped because of a conflict.
    pub fn skipped(&self) -> Vec<&str> {
        self.filter(|outcome| outcome == InjectOutcome::Skipped)
    }

    /// Namespaces whose reducer was already registered.
    pub fn unchanged(&self) -> Vec<&str> {
        self.filter(|outcome| outcome == InjectOutcome::Unchanged)
    }

    /// Outcome recorded for `namespace`; the last one if it appeared twice.
    pub fn outcome(&self, namespace: &str) -> Option<InjectOutcome> {
        self.outcomes
            .iter()
            .rev()
            .find(|(ns, _)| ns == namespace)
            .map(|(_, outcome)| *outcome)
    }

    fn filter(&self, keep: impl Fn(InjectOutcome) -> bool) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| keep(*outcome))
            .map(|(ns, _)| ns.as_str())
            .collect()
    }
}
