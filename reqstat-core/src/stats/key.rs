use crate::ingest::Classification;
use http::Method;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyLabel {
    /// Whole-run accumulator for the classification.
    Total,
    /// Cumulative window accumulator, labelled by its last ordinal.
    Window { threshold: u64 },
    /// Per-method breakdown.
    Method(Method),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccumulatorKey {
    pub classification: Classification,
    pub label: KeyLabel,
}

impl AccumulatorKey {
    pub fn total(classification: Classification) -> Self {
        Self {
            classification,
            label: KeyLabel::Total,
        }
    }

    pub fn window(classification: Classification, threshold: u64) -> Self {
        Self {
            classification,
            label: KeyLabel::Window { threshold },
        }
    }

    pub fn method(method: Method) -> Self {
        Self {
            classification: Classification::Generic,
            label: KeyLabel::Method(method),
        }
    }
}

impl Display for AccumulatorKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.label {
            KeyLabel::Total => write!(f, "{}", self.classification),
            KeyLabel::Window { threshold } => write!(f, "{}_{}", self.classification, threshold),
            KeyLabel::Method(method) => write!(f, "{method}"),
        }
    }
}
