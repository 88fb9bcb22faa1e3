use http::Method;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Request category a record is attributed to.
///
/// Parsed records are always `Static` or `Dynamic`. `All` and `Generic` name accumulator
/// families: `All` sees every record, `Generic` holds the per-method breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    All,
    Static,
    Dynamic,
    Generic,
}

impl Classification {
    /// Whether a record of `kind` belongs to the family named by `self`.
    pub fn matches(self, kind: Classification) -> bool {
        self == Classification::All || self == kind
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Classification::All => "ALL",
            Classification::Static => "STATIC",
            Classification::Dynamic => "DYNAMIC",
            Classification::Generic => "GENERIC",
        }
    }
}

impl Display for Classification {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One parsed request observation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// 1-based position among matched lines
    pub ordinal: u64,
    pub method: Method,
    pub uri: String,
    pub classification: Classification,
    /// elapsed time in milliseconds, as written in the log
    pub elapsed: Decimal,
    /// epoch milliseconds
    pub timestamp: i64,
}

impl Record {
    pub fn new(
        ordinal: u64,
        classification: Classification,
        elapsed: Decimal,
        timestamp: i64,
    ) -> Self {
        Self {
            ordinal,
            method: Method::GET,
            uri: String::new(),
            classification,
            elapsed,
            timestamp,
        }
    }

    pub fn with_request(mut self, method: Method, uri: impl Into<String>) -> Self {
        self.method = method;
        self.uri = uri.into();
        self
    }
}
