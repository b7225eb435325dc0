//! Grade class enumeration and the configurable allow-list.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Every class a grade can be recorded under.
///
/// Whether `English` is accepted on create is decided by [`ClassPolicy`];
/// rows already stored under it always read back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GradeClass {
    English,
    History,
    Math,
    Science,
}

impl GradeClass {
    pub const ALL: [GradeClass; 4] = [
        GradeClass::English,
        GradeClass::History,
        GradeClass::Math,
        GradeClass::Science,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GradeClass::English => "English",
            GradeClass::History => "History",
            GradeClass::Math => "Math",
            GradeClass::Science => "Science",
        }
    }
}

impl fmt::Display for GradeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for GradeClass {
    type Err = ValidationError;

    /// Exact, case-sensitive match on the class name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GradeClass::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| {
                ValidationError::not_allowed("class", GradeClass::ALL.map(|c| c.as_str()), s)
            })
    }
}

/// Classes accepted when creating a grade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassPolicy {
    allowed: Vec<GradeClass>,
}

impl ClassPolicy {
    /// Math, Science and History.
    pub fn standard() -> Self {
        Self {
            allowed: vec![GradeClass::Math, GradeClass::Science, GradeClass::History],
        }
    }

    /// The standard classes plus English.
    pub fn with_english() -> Self {
        let mut policy = Self::standard();
        policy.allowed.push(GradeClass::English);
        policy
    }

    pub fn from_flags(allow_english: bool) -> Self {
        if allow_english {
            Self::with_english()
        } else {
            Self::standard()
        }
    }

    pub fn allowed(&self) -> &[GradeClass] {
        &self.allowed
    }

    pub fn allows(&self, class: GradeClass) -> bool {
        self.allowed.contains(&class)
    }

    /// Checks an already-typed class against the allow-list.
    pub fn check(&self, class: GradeClass) -> Result<GradeClass, ValidationError> {
        if self.allows(class) {
            Ok(class)
        } else {
            Err(self.rejection(class.as_str()))
        }
    }

    /// Parses `raw` and checks it against the allow-list.
    pub fn parse(&self, raw: &str) -> Result<GradeClass, ValidationError> {
        match raw.parse::<GradeClass>() {
            Ok(class) => self.check(class),
            Err(_) => Err(self.rejection(raw)),
        }
    }

    fn rejection(&self, raw: &str) -> ValidationError {
        ValidationError::not_allowed("class", self.allowed.iter().map(|c| c.as_str()), raw)
    }
}

impl Default for ClassPolicy {
    fn default() -> Self {
        Self::standard()
    }
}
