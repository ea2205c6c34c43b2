use std::fmt;
use std::str::FromStr;

use crate::core::RosterError;

/// The closed set of record kinds the store serves.
///
/// Wire payloads name kinds with the capitalized spellings below; anything
/// else is rejected with [`RosterError::UnknownObjectKind`] carrying the
/// offending string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Teacher,
    Student,
    Staff,
}

impl Kind {
    pub const ALL: [Kind; 3] = [Kind::Teacher, Kind::Student, Kind::Staff];

    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Teacher => "Teacher",
            Kind::Student => "Student",
            Kind::Staff => "Staff",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Teacher" => Ok(Kind::Teacher),
            "Student" => Ok(Kind::Student),
            "Staff" => Ok(Kind::Staff),
            other => Err(RosterError::UnknownObjectKind(other.to_string())),
        }
    }
}

/// The closed set of verbs an envelope may request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Create,
    Read,
    Update,
    Delete,
}

impl Verb {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Create => "create",
            Verb::Read => "read",
            Verb::Update => "update",
            Verb::Delete => "delete",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verb {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "create" => Ok(Verb::Create),
            "read" => Ok(Verb::Read),
            "update" => Ok(Verb::Update),
            "delete" => Ok(Verb::Delete),
            other => Err(RosterError::UnknownVerb(other.to_string())),
        }
    }
}
