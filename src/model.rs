//! Record model: three record kinds sharing an embedded, identity-free
//! person block.
//!
//! Wire shape notes: the person block nests under a `person` element/key in
//! both encodings, `personalCode` keeps its camel-case spelling, and missing
//! fields decode to their zero values so partial payloads are accepted.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::Kind;

/// Pure value fields, no identity of its own.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Person {
    pub name: String,
    pub surname: String,
    #[serde(rename = "personalCode")]
    pub personal_code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Teacher {
    pub id: String,
    pub subject: String,
    pub salary: f64,
    pub classroom: Vec<String>,
    pub person: Person,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Student {
    pub id: String,
    pub class: String,
    pub person: Person,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Staff {
    pub id: String,
    pub salary: f64,
    pub classroom: String,
    pub phone: String,
    pub person: Person,
}

impl fmt::Display for Teacher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID:{}\tName:{}\tSurname:{}\tSalary:{:.2}\tSubject:{}\tClassroom:[{}]",
            self.id,
            self.person.name,
            self.person.surname,
            self.salary,
            self.subject,
            self.classroom.join(", "),
        )
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID:{}\tName:{}\tSurname:{}\tClass:{}",
            self.id, self.person.name, self.person.surname, self.class,
        )
    }
}

impl fmt::Display for Staff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID:{}\tName:{}\tSurname:{}\tSalary:{:.2}\tClassroom:{}\tPhone:{}",
            self.id, self.person.name, self.person.surname, self.salary, self.classroom, self.phone,
        )
    }
}

/// One stored record, closed over the three kinds.
///
/// The ID is a string-encoded positive integer minted by the store at
/// creation time; it is never reused and never changes afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Teacher(Teacher),
    Student(Student),
    Staff(Staff),
}

impl Record {
    pub fn kind(&self) -> Kind {
        match self {
            Record::Teacher(_) => Kind::Teacher,
            Record::Student(_) => Kind::Student,
            Record::Staff(_) => Kind::Staff,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Record::Teacher(t) => &t.id,
            Record::Student(s) => &s.id,
            Record::Staff(s) => &s.id,
        }
    }

    pub(crate) fn set_id(&mut self, id: String) {
        match self {
            Record::Teacher(t) => t.id = id,
            Record::Student(s) => s.id = id,
            Record::Staff(s) => s.id = id,
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Record::Teacher(t) => t.fmt(f),
            Record::Student(s) => s.fmt(f),
            Record::Staff(s) => s.fmt(f),
        }
    }
}
