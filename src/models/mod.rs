// Estructuras de datos principales
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::SchedError;

/// Una sección del catálogo.
///
/// Sólo `Subject Code` y `Section` son obligatorios; el resto de columnas
/// (horario, sala, profesor...) viaja tal cual en `extra` y se vuelve a
/// serializar en el mismo orden en que venía.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    #[serde(rename = "Subject Code")]
    pub subject_code: String,
    #[serde(rename = "Section", deserialize_with = "string_or_number")]
    pub section: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Section {
    pub fn new(subject_code: &str, section: &str) -> Self {
        Section {
            subject_code: normalize_code(subject_code),
            section: normalize_section(section),
            extra: Map::new(),
        }
    }

    /// Builder helper for descriptive columns.
    pub fn with_field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.extra.insert(key.to_string(), value.into());
        self
    }

    pub fn matches(&self, code: &str, section: &str) -> bool {
        self.subject_code == code && self.section == section
    }

    pub fn class_id(&self) -> ClassId {
        ClassId {
            subject_code: self.subject_code.clone(),
            section: self.section.clone(),
        }
    }
}

/// Subject codes are compared uppercase and without surrounding blanks.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}

pub fn normalize_section(section: &str) -> String {
    section.trim().to_string()
}

// Section ids sometimes come out of the spreadsheet export as numbers (1 instead of "1").
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number for Section, got {}",
            other
        ))),
    }
}

/// Clave compuesta `<subjectCode>-<section>` usada para quitar selecciones.
///
/// Se separa por el *último* guion: el código puede contener guiones, la sección no.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassId {
    pub subject_code: String,
    pub section: String,
}

impl FromStr for ClassId {
    type Err = SchedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.rsplit_once('-') {
            Some((code, section)) => Ok(ClassId {
                subject_code: normalize_code(code),
                section: normalize_section(section),
            }),
            None => Err(SchedError::MalformedKey(s.to_string())),
        }
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.subject_code, self.section)
    }
}
