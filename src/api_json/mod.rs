use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, SchedError};

pub mod handlers;

/// Cuerpo de `POST /get_schedules`
///
/// ```json
/// { "code": "CS101" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetSchedulesRequest {
	pub code: String,
}

/// Cuerpo de `POST /select_section`
///
/// ```json
/// { "new_code": "CS101", "new_section": "A" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectSectionRequest {
	pub new_code: String,
	pub new_section: String,
}

/// Cuerpo de `POST /remove_section`. `class_id` tiene la forma `<subjectCode>-<section>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoveSectionRequest {
	pub class_id: String,
}

impl GetSchedulesRequest {
	pub fn from_value(body: &Value) -> Result<Self> {
		Ok(GetSchedulesRequest { code: require_str(body, "code")? })
	}
}

impl SelectSectionRequest {
	pub fn from_value(body: &Value) -> Result<Self> {
		Ok(SelectSectionRequest {
			new_code: require_str(body, "new_code")?,
			new_section: require_str(body, "new_section")?,
		})
	}
}

impl RemoveSectionRequest {
	pub fn from_value(body: &Value) -> Result<Self> {
		Ok(RemoveSectionRequest { class_id: require_str(body, "class_id")? })
	}
}

/// Extrae un campo de texto obligatorio del cuerpo JSON.
///
/// Falla con `SchedError::Validation` si el cuerpo no es un objeto, si falta el
/// campo, si no es string o si queda vacío tras `trim`.
pub fn require_str(body: &Value, field: &str) -> Result<String> {
	let obj = match body.as_object() {
		Some(o) => o,
		None => return Err(SchedError::Validation("No data provided".to_string())),
	};
	match obj.get(field) {
		None | Some(Value::Null) => Err(SchedError::Validation(format!("No {} provided", field))),
		Some(Value::String(s)) if s.trim().is_empty() => {
			Err(SchedError::Validation(format!("No {} provided", field)))
		}
		Some(Value::String(s)) => Ok(s.clone()),
		Some(other) => Err(SchedError::Validation(format!(
			"field '{}' must be a string, got {}",
			field, other
		))),
	}
}
