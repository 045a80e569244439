//! Catálogo de secciones: se carga una sola vez al arrancar y después sólo se lee.
//!
//! El origen es un arreglo JSON de registros (la exportación de AISIS), cada uno
//! con al menos `Subject Code` y `Section`.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Result, SchedError};
use crate::models::{Section, normalize_code, normalize_section};

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    sections: Vec<Section>,
}

impl Catalog {
    /// Builds a catalog from already parsed records, normalizing their keys.
    pub fn from_sections(sections: Vec<Section>) -> Self {
        let sections = sections
            .into_iter()
            .map(|mut s| {
                s.subject_code = normalize_code(&s.subject_code);
                s.section = normalize_section(&s.section);
                s
            })
            .collect();
        Catalog { sections }
    }

    /// Parsea el contenido JSON. `origin` sólo se usa en los mensajes de error.
    pub fn from_json_str(json: &str, origin: &str) -> Result<Self> {
        let sections: Vec<Section> =
            serde_json::from_str(json).map_err(|e| SchedError::load(origin, e))?;
        Ok(Catalog::from_sections(sections))
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let origin = path.display().to_string();
        let contents = fs::read_to_string(path).map_err(|e| SchedError::load(&origin, e))?;
        let catalog = Catalog::from_json_str(&contents, &origin)?;
        info!(path = %origin, sections = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Carga el catálogo resolviendo `name` primero tal cual y luego dentro de `data_dir`.
    pub fn load_from(name: &str, data_dir: &Path) -> Result<Self> {
        let path = resolve_catalog_path(name, data_dir)?;
        Catalog::load(path)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Distinct subject codes, in the order they first appear.
    pub fn subject_codes(&self) -> Vec<String> {
        let mut seen: HashSet<&str> = HashSet::new();
        self.sections
            .iter()
            .filter(|s| seen.insert(s.subject_code.as_str()))
            .map(|s| s.subject_code.clone())
            .collect()
    }

    /// All sections of a subject. An unknown code yields an empty list.
    pub fn filter_by_subject_code(&self, code: &str) -> Vec<Section> {
        let code = normalize_code(code);
        let found: Vec<Section> = self
            .sections
            .iter()
            .filter(|s| s.subject_code == code)
            .cloned()
            .collect();
        debug!(code = %code, matches = found.len(), "filter by subject code");
        found
    }

    /// Secciones que coinciden con código y sección. Puede haber más de una si
    /// el catálogo trae claves duplicadas.
    pub fn filter_by_key(&self, code: &str, section: &str) -> Vec<Section> {
        let code = normalize_code(code);
        let section = normalize_section(section);
        self.sections
            .iter()
            .filter(|s| s.matches(&code, &section))
            .cloned()
            .collect()
    }

    pub(crate) fn first_by_key(&self, code: &str, section: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.matches(code, section))
    }
}

/// Preferir la ruta directa; si no existe, buscar el archivo dentro de `data_dir`.
pub fn resolve_catalog_path(name: &str, data_dir: &Path) -> Result<PathBuf> {
    let direct = Path::new(name);
    if direct.is_file() {
        return Ok(direct.to_path_buf());
    }
    let candidate = data_dir.join(name);
    if candidate.is_file() {
        return Ok(candidate);
    }
    Err(SchedError::load(
        name,
        format!("not found in cwd nor in {}", data_dir.display()),
    ))
}
