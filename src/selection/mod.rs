//! Registro de secciones elegidas durante la sesión.
//!
//! Vive mientras vive el proceso y se comparte entre los workers de actix,
//! así que toda lectura y escritura pasa por el `Mutex`.

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{info, warn};

use crate::catalog::Catalog;
use crate::error::{Result, SchedError};
use crate::models::{ClassId, Section, normalize_code, normalize_section};

#[derive(Debug)]
pub struct SelectionRegistry {
    catalog: Arc<Catalog>,
    selected: Mutex<Vec<Section>>,
}

impl SelectionRegistry {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        SelectionRegistry { catalog, selected: Mutex::new(Vec::new()) }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    // A panic in another handler must not take the session down with it.
    fn lock(&self) -> MutexGuard<'_, Vec<Section>> {
        self.selected.lock().unwrap_or_else(|poisoned| {
            warn!("selection registry lock was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    /// Agrega la primera sección del catálogo que coincide con `(code, section)`.
    ///
    /// No revisa duplicados: elegir dos veces la misma clave deja dos entradas.
    pub fn add(&self, code: &str, section: &str) -> Result<Section> {
        let code = normalize_code(code);
        let section = normalize_section(section);
        let found = self
            .catalog
            .first_by_key(&code, &section)
            .cloned()
            .ok_or_else(|| SchedError::NotFound { code: code.clone(), section: section.clone() })?;

        let mut selected = self.lock();
        selected.push(found.clone());
        info!(code = %code, section = %section, total = selected.len(), "section selected");
        Ok(found)
    }

    /// Quita todas las entradas con la clave de `class_id` y devuelve cuántas salieron.
    pub fn remove(&self, class_id: &str) -> Result<usize> {
        let key: ClassId = class_id.parse()?;
        Ok(self.remove_key(&key))
    }

    pub fn remove_key(&self, key: &ClassId) -> usize {
        let mut selected = self.lock();
        if selected.is_empty() {
            return 0;
        }
        let before = selected.len();
        selected.retain(|s| !s.matches(&key.subject_code, &key.section));
        let removed = before - selected.len();
        info!(class_id = %key, removed, total = selected.len(), "section removed");
        removed
    }

    /// Snapshot of the current picks, in insertion order.
    pub fn list(&self) -> Vec<Section> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> SelectionRegistry {
        let catalog = Catalog::from_sections(vec![
            Section::new("CS101", "A"),
            Section::new("CS101", "A").with_field("Room", "duplicate"),
            Section::new("CS-LAB 1", "X"),
        ]);
        SelectionRegistry::new(Arc::new(catalog))
    }

    #[test]
    fn test_add_takes_first_catalog_match() {
        let reg = registry();
        let sec = reg.add("cs101", "A").unwrap();
        assert!(sec.extra.is_empty());
    }

    #[test]
    fn test_remove_on_empty_registry_is_noop() {
        assert_eq!(registry().remove("CS101-A").unwrap(), 0);
    }

    #[test]
    fn test_remove_hyphenated_code() {
        let reg = registry();
        reg.add("cs-lab 1", "X").unwrap();
        assert_eq!(reg.remove("CS-LAB 1-X").unwrap(), 1);
        assert!(reg.is_empty());
    }

    #[test]
    fn test_clear_empties_registry() {
        let reg = registry();
        reg.add("CS101", "A").unwrap();
        reg.clear();
        assert_eq!(reg.len(), 0);
    }
}
