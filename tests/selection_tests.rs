use pretty_assertions::assert_eq;
use schedsmart::{Catalog, SchedError, Section, SelectionRegistry};
use std::sync::Arc;
use std::thread;

fn sample_catalog() -> Arc<Catalog> {
    Arc::new(Catalog::from_sections(vec![
        Section::new("CS101", "A").with_field("Time", "M 0800-0900"),
        Section::new("CS101", "B").with_field("Time", "T 0800-0900"),
        Section::new("MATH200", "A").with_field("Time", "W 1000-1100"),
    ]))
}

#[test]
fn test_add_then_list_contains_section() {
    let reg = SelectionRegistry::new(sample_catalog());
    let added = reg.add("cs101", " A ").expect("Debe encontrar CS101-A");
    assert_eq!(added.subject_code, "CS101");
    assert_eq!(added.section, "A");
    assert_eq!(reg.list(), vec![added]);
}

#[test]
fn test_add_unknown_key_is_not_found() {
    let reg = SelectionRegistry::new(sample_catalog());
    let err = reg.add("CS101", "Z").unwrap_err();
    assert!(matches!(err, SchedError::NotFound { ref code, ref section } if code == "CS101" && section == "Z"));
    assert!(reg.is_empty());
}

#[test]
fn test_duplicate_selection_is_kept() {
    let reg = SelectionRegistry::new(sample_catalog());
    reg.add("CS101", "A").unwrap();
    reg.add("CS101", "A").unwrap();
    assert_eq!(reg.len(), 2);
    // removal takes out every copy
    assert_eq!(reg.remove("CS101-A").unwrap(), 2);
    assert!(reg.is_empty());
}

#[test]
fn test_remove_is_idempotent() {
    let reg = SelectionRegistry::new(sample_catalog());
    reg.add("CS101", "A").unwrap();
    reg.add("MATH200", "A").unwrap();
    assert_eq!(reg.remove("CS101-A").unwrap(), 1);
    assert_eq!(reg.remove("CS101-A").unwrap(), 0);
    let left: Vec<String> = reg.list().iter().map(|s| s.class_id().to_string()).collect();
    assert_eq!(left, vec!["MATH200-A"]);
}

#[test]
fn test_remove_malformed_key() {
    let reg = SelectionRegistry::new(sample_catalog());
    assert!(matches!(reg.remove("malformed"), Err(SchedError::MalformedKey(_))));
}

#[test]
fn test_list_preserves_insertion_order() {
    let reg = SelectionRegistry::new(sample_catalog());
    reg.add("MATH200", "A").unwrap();
    reg.add("CS101", "B").unwrap();
    reg.add("CS101", "A").unwrap();
    let ids: Vec<String> = reg.list().iter().map(|s| s.class_id().to_string()).collect();
    assert_eq!(ids, vec!["MATH200-A", "CS101-B", "CS101-A"]);
}

#[test]
fn test_concurrent_adds_are_not_lost() {
    const N: usize = 64;
    let sections: Vec<Section> = (0..N).map(|i| Section::new(&format!("SUBJ{}", i), "A")).collect();
    let reg = Arc::new(SelectionRegistry::new(Arc::new(Catalog::from_sections(sections))));

    let handles: Vec<_> = (0..N)
        .map(|i| {
            let reg = Arc::clone(&reg);
            thread::spawn(move || {
                reg.add(&format!("subj{}", i), "A").expect("add");
            })
        })
        .collect();
    for h in handles {
        h.join().expect("thread panicked");
    }

    assert_eq!(reg.len(), N);
    let mut codes: Vec<String> = reg.list().into_iter().map(|s| s.subject_code).collect();
    codes.sort();
    codes.dedup();
    assert_eq!(codes.len(), N);
}

#[test]
fn test_concurrent_add_and_remove() {
    let reg = Arc::new(SelectionRegistry::new(sample_catalog()));
    for _ in 0..50 {
        reg.add("MATH200", "A").unwrap();
    }

    let adder = {
        let reg = Arc::clone(&reg);
        thread::spawn(move || {
            for _ in 0..50 {
                reg.add("CS101", "B").unwrap();
            }
        })
    };
    let remover = {
        let reg = Arc::clone(&reg);
        thread::spawn(move || reg.remove("MATH200-A").unwrap())
    };
    adder.join().unwrap();
    let removed = remover.join().unwrap();

    assert_eq!(removed, 50);
    assert_eq!(reg.len(), 50);
    assert!(reg.list().iter().all(|s| s.subject_code == "CS101"));
}
