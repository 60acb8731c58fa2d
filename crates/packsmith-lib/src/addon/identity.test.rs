use super::*;
use std::collections::HashSet;

fn is_uuid_shaped(value: &str) -> bool {
    let groups: Vec<&str> = value.split('-').collect();
    let lengths: Vec<usize> = groups.iter().map(|g| g.len()).collect();
    lengths == [8, 4, 4, 4, 12]
        && groups
            .iter()
            .all(|g| g.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()))
}

#[test]
fn test_module_uuids_are_unique() {
    let ids: HashSet<&str> = MODULE_UUIDS.entries().iter().map(|(_, id)| *id).collect();
    assert_eq!(ids.len(), MODULE_UUIDS.entries().len());
}

#[test]
fn test_module_uuids_are_well_formed() {
    for (name, id) in MODULE_UUIDS.entries() {
        assert!(is_uuid_shaped(id), "{} has malformed uuid '{}'", name, id);
    }
}

#[test]
fn test_module_uuids_are_stable() {
    // Shipped identifiers; players lose upgrade continuity if these move
    assert_eq!(MODULE_UUIDS.bp_header, "7f519716-66c1-4d1c-9bb5-dee36e2cbb6e");
    assert_eq!(MODULE_UUIDS.rp_header, "74c625fe-e814-4e85-a845-4018c1741ac5");
}

#[test]
fn test_default_identity() {
    let identity = AddonIdentity::default();
    assert_eq!(identity.display_name_base, "Untitled Add-on");
    assert_eq!(identity.slug, "untitled-addon");
    assert_eq!(identity.min_engine_version, VersionTriple::new(1, 21, 110));
}

#[test]
fn test_default_slug_is_filesystem_safe() {
    let identity = AddonIdentity::default();
    assert!(
        identity
            .slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    );
}
