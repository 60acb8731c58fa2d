use super::*;
use crate::addon::identity::MODULE_UUIDS;
use serde_json::json;

fn build_pair(version: VersionTriple) -> ManifestPair {
    synthesize_manifests(
        &AddonIdentity::default(),
        &MODULE_UUIDS,
        version,
        "Untitled Add-on v1.2.3",
    )
}

#[test]
fn test_headers_share_version_and_engine_version() {
    let pair = build_pair(VersionTriple::new(1, 2, 3));
    assert_eq!(pair.behavior.header.version, pair.resource.header.version);
    assert_eq!(
        pair.behavior.header.min_engine_version,
        pair.resource.header.min_engine_version
    );
    assert_eq!(pair.behavior.header.name, pair.resource.header.name);
    assert_eq!(pair.behavior.format_version, pair.resource.format_version);
    assert_eq!(pair.behavior.header.min_engine_version, VersionTriple::new(1, 21, 110));
}

#[test]
fn test_behavior_manifest_modules() {
    let pair = build_pair(VersionTriple::new(1, 2, 3));
    let modules = &pair.behavior.modules;
    assert_eq!(modules.len(), 2);
    assert_eq!(modules[0].uuid(), MODULE_UUIDS.bp_data_module);

    match &modules[1] {
        ModuleDescriptor::Script {
            language,
            uuid,
            entry,
            version,
        } => {
            assert_eq!(language, "javascript");
            assert_eq!(uuid, MODULE_UUIDS.bp_scripts_module);
            assert_eq!(entry, "scripts/index.js");
            assert_eq!(*version, VersionTriple::new(1, 2, 3));
        }
        other => panic!("Expected script module, got {:?}", other),
    }
}

#[test]
fn test_behavior_manifest_links_resource_pack() {
    let pair = build_pair(VersionTriple::new(0, 3, 0));
    assert_eq!(
        pair.behavior.dependencies[0],
        DependencyDescriptor::Pack {
            uuid: pair.resource.header.uuid.clone(),
            version: pair.resource.header.version,
        }
    );
    assert_eq!(
        pair.behavior.dependencies[1],
        DependencyDescriptor::Platform {
            module_name: "@minecraft/server".to_string(),
            version: "2.2.0".to_string(),
        }
    );
    assert!(pair.behavior.capabilities.is_none());
}

#[test]
fn test_resource_manifest_always_enables_pbr() {
    let pair = build_pair(VersionTriple::new(0, 0, 1));
    assert_eq!(pair.resource.modules.len(), 1);
    assert_eq!(pair.resource.modules[0].uuid(), MODULE_UUIDS.rp_resources_module);
    assert!(pair.resource.dependencies.is_empty());
    assert!(pair.resource.capabilities.as_ref().unwrap().contains("pbr"));
}

#[test]
fn test_behavior_manifest_json_shape() {
    let pair = build_pair(VersionTriple::new(1, 2, 3));
    let value = serde_json::to_value(&pair.behavior).unwrap();

    assert_eq!(
        value,
        json!({
            "format_version": 2,
            "header": {
                "name": "Untitled Add-on v1.2.3",
                "description": "No description.",
                "uuid": "7f519716-66c1-4d1c-9bb5-dee36e2cbb6e",
                "version": [1, 2, 3],
                "min_engine_version": [1, 21, 110]
            },
            "modules": [
                {
                    "type": "data",
                    "uuid": "c30672bb-446a-458f-95ed-3b8a6e17c999",
                    "version": [1, 2, 3]
                },
                {
                    "type": "script",
                    "language": "javascript",
                    "uuid": "9ca92e58-0e77-4117-a0fb-44484dd1418f",
                    "version": [1, 2, 3],
                    "entry": "scripts/index.js"
                }
            ],
            "dependencies": [
                { "uuid": "74c625fe-e814-4e85-a845-4018c1741ac5", "version": [1, 2, 3] },
                { "module_name": "@minecraft/server", "version": "2.2.0" }
            ]
        })
    );
}

#[test]
fn test_resource_manifest_json_omits_dependencies() {
    let pair = build_pair(VersionTriple::new(1, 2, 3));
    let value = serde_json::to_value(&pair.resource).unwrap();

    assert!(value.get("dependencies").is_none());
    assert_eq!(value["capabilities"], json!(["pbr"]));
    assert_eq!(value["modules"][0]["type"], "resources");
}

#[test]
fn test_manifest_reads_back() {
    let pair = build_pair(VersionTriple::new(4, 5, 6));
    let text = serde_json::to_string(&pair.behavior).unwrap();
    let parsed: ManifestDocument = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, pair.behavior);
}
