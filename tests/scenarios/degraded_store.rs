//! Scenario: a corrupt store degrades to an empty inventory.
//!
//! A store that cannot be parsed is indistinguishable from an empty
//! one - the session keeps working and the next successful mutation
//! rewrites the file.

use crate::common::TestEnv;

#[test]
fn scenario_corrupt_store_behaves_like_empty() {
    let env = TestEnv::new();
    std::fs::write(env.data_file(), "{ bad json").unwrap();

    // reads see an empty inventory, not an error
    let result = env.run(&["list"]);
    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("No devices found."));

    // the next mutation overwrites the corrupt file wholesale
    env.seed(&[("A1", "Sensor 1", "10.0.0.1")]);
    assert_eq!(env.persisted_ids(), ["A1"]);
}

#[test]
fn scenario_store_with_unknown_fields_still_loads() {
    let env = TestEnv::new();
    std::fs::write(
        env.data_file(),
        r#"[{ "Id": "A1", "Name": "Sensor 1", "IpAddress": "10.0.0.1", "Status": "Online", "Location": "roof" }]"#,
    )
    .unwrap();

    let result = env.run(&["list"]);
    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("Sensor 1"));
    assert!(result.stdout.trim_end().ends_with("Online"));
}
