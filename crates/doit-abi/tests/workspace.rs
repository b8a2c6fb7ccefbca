use std::path::Path;

const LICENSE_LINE: &str = r#"license = "Apache-2.0 OR MIT""#;

#[test]
fn every_crate_declares_the_workspace_license() {
    let crates_dir = Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("crates dir");
    let mut checked = 0;
    for entry in std::fs::read_dir(crates_dir).expect("read crates dir") {
        let manifest = entry.expect("dir entry").path().join("Cargo.toml");
        if !manifest.is_file() {
            continue;
        }
        let text = std::fs::read_to_string(&manifest).expect("read Cargo.toml");
        assert!(
            text.lines().any(|l| l.trim() == LICENSE_LINE),
            "{} lacks {LICENSE_LINE}",
            manifest.display()
        );
        checked += 1;
    }
    assert_eq!(checked, 3);
}
