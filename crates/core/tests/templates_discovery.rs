use multiad_core::templates::discovery::{TemplateDiscoveryError, discover_templates};
use multiad_core::templates::repository::{TemplateRepoError, TemplateRepository};
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn write(path: &PathBuf, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn discovers_only_yaml_templates() {
    let tmp = tempdir().unwrap();
    let root = tmp.path().join("tpl");

    write(&root.join("grand-opening.yaml"), "name: Grand opening\n");
    write(&root.join("promos").join("summer.yml"), "name: Summer\n");
    write(&root.join("notes.md"), "# nope");
    write(&root.join("promos").join(".draft.yaml"), "name: Draft\n");
    write(&root.join("image.png"), "nope");

    let got = discover_templates(&root).expect("discover ok");
    let names: Vec<String> = got.into_iter().map(|t| t.logical_name).collect();

    assert_eq!(names, vec!["grand-opening".to_string(), "promos/summer".to_string()]);
}

#[test]
fn missing_dir_is_an_error() {
    let tmp = tempdir().unwrap();
    let err = discover_templates(&tmp.path().join("nope")).unwrap_err();
    assert!(matches!(err, TemplateDiscoveryError::MissingDir(_)));
}

#[test]
fn repository_loads_creative() {
    let tmp = tempdir().unwrap();
    let root = tmp.path().join("tpl");
    write(
        &root.join("promos").join("summer.yaml"),
        r#"
name: Summer sale
title: "{{location.name}} summer sale"
body: "Visit us at {{location.address}}, {{location.city}}."
callToAction: Shop Now
landingPageUrl: "{{location.landingPageUrl}}"
imageUrl: https://cdn.example.com/summer.png
"#,
    );
    write(&root.join("bare.yaml"), "title: Hello\n");

    let repo = TemplateRepository::new(&root).unwrap();
    assert_eq!(repo.list_all().len(), 2);

    let ad = repo.get_by_name("promos/summer").unwrap();
    assert_eq!(ad.id, "promos/summer");
    assert_eq!(ad.name, "Summer sale");
    assert_eq!(ad.title, "{{location.name}} summer sale");
    assert_eq!(ad.call_to_action, "Shop Now");
    assert_eq!(ad.image_url.as_deref(), Some("https://cdn.example.com/summer.png"));

    // name falls back to the logical name
    let bare = repo.get_by_name("bare").unwrap();
    assert_eq!(bare.name, "bare");
    assert!(bare.body.is_empty());

    let err = repo.load_many(&["bare", "ghost"]).unwrap_err();
    assert!(matches!(err, TemplateRepoError::NotFound(n) if n == "ghost"));
}

#[test]
fn repository_reports_parse_errors() {
    let tmp = tempdir().unwrap();
    let root = tmp.path().join("tpl");
    write(&root.join("broken.yaml"), "title: [unterminated\n");

    let repo = TemplateRepository::new(&root).unwrap();
    let err = repo.get_by_name("broken").unwrap_err();
    assert!(matches!(err, TemplateRepoError::Parse { .. }));
}
