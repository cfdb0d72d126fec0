mod common;

use assert_cmd::prelude::*;
use common::Workspace;
use multiad_core::plan::CampaignPlan;
use predicates::prelude::*;

#[test]
fn new_writes_plan_under_campaigns_dir() {
    let ws = Workspace::new();
    ws.cmd()
        .args([
            "new", "--batch", "--output", "spring.yaml",
            "--name", "Spring Refresh",
            "--objective", "Traffic",
            "--budget", "75.5",
            "--start", "03/01/2026",
            "--days", "14",
            "--group", "colorado",
            "--ad", "visit",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("OK   multiad new"))
        .stdout(predicate::str::contains("2 locations x 1 ads, 03/01/2026 - 03/14/2026"));

    let plan = CampaignPlan::load(&ws.root().join("campaigns").join("spring.yaml")).unwrap();
    assert_eq!(plan.campaign.name, "Spring Refresh");
    assert_eq!(plan.campaign.platform, "Meta");
    assert_eq!(plan.campaign.budget, 75.5);
    assert_eq!(plan.campaign.end_date, "03/14/2026");
    assert_eq!(plan.groups, vec!["colorado"]);
    assert_eq!(plan.ads, vec!["visit"]);
}

#[test]
fn new_in_batch_mode_reports_missing_flag() {
    let ws = Workspace::new();
    ws.cmd()
        .args(["new", "--batch", "--output", "x.yaml", "--objective", "Traffic"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("FAIL multiad new"))
        .stdout(predicate::str::contains("missing required value: --name"));
}

#[test]
fn new_rejects_invalid_campaign() {
    let ws = Workspace::new();
    ws.cmd()
        .args([
            "new", "--batch", "--output", "x.yaml",
            "--name", "Bad",
            "--objective", "Traffic",
            "--budget", "0",
            "--start", "06/10/2025",
            "--end", "06/01/2025",
            "--location", "uptown",
            "--ad", "visit",
        ])
        .assert()
        .failure()
        .stdout(predicate::str::contains("budget must be greater than zero"))
        .stdout(predicate::str::contains("is before start date"));
    assert!(!ws.root().join("campaigns").join("x.yaml").exists());
}

#[test]
fn new_rejects_unknown_selection() {
    let ws = Workspace::new();
    ws.cmd()
        .args([
            "new", "--batch", "--output", "x.yaml",
            "--name", "Promo",
            "--objective", "Sales",
            "--budget", "20",
            "--start", "2025-06-01",
            "--days", "7",
            "--location", "uptown",
            "--ad", "missing-template",
        ])
        .assert()
        .failure()
        .stdout(predicate::str::contains("template not found: missing-template"));
}

fn base_args() -> Vec<&'static str> {
    vec![
        "new", "--batch", "--output", "promo.yaml",
        "--name", "Promo",
        "--objective", "Sales",
        "--budget", "40",
        "--start", "06/01/2025",
        "--days", "30",
        "--group", "colorado",
        "--ad", "promos/code",
    ]
}

#[test]
fn new_saves_location_overrides() {
    let ws = Workspace::new();
    ws.cmd()
        .args(base_args())
        .args([
            "--override", "uptown:promoCode=DEN10",
            "--override", "pearl:promoCode=BOU10",
            "--override", "uptown:url=https://ex.com/a?b=c",
        ])
        .assert()
        .success();

    let plan = CampaignPlan::load(&ws.root().join("campaigns").join("promo.yaml")).unwrap();
    assert_eq!(plan.overrides.len(), 2);
    assert_eq!(plan.overrides["uptown"].get("promoCode").map(String::as_str), Some("DEN10"));
    assert_eq!(
        plan.overrides["uptown"].get("url").map(String::as_str),
        Some("https://ex.com/a?b=c")
    );
    assert_eq!(plan.overrides["pearl"].get("promoCode").map(String::as_str), Some("BOU10"));

    // saved overrides feed the resolver
    ws.cmd()
        .args(["preview", "--plan", "promo.yaml", "--location", "pearl", "--ad", "promos/code"])
        .assert()
        .success()
        .stdout(predicate::str::contains("title: Use BOU10 at Pearl Street"));
}

#[test]
fn new_rejects_override_for_unknown_location() {
    let ws = Workspace::new();
    ws.cmd()
        .args(base_args())
        .args(["--override", "ghost:promoCode=X"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("unknown location 'ghost' in --override"));
    assert!(!ws.root().join("campaigns").join("promo.yaml").exists());
}

#[test]
fn new_rejects_malformed_override() {
    let ws = Workspace::new();
    ws.cmd()
        .args(base_args())
        .args(["--override", "uptown-promoCode=X"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("expected ID:KEY=VALUE"));
}
