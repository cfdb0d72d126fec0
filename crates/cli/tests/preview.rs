mod common;

use assert_cmd::prelude::*;
use common::{Workspace, EWC_PLAN};
use predicates::prelude::*;

#[test]
fn preview_resolves_location_and_campaign() {
    let ws = Workspace::new();
    ws.write_plan("ewc.yaml", EWC_PLAN);

    ws.cmd()
        .args([
            "preview",
            "--plan",
            "ewc.yaml",
            "--location",
            "uptown",
            "--template",
            "Visit {{location.name}} in {{location.city}}, {{location.state}}! Budget: ${{campaign.budget}}",
        ])
        .assert()
        .success()
        .stdout("Visit Uptown in Denver, CO! Budget: $50\n");
}

#[test]
fn preview_without_context_blanks_builtins_and_keeps_custom() {
    let ws = Workspace::new();
    ws.cmd()
        .args(["preview", "--template", "[{{location.name}}] {{custom.promoCode}}"])
        .assert()
        .success()
        .stdout("[] {{custom.promoCode}}\n")
        .stderr(predicate::str::contains("{{custom.promoCode}} left unresolved"));
}

#[test]
fn preview_var_wins_over_plan_override() {
    let ws = Workspace::new();
    ws.write_plan("ewc.yaml", EWC_PLAN);

    ws.cmd()
        .args(["preview", "--plan", "ewc.yaml", "--location", "uptown", "--ad", "promos/code"])
        .assert()
        .success()
        .stdout(predicate::str::contains("title: Use DEN10 at Uptown"))
        .stdout(predicate::str::contains("body: Offer ends 06/30/2025."))
        .stdout(predicate::str::contains("landing_page_url: https://ex.com/uptown"));

    ws.cmd()
        .args([
            "preview", "--plan", "ewc.yaml", "--location", "uptown", "--ad", "promos/code",
            "--var", "promoCode=VIP",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("title: Use VIP at Uptown"));
}

#[test]
fn preview_blank_policy_from_config() {
    let ws = Workspace::with_settings("[templates]\nunresolved_custom = \"blank\"\n");
    ws.cmd()
        .args(["preview", "--template", "code:{{custom.promoCode}}"])
        .assert()
        .success()
        .stdout("code:\n");
}

#[test]
fn preview_unknown_location_fails() {
    let ws = Workspace::new();
    ws.cmd()
        .args(["preview", "--location", "ghost", "--template", "x"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("FAIL multiad preview"))
        .stdout(predicate::str::contains("unknown location 'ghost'"));
}

#[test]
fn preview_rejects_var_without_equals() {
    let ws = Workspace::new();
    ws.cmd()
        .args(["preview", "--template", "{{custom.promoCode}}", "--var", "promoCode"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("FAIL multiad preview"))
        .stdout(predicate::str::contains("invalid --var 'promoCode': expected KEY=VALUE"));
}
