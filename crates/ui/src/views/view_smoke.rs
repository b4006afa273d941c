use verify_core::fixtures::{INTERVIEW_PROMPTS, RUN_OUTPUT};
use verify_core::model::{Destination, StageId};

use super::test_harness::{
    ViewKind, setup_routed_harness, setup_signed_in_harness, setup_signed_in_routed_harness,
    setup_view_harness,
};

#[tokio::test(flavor = "current_thread")]
async fn home_view_invites_sign_in_when_signed_out() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Get Started"), "missing CTA in {html}");
    assert!(html.contains("How It Works"), "missing steps in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_links_to_dashboard_when_signed_in() {
    let mut harness = setup_signed_in_harness(ViewKind::Home, "Ada").await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Go to Dashboard"), "missing CTA in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn login_view_renders_form() {
    let mut harness = setup_view_harness(ViewKind::Login);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Account Access"), "missing heading in {html}");
    assert!(html.contains("Sign In"), "missing submit in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_view_greets_and_points_at_upload() {
    let mut harness = setup_signed_in_harness(ViewKind::Dashboard, "Ada").await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Welcome, Ada"), "missing greeting in {html}");
    assert!(html.contains("0 of 4 completed"), "missing progress in {html}");
    assert!(html.contains("Current step"), "missing stage status in {html}");
    assert!(html.contains("Continue: Resume Upload"), "missing continue in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_view_reflects_completed_stage() {
    let mut harness = setup_signed_in_harness(ViewKind::Dashboard, "Ada").await;
    harness
        .services
        .progress()
        .mark_completed(StageId::Upload)
        .expect("mark upload");
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("1 of 4 completed"), "missing progress in {html}");
    assert!(html.contains("Review"), "missing review action in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn upload_view_starts_idle() {
    let mut harness = setup_signed_in_harness(ViewKind::Upload, "Ada").await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Upload your resume"), "missing status in {html}");
    assert!(html.contains("Supports PDF, DOCX (Max 5MB)"), "missing hint in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn assessment_view_requires_proctoring_first() {
    let mut harness = setup_signed_in_harness(ViewKind::Assessment, "Ada").await;
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("Proctoring Setup Required"),
        "missing gate notice in {html}"
    );
    assert!(html.contains("Enable Camera"), "missing camera action in {html}");
    assert!(
        html.contains("Camera must be enabled first"),
        "missing face hint in {html}"
    );
    assert!(!html.contains("Technical Questions"), "tabs shown early in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn chat_panel_asks_first_prompt() {
    let mut harness = setup_view_harness(ViewKind::Chat);
    harness.rebuild();
    let first = INTERVIEW_PROMPTS[0];
    let html = harness.drive_until(|html| html.contains(first)).await;
    assert!(html.contains(first), "missing first prompt in {html}");
    assert!(html.contains("Question 1 of 10"), "missing progress in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn code_panel_shows_first_challenge() {
    let mut harness = setup_view_harness(ViewKind::Code);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Array Sum"), "missing challenge in {html}");
    assert!(html.contains("Challenge 1 of 3"), "missing position in {html}");
    assert!(html.contains("Submit Solution"), "missing submit in {html}");
    assert!(!html.contains(RUN_OUTPUT), "output shown before running in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn verify_view_shows_first_question() {
    let mut harness = setup_signed_in_harness(ViewKind::Verify, "Ada").await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Verify Your Skills"), "missing heading in {html}");
    assert!(html.contains("Question 1 of 3"), "missing position in {html}");
    assert!(
        html.contains("Which of the following is NOT a JavaScript data type?"),
        "missing prompt in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn background_view_lists_timeline_before_verifying() {
    let mut harness = setup_signed_in_harness(ViewKind::Background, "Ada").await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Verify All"), "missing action in {html}");
    assert!(html.contains("CreativeTech Studio"), "missing entry in {html}");
    assert!(!html.contains("Mismatch Detected"), "verdict shown early in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn report_view_marks_stage_and_renders_summary() {
    let mut harness = setup_signed_in_harness(ViewKind::Report, "Ada").await;
    harness.rebuild();
    let html = harness.render();
    assert!(
        harness.services.progress().snapshot().is_completed(StageId::Report),
        "report stage not recorded"
    );
    assert!(html.contains("Overall Verification Score"), "missing score in {html}");
    assert!(html.contains("High Priority"), "missing priority in {html}");
    assert!(html.contains("Download Report"), "missing download in {html}");
    assert!(html.contains("Skill quiz: not taken yet"), "missing quiz line in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn not_found_view_offers_way_home() {
    let mut harness = setup_view_harness(ViewKind::NotFound);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("404"), "missing code in {html}");
    assert!(html.contains("Return to Home"), "missing link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn protected_route_sends_signed_out_visitor_to_login() {
    let mut harness = setup_routed_harness("/dashboard");
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("Redirecting to sign in..."),
        "missing redirect notice in {html}"
    );
    assert_eq!(
        harness.services.access().pending_destination(),
        Some(Destination::Dashboard)
    );

    let html = harness
        .drive_until(|html| html.contains("Account Access"))
        .await;
    assert!(html.contains("Account Access"), "login page not shown in {html}");
    assert!(
        html.contains("Sign in to continue to /dashboard."),
        "missing pending destination in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn protected_route_renders_for_signed_in_visitor() {
    let mut harness = setup_signed_in_routed_harness("/dashboard", "Ada").await;
    harness.rebuild();
    let html = harness.render();
    assert!(!html.contains("Redirecting to sign in..."), "redirected in {html}");
    assert!(html.contains("Welcome, Ada"), "missing dashboard in {html}");
}
