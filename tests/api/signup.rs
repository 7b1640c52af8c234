use std::time::Duration;

use launch_signup::controller::{
    ALREADY_REGISTERED_TITLE, GENERIC_FAILURE_NOTICE, INVALID_EMAIL_NOTICE, PENDING_LABEL,
    POST_SIGNUP_SUBTITLE, SIGNED_UP_TITLE,
};
use launch_signup::domain::UiState;
use launch_signup::share_templates::{render, ShareTemplate};
use launch_signup::ui::{Effect, Element, Slot, UiSurface};
use serde_json::json;
use wiremock::matchers::{any, body_string_contains, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::{spawn_app, spawn_app_with_entry_delay, UiEvent, SUBMIT_LABEL};

fn respond_with(body: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(body)
}

#[tokio::test]
async fn successful_signup_shows_the_referral_link_everywhere() {
    // Arrange
    let app = spawn_app("ursula@domain.com").await;

    Mock::given(path("/signup"))
        .and(method("POST"))
        .respond_with(respond_with(json!({
            "status": "success",
            "referral_link": "http://x/r/1"
        })))
        .expect(1)
        .mount(&app.signup_server)
        .await;

    let mut states = app.controller.subscribe();

    // Act
    let state = app.click_submit().await;

    // Assert
    assert_eq!(state, UiState::Success);
    assert!(states.has_changed().unwrap());
    assert_eq!(*states.borrow_and_update(), UiState::Success);
    assert_eq!(app.controller.state(), UiState::Success);
    let surface = app.surface();
    assert_eq!(surface.text(Slot::ReferralLink), "http://x/r/1");
    for (template, slot) in [
        (ShareTemplate::Twitter, Slot::TwitterShare),
        (ShareTemplate::Facebook, Slot::FacebookShare),
        (ShareTemplate::LinkedIn, Slot::LinkedInShare),
    ] {
        assert_eq!(surface.text(slot), render(template, "http://x/r/1"));
        assert!(surface.text(slot).contains("http://x/r/1"));
    }
    assert_eq!(surface.text(Slot::Title), SIGNED_UP_TITLE);
    assert_eq!(surface.text(Slot::Subtitle), POST_SIGNUP_SUBTITLE);
    assert!(surface.alerts().is_empty());
}

#[tokio::test]
async fn successful_signup_swaps_the_signup_panel_for_the_post_signup_panel() {
    let app = spawn_app("ursula@domain.com").await;

    Mock::given(any())
        .respond_with(respond_with(json!({
            "status": "success",
            "referral_link": "http://x/r/1"
        })))
        .mount(&app.signup_server)
        .await;

    app.click_submit().await;

    assert_eq!(
        app.surface().transitions(),
        vec![
            (Element::Signup, Effect::fade_out(400)),
            (Element::PostSignup, Effect::fade_in(200)),
        ]
    );
}

#[tokio::test]
async fn page_is_updated_in_order() {
    let app = spawn_app("ursula@domain.com").await;

    Mock::given(any())
        .respond_with(respond_with(json!({
            "status": "success",
            "referral_link": "http://x/r/1"
        })))
        .mount(&app.signup_server)
        .await;

    app.click_submit().await;

    let order: Vec<String> = app
        .surface()
        .events()
        .into_iter()
        .map(|event| match event {
            UiEvent::Text(slot, _) | UiEvent::Html(slot, _) => format!("{:?}", slot),
            UiEvent::Transition(element, _) => format!("{:?}", element),
            UiEvent::Alert(_) => "Alert".to_string(),
        })
        .collect();
    assert_eq!(
        order,
        vec![
            "SubmitButton",
            "ReferralLink",
            "TwitterShare",
            "LinkedInShare",
            "FacebookShare",
            "Signup",
            "Title",
            "Subtitle",
            "PostSignup",
        ]
    );
    assert_eq!(
        app.surface().events()[0],
        UiEvent::Text(Slot::SubmitButton, PENDING_LABEL.to_string())
    );
}

#[tokio::test]
async fn already_registered_email_gets_its_own_title() {
    let app = spawn_app("ursula@domain.com").await;

    Mock::given(path("/signup"))
        .and(method("POST"))
        .respond_with(respond_with(json!({
            "status": "registered",
            "referral_link": "http://x/r/1"
        })))
        .expect(1)
        .mount(&app.signup_server)
        .await;

    let state = app.click_submit().await;

    assert_eq!(state, UiState::AlreadyRegistered);
    let surface = app.surface();
    assert_eq!(surface.text(Slot::Title), ALREADY_REGISTERED_TITLE);
    assert_eq!(surface.text(Slot::ReferralLink), "http://x/r/1");
    assert_eq!(
        surface.text(Slot::TwitterShare),
        render(ShareTemplate::Twitter, "http://x/r/1")
    );
    assert_eq!(surface.transitions().len(), 2);
}

#[tokio::test]
async fn form_fields_are_posted_url_encoded() {
    let app = spawn_app("ursula@domain.com").await;

    Mock::given(path("/signup"))
        .and(method("POST"))
        .and(body_string_contains("email=ursula%40domain.com"))
        .and(body_string_contains("source=landing"))
        .respond_with(respond_with(json!({
            "status": "success",
            "referral_link": "http://x/r/1"
        })))
        .expect(1)
        .mount(&app.signup_server)
        .await;

    assert_eq!(app.click_submit().await, UiState::Success);
}

#[tokio::test]
async fn failure_surfaces_the_server_message() {
    let app = spawn_app("ursula@domain.com").await;

    Mock::given(any())
        .respond_with(respond_with(json!({
            "status": "failure",
            "msg": "email taken"
        })))
        .expect(1)
        .mount(&app.signup_server)
        .await;

    let state = app.click_submit().await;

    assert_eq!(state, UiState::SubmissionError);
    assert_eq!(app.surface().alerts(), vec!["email taken".to_string()]);
    assert_eq!(app.surface().text(Slot::SubmitButton), SUBMIT_LABEL);
    assert!(app.surface().transitions().is_empty());
}

#[tokio::test]
async fn failure_without_a_message_surfaces_a_generic_notice() {
    let app = spawn_app("ursula@domain.com").await;

    Mock::given(any())
        .respond_with(respond_with(json!({"status": "failure"})))
        .mount(&app.signup_server)
        .await;

    assert_eq!(app.click_submit().await, UiState::SubmissionError);
    assert_eq!(
        app.surface().alerts(),
        vec![GENERIC_FAILURE_NOTICE.to_string()]
    );
}

#[tokio::test]
async fn unrecognised_status_is_a_submission_error() {
    let app = spawn_app("ursula@domain.com").await;

    Mock::given(any())
        .respond_with(respond_with(json!({
            "status": "waitlisted",
            "msg": "come back later"
        })))
        .mount(&app.signup_server)
        .await;

    assert_eq!(app.click_submit().await, UiState::SubmissionError);
    assert_eq!(app.surface().alerts(), vec!["come back later".to_string()]);
}

#[tokio::test]
async fn invalid_email_is_never_submitted() {
    let app = spawn_app("not-an-email").await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.signup_server)
        .await;

    let state = app.click_submit().await;

    assert_eq!(state, UiState::ValidationError);
    assert!(state.is_recoverable_error());
    assert_eq!(
        app.surface().alerts(),
        vec![INVALID_EMAIL_NOTICE.to_string()]
    );
    assert_eq!(app.surface().text(Slot::SubmitButton), SUBMIT_LABEL);
}

#[tokio::test]
async fn invalid_emails_are_rejected_before_submission() {
    let app = spawn_app("").await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.signup_server)
        .await;

    let test_cases = vec![
        ("", "empty"),
        ("ursuladomain.com", "missing @"),
        ("ursula@domain", "missing top level domain"),
        ("ursula@domain.abcde", "top level domain too long"),
    ];
    for (email, description) in test_cases {
        app.surface().type_email(email);
        assert_eq!(
            app.click_submit().await,
            UiState::ValidationError,
            "Test Failed for: {}",
            description
        );
    }
}

#[tokio::test]
async fn network_failure_is_surfaced_and_recoverable() {
    let app = spawn_app("ursula@domain.com").await;

    Mock::given(any())
        .respond_with(
            respond_with(json!({"status": "success", "referral_link": "http://x/r/1"}))
                .set_delay(Duration::from_secs(30)),
        )
        .mount(&app.signup_server)
        .await;

    let state = app.click_submit().await;

    assert_eq!(state, UiState::SubmissionError);
    assert_eq!(
        app.surface().alerts(),
        vec![GENERIC_FAILURE_NOTICE.to_string()]
    );
    assert_eq!(app.surface().text(Slot::SubmitButton), SUBMIT_LABEL);
}

#[tokio::test]
async fn unreadable_response_is_a_submission_error() {
    let app = spawn_app("ursula@domain.com").await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&app.signup_server)
        .await;

    assert_eq!(app.click_submit().await, UiState::SubmissionError);
    assert_eq!(
        app.surface().alerts(),
        vec![GENERIC_FAILURE_NOTICE.to_string()]
    );
}

#[tokio::test]
async fn user_can_retry_after_a_failure() {
    let app = spawn_app("ursula@domain.com").await;

    Mock::given(any())
        .respond_with(respond_with(json!({"status": "failure", "msg": "try again"})))
        .up_to_n_times(1)
        .expect(1)
        .mount(&app.signup_server)
        .await;
    Mock::given(any())
        .respond_with(respond_with(json!({
            "status": "success",
            "referral_link": "http://x/r/1"
        })))
        .expect(1)
        .mount(&app.signup_server)
        .await;

    let state = app.click_submit().await;
    assert_eq!(state, UiState::SubmissionError);
    assert!(state.is_recoverable_error());
    assert!(!state.is_terminal());

    let state = app.click_submit().await;
    assert_eq!(state, UiState::Success);
    assert!(state.is_terminal());
    assert!(!state.is_recoverable_error());
}

#[tokio::test]
async fn clicks_after_a_successful_signup_are_ignored() {
    let app = spawn_app("ursula@domain.com").await;

    Mock::given(any())
        .respond_with(respond_with(json!({
            "status": "success",
            "referral_link": "http://x/r/1"
        })))
        .expect(1)
        .mount(&app.signup_server)
        .await;

    assert_eq!(app.click_submit().await, UiState::Success);
    assert_eq!(app.click_submit().await, UiState::Success);
}

#[tokio::test]
async fn a_second_click_while_submitting_is_ignored() {
    let app = spawn_app("ursula@domain.com").await;

    Mock::given(any())
        .respond_with(
            respond_with(json!({"status": "success", "referral_link": "http://x/r/1"}))
                .set_delay(Duration::from_millis(100)),
        )
        .expect(1)
        .mount(&app.signup_server)
        .await;

    let (first, second) = tokio::join!(app.click_submit(), async {
        tokio::task::yield_now().await;
        app.click_submit().await
    });

    assert_eq!(first, UiState::Success);
    assert_eq!(second, UiState::Submitting);
}

#[tokio::test]
async fn submitting_during_the_entry_sequence_is_tolerated() {
    let app = spawn_app_with_entry_delay("ursula@domain.com", Duration::from_millis(50)).await;

    Mock::given(any())
        .respond_with(respond_with(json!({
            "status": "success",
            "referral_link": "http://x/r/1"
        })))
        .expect(1)
        .mount(&app.signup_server)
        .await;

    let (entry, state) = tokio::join!(app.controller.run_entry_sequence(), app.click_submit());

    assert!(entry.is_ok());
    assert_eq!(state, UiState::Success);
    // The finished reveal does not pull the page back to the form.
    assert_eq!(app.controller.state(), UiState::Success);
}
