//! Card Flow Integration Tests
//!
//! Drives the whole app through its event API:
//! - Splash → Home → CardMaker → Preview
//! - Image picker outcomes
//! - Timers firing after their screen was dismissed

use async_trait::async_trait;
use card_core::{
    AppConfig, BackgroundColor, CardApp, CardData, CardError, Decoration, FontFamily, FontSize,
    ImageFormat, ImagePicker, LocalImage, PickError, PickOutcome, PickRequest, Route, Screen,
    UiEvent,
};

/// Picker that always answers the same way.
struct FixedPicker(Result<PickOutcome, PickError>);

#[async_trait]
impl ImagePicker for FixedPicker {
    async fn pick(&self, request: &PickRequest) -> Result<PickOutcome, PickError> {
        assert!(request.images_only);
        assert_eq!(request.aspect, (4, 3));
        self.0.clone()
    }
}

/// Launch with default delays and walk to the composer. Returns the time.
fn app_at_composer() -> (CardApp, u64) {
    let mut app = CardApp::new(AppConfig::default());
    app.advance_to(3000);
    app.handle(UiEvent::CreateCard, 3500).expect("event applies");
    app.advance_to(5500);
    assert_eq!(app.current_route(), Route::CardMaker);
    (app, 5500)
}

fn composer_card(app: &CardApp) -> &CardData {
    match &app.current().screen {
        Screen::Composer(composer) => composer.card(),
        other => panic!("Expected composer, got {:?}", other.route()),
    }
}

fn preview_card(app: &CardApp) -> &CardData {
    match &app.current().screen {
        Screen::Preview(preview) => preview.card(),
        other => panic!("Expected preview, got {:?}", other.route()),
    }
}

// ============================================================================
// Navigation Flow Tests
// ============================================================================

#[test]
fn test_splash_auto_advances_to_home() {
    let mut app = CardApp::new(AppConfig::default());
    assert_eq!(app.current_route(), Route::Splash);

    app.advance_to(3000);

    assert_eq!(app.current_route(), Route::Home);
    assert_eq!(app.navigator().depth(), 1, "splash is replaced, not stacked");
}

#[test]
fn test_home_shows_spinner_before_composer() {
    let mut app = CardApp::new(AppConfig::default());
    app.advance_to(3000);
    app.handle(UiEvent::CreateCard, 4000).expect("event applies");

    match &app.current().screen {
        Screen::Home(home) => assert!(home.busy().is_busy()),
        other => panic!("Expected home, got {:?}", other.route()),
    }

    app.advance_to(5999);
    assert_eq!(app.current_route(), Route::Home);
    app.advance_to(6000);
    assert_eq!(app.current_route(), Route::CardMaker);

    app.handle(UiEvent::Back, 6100).expect("event applies");
    match &app.current().screen {
        Screen::Home(home) => assert!(!home.busy().is_busy()),
        other => panic!("Expected home, got {:?}", other.route()),
    }
}

#[test]
fn test_end_to_end_birthday_card() {
    let (mut app, t) = app_at_composer();

    let events = [
        UiEvent::RecipientNameChanged("Sam".to_string()),
        UiEvent::MessageChanged("Happy Birthday!".to_string()),
        UiEvent::ToggleBold,
        UiEvent::DecorationAdded(Decoration::PartyPopper),
        UiEvent::DecorationAdded(Decoration::PartyPopper),
        UiEvent::Confirm,
    ];
    for (i, event) in events.into_iter().enumerate() {
        app.handle(event, t + 100 * (i as u64 + 1))
            .expect("composer accepts input");
    }

    assert_eq!(app.current_route(), Route::CardMaker);
    app.advance_to(t + 2600);
    assert_eq!(app.current_route(), Route::Preview);

    let card = preview_card(&app);
    assert_eq!(card.recipient_name(), "Sam");
    assert_eq!(card.message(), "Happy Birthday!");
    assert!(card.is_bold());
    assert!(!card.is_italic());
    assert!(!card.is_underline());
    assert_eq!(
        card.decorations(),
        &[Decoration::PartyPopper, Decoration::PartyPopper]
    );
    assert_eq!(card.background_color(), BackgroundColor::default());
    assert_eq!(card.font_family(), FontFamily::default());
    assert_eq!(card.font_size(), FontSize::default());
    assert!(card.image().is_absent());
}

#[test]
fn test_instant_config_transitions_without_delay() {
    let mut app = CardApp::new(AppConfig::instant());
    app.advance_to(0);
    assert_eq!(app.current_route(), Route::Home);

    app.handle(UiEvent::CreateCard, 0).expect("event applies");
    app.advance_to(0);
    assert_eq!(app.current_route(), Route::CardMaker);

    app.handle(UiEvent::Confirm, 0).expect("event applies");
    app.advance_to(0);
    assert_eq!(app.current_route(), Route::Preview);
}

// ============================================================================
// Field Semantics Tests
// ============================================================================

#[test]
fn test_field_changes_last_write_wins() {
    let (mut app, t) = app_at_composer();
    let events = [
        UiEvent::BackgroundSelected(BackgroundColor::SkyBlue),
        UiEvent::FontFamilySelected(FontFamily::Georgia),
        UiEvent::MessageChanged("draft".to_string()),
        UiEvent::BackgroundSelected(BackgroundColor::PaleGreen),
        UiEvent::FontSizeSelected(FontSize::ALL[5]),
        UiEvent::FontFamilySelected(FontFamily::Verdana),
        UiEvent::MessageChanged("final\nsecond line".to_string()),
    ];
    for (i, event) in events.into_iter().enumerate() {
        app.handle(event, t + i as u64).expect("event applies");
    }

    let card = composer_card(&app);
    assert_eq!(card.background_color(), BackgroundColor::PaleGreen);
    assert_eq!(card.font_family(), FontFamily::Verdana);
    assert_eq!(card.font_size().points(), 24);
    assert_eq!(card.message(), "final\nsecond line");
}

#[test]
fn test_toggle_bold_does_not_touch_other_styles() {
    let (mut app, t) = app_at_composer();
    app.handle(UiEvent::ToggleItalic, t).expect("event applies");
    app.handle(UiEvent::ToggleBold, t + 1).expect("event applies");
    app.handle(UiEvent::ToggleBold, t + 2).expect("event applies");
    app.handle(UiEvent::ToggleBold, t + 3).expect("event applies");

    let style = composer_card(&app).style();
    assert!(style.bold);
    assert!(style.italic);
    assert!(!style.underline);
}

#[test]
fn test_preview_snapshot_is_independent_of_later_edits() {
    let (mut app, t) = app_at_composer();
    app.handle(UiEvent::RecipientNameChanged("Sam".to_string()), t)
        .expect("event applies");
    app.handle(UiEvent::Confirm, t).expect("event applies");
    app.advance_to(t + 2000);
    let first = preview_card(&app).clone();

    app.handle(UiEvent::Back, t + 2100).expect("event applies");
    app.handle(UiEvent::RecipientNameChanged("Alex".to_string()), t + 2200)
        .expect("event applies");
    app.handle(UiEvent::DecorationAdded(Decoration::Cake), t + 2300)
        .expect("event applies");
    app.handle(UiEvent::Confirm, t + 2400).expect("event applies");
    app.advance_to(t + 4400);

    let second = preview_card(&app);
    assert_eq!(first.recipient_name(), "Sam");
    assert!(first.decorations().is_empty());
    assert_eq!(second.recipient_name(), "Alex");
    assert_eq!(second.decorations(), &[Decoration::Cake]);
}

#[test]
fn test_preview_ignores_edit_events() {
    let (mut app, t) = app_at_composer();
    app.handle(UiEvent::Confirm, t).expect("event applies");
    app.advance_to(t + 2000);
    let before = preview_card(&app).clone();

    for (i, event) in [
        UiEvent::ToggleUnderline,
        UiEvent::RecipientNameChanged("x".to_string()),
        UiEvent::Confirm,
    ]
    .into_iter()
    .enumerate()
    {
        let result = app.handle(event, t + 2100 + i as u64);
        assert!(
            matches!(
                result,
                Err(CardError::NotApplicable {
                    route: Route::Preview,
                    ..
                })
            ),
            "preview rejects edits, got {result:?}"
        );
    }
    app.advance_to(t + 10_000);

    assert_eq!(app.current_route(), Route::Preview);
    assert_eq!(preview_card(&app), &before);
}

// ============================================================================
// Timer Liveness Tests
// ============================================================================

#[test]
fn test_confirm_then_back_drops_preview_timer() {
    let (mut app, t) = app_at_composer();
    app.handle(UiEvent::Confirm, t).expect("event applies");
    app.handle(UiEvent::Back, t + 500).expect("event applies");
    assert_eq!(app.current_route(), Route::Home);

    app.advance_to(t + 5000);

    assert_eq!(app.current_route(), Route::Home);
    assert_eq!(app.navigator().depth(), 1);
    assert_eq!(app.next_deadline(), None);
}

#[test]
fn test_stale_timer_does_not_fire_on_remounted_screen() {
    let (mut app, t) = app_at_composer();
    app.handle(UiEvent::Confirm, t).expect("event applies");
    app.handle(UiEvent::Back, t + 100).expect("event applies");
    app.handle(UiEvent::CreateCard, t + 200).expect("event applies");
    app.advance_to(t + 2200);
    assert_eq!(app.current_route(), Route::CardMaker);

    // The first composer's preview timer was due at t + 2000 and must have
    // been dropped; the new composer stays put.
    app.advance_to(t + 10_000);
    assert_eq!(app.current_route(), Route::CardMaker);
}

// ============================================================================
// Image Picker Tests
// ============================================================================

#[tokio::test]
async fn test_pick_cancel_leaves_image_absent() {
    let (mut app, _) = app_at_composer();
    app.pick_image(&FixedPicker(Ok(PickOutcome::Cancelled)))
        .await
        .expect("composer is idle");

    assert!(composer_card(&app).image().is_absent());
    assert!(app.take_alerts().is_empty());
}

#[tokio::test]
async fn test_pick_selected_reaches_preview() {
    let (mut app, t) = app_at_composer();
    let image = LocalImage::new("file:///photos/party.png", ImageFormat::Png);
    app.pick_image(&FixedPicker(Ok(PickOutcome::Selected(image.clone()))))
        .await
        .expect("composer is idle");
    app.handle(UiEvent::Confirm, t).expect("event applies");
    app.advance_to(t + 2000);

    assert_eq!(preview_card(&app).image().as_local(), Some(&image));
}

#[tokio::test]
async fn test_pick_permission_denied_raises_alert() {
    let (mut app, _) = app_at_composer();
    app.pick_image(&FixedPicker(Err(PickError::PermissionDenied)))
        .await
        .expect("composer is idle");

    let alerts = app.take_alerts();
    assert_eq!(alerts.len(), 1);
    assert!(composer_card(&app).image().is_absent());
    assert!(app.take_alerts().is_empty(), "alerts are drained");
}

#[tokio::test]
async fn test_pick_outside_composer_is_ignored() {
    let mut app = CardApp::new(AppConfig::default());
    let result = app
        .pick_image(&FixedPicker(Err(PickError::PermissionDenied)))
        .await;

    assert!(matches!(
        result,
        Err(CardError::NotApplicable {
            event: "image",
            route: Route::Splash
        })
    ));
    assert!(app.take_alerts().is_empty());
}

#[tokio::test]
async fn test_pick_while_busy_is_rejected() {
    let (mut app, t) = app_at_composer();
    app.handle(UiEvent::Confirm, t).expect("confirm applies");

    let image = LocalImage::new("file:///photos/late.png", ImageFormat::Png);
    let result = app
        .pick_image(&FixedPicker(Ok(PickOutcome::Selected(image))))
        .await;
    assert!(matches!(
        result,
        Err(CardError::NotApplicable {
            route: Route::CardMaker,
            ..
        })
    ));

    app.advance_to(t + 2000);
    assert!(preview_card(&app).image().is_absent());
}
