use folio::app::domain::font::FONT_PRESETS;
use folio::app::domain::sections::uniform_layout;
use folio::app::domain::theme::COLOR_PRESETS;
use folio::app::infrastructure::events::ScrollEvents;
use folio::app::domain::ContactField;
use folio::app::services::contact::{RecordingRelay, Severity};
use folio::app::services::navigation::RecordingScroller;
use folio::app::services::persistence::{FONT_KEY, THEME_KEY};
use folio::ui::dialogs::customize::CustomizeDialog;
use folio::{
    AppState, Capabilities, ColorTheme, FileStore, FontChoice, KeyValueStore, Message,
    PreferenceStore, Section, SectionId, SiteConfig, track_scroll,
};
use tempfile::TempDir;

fn file_state(dir: &TempDir) -> AppState<FileStore> {
    let store = FileStore::new(dir.path().join("storage.json"));
    AppState::new(SiteConfig::default(), store, uniform_layout(800.0))
}

#[test]
fn test_preferences_survive_restart_through_file() {
    let dir = TempDir::new().unwrap();
    let mut scroller = RecordingScroller::default();
    let mut relay = RecordingRelay::default();
    let mut caps = Capabilities {
        scroller: &mut scroller,
        relay: &mut relay,
    };

    {
        let mut app = file_state(&dir);
        app.dispatch(Message::SetTheme(COLOR_PRESETS[7].theme.clone()), &mut caps);
        app.dispatch(Message::SetFont(FONT_PRESETS[4].clone()), &mut caps);
        app.dispatch(Message::ToggleCustomize, &mut caps);
        assert!(app.preferences.dialog_open());
    }

    let app = file_state(&dir);
    assert_eq!(app.preferences.theme(), &COLOR_PRESETS[7].theme);
    assert_eq!(app.preferences.font().name(), "Open Sans");
    assert!(!app.preferences.dialog_open());
}

#[test]
fn test_hand_edited_storage_is_validated() {
    let dir = TempDir::new().unwrap();
    let mut store = FileStore::new(dir.path().join("storage.json"));
    store
        .set(THEME_KEY, r##"{"primary":"#12345","secondary":"#4ECDC4"}"##)
        .unwrap();
    store.set(FONT_KEY, r#"{"name":"  ","family":"serif"}"#).unwrap();

    let prefs = PreferenceStore::initialize(store);
    assert_eq!(prefs.theme(), &ColorTheme::default());
    assert_eq!(prefs.font(), &FontChoice::default());
}

#[test]
fn test_selecting_from_dialog_keeps_it_open() {
    let dir = TempDir::new().unwrap();
    let mut app = file_state(&dir);
    let mut scroller = RecordingScroller::default();
    let mut relay = RecordingRelay::default();
    let mut caps = Capabilities {
        scroller: &mut scroller,
        relay: &mut relay,
    };

    app.dispatch(Message::ToggleCustomize, &mut caps);
    app.dispatch(Message::SetTheme(COLOR_PRESETS[9].theme.clone()), &mut caps);
    let dialog = CustomizeDialog::build(&app.preferences);
    assert!(dialog.open);
    assert_eq!(dialog.selected_color().unwrap().label, "Yellow");

    app.dispatch(Message::CloseCustomize, &mut caps);
    assert!(!app.preferences.dialog_open());
}

#[test]
fn test_documented_scroll_example() {
    let sections = vec![
        Section::new("hero", 0.0),
        Section::new("about", 800.0),
        Section::new("skills", 1600.0),
    ];
    let hero = SectionId::from("hero");

    let top = track_scroll(0.0, &sections, &hero);
    assert_eq!(top.active, &hero);
    assert!(!top.scrolled);

    let mid = track_scroll(900.0, &sections, &hero);
    assert_eq!(mid.active, &SectionId::from("about"));
    assert!(mid.scrolled);
}

#[test]
fn test_scroll_events_drive_navigation_until_unmounted() {
    let dir = TempDir::new().unwrap();
    let mut app = file_state(&dir);
    let events = ScrollEvents::new();
    let mut scroller = RecordingScroller::default();
    let mut relay = RecordingRelay::default();
    let mut caps = Capabilities {
        scroller: &mut scroller,
        relay: &mut relay,
    };

    app.mount(&events);
    for y in [0.0, 40.0, 650.0, 1450.0, 2300.0] {
        events.emit(y);
    }
    app.pump(&mut caps);
    assert_eq!(app.nav.active(), &SectionId::from("projects"));
    assert!(app.nav.scrolled());

    app.dispatch(Message::Navigate("contact".to_string()), &mut caps);
    app.unmount();
    assert!(!app.is_mounted());
    events.emit(0.0);
    app.pump(&mut caps);
    assert_eq!(app.nav.active(), &SectionId::from("projects"));

    assert_eq!(scroller.requests.len(), 1);
    assert_eq!(scroller.requests[0].target, SectionId::from("contact"));
}

#[test]
fn test_contact_failure_then_manual_retry() {
    let dir = TempDir::new().unwrap();
    let mut app = file_state(&dir);
    let mut scroller = RecordingScroller::default();
    let mut relay = RecordingRelay::default();
    let mut caps = Capabilities {
        scroller: &mut scroller,
        relay: &mut relay,
    };

    for (field, value) in [
        (ContactField::Name, "Grace"),
        (ContactField::Email, "grace@example.org"),
        (ContactField::Message, "Loved the projects section"),
    ] {
        app.dispatch(Message::ContactInput(field, value.to_string()), &mut caps);
    }

    app.dispatch(Message::ContactSubmit, &mut caps);
    app.dispatch(
        Message::ContactSettled(Err(folio::AppError::Relay("timeout".to_string()))),
        &mut caps,
    );
    assert_eq!(app.contact.notification().unwrap().severity, Severity::Error);
    assert_eq!(app.contact.form().name, "Grace");

    app.dispatch(Message::DismissNotification, &mut caps);
    app.dispatch(Message::ContactSubmit, &mut caps);
    app.dispatch(Message::ContactSettled(Ok(())), &mut caps);
    assert_eq!(app.contact.notification().unwrap().severity, Severity::Success);
    assert!(app.contact.form().message.is_empty());

    assert_eq!(relay.sent.len(), 2);
    assert_eq!(relay.sent[0].reply_to, "grace@example.org");
}

#[test]
fn test_unreadable_storage_falls_back_without_clobbering() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storage.json");
    let original = b"{\"currentTheme\":\"\xFF\"}".to_vec();
    std::fs::write(&path, &original).unwrap();

    let mut prefs = PreferenceStore::initialize(FileStore::new(&path));
    assert_eq!(prefs.theme(), &ColorTheme::default());

    // Advisory write fails, in-memory value still changes
    prefs.set_theme(COLOR_PRESETS[3].theme.clone());
    assert_eq!(prefs.theme(), &COLOR_PRESETS[3].theme);
    assert_eq!(std::fs::read(&path).unwrap(), original);
}
