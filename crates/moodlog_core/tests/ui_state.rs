use moodlog_core::{MenuItem, MenuState, ModalState, SessionError, SessionState};

#[derive(Debug, Clone, PartialEq, Eq)]
enum EntryModal {
    NewEntry,
    EditEntry { entry_id: String },
}

#[test]
fn modal_tracks_payload_through_open_and_close() {
    let mut modal = ModalState::default();
    assert!(!modal.is_open());
    assert_eq!(modal.payload(), None);

    modal.open(EntryModal::NewEntry);
    assert!(modal.is_open());

    let previous = modal.open(EntryModal::EditEntry {
        entry_id: "entry-1".to_string(),
    });
    assert_eq!(previous, Some(EntryModal::NewEntry));
    assert_eq!(
        modal.close(),
        Some(EntryModal::EditEntry {
            entry_id: "entry-1".to_string()
        })
    );
    assert!(!modal.is_open());
}

#[test]
fn session_sign_in_trims_and_rejects_blank_ids() {
    let mut session = SessionState::default();
    assert!(!session.is_signed_in());

    assert_eq!(session.sign_in("   "), Err(SessionError::EmptyUserId));
    assert!(!session.is_signed_in());

    session.sign_in("  user-42 ").unwrap();
    assert_eq!(session.user_id(), Some("user-42"));

    assert_eq!(session.sign_in(""), Err(SessionError::EmptyUserId));
    assert_eq!(session.user_id(), Some("user-42"));

    assert_eq!(session.sign_out(), Some("user-42".to_string()));
    assert_eq!(session.user_id(), None);
}

#[test]
fn menu_item_serializes_as_snake_case() {
    let mut menu = MenuState::default();
    assert!(menu.select(MenuItem::Settings));
    assert_eq!(
        serde_json::to_value(menu.active()).unwrap(),
        serde_json::json!("settings")
    );
}
