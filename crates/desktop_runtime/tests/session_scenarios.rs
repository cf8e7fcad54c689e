use desktop_app_contract::{AppKind, OpenWindowRequest, WindowPosition, WindowRect, WindowSize};
use desktop_runtime::{
    DesktopAction, DesktopConfig, DesktopSession, InputEvent, KeyChord, PointerPosition,
    WindowId,
};
use pretty_assertions::assert_eq;

fn session() -> DesktopSession {
    DesktopSession::new(DesktopConfig::default(), WindowSize::new(1280, 800))
}

fn request(title: &str, x: i32, y: i32, w: i32, h: i32) -> OpenWindowRequest {
    OpenWindowRequest::new(
        title,
        AppKind::TextEditor,
        WindowPosition::new(x, y),
        WindowSize::new(w, h),
    )
}

fn open(session: &mut DesktopSession, title: &str) -> WindowId {
    session.dispatch(DesktopAction::OpenWindow(request(title, 120, 80, 500, 350)));
    session.active_window_id().expect("opened window is active")
}

fn max_z_excluding(session: &DesktopSession, id: WindowId) -> u32 {
    session
        .windows()
        .iter()
        .filter(|w| w.id != id)
        .map(|w| w.z_index)
        .max()
        .unwrap_or(0)
}

#[test]
fn distinct_titles_open_distinct_windows() {
    let mut session = session();
    let ids: Vec<_> = ["One", "Two", "Three", "Four"]
        .into_iter()
        .map(|title| open(&mut session, title))
        .collect();

    assert_eq!(session.windows().len(), 4);
    let mut unique = ids.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), ids.len());
}

#[test]
fn reopening_terminal_focuses_the_existing_window() {
    let mut session = session();
    let terminal = OpenWindowRequest::new(
        "Terminal",
        AppKind::Terminal,
        WindowPosition::new(100, 100),
        WindowSize::new(600, 400),
    );
    session.dispatch(DesktopAction::OpenWindow(terminal.clone()));
    let _other = open(&mut session, "Notes");
    session.dispatch(DesktopAction::OpenWindow(OpenWindowRequest {
        position: WindowPosition::new(400, 300),
        ..terminal
    }));

    let terminals: Vec<_> = session
        .windows()
        .iter()
        .filter(|w| w.title == "Terminal")
        .collect();
    assert_eq!(terminals.len(), 1);
    let window = terminals[0];
    assert_eq!(window.position, WindowPosition::new(100, 100));
    assert_eq!(window.size, WindowSize::new(600, 400));
    assert_eq!(session.active_window_id(), Some(window.id));
    assert!(window.z_index > max_z_excluding(&session, window.id));
}

#[test]
fn bring_to_front_outranks_every_other_window() {
    let mut session = session();
    let a = open(&mut session, "A");
    let _b = open(&mut session, "B");
    let _c = open(&mut session, "C");

    session.dispatch(DesktopAction::BringToFront { window_id: a });

    let raised = session.window(a).expect("a").z_index;
    assert!(raised > max_z_excluding(&session, a));
    assert_eq!(session.next_z_index(), raised + 1);
}

#[test]
fn operations_on_closed_window_change_nothing() {
    let mut session = session();
    let a = open(&mut session, "A");
    let _b = open(&mut session, "B");
    session.dispatch(DesktopAction::CloseWindow { window_id: a });
    let before = session.view();
    let z_before = session.next_z_index();

    for action in [
        DesktopAction::CloseWindow { window_id: a },
        DesktopAction::MinimizeWindow { window_id: a },
        DesktopAction::ToggleMaximizeWindow { window_id: a },
        DesktopAction::BringToFront { window_id: a },
        DesktopAction::UpdateWindowPosition {
            window_id: a,
            position: WindowPosition::new(1, 1),
        },
        DesktopAction::UpdateWindowSize {
            window_id: a,
            size: WindowSize::new(9, 9),
        },
        DesktopAction::SnapWindow {
            window_id: a,
            snap: desktop_runtime::SnapPosition::Left,
        },
    ] {
        let effects = session.dispatch(action);
        assert!(effects.is_empty());
    }

    assert_eq!(session.view(), before);
    assert_eq!(session.next_z_index(), z_before);
}

#[test]
fn maximize_then_restore_round_trips_geometry() {
    let mut session = session();
    let id = open(&mut session, "Notes");
    let original = session.window(id).expect("window").rect();

    session.dispatch(DesktopAction::ToggleMaximizeWindow { window_id: id });
    assert!(session.window(id).expect("window").is_maximized);
    session.dispatch(DesktopAction::ToggleMaximizeWindow { window_id: id });

    let window = session.window(id).expect("window");
    assert!(!window.is_maximized);
    assert_eq!(window.rect(), original);
}

#[test]
fn show_desktop_minimizes_all_then_restores_all() {
    let mut session = session();
    let a = open(&mut session, "A");
    let b = open(&mut session, "B");
    session.dispatch(DesktopAction::MinimizeWindow { window_id: a });

    session.dispatch(DesktopAction::ToggleMinimizeAllWindows);
    assert!(session.windows().iter().all(|w| w.is_minimized));

    session.dispatch(DesktopAction::ToggleMinimizeAllWindows);
    assert!(session.windows().iter().all(|w| !w.is_minimized));
    assert!(session.window(b).is_some());
}

#[test]
fn closing_the_active_window_hands_focus_to_the_next_topmost() {
    let mut session = session();
    let a = open(&mut session, "A");
    let b = open(&mut session, "B");
    session.dispatch(DesktopAction::BringToFront { window_id: a });

    session.dispatch(DesktopAction::CloseWindow { window_id: a });

    assert_eq!(session.active_window_id(), Some(b));
}

#[test]
fn dragging_to_left_edge_snaps_to_left_half() {
    let mut session = session();
    let id = open(&mut session, "Notes");

    session.handle_input(&InputEvent::HeaderPointerDown {
        window_id: id,
        pointer: PointerPosition::new(300, 95),
    });
    session.handle_input(&InputEvent::PointerMove {
        pointer: PointerPosition::new(150, 200),
    });
    session.handle_input(&InputEvent::PointerMove {
        pointer: PointerPosition::new(2, 200),
    });
    assert_eq!(
        session.snap_preview(),
        Some(desktop_runtime::SnapPosition::Left)
    );
    session.handle_input(&InputEvent::PointerUp {
        pointer: PointerPosition::new(2, 200),
    });

    let window = session.window(id).expect("window");
    assert!(!window.is_maximized);
    assert_eq!(
        window.rect(),
        WindowRect {
            x: 0,
            y: 0,
            w: 640,
            h: 752
        }
    );
    assert_eq!(session.snap_preview(), None);
}

#[test]
fn moving_a_window_between_workspaces() {
    let mut session = session();
    let id = open(&mut session, "Notes");
    let before = session.window(id).expect("window").clone();
    let first = session.active_workspace_id();
    session.dispatch(DesktopAction::AddWorkspace);
    let second = session.active_workspace_id();
    assert_ne!(first, second);
    session.dispatch(DesktopAction::SwitchWorkspace {
        workspace_id: first,
    });

    session.dispatch(DesktopAction::MoveWindowToWorkspace {
        window_id: id,
        workspace_id: second,
    });

    assert!(session.current_workspace_windows().is_empty());
    assert_eq!(session.active_window_id(), Some(id));

    session.dispatch(DesktopAction::SwitchWorkspace {
        workspace_id: second,
    });
    let moved = session.current_workspace_windows();
    assert_eq!(moved.len(), 1);
    assert_eq!(moved[0].id, id);
    assert_eq!(moved[0].z_index, before.z_index);
    assert_eq!(moved[0].is_minimized, before.is_minimized);
}

#[test]
fn workspace_names_follow_count() {
    let mut session = session();
    session.dispatch(DesktopAction::AddWorkspace);
    session.dispatch(DesktopAction::AddWorkspace);

    let names: Vec<_> = session
        .workspaces()
        .iter()
        .map(|ws| ws.name.as_str())
        .collect();
    assert_eq!(names, vec!["Desktop 1", "Desktop 2", "Desktop 3"]);
    let ids: Vec<_> = session.workspaces().iter().map(|ws| ws.id).collect();
    assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn hotkey_opens_settings_from_json_event() {
    let mut session = session();
    let event: InputEvent = serde_json::from_str(
        r#"{"type":"key-down","chord":{"key":"P","meta":true}}"#,
    )
    .expect("parse event");
    assert_eq!(
        event,
        InputEvent::KeyDown {
            chord: KeyChord::new("P").meta()
        }
    );

    session.handle_input(&event);

    let window = &session.windows()[0];
    assert_eq!(window.title, "Settings");
    assert_eq!(window.size, WindowSize::new(500, 400));
}
