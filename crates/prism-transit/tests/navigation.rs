//! End-to-end navigation tests: the full click → queue → router → tick →
//! paint path, including the no-state-leakage guarantee across navigation
//! cycles.

use prism_transit::app::{App, AppEvent};
use prism_transit::render::RecordingRenderer;
use prism_transit::router::{Router, routes};
use prism_transit::screen::{FirstScreen, MainScreen, SecondScreen};

const FRAME_MS: f32 = 16.0;

fn demo_app() -> App<RecordingRenderer> {
    let mut router = Router::new();
    router.register(routes::MAIN, || Box::new(MainScreen::new()));
    router.register(routes::DEST1, || Box::new(FirstScreen::new()));
    router.register(routes::DEST2, || Box::new(SecondScreen::new()));
    App::new(router, RecordingRenderer::new())
}

fn post_click(app: &mut App<RecordingRenderer>, region: &str) {
    app.post(AppEvent::Click {
        region: region.to_string(),
    })
    .unwrap();
}

/// Advance well past every in-flight transition.
fn settle(app: &mut App<RecordingRenderer>) {
    for _ in 0..64 {
        app.advance(FRAME_MS).unwrap();
    }
}

#[test]
fn navigation_cycle_leaves_no_state_behind() {
    let mut app = demo_app();
    app.post(AppEvent::Navigate {
        route: routes::MAIN.to_string(),
    })
    .unwrap();
    settle(&mut app);

    // Capture the freshly mounted appearance of the first card.
    let fresh_card = app.renderer().find("Main/card0").unwrap().clone();

    // Expand a card, then leave through its button and come back.
    post_click(&mut app, "Main/card0");
    settle(&mut app);
    assert_ne!(app.renderer().find("Main/card0").unwrap().frame, fresh_card.frame);

    post_click(&mut app, "Main/card0/button");
    settle(&mut app);
    assert_eq!(app.router().active_route(), Some(routes::DEST1));

    post_click(&mut app, "dest1/button");
    settle(&mut app);
    assert_eq!(app.router().active_route(), Some(routes::MAIN));

    // The remounted screen is indistinguishable from a fresh one: the card
    // is collapsed again and its content column is not in the tree.
    let remounted = app.renderer().find("Main/card0").unwrap();
    assert_eq!(remounted.frame, fresh_card.frame);
    assert!(app.renderer().find("Main/card0/content").is_none());
}

#[test]
fn both_screens_are_live_mid_navigation() {
    let mut app = demo_app();
    app.post(AppEvent::Navigate {
        route: routes::MAIN.to_string(),
    })
    .unwrap();
    settle(&mut app);

    post_click(&mut app, "Main/card0");
    settle(&mut app);
    post_click(&mut app, "Main/card0/button");

    // Halfway through the 500 ms handover both panels are being drawn: the
    // outgoing screen sliding out, the incoming one sliding in.
    app.advance(250.0).unwrap();
    let outgoing = app.renderer().find("Main/panel").unwrap();
    let incoming = app.renderer().find("dest1/panel").unwrap();
    assert_eq!(outgoing.frame.offset_x, 500.0);
    assert_eq!(incoming.frame.offset_x, 500.0);
    assert!(app.router().has_outgoing());

    // Once both settle, only the destination remains.
    settle(&mut app);
    assert!(!app.router().has_outgoing());
    assert!(app.renderer().find("Main/panel").is_none());
    assert_eq!(app.renderer().find("dest1/panel").unwrap().frame.offset_x, 0.0);
}

#[test]
fn second_screen_is_reachable_by_direct_navigation() {
    let mut app = demo_app();
    app.post(AppEvent::Navigate {
        route: routes::DEST2.to_string(),
    })
    .unwrap();
    app.advance(FRAME_MS).unwrap();

    assert_eq!(app.router().active_route(), Some(routes::DEST2));
    assert!(app.renderer().find("dest2/panel").is_some());

    // Its button hops to dest1.
    post_click(&mut app, "dest2/button");
    app.advance(FRAME_MS).unwrap();
    assert_eq!(app.router().active_route(), Some(routes::DEST1));
}

#[test]
fn full_demo_script_runs_to_completion() {
    let mut app = demo_app();

    app.post(AppEvent::Navigate {
        route: routes::MAIN.to_string(),
    })
    .unwrap();
    settle(&mut app);

    post_click(&mut app, "Main/card1");
    settle(&mut app);

    post_click(&mut app, "Main/card1/button");
    settle(&mut app);

    post_click(&mut app, "dest1/button");
    settle(&mut app);
    assert_eq!(app.router().active_route(), Some(routes::MAIN));

    app.post(AppEvent::Quit).unwrap();
    app.advance(FRAME_MS).unwrap();
    assert!(!app.is_running());

    let frames = app.renderer().frames_completed();
    assert!(frames > 0);
}
