//! Demo binary: scripts the full interaction sequence.
//!
//! Mounts the main screen, expands a card, presses its revealed button to
//! navigate to the first destination, returns, and quits. Frames are logged
//! through the tracing renderer; run with `RUST_LOG=debug` to see every draw
//! command.

use prism_transit::app::{App, AppEvent};
use prism_transit::error::TransitError;
use prism_transit::render::TracingRenderer;
use prism_transit::router::{Router, routes};
use prism_transit::screen::{FirstScreen, MainScreen, SecondScreen};

/// Nominal frame time; the engine is delta-driven, so the exact value only
/// changes how many frames get logged.
const FRAME_MS: f32 = 16.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut router = Router::new();
    router.register(routes::MAIN, || Box::new(MainScreen::new()));
    router.register(routes::DEST1, || Box::new(FirstScreen::new()));
    router.register(routes::DEST2, || Box::new(SecondScreen::new()));

    let mut app = App::new(router, TracingRenderer::new());
    app.router_mut().route_changed.connect(|route: &String| {
        tracing::info!(target: "prism_transit::app", route = %route, "route changed");
    });

    // Mount the start destination and let its enter transition settle.
    app.post(AppEvent::Navigate {
        route: routes::MAIN.to_string(),
    })?;
    run_for(&mut app, 600.0)?;

    // Expand the second card.
    app.post(AppEvent::Click {
        region: "Main/card1".to_string(),
    })?;
    run_for(&mut app, 600.0)?;

    // Press the revealed button: the main screen slides out while the first
    // destination slides in.
    app.post(AppEvent::Click {
        region: "Main/card1/button".to_string(),
    })?;
    run_for(&mut app, 600.0)?;

    // And back again, onto a freshly mounted main screen.
    app.post(AppEvent::Click {
        region: "dest1/button".to_string(),
    })?;
    run_for(&mut app, 600.0)?;

    app.post(AppEvent::Quit)?;
    app.advance(FRAME_MS)?;

    tracing::info!(target: "prism_transit::app", "demo finished");
    Ok(())
}

/// Advance the app in fixed frames until `total_ms` of scripted time passed.
fn run_for(app: &mut App<TracingRenderer>, total_ms: f32) -> Result<(), TransitError> {
    let mut elapsed = 0.0;
    while elapsed < total_ms {
        app.advance(FRAME_MS)?;
        elapsed += FRAME_MS;
    }
    Ok(())
}
