//! Polyscene replay — drives an [`Editor`] with a scripted event list
//! and logs the resulting draw list.
//!
//! Usage:
//! ```text
//! cargo run --example replay                                  # default script
//! cargo run --example replay -- f1 f2 left space l u          # key names
//! cargo run --example replay -- f2 click:40,60 rclick:100,100 # mouse events
//! ```
//!
//! Set `RUST_LOG=polyscene=debug` to see every scene change.

use polyscene::render::RecordingCanvas;
use polyscene::{Editor, InputEvent, Key, Point};
use tracing::{info, warn};

const DEFAULT_SCRIPT: &[&str] = &[
    "f1", "f2", "f6", "left", "space", "right", "pageup", "up", "up", "l", "u", "delete",
];

fn main() {
    // Default: WARN for everything, INFO for polyscene and the demo.
    // Override with RUST_LOG env var (e.g. RUST_LOG=polyscene=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("replay=info".parse().unwrap_or_default())
        .add_directive("polyscene=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let script: Vec<&str> = if args.is_empty() {
        DEFAULT_SCRIPT.to_vec()
    } else {
        args.iter().map(String::as_str).collect()
    };

    let mut editor = Editor::default();
    let mut canvas = RecordingCanvas::new();
    for token in script {
        let Some(event) = parse_event(token) else {
            warn!(token, "unrecognised event");
            continue;
        };
        let Some(outcome) = editor.handle(&event) else {
            continue;
        };
        if outcome.repaint {
            canvas.clear();
            editor.render(&mut canvas);
        }
        info!(
            token,
            figures = editor.scene().count_elements(),
            active = ?editor.scene().active_index(),
            selected = ?editor.scene().selected_index(),
            failed = outcome.error.is_some(),
            "handled event"
        );
    }

    for (pen, line) in canvas.polylines() {
        let points: Vec<(i32, i32)> = line.iter().map(|p| (p.x, p.y)).collect();
        info!(?pen, ?points, "polyline");
    }
}

fn parse_event(token: &str) -> Option<InputEvent> {
    if let Some(rest) = token.strip_prefix("click:") {
        return parse_point(rest).map(InputEvent::LeftClick);
    }
    if let Some(rest) = token.strip_prefix("rclick:") {
        return parse_point(rest).map(InputEvent::RightClick);
    }
    let key = match token.to_ascii_lowercase().as_str() {
        "f1" => Key::F1,
        "f2" => Key::F2,
        "f3" => Key::F3,
        "f6" => Key::F6,
        "f11" => Key::F11,
        "f12" => Key::F12,
        "left" => Key::Left,
        "right" => Key::Right,
        "up" => Key::Up,
        "down" => Key::Down,
        "delete" => Key::Delete,
        "space" => Key::Space,
        "enter" => Key::Enter,
        "pageup" => Key::PageUp,
        "pagedown" => Key::PageDown,
        "home" => Key::Home,
        "end" => Key::End,
        "escape" => Key::Escape,
        other => {
            let mut chars = other.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Key::Char(c),
                _ => return None,
            }
        }
    };
    Some(InputEvent::Key(key))
}

fn parse_point(text: &str) -> Option<Point> {
    let (x, y) = text.split_once(',')?;
    Some(Point::new(x.trim().parse().ok()?, y.trim().parse().ok()?))
}
