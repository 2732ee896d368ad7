//! Replay a JSON script of pointer events against a demo scene and log
//! the resulting camera poses and clicks.

use std::path::Path;

use glam::Vec3;
use serde::Deserialize;
use viewpoint::{
    input::InputEvent,
    options::Options,
    scene::{Bounds, SceneGraph},
    ViewCommand, ViewController, ViewpointError,
};

const VIEWPORT: (u32, u32) = (1280, 720);

/// One line of a replay script.
///
/// Each shape is keyed by a distinct field (`advance`, `resize`, `command`,
/// or an event `type`), so no step can match more than one variant.
#[derive(Debug, PartialEq, Deserialize)]
#[serde(untagged)]
enum Step {
    /// Advance smoothing by `advance` seconds.
    Advance { advance: f32 },
    /// Resize the viewport.
    Resize { resize: (u32, u32) },
    /// Execute a controller command directly.
    Command { command: ViewCommand },
    /// Forward a pointer or wheel event.
    Input(InputEvent),
}

fn parse_script(json: &str) -> Result<Vec<Step>, ViewpointError> {
    Ok(serde_json::from_str(json)?)
}

/// Two clickable groups: a building whose tile mesh sits three levels below
/// the registered group, and a lone marker off to the side.
fn demo_scene() -> SceneGraph {
    let mut scene = SceneGraph::new();

    let building = scene.add_node("building", None, None);
    let floor = scene.add_node("floor", Some(building), None);
    let room = scene.add_node("room", Some(floor), None);
    let _tile = scene.add_node(
        "tile",
        Some(room),
        Some(Bounds::cuboid(Vec3::ZERO, Vec3::splat(40.0))),
    );
    scene.register_interactable(building);

    let marker = scene.add_node(
        "marker",
        None,
        Some(Bounds::Sphere {
            center: Vec3::new(160.0, 20.0, 0.0),
            radius: 20.0,
        }),
    );
    scene.register_interactable(marker);

    scene
}

fn replay(script: &Path, options: Option<&Path>) -> Result<(), ViewpointError> {
    let options = match options {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };
    let steps = parse_script(&std::fs::read_to_string(script)?)?;

    let scene = demo_scene();
    let mut controller = ViewController::new(options);
    controller.attach_camera(VIEWPORT.0, VIEWPORT.1);
    controller.set_on_object_clicked(|node| {
        log::info!("clicked node {}", node.0);
    });

    let mut elapsed = 0.0_f32;
    for step in steps {
        match step {
            Step::Advance { advance } => {
                elapsed += advance;
                if let Some(pose) = controller.update(advance) {
                    log::info!(
                        "t={elapsed:.3} eye={:?} target={:?}",
                        pose.eye,
                        pose.target
                    );
                }
            }
            Step::Resize { resize: (w, h) } => controller.resize(w, h),
            Step::Input(event) => {
                let response = controller.handle_input(event, &scene);
                log::debug!("{event:?} -> {response:?}");
            }
            Step::Command { command } => {
                let _ = controller.execute(command, &scene);
            }
        }
    }

    let state = controller.rig().state();
    log::info!(
        "final angle={:.4} radius={:.2} height={:.2} look_at={:?}",
        state.angle.current,
        state.radius.current,
        state.height.current,
        state.look_at.current
    );
    Ok(())
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(script) = args.next() else {
        log::error!("Usage: viewpoint <script.json> [options.toml]");
        std::process::exit(1);
    };
    let options = args.next();

    if let Err(e) = replay(Path::new(&script), options.as_deref().map(Path::new))
    {
        log::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;
    use viewpoint::input::PointerButton;

    use super::*;

    #[test]
    fn test_parse_mixed_script() {
        let json = r#"[
            {"advance": 0.016},
            {"resize": [640, 480]},
            {"type": "pointer_down", "x": 10, "y": 20, "button": "primary", "on_surface": true},
            {"type": "pointer_cancel"},
            {"command": {"type": "zoom", "radius_delta": 25}},
            {"command": {"type": "click", "position": [320, 240]}}
        ]"#;
        let steps = parse_script(json).unwrap();
        assert_eq!(
            steps,
            vec![
                Step::Advance { advance: 0.016 },
                Step::Resize { resize: (640, 480) },
                Step::Input(InputEvent::PointerDown {
                    x: 10.0,
                    y: 20.0,
                    button: PointerButton::Primary,
                    on_surface: true,
                }),
                Step::Input(InputEvent::PointerCancel),
                Step::Command {
                    command: ViewCommand::Zoom { radius_delta: 25.0 },
                },
                Step::Command {
                    command: ViewCommand::Click {
                        position: Vec2::new(320.0, 240.0),
                    },
                },
            ]
        );
    }

    #[test]
    fn test_bare_command_is_not_an_input_step() {
        let err = parse_script(r#"[{"type": "zoom", "radius_delta": 25}]"#)
            .unwrap_err();
        assert!(matches!(err, ViewpointError::ScriptParse(_)));
    }

    #[test]
    fn test_replay_runs_script_file() {
        let dir = std::env::temp_dir()
            .join(format!("viewpoint-replay-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let script = dir.join("script.json");
        std::fs::write(
            &script,
            r#"[{"type": "wheel", "delta": 100, "on_surface": true}, {"advance": 0.05}]"#,
        )
        .unwrap();

        assert!(replay(&script, None).is_ok());
        assert!(matches!(
            replay(&dir.join("missing.json"), None),
            Err(ViewpointError::Io(_))
        ));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
