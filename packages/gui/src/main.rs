#[macro_use]
extern crate tracing;

use gui::{
    logging::init_logging,
    settings::{
        HostSettings,
        SETTINGS_FILE_NAME,
    },
    Component,
    ComponentContainer,
    GuiHost,
    MouseButton,
    RawComponent,
    drawable_fn,
};
use structure::{
    PlacementSettings,
    Mirror,
    Rotation,
};
use coords::{
    gbc,
    chc,
};
use anyhow::Result;
use std::{
    env::args,
    f32::consts::TAU,
    path::PathBuf,
};
use vek::*;


const CLI_HELP: &'static str = r#"Headless demo of the GUI component tree.

Builds a small tree, draws it for a few frames onto a recording canvas,
replays some input, and prints placement seeds.

Examples:

    [this command]
    Run with settings from ./gui_settings.json, or defaults.

    [this command] --settings=demo.json
    Run with settings from another file.

Env var examples:
    RUST_LOG=gui=trace
    Changes logging levels"#;


fn main() -> Result<()> {
    let mut settings_path = PathBuf::from(SETTINGS_FILE_NAME);
    for arg in args().skip(1) {
        if arg == "--help" || arg == "-h" {
            println!("{}", CLI_HELP);
            return Ok(());
        } else if let Some(path) = arg.strip_prefix("--settings=") {
            settings_path = PathBuf::from(path);
        } else {
            eprintln!("unknown argument {:?}\n\n{}", arg, CLI_HELP);
            std::process::exit(2);
        }
    }

    let settings = HostSettings::read(&settings_path);
    init_logging(settings.log_file.as_deref())?;
    debug!(?settings, "loaded settings");

    let mut host = GuiHost::new();
    host.add_root(build_tree(&settings));

    for frame in 0..settings.frames {
        let t = frame as f32 / settings.frames.max(1) as f32;
        let cursor = Vec2::new(60.0 + 40.0 * (t * TAU).cos(), 60.0 + 40.0 * (t * TAU).sin());
        let content = match host.draw_frame(cursor, settings.partial_ticks) {
            Ok(content) => content,
            Err(e) => {
                error!(frame, "{:#}", e);
                continue;
            }
        };
        info!(frame, draws = content.draw_calls().count(), "drew frame");
        if settings.dump_frames {
            info!("frame {}:\n{}", frame, content.to_pseudo_xml());
        }
    }

    let click = Vec2::new(70.0, 70.0);
    info!(hovered = host.is_mouse_over(click), "replaying input at {:?}", click);
    host.mouse_down(click, MouseButton::Left);
    host.mouse_drag(click + Vec2::new(5.0, 0.0), MouseButton::Left);
    host.mouse_up(click + Vec2::new(5.0, 0.0), MouseButton::Left);
    host.mouse_wheel(click, -1);
    host.key_pressed('a', 30);
    host.key_released('a', 30);

    let mut placement = PlacementSettings::new();
    placement
        .set_mirror(Mirror::LeftRight)
        .set_rotation(Rotation::Clockwise90)
        .set_chunk(Some(chc(2, -3)));
    info!(bounding_box = ?placement.bounding_box(), "placement volume");
    for pos in [gbc(0, 64, 0), gbc(17, 64, -40), gbc(-300, 12, 9)] {
        info!(%pos, seed = ?placement.seed_for(Some(pos)), "placement seed");
    }

    Ok(())
}

/// Root container with a background, a ring of buttons hit-tested by their
/// own rectangles, and a crosshair overlay at the cursor.
fn build_tree(settings: &HostSettings) -> gui::ComponentRef {
    let root = ComponentContainer::with_size(Vec2::new(10.0, 10.0), Vec2::new(200.0, 150.0));
    root.borrow_mut().advanced_hit_test = settings.advanced_hit_test;

    let background = RawComponent::with_size(
        Vec2::zero(),
        Vec2::new(200.0, 150.0),
        |base, canvas| {
            canvas.push_state();
            canvas.color(Rgba::new(0.2, 0.2, 0.2, 1.0));
            canvas.draw_solid(Extent2::new(base.size.x, base.size.y));
            canvas.pop_state();
        },
    ).with_z_index(-1);
    root.borrow_mut().add(background.into_ref());

    let ring = ComponentContainer::with_size(Vec2::new(20.0, 20.0), Vec2::new(100.0, 100.0));
    ring.borrow_mut().advanced_hit_test = true;
    for i in 0..6 {
        let angle = i as f32 / 6.0 * TAU;
        let pos = Vec2::new(40.0 + 35.0 * angle.cos(), 40.0 + 35.0 * angle.sin());
        let button = RawComponent::with_size(pos, Vec2::new(20.0, 20.0), |base, canvas| {
            canvas.push_transform();
            canvas.translate(base.pos);
            canvas.draw_solid(Extent2::new(base.size.x, base.size.y));
            canvas.pop_transform();
        }).with_z_index(i);
        ring.borrow_mut().add(button.into_ref());
    }
    root.borrow_mut().add(ring);

    root.borrow_mut().add_drawable(drawable_fn(|canvas, mouse_pos, _| {
        canvas.draw_line(mouse_pos - Vec2::new(3.0, 0.0), mouse_pos + Vec2::new(3.0, 0.0));
        canvas.draw_line(mouse_pos - Vec2::new(0.0, 3.0), mouse_pos + Vec2::new(0.0, 3.0));
        Ok(())
    }));

    root
}
