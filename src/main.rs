//! Replay a recorded landmark session through the gesture engine.
//!
//! Usage: `handorbit <recording.jsonl> [options.toml] [--realtime]`
//!
//! Set `RUST_LOG=debug` to see the per-frame camera pose.

use std::cell::Cell;
use std::path::Path;
use std::process::ExitCode;
use std::rc::Rc;

use glam::Vec3;
use handorbit::engine::{GestureEngine, TARGET_FPS};
use handorbit::input::ReplaySource;
use handorbit::options::Options;
use handorbit::scene::{Bounds, Material, Scene};
use handorbit::util::frame_timing::FrameTiming;

/// (name, orbit radius, body radius, colour)
const PLANETS: [(&str, f32, f32, [f32; 3]); 8] = [
    ("mercury", 4.0, 0.4, [0.75, 0.69, 0.63]),
    ("venus", 6.0, 0.65, [0.94, 0.82, 0.44]),
    ("earth", 8.0, 0.7, [0.27, 0.67, 0.93]),
    ("mars", 10.0, 0.5, [1.0, 0.33, 0.2]),
    ("jupiter", 14.0, 1.5, [0.91, 0.69, 0.38]),
    ("saturn", 18.0, 1.2, [0.93, 0.81, 0.5]),
    ("uranus", 22.0, 0.85, [0.4, 0.93, 0.87]),
    ("neptune", 26.0, 0.8, [0.27, 0.53, 1.0]),
];

fn demo_scene() -> Scene {
    let mut scene = Scene::new();

    let sun = scene.add_sphere("sun", Vec3::ZERO, 2.5, [1.0, 0.8, 0.27]);
    let glow = scene.add_mesh(
        "sun_glow",
        Some(sun),
        Bounds::sphere(Vec3::ZERO, 3.5),
        Material::solid([1.0, 0.6, 0.1]),
    );
    scene.set_pickable(glow, false);

    // Planets start spread around their orbits so they don't line up
    for (i, (name, orbit_radius, radius, color)) in
        PLANETS.into_iter().enumerate()
    {
        let angle = i as f32 * 0.8;
        let center =
            Vec3::new(angle.cos(), 0.0, angle.sin()) * orbit_radius;
        let group = scene.add_group(name, None);
        let _ = scene.add_mesh(
            format!("{name}_body"),
            Some(group),
            Bounds::sphere(center, radius),
            Material::solid(color),
        );
        if name == "saturn" {
            let _ = scene.add_mesh(
                "saturn_ring",
                Some(group),
                Bounds::cuboid(
                    center,
                    Vec3::new(radius * 4.4, 0.05, radius * 4.4),
                ),
                Material::solid([0.85, 0.78, 0.55]),
            );
        }
        let _ = scene.register(name, group);
    }
    scene
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let realtime = args.iter().any(|a| a == "--realtime");
    let mut paths = args.iter().filter(|a| !a.starts_with("--"));

    let Some(recording) = paths.next() else {
        log::error!(
            "usage: handorbit <recording.jsonl> [options.toml] [--realtime]"
        );
        return ExitCode::FAILURE;
    };

    let options = match paths.next() {
        Some(path) => match Options::load(Path::new(path)) {
            Ok(options) => options,
            Err(e) => {
                log::error!("Failed to load options from {path}: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => Options::default(),
    };

    let mut source = match ReplaySource::open(Path::new(recording)) {
        Ok(source) => source,
        Err(e) => {
            log::error!("Failed to open recording {recording}: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut engine = GestureEngine::with_scene(options, demo_scene());

    let sim_time = Rc::new(Cell::new(0.0_f32));
    let clock = Rc::clone(&sim_time);
    let _ = engine.animations_mut().add(Some("sim_clock"), move |dt| {
        clock.set(clock.get() + dt);
        Ok(())
    });

    let mut pacing = FrameTiming::new(TARGET_FPS);
    let frame_ms = 1000.0 / f64::from(TARGET_FPS);
    let mut last_ts = f64::NEG_INFINITY;
    let mut selected: Option<String> = None;

    while !source.is_exhausted() {
        if realtime && !pacing.should_render() {
            std::thread::sleep(pacing.until_next_frame());
        }

        // Recordings without timestamps fall back to a fixed frame clock
        let ts = match source.next_timestamp() {
            Some(t) if t > last_ts => t,
            _ if last_ts.is_finite() => last_ts + frame_ms,
            _ => 0.0,
        };
        last_ts = ts;

        let report = engine.tick(&mut source, ts);
        if realtime {
            let _ = pacing.end_frame();
        }

        log::debug!(
            "frame {} hands={} {:?} {:?} eye={} target={}",
            report.frame,
            report.hands,
            report.mode,
            report.camera_gesture,
            report.eye,
            report.target,
        );
        if report.selected != selected {
            log::info!(
                "frame {}: selection {:?} -> {:?}",
                report.frame,
                selected,
                report.selected
            );
            selected = report.selected;
        }
    }

    let camera = engine.camera();
    log::info!(
        "replayed {} frame(s) over {:.2}s, camera eye={} target={}, selected={:?}",
        engine.frame_count(),
        sim_time.get(),
        camera.eye,
        camera.target,
        engine.selected_name(),
    );
    ExitCode::SUCCESS
}
