use glam::{UVec2, Vec2, Vec4};
use macroquad::prelude as mq;
use macroquad::ui::{hash, root_ui, widgets};
use ray_canvas::{DrawCommand, DrawingSession, RayConfig, RecordingSurface, RngSource, Surface};

const CONFIG_ENV: &str = "RAY_CANVAS_CONFIG";
const INITIAL_TEXT: &str = "blue lines from four corners, red lines from the center";

fn load_config() -> RayConfig {
    let Ok(path) = std::env::var(CONFIG_ENV) else {
        return RayConfig::default();
    };
    let loaded = std::fs::read_to_string(&path)
        .map_err(|e| e.to_string())
        .and_then(|src| RayConfig::from_json(&src).map_err(|e| e.to_string()));
    match loaded {
        Ok(config) => {
            tracing::info!(path = %path, "Loaded config");
            config
        }
        Err(e) => {
            tracing::error!(path = %path, error = %e, "Failed to load config, using defaults");
            RayConfig::default()
        }
    }
}

/// The canvas is a square, 90% of the window height.
fn canvas_side(screen_h: f32) -> u32 {
    ((screen_h * 0.9) as u32).max(1)
}

fn to_mq(color: Vec4) -> mq::Color {
    mq::Color::new(color.x, color.y, color.z, color.w)
}

#[macroquad::main("Ray Canvas Playground")]
async fn main() {
    tracing_subscriber::fmt::init();

    // 1. Initialize Session
    let side = canvas_side(mq::screen_height());
    let surface = RecordingSurface::new(UVec2::splat(side));
    let mut session = match DrawingSession::new(surface, load_config(), RngSource::thread()) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "Invalid config");
            return;
        }
    };

    let mut text = INITIAL_TEXT.to_string();
    session.update(&text);

    loop {
        let screen_w = mq::screen_width();
        let screen_h = mq::screen_height();

        // 2. Triggers: resize and input change
        let side = canvas_side(screen_h);
        if session.surface().size() != UVec2::splat(side) {
            session.resize(UVec2::splat(side));
        }

        let origin = Vec2::new(((screen_w - side as f32) / 2.0).max(0.0), screen_h - side as f32);
        let box_height = (origin.y - 8.0).max(20.0);

        {
            let mut ui = root_ui();
            widgets::InputText::new(hash!())
                .position(mq::vec2(origin.x, 4.0))
                .size(mq::vec2(side as f32, box_height))
                .ui(&mut ui, &mut text);
        }
        if text != session.last_input() {
            session.update(&text);
        }

        // 3. Render
        mq::clear_background(mq::DARKGRAY);

        for cmd in session.surface().commands() {
            match *cmd {
                DrawCommand::Clear { size, color } => {
                    mq::draw_rectangle(origin.x, origin.y, size.x as f32, size.y as f32, to_mq(color));
                }
                DrawCommand::Line {
                    start,
                    end,
                    color,
                    width,
                } => {
                    let (a, b) = (origin + start, origin + end);
                    mq::draw_line(a.x, a.y, b.x, b.y, width, to_mq(color));
                }
            }
        }

        mq::next_frame().await
    }
}
