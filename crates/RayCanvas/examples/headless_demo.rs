use glam::UVec2;
use ray_canvas::{DrawCommand, DrawingSession, RayConfig, RecordingSurface, RngSource, Surface};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== RayCanvas Headless Demo ===");

    // 1. Initialize Session (seeded so the output is reproducible)
    let surface = RecordingSurface::new(UVec2::splat(630));
    let mut session =
        match DrawingSession::new(surface, RayConfig::default(), RngSource::seeded(2024)) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Invalid config: {e}");
                return;
            }
        };

    // 2. Simulate a user typing, then resizing the window
    let inputs = [
        "",
        "Red lines from the center",
        "red lines from the center, BLUE lines from four corners!",
        "green lines from the midpoints of four sides, purple lines from nowhere",
    ];

    for input in inputs {
        let drawn = session.update(input);
        println!("\n> {input:?}");
        println!(
            "  rays drawn: {drawn}, total lines: {}",
            session.surface().line_count()
        );
    }

    let drawn = session.resize(UVec2::new(420, 420));
    println!(
        "\n>> Resized to {}: rays drawn {drawn}, grid x points {:?}",
        session.surface().size(),
        session.grid().x_points
    );

    // 3. Peek at the first few commands the host would rasterize
    for cmd in session.surface().commands().iter().take(3) {
        match cmd {
            DrawCommand::Clear { size, color } => println!("  Clear {size} with {color}"),
            DrawCommand::Line {
                start,
                end,
                color,
                width,
            } => println!("  Line {start} -> {end} ({color}, {width}px)"),
        }
    }
}
