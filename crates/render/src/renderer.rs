use boxfield_common::{Color, GameObject};
use boxfield_kernel::World;

/// A filled rectangle in window pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub color: Color,
}

impl DrawRect {
    /// Snap an object to whole pixels. Coordinates are truncated toward zero.
    pub fn from_object(obj: &GameObject, color: Color) -> Self {
        Self {
            x: obj.x() as i32,
            y: obj.y() as i32,
            width: obj.width() as i32,
            height: obj.height() as i32,
            color,
        }
    }
}

/// Everything a backend needs to draw one frame.
///
/// Backends clear to `clear`, fill `rects` in order, then present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub clear: Color,
    pub rects: Vec<DrawRect>,
}

impl Frame {
    /// Black background, white ball, rose enemy, in that order.
    pub fn from_world(world: &World) -> Self {
        Self {
            clear: Color::BLACK,
            rects: vec![
                DrawRect::from_object(world.ball(), Color::WHITE),
                DrawRect::from_object(world.enemy(), Color::ROSE),
            ],
        }
    }
}

/// Renderer-agnostic interface. All backends implement this trait.
///
/// Rendering is assumed to succeed: a backend that hits a recoverable
/// problem logs it and drops the frame instead of failing the loop.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Draw and present one frame.
    fn render(&mut self, frame: &Frame) -> Self::Output;
}

/// Text backend for the headless runner, logging and tests.
#[derive(Debug, Default)]
pub struct DebugTextRenderer {
    frames: u64,
}

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames rendered so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&mut self, frame: &Frame) -> String {
        self.frames += 1;
        let mut out = format!(
            "=== Frame {} (clear={}) ===\n",
            self.frames,
            hex(frame.clear)
        );
        for rect in &frame.rects {
            out.push_str(&format!(
                "  rect x={} y={} w={} h={} color={}\n",
                rect.x,
                rect.y,
                rect.width,
                rect.height,
                hex(rect.color)
            ));
        }
        out
    }
}

fn hex(c: Color) -> String {
    format!("#{:02x}{:02x}{:02x}{:02x}", c.r, c.g, c.b, c.a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use boxfield_common::Bounds;
    use glam::Vec2;

    #[test]
    fn frame_orders_ball_before_enemy() {
        let world = World::with_seed(Bounds::new(800.0, 600.0), 1);
        let frame = Frame::from_world(&world);
        assert_eq!(frame.clear, Color::BLACK);
        assert_eq!(frame.rects.len(), 2);
        assert_eq!(frame.rects[0].color, Color::WHITE);
        assert_eq!(frame.rects[0].width, 15);
        assert_eq!(frame.rects[1].color, Color::ROSE);
        assert_eq!(frame.rects[1].width, 25);
    }

    #[test]
    fn rect_truncates_fractional_pixels() {
        let obj = GameObject::new(Vec2::new(10.9, 3.2), Vec2::new(15.0, 15.0));
        let rect = DrawRect::from_object(&obj, Color::WHITE);
        assert_eq!((rect.x, rect.y, rect.width, rect.height), (10, 3, 15, 15));
    }

    #[test]
    fn debug_renderer_lists_rects() {
        let world = World::with_seed(Bounds::new(800.0, 600.0), 2);
        let mut renderer = DebugTextRenderer::new();
        let output = renderer.render(&Frame::from_world(&world));

        assert!(output.contains("Frame 1"));
        assert!(output.contains("clear=#000000ff"));
        assert!(output.contains("rect x=400 y=300 w=15 h=15 color=#ffffffff"));
        assert!(output.contains("color=#ce4760ff"));
        assert_eq!(renderer.frames(), 1);
    }

    #[test]
    fn debug_renderer_writes_one_line_per_rect() {
        let world = World::with_seed(Bounds::new(800.0, 600.0), 2);
        let mut renderer = DebugTextRenderer::new();
        renderer.render(&Frame::from_world(&world));
        let output = renderer.render(&Frame::from_world(&world));

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "=== Frame 2 (clear=#000000ff) ===");
        assert_eq!(lines[1], "  rect x=400 y=300 w=15 h=15 color=#ffffffff");
        assert!(lines[2].ends_with("color=#ce4760ff"));
        assert!(output.ends_with('\n'));
    }
}
