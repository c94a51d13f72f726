//! Drawing surface abstraction.
//!
//! Entities emit their shapes through [`Painter`], which covers the subset of the
//! Canvas 2D API the garden needs. The browser build paints straight into a
//! `CanvasRenderingContext2d`; host tests use [`CommandRecorder`] to capture the
//! command stream instead.

use web_sys::CanvasRenderingContext2d;

pub trait Painter {
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, x: f64, y: f64);
    fn rotate(&mut self, angle: f64);
    fn begin_path(&mut self);
    fn close_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn bezier_curve_to(&mut self, cp1x: f64, cp1y: f64, cp2x: f64, cp2y: f64, x: f64, y: f64);
    #[allow(clippy::too_many_arguments)]
    fn ellipse(
        &mut self,
        x: f64,
        y: f64,
        radius_x: f64,
        radius_y: f64,
        rotation: f64,
        start_angle: f64,
        end_angle: f64,
    );
    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64);
    fn fill(&mut self);
    fn stroke(&mut self);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn set_fill_style(&mut self, css: &str);
    fn set_stroke_style(&mut self, css: &str);
    fn set_line_width(&mut self, width: f64);
}

// Fallible canvas calls only reject non-finite or negative geometry, which the
// entities never produce, so their results are dropped.
impl Painter for CanvasRenderingContext2d {
    fn save(&mut self) {
        CanvasRenderingContext2d::save(self);
    }
    fn restore(&mut self) {
        CanvasRenderingContext2d::restore(self);
    }
    fn translate(&mut self, x: f64, y: f64) {
        CanvasRenderingContext2d::translate(self, x, y).ok();
    }
    fn rotate(&mut self, angle: f64) {
        CanvasRenderingContext2d::rotate(self, angle).ok();
    }
    fn begin_path(&mut self) {
        CanvasRenderingContext2d::begin_path(self);
    }
    fn close_path(&mut self) {
        CanvasRenderingContext2d::close_path(self);
    }
    fn move_to(&mut self, x: f64, y: f64) {
        CanvasRenderingContext2d::move_to(self, x, y);
    }
    fn line_to(&mut self, x: f64, y: f64) {
        CanvasRenderingContext2d::line_to(self, x, y);
    }
    fn bezier_curve_to(&mut self, cp1x: f64, cp1y: f64, cp2x: f64, cp2y: f64, x: f64, y: f64) {
        CanvasRenderingContext2d::bezier_curve_to(self, cp1x, cp1y, cp2x, cp2y, x, y);
    }
    fn ellipse(
        &mut self,
        x: f64,
        y: f64,
        radius_x: f64,
        radius_y: f64,
        rotation: f64,
        start_angle: f64,
        end_angle: f64,
    ) {
        CanvasRenderingContext2d::ellipse(
            self,
            x,
            y,
            radius_x,
            radius_y,
            rotation,
            start_angle,
            end_angle,
        )
        .ok();
    }
    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64) {
        CanvasRenderingContext2d::arc(self, x, y, radius, start_angle, end_angle).ok();
    }
    fn fill(&mut self) {
        CanvasRenderingContext2d::fill(self);
    }
    fn stroke(&mut self) {
        CanvasRenderingContext2d::stroke(self);
    }
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        CanvasRenderingContext2d::fill_rect(self, x, y, w, h);
    }
    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        CanvasRenderingContext2d::clear_rect(self, x, y, w, h);
    }
    fn set_fill_style(&mut self, css: &str) {
        self.set_fill_style_str(css);
    }
    fn set_stroke_style(&mut self, css: &str) {
        self.set_stroke_style_str(css);
    }
    fn set_line_width(&mut self, width: f64) {
        CanvasRenderingContext2d::set_line_width(self, width);
    }
}

/// One recorded canvas call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Save,
    Restore,
    Translate(f64, f64),
    Rotate(f64),
    BeginPath,
    ClosePath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    BezierCurveTo([f64; 6]),
    Ellipse {
        x: f64,
        y: f64,
        radius_x: f64,
        radius_y: f64,
        rotation: f64,
    },
    Arc {
        x: f64,
        y: f64,
        radius: f64,
    },
    Fill,
    Stroke,
    FillRect(f64, f64, f64, f64),
    ClearRect(f64, f64, f64, f64),
    FillStyle(String),
    StrokeStyle(String),
    LineWidth(f64),
}

/// In-memory painter that records every command it receives.
#[derive(Debug, Default)]
pub struct CommandRecorder {
    pub commands: Vec<DrawCommand>,
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn count(&self, pred: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| pred(c)).count()
    }

    /// True when every `Save` has a matching later `Restore` and the stack
    /// never underflows.
    pub fn is_balanced(&self) -> bool {
        let mut depth: i64 = 0;
        for c in &self.commands {
            match c {
                DrawCommand::Save => depth += 1,
                DrawCommand::Restore => {
                    depth -= 1;
                    if depth < 0 {
                        return false;
                    }
                }
                _ => {}
            }
        }
        depth == 0
    }

    pub fn fill_styles(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::FillStyle(s) => Some(s.as_str()),
            _ => None,
        })
    }
}

impl Painter for CommandRecorder {
    fn save(&mut self) {
        self.commands.push(DrawCommand::Save);
    }
    fn restore(&mut self) {
        self.commands.push(DrawCommand::Restore);
    }
    fn translate(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::Translate(x, y));
    }
    fn rotate(&mut self, angle: f64) {
        self.commands.push(DrawCommand::Rotate(angle));
    }
    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }
    fn close_path(&mut self) {
        self.commands.push(DrawCommand::ClosePath);
    }
    fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::MoveTo(x, y));
    }
    fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::LineTo(x, y));
    }
    fn bezier_curve_to(&mut self, cp1x: f64, cp1y: f64, cp2x: f64, cp2y: f64, x: f64, y: f64) {
        self.commands
            .push(DrawCommand::BezierCurveTo([cp1x, cp1y, cp2x, cp2y, x, y]));
    }
    fn ellipse(
        &mut self,
        x: f64,
        y: f64,
        radius_x: f64,
        radius_y: f64,
        rotation: f64,
        _start_angle: f64,
        _end_angle: f64,
    ) {
        self.commands.push(DrawCommand::Ellipse {
            x,
            y,
            radius_x,
            radius_y,
            rotation,
        });
    }
    fn arc(&mut self, x: f64, y: f64, radius: f64, _start_angle: f64, _end_angle: f64) {
        self.commands.push(DrawCommand::Arc { x, y, radius });
    }
    fn fill(&mut self) {
        self.commands.push(DrawCommand::Fill);
    }
    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke);
    }
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.commands.push(DrawCommand::FillRect(x, y, w, h));
    }
    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.commands.push(DrawCommand::ClearRect(x, y, w, h));
    }
    fn set_fill_style(&mut self, css: &str) {
        self.commands.push(DrawCommand::FillStyle(css.to_string()));
    }
    fn set_stroke_style(&mut self, css: &str) {
        self.commands.push(DrawCommand::StrokeStyle(css.to_string()));
    }
    fn set_line_width(&mut self, width: f64) {
        self.commands.push(DrawCommand::LineWidth(width));
    }
}
