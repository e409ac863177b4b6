/// The demo slide deck.
///
/// A [`Scene`] owns the animation state of the spinning shapes and knows how
/// to lay out each slide against the configured canvas. Drivers feed it a
/// [`Surface`] and the current pointer position once per frame.
use nalgebra::{Vector2, Vector3};

use crate::config::Config;
use crate::error::Result;
use crate::geometry::{Color, Point2};
use crate::projection::CubeProjector;
use crate::raster::draw_line;
use crate::shapes;
use crate::surface::Surface;
use crate::transform::AnimationState;

/// Where the cube slide places its wireframe.
///
/// Far enough down +z that no corner swings behind the camera while spinning.
fn cube_position() -> Vector3<i32> {
    Vector3::new(0, -100, 600)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slide {
    Line,
    Rectangle,
    RotatingTriangle,
    Circle,
    Curve,
    Sierpinski,
    FakeCube,
    Cube,
}

impl Slide {
    pub const ALL: [Slide; 8] = [
        Slide::Line,
        Slide::Rectangle,
        Slide::RotatingTriangle,
        Slide::Circle,
        Slide::Curve,
        Slide::Sierpinski,
        Slide::FakeCube,
        Slide::Cube,
    ];

    /// Slide at `index`, wrapping past the end of the deck
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    pub fn previous(self) -> Self {
        Self::from_index(self.index() + Self::ALL.len() - 1)
    }

    pub fn title(self) -> &'static str {
        match self {
            Slide::Line => "Line",
            Slide::Rectangle => "Rectangle",
            Slide::RotatingTriangle => "Rotating triangle",
            Slide::Circle => "Circle",
            Slide::Curve => "Bezier curve",
            Slide::Sierpinski => "Sierpinski triangle",
            Slide::FakeCube => "Fake cube",
            Slide::Cube => "3D cube",
        }
    }
}

/// Current slide plus the animation state it carries between frames
#[derive(Debug, Clone)]
pub struct Scene {
    config: Config,
    projector: CubeProjector,
    slide: Slide,
    triangle_spin: AnimationState,
    cube_spin: AnimationState,
}

impl Scene {
    pub fn new(config: Config) -> Self {
        let projector = CubeProjector::new(config.frustum, config.viewport());
        Self {
            config,
            projector,
            slide: Slide::Line,
            triangle_spin: AnimationState::zero(),
            cube_spin: AnimationState::zero(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn slide(&self) -> Slide {
        self.slide
    }

    pub fn set_slide(&mut self, slide: Slide) {
        if slide != self.slide {
            log::debug!("slide {} -> {}", self.slide.title(), slide.title());
        }
        self.slide = slide;
    }

    pub fn next_slide(&mut self) {
        self.set_slide(self.slide.next());
    }

    pub fn previous_slide(&mut self) {
        self.set_slide(self.slide.previous());
    }

    pub fn triangle_spin(&self) -> AnimationState {
        self.triangle_spin
    }

    pub fn cube_spin(&self) -> AnimationState {
        self.cube_spin
    }

    /// Draw one frame of the current slide.
    ///
    /// `pointer` is the mouse position in canvas coordinates; the line and
    /// curve slides follow it.
    pub fn draw<S: Surface + ?Sized>(&mut self, surface: &mut S, pointer: Point2) -> Result<()> {
        let canvas = self.config.canvas;
        let center = canvas.center();
        let corner = canvas.corner();
        let inset = Vector2::new(50, 50);

        match self.slide {
            Slide::Line => draw_line(surface, center, pointer, Color::WHITE),
            Slide::Rectangle => shapes::draw_rectangle(
                surface,
                corner - Point2::new(100, 100),
                Point2::new(50, 50),
                Color::RED,
            ),
            Slide::RotatingTriangle => {
                self.triangle_spin = shapes::draw_rotated_triangle(
                    surface,
                    Point2::new(100, 100),
                    Point2::new(100, 200),
                    Point2::new(200, 200),
                    Color::GREEN,
                    self.triangle_spin,
                );
            }
            Slide::Circle => {
                shapes::draw_circle(surface, center, self.config.circle_radius, Color::BLUE);
            }
            Slide::Curve => {
                shapes::draw_curve(surface, Point2::new(50, 50), corner - inset, pointer, Color::YELLOW);
            }
            Slide::Sierpinski => shapes::draw_sierpinski_triangle(
                surface,
                Point2::new(center.x, 50),
                corner - inset,
                Point2::new(50, corner.y - 50),
                self.config.fractal_generations,
                Color::MAGENTA,
            )?,
            Slide::FakeCube => shapes::draw_fake_cube(
                surface,
                Vector3::new(200, 200, 50),
                center - Vector2::new(100, 100),
                Color::CYAN,
            ),
            Slide::Cube => {
                self.cube_spin = self.projector.render_cube(
                    surface,
                    Vector3::new(250, 250, 250),
                    cube_position(),
                    Color::WHITE,
                    self.cube_spin,
                );
            }
        }
        Ok(())
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
