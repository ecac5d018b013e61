//! Flat garment silhouettes, drawn in a 200x300 design space and mapped onto
//! the container.

use egui::{Color32, Painter, Pos2, Rect, Shape, Stroke, Vec2, pos2};

use crate::catalog::Category;

pub const DESIGN_WIDTH: f32 = 200.0;
pub const DESIGN_HEIGHT: f32 = 300.0;

pub const OBI_TOP: f32 = 90.0;
pub const OBI_BOTTOM: f32 = 160.0;
pub const OBIJIME_TOP: f32 = 120.0;
pub const OBIJIME_BOTTOM: f32 = 130.0;
const SASH_LEFT: f32 = 30.0;
const SASH_RIGHT: f32 = 170.0;

const CURVE_SEGMENTS: usize = 6;

/// How the design space is fitted into the target rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fit {
    /// Uniform scale, centered
    Contain,
    /// Independent x/y scale filling the rectangle
    Stretch,
}

/// Maps design coordinates onto a screen rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignMapping {
    origin: Pos2,
    scale: Vec2,
}

impl DesignMapping {
    pub fn new(rect: Rect, fit: Fit) -> Self {
        let sx = rect.width() / DESIGN_WIDTH;
        let sy = rect.height() / DESIGN_HEIGHT;
        match fit {
            Fit::Stretch => Self {
                origin: rect.min,
                scale: Vec2::new(sx, sy),
            },
            Fit::Contain => {
                let s = sx.min(sy);
                let used = Vec2::new(DESIGN_WIDTH * s, DESIGN_HEIGHT * s);
                Self {
                    origin: rect.min + (rect.size() - used) / 2.0,
                    scale: Vec2::splat(s),
                }
            }
        }
    }

    pub fn map(&self, p: Pos2) -> Pos2 {
        self.origin + p.to_vec2() * self.scale
    }

    pub fn map_rect(&self, r: Rect) -> Rect {
        Rect::from_min_max(self.map(r.min), self.map(r.max))
    }
}

fn fit_for(garment: Category) -> Fit {
    match garment {
        Category::Obi => Fit::Stretch,
        Category::Kimono | Category::Obijime => Fit::Contain,
    }
}

/// Samples a quadratic Bézier from `p0` to `p2`, excluding `p0`.
fn quad_bezier(p0: Pos2, control: Pos2, p2: Pos2, segments: usize) -> impl Iterator<Item = Pos2> {
    (1..=segments).map(move |i| {
        let t = i as f32 / segments as f32;
        let u = 1.0 - t;
        pos2(
            u * u * p0.x + 2.0 * u * t * control.x + t * t * p2.x,
            u * u * p0.y + 2.0 * u * t * control.y + t * t * p2.y,
        )
    })
}

/// Convex pieces that together make up the kimono outline.
pub fn kimono_pieces() -> Vec<Vec<Pos2>> {
    let mut left_sleeve = vec![pos2(0.0, 70.0), pos2(29.0, 70.0), pos2(29.0, 200.0)];
    left_sleeve.extend(quad_bezier(
        pos2(29.0, 200.0),
        pos2(26.0, 220.0),
        pos2(0.0, 200.0),
        CURVE_SEGMENTS,
    ));

    let mut right_sleeve = vec![pos2(171.0, 70.0), pos2(200.0, 70.0), pos2(200.0, 200.0)];
    right_sleeve.extend(quad_bezier(
        pos2(200.0, 200.0),
        pos2(174.0, 220.0),
        pos2(171.0, 200.0),
        CURVE_SEGMENTS,
    ));

    let left_shoulder = vec![
        pos2(0.0, 70.0),
        pos2(20.0, 30.0),
        pos2(40.0, 12.0),
        pos2(80.0, 0.0),
        pos2(100.0, 30.0),
        pos2(100.0, 70.0),
    ];
    let right_shoulder = vec![
        pos2(100.0, 30.0),
        pos2(120.0, 0.0),
        pos2(160.0, 12.0),
        pos2(180.0, 30.0),
        pos2(200.0, 70.0),
        pos2(100.0, 70.0),
    ];
    let body = vec![
        pos2(30.0, 70.0),
        pos2(170.0, 70.0),
        pos2(170.0, 200.0),
        pos2(164.0, 300.0),
        pos2(36.0, 300.0),
        pos2(30.0, 200.0),
    ];

    vec![left_sleeve, right_sleeve, left_shoulder, right_shoulder, body]
}

/// Design-space rectangle of a sash garment
pub fn sash_rect(garment: Category) -> Option<Rect> {
    match garment {
        Category::Obi => Some(Rect::from_min_max(
            pos2(SASH_LEFT, OBI_TOP),
            pos2(SASH_RIGHT, OBI_BOTTOM),
        )),
        Category::Obijime => Some(Rect::from_min_max(
            pos2(SASH_LEFT, OBIJIME_TOP),
            pos2(SASH_RIGHT, OBIJIME_BOTTOM),
        )),
        Category::Kimono => None,
    }
}

/// Shapes for one garment filling `rect`, shifted horizontally by `offset_x`.
pub fn shapes(garment: Category, rect: Rect, color: Color32, offset_x: f32) -> Vec<Shape> {
    let mapping = DesignMapping::new(rect.translate(Vec2::new(offset_x, 0.0)), fit_for(garment));
    match sash_rect(garment) {
        Some(sash) => vec![Shape::rect_filled(mapping.map_rect(sash), 0.0, color)],
        None => kimono_pieces()
            .into_iter()
            .map(|piece| {
                let points = piece.into_iter().map(|p| mapping.map(p)).collect();
                Shape::convex_polygon(points, color, Stroke::NONE)
            })
            .collect(),
    }
}

pub fn paint(painter: &Painter, garment: Category, rect: Rect, color: Color32, offset_x: f32) {
    painter.extend(shapes(garment, rect, color, offset_x));
}
