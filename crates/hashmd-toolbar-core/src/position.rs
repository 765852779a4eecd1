//! Anchored placement for floating panels.
//!
//! Positions a floating element next to a reference element inside a
//! boundary (normally the viewport). Two adjustments run after the initial
//! placement:
//!
//! - **flip**: if the floating element overflows the boundary on its main
//!   side, try the opposite side. The first side that fits wins; if neither
//!   fits, the side with the least overflow wins.
//! - **shift**: slide the element along its alignment axis so it stays inside
//!   the boundary, keeping `padding` clear of the edges.
//!
//! All coordinates share one space (viewport pixels in the browser).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::PositionError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    fn validate(self, what: &'static str) -> Result<Self, PositionError> {
        if !self.width.is_finite() || !self.height.is_finite() {
            return Err(PositionError::NonFinite(what));
        }
        if self.width < 0.0 || self.height < 0.0 {
            return Err(PositionError::NegativeSize(what));
        }
        Ok(self)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    fn validate(self, what: &'static str) -> Result<Self, PositionError> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(PositionError::NonFinite(what));
        }
        self.size().validate(what)?;
        Ok(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Top => Side::Bottom,
            Side::Bottom => Side::Top,
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    fn is_vertical(self) -> bool {
        matches!(self, Side::Top | Side::Bottom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Start,
    Center,
    End,
}

/// Where the floating element sits relative to the reference.
///
/// `side` is the edge of the reference it attaches to; `align` is how it lines
/// up along that edge. The default is `bottom-start`: below the reference,
/// left edges aligned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    pub side: Side,
    pub align: Align,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            side: Side::Bottom,
            align: Align::Start,
        }
    }
}

impl Placement {
    pub fn new(side: Side, align: Align) -> Self {
        Self { side, align }
    }

    pub fn flipped(self) -> Self {
        Self {
            side: self.side.opposite(),
            ..self
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = match self.side {
            Side::Top => "top",
            Side::Bottom => "bottom",
            Side::Left => "left",
            Side::Right => "right",
        };
        match self.align {
            Align::Start => write!(f, "{side}-start"),
            Align::Center => f.write_str(side),
            Align::End => write!(f, "{side}-end"),
        }
    }
}

/// Result of [`compute_position`]: the top-left corner of the floating
/// element and the placement actually used after flipping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Positioned {
    pub point: Point,
    pub placement: Placement,
}

fn initial_coords(reference: Rect, floating: Size, placement: Placement) -> Point {
    let along = |start: f64, len: f64, float_len: f64| match placement.align {
        Align::Start => start,
        Align::Center => start + (len - float_len) / 2.0,
        Align::End => start + len - float_len,
    };

    match placement.side {
        Side::Bottom => Point::new(
            along(reference.x, reference.width, floating.width),
            reference.bottom(),
        ),
        Side::Top => Point::new(
            along(reference.x, reference.width, floating.width),
            reference.y - floating.height,
        ),
        Side::Right => Point::new(
            reference.right(),
            along(reference.y, reference.height, floating.height),
        ),
        Side::Left => Point::new(
            reference.x - floating.width,
            along(reference.y, reference.height, floating.height),
        ),
    }
}

/// How far the element pokes past the boundary on its main side. Zero or
/// negative means it fits.
fn main_axis_overflow(point: Point, floating: Size, boundary: Rect, side: Side, padding: f64) -> f64 {
    match side {
        Side::Bottom => point.y + floating.height - (boundary.bottom() - padding),
        Side::Top => boundary.y + padding - point.y,
        Side::Right => point.x + floating.width - (boundary.right() - padding),
        Side::Left => boundary.x + padding - point.x,
    }
}

fn flip(reference: Rect, floating: Size, boundary: Rect, placement: Placement, padding: f64) -> (Placement, Point) {
    let mut best: Option<(f64, Placement, Point)> = None;

    for candidate in [placement, placement.flipped()] {
        let point = initial_coords(reference, floating, candidate);
        let overflow = main_axis_overflow(point, floating, boundary, candidate.side, padding);
        if overflow <= 0.0 {
            return (candidate, point);
        }
        if best.is_none_or(|(least, _, _)| overflow < least) {
            best = Some((overflow, candidate, point));
        }
    }

    match best {
        Some((_, placement, point)) => (placement, point),
        None => (placement, initial_coords(reference, floating, placement)),
    }
}

fn clamp_axis(value: f64, len: f64, start: f64, end: f64, padding: f64) -> f64 {
    let min = start + padding;
    let max = end - padding - len;
    // Wider than the boundary: pin to the start edge.
    if max < min {
        return min;
    }
    value.clamp(min, max)
}

fn shift(point: Point, floating: Size, boundary: Rect, placement: Placement, padding: f64) -> Point {
    if placement.side.is_vertical() {
        Point::new(
            clamp_axis(point.x, floating.width, boundary.x, boundary.right(), padding),
            point.y,
        )
    } else {
        Point::new(
            point.x,
            clamp_axis(point.y, floating.height, boundary.y, boundary.bottom(), padding),
        )
    }
}

/// Place `floating` next to `reference`, flipping and shifting to stay inside
/// `boundary`.
pub fn compute_position(
    reference: Rect,
    floating: Size,
    boundary: Rect,
    placement: Placement,
    padding: f64,
) -> Result<Positioned, PositionError> {
    let reference = reference.validate("reference")?;
    let floating = floating.validate("floating element")?;
    let boundary = boundary.validate("boundary")?;
    let padding = if padding.is_finite() { padding.max(0.0) } else { 0.0 };

    let (placement, point) = flip(reference, floating, boundary, placement, padding);
    let point = shift(point, floating, boundary, placement, padding);

    Ok(Positioned { point, placement })
}
