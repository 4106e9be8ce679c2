//! Circles, rotated rectangles, and overlap tests.
//!
//! Overlap is strict: shapes that only share a boundary do not
//! intersect. A small tolerance ([`CONTACT_EPS`]) absorbs rounding so
//! that walls laid edge-to-edge, or a bookend flush against the shelf,
//! are not reported as colliding.

/// Penetration depth below which two shapes count as merely touching.
pub const CONTACT_EPS: f64 = 1e-9;

/// A point in the plane.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Create a point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn dot(self, other: Point) -> f64 {
        self.x * other.x + self.y * other.y
    }
}

/// A circle given by centre and radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    /// Centre x.
    pub x: f64,
    /// Centre y.
    pub y: f64,
    /// Radius.
    pub radius: f64,
}

impl Circle {
    /// Create a circle.
    pub const fn new(x: f64, y: f64, radius: f64) -> Self {
        Self { x, y, radius }
    }

    /// Whether `(px, py)` lies inside or on the circle.
    pub fn contains_point(&self, px: f64, py: f64) -> bool {
        let (dx, dy) = (px - self.x, py - self.y);
        dx * dx + dy * dy <= self.radius * self.radius
    }
}

/// A rectangle rotated by `theta` about its lower-left corner `(x, y)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rectangle {
    /// Corner x.
    pub x: f64,
    /// Corner y.
    pub y: f64,
    /// Extent along the rotated x axis.
    pub width: f64,
    /// Extent along the rotated y axis.
    pub height: f64,
    /// Rotation in radians about the corner.
    pub theta: f64,
}

impl Rectangle {
    /// Create a rectangle from its corner, extent and rotation.
    pub const fn new(x: f64, y: f64, width: f64, height: f64, theta: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            theta,
        }
    }

    /// Create a rectangle whose centre is `(cx, cy)`.
    pub fn from_center(cx: f64, cy: f64, width: f64, height: f64, theta: f64) -> Self {
        let (s, c) = theta.sin_cos();
        let (hw, hh) = (width / 2.0, height / 2.0);
        Self {
            x: cx - (c * hw - s * hh),
            y: cy - (s * hw + c * hh),
            width,
            height,
            theta,
        }
    }

    /// Unit vectors of the rotated x and y axes.
    fn axes(&self) -> (Point, Point) {
        let (s, c) = self.theta.sin_cos();
        (Point::new(c, s), Point::new(-s, c))
    }

    /// Centre of the rectangle.
    pub fn center(&self) -> Point {
        let (u, v) = self.axes();
        Point::new(
            self.x + (u.x * self.width + v.x * self.height) / 2.0,
            self.y + (u.y * self.width + v.y * self.height) / 2.0,
        )
    }

    /// The four corners, counter-clockwise from `(x, y)`.
    pub fn vertices(&self) -> [Point; 4] {
        let (u, v) = self.axes();
        let (w, h) = (self.width, self.height);
        [
            Point::new(self.x, self.y),
            Point::new(self.x + u.x * w, self.y + u.y * w),
            Point::new(self.x + u.x * w + v.x * h, self.y + u.y * w + v.y * h),
            Point::new(self.x + v.x * h, self.y + v.y * h),
        ]
    }

    /// `(px, py)` expressed in the rectangle's local frame.
    fn to_local(&self, px: f64, py: f64) -> Point {
        let (u, v) = self.axes();
        let d = Point::new(px - self.x, py - self.y);
        Point::new(d.dot(u), d.dot(v))
    }

    /// Whether `(px, py)` lies inside or on the rectangle.
    pub fn contains_point(&self, px: f64, py: f64) -> bool {
        let p = self.to_local(px, py);
        let tol = CONTACT_EPS;
        (-tol..=self.width + tol).contains(&p.x) && (-tol..=self.height + tol).contains(&p.y)
    }

    /// Whether `other` lies entirely inside this rectangle.
    pub fn contains_rectangle(&self, other: &Rectangle) -> bool {
        other
            .vertices()
            .iter()
            .all(|p| self.contains_point(p.x, p.y))
    }

    /// Projection interval of the corners onto `axis`.
    fn project(&self, axis: Point) -> (f64, f64) {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for p in self.vertices() {
            let d = p.dot(axis);
            lo = lo.min(d);
            hi = hi.max(d);
        }
        (lo, hi)
    }

    /// Separating-axis test between two rectangles.
    fn intersects_rectangle(&self, other: &Rectangle) -> bool {
        let (a0, a1) = self.axes();
        let (b0, b1) = other.axes();
        [a0, a1, b0, b1].into_iter().all(|axis| {
            let (lo1, hi1) = self.project(axis);
            let (lo2, hi2) = other.project(axis);
            hi1 - lo2 > CONTACT_EPS && hi2 - lo1 > CONTACT_EPS
        })
    }

    /// Circle-rectangle test via the closest point in the local frame.
    fn intersects_circle(&self, circle: &Circle) -> bool {
        let p = self.to_local(circle.x, circle.y);
        let cx = p.x.clamp(0.0, self.width.max(0.0));
        let cy = p.y.clamp(0.0, self.height.max(0.0));
        let (dx, dy) = (p.x - cx, p.y - cy);
        let reach = circle.radius - CONTACT_EPS;
        reach > 0.0 && dx * dx + dy * dy < reach * reach
    }
}

/// Any collision-relevant 2D shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    /// A circle.
    Circle(Circle),
    /// A rotated rectangle.
    Rectangle(Rectangle),
}

impl Shape {
    /// Whether the two shapes overlap with positive penetration.
    pub fn intersects(&self, other: &Shape) -> bool {
        match (self, other) {
            (Shape::Rectangle(a), Shape::Rectangle(b)) => a.intersects_rectangle(b),
            (Shape::Rectangle(r), Shape::Circle(c)) | (Shape::Circle(c), Shape::Rectangle(r)) => {
                r.intersects_circle(c)
            }
            (Shape::Circle(a), Shape::Circle(b)) => {
                let (dx, dy) = (a.x - b.x, a.y - b.y);
                let reach = a.radius + b.radius - CONTACT_EPS;
                reach > 0.0 && dx * dx + dy * dy < reach * reach
            }
        }
    }

    /// Whether `(px, py)` lies inside or on the shape.
    pub fn contains_point(&self, px: f64, py: f64) -> bool {
        match self {
            Shape::Circle(c) => c.contains_point(px, py),
            Shape::Rectangle(r) => r.contains_point(px, py),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f64::consts::FRAC_PI_2;

    fn rect(x: f64, y: f64, w: f64, h: f64, t: f64) -> Shape {
        Shape::Rectangle(Rectangle::new(x, y, w, h, t))
    }

    #[test]
    fn from_center_round_trips_center() {
        let r = Rectangle::from_center(2.0, 1.0, 0.28, 0.04, 0.3);
        let c = r.center();
        assert!((c.x - 2.0).abs() < 1e-12 && (c.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn rotation_is_about_the_corner() {
        let r = Rectangle::new(1.0, 1.0, 2.0, 1.0, FRAC_PI_2);
        let v = r.vertices();
        assert!((v[1].x - 1.0).abs() < 1e-12 && (v[1].y - 3.0).abs() < 1e-12);
        assert!((v[3].x - 0.0).abs() < 1e-12 && (v[3].y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn touching_rectangles_do_not_intersect() {
        let a = rect(0.0, 0.0, 1.0, 1.0, 0.0);
        let b = rect(1.0, 0.0, 1.0, 1.0, 0.0);
        assert!(!a.intersects(&b));
        let c = rect(0.999, 0.0, 1.0, 1.0, 0.0);
        assert!(a.intersects(&c));
    }

    #[test]
    fn rotated_rectangles_separated_on_diagonal_axis() {
        // Axis-aligned bounding boxes overlap, but the rotated square clears the corner.
        let a = rect(0.0, 0.0, 1.0, 1.0, 0.0);
        let b = Shape::Rectangle(Rectangle::from_center(1.8, 1.8, 1.0, 1.0, std::f64::consts::FRAC_PI_4));
        assert!(!a.intersects(&b));
    }

    #[test]
    fn circle_rectangle_cases() {
        let r = rect(0.0, 0.0, 1.0, 1.0, 0.0);
        assert!(r.intersects(&Shape::Circle(Circle::new(0.5, 0.5, 0.1))));
        assert!(r.intersects(&Shape::Circle(Circle::new(1.1, 0.5, 0.2))));
        assert!(!r.intersects(&Shape::Circle(Circle::new(1.2, 0.5, 0.2))));
        // Near a corner the distance is Euclidean, not per-axis.
        assert!(!r.intersects(&Shape::Circle(Circle::new(1.15, 1.15, 0.2))));
    }

    #[test]
    fn circles_intersect_by_center_distance() {
        let a = Shape::Circle(Circle::new(0.0, 0.0, 1.0));
        assert!(a.intersects(&Shape::Circle(Circle::new(1.5, 0.0, 1.0))));
        assert!(!a.intersects(&Shape::Circle(Circle::new(2.0, 0.0, 1.0))));
    }

    #[test]
    fn containment() {
        let outer = Rectangle::new(0.0, 0.0, 2.0, 1.0, 0.0);
        let inner = Rectangle::from_center(1.0, 0.5, 0.5, 0.2, 0.2);
        assert!(outer.contains_rectangle(&inner));
        let straddling = Rectangle::from_center(1.9, 0.5, 0.5, 0.2, 0.0);
        assert!(!outer.contains_rectangle(&straddling));
        assert!(Shape::Rectangle(outer).contains_point(2.0, 1.0));
        assert!(!Shape::Rectangle(outer).contains_point(2.1, 1.0));
    }

    proptest! {
        #[test]
        fn intersection_is_symmetric(
            ax in -2.0f64..2.0, ay in -2.0f64..2.0, at in -3.2f64..3.2,
            bx in -2.0f64..2.0, by in -2.0f64..2.0, bt in -3.2f64..3.2,
            r in 0.05f64..1.0,
        ) {
            let a = rect(ax, ay, 1.0, 0.5, at);
            let b = rect(bx, by, 0.7, 0.3, bt);
            let c = Shape::Circle(Circle::new(bx, by, r));
            prop_assert_eq!(a.intersects(&b), b.intersects(&a));
            prop_assert_eq!(a.intersects(&c), c.intersects(&a));
        }

        #[test]
        fn rectangle_contains_its_center(
            cx in -5.0f64..5.0, cy in -5.0f64..5.0,
            w in 0.01f64..3.0, h in 0.01f64..3.0, t in -3.2f64..3.2,
        ) {
            let r = Rectangle::from_center(cx, cy, w, h, t);
            prop_assert!(r.contains_point(cx, cy));
            prop_assert!(Shape::Rectangle(r).intersects(&Shape::Rectangle(r)));
        }
    }
}
