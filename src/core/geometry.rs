use crate::domain::model::Triangle;
use crate::utils::error::GeometryError;
use std::f64::consts::PI;

/// Absolute tolerance for side equality and the Pythagorean check.
pub const TOLERANCE: f64 = 1e-10;

/// Heron areas below this are treated as collinear.
pub const DEGENERATE_AREA: f64 = 1e-10;

/// Fails with `InvalidTriangle` when a side is not positive or the strict
/// triangle inequality does not hold. `a + b == c` is rejected.
pub fn validate_triangle(a: f64, b: f64, c: f64) -> Result<(), GeometryError> {
    // Written as negations so NaN sides fall through to the error.
    if !(a > 0.0 && b > 0.0 && c > 0.0) {
        return Err(GeometryError::InvalidTriangle {
            a,
            b,
            c,
            reason: "all sides must be positive",
        });
    }

    if a + b <= c || a + c <= b || b + c <= a {
        return Err(GeometryError::InvalidTriangle {
            a,
            b,
            c,
            reason: "each side must be shorter than the sum of the other two",
        });
    }

    Ok(())
}

impl Triangle {
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self, GeometryError> {
        validate_triangle(a, b, c)?;
        Ok(Self { a, b, c })
    }

    pub fn area(&self) -> Result<f64, GeometryError> {
        heron_area(self.a, self.b, self.c)
    }

    pub fn perimeter(&self) -> f64 {
        self.a + self.b + self.c
    }

    pub fn is_right(&self) -> bool {
        pythagorean(self.a, self.b, self.c)
    }

    pub fn is_equilateral(&self) -> bool {
        is_equilateral(self.a, self.b, self.c)
    }

    pub fn is_isosceles(&self) -> bool {
        is_isosceles(self.a, self.b, self.c)
    }
}

/// Area by Heron's formula. Near-collinear inputs that slip through the
/// inequality check by floating-point margin fail with `DegenerateTriangle`.
pub fn triangle_area(a: f64, b: f64, c: f64) -> Result<f64, GeometryError> {
    validate_triangle(a, b, c)?;
    heron_area(a, b, c)
}

fn heron_area(a: f64, b: f64, c: f64) -> Result<f64, GeometryError> {
    let p = (a + b + c) / 2.0;
    let area = (p * (p - a) * (p - b) * (p - c)).sqrt();

    if area < DEGENERATE_AREA {
        tracing::debug!(a, b, c, area, "rejecting degenerate triangle");
        return Err(GeometryError::DegenerateTriangle { a, b, c, area });
    }

    Ok(area)
}

pub fn triangle_perimeter(a: f64, b: f64, c: f64) -> Result<f64, GeometryError> {
    validate_triangle(a, b, c)?;
    Ok(a + b + c)
}

/// Order-independent: sides are sorted before the hypotenuse is picked.
pub fn is_right_triangle(a: f64, b: f64, c: f64) -> Result<bool, GeometryError> {
    validate_triangle(a, b, c)?;
    Ok(pythagorean(a, b, c))
}

fn pythagorean(a: f64, b: f64, c: f64) -> bool {
    let mut sides = [a, b, c];
    sides.sort_by(f64::total_cmp);
    let [leg1, leg2, hypotenuse] = sides;

    (hypotenuse.powi(2) - (leg1.powi(2) + leg2.powi(2))).abs() < TOLERANCE
}

/// Never fails; non-positive sides just make it `false`.
pub fn is_equilateral(a: f64, b: f64, c: f64) -> bool {
    if !(a > 0.0 && b > 0.0 && c > 0.0) {
        return false;
    }

    (a - b).abs() < TOLERANCE && (b - c).abs() < TOLERANCE
}

/// At least one pair of equal sides on a triangle that actually exists.
/// Every equilateral triangle is also isosceles.
pub fn is_isosceles(a: f64, b: f64, c: f64) -> bool {
    if validate_triangle(a, b, c).is_err() {
        return false;
    }

    (a - b).abs() < TOLERANCE || (a - c).abs() < TOLERANCE || (b - c).abs() < TOLERANCE
}

fn validate_radius(radius: f64) -> Result<(), GeometryError> {
    if !(radius > 0.0) {
        return Err(GeometryError::InvalidRadius { radius });
    }
    Ok(())
}

pub fn circle_circumference(radius: f64) -> Result<f64, GeometryError> {
    validate_radius(radius)?;
    Ok(2.0 * PI * radius)
}

pub fn circle_area(radius: f64) -> Result<f64, GeometryError> {
    validate_radius(radius)?;
    Ok(PI * radius * radius)
}
