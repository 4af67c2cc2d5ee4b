use crate::utils::SimulationError;

/// An immutable 2D vector. Every operation returns a new value; nothing
/// mutates in place, including the wall-reflection velocity updates, which go
/// through [`Vector2D::with_x`] / [`Vector2D::with_y`].
#[derive(Debug, Clone, Copy)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl PartialEq for Vector2D {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl Vector2D {
    pub const ZERO: Vector2D = Vector2D { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Vector2D { x, y }
    }

    /// Component-wise addition.
    ///
    /// # Example
    /// ```
    /// use rs_billiards::models::Vector2D;
    ///
    /// let v = Vector2D::new(1.0, 2.0).plus(Vector2D::new(3.0, -1.0));
    /// assert_eq!(v, Vector2D::new(4.0, 1.0));
    /// ```
    pub fn plus(self, other: Vector2D) -> Vector2D {
        Vector2D::new(self.x + other.x, self.y + other.y)
    }

    /// Component-wise subtraction.
    pub fn minus(self, other: Vector2D) -> Vector2D {
        Vector2D::new(self.x - other.x, self.y - other.y)
    }

    /// Multiplies both components by a scalar.
    pub fn scale(self, factor: f64) -> Vector2D {
        Vector2D::new(self.x * factor, self.y * factor)
    }

    /// Divides both components by a scalar.
    ///
    /// # Errors
    /// Returns `SimulationError::DivisionByZero` when `divisor` is zero.
    pub fn divide(self, divisor: f64) -> Result<Vector2D, SimulationError> {
        if divisor == 0.0 {
            return Err(SimulationError::DivisionByZero);
        }
        Ok(Vector2D::new(self.x / divisor, self.y / divisor))
    }

    /// Dot product.
    pub fn dot(self, other: Vector2D) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Squared magnitude, i.e. the dot product with itself. Cheaper than
    /// [`Vector2D::magnitude`] for comparison-only use.
    pub fn magnitude_squared(self) -> f64 {
        self.dot(self)
    }

    pub fn magnitude(self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Squared Euclidean distance to `other`; avoids the square root.
    pub fn distance_squared(self, other: Vector2D) -> f64 {
        self.minus(other).magnitude_squared()
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Vector2D) -> f64 {
        self.minus(other).magnitude()
    }

    /// Projects this vector onto `axis`:
    /// `axis · (self ∙ axis / axis ∙ axis)`.
    ///
    /// # Errors
    /// Returns `SimulationError::ZeroVector` when `axis` is the zero vector,
    /// for which the projection is undefined.
    ///
    /// # Example
    /// ```
    /// use rs_billiards::models::Vector2D;
    ///
    /// let v = Vector2D::new(3.0, 4.0);
    /// let on_x = v.project_onto(Vector2D::new(2.0, 0.0)).unwrap();
    /// assert_eq!(on_x, Vector2D::new(3.0, 0.0));
    /// ```
    pub fn project_onto(self, axis: Vector2D) -> Result<Vector2D, SimulationError> {
        let denominator = axis.dot(axis);
        if denominator == 0.0 {
            return Err(SimulationError::ZeroVector);
        }
        Ok(axis.scale(self.dot(axis) / denominator))
    }

    /// The unit vector in this vector's direction.
    ///
    /// # Errors
    /// Returns `SimulationError::ZeroVector` at zero magnitude.
    pub fn unit(self) -> Result<Vector2D, SimulationError> {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            return Err(SimulationError::ZeroVector);
        }
        self.divide(magnitude)
    }

    /// Returns a copy with the x component replaced.
    pub fn with_x(self, x: f64) -> Vector2D {
        Vector2D::new(x, self.y)
    }

    /// Returns a copy with the y component replaced.
    pub fn with_y(self, y: f64) -> Vector2D {
        Vector2D::new(self.x, y)
    }

    /// Rescales the vector to `max` magnitude when it is faster than `max`,
    /// preserving direction. Vectors at or below the limit pass through
    /// unchanged, as does the zero vector.
    ///
    /// # Example
    /// ```
    /// use rs_billiards::models::Vector2D;
    ///
    /// let v = Vector2D::new(30.0, 40.0).clamp_magnitude(25.0);
    /// assert_eq!(v, Vector2D::new(15.0, 20.0));
    /// ```
    pub fn clamp_magnitude(self, max: f64) -> Vector2D {
        let magnitude_squared = self.magnitude_squared();
        if magnitude_squared <= max * max {
            return self;
        }
        self.scale(max / magnitude_squared.sqrt())
    }
}
