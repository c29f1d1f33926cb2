//! Construction-time configuration for soft bodies.

use crate::error::ConfigError;
use crate::float::Float;
use crate::vec::Vec2;

/// Rectangular walls `[0, width] × [0, height]`, owned per body.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds<F: Float> {
    pub width: F,
    pub height: F,
}

impl<F: Float> Bounds<F> {
    pub fn new(width: F, height: F) -> Self {
        Bounds { width, height }
    }

    /// Walls at infinity; clamping never triggers.
    pub fn unbounded() -> Self {
        Bounds { width: F::infinity(), height: F::infinity() }
    }

    /// Clamp a point into the walls shrunk by `radius`.
    ///
    /// The walls must be at least `2·radius` apart on each axis;
    /// `BodyConfig::validate` enforces this for bodies.
    pub fn clamp(&self, p: Vec2<F>, radius: F) -> Vec2<F> {
        Vec2::new(
            p.x.clamp(radius, self.width - radius),
            p.y.clamp(radius, self.height - radius),
        )
    }
}

/// Configuration for a grid soft body.
///
/// Defaults reproduce the tuning of the desktop demo this crate grew out of:
/// an 800×600 screen, a 200×200 body of 5×5 particles, gravity in screen
/// units (y down).
///
/// # Builder Pattern
/// ```
/// use wobble::config::BodyConfig;
/// use wobble::vec::Vec2;
///
/// let config: BodyConfig<f64> = BodyConfig::new()
///     .with_grid_resolution(3)
///     .with_stiffness(0.05)
///     .with_relaxation_iterations(5)
///     .with_gravity(Vec2::new(0.0, 0.5));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct BodyConfig<F: Float> {
    /// Top-left corner of the body's rest rectangle.
    pub origin: Vec2<F>,
    /// Rest rectangle width.
    pub width: F,
    /// Rest rectangle height.
    pub height: F,
    /// Particles per side; the body holds `n × n` particles.
    pub grid_resolution: usize,
    /// Mass of every particle. Must be positive.
    pub particle_mass: F,
    /// Collision radius of every particle, also the wall inset.
    pub particle_radius: F,
    /// Spring constant `k`.
    pub stiffness: F,
    /// Spring damping factor along the spring axis. 0 disables it.
    ///
    /// By default the term is `-c·((vA−vB)·dir)·dir` added to the force on
    /// B, which feeds closing speed back into the spring rather than
    /// removing it. See `dissipative_spring_damping`.
    pub spring_damping: F,
    /// Flip the spring damping term so it opposes closing speed.
    pub dissipative_spring_damping: bool,
    /// Spring force passes per step before integration (R).
    ///
    /// Forces re-accumulate without an intervening position update, so R
    /// scales the effective stiffness by R. It approximates implicit
    /// stiffness; it is not sub-stepping.
    pub relaxation_iterations: usize,
    /// Screen walls.
    pub bounds: Bounds<F>,
    /// Gravitational acceleration, applied as `gravity · mass`.
    pub gravity: Vec2<F>,
    /// Per-step velocity retention in (0, 1]. 1.0 = no damping.
    pub damping: F,
    /// Velocity reflection factor used by the wall pre-check.
    pub wall_restitution: F,
    /// Shape-memory gain `k_restore`.
    pub restore_gain: F,
    /// Fraction `c` of the penetration corrected per collision, in (0, 1).
    pub correction_factor: F,
    /// Velocity retention on collision.
    pub collision_damping: F,
    /// Fraction of tangential velocity removed on collision.
    pub friction: F,
    /// Pointer-to-centroid distance that starts a body drag.
    pub drag_threshold: F,
    /// Gain of the elastic pull injected while dragging.
    pub drag_gain: F,
    /// Rest-length multiplier applied while dragging. 1.0 leaves springs alone.
    pub drag_rest_length_scale: F,
    /// Reset spring rest lengths to their creation values on release.
    pub restore_rest_length_on_release: bool,
    /// Allow grabbing a single particle when the pointer misses the centroid.
    pub particle_grab: bool,
}

impl<F: Float> BodyConfig<F> {
    /// Create a config with default values.
    pub fn new() -> Self {
        BodyConfig {
            origin: Vec2::new(F::from_f64(300.0), F::from_f64(200.0)),
            width: F::from_f64(200.0),
            height: F::from_f64(200.0),
            grid_resolution: 5,
            particle_mass: F::one(),
            particle_radius: F::from_f64(30.0),
            stiffness: F::from_f64(0.5),
            spring_damping: F::from_f64(0.1),
            dissipative_spring_damping: false,
            relaxation_iterations: 5,
            bounds: Bounds::new(F::from_f64(800.0), F::from_f64(600.0)),
            gravity: Vec2::new(F::zero(), F::from_f64(0.5)),
            damping: F::from_f64(0.99),
            wall_restitution: F::from_f64(0.9),
            restore_gain: F::one(),
            correction_factor: F::from_f64(0.1),
            collision_damping: F::from_f64(0.1),
            friction: F::from_f64(0.1),
            drag_threshold: F::from_f64(20.0),
            drag_gain: F::from_f64(0.5),
            drag_rest_length_scale: F::one(),
            restore_rest_length_on_release: true,
            particle_grab: true,
        }
    }

    pub fn with_origin(mut self, origin: Vec2<F>) -> Self {
        self.origin = origin;
        self
    }

    /// Set the rest rectangle size.
    pub fn with_size(mut self, width: F, height: F) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_grid_resolution(mut self, n: usize) -> Self {
        self.grid_resolution = n;
        self
    }

    pub fn with_particle_mass(mut self, mass: F) -> Self {
        self.particle_mass = mass;
        self
    }

    pub fn with_particle_radius(mut self, radius: F) -> Self {
        self.particle_radius = radius;
        self
    }

    pub fn with_stiffness(mut self, stiffness: F) -> Self {
        self.stiffness = stiffness;
        self
    }

    pub fn with_spring_damping(mut self, damping: F) -> Self {
        self.spring_damping = damping;
        self
    }

    pub fn with_dissipative_spring_damping(mut self, enabled: bool) -> Self {
        self.dissipative_spring_damping = enabled;
        self
    }

    pub fn with_relaxation_iterations(mut self, iterations: usize) -> Self {
        self.relaxation_iterations = iterations;
        self
    }

    pub fn with_bounds(mut self, bounds: Bounds<F>) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_gravity(mut self, gravity: Vec2<F>) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_wall_restitution(mut self, restitution: F) -> Self {
        self.wall_restitution = restitution;
        self
    }

    pub fn with_restore_gain(mut self, gain: F) -> Self {
        self.restore_gain = gain;
        self
    }

    pub fn with_correction_factor(mut self, c: F) -> Self {
        self.correction_factor = c;
        self
    }

    pub fn with_collision_damping(mut self, damping: F) -> Self {
        self.collision_damping = damping;
        self
    }

    pub fn with_friction(mut self, friction: F) -> Self {
        self.friction = friction;
        self
    }

    pub fn with_drag_threshold(mut self, threshold: F) -> Self {
        self.drag_threshold = threshold;
        self
    }

    pub fn with_drag_gain(mut self, gain: F) -> Self {
        self.drag_gain = gain;
        self
    }

    /// Stretch spring rest lengths by `scale` while a body drag is active.
    pub fn with_drag_rest_length_scale(mut self, scale: F) -> Self {
        self.drag_rest_length_scale = scale;
        self
    }

    pub fn with_restore_rest_length_on_release(mut self, restore: bool) -> Self {
        self.restore_rest_length_on_release = restore;
        self
    }

    pub fn with_particle_grab(mut self, enabled: bool) -> Self {
        self.particle_grab = enabled;
        self
    }

    /// Check every parameter. Called by `SoftBody::new`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_resolution < 2 {
            return Err(ConfigError::InvalidGridResolution { n: self.grid_resolution });
        }
        if !(self.particle_mass > F::zero()) || !self.particle_mass.is_finite() {
            return Err(ConfigError::InvalidMass);
        }
        if !(self.width > F::zero() && self.height > F::zero())
            || !self.width.is_finite()
            || !self.height.is_finite()
        {
            return Err(ConfigError::InvalidDimensions);
        }
        if !(self.bounds.width > F::zero() && self.bounds.height > F::zero()) {
            return Err(ConfigError::InvalidBounds);
        }
        if !(self.damping > F::zero() && self.damping <= F::one()) {
            return Err(ConfigError::InvalidDamping);
        }
        if !(self.correction_factor > F::zero() && self.correction_factor < F::one()) {
            return Err(ConfigError::InvalidCorrectionFactor);
        }
        if self.relaxation_iterations == 0 {
            return Err(ConfigError::InvalidIterations);
        }
        let non_negative = [
            ("particle_radius", self.particle_radius),
            ("stiffness", self.stiffness),
            ("spring_damping", self.spring_damping),
            ("wall_restitution", self.wall_restitution),
            ("restore_gain", self.restore_gain),
            ("collision_damping", self.collision_damping),
            ("friction", self.friction),
            ("drag_threshold", self.drag_threshold),
            ("drag_gain", self.drag_gain),
            ("drag_rest_length_scale", self.drag_rest_length_scale),
        ];
        for (name, value) in non_negative {
            if !(value >= F::zero()) || !value.is_finite() {
                return Err(ConfigError::NegativeParameter { name });
            }
        }
        // The radius inset must leave room inside the walls.
        let span = self.particle_radius + self.particle_radius;
        if self.bounds.width < span || self.bounds.height < span {
            return Err(ConfigError::InvalidBounds);
        }
        Ok(())
    }
}

impl<F: Float> Default for BodyConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
