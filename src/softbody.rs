//! 2D grid soft body: springs, shape memory, drag, and obstacle contact.

use crate::collision::{CollisionResolver, CollisionResponse, CollisionStats};
use crate::config::BodyConfig;
use crate::drag::{DragController, DragMode, PointerState};
use crate::error::ConfigError;
use crate::float::Float;
use crate::grid::GridTopology;
use crate::observer::StepObserver;
use crate::particle::Particle;
use crate::polygon::Polygon;
use crate::shape_memory::ShapeMemory;
use crate::spring::Spring;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// What happened during one `SoftBody::step`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct StepReport<F: Float> {
    /// Particles reflected by the wall pre-check.
    pub walls_reflected: usize,
    /// Spring updates skipped because the spring had zero length.
    pub springs_skipped: usize,
    /// Translation applied by a drag pin, if one was active.
    pub drag_translation: Option<Vec2<F>>,
    pub collisions: CollisionStats,
}

/// A square mass-spring mesh with rest-shape memory.
///
/// Particles live in one contiguous array; springs link axis-adjacent grid
/// neighbors by index. Each `step` runs, in order:
///
/// 1. wall pre-check (velocity reflection),
/// 2. `relaxation_iterations` spring passes with no integration between,
/// 3. gravity and integration,
/// 4. drag pin,
/// 5. spring-vs-obstacle collision,
/// 6. shape-memory forces, which act at the next step's integration.
pub struct SoftBody<F: Float> {
    particles: AllocVec<Particle<F>>,
    springs: AllocVec<Spring<F>>,
    topology: GridTopology,
    memory: ShapeMemory<F>,
    drag: DragController<F>,
    resolver: CollisionResolver<F>,
    config: BodyConfig<F>,
}

impl<F: Float> SoftBody<F> {
    /// Build an `n × n` body filling the configured rectangle.
    pub fn new(config: BodyConfig<F>) -> Result<Self, ConfigError> {
        config.validate()?;

        let topology = GridTopology::new(config.grid_resolution);
        let particles: AllocVec<Particle<F>> = topology
            .positions(config.origin, config.width, config.height)
            .into_iter()
            .map(|pos| {
                Particle::new(pos, config.particle_mass, config.particle_radius)
                    .with_damping(config.damping)
            })
            .collect();

        let springs: AllocVec<Spring<F>> = topology
            .neighbor_pairs()
            .into_iter()
            .map(|(a, b)| {
                Spring::from_particles(a, b, &particles, config.stiffness)
                    .with_damping(config.spring_damping)
                    .with_dissipative_damping(config.dissipative_spring_damping)
            })
            .collect();

        let memory = ShapeMemory::capture(particles.iter().map(|p| p.pos));
        let resolver = CollisionResolver::new(
            config.bounds,
            config.wall_restitution,
            CollisionResponse::new(config.correction_factor, config.collision_damping, config.friction),
        );

        log::debug!(
            "soft body: {}x{} grid, {} springs, {} relaxation passes",
            topology.resolution(),
            topology.resolution(),
            springs.len(),
            config.relaxation_iterations,
        );

        Ok(SoftBody {
            particles,
            springs,
            topology,
            memory,
            drag: DragController::new(&config),
            resolver,
            config,
        })
    }

    /// Advance one tick.
    ///
    /// `pointer` and `obstacles` are read once; obstacles are not modified.
    pub fn step<O: StepObserver>(
        &mut self,
        dt: F,
        pointer: &PointerState<F>,
        obstacles: &[Polygon<F>],
        observer: &mut O,
    ) -> StepReport<F> {
        let mut report = StepReport::default();

        // 1. Wall pre-check
        report.walls_reflected = self.resolver.resolve_walls(&mut self.particles);
        observer.on_wall_check(report.walls_reflected);

        // 2. Spring relaxation
        for iter in 0..self.config.relaxation_iterations {
            for spring in self.springs.iter() {
                if let Err(kind) = spring.update(&mut self.particles) {
                    log::trace!("skipping spring force: {}", kind);
                    report.springs_skipped += 1;
                    observer.on_degenerate(kind);
                }
            }
            observer.on_relaxation_iteration(iter);
        }

        // 3. Gravity + integrate
        let gravity = self.config.gravity;
        let bounds = self.config.bounds;
        for p in self.particles.iter_mut() {
            p.apply_force(gravity.scale(p.mass));
            p.integrate(dt, &bounds);
        }
        observer.on_integrate();

        // 4. Drag
        if let Some(pin) = self.drag.update(pointer, &self.particles, &mut self.springs) {
            let translation = pin.solve(&mut self.particles);
            observer.on_drag((translation.x.to_f64(), translation.y.to_f64()));
            report.drag_translation = Some(translation);
        }

        // 5. Obstacles
        report.collisions =
            self.resolver
                .resolve_obstacles(&self.springs, &mut self.particles, obstacles, observer);

        // 6. Shape memory
        self.memory.apply(&mut self.particles, self.config.restore_gain);
        observer.on_shape_memory();

        observer.on_step_complete();
        report
    }

    /// Add a force to every particle for the next step.
    pub fn apply_force(&mut self, force: Vec2<F>) {
        for p in self.particles.iter_mut() {
            p.apply_force(force);
        }
    }

    /// Change every particle's mass.
    pub fn set_particle_mass(&mut self, mass: F) -> Result<(), ConfigError> {
        if !(mass > F::zero()) || !mass.is_finite() {
            return Err(ConfigError::InvalidMass);
        }
        self.config.particle_mass = mass;
        for p in self.particles.iter_mut() {
            p.mass = mass;
        }
        Ok(())
    }

    /// Mean particle position.
    pub fn centroid(&self) -> Vec2<F> {
        Vec2::mean(self.particles.iter().map(|p| p.pos))
    }

    pub fn positions(&self) -> AllocVec<Vec2<F>> {
        self.particles.iter().map(|p| p.pos).collect()
    }

    pub fn position_at(&self, col: usize, row: usize) -> Vec2<F> {
        self.particles[self.topology.index(col, row)].pos
    }

    /// Spring segments as endpoint pairs, for rendering.
    pub fn spring_segments(&self) -> impl Iterator<Item = (Vec2<F>, Vec2<F>)> + '_ {
        self.springs.iter().map(move |s| s.endpoints(&self.particles))
    }

    pub fn particles(&self) -> &[Particle<F>] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle<F>] {
        &mut self.particles
    }

    pub fn springs(&self) -> &[Spring<F>] {
        &self.springs
    }

    pub fn shape_memory(&self) -> &ShapeMemory<F> {
        &self.memory
    }

    pub fn topology(&self) -> GridTopology {
        self.topology
    }

    pub fn config(&self) -> &BodyConfig<F> {
        &self.config
    }

    pub fn drag_mode(&self) -> DragMode<F> {
        self.drag.mode()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn spring_count(&self) -> usize {
        self.springs.len()
    }
}
