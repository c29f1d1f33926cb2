//! Pointer dragging: turns sampled pointer state into pin constraints.

use crate::config::BodyConfig;
use crate::constraint::PinConstraint;
use crate::float::Float;
use crate::particle::Particle;
use crate::spring::Spring;
use crate::vec::Vec2;

/// Pointer state sampled once per tick by the caller.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PointerState<F: Float> {
    /// Pointer location, `None` when it is outside the view.
    pub position: Option<Vec2<F>>,
    /// Whether the button is held this tick. Press and release are detected
    /// as changes from the previous tick.
    pub pressed: bool,
}

impl<F: Float> PointerState<F> {
    /// No pointer at all.
    pub fn none() -> Self {
        PointerState { position: None, pressed: false }
    }

    pub fn hover(position: Vec2<F>) -> Self {
        PointerState { position: Some(position), pressed: false }
    }

    pub fn held(position: Vec2<F>) -> Self {
        PointerState { position: Some(position), pressed: true }
    }
}

/// What is currently being dragged.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DragMode<F: Float> {
    Idle,
    /// Whole body, grabbed `offset` away from its centroid.
    Body { offset: Vec2<F> },
    /// One particle, held directly under the pointer.
    Particle { index: usize },
}

/// Tracks press/release transitions and the active drag.
#[derive(Clone, Debug)]
pub struct DragController<F: Float> {
    threshold: F,
    pull_gain: F,
    rest_length_scale: F,
    restore_on_release: bool,
    particle_grab: bool,
    mode: DragMode<F>,
    was_pressed: bool,
}

impl<F: Float> DragController<F> {
    pub fn new(config: &BodyConfig<F>) -> Self {
        DragController {
            threshold: config.drag_threshold,
            pull_gain: config.drag_gain,
            rest_length_scale: config.drag_rest_length_scale,
            restore_on_release: config.restore_rest_length_on_release,
            particle_grab: config.particle_grab,
            mode: DragMode::Idle,
            was_pressed: false,
        }
    }

    pub fn mode(&self) -> DragMode<F> {
        self.mode
    }

    pub fn is_dragging(&self) -> bool {
        self.mode != DragMode::Idle
    }

    /// Feed this tick's pointer and get the pin to apply, if any.
    ///
    /// A body drag with no pointer position this tick holds still.
    pub fn update(
        &mut self,
        pointer: &PointerState<F>,
        particles: &[Particle<F>],
        springs: &mut [Spring<F>],
    ) -> Option<PinConstraint<F>> {
        match (self.was_pressed, pointer.pressed) {
            (false, true) => {
                if let Some(pos) = pointer.position {
                    self.press(pos, particles, springs);
                }
            }
            (true, false) => self.release(springs),
            _ => {}
        }
        self.was_pressed = pointer.pressed;

        let pos = pointer.position?;
        match self.mode {
            DragMode::Idle => None,
            DragMode::Body { offset } => Some(PinConstraint::centroid(pos - offset, self.pull_gain)),
            DragMode::Particle { index } => Some(PinConstraint::particle(index, pos)),
        }
    }

    /// Start a drag at `pos` if it lands near the centroid (body drag) or,
    /// failing that, on a particle.
    pub fn press(&mut self, pos: Vec2<F>, particles: &[Particle<F>], springs: &mut [Spring<F>]) {
        let centroid = Vec2::mean(particles.iter().map(|p| p.pos));
        if pos.distance(centroid) < self.threshold {
            self.mode = DragMode::Body { offset: pos - centroid };
            if self.rest_length_scale != F::one() {
                for s in springs.iter_mut() {
                    s.stretch(self.rest_length_scale);
                }
            }
            log::debug!("body drag started at ({}, {})", pos.x, pos.y);
            return;
        }

        if !self.particle_grab {
            return;
        }
        let nearest = particles
            .iter()
            .enumerate()
            .filter(|(_, p)| pos.distance(p.pos) < p.radius)
            .min_by(|(_, a), (_, b)| {
                pos.distance_sq(a.pos)
                    .partial_cmp(&pos.distance_sq(b.pos))
                    .unwrap_or(core::cmp::Ordering::Equal)
            });
        if let Some((index, _)) = nearest {
            self.mode = DragMode::Particle { index };
            log::debug!("particle {} grabbed", index);
        }
    }

    /// End any drag. Restores spring rest lengths when configured to.
    pub fn release(&mut self, springs: &mut [Spring<F>]) {
        if let DragMode::Body { .. } = self.mode {
            if self.restore_on_release {
                for s in springs.iter_mut() {
                    s.restore_rest_length();
                }
            }
            log::debug!("body drag released");
        }
        self.mode = DragMode::Idle;
    }
}
