//! 2D mass-spring soft bodies for interactive toys and games.
//!
//! `wobble` simulates a square mesh of point masses joined by spring-dampers.
//! The mesh falls under gravity, bounces off screen walls, remembers its rest
//! shape, can be dragged with a pointer, and collides with polygon
//! obstacles. One `SoftBody::step` per frame; everything is deterministic
//! and single-threaded.
//!
//! # Features
//!
//! - **Spring relaxation**: Hookean + axial damping, applied R times per step
//! - **Shape memory**: particles are pulled toward their rest offset from the centroid
//! - **Dragging**: centroid or single-particle pins driven by pointer state
//! - **Obstacles**: spring-segment vs. polygon-edge penalty contact
//! - **Observable**: monitor each pipeline stage via the `StepObserver` trait
//! - **`no_std` compatible**: needs only `alloc`
//!
//! ```
//! use wobble::{BodyConfig, NoOpStepObserver, PointerState, Polygon, SoftBody, Vec2};
//!
//! let mut body = SoftBody::new(BodyConfig::<f64>::new()).unwrap();
//! let obstacles = [Polygon::square(Vec2::new(400.0, 500.0), 20.0)];
//! for _ in 0..60 {
//!     body.step(1.0 / 60.0, &PointerState::none(), &obstacles, &mut NoOpStepObserver);
//! }
//! assert!(body.centroid().y > 300.0);
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod particle;
pub mod spring;
pub mod constraint;
pub mod grid;
pub mod polygon;
pub mod collision;
pub mod shape_memory;
pub mod drag;
pub mod softbody;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use particle::Particle;
pub use spring::Spring;
pub use constraint::{PinConstraint, PinTarget};
pub use grid::GridTopology;
pub use polygon::Polygon;
pub use collision::{CollisionResolver, CollisionResponse, CollisionStats};
pub use shape_memory::ShapeMemory;
pub use drag::{DragController, DragMode, PointerState};
pub use softbody::{SoftBody, StepReport};
pub use config::{BodyConfig, Bounds};
pub use observer::{StepObserver, NoOpStepObserver};
pub use error::{ConfigError, DegenerateGeometry, PhysicsError, Result};
