use wasm_bindgen::prelude::*;
use wobble::{
    BodyConfig, NoOpStepObserver, PointerState, Polygon, SoftBody, Vec2,
};

fn flatten(points: &[Vec2<f32>]) -> Vec<f32> {
    let mut out = Vec::with_capacity(points.len() * 2);
    for p in points {
        out.push(p.x);
        out.push(p.y);
    }
    out
}

// ---- Soft Body Demo ----

/// One jelly square in an 800×600 box with draggable obstacles.
#[wasm_bindgen]
pub struct SoftBodyDemo {
    body: SoftBody<f32>,
    obstacles: Vec<Polygon<f32>>,
    pointer: PointerState<f32>,
}

#[wasm_bindgen]
impl SoftBodyDemo {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<SoftBodyDemo, JsError> {
        let config = BodyConfig::new().with_gravity(Vec2::new(0.0, 30.0));
        Ok(SoftBodyDemo {
            body: SoftBody::new(config)?,
            obstacles: Vec::new(),
            pointer: PointerState::none(),
        })
    }

    pub fn add_square(&mut self, x: f32, y: f32, half_extent: f32) -> usize {
        self.obstacles.push(Polygon::square(Vec2::new(x, y), half_extent));
        self.obstacles.len() - 1
    }

    pub fn add_triangle(&mut self, x: f32, y: f32, half_extent: f32) -> usize {
        self.obstacles.push(Polygon::triangle(Vec2::new(x, y), half_extent));
        self.obstacles.len() - 1
    }

    /// Move obstacle `index` so its centroid sits at (x, y).
    pub fn move_obstacle(&mut self, index: usize, x: f32, y: f32) {
        if let Some(obstacle) = self.obstacles.get_mut(index) {
            let delta = Vec2::new(x, y) - obstacle.centroid();
            obstacle.translate(delta);
        }
    }

    pub fn set_pointer(&mut self, x: f32, y: f32, pressed: bool) {
        self.pointer = PointerState { position: Some(Vec2::new(x, y)), pressed };
    }

    /// Pointer left the canvas.
    pub fn clear_pointer(&mut self) {
        self.pointer = PointerState::none();
    }

    pub fn set_mass(&mut self, mass: f32) -> Result<(), JsError> {
        self.body.set_particle_mass(mass)?;
        Ok(())
    }

    pub fn update(&mut self, dt: f32) {
        self.body.step(dt, &self.pointer, &self.obstacles, &mut NoOpStepObserver);
    }

    /// Returns flat [x0, y0, x1, y1, ...] particle positions
    pub fn positions(&self) -> Vec<f32> {
        flatten(&self.body.positions())
    }

    /// Returns flat [ax, ay, bx, by, ...] spring endpoints
    pub fn segments(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.body.spring_count() * 4);
        for (a, b) in self.body.spring_segments() {
            out.extend_from_slice(&[a.x, a.y, b.x, b.y]);
        }
        out
    }

    pub fn centroid(&self) -> Vec<f32> {
        let c = self.body.centroid();
        vec![c.x, c.y]
    }

    pub fn particle_radius(&self) -> f32 {
        self.body.config().particle_radius
    }

    pub fn is_dragging(&self) -> bool {
        self.body.is_dragging()
    }

    pub fn obstacle_count(&self) -> usize {
        self.obstacles.len()
    }

    /// Returns flat vertices of obstacle `index`, empty if out of range
    pub fn obstacle_vertices(&self, index: usize) -> Vec<f32> {
        self.obstacles
            .get(index)
            .map(|o| flatten(o.vertices()))
            .unwrap_or_default()
    }
}
