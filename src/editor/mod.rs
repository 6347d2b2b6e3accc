use super::*;

//
// Modules
//

mod command;
mod console;

pub use command::{Command, ResetTarget, HELP};
pub use console::{run, session, Args};

//
// Snapshot
//

/// Immutable view of the editor state, published after every mutation.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Snapshot {
    pub vertices: [Point3; 3],
    pub point: Point3,
    pub coordinates: Barycentrics,
    pub interior_constraint: bool,
    pub balancing_mode: BalancingMode,
}

impl std::fmt::Display for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (component, vertex) in Component::ALL.into_iter().zip(&self.vertices) {
            let name = component.vertex_name();
            writeln!(f, "{name}: ({:.3}, {:.3}, {:.3})", vertex.x, vertex.y, vertex.z)?;
        }
        let point = &self.point;
        writeln!(f, "P: ({:.3}, {:.3}, {:.3})", point.x, point.y, point.z)?;
        writeln!(f, "{}", self.coordinates)?;
        write!(
            f,
            "Within triangle: {}, Balancing: {}",
            self.interior_constraint, self.balancing_mode
        )
    }
}

//
// Editor
//

/// Owns the canonical scene state. Every operation runs to completion and
/// leaves the point and its coordinates in agreement before publishing.
pub struct Editor {
    settings: cfg::Settings,
    vertices: [Point3; 3],
    point: Point3,
    coordinates: Barycentrics,
    interior_constraint: bool,
    balancing_mode: BalancingMode,
    camera_position: Point3,
    subscribers: Vec<mpsc::Sender<Snapshot>>,
}

impl Editor {
    pub fn new(settings: cfg::Settings) -> Self {
        let vertices = settings.vertices();
        let coordinates = settings.coordinates;
        let point = Triangle::from(vertices).point_from_barycentric(&coordinates);
        Self {
            vertices,
            point,
            coordinates,
            interior_constraint: settings.interior_constraint,
            balancing_mode: settings.balancing_mode,
            camera_position: settings.camera_position(),
            subscribers: Vec::new(),
            settings,
        }
    }

    pub fn triangle(&self) -> Triangle {
        Triangle::from(self.vertices)
    }

    pub fn vertices(&self) -> &[Point3; 3] {
        &self.vertices
    }

    pub fn point(&self) -> Point3 {
        self.point
    }

    pub fn coordinates(&self) -> Barycentrics {
        self.coordinates
    }

    pub fn interior_constraint(&self) -> bool {
        self.interior_constraint
    }

    pub fn balancing_mode(&self) -> BalancingMode {
        self.balancing_mode
    }

    pub fn camera_position(&self) -> Point3 {
        self.camera_position
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            vertices: self.vertices,
            point: self.point,
            coordinates: self.coordinates,
            interior_constraint: self.interior_constraint,
            balancing_mode: self.balancing_mode,
        }
    }

    /// The receiver gets the current state immediately, then one snapshot per
    /// mutation. Receivers only observe, they never feed edits back.
    pub fn subscribe(&mut self) -> mpsc::Receiver<Snapshot> {
        let (sender, receiver) = mpsc::channel();
        if sender.send(self.snapshot()).is_ok() {
            self.subscribers.push(sender);
        }
        receiver
    }

    fn publish(&mut self) {
        let snapshot = self.snapshot();
        self.subscribers
            .retain(|subscriber| subscriber.send(snapshot).is_ok());
    }

    //
    // Vertices
    //

    pub fn move_vertex(&mut self, vertex: Component, position: Point3) {
        self.vertices[vertex.index()] = position;
        self.update_point_position();
        self.publish();
    }

    pub fn edit_vertex_component(&mut self, vertex: Component, axis: Axis, value: f64) {
        let mut position = self.vertices[vertex.index()];
        position[axis.index()] = value;
        self.move_vertex(vertex, position);
    }

    //
    // Point
    //

    /// Follows the camera ray through `position` onto the triangle's plane.
    /// Returns false when the triangle is degenerate and nothing changed.
    pub fn drag_point(&mut self, position: Point3) -> bool {
        let triangle = self.triangle();
        let Some(plane) = triangle.plane() else {
            warn!("Degenerate triangle, ignoring point drag");
            return false;
        };
        let camera_to_point = position - self.camera_position;
        let projected = plane.project_constrained(&position, &self.camera_position, &camera_to_point);
        self.commit_point(&triangle, projected)
    }

    /// Sets one world coordinate of the point, then slides it back onto the
    /// plane without touching the edited coordinate where possible.
    pub fn edit_point_component(&mut self, axis: Axis, value: f64) -> bool {
        let triangle = self.triangle();
        let Some(normal) = triangle.normal() else {
            warn!("Degenerate triangle, ignoring {axis} edit of the point");
            return false;
        };
        let normal = normal.into_inner();
        let plane = Plane::new(triangle.midpoint(), normal);

        let mut position = self.point;
        position[axis.index()] = value;

        // Normal with the edited axis removed, or the normal itself when the
        // plane is orthogonal to that axis.
        let mut direction = normal;
        direction[axis.index()] = 0.0;
        if direction.norm() < EPSILON {
            direction = normal;
        }

        let projected = plane.project_constrained(&position, &position, &direction);
        self.commit_point(&triangle, projected)
    }

    fn commit_point(&mut self, triangle: &Triangle, position: Point3) -> bool {
        let position = if self.interior_constraint {
            clamp_to_triangle(triangle, &position)
        } else {
            position
        };
        let Some(coordinates) = triangle.barycentric(&position) else {
            warn!("Degenerate triangle, ignoring point update");
            return false;
        };
        self.point = position;
        self.coordinates = coordinates;
        self.publish();
        true
    }

    fn update_point_position(&mut self) {
        self.point = self.triangle().point_from_barycentric(&self.coordinates);
    }

    /// Clamps the point into the triangle. The coordinates are re-derived only
    /// when the point moved, so an unnormalized triple that already lands
    /// inside is kept.
    fn contain_point(&mut self) {
        let triangle = self.triangle();
        let clamped = clamp_to_triangle(&triangle, &self.point);
        if na::distance(&clamped, &self.point) <= EPSILON {
            return;
        }
        if let Some(coordinates) = triangle.barycentric(&clamped) {
            self.point = clamped;
            self.coordinates = coordinates;
        } else {
            warn!("Degenerate triangle, point left in place");
        }
    }

    //
    // Coordinates
    //

    pub fn edit_coordinate(&mut self, component: Component, value: f64) {
        self.coordinates = rebalance(
            component,
            value,
            self.coordinates,
            self.balancing_mode,
            self.interior_constraint,
        );
        self.update_point_position();
        if self.interior_constraint {
            self.contain_point();
        }
        self.publish();
    }

    /// Switching the constraint on pulls an outside point back immediately.
    pub fn set_interior_constraint(&mut self, enabled: bool) {
        self.interior_constraint = enabled;
        if enabled {
            self.contain_point();
        }
        debug!("Within triangle: {enabled}");
        self.publish();
    }

    pub fn toggle_interior_constraint(&mut self) {
        self.set_interior_constraint(!self.interior_constraint);
    }

    pub fn set_balancing_mode(&mut self, mode: BalancingMode) {
        self.balancing_mode = mode;
        debug!("Balancing mode: {mode}");
        self.publish();
    }

    pub fn set_camera_position(&mut self, position: Point3) {
        self.camera_position = position;
    }

    //
    // Resets
    //

    pub fn reset_point(&mut self) {
        self.coordinates = self.settings.coordinates;
        self.update_point_position();
        self.publish();
    }

    pub fn reset_triangle(&mut self) {
        self.vertices = self.settings.vertices();
        self.update_point_position();
        self.publish();
    }

    pub fn reset_camera(&mut self) {
        self.camera_position = self.settings.camera_position();
    }

    pub fn reset_all(&mut self) {
        self.camera_position = self.settings.camera_position();
        self.coordinates = self.settings.coordinates;
        self.vertices = self.settings.vertices();
        self.update_point_position();
        self.publish();
    }

    //
    // Commands
    //

    /// Returns false when the command was ignored.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Vertex(vertex, position) => self.move_vertex(vertex, position),
            Command::VertexAxis(vertex, axis, value) => {
                self.edit_vertex_component(vertex, axis, value);
            }
            Command::Drag(position) => return self.drag_point(position),
            Command::PointAxis(axis, value) => return self.edit_point_component(axis, value),
            Command::Coordinate(component, value) => self.edit_coordinate(component, value),
            Command::Inside(enabled) => self.set_interior_constraint(enabled),
            Command::ToggleInside => self.toggle_interior_constraint(),
            Command::Mode(mode) => self.set_balancing_mode(mode),
            Command::Camera(position) => self.set_camera_position(position),
            Command::Reset(ResetTarget::All) => self.reset_all(),
            Command::Reset(ResetTarget::Point) => self.reset_point(),
            Command::Reset(ResetTarget::Triangle) => self.reset_triangle(),
            Command::Reset(ResetTarget::Camera) => self.reset_camera(),
            Command::Show | Command::Help | Command::Quit => {}
        }
        true
    }
}

//
// Tests
//
