//! Physics world and fixed-step simulation

use std::num::NonZeroUsize;

use glam::Vec2;
use rapier2d::prelude::*;

use crate::body::{BodyDesc, BodyHandle, BodyKind};
use crate::debug_draw::{DebugDrawSink, DrawTransform, HexColor};
use crate::error::PhysicsError;
use crate::events::{ContactCollector, ContactEvent, ContactKind, ContactShape, RestitutionThreshold};
use crate::shapes::ShapeTag;
use crate::{from_na, to_na};

/// Configuration for the fixed-step simulation
#[derive(Clone, Debug, PartialEq)]
pub struct WorldConfig {
    /// Seconds advanced by every call to [`PhysicsWorld::step`]
    pub timestep: f32,
    /// Solver iterations per step
    pub substeps: usize,
    /// Approach speed (sim units/s) below which contacts do not bounce
    pub restitution_threshold: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            timestep: 0.016,
            substeps: 5,
            restitution_threshold: 0.1,
        }
    }
}

impl WorldConfig {
    pub fn new(timestep: f32, substeps: usize, restitution_threshold: f32) -> Self {
        Self {
            timestep,
            substeps,
            restitution_threshold,
        }
    }

    fn integration_parameters(&self) -> IntegrationParameters {
        IntegrationParameters {
            dt: self.timestep,
            num_solver_iterations: NonZeroUsize::new(self.substeps).unwrap_or(NonZeroUsize::MIN),
            ..IntegrationParameters::default()
        }
    }
}

/// The physics world: every body, shape and the contact machinery
///
/// Gravity is always zero. Dropping the world releases all bodies and shapes.
pub struct PhysicsWorld {
    gravity: Vector<Real>,
    integration_parameters: IntegrationParameters,
    pipeline: PhysicsPipeline,
    island_manager: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
    query_pipeline: QueryPipeline,
    hooks: RestitutionThreshold,
    collector: ContactCollector,
    /// Events from the most recent step
    contact_events: Vec<ContactEvent>,
    steps: u64,
    config: WorldConfig,
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl PhysicsWorld {
    /// Create a new physics world with default configuration
    pub fn new() -> Self {
        Self::with_config(WorldConfig::default())
    }

    /// Create a new physics world with custom configuration
    pub fn with_config(config: WorldConfig) -> Self {
        Self {
            gravity: Vector::zeros(),
            integration_parameters: config.integration_parameters(),
            pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            query_pipeline: QueryPipeline::new(),
            hooks: RestitutionThreshold {
                min_approach_speed: config.restitution_threshold,
            },
            collector: ContactCollector::new(),
            contact_events: Vec::new(),
            steps: 0,
            config,
        }
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Add a body with its single shape and return both handles
    pub fn add_body(&mut self, desc: &BodyDesc) -> Result<BodyHandle, PhysicsError> {
        desc.validate()?;

        let body = desc.rigid_body_builder().build();
        let body_handle = self.bodies.insert(body);

        let mut collider = desc.material.apply(desc.shape.builder());
        if let Some(tag) = desc.tag {
            collider = collider.user_data(tag.to_user_data());
        }
        if desc.contact_events {
            collider = collider.active_events(ActiveEvents::COLLISION_EVENTS);
        }
        if desc.material.restitution > 0.0 {
            collider = collider.active_hooks(ActiveHooks::MODIFY_SOLVER_CONTACTS);
        }

        let collider_handle =
            self.colliders
                .insert_with_parent(collider.build(), body_handle, &mut self.bodies);

        log::debug!(
            "Added {:?} body {:?} tagged {:?} at ({:.3}, {:.3})",
            desc.kind,
            body_handle,
            desc.tag,
            desc.position.x,
            desc.position.y
        );

        Ok(BodyHandle {
            body: body_handle,
            collider: collider_handle,
        })
    }

    /// Get the number of bodies in the world
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Get the number of shapes in the world
    pub fn shape_count(&self) -> usize {
        self.colliders.len()
    }

    /// Number of bodies of the given kind
    pub fn count_bodies(&self, kind: BodyKind) -> usize {
        self.bodies
            .iter()
            .filter(|(_, body)| BodyKind::from_rapier(body.body_type()) == kind)
            .count()
    }

    /// Steps taken since the world was created
    pub fn steps_taken(&self) -> u64 {
        self.steps
    }

    pub fn body_kind(&self, handle: BodyHandle) -> Option<BodyKind> {
        self.bodies
            .get(handle.body)
            .map(|body| BodyKind::from_rapier(body.body_type()))
    }

    /// Body position in simulation units
    pub fn translation(&self, handle: BodyHandle) -> Option<Vec2> {
        self.bodies.get(handle.body).map(|body| from_na(body.translation()))
    }

    /// Body rotation in radians
    pub fn rotation(&self, handle: BodyHandle) -> Option<f32> {
        self.bodies.get(handle.body).map(|body| body.rotation().angle())
    }

    pub fn linear_velocity(&self, handle: BodyHandle) -> Option<Vec2> {
        self.bodies.get(handle.body).map(|body| from_na(body.linvel()))
    }

    pub fn is_rotation_fixed(&self, handle: BodyHandle) -> bool {
        self.bodies
            .get(handle.body)
            .map(|body| body.locked_axes().contains(LockedAxes::ROTATION_LOCKED_Z))
            .unwrap_or(false)
    }

    /// Teleport a body; returns false if the handle is stale
    pub fn set_transform(&mut self, handle: BodyHandle, position: Vec2, rotation: f32) -> bool {
        match self.bodies.get_mut(handle.body) {
            Some(body) => {
                body.set_position(Isometry::new(to_na(position), rotation), true);
                true
            }
            None => false,
        }
    }

    pub fn set_linear_velocity(&mut self, handle: BodyHandle, velocity: Vec2) -> bool {
        match self.bodies.get_mut(handle.body) {
            Some(body) => {
                body.set_linvel(to_na(velocity), true);
                true
            }
            None => false,
        }
    }

    pub fn shape_tag(&self, collider: ColliderHandle) -> Option<ShapeTag> {
        self.colliders
            .get(collider)
            .and_then(|c| ShapeTag::from_user_data(c.user_data))
    }

    pub fn contact_events_enabled(&self, collider: ColliderHandle) -> bool {
        self.colliders
            .get(collider)
            .map(|c| c.active_events().contains(ActiveEvents::COLLISION_EVENTS))
            .unwrap_or(false)
    }

    /// Advance the simulation by exactly one configured timestep
    ///
    /// Events from the previous step are discarded; the events raised by this
    /// step are available from [`Self::contact_events`] until the next call.
    pub fn step(&mut self) {
        self.pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            Some(&mut self.query_pipeline),
            &self.hooks,
            &self.collector,
        );
        self.steps += 1;

        self.contact_events.clear();
        for event in self.collector.drain() {
            let kind = if event.started() {
                ContactKind::Begin
            } else {
                ContactKind::End
            };
            let a = self.contact_shape(event.collider1());
            let b = self.contact_shape(event.collider2());
            self.contact_events.push(ContactEvent { kind, a, b });
        }

        log::trace!(
            "Step {} produced {} contact events",
            self.steps,
            self.contact_events.len()
        );
    }

    fn contact_shape(&self, collider: ColliderHandle) -> ContactShape {
        ContactShape {
            collider,
            tag: self.shape_tag(collider),
        }
    }

    /// All contact events raised by the most recent step
    pub fn contact_events(&self) -> &[ContactEvent] {
        &self.contact_events
    }

    /// Pairs that started touching during the most recent step
    pub fn contact_begin_events(&self) -> impl Iterator<Item = &ContactEvent> + '_ {
        self.contact_events.iter().filter(|e| e.is_begin())
    }

    /// Hand every shape to the sink, in simulation units
    pub fn debug_draw(&self, sink: &mut dyn DebugDrawSink) {
        for (_handle, collider) in self.colliders.iter() {
            let color = collider
                .parent()
                .and_then(|parent| self.bodies.get(parent))
                .map(|body| HexColor::for_body(BodyKind::from_rapier(body.body_type()), body.is_sleeping()))
                .unwrap_or(HexColor::PALE_GREEN);

            let position = collider.position();
            let transform = DrawTransform::new(
                from_na(&position.translation.vector),
                position.rotation.angle(),
            );

            if let Some(cuboid) = collider.shape().as_cuboid() {
                let hx = cuboid.half_extents.x;
                let hy = cuboid.half_extents.y;
                let vertices = [
                    Vec2::new(-hx, -hy),
                    Vec2::new(hx, -hy),
                    Vec2::new(hx, hy),
                    Vec2::new(-hx, hy),
                ];
                sink.draw_polygon(transform, &vertices, 0.0, color);
            } else if let Some(ball) = collider.shape().as_ball() {
                sink.draw_circle(transform, ball.radius, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::PhysicsMaterial;
    use crate::shapes::ShapeDesc;

    #[derive(Default)]
    struct RecordingSink {
        polygons: Vec<(DrawTransform, Vec<Vec2>, HexColor)>,
        circles: Vec<(DrawTransform, f32, HexColor)>,
    }

    impl DebugDrawSink for RecordingSink {
        fn draw_polygon(&mut self, transform: DrawTransform, vertices: &[Vec2], _radius: f32, color: HexColor) {
            self.polygons.push((transform, vertices.to_vec(), color));
        }

        fn draw_circle(&mut self, transform: DrawTransform, radius: f32, color: HexColor) {
            self.circles.push((transform, radius, color));
        }
    }

    fn ball_desc(position: Vec2, velocity: Vec2) -> BodyDesc {
        BodyDesc::dynamic(ShapeDesc::circle(0.2))
            .with_position(position)
            .with_velocity(velocity)
            .with_fixed_rotation(true)
            .with_material(PhysicsMaterial::ELASTIC)
            .with_tag(ShapeTag::Ball)
            .with_contact_events(true)
    }

    #[test]
    fn test_default_config() {
        let config = WorldConfig::default();
        assert_eq!(config.timestep, 0.016);
        assert_eq!(config.substeps, 5);
        assert_eq!(config.restitution_threshold, 0.1);
    }

    #[test]
    fn test_zero_substeps_falls_back_to_one() {
        let params = WorldConfig::new(0.016, 0, 0.1).integration_parameters();
        assert_eq!(params.num_solver_iterations.get(), 1);
        assert_eq!(params.dt, 0.016);
    }

    #[test]
    fn test_add_body_and_counts() {
        let mut world = PhysicsWorld::new();
        world
            .add_body(&BodyDesc::fixed(ShapeDesc::cuboid(1.0, 1.0)).with_tag(ShapeTag::Wall))
            .unwrap();
        let ball = world.add_body(&ball_desc(Vec2::new(0.0, 5.0), Vec2::ZERO)).unwrap();

        assert_eq!(world.body_count(), 2);
        assert_eq!(world.shape_count(), 2);
        assert_eq!(world.count_bodies(BodyKind::Static), 1);
        assert_eq!(world.count_bodies(BodyKind::Dynamic), 1);
        assert_eq!(world.count_bodies(BodyKind::Kinematic), 0);
        assert_eq!(world.body_kind(ball), Some(BodyKind::Dynamic));
        assert_eq!(world.shape_tag(ball.collider), Some(ShapeTag::Ball));
        assert!(world.contact_events_enabled(ball.collider));
        assert!(world.is_rotation_fixed(ball));
    }

    #[test]
    fn test_add_body_rejects_invalid_shape() {
        let mut world = PhysicsWorld::new();
        let result = world.add_body(&BodyDesc::fixed(ShapeDesc::circle(0.0)));
        assert!(matches!(result, Err(PhysicsError::InvalidShape(_))));
        assert_eq!(world.body_count(), 0);
    }

    #[test]
    fn test_zero_gravity_keeps_velocity() {
        let mut world = PhysicsWorld::new();
        let ball = world
            .add_body(&ball_desc(Vec2::ZERO, Vec2::new(1.0, -2.0)))
            .unwrap();

        for _ in 0..10 {
            world.step();
        }

        let velocity = world.linear_velocity(ball).unwrap();
        assert!((velocity - Vec2::new(1.0, -2.0)).length() < 1e-4);
        let position = world.translation(ball).unwrap();
        assert!((position - Vec2::new(0.16, -0.32)).length() < 1e-3);
        assert_eq!(world.steps_taken(), 10);
    }

    #[test]
    fn test_set_transform_teleports() {
        let mut world = PhysicsWorld::new();
        let paddle = world
            .add_body(&BodyDesc::kinematic(ShapeDesc::cuboid(1.0, 0.2)).with_rotation(0.3))
            .unwrap();

        assert!(world.set_transform(paddle, Vec2::new(3.0, 4.0), 0.0));
        assert_eq!(world.translation(paddle), Some(Vec2::new(3.0, 4.0)));
        assert_eq!(world.rotation(paddle), Some(0.0));
    }

    #[test]
    fn test_begin_event_on_contact() {
        let mut world = PhysicsWorld::new();
        world
            .add_body(
                &BodyDesc::fixed(ShapeDesc::cuboid(2.0, 0.2))
                    .with_position(Vec2::new(0.0, 1.0))
                    .with_material(PhysicsMaterial::FRICTIONLESS)
                    .with_tag(ShapeTag::Wall),
            )
            .unwrap();
        world
            .add_body(&ball_desc(Vec2::ZERO, Vec2::new(0.0, 3.0)))
            .unwrap();

        let mut begins = 0;
        for _ in 0..30 {
            world.step();
            begins += world
                .contact_begin_events()
                .filter(|e| e.involves(ShapeTag::Ball, ShapeTag::Wall))
                .count();
        }
        assert_eq!(begins, 1);
    }

    #[test]
    fn test_debug_draw_visits_every_shape() {
        let mut world = PhysicsWorld::new();
        world
            .add_body(
                &BodyDesc::fixed(ShapeDesc::cuboid(2.0, 0.5))
                    .with_position(Vec2::new(1.0, 1.0)),
            )
            .unwrap();
        world
            .add_body(&ball_desc(Vec2::new(-1.0, 0.0), Vec2::ZERO))
            .unwrap();

        let mut sink = RecordingSink::default();
        world.debug_draw(&mut sink);

        assert_eq!(sink.polygons.len(), 1);
        assert_eq!(sink.circles.len(), 1);

        let (transform, vertices, color) = &sink.polygons[0];
        assert_eq!(transform.translation, Vec2::new(1.0, 1.0));
        assert_eq!(vertices.len(), 4);
        assert!(vertices.contains(&Vec2::new(2.0, 0.5)));
        assert_eq!(*color, HexColor::PALE_GREEN);

        let (transform, radius, color) = &sink.circles[0];
        assert_eq!(transform.translation, Vec2::new(-1.0, 0.0));
        assert_eq!(*radius, 0.2);
        assert_eq!(*color, HexColor::PINK);
    }
}
