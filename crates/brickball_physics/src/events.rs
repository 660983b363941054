//! Contact events and the collectors that feed them
//!
//! rapier reports collision events through an [`EventHandler`] during the
//! step. They are buffered here and handed out once the step returns.

use std::sync::Mutex;

use rapier2d::prelude::{
    ColliderHandle, ColliderSet, CollisionEvent, ContactModificationContext, ContactPair,
    EventHandler, PhysicsHooks, Real, RigidBodyHandle, RigidBodySet, Vector,
};

use crate::shapes::ShapeTag;

/// Whether a pair started or stopped touching
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactKind {
    Begin,
    End,
}

/// One side of a contact pair
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactShape {
    pub collider: ColliderHandle,
    pub tag: Option<ShapeTag>,
}

/// A pair of shapes that began or ended touching during the last step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactEvent {
    pub kind: ContactKind,
    pub a: ContactShape,
    pub b: ContactShape,
}

impl ContactEvent {
    pub fn is_begin(&self) -> bool {
        self.kind == ContactKind::Begin
    }

    /// True if the pair is exactly these two tags, in either order
    pub fn involves(&self, first: ShapeTag, second: ShapeTag) -> bool {
        (self.a.tag == Some(first) && self.b.tag == Some(second))
            || (self.a.tag == Some(second) && self.b.tag == Some(first))
    }

    /// The other shape's tag, if `tag` is one side of the pair
    pub fn other_tag(&self, tag: ShapeTag) -> Option<ShapeTag> {
        if self.a.tag == Some(tag) {
            self.b.tag
        } else if self.b.tag == Some(tag) {
            self.a.tag
        } else {
            None
        }
    }
}

/// Buffers collision events raised during a step
pub(crate) struct ContactCollector {
    collisions: Mutex<Vec<CollisionEvent>>,
}

impl ContactCollector {
    pub(crate) fn new() -> Self {
        Self {
            collisions: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn drain(&self) -> Vec<CollisionEvent> {
        match self.collisions.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl EventHandler for ContactCollector {
    fn handle_collision_event(
        &self,
        _bodies: &RigidBodySet,
        _colliders: &ColliderSet,
        event: CollisionEvent,
        _contact_pair: Option<&ContactPair>,
    ) {
        match self.collisions.lock() {
            Ok(mut events) => events.push(event),
            Err(poisoned) => poisoned.into_inner().push(event),
        }
    }

    fn handle_contact_force_event(
        &self,
        _dt: Real,
        _bodies: &RigidBodySet,
        _colliders: &ColliderSet,
        _contact_pair: &ContactPair,
        _total_force_magnitude: Real,
    ) {
    }
}

/// Suppresses bounces on contacts slower than a threshold
///
/// Slow resting contacts would otherwise jitter when restitution re-injects
/// their tiny approach speed every step. Bouncing contacts that are still
/// separated by a gap are treated as touching, so the remaining distance is
/// not subtracted from the rebound velocity.
pub(crate) struct RestitutionThreshold {
    pub(crate) min_approach_speed: Real,
}

impl PhysicsHooks for RestitutionThreshold {
    fn modify_solver_contacts(&self, context: &mut ContactModificationContext) {
        let velocity = |handle: Option<RigidBodyHandle>| {
            handle
                .and_then(|h| context.bodies.get(h))
                .map(|body| *body.linvel())
                .unwrap_or_else(Vector::<Real>::zeros)
        };
        let relative = velocity(context.rigid_body2) - velocity(context.rigid_body1);
        let approach_speed = -relative.dot(&*context.normal);

        if approach_speed < self.min_approach_speed {
            for contact in context.solver_contacts.iter_mut() {
                contact.restitution = 0.0;
            }
        } else {
            for contact in context.solver_contacts.iter_mut() {
                contact.dist = contact.dist.min(0.0);
            }
        }
    }
}
