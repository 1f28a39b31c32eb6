use std::fmt;
use std::ops::Index;

use tracing::{debug, trace, warn};

use crate::{Body, Error, Num, Position, Result};

/// Stable handle of a body inside a [`System`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BodyId(usize);

impl BodyId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Arena owning every body of one hierarchy.
///
/// The first body is the center object and the root of the tree. Bodies are
/// never removed, so a [`BodyId`] stays valid for the lifetime of the system.
#[derive(Debug, Clone)]
pub struct System {
    bodies: Vec<Body>,
}

impl System {
    pub const ROOT: BodyId = BodyId(0);

    /// Creates a system around `root`, which becomes the center object.
    ///
    /// The root never orbits, so only its size is checked.
    pub fn new(mut root: Body) -> Result<Self> {
        if let Err(err) = root.validate_size() {
            warn!("Rejected center object: {err}");
            return Err(err);
        }

        root.make_center();
        root.parent = None;
        root.children.clear();

        Ok(Self { bodies: vec![root] })
    }

    pub fn root(&self) -> &Body {
        &self.bodies[Self::ROOT.0]
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn contains(&self, id: BodyId) -> bool {
        id.0 < self.bodies.len()
    }

    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id.0)
    }

    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.get_mut(id.0)
    }

    fn try_get(&self, id: BodyId) -> Result<&Body> {
        self.get(id).ok_or(Error::UnknownBody(id))
    }

    /// Attaches `child` under `parent` and returns its id.
    ///
    /// The child is moved into the arena, so one body can never end up with
    /// two parents.
    pub fn add_child(&mut self, parent: BodyId, mut child: Body) -> Result<BodyId> {
        if !self.contains(parent) {
            return Err(Error::UnknownBody(parent));
        }

        if let Err(err) = child.validate_orbit() {
            warn!("Rejected body: {err}");
            return Err(err);
        }

        let id = BodyId(self.bodies.len());

        child.parent = Some(parent);
        child.children.clear();
        self.bodies.push(child);
        self.bodies[parent.0].children.push(id);

        debug!(
            "Attached {} {} to {}",
            self.bodies[id.0].kind(),
            self.bodies[id.0].name(),
            self.bodies[parent.0].name()
        );

        Ok(id)
    }

    pub fn children(&self, id: BodyId) -> &[BodyId] {
        self.get(id).map(Body::children).unwrap_or(&[])
    }

    pub fn parent(&self, id: BodyId) -> Option<BodyId> {
        self.get(id).and_then(Body::parent)
    }

    /// First body with the given name, in depth-first order.
    pub fn find(&self, name: &str) -> Option<BodyId> {
        self.iter_depth_first()
            .find(|(_, body)| body.name() == name)
            .map(|(id, _)| id)
    }

    /// Bodies in the order they were attached.
    pub fn iter(&self) -> impl Iterator<Item = (BodyId, &Body)> {
        self.bodies.iter().enumerate().map(|(i, b)| (BodyId(i), b))
    }

    /// Pre-order walk from the root: every body comes before its children and
    /// siblings keep their insertion order.
    pub fn iter_depth_first(&self) -> DepthFirst<'_> {
        DepthFirst {
            system: self,
            stack: vec![Self::ROOT],
        }
    }

    /// Recomputes one body's position from its parent's stored position.
    ///
    /// For a moon the parent must already be up to date for `time`, which
    /// [`System::update`] guarantees.
    pub fn recompute_position(&mut self, id: BodyId, time: Num) -> Result<Position> {
        self.try_get(id)?;

        Ok(self.recompute(id, time))
    }

    /// Recomputes every position for `time` days, parents before children.
    pub fn update(&mut self, time: Num) {
        trace!("Updating {} bodies at day {time}", self.bodies.len());

        let order: Vec<BodyId> = self.iter_depth_first().map(|(id, _)| id).collect();

        for id in order {
            self.recompute(id, time);
        }
    }

    /// `id` must be in the arena.
    fn recompute(&mut self, id: BodyId, time: Num) -> Position {
        let parent_position = self.bodies[id.0]
            .parent()
            .map(|parent| self.bodies[parent.0].position());

        self.bodies[id.0].calculate_position(time, parent_position)
    }
}

impl Index<BodyId> for System {
    type Output = Body;

    fn index(&self, id: BodyId) -> &Self::Output {
        &self.bodies[id.0]
    }
}

pub struct DepthFirst<'a> {
    system: &'a System,
    stack: Vec<BodyId>,
}

impl<'a> Iterator for DepthFirst<'a> {
    type Item = (BodyId, &'a Body);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let system = self.system;
        let body = &system.bodies[id.0];

        self.stack.extend(body.children().iter().rev());

        Some((id, body))
    }
}
