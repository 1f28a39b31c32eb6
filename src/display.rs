//! What a renderer needs to draw the current state: which bodies are in view,
//! how large to draw them and the orbit rings behind them.
//!
//! Nothing here knows about screens. Coordinates are relative to the system
//! center and the host translates them to its own canvas.

use crate::math::scale_orbit;
use crate::{Body, BodyId, BodyKind, ColorTag, Num, Position, System};
use crate::{BODY_SIZE_EXPONENT, DISTANCE_EXPONENT, DISTANCE_OFFSET};

/// Tuning knobs for ring and marker sizes.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DisplaySettings {
    pub ring_exponent: Num,
    pub ring_offset: Num,
    pub body_size_exponent: Num,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            ring_exponent: DISTANCE_EXPONENT,
            ring_offset: -DISTANCE_OFFSET,
            body_size_exponent: BODY_SIZE_EXPONENT,
        }
    }
}

impl DisplaySettings {
    /// Diameter of the ring a body travels along.
    pub fn orbit_ring_diameter(&self, body: &Body) -> Num {
        scale_orbit(body.orbital_radius(), self.ring_exponent, self.ring_offset)
    }

    /// Diameter of the disc drawn for a body.
    pub fn marker_diameter(&self, body: &Body) -> Num {
        scale_orbit(body.object_radius(), self.body_size_exponent, 0.0)
    }
}

/// A ring centered on the system origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitRing {
    pub body: BodyId,
    pub diameter: Num,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub body: BodyId,
    pub center: Position,
    pub diameter: Num,
    pub color: ColorTag,
}

/// The part of the hierarchy currently on screen: one focused body and its
/// direct children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct View {
    focus: BodyId,
}

impl Default for View {
    fn default() -> Self {
        Self { focus: System::ROOT }
    }
}

impl View {
    pub fn new(focus: BodyId) -> Self {
        Self { focus }
    }

    pub fn focus(&self) -> BodyId {
        self.focus
    }

    pub fn select(&mut self, id: BodyId) {
        self.focus = id;
    }

    /// Moves the focus to its parent. Returns `false` when already at the root.
    pub fn zoom_out(&mut self, system: &System) -> bool {
        match system.parent(self.focus) {
            Some(parent) => {
                self.focus = parent;
                true
            }
            None => false,
        }
    }

    pub fn visible(&self, system: &System) -> Vec<BodyId> {
        if !system.contains(self.focus) {
            return Vec::new();
        }

        std::iter::once(self.focus)
            .chain(system.children(self.focus).iter().copied())
            .collect()
    }

    /// Rings for the focused body's children. Moons get none.
    pub fn orbit_rings(&self, system: &System, settings: &DisplaySettings) -> Vec<OrbitRing> {
        system
            .children(self.focus)
            .iter()
            .filter(|&&id| system[id].kind() != BodyKind::Moon)
            .map(|&id| OrbitRing {
                body: id,
                diameter: settings.orbit_ring_diameter(&system[id]),
            })
            .collect()
    }

    pub fn markers(&self, system: &System, settings: &DisplaySettings) -> Vec<Marker> {
        self.visible(system)
            .into_iter()
            .map(|id| {
                let body = &system[id];

                Marker {
                    body: id,
                    center: body.position(),
                    diameter: settings.marker_diameter(body),
                    color: body.color().clone(),
                }
            })
            .collect()
    }
}

/// Children of the root that can be picked as a focus from a planet list.
pub fn selectable_planets(system: &System) -> Vec<BodyId> {
    system
        .children(System::ROOT)
        .iter()
        .copied()
        .filter(|&id| system[id].kind().lists_moons())
        .collect()
}
