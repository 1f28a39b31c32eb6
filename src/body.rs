use std::fmt;

use crate::astro::orbital_offset;
use crate::math::check_domain;
use crate::{BodyId, Error, Num, Position, Result};

/// The closed set of body types. Renderers match on this instead of on
/// concrete types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BodyKind {
    Star,
    Planet,
    Moon,
    Comet,
    Asteroid,
    AsteroidBelt,
    DwarfPlanet,
}

impl BodyKind {
    pub const fn label(self) -> &'static str {
        match self {
            BodyKind::Star => "Star",
            BodyKind::Planet => "Planet",
            BodyKind::Moon => "Moon",
            BodyKind::Comet => "Comet",
            BodyKind::Asteroid => "Asteroid",
            BodyKind::AsteroidBelt => "Asteroid Belt",
            BodyKind::DwarfPlanet => "Dwarf Planet",
        }
    }

    /// Whether the info panel lists this body's children as moons.
    pub const fn lists_moons(self) -> bool {
        matches!(self, BodyKind::Planet | BodyKind::DwarfPlanet)
    }

    /// Moons are the only bodies drawn relative to their parent.
    pub const fn follows_parent(self) -> bool {
        matches!(self, BodyKind::Moon)
    }
}

impl fmt::Display for BodyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Display color name, e.g. `"OrangeRed"`. Never interpreted here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorTag(pub String);

impl ColorTag {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ColorTag {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl fmt::Display for ColorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A node of the body hierarchy.
///
/// Distances are in km and periods in earth days. Only `orbital_radius` and
/// `orbital_period` take part in the position computation, the other
/// physical values are for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    name: String,
    kind: BodyKind,
    orbital_radius: Num,
    orbital_period: Num,
    object_radius: Num,
    rotational_period: Num,
    color: ColorTag,
    pub(crate) is_center_object: bool,
    pub(crate) children: Vec<BodyId>,
    pub(crate) parent: Option<BodyId>,
    position: Position,
}

impl Body {
    pub fn new(
        kind: BodyKind,
        name: impl Into<String>,
        orbital_radius: Num,
        orbital_period: Num,
        object_radius: Num,
        rotational_period: Num,
        color: impl Into<ColorTag>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            orbital_radius,
            orbital_period,
            object_radius,
            rotational_period,
            color: color.into(),
            is_center_object: false,
            children: Vec::new(),
            parent: None,
            position: Position::new(orbital_radius, 0.0),
        }
    }

    pub fn star(
        name: impl Into<String>,
        object_radius: Num,
        rotational_period: Num,
        color: impl Into<ColorTag>,
    ) -> Self {
        Self::new(
            BodyKind::Star,
            name,
            0.0,
            0.0,
            object_radius,
            rotational_period,
            color,
        )
    }

    pub fn planet(
        name: impl Into<String>,
        orbital_radius: Num,
        orbital_period: Num,
        object_radius: Num,
        rotational_period: Num,
        color: impl Into<ColorTag>,
    ) -> Self {
        Self::new(
            BodyKind::Planet,
            name,
            orbital_radius,
            orbital_period,
            object_radius,
            rotational_period,
            color,
        )
    }

    pub fn moon(
        name: impl Into<String>,
        orbital_radius: Num,
        orbital_period: Num,
        object_radius: Num,
        rotational_period: Num,
        color: impl Into<ColorTag>,
    ) -> Self {
        Self::new(
            BodyKind::Moon,
            name,
            orbital_radius,
            orbital_period,
            object_radius,
            rotational_period,
            color,
        )
    }

    pub fn dwarf_planet(
        name: impl Into<String>,
        orbital_radius: Num,
        orbital_period: Num,
        object_radius: Num,
        rotational_period: Num,
        color: impl Into<ColorTag>,
    ) -> Self {
        Self::new(
            BodyKind::DwarfPlanet,
            name,
            orbital_radius,
            orbital_period,
            object_radius,
            rotational_period,
            color,
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> BodyKind {
        self.kind
    }

    pub fn orbital_radius(&self) -> Num {
        self.orbital_radius
    }

    /// Adjusts the orbital radius of an orbiting body. The center object keeps
    /// any radius since it is never scaled.
    pub fn set_orbital_radius(&mut self, radius: Num) -> Result<()> {
        if !self.is_center_object {
            check_domain(radius).map_err(|_| Error::InvalidOrbitalRadius {
                name: self.name.clone(),
                radius,
            })?;
        }

        self.orbital_radius = radius;

        Ok(())
    }

    pub fn orbital_period(&self) -> Num {
        self.orbital_period
    }

    pub fn object_radius(&self) -> Num {
        self.object_radius
    }

    pub fn rotational_period(&self) -> Num {
        self.rotational_period
    }

    pub fn color(&self) -> &ColorTag {
        &self.color
    }

    pub fn is_center_object(&self) -> bool {
        self.is_center_object
    }

    pub fn children(&self) -> &[BodyId] {
        &self.children
    }

    pub fn parent(&self) -> Option<BodyId> {
        self.parent
    }

    /// Position from the last [`System::update`](crate::System::update) or
    /// [`System::recompute_position`](crate::System::recompute_position).
    pub fn position(&self) -> Position {
        self.position
    }

    /// Checks that the body can be drawn: its physical radius must be
    /// scalable into a marker size.
    pub fn validate_size(&self) -> Result<()> {
        check_domain(self.object_radius).map_err(|_| Error::InvalidObjectRadius {
            name: self.name.clone(),
            radius: self.object_radius,
        })?;

        Ok(())
    }

    /// Checks that this body can orbit something: its radius must be
    /// scalable and its period finite and non-zero. Also runs
    /// [`Body::validate_size`].
    pub fn validate_orbit(&self) -> Result<()> {
        if self.kind == BodyKind::Star {
            return Err(Error::CenterAsChild {
                name: self.name.clone(),
            });
        }

        check_domain(self.orbital_radius).map_err(|_| Error::InvalidOrbitalRadius {
            name: self.name.clone(),
            radius: self.orbital_radius,
        })?;

        if self.orbital_period == 0.0 {
            return Err(Error::ZeroOrbitalPeriod {
                name: self.name.clone(),
            });
        }

        if !self.orbital_period.is_finite() {
            return Err(Error::NonFiniteOrbitalPeriod {
                name: self.name.clone(),
                period: self.orbital_period,
            });
        }

        self.validate_size()
    }

    /// Computes and stores the position after `time` days.
    ///
    /// `parent_position` is the parent's most recent position. It is only
    /// added for moons; every other kind orbits the origin. Only bodies that
    /// passed [`Body::validate_orbit`] reach this, through [`System`](crate::System).
    pub(crate) fn calculate_position(&mut self, time: Num, parent_position: Option<Position>) -> Position {
        let mut position = if self.is_center_object {
            Position::ORIGIN
        } else {
            orbital_offset(self.orbital_radius, self.orbital_period, time)
        };

        if let Some(parent_position) = parent_position {
            if self.kind.follows_parent() {
                position = position + parent_position;
            }
        }

        self.position = position;

        position
    }

    pub(crate) fn make_center(&mut self) {
        self.is_center_object = true;
        self.position = Position::ORIGIN;
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
