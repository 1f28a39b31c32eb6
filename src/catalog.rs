//! The Sun and its planets, with the larger named moons.
//!
//! Orbital radii are in km, periods and day lengths in earth days. Moons
//! with an unknown day length carry `0.0`.

use tracing::info;

use crate::{Body, Result, System};

/// Builds the solar system catalog.
#[rustfmt::skip]
pub fn solar_system() -> Result<System> {
    let mut system = System::new(Body::star("Sun", 696_340.0, 27.0, "Red"))?;
    let sun = System::ROOT;

    system.add_child(sun, Body::planet("Mercury", 57_910_000.0, 87.97, 2439.0, 58.6, "OrangeRed"))?;
    system.add_child(sun, Body::planet("Venus", 108_200_000.0, 224.7, 6052.0, 243.0, "DimGray"))?;

    let earth = system.add_child(sun, Body::planet("Earth", 149_600_000.0, 365.26, 6387.0, 0.99, "Green"))?;
    system.add_child(earth, Body::moon("The Moon", 348_000.0, 27.0, 1737.4, 29.5, "White"))?;

    let mars = system.add_child(sun, Body::planet("Mars", 227_940_000.0, 686.98, 3393.0, 1.025, "DarkOrange"))?;
    system.add_child(mars, Body::moon("Phobos", 9375.0, 0.38, 11.266, 0.0, "White"))?;
    system.add_child(mars, Body::moon("Deimos", 23_457.8, 1.263, 6200.0, 0.0, "White"))?;

    let jupiter = system.add_child(sun, Body::planet("Jupiter", 778_500_000.0, 4331.0, 69_911.0, 1.025, "SandyBrown"))?;
    system.add_child(jupiter, Body::moon("Io", 421_700.0, 1.769, 1821.6, 0.0, "White"))?;
    system.add_child(jupiter, Body::moon("Europa", 670_900.0, 3.551, 1560.8, 0.0, "White"))?;
    system.add_child(jupiter, Body::moon("Ganymede", 1_070_000.0, 7.154, 2634.1, 0.0, "White"))?;
    system.add_child(jupiter, Body::moon("Callisto", 1_883_000.0, 16.689, 2410.3, 0.0, "White"))?;

    let saturn = system.add_child(sun, Body::planet("Saturn", 1_432_000_000.0, 10_747.0, 58_232.0, 1.025, "Brown"))?;
    system.add_child(saturn, Body::moon("Mimas", 185.539, 0.942, 198.2, 0.0, "White"))?;
    system.add_child(saturn, Body::moon("Enceladus", 237.948, 1.370, 252.1, 0.0, "White"))?;
    system.add_child(saturn, Body::moon("Tethys", 294.619, 1.887, 531.1, 0.0, "White"))?;

    let uranus = system.add_child(sun, Body::planet("Uranus", 2_867_000_000.0, 30_589.0, 24_622.0, 1.025, "AliceBlue"))?;
    system.add_child(uranus, Body::moon("Miranda", 129_900.0, 1.413, 235.8, 0.0, "White"))?;
    system.add_child(uranus, Body::moon("Ariel", 190_900.0, 2.520, 578.9, 0.0, "White"))?;
    system.add_child(uranus, Body::moon("Umbriel", 266_000.0, 4.144, 584.7, 0.0, "White"))?;
    system.add_child(uranus, Body::moon("Titania", 436_300.0, 8.706, 788.4, 0.0, "White"))?;
    system.add_child(uranus, Body::moon("Oberon", 583_500.0, 13.463, 761.4, 0.0, "White"))?;

    let neptune = system.add_child(sun, Body::planet("Neptune", 4_515_000_000.0, 59_800.0, 25_622.0, 1.025, "DeepSkyBlue"))?;
    system.add_child(neptune, Body::moon("Triton", 354_800.0, 5.88, 1353.4, 0.0, "White"))?;
    system.add_child(neptune, Body::moon("Proteus", 117_647.0, 1.122, 210.0, 0.0, "White"))?;
    system.add_child(neptune, Body::moon("Nereid", 5_513_400.0, 360.11, 180.0, 0.0, "White"))?;

    system.add_child(sun, Body::dwarf_planet("Pluto", 5_905_400_000.0, 90_560.0, 1188.0, 1.025, "CadetBlue"))?;

    info!(
        "Built solar system with {} bodies around {}",
        system.len(),
        system.root().name()
    );

    Ok(system)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::astro::orbital_offset;
    use crate::display::selectable_planets;
    use crate::info::info_string;
    use crate::{BodyKind, Position, TOLERANCE};

    #[test]
    fn sun_has_nine_direct_children() {
        let system = solar_system().unwrap();

        let names: Vec<_> = system
            .children(System::ROOT)
            .iter()
            .map(|&id| system[id].name())
            .collect();

        assert_eq!(
            names,
            vec![
                "Mercury", "Venus", "Earth", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune",
                "Pluto"
            ]
        );
        assert_eq!(system.len(), 1 + 9 + 18);
        assert_eq!(selectable_planets(&system).len(), 9);
    }

    #[test]
    fn earth_has_the_moon() {
        let system = solar_system().unwrap();
        let earth = system.find("Earth").unwrap();

        assert_eq!(system.children(earth).len(), 1);
        assert!(info_string(&system, earth)
            .unwrap()
            .contains("Moons: The Moon"));
    }

    #[test]
    fn jupiter_lists_galilean_moons_in_order() {
        let system = solar_system().unwrap();
        let jupiter = system.find("Jupiter").unwrap();

        assert!(info_string(&system, jupiter)
            .unwrap()
            .ends_with("Moons: Io, Europa, Ganymede, Callisto"));
    }

    #[test]
    fn every_body_has_a_finite_position() {
        let mut system = solar_system().unwrap();

        for day in [0.0, 0.5, 365.26, 12_345.6] {
            system.update(day);

            for (_, body) in system.iter() {
                let Position { x, y } = body.position();
                assert!(x.is_finite() && y.is_finite(), "{} at day {day}", body.name());
            }
        }
    }

    #[test]
    fn sun_stays_at_origin() {
        let mut system = solar_system().unwrap();

        for day in [0.0, 1.0, 1000.0] {
            system.update(day);
            assert_eq!(system.root().position(), Position::ORIGIN);
        }
    }

    #[test]
    fn moons_orbit_their_planet() {
        let mut system = solar_system().unwrap();
        let t = 42.0;
        system.update(t);

        for (id, body) in system.iter() {
            if body.kind() != BodyKind::Moon {
                continue;
            }

            let parent = system.parent(id).unwrap();
            let relative = body.position() - system[parent].position();
            let expected = orbital_offset(body.orbital_radius(), body.orbital_period(), t);

            assert_relative_eq!(relative.x, expected.x, epsilon = TOLERANCE);
            assert_relative_eq!(relative.y, expected.y, epsilon = TOLERANCE);
        }
    }

    #[test]
    fn pluto_is_a_dwarf_planet() {
        let system = solar_system().unwrap();
        let pluto = system.find("Pluto").unwrap();

        assert_eq!(system[pluto].kind(), BodyKind::DwarfPlanet);
        assert!(info_string(&system, pluto).unwrap().ends_with("Moons: "));
    }
}
