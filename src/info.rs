//! Text summaries of bodies for info panels and console output.

use crate::{BodyId, Num, System};

/// Formats a value with one decimal, comma-grouped thousands and at least two
/// integer digits: `57910000.0 -> "57,910,000.0"`, `5.0 -> "05.0"`.
///
/// Halves round away from zero. Rounding happens in `f64` whatever [`Num`] is.
pub fn format_decimal(value: Num) -> String {
    let value = f64::from(value);
    let fixed = format!("{:.1}", (value.abs() * 10.0).round() / 10.0);
    let (int, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "0"));

    let padded = format!("{int:0>2}");
    let mut grouped = String::with_capacity(padded.len() + padded.len() / 3 + 4);

    if value.is_sign_negative() && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        grouped.push('-');
    }

    for (i, digit) in padded.chars().enumerate() {
        if i > 0 && (padded.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    grouped.push('.');
    grouped.push_str(frac);

    grouped
}

/// Info panel text for a body.
///
/// Planets and dwarf planets end with a `Moons:` line listing their children
/// in attachment order. Returns `None` for an unknown id.
pub fn info_string(system: &System, id: BodyId) -> Option<String> {
    let body = system.get(id)?;

    let mut info = format!(
        "Name: {}\n\
         Orbital radius: {}km\n\
         Orbital period: {} earth days\n\
         Polar radius: {}km\n\
         Rotational period: {} earth days\n",
        body.name(),
        format_decimal(body.orbital_radius()),
        format_decimal(body.orbital_period()),
        format_decimal(body.object_radius()),
        format_decimal(body.rotational_period()),
    );

    if body.kind().lists_moons() {
        let moons: Vec<&str> = body
            .children()
            .iter()
            .map(|&child| system[child].name())
            .collect();

        info.push_str("Moons: ");
        info.push_str(&moons.join(", "));
    }

    Some(info)
}

/// Multi-line console dump of a body, prefixed with its kind label.
pub fn report(system: &System, id: BodyId) -> Option<String> {
    let body = system.get(id)?;

    Some(format!(
        "{}: {}\n\
         Position: {}\n\
         Orbital radius: {}\n\
         Orbital period: {}\n\
         Object radius: {}\n\
         Rotational period: {}\n",
        body.kind().label(),
        body.name(),
        body.position(),
        body.orbital_radius(),
        body.orbital_period(),
        body.object_radius(),
        body.rotational_period(),
    ))
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::Body;

    #[test_case(57_910_000.0 => "57,910,000.0" ; "millions")]
    #[test_case(4_294_967_296.0 => "4,294,967,296.0" ; "billions")]
    #[test_case(696_340.0 => "696,340.0" ; "hundreds of thousands")]
    #[test_case(1737.4 => "1,737.4" ; "thousands")]
    #[test_case(365.26 => "365.3" ; "hundreds")]
    #[test_case(0.25 => "00.3" ; "halves round away from zero")]
    #[test_case(27.0 => "27.0" ; "two digits")]
    #[test_case(5.0 => "05.0" ; "single digit is padded")]
    #[test_case(0.0 => "00.0" ; "zero")]
    #[test_case(-1234.5 => "-1,234.5" ; "negative")]
    fn decimal_format(value: Num) -> String {
        format_decimal(value)
    }

    fn earth_system() -> (System, BodyId) {
        let mut system = System::new(Body::star("Sun", 696_340.0, 27.0, "Red")).unwrap();
        let earth = system
            .add_child(
                System::ROOT,
                Body::planet("Earth", 149_600_000.0, 365.5, 6387.0, 1.5, "Green"),
            )
            .unwrap();
        system
            .add_child(
                earth,
                Body::moon("The Moon", 348_000.0, 27.0, 1737.4, 29.5, "White"),
            )
            .unwrap();

        (system, earth)
    }

    #[test]
    fn planet_info_lists_moons() {
        let (system, earth) = earth_system();

        assert_eq!(
            info_string(&system, earth).unwrap(),
            "Name: Earth\n\
             Orbital radius: 149,600,000.0km\n\
             Orbital period: 365.5 earth days\n\
             Polar radius: 6,387.0km\n\
             Rotational period: 01.5 earth days\n\
             Moons: The Moon"
        );
    }

    #[test]
    fn moon_info_has_no_moons_line() {
        let (system, earth) = earth_system();
        let moon = system.children(earth)[0];

        let info = info_string(&system, moon).unwrap();

        assert!(info.starts_with("Name: The Moon\n"));
        assert!(!info.contains("Moons:"));
    }

    #[test]
    fn planet_without_moons_has_empty_list() {
        let mut system = System::new(Body::star("Sun", 696_340.0, 27.0, "Red")).unwrap();
        let venus = system
            .add_child(
                System::ROOT,
                Body::planet("Venus", 108_200_000.0, 224.7, 6052.0, 243.0, "DimGray"),
            )
            .unwrap();

        assert!(info_string(&system, venus).unwrap().ends_with("Moons: "));
    }

    #[test]
    fn report_starts_with_kind_label() {
        let (system, earth) = earth_system();

        let dump = report(&system, earth).unwrap();

        assert!(dump.starts_with("Planet: Earth\nPosition: (x: 149600000, y: 0)\n"));
        assert!(dump.contains("Rotational period: 1.5\n"));
        assert!(report(&system, System::ROOT)
            .unwrap()
            .starts_with("Star: Sun\nPosition: (x: 0, y: 0)\n"));
    }
}
