use crate::cs::CoordinateSystem;
use crate::error::Result;

/// A coordinate system handed over by a caller, either as WKT still to be parsed or as an
/// already built [`CoordinateSystem`].
#[derive(Debug, Clone)]
pub enum CoordinateSystemSource<'a> {
    Wkt(&'a str),
    CoordinateSystem(CoordinateSystem),
}

impl CoordinateSystemSource<'_> {
    /// Parse the WKT if necessary and return the coordinate system.
    pub fn resolve(self) -> Result<CoordinateSystem> {
        match self {
            CoordinateSystemSource::Wkt(wkt) => crate::create_coordinate_system(wkt),
            CoordinateSystemSource::CoordinateSystem(cs) => Ok(cs),
        }
    }
}

impl<'a> From<&'a str> for CoordinateSystemSource<'a> {
    fn from(value: &'a str) -> Self {
        CoordinateSystemSource::Wkt(value)
    }
}

impl From<CoordinateSystem> for CoordinateSystemSource<'_> {
    fn from(value: CoordinateSystem) -> Self {
        CoordinateSystemSource::CoordinateSystem(value)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::CrsError;
    use crate::test::crs::{BRITISH_NATIONAL_GRID, WGS84};

    #[test]
    fn resolves_text_and_built_systems() {
        let parsed = CoordinateSystemSource::from(WGS84).resolve().unwrap();
        assert_eq!(parsed.authority_code(), Some("4326"));

        let built: CoordinateSystem = BRITISH_NATIONAL_GRID.parse().unwrap();
        let resolved = CoordinateSystemSource::from(built.clone()).resolve().unwrap();
        assert_eq!(resolved, built);
        assert_eq!(
            resolved
                .geographic_coordinate_system()
                .map(|gcs| gcs.info().name()),
            Some("OSGB 1936")
        );
    }

    #[test]
    fn text_must_be_a_coordinate_system() {
        let err = CoordinateSystemSource::from(r#"UNIT["metre",1.0]"#)
            .resolve()
            .unwrap_err();
        assert_eq!(
            err,
            CrsError::TypeMismatch {
                expected: "CoordinateSystem",
                found: "Unit"
            }
        );
    }
}
