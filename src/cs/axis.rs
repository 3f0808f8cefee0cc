use std::fmt;
use std::str::FromStr;

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::cs::{Entity, Info};
use crate::error::CrsError;
use crate::wkt::{ToWkt, WktCache, WktPart};

/// The direction an axis points in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum AxisOrientation {
    /// Unknown or unspecified direction.
    Other = 0,
    /// Increasing ordinates values go North. Usually used for latitude or Northing.
    North = 1,
    /// Increasing ordinates values go South.
    South = 2,
    /// Increasing ordinates values go East. Usually used for longitude or Easting.
    East = 3,
    /// Increasing ordinates values go West.
    West = 4,
    /// Increasing ordinates values go up. Used for vertical coordinate systems.
    Up = 5,
    /// Increasing ordinates values go down.
    Down = 6,
}

impl AxisOrientation {
    /// The bare WKT identifier, e.g. `NORTH`.
    pub fn as_str(&self) -> &'static str {
        use AxisOrientation::*;
        match self {
            Other => "OTHER",
            North => "NORTH",
            South => "SOUTH",
            East => "EAST",
            West => "WEST",
            Up => "UP",
            Down => "DOWN",
        }
    }
}

impl FromStr for AxisOrientation {
    type Err = CrsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use AxisOrientation::*;
        match s {
            "OTHER" => Ok(Other),
            "NORTH" => Ok(North),
            "SOUTH" => Ok(South),
            "EAST" => Ok(East),
            "WEST" => Ok(West),
            "UP" => Ok(Up),
            "DOWN" => Ok(Down),
            _ => Err(CrsError::parse(format!("Unknown axis orientation: {}", s))),
        }
    }
}

impl fmt::Display for AxisOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Details of an axis, e.g. `AXIS["Lat",NORTH]`.
#[derive(Clone)]
pub struct AxisInfo {
    info: Info,
    orientation: AxisOrientation,
    cache: WktCache,
}

impl AxisInfo {
    pub fn new(name: impl Into<String>, orientation: AxisOrientation) -> Self {
        Self {
            info: Info::new(name),
            orientation,
            cache: Default::default(),
        }
    }

    pub fn name(&self) -> &str {
        self.info.name()
    }

    pub fn orientation(&self) -> AxisOrientation {
        self.orientation
    }
}

impl ToWkt for AxisInfo {
    fn wkt_typename(&self) -> &'static str {
        "AXIS"
    }

    fn type_name(&self) -> &'static str {
        "AxisInfo"
    }

    fn wkt_content(&self) -> Vec<WktPart<'_>> {
        vec![WktPart::Keyword(self.orientation.as_str())]
    }

    fn wkt_info(&self) -> Option<&Info> {
        Some(&self.info)
    }

    fn wkt_cache(&self) -> &WktCache {
        &self.cache
    }
}

impl_wkt_identity!(AxisInfo);
impl_from_entity!(AxisInfo, Entity::AxisInfo(axis) => axis);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn orientation_codes() {
        assert_eq!(u8::from(AxisOrientation::Other), 0);
        assert_eq!(u8::from(AxisOrientation::Down), 6);
        assert_eq!(
            AxisOrientation::try_from(3u8).unwrap(),
            AxisOrientation::East
        );
        assert!(AxisOrientation::try_from(7u8).is_err());
    }

    #[test]
    fn orientation_names() {
        for code in 0u8..=6 {
            let orientation = AxisOrientation::try_from(code).unwrap();
            assert_eq!(
                orientation.as_str().parse::<AxisOrientation>().unwrap(),
                orientation
            );
        }
        assert!("north".parse::<AxisOrientation>().is_err());
    }

    #[test]
    fn axis_wkt() {
        let axis = AxisInfo::new("N", AxisOrientation::North);
        assert_eq!(axis.to_wkt(true), r#"AXIS["N",NORTH]"#);
        assert_eq!(axis.to_wkt(false), r#"AXIS("N",NORTH)"#);
        assert_eq!(axis.to_string(), r#"AXIS("N",NORTH)"#);
    }
}
