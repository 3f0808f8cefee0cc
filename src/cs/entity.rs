use std::str::FromStr;

use crate::cs::{
    AxisInfo, CoordinateSystem, Datum, Ellipsoid, PrimeMeridian, Projection, ProjectionParameter,
    Unit, Wgs84ConversionInfo,
};
use crate::error::CrsError;
use crate::wkt::ToWkt;

/// Conversion from an [`Entity`] to one concrete entity type, handing the entity back when it
/// is of a different type.
pub(crate) trait FromEntity: Sized {
    const TYPE_NAME: &'static str;

    fn from_entity(entity: Entity) -> std::result::Result<Self, Entity>;
}

/// Any entity that can appear as a top-level WKT value.
#[derive(Clone)]
pub enum Entity {
    AxisInfo(AxisInfo),
    ProjectionParameter(ProjectionParameter),
    Wgs84ConversionInfo(Wgs84ConversionInfo),
    Unit(Unit),
    PrimeMeridian(PrimeMeridian),
    Ellipsoid(Ellipsoid),
    Datum(Datum),
    Projection(Projection),
    CoordinateSystem(CoordinateSystem),
}

impl Entity {
    fn as_dyn(&self) -> &dyn ToWkt {
        match self {
            Entity::AxisInfo(entity) => entity,
            Entity::ProjectionParameter(entity) => entity,
            Entity::Wgs84ConversionInfo(entity) => entity,
            Entity::Unit(entity) => entity,
            Entity::PrimeMeridian(entity) => entity,
            Entity::Ellipsoid(entity) => entity,
            Entity::Datum(entity) => entity,
            Entity::Projection(entity) => entity,
            Entity::CoordinateSystem(entity) => entity,
        }
    }

    pub fn as_coordinate_system(&self) -> Option<&CoordinateSystem> {
        match self {
            Entity::CoordinateSystem(cs) => Some(cs),
            _ => None,
        }
    }

    pub fn into_coordinate_system(self) -> crate::error::Result<CoordinateSystem> {
        self.try_into()
    }
}

impl FromEntity for Entity {
    const TYPE_NAME: &'static str = "Entity";

    fn from_entity(entity: Entity) -> std::result::Result<Self, Entity> {
        Ok(entity)
    }
}

impl FromStr for Entity {
    type Err = CrsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::create_from_wkt(s)
    }
}

macro_rules! impl_into_entity {
    ($($ty:ident => $variant:ident),+ $(,)?) => {
        $(
            impl From<$ty> for Entity {
                fn from(value: $ty) -> Self {
                    Entity::$variant(value)
                }
            }
        )+
    };
}

impl_into_entity!(
    AxisInfo => AxisInfo,
    ProjectionParameter => ProjectionParameter,
    Wgs84ConversionInfo => Wgs84ConversionInfo,
    Unit => Unit,
    PrimeMeridian => PrimeMeridian,
    Ellipsoid => Ellipsoid,
    Datum => Datum,
    Projection => Projection,
    CoordinateSystem => CoordinateSystem,
);

delegate_to_wkt!(Entity, |this| this.as_dyn());

impl_wkt_identity!(Entity);

#[cfg(test)]
mod test {
    use super::*;
    use crate::cs::{AxisOrientation, Ellipsoid, LinearUnit};

    #[test]
    fn typed_conversion() {
        let entity = Entity::from(AxisInfo::new("E", AxisOrientation::East));
        assert_eq!(entity.type_name(), "AxisInfo");
        assert_eq!(entity.wkt_typename(), "AXIS");

        let err = Ellipsoid::try_from(entity.clone()).unwrap_err();
        assert_eq!(
            err,
            CrsError::TypeMismatch {
                expected: "Ellipsoid",
                found: "AxisInfo"
            }
        );
        assert!(entity.as_coordinate_system().is_none());
        assert!(entity.into_coordinate_system().is_err());
    }

    #[test]
    fn equality_needs_same_type() {
        let linear = Entity::from(LinearUnit::new("metre", 1.0).into_inner());
        let generic = Entity::from(Unit::new("metre", 1.0));
        assert_eq!(linear.to_wkt(true), generic.to_wkt(true));
        assert_ne!(linear, generic);
        assert_eq!(linear, linear.clone());
    }
}
