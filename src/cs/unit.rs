use std::ops::Deref;

use crate::cs::{Entity, Info};
use crate::wkt::{ToWkt, WktCache, WktPart};

/// Which concrete unit a `UNIT` clause denotes.
///
/// The clause syntax is the same for all three; the enclosing keyword decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitKind {
    /// A unit with no known dimension.
    Generic,
    /// A length unit; the conversion factor is meters per unit.
    Linear,
    /// An angle unit; the conversion factor is radians per unit.
    Angular,
}

/// A unit of measure, e.g. `UNIT["metre",1.0]`.
#[derive(Clone)]
pub struct Unit {
    info: Info,
    conversion_factor: f64,
    kind: UnitKind,
    cache: WktCache,
}

impl Unit {
    /// Create a unit with no known dimension.
    pub fn new(info: impl Into<Info>, conversion_factor: f64) -> Self {
        Self::with_kind(info, conversion_factor, UnitKind::Generic)
    }

    pub(crate) fn with_kind(info: impl Into<Info>, conversion_factor: f64, kind: UnitKind) -> Self {
        Self {
            info: info.into(),
            conversion_factor,
            kind,
            cache: Default::default(),
        }
    }

    pub fn info(&self) -> &Info {
        &self.info
    }

    pub fn name(&self) -> &str {
        self.info.name()
    }

    /// The number of base units (meters or radians) per one of this unit.
    pub fn conversion_factor(&self) -> f64 {
        self.conversion_factor
    }

    pub fn kind(&self) -> UnitKind {
        self.kind
    }
}

impl ToWkt for Unit {
    fn wkt_typename(&self) -> &'static str {
        "UNIT"
    }

    fn type_name(&self) -> &'static str {
        match self.kind {
            UnitKind::Generic => "Unit",
            UnitKind::Linear => "LinearUnit",
            UnitKind::Angular => "AngularUnit",
        }
    }

    fn wkt_content(&self) -> Vec<WktPart<'_>> {
        vec![WktPart::Number(self.conversion_factor)]
    }

    fn wkt_info(&self) -> Option<&Info> {
        Some(&self.info)
    }

    fn wkt_cache(&self) -> &WktCache {
        &self.cache
    }
}

/// A length unit.
#[derive(Clone)]
pub struct LinearUnit(Unit);

impl LinearUnit {
    pub fn new(info: impl Into<Info>, meters_per_unit: f64) -> Self {
        Self(Unit::with_kind(info, meters_per_unit, UnitKind::Linear))
    }

    pub fn meters_per_unit(&self) -> f64 {
        self.0.conversion_factor
    }

    pub fn into_inner(self) -> Unit {
        self.0
    }
}

/// An angle unit.
#[derive(Clone)]
pub struct AngularUnit(Unit);

impl AngularUnit {
    pub fn new(info: impl Into<Info>, radians_per_unit: f64) -> Self {
        Self(Unit::with_kind(info, radians_per_unit, UnitKind::Angular))
    }

    pub fn radians_per_unit(&self) -> f64 {
        self.0.conversion_factor
    }

    pub fn into_inner(self) -> Unit {
        self.0
    }
}

impl Deref for LinearUnit {
    type Target = Unit;

    fn deref(&self) -> &Unit {
        &self.0
    }
}

impl Deref for AngularUnit {
    type Target = Unit;

    fn deref(&self) -> &Unit {
        &self.0
    }
}

impl From<LinearUnit> for Unit {
    fn from(value: LinearUnit) -> Self {
        value.0
    }
}

impl From<AngularUnit> for Unit {
    fn from(value: AngularUnit) -> Self {
        value.0
    }
}

delegate_to_wkt!(LinearUnit, |this| &this.0);
delegate_to_wkt!(AngularUnit, |this| &this.0);

impl_wkt_identity!(Unit, LinearUnit, AngularUnit);
impl_from_entity!(Unit, Entity::Unit(unit) => unit);
impl_from_entity!(
    LinearUnit,
    Entity::Unit(unit) if unit.kind() == UnitKind::Linear => LinearUnit(unit)
);
impl_from_entity!(
    AngularUnit,
    Entity::Unit(unit) if unit.kind() == UnitKind::Angular => AngularUnit(unit)
);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn unit_kinds_share_wkt_but_not_identity() {
        let generic = Unit::new("degree", 0.0174532925199433);
        let angular = AngularUnit::new("degree", 0.0174532925199433);

        assert_eq!(generic.to_wkt(true), angular.to_wkt(true));
        assert_eq!(generic.to_wkt(true), r#"UNIT["degree",0.0174532925199433]"#);
        assert_ne!(generic, Unit::from(angular.clone()));
        assert_eq!(angular.type_name(), "AngularUnit");
        assert_eq!(angular.kind(), UnitKind::Angular);
    }

    #[test]
    fn base_unit_factors() {
        let foot = LinearUnit::new(Info::new("foot").with_authority("EPSG", "9002"), 0.3048);
        assert_eq!(foot.meters_per_unit(), 0.3048);
        assert_eq!(foot.info().authority_code(), Some("9002"));
        assert_eq!(
            foot.to_wkt(true),
            r#"UNIT["foot",0.3048,AUTHORITY["EPSG","9002"]]"#
        );

        let grad = AngularUnit::new("grad", 0.015707963267948967);
        assert_eq!(grad.radians_per_unit(), 0.015707963267948967);
    }

    #[test]
    fn typed_conversion_checks_kind() {
        let entity = Entity::Unit(LinearUnit::new("metre", 1.0).into_inner());
        assert!(AngularUnit::try_from(entity.clone()).is_err());
        assert!(LinearUnit::try_from(entity.clone()).is_ok());
        assert!(Unit::try_from(entity).is_ok());
    }
}
