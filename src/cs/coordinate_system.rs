use std::str::FromStr;

use crate::cs::{
    AngularUnit, AxisInfo, Entity, HorizontalDatum, Info, LinearUnit, LocalDatum, PrimeMeridian,
    Projection, Unit, VerticalDatum, Wgs84ConversionInfo,
};
use crate::error::{CrsError, Result};
use crate::wkt::{ToWkt, WktCache, WktPart};

/// Accessors shared by every coordinate system.
pub trait CoordinateSystemTrait {
    /// The number of ordinates of a position in this system.
    fn dimension(&self) -> usize;

    /// The axis for dimension `index`, if the system declares its axes.
    fn get_axis(&self, index: usize) -> Option<&AxisInfo>;

    /// The unit of dimension `index`.
    fn get_units(&self, index: usize) -> Option<&Unit>;
}

fn axis_parts(axes: &[AxisInfo]) -> impl Iterator<Item = WktPart<'_>> {
    axes.iter().map(|axis| WktPart::Entity(axis))
}

/// A coordinate system for a local, non-georeferenced area such as a building site, written as
/// `LOCAL_CS["name",LOCAL_DATUM[...],UNIT[...],AXIS[...],...]`.
#[derive(Clone)]
pub struct LocalCoordinateSystem {
    info: Info,
    local_datum: LocalDatum,
    unit: Unit,
    axes: Vec<AxisInfo>,
    cache: WktCache,
}

impl LocalCoordinateSystem {
    /// The dimension equals the number of axes, which must be at least one.
    pub fn new(
        info: impl Into<Info>,
        local_datum: LocalDatum,
        unit: Unit,
        axes: Vec<AxisInfo>,
    ) -> Result<Self> {
        if axes.is_empty() {
            return Err(CrsError::parse("LOCAL_CS requires at least one AXIS"));
        }
        Ok(Self {
            info: info.into(),
            local_datum,
            unit,
            axes,
            cache: Default::default(),
        })
    }

    pub fn info(&self) -> &Info {
        &self.info
    }

    pub fn local_datum(&self) -> &LocalDatum {
        &self.local_datum
    }

    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    pub fn axes(&self) -> &[AxisInfo] {
        &self.axes
    }
}

impl CoordinateSystemTrait for LocalCoordinateSystem {
    fn dimension(&self) -> usize {
        self.axes.len()
    }

    fn get_axis(&self, index: usize) -> Option<&AxisInfo> {
        self.axes.get(index)
    }

    fn get_units(&self, index: usize) -> Option<&Unit> {
        (index < self.dimension()).then_some(&self.unit)
    }
}

impl ToWkt for LocalCoordinateSystem {
    fn wkt_typename(&self) -> &'static str {
        "LOCAL_CS"
    }

    fn type_name(&self) -> &'static str {
        "LocalCoordinateSystem"
    }

    fn wkt_content(&self) -> Vec<WktPart<'_>> {
        let mut content = vec![
            WktPart::Entity(&self.local_datum),
            WktPart::Entity(&self.unit),
        ];
        content.extend(axis_parts(&self.axes));
        content
    }

    fn wkt_info(&self) -> Option<&Info> {
        Some(&self.info)
    }

    fn wkt_cache(&self) -> &WktCache {
        &self.cache
    }
}

/// A three dimensional earth-centered cartesian system, written as
/// `GEOCCS["name",DATUM[...],PRIMEM[...],UNIT[...]]`.
#[derive(Clone)]
pub struct GeocentricCoordinateSystem {
    info: Info,
    horizontal_datum: HorizontalDatum,
    prime_meridian: PrimeMeridian,
    linear_unit: LinearUnit,
    axes: Option<[AxisInfo; 3]>,
    cache: WktCache,
}

impl GeocentricCoordinateSystem {
    pub fn new(
        info: impl Into<Info>,
        horizontal_datum: HorizontalDatum,
        prime_meridian: PrimeMeridian,
        linear_unit: LinearUnit,
        axes: Option<[AxisInfo; 3]>,
    ) -> Self {
        Self {
            info: info.into(),
            horizontal_datum,
            prime_meridian,
            linear_unit,
            axes,
            cache: Default::default(),
        }
    }

    pub fn info(&self) -> &Info {
        &self.info
    }

    pub fn horizontal_datum(&self) -> &HorizontalDatum {
        &self.horizontal_datum
    }

    pub fn prime_meridian(&self) -> &PrimeMeridian {
        &self.prime_meridian
    }

    pub fn linear_unit(&self) -> &LinearUnit {
        &self.linear_unit
    }
}

impl CoordinateSystemTrait for GeocentricCoordinateSystem {
    fn dimension(&self) -> usize {
        3
    }

    fn get_axis(&self, index: usize) -> Option<&AxisInfo> {
        self.axes.as_ref()?.get(index)
    }

    fn get_units(&self, index: usize) -> Option<&Unit> {
        (index < 3).then_some(&self.linear_unit)
    }
}

impl ToWkt for GeocentricCoordinateSystem {
    fn wkt_typename(&self) -> &'static str {
        "GEOCCS"
    }

    fn type_name(&self) -> &'static str {
        "GeocentricCoordinateSystem"
    }

    fn wkt_content(&self) -> Vec<WktPart<'_>> {
        let mut content = vec![
            WktPart::Entity(&self.horizontal_datum),
            WktPart::Entity(&self.prime_meridian),
            WktPart::Entity(&self.linear_unit),
        ];
        if let Some(axes) = &self.axes {
            content.extend(axis_parts(axes));
        }
        content
    }

    fn wkt_info(&self) -> Option<&Info> {
        Some(&self.info)
    }

    fn wkt_cache(&self) -> &WktCache {
        &self.cache
    }
}

/// A one dimensional system for heights or depths, written as
/// `VERT_CS["name",VERT_DATUM[...],UNIT[...]]`.
#[derive(Clone)]
pub struct VerticalCoordinateSystem {
    info: Info,
    vertical_datum: VerticalDatum,
    vertical_unit: LinearUnit,
    axis: Option<AxisInfo>,
    cache: WktCache,
}

impl VerticalCoordinateSystem {
    pub fn new(
        info: impl Into<Info>,
        vertical_datum: VerticalDatum,
        vertical_unit: LinearUnit,
        axis: Option<AxisInfo>,
    ) -> Self {
        Self {
            info: info.into(),
            vertical_datum,
            vertical_unit,
            axis,
            cache: Default::default(),
        }
    }

    pub fn info(&self) -> &Info {
        &self.info
    }

    pub fn vertical_datum(&self) -> &VerticalDatum {
        &self.vertical_datum
    }

    pub fn vertical_unit(&self) -> &LinearUnit {
        &self.vertical_unit
    }
}

impl CoordinateSystemTrait for VerticalCoordinateSystem {
    fn dimension(&self) -> usize {
        1
    }

    fn get_axis(&self, index: usize) -> Option<&AxisInfo> {
        self.axis.as_ref().filter(|_| index == 0)
    }

    fn get_units(&self, index: usize) -> Option<&Unit> {
        (index == 0).then_some(&self.vertical_unit)
    }
}

impl ToWkt for VerticalCoordinateSystem {
    fn wkt_typename(&self) -> &'static str {
        "VERT_CS"
    }

    fn type_name(&self) -> &'static str {
        "VerticalCoordinateSystem"
    }

    fn wkt_content(&self) -> Vec<WktPart<'_>> {
        let mut content = vec![
            WktPart::Entity(&self.vertical_datum),
            WktPart::Entity(&self.vertical_unit),
        ];
        if let Some(axis) = &self.axis {
            content.push(WktPart::Entity(axis));
        }
        content
    }

    fn wkt_info(&self) -> Option<&Info> {
        Some(&self.info)
    }

    fn wkt_cache(&self) -> &WktCache {
        &self.cache
    }
}

/// A latitude/longitude system on an ellipsoid, written as
/// `GEOGCS["name",DATUM[...],PRIMEM[...],UNIT[...]]`.
#[derive(Clone)]
pub struct GeographicCoordinateSystem {
    info: Info,
    angular_unit: AngularUnit,
    horizontal_datum: HorizontalDatum,
    prime_meridian: PrimeMeridian,
    axes: Option<[AxisInfo; 2]>,
    cache: WktCache,
}

impl GeographicCoordinateSystem {
    pub fn new(
        info: impl Into<Info>,
        angular_unit: AngularUnit,
        horizontal_datum: HorizontalDatum,
        prime_meridian: PrimeMeridian,
        axes: Option<[AxisInfo; 2]>,
    ) -> Self {
        Self {
            info: info.into(),
            angular_unit,
            horizontal_datum,
            prime_meridian,
            axes,
            cache: Default::default(),
        }
    }

    pub fn info(&self) -> &Info {
        &self.info
    }

    pub fn angular_unit(&self) -> &AngularUnit {
        &self.angular_unit
    }

    pub fn horizontal_datum(&self) -> &HorizontalDatum {
        &self.horizontal_datum
    }

    pub fn prime_meridian(&self) -> &PrimeMeridian {
        &self.prime_meridian
    }

    /// The datum shift to WGS84 declared on the horizontal datum.
    pub fn wgs84_conversion_info(&self) -> Option<&Wgs84ConversionInfo> {
        self.horizontal_datum.wgs84_parameters()
    }
}

impl CoordinateSystemTrait for GeographicCoordinateSystem {
    fn dimension(&self) -> usize {
        2
    }

    fn get_axis(&self, index: usize) -> Option<&AxisInfo> {
        self.axes.as_ref()?.get(index)
    }

    fn get_units(&self, index: usize) -> Option<&Unit> {
        (index < 2).then_some(&self.angular_unit)
    }
}

impl ToWkt for GeographicCoordinateSystem {
    fn wkt_typename(&self) -> &'static str {
        "GEOGCS"
    }

    fn type_name(&self) -> &'static str {
        "GeographicCoordinateSystem"
    }

    fn wkt_content(&self) -> Vec<WktPart<'_>> {
        let mut content = vec![
            WktPart::Entity(&self.horizontal_datum),
            WktPart::Entity(&self.prime_meridian),
            WktPart::Entity(&self.angular_unit),
        ];
        if let Some(axes) = &self.axes {
            content.extend(axis_parts(axes));
        }
        content
    }

    fn wkt_info(&self) -> Option<&Info> {
        Some(&self.info)
    }

    fn wkt_cache(&self) -> &WktCache {
        &self.cache
    }
}

/// A planar system derived from a geographic one by a projection, written as
/// `PROJCS["name",GEOGCS[...],PROJECTION[...],PARAMETER[...],...,UNIT[...]]`.
#[derive(Clone)]
pub struct ProjectedCoordinateSystem {
    info: Info,
    geographic_coordinate_system: GeographicCoordinateSystem,
    projection: Projection,
    linear_unit: LinearUnit,
    axes: Option<[AxisInfo; 2]>,
    cache: WktCache,
}

impl ProjectedCoordinateSystem {
    pub fn new(
        info: impl Into<Info>,
        geographic_coordinate_system: GeographicCoordinateSystem,
        projection: Projection,
        linear_unit: LinearUnit,
        axes: Option<[AxisInfo; 2]>,
    ) -> Self {
        Self {
            info: info.into(),
            geographic_coordinate_system,
            projection,
            linear_unit,
            axes,
            cache: Default::default(),
        }
    }

    pub fn info(&self) -> &Info {
        &self.info
    }

    pub fn geographic_coordinate_system(&self) -> &GeographicCoordinateSystem {
        &self.geographic_coordinate_system
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    pub fn linear_unit(&self) -> &LinearUnit {
        &self.linear_unit
    }

    /// The horizontal datum of the underlying geographic system.
    pub fn horizontal_datum(&self) -> &HorizontalDatum {
        self.geographic_coordinate_system.horizontal_datum()
    }
}

impl CoordinateSystemTrait for ProjectedCoordinateSystem {
    fn dimension(&self) -> usize {
        2
    }

    fn get_axis(&self, index: usize) -> Option<&AxisInfo> {
        self.axes.as_ref()?.get(index)
    }

    fn get_units(&self, index: usize) -> Option<&Unit> {
        (index < 2).then_some(&self.linear_unit)
    }
}

impl ToWkt for ProjectedCoordinateSystem {
    fn wkt_typename(&self) -> &'static str {
        "PROJCS"
    }

    fn type_name(&self) -> &'static str {
        "ProjectedCoordinateSystem"
    }

    fn wkt_content(&self) -> Vec<WktPart<'_>> {
        let mut content = vec![
            WktPart::Entity(&self.geographic_coordinate_system),
            WktPart::Entity(&self.projection),
        ];
        content.extend(
            self.projection
                .iter()
                .map(|parameter| WktPart::Entity(parameter)),
        );
        content.push(WktPart::Entity(&self.linear_unit));
        if let Some(axes) = &self.axes {
            content.extend(axis_parts(axes));
        }
        content
    }

    fn wkt_info(&self) -> Option<&Info> {
        Some(&self.info)
    }

    fn wkt_cache(&self) -> &WktCache {
        &self.cache
    }
}

/// Two coordinate systems combined, e.g. a projected system with a vertical one, written as
/// `COMPD_CS["name",<head>,<tail>]`.
#[derive(Clone)]
pub struct CompoundCoordinateSystem {
    info: Info,
    head: Box<CoordinateSystem>,
    tail: Box<CoordinateSystem>,
    cache: WktCache,
}

impl CompoundCoordinateSystem {
    pub fn new(info: impl Into<Info>, head: CoordinateSystem, tail: CoordinateSystem) -> Self {
        Self {
            info: info.into(),
            head: Box::new(head),
            tail: Box::new(tail),
            cache: Default::default(),
        }
    }

    pub fn info(&self) -> &Info {
        &self.info
    }

    pub fn head(&self) -> &CoordinateSystem {
        &self.head
    }

    pub fn tail(&self) -> &CoordinateSystem {
        &self.tail
    }
}

impl CoordinateSystemTrait for CompoundCoordinateSystem {
    fn dimension(&self) -> usize {
        self.head.dimension() + self.tail.dimension()
    }

    fn get_axis(&self, index: usize) -> Option<&AxisInfo> {
        let head_dimension = self.head.dimension();
        if index < head_dimension {
            self.head.get_axis(index)
        } else {
            self.tail.get_axis(index - head_dimension)
        }
    }

    fn get_units(&self, index: usize) -> Option<&Unit> {
        let head_dimension = self.head.dimension();
        if index < head_dimension {
            self.head.get_units(index)
        } else {
            self.tail.get_units(index - head_dimension)
        }
    }
}

impl ToWkt for CompoundCoordinateSystem {
    fn wkt_typename(&self) -> &'static str {
        "COMPD_CS"
    }

    fn type_name(&self) -> &'static str {
        "CompoundCoordinateSystem"
    }

    fn wkt_content(&self) -> Vec<WktPart<'_>> {
        vec![
            WktPart::Entity(self.head.as_ref()),
            WktPart::Entity(self.tail.as_ref()),
        ]
    }

    fn wkt_info(&self) -> Option<&Info> {
        Some(&self.info)
    }

    fn wkt_cache(&self) -> &WktCache {
        &self.cache
    }
}

/// A borrowed view of a two dimensional system tied to a horizontal datum.
#[derive(Debug, Clone, Copy)]
pub enum HorizontalCoordinateSystem<'a> {
    Geographic(&'a GeographicCoordinateSystem),
    Projected(&'a ProjectedCoordinateSystem),
}

impl<'a> HorizontalCoordinateSystem<'a> {
    pub fn info(&self) -> &'a Info {
        match self {
            Self::Geographic(cs) => cs.info(),
            Self::Projected(cs) => cs.info(),
        }
    }

    pub fn horizontal_datum(&self) -> &'a HorizontalDatum {
        match self {
            Self::Geographic(cs) => cs.horizontal_datum(),
            Self::Projected(cs) => cs.horizontal_datum(),
        }
    }

    pub fn dimension(&self) -> usize {
        2
    }
}

/// Any coordinate system.
#[derive(Clone)]
pub enum CoordinateSystem {
    Local(LocalCoordinateSystem),
    Geocentric(GeocentricCoordinateSystem),
    Vertical(VerticalCoordinateSystem),
    Geographic(GeographicCoordinateSystem),
    Projected(ProjectedCoordinateSystem),
    Compound(CompoundCoordinateSystem),
}

impl CoordinateSystem {
    fn as_dyn(&self) -> &dyn ToWkt {
        match self {
            Self::Local(cs) => cs,
            Self::Geocentric(cs) => cs,
            Self::Vertical(cs) => cs,
            Self::Geographic(cs) => cs,
            Self::Projected(cs) => cs,
            Self::Compound(cs) => cs,
        }
    }

    fn as_trait(&self) -> &dyn CoordinateSystemTrait {
        match self {
            Self::Local(cs) => cs,
            Self::Geocentric(cs) => cs,
            Self::Vertical(cs) => cs,
            Self::Geographic(cs) => cs,
            Self::Projected(cs) => cs,
            Self::Compound(cs) => cs,
        }
    }

    pub fn info(&self) -> &Info {
        match self {
            Self::Local(cs) => cs.info(),
            Self::Geocentric(cs) => cs.info(),
            Self::Vertical(cs) => cs.info(),
            Self::Geographic(cs) => cs.info(),
            Self::Projected(cs) => cs.info(),
            Self::Compound(cs) => cs.info(),
        }
    }

    pub fn name(&self) -> &str {
        self.info().name()
    }

    pub fn authority_code(&self) -> Option<&str> {
        self.info().authority_code()
    }

    /// The geographic or projected system behind this one, if it is horizontal.
    pub fn as_horizontal(&self) -> Option<HorizontalCoordinateSystem<'_>> {
        match self {
            Self::Geographic(cs) => Some(HorizontalCoordinateSystem::Geographic(cs)),
            Self::Projected(cs) => Some(HorizontalCoordinateSystem::Projected(cs)),
            _ => None,
        }
    }

    /// The geographic system of a geographic or projected system.
    pub fn geographic_coordinate_system(&self) -> Option<&GeographicCoordinateSystem> {
        match self {
            Self::Geographic(cs) => Some(cs),
            Self::Projected(cs) => Some(cs.geographic_coordinate_system()),
            _ => None,
        }
    }
}

impl CoordinateSystemTrait for CoordinateSystem {
    fn dimension(&self) -> usize {
        self.as_trait().dimension()
    }

    fn get_axis(&self, index: usize) -> Option<&AxisInfo> {
        self.as_trait().get_axis(index)
    }

    fn get_units(&self, index: usize) -> Option<&Unit> {
        self.as_trait().get_units(index)
    }
}

impl FromStr for CoordinateSystem {
    type Err = CrsError;

    fn from_str(s: &str) -> Result<Self> {
        crate::create_from_wkt(s)?.try_into()
    }
}

macro_rules! impl_into_coordinate_system {
    ($($ty:ident => $variant:ident),+ $(,)?) => {
        $(
            impl From<$ty> for CoordinateSystem {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }

            impl_from_entity!(
                $ty,
                Entity::CoordinateSystem(CoordinateSystem::$variant(cs)) => cs
            );
        )+
    };
}

impl_into_coordinate_system!(
    LocalCoordinateSystem => Local,
    GeocentricCoordinateSystem => Geocentric,
    VerticalCoordinateSystem => Vertical,
    GeographicCoordinateSystem => Geographic,
    ProjectedCoordinateSystem => Projected,
    CompoundCoordinateSystem => Compound,
);

delegate_to_wkt!(CoordinateSystem, |this| this.as_dyn());

impl_wkt_identity!(
    LocalCoordinateSystem,
    GeocentricCoordinateSystem,
    VerticalCoordinateSystem,
    GeographicCoordinateSystem,
    ProjectedCoordinateSystem,
    CompoundCoordinateSystem,
    CoordinateSystem,
);
impl_from_entity!(CoordinateSystem, Entity::CoordinateSystem(cs) => cs);

#[cfg(test)]
mod test {
    use super::*;
    use crate::cs::{datum_type, AxisOrientation, Ellipsoid, ProjectionParameter};

    fn wgs84() -> GeographicCoordinateSystem {
        let ellipsoid = Ellipsoid::from_flattened_sphere(
            Info::new("WGS 84").with_authority("EPSG", "7030"),
            6378137.0,
            298.257223563,
            None,
        );
        let datum = HorizontalDatum::new(
            Info::new("WGS_1984").with_authority("EPSG", "6326"),
            datum_type::HD_CLASSIC,
            ellipsoid,
            Some(Wgs84ConversionInfo::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0)),
        );
        GeographicCoordinateSystem::new(
            Info::new("WGS 84").with_authority("EPSG", "4326"),
            AngularUnit::new("degree", 0.0174532925199433),
            datum,
            PrimeMeridian::new("Greenwich", None, 0.0),
            Some([
                AxisInfo::new("Lat", AxisOrientation::North),
                AxisInfo::new("Long", AxisOrientation::East),
            ]),
        )
    }

    fn navd88() -> VerticalCoordinateSystem {
        VerticalCoordinateSystem::new(
            "NAVD88",
            VerticalDatum::new("North American Vertical Datum 1988", datum_type::VD_ORTHOMETRIC),
            LinearUnit::new("metre", 1.0),
            Some(AxisInfo::new("Up", AxisOrientation::Up)),
        )
    }

    #[test]
    fn geographic_wkt_and_accessors() {
        let cs = wgs84();
        assert_eq!(
            cs.to_wkt(true),
            r#"GEOGCS["WGS 84",DATUM["WGS_1984",SPHEROID["WGS 84",6378137.0,298.257223563,AUTHORITY["EPSG","7030"]],TOWGS84[0.0,0.0,0.0,0.0,0.0,0.0,0.0],AUTHORITY["EPSG","6326"]],PRIMEM["Greenwich",0.0],UNIT["degree",0.0174532925199433],AXIS["Lat",NORTH],AXIS["Long",EAST],AUTHORITY["EPSG","4326"]]"#
        );
        assert_eq!(cs.dimension(), 2);
        assert_eq!(cs.get_axis(1).unwrap().name(), "Long");
        assert!(cs.get_axis(2).is_none());
        assert_eq!(cs.get_units(0).unwrap().name(), "degree");
        assert!(cs.get_units(2).is_none());
        assert_eq!(cs.wgs84_conversion_info().unwrap().ppm(), 0.0);
    }

    #[test]
    fn projected_writes_parameters_after_projection() {
        let projection = Projection::new(
            "Mercator_1SP",
            "Mercator_1SP",
            vec![ProjectionParameter::new("central_meridian", 0.0)],
        );
        let cs = ProjectedCoordinateSystem::new(
            "World Mercator",
            wgs84(),
            projection,
            LinearUnit::new("metre", 1.0),
            None,
        );
        let wkt = cs.to_wkt(true);
        assert!(wkt.contains(
            r#"PROJECTION["Mercator_1SP"],PARAMETER["central_meridian",0.0],UNIT["metre",1.0]]"#
        ));
        assert_eq!(cs.horizontal_datum().name(), "WGS_1984");
        assert!(cs.get_axis(0).is_none());
        assert_eq!(cs.get_units(1).unwrap().kind(), crate::cs::UnitKind::Linear);
    }

    #[test]
    fn compound_delegates_by_index() {
        let compound = CompoundCoordinateSystem::new(
            "WGS 84 + NAVD88",
            wgs84().into(),
            navd88().into(),
        );
        assert_eq!(compound.dimension(), 3);
        assert_eq!(compound.get_axis(0).unwrap().name(), "Lat");
        assert_eq!(compound.get_axis(2).unwrap().name(), "Up");
        assert!(compound.get_axis(3).is_none());
        assert_eq!(compound.get_units(1).unwrap().name(), "degree");
        assert_eq!(compound.get_units(2).unwrap().name(), "metre");
        assert!(compound.to_wkt(false).starts_with(r#"COMPD_CS("WGS 84 + NAVD88",GEOGCS("#));
    }

    #[test]
    fn vertical_has_one_dimension() {
        let cs = navd88();
        assert_eq!(cs.dimension(), 1);
        assert_eq!(cs.get_axis(0).unwrap().orientation(), AxisOrientation::Up);
        assert!(cs.get_axis(1).is_none());
        assert_eq!(
            cs.to_wkt(true),
            r#"VERT_CS["NAVD88",VERT_DATUM["North American Vertical Datum 1988",2001],UNIT["metre",1.0],AXIS["Up",UP]]"#
        );
    }

    #[test]
    fn local_requires_an_axis() {
        let datum = LocalDatum::new("Site", datum_type::LD_MIN);
        let unit = Unit::new("metre", 1.0);
        assert!(LocalCoordinateSystem::new("Site", datum.clone(), unit.clone(), vec![]).is_err());

        let cs = LocalCoordinateSystem::new(
            "Site",
            datum,
            unit,
            vec![
                AxisInfo::new("X", AxisOrientation::East),
                AxisInfo::new("Y", AxisOrientation::North),
                AxisInfo::new("Z", AxisOrientation::Up),
            ],
        )
        .unwrap();
        assert_eq!(cs.dimension(), 3);
        assert_eq!(cs.get_units(2).unwrap().name(), "metre");
    }

    #[test]
    fn horizontal_view() {
        let cs = CoordinateSystem::from(wgs84());
        let horizontal = cs.as_horizontal().unwrap();
        assert_eq!(horizontal.horizontal_datum().name(), "WGS_1984");
        assert_eq!(horizontal.dimension(), 2);
        assert_eq!(cs.authority_code(), Some("4326"));
        assert!(CoordinateSystem::from(navd88()).as_horizontal().is_none());
    }

    #[test]
    fn enum_equality_follows_wkt() {
        let a = CoordinateSystem::from(wgs84());
        let b = CoordinateSystem::from(wgs84());
        assert_eq!(a, b);
        assert_ne!(a, CoordinateSystem::from(navd88()));
    }
}
