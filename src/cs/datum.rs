use crate::cs::{Ellipsoid, Entity, Info};
use crate::wkt::{brackets, write_content, ToWkt, WktCache, WktPart};

/// Numeric datum type codes.
///
/// Horizontal datums use `HD_MIN..=HD_MAX`, vertical datums `VD_MIN..=VD_MAX` and local datums
/// `LD_MIN..=LD_MAX`.
pub mod datum_type {
    pub const HD_MIN: i32 = 1000;
    /// Unspecified horizontal datum type.
    pub const HD_OTHER: i32 = 1000;
    /// Positions are defined by latitude and longitude on an ellipsoid.
    pub const HD_CLASSIC: i32 = 1001;
    /// A horizontal datum created by projecting a geocentric datum onto an ellipsoid.
    pub const HD_GEOCENTRIC: i32 = 1002;
    pub const HD_MAX: i32 = 1999;

    pub const VD_MIN: i32 = 2000;
    /// Unspecified vertical datum type.
    pub const VD_OTHER: i32 = 2000;
    /// Linked to the Earth's gravity field, e.g. mean sea level.
    pub const VD_ORTHOMETRIC: i32 = 2001;
    /// Heights measured along the normal to an ellipsoid.
    pub const VD_ELLIPSOIDAL: i32 = 2002;
    /// Heights derived from atmospheric pressure.
    pub const VD_ALTITUDE_BAROMETRIC: i32 = 2003;
    /// A normal height system.
    pub const VD_NORMAL: i32 = 2004;
    /// Heights relative to a geoid model derived from an ellipsoidal system.
    pub const VD_GEOID_MODEL_DERIVED: i32 = 2005;
    /// Depths measured below a surface, e.g. for bathymetry.
    pub const VD_DEPTH: i32 = 2006;
    pub const VD_MAX: i32 = 2999;

    pub const LD_MIN: i32 = 10000;
    pub const LD_MAX: i32 = 32767;
}

/// Bursa-Wolf parameters for shifting a horizontal datum to WGS84.
///
/// Written as `TOWGS84[dx,dy,dz,ex,ey,ez,ppm]` with no name.
#[derive(Clone)]
pub struct Wgs84ConversionInfo {
    dx: f64,
    dy: f64,
    dz: f64,
    ex: f64,
    ey: f64,
    ez: f64,
    ppm: f64,
    cache: WktCache,
}

impl Wgs84ConversionInfo {
    /// Translations are in meters, rotations in arc-seconds, scale in parts per million.
    #[allow(clippy::too_many_arguments)]
    pub fn new(dx: f64, dy: f64, dz: f64, ex: f64, ey: f64, ez: f64, ppm: f64) -> Self {
        Self {
            dx,
            dy,
            dz,
            ex,
            ey,
            ez,
            ppm,
            cache: Default::default(),
        }
    }

    pub fn dx(&self) -> f64 {
        self.dx
    }

    pub fn dy(&self) -> f64 {
        self.dy
    }

    pub fn dz(&self) -> f64 {
        self.dz
    }

    pub fn ex(&self) -> f64 {
        self.ex
    }

    pub fn ey(&self) -> f64 {
        self.ey
    }

    pub fn ez(&self) -> f64 {
        self.ez
    }

    pub fn ppm(&self) -> f64 {
        self.ppm
    }

    /// All seven parameters in WKT order.
    pub fn parameters(&self) -> [f64; 7] {
        [
            self.dx, self.dy, self.dz, self.ex, self.ey, self.ez, self.ppm,
        ]
    }
}

impl From<[f64; 7]> for Wgs84ConversionInfo {
    fn from([dx, dy, dz, ex, ey, ez, ppm]: [f64; 7]) -> Self {
        Self::new(dx, dy, dz, ex, ey, ez, ppm)
    }
}

impl ToWkt for Wgs84ConversionInfo {
    fn wkt_typename(&self) -> &'static str {
        "TOWGS84"
    }

    fn type_name(&self) -> &'static str {
        "Wgs84ConversionInfo"
    }

    fn wkt_content(&self) -> Vec<WktPart<'_>> {
        self.parameters().into_iter().map(WktPart::Number).collect()
    }

    fn wkt_info(&self) -> Option<&Info> {
        None
    }

    fn wkt_cache(&self) -> &WktCache {
        &self.cache
    }

    // No name, so the content list starts right after the bracket.
    fn write_wkt(&self, out: &mut String, standard_brackets: bool) {
        let (open, close) = brackets(standard_brackets);
        let mut content = String::new();
        write_content(&mut content, &self.wkt_content(), standard_brackets);
        out.push_str(self.wkt_typename());
        out.push(open);
        out.push_str(content.strip_prefix(',').unwrap_or(&content));
        out.push(close);
    }
}

/// A datum defining the position of an ellipsoid relative to the Earth, e.g.
/// `DATUM["WGS_1984",SPHEROID[...],TOWGS84[...]]`.
#[derive(Clone)]
pub struct HorizontalDatum {
    info: Info,
    datum_type: i32,
    ellipsoid: Ellipsoid,
    wgs84_parameters: Option<Wgs84ConversionInfo>,
    cache: WktCache,
}

impl HorizontalDatum {
    /// `datum_type` is expected in `HD_MIN..=HD_MAX`, usually [`datum_type::HD_CLASSIC`].
    pub fn new(
        info: impl Into<Info>,
        datum_type: i32,
        ellipsoid: Ellipsoid,
        wgs84_parameters: Option<Wgs84ConversionInfo>,
    ) -> Self {
        Self {
            info: info.into(),
            datum_type,
            ellipsoid,
            wgs84_parameters,
            cache: Default::default(),
        }
    }

    pub fn info(&self) -> &Info {
        &self.info
    }

    pub fn name(&self) -> &str {
        self.info.name()
    }

    pub fn datum_type(&self) -> i32 {
        self.datum_type
    }

    pub fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }

    pub fn wgs84_parameters(&self) -> Option<&Wgs84ConversionInfo> {
        self.wgs84_parameters.as_ref()
    }
}

impl ToWkt for HorizontalDatum {
    fn wkt_typename(&self) -> &'static str {
        "DATUM"
    }

    fn type_name(&self) -> &'static str {
        "HorizontalDatum"
    }

    fn wkt_content(&self) -> Vec<WktPart<'_>> {
        let mut content = vec![WktPart::Entity(&self.ellipsoid)];
        if let Some(wgs84) = &self.wgs84_parameters {
            content.push(WktPart::Entity(wgs84));
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

/// A datum for heights, written as `VERT_DATUM["name",type]`.
#[derive(Clone)]
pub struct VerticalDatum {
    info: Info,
    datum_type: i32,
    cache: WktCache,
}

impl VerticalDatum {
    /// `datum_type` is expected in `VD_MIN..=VD_MAX`.
    pub fn new(info: impl Into<Info>, datum_type: i32) -> Self {
        Self {
            info: info.into(),
            datum_type,
            cache: Default::default(),
        }
    }

    pub fn info(&self) -> &Info {
        &self.info
    }

    pub fn name(&self) -> &str {
        self.info.name()
    }

    pub fn datum_type(&self) -> i32 {
        self.datum_type
    }
}

impl ToWkt for VerticalDatum {
    fn wkt_typename(&self) -> &'static str {
        "VERT_DATUM"
    }

    fn type_name(&self) -> &'static str {
        "VerticalDatum"
    }

    fn wkt_content(&self) -> Vec<WktPart<'_>> {
        vec![WktPart::Integer(self.datum_type)]
    }

    fn wkt_info(&self) -> Option<&Info> {
        Some(&self.info)
    }

    fn wkt_cache(&self) -> &WktCache {
        &self.cache
    }
}

/// A datum for a local, non-georeferenced system, written as `LOCAL_DATUM["name",type]`.
#[derive(Clone)]
pub struct LocalDatum {
    info: Info,
    datum_type: i32,
    cache: WktCache,
}

impl LocalDatum {
    /// `datum_type` is expected in `LD_MIN..=LD_MAX`.
    pub fn new(info: impl Into<Info>, datum_type: i32) -> Self {
        Self {
            info: info.into(),
            datum_type,
            cache: Default::default(),
        }
    }

    pub fn info(&self) -> &Info {
        &self.info
    }

    pub fn name(&self) -> &str {
        self.info.name()
    }

    pub fn datum_type(&self) -> i32 {
        self.datum_type
    }
}

impl ToWkt for LocalDatum {
    fn wkt_typename(&self) -> &'static str {
        "LOCAL_DATUM"
    }

    fn type_name(&self) -> &'static str {
        "LocalDatum"
    }

    fn wkt_content(&self) -> Vec<WktPart<'_>> {
        vec![WktPart::Integer(self.datum_type)]
    }

    fn wkt_info(&self) -> Option<&Info> {
        Some(&self.info)
    }

    fn wkt_cache(&self) -> &WktCache {
        &self.cache
    }
}

/// Any datum.
#[derive(Clone)]
pub enum Datum {
    Horizontal(HorizontalDatum),
    Vertical(VerticalDatum),
    Local(LocalDatum),
}

impl Datum {
    fn as_dyn(&self) -> &dyn ToWkt {
        match self {
            Datum::Horizontal(datum) => datum,
            Datum::Vertical(datum) => datum,
            Datum::Local(datum) => datum,
        }
    }

    pub fn info(&self) -> &Info {
        match self {
            Datum::Horizontal(datum) => datum.info(),
            Datum::Vertical(datum) => datum.info(),
            Datum::Local(datum) => datum.info(),
        }
    }

    pub fn datum_type(&self) -> i32 {
        match self {
            Datum::Horizontal(datum) => datum.datum_type(),
            Datum::Vertical(datum) => datum.datum_type(),
            Datum::Local(datum) => datum.datum_type(),
        }
    }
}

impl From<HorizontalDatum> for Datum {
    fn from(value: HorizontalDatum) -> Self {
        Self::Horizontal(value)
    }
}

impl From<VerticalDatum> for Datum {
    fn from(value: VerticalDatum) -> Self {
        Self::Vertical(value)
    }
}

impl From<LocalDatum> for Datum {
    fn from(value: LocalDatum) -> Self {
        Self::Local(value)
    }
}

delegate_to_wkt!(Datum, |this| this.as_dyn());

impl_wkt_identity!(
    Wgs84ConversionInfo,
    HorizontalDatum,
    VerticalDatum,
    LocalDatum,
    Datum
);
impl_from_entity!(Wgs84ConversionInfo, Entity::Wgs84ConversionInfo(info) => info);
impl_from_entity!(Datum, Entity::Datum(datum) => datum);
impl_from_entity!(HorizontalDatum, Entity::Datum(Datum::Horizontal(datum)) => datum);
impl_from_entity!(VerticalDatum, Entity::Datum(Datum::Vertical(datum)) => datum);
impl_from_entity!(LocalDatum, Entity::Datum(Datum::Local(datum)) => datum);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn towgs84_has_no_name() {
        let towgs84 = Wgs84ConversionInfo::new(375.0, -111.0, 431.0, 0.0, 0.0, 0.0, 0.0);
        assert_eq!(
            towgs84.to_wkt(true),
            "TOWGS84[375.0,-111.0,431.0,0.0,0.0,0.0,0.0]"
        );
        assert_eq!(
            towgs84.to_wkt(false),
            "TOWGS84(375.0,-111.0,431.0,0.0,0.0,0.0,0.0)"
        );
        assert_eq!(
            Wgs84ConversionInfo::from(towgs84.parameters()),
            towgs84
        );
    }

    #[test]
    fn horizontal_datum() {
        let airy = Ellipsoid::from_flattened_sphere("Airy 1830", 6377563.396, 299.3249646, None);
        let datum = HorizontalDatum::new(
            Info::new("OSGB_1936").with_authority("EPSG", "6277"),
            datum_type::HD_CLASSIC,
            airy,
            Some(Wgs84ConversionInfo::new(375.0, -111.0, 431.0, 0.0, 0.0, 0.0, 0.0)),
        );
        assert_eq!(
            datum.to_wkt(true),
            r#"DATUM["OSGB_1936",SPHEROID["Airy 1830",6377563.396,299.3249646],TOWGS84[375.0,-111.0,431.0,0.0,0.0,0.0,0.0],AUTHORITY["EPSG","6277"]]"#
        );
    }

    #[test]
    fn datum_type_codes_are_integers() {
        let vertical = VerticalDatum::new("Ordnance Datum Newlyn", datum_type::VD_GEOID_MODEL_DERIVED);
        assert_eq!(vertical.to_wkt(true), r#"VERT_DATUM["Ordnance Datum Newlyn",2005]"#);

        let local = LocalDatum::new("Site", datum_type::LD_MIN);
        assert_eq!(local.to_wkt(false), r#"LOCAL_DATUM("Site",10000)"#);
    }

    #[test]
    fn datum_enum_delegates() {
        let datum = Datum::from(VerticalDatum::new("Mean Sea Level", datum_type::VD_ORTHOMETRIC));
        assert_eq!(datum.datum_type(), 2001);
        assert_eq!(datum.info().name(), "Mean Sea Level");
        assert_eq!(datum.type_name(), "VerticalDatum");
        assert_eq!(datum.to_wkt(true), r#"VERT_DATUM["Mean Sea Level",2001]"#);
    }
}
