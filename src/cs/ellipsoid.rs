use crate::cs::{Entity, Info, LinearUnit};
use crate::wkt::{ToWkt, WktCache, WktPart};

/// An approximation of the Earth's surface as a squashed sphere, written as
/// `SPHEROID["name",semi_major_axis,inverse_flattening]`.
#[derive(Clone)]
pub struct Ellipsoid {
    info: Info,
    semi_major_axis: f64,
    semi_minor_axis: f64,
    inverse_flattening: f64,
    ivf_definitive: bool,
    axis_unit: Option<LinearUnit>,
    cache: WktCache,
}

impl Ellipsoid {
    /// Create an ellipsoid with every field given explicitly.
    pub fn new(
        info: impl Into<Info>,
        semi_major_axis: f64,
        semi_minor_axis: f64,
        inverse_flattening: f64,
        ivf_definitive: bool,
        axis_unit: Option<LinearUnit>,
    ) -> Self {
        Self {
            info: info.into(),
            semi_major_axis,
            semi_minor_axis,
            inverse_flattening,
            ivf_definitive,
            axis_unit,
            cache: Default::default(),
        }
    }

    /// Create an ellipsoid from its two axes.
    ///
    /// The inverse flattening is derived as `a / (a - b)`, or `0.0` for a sphere.
    pub fn from_axes(
        info: impl Into<Info>,
        semi_major_axis: f64,
        semi_minor_axis: f64,
        axis_unit: Option<LinearUnit>,
    ) -> Self {
        let mut inverse_flattening = semi_major_axis / (semi_major_axis - semi_minor_axis);
        if !inverse_flattening.is_finite() {
            inverse_flattening = 0.0;
        }
        Self::new(
            info,
            semi_major_axis,
            semi_minor_axis,
            inverse_flattening,
            false,
            axis_unit,
        )
    }

    /// Create an ellipsoid from its semi-major axis and inverse flattening.
    ///
    /// The semi-minor axis is derived as `a - a / ivf`; an inverse flattening of `0.0` denotes a
    /// sphere.
    pub fn from_flattened_sphere(
        info: impl Into<Info>,
        semi_major_axis: f64,
        inverse_flattening: f64,
        axis_unit: Option<LinearUnit>,
    ) -> Self {
        let mut semi_minor_axis = semi_major_axis - semi_major_axis / inverse_flattening;
        if !semi_minor_axis.is_finite() {
            semi_minor_axis = semi_major_axis;
        }
        Self::new(
            info,
            semi_major_axis,
            semi_minor_axis,
            inverse_flattening,
            true,
            axis_unit,
        )
    }

    pub fn info(&self) -> &Info {
        &self.info
    }

    pub fn name(&self) -> &str {
        self.info.name()
    }

    pub fn semi_major_axis(&self) -> f64 {
        self.semi_major_axis
    }

    pub fn semi_minor_axis(&self) -> f64 {
        self.semi_minor_axis
    }

    pub fn inverse_flattening(&self) -> f64 {
        self.inverse_flattening
    }

    /// Whether the inverse flattening, rather than the semi-minor axis, is the defining value.
    pub fn ivf_definitive(&self) -> bool {
        self.ivf_definitive
    }

    pub fn axis_unit(&self) -> Option<&LinearUnit> {
        self.axis_unit.as_ref()
    }
}

impl ToWkt for Ellipsoid {
    fn wkt_typename(&self) -> &'static str {
        "SPHEROID"
    }

    fn type_name(&self) -> &'static str {
        "Ellipsoid"
    }

    fn wkt_content(&self) -> Vec<WktPart<'_>> {
        let mut content = vec![
            WktPart::Number(self.semi_major_axis),
            WktPart::Number(self.inverse_flattening),
        ];
        if let Some(unit) = &self.axis_unit {
            content.push(WktPart::Entity(unit));
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

impl_wkt_identity!(Ellipsoid);
impl_from_entity!(Ellipsoid, Entity::Ellipsoid(ellipsoid) => ellipsoid);
