use crate::cs::{Entity, Info, Unit};
use crate::wkt::{ToWkt, WktCache, WktPart};

/// A meridian used to take longitude measurements from, e.g. `PRIMEM["Greenwich",0.0]`.
#[derive(Clone)]
pub struct PrimeMeridian {
    info: Info,
    angular_unit: Option<Unit>,
    longitude: f64,
    cache: WktCache,
}

impl PrimeMeridian {
    /// `longitude` is measured from Greenwich in `angular_unit`. When present the unit is written
    /// after the longitude.
    pub fn new(info: impl Into<Info>, angular_unit: Option<Unit>, longitude: f64) -> Self {
        Self {
            info: info.into(),
            angular_unit,
            longitude,
            cache: Default::default(),
        }
    }

    pub fn info(&self) -> &Info {
        &self.info
    }

    pub fn name(&self) -> &str {
        self.info.name()
    }

    pub fn angular_unit(&self) -> Option<&Unit> {
        self.angular_unit.as_ref()
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl ToWkt for PrimeMeridian {
    fn wkt_typename(&self) -> &'static str {
        "PRIMEM"
    }

    fn type_name(&self) -> &'static str {
        "PrimeMeridian"
    }

    fn wkt_content(&self) -> Vec<WktPart<'_>> {
        let mut content = vec![WktPart::Number(self.longitude)];
        if let Some(unit) = &self.angular_unit {
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

impl_wkt_identity!(PrimeMeridian);
impl_from_entity!(PrimeMeridian, Entity::PrimeMeridian(meridian) => meridian);
