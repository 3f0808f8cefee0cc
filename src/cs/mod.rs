//! The coordinate system entity model.
//!
//! Every entity is immutable once built and is created through its constructor functions.
//! Equality, hashing, [`Display`](std::fmt::Display) and serde support are all derived from the
//! canonical WKT text: two entities are equal exactly when they are of the same concrete type
//! and render to the same WKT.

/// Implements equality, hashing, formatting and serde on top of [`ToWkt`](crate::wkt::ToWkt).
macro_rules! impl_wkt_identity {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl PartialEq for $ty {
                fn eq(&self, other: &Self) -> bool {
                    $crate::wkt::ToWkt::type_name(self) == $crate::wkt::ToWkt::type_name(other)
                        && $crate::wkt::ToWkt::to_wkt(self, true)
                            == $crate::wkt::ToWkt::to_wkt(other, true)
                }
            }

            impl Eq for $ty {}

            impl std::hash::Hash for $ty {
                fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                    state.write_u64($crate::wkt::ToWkt::wkt_hash(self));
                }
            }

            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(&$crate::wkt::ToWkt::to_wkt(self, false))
                }
            }

            impl std::fmt::Debug for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    let wkt = $crate::wkt::ToWkt::to_wkt(self, true);
                    f.debug_tuple($crate::wkt::ToWkt::type_name(self))
                        .field(&format_args!("{}", wkt))
                        .finish()
                }
            }

            impl serde::Serialize for $ty {
                fn serialize<S: serde::Serializer>(
                    &self,
                    serializer: S,
                ) -> std::result::Result<S::Ok, S::Error> {
                    serializer.serialize_str(&$crate::wkt::ToWkt::to_wkt(self, true))
                }
            }

            impl<'de> serde::Deserialize<'de> for $ty {
                fn deserialize<D: serde::Deserializer<'de>>(
                    deserializer: D,
                ) -> std::result::Result<Self, D::Error> {
                    let wkt = <String as serde::Deserialize>::deserialize(deserializer)?;
                    let entity = $crate::create_from_wkt(&wkt).map_err(serde::de::Error::custom)?;
                    <Self as TryFrom<$crate::cs::Entity>>::try_from(entity)
                        .map_err(serde::de::Error::custom)
                }
            }
        )+
    };
}

/// Implements [`ToWkt`](crate::wkt::ToWkt) for a wrapper by forwarding every method to the
/// entity returned by `$inner`.
macro_rules! delegate_to_wkt {
    ($ty:ty, |$this:ident| $inner:expr) => {
        impl $crate::wkt::ToWkt for $ty {
            fn wkt_typename(&self) -> &'static str {
                let $this = self;
                $crate::wkt::ToWkt::wkt_typename($inner)
            }

            fn type_name(&self) -> &'static str {
                let $this = self;
                $crate::wkt::ToWkt::type_name($inner)
            }

            fn wkt_content(&self) -> Vec<$crate::wkt::WktPart<'_>> {
                let $this = self;
                $crate::wkt::ToWkt::wkt_content($inner)
            }

            fn wkt_info(&self) -> Option<&$crate::cs::Info> {
                let $this = self;
                $crate::wkt::ToWkt::wkt_info($inner)
            }

            fn wkt_cache(&self) -> &$crate::wkt::WktCache {
                let $this = self;
                $crate::wkt::ToWkt::wkt_cache($inner)
            }

            fn write_wkt(&self, out: &mut String, standard_brackets: bool) {
                let $this = self;
                $crate::wkt::ToWkt::write_wkt($inner, out, standard_brackets)
            }
        }
    };
}

/// Implements [`FromEntity`] and `TryFrom<Entity>` for the entity variant matched by
/// `$pattern`.
macro_rules! impl_from_entity {
    ($ty:ident, $pattern:pat $(if $guard:expr)? => $inner:expr) => {
        impl $crate::cs::FromEntity for $ty {
            const TYPE_NAME: &'static str = stringify!($ty);

            fn from_entity(
                entity: $crate::cs::Entity,
            ) -> std::result::Result<Self, $crate::cs::Entity> {
                match entity {
                    $pattern $(if $guard)? => Ok($inner),
                    other => Err(other),
                }
            }
        }

        impl TryFrom<$crate::cs::Entity> for $ty {
            type Error = $crate::error::CrsError;

            fn try_from(entity: $crate::cs::Entity) -> $crate::error::Result<Self> {
                <Self as $crate::cs::FromEntity>::from_entity(entity).map_err(|other| {
                    $crate::error::CrsError::TypeMismatch {
                        expected: stringify!($ty),
                        found: $crate::wkt::ToWkt::type_name(&other),
                    }
                })
            }
        }
    };
}

mod axis;
mod coordinate_system;
mod datum;
mod ellipsoid;
mod entity;
mod info;
mod prime_meridian;
mod projection;
mod unit;

pub use axis::{AxisInfo, AxisOrientation};
pub use coordinate_system::{
    CompoundCoordinateSystem, CoordinateSystem, CoordinateSystemTrait,
    GeocentricCoordinateSystem, GeographicCoordinateSystem, HorizontalCoordinateSystem,
    LocalCoordinateSystem, ProjectedCoordinateSystem, VerticalCoordinateSystem,
};
pub use datum::{datum_type, Datum, HorizontalDatum, LocalDatum, VerticalDatum, Wgs84ConversionInfo};
pub use ellipsoid::Ellipsoid;
pub use entity::Entity;
pub(crate) use entity::FromEntity;
pub use info::Info;
pub use prime_meridian::PrimeMeridian;
pub use projection::{Projection, ProjectionParameter};
pub use unit::{AngularUnit, LinearUnit, Unit, UnitKind};
