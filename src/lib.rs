//! Parse, model and write coordinate system definitions in OGC Well-Known Text (WKT 1), the
//! text format used by the OpenGIS Coordinate Transformation Service and carried in `.prj`
//! files and SRS tables.
//!
//! ```
//! use wkt_crs::cs::CoordinateSystemTrait;
//! use wkt_crs::wkt::ToWkt;
//!
//! let wkt = r#"GEOGCS["WGS 84",DATUM["WGS_1984",SPHEROID["WGS 84",6378137.0,298.257223563]],PRIMEM["Greenwich",0.0],UNIT["degree",0.0174532925199433]]"#;
//! let cs = wkt_crs::create_coordinate_system(wkt).unwrap();
//! assert_eq!(cs.name(), "WGS 84");
//! assert_eq!(cs.dimension(), 2);
//! assert_eq!(cs.to_wkt(true), wkt);
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub mod cs;
pub mod error;
mod source;
pub mod wkt;

pub use cs::{CoordinateSystem, Entity};
pub use error::{CrsError, Result};
pub use source::CoordinateSystemSource;

/// Parse one WKT definition into the entity it describes.
///
/// The text must hold exactly one top-level clause. Any keyword from the grammar may be the
/// root, so `UNIT["metre",1.0]` yields a [`cs::Unit`] just as `PROJCS[...]` yields a
/// [`CoordinateSystem`].
pub fn create_from_wkt(text: &str) -> Result<Entity> {
    log::debug!("parsing WKT definition of {} bytes", text.len());
    wkt::Parser::new(text)?.parse_entity()
}

/// Parse a WKT definition that must describe a coordinate system.
pub fn create_coordinate_system(text: &str) -> Result<CoordinateSystem> {
    create_from_wkt(text)?.into_coordinate_system()
}
