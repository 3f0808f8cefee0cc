//! Recursive descent parser from WKT text to [`Entity`] values.

use phf::phf_map;

use crate::cs::{
    datum_type, AngularUnit, AxisInfo, AxisOrientation, CompoundCoordinateSystem,
    CoordinateSystem, Datum, Ellipsoid, Entity, GeocentricCoordinateSystem,
    GeographicCoordinateSystem, HorizontalDatum, Info, LinearUnit, LocalCoordinateSystem,
    LocalDatum, PrimeMeridian, ProjectedCoordinateSystem, Projection, ProjectionParameter, Unit,
    UnitKind, VerticalCoordinateSystem, VerticalDatum, Wgs84ConversionInfo,
};
use crate::error::{CrsError, Result};
use crate::wkt::binder::{
    ArgumentBinder, AuthorityClause, ExtensionClause, QuotedString, TypeString, Value,
};
use crate::wkt::tokenizer::{Token, Tokenizer};

/// Builds the value of one keyword from its arguments. The second argument is the keyword of
/// the enclosing clause, if any.
type Builder = fn(&mut ArgumentBinder, Option<&str>) -> Result<Value>;

static BUILDERS: phf::Map<&'static str, Builder> = phf_map! {
    "AUTHORITY" => build_authority as Builder,
    "EXTENSION" => build_extension as Builder,
    "AXIS" => build_axis as Builder,
    "TOWGS84" => build_towgs84 as Builder,
    "UNIT" => build_unit as Builder,
    "PARAMETER" => build_parameter as Builder,
    "PROJECTION" => build_projection as Builder,
    "SPHEROID" => build_spheroid as Builder,
    "PRIMEM" => build_primem as Builder,
    "DATUM" => build_datum as Builder,
    "VERT_DATUM" => build_vert_datum as Builder,
    "LOCAL_DATUM" => build_local_datum as Builder,
    "LOCAL_CS" => build_local_cs as Builder,
    "GEOCCS" => build_geoccs as Builder,
    "VERT_CS" => build_vert_cs as Builder,
    "GEOGCS" => build_geogcs as Builder,
    "PROJCS" => build_projcs as Builder,
    "COMPD_CS" => build_compd_cs as Builder,
};

/// Deepest clause nesting accepted. Real definitions nest about six levels.
const MAX_DEPTH: usize = 64;

/// A single-use parser over one WKT string.
pub(crate) struct Parser {
    tokenizer: Tokenizer,
}

impl Parser {
    pub(crate) fn new(input: impl Into<String>) -> Result<Self> {
        Ok(Self {
            tokenizer: Tokenizer::new(input)?,
        })
    }

    /// Parse the whole input as exactly one entity.
    pub(crate) fn parse_entity(mut self) -> Result<Entity> {
        let value = self.parse(None, 0)?;
        let trailing = self.tokenizer.current();
        if trailing != &Token::Eof {
            return Err(CrsError::parse(format!(
                "Unexpected {} after the end of the definition",
                trailing
            )));
        }
        match value {
            Value::Entity(entity) => Ok(entity),
            other => Err(CrsError::parse(format!(
                "Expected a coordinate system object, found {}",
                other
            ))),
        }
    }

    /// Parse one value: a literal, or a keyword clause built into an entity.
    fn parse(&mut self, containing_type: Option<&str>, depth: usize) -> Result<Value> {
        let keyword = match self.tokenizer.next_token()? {
            Token::QuotedString(value) => return Ok(Value::QuotedString(value)),
            Token::Number(value) => return Ok(Value::Number(value)),
            // Orientation values are bare identifiers inside AXIS.
            Token::TypeString(value) if containing_type == Some("AXIS") => {
                return Ok(Value::TypeString(value))
            }
            Token::TypeString(keyword) => keyword,
            other => {
                return Err(CrsError::parse(format!(
                    "Expected a keyword, found {}",
                    other
                )))
            }
        };

        if depth >= MAX_DEPTH {
            return Err(CrsError::parse(format!(
                "WKT nesting exceeds {} levels",
                MAX_DEPTH
            )));
        }
        let builder = *BUILDERS
            .get(keyword.as_str())
            .ok_or_else(|| CrsError::parse(format!("Unknown type {}", keyword)))?;

        let mut args = ArgumentBinder::new();
        match self.tokenizer.next_token()? {
            Token::Begin => {}
            other => {
                return Err(CrsError::parse(format!(
                    "Expected an opening bracket after {}, found {}",
                    keyword, other
                )))
            }
        }
        if self.tokenizer.current() == &Token::End {
            self.tokenizer.next_token()?;
        } else {
            loop {
                args.push(self.parse(Some(keyword.as_str()), depth + 1)?);
                match self.tokenizer.next_token()? {
                    Token::Comma => continue,
                    Token::End => break,
                    other => {
                        return Err(CrsError::parse(format!(
                            "Expected ',' or a closing bracket in {}, found {}",
                            keyword, other
                        )))
                    }
                }
            }
        }

        log::trace!("building {} from {} arguments", keyword, args.len());
        let value = builder(&mut args, containing_type)?;
        args.assert_empty()?;
        Ok(value)
    }
}

/// Shift the leading name and collect the optional `AUTHORITY` and `EXTENSION` clauses.
fn take_info(args: &mut ArgumentBinder) -> Result<Info> {
    let QuotedString(name) = args.shift()?;
    let mut info = Info::new(name);
    if let Some(AuthorityClause { name, code }) = args.find_first() {
        info = info.with_authority(name, code);
    }
    for ExtensionClause { key, value } in args.find_all::<ExtensionClause>() {
        if info.extension(&key).is_some() {
            return Err(CrsError::parse(format!(
                "Duplicate EXTENSION key \"{}\" in {}",
                key,
                info.name()
            )));
        }
        info = info.with_extension(key, value);
    }
    Ok(info)
}

fn integral(value: f64, keyword: &str) -> Result<i32> {
    if value.fract() == 0.0 && value >= i32::MIN as f64 && value <= i32::MAX as f64 {
        Ok(value as i32)
    } else {
        Err(CrsError::parse(format!(
            "{} type must be an integer, found {}",
            keyword, value
        )))
    }
}

fn entity(entity: impl Into<Entity>) -> Result<Value> {
    Ok(Value::Entity(entity.into()))
}

fn coordinate_system(cs: impl Into<CoordinateSystem>) -> Result<Value> {
    entity(cs.into())
}

fn build_authority(args: &mut ArgumentBinder, _: Option<&str>) -> Result<Value> {
    let QuotedString(name) = args.shift()?;
    let QuotedString(code) = args.shift()?;
    Ok(Value::Authority(AuthorityClause { name, code }))
}

fn build_extension(args: &mut ArgumentBinder, _: Option<&str>) -> Result<Value> {
    let QuotedString(key) = args.shift()?;
    let QuotedString(value) = args.shift()?;
    Ok(Value::Extension(ExtensionClause { key, value }))
}

fn build_axis(args: &mut ArgumentBinder, _: Option<&str>) -> Result<Value> {
    let QuotedString(name) = args.shift()?;
    let TypeString(orientation) = args.shift()?;
    let orientation: AxisOrientation = orientation.parse()?;
    entity(AxisInfo::new(name, orientation))
}

fn build_towgs84(args: &mut ArgumentBinder, _: Option<&str>) -> Result<Value> {
    let values: Vec<f64> = args.find_all();
    let parameters: [f64; 7] = values.try_into().map_err(|values: Vec<f64>| {
        CrsError::parse(format!(
            "TOWGS84 requires exactly 7 numbers, found {}",
            values.len()
        ))
    })?;
    entity(Wgs84ConversionInfo::from(parameters))
}

/// The enclosing keyword decides which concrete unit a `UNIT` clause is.
fn build_unit(args: &mut ArgumentBinder, containing_type: Option<&str>) -> Result<Value> {
    let info = take_info(args)?;
    let conversion_factor = args.shift()?;
    let kind = match containing_type {
        Some("GEOCCS" | "VERT_CS" | "PROJCS" | "SPHEROID") => UnitKind::Linear,
        Some("GEOGCS") => UnitKind::Angular,
        _ => UnitKind::Generic,
    };
    entity(Unit::with_kind(info, conversion_factor, kind))
}

fn build_parameter(args: &mut ArgumentBinder, _: Option<&str>) -> Result<Value> {
    let info = take_info(args)?;
    let value = args.shift()?;
    entity(ProjectionParameter::new(info, value))
}

fn build_projection(args: &mut ArgumentBinder, _: Option<&str>) -> Result<Value> {
    let info = take_info(args)?;
    let parameters = args.find_all();
    let class_name = info.name().to_string();
    entity(Projection::new(info, class_name, parameters))
}

fn build_spheroid(args: &mut ArgumentBinder, _: Option<&str>) -> Result<Value> {
    let info = take_info(args)?;
    let semi_major_axis = args.shift()?;
    let inverse_flattening = args.shift()?;
    let axis_unit = args.find_first::<LinearUnit>();
    entity(Ellipsoid::from_flattened_sphere(
        info,
        semi_major_axis,
        inverse_flattening,
        axis_unit,
    ))
}

fn build_primem(args: &mut ArgumentBinder, _: Option<&str>) -> Result<Value> {
    let info = take_info(args)?;
    let longitude = args.shift()?;
    let angular_unit = args.find_first::<Unit>();
    entity(PrimeMeridian::new(info, angular_unit, longitude))
}

fn build_datum(args: &mut ArgumentBinder, _: Option<&str>) -> Result<Value> {
    let info = take_info(args)?;
    let ellipsoid = args.require::<Ellipsoid>("DATUM")?;
    let wgs84_parameters = args.find_first::<Wgs84ConversionInfo>();
    entity(Datum::from(HorizontalDatum::new(
        info,
        datum_type::HD_CLASSIC,
        ellipsoid,
        wgs84_parameters,
    )))
}

fn build_vert_datum(args: &mut ArgumentBinder, _: Option<&str>) -> Result<Value> {
    let info = take_info(args)?;
    let datum_type = integral(args.shift()?, "VERT_DATUM")?;
    entity(Datum::from(VerticalDatum::new(info, datum_type)))
}

fn build_local_datum(args: &mut ArgumentBinder, _: Option<&str>) -> Result<Value> {
    let info = take_info(args)?;
    let datum_type = integral(args.shift()?, "LOCAL_DATUM")?;
    entity(Datum::from(LocalDatum::new(info, datum_type)))
}

fn build_local_cs(args: &mut ArgumentBinder, _: Option<&str>) -> Result<Value> {
    let info = take_info(args)?;
    let local_datum = args.require::<LocalDatum>("LOCAL_CS")?;
    let unit = args.require::<Unit>("LOCAL_CS")?;
    let axes = args.find_all::<AxisInfo>();
    if axes.is_empty() {
        return Err(CrsError::parse("LOCAL_CS requires at least one AXIS"));
    }
    coordinate_system(LocalCoordinateSystem::new(info, local_datum, unit, axes)?)
}

/// Collect the axes of a system that declares either none or exactly `N`.
fn optional_axes<const N: usize>(
    args: &mut ArgumentBinder,
    keyword: &str,
) -> Result<Option<[AxisInfo; N]>> {
    let axes = args.find_all::<AxisInfo>();
    if axes.is_empty() {
        return Ok(None);
    }
    let count = axes.len();
    axes.try_into().map(Some).map_err(|_| {
        CrsError::parse(format!(
            "{} requires 0 or {} AXIS entries, found {}",
            keyword, N, count
        ))
    })
}

fn build_geoccs(args: &mut ArgumentBinder, _: Option<&str>) -> Result<Value> {
    let info = take_info(args)?;
    let horizontal_datum = args.require::<HorizontalDatum>("GEOCCS")?;
    let prime_meridian = args.require::<PrimeMeridian>("GEOCCS")?;
    let linear_unit = args.require::<LinearUnit>("GEOCCS")?;
    let axes = optional_axes::<3>(args, "GEOCCS")?;
    coordinate_system(GeocentricCoordinateSystem::new(
        info,
        horizontal_datum,
        prime_meridian,
        linear_unit,
        axes,
    ))
}

fn build_vert_cs(args: &mut ArgumentBinder, _: Option<&str>) -> Result<Value> {
    let info = take_info(args)?;
    let vertical_datum = args.require::<VerticalDatum>("VERT_CS")?;
    let vertical_unit = args.require::<LinearUnit>("VERT_CS")?;
    let axis = args.find_first::<AxisInfo>();
    coordinate_system(VerticalCoordinateSystem::new(
        info,
        vertical_datum,
        vertical_unit,
        axis,
    ))
}

fn build_geogcs(args: &mut ArgumentBinder, _: Option<&str>) -> Result<Value> {
    let info = take_info(args)?;
    let horizontal_datum = args.require::<HorizontalDatum>("GEOGCS")?;
    let prime_meridian = args.require::<PrimeMeridian>("GEOGCS")?;
    let angular_unit = args.require::<AngularUnit>("GEOGCS")?;
    let axes = optional_axes::<2>(args, "GEOGCS")?;
    coordinate_system(GeographicCoordinateSystem::new(
        info,
        angular_unit,
        horizontal_datum,
        prime_meridian,
        axes,
    ))
}

/// Parameters may sit inside the `PROJECTION` clause or beside it; both end up on the
/// projection, nested ones first.
fn build_projcs(args: &mut ArgumentBinder, _: Option<&str>) -> Result<Value> {
    let info = take_info(args)?;
    let geographic_coordinate_system = args.require::<GeographicCoordinateSystem>("PROJCS")?;
    let mut projection = args.require::<Projection>("PROJCS")?;
    projection.append_parameters(args.find_all::<ProjectionParameter>());
    let linear_unit = args.require::<LinearUnit>("PROJCS")?;
    let axes = optional_axes::<2>(args, "PROJCS")?;
    coordinate_system(ProjectedCoordinateSystem::new(
        info,
        geographic_coordinate_system,
        projection,
        linear_unit,
        axes,
    ))
}

fn build_compd_cs(args: &mut ArgumentBinder, _: Option<&str>) -> Result<Value> {
    let info = take_info(args)?;
    let head = args.shift::<CoordinateSystem>()?;
    let tail = args.shift::<CoordinateSystem>()?;
    coordinate_system(CompoundCoordinateSystem::new(info, head, tail))
}
