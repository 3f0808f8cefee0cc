//! Rendering entities back to WKT text.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

use crate::cs::Info;

/// One renderable piece of an entity's WKT content, written after the entity name.
#[derive(Clone, Copy)]
pub enum WktPart<'a> {
    /// A floating point value, always rendered with a decimal point.
    Number(f64),
    /// An integer code, rendered without a decimal point.
    Integer(i32),
    /// A bare identifier such as an axis orientation.
    Keyword(&'static str),
    /// A nested entity.
    Entity(&'a dyn ToWkt),
}

/// Lazily computed WKT text and hash of an immutable entity.
///
/// Square and round bracket renderings are cached separately. Each cell is assigned at most
/// once and only from fields that never change, so concurrent readers always agree.
#[derive(Debug, Default, Clone)]
pub struct WktCache {
    square: OnceLock<String>,
    round: OnceLock<String>,
    hash: OnceLock<u64>,
}

impl WktCache {
    fn cell(&self, standard_brackets: bool) -> &OnceLock<String> {
        if standard_brackets {
            &self.square
        } else {
            &self.round
        }
    }
}

/// The contract shared by every coordinate system entity: it knows its WKT keyword, its
/// ordered content, and renders itself as WKT.
///
/// The generic rendering is
/// `TYPENAME<open>"name"[,content...][,EXTENSION[k,v]...][,AUTHORITY[name,code]]<close>`.
pub trait ToWkt {
    /// The WKT keyword of this entity, e.g. `"GEOGCS"`.
    fn wkt_typename(&self) -> &'static str;

    /// The concrete entity type, e.g. `"LinearUnit"`. Two entities are only equal when their
    /// type names match.
    fn type_name(&self) -> &'static str;

    /// The values written after the name, in order.
    fn wkt_content(&self) -> Vec<WktPart<'_>>;

    /// Name, authority and extensions. `None` for entities that carry no name.
    fn wkt_info(&self) -> Option<&Info>;

    /// Memoized renderings of this entity.
    fn wkt_cache(&self) -> &WktCache;

    /// Write the WKT of this entity into `out` without consulting the cache.
    fn write_wkt(&self, out: &mut String, standard_brackets: bool) {
        let (open, close) = brackets(standard_brackets);
        out.push_str(self.wkt_typename());
        out.push(open);
        if let Some(info) = self.wkt_info() {
            write_quoted(out, info.name());
        }
        write_content(out, &self.wkt_content(), standard_brackets);
        if let Some(info) = self.wkt_info() {
            for (key, value) in info.extensions() {
                out.push_str(",EXTENSION");
                out.push(open);
                write_quoted(out, key);
                out.push(',');
                write_quoted(out, value);
                out.push(close);
            }
            if let (Some(authority), Some(code)) = (info.authority(), info.authority_code()) {
                out.push_str(",AUTHORITY");
                out.push(open);
                write_quoted(out, authority);
                out.push(',');
                write_quoted(out, code);
                out.push(close);
            }
        }
        out.push(close);
    }

    /// Render this entity as WKT.
    ///
    /// With `standard_brackets` the output uses `[` and `]`, otherwise `(` and `)`.
    fn to_wkt(&self, standard_brackets: bool) -> String {
        self.wkt_cache()
            .cell(standard_brackets)
            .get_or_init(|| {
                let mut out = String::new();
                self.write_wkt(&mut out, standard_brackets);
                out
            })
            .clone()
    }

    /// A hash of the concrete type and canonical WKT, computed once.
    fn wkt_hash(&self) -> u64 {
        *self.wkt_cache().hash.get_or_init(|| {
            let mut hasher = DefaultHasher::new();
            self.type_name().hash(&mut hasher);
            self.to_wkt(true).hash(&mut hasher);
            hasher.finish()
        })
    }
}

pub(crate) fn brackets(standard_brackets: bool) -> (char, char) {
    if standard_brackets {
        ('[', ']')
    } else {
        ('(', ')')
    }
}

pub(crate) fn write_quoted(out: &mut String, value: &str) {
    out.push('"');
    out.push_str(value);
    out.push('"');
}

/// Write each part preceded by a comma.
pub(crate) fn write_content(out: &mut String, parts: &[WktPart<'_>], standard_brackets: bool) {
    for part in parts {
        out.push(',');
        match part {
            WktPart::Number(value) => out.push_str(&format_number(*value)),
            WktPart::Integer(value) => out.push_str(&value.to_string()),
            WktPart::Keyword(value) => out.push_str(value),
            WktPart::Entity(entity) => out.push_str(&entity.to_wkt(standard_brackets)),
        }
    }
}

/// Format a float the way WKT output expects: the shortest representation that round-trips,
/// always with a decimal point (`400000.0`, `1.0e-7`).
pub fn format_number(value: f64) -> String {
    let text = format!("{:?}", value);
    match text.split_once('e') {
        Some((mantissa, exponent)) if !mantissa.contains('.') => {
            format!("{}.0e{}", mantissa, exponent)
        }
        _ => text,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn numbers_keep_a_decimal_point() {
        assert_eq!(format_number(400000.0), "400000.0");
        assert_eq!(format_number(-100000.0), "-100000.0");
        assert_eq!(format_number(0.0), "0.0");
        assert_eq!(format_number(6377563.396), "6377563.396");
        assert_eq!(format_number(0.0174532925199433), "0.0174532925199433");
    }

    #[test]
    fn exponent_mantissa_gets_a_decimal_point() {
        assert_eq!(format_number(1e-7), "1.0e-7");
        assert_eq!(format_number(2.5e-7), "2.5e-7");
        assert_eq!(format_number(1e20), "1.0e20");
    }

    #[test]
    fn bracket_styles() {
        assert_eq!(brackets(true), ('[', ']'));
        assert_eq!(brackets(false), ('(', ')'));
    }
}
