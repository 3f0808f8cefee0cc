//! The argument list of one bracketed WKT clause, consumed by type rather than only by
//! position.
//!
//! The grammar fixes the position of names and numbers but lets optional clauses such as
//! `AUTHORITY` or `AXIS` appear in any order and any number of times. Keyword handlers shift off
//! the positional values, pick the clauses they want by type, and finally assert that nothing
//! is left over.

use std::collections::VecDeque;
use std::fmt;

use itertools::{Either, Itertools};

use crate::cs::{Entity, FromEntity};
use crate::error::{CrsError, Result};
use crate::wkt::format_number;

/// `AUTHORITY["name","code"]`, folded into the owning entity's [`Info`](crate::cs::Info).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AuthorityClause {
    pub(crate) name: String,
    pub(crate) code: String,
}

/// `EXTENSION["key","value"]`, folded into the owning entity's [`Info`](crate::cs::Info).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ExtensionClause {
    pub(crate) key: String,
    pub(crate) value: String,
}

/// The contents of a `"..."` token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct QuotedString(pub(crate) String);

/// A bare identifier argument, e.g. the `NORTH` in `AXIS["N",NORTH]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TypeString(pub(crate) String);

/// One parsed argument.
#[derive(Debug, Clone)]
pub(crate) enum Value {
    QuotedString(String),
    TypeString(String),
    Number(f64),
    Authority(AuthorityClause),
    Extension(ExtensionClause),
    Entity(Entity),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::QuotedString(value) => write!(f, "\"{}\"", value),
            Value::TypeString(value) => f.write_str(value),
            Value::Number(value) => f.write_str(&format_number(*value)),
            Value::Authority(_) => f.write_str("AUTHORITY"),
            Value::Extension(_) => f.write_str("EXTENSION"),
            Value::Entity(entity) => f.write_str(crate::wkt::ToWkt::wkt_typename(entity)),
        }
    }
}

/// Conversion from a [`Value`] to the type a keyword handler asks for, handing the value back
/// when it does not match.
pub(crate) trait FromValue: Sized {
    /// Describes the expected type in error messages.
    const EXPECTED: &'static str;

    fn from_value(value: Value) -> std::result::Result<Self, Value>;
}

impl FromValue for Value {
    const EXPECTED: &'static str = "any value";

    fn from_value(value: Value) -> std::result::Result<Self, Value> {
        Ok(value)
    }
}

impl FromValue for f64 {
    const EXPECTED: &'static str = "number";

    fn from_value(value: Value) -> std::result::Result<Self, Value> {
        match value {
            Value::Number(number) => Ok(number),
            other => Err(other),
        }
    }
}

impl FromValue for QuotedString {
    const EXPECTED: &'static str = "quoted string";

    fn from_value(value: Value) -> std::result::Result<Self, Value> {
        match value {
            Value::QuotedString(string) => Ok(QuotedString(string)),
            other => Err(other),
        }
    }
}

impl FromValue for TypeString {
    const EXPECTED: &'static str = "identifier";

    fn from_value(value: Value) -> std::result::Result<Self, Value> {
        match value {
            Value::TypeString(string) => Ok(TypeString(string)),
            other => Err(other),
        }
    }
}

impl FromValue for AuthorityClause {
    const EXPECTED: &'static str = "AUTHORITY";

    fn from_value(value: Value) -> std::result::Result<Self, Value> {
        match value {
            Value::Authority(authority) => Ok(authority),
            other => Err(other),
        }
    }
}

impl FromValue for ExtensionClause {
    const EXPECTED: &'static str = "EXTENSION";

    fn from_value(value: Value) -> std::result::Result<Self, Value> {
        match value {
            Value::Extension(extension) => Ok(extension),
            other => Err(other),
        }
    }
}

impl<T: FromEntity> FromValue for T {
    const EXPECTED: &'static str = T::TYPE_NAME;

    fn from_value(value: Value) -> std::result::Result<Self, Value> {
        match value {
            Value::Entity(entity) => T::from_entity(entity).map_err(Value::Entity),
            other => Err(other),
        }
    }
}

/// An ordered bag of the arguments of one clause.
#[derive(Debug, Default)]
pub(crate) struct ArgumentBinder {
    values: VecDeque<Value>,
}

impl ArgumentBinder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, value: Value) {
        self.values.push_back(value);
    }

    pub(crate) fn len(&self) -> usize {
        self.values.len()
    }

    /// Remove the first argument, which must be a `T`.
    pub(crate) fn shift<T: FromValue>(&mut self) -> Result<T> {
        let value = self.values.pop_front().ok_or_else(|| {
            CrsError::parse(format!("Expected {}, but ran out of arguments", T::EXPECTED))
        })?;
        T::from_value(value)
            .map_err(|value| CrsError::parse(format!("Expected {}, found {}", T::EXPECTED, value)))
    }

    /// Remove and return the first argument of type `T`, wherever it is.
    pub(crate) fn find_first<T: FromValue>(&mut self) -> Option<T> {
        let mut found = None;
        let mut rest = VecDeque::with_capacity(self.values.len());
        for value in self.values.drain(..) {
            if found.is_some() {
                rest.push_back(value);
                continue;
            }
            match T::from_value(value) {
                Ok(matched) => found = Some(matched),
                Err(value) => rest.push_back(value),
            }
        }
        self.values = rest;
        found
    }

    /// Like [`find_first`](Self::find_first), but a missing argument is an error.
    pub(crate) fn require<T: FromValue>(&mut self, keyword: &str) -> Result<T> {
        self.find_first()
            .ok_or_else(|| CrsError::parse(format!("{} is missing a required {}", keyword, T::EXPECTED)))
    }

    /// Remove every argument of type `T`, keeping their relative order.
    pub(crate) fn find_all<T: FromValue>(&mut self) -> Vec<T> {
        let (matched, rest): (Vec<T>, VecDeque<Value>) =
            self.values.drain(..).partition_map(|value| match T::from_value(value) {
                Ok(matched) => Either::Left(matched),
                Err(value) => Either::Right(value),
            });
        self.values = rest;
        matched
    }

    /// Fail if any argument was not consumed.
    pub(crate) fn assert_empty(&self) -> Result<()> {
        if self.values.is_empty() {
            Ok(())
        } else {
            Err(CrsError::parse(format!(
                "Unexpected arguments: {}",
                self.values.iter().join(", ")
            )))
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::cs::{AxisInfo, AxisOrientation};

    fn axis(name: &str) -> Value {
        Value::Entity(Entity::AxisInfo(AxisInfo::new(name, AxisOrientation::North)))
    }

    fn binder(values: Vec<Value>) -> ArgumentBinder {
        let mut binder = ArgumentBinder::new();
        values.into_iter().for_each(|value| binder.push(value));
        binder
    }

    #[test]
    fn shift_checks_type() {
        let mut args = binder(vec![Value::QuotedString("x".to_string()), Value::Number(1.0)]);
        assert!(args.shift::<f64>().is_err());
        assert_eq!(args.shift::<f64>().unwrap(), 1.0);
        assert!(args.shift::<Value>().is_err());
    }

    #[test]
    fn shift_reports_the_mismatch() {
        let mut args = binder(vec![Value::Number(3.0)]);
        let err = args.shift::<QuotedString>().unwrap_err();
        assert_eq!(
            err,
            CrsError::Parse("Expected quoted string, found 3.0".to_string())
        );
    }

    #[test]
    fn find_first_skips_other_types() {
        let mut args = binder(vec![
            axis("a"),
            Value::Authority(AuthorityClause {
                name: "EPSG".to_string(),
                code: "1".to_string(),
            }),
            axis("b"),
        ]);
        let authority = args.find_first::<AuthorityClause>().unwrap();
        assert_eq!(authority.code, "1");
        assert!(args.find_first::<AuthorityClause>().is_none());
        assert_eq!(args.len(), 2);

        let first = args.find_first::<AxisInfo>().unwrap();
        assert_eq!(first.name(), "a");
    }

    #[test]
    fn find_all_keeps_order() {
        let mut args = binder(vec![
            axis("a"),
            Value::Number(1.0),
            axis("b"),
            Value::Number(2.0),
            axis("c"),
        ]);
        let names: Vec<_> = args
            .find_all::<AxisInfo>()
            .iter()
            .map(|axis| axis.name().to_string())
            .collect();
        assert_eq!(names, ["a", "b", "c"]);
        assert_eq!(args.find_all::<f64>(), vec![1.0, 2.0]);
        assert!(args.assert_empty().is_ok());
    }

    #[test]
    fn require_names_the_keyword() {
        let mut args = binder(vec![]);
        let err = args.require::<AxisInfo>("LOCAL_CS").unwrap_err();
        assert_eq!(
            err,
            CrsError::Parse("LOCAL_CS is missing a required AxisInfo".to_string())
        );
    }

    #[test]
    fn leftovers_are_listed() {
        let args = binder(vec![Value::Number(99.0), axis("a"), Value::TypeString("UP".to_string())]);
        let err = args.assert_empty().unwrap_err();
        assert_eq!(
            err,
            CrsError::Parse("Unexpected arguments: 99.0, AXIS, UP".to_string())
        );
    }
}
