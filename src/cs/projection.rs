use std::slice;

use crate::cs::{Entity, Info};
use crate::wkt::{ToWkt, WktCache, WktPart};

/// A named projection parameter value, e.g. `PARAMETER["false_easting",400000.0]`.
#[derive(Clone)]
pub struct ProjectionParameter {
    info: Info,
    value: f64,
    cache: WktCache,
}

impl ProjectionParameter {
    pub fn new(info: impl Into<Info>, value: f64) -> Self {
        Self {
            info: info.into(),
            value,
            cache: Default::default(),
        }
    }

    pub fn info(&self) -> &Info {
        &self.info
    }

    pub fn name(&self) -> &str {
        self.info.name()
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

impl ToWkt for ProjectionParameter {
    fn wkt_typename(&self) -> &'static str {
        "PARAMETER"
    }

    fn type_name(&self) -> &'static str {
        "ProjectionParameter"
    }

    fn wkt_content(&self) -> Vec<WktPart<'_>> {
        vec![WktPart::Number(self.value)]
    }

    fn wkt_info(&self) -> Option<&Info> {
        Some(&self.info)
    }

    fn wkt_cache(&self) -> &WktCache {
        &self.cache
    }
}

/// A projection from geographic to projected coordinates, e.g.
/// `PROJECTION["Transverse_Mercator"]`.
///
/// The parameters are written by the enclosing `PROJCS`, as siblings of the `PROJECTION`
/// clause, so the projection's own WKT only carries its name and authority.
#[derive(Clone)]
pub struct Projection {
    info: Info,
    class_name: String,
    parameters: Vec<ProjectionParameter>,
    cache: WktCache,
}

impl Projection {
    pub fn new(
        info: impl Into<Info>,
        class_name: impl Into<String>,
        parameters: Vec<ProjectionParameter>,
    ) -> Self {
        Self {
            info: info.into(),
            class_name: class_name.into(),
            parameters,
            cache: Default::default(),
        }
    }

    pub fn info(&self) -> &Info {
        &self.info
    }

    pub fn name(&self) -> &str {
        self.info.name()
    }

    /// The projection method, e.g. `"Transverse_Mercator"`.
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn num_parameters(&self) -> usize {
        self.parameters.len()
    }

    pub fn get_parameter(&self, index: usize) -> Option<&ProjectionParameter> {
        self.parameters.get(index)
    }

    pub fn parameters(&self) -> &[ProjectionParameter] {
        &self.parameters
    }

    pub fn iter(&self) -> slice::Iter<'_, ProjectionParameter> {
        self.parameters.iter()
    }

    /// Append parameters found after construction, e.g. as siblings in a `PROJCS`.
    pub(crate) fn append_parameters(&mut self, parameters: Vec<ProjectionParameter>) {
        if parameters.is_empty() {
            return;
        }
        self.parameters.extend(parameters);
        self.cache = WktCache::default();
    }
}

impl<'a> IntoIterator for &'a Projection {
    type Item = &'a ProjectionParameter;
    type IntoIter = slice::Iter<'a, ProjectionParameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl ToWkt for Projection {
    fn wkt_typename(&self) -> &'static str {
        "PROJECTION"
    }

    fn type_name(&self) -> &'static str {
        "Projection"
    }

    fn wkt_content(&self) -> Vec<WktPart<'_>> {
        vec![]
    }

    fn wkt_info(&self) -> Option<&Info> {
        Some(&self.info)
    }

    fn wkt_cache(&self) -> &WktCache {
        &self.cache
    }
}

impl_wkt_identity!(ProjectionParameter, Projection);
impl_from_entity!(ProjectionParameter, Entity::ProjectionParameter(parameter) => parameter);
impl_from_entity!(Projection, Entity::Projection(projection) => projection);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parameter_wkt() {
        let parameter = ProjectionParameter::new("false_easting", 400000.0);
        assert_eq!(
            parameter.to_wkt(true),
            r#"PARAMETER["false_easting",400000.0]"#
        );
    }

    #[test]
    fn projection_parameters() {
        let mut projection = Projection::new(
            "Transverse_Mercator",
            "Transverse_Mercator",
            vec![ProjectionParameter::new("latitude_of_origin", 49.0)],
        );
        assert_eq!(projection.to_wkt(true), r#"PROJECTION["Transverse_Mercator"]"#);

        projection.append_parameters(vec![
            ProjectionParameter::new("central_meridian", -2.0),
            ProjectionParameter::new("scale_factor", 0.999601272),
        ]);
        assert_eq!(projection.num_parameters(), 3);
        assert_eq!(projection.get_parameter(1).unwrap().name(), "central_meridian");
        assert!(projection.get_parameter(3).is_none());

        let names: Vec<_> = projection.iter().map(|p| p.name()).collect();
        assert_eq!(
            names,
            ["latitude_of_origin", "central_meridian", "scale_factor"]
        );
        assert_eq!((&projection).into_iter().count(), 3);
        assert_eq!(projection.class_name(), "Transverse_Mercator");
    }
}
