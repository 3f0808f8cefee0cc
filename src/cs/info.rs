use indexmap::IndexMap;

/// Descriptive metadata shared by every named entity.
///
/// Only the name, authority and extensions take part in WKT output. Abbreviation, alias and
/// remarks are carried for callers but never written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Info {
    name: String,
    authority: Option<String>,
    authority_code: Option<String>,
    abbreviation: Option<String>,
    alias: Option<String>,
    remarks: Option<String>,
    extensions: IndexMap<String, String>,
}

impl Info {
    /// Creates a new [`Info`] with only a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Attach an authority pair such as `("EPSG", "4326")`.
    pub fn with_authority(mut self, authority: impl Into<String>, code: impl Into<String>) -> Self {
        self.authority = Some(authority.into());
        self.authority_code = Some(code.into());
        self
    }

    pub fn with_abbreviation(mut self, abbreviation: impl Into<String>) -> Self {
        self.abbreviation = Some(abbreviation.into());
        self
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn with_remarks(mut self, remarks: impl Into<String>) -> Self {
        self.remarks = Some(remarks.into());
        self
    }

    /// Add an extension. A repeated key replaces the earlier value but keeps its position;
    /// WKT input with a repeated key is rejected by the parser instead.
    pub fn with_extension(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extensions.insert(key.into(), value.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn authority(&self) -> Option<&str> {
        self.authority.as_deref()
    }

    pub fn authority_code(&self) -> Option<&str> {
        self.authority_code.as_deref()
    }

    pub fn abbreviation(&self) -> Option<&str> {
        self.abbreviation.as_deref()
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn remarks(&self) -> Option<&str> {
        self.remarks.as_deref()
    }

    /// Ordered extension key/value pairs.
    pub fn extensions(&self) -> &IndexMap<String, String> {
        &self.extensions
    }

    /// Look up a single extension value.
    pub fn extension(&self, key: &str) -> Option<&str> {
        self.extensions.get(key).map(String::as_str)
    }
}

impl From<&str> for Info {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Info {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn builder_fields() {
        let info = Info::new("WGS 84")
            .with_authority("EPSG", "4326")
            .with_abbreviation("WGS84")
            .with_alias("World Geodetic System 1984")
            .with_remarks("GPS")
            .with_extension("PROJ4", "+proj=longlat");

        assert_eq!(info.name(), "WGS 84");
        assert_eq!(info.authority(), Some("EPSG"));
        assert_eq!(info.authority_code(), Some("4326"));
        assert_eq!(info.abbreviation(), Some("WGS84"));
        assert_eq!(info.alias(), Some("World Geodetic System 1984"));
        assert_eq!(info.remarks(), Some("GPS"));
        assert_eq!(info.extension("PROJ4"), Some("+proj=longlat"));
        assert_eq!(info.extension("missing"), None);
    }

    #[test]
    fn extensions_keep_insertion_order() {
        let info = Info::new("x")
            .with_extension("b", "1")
            .with_extension("a", "2")
            .with_extension("b", "3");
        let keys: Vec<_> = info.extensions().keys().map(String::as_str).collect();
        assert_eq!(keys, ["b", "a"]);
        assert_eq!(info.extension("b"), Some("3"));
    }
}
