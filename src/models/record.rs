/// One row of the report query.
///
/// Fields are kept as an ordered list of (column name, rendered value)
/// pairs taken from the result set metadata, so lookups are always by
/// name and a reordered table cannot desynchronize labels from values.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    pub fn new<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Value of the named column, or None if the projection lacks it.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_by_name_not_position() {
        // Column order deliberately scrambled with respect to the header.
        let rec = Record::new([("bedrooms", "2"), ("id", "1")]);
        assert_eq!(rec.get("id"), Some("1"));
        assert_eq!(rec.get("bedrooms"), Some("2"));
    }

    #[test]
    fn missing_column_yields_none() {
        let rec = Record::new([("id", "1")]);
        assert_eq!(rec.get("propertyType"), None);
    }
}
