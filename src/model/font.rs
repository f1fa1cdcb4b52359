//! Font records parsed from the manifest

/// A single installed font as described by the manifest
///
/// `id` doubles as the on-disk file name of the font payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontRecord {
    pub id: String,
    pub name: String,
    pub weight: String,
}

impl FontRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>, weight: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            weight: weight.into(),
        }
    }

    /// Label shown in the checklist and used as the export base name
    pub fn display_label(&self) -> String {
        format!("{} - {}", self.name, self.weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_label() {
        let font = FontRecord::new("42", "Sample", "Bold");
        assert_eq!(font.display_label(), "Sample - Bold");
    }
}
