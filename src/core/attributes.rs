use crate::core::models::CatRecord;

pub const UNKNOWN: &str = "Unknown";
pub const NO_DESCRIPTION: &str = "No description available";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    Breed,
    Weight,
    Origin,
    Description,
}

impl AttributeKind {
    /// The attributes a candidate is screened on. Description is shown but
    /// never banned.
    pub const CHECKABLE: [AttributeKind; 3] =
        [AttributeKind::Breed, AttributeKind::Weight, AttributeKind::Origin];

    pub fn label(&self) -> &'static str {
        match self {
            AttributeKind::Breed => "Breed",
            AttributeKind::Weight => "Weight",
            AttributeKind::Origin => "Origin",
            AttributeKind::Description => "Description",
        }
    }

    fn missing_value(&self) -> &'static str {
        match self {
            AttributeKind::Description => NO_DESCRIPTION,
            _ => UNKNOWN,
        }
    }
}

/// Derives the display value of one attribute from a record. Always returns
/// a string; anything absent falls back to the attribute's default. Only the
/// first breed entry is consulted.
pub fn extract(record: &CatRecord, kind: AttributeKind) -> String {
    let Some(breed) = record.breeds.first() else {
        return kind.missing_value().to_string();
    };

    let value = match kind {
        AttributeKind::Breed => some_text(Some(breed.name.as_str())),
        AttributeKind::Weight => breed
            .weight
            .as_ref()
            .and_then(|weight| weight.metric.as_deref())
            .filter(|metric| !metric.is_empty())
            .map(|metric| format!("{} kg", metric)),
        AttributeKind::Origin => some_text(Some(breed.origin.as_str())),
        AttributeKind::Description => some_text(breed.description.as_deref()),
    };

    value.unwrap_or_else(|| kind.missing_value().to_string())
}

/// The values the ban filter screens, in `CHECKABLE` order.
pub fn checkable_values(record: &CatRecord) -> [String; 3] {
    AttributeKind::CHECKABLE.map(|kind| extract(record, kind))
}

// TheCatAPI sometimes sends "" where a field is missing.
fn some_text(text: Option<&str>) -> Option<String> {
    text.filter(|t| !t.is_empty()).map(|t| t.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{
        BreedInfo,
        BreedWeight,
    };

    fn record_with_breeds(breeds: Vec<BreedInfo>) -> CatRecord {
        CatRecord {
            id: "abc".to_string(),
            image_url: "https://cdn2.thecatapi.com/images/abc.jpg".to_string(),
            breeds,
        }
    }

    fn abyssinian() -> BreedInfo {
        BreedInfo {
            name: "Abyssinian".to_string(),
            origin: "Egypt".to_string(),
            weight: Some(BreedWeight { metric: Some("3 - 5".to_string()) }),
            description: Some("Active and playful.".to_string()),
        }
    }

    #[test]
    fn test_breedless_record_uses_defaults_for_every_kind() {
        let record = record_with_breeds(Vec::new());

        assert_eq!(extract(&record, AttributeKind::Breed), UNKNOWN);
        assert_eq!(extract(&record, AttributeKind::Weight), UNKNOWN);
        assert_eq!(extract(&record, AttributeKind::Origin), UNKNOWN);
        assert_eq!(extract(&record, AttributeKind::Description), NO_DESCRIPTION);
    }

    #[test]
    fn test_weight_is_rendered_verbatim_with_unit() {
        let record = record_with_breeds(vec![abyssinian()]);

        assert_eq!(extract(&record, AttributeKind::Weight), "3 - 5 kg");
    }

    #[test]
    fn test_missing_subfields_fall_back() {
        let breed = BreedInfo {
            name: String::new(),
            origin: String::new(),
            weight: Some(BreedWeight { metric: None }),
            description: None,
        };
        let record = record_with_breeds(vec![breed]);

        assert_eq!(extract(&record, AttributeKind::Breed), UNKNOWN);
        assert_eq!(extract(&record, AttributeKind::Weight), UNKNOWN);
        assert_eq!(extract(&record, AttributeKind::Origin), UNKNOWN);
        assert_eq!(extract(&record, AttributeKind::Description), NO_DESCRIPTION);
    }

    #[test]
    fn test_empty_metric_weight_falls_back() {
        let mut breed = abyssinian();
        breed.weight = Some(BreedWeight { metric: Some(String::new()) });
        let record = record_with_breeds(vec![breed]);

        assert_eq!(extract(&record, AttributeKind::Weight), UNKNOWN);
    }

    #[test]
    fn test_only_first_breed_is_read() {
        let mut second = abyssinian();
        second.name = "Siamese".to_string();
        let record = record_with_breeds(vec![abyssinian(), second]);

        assert_eq!(extract(&record, AttributeKind::Breed), "Abyssinian");
    }

    #[test]
    fn test_checkable_values_follow_checkable_order() {
        let record = record_with_breeds(vec![abyssinian()]);

        let values = checkable_values(&record);
        assert_eq!(values, ["Abyssinian".to_string(), "3 - 5 kg".to_string(), "Egypt".to_string()]);
    }
}
