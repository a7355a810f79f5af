use serde::Deserialize;

/// One record from the image search endpoint. Never mutated after it is
/// deserialized.
#[derive(Debug, Clone, Deserialize)]
pub struct CatRecord {
    pub id: String,
    #[serde(rename = "url")]
    pub image_url: String,
    #[serde(default)]
    pub breeds: Vec<BreedInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BreedInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub weight: Option<BreedWeight>,
    #[serde(default)]
    pub description: Option<String>,
}

/// TheCatAPI sends weights as free-form range strings ("3 - 5"); they are
/// carried verbatim, no parsing.
#[derive(Debug, Clone, Deserialize)]
pub struct BreedWeight {
    #[serde(default)]
    pub metric: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_search_payload() {
        let body = r#"[{
            "id": "MTY3ODIyMQ",
            "url": "https://cdn2.thecatapi.com/images/MTY3ODIyMQ.jpg",
            "width": 1204,
            "height": 1445,
            "breeds": [{
                "name": "Abyssinian",
                "origin": "Egypt",
                "weight": { "imperial": "7 - 10", "metric": "3 - 5" },
                "description": "The Abyssinian is easy to care for.",
                "temperament": "Active, Energetic"
            }]
        }]"#;

        let records: Vec<CatRecord> = serde_json::from_str(body).unwrap();
        assert_eq!(records.len(), 1);

        let record = &records[0];
        assert_eq!(record.id, "MTY3ODIyMQ");
        assert_eq!(record.image_url, "https://cdn2.thecatapi.com/images/MTY3ODIyMQ.jpg");
        assert_eq!(record.breeds[0].name, "Abyssinian");
        assert_eq!(record.breeds[0].origin, "Egypt");
        assert_eq!(record.breeds[0].weight.as_ref().unwrap().metric.as_deref(), Some("3 - 5"));
    }

    #[test]
    fn test_breedless_record_deserializes() {
        let body = r#"[{"id": "abc", "url": "https://cdn2.thecatapi.com/images/abc.jpg"}]"#;

        let records: Vec<CatRecord> = serde_json::from_str(body).unwrap();
        assert!(records[0].breeds.is_empty());
    }
}
