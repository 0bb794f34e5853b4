//! Serde models of the superheroapi.com response shapes.
//!
//! Characters are deserialized straight off the wire and never constructed
//! locally outside of tests. The API uses kebab-case field names and encodes
//! every stat as a string (sometimes literally `"null"`), so the accessors
//! here normalize rather than the deserializer.

use serde::Deserialize;

/// Shown wherever a character has no usable portrait URL.
pub const PLACEHOLDER_IMAGE: &str = "superhero_logo.png";

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Image {
    #[serde(default)]
    pub url: String,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Biography {
    #[serde(rename = "full-name", default)]
    pub full_name: String,
    #[serde(rename = "place-of-birth", default)]
    pub place_of_birth: String,
    #[serde(default)]
    pub aliases: Vec<String>,
}

/// `height` and `weight` arrive as imperial/metric pairs, e.g.
/// `["6'2", "188 cm"]`. Index 1 (metric) is what the detail view shows.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Appearance {
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub race: String,
    #[serde(default)]
    pub height: Vec<String>,
    #[serde(default)]
    pub weight: Vec<String>,
}

impl Appearance {
    pub fn metric_height(&self) -> &str {
        self.height.get(1).map(String::as_str).unwrap_or("-")
    }

    pub fn metric_weight(&self) -> &str {
        self.weight.get(1).map(String::as_str).unwrap_or("-")
    }
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Powerstats {
    #[serde(default)]
    pub intelligence: String,
    #[serde(default)]
    pub strength: String,
    #[serde(default)]
    pub speed: String,
    #[serde(default)]
    pub durability: String,
    #[serde(default)]
    pub power: String,
    #[serde(default)]
    pub combat: String,
}

impl Powerstats {
    /// Stats in display order, paired with their labels.
    pub fn labeled(&self) -> [(&'static str, &str); 6] {
        [
            ("Intelligence", self.intelligence.as_str()),
            ("Strength", self.strength.as_str()),
            ("Speed", self.speed.as_str()),
            ("Durability", self.durability.as_str()),
            ("Power", self.power.as_str()),
            ("Combat", self.combat.as_str()),
        ]
    }
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Character {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image: Option<Image>,
    #[serde(default)]
    pub biography: Biography,
    #[serde(default)]
    pub appearance: Appearance,
    #[serde(default)]
    pub powerstats: Powerstats,
}

impl Character {
    /// Portrait URL with the placeholder fallback for missing/empty values.
    pub fn image_url(&self) -> &str {
        match &self.image {
            Some(image) if !image.url.is_empty() => &image.url,
            _ => PLACEHOLDER_IMAGE,
        }
    }
}

/// Parses a string-encoded stat into 0..=100, treating `"null"` and any other
/// garbage as 0.
pub fn stat_value(raw: &str) -> u16 {
    raw.trim().parse::<u16>().map(|v| v.min(100)).unwrap_or(0)
}

/// Envelope returned by `GET {base}/{key}/search/{name}`.
#[derive(Deserialize, Debug)]
pub struct SearchResponse {
    #[serde(default)]
    pub response: String,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub results: Option<Vec<Character>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const BATMAN_JSON: &str = r#"{
        "response": "success",
        "id": "70",
        "name": "Batman",
        "powerstats": {
            "intelligence": "100",
            "strength": "26",
            "speed": "27",
            "durability": "50",
            "power": "47",
            "combat": "100"
        },
        "biography": {
            "full-name": "Bruce Wayne",
            "alter-egos": "No alter egos found.",
            "aliases": ["Insider", "Matches Malone"],
            "place-of-birth": "Crest Hill, Bristol Township; Gotham County",
            "publisher": "DC Comics"
        },
        "appearance": {
            "gender": "Male",
            "race": "Human",
            "height": ["6'2", "188 cm"],
            "weight": ["210 lb", "95 kg"],
            "eye-color": "blue"
        },
        "image": { "url": "https://www.superherodb.com/pictures2/portraits/10/100/639.jpg" }
    }"#;

    #[test]
    fn test_character_deserializes_kebab_case_fields() {
        let character: Character = serde_json::from_str(BATMAN_JSON).unwrap();
        assert_eq!(character.id, "70");
        assert_eq!(character.name, "Batman");
        assert_eq!(character.biography.full_name, "Bruce Wayne");
        assert_eq!(
            character.biography.place_of_birth,
            "Crest Hill, Bristol Township; Gotham County"
        );
        assert_eq!(character.biography.aliases.len(), 2);
        assert_eq!(character.appearance.metric_height(), "188 cm");
        assert_eq!(character.appearance.metric_weight(), "95 kg");
        assert_eq!(character.powerstats.intelligence, "100");
    }

    #[test]
    fn test_character_ignores_unmodeled_fields() {
        // alter-egos, publisher, eye-color are present in the payload but not
        // in the model. Deserialization must not trip over them.
        let character: Character = serde_json::from_str(BATMAN_JSON).unwrap();
        assert_eq!(character.powerstats.combat, "100");
    }

    #[test]
    fn test_image_url_present() {
        let character: Character = serde_json::from_str(BATMAN_JSON).unwrap();
        assert!(character.image_url().starts_with("https://"));
    }

    #[test]
    fn test_image_url_falls_back_to_placeholder_when_missing() {
        let character = Character {
            name: "Nobody".to_string(),
            ..Default::default()
        };
        assert_eq!(character.image_url(), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_image_url_falls_back_to_placeholder_when_empty() {
        let character = Character {
            image: Some(Image { url: String::new() }),
            ..Default::default()
        };
        assert_eq!(character.image_url(), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_metric_pair_missing_entries() {
        let appearance = Appearance::default();
        assert_eq!(appearance.metric_height(), "-");
        assert_eq!(appearance.metric_weight(), "-");
    }

    #[test]
    fn test_stat_value_parses_and_clamps() {
        assert_eq!(stat_value("78"), 78);
        assert_eq!(stat_value(" 100 "), 100);
        assert_eq!(stat_value("999"), 100);
        assert_eq!(stat_value("null"), 0);
        assert_eq!(stat_value(""), 0);
        assert_eq!(stat_value("-5"), 0);
    }

    #[test]
    fn test_search_response_error_shape() {
        let json = r#"{"response":"error","error":"limit"}"#;
        let parsed: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.response, "error");
        assert_eq!(parsed.error.as_deref(), Some("limit"));
        assert!(parsed.results.is_none());
    }

    #[test]
    fn test_search_response_success_shape() {
        let json = format!(
            r#"{{"response":"success","results-for":"batman","results":[{BATMAN_JSON}]}}"#
        );
        let parsed: SearchResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.response, "success");
        assert_eq!(parsed.results.unwrap().len(), 1);
    }
}
