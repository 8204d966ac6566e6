use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Response envelope of the user API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserPage {
    #[serde(default)]
    pub results: Vec<UserRecord>,
}

/// One user row as delivered by the API.
///
/// Every field defaults so that partial records still load; the table only
/// ever reorders records and never edits them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(default)]
    pub id: Identifier,
    #[serde(default)]
    pub name: Name,
    #[serde(default)]
    pub picture: Picture,
    #[serde(default)]
    pub cell: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub location: Location,
    #[serde(default)]
    pub registered: Registration,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifier {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub first: String,
    #[serde(default)]
    pub last: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Picture {
    #[serde(default)]
    pub large: String,
    #[serde(default)]
    pub medium: String,
    #[serde(default)]
    pub thumbnail: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub street: Street,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    /// US postcodes arrive as numbers, most others as strings.
    #[serde(default, deserialize_with = "text_or_number")]
    pub postcode: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Street {
    #[serde(default)]
    pub number: Option<i64>,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub age: u32,
}

impl Registration {
    /// Parses the registration timestamp. Accepts full RFC 3339 values as
    /// sent by the API and bare `YYYY-MM-DD` dates.
    pub fn parsed_date(&self) -> Option<DateTime<Utc>> {
        let raw = self.date.trim();
        if raw.is_empty() {
            return None;
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }

        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(serde_json::Number),
}

fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<TextOrNumber>::deserialize(deserializer)?;
    Ok(match value {
        Some(TextOrNumber::Text(s)) => s,
        Some(TextOrNumber::Number(n)) => n.to_string(),
        None => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "results": [
            {
                "gender": "female",
                "name": { "title": "Ms", "first": "Jennie", "last": "Nichols" },
                "location": {
                    "street": { "number": 8929, "name": "Valwood Pkwy" },
                    "city": "Billings",
                    "state": "Michigan",
                    "country": "United States",
                    "postcode": 63104
                },
                "registered": { "date": "2007-07-09T05:51:59.390Z", "age": 14 },
                "phone": "(272) 790-0888",
                "cell": "(489) 330-2385",
                "id": { "name": "SSN", "value": "405-88-3636" },
                "picture": {
                    "large": "https://randomuser.me/api/portraits/women/75.jpg",
                    "medium": "https://randomuser.me/api/portraits/med/women/75.jpg",
                    "thumbnail": "https://randomuser.me/api/portraits/thumb/women/75.jpg"
                }
            },
            {
                "name": { "first": "Ola", "last": "Berg" },
                "location": { "postcode": "N2K 4L8", "street": { "name": "Main St" } },
                "id": { "name": "", "value": null }
            }
        ],
        "info": { "seed": "abc", "results": 2, "page": 1, "version": "1.4" }
    }"#;

    #[test]
    fn test_deserialize_page() {
        let page: UserPage = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(page.results.len(), 2);

        let first = &page.results[0];
        assert_eq!(first.name.first, "Jennie");
        assert_eq!(first.location.street.number, Some(8929));
        assert_eq!(first.location.postcode, "63104");
        assert_eq!(first.id.value.as_deref(), Some("405-88-3636"));
    }

    #[test]
    fn test_partial_record_uses_defaults() {
        let page: UserPage = serde_json::from_str(SAMPLE).unwrap();
        let second = &page.results[1];
        assert_eq!(second.location.postcode, "N2K 4L8");
        assert_eq!(second.location.street.number, None);
        assert_eq!(second.id.value, None);
        assert_eq!(second.cell, "");
        assert!(second.registered.parsed_date().is_none());
    }

    #[test]
    fn test_parsed_date_formats() {
        let full = Registration {
            date: "2007-07-09T05:51:59.390Z".into(),
            age: 0,
        };
        let bare = Registration {
            date: "1999-05-05".into(),
            age: 0,
        };
        let junk = Registration {
            date: "not a date".into(),
            age: 0,
        };
        assert!(full.parsed_date().is_some());
        assert!(bare.parsed_date().unwrap() < full.parsed_date().unwrap());
        assert!(junk.parsed_date().is_none());
    }

    #[test]
    fn test_cache_payload_roundtrip_keeps_postcode_text() {
        let page: UserPage = serde_json::from_str(SAMPLE).unwrap();
        let stored = serde_json::to_string(&page.results).unwrap();
        let restored: Vec<UserRecord> = serde_json::from_str(&stored).unwrap();
        assert_eq!(restored, page.results);
    }
}
