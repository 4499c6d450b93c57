use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::model::Breed;
use crate::utils::error::{FetchError, Result};

#[derive(Debug, Serialize)]
struct BreedListEnvelope<'a> {
    exported_at: DateTime<Utc>,
    count: usize,
    breeds: &'a [Breed],
}

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    name: &'a str,
    image_url: &'a str,
    temperament: &'a str,
}

pub fn to_json(breeds: &[Breed]) -> Result<String> {
    let envelope = BreedListEnvelope {
        exported_at: Utc::now(),
        count: breeds.len(),
        breeds,
    };
    Ok(serde_json::to_string_pretty(&envelope)?)
}

pub fn to_csv(breeds: &[Breed]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for breed in breeds {
        writer.serialize(CsvRow {
            name: &breed.name,
            image_url: &breed.image_url,
            temperament: breed.temperament_text(),
        })?;
    }

    let bytes = writer.into_inner().map_err(|e| {
        FetchError::Io(std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

pub fn render_table(breeds: &[Breed]) -> String {
    let name_width = breeds
        .iter()
        .map(|b| b.name.len())
        .max()
        .unwrap_or(0)
        .max("NAME".len());

    let mut lines = Vec::with_capacity(breeds.len() + 2);
    lines.push(format!("{:<name_width$}  {}", "NAME", "TEMPERAMENT"));
    for breed in breeds {
        lines.push(format!(
            "{:<name_width$}  {}",
            breed.name,
            breed.temperament_text()
        ));
    }
    lines.push(format!("{} breeds", breeds.len()));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::NO_TEMPERAMENT;

    fn breeds() -> Vec<Breed> {
        vec![
            Breed {
                name: "Akita".to_string(),
                image_url: "https://img/a.png".to_string(),
                temperament: Some("Docile, Alert".to_string()),
            },
            Breed {
                name: "Beagle".to_string(),
                image_url: "https://img/b.png".to_string(),
                temperament: None,
            },
        ]
    }

    #[test]
    fn test_csv_has_header_and_sentinel() {
        let csv = to_csv(&breeds()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "name,image_url,temperament");
        assert_eq!(lines[1], "Akita,https://img/a.png,\"Docile, Alert\"");
        assert_eq!(lines[2], format!("Beagle,https://img/b.png,{}", NO_TEMPERAMENT));
    }

    #[test]
    fn test_json_envelope_shape() {
        let json = to_json(&breeds()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["count"], 2);
        assert!(value["exported_at"].is_string());
        assert_eq!(value["breeds"][0]["name"], "Akita");
        // absent temperament is omitted, not null
        assert!(value["breeds"][1].get("temperament").is_none());
    }

    #[test]
    fn test_table_lists_every_breed() {
        let table = render_table(&breeds());

        assert!(table.contains("Akita"));
        assert!(table.contains("Beagle"));
        assert!(table.contains(NO_TEMPERAMENT));
        assert!(table.ends_with("2 breeds"));
    }
}
