use serde::{Deserialize, Deserializer};
use std::io::Read;

#[derive(Debug, Deserialize)]
pub(crate) struct UniversityRow {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) country: String,
    #[serde(rename = "type")]
    pub(crate) kind: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub(crate) description: Option<String>,
    #[serde(
        default,
        alias = "logo",
        deserialize_with = "empty_string_as_none"
    )]
    pub(crate) explore_logo: Option<String>,
    #[serde(default, alias = "url", deserialize_with = "empty_string_as_none")]
    pub(crate) explore_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProgramRow {
    pub(crate) university_id: String,
    pub(crate) name: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub(crate) degree: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub(crate) degree_level: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub(crate) overview: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub(crate) duration: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub(crate) language: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub(crate) admission_requirements: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub(crate) tuition: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub(crate) priority: Option<String>,
}

pub(crate) fn parse_rows<R, T>(reader: R) -> Result<Vec<T>, csv::Error>
where
    R: Read,
    T: for<'de> Deserialize<'de>,
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut rows = Vec::new();

    for record in csv_reader.deserialize::<T>() {
        rows.push(record?);
    }

    Ok(rows)
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
