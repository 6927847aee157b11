use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Ownership class of an institution. Unknown labels are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InstitutionType {
    Public,
    Private,
    Other(String),
}

impl InstitutionType {
    /// Lower-cased key compared against the type control.
    pub fn key(&self) -> String {
        match self {
            Self::Public => "public".to_string(),
            Self::Private => "private".to_string(),
            Self::Other(raw) => raw.trim().to_lowercase(),
        }
    }
}

impl From<String> for InstitutionType {
    fn from(value: String) -> Self {
        match value.trim().to_lowercase().as_str() {
            "public" => Self::Public,
            "private" => Self::Private,
            _ => Self::Other(value),
        }
    }
}

impl From<InstitutionType> for String {
    fn from(value: InstitutionType) -> Self {
        match value {
            InstitutionType::Other(raw) => raw,
            known => known.key(),
        }
    }
}

impl fmt::Display for InstitutionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Other(raw) => f.write_str(raw),
            known => f.write_str(&known.key()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Institution {
    pub id: String,
    pub name: String,
    pub country: String,
    #[serde(rename = "type")]
    pub kind: InstitutionType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, alias = "explore_logo", deserialize_with = "null_as_default")]
    pub logo: String,
    #[serde(default, alias = "explore_url", deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub programs: Vec<Program>,
    /// Featured programs for the university page: the head of `programs`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority_programs: Option<Vec<Program>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_url: Option<String>,
}

impl Institution {
    pub fn country_key(&self) -> String {
        self.country.trim().to_lowercase()
    }

    pub fn find_program(&self, name: &str) -> Option<&Program> {
        self.programs.iter().find(|program| program.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub degree: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub degree_level: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub overview: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub language: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub admission_requirements: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tuition: String,
    #[serde(
        default,
        deserialize_with = "lenient_priority",
        skip_serializing_if = "Option::is_none"
    )]
    pub priority: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_url: Option<String>,
}

impl Program {
    /// Lower-cased degree used for matching. Falls back to `degree_level`
    /// when the degree label is blank.
    pub fn degree_key(&self) -> String {
        let degree = self.degree.trim();
        if degree.is_empty() {
            self.degree_level
                .as_deref()
                .map(|level| level.trim().to_lowercase())
                .unwrap_or_default()
        } else {
            degree.to_lowercase()
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPriority {
    Integer(i64),
    Float(f64),
    Text(String),
}

/// Accepts integers, integral floats and numeric strings. Anything else reads
/// as "no priority" rather than failing the whole catalog.
fn lenient_priority<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawPriority>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| match value {
        RawPriority::Integer(number) => i32::try_from(number).ok(),
        RawPriority::Float(number) if number.fract() == 0.0 => {
            i32::try_from(number as i64).ok()
        }
        RawPriority::Float(_) => None,
        RawPriority::Text(text) => parse_priority(&text),
    }))
}

pub(crate) fn parse_priority(text: &str) -> Option<i32> {
    text.trim().parse::<i32>().ok()
}
