//! Request body types for the JSON API.

use serde::Deserialize;

/// Deserialize a value that may be either a JSON number or a string containing
/// a number. The reference frontend submits category ids as strings.
fn deserialize_string_or_i64<'de, D: serde::Deserializer<'de>>(d: D) -> Result<i64, D::Error> {
    struct Vis;
    impl<'de> serde::de::Visitor<'de> for Vis {
        type Value = i64;
        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            f.write_str("number or numeric string")
        }
        fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<i64, E> {
            Ok(v)
        }
        fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<i64, E> {
            Ok(v as i64)
        }
        fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<i64, E> {
            v.parse().map_err(E::custom)
        }
    }
    d.deserialize_any(Vis)
}

#[derive(Deserialize)]
pub struct CreateQuestionBody {
    pub question: String,
    pub answer: String,
    #[serde(deserialize_with = "deserialize_string_or_i64")]
    pub category: i64,
    #[serde(deserialize_with = "deserialize_string_or_i64")]
    pub difficulty: i64,
}

#[derive(Deserialize)]
pub struct SearchBody {
    #[serde(rename = "searchTerm", default)]
    pub search_term: Option<String>,
}

#[derive(Deserialize)]
pub struct QuizBody {
    #[serde(rename = "previousQuestions", default)]
    pub previous_questions: Vec<i64>,
    #[serde(rename = "quizCategory", default)]
    pub quiz_category: Option<QuizCategory>,
}

#[derive(Deserialize)]
pub struct QuizCategory {
    #[serde(deserialize_with = "deserialize_string_or_i64")]
    pub id: i64,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}
