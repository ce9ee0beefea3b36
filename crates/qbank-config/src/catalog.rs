//! Catalog layout and presentation settings.

use serde::{Deserialize, Serialize};

fn default_index_file() -> String {
    String::from("QuestionBankSubjects.csv")
}

fn default_questions_dir() -> String {
    String::from("questions")
}

fn default_image_url_prefix() -> String {
    String::from("/static/")
}

fn default_image_content_type() -> String {
    String::from("image/png")
}

const fn default_page_size() -> i64 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Subject index file, relative to the storage root.
    #[serde(default = "default_index_file")]
    pub index_file: String,

    /// Directory holding question images, relative to the storage root.
    #[serde(default = "default_questions_dir")]
    pub questions_dir: String,

    /// Prefix prepended to an image filename to form a question's `imageUrl`.
    #[serde(default = "default_image_url_prefix")]
    pub image_url_prefix: String,

    /// Content type declared for every proxied image.
    #[serde(default = "default_image_content_type")]
    pub image_content_type: String,

    /// Page size used when a listing request does not give one.
    #[serde(default = "default_page_size")]
    pub default_page_size: i64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            index_file: default_index_file(),
            questions_dir: default_questions_dir(),
            image_url_prefix: default_image_url_prefix(),
            image_content_type: default_image_content_type(),
            default_page_size: default_page_size(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = CatalogConfig::default();
        assert_eq!(config.index_file, "QuestionBankSubjects.csv");
        assert_eq!(config.questions_dir, "questions");
        assert_eq!(config.image_url_prefix, "/static/");
        assert_eq!(config.image_content_type, "image/png");
        assert_eq!(config.default_page_size, 10);
    }
}
