use std::path::PathBuf;

pub const DEFAULT_DOC_DIR: &str = "docs";
pub const DEFAULT_INDEX_FILE_NAME: &str = "search_index.json";
pub const DEFAULT_EXTENSION: &str = ".md";
pub const DEFAULT_LANDING_PAGE: &str = "index.md";
pub const DEFAULT_CATEGORY: &str = "Sin Categoría";

/// Everything a single indexing run needs to know.
#[derive(Debug, Clone)]
pub struct Config {
    pub doc_dir: PathBuf,
    pub output: PathBuf,
    /// Suffix a file name must end with, including the dot.
    pub extension: String,
    /// File name marking a section landing page. Compared case-insensitively.
    pub landing_page: String,
    pub default_category: String,
}

impl Config {
    pub fn new(doc_dir: PathBuf) -> Self {
        let output = doc_dir.join(DEFAULT_INDEX_FILE_NAME);
        Self {
            doc_dir,
            output,
            extension: DEFAULT_EXTENSION.to_string(),
            landing_page: DEFAULT_LANDING_PAGE.to_string(),
            default_category: DEFAULT_CATEGORY.to_string(),
        }
    }

    pub fn with_output(mut self, output: PathBuf) -> Self {
        self.output = output;
        self
    }

    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = if extension.starts_with('.') {
            extension.to_string()
        } else {
            format!(".{extension}")
        };
        self
    }

    pub fn with_landing_page(mut self, landing_page: &str) -> Self {
        self.landing_page = landing_page.to_string();
        self
    }

    pub fn with_default_category(mut self, category: &str) -> Self {
        self.default_category = category.to_string();
        self
    }

    pub fn is_landing_page(&self, file_name: &str) -> bool {
        file_name.to_lowercase() == self.landing_page.to_lowercase()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(PathBuf::from(DEFAULT_DOC_DIR))
    }
}
