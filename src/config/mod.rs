//! Generation settings.

mod file;

use crate::pass::charset::Category;

/// Everything one generation request depends on, plus where the batch
/// should be delivered. Owned by the front end and passed by reference
/// into the core; the core never mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    pub length: usize,
    pub count: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub symbols: bool,
    pub custom_include: String,
    pub exclude_chars: String,
    pub avoid_similar: bool,
    pub avoid_ambiguous: bool,
    pub require_all_categories: bool,
    pub output_file_path: String,
    pub to_clipboard: bool,
}

impl GenerationConfig {
    pub fn load_from_file() -> Result<Self, std::io::Error> {
        let mut config = GenerationConfig::default();
        file::load(&mut config)?;
        Ok(config)
    }

    pub fn save_to_file(&self) -> Result<(), std::io::Error> {
        file::save(self)
    }

    /// Whether a built-in category participates in the pool.
    pub fn category_enabled(&self, category: Category) -> bool {
        match category {
            Category::Uppercase => self.uppercase,
            Category::Lowercase => self.lowercase,
            Category::Digits => self.digits,
            Category::Symbols => self.symbols,
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: 12,
            count: 10,
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: true,
            custom_include: String::new(),
            exclude_chars: String::new(),
            avoid_similar: true,
            avoid_ambiguous: false,
            require_all_categories: true,
            output_file_path: String::new(),
            to_clipboard: false,
        }
    }
}
