#[derive(Debug, Default)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub saved: bool,
    pub save: bool,
    pub clipboard: bool,
    pub no_uppercase: bool,
    pub no_lowercase: bool,
    pub no_digits: bool,
    pub no_symbols: bool,
    pub allow_similar: bool,
    pub no_ambiguous: bool,
    pub no_require_all: bool,
    pub length: Option<usize>,
    pub number: Option<usize>,
    pub include: Option<String>,
    pub exclude: Option<String>,
    pub output: Option<String>,
}
