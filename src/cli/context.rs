//! CLI context - bundles config, flags, and delivery.

use zeroize::Zeroize;

use super::{CliFlags, prompts};
use crate::config::GenerationConfig;
use crate::pass::{self, output};
use crate::rand;

/// Early exit - not an error, just done.
pub struct Done;

/// Application context for CLI mode.
pub struct Context {
    pub config: GenerationConfig,
    pub flags: CliFlags,
}

impl Context {
    /// Create a new context by parsing command-line arguments.
    /// Returns Err with the error message if parsing fails.
    pub fn new(args: Vec<String>) -> Result<Self, String> {
        let flags = super::parse(&args).map_err(|e| e.to_string())?;

        let config = if flags.saved {
            GenerationConfig::load_from_file().unwrap_or_else(|e| {
                prompts::warn(&format!("Failed to load settings: {}", e));
                GenerationConfig::default()
            })
        } else {
            GenerationConfig::default()
        };

        Ok(Self { config, flags })
    }

    /// Run CLI. Returns `Err(Done)` for early exits, `Ok(())` on completion.
    pub fn run(&mut self) -> Result<(), Done> {
        self.handle_info_flags()?;
        super::quiet::set(self.flags.quiet);
        self.apply_flags();
        self.handle_save();
        self.generate_output();
        Ok(())
    }

    fn handle_info_flags(&self) -> Result<(), Done> {
        if self.flags.help {
            super::print_help();
            return Err(Done);
        }
        if self.flags.version {
            println!("passbatch {}", env!("CARGO_PKG_VERSION"));
            return Err(Done);
        }
        Ok(())
    }

    /// Apply CLI flags to the config.
    fn apply_flags(&mut self) {
        if let Some(len) = self.flags.length {
            self.config.length = len;
        }
        if let Some(num) = self.flags.number {
            self.config.count = num;
        }

        if self.flags.no_uppercase {
            self.config.uppercase = false;
        }
        if self.flags.no_lowercase {
            self.config.lowercase = false;
        }
        if self.flags.no_digits {
            self.config.digits = false;
        }
        if self.flags.no_symbols {
            self.config.symbols = false;
        }
        if self.flags.allow_similar {
            self.config.avoid_similar = false;
        }
        if self.flags.no_ambiguous {
            self.config.avoid_ambiguous = true;
        }
        if self.flags.no_require_all {
            self.config.require_all_categories = false;
        }

        if let Some(ref chars) = self.flags.include {
            self.config.custom_include = chars.clone();
        }
        if let Some(ref chars) = self.flags.exclude {
            self.config.exclude_chars = chars.clone();
        }

        if let Some(ref path) = self.flags.output {
            self.config.output_file_path = output::resolve_export_path(path);
        }
        if self.flags.clipboard {
            self.config.to_clipboard = true;
        }
    }

    fn handle_save(&self) {
        if self.flags.save
            && let Err(e) = self.config.save_to_file()
        {
            prompts::warn(&format!("Failed to save settings: {}", e));
        }
    }

    /// Generate the batch and deliver it.
    fn generate_output(&mut self) {
        let mut rng = rand::select();
        if !rng.is_secure() {
            prompts::insecure_source(rng.name());
        }

        let requested = self.config.count.clamp(pass::MIN_COUNT, pass::MAX_COUNT);
        let mut batch = pass::generate_batch(&self.config, rng.as_mut());
        if batch.len() < requested {
            prompts::short_batch(batch.len(), requested);
        }

        if self.config.to_clipboard {
            if output::to_clipboard(&batch) {
                prompts::clipboard_copied();
            }
        } else if !self.config.output_file_path.is_empty() {
            match output::to_file(&batch, &self.config.output_file_path) {
                Ok(()) => {
                    let full_path = std::fs::canonicalize(&self.config.output_file_path)
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|_| self.config.output_file_path.clone());
                    prompts::passwords_written(batch.len(), &full_path);
                }
                Err(e) => {
                    prompts::error(&format!(
                        "Failed to write {}: {}",
                        self.config.output_file_path, e
                    ));
                }
            }
        } else {
            output::to_stdout(&batch);
        }

        for password in &mut batch {
            password.zeroize();
        }
    }
}
