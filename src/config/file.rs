//! Settings persistence - one escaped-CSV line under ~/.config.

use std::env;
use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use super::GenerationConfig;

const FIELD_COUNT: usize = 13;

pub fn save(config: &GenerationConfig) -> std::io::Result<()> {
    save_to(config, &settings_path())
}

pub fn load(config: &mut GenerationConfig) -> std::io::Result<()> {
    load_from(config, &settings_path())
}

fn save_to(config: &GenerationConfig, path: &str) -> std::io::Result<()> {
    if let Some(parent) = Path::new(path).parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    let line = format!(
        "{},{},{},{},{},{},{},{},{},{},{},{},{}\n",
        config.length,
        config.count,
        config.uppercase,
        config.lowercase,
        config.digits,
        config.symbols,
        escape(&config.custom_include),
        escape(&config.exclude_chars),
        config.avoid_similar,
        config.avoid_ambiguous,
        config.require_all_categories,
        escape(&config.output_file_path),
        config.to_clipboard,
    );

    file.write_all(line.as_bytes())
}

fn load_from(config: &mut GenerationConfig, path: &str) -> std::io::Result<()> {
    if !Path::new(path).exists() {
        return save_to(config, path);
    }

    let file = OpenOptions::new().read(true).open(path)?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    let parts = split_escaped(line.trim(), ',');
    if parts.len() != FIELD_COUNT {
        // Stale or corrupt settings line: rewrite from current values.
        return save_to(config, path);
    }

    config.length = parts[0].parse().unwrap_or(config.length);
    config.count = parts[1].parse().unwrap_or(config.count);
    config.uppercase = parts[2].parse().unwrap_or(config.uppercase);
    config.lowercase = parts[3].parse().unwrap_or(config.lowercase);
    config.digits = parts[4].parse().unwrap_or(config.digits);
    config.symbols = parts[5].parse().unwrap_or(config.symbols);
    config.custom_include = parts[6].clone();
    config.exclude_chars = parts[7].clone();
    config.avoid_similar = parts[8].parse().unwrap_or(config.avoid_similar);
    config.avoid_ambiguous = parts[9].parse().unwrap_or(config.avoid_ambiguous);
    config.require_all_categories = parts[10].parse().unwrap_or(config.require_all_categories);
    config.output_file_path = parts[11].clone();
    config.to_clipboard = parts[12].parse().unwrap_or(config.to_clipboard);

    Ok(())
}

/// Escape `,` and the escape character itself in free-text fields.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            ',' => out.push_str("|,"),
            '|' => out.push_str("||"),
            _ => out.push(c),
        }
    }
    out
}

fn split_escaped(s: &str, delimiter: char) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut escape_next = false;

    for c in s.chars() {
        if escape_next {
            current.push(c);
            escape_next = false;
        } else if c == '|' {
            escape_next = true;
        } else if c == delimiter {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    parts.push(current);

    parts
}

#[inline]
fn settings_path() -> String {
    let home_dir = env::var("HOME").unwrap_or_else(|_| ".".into());
    format!("{}/.config/passbatch/settings", home_dir)
}
