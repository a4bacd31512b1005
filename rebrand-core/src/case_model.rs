use crate::error::SetupError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Words that are uppercased whole when they lead a name ("wp" -> "WP").
pub const DEFAULT_UPPERCASE_PREFIXES: &[&str] = &["wp", "wc"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Title,    // WP Bulk Uploader
    Class,    // WP_Bulk_Uploader
    Constant, // WP_BULK_UPLOADER
    Domain,   // wp-bulk-uploader
    Function, // wp_bulk_uploader
}

impl Style {
    /// All styles, in the order their placeholders are listed.
    pub fn all() -> [Self; 5] {
        [
            Self::Title,
            Self::Class,
            Self::Constant,
            Self::Domain,
            Self::Function,
        ]
    }

    fn separator(self) -> &'static str {
        match self {
            Self::Title => " ",
            Self::Domain => "-",
            Self::Class | Self::Constant | Self::Function => "_",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Title => "title",
            Self::Class => "class",
            Self::Constant => "constant",
            Self::Domain => "domain",
            Self::Function => "function",
        };
        f.write_str(name)
    }
}

/// A validated plugin name: ASCII letters separated by spaces.
///
/// Surrounding whitespace is trimmed and runs of spaces collapse, so
/// `"  wp   bulk "` and `"WP Bulk"` carry the same words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginName {
    raw: String,
    words: Vec<String>,
}

impl PluginName {
    pub fn parse(input: &str) -> Result<Self, SetupError> {
        let trimmed = input.trim();
        if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_alphabetic() || c == ' ') {
            return Err(SetupError::InvalidName(input.to_string()));
        }

        let words = trimmed
            .split(' ')
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self {
            raw: trimmed.to_string(),
            words,
        })
    }

    /// The name as entered, trimmed.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl fmt::Display for PluginName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase(),
    }
}

/// Capitalized words, with a leading prefix word uppercased whole.
fn title_words<S: AsRef<str>>(name: &PluginName, uppercase_prefixes: &[S]) -> Vec<String> {
    name.words()
        .iter()
        .enumerate()
        .map(|(i, word)| {
            if i == 0
                && uppercase_prefixes
                    .iter()
                    .any(|p| p.as_ref().eq_ignore_ascii_case(word))
            {
                word.to_ascii_uppercase()
            } else {
                capitalize(word)
            }
        })
        .collect()
}

pub fn to_style(name: &PluginName, style: Style) -> String {
    to_style_with_prefixes(name, style, DEFAULT_UPPERCASE_PREFIXES)
}

pub fn to_style_with_prefixes<S: AsRef<str>>(
    name: &PluginName,
    style: Style,
    uppercase_prefixes: &[S],
) -> String {
    let joined = title_words(name, uppercase_prefixes).join(style.separator());
    match style {
        Style::Title | Style::Class => joined,
        Style::Constant => joined.to_ascii_uppercase(),
        Style::Domain | Style::Function => joined.to_ascii_lowercase(),
    }
}

/// The five spellings of one name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variants {
    pub title: String,
    pub class: String,
    pub constant: String,
    pub domain: String,
    pub function: String,
}

impl Variants {
    pub fn derive(name: &PluginName) -> Self {
        Self::derive_with_prefixes(name, DEFAULT_UPPERCASE_PREFIXES)
    }

    pub fn derive_with_prefixes<S: AsRef<str>>(name: &PluginName, uppercase_prefixes: &[S]) -> Self {
        let style = |s| to_style_with_prefixes(name, s, uppercase_prefixes);
        Self {
            title: style(Style::Title),
            class: style(Style::Class),
            constant: style(Style::Constant),
            domain: style(Style::Domain),
            function: style(Style::Function),
        }
    }

    pub fn get(&self, style: Style) -> &str {
        match style {
            Style::Title => &self.title,
            Style::Class => &self.class,
            Style::Constant => &self.constant,
            Style::Domain => &self.domain,
            Style::Function => &self.function,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Style, &str)> {
        Style::all().into_iter().map(move |s| (s, self.get(s)))
    }
}
