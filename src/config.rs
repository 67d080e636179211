use std::fmt::Display;
use std::path::PathBuf;

use anyhow::Result;
use crossterm::style::Stylize;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::default_colors::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleConfig {
    bold: bool,
    italic: bool,
    color: crossterm::style::Color,
}

impl StyleConfig {
    fn style(&self, s: impl ToString) -> String {
        let mut s = s.to_string().with(self.color);
        if self.bold {
            s = s.bold();
        }
        if self.italic {
            s = s.italic();
        }
        s.to_string()
    }
}

pub trait Styleable {
    fn style(&self, c: &StyleConfig) -> String;
}

impl<T> Styleable for T
where
    T: ToString + Display,
{
    fn style(&self, c: &StyleConfig) -> String {
        c.style(self)
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            color: COLOR_WHITE,
            bold: false,
            italic: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub display_uuid: bool,
    pub prefix: String,
    pub suffix: String,
    pub description: String,
    pub separator: String,
    pub style_prefix: StyleConfig,
    pub style_suffix: StyleConfig,
    pub style_description: StyleConfig,
    pub style_separator: StyleConfig,
    pub style_content: StyleConfig,
}

impl OutputConfig {
    pub fn format_str(&self, content: impl ToString) -> String {
        let prefix = self.prefix.style(&self.style_prefix);
        let suffix = self.suffix.style(&self.style_suffix);
        let description = self.description.style(&self.style_description);
        let content = content.to_string().style(&self.style_content);
        format!("{prefix}{description} {content}{suffix}")
    }

    pub fn format_vec(&self, content: &[impl Display]) -> String {
        let prefix = self.prefix.style(&self.style_prefix);
        let suffix = self.suffix.style(&self.style_suffix);
        let description = self.description.style(&self.style_description);
        let separator = self.separator.style(&self.style_separator);
        let mut s = format!("{prefix}{description} ");
        let mut i = content.iter().peekable();
        while let Some(x) = i.next() {
            s.push_str(&x.to_string().style(&self.style_content));
            if i.peek().is_some() {
                s.push_str(&separator);
            }
        }
        s.push_str(&suffix);
        s
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            display_uuid: false,
            prefix: "[".into(),
            suffix: "]".into(),
            description: "".into(),
            separator: ", ".into(),
            style_prefix: StyleConfig::default(),
            style_suffix: StyleConfig::default(),
            style_description: StyleConfig {
                italic: true,
                ..StyleConfig::default()
            },
            style_separator: StyleConfig::default(),
            style_content: StyleConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    pub history_location: PathBuf,
    pub output_uuid: OutputConfig,
    pub output_book: OutputConfig,
    pub output_author: OutputConfig,
    pub output_genre: OutputConfig,
    pub output_publisher: OutputConfig,
    pub output_page_count: OutputConfig,
    pub output_published: OutputConfig,
    pub output_isbn: OutputConfig,
    pub output_success: OutputConfig,
    pub output_error: OutputConfig,
}

impl Config {
    pub fn default_as_string() -> Result<String> {
        Ok(toml::to_string(&Self::default())?)
    }

    pub fn read_config() -> Result<Self> {
        Ok(Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("LIBRIS_"))
            .extract()?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:3000".into(),
            request_timeout_secs: 30,
            history_location: PathBuf::from("~/.local/share/libris/history"),
            output_uuid: OutputConfig {
                prefix: "(".into(),
                suffix: ")".into(),
                style_content: StyleConfig {
                    color: COLOR_DIMMED,
                    ..StyleConfig::default()
                },
                ..OutputConfig::default()
            },
            output_book: OutputConfig {
                style_content: StyleConfig {
                    color: COLOR_BOOK,
                    bold: true,
                    ..StyleConfig::default()
                },
                ..OutputConfig::default()
            },
            output_author: OutputConfig {
                description: "Written by:".into(),
                separator: " and ".into(),
                style_content: StyleConfig {
                    color: COLOR_AUTHOR,
                    ..StyleConfig::default()
                },
                ..OutputConfig::default()
            },
            output_genre: OutputConfig {
                description: "Genres:".into(),
                style_content: StyleConfig {
                    color: COLOR_GENRE,
                    ..StyleConfig::default()
                },
                ..OutputConfig::default()
            },
            output_publisher: OutputConfig {
                description: "Publisher:".into(),
                style_content: StyleConfig {
                    color: COLOR_PUBLISHER,
                    ..StyleConfig::default()
                },
                ..OutputConfig::default()
            },
            output_page_count: OutputConfig {
                description: "Page count:".into(),
                style_description: StyleConfig {
                    italic: true,
                    ..StyleConfig::default()
                },
                style_content: StyleConfig {
                    color: COLOR_PAGE_COUNT,
                    ..StyleConfig::default()
                },
                ..OutputConfig::default()
            },
            output_published: OutputConfig {
                description: "Published:".into(),
                style_description: StyleConfig {
                    italic: true,
                    ..StyleConfig::default()
                },
                style_content: StyleConfig {
                    color: COLOR_PUBLISHED,
                    ..StyleConfig::default()
                },
                ..OutputConfig::default()
            },
            output_isbn: OutputConfig {
                description: "Isbn:".into(),
                style_description: StyleConfig {
                    italic: true,
                    ..StyleConfig::default()
                },
                ..OutputConfig::default()
            },
            output_success: OutputConfig {
                style_content: StyleConfig {
                    color: COLOR_SUCCESS,
                    bold: true,
                    ..StyleConfig::default()
                },
                ..OutputConfig::default()
            },
            output_error: OutputConfig {
                description: "Error:".into(),
                style_content: StyleConfig {
                    color: COLOR_ERROR,
                    bold: true,
                    ..StyleConfig::default()
                },
                ..OutputConfig::default()
            },
        }
    }
}
