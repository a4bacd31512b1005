use clap::ValueEnum;
use rebrand_core::PluginName;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Summary,
    Json,
}

impl From<OutputFormat> for rebrand_core::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Summary => Self::Summary,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// clap value parser for `--name`
pub fn parse_plugin_name(value: &str) -> Result<PluginName, String> {
    PluginName::parse(value).map_err(|e| e.to_string())
}
