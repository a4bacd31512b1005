use anyhow::{bail, Result};
use dialoguer::{theme::ColorfulTheme, Input};
use rebrand_core::PluginName;
use std::io::{self, BufRead, IsTerminal, Write};

pub const NAME_PROMPT: &str = "What will be your Plugin name?";

/// Ask for a plugin name until a valid one is given.
pub fn prompt_for_name() -> Result<PluginName> {
    if io::stdin().is_terminal() && io::stderr().is_terminal() {
        let input: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(NAME_PROMPT)
            .validate_with(|value: &String| -> Result<(), String> {
                PluginName::parse(value)
                    .map(|_| ())
                    .map_err(|e| e.to_string())
            })
            .interact_text()?;
        return Ok(PluginName::parse(&input)?);
    }

    prompt_for_name_with_input(&mut io::stdin().lock(), &mut io::stderr())
}

/// Line-based prompt for piped input; reprompts after every invalid line.
pub fn prompt_for_name_with_input<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
) -> Result<PluginName> {
    loop {
        write!(writer, "{NAME_PROMPT} ")?;
        writer.flush()?;

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            bail!("No plugin name given");
        }

        match PluginName::parse(line.trim_end_matches(['\r', '\n'])) {
            Ok(name) => return Ok(name),
            Err(e) => writeln!(writer, "{e}")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_valid_name_first_try() {
        let mut input = Cursor::new("WP Bulk Uploader\n");
        let mut output = Vec::new();
        let name = prompt_for_name_with_input(&mut input, &mut output).unwrap();
        assert_eq!(name.as_str(), "WP Bulk Uploader");
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "What will be your Plugin name? "
        );
    }

    #[test]
    fn test_reprompts_on_invalid_input() {
        let mut input = Cursor::new("\nPlugin 2\r\nAcme Forms\n");
        let mut output = Vec::new();
        let name = prompt_for_name_with_input(&mut input, &mut output).unwrap();
        assert_eq!(name.as_str(), "Acme Forms");

        let output = String::from_utf8(output).unwrap();
        assert_eq!(output.matches(NAME_PROMPT).count(), 3);
        assert_eq!(
            output
                .matches("Please provide a valid plugin name. Example: WP Bulk Uploader")
                .count(),
            2
        );
    }

    #[test]
    fn test_eof_without_valid_name() {
        let mut input = Cursor::new("123\n");
        let mut output = Vec::new();
        let err = prompt_for_name_with_input(&mut input, &mut output).unwrap_err();
        assert_eq!(err.to_string(), "No plugin name given");
    }
}
