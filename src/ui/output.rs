use kidari::config::ConfigWarning;

use crate::ui::theme::icons;

pub fn print_config_warnings(warnings: &[ConfigWarning]) {
    eprint!("{}", format_config_warnings(warnings));
}

fn format_config_warnings(warnings: &[ConfigWarning]) -> String {
    let mut out = String::new();
    for w in warnings {
        match w.line {
            Some(line) => out.push_str(&format!(
                "{} Unknown config key '{}' in {}:{}\n",
                icons::WARNING,
                w.key,
                w.file.display(),
                line
            )),
            None => out.push_str(&format!(
                "{} Unknown config key '{}' in {}\n",
                icons::WARNING,
                w.key,
                w.file.display()
            )),
        }

        if let Some(suggestion) = &w.suggestion {
            out.push_str(&format!("   Did you mean '{}'?\n\n", suggestion));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn formats_key_line_and_suggestion() {
        let warnings = vec![ConfigWarning {
            key: "min_sesion_minutes".to_string(),
            file: PathBuf::from("kidari.toml"),
            line: Some(2),
            suggestion: Some("min_session_minutes".to_string()),
        }];

        let out = format_config_warnings(&warnings);
        assert_eq!(
            out,
            format!(
                "{} Unknown config key 'min_sesion_minutes' in kidari.toml:2\n   Did you mean 'min_session_minutes'?\n\n",
                icons::WARNING
            )
        );
    }
}
