//! Languages command implementation

use super::AppContext;
use crate::output::print_json;
use anyhow::Result;
use clap::Args;
use w3w_api::AvailableLanguagesResponse;

/// Arguments for the languages command
#[derive(Debug, Args)]
pub struct LanguagesArgs {
    /// Print the raw JSON response
    #[arg(long)]
    pub json: bool,
}

impl LanguagesArgs {
    /// Execute the languages command
    pub fn execute(&self, ctx: &AppContext) -> Result<()> {
        let service = ctx.service()?;
        let response = ctx.block_on(service.v3().available_languages())??;

        if self.json {
            return print_json(&response, ctx.pretty_json());
        }
        print!("{}", render_languages(&response));
        Ok(())
    }
}

fn render_languages(response: &AvailableLanguagesResponse) -> String {
    let mut out = String::new();
    for language in &response.languages {
        out.push_str(&format!(
            "{:<4} {} ({})\n",
            language.code, language.name, language.native_name
        ));
        for locale in &language.locales {
            out.push_str(&format!(
                "     {:<7} {} ({})\n",
                locale.code, locale.name, locale.native_name
            ));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_languages() {
        let response: AvailableLanguagesResponse = serde_json::from_str(
            r#"{"languages": [
                {"code": "de", "name": "German", "nativeName": "Deutsch"},
                {"code": "oo", "name": "Bosnian-Croatian-Montenegrin-Serbian", "nativeName": "Bosnian",
                 "locales": [{"code": "oo_la", "name": "Latin", "nativeName": "latinica"}]}
            ]}"#,
        )
        .unwrap();

        let text = render_languages(&response);
        assert!(text.starts_with("de   German (Deutsch)\n"));
        assert!(text.contains("     oo_la   Latin (latinica)\n"));
    }
}
