//! Check command implementation

use super::AppContext;
use crate::output::print_json;
use anyhow::Result;
use clap::Args;
use serde::Serialize;
use w3w_api::AutosuggestOptions;

/// Arguments for the check command
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// String to check, e.g. `///filled.count.soap`
    #[arg(value_name = "TEXT", allow_hyphen_values = true)]
    pub text: String,

    /// Confirm with the remote API that the address exists
    #[arg(long)]
    pub validate: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Outcome of a check
#[derive(Debug, Default, Serialize, PartialEq, Eq)]
pub struct CheckReport {
    /// Input as given
    pub input: String,
    /// Whole input is shaped like an address
    pub full_match: bool,
    /// Input looks like a mistyped address
    pub likely_typo: bool,
    /// Remote confirmation, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid: Option<bool>,
    /// Closest existing address for a likely typo, when validating
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl CheckReport {
    /// Offline part of the report
    pub fn local(text: &str) -> Self {
        Self {
            input: text.to_string(),
            full_match: w3w_core::is_full_match(text),
            likely_typo: w3w_core::is_likely_typo(text),
            ..Self::default()
        }
    }

    fn render_text(&self) -> String {
        let yes_no = |b: bool| if b { "yes" } else { "no" };
        let mut out = format!(
            "input:       {}\nfull match:  {}\nlikely typo: {}\n",
            self.input,
            yes_no(self.full_match),
            yes_no(self.likely_typo)
        );
        if let Some(valid) = self.valid {
            out.push_str(&format!("valid:       {}\n", yes_no(valid)));
        }
        if let Some(suggestion) = &self.suggestion {
            out.push_str(&format!("did you mean: {suggestion}\n"));
        }
        out
    }
}

impl CheckArgs {
    /// Execute the check command
    pub fn execute(&self, ctx: &AppContext) -> Result<()> {
        let mut report = CheckReport::local(&self.text);

        if self.validate {
            let service = ctx.service()?;
            ctx.block_on(async {
                report.valid = Some(service.is_valid_3wa(&self.text).await?);
                if !report.full_match && report.likely_typo {
                    let options = AutosuggestOptions::default().n_results(1);
                    let response = service.v3().autosuggest(&self.text, &options).await?;
                    report.suggestion = response.top().map(|s| s.words.clone());
                }
                Ok::<_, w3w_api::ApiError>(())
            })??;
        }
        log::debug!("check report: {:?}", report);

        if self.json {
            print_json(&report, ctx.pretty_json())
        } else {
            print!("{}", report.render_text());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_report() {
        let report = CheckReport::local("///filled.count.soap");
        assert!(report.full_match);
        assert!(!report.likely_typo);
        assert!(report.valid.is_none());

        let report = CheckReport::local("filled.count.soap");
        assert!(report.full_match);
        assert!(report.likely_typo);

        let report = CheckReport::local("filled-count-soap");
        assert!(!report.full_match);
        assert!(report.likely_typo);

        let report = CheckReport::local("hello world");
        assert!(!report.full_match);
        assert!(!report.likely_typo);
    }

    #[test]
    fn test_render_text() {
        let mut report = CheckReport::local("filled-count-soap");
        report.valid = Some(false);
        report.suggestion = Some("filled.count.soap".to_string());
        let text = report.render_text();
        assert!(text.contains("full match:  no"));
        assert!(text.contains("likely typo: yes"));
        assert!(text.contains("valid:       no"));
        assert!(text.contains("did you mean: filled.count.soap"));
    }

    #[test]
    fn test_json_skips_remote_fields() {
        let json = serde_json::to_string(&CheckReport::local("a.b.c")).unwrap();
        assert_eq!(
            json,
            r#"{"input":"a.b.c","full_match":true,"likely_typo":true}"#
        );
    }
}
