use async_trait::async_trait;

use gamescout_core::error::{Error, Result};
use gamescout_core::traits::TranslationProvider;

use crate::client::LlmClient;

/// `TranslationProvider` backed by a chat completion. The reply is expected
/// to be the bare translation; stray wrapping quotes are stripped.
#[derive(Clone)]
pub struct LlmTranslator {
    client: LlmClient,
}

impl LlmTranslator {
    pub fn new(client: LlmClient) -> Self {
        Self { client }
    }
}

fn translation_prompt(text: &str, target_language: &str) -> String {
    format!(
        "Translate the following game search query into {target_language}. \
         Reply with ONLY the translation, no explanation and no quotes.\n\n\
         Query: {text}"
    )
}

fn strip_reply(reply: &str) -> String {
    let trimmed = reply.trim();
    let trimmed = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    trimmed.trim().to_string()
}

#[async_trait]
impl TranslationProvider for LlmTranslator {
    async fn translate(&self, text: &str, target_language: &str) -> Result<String> {
        let prompt = translation_prompt(text, target_language);
        let reply = self
            .client
            .chat(&prompt)
            .await
            .map_err(|e| Error::TranslationUnavailable(e.to_string()))?;
        let translated = strip_reply(&reply);
        if translated.is_empty() {
            return Err(Error::TranslationUnavailable(
                "provider returned an empty translation".to_string(),
            ));
        }
        Ok(translated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_names_the_target_language_and_query() {
        let prompt = translation_prompt("games like chess", "ja");
        assert!(prompt.contains("into ja"));
        assert!(prompt.contains("games like chess"));
    }

    #[test]
    fn strips_wrapping_quotes_and_whitespace() {
        assert_eq!(strip_reply("  \"jeux comme les échecs\"\n"), "jeux comme les échecs");
        assert_eq!(strip_reply("plain reply"), "plain reply");
        // a lone quote is not a wrapping pair
        assert_eq!(strip_reply("\"unbalanced"), "\"unbalanced");
    }
}
