use std::io::Cursor;

use image::DynamicImage;

use super::entities::Enrichment;
use super::ports::LlmClient;
use super::prompt::{self, NAME_MARKER, NOT_FOUND, RECIPE_MARKER, RECIPE_UNAVAILABLE};

/// Parses the model reply by scanning its lines for the two literal
/// markers. When a marker occurs on more than one line, the last occurrence
/// wins. A missing marker leaves the corresponding field at the
/// `NOT_FOUND` placeholder.
pub fn parse_reply(reply: &str) -> Enrichment {
    let lines: Vec<&str> = reply.split('\n').collect();

    let mut name_index = None;
    let mut recipe_index = None;

    for (i, line) in lines.iter().enumerate() {
        if line.starts_with(NAME_MARKER) {
            name_index = Some(i);
        } else if line.starts_with(RECIPE_MARKER) {
            recipe_index = Some(i);
        }
    }

    let display_name = match name_index {
        Some(i) => lines[i].replace(NAME_MARKER, "").trim().to_string(),
        None => NOT_FOUND.to_string(),
    };

    // The recipe is everything from the marker line onward, with the marker
    // prefix stripped once.
    let recipe = match recipe_index {
        Some(i) => lines[i..]
            .join("\n")
            .replacen(RECIPE_MARKER, "", 1)
            .trim()
            .to_string(),
        None => NOT_FOUND.to_string(),
    };

    Enrichment {
        display_name,
        recipe,
    }
}

/// Sends the original image and the classifier's label to the external
/// model and parses the reply.
///
/// Never fails: a disabled client, an encoding error, a failed call or a
/// malformed reply all degrade to the raw label and the fixed
/// unavailable-recipe string.
pub async fn enrich<L: LlmClient>(
    client: Option<&L>,
    image: &DynamicImage,
    model_prediction: &str,
) -> Enrichment {
    let fallback = || Enrichment {
        display_name: model_prediction.to_string(),
        recipe: RECIPE_UNAVAILABLE.to_string(),
    };

    let Some(client) = client else {
        tracing::debug!("no LLM client configured, skipping enrichment");
        return fallback();
    };

    let mut jpeg = Vec::new();
    if let Err(e) = image.write_to(&mut Cursor::new(&mut jpeg), image::ImageFormat::Jpeg) {
        tracing::error!("failed to encode image for enrichment: {}", e);
        return fallback();
    }

    match client
        .generate_with_image(prompt::build_prompt(model_prediction), jpeg)
        .await
    {
        Ok(reply) => {
            tracing::debug!(%reply, "LLM reply");
            parse_reply(&reply)
        }
        Err(e) => {
            tracing::error!("enrichment call failed: {}", e);
            fallback()
        }
    }
}
