//! Fixed prompt template and the literal reply markers the parser scans
//! for. The markers are part of the contract with the external model: the
//! prompt instructs it to emit them and `services::parse_reply` looks for
//! them verbatim.

pub const NAME_MARKER: &str = "YEMEK_ADI:";
pub const RECIPE_MARKER: &str = "TARİF:";

/// Placeholder used when a marker is absent from the reply.
pub const NOT_FOUND: &str = "Tarif Bulunamadı";

/// Recipe text returned when the enrichment call fails entirely.
pub const RECIPE_UNAVAILABLE: &str = "Tarif alınamadı.";

/// Builds the prompt asking the model to confirm or correct the
/// classifier's label and to produce a recipe in the three-section template
/// (ingredients / steps / tips).
pub fn build_prompt(model_prediction: &str) -> String {
    format!(
        "Bu fotoğraftaki yemek görüntüsünü analiz et. \
         Model bu yemeğin '{model_prediction}' olduğunu düşünüyor. \
         1. Bu tahmin doğru mu? Eğer yanlışsa, bu yemeğin ne olduğunu Türkçe adıyla yaz. \
         2. Bu yemeğin detaylı tarifini ver. \
         \nLütfen şu formatta cevap ver:\n\
         YEMEK_ADI: [Türkçe adı]\n\
         TARİF:\n\
         🍽️ MALZEMELER:\n\
         [Malzemeler listesi]\n\n\
         👨‍🍳 HAZIRLANIŞI:\n\
         [Adım adım tarif]\n\n\
         💡 PÜF NOKTALARI:\n\
         [Önemli ipuçları]"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_label_and_markers() {
        let prompt = build_prompt("Mercimek Çorbası");

        assert!(prompt.contains("'Mercimek Çorbası'"));
        assert!(prompt.contains(NAME_MARKER));
        assert!(prompt.contains(RECIPE_MARKER));
    }
}
