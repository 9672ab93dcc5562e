use crate::application::Service;
use crate::domain::classification::ports::Classifier;
use crate::domain::classification::services::{preprocess, top_prediction};
use crate::domain::common::entities::app_errors::CoreError;
use crate::domain::enrichment::ports::LlmClient;
use crate::domain::enrichment::services::enrich;
use crate::domain::recognition::entities::FoodPrediction;
use crate::domain::recognition::ports::FoodRecognitionService;

impl<C, L> FoodRecognitionService for Service<C, L>
where
    C: Classifier + 'static,
    L: LlmClient + 'static,
{
    async fn predict(&self, image_data: Vec<u8>) -> Result<FoodPrediction, CoreError> {
        // 1. Decode and preprocess the upload
        let (input, original) = preprocess(&image_data)?;

        // 2. Run the classifier
        let scores = self.classifier.scores(input).await?;
        let prediction = top_prediction(&scores).ok_or_else(|| {
            CoreError::ModelError("classifier returned an empty output vector".to_string())
        })?;

        // 3. Look up the label; a mismatch between model width and label
        //    table size must never turn into an out-of-bounds read
        let label = self
            .label_table
            .get(prediction.index)
            .ok_or(CoreError::IndexOutOfRange {
                index: prediction.index,
                size: self.label_table.len(),
            })?;

        tracing::debug!(
            label,
            confidence = prediction.confidence,
            "classifier prediction"
        );

        // 4. Verify the label and fetch a recipe; degrades internally, never
        //    fails the request
        let enrichment = enrich(self.llm_client.as_deref(), &original, label).await;

        Ok(FoodPrediction {
            food_name_en: label.to_string(),
            food_name_tr: enrichment.display_name,
            confidence: prediction.confidence,
            recipe: enrichment.recipe,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use image::{DynamicImage, ImageFormat, RgbImage};

    use super::*;
    use crate::domain::classification::entities::LabelTable;
    use crate::domain::classification::ports::MockClassifier;
    use crate::domain::enrichment::ports::MockLlmClient;
    use crate::domain::enrichment::prompt::RECIPE_UNAVAILABLE;

    fn test_jpeg() -> Vec<u8> {
        let mut bytes = Vec::new();
        DynamicImage::ImageRgb8(RgbImage::new(32, 32))
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Jpeg)
            .unwrap();
        bytes
    }

    fn test_labels() -> LabelTable {
        LabelTable::parse(
            "apple_pie|Elmalı Turta\nbaklava|Baklava\nlentil_soup|Mercimek Çorbası\n",
        )
        .unwrap()
    }

    #[tokio::test]
    async fn predict_returns_label_and_confidence_for_top_score() {
        let mut classifier = MockClassifier::new();
        classifier
            .expect_scores()
            .returning(|_| Box::pin(async { Ok(vec![0.1, 0.8, 0.1]) }));

        let service = Service::<_, MockLlmClient>::new(classifier, test_labels(), None);
        let prediction = service.predict(test_jpeg()).await.unwrap();

        assert_eq!(prediction.food_name_en, "Baklava");
        assert_eq!(prediction.confidence, 0.8);
        // enrichment disabled: raw label and the fixed fallback string
        assert_eq!(prediction.food_name_tr, "Baklava");
        assert_eq!(prediction.recipe, RECIPE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn predict_fails_when_index_exceeds_label_table() {
        let mut classifier = MockClassifier::new();
        classifier
            .expect_scores()
            .returning(|_| Box::pin(async { Ok(vec![0.0, 0.0, 0.0, 1.0]) }));

        let service = Service::<_, MockLlmClient>::new(classifier, test_labels(), None);
        let err = service.predict(test_jpeg()).await.unwrap_err();

        assert!(matches!(
            err,
            CoreError::IndexOutOfRange { index: 3, size: 3 }
        ));
    }

    #[tokio::test]
    async fn predict_rejects_malformed_image() {
        let classifier = MockClassifier::new();
        let service = Service::<_, MockLlmClient>::new(classifier, test_labels(), None);

        let err = service.predict(b"not an image".to_vec()).await.unwrap_err();

        assert!(matches!(err, CoreError::DecodeError(_)));
    }

    #[tokio::test]
    async fn predict_uses_enrichment_reply_for_display_fields() {
        let mut classifier = MockClassifier::new();
        classifier
            .expect_scores()
            .returning(|_| Box::pin(async { Ok(vec![0.0, 0.0, 0.9]) }));

        let mut llm_client = MockLlmClient::new();
        llm_client.expect_generate_with_image().returning(|_, _| {
            Box::pin(async {
                Ok("YEMEK_ADI: Ezogelin Çorbası\nTARİF:\nKırmızı mercimekle pişirilir.".to_string())
            })
        });

        let service = Service::new(classifier, test_labels(), Some(llm_client));
        let prediction = service.predict(test_jpeg()).await.unwrap();

        assert_eq!(prediction.food_name_en, "Mercimek Çorbası");
        assert_eq!(prediction.food_name_tr, "Ezogelin Çorbası");
        assert_eq!(prediction.recipe, "Kırmızı mercimekle pişirilir.");
    }
}
