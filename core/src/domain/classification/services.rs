use image::DynamicImage;
use image::imageops::{self, FilterType};

use crate::domain::classification::{INPUT_HEIGHT, INPUT_WIDTH};
use crate::domain::common::entities::app_errors::CoreError;

use super::entities::Prediction;

/// Decodes raw upload bytes into the classifier's input tensor.
///
/// The image is converted to 3-channel color, resized to 224x224 and scaled
/// to `[0, 1]`; the flattened tensor carries a leading batch dimension of
/// size 1. The decoded RGB image is returned alongside so enrichment can
/// re-encode it for the external model.
pub fn preprocess(image_data: &[u8]) -> Result<(Vec<f32>, DynamicImage), CoreError> {
    let image = image::load_from_memory(image_data)
        .map_err(|e| CoreError::DecodeError(e.to_string()))?;

    let rgb = image.into_rgb8();
    let resized = imageops::resize(&rgb, INPUT_WIDTH, INPUT_HEIGHT, FilterType::Triangle);
    let input = resized
        .into_raw()
        .iter()
        .map(|&px| px as f32 / 255.0)
        .collect();

    Ok((input, DynamicImage::ImageRgb8(rgb)))
}

/// Index and value of the maximum score. The value is taken as the
/// confidence as-is; no softmax is applied.
pub fn top_prediction(scores: &[f32]) -> Option<Prediction> {
    scores
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(index, &confidence)| Prediction { index, confidence })
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use image::{ImageFormat, RgbImage};

    use super::*;
    use crate::domain::classification::INPUT_CHANNELS;

    fn encode_png(width: u32, height: u32) -> Vec<u8> {
        let image = RgbImage::from_fn(width, height, |x, y| {
            image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
        });

        let mut bytes = Vec::new();
        DynamicImage::ImageRgb8(image)
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn preprocess_produces_normalized_input_tensor() {
        let (input, original) = preprocess(&encode_png(64, 48)).unwrap();

        let expected = (INPUT_WIDTH * INPUT_HEIGHT) as usize * INPUT_CHANNELS;
        assert_eq!(input.len(), expected);
        assert!(input.iter().all(|&v| (0.0..=1.0).contains(&v)));
        assert_eq!((original.width(), original.height()), (64, 48));
    }

    #[test]
    fn preprocess_rejects_malformed_input() {
        let err = preprocess(b"definitely not an image").unwrap_err();

        assert!(matches!(err, CoreError::DecodeError(_)));
    }

    #[test]
    fn top_prediction_selects_argmax() {
        let prediction = top_prediction(&[0.1, 0.05, 0.7, 0.15]).unwrap();

        assert_eq!(prediction.index, 2);
        assert_eq!(prediction.confidence, 0.7);
    }

    #[test]
    fn top_prediction_of_empty_scores_is_none() {
        assert_eq!(top_prediction(&[]), None);
    }
}
