use crate::catalog::models::KeyImage;
use crate::constants::promotion::THUMBNAIL_IMAGE_TYPES;

/// Picks the thumbnail for a catalog entry.
///
/// Images are scanned in upstream order and the first one labelled
/// `Thumbnail` or `DieselGameBox` wins; neither label is preferred over the
/// other.
pub fn select_thumbnail(images: &[KeyImage]) -> Option<String> {
    images
        .iter()
        .find(|image| THUMBNAIL_IMAGE_TYPES.contains(&image.image_type.as_str()))
        .map(|image| image.url.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(image_type: &str, url: &str) -> KeyImage {
        KeyImage {
            image_type: image_type.to_string(),
            url: url.to_string(),
        }
    }

    #[test]
    fn test_skips_unrelated_labels() {
        let images = vec![image("Other", "a"), image("Thumbnail", "b")];
        assert_eq!(select_thumbnail(&images), Some("b".to_string()));
    }

    #[test]
    fn test_first_matching_label_wins_regardless_of_kind() {
        let images = vec![
            image("OfferImageWide", "wide"),
            image("DieselGameBox", "box"),
            image("Thumbnail", "thumb"),
        ];
        assert_eq!(select_thumbnail(&images), Some("box".to_string()));
    }

    #[test]
    fn test_no_match_is_none() {
        let images = vec![image("OfferImageTall", "tall"), image("VaultClosed", "vault")];
        assert_eq!(select_thumbnail(&images), None);
        assert_eq!(select_thumbnail(&[]), None);
    }

    #[test]
    fn test_labels_are_case_sensitive() {
        let images = vec![image("thumbnail", "lower")];
        assert_eq!(select_thumbnail(&images), None);
    }
}
