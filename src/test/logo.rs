#[cfg(test)]
mod tests {
    use crate::models::{Logo, LogoFormat};

    #[test]
    fn sniffs_format_from_bytes() {
        let png = Logo::new(vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 1], None);
        let jpeg = Logo::new(vec![0xFF, 0xD8, 0xFF, 0xE0], None);
        let gif = Logo::new(b"GIF87a....".to_vec(), None);
        let svg = Logo::new(
            b"<?xml version=\"1.0\"?>\n<svg xmlns=\"http://www.w3.org/2000/svg\"/>".to_vec(),
            None,
        );

        assert_eq!(png.format(), LogoFormat::Png);
        assert_eq!(jpeg.format(), LogoFormat::Jpeg);
        assert_eq!(gif.format(), LogoFormat::Gif);
        assert_eq!(svg.format(), LogoFormat::Svg);
    }

    #[test]
    fn falls_back_to_content_type() {
        let logo = Logo::new(vec![1, 2, 3], Some(String::from("image/jpeg; charset=binary")));
        assert_eq!(logo.format(), LogoFormat::Jpeg);

        let unknown = Logo::new(vec![1, 2, 3], Some(String::from("text/html")));
        assert_eq!(unknown.format(), LogoFormat::Unknown);
        assert_eq!(unknown.format().to_string(), "unknown");
        assert_eq!(unknown.size(), 3);
    }
}
