//! Filename derivation for downloaded assets
//!
//! Cover images are named after the last path segment of their source URL;
//! book texts are named after their title with a `.txt` extension. Both go
//! through filename sanitization before touching the filesystem.

use url::Url;

/// Builds the on-disk filename for a cover image from its source URL
///
/// The name is the URL's final path segment run through filename
/// sanitization. Returns `None` when the URL ends in a slash or the
/// sanitized segment comes out empty, in which case there is nothing
/// sensible to store the image under.
pub fn image_filename(url: &Url) -> Option<String> {
    let segment = url.path_segments()?.last()?;
    if segment.is_empty() {
        return None;
    }

    let name = sanitize_filename::sanitize(segment);
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// Builds the on-disk filename for a book text from its title
///
/// The title is used as the filename stem with a `.txt` extension; path
/// separators and other unsafe characters are stripped.
pub fn text_filename(title: &str) -> String {
    sanitize_filename::sanitize(format!("{}.txt", title))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_filename_from_shot_url() {
        let url = Url::parse("http://tululu.org/shots/239.jpg").unwrap();
        assert_eq!(image_filename(&url), Some("239.jpg".to_string()));
    }

    #[test]
    fn test_image_filename_ignores_query() {
        let url = Url::parse("http://tululu.org/images/nopic.gif?v=2").unwrap();
        assert_eq!(image_filename(&url), Some("nopic.gif".to_string()));
    }

    #[test]
    fn test_image_filename_trailing_slash() {
        let url = Url::parse("http://tululu.org/shots/").unwrap();
        assert_eq!(image_filename(&url), None);
    }

    #[test]
    fn test_image_filename_root_url() {
        let url = Url::parse("http://tululu.org/").unwrap();
        assert_eq!(image_filename(&url), None);
    }

    #[test]
    fn test_text_filename_plain_title() {
        assert_eq!(text_filename("Eugene Onegin"), "Eugene Onegin.txt");
    }

    #[test]
    fn test_text_filename_strips_path_separators() {
        let name = text_filename("Either/Or: Part I");
        assert!(!name.contains('/'));
        assert!(name.ends_with(".txt"));
    }

    #[test]
    fn test_text_filename_keeps_cyrillic() {
        assert_eq!(text_filename("Пикник на обочине"), "Пикник на обочине.txt");
    }
}
