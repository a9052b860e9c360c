//! Field extraction from book detail pages
//!
//! This module parses one detail page's HTML and pulls out:
//! - Title and author from the page's primary heading
//! - The genre list
//! - Reader comments
//! - The cover image URL
//!
//! Only the heading is mandatory; a page without genres, comments or a
//! cover is a valid book, not an error.

use crate::{ExtractError, ExtractResult};
use scraper::{Html, Selector};
use url::Url;

/// Fields extracted from one book detail page
#[derive(Debug, Clone)]
pub struct BookPage {
    /// Book title, taken from the heading
    pub title: String,

    /// Author name, taken from the heading
    pub author: String,

    /// Genre names in page order; empty when the page lists none
    pub genres: Vec<String>,

    /// Reader comments in page order; empty when the page has none
    pub comments: Vec<String>,

    /// Absolute cover image URL, when the page has a cover
    pub image_url: Option<Url>,
}

/// Parses a detail page's HTML and extracts all book fields
///
/// # Arguments
///
/// * `html` - The detail page HTML
/// * `base_url` - The site base URL, for resolving the relative cover link
///
/// # Returns
///
/// * `Ok(BookPage)` - All fields extracted
/// * `Err(ExtractError)` - The page has no usable title heading
pub fn parse_book_page(html: &str, base_url: &Url) -> ExtractResult<BookPage> {
    let document = Html::parse_document(html);

    let (title, author) = extract_title_and_author(&document)?;
    let genres = extract_genres(&document);
    let comments = extract_comments(&document);
    let image_url = extract_image_url(&document, base_url);

    Ok(BookPage {
        title,
        author,
        genres,
        comments,
        image_url,
    })
}

/// Extracts title and author from the page's first `h1` heading
///
/// The site formats the heading as `"<title> :: <author>"`. The text is
/// split on the first `::` and both halves are trimmed.
pub fn extract_title_and_author(document: &Html) -> ExtractResult<(String, String)> {
    let heading = first_heading_text(document).ok_or(ExtractError::MissingHeading)?;

    let (title, author) = heading
        .split_once("::")
        .ok_or_else(|| ExtractError::MalformedHeading(heading.trim().to_string()))?;

    Ok((title.trim().to_string(), author.trim().to_string()))
}

/// Returns the text of the first `h1` element, if any
fn first_heading_text(document: &Html) -> Option<String> {
    let selector = Selector::parse("h1").ok()?;

    document
        .select(&selector)
        .next()
        .map(|element| element.text().collect::<String>())
}

/// Extracts the genre names from the page's genre links
///
/// Genres live in `span.d_book a` elements; a page without them yields an
/// empty list.
pub fn extract_genres(document: &Html) -> Vec<String> {
    let mut genres = Vec::new();

    if let Ok(selector) = Selector::parse("span.d_book a") {
        for element in document.select(&selector) {
            genres.push(element.text().collect::<String>());
        }
    }

    genres
}

/// Extracts reader comments in page order
///
/// Each comment sits in a `div.texts` container whose `span.black` child
/// holds the comment text. Containers without that span are skipped.
pub fn extract_comments(document: &Html) -> Vec<String> {
    let mut comments = Vec::new();

    if let Ok(container_selector) = Selector::parse("div.texts") {
        if let Ok(text_selector) = Selector::parse("span.black") {
            for container in document.select(&container_selector) {
                if let Some(span) = container.select(&text_selector).next() {
                    comments.push(span.text().collect::<String>());
                }
            }
        }
    }

    comments
}

/// Extracts the cover image URL, resolved against the site base URL
///
/// Returns `None` when the page has no cover element, the element has no
/// `src`, or the `src` does not resolve.
pub fn extract_image_url(document: &Html, base_url: &Url) -> Option<Url> {
    let selector = Selector::parse(".bookimage a img").ok()?;
    let element = document.select(&selector).next()?;
    let src = element.value().attr("src")?;

    base_url.join(src).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_url() -> Url {
        Url::parse("http://tululu.org/").unwrap()
    }

    fn document(html: &str) -> Html {
        Html::parse_document(html)
    }

    #[test]
    fn test_title_and_author_split_and_trimmed() {
        let doc = document("<html><body><h1>Eugene Onegin :: A. Pushkin</h1></body></html>");
        let (title, author) = extract_title_and_author(&doc).unwrap();
        assert_eq!(title, "Eugene Onegin");
        assert_eq!(author, "A. Pushkin");
    }

    #[test]
    fn test_title_split_on_first_separator() {
        let doc = document("<html><body><h1>Either :: Or :: Nobody</h1></body></html>");
        let (title, author) = extract_title_and_author(&doc).unwrap();
        assert_eq!(title, "Either");
        assert_eq!(author, "Or :: Nobody");
    }

    #[test]
    fn test_title_from_first_heading_only() {
        let doc = document(
            "<html><body><h1>First :: Author</h1><h1>Second :: Other</h1></body></html>",
        );
        let (title, _) = extract_title_and_author(&doc).unwrap();
        assert_eq!(title, "First");
    }

    #[test]
    fn test_missing_heading() {
        let doc = document("<html><body><p>no heading here</p></body></html>");
        let result = extract_title_and_author(&doc);
        assert!(matches!(result.unwrap_err(), ExtractError::MissingHeading));
    }

    #[test]
    fn test_heading_without_separator() {
        let doc = document("<html><body><h1>Just a title</h1></body></html>");
        let result = extract_title_and_author(&doc);
        match result.unwrap_err() {
            ExtractError::MalformedHeading(text) => assert_eq!(text, "Just a title"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_extract_genres_in_order() {
        let html = r#"<html><body>
            <span class="d_book">Жанр книги:
                <a href="/l55/">Научная фантастика</a>
                <a href="/l20/">Прочее</a>
            </span>
        </body></html>"#;
        let genres = extract_genres(&document(html));
        assert_eq!(genres, vec!["Научная фантастика", "Прочее"]);
    }

    #[test]
    fn test_no_genres_is_empty_not_error() {
        let genres = extract_genres(&document("<html><body><h1>T :: A</h1></body></html>"));
        assert!(genres.is_empty());
    }

    #[test]
    fn test_extract_comments_in_order() {
        let html = r#"<html><body>
            <div class="texts"><span class="black">Great book!</span></div>
            <div class="texts"><span class="black">Loved it.</span></div>
        </body></html>"#;
        let comments = extract_comments(&document(html));
        assert_eq!(comments, vec!["Great book!", "Loved it."]);
    }

    #[test]
    fn test_comment_container_without_span_is_skipped() {
        let html = r#"<html><body>
            <div class="texts"><span class="black">Kept</span></div>
            <div class="texts"><em>no text span</em></div>
        </body></html>"#;
        let comments = extract_comments(&document(html));
        assert_eq!(comments, vec!["Kept"]);
    }

    #[test]
    fn test_no_comments_is_empty() {
        let comments = extract_comments(&document("<html><body></body></html>"));
        assert!(comments.is_empty());
    }

    #[test]
    fn test_extract_image_url_resolves_relative_src() {
        let html = r#"<html><body>
            <div class="bookimage"><a href="/b239/"><img src="/shots/239.jpg"></a></div>
        </body></html>"#;
        let url = extract_image_url(&document(html), &base_url()).unwrap();
        assert_eq!(url.as_str(), "http://tululu.org/shots/239.jpg");
    }

    #[test]
    fn test_missing_cover_yields_none() {
        let url = extract_image_url(&document("<html><body></body></html>"), &base_url());
        assert!(url.is_none());
    }

    #[test]
    fn test_parse_book_page_full() {
        let html = r#"<html><body>
            <h1>Пикник на обочине :: Аркадий Стругацкий</h1>
            <span class="d_book">Жанр книги: <a href="/l55/">Научная фантастика</a></span>
            <div class="bookimage"><a href="/b11/"><img src="/shots/11.jpg"></a></div>
            <div class="texts"><span class="black">Шедевр.</span></div>
        </body></html>"#;
        let page = parse_book_page(html, &base_url()).unwrap();
        assert_eq!(page.title, "Пикник на обочине");
        assert_eq!(page.author, "Аркадий Стругацкий");
        assert_eq!(page.genres, vec!["Научная фантастика"]);
        assert_eq!(page.comments, vec!["Шедевр."]);
        assert_eq!(
            page.image_url.unwrap().as_str(),
            "http://tululu.org/shots/11.jpg"
        );
    }

    #[test]
    fn test_parse_book_page_without_heading_fails() {
        let result = parse_book_page("<html><body></body></html>", &base_url());
        assert!(result.is_err());
    }
}
