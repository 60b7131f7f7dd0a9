//! Tests for URL styles

use super::*;
use crate::error::Error;

// ============================================================================
// Query Argument Tests
// ============================================================================

#[test]
fn test_query_arg_style() {
    let style = QueryArgStyle::new("https://example.com/blog", "page").unwrap();

    assert_eq!(
        style.page_url(PageRef::new(0)).unwrap(),
        "https://example.com/blog"
    );
    assert_eq!(
        style.page_url(PageRef::new(1)).unwrap(),
        "https://example.com/blog?page=2"
    );
    assert_eq!(
        style.page_url(PageRef::new(9)).unwrap(),
        "https://example.com/blog?page=10"
    );
}

#[test]
fn test_query_arg_style_preserves_other_args() {
    let style = QueryArgStyle::new("https://example.com/search?q=rust&page=4", "page").unwrap();

    assert_eq!(
        style.page_url(PageRef::new(0)).unwrap(),
        "https://example.com/search?q=rust"
    );
    assert_eq!(
        style.page_url(PageRef::new(2)).unwrap(),
        "https://example.com/search?q=rust&page=3"
    );
}

#[test]
fn test_query_arg_style_keep_first() {
    let style = QueryArgStyle::new("https://example.com/", "paged")
        .unwrap()
        .keep_first();

    assert_eq!(
        style.page_url(PageRef::new(0)).unwrap(),
        "https://example.com/?paged=1"
    );
}

#[test]
fn test_query_arg_style_invalid_base() {
    let err = QueryArgStyle::new("not a url", "page").unwrap_err();
    assert!(matches!(err, Error::InvalidUrl(_)));
}

// ============================================================================
// Path Segment Tests
// ============================================================================

#[test]
fn test_path_segment_style() {
    let style = PathSegmentStyle::new("https://example.com/blog/", "page").unwrap();

    assert_eq!(
        style.page_url(PageRef::new(0)).unwrap(),
        "https://example.com/blog/"
    );
    assert_eq!(
        style.page_url(PageRef::new(1)).unwrap(),
        "https://example.com/blog/page/2/"
    );
}

#[test]
fn test_path_segment_style_strips_existing_page() {
    let style = PathSegmentStyle::new("https://example.com/news/page/7/?ref=home", "page").unwrap();

    assert_eq!(
        style.page_url(PageRef::new(0)).unwrap(),
        "https://example.com/news/?ref=home"
    );
    assert_eq!(
        style.page_url(PageRef::new(2)).unwrap(),
        "https://example.com/news/page/3/?ref=home"
    );
}

#[test]
fn test_path_segment_style_site_root() {
    let style = PathSegmentStyle::new("https://example.com", "page").unwrap();

    assert_eq!(
        style.page_url(PageRef::new(0)).unwrap(),
        "https://example.com/"
    );
    assert_eq!(
        style.page_url(PageRef::new(4)).unwrap(),
        "https://example.com/page/5/"
    );
}

#[test]
fn test_path_segment_style_without_trailing_slash() {
    let style = PathSegmentStyle::new("https://example.com/docs", "p")
        .unwrap()
        .without_trailing_slash();

    assert_eq!(
        style.page_url(PageRef::new(0)).unwrap(),
        "https://example.com/docs"
    );
    assert_eq!(
        style.page_url(PageRef::new(1)).unwrap(),
        "https://example.com/docs/p/2"
    );
}

#[test]
fn test_path_segment_style_rejects_bad_segment() {
    assert!(PathSegmentStyle::new("https://example.com", "").is_err());
    assert!(PathSegmentStyle::new("https://example.com", "a/b").is_err());
}

// ============================================================================
// Page ID Tests
// ============================================================================

#[test]
fn test_page_id_style() {
    let style = PageIdStyle::new("https://example.com/?p={PAGE_ID}&n={PAGE_NUMBER}");

    assert_eq!(
        style.page_url(PageRef::with_id(2, "318")).unwrap(),
        "https://example.com/?p=318&n=3"
    );
}

#[test]
fn test_page_id_style_requires_id() {
    let style = PageIdStyle::new("https://example.com/?p={PAGE_ID}");
    let err = style.page_url(PageRef::new(5)).unwrap_err();
    assert!(matches!(err, Error::PageUrl { page_index: 5, .. }));

    // Templates without {PAGE_ID} work for sequential pages
    let style = PageIdStyle::new("/chapter-{PAGE_NUMBER}.html");
    assert_eq!(style.page_url(PageRef::new(5)).unwrap(), "/chapter-6.html");
}

// ============================================================================
// Callback Tests
// ============================================================================

#[test]
fn test_callback_style() {
    let style = CallbackStyle::new(|index| Ok(format!("/gallery/{index}")));
    assert_eq!(style.page_url(PageRef::new(3)).unwrap(), "/gallery/3");
}

#[test]
fn test_callback_style_propagates_errors() {
    let style = CallbackStyle::new(|index| {
        if index == 2 {
            Err(Error::page_url(index, "missing permalink"))
        } else {
            Ok(format!("/p/{index}"))
        }
    });

    assert!(style.page_url(PageRef::new(1)).is_ok());
    assert!(style.page_url(PageRef::new(2)).is_err());
}

#[test]
fn test_styles_as_trait_objects() {
    let styles: Vec<Box<dyn PaginationStyle>> = vec![
        Box::new(QueryArgStyle::new("https://example.com/", "page").unwrap()),
        Box::new(PathSegmentStyle::new("https://example.com/", "page").unwrap()),
        Box::new(CallbackStyle::new(|i| Ok(i.to_string()))),
    ];

    for style in &styles {
        assert_eq!(
            style.page_url(PageRef::new(1)).unwrap(),
            style.page_url(PageRef::new(1)).unwrap()
        );
    }
}
