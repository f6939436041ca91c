// File: src/nav.rs
// Purpose: Maud navigation-link helpers driven by the active state

use maud::{html, Markup};
use waymark::Active;

/// An anchor that carries the active class when the current path equals
/// `href` exactly. The class attribute is omitted entirely when inactive.
pub fn nav_link(active: &Active, href: &str, label: &str) -> Markup {
    link_with_class(href, label, active.uri_class(href))
}

/// An anchor that carries the active class when the current path matches
/// the glob `pattern` (so `/blog` stays highlighted on `/blog/some-post`).
pub fn nav_link_pattern(active: &Active, href: &str, pattern: &str, label: &str) -> Markup {
    link_with_class(href, label, active.uri_pattern_class(pattern))
}

fn link_with_class(href: &str, label: &str, class: &str) -> Markup {
    let class = Some(class).filter(|c| !c.is_empty());
    html! {
        a href=(href) class=[class] { (label) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use waymark::RequestSnapshot;

    fn on_path(path: &str) -> Active {
        Active::new(None, Some(RequestSnapshot::new(path)))
    }

    #[test]
    fn test_nav_link_active() {
        let active = on_path("/blog");
        let markup = nav_link(&active, "/blog", "Blog");
        assert_eq!(markup.into_string(), r#"<a href="/blog" class="active">Blog</a>"#);
    }

    #[test]
    fn test_nav_link_inactive_omits_class() {
        let active = on_path("/about");
        let markup = nav_link(&active, "/blog", "Blog");
        assert_eq!(markup.into_string(), r#"<a href="/blog">Blog</a>"#);
    }

    #[test]
    fn test_nav_link_pattern() {
        let active = on_path("/blog/first-post");
        let markup = nav_link_pattern(&active, "/blog", "blog/*", "Blog");
        assert_eq!(markup.into_string(), r#"<a href="/blog" class="active">Blog</a>"#);
    }

    #[test]
    fn test_label_is_escaped() {
        let active = on_path("/");
        let markup = nav_link(&active, "/x", "<b>");
        assert_eq!(markup.into_string(), r#"<a href="/x">&lt;b&gt;</a>"#);
    }
}
