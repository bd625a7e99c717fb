//! HTML helper functions

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Generate Open Graph meta tags
pub fn open_graph(
    kind: &str,
    title: &str,
    url: &str,
    image: Option<&str>,
    locale: &str,
    site_name: &str,
) -> String {
    let mut tags = vec![
        format!(r#"<meta property="og:type" content="{}">"#, kind),
        format!(
            r#"<meta property="og:title" content="{}">"#,
            html_escape(title)
        ),
        format!(r#"<meta property="og:url" content="{}">"#, url),
    ];

    if let Some(img) = image {
        tags.push(format!(r#"<meta property="og:image" content="{}">"#, img));
    }

    tags.push(format!(
        r#"<meta property="og:locale" content="{}">"#,
        locale
    ));
    tags.push(format!(
        r#"<meta property="og:site_name" content="{}">"#,
        html_escape(site_name)
    ));

    tags.join("\n")
}

/// Generate Twitter card meta tags
pub fn twitter_card(card: &str, title: &str) -> String {
    [
        format!(r#"<meta name="twitter:card" content="{}">"#, card),
        format!(
            r#"<meta name="twitter:title" content="{}">"#,
            html_escape(title)
        ),
    ]
    .join("\n")
}

/// Generate meta generator tag
pub fn meta_generator() -> String {
    format!(
        r#"<meta name="generator" content="postgen {}">"#,
        env!("CARGO_PKG_VERSION")
    )
}
