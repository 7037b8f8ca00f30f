/// Convert markdown to an HTML fragment.
///
/// GFM constructs are enabled: tables, strikethrough, task lists, autolink
/// literals and footnotes. Raw HTML in the input is escaped.
pub fn to_html(md: &str) -> anyhow::Result<String> {
    ::markdown::to_html_with_options(md, &::markdown::Options::gfm())
        .map_err(|e| anyhow::anyhow!("Failed to convert markdown: {}", e))
}
