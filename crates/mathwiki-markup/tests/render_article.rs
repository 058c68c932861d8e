use mathwiki_markup::{
    InMemoryArticleStore, InMemoryMediaStore, MediaItem, MediaKind, PassthroughMathRenderer,
    Renderer,
    scan::{RawSpan, scan},
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn seeded_media() -> InMemoryMediaStore {
    let mut media = InMemoryMediaStore::new();
    media.insert(MediaItem {
        id: "triangle".to_string(),
        kind: MediaKind::Image,
        data_ref: "https://cdn.example/triangle.png".to_string(),
        mime_type: Some("image/png".to_string()),
        alt: Some("A right triangle".to_string()),
        uploader: Some("euclid".to_string()),
        uploaded_at: Some("2024-11-02T10:00:00Z".to_string()),
    });
    media.insert(MediaItem {
        id: "rotation".to_string(),
        kind: MediaKind::Video,
        data_ref: "https://cdn.example/rotation.webm".to_string(),
        mime_type: Some("video/webm".to_string()),
        alt: Some("A rotating square".to_string()),
        uploader: None,
        uploaded_at: None,
    });
    media
}

fn render_html(text: &str) -> String {
    let mut articles = InMemoryArticleStore::new();
    articles.insert("Prime Number");
    let media = seeded_media();
    Renderer::new(&articles, &media, &PassthroughMathRenderer)
        .with_instance_prefix("t")
        .render_html(text)
}

#[test]
fn scanning_recovers_directive_boundaries() {
    let input = "intro [color:red]x[/color] mid [[Prime Number]] [image:triangle] [embed:https://e.com] tail [unclosed";
    let spans = scan(input);
    let rebuilt: String = spans.iter().map(RawSpan::raw_text).collect();
    assert_eq!(rebuilt, input);
    assert!(spans.len() > 1);
}

#[test]
fn color_wraps_content_and_nothing_else() {
    let html = render_html("before [color:red]x[/color] after");
    assert!(html.contains("<span style=\"color: red;\">x</span>"));
    assert!(html.contains("before "));
    assert!(html.contains(" after"));
}

#[rstest]
#[case("large", "1.5em")]
#[case("small", "0.8em")]
#[case("xxlarge", "3em")]
#[case("2.5em", "2.5em")]
fn size_tokens_resolve(#[case] token: &str, #[case] css: &str) {
    let html = render_html(&format!("[size:{token}]x[/size]"));
    assert!(
        html.contains(&format!("font-size: {css};")),
        "{token} should map to {css}, got: {html}"
    );
}

#[test]
fn table_excludes_separator_row() {
    let html = render_html("|A|B|\n|-|-|\n|1|2|");
    assert!(html.contains("<th>A</th><th>B</th>"));
    assert!(html.contains("<td>1</td><td>2</td>"));
    // Exactly one data row; the separator contributed nothing.
    assert_eq!(html.matches("<tr>").count(), 2);
    assert!(!html.contains("<td>-</td>"));
}

#[test]
fn missing_image_yields_placeholder_text() {
    let articles = InMemoryArticleStore::new();
    let media = InMemoryMediaStore::new();
    let html = Renderer::new(&articles, &media, &PassthroughMathRenderer)
        .render_html("[image:missing]");
    assert!(html.contains("Image not found: missing"));
    assert!(!html.contains("<img"));
}

#[test]
fn resolved_image_uses_stored_alt_as_caption() {
    let html = render_html("Consider: [image:triangle]");
    assert!(html.contains("src=\"https://cdn.example/triangle.png\""));
    assert!(html.contains("<figcaption>A right triangle</figcaption>"));
}

#[test]
fn image_alt_override_beats_stored_alt() {
    let html = render_html("x [image:triangle|Labeled sides] y");
    assert!(html.contains("<figcaption>Labeled sides</figcaption>"));
}

#[test]
fn resolved_video_carries_mime_type() {
    let html = render_html("watch [video:rotation]");
    assert!(html.contains("<video controls>"));
    assert!(html.contains("type=\"video/webm\""));
    assert!(html.contains("<figcaption>A rotating square</figcaption>"));
}

#[test]
fn non_https_embed_is_never_an_iframe() {
    let html = render_html("[embed:http://example.com]");
    assert!(!html.contains("<iframe"));
    assert!(html.contains("Invalid embed URL"));
}

#[test]
fn https_embed_defaults_dimensions() {
    let html = render_html("[embed:https://www.desmos.com/calculator]");
    assert!(html.contains("width=\"100%\""));
    assert!(html.contains("height=\"600px\""));
    assert!(html.contains("sandbox=\"allow-scripts allow-same-origin allow-popups allow-forms\""));
}

#[test]
fn sandbox_regeneration_is_byte_identical() {
    let text = "[interactive:code]const ctx = MathAPI.createCanvas(200, 200);[/interactive]";
    assert_eq!(render_html(text), render_html(text));
}

#[test]
fn throwing_interactive_block_does_not_suppress_later_blocks() {
    let html = render_html(
        "[interactive:code]throw new Error('boom');[/interactive]\n\nThe next paragraph survives.",
    );
    assert!(html.contains("interactive-block"));
    assert!(html.contains("The next paragraph survives."));
}

#[test]
fn bold_and_italic_render_in_order() {
    let html = render_html("**bold** and *italic*");
    let b = html.find("<strong>bold</strong>").expect("missing bold span");
    let mid = html.find(" and ").expect("missing literal run");
    let i = html.find("<em>italic</em>").expect("missing italic span");
    assert!(b < mid && mid < i);
}

#[test]
fn wiki_links_distinguish_existing_and_new() {
    let html = render_html("[[Prime Number]] and [[Unwritten Topic]]");
    assert!(html.contains("class=\"article-link\" data-article=\"Prime Number\""));
    assert!(html.contains("class=\"article-link new\" data-article=\"Unwritten Topic\""));
}

#[test]
fn unmatched_directive_opening_stays_literal() {
    let html = render_html("a [color:red]unclosed and b");
    assert!(html.contains("[color:red]unclosed and b"));
}

#[test]
fn manim_code_is_inert_and_escaped() {
    let html = render_html("[manim:code]\nprint('<script>')\n[/manim]");
    assert!(html.contains("manim-code-block"));
    assert!(html.contains("language-python"));
    assert!(html.contains("print('&lt;script&gt;')"));
    assert!(!html.contains("<script>print"));
}

#[test]
fn display_math_renders_in_display_mode() {
    let html = render_html("$$e^{i\\pi} = -1$$");
    assert!(html.contains("math display"));
}

#[test]
fn math_spans_forward_verbatim() {
    let html = render_html("the set $\\mathbb{N}$ of naturals");
    assert!(html.contains("$\\mathbb{N}$"));
    assert!(html.contains("the set "));
    assert!(html.contains(" of naturals"));
}

#[test]
fn indented_paragraph_is_marked() {
    let html = render_html("\tan indented remark");
    assert!(html.contains("<p class=\"indented\">an indented remark</p>"));
}

#[test]
fn standalone_image_literal_is_centered() {
    let html = render_html("![a circle](https://e.com/c.png)");
    assert!(html.contains("article-media centered"));
    assert!(html.contains("src=\"https://e.com/c.png\""));
}

#[test]
fn failures_stay_contained_to_their_spans() {
    let html = render_html(
        "good [image:absent] still good [embed:ftp://nope] and [[Prime Number]] closes the line",
    );
    assert!(html.contains("Image not found: absent"));
    assert!(html.contains("Invalid embed URL"));
    assert!(html.contains("closes the line"));
    assert!(html.contains("data-article=\"Prime Number\""));
}
