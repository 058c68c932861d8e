/// The directive kinds recognized by the scanner, in precedence order.
///
/// When two kinds could match at the same offset, the scanner tries them in
/// declaration order: colour/size before media before code before link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveKind {
    /// `[color:V]text[/color]`
    Color,
    /// `[size:V]text[/size]`
    Size,
    /// `[manim:code]CODE[/manim]`, inert documentation text, never executed.
    Manim,
    /// `[interactive:code]CODE[/interactive]`, sandboxed JavaScript.
    Interactive,
    /// `[embed:URL|W|H]`
    Embed,
    /// `[image:ID|ALT]`
    Image,
    /// `[video:ID|CAPTION]`
    Video,
    /// `[[Name]]`
    WikiLink,
}

/// A scanned directive: kind, positional params, optional body, and the raw
/// source text it was matched from.
///
/// `raw` is preserved so span sequences re-serialize to the original input
/// and so unresolved directives can degrade to literal text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    pub kind: DirectiveKind,
    pub params: Vec<String>,
    pub body: Option<String>,
    pub raw: String,
}

impl Directive {
    /// Positional param accessor; `None` when absent.
    pub fn param(&self, i: usize) -> Option<&str> {
        self.params.get(i).map(String::as_str)
    }
}
