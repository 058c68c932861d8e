//! Adapter in front of the external math typesetting collaborator.

use thiserror::Error;

use crate::render::RenderNode;

#[derive(Debug, Error)]
pub enum MathError {
    #[error("math rendering failed: {0}")]
    Render(String),
}

/// The external typesetting collaborator, consumed as a black box.
///
/// `display` selects display (block) layout over inline layout. The returned
/// string is trusted markup and is emitted unescaped.
pub trait MathRenderer {
    fn render(&self, expr: &str, display: bool) -> Result<String, MathError>;
}

/// Default collaborator: wraps the expression, delimiters intact, in a
/// `math` span for client-side typesetting. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughMathRenderer;

impl MathRenderer for PassthroughMathRenderer {
    fn render(&self, expr: &str, display: bool) -> Result<String, MathError> {
        let (class, delim) = if display {
            ("math display", "$$")
        } else {
            ("math inline", "$")
        };
        Ok(format!(
            "<span class=\"{class}\">{delim}{}{delim}</span>",
            html_escape::encode_text(expr)
        ))
    }
}

/// Forwards math spans to the collaborator; on failure falls back to the raw
/// expression text so the surrounding render always completes.
pub struct MathDelegate<'a> {
    renderer: &'a dyn MathRenderer,
}

impl<'a> MathDelegate<'a> {
    pub fn new(renderer: &'a dyn MathRenderer) -> Self {
        Self { renderer }
    }

    pub fn render(&self, expr: &str, display: bool) -> RenderNode {
        match self.renderer.render(expr, display) {
            Ok(html) => RenderNode::Math { html, display },
            Err(err) => {
                tracing::warn!(error = %err, expr = %expr, "math renderer failed, showing raw expression");
                RenderNode::MathFallback {
                    expr: expr.to_string(),
                    display,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingRenderer;

    impl MathRenderer for FailingRenderer {
        fn render(&self, expr: &str, _display: bool) -> Result<String, MathError> {
            Err(MathError::Render(format!("cannot typeset {expr}")))
        }
    }

    #[test]
    fn passthrough_keeps_delimiters_and_escapes() {
        let html = PassthroughMathRenderer.render("a < b", false).unwrap();
        assert_eq!(html, "<span class=\"math inline\">$a &lt; b$</span>");
    }

    #[test]
    fn passthrough_display_mode() {
        let html = PassthroughMathRenderer.render("x", true).unwrap();
        assert!(html.contains("math display"));
        assert!(html.contains("$$x$$"));
    }

    #[test]
    fn failure_falls_back_to_raw_expression() {
        let delegate = MathDelegate::new(&FailingRenderer);
        assert_eq!(
            delegate.render("\\frac{a}{b}", false),
            RenderNode::MathFallback {
                expr: "\\frac{a}{b}".to_string(),
                display: false,
            }
        );
    }

    #[test]
    fn success_is_forwarded_verbatim() {
        let delegate = MathDelegate::new(&PassthroughMathRenderer);
        match delegate.render("x^2", false) {
            RenderNode::Math { html, display } => {
                assert!(html.contains("$x^2$"));
                assert!(!display);
            }
            other => panic!("expected math node, got {other:?}"),
        }
    }
}
