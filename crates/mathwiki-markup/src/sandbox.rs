//! Generator for the self-contained documents that user-authored interactive
//! snippets execute in.
//!
//! The generated document is the entire world the snippet sees: an isolated
//! frame loads it with scripting enabled and everything else denied, and the
//! only capabilities on offer are the ones spelled out in `CAPABILITY_API`.
//! Generation is a pure string transform: identical source and instance id
//! always produce identical bytes.

use std::sync::OnceLock;

use regex::Regex;

/// A generated sandbox document, bound to one instance id so multiple
/// sandboxes can coexist on a page without collisions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SandboxDocument {
    pub id: String,
    pub source_code: String,
    pub html: String,
}

impl SandboxDocument {
    /// Builds the document for `source_code` under the given instance id.
    pub fn generate(source_code: &str, id: &str) -> Self {
        Self {
            id: id.to_string(),
            source_code: source_code.to_string(),
            html: build_document(source_code, id),
        }
    }

    /// Rebuilds the document from its own source, for explicit reload
    /// requests. Output is identical to the original generation.
    pub fn regenerate(&self) -> Self {
        Self::generate(&self.source_code, &self.id)
    }
}

fn close_script_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)</script>").expect("invalid close-script pattern"))
}

/// Neutralizes literal `</script>` sequences so user source cannot terminate
/// the embedding script block early.
fn escape_source(source: &str) -> String {
    close_script_re().replace_all(source, r"<\/script>").to_string()
}

const DOC_HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <style>
        body { margin: 0; padding: 10px; font-family: Arial, sans-serif; background: #fff; }
        canvas { border: 1px solid #ccc; display: block; margin: 10px auto; }
    </style>
</head>
<body>
"#;

/// The fixed, reviewed capability surface. Snippets reach the document only
/// through this object; nothing else is handed in.
const CAPABILITY_API: &str = r#"        const MathAPI = {
            createCanvas: function (width, height) {
                const canvas = document.createElement('canvas');
                canvas.width = width || 400;
                canvas.height = height || 400;
                document.getElementById('container').appendChild(canvas);
                return canvas.getContext('2d');
            },
            Math: Math,
            requestAnimationFrame: window.requestAnimationFrame.bind(window),
            cancelAnimationFrame: window.cancelAnimationFrame.bind(window),
            addEventListener: function (element, event, handler) {
                if (element && typeof handler === 'function') {
                    element.addEventListener(event, handler);
                }
            },
            createElement: function (tag) { return document.createElement(tag); },
            getElementById: function (id) { return document.getElementById(id); },
            querySelector: function (selector) { return document.querySelector(selector); },
            log: function (...args) { console.log(...args); },
            setTimeout: function (fn, delay) { return setTimeout(fn, delay); },
            setInterval: function (fn, delay) { return setInterval(fn, delay); },
            clearTimeout: function (id) { clearTimeout(id); },
            clearInterval: function (id) { clearInterval(id); }
        };
        window.MathAPI = MathAPI;
"#;

const RUNNER_OPEN: &str = r#"        try {
            (function () {
"#;

/// Thrown errors surface inside the sandbox's own container, never to the
/// host page.
const RUNNER_CLOSE: &str = r#"
            })();
        } catch (error) {
            const errorDiv = document.createElement('div');
            errorDiv.style.cssText = 'color: red; padding: 10px; border: 1px solid red;';
            errorDiv.textContent = 'Error: ' + error.message;
            document.getElementById('container').appendChild(errorDiv);
            console.error('Interactive code error:', error);
        }
    </script>
</body>
</html>
"#;

fn build_document(source: &str, id: &str) -> String {
    let mut doc = String::with_capacity(
        DOC_HEAD.len() + CAPABILITY_API.len() + RUNNER_OPEN.len() + RUNNER_CLOSE.len()
            + source.len()
            + 128,
    );
    doc.push_str(DOC_HEAD);
    doc.push_str("    <div id=\"container\" data-instance=\"");
    doc.push_str(&html_escape::encode_double_quoted_attribute(id));
    doc.push_str("\"></div>\n    <script>\n");
    doc.push_str(CAPABILITY_API);
    doc.push_str(RUNNER_OPEN);
    doc.push_str(&escape_source(source));
    doc.push_str(RUNNER_CLOSE);
    doc
}
