//! Causal chain formatting utilities.

use core::fmt::Write;

use crate::types::{Annotation, Error};

/// Trait for customizing how a chain of annotations is rendered.
pub trait ChainFormatter {
    fn format_annotation(&self, annotation: &Annotation) -> String {
        annotation.to_string()
    }

    fn separator(&self) -> &str {
        "; "
    }

    fn format_chain<'a>(&self, chain: impl Iterator<Item = &'a Annotation>) -> String {
        chain
            .map(|item| self.format_annotation(item))
            .collect::<Vec<_>>()
            .join(self.separator())
    }
}

/// Configuration-based chain formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainFormatConfig {
    pub separator: String,
    pub reason_prefix: Option<String>,
    pub error_prefix: Option<String>,
    pub success_prefix: Option<String>,
    pub multiline: bool,
    pub indent: String,
    pub show_causes: bool,
    pub show_metadata: bool,
}

impl Default for ChainFormatConfig {
    fn default() -> Self {
        Self {
            separator: "; ".into(),
            reason_prefix: None,
            error_prefix: None,
            success_prefix: None,
            multiline: false,
            indent: "  ".into(),
            show_causes: true,
            show_metadata: false,
        }
    }
}

impl ChainFormatConfig {
    /// One line per annotation, tagged by kind, causes indented below.
    #[inline]
    pub fn pretty() -> Self {
        Self {
            separator: "\n".into(),
            reason_prefix: Some("- ".into()),
            error_prefix: Some("x ".into()),
            success_prefix: Some("+ ".into()),
            multiline: true,
            show_metadata: true,
            ..Default::default()
        }
    }

    #[inline]
    pub fn compact() -> Self {
        Self { separator: " | ".into(), ..Default::default() }
    }

    /// Bare messages, no causes or metadata.
    #[inline]
    pub fn messages_only() -> Self {
        Self { show_causes: false, ..Default::default() }
    }

    fn prefix_for(&self, annotation: &Annotation) -> Option<&str> {
        match annotation {
            Annotation::Reason(_) => self.reason_prefix.as_deref(),
            Annotation::Error(_) => self.error_prefix.as_deref(),
            Annotation::Success(_) => self.success_prefix.as_deref(),
        }
    }

    fn push_metadata(&self, out: &mut String, annotation: &Annotation) {
        if self.show_metadata && !annotation.metadata().is_empty() {
            let _ = write!(out, " {}", annotation.metadata());
        }
    }

    fn push_inline_causes(&self, out: &mut String, causes: &[Error]) {
        if causes.is_empty() {
            return;
        }
        out.push_str(" (caused by: ");
        for (i, cause) in causes.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(cause.message());
            self.push_inline_causes(out, cause.causes());
        }
        out.push(')');
    }

    fn push_nested_causes(&self, out: &mut String, causes: &[Error], depth: usize) {
        for cause in causes {
            out.push('\n');
            for _ in 0..depth {
                out.push_str(&self.indent);
            }
            if let Some(prefix) = &self.error_prefix {
                out.push_str(prefix);
            }
            out.push_str(cause.message());
            self.push_nested_causes(out, cause.causes(), depth + 1);
        }
    }
}

impl ChainFormatter for ChainFormatConfig {
    fn format_annotation(&self, annotation: &Annotation) -> String {
        let mut result = String::new();
        if let Some(prefix) = self.prefix_for(annotation) {
            result.push_str(prefix);
        }
        result.push_str(annotation.message());
        self.push_metadata(&mut result, annotation);

        if self.show_causes {
            if let Annotation::Error(error) = annotation {
                if self.multiline {
                    self.push_nested_causes(&mut result, error.causes(), 1);
                } else {
                    self.push_inline_causes(&mut result, error.causes());
                }
            }
        }
        result
    }

    fn separator(&self) -> &str {
        &self.separator
    }
}
