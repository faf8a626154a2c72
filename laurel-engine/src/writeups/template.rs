//! One parameterized writeup template.

use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxHashMap;

use laurel_core::errors::RenderError;

/// Placeholder syntax: `${variable}` or `$variable`, with `$$` as a
/// literal dollar sign. A `$` that opens neither form is left as-is.
static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$(?:(?P<escaped>\$)|\{(?P<braced>[_a-zA-Z][_a-zA-Z0-9]*)\}|(?P<named>[_a-zA-Z][_a-zA-Z0-9]*))")
        .expect("placeholder pattern is valid")
});

/// A writeup template for one accolade.
#[derive(Debug, Clone)]
pub struct WriteupTemplate {
    accolade: String,
    text: String,
}

impl WriteupTemplate {
    pub fn new(accolade: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            accolade: accolade.into(),
            text: text.into(),
        }
    }

    /// Accolade identifier this writeup belongs to (unprefixed).
    pub fn accolade(&self) -> &str {
        &self.accolade
    }

    /// Raw template text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Names of every variable the template references.
    pub fn variables(&self) -> Vec<&str> {
        PLACEHOLDER
            .captures_iter(&self.text)
            .filter_map(|c| {
                c.name("braced")
                    .or_else(|| c.name("named"))
                    .map(|m| m.as_str())
            })
            .collect()
    }

    /// Substitute every placeholder from `context`.
    ///
    /// A referenced variable absent from the context fails the whole
    /// render; that mismatch is for the operator to fix, not for the
    /// pipeline to paper over.
    pub fn render(&self, context: &FxHashMap<String, String>) -> Result<String, RenderError> {
        let mut out = String::with_capacity(self.text.len());
        let mut last = 0;

        for caps in PLACEHOLDER.captures_iter(&self.text) {
            let whole = caps.get(0).expect("capture 0 always present");
            out.push_str(&self.text[last..whole.start()]);
            last = whole.end();

            if caps.name("escaped").is_some() {
                out.push('$');
                continue;
            }

            let name = caps
                .name("braced")
                .or_else(|| caps.name("named"))
                .expect("placeholder match has a name group")
                .as_str();

            match context.get(name) {
                Some(value) => out.push_str(value),
                None => {
                    return Err(RenderError::MissingVariable {
                        accolade: self.accolade.clone(),
                        variable: name.to_string(),
                    })
                }
            }
        }

        out.push_str(&self.text[last..]);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(pairs: &[(&str, &str)]) -> FxHashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn literal_text_renders_unchanged() {
        let t = WriteupTemplate::new("honor", "No placeholders here.");
        assert_eq!(
            t.render(&context(&[("name", "Ann")])).unwrap(),
            "No placeholders here."
        );
        assert_eq!(t.render(&context(&[])).unwrap(), "No placeholders here.");
    }

    #[test]
    fn braced_and_bare_placeholders_substitute() {
        let t = WriteupTemplate::new("honor", "Honored for ${name}, rank $rank.");
        assert_eq!(
            t.render(&context(&[("name", "Ann"), ("rank", "Captain")]))
                .unwrap(),
            "Honored for Ann, rank Captain."
        );
    }

    #[test]
    fn double_dollar_escapes() {
        let t = WriteupTemplate::new("bonus", "Awarded $$100 to ${name}.");
        assert_eq!(
            t.render(&context(&[("name", "Ann")])).unwrap(),
            "Awarded $100 to Ann."
        );
    }

    #[test]
    fn missing_variable_fails() {
        let t = WriteupTemplate::new("honor", "Honored for ${name}.");
        let err = t.render(&context(&[("rank", "Captain")])).unwrap_err();
        match err {
            RenderError::MissingVariable { accolade, variable } => {
                assert_eq!(accolade, "honor");
                assert_eq!(variable, "name");
            }
            other => panic!("Expected MissingVariable, got: {other:?}"),
        }
    }

    #[test]
    fn lone_dollar_stays_literal() {
        let t = WriteupTemplate::new("bonus", "Price: $ 5");
        assert_eq!(t.render(&context(&[])).unwrap(), "Price: $ 5");
    }

    #[test]
    fn variables_lists_referenced_names() {
        let t = WriteupTemplate::new("honor", "${name} and $rank and $$skip");
        assert_eq!(t.variables(), vec!["name", "rank"]);
    }
}
