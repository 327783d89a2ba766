//! Search query parsing and in-memory matching
//!
//! Grammar (whitespace separated, every term must match):
//!
//! ```text
//! query := term*
//! term  := value | "phrase" | field:value | field:"phrase"
//! ```
//!
//! Matching is a case-insensitive substring test. Unqualified terms match
//! when any searchable field contains the value.

use thiserror::Error;

/// Structural problems in a search query
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("unbalanced quote in query")]
    UnbalancedQuote,

    #[error("empty field name before ':'")]
    EmptyField,

    #[error("empty search value")]
    EmptyValue,

    #[error("unknown search field: {0}")]
    UnknownField(String),
}

/// A single search term
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm {
    /// Restrict the match to this field (None = any searchable field)
    pub field: Option<String>,
    /// Lowercased value to look for
    pub value: String,
}

impl SearchTerm {
    /// Check whether a field value satisfies this term
    pub fn matches_value(&self, candidate: &str) -> bool {
        candidate.to_lowercase().contains(&self.value)
    }

    /// SQL `ILIKE` pattern for this term (`%` and `_` escaped with `\`)
    pub fn like_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.value.len() + 2);
        pattern.push('%');
        for c in self.value.chars() {
            if matches!(c, '%' | '_' | '\\') {
                pattern.push('\\');
            }
            pattern.push(c);
        }
        pattern.push('%');
        pattern
    }
}

/// Parsed search query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    terms: Vec<SearchTerm>,
}

impl SearchQuery {
    /// A query matching every entity
    pub fn all() -> Self {
        Self::default()
    }

    /// Parse a raw query string, validating field qualifiers against `allowed_fields`
    pub fn parse(raw: &str, allowed_fields: &[&str]) -> Result<Self, QueryError> {
        let mut terms = Vec::new();
        let mut chars = raw.chars().peekable();

        loop {
            while chars.next_if(|c| c.is_whitespace()).is_some() {}
            if chars.peek().is_none() {
                break;
            }

            // Read the bare token, stopping at whitespace or an opening quote
            let mut head = String::new();
            while let Some(&c) = chars.peek() {
                if c.is_whitespace() || c == '"' {
                    break;
                }
                head.push(c);
                chars.next();
            }

            let quoted = if chars.peek() == Some(&'"') {
                chars.next();
                let mut phrase = String::new();
                let mut closed = false;
                for c in chars.by_ref() {
                    if c == '"' {
                        closed = true;
                        break;
                    }
                    phrase.push(c);
                }
                if !closed {
                    return Err(QueryError::UnbalancedQuote);
                }
                if let Some(&c) = chars.peek() {
                    if !c.is_whitespace() {
                        // `"a"b` or `"a""b"` - quotes must delimit a whole term
                        return Err(QueryError::UnbalancedQuote);
                    }
                }
                Some(phrase)
            } else {
                None
            };

            let term = match (head.split_once(':'), quoted) {
                (Some((field, rest)), quoted) => {
                    if field.is_empty() {
                        return Err(QueryError::EmptyField);
                    }
                    let value = match quoted {
                        Some(phrase) if rest.is_empty() => phrase,
                        Some(_) => return Err(QueryError::UnbalancedQuote),
                        None => rest.to_string(),
                    };
                    if !allowed_fields.contains(&field) {
                        return Err(QueryError::UnknownField(field.to_string()));
                    }
                    Self::term(Some(field.to_string()), &value)?
                }
                (None, Some(phrase)) => {
                    if !head.is_empty() {
                        return Err(QueryError::UnbalancedQuote);
                    }
                    Self::term(None, &phrase)?
                }
                (None, None) => Self::term(None, &head)?,
            };
            terms.push(term);
        }

        Ok(Self { terms })
    }

    fn term(field: Option<String>, value: &str) -> Result<SearchTerm, QueryError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(QueryError::EmptyValue);
        }
        Ok(SearchTerm {
            field,
            value: value.to_lowercase(),
        })
    }

    /// Terms of this query
    pub fn terms(&self) -> &[SearchTerm] {
        &self.terms
    }

    /// Check if this query matches everything
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Evaluate the query against an entity's searchable fields
    ///
    /// `lookup` returns the textual value of a field, or None when unset.
    pub fn matches<F>(&self, fields: &[&str], lookup: F) -> bool
    where
        F: Fn(&str) -> Option<String>,
    {
        self.terms.iter().all(|term| match &term.field {
            Some(field) => lookup(field).is_some_and(|v| term.matches_value(&v)),
            None => fields
                .iter()
                .any(|field| lookup(field).is_some_and(|v| term.matches_value(&v))),
        })
    }
}
