//! User-facing selection of stash items.
//!
//! A token is either a 1-based position (`2`) or a basename (`notes.txt`).
//! The parse is infallible: a string of ASCII digits becomes [`Token::Index`],
//! everything else becomes [`Token::Name`]. Resolution gives positions
//! precedence over names, so `fdrop copy 2` always means "the second staged
//! item" even when a staged file is literally named `2`.

use crate::model::StashItem;

/// A parsed selection token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Index(usize),
    Name(String),
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Index(i) => write!(f, "{}", i),
            Token::Name(n) => write!(f, "{}", n),
        }
    }
}

/// Parses a raw token. Never fails: non-numeric input is a name.
pub fn parse_token(s: &str) -> Token {
    if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(n) = s.parse() {
            return Token::Index(n);
        }
    }
    Token::Name(s.to_string())
}

pub fn parse_tokens<S: AsRef<str>>(raw: &[S]) -> Vec<Token> {
    raw.iter().map(|s| parse_token(s.as_ref())).collect()
}

/// A stash item matched by a token, with its 0-based position in the stash
/// so the caller can compute what remains without re-resolving.
#[derive(Debug, Clone)]
pub struct ResolvedItem {
    pub stash_index: usize,
    pub item: StashItem,
}

/// Result of resolving a batch of tokens against the stash.
///
/// `matched` mirrors token order, not stash order. `unmatched` holds the
/// original text of every token that resolved to nothing; an unmatched token
/// never aborts the rest of the batch.
#[derive(Debug, Default)]
pub struct Resolution {
    pub matched: Vec<ResolvedItem>,
    pub unmatched: Vec<String>,
}

/// Maps each token to a stash item.
///
/// An in-range index wins outright. Anything else falls back to an exact,
/// case-sensitive basename match where the earliest staged item wins; later
/// items sharing the basename are only reachable by position.
pub fn resolve(tokens: &[Token], items: &[StashItem]) -> Resolution {
    let mut resolution = Resolution::default();

    for token in tokens {
        let found = match token {
            Token::Index(i) if *i >= 1 && *i <= items.len() => Some(ResolvedItem {
                stash_index: i - 1,
                item: items[i - 1].clone(),
            }),
            // Out-of-range positions fall back to a literal name match.
            _ => find_by_name(&token.to_string(), items),
        };

        match found {
            Some(resolved) => resolution.matched.push(resolved),
            None => resolution.unmatched.push(token.to_string()),
        }
    }

    resolution
}

fn find_by_name(name: &str, items: &[StashItem]) -> Option<ResolvedItem> {
    items
        .iter()
        .position(|item| item.name == name)
        .map(|idx| ResolvedItem {
            stash_index: idx,
            item: items[idx].clone(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str) -> StashItem {
        StashItem::new(name.to_string(), format!("/tmp/{}", name).into())
    }

    #[test]
    fn test_parse_token() {
        assert_eq!(parse_token("1"), Token::Index(1));
        assert_eq!(parse_token("42"), Token::Index(42));
        assert_eq!(parse_token("notes.txt"), Token::Name("notes.txt".into()));
        assert_eq!(parse_token("12a"), Token::Name("12a".into()));
        assert_eq!(parse_token(""), Token::Name("".into()));
        assert_eq!(parse_token("-1"), Token::Name("-1".into()));
    }

    #[test]
    fn test_index_beats_name() {
        // Stash holds ["x.txt", "5"]; token "2" must select position 2,
        // not search for an item named "2".
        let items = vec![item("x.txt"), item("5")];
        let resolution = resolve(&[Token::Index(2)], &items);

        assert!(resolution.unmatched.is_empty());
        assert_eq!(resolution.matched.len(), 1);
        assert_eq!(resolution.matched[0].item.name, "5");
        assert_eq!(resolution.matched[0].stash_index, 1);
    }

    #[test]
    fn test_out_of_range_index_falls_back_to_name() {
        let items = vec![item("x.txt"), item("5")];
        let resolution = resolve(&[Token::Index(5)], &items);

        assert_eq!(resolution.matched.len(), 1);
        assert_eq!(resolution.matched[0].item.name, "5");
    }

    #[test]
    fn test_name_match_prefers_earliest() {
        let mut items = vec![item("dup"), item("other"), item("dup")];
        items[2].path = "/elsewhere/dup".into();

        let resolution = resolve(&[Token::Name("dup".into())], &items);
        assert_eq!(resolution.matched.len(), 1);
        assert_eq!(resolution.matched[0].stash_index, 0);
    }

    #[test]
    fn test_unmatched_does_not_abort_batch() {
        let items = vec![item("a"), item("b")];
        let tokens = vec![
            Token::Name("missing".into()),
            Token::Index(2),
            Token::Name("also-missing".into()),
        ];

        let resolution = resolve(&tokens, &items);
        assert_eq!(resolution.matched.len(), 1);
        assert_eq!(resolution.matched[0].item.name, "b");
        assert_eq!(resolution.unmatched, vec!["missing", "also-missing"]);
    }

    #[test]
    fn test_output_mirrors_token_order() {
        let items = vec![item("a"), item("b"), item("c")];
        let tokens = vec![Token::Index(3), Token::Index(1)];

        let resolution = resolve(&tokens, &items);
        let names: Vec<&str> = resolution
            .matched
            .iter()
            .map(|r| r.item.name.as_str())
            .collect();
        assert_eq!(names, vec!["c", "a"]);
    }

    #[test]
    fn test_name_match_is_case_sensitive() {
        let items = vec![item("Readme.md")];
        let resolution = resolve(&[Token::Name("readme.md".into())], &items);
        assert!(resolution.matched.is_empty());
        assert_eq!(resolution.unmatched, vec!["readme.md"]);
    }
}
