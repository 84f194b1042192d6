//! Path template parsing and matching.
//!
//! Templates are split into pieces, each introduced by a `/` or `.`
//! separator. A piece is either a literal or a `:name` parameter, and a
//! trailing `?` makes the whole piece (separator included) optional:
//!
//! ```text
//! /photos/:photo.:format?   ->  "/photos"  "/:photo"  ".:format"(optional)
//! /photos/:photo?/:op?      ->  "/photos"  "/:photo"(optional)  "/:op"(optional)
//! ```

use std::collections::HashMap;

/// Path parameters extracted from a matched request path.
pub type PathParams = HashMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Piece {
    separator: Option<char>,
    segment: Segment,
    optional: bool,
}

#[derive(Debug, Default)]
struct PieceBuilder {
    separator: Option<char>,
    text: String,
    param: bool,
    optional: bool,
}

impl PieceBuilder {
    fn starting_with(separator: char) -> Self {
        Self {
            separator: Some(separator),
            ..Default::default()
        }
    }

    fn finish(self) -> Option<Piece> {
        if self.separator.is_none() && self.text.is_empty() && !self.param {
            return None;
        }
        let segment = if self.param {
            Segment::Param(self.text)
        } else {
            Segment::Literal(self.text)
        };
        Some(Piece {
            separator: self.separator,
            segment,
            optional: self.optional,
        })
    }
}

/// A compiled path template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    template: String,
    pieces: Vec<Piece>,
}

impl PathPattern {
    /// Compile a template. Parsing never fails; unexpected characters are
    /// treated as literal text.
    pub fn parse(template: &str) -> Self {
        let mut pieces = Vec::new();
        let mut current = PieceBuilder::default();

        for c in template.chars() {
            match c {
                '/' | '.' => {
                    let done = std::mem::replace(&mut current, PieceBuilder::starting_with(c));
                    pieces.extend(done.finish());
                }
                ':' if current.text.is_empty() && !current.param => current.param = true,
                '?' => current.optional = true,
                _ => current.text.push(c),
            }
        }
        pieces.extend(current.finish());

        Self {
            template: template.to_string(),
            pieces,
        }
    }

    /// The template this pattern was compiled from.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Names of every parameter in the template, in order.
    pub fn param_names(&self) -> Vec<&str> {
        self.pieces
            .iter()
            .filter_map(|piece| match &piece.segment {
                Segment::Param(name) => Some(name.as_str()),
                Segment::Literal(_) => None,
            })
            .collect()
    }

    /// Match a request path, returning the extracted parameters.
    ///
    /// One trailing `/` is ignored. Templates without a leading `/` (root
    /// resource index) match relative to `/`.
    pub fn matches(&self, path: &str) -> Option<PathParams> {
        let mut path = path;
        if path.len() > 1 {
            path = path.strip_suffix('/').unwrap_or(path);
        }
        if !self.template.starts_with('/') {
            path = path.strip_prefix('/').unwrap_or(path);
        }

        let mut params = PathParams::new();
        match_pieces(&self.pieces, path, &mut params).then_some(params)
    }
}

fn match_pieces(pieces: &[Piece], input: &str, params: &mut PathParams) -> bool {
    let Some((piece, rest)) = pieces.split_first() else {
        return input.is_empty();
    };

    if match_piece(piece, rest, input, params) {
        return true;
    }
    piece.optional && match_pieces(rest, input, params)
}

fn match_piece(piece: &Piece, rest: &[Piece], input: &str, params: &mut PathParams) -> bool {
    let input = match piece.separator {
        Some(separator) => match input.strip_prefix(separator) {
            Some(remaining) => remaining,
            None => return false,
        },
        None => input,
    };

    match &piece.segment {
        Segment::Literal(text) => {
            if input.len() < text.len() || !input.is_char_boundary(text.len()) {
                return false;
            }
            let (head, tail) = input.split_at(text.len());
            head.eq_ignore_ascii_case(text) && match_pieces(rest, tail, params)
        }
        Segment::Param(name) => {
            let dotted = piece.separator == Some('.');
            let limit = input
                .find(|c: char| c == '/' || (dotted && c == '.'))
                .unwrap_or(input.len());
            let candidate = &input[..limit];

            // Shortest value first, so a trailing format suffix can still match.
            for end in candidate.char_indices().map(|(i, c)| i + c.len_utf8()) {
                if match_pieces(rest, &input[end..], params) {
                    params.insert(name.clone(), candidate[..end].to_string());
                    return true;
                }
            }
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> PathParams {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_collection_path_with_optional_format() {
        let pattern = PathPattern::parse("/photos.:format?");
        assert_eq!(pattern.matches("/photos"), Some(params(&[])));
        assert_eq!(pattern.matches("/photos.json"), Some(params(&[("format", "json")])));
        assert_eq!(pattern.matches("/photos/"), Some(params(&[])));
        assert_eq!(pattern.matches("/photo"), None);
        assert_eq!(pattern.matches("/photos/1"), None);
    }

    #[test]
    fn test_member_path_splits_format_from_id() {
        let pattern = PathPattern::parse("/photos/:photo.:format?");
        assert_eq!(pattern.matches("/photos/42"), Some(params(&[("photo", "42")])));
        assert_eq!(
            pattern.matches("/photos/42.xml"),
            Some(params(&[("photo", "42"), ("format", "xml")]))
        );
        assert_eq!(
            pattern.matches("/photos/my.pic.png"),
            Some(params(&[("photo", "my.pic"), ("format", "png")]))
        );
        assert_eq!(pattern.matches("/photos"), None);
        assert_eq!(pattern.matches("/photos/1/2"), None);
    }

    #[test]
    fn test_member_literal_suffix() {
        let pattern = PathPattern::parse("/photos/:photo/edit.:format?");
        assert_eq!(pattern.matches("/photos/7/edit"), Some(params(&[("photo", "7")])));
        assert_eq!(
            pattern.matches("/photos/7/edit.html"),
            Some(params(&[("photo", "7"), ("format", "html")]))
        );
        assert_eq!(pattern.matches("/photos/7"), None);
        assert_eq!(pattern.matches("/photos/new.html"), None);
    }

    #[test]
    fn test_wildcard_path_optional_id_and_op() {
        let pattern = PathPattern::parse("/photos/:photo?/:op?");
        assert_eq!(pattern.matches("/photos"), Some(params(&[])));
        assert_eq!(pattern.matches("/photos/3"), Some(params(&[("photo", "3")])));
        assert_eq!(
            pattern.matches("/photos/3/crop"),
            Some(params(&[("photo", "3"), ("op", "crop")]))
        );
        assert_eq!(pattern.matches("/photos/3/crop/extra"), None);
        assert_eq!(pattern.matches("/users/3"), None);
    }

    #[test]
    fn test_root_templates() {
        let index = PathPattern::parse(".:format?");
        assert_eq!(index.matches("/"), Some(params(&[])));
        assert_eq!(index.matches("/.json"), Some(params(&[("format", "json")])));
        assert_eq!(index.matches("/x"), None);

        let show = PathPattern::parse("/:id.:format?");
        assert_eq!(show.matches("/abc"), Some(params(&[("id", "abc")])));
        assert_eq!(show.matches("/"), None);
    }

    #[test]
    fn test_literal_match_is_case_insensitive() {
        let pattern = PathPattern::parse("/photos/new.:format?");
        assert!(pattern.matches("/Photos/NEW").is_some());
    }

    #[test]
    fn test_param_names() {
        let pattern = PathPattern::parse("/photos/:photo?/:op?");
        assert_eq!(pattern.param_names(), vec!["photo", "op"]);
        assert_eq!(pattern.template(), "/photos/:photo?/:op?");
    }
}
