//! # Regex Wrapper
//! This modules provides mechanisms to mix `regex` and `fancy_regex` types.

use std::borrow::Cow;

/// Error wrapper for regex patterns.
#[non_exhaustive]
#[derive(Clone, Debug)]
pub enum ErrorWrapper {
    /// Error from `regex`.
    Basic(Box<regex::Error>),

    /// Error from `fancy_regex`.
    Fancy(Box<fancy_regex::Error>),
}

impl From<regex::Error> for ErrorWrapper {
    fn from(err: regex::Error) -> Self {
        Self::Basic(err.into())
    }
}

impl From<fancy_regex::Error> for ErrorWrapper {
    fn from(err: fancy_regex::Error) -> Self {
        Self::Fancy(err.into())
    }
}

impl core::fmt::Display for ErrorWrapper {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        match self {
            Self::Basic(err) => core::fmt::Display::fmt(err, f),
            Self::Fancy(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl core::error::Error for ErrorWrapper {}

/// Wrapper for compiled regex patterns.
#[derive(Debug, Clone)]
pub enum RegexWrapper {
    /// Wrapper for `regex::Regex`.
    Basic(regex::Regex),

    /// Wrapper for `fancy_regex::Regex`.
    Fancy(fancy_regex::Regex),
}

impl PartialEq for RegexWrapper {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        match (self, other) {
            (Self::Basic(a), Self::Basic(b)) => a.as_str() == b.as_str(),
            (Self::Fancy(a), Self::Fancy(b)) => a.as_str() == b.as_str(),
            _ => false,
        }
    }
}

impl From<regex::Regex> for RegexWrapper {
    fn from(regex: regex::Regex) -> Self {
        Self::Basic(regex)
    }
}

impl From<fancy_regex::Regex> for RegexWrapper {
    fn from(regex: fancy_regex::Regex) -> Self {
        Self::Fancy(regex)
    }
}

impl RegexWrapper {
    /// Is this `Basic`?
    pub fn is_basic(&self) -> bool {
        matches!(self, Self::Basic(_))
    }

    /// Is this `Fancy`?
    pub fn is_fancy(&self) -> bool {
        matches!(self, Self::Fancy(_))
    }

    /// Get the underlying regex pattern.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Basic(regex) => regex.as_str(),
            Self::Fancy(regex) => regex.as_str(),
        }
    }

    /// Wrapper for `find_iter`.
    ///
    /// ## Arguments
    /// * `haystack` - The string to search in.
    ///
    /// ## Returns
    /// A `MatchesWrapper` iterator over the matched slices of `haystack`.
    pub fn find_iter<'r, 'h>(
        &'r self,
        haystack: &'h str,
    ) -> MatchesWrapper<'r, 'h> {
        match self {
            Self::Basic(regex) => regex.find_iter(haystack).into(),
            Self::Fancy(regex) => regex.find_iter(haystack).into(),
        }
    }

    /// Replace every non-overlapping match, left to right.
    ///
    /// ## Arguments
    /// * `haystack` - The string to search in.
    /// * `replacement` - A replacement template; `$1` / `${1}` expand to capture groups,
    ///   `$$` is a literal `$`.
    ///
    /// ## Returns
    /// The rewritten text; borrowed when nothing matched.
    pub fn replace_all<'h>(
        &self,
        haystack: &'h str,
        replacement: &str,
    ) -> Result<Cow<'h, str>, ErrorWrapper> {
        match self {
            Self::Basic(regex) => Ok(regex.replace_all(haystack, replacement)),
            Self::Fancy(regex) => Ok(regex.try_replacen(haystack, 0, replacement)?),
        }
    }
}

/// Wrapper for regex matches.
pub enum MatchesWrapper<'r, 'h> {
    /// Wrapper for `regex::Matches`.
    Regex(regex::Matches<'r, 'h>),

    /// Wrapper for `fancy_regex::Matches`.
    FancyRegex(fancy_regex::Matches<'r, 'h>),
}

impl<'r, 'h> From<regex::Matches<'r, 'h>> for MatchesWrapper<'r, 'h> {
    fn from(matches: regex::Matches<'r, 'h>) -> Self {
        Self::Regex(matches)
    }
}

impl<'r, 'h> From<fancy_regex::Matches<'r, 'h>> for MatchesWrapper<'r, 'h> {
    fn from(matches: fancy_regex::Matches<'r, 'h>) -> Self {
        Self::FancyRegex(matches)
    }
}

impl<'h> Iterator for MatchesWrapper<'_, 'h> {
    type Item = Result<&'h str, ErrorWrapper>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Regex(matches) => matches.next().map(|m| Ok(m.as_str())),
            Self::FancyRegex(matches) => matches
                .next()
                .map(|m| m.map(|m| m.as_str()).map_err(ErrorWrapper::from)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utility::regex::RegexPattern;

    #[test]
    fn test_partial_eq() {
        let b0 = RegexPattern::Basic("cat".to_string()).compile().unwrap();
        let b1 = RegexPattern::Basic("dog".to_string()).compile().unwrap();
        let f0 = RegexPattern::Fancy("cat".to_string()).compile().unwrap();

        assert_eq!(&b0, &b0);
        assert_ne!(&b0, &b1);
        assert_ne!(&b0, &f0);
        assert_eq!(&f0, &f0);
    }

    #[test]
    fn test_find_iter() {
        for pattern in [
            RegexPattern::Basic(r"[a-z]+".to_string()),
            RegexPattern::Fancy(r"[a-z]+(?!\d)".to_string()),
        ] {
            let rw = pattern.compile().unwrap();
            let found: Vec<&str> = rw
                .find_iter("the cat, the hat")
                .collect::<Result<_, _>>()
                .unwrap();
            assert_eq!(found, vec!["the", "cat", "the", "hat"]);
        }
    }

    #[test]
    fn test_replace_all() {
        let basic = RegexPattern::Basic(r"(\.)(\w)".to_string())
            .compile()
            .unwrap();
        assert_eq!(basic.replace_all("a.b c.", "#${2}").unwrap(), "a#b c.");

        let fancy = RegexPattern::Fancy(r"(?<!N\.)N\.N(?!\.N)".to_string())
            .compile()
            .unwrap();
        assert_eq!(fancy.replace_all("N.N and N.N.N", "N").unwrap(), "N and N.N.N");

        // no match borrows.
        assert!(matches!(
            basic.replace_all("nothing here", "#").unwrap(),
            Cow::Borrowed(_)
        ));
    }

    #[test]
    fn test_replace_all_literal_dollar() {
        let basic = RegexPattern::Basic(r"x".to_string()).compile().unwrap();
        assert_eq!(basic.replace_all("axb", "$$").unwrap(), "a$b");
    }
}
