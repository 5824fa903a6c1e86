//! Case transforms applied to built token strings.

/// Uppercase the first character, leaving the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// camelCase a built string by splitting on the configured separator.
///
/// The split is an exact match on `separator`, not on arbitrary whitespace.
/// The first word is lowercased entirely; every later word gets an uppercased
/// first character with the remainder lowercased, and the words are joined
/// with no delimiter. An empty separator performs no split.
pub fn camel_case(s: &str, separator: &str) -> String {
    if separator.is_empty() {
        return s.to_lowercase();
    }

    let mut out = String::with_capacity(s.len());
    for (i, word) in s.split(separator).enumerate() {
        if i == 0 {
            out.push_str(&word.to_lowercase());
        } else {
            out.push_str(&capitalize(&word.to_lowercase()));
        }
    }
    out
}

/// Sentence case: lowercase the whole string, then uppercase the first character.
pub fn sentence_case(s: &str) -> String {
    capitalize(&s.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_basic() {
        assert_eq!(capitalize("hello"), "Hello");
    }

    #[test]
    fn capitalize_empty() {
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn capitalize_single_char() {
        assert_eq!(capitalize("x"), "X");
    }

    #[test]
    fn camel_case_space_separator() {
        assert_eq!(camel_case("Foo Bar", " "), "fooBar");
    }

    #[test]
    fn camel_case_lowercases_interior() {
        assert_eq!(camel_case("FOO BAR BAZ", " "), "fooBarBaz");
    }

    #[test]
    fn camel_case_custom_separator() {
        assert_eq!(camel_case("foo--bar", "--"), "fooBar");
    }

    #[test]
    fn camel_case_single_word() {
        assert_eq!(camel_case("Hello", " "), "hello");
    }

    #[test]
    fn camel_case_empty() {
        assert_eq!(camel_case("", " "), "");
    }

    #[test]
    fn camel_case_empty_separator_is_one_word() {
        assert_eq!(camel_case("Foo Bar", ""), "foo bar");
    }

    #[test]
    fn sentence_case_basic() {
        assert_eq!(sentence_case("hello WORLD"), "Hello world");
    }

    #[test]
    fn sentence_case_empty() {
        assert_eq!(sentence_case(""), "");
    }
}
