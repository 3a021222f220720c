//! Identifier case conversion for column names

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Lower,
    Upper,
    Digit,
    Other,
}

fn classify(c: char) -> CharClass {
    if c.is_uppercase() {
        CharClass::Upper
    } else if c.is_ascii_digit() {
        CharClass::Digit
    } else if c.is_alphabetic() {
        // caseless letters behave like lowercase ones
        CharClass::Lower
    } else {
        CharClass::Other
    }
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '-' || c == '_'
}

/// Convert an identifier to lowercase snake_case.
///
/// Accepts PascalCase, camelCase, space or hyphen separated words and
/// snake_case. Word boundaries are placed:
///
/// - before an uppercase letter that follows a lowercase letter or digit
///   (`firstName` -> `first_name`)
/// - before the last letter of an uppercase run when a lowercase letter
///   follows it (`HTTPRequest` -> `http_request`)
/// - between letters and digits in either direction
///   (`numbers2and55` -> `numbers_2_and_55`)
///
/// Runs of spaces, hyphens and underscores collapse to a single `_` and
/// are dropped at either end. An uppercase run with no lowercase letter
/// after it stays one word, so `RESTAPI` becomes `restapi`. Applying the
/// conversion to its own output returns it unchanged.
pub fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.trim().chars().collect();
    let mut out = String::with_capacity(chars.len() + chars.len() / 4);
    let mut prev: Option<CharClass> = None;
    let mut pending_separator = false;

    for (i, &c) in chars.iter().enumerate() {
        if is_separator(c) {
            pending_separator = true;
            prev = None;
            continue;
        }

        let class = classify(c);
        let boundary = match (prev, class) {
            (Some(CharClass::Lower | CharClass::Digit), CharClass::Upper) => true,
            (Some(CharClass::Upper), CharClass::Upper) => chars
                .get(i + 1)
                .is_some_and(|&next| classify(next) == CharClass::Lower),
            (Some(CharClass::Lower | CharClass::Upper), CharClass::Digit) => true,
            (Some(CharClass::Digit), CharClass::Lower) => true,
            _ => false,
        };

        if (boundary || pending_separator) && !out.is_empty() {
            out.push('_');
        }
        pending_separator = false;
        out.extend(c.to_lowercase());
        prev = Some(class);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_literal_examples() {
        assert_eq!(to_snake_case("FirstName"), "first_name");
        assert_eq!(to_snake_case("HTTPRequest"), "http_request");
        assert_eq!(to_snake_case("userID"), "user_id");
        assert_eq!(to_snake_case("AAAbbb"), "aa_abbb");
        assert_eq!(to_snake_case(""), "");
        assert_eq!(to_snake_case("  Test Case  "), "test_case");
    }

    #[test]
    fn test_whitespace_only() {
        assert_eq!(to_snake_case("   "), "");
        assert_eq!(to_snake_case("\t\n"), "");
    }

    #[test]
    fn test_lower_to_upper_boundary() {
        assert_eq!(to_snake_case("firstName"), "first_name");
        assert_eq!(to_snake_case("accountId"), "account_id");
        assert_eq!(to_snake_case("v2Api"), "v_2_api");
    }

    #[test]
    fn test_acronym_followed_by_word() {
        assert_eq!(to_snake_case("URLParser"), "url_parser");
        assert_eq!(to_snake_case("parseHTTPResponse"), "parse_http_response");
        assert_eq!(to_snake_case("ABc"), "a_bc");
    }

    #[test]
    fn test_trailing_acronym_stays_one_word() {
        assert_eq!(to_snake_case("RESTAPI"), "restapi");
        assert_eq!(to_snake_case("userIDS"), "user_ids");
        assert_eq!(to_snake_case("ID"), "id");
    }

    #[test]
    fn test_letter_digit_boundaries() {
        assert_eq!(to_snake_case("numbers2and55"), "numbers_2_and_55");
        assert_eq!(to_snake_case("A1B"), "a_1_b");
        assert_eq!(to_snake_case("address2"), "address_2");
        assert_eq!(to_snake_case("2fa"), "2_fa");
    }

    #[test]
    fn test_separators_collapse() {
        assert_eq!(to_snake_case("transaction-date"), "transaction_date");
        assert_eq!(to_snake_case("Transaction  Date"), "transaction_date");
        assert_eq!(to_snake_case("a - b"), "a_b");
        assert_eq!(to_snake_case("already_snake_case"), "already_snake_case");
        assert_eq!(to_snake_case("double__underscore"), "double_underscore");
        assert_eq!(to_snake_case("-leading-and-trailing-"), "leading_and_trailing");
    }

    #[test]
    fn test_separator_and_case_boundary_do_not_double() {
        assert_eq!(to_snake_case("first Name"), "first_name");
        assert_eq!(to_snake_case("first_Name"), "first_name");
        assert_eq!(to_snake_case("amount 2"), "amount_2");
    }

    #[test]
    fn test_lowercases_everything() {
        assert_eq!(to_snake_case("ÉTAT"), "état");
        assert_eq!(to_snake_case("Created_At"), "created_at");
    }

    #[test]
    fn test_other_characters_pass_through() {
        assert_eq!(to_snake_case("a.b"), "a.b");
        assert_eq!(to_snake_case("total$Amount"), "total$amount");
    }

    fn random_identifier(rng: &mut StdRng) -> String {
        const ALPHABET: &[char] = &[
            'a', 'b', 'q', 'z', 'A', 'B', 'Q', 'Z', '0', '1', '7', '9', ' ', '-', '_',
        ];
        let len = rng.gen_range(0..18);
        (0..len)
            .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())])
            .collect()
    }

    #[test]
    fn test_idempotent_on_random_identifiers() {
        let mut rng = StdRng::seed_from_u64(0x1ed9e5);
        for _ in 0..50 {
            let input = random_identifier(&mut rng);
            let once = to_snake_case(&input);
            let twice = to_snake_case(&once);
            assert_eq!(once, twice, "not idempotent for {:?}", input);
        }
    }

    #[test]
    fn test_idempotent_on_known_identifiers() {
        for input in [
            "FirstName",
            "HTTPRequest",
            "userID",
            "AAAbbb",
            "numbers2and55",
            "RESTAPI",
            "  Test Case  ",
            "A1B",
        ] {
            let once = to_snake_case(input);
            assert_eq!(to_snake_case(&once), once);
        }
    }
}
