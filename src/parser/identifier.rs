use std::sync::LazyLock;

use regex::Regex;

static ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(OCHMO-M?TB-\d+)").unwrap());

// Kept separate from ID_RE: a URL can carry an identifier without a slug.
static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)ochmo-m?tb-\d+-(.*?)\.pdf").unwrap());

/// First `OCHMO-[M]TB-<n>` token in the URL, uppercased.
pub fn derive_identifier(url: &str) -> Option<String> {
    let caps = ID_RE.captures(url)?;
    Some(caps.get(1)?.as_str().to_uppercase())
}

/// Human title from the filename slug that follows the identifier.
///
/// Returns `None` without looking at the URL when no identifier was derived.
pub fn derive_title(url: &str, identifier: Option<&str>) -> Option<String> {
    identifier?;
    let slug = TITLE_RE.captures(url)?.get(1)?.as_str();
    Some(capitalize_words(&slug.replace('-', " ")))
}

/// Titlecase the first cased character of every run of cased characters,
/// lowercase the rest. Digits and punctuation start a new word.
fn capitalize_words(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_cased = false;
    for c in s.chars() {
        let cased = is_cased(c);
        if cased && !prev_cased {
            push_titlecase(&mut out, c);
        } else if cased {
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
        prev_cased = cased;
    }
    out
}

fn is_cased(c: char) -> bool {
    c.is_lowercase() || c.is_uppercase() || is_titlecase_letter(c)
}

// Unicode category Lt
fn is_titlecase_letter(c: char) -> bool {
    matches!(
        c,
        '\u{01C5}' | '\u{01C8}' | '\u{01CB}' | '\u{01F2}'
            | '\u{1F88}'..='\u{1F8F}'
            | '\u{1F98}'..='\u{1F9F}'
            | '\u{1FA8}'..='\u{1FAF}'
            | '\u{1FBC}' | '\u{1FCC}' | '\u{1FFC}'
    )
}

/// Characters whose titlecase differs from their uppercase.
fn push_titlecase(out: &mut String, c: char) {
    let mapped = match c {
        'ß' => "Ss",
        '\u{FB00}' => "Ff",
        '\u{FB01}' => "Fi",
        '\u{FB02}' => "Fl",
        '\u{FB03}' => "Ffi",
        '\u{FB04}' => "Ffl",
        '\u{FB05}' | '\u{FB06}' => "St",
        '\u{01C4}'..='\u{01C6}' => "\u{01C5}",
        '\u{01C7}'..='\u{01C9}' => "\u{01C8}",
        '\u{01CA}'..='\u{01CC}' => "\u{01CB}",
        '\u{01F1}'..='\u{01F3}' => "\u{01F2}",
        _ => {
            if let Some(t) = greek_iota_titlecase(c) {
                out.push(t);
            } else {
                out.extend(c.to_uppercase());
            }
            return;
        }
    };
    out.push_str(mapped);
}

// Greek letters with ypogegrammeni titlecase to a single Lt letter,
// where uppercasing would expand them to two characters.
fn greek_iota_titlecase(c: char) -> Option<char> {
    let cp = c as u32;
    let t = match cp {
        0x1F80..=0x1F87 | 0x1F90..=0x1F97 | 0x1FA0..=0x1FA7 => cp + 8,
        0x1F88..=0x1F8F | 0x1F98..=0x1F9F | 0x1FA8..=0x1FAF => cp,
        0x1FB3 | 0x1FBC => 0x1FBC,
        0x1FC3 | 0x1FCC => 0x1FCC,
        0x1FF3 | 0x1FFC => 0x1FFC,
        _ => return None,
    };
    char::from_u32(t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mtb_identifier_and_title() {
        let url = "https://x/ochmo-mtb-123-crew-health-risk.pdf?v=1";
        let id = derive_identifier(url);
        assert_eq!(id.as_deref(), Some("OCHMO-MTB-123"));
        assert_eq!(derive_title(url, id.as_deref()).as_deref(), Some("Crew Health Risk"));
    }

    #[test]
    fn tb_identifier_uppercased() {
        let url = "https://www.nasa.gov/wp-content/uploads/2023/ochmo-tb-045-noise.pdf?emrc=1";
        assert_eq!(derive_identifier(url).as_deref(), Some("OCHMO-TB-045"));
    }

    #[test]
    fn mixed_case_identifier() {
        assert_eq!(derive_identifier("/Ochmo-Mtb-7-x.pdf").as_deref(), Some("OCHMO-MTB-7"));
    }

    #[test]
    fn first_match_wins() {
        let url = "https://x/ochmo-tb-1/ochmo-tb-2-a.pdf";
        assert_eq!(derive_identifier(url).as_deref(), Some("OCHMO-TB-1"));
    }

    #[test]
    fn no_identifier() {
        assert_eq!(derive_identifier("https://www.nasa.gov/about/"), None);
        assert_eq!(derive_identifier(""), None);
        assert_eq!(derive_identifier("ochmo-xtb-1.pdf"), None);
        assert_eq!(derive_identifier("ochmo-tb-.pdf"), None);
        assert_eq!(derive_identifier("::not a url::"), None);
    }

    #[test]
    fn title_requires_identifier() {
        let url = "https://x/ochmo-tb-12-lunar-dust.pdf";
        assert_eq!(derive_title(url, None), None);
        assert_eq!(derive_title("https://x/other.pdf", None), None);
    }

    #[test]
    fn title_mismatch_is_none() {
        // Identifier matches but there is no slug between it and ".pdf".
        let url = "https://x/ochmo-tb-12.pdf?v=2";
        let id = derive_identifier(url);
        assert_eq!(id.as_deref(), Some("OCHMO-TB-12"));
        assert_eq!(derive_title(url, id.as_deref()), None);

        let url = "https://x/ochmo-tb-12-no-extension";
        let id = derive_identifier(url);
        assert!(id.is_some());
        assert_eq!(derive_title(url, id.as_deref()), None);
    }

    #[test]
    fn title_stops_at_first_pdf() {
        let url = "https://x/OCHMO-TB-3-HAB-volume.pdf?x=.pdf";
        let id = derive_identifier(url);
        assert_eq!(derive_title(url, id.as_deref()).as_deref(), Some("Hab Volume"));
    }

    #[test]
    fn capitalization_rules() {
        assert_eq!(capitalize_words("crew health risk"), "Crew Health Risk");
        assert_eq!(capitalize_words("EVA SUITS"), "Eva Suits");
        assert_eq!(capitalize_words("3d printing"), "3D Printing");
        assert_eq!(capitalize_words("co2  levels"), "Co2  Levels");
        assert_eq!(capitalize_words(""), "");
    }

    #[test]
    fn titlecase_mappings() {
        assert_eq!(capitalize_words("straße"), "Straße");
        assert_eq!(capitalize_words("ßig"), "Ssig");
        assert_eq!(capitalize_words("ǆemal ǅemal ǄEMAL"), "ǅemal ǅemal ǅemal");
        assert_eq!(capitalize_words("ǉubav"), "ǈubav");
        assert_eq!(capitalize_words("ﬁre ﬂow"), "Fire Flow");
        assert_eq!(capitalize_words("ᾳ"), "ᾼ");
        assert_eq!(capitalize_words("café crème"), "Café Crème");
    }

    #[test]
    fn titlecase_letter_continues_word() {
        // Lt letters are cased, so the letter after them is lowercased
        assert_eq!(capitalize_words("xǅA"), "Xǆa");
    }
}
