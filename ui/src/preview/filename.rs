use icu_normalizer::DecomposingNormalizerBorrowed;

const FALLBACK_NAME: &str = "street";

/// Latin letters that do not decompose into a base letter plus marks.
fn transliterate(c: char) -> Option<&'static str> {
    Some(match c {
        'ß' | 'ẞ' => "ss",
        'æ' | 'Æ' => "ae",
        'œ' | 'Œ' => "oe",
        'ø' | 'Ø' => "o",
        'ł' | 'Ł' => "l",
        'đ' | 'Đ' => "d",
        'þ' | 'Þ' => "th",
        'ı' => "i",
        _ => return None,
    })
}

fn is_combining_mark(c: char) -> bool {
    matches!(c, '\u{0300}'..='\u{036f}' | '\u{1ab0}'..='\u{1aff}' | '\u{1dc0}'..='\u{1dff}' | '\u{20d0}'..='\u{20ff}')
}

/// Turns a street name into a lowercase, dash-separated ASCII slug.
///
/// Accented letters lose their accents (`é` becomes `e`, `ß` becomes `ss`).
/// Runs of whitespace, `-` and `_` collapse into one dash; anything else
/// that is not an ASCII letter or digit is dropped.
pub fn slugify(name: &str) -> String {
    let decomposed = DecomposingNormalizerBorrowed::new_nfd().normalize(name);
    let mut slug = String::with_capacity(decomposed.len());
    let mut pending_dash = false;
    for c in decomposed.chars().filter(|c| !is_combining_mark(*c)) {
        let mut buf = [0; 4];
        let text: &str = if c.is_ascii_alphanumeric() {
            c.to_ascii_lowercase().encode_utf8(&mut buf)
        } else if let Some(ascii) = transliterate(c) {
            ascii
        } else {
            pending_dash |= c.is_whitespace() || c == '-' || c == '_';
            continue;
        };
        if pending_dash && !slug.is_empty() {
            slug.push('-');
        }
        pending_dash = false;
        slug.push_str(text);
    }
    slug
}

/// The download name for a street image, e.g. `main-ave.png`.
pub fn make_filename(street_name: Option<&str>) -> String {
    let slug = street_name.map(slugify).unwrap_or_default();
    let stem = if slug.is_empty() { FALLBACK_NAME } else { &slug };
    format!("{stem}.png")
}
