//! Cell ordering.
//!
//! Text compares with a collation-style three level comparison: base letters
//! first (case and accents folded), then accents, then case with lowercase
//! before uppercase. Numbers compare numerically. Any other pairing, mixed
//! kinds included, compares equal so a stable sort keeps source order.

use std::cmp::Ordering;

use super::item::CellValue;

/// Compare two projected cell values.
pub fn compare_cells(a: &CellValue, b: &CellValue) -> Ordering {
    match (a, b) {
        (CellValue::Text(a), CellValue::Text(b)) => compare_text(a, b),
        (CellValue::Number(a), CellValue::Number(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
        _ => Ordering::Equal,
    }
}

/// String comparison approximating root-locale collation for Latin text.
///
/// Case and the accents of common Latin letters are folded for the first
/// pass; other scripts compare by code point after lowercasing.
pub fn compare_text(a: &str, b: &str) -> Ordering {
    let primary = a
        .chars()
        .flat_map(fold_case)
        .map(base_letter)
        .cmp(b.chars().flat_map(fold_case).map(base_letter));
    if primary != Ordering::Equal {
        return primary;
    }

    let secondary = a.chars().flat_map(fold_case).cmp(b.chars().flat_map(fold_case));
    if secondary != Ordering::Equal {
        return secondary;
    }

    // Lowercase sorts before uppercase at the first case difference.
    for (x, y) in a.chars().zip(b.chars()) {
        if x != y {
            return match (x.is_lowercase(), y.is_lowercase()) {
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                _ => x.cmp(&y),
            };
        }
    }

    a.cmp(b)
}

fn fold_case(c: char) -> std::char::ToLowercase {
    c.to_lowercase()
}

/// Strip the accent from common Latin letters.
fn base_letter(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'ĉ' | 'ċ' | 'č' => 'c',
        'ď' | 'đ' => 'd',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => 'e',
        'ĝ' | 'ğ' | 'ġ' | 'ģ' => 'g',
        'ĥ' | 'ħ' => 'h',
        'ì' | 'í' | 'î' | 'ï' | 'ĩ' | 'ī' | 'ĭ' | 'į' | 'ı' => 'i',
        'ĵ' => 'j',
        'ķ' => 'k',
        'ĺ' | 'ļ' | 'ľ' | 'ŀ' | 'ł' => 'l',
        'ñ' | 'ń' | 'ņ' | 'ň' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ŏ' | 'ő' => 'o',
        'ŕ' | 'ŗ' | 'ř' => 'r',
        'ś' | 'ŝ' | 'ş' | 'š' => 's',
        'ţ' | 'ť' | 'ŧ' => 't',
        'ù' | 'ú' | 'û' | 'ü' | 'ũ' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' => 'u',
        'ŵ' => 'w',
        'ý' | 'ÿ' | 'ŷ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        _ => c,
    }
}
