use super::tables::ORDINAL_SUFFIXES;

/// Split `"21st"`, `"1,000th"`, `"1980s"` into numeral and suffix rendering.
///
/// The numeral is one or more digit groups joined by at most one separator
/// (`,`, `.` or space) between groups. Returns `None` for anything else.
pub(crate) fn split_ordinal(lower: &str) -> Option<(&str, &'static str)> {
    ORDINAL_SUFFIXES.iter().find_map(|&(suffix, rendering)| {
        let numeral = lower.strip_suffix(suffix)?;
        is_numeral(numeral).then_some((numeral, rendering))
    })
}

fn is_numeral(s: &str) -> bool {
    let bytes = s.as_bytes();
    let (Some(first), Some(last)) = (bytes.first(), bytes.last()) else {
        return false;
    };
    if !first.is_ascii_digit() || !last.is_ascii_digit() {
        return false;
    }
    bytes.windows(2).all(|w| w[0].is_ascii_digit() || w[1].is_ascii_digit())
        && bytes
            .iter()
            .all(|b| b.is_ascii_digit() || matches!(b, b',' | b'.' | b' '))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_ordinals() {
        assert_eq!(split_ordinal("1st"), Some(("1", "𐑕𐑑")));
        assert_eq!(split_ordinal("22nd"), Some(("22", "𐑯𐑛")));
        assert_eq!(split_ordinal("3rd"), Some(("3", "𐑮𐑛")));
        assert_eq!(split_ordinal("11th"), Some(("11", "𐑔")));
    }

    #[test]
    fn decades_and_separators() {
        assert_eq!(split_ordinal("1980s"), Some(("1980", "𐑟")));
        assert_eq!(split_ordinal("1,000th"), Some(("1,000", "𐑔")));
        assert_eq!(split_ordinal("2.5th"), Some(("2.5", "𐑔")));
    }

    #[test]
    fn rejects_non_ordinals() {
        assert_eq!(split_ordinal("st"), None);
        assert_eq!(split_ordinal("first"), None);
        assert_eq!(split_ordinal("1,,000th"), None);
        assert_eq!(split_ordinal(",1th"), None);
        assert_eq!(split_ordinal("1,th"), None);
        assert_eq!(split_ordinal("12"), None);
        assert_eq!(split_ordinal("a1st"), None);
    }
}
