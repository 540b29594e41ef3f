/// Splice the beginning of `name_a` onto the ending of `name_b`.
///
/// Slice sizes scale with each name's length (40%, clamped to 2..=4
/// characters). Inputs shorter than two characters are concatenated as-is.
/// Case is preserved; callers capitalize the result if they need to.
pub fn combine(name_a: &str, name_b: &str) -> String {
    let len_a = name_a.chars().count();
    let len_b = name_b.chars().count();
    if len_a < 2 || len_b < 2 {
        return format!("{}{}", name_a, name_b);
    }

    let take_a = slice_len(len_a);
    let take_b = slice_len(len_b);

    let mut out = String::with_capacity(take_a + take_b);
    out.extend(name_a.chars().take(take_a));
    out.extend(name_b.chars().skip(len_b - take_b));
    out
}

fn slice_len(len: usize) -> usize {
    ((len as f64 * 0.4).round() as usize).clamp(2, 4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_inputs_concatenate() {
        assert_eq!(combine("A", "Anduin"), "AAnduin");
        assert_eq!(combine("Anduin", "A"), "AnduinA");
        assert_eq!(combine("", "Anduin"), "Anduin");
        assert_eq!(combine("", ""), "");
    }

    #[test]
    fn splices_proportional_prefix_and_suffix() {
        // len 10 -> 4 chars of prefix, len 9 -> 4 chars of suffix
        assert_eq!(combine("DarthVader", "Skywalker"), "Dartlker");
        // len 2 on both sides clamps to the whole name
        assert_eq!(combine("Ty", "Po"), "TyPo");
    }

    #[test]
    fn slice_len_clamps_to_two_through_four() {
        assert_eq!(slice_len(2), 2);
        assert_eq!(slice_len(5), 2);
        assert_eq!(slice_len(6), 2);
        assert_eq!(slice_len(7), 3);
        assert_eq!(slice_len(9), 4);
        assert_eq!(slice_len(40), 4);
    }
}
