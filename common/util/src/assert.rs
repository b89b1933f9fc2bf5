/// Asserts that `content` contains every needle, in the given order.
///
/// Each needle is searched for after the end of the previous match, so
/// overlapping or out-of-order needles fail.
#[macro_export]
macro_rules! assert_contains_inorder {
    ($content:expr, [$($needle:expr),+ $(,)?]) => {{
        let content: &str = $content.as_ref();
        let mut remainder: &str = content;
        $(
            match remainder.find($needle) {
                Some(position) => {
                    remainder = &remainder[position + $needle.len()..];
                }
                None => panic!(
                    "expected content, in order. needle: {:?}, remainder: {:?}",
                    $needle, remainder
                ),
            }
        )+
    }};
}
