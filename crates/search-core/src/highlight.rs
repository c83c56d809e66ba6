// search-core/src/highlight.rs
//! 匹配高亮
//!
//! 在原文中定位查询串（忽略大小写）出现的位置，返回字节区间，
//! 再由调用方决定如何包裹（HTML `<mark>`、终端颜色等）。

use std::ops::Range;

/// 逐字符转小写，搜索匹配与高亮都用它，保证两者结果一致
pub fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// 查找 `query` 在 `text` 中所有不重叠的匹配（忽略大小写，从左到右）
///
/// 查询串不去除首尾空白，空白也参与匹配；只含空白的查询没有匹配。
/// 返回的区间都落在原文的字符边界上，可直接用于切片。
/// 某个字符转小写后变成多个字符（如 `İ`）时，只要匹配覆盖其中一部分，
/// 区间就包含整个原字符。
pub fn find_matches(text: &str, query: &str) -> Vec<Range<usize>> {
    if query.trim().is_empty() {
        return Vec::new();
    }
    let needle = fold_case(query);

    // 每个原字符在小写文本中的起始位置，以及它在原文中的区间
    let mut folded = String::with_capacity(text.len());
    let mut origins: Vec<(usize, Range<usize>)> = Vec::new();
    for (offset, c) in text.char_indices() {
        origins.push((folded.len(), offset..offset + c.len_utf8()));
        folded.extend(c.to_lowercase());
    }

    let origin_of = |folded_offset: usize| -> Range<usize> {
        let idx = origins.partition_point(|(start, _)| *start <= folded_offset);
        origins[idx - 1].1.clone()
    };

    let mut ranges: Vec<Range<usize>> = Vec::new();
    for (start, matched) in folded.match_indices(needle.as_str()) {
        let range = origin_of(start).start..origin_of(start + matched.len() - 1).end;
        if ranges.last().is_some_and(|last| range.start < last.end) {
            continue;
        }
        ranges.push(range);
    }
    ranges
}

/// 用 `open` / `close` 包裹 `ranges` 覆盖的文本
pub fn wrap_matches(text: &str, ranges: &[Range<usize>], open: &str, close: &str) -> String {
    let mut out = String::with_capacity(text.len() + ranges.len() * (open.len() + close.len()));
    let mut last = 0;
    for range in ranges {
        if range.start < last || range.end > text.len() {
            continue;
        }
        out.push_str(&text[last..range.start]);
        out.push_str(open);
        out.push_str(&text[range.clone()]);
        out.push_str(close);
        last = range.end;
    }
    out.push_str(&text[last..]);
    out
}

/// `find_matches` + `wrap_matches`
pub fn highlight(text: &str, query: &str, open: &str, close: &str) -> String {
    wrap_matches(text, &find_matches(text, query), open, close)
}
