/// Helpers shared by list pages: search highlighting and the search box
use leptos::prelude::*;

fn chars_match(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Byte ranges of case-insensitive occurrences of `term` in `text`.
///
/// Matching walks the characters of `text` itself, so every range starts and
/// ends on a char boundary of the original string.
pub fn match_ranges(text: &str, term: &str) -> Vec<(usize, usize)> {
    let needle: Vec<char> = term.chars().collect();
    if needle.is_empty() {
        return Vec::new();
    }
    let chars: Vec<(usize, char)> = text.char_indices().collect();

    let mut ranges = Vec::new();
    let mut i = 0;
    while i + needle.len() <= chars.len() {
        let hit = needle
            .iter()
            .zip(&chars[i..])
            .all(|(n, (_, c))| chars_match(*c, *n));
        if hit {
            let start = chars[i].0;
            let end = chars
                .get(i + needle.len())
                .map(|(pos, _)| *pos)
                .unwrap_or(text.len());
            ranges.push((start, end));
            i += needle.len();
        } else {
            i += 1;
        }
    }
    ranges
}

/// Highlight matches of the search term inside a cell value
pub fn highlight_matches(text: &str, term: &str) -> AnyView {
    let ranges = match_ranges(text, term);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;
    for (start, end) in ranges {
        if start > last_pos {
            parts.push(view! { <span>{text[last_pos..start].to_string()}</span> }.into_any());
        }
        parts.push(
            view! { <mark class="search-highlight">{text[start..end].to_string()}</mark> }
                .into_any(),
        );
        last_pos = end;
    }
    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Search box with a clear button. Every keystroke is reported.
#[component]
pub fn SearchInput(
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">{crate::shared::icons::icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=move || !value.get().is_empty()
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            {move || (!value.get().is_empty()).then(|| view! {
                <button
                    class="search-input__clear"
                    title="Clear"
                    on:click=move |_| on_change.run(String::new())
                >
                    {crate::shared::icons::icon("x")}
                </button>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_ranges_case_insensitive() {
        assert_eq!(match_ranges("Bamboo Toothbrush", "bAm"), vec![(0, 3)]);
        assert_eq!(match_ranges("ORD-001", "0"), vec![(4, 5), (5, 6)]);
    }

    #[test]
    fn test_match_ranges_stay_on_char_boundaries() {
        let text = "İẞ";
        let ranges = match_ranges(text, "ß");
        assert_eq!(ranges, vec![(2, 5)]);
        for (start, end) in ranges {
            assert!(text.is_char_boundary(start) && text.is_char_boundary(end));
            assert_eq!(&text[start..end], "ẞ");
        }
        assert_eq!(match_ranges("Straße", "SSE"), Vec::<(usize, usize)>::new());
        assert_eq!(match_ranges("Crème Brûlée", "BRÛ"), vec![(7, 11)]);
    }

    #[test]
    fn test_match_ranges_empty_term_or_miss() {
        assert!(match_ranges("Kitchen", "").is_empty());
        assert!(match_ranges("Kitchen", "soap").is_empty());
    }
}
