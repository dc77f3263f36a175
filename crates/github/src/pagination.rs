//! `Link` response header parsing.
//!
//! GitHub advertises further pages as
//! `<https://api.github.com/orgs/acme/projects?per_page=100&page=2>; rel="next", <…>; rel="last"`.
//! Only the `page` query parameter of the `rel="next"` target matters here.

use reqwest::Url;

/// Returns the page number of the `rel="next"` link, or `None` on the last
/// page (no `next` link, or a link without a usable non-zero `page`).
pub fn next_page_from_link(header: &str) -> Option<u32> {
    header
        .split(',')
        .find_map(|entry| {
            let (target, params) = entry.trim().split_once(';')?;
            let is_next = params
                .split(';')
                .filter_map(|param| param.trim().strip_prefix("rel="))
                .any(|rel| rel.trim_matches('"').split_whitespace().any(|r| r == "next"));
            if !is_next {
                return None;
            }
            let target = target.trim().strip_prefix('<')?.strip_suffix('>')?;
            let url = Url::parse(target).ok()?;
            url.query_pairs()
                .find(|(key, _)| key == "page")
                .and_then(|(_, value)| value.parse::<u32>().ok())
        })
        .filter(|&page| page != 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_link_yields_its_page_number() {
        let header = r#"<https://api.github.com/organizations/1/projects?per_page=100&page=2>; rel="next", <https://api.github.com/organizations/1/projects?per_page=100&page=5>; rel="last""#;
        assert_eq!(next_page_from_link(header), Some(2));
    }

    #[test]
    fn last_page_has_no_next_link() {
        let header = r#"<https://api.github.com/projects/7/columns?per_page=100&page=1>; rel="first", <https://api.github.com/projects/7/columns?per_page=100&page=2>; rel="prev""#;
        assert_eq!(next_page_from_link(header), None);
    }

    #[test]
    fn next_may_share_a_rel_with_other_relations() {
        let header = r#"<https://api.github.com/x?page=3>; rel="next last""#;
        assert_eq!(next_page_from_link(header), Some(3));
    }

    #[test]
    fn malformed_links_are_treated_as_the_last_page() {
        assert_eq!(next_page_from_link(""), None);
        assert_eq!(next_page_from_link(r#"https://api.github.com/x?page=2; rel="next""#), None);
        assert_eq!(next_page_from_link(r#"<https://api.github.com/x?page=abc>; rel="next""#), None);
        assert_eq!(next_page_from_link(r#"<https://api.github.com/x?page=0>; rel="next""#), None);
    }
}
