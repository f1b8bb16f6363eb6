use super::{Badge, Page};

/// Reads a count from badge text the lenient way: leading digits after
/// whitespace, anything else counts as zero. Counts too large for `u64`
/// stay at `u64::MAX`.
fn parse_count(text: &str) -> u64 {
    text.trim_start()
        .chars()
        .map_while(|c| c.to_digit(10))
        .fold(0, |count: u64, digit| {
            count.saturating_mul(10).saturating_add(u64::from(digit))
        })
}

/// Adds one to the unread badge, creating it next to the bell with `1` when
/// it is not rendered yet.
///
/// Returns the new count, or `None` when the page has no bell to anchor a
/// badge to. There is no decrement: the count only goes back down when the
/// server renders the page again.
pub fn increment_badge(page: &mut Page) -> Option<u64> {
    let bell = page.bell.as_mut()?;
    let count = match bell.badge.as_mut() {
        Some(badge) => {
            let count = parse_count(&badge.text).saturating_add(1);
            badge.text = count.to_string();
            count
        }
        None => {
            bell.badge = Some(Badge::new("1"));
            1
        }
    };
    Some(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Bell;

    fn page_with_badge(text: Option<&str>) -> Page {
        Page {
            bell: Some(Bell {
                badge: text.map(Badge::new),
            }),
            ..Page::default()
        }
    }

    #[test]
    fn increments_existing_badge() {
        let mut page = page_with_badge(Some("3"));
        assert_eq!(increment_badge(&mut page), Some(4));
        assert_eq!(page.badge_text(), Some("4"));
    }

    #[test]
    fn creates_badge_once() {
        let mut page = page_with_badge(None);
        assert_eq!(increment_badge(&mut page), Some(1));
        assert_eq!(increment_badge(&mut page), Some(2));
        assert_eq!(page.badge_text(), Some("2"));
    }

    #[test]
    fn unparsable_text_counts_as_zero() {
        for text in ["", "new", " - "] {
            let mut page = page_with_badge(Some(text));
            assert_eq!(increment_badge(&mut page), Some(1), "badge text {text:?}");
        }
        let mut page = page_with_badge(Some(" 99+"));
        assert_eq!(increment_badge(&mut page), Some(100));
    }

    #[test]
    fn oversized_counts_saturate() {
        let mut page = page_with_badge(Some("1234567890123456789012345"));
        assert_eq!(increment_badge(&mut page), Some(u64::MAX));
        assert_eq!(page.badge_text(), Some(u64::MAX.to_string().as_str()));

        assert_eq!(increment_badge(&mut page), Some(u64::MAX));
    }

    #[test]
    fn no_bell_is_a_no_op() {
        let mut page = Page::default();
        assert_eq!(increment_badge(&mut page), None);
        assert_eq!(page, Page::default());
    }
}
