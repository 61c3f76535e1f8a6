/// Visibility state of the suggestion panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    /// A keystroke arrived; filtering waits for the debounce timer.
    Settling,
    /// Settled with at least one suggestion.
    Open,
    /// Settled with no suggestions; the panel shows a no-match row.
    Empty,
    /// Hidden by a commit or an outside interaction.
    Dismissed,
}

impl PanelState {
    pub fn is_visible(self) -> bool {
        matches!(self, Self::Open | Self::Empty)
    }
}

/// A hover in progress, remembering the highlight to restore on exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Hover {
    pub row: usize,
    pub restore: Option<usize>,
}

/// Where a widget-local pointer position lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum HitRegion {
    Input,
    Suggestion(usize),
    /// Inside the panel but not on a suggestion (the no-match row).
    Panel,
    Outside,
}

pub(super) fn next_index(current: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match current {
        Some(index) if index + 1 < len => Some(index + 1),
        _ => Some(0),
    }
}

pub(super) fn prev_index(current: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match current {
        Some(index) if index > 0 && index < len => Some(index - 1),
        _ => Some(len - 1),
    }
}

/// Adjusts `offset` so that `active` sits inside a window of `max_visible`
/// rows over `len` items.
pub(super) fn ensure_visible(
    offset: &mut usize,
    max_visible: usize,
    active: Option<usize>,
    len: usize,
) {
    if max_visible == 0 || len <= max_visible {
        *offset = 0;
        return;
    }
    *offset = (*offset).min(len - max_visible);
    let Some(active) = active else {
        return;
    };
    if active < *offset {
        *offset = active;
    } else if active >= *offset + max_visible {
        *offset = active + 1 - max_visible;
    }
}

#[cfg(test)]
mod tests {
    use super::{ensure_visible, next_index, prev_index};
    use proptest::prelude::*;

    #[test]
    fn navigation_wraps_both_ways() {
        assert_eq!(next_index(None, 3), Some(0));
        assert_eq!(next_index(Some(1), 3), Some(2));
        assert_eq!(next_index(Some(2), 3), Some(0));

        assert_eq!(prev_index(None, 3), Some(2));
        assert_eq!(prev_index(Some(1), 3), Some(0));
        assert_eq!(prev_index(Some(0), 3), Some(2));
    }

    #[test]
    fn navigation_on_empty_list_is_none() {
        assert_eq!(next_index(None, 0), None);
        assert_eq!(prev_index(Some(4), 0), None);
    }

    #[test]
    fn window_follows_active_row() {
        let mut offset = 0;
        ensure_visible(&mut offset, 3, Some(4), 10);
        assert_eq!(offset, 2);
        ensure_visible(&mut offset, 3, Some(0), 10);
        assert_eq!(offset, 0);
        ensure_visible(&mut offset, 3, Some(9), 10);
        assert_eq!(offset, 7);
        ensure_visible(&mut offset, 3, None, 2);
        assert_eq!(offset, 0);
    }

    proptest! {
        #[test]
        fn down_then_up_is_identity(len in 1usize..40, start in 0usize..40) {
            let start = start % len;
            prop_assert_eq!(prev_index(next_index(Some(start), len), len), Some(start));
            prop_assert_eq!(next_index(prev_index(Some(start), len), len), Some(start));
        }

        #[test]
        fn cycling_len_times_returns_home(len in 1usize..40) {
            let mut index = Some(len - 1);
            for _ in 0..len {
                index = next_index(index, len);
                prop_assert!(index.is_some_and(|i| i < len));
            }
            prop_assert_eq!(index, Some(len - 1));
        }
    }
}
