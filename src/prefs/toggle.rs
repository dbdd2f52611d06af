//! Dark/light counterpart lookup.
//!
//! `Halves` is index arithmetic over catalog order: the catalog is assumed to
//! list its light themes in the first half and their dark counterparts in the
//! second. It does not inspect key prefixes beyond deciding the direction.
//!
//! Edge cases:
//! - fewer than two entries: no opposite half, no switch;
//! - odd count: `half = n / 2`, so the final key is never a toggle target;
//! - a current key missing from the catalog maps to the first entry of the
//!   opposite half.

use serde::{Deserialize, Serialize};

use crate::catalog::{is_dark_key, ThemeCatalog, DARK_PREFIX, LIGHT_PREFIX};

/// How `toggle_dark_light` picks the counterpart theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleStrategy {
    /// Map index `i` across `n / 2`.
    #[default]
    Halves,
    /// Map position within the `light*` keys to the same position within the
    /// `dark*` keys, and back.
    Prefix,
}

/// Counterpart of `current`, or `None` when there is nothing to switch to.
pub fn toggle_target<'a>(
    catalog: &'a ThemeCatalog,
    current: &str,
    strategy: ToggleStrategy,
) -> Option<&'a str> {
    let target = match strategy {
        ToggleStrategy::Halves => halves_target(catalog, current),
        ToggleStrategy::Prefix => prefix_target(catalog, current),
    }?;
    (target != current).then_some(target)
}

fn halves_target<'a>(catalog: &'a ThemeCatalog, current: &str) -> Option<&'a str> {
    let half = catalog.len() / 2;
    if half == 0 {
        return None;
    }
    let offset = catalog.position(current).map_or(0, |idx| idx % half);
    if is_dark_key(current) {
        catalog.key_at(offset)
    } else {
        catalog.key_at(half + offset)
    }
}

fn prefix_target<'a>(catalog: &'a ThemeCatalog, current: &str) -> Option<&'a str> {
    let lights: Vec<&str> = catalog
        .keys()
        .filter(|key| key.starts_with(LIGHT_PREFIX))
        .collect();
    let darks: Vec<&str> = catalog
        .keys()
        .filter(|key| key.starts_with(DARK_PREFIX))
        .collect();
    let (own, other) = if is_dark_key(current) {
        (&darks, &lights)
    } else {
        (&lights, &darks)
    };
    let last = other.len().checked_sub(1)?;
    let pos = own.iter().position(|key| *key == current).unwrap_or(0);
    Some(other[pos.min(last)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::catalog;

    #[test]
    fn halves_switches_light_to_dark_and_back() {
        let themes = catalog(&["light1", "dark1"]);
        assert_eq!(
            toggle_target(&themes, "light1", ToggleStrategy::Halves),
            Some("dark1")
        );
        assert_eq!(
            toggle_target(&themes, "dark1", ToggleStrategy::Halves),
            Some("light1")
        );
    }

    #[test]
    fn halves_maps_positions_across_the_midpoint() {
        let themes = catalog(&["light1", "light2", "light3", "dark1", "dark2", "dark3"]);
        assert_eq!(
            toggle_target(&themes, "light2", ToggleStrategy::Halves),
            Some("dark2")
        );
        assert_eq!(
            toggle_target(&themes, "dark3", ToggleStrategy::Halves),
            Some("light3")
        );
    }

    #[test]
    fn halves_with_fewer_than_two_entries_is_noop() {
        assert_eq!(
            toggle_target(&catalog(&["light1"]), "light1", ToggleStrategy::Halves),
            None
        );
        assert_eq!(
            toggle_target(&catalog(&[]), "light1", ToggleStrategy::Halves),
            None
        );
    }

    #[test]
    fn halves_with_odd_count_stays_in_bounds() {
        let themes = catalog(&["light1", "light2", "dark1", "dark2", "special1"]);
        // half = 2; special1 sits at index 4 and is treated as light.
        assert_eq!(
            toggle_target(&themes, "special1", ToggleStrategy::Halves),
            Some("dark1")
        );
        assert_eq!(
            toggle_target(&themes, "dark2", ToggleStrategy::Halves),
            Some("light2")
        );
    }

    #[test]
    fn halves_unknown_current_falls_to_opposite_half_start() {
        let themes = catalog(&["light1", "light2", "dark1", "dark2"]);
        assert_eq!(
            toggle_target(&themes, "dark9", ToggleStrategy::Halves),
            Some("light1")
        );
        assert_eq!(
            toggle_target(&themes, "light9", ToggleStrategy::Halves),
            Some("dark1")
        );
    }

    #[test]
    fn halves_target_equal_to_current_is_noop() {
        // light1 at index 1 of 2 maps to keys[1 + 0] == itself.
        let themes = catalog(&["dark1", "light1"]);
        assert_eq!(
            toggle_target(&themes, "light1", ToggleStrategy::Halves),
            None
        );
    }

    #[test]
    fn prefix_pairs_by_position_within_prefix() {
        let themes = catalog(&["light1", "special1", "light2", "dark1", "dark2"]);
        assert_eq!(
            toggle_target(&themes, "light2", ToggleStrategy::Prefix),
            Some("dark2")
        );
        assert_eq!(
            toggle_target(&themes, "dark1", ToggleStrategy::Prefix),
            Some("light1")
        );
        assert_eq!(
            toggle_target(&themes, "special1", ToggleStrategy::Prefix),
            Some("dark1")
        );
    }

    #[test]
    fn prefix_clamps_to_shorter_opposite_list() {
        let themes = catalog(&["light1", "light2", "light3", "dark1"]);
        assert_eq!(
            toggle_target(&themes, "light3", ToggleStrategy::Prefix),
            Some("dark1")
        );
    }

    #[test]
    fn prefix_without_opposite_entries_is_noop() {
        let themes = catalog(&["light1", "light2"]);
        assert_eq!(
            toggle_target(&themes, "light1", ToggleStrategy::Prefix),
            None
        );
    }
}
