//! Search/filter over the in-memory profile list
//!
//! The filter is recomputed on every view. The collection is small enough
//! that an index would cost more than it saves.

use profilemap_domain::Profile;

/// Profiles whose name, description or address contains `query`,
/// case-insensitively, in store order.
///
/// An empty query matches everything. The query is not trimmed, so a lone
/// space only matches fields that contain a space.
pub fn filter_profiles<'a>(profiles: &'a [Profile], query: &str) -> Vec<&'a Profile> {
    if query.is_empty() {
        return profiles.iter().collect();
    }

    let needle = query.to_lowercase();
    profiles.iter().filter(|profile| matches(profile, &needle)).collect()
}

fn matches(profile: &Profile, needle: &str) -> bool {
    [&profile.name, &profile.description, &profile.location.address]
        .into_iter()
        .any(|field| field.to_lowercase().contains(needle))
}
