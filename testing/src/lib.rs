//! Golden-output testing infrastructure for the contest hub.
//!
//! The contest hub is a pure rendering layer over a pre-computed view
//! model, so its tests render components server-side from fixed fixtures
//! and assert on the emitted markup.

pub mod fixtures;

use yew::html::BaseComponent;
use yew::LocalServerRenderer;

/// Renders a component to its markup string.
///
/// Hydration markers are disabled so assertions see the same markup a
/// browser would after mount.
pub async fn render_component<C>(props: C::Properties) -> String
where
    C: BaseComponent,
{
    LocalServerRenderer::<C>::with_props(props)
        .hydratable(false)
        .render()
        .await
}

/// Occurrence count of a marker in rendered markup.
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}
