//! # Section visibility store
//!
//! One process-wide replica of the section-visibility table, fetched once
//! when the provider mounts and queried synchronously by every consumer.
//! Public pages never talk to the backend about visibility themselves.
//!
//! Two policies define the store's behavior:
//!
//! - **Default-open**: a section name the cache does not know is reported
//!   visible. A backend omission must never silently remove content that is
//!   already coded into the public pages.
//! - **Uniform fallback**: every failure mode of the fetch (transport error,
//!   rejected status, undecodable payload) replaces the cache with the fixed
//!   default set in [`api::DEFAULT_SECTIONS`]. The page keeps a sane layout
//!   with the backend unreachable, and `is_visible` never has to reason
//!   about an unpopulated cache once loading has settled.
//!
//! Concurrent refreshes are resolved by ticket: every `refresh` takes the
//! next sequence number before awaiting, and a response is applied only if
//! its ticket is still the latest issued. The displayed state therefore
//! reflects the most recently *issued* request, not whichever response
//! happened to resolve last.

use std::collections::HashMap;

use api::{Section, DEFAULT_SECTIONS};
use dioxus::prelude::*;

/// Replica of the section table, keyed by `section_name`.
///
/// Names are unique by construction: when a response carries duplicates, the
/// later row replaces the earlier one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SectionSet {
    sections: HashMap<String, Section>,
}

impl SectionSet {
    /// Build from a server response, deduplicating by name.
    pub fn from_sections(list: Vec<Section>) -> Self {
        let mut sections = HashMap::with_capacity(list.len());
        for section in list {
            sections.insert(section.section_name.clone(), section);
        }
        Self { sections }
    }

    /// The hard-coded default set used when the authority is unreachable.
    pub fn fallback() -> Self {
        let list = DEFAULT_SECTIONS
            .iter()
            .enumerate()
            .map(|(i, (name, visible))| Section {
                id: (i + 1).to_string(),
                section_name: (*name).to_string(),
                is_visible: *visible,
                updated_at: None,
                updated_by: None,
            })
            .collect();
        Self::from_sections(list)
    }

    /// Default-open lookup.
    pub fn is_visible(&self, name: &str) -> bool {
        self.sections
            .get(name)
            .map(|s| s.is_visible)
            .unwrap_or(true)
    }

    pub fn get(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    /// All cached sections, sorted by name for stable display.
    pub fn to_sorted_vec(&self) -> Vec<Section> {
        let mut list: Vec<Section> = self.sections.values().cloned().collect();
        list.sort_by(|a, b| a.section_name.cmp(&b.section_name));
        list
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Full store state, including the refresh bookkeeping.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityState {
    cache: SectionSet,
    loading: bool,
    error: Option<String>,
    seq_issued: u64,
}

impl Default for VisibilityState {
    fn default() -> Self {
        Self {
            cache: SectionSet::default(),
            loading: true,
            error: None,
            seq_issued: 0,
        }
    }
}

impl VisibilityState {
    /// Take a ticket for a refresh that is about to be issued.
    pub fn begin_refresh(&mut self) -> u64 {
        self.seq_issued += 1;
        self.loading = true;
        self.seq_issued
    }

    /// Apply a completed refresh. Returns false (and changes nothing) when a
    /// newer refresh has been issued since this ticket was taken.
    pub fn apply(&mut self, ticket: u64, outcome: Result<Vec<Section>, String>) -> bool {
        if ticket != self.seq_issued {
            return false;
        }
        self.loading = false;
        match outcome {
            Ok(list) => {
                self.cache = SectionSet::from_sections(list);
                self.error = None;
            }
            Err(message) => {
                self.cache = SectionSet::fallback();
                self.error = Some(message);
            }
        }
        true
    }

    pub fn is_visible(&self, name: &str) -> bool {
        self.cache.is_visible(name)
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn cache(&self) -> &SectionSet {
        &self.cache
    }
}

/// Cheap handle to the store. Copy it into closures freely.
#[derive(Clone, Copy)]
pub struct SectionVisibility {
    state: Signal<VisibilityState>,
}

impl SectionVisibility {
    /// Synchronous, best-effort answer to "is section `name` enabled?".
    pub fn is_visible(&self, name: &str) -> bool {
        self.state.read().is_visible(name)
    }

    /// True between mount and the first settled fetch.
    pub fn loading(&self) -> bool {
        self.state.read().loading()
    }

    /// Human-readable fetch error, kept for admin-facing consumers. Public
    /// pages render regardless.
    pub fn error(&self) -> Option<String> {
        self.state.read().error().map(str::to_string)
    }

    /// Snapshot of the cached sections, sorted by name.
    pub fn sections(&self) -> Vec<Section> {
        self.state.read().cache().to_sorted_vec()
    }

    /// Fetch-and-replace the cache. Safe to call concurrently: the response
    /// belonging to the most recently issued call wins.
    pub async fn refresh(&mut self) {
        let ticket = self.state.write().begin_refresh();

        let outcome = api::sections::get_section_visibility()
            .await
            .map(|list| list.sections)
            .map_err(|e| e.to_string());

        if let Err(ref message) = outcome {
            tracing::warn!(message, "visibility fetch failed, using default set");
        }

        self.state.write().apply(ticket, outcome);
    }
}

/// Get the section visibility store from context.
pub fn use_section_visibility() -> SectionVisibility {
    use_context::<SectionVisibility>()
}

/// Provider component owning the store for the lifetime of the page.
/// Wrap the app with it once; it issues exactly one initial fetch.
#[component]
pub fn SectionVisibilityProvider(children: Element) -> Element {
    let state = use_signal(VisibilityState::default);
    let handle = use_context_provider(|| SectionVisibility { state });

    // Initial population, once per provider lifetime.
    let _ = use_resource(move || async move {
        let mut handle = handle;
        handle.refresh().await;
    });

    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(name: &str, visible: bool) -> Section {
        Section {
            id: format!("id-{name}"),
            section_name: name.to_string(),
            is_visible: visible,
            updated_at: None,
            updated_by: None,
        }
    }

    #[test]
    fn unknown_sections_default_open() {
        let mut state = VisibilityState::default();
        let ticket = state.begin_refresh();
        state.apply(ticket, Ok(vec![section("blog", false)]));

        assert!(!state.is_visible("blog"));
        assert!(state.is_visible("newsletter")); // not in cache
        assert!(state.is_visible("made-up-section"));
    }

    #[test]
    fn failed_fetch_installs_the_default_set() {
        let mut state = VisibilityState::default();
        let ticket = state.begin_refresh();
        state.apply(ticket, Err("connection refused".into()));

        assert!(!state.loading());
        assert_eq!(state.error(), Some("connection refused"));

        // The fixed defaults: blog and newsletter closed, the rest open.
        for (name, visible) in DEFAULT_SECTIONS {
            assert_eq!(state.is_visible(name), *visible, "section {name}");
        }
        assert_eq!(state.cache().len(), DEFAULT_SECTIONS.len());
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut state = VisibilityState::default();
        let first = state.begin_refresh();
        let second = state.begin_refresh();

        // The newer request resolves first.
        assert!(state.apply(second, Ok(vec![section("blog", true)])));
        // The slow, stale response arrives afterwards and must not win.
        assert!(!state.apply(first, Ok(vec![section("blog", false)])));

        assert!(state.is_visible("blog"));
    }

    #[test]
    fn pending_newer_refresh_blocks_older_application() {
        let mut state = VisibilityState::default();
        let first = state.begin_refresh();
        let _second = state.begin_refresh();

        // First response resolves while the second is still in flight: the
        // cache stays untouched and loading stays true for the newer call.
        assert!(!state.apply(first, Ok(vec![section("about", false)])));
        assert!(state.loading());
        assert!(state.is_visible("about"));
    }

    #[test]
    fn sequential_refreshes_replace_not_merge() {
        let mut state = VisibilityState::default();

        let t1 = state.begin_refresh();
        state.apply(
            t1,
            Ok(vec![section("blog", false), section("about", false)]),
        );

        let t2 = state.begin_refresh();
        state.apply(t2, Ok(vec![section("blog", true)]));

        assert!(state.is_visible("blog"));
        // "about" came only in the first response; a replace (not a merge)
        // forgets it, so it reads default-open.
        assert!(state.is_visible("about"));
        assert_eq!(state.cache().len(), 1);
    }

    #[test]
    fn duplicate_names_keep_the_last_row() {
        let set = SectionSet::from_sections(vec![
            section("blog", false),
            section("blog", true),
        ]);
        assert_eq!(set.len(), 1);
        assert!(set.is_visible("blog"));
    }

    #[test]
    fn error_clears_on_the_next_successful_refresh() {
        let mut state = VisibilityState::default();
        let t1 = state.begin_refresh();
        state.apply(t1, Err("boom".into()));
        assert!(state.error().is_some());

        let t2 = state.begin_refresh();
        state.apply(t2, Ok(vec![section("blog", true)]));
        assert!(state.error().is_none());
    }
}
