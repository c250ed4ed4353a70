//! Option filtering.
//!
//! The default rule is a case-insensitive substring match of the search
//! text against an option's extracted text; an empty search matches
//! everything. Any `Fn(&str, &Descriptor) -> bool` can be used instead, as
//! can [`FuzzyFilter`] or a fallible predicate wrapped in [`Fallible`].

use std::sync::Mutex;

use log::trace;
use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};

use crate::classify::Classified;
use crate::descriptor::Descriptor;
use crate::error::{PredicateError, Result, SelectError};
use crate::record::{OptionGroupRecord, OptionRecord};
use crate::text::combined_text;

/// Decides whether an option stays visible for a given search text.
pub trait OptionFilter {
    fn matches(
        &self,
        search_text: &str,
        option: &OptionRecord<'_>,
    ) -> std::result::Result<bool, PredicateError>;
}

impl<F> OptionFilter for F
where
    F: Fn(&str, &Descriptor) -> bool,
{
    fn matches(
        &self,
        search_text: &str,
        option: &OptionRecord<'_>,
    ) -> std::result::Result<bool, PredicateError> {
        Ok(self(search_text, option.descriptor))
    }
}

/// Wraps a predicate that can fail. Its error aborts the pass.
pub struct Fallible<F>(pub F);

impl<F, E> OptionFilter for Fallible<F>
where
    F: Fn(&str, &Descriptor) -> std::result::Result<bool, E>,
    E: Into<PredicateError>,
{
    fn matches(
        &self,
        search_text: &str,
        option: &OptionRecord<'_>,
    ) -> std::result::Result<bool, PredicateError> {
        (self.0)(search_text, option.descriptor).map_err(Into::into)
    }
}

/// Default rule: true for an empty or absent search, otherwise a
/// case-insensitive substring match on the option's combined text.
pub fn default_option_filter(search_text: Option<&str>, option: &Descriptor) -> bool {
    match search_text {
        None => true,
        Some(search) => contains_ignore_case(&combined_text(option), search),
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// The default rule applied to a record's text, so a custom text combiner is honoured.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringFilter;

impl OptionFilter for SubstringFilter {
    fn matches(
        &self,
        search_text: &str,
        option: &OptionRecord<'_>,
    ) -> std::result::Result<bool, PredicateError> {
        Ok(contains_ignore_case(&option.text, search_text))
    }
}

/// Fuzzy inclusion test backed by nucleo-matcher.
///
/// Only decides visibility; surviving options keep their declaration order.
pub struct FuzzyFilter {
    state: Mutex<FuzzyState>,
}

struct FuzzyState {
    matcher: Matcher,
    /// Pattern for the last query, reused across options of one pass.
    pattern: Option<(String, Pattern)>,
    buf: Vec<char>,
}

impl FuzzyFilter {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(FuzzyState {
                matcher: Matcher::new(Config::DEFAULT),
                pattern: None,
                buf: Vec::new(),
            }),
        }
    }
}

impl Default for FuzzyFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FuzzyFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FuzzyFilter").finish_non_exhaustive()
    }
}

impl OptionFilter for FuzzyFilter {
    fn matches(
        &self,
        search_text: &str,
        option: &OptionRecord<'_>,
    ) -> std::result::Result<bool, PredicateError> {
        if search_text.is_empty() {
            return Ok(true);
        }

        let mut guard = self
            .state
            .lock()
            .map_err(|_| PredicateError::from("fuzzy matcher state poisoned"))?;
        let FuzzyState {
            matcher,
            pattern,
            buf,
        } = &mut *guard;

        let stale = pattern
            .as_ref()
            .is_none_or(|(query, _)| query != search_text);
        if stale {
            *pattern = Some((
                search_text.to_string(),
                Pattern::new(
                    search_text,
                    CaseMatching::Ignore,
                    Normalization::Smart,
                    AtomKind::Fuzzy,
                ),
            ));
        }

        let Some((_, pattern)) = pattern.as_ref() else {
            return Ok(true);
        };
        let haystack = Utf32Str::new(&option.text, buf);
        Ok(pattern.score(haystack, matcher).is_some())
    }
}

/// Keep the options `predicate` accepts, preserving order.
///
/// The predicate is called exactly once per option. An absent search text
/// is passed to the predicate as the empty string.
pub fn filter_options<'a, P>(
    options: &[OptionRecord<'a>],
    search_text: Option<&str>,
    predicate: &P,
) -> Result<Vec<OptionRecord<'a>>>
where
    P: OptionFilter + ?Sized,
{
    let search = search_text.unwrap_or_default();
    let mut visible = Vec::with_capacity(options.len());

    for option in options {
        let keep = predicate
            .matches(search, option)
            .map_err(SelectError::Predicate)?;
        trace!(
            "filter: option {} {:?} -> {}",
            option.original_index, option.text, keep
        );
        if keep {
            visible.push(option.clone());
        }
    }

    Ok(visible)
}

/// Distribute visible options into their groups.
///
/// Returns one slot per classified group, in group order; `None` marks a
/// group left empty by filtering, which must not be rendered.
pub fn filter_groups<'a>(
    classified: &Classified<'a>,
    visible: &[OptionRecord<'a>],
) -> Vec<Option<OptionGroupRecord<'a>>> {
    classified
        .groups()
        .enumerate()
        .map(|(index, group)| {
            let options: Vec<_> = visible
                .iter()
                .filter(|option| option.group == Some(index))
                .cloned()
                .collect();
            (!options.is_empty()).then(|| OptionGroupRecord::new(group, options))
        })
        .collect()
}
