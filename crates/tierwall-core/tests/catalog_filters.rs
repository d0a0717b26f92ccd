// tierwall-core/tests/catalog_filters.rs
// ============================================================================
// Module: Catalog Filter Tests
// Description: Predicate compilation and catalog filtering tests.
// Purpose: Pin identity defaults, activation rules, and conjunction.
// Dependencies: tierwall-core
// ============================================================================
//! ## Overview
//! Validates the catalog engine against a small fixed catalog: default
//! criteria are the identity, each criterion activates independently, and
//! active criteria compose by conjunction while preserving input order.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

mod support;

use support::TestResult;
use support::ensure;
use tierwall_core::CatalogItem;
use tierwall_core::CategoryId;
use tierwall_core::FilterCriteria;
use tierwall_core::ListingId;
use tierwall_core::Rating;
use tierwall_core::RatingError;
use tierwall_core::apply_filters;
use tierwall_core::compile_predicates;
use tierwall_core::matches_criteria;
use tierwall_core::runtime::text::contains_fold;

// ============================================================================
// SECTION: Fixtures
// ============================================================================

/// Builds the three-item catalog the suite filters.
fn sample_catalog() -> Result<Vec<CatalogItem>, RatingError> {
    Ok(vec![
        CatalogItem {
            id: ListingId::new(1),
            name: "Vision AI".to_string(),
            description: "Detect objects and scenes in images".to_string(),
            category: CategoryId::new("computer-vision"),
            rating: Rating::new(4.8)?,
            premium: true,
            price_cents: 2999,
        },
        CatalogItem {
            id: ListingId::new(2),
            name: "TextBot".to_string(),
            description: "Summarize and rewrite text".to_string(),
            category: CategoryId::new("nlp"),
            rating: Rating::new(4.2)?,
            premium: false,
            price_cents: 0,
        },
        CatalogItem {
            id: ListingId::new(3),
            name: "Flow Designer".to_string(),
            description: "Automate multi-step pipelines".to_string(),
            category: CategoryId::new("automation"),
            rating: Rating::new(4.5)?,
            premium: true,
            price_cents: 1499,
        },
    ])
}

/// Projects kept items onto their names for compact assertions.
fn names<'a>(kept: &[&'a CatalogItem]) -> Vec<&'a str> {
    kept.iter().map(|item| item.name.as_str()).collect()
}

// ============================================================================
// SECTION: Identity
// ============================================================================

/// Tests that default criteria keep every item in input order.
#[test]
fn default_criteria_are_the_identity() -> TestResult {
    let catalog = sample_catalog()?;
    let criteria = FilterCriteria::default();
    ensure(criteria.is_unrestricted(), "default criteria must be unrestricted")?;
    let kept = apply_filters(&catalog, &criteria);
    ensure(
        names(&kept) == ["Vision AI", "TextBot", "Flow Designer"],
        "default criteria must keep every item in order",
    )?;
    Ok(())
}

/// Tests that a whitespace-only query activates nothing.
#[test]
fn whitespace_query_is_inactive() -> TestResult {
    let catalog = sample_catalog()?;
    let criteria = FilterCriteria::default().with_query("   \t ");
    ensure(
        compile_predicates(&criteria).is_empty(),
        "whitespace queries must compile to no predicate",
    )?;
    ensure(
        apply_filters(&catalog, &criteria).len() == catalog.len(),
        "whitespace queries must keep every item",
    )?;
    Ok(())
}

/// Tests that filtering an empty catalog yields an empty result.
#[test]
fn empty_input_yields_empty_output() -> TestResult {
    let criteria = FilterCriteria::default().with_premium_only(true);
    let kept = apply_filters([], &criteria);
    ensure(kept.is_empty(), "empty inputs must stay empty")?;
    Ok(())
}

// ============================================================================
// SECTION: Single Criteria
// ============================================================================

/// Tests that queries match names without regard to case.
#[test]
fn query_matches_names_case_insensitively() -> TestResult {
    let catalog = sample_catalog()?;
    let criteria = FilterCriteria::default().with_query("VISION");
    let kept = apply_filters(&catalog, &criteria);
    ensure(names(&kept) == ["Vision AI"], "queries must fold case on names")?;
    Ok(())
}

/// Tests that queries also match descriptions and category slugs.
#[test]
fn query_matches_descriptions_and_categories() -> TestResult {
    let catalog = sample_catalog()?;

    let by_description = FilterCriteria::default().with_query("summarize");
    ensure(
        names(&apply_filters(&catalog, &by_description)) == ["TextBot"],
        "queries must match descriptions",
    )?;

    let by_category = FilterCriteria::default().with_query("automation");
    ensure(
        names(&apply_filters(&catalog, &by_category)) == ["Flow Designer"],
        "queries must match category slugs",
    )?;
    Ok(())
}

/// Tests that engine text matching agrees with the shared fold helper.
#[test]
fn text_matching_agrees_with_the_fold_helper() -> TestResult {
    let catalog = sample_catalog()?;
    let criteria = FilterCriteria::default().with_query("Vision");
    for item in &catalog {
        let by_fields = contains_fold(&item.name, "Vision")
            || contains_fold(&item.description, "Vision")
            || contains_fold(item.category.as_str(), "Vision");
        ensure(
            matches_criteria(item, &criteria) == by_fields,
            "engine text matching must agree with the fold helper",
        )?;
    }
    Ok(())
}

/// Tests that surrounding whitespace in a query is trimmed before matching.
#[test]
fn query_is_trimmed_before_matching() -> TestResult {
    let catalog = sample_catalog()?;
    let criteria = FilterCriteria::default().with_query("  textbot  ");
    ensure(
        names(&apply_filters(&catalog, &criteria)) == ["TextBot"],
        "queries must be trimmed before matching",
    )?;
    Ok(())
}

/// Tests that the minimum rating bound is inclusive.
#[test]
fn min_rating_is_inclusive() -> TestResult {
    let catalog = sample_catalog()?;
    let criteria = FilterCriteria::default().with_min_rating(Rating::new(4.5)?);
    let kept = apply_filters(&catalog, &criteria);
    ensure(
        names(&kept) == ["Vision AI", "Flow Designer"],
        "items at the bound must be kept",
    )?;
    Ok(())
}

/// Tests that a zero minimum rating activates nothing.
#[test]
fn zero_min_rating_is_inactive() -> TestResult {
    let catalog = sample_catalog()?;
    let criteria = FilterCriteria::default().with_min_rating(Rating::MIN);
    ensure(
        compile_predicates(&criteria).is_empty(),
        "zero ratings must compile to no predicate",
    )?;
    ensure(
        apply_filters(&catalog, &criteria).len() == catalog.len(),
        "zero ratings must keep every item",
    )?;
    Ok(())
}

/// Tests that the premium restriction keeps premium items in order.
#[test]
fn premium_only_keeps_premium_items() -> TestResult {
    let catalog = sample_catalog()?;
    let criteria = FilterCriteria::default().with_premium_only(true);
    let kept = apply_filters(&catalog, &criteria);
    ensure(
        names(&kept) == ["Vision AI", "Flow Designer"],
        "premium restriction must keep premium items in order",
    )?;
    Ok(())
}

/// Tests that a category set keeps only the selected categories.
#[test]
fn category_set_keeps_selected_categories() -> TestResult {
    let catalog = sample_catalog()?;
    let criteria = FilterCriteria::default().with_category(CategoryId::new("nlp"));
    ensure(
        names(&apply_filters(&catalog, &criteria)) == ["TextBot"],
        "category sets must keep selected categories only",
    )?;

    let broader = FilterCriteria::default().with_categories([
        CategoryId::new("nlp"),
        CategoryId::new("automation"),
    ]);
    ensure(
        names(&apply_filters(&catalog, &broader)) == ["TextBot", "Flow Designer"],
        "category sets must keep every selected category",
    )?;
    Ok(())
}

/// Tests that an empty category set keeps every item.
#[test]
fn empty_category_set_keeps_everything() -> TestResult {
    let catalog = sample_catalog()?;
    let criteria = FilterCriteria::default();
    ensure(criteria.categories.is_empty(), "fixture must carry no categories")?;
    ensure(
        apply_filters(&catalog, &criteria).len() == catalog.len(),
        "empty category sets must keep every item",
    )?;
    Ok(())
}

// ============================================================================
// SECTION: Composition
// ============================================================================

/// Tests that every active predicate is compiled, one per criterion.
#[test]
fn compilation_emits_one_predicate_per_active_criterion() -> TestResult {
    ensure(
        compile_predicates(&FilterCriteria::default()).is_empty(),
        "default criteria must compile to no predicate",
    )?;
    let single = FilterCriteria::default().with_premium_only(true);
    ensure(
        compile_predicates(&single).len() == 1,
        "one active criterion must compile to one predicate",
    )?;
    let full = FilterCriteria::default()
        .with_query("flow")
        .with_min_rating(Rating::new(4.0)?)
        .with_premium_only(true)
        .with_category(CategoryId::new("automation"));
    ensure(
        compile_predicates(&full).len() == 4,
        "four active criteria must compile to four predicates",
    )?;
    Ok(())
}

/// Tests that active criteria compose by conjunction.
#[test]
fn active_criteria_compose_by_conjunction() -> TestResult {
    let catalog = sample_catalog()?;
    let criteria = FilterCriteria::default()
        .with_query("flow")
        .with_min_rating(Rating::new(4.0)?)
        .with_premium_only(true)
        .with_category(CategoryId::new("automation"));
    ensure(
        names(&apply_filters(&catalog, &criteria)) == ["Flow Designer"],
        "only items passing every active criterion may be kept",
    )?;
    Ok(())
}

/// Tests that membership in the result agrees with the single-item check.
#[test]
fn membership_agrees_with_matches_criteria() -> TestResult {
    let catalog = sample_catalog()?;
    let criteria = FilterCriteria::default()
        .with_min_rating(Rating::new(4.4)?)
        .with_premium_only(true);
    let kept = apply_filters(&catalog, &criteria);
    for item in &catalog {
        ensure(
            matches_criteria(item, &criteria) == kept.contains(&item),
            "kept membership must agree with the single-item check",
        )?;
    }
    Ok(())
}

/// Tests that reapplying the same criteria changes nothing.
#[test]
fn filtering_is_idempotent() -> TestResult {
    let catalog = sample_catalog()?;
    let criteria = FilterCriteria::default()
        .with_query("e")
        .with_premium_only(true);
    let once = apply_filters(&catalog, &criteria);
    let twice = apply_filters(once.clone(), &criteria);
    ensure(twice == once, "filtered results must pass the same filter unchanged")?;
    Ok(())
}
