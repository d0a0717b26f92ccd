// tierwall-core/tests/session.rs
// ============================================================================
// Module: Session Tests
// Description: Tier session mutation and upgrade outcome tests.
// Purpose: Pin the single mutation entry point and its never-lower contract.
// Dependencies: tierwall-core
// ============================================================================
//! ## Overview
//! Validates that `TierSession::upgrade` raises the tier only when the
//! target outranks the current one and reports the outcome faithfully.

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
use tierwall_core::Tier;
use tierwall_core::TierSession;
use tierwall_core::UpgradeOutcome;

// ============================================================================
// SECTION: Defaults
// ============================================================================

/// Tests that new sessions start at freemium.
#[test]
fn sessions_default_to_freemium() -> TestResult {
    ensure(
        TierSession::default().tier() == Tier::Freemium,
        "default sessions must start at freemium",
    )?;
    ensure(
        TierSession::new(Tier::Basic).tier() == Tier::Basic,
        "explicit sessions must keep their tier",
    )?;
    Ok(())
}

// ============================================================================
// SECTION: Upgrades
// ============================================================================

/// Tests that upgrading to a higher tier mutates the session and reports it.
#[test]
fn upgrade_raises_to_higher_tier() -> TestResult {
    let mut session = TierSession::new(Tier::Freemium);
    let outcome = session.upgrade(Tier::Pro);
    ensure(
        outcome
            == UpgradeOutcome::Upgraded {
                from: Tier::Freemium,
                to: Tier::Pro,
            },
        "raising upgrades must report the transition",
    )?;
    ensure(session.tier() == Tier::Pro, "the session must hold the new tier")?;
    Ok(())
}

/// Tests that upgrading to the current tier leaves the session untouched.
#[test]
fn upgrade_to_same_tier_is_a_no_op() -> TestResult {
    let mut session = TierSession::new(Tier::Basic);
    let outcome = session.upgrade(Tier::Basic);
    ensure(
        outcome == UpgradeOutcome::AlreadySufficient { current: Tier::Basic },
        "same-tier upgrades must report sufficiency",
    )?;
    ensure(session.tier() == Tier::Basic, "the session must be unchanged")?;
    Ok(())
}

/// Tests that upgrading to a lower tier never downgrades the session.
#[test]
fn upgrade_never_lowers_the_tier() -> TestResult {
    let mut session = TierSession::new(Tier::Pro);
    let outcome = session.upgrade(Tier::Freemium);
    ensure(
        outcome == UpgradeOutcome::AlreadySufficient { current: Tier::Pro },
        "lower targets must report sufficiency",
    )?;
    ensure(session.tier() == Tier::Pro, "the session must be unchanged")?;
    Ok(())
}

/// Tests that an upgrade satisfies the requirement that prompted it.
#[test]
fn upgrade_satisfies_the_requested_tier() -> TestResult {
    for required in Tier::ALL {
        let mut session = TierSession::default();
        let _ = session.upgrade(required);
        ensure(
            session.tier().satisfies(required),
            format!("post-upgrade sessions must satisfy {required}"),
        )?;
    }
    Ok(())
}

/// Tests that chained upgrades settle at the highest requested tier.
#[test]
fn chained_upgrades_keep_the_highest_tier() -> TestResult {
    let mut session = TierSession::default();
    let _ = session.upgrade(Tier::Pro);
    let _ = session.upgrade(Tier::Basic);
    ensure(
        session.tier() == Tier::Pro,
        "later lower requests must not erode an earlier upgrade",
    )?;
    Ok(())
}

// ============================================================================
// SECTION: Serde
// ============================================================================

/// Tests the transparent wire form of a session.
#[test]
fn serde_is_a_transparent_tier() -> TestResult {
    let decoded: TierSession = serde_json::from_str(r#""basic""#)?;
    ensure(decoded.tier() == Tier::Basic, "decoded sessions must keep their tier")?;
    let encoded = serde_json::to_string(&TierSession::new(Tier::Pro))?;
    ensure(encoded == r#""pro""#, "sessions must encode as their bare tier")?;
    Ok(())
}
