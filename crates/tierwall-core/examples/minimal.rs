// crates/tierwall-core/examples/minimal.rs
// ============================================================================
// Module: Tierwall Minimal Example
// Description: Minimal end-to-end access and filtering flow.
// Purpose: Demonstrate policy checks, upgrade notices, and catalog filtering.
// Dependencies: tierwall-core
// ============================================================================

//! ## Overview
//! Runs a minimal Tierwall flow: a freemium session is denied a pro
//! feature, receives the upgrade notice over a channel sink, upgrades,
//! and then filters a small catalog. The example is host-agnostic and
//! suitable for quick verification.

use std::io::Write;
use std::sync::mpsc;

use tierwall_core::AccessDecision;
use tierwall_core::CatalogItem;
use tierwall_core::CategoryId;
use tierwall_core::ChannelSink;
use tierwall_core::FeatureCatalog;
use tierwall_core::FeatureKey;
use tierwall_core::FilterCriteria;
use tierwall_core::ListingId;
use tierwall_core::NoticeSink;
use tierwall_core::Rating;
use tierwall_core::Tier;
use tierwall_core::TierPolicy;
use tierwall_core::TierSession;
use tierwall_core::apply_filters;

/// Error type for example preconditions.
#[derive(Debug)]
struct ExampleError(&'static str);

impl std::fmt::Display for ExampleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for ExampleError {}

/// Builds the small catalog used by the example.
fn build_catalog() -> Result<Vec<CatalogItem>, tierwall_core::RatingError> {
    Ok(vec![
        CatalogItem {
            id: ListingId::new(1),
            name: "Vision AI".to_string(),
            description: "Image recognition toolkit".to_string(),
            category: CategoryId::new("computer-vision"),
            rating: Rating::new(4.8)?,
            premium: true,
            price_cents: 2_999,
        },
        CatalogItem {
            id: ListingId::new(2),
            name: "TextBot".to_string(),
            description: "Conversational text assistant".to_string(),
            category: CategoryId::new("nlp"),
            rating: Rating::new(4.2)?,
            premium: false,
            price_cents: 0,
        },
    ])
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let policy = TierPolicy::new(FeatureCatalog::builtin());
    let mut session = TierSession::new(Tier::Freemium);
    let feature = FeatureKey::new("ai-studio");

    let decision = policy.decide(session.tier(), &feature);
    if decision.allowed {
        return Err(ExampleError("freemium should not reach ai-studio").into());
    }
    write_line("Decision", &decision_summary(&decision))?;

    let (sender, receiver) = mpsc::channel();
    let sink = ChannelSink::new(sender);
    let notice = decision
        .upgrade_notice()
        .ok_or(ExampleError("denied decision must carry a notice"))?;
    sink.publish(&notice);
    let delivered = receiver.recv()?;
    if delivered.required != decision.required {
        return Err(ExampleError("notice must name the required tier").into());
    }
    write_line("Notice", &delivered.message())?;

    session.upgrade(decision.required);
    if !policy.can_access(session.tier(), &feature) {
        return Err(ExampleError("upgraded session should reach ai-studio").into());
    }
    write_line("Session", session.tier().as_str())?;

    let catalog = build_catalog()?;
    let criteria = FilterCriteria::default().with_query("vision");
    let visible = apply_filters(catalog.iter(), &criteria);
    if visible.len() != 1 {
        return Err(ExampleError("query should keep exactly one listing").into());
    }
    write_line("Visible", &visible.len().to_string())?;

    Ok(())
}

/// Formats a short summary for an access decision.
fn decision_summary(decision: &AccessDecision) -> String {
    let verdict = if decision.allowed { "allow" } else { "deny" };
    format!(
        "{verdict}:{} requires {}",
        decision.feature, decision.required
    )
}

/// Writes a labeled line to stdout.
fn write_line(label: &str, value: &str) -> Result<(), std::io::Error> {
    let mut out = std::io::stdout();
    writeln!(out, "{label}: {value}")?;
    Ok(())
}
