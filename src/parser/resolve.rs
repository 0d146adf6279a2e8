//! Entity resolution: vendor, category and subcategory in priority order.
//!
//! The three vocabularies are matched independently, then cross-checked:
//! a category word that is really part of the vendor's name is discarded,
//! and a subcategory whose declared parent disagrees with the independently
//! matched category wins unless the category signal is strictly stronger.

use crate::model::ReferenceData;

use super::matcher::find_match;

/// A resolved reference record with its match confidence.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityMatch {
    /// Catalog id of the resolved record.
    pub id: u32,
    /// Match confidence. Absent for a category derived from the matched
    /// subcategory's parent rather than matched independently.
    pub confidence: Option<f64>,
}

/// The outcome of entity resolution for one document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedEntities {
    /// Resolved vendor.
    pub vendor: Option<EntityMatch>,
    /// Resolved category (independent match or subcategory parent).
    pub category: Option<EntityMatch>,
    /// Resolved subcategory.
    pub subcategory: Option<EntityMatch>,
}

/// Match the flat word list against the vendor, category and subcategory
/// vocabularies and resolve the winners to catalog records.
///
/// A matched string that fails to resolve to a record (stale reference data)
/// leaves that field absent; resolution never fails outright.
pub fn resolve_entities(
    words: &[String],
    refdata: &ReferenceData,
    cutoff: f64,
) -> ResolvedEntities {
    let vendor_match = find_match(words, &refdata.vendor_vocabulary(), cutoff);
    let vendor = vendor_match.as_ref().and_then(|m| {
        let record = refdata.vendor_by_name_or_website(&m.value);
        if record.is_none() {
            log::debug!("vendor match {:?} has no backing record", m.value);
        }
        record.map(|v| EntityMatch {
            id: v.id,
            confidence: Some(m.score),
        })
    });

    let mut category_match = find_match(words, &refdata.category_vocabulary(), cutoff);
    if let (Some(vm), Some(cm)) = (&vendor_match, &category_match) {
        // A verbatim vendor hit that contains the category word means the
        // word belongs to the vendor's name, not the tea.
        if vm.score == 1.0 && vm.value.contains(&cm.value) {
            log::debug!(
                "category match {:?} is part of vendor {:?}, discarding",
                cm.value,
                vm.value
            );
            category_match = None;
        }
    }
    let mut category = category_match
        .as_ref()
        .and_then(|m| refdata.category_by_name(&m.value).map(|c| (c, m.score)));

    let subcategory_match = find_match(words, &refdata.subcategory_vocabulary(), cutoff);
    let mut subcategory = subcategory_match
        .as_ref()
        .and_then(|m| refdata.subcategory_by_name(&m.value).map(|s| (s, m.score)));

    if let (Some((cat, cat_score)), Some((sub, sub_score))) = (&category, &subcategory) {
        if sub.category_id != Some(cat.id) {
            if *sub_score < 1.0 && *cat_score == 1.0 {
                log::debug!(
                    "subcategory {:?} conflicts with stronger category {:?}, discarding",
                    sub.name,
                    cat.name
                );
                subcategory = None;
            } else {
                log::debug!(
                    "category {:?} conflicts with subcategory {:?}, discarding",
                    cat.name,
                    sub.name
                );
                category = None;
            }
        }
    }

    let mut resolved = ResolvedEntities {
        vendor,
        ..Default::default()
    };
    if let Some((sub, score)) = subcategory {
        resolved.subcategory = Some(EntityMatch {
            id: sub.id,
            confidence: Some(score),
        });
        // The subcategory's own parent is the authoritative category; it
        // carries no independent confidence.
        if let Some(parent) = sub.category_id {
            resolved.category = Some(EntityMatch {
                id: parent,
                confidence: None,
            });
        }
    } else if let Some((cat, score)) = category {
        resolved.category = Some(EntityMatch {
            id: cat.id,
            confidence: Some(score),
        });
    }
    resolved
}
