//! Brand attribution by case-insensitive substring match.

use sovscope_core::BrandSet;

use crate::types::Entity;

/// Attribute `text` to the target brand, a competitor, or neither.
///
/// The target is checked first, so a post naming both the target and a
/// competitor counts for the target.
#[must_use]
pub fn classify(text: &str, brands: &BrandSet) -> Entity {
    let haystack = text.to_lowercase();
    if haystack.contains(brands.target()) {
        return Entity::Target;
    }
    if brands
        .competitors()
        .iter()
        .any(|name| haystack.contains(name.as_str()))
    {
        return Entity::Competitor;
    }
    Entity::Irrelevant
}
