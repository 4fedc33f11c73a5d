//! Substrate name normalization
//!
//! Turns a plate label into the key used to query the compound search:
//! - Lowercase conversion
//! - One leading Greek stereo prefix removed (`alpha-`, `α-`, `beta-`, `β-`)
//! - Spaces and hyphens folded to underscores
//! - Commas removed
//!
//! Nothing else is touched, so digits, primes and parentheses survive.

/// Leading stereochemistry prefixes, checked after lowercasing
const STEREO_PREFIXES: &[&str] = &["alpha-", "α-", "beta-", "β-"];

/// Normalize a substrate name into a search key.
///
/// # Examples
///
/// ```
/// use pm_reconcile::resolution::normalize;
///
/// assert_eq!(normalize("D-Glucose"), "d_glucose");
/// assert_eq!(normalize("α-D-Glucose"), "d_glucose");
/// assert_eq!(normalize("N-Acetyl-D-Glucosamine"), "n_acetyl_d_glucosamine");
/// ```
pub fn normalize(raw: &str) -> String {
    let lowered = raw.to_lowercase();

    let stripped = STEREO_PREFIXES
        .iter()
        .find_map(|prefix| lowered.strip_prefix(prefix))
        .unwrap_or(&lowered);

    stripped.replace(' ', "_").replace('-', "_").replace(',', "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_basic_folding() {
        assert_eq!(normalize("D-Glucose"), "d_glucose");
        assert_eq!(normalize("Unknown Compound X"), "unknown_compound_x");
        assert_eq!(normalize("m-Tartaric Acid"), "m_tartaric_acid");
        assert_eq!(normalize("1,2-Propanediol"), "12_propanediol");
    }

    #[test]
    fn test_stereo_prefix_variants_agree() {
        assert_eq!(normalize("α-D-Glucose"), normalize("alpha-D-Glucose"));
        assert_eq!(normalize("β-Methyl-D-Glucoside"), normalize("beta-Methyl-D-Glucoside"));
        assert_eq!(normalize("Alpha-Ketoglutaric Acid"), "ketoglutaric_acid");
    }

    #[test]
    fn test_only_one_leading_prefix_stripped() {
        assert_eq!(normalize("alpha-alpha-Trehalose"), "alpha_trehalose");
        // not at the start, kept
        assert_eq!(normalize("D-alpha-Hydroxy"), "d_alpha_hydroxy");
    }

    #[test]
    fn test_other_characters_untouched() {
        assert_eq!(normalize("Glucose-6-Phosphate (2')"), "glucose_6_phosphate_(2')");
        assert_eq!(normalize(""), "");
    }

    proptest! {
        #[test]
        fn prop_idempotent(raw in "(alpha-|beta-|α-|β-)?[A-Za-z0-9αβ ,'()\\-]{0,40}") {
            let once = normalize(&raw);
            prop_assert_eq!(normalize(&once), once);
        }

        #[test]
        fn prop_no_separators_survive(raw in "[A-Za-z0-9 ,\\-]{0,40}") {
            let key = normalize(&raw);
            prop_assert!(!key.contains(' '));
            prop_assert!(!key.contains('-'));
            prop_assert!(!key.contains(','));
        }
    }
}
