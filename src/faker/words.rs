//! Dictionary-backed text generators
//!
//! Index keys, output names, sentences and user names are all built from one
//! fixed lowercase dictionary.

use crate::faker::chance::pick_copied;
use rand::distributions::Alphanumeric;
use rand::Rng;

/// Lowercase words used for keys, names and filler text
pub const DICTIONARY: &[&str] = &[
    "alias", "amber", "anchor", "apex", "arbor", "arrow", "atlas", "aurora", "autumn", "badge",
    "banner", "basin", "beacon", "birch", "blaze", "bloom", "bolt", "border", "breeze", "bridge",
    "brook", "cabin", "canyon", "carbon", "cedar", "chalk", "cinder", "citrus", "cliff", "cloud",
    "clover", "cobalt", "comet", "copper", "coral", "cosmos", "crane", "crest", "crystal", "cypress",
    "dawn", "delta", "desert", "drift", "dune", "eagle", "echo", "ember", "falcon", "fern",
    "field", "fjord", "flare", "flint", "forest", "fossil", "frost", "gale", "garnet", "geyser",
    "glacier", "glade", "granite", "grove", "gust", "harbor", "hazel", "heron", "hollow", "horizon",
    "indigo", "iris", "island", "ivory", "jade", "jasper", "juniper", "kelp", "kestrel", "lagoon",
    "lantern", "larch", "lark", "lava", "ledger", "lichen", "lily", "linden", "lotus", "lunar",
    "magma", "maple", "marble", "marsh", "meadow", "mesa", "meteor", "mint", "mist", "moss",
    "nebula", "nectar", "nimbus", "noble", "north", "oak", "oasis", "ocean", "olive", "onyx",
    "orbit", "orchid", "osprey", "otter", "palm", "pebble", "pepper", "pine", "plaza", "polar",
    "pollen", "prairie", "prism", "quartz", "quill", "radiant", "rain", "raven", "reef", "ridge",
    "river", "robin", "rocket", "rowan", "ruby", "saffron", "sage", "sail", "salt", "sand",
    "sapphire", "savanna", "shadow", "shore", "sierra", "silver", "slate", "solar", "spark", "spruce",
    "spring", "stone", "storm", "summit", "sun", "swift", "tango", "tempest", "thistle", "thunder",
    "tide", "timber", "topaz", "torch", "trail", "tundra", "twilight", "umber", "valley", "velvet",
    "vertex", "violet", "vista", "walnut", "wave", "willow", "winter", "wren", "zephyr", "zenith",
];

/// One random dictionary word
pub fn word<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    pick_copied(rng, DICTIONARY)
}

/// A capitalized sentence of five to ten words ending with a period
pub fn sentence<R: Rng + ?Sized>(rng: &mut R) -> String {
    let count = rng.gen_range(5..=10);
    let words: Vec<&str> = (0..count).map(|_| word(rng)).collect();
    let mut text = words.join(" ");
    if let Some(first) = text.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    text.push('.');
    text
}

/// A login-style name such as `cedar42`
pub fn username<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{}{}", word(rng), rng.gen_range(1..1000))
}

/// A random alphanumeric secret
pub fn password<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len).map(|_| char::from(rng.sample(Alphanumeric))).collect()
}

/// A string of `len` random decimal digits
pub fn digits<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len).map(|_| char::from(b'0' + rng.gen_range(0..10u8))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_dictionary_has_no_duplicates() {
        let unique: std::collections::HashSet<_> = DICTIONARY.iter().collect();
        assert_eq!(unique.len(), DICTIONARY.len());
        assert!(DICTIONARY.iter().all(|w| w.chars().all(|c| c.is_ascii_lowercase())));
    }

    #[test]
    fn test_sentence_shape() {
        let mut rng = StdRng::seed_from_u64(9);
        let text = sentence(&mut rng);

        assert!(text.ends_with('.'));
        assert!(text.chars().next().unwrap().is_ascii_uppercase());
        let count = text.split_whitespace().count();
        assert!((5..=10).contains(&count));
    }

    #[test]
    fn test_password_and_digits() {
        let mut rng = StdRng::seed_from_u64(11);

        let secret = password(&mut rng, 24);
        assert_eq!(secret.len(), 24);
        assert!(secret.chars().all(|c| c.is_ascii_alphanumeric()));

        let number = digits(&mut rng, 17);
        assert_eq!(number.len(), 17);
        assert!(number.chars().all(|c| c.is_ascii_digit()));
    }
}
