//! # Built-in Vocabularies
//!
//! The rule tables behind [`PatternCatalog::standard`](super::PatternCatalog::standard).
//! Tables are listed in priority order: earlier rules win.

use super::builder::{CatalogBuilder, ChannelLayout, Composition, Family};
use super::Rule;
use crate::types::Category;

/// Separator characters found between tokens of a release name.
pub const DELIMITERS: &str = r"[.\s\-+_/(),]";

/// Placeholder replaced by the alternation of a linked family's dependencies.
pub const LINKED: &str = "{linked}";

/// Name of the auxiliary family holding the bare audio formats.
pub const AUDIO_FORMAT: &str = "audio_format";

/// Speaker/subwoofer layouts recognized after an audio format.
pub const CHANNEL_LAYOUTS: [ChannelLayout; 5] = [
    ChannelLayout::new(1, 0),
    ChannelLayout::new(2, 0),
    ChannelLayout::new(5, 1),
    ChannelLayout::new(6, 1),
    ChannelLayout::new(7, 1),
];

const NETWORKS: &[(&str, &str)] = &[
    (r"\bMyTVS\b", "MyTVS"),
    (r"\bATVP\b", "Apple TV+"),
    (r"\bAMZN|Amazon\b", "Amazon Studios"),
    (r"\bNF|Netflix\b", "Netflix"),
    (r"\bNICK\b", "Nickelodeon"),
    (r"\bRED\b", "YouTube Premium"),
    (r"\bDSNY?P\b", "Disney Plus"),
    (r"\bDSNY\b", "DisneyNOW"),
    (r"\bHMAX\b", "HBO Max"),
    (r"\bHBO\b", "HBO"),
    (r"\bHULU\b", "Hulu Networks"),
    (r"\bMS?NBC\b", "MSNBC"),
    (r"\bDCU\b", "DC Universe"),
    (r"\bID\b", "Investigation Discovery"),
    (r"\biT\b", "iTunes"),
    (r"\bAS\b", "Adult Swim"),
    (r"\bCRAV\b", "Crave"),
    (r"\bCC\b", "Comedy Central"),
    (r"\bSESO\b", "Seeso"),
    (r"\bVRV\b", "VRV"),
    (r"\bPCOK\b", "Peacock"),
    (r"\bCBS\b", "CBS"),
    (r"\biP\b", "BBC iPlayer"),
    (r"\bNBC\b", "NBC"),
    (r"\bAMC\b", "AMC"),
    (r"\bPBS\b", "PBS"),
    (r"\bSTAN\b", "Stan."),
    (r"\bRTE\b", "RTE Player"),
    (r"\bCR\b", "Crunchyroll"),
    (r"\bANPL\b", "Animal Planet Live"),
    (r"\bDTV\b", "DirecTV Stream"),
    (r"\bVICE\b", "VICE"),
];

const CODECS_PLAIN: &[(&str, &str)] = &[("xvid", "Xvid"), ("av1", "AV1")];

const AUDIO_FORMATS_PLAIN: &[(&str, &str)] = &[
    ("LPCM", "LPCM"),
    ("TrueHD", "Dolby TrueHD"),
    ("Atmos", "Dolby Atmos"),
    ("DD-EX", "Dolby Digital EX"),
    ("DDP|E-?AC-?3|EC-3", "Dolby Digital Plus"),
    ("DD|AC-?3|DolbyD", "Dolby Digital"),
];

fn labelled(table: &[(&str, &str)]) -> Vec<Rule> {
    table
        .iter()
        .map(|(pattern, label)| Rule::with_replacement(*pattern, *label))
        .collect()
}

pub fn network() -> Vec<Rule> {
    labelled(NETWORKS)
}

pub fn quality() -> Vec<Rule> {
    let d = DELIMITERS;
    vec![
        Rule::with_replacement(r"\bWEB[ -.]?DL(?:Rip|Mux)?|HDRip", "WEB-DL"),
        Rule::with_replacement(r"\bWEB[ -]?Cap\b", "WEBCap"),
        Rule::with_replacement(r"\bW[EB]B[ -]?(?:Rip)|WEB\b", "WEBRip"),
        Rule::with_replacement(r"\b(?:HD)?CAM(?:-?Rip)?\b", "Cam"),
        Rule::with_replacement(r"\b(?:HD)?TS|TELESYNC|PDVD|PreDVDRip\b", "Telesync"),
        Rule::with_replacement(r"\bWP|WORKPRINT\b", "Workprint"),
        Rule::with_replacement(r"\b(?:HD)?TC|TELECINE\b", "Telecine"),
        Rule::with_replacement(r"\b(?:DVD)?SCR(?:EENER)?|BDSCR\b", "Screener"),
        Rule::with_replacement(r"\bDDC\b", "Digital Distribution Copy"),
        Rule::with_replacement(r"\bDVD-?(?:Rip|Mux)\b", "DVD-Rip"),
        Rule::with_replacement(r"\bDVDR|DVD-Full|Full-rip\b", "DVD-R"),
        Rule::with_replacement(r"\bPDTV|DVBRip\b", "PDTV"),
        Rule::with_replacement(r"\bDSR(?:ip)?|SATRip|DTHRip\b", "DSRip"),
        Rule::with_replacement(r"\bAHDTV(?:Mux)?\b", "AHDTV"),
        Rule::with_replacement(r"\bHDTV(?:Rip)?\b", "HDTV"),
        Rule::with_replacement(r"\bD?TVRip|DVBRip\b", "TVRip"),
        Rule::with_replacement(r"\bVODR(?:ip)?\b", "VODRip"),
        Rule::with_replacement(r"\bHD-Rip\b", "HD-Rip"),
        Rule::with_replacement(format!(r"\bBlu-?Ray{d}Rip|BDR(?:ip)?\b"), "BDRip"),
        Rule::with_replacement(r"\bBlu-?Ray|(?:US|JP)?BD(?:remux)?\b", "Blu-ray"),
        Rule::with_replacement(r"\bBR-?Rip\b", "BRRip"),
        Rule::with_replacement(r"\bHDDVD\b", "HD DVD"),
        Rule::with_replacement(r"\bPPV(?:Rip)?\b", "Pay-Per-View Rip"),
    ]
}

pub fn resolution() -> Vec<Rule> {
    vec![
        Rule::new(r"\b([0-9]{3,4}(?:p|i))\b"),
        Rule::with_replacement(r"\b(1280x720p?)\b", "720p"),
        Rule::with_replacement(r"\bFHD|1920x1080p?\b", "1080p"),
        Rule::with_replacement(r"\bUHD\b", "UHD"),
        Rule::with_replacement(r"\bHD\b", "HD"),
        Rule::with_replacement(r"\b4K\b", "4K"),
    ]
}

pub fn year() -> Vec<Rule> {
    vec![
        Rule::new(r"\b(?:19|20)[0-9]{2}-(?:19|20)[0-9]{2}\b"),
        Rule::new(r"\b(?:19|20)[0-9]{2}\b"),
    ]
}

pub fn codec() -> Vec<Rule> {
    let d = DELIMITERS;
    let mut rules = labelled(CODECS_PLAIN);
    rules.extend([
        Rule::with_replacement(format!("[hx]{d}?264"), "H.264"),
        Rule::with_replacement("AVC", "H.264"),
        Rule::with_replacement(format!("HEVC{d}?Main{d}?10P?"), "H.265 Main 10"),
        Rule::with_replacement(format!("[hx]{d}?265"), "H.265"),
        Rule::with_replacement("HEVC", "H.265"),
        Rule::with_replacement(format!("h{d}?263"), "H.263"),
        Rule::with_replacement("VC-1", "VC-1"),
    ]);
    rules
}

pub fn bit_depth() -> Vec<Rule> {
    vec![Rule::new("(8|10)-?bits?")]
}

pub fn audio_track() -> Vec<Rule> {
    vec![Rule::new(r"\d+Audio")]
}

/// Bare audio formats; the `audio` category is composed from these.
pub fn audio_formats() -> Vec<Rule> {
    let d = DELIMITERS;
    let mut rules = labelled(AUDIO_FORMATS_PLAIN);
    rules.extend([
        Rule::with_replacement(
            format!("DTS{d}?HD(?:{d}?(?:MA|Masters?(?:{d}Audio)?))"),
            "DTS-HD MA",
        ),
        Rule::with_replacement("DTSMA", "DTS-HD MA"),
        Rule::with_replacement(format!("DTS{d}?HD"), "DTS-HD"),
        Rule::with_replacement("DTS", "DTS"),
        Rule::with_replacement(r"AAC[ \.\-]LC", "AAC-LC"),
        Rule::with_replacement("AAC", "AAC"),
        Rule::with_replacement(format!("Dual{d}Audios?"), "Dual"),
        Rule::with_replacement("FLAC", "FLAC"),
        Rule::with_replacement("OGG", "OGG"),
    ]);
    rules
}

pub fn episode() -> Vec<Rule> {
    let d = DELIMITERS;
    vec![
        Rule::new("(?:e|ep)(?:[0-9]{1,2}(?:-?(?:e|ep)?(?:[0-9]{1,2}))?)"),
        Rule::new(r"\s-\s\d{1,3}\s"),
        Rule::new(r"\b[0-9]{1,2}x([0-9]{2})\b"),
        Rule::new(format!(r"\bepisod(?:e|io){d}\d{{1,2}}\b")),
    ]
}

/// Season rule templates. `{linked}` receives every episode rule, so a
/// rule such as `S01E02` consumes its trailing episode token.
pub fn season_templates() -> Vec<Rule> {
    let d = DELIMITERS;
    let range = format!(
        r"(?:Complete{d}*)?(?:s(?:easons?)?){d}*(?:s?[0-9]{{1,2}}[\s]*(?:(?:\-|(?:\s*to\s*))[\s]*s?[0-9]{{1,2}})+)(?:{d}*Complete)?"
    );
    vec![
        Rule::new(r"s?(\d{1,2})\s\-\s\d{1,2}\s"),
        Rule::new(format!(r"\b{range}\b")),
        Rule::new(r"(?:s\d{1,2}[.+\s]*){2,}\b"),
        Rule::new(format!(r"\b(?:Complete{d})?s([0-9]{{1,2}}){LINKED}?\b")),
        Rule::new(format!(r"Series{d}\d{{1,2}}")),
        Rule::new(format!(r"\b(?:Complete{d})?Season[\. -][0-9]{{1,2}}\b")),
    ]
}

/// Registers every built-in family on a fresh builder.
pub fn register(builder: CatalogBuilder) -> CatalogBuilder {
    builder
        .rules(Category::Network, network())
        .rules(Category::Quality, quality())
        .rules(Category::Resolution, resolution())
        .rules(Category::Year, year())
        .rules(Category::Codec, codec())
        .rules(Category::BitDepth, bit_depth())
        .rules(Category::AudioTrack, audio_track())
        .rules(Category::Episode, episode())
        .auxiliary(AUDIO_FORMAT, audio_formats())
        .composed(
            Category::Audio,
            [Family::aux(AUDIO_FORMAT)],
            Composition::Channeled {
                layouts: CHANNEL_LAYOUTS.to_vec(),
            },
        )
        .composed(
            Category::Season,
            [Family::Category(Category::Episode)],
            Composition::Linked {
                templates: season_templates(),
            },
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_table_is_non_empty() {
        for rules in [
            network(),
            quality(),
            resolution(),
            year(),
            codec(),
            bit_depth(),
            audio_track(),
            audio_formats(),
            episode(),
            season_templates(),
        ] {
            assert!(!rules.is_empty());
        }
    }

    #[test]
    fn exactly_one_season_template_links_episodes() {
        let linked = season_templates()
            .iter()
            .filter(|r| r.pattern.contains(LINKED))
            .count();
        assert_eq!(linked, 1);
    }

    #[test]
    fn delimiters_are_inlined() {
        let rules = codec();
        assert!(rules.iter().any(|r| r.pattern == r"[hx][.\s\-+_/(),]?264"));
        let episodes = episode();
        assert_eq!(
            episodes[3].pattern,
            r"\bepisod(?:e|io)[.\s\-+_/(),]\d{1,2}\b"
        );
    }
}
