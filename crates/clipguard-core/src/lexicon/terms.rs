//! Bundled English lexicon.
//!
//! Declaration order matters: tiered scans report hits in this order and
//! redaction masks terms in this order.

use super::{LexiconCategory, LexiconEntry};

const fn hate(term: &'static str) -> LexiconEntry {
    LexiconEntry::new(term, LexiconCategory::Hate)
}

const fn severe(term: &'static str) -> LexiconEntry {
    LexiconEntry::new(term, LexiconCategory::Severe)
}

const fn mild(term: &'static str) -> LexiconEntry {
    LexiconEntry::new(term, LexiconCategory::Mild)
}

const fn general(term: &'static str) -> LexiconEntry {
    LexiconEntry::new(term, LexiconCategory::General)
}

/// Every bundled term, tagged with its category.
pub const BUNDLED: &[LexiconEntry] = &[
    // Hate speech: slogans and slurs
    hate("white power"),
    hate("master race"),
    hate("racial purity"),
    hate("ethnic cleansing"),
    hate("heil hitler"),
    hate("gas the jews"),
    hate("nigger"),
    hate("faggot"),
    hate("kike"),
    hate("wetback"),
    hate("raghead"),
    // Severe profanity. Longer forms first so they are masked whole.
    severe("motherfucker"),
    severe("fucking"),
    severe("fuck"),
    severe("shit"),
    severe("bitch"),
    severe("bastard"),
    severe("cunt"),
    severe("asshole"),
    severe("dickhead"),
    severe("cocksucker"),
    severe("whore"),
    severe("slut"),
    // Mild insults
    mild("idiot"),
    mild("stupid"),
    mild("moron"),
    mild("dumbass"),
    mild("dumb"),
    mild("sucks"),
    mild("loser"),
    mild("jerk"),
    mild("crap"),
    mild("shut up"),
    mild("screw you"),
    // Catch-all only: never tiered, surfaced as moderate
    general("damn"),
    general("ass"),
    general("arse"),
    general("piss"),
    general("bollocks"),
    general("bloody"),
    general("wanker"),
    general("prick"),
    general("twat"),
    general("wtf"),
    // Obfuscated spellings
    general("f*ck"),
    general("sh1t"),
    general("a$$"),
    general("b!tch"),
];
