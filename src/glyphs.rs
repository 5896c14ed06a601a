/// The fixed glyph sheet. Every line `glyphcheck` prints comes from here.
///
/// Entries keep the order and line grouping they are displayed with: a
/// `Mode::Write` entry leaves the cursor on the current line, a `Mode::Print`
/// entry ends it. Glyphs are stored exactly as they must reach the terminal,
/// so nothing here may be normalized or escaped.
use serde::Serialize;

// ── Types ─────────────────────────────────────────────────────────────────────

/// How an entry ends once it has been written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Stay on the current line so the next entry follows it
    Write,
    /// Terminate the line
    Print,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphEntry {
    /// ASCII description shown before the glyph
    pub label: &'static str,
    /// One or more code points, e.g. `?` followed by U+20DD COMBINING ENCLOSING CIRCLE
    pub glyph: &'static str,
    pub mode: Mode,
}

impl GlyphEntry {
    /// The text written for this entry, without any line break.
    pub fn render(&self) -> String {
        format!("{}: {} ", self.label, self.glyph)
    }
}

/// A header line followed by the entries shown under it.
#[derive(Debug, Clone, Copy)]
pub struct Group {
    pub header: &'static str,
    pub entries: &'static [GlyphEntry],
}

const fn w(label: &'static str, glyph: &'static str) -> GlyphEntry {
    GlyphEntry { label, glyph, mode: Mode::Write }
}

const fn p(label: &'static str, glyph: &'static str) -> GlyphEntry {
    GlyphEntry { label, glyph, mode: Mode::Print }
}

// ── Symbols ───────────────────────────────────────────────────────────────────

pub const SYMBOLS_HEADER: &str = "Here's A bunch of chars that should work:";

const SYMBOLS: &[GlyphEntry] = &[
    w("tick", "\u{2714}"),
    w("cross", "\u{2716}"),
    p("star", "\u{2605}"),
    w("square", "\u{2587}"),
    w("squareSmall", "\u{25FB}"),
    p("squareSmallFilled", "\u{25FC}"),
    p("play", "\u{25B6}"),
    w("circle", "\u{25EF}"),
    w("circleFilled", "\u{25C9}"),
    w("circleDotted", "\u{25CC}"),
    p("circleDouble", "\u{25CE}"),
    w("circleCircle", "\u{24DE}"),
    w("circleCross", "\u{24E7}"),
    w("circlePipe", "\u{24BE}"),
    w("circleQuestionMark", "?\u{20DD}"),
    p("bullet", "\u{25CF}"),
    w("dot", "\u{2024}"),
    w("line", "\u{2500}"),
    p("ellipsis", "\u{2026}"),
    p("pointer", "\u{276F}"),
    p("pointerSmall", "\u{203A}"),
    w("info", "\u{2139}"),
    w("warning", "\u{26A0}"),
    p("hamburger", "\u{2630}"),
    p("smiley", "\u{32E1}"),
    p("mustache", "\u{0DF4}"),
    p("heart", "\u{2665}"),
    w("arrowUp", "\u{2191}"),
    w("arrowDown", "\u{2193}"),
    w("arrowLeft", "\u{2190}"),
    p("arrowRight", "\u{2192}"),
    w("radioOn", "\u{25C9}"),
    p("radioOff", "\u{25EF}"),
    w("checkboxOn", "\u{2612}"),
    p("checkboxOff", "\u{2610}"),
    // fractions
    w("oneHalf", "\u{00BD}"),
    w("oneThird", "\u{2153}"),
    w("oneQuarter", "\u{00BC}"),
    p("oneFifth", "\u{2155}"),
    w("oneSixth", "\u{2159}"),
    w("oneSeventh", "\u{2150}"),
    w("oneEighth", "\u{215B}"),
    p("oneNinth", "\u{2151}"),
    w("oneTenth", "\u{2152}"),
    w("twoThirds", "\u{2154}"),
    w("twoFifths", "\u{2156}"),
    p("threeQuarters", "\u{00BE}"),
    w("threeFifths", "\u{2157}"),
    w("threeEighths", "\u{215C}"),
    w("fourFifths", "\u{2158}"),
    p("fiveSixths", "\u{215A}"),
    w("fiveEighths", "\u{215D}"),
    p("sevenEighths", "\u{215E}"),
];

// ── Emoji ─────────────────────────────────────────────────────────────────────

pub const EMOJI_HEADER: &str = "Emoji:";

const EMOJI: &[GlyphEntry] = &[
    w("beer", "\u{1F37A}"),
    p("burrito", "\u{1F32F}"),
    w("Red Heart", "\u{2764}"),
    p("Fire", "\u{1F525}"),
    w("Face With Tears of Joy", "\u{1F602}"),
    p("Smiling Face With Heart-Eyes", "\u{1F60D}"),
    w("Thinking Face", "\u{1F914}"),
    p("Smiling Face With Smiling Eyes", "\u{1F60A}"),
    p("Smiling Face With Hearts", "\u{1F970}"),
    w("Thumbs Up", "\u{1F44D}"),
    w("Heavy Check Mark", "\u{2714}"),
];

pub const GROUPS: &[Group] = &[
    Group { header: SYMBOLS_HEADER, entries: SYMBOLS },
    Group { header: EMOJI_HEADER, entries: EMOJI },
];

/// Every entry in display order, paired with the header of its group.
pub fn all_entries() -> impl Iterator<Item = (&'static str, &'static GlyphEntry)> {
    GROUPS
        .iter()
        .flat_map(|g| g.entries.iter().map(move |e| (g.header, e)))
}
