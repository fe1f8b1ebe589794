//! Character-level glitch animation.
//!
//! [`GlitchEngine`] rewrites a line of text every tick, picking for each
//! character whether to keep it or swap it for a cipher glyph, a rune or a
//! noise symbol. It alternates between a calm phase and short bursts.
//! [`DecodeReveal`] is the scramble-then-resolve variant used on hover.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::cipher;
use crate::effects::WeightedTable;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Substitution {
    Keep,
    /// The letter's own cipher glyph, or any glyph for unmapped symbols.
    Cipher,
    Rune,
    Noise,
    /// The fixed rune assigned to this position when the engine was built.
    Cryptic,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Calm,
    Burst,
}

/// Relative odds of each substitution for a single character.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Weights {
    pub keep: f64,
    pub cipher: f64,
    pub rune: f64,
    pub noise: f64,
    pub cryptic: f64,
}

impl Weights {
    pub const STEADY: Weights = Weights {
        keep: 1.0,
        cipher: 0.0,
        rune: 0.0,
        noise: 0.0,
        cryptic: 0.0,
    };

    fn table(&self) -> WeightedTable<Substitution> {
        WeightedTable::new(&[
            (Substitution::Keep, self.keep),
            (Substitution::Cipher, self.cipher),
            (Substitution::Rune, self.rune),
            (Substitution::Noise, self.noise),
            (Substitution::Cryptic, self.cryptic),
        ])
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GlitchConfig {
    pub tick_ms: u32,
    /// Zero disables bursts.
    pub burst_every_ms: u32,
    pub burst_every_jitter_ms: u32,
    pub burst_ms: u32,
    pub burst_jitter_ms: u32,
    /// How long a click keeps the plain text on screen.
    pub reveal_ms: u32,
    pub calm: Weights,
    pub burst: Weights,
    /// Maximum colour-channel offset in pixels, calm and burst.
    pub shift: (f64, f64),
}

impl GlitchConfig {
    /// Large display text: faint noise at rest, cryptic runes in bursts.
    pub fn title() -> Self {
        Self {
            tick_ms: 50,
            burst_every_ms: 5000,
            burst_every_jitter_ms: 2000,
            burst_ms: 800,
            burst_jitter_ms: 500,
            reveal_ms: 2000,
            calm: Weights {
                keep: 0.979,
                cipher: 0.0,
                rune: 0.006,
                noise: 0.015,
                cryptic: 0.0,
            },
            burst: Weights {
                keep: 0.23,
                cipher: 0.0,
                rune: 0.02,
                noise: 0.05,
                cryptic: 0.7,
            },
            shift: (1.5, 5.0),
        }
    }

    /// Section headings: steady, then fully ciphered during bursts.
    pub fn heading() -> Self {
        Self {
            tick_ms: 100,
            burst_every_ms: 5000,
            burst_every_jitter_ms: 0,
            burst_ms: 800,
            burst_jitter_ms: 0,
            reveal_ms: 2000,
            calm: Weights::STEADY,
            burst: Weights {
                keep: 0.0,
                cipher: 1.0,
                rune: 0.0,
                noise: 0.0,
                cryptic: 0.0,
            },
            shift: (0.0, 2.0),
        }
    }

    /// Body copy: rare, brief cipher flickers.
    pub fn subtle() -> Self {
        Self {
            tick_ms: 500,
            burst_every_ms: 2000,
            burst_every_jitter_ms: 1000,
            burst_ms: 200,
            burst_jitter_ms: 100,
            reveal_ms: 2000,
            calm: Weights::STEADY,
            burst: Weights {
                keep: 0.6,
                cipher: 0.4,
                rune: 0.0,
                noise: 0.0,
                cryptic: 0.0,
            },
            shift: (0.0, 1.0),
        }
    }

    pub fn has_bursts(&self) -> bool {
        self.burst_every_ms > 0 && self.burst_ms > 0
    }

    pub fn next_burst_every<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        self.burst_every_ms + jitter(rng, self.burst_every_jitter_ms)
    }

    pub fn next_burst_len<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        self.burst_ms + jitter(rng, self.burst_jitter_ms)
    }
}

impl Default for GlitchConfig {
    fn default() -> Self {
        Self::title()
    }
}

fn jitter<R: Rng + ?Sized>(rng: &mut R, max: u32) -> u32 {
    if max == 0 {
        0
    } else {
        rng.gen_range(0..=max)
    }
}

/// Per-tick visual offsets: one horizontal shift per colour channel plus
/// an optional whole-element shake.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Distortion {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub shake: (f64, f64),
}

impl Distortion {
    pub fn layer_style(offset: f64) -> String {
        format!("transform: translateX({:.1}px);", offset)
    }

    pub fn shake_style(&self) -> String {
        format!(
            "transform: translate({:.1}px, {:.1}px);",
            self.shake.0, self.shake.1
        )
    }
}

pub struct GlitchEngine {
    source: Vec<char>,
    cryptic: Vec<char>,
    display: Vec<char>,
    phase: Phase,
    calm: WeightedTable<Substitution>,
    burst: WeightedTable<Substitution>,
    shift: (f64, f64),
    glyphs: Vec<char>,
    runes: Vec<char>,
    noise: Vec<char>,
}

impl GlitchEngine {
    pub fn new<R: Rng + ?Sized>(text: &str, config: &GlitchConfig, rng: &mut R) -> Self {
        let source: Vec<char> = text.chars().collect();
        let runes = cipher::runes();
        let cryptic = source
            .iter()
            .map(|c| {
                if c.is_whitespace() {
                    *c
                } else {
                    runes.choose(rng).copied().unwrap_or(*c)
                }
            })
            .collect();

        Self {
            display: source.clone(),
            source,
            cryptic,
            phase: Phase::Calm,
            calm: config.calm.table(),
            burst: config.burst.table(),
            shift: config.shift,
            glyphs: cipher::glyph_pool(),
            runes,
            noise: cipher::noise(),
        }
    }

    #[cfg(test)]
    pub fn source(&self) -> String {
        self.source.iter().collect()
    }

    pub fn display(&self) -> String {
        self.display.iter().collect()
    }

    #[cfg(test)]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn begin_burst(&mut self) {
        self.phase = Phase::Burst;
    }

    pub fn end_burst(&mut self) {
        self.phase = Phase::Calm;
    }

    /// Back to the plain text and the calm phase.
    pub fn restore(&mut self) -> String {
        self.phase = Phase::Calm;
        self.display.clone_from(&self.source);
        self.display()
    }

    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> String {
        for i in 0..self.source.len() {
            let original = self.source[i];
            let next = if original.is_whitespace() {
                original
            } else {
                let choice = match self.phase {
                    Phase::Calm => self.calm.sample(rng),
                    Phase::Burst => self.burst.sample(rng),
                };
                self.substitute(i, original, choice.copied().unwrap_or(Substitution::Keep), rng)
            };
            self.display[i] = next;
        }
        self.display()
    }

    fn substitute<R: Rng + ?Sized>(
        &self,
        index: usize,
        original: char,
        substitution: Substitution,
        rng: &mut R,
    ) -> char {
        let picked = match substitution {
            Substitution::Keep => Some(original),
            Substitution::Cipher => {
                cipher::glyph(original).or_else(|| self.glyphs.choose(rng).copied())
            }
            Substitution::Rune => self.runes.choose(rng).copied(),
            Substitution::Noise => self.noise.choose(rng).copied(),
            Substitution::Cryptic => self.cryptic.get(index).copied(),
        };
        picked.unwrap_or(original)
    }

    pub fn distortion<R: Rng + ?Sized>(&self, rng: &mut R) -> Distortion {
        let (max_shift, shake_odds) = match self.phase {
            Phase::Calm => (self.shift.0, 0.06),
            Phase::Burst => (self.shift.1, 0.2),
        };
        if max_shift <= 0.0 {
            return Distortion::default();
        }
        let mut offset = || rng.gen_range(-max_shift..=max_shift);
        let (red, green, blue) = (offset(), offset(), offset());
        let shake = if rng.gen_bool(shake_odds) {
            let reach = max_shift * 0.6;
            (rng.gen_range(-reach..=reach), rng.gen_range(-reach..=reach))
        } else {
            (0.0, 0.0)
        };
        Distortion {
            red,
            green,
            blue,
            shake,
        }
    }
}

/// Scrambles every character, then locks them in left to right.
pub struct DecodeReveal {
    source: Vec<char>,
    glyphs: Vec<char>,
    ticks: usize,
}

impl DecodeReveal {
    /// Ticks spent on each character before it resolves.
    pub const TICKS_PER_CHAR: usize = 3;

    pub fn new(text: &str) -> Self {
        Self {
            source: text.chars().collect(),
            glyphs: cipher::glyph_pool(),
            ticks: 0,
        }
    }

    pub fn is_done(&self) -> bool {
        self.ticks >= self.source.len() * Self::TICKS_PER_CHAR
    }

    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> String {
        let ticks = self.ticks;
        let frame = self
            .source
            .iter()
            .enumerate()
            .map(|(i, c)| {
                if c.is_whitespace() || i * Self::TICKS_PER_CHAR < ticks {
                    *c
                } else {
                    self.glyphs.choose(rng).copied().unwrap_or(*c)
                }
            })
            .collect();
        if !self.is_done() {
            self.ticks += 1;
        }
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn all_keep() -> Weights {
        Weights::STEADY
    }

    #[test]
    fn display_length_matches_source_every_tick() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut engine = GlitchEngine::new("HexaFalls 2024", &GlitchConfig::title(), &mut rng);
        for round in 0..200 {
            if round % 20 == 0 {
                engine.begin_burst();
            } else if round % 20 == 8 {
                engine.end_burst();
            }
            let frame = engine.tick(&mut rng);
            assert_eq!(frame.chars().count(), 14);
        }
    }

    #[test]
    fn whitespace_is_never_replaced() {
        let mut rng = StdRng::seed_from_u64(11);
        let config = GlitchConfig {
            calm: Weights {
                keep: 0.0,
                noise: 1.0,
                ..all_keep()
            },
            ..GlitchConfig::title()
        };
        let mut engine = GlitchEngine::new("I AM WATCHING", &config, &mut rng);
        for _ in 0..50 {
            let frame: Vec<char> = engine.tick(&mut rng).chars().collect();
            assert_eq!(frame[1], ' ');
            assert_eq!(frame[4], ' ');
        }
    }

    #[test]
    fn steady_weights_leave_text_alone() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut engine = GlitchEngine::new("Prizes", &GlitchConfig::heading(), &mut rng);
        for _ in 0..30 {
            assert_eq!(engine.tick(&mut rng), "Prizes");
        }
    }

    #[test]
    fn heading_burst_uses_cipher_glyphs() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut engine = GlitchEngine::new("ABOUT", &GlitchConfig::heading(), &mut rng);
        engine.begin_burst();
        assert_eq!(engine.tick(&mut rng), cipher::encode("ABOUT"));
    }

    #[test]
    fn cryptic_substitution_is_stable_per_position() {
        let mut rng = StdRng::seed_from_u64(21);
        let config = GlitchConfig {
            burst: Weights {
                keep: 0.0,
                cryptic: 1.0,
                ..all_keep()
            },
            ..GlitchConfig::title()
        };
        let mut engine = GlitchEngine::new("MYSTERY", &config, &mut rng);
        engine.begin_burst();
        let first = engine.tick(&mut rng);
        let second = engine.tick(&mut rng);
        assert_eq!(first, second);
        assert_ne!(first, "MYSTERY");
    }

    #[test]
    fn restore_returns_plain_text_and_calm_phase() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut engine = GlitchEngine::new("Bill Cipher", &GlitchConfig::title(), &mut rng);
        engine.begin_burst();
        engine.tick(&mut rng);
        assert_eq!(engine.phase(), Phase::Burst);

        assert_eq!(engine.restore(), "Bill Cipher");
        assert_eq!(engine.display(), engine.source());
        assert_eq!(engine.phase(), Phase::Calm);
    }

    #[test]
    fn distortion_stays_within_phase_bounds() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut engine = GlitchEngine::new("x", &GlitchConfig::title(), &mut rng);
        for _ in 0..100 {
            let d = engine.distortion(&mut rng);
            assert!(d.red.abs() <= 1.5 && d.green.abs() <= 1.5 && d.blue.abs() <= 1.5);
        }
        engine.begin_burst();
        for _ in 0..100 {
            let d = engine.distortion(&mut rng);
            assert!(d.red.abs() <= 5.0 && d.shake.0.abs() <= 3.0);
        }
    }

    #[test]
    fn steady_heading_has_no_calm_distortion() {
        let mut rng = StdRng::seed_from_u64(8);
        let engine = GlitchEngine::new("FAQ", &GlitchConfig::heading(), &mut rng);
        assert_eq!(engine.distortion(&mut rng), Distortion::default());
    }

    #[test]
    fn burst_timing_respects_jitter() {
        let mut rng = StdRng::seed_from_u64(13);
        let config = GlitchConfig::title();
        for _ in 0..100 {
            let every = config.next_burst_every(&mut rng);
            let len = config.next_burst_len(&mut rng);
            assert!((5000..=7000).contains(&every));
            assert!((800..=1300).contains(&len));
        }
        assert!(config.has_bursts());
    }

    #[test]
    fn decode_reveal_resolves_left_to_right() {
        let mut rng = StdRng::seed_from_u64(17);
        let mut reveal = DecodeReveal::new("Gravity Falls");
        let mut last = String::new();
        let mut ticks = 0;
        while !reveal.is_done() {
            last = reveal.tick(&mut rng);
            assert_eq!(last.chars().count(), 13);
            assert_eq!(last.chars().nth(7), Some(' '));
            ticks += 1;
            assert!(ticks < 100);
        }
        assert_eq!(ticks, 13 * DecodeReveal::TICKS_PER_CHAR);
        assert_eq!(last, "Gravity Falls");
        assert_eq!(reveal.tick(&mut rng), "Gravity Falls");
    }
}
