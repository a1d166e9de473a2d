//! Deterministic task coloring.
//!
//! Explicit color integers and hashed fallback keys both feed the same
//! multiplicative mixer, so a given input always lands on the same HSL
//! triple regardless of run, process, or platform.

use crate::model::TaskRecord;

/// Knuth-style multiplicative mixing constant; spreads consecutive
/// integers across the hue wheel.
const MIX: u32 = 2_654_435_761;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// A resolved display color in HSL space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsl {
    /// Hue in degrees, 0..360.
    pub hue: u32,
    /// Saturation percent, 60..=79.
    pub sat: u32,
    /// Lightness percent, 45..=54.
    pub light: u32,
}

impl Hsl {
    /// CSS color string, e.g. `hsl(120 65% 48%)`.
    pub fn css(&self) -> String {
        format!("hsl({} {}% {}%)", self.hue, self.sat, self.light)
    }
}

/// Mix an integer into an HSL triple. Not reversible, only stable and
/// well spread over hue space.
pub fn color_from_u32(x: u32) -> Hsl {
    let h = x.wrapping_mul(MIX);
    Hsl {
        hue: h % 360,
        sat: 60 + (h >> 8) % 20,
        light: 45 + (h >> 16) % 10,
    }
}

/// FNV-1a over the key's bytes. Fixed and platform-independent, unlike
/// `std::hash`, which is free to vary between releases and processes.
fn fnv1a(key: &str) -> u64 {
    let mut h = FNV_OFFSET;
    for b in key.bytes() {
        h ^= b as u64;
        h = h.wrapping_mul(FNV_PRIME);
    }
    h
}

/// Color a string key via FNV-1a, feeding the low 32 bits of the hash
/// through the same mixer as explicit colors.
pub fn color_from_key(key: &str) -> Hsl {
    color_from_u32(fnv1a(key) as u32)
}

/// Resolve a record's display color: explicit color if present, otherwise
/// its label, otherwise its ingestion index.
pub fn resolve(task: &TaskRecord) -> Hsl {
    match task.explicit_color {
        Some(c) => color_from_u32(c),
        None if !task.label.is_empty() => color_from_key(&task.label),
        None => color_from_key(&task.index.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_color_is_stable() {
        // 16711680 == 0xFF0000
        let a = color_from_u32(16_711_680);
        let b = color_from_u32(16_711_680);
        assert_eq!(a, b);
        assert!(a.hue < 360);
        assert!((60..80).contains(&a.sat));
        assert!((45..55).contains(&a.light));
    }

    #[test]
    fn key_hash_is_fixed_across_calls() {
        let a = color_from_key("decode frame %d");
        let b = color_from_key("decode frame %d");
        assert_eq!(a, b);
        // Known FNV-1a vector: empty string hashes to the offset basis.
        assert_eq!(fnv1a(""), FNV_OFFSET);
    }

    #[test]
    fn distinct_keys_usually_differ() {
        let a = color_from_key("render");
        let b = color_from_key("upload");
        assert_ne!(a, b);
    }

    #[test]
    fn resolve_prefers_explicit_then_label_then_index() {
        let mut t = crate::model::TaskRecord::new(0.0, 1.0, "T1", "work", 7);
        t.explicit_color = Some(42);
        assert_eq!(resolve(&t), color_from_u32(42));

        t.explicit_color = None;
        assert_eq!(resolve(&t), color_from_key("work"));

        t.label.clear();
        assert_eq!(resolve(&t), color_from_key("7"));
    }

    #[test]
    fn css_formatting() {
        let c = Hsl {
            hue: 12,
            sat: 61,
            light: 50,
        };
        assert_eq!(c.css(), "hsl(12 61% 50%)");
    }
}
