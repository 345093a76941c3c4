use crate::{
    foundation::{error::SlideResult, math::Fnv1a64},
    layout::ComposedSlide,
};

/// 128-bit identity of a slide's visual layout.
///
/// Covers the format, canvas, minimal flag and every layer. The still id, speaker
/// notes and warnings are excluded, so two slides with equal fingerprints draw the
/// same pixels. Numbered carousel footers carry `n / total`, so equal carousel
/// slides at different positions still differ.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayoutFingerprint {
    pub hi: u64,
    pub lo: u64,
}

impl LayoutFingerprint {
    pub fn to_hex(self) -> String {
        format!("{:016x}{:016x}", self.hi, self.lo)
    }
}

impl std::fmt::Display for LayoutFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

pub fn fingerprint_slide(slide: &ComposedSlide) -> SlideResult<LayoutFingerprint> {
    let mut a = Fnv1a64::new_default();
    let mut b = Fnv1a64::new(0x9ae1_6a3b_2f90_404f);

    write_str_pair(&mut a, &mut b, slide.format.as_str());
    write_u64_pair(&mut a, &mut b, u64::from(slide.canvas.width));
    write_u64_pair(&mut a, &mut b, u64::from(slide.canvas.height));
    write_u8_pair(&mut a, &mut b, u8::from(slide.minimal));

    let layers = serde_json::to_value(&slide.layers)?;
    write_json_value_pair(&mut a, &mut b, &layers);

    Ok(LayoutFingerprint {
        hi: a.finish(),
        lo: b.finish(),
    })
}

fn write_json_value_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, v: &serde_json::Value) {
    match v {
        serde_json::Value::Null => write_u8_pair(a, b, 0),
        serde_json::Value::Bool(x) => {
            write_u8_pair(a, b, 1);
            write_u8_pair(a, b, u8::from(*x));
        }
        serde_json::Value::Number(n) => {
            write_u8_pair(a, b, 2);
            write_str_pair(a, b, &n.to_string());
        }
        serde_json::Value::String(s) => {
            write_u8_pair(a, b, 3);
            write_str_pair(a, b, s);
        }
        serde_json::Value::Array(items) => {
            write_u8_pair(a, b, 4);
            write_u64_pair(a, b, items.len() as u64);
            for item in items {
                write_json_value_pair(a, b, item);
            }
        }
        serde_json::Value::Object(map) => {
            write_u8_pair(a, b, 5);
            let mut keys = map.keys().collect::<Vec<_>>();
            keys.sort();
            write_u64_pair(a, b, keys.len() as u64);
            for k in keys {
                write_str_pair(a, b, k);
                write_json_value_pair(a, b, &map[k]);
            }
        }
    }
}

fn write_u8_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, v: u8) {
    a.write_u8(v);
    b.write_u8(v);
}

fn write_u64_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, v: u64) {
    a.write_u64(v);
    b.write_u64(v);
}

fn write_str_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, s: &str) {
    write_u64_pair(a, b, s.len() as u64);
    a.write_bytes(s.as_bytes());
    b.write_bytes(s.as_bytes());
}

#[cfg(test)]
#[path = "../../tests/unit/compose/fingerprint.rs"]
mod tests;
