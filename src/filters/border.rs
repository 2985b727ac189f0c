//! Border extension policies for out-of-range filter taps.
//!
//! For an input row `a b c d`:
//!
//! | mode          | left ext. | row       | right ext. |
//! |---------------|-----------|-----------|------------|
//! | `Nearest`     | `a a a`   | `a b c d` | `d d d`    |
//! | `Reflect`     | `c b a`   | `a b c d` | `d c b`    |
//! | `Mirror`      | `d c b`   | `a b c d` | `c b a`    |
//! | `Wrap`        | `b c d`   | `a b c d` | `a b c`    |
//! | `Constant(v)` | `v v v`   | `a b c d` | `v v v`    |
//!
//! Offsets larger than the row length keep folding with the same rule, so a
//! wide kernel on a tiny image is still well defined.
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BorderMode {
    /// Replicate the edge sample.
    #[default]
    Nearest,
    /// Reflect about the outer edge of the border pixel (edge sample repeated).
    Reflect,
    /// Reflect about the centre of the border pixel (edge sample not repeated).
    Mirror,
    /// Periodic extension.
    Wrap,
    /// Every out-of-range sample reads the given value.
    Constant(f32),
}

impl BorderMode {
    /// Map a possibly out-of-range index onto `0..len`.
    ///
    /// Returns `None` for `Constant`, meaning "use the fill value". `len` must
    /// be non-zero.
    pub fn resolve(self, i: isize, len: usize) -> Option<usize> {
        let n = len as isize;
        if (0..n).contains(&i) {
            return Some(i as usize);
        }
        let idx = match self {
            BorderMode::Nearest => i.clamp(0, n - 1),
            BorderMode::Reflect => {
                let m = i.rem_euclid(2 * n);
                if m < n {
                    m
                } else {
                    2 * n - 1 - m
                }
            }
            BorderMode::Mirror => {
                if n == 1 {
                    0
                } else {
                    let period = 2 * n - 2;
                    let m = i.rem_euclid(period);
                    if m < n {
                        m
                    } else {
                        period - m
                    }
                }
            }
            BorderMode::Wrap => i.rem_euclid(n),
            BorderMode::Constant(_) => return None,
        };
        Some(idx as usize)
    }

    /// Value read for samples that `resolve` maps to `None`.
    pub fn fill_value(self) -> f32 {
        match self {
            BorderMode::Constant(v) => v,
            _ => 0.0,
        }
    }

    /// Source indices for positions `-radius..len + radius`, resolved once per axis.
    pub(crate) fn index_table(self, len: usize, radius: usize) -> Vec<Option<usize>> {
        let r = radius as isize;
        (-r..len as isize + r)
            .map(|i| self.resolve(i, len))
            .collect()
    }
}
