//! Redshift-keyed file names used by halo catalogs.
//!
//! Halo finders such as AHF write one file set per snapshot and tag each name
//! with the snapshot redshift, e.g. `halos.z0.500.AHF_halos`. The redshift in
//! the header and the one in the name were printed separately, so the name has
//! to be rebuilt with the same half-up rounding and, failing that, one step
//! lower.

use crate::math::extensions::_pow10;
use crate::math::rounding::fround;
use crate::types::{UtilError, UtilResult};
use regex::Regex;
use std::path::PathBuf;

fn precision_exp(precision: usize) -> i32 {
  i32::try_from(precision).unwrap_or(i32::MAX)
}

/// Formats `redshift` the way catalogs print it: half-up rounded to `precision` places.
///
/// ```
/// use ytree_util::catalog::redshift_suffix;
///
/// assert_eq!(redshift_suffix(0.5, 3), "0.500");
/// assert_eq!(redshift_suffix(0.0625, 3), "0.063");
/// ```
#[must_use]
pub fn redshift_suffix(redshift: f64, precision: usize) -> String {
  format!("{:.*}", precision, fround(redshift, precision_exp(precision)))
}

/// Pattern of a `.z<d>.<precision digits>` tag. `None` if it cannot be built.
fn tag_regex(precision: usize) -> Option<Regex> {
  match Regex::new(&format!(r"\.z\d\.\d{{{precision}}}")) {
    Ok(re) => Some(re),
    Err(e) => {
      log::debug!("No redshift tag pattern for precision {precision}: {e}");
      None
    }
  }
}

fn cut_after_tag<'a>(re: Option<&Regex>, filekey: &'a str) -> Option<&'a str> {
  re?.find(filekey).map(|m| &filekey[..m.end()])
}

/// `filekey.z<z>` and `filekey.z<z - 10^-precision>` with `z` rounded half up.
fn untagged_candidates(filekey: &str, redshift: f64, precision: usize) -> Vec<String> {
  let exp = precision_exp(precision);
  let z = fround(redshift, exp);
  [0.0, -_pow10::<f64>(-exp)]
    .iter()
    .map(|inc| format!("{filekey}.z{:.*}", precision, z + inc))
    .collect()
}

/// Finds an existing `.z<d>.<precision digits>` tag in `filekey`.
///
/// Returns the key truncated right after the first tag, or `None`.
#[must_use]
pub fn tagged_filekey(filekey: &str, precision: usize) -> Option<&str> {
  cut_after_tag(tag_regex(precision).as_ref(), filekey)
}

/// Data-file keys to try for a catalog, most likely first.
///
/// A key that already carries a redshift tag gives just itself, cut after the
/// tag. Otherwise the key gets `.z<redshift>` appended, first with the rounded
/// redshift and then with one unit in the last place less.
#[must_use]
pub fn data_filekey_candidates(filekey: &str, redshift: f64, precision: usize) -> Vec<String> {
  match tagged_filekey(filekey, precision) {
    Some(tagged) => vec![tagged.to_string()],
    None => untagged_candidates(filekey, redshift, precision),
  }
}

/// Picks the first candidate key whose data file `<key><data_suffix>` exists.
///
/// Tagged keys are returned without touching the filesystem.
pub fn resolve_data_filekey(filekey: &str, redshift: f64, precision: usize, data_suffix: &str) -> UtilResult<String> {
  if let Some(tagged) = tagged_filekey(filekey, precision) {
    return Ok(tagged.to_string());
  }
  let mut tried = PathBuf::new();
  for key in untagged_candidates(filekey, redshift, precision) {
    tried = PathBuf::from(format!("{key}{data_suffix}"));
    if tried.exists() {
      log::debug!("Using data file {}.", tried.display());
      return Ok(key);
    }
  }
  Err(UtilError::FileNotFound(tried))
}
