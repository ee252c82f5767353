use ytree_util::catalog::{data_filekey_candidates, redshift_suffix};
use ytree_util::{fround, logger, Fround, UtilError, REDSHIFT_PRECISION};

fn main() -> Result<(), UtilError> {
  logger::init();
  println!("--- Half-up rounding vs std ---");

  for x in [0.5_f64, 1.5, 2.5, -0.5, -2.5] {
    println!("{x:>5}: fround = {:>4}, std round = {:>4}", fround(x, 0), x.round());
  }
  println!("1234 to hundreds: {}", fround(1234.0, -2));
  println!("[0.5, 1.5, 2.5] -> {:?}", [0.5_f64, 1.5, 2.5].fround(0));

  println!("\n--- Catalog file keys ---");
  let redshifts = [0.0, 0.4995, 1.0, 2.0625, 6.12345];
  for z in redshifts {
    println!("z = {z:<8} -> .z{}", redshift_suffix(z, REDSHIFT_PRECISION));
    for key in data_filekey_candidates("ahf_halos/snap_N64L16", z, REDSHIFT_PRECISION) {
      println!("    try {key}");
    }
  }

  let cwd = std::env::current_dir().map_err(|e| UtilError::Io {
    path: ".".into(),
    source: e,
  })?;
  println!("\nTwo levels above {}: {}", cwd.display(), ytree_util::dirname(&cwd, 2)?.display());
  Ok(())
}
