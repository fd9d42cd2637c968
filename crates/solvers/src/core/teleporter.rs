use indicatif::{ProgressBar, ProgressStyle};
use synacore_vm::core::constants::MODULUS;
use tracing::debug;

use crate::error::Error;

/// The value the confirmation routine must produce for the teleporter to
/// accept the eighth register.
const CONFIRMATION: u16 = 6;

/// Compute the confirmation routine's result for one candidate setting of
/// the eighth register.
///
/// The routine is an Ackermann-style recurrence over 15-bit words seeded
/// by the candidate `v`:
///
/// ```text
/// f(0, b) = b + 1
/// f(a, 0) = f(a - 1, v)
/// f(a, b) = f(a - 1, f(a, b - 1))
/// ```
///
/// evaluated as `f(4, 1)` with every intermediate reduced modulo 32768.
/// The depth-one and depth-two calls collapse to closed forms, leaving a
/// single tabulated row for depth three.
pub fn verify(candidate: u16) -> u16 {
    let modulus = u32::from(MODULUS);
    let v = u32::from(candidate);

    // f(2, b) = (b + 2) * v + (b + 1), folded from f(1, b) = b + v + 1
    let f2 = |b: u32| ((b + 2) * v + b + 1) % modulus;

    let mut row = vec![0u32; usize::from(MODULUS)];
    row[0] = f2(v);
    for b in 1..row.len() {
        row[b] = f2(row[b - 1]);
    }

    // f(4, 0) = f(3, v) and f(4, 1) = f(3, f(4, 0))
    let confirmation = row[row[v as usize] as usize];
    confirmation as u16
}

/// Scan the register space for the setting that makes the confirmation
/// routine produce its accepted value.
pub fn calibrate() -> Result<u16, Error> {
    let scan_progress = ProgressBar::new(u64::from(MODULUS));
    scan_progress.set_style(
        ProgressStyle::with_template("{bar:40} {pos}/{len} {msg}")
            .expect("Failed to create progress bar style.")
            .progress_chars("=> "),
    );
    scan_progress.set_message("calibrating the teleporter");

    for candidate in 0..MODULUS {
        scan_progress.inc(1);
        if verify(candidate) == CONFIRMATION {
            scan_progress.finish_and_clear();
            debug!("confirmation routine settles at candidate {candidate}.");
            return Ok(candidate);
        }
    }

    scan_progress.finish_and_clear();
    Err(Error::NoSolution(
        "no eighth register setting satisfies the confirmation routine".to_string(),
    ))
}
