//! # inkpress
//!
//! Convert arbitrary images into the fixed format a Kindle 4 e-reader
//! displays natively: 600×800, 8-bit grayscale PNG.
//!
//! # Architecture: A Linear Per-File Pipeline
//!
//! Each input file flows through the same sequence, fully finishing before
//! the next file starts:
//!
//! ```text
//! 1. Scan      args      →  candidates      (dirs expanded, deduplicated)
//! 2. Convert   candidate →  <stem>_k4.png   (geometry → tone → encode)
//! ```
//!
//! Failures are isolated per file: a missing path, a wrong-sized image with
//! resizing disallowed, or a decode/encode error skips that file, prints a
//! status line, and the run continues. Only an empty candidate list aborts
//! the whole run.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Expands CLI path arguments into a deduplicated, ordered candidate list |
//! | [`imaging`] | Pixel work: fit/crop/pad geometry and grayscale/contrast/posterize tone |
//! | [`naming`] | Output filename convention (`<stem>_k4.png`) |
//! | [`convert`] | Per-file pipeline driver with run counters and error isolation |
//! | [`output`] | Status line formatting — pure `format_*` functions, `print_*` wrappers |
//!
//! # Design Decisions
//!
//! ## Skip, Don't Surprise
//!
//! Images that are not already 600×800 are skipped by default. Resizing is
//! opt-in (`--allow-resize`) because each strategy is lossy in its own way —
//! `fit` letterboxes, `crop` discards edges, `pad` can clip — and the right
//! choice depends on the material. The skip line reports the actual
//! dimensions so the user can decide.
//!
//! ## White Letterbox
//!
//! `fit` and `pad` fill uncovered canvas with white. On an e-ink panel white
//! is the resting state of the display; black borders would burn contrast on
//! every page turn for no benefit.
//!
//! ## Maximum PNG Compression
//!
//! Output is encoded with the `image` PNG encoder at its strongest
//! compression with adaptive filtering. The device has megabytes of storage,
//! not gigabytes, and encoding time is irrelevant at screensaver-collection
//! scale.
//!
//! ## Pad Overflow Clips
//!
//! `pad` performs no scaling, so a source larger than the canvas overflows
//! it. The overflow is clipped silently — the centered placement simply
//! extends past the edges. Users who want a guaranteed complete picture use
//! `fit` or `crop`.

pub mod convert;
pub mod imaging;
pub mod naming;
pub mod output;
pub mod scan;
