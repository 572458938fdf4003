#![doc = r#"
ASWCOMIC — slice one photograph into "A Softer World"-style comic material.

The pipeline scales the photo so a run of squares exactly spans its smaller
side. The squares sit on a diagonal from the top-left corner, each one a
square further along both axes. That diagonal is cut out several times, each
time shifted a bit further along the longer side. Every cut square is framed
with a black border and saved on its own; for every shift a "highlight" slide
is produced with the squares in full colour over a washed-out copy of the
photo. Optionally the
squares of each shift are assembled into a comic strip.

Outputs (all next to the source image)
--------------------------------------
- `{name}_resized{ext}` — the scaled working copy
- `squares_batch{i}/{name}_square{j}{ext}` — bordered squares
- `demo{i}.jpeg` — highlight slides
- `asw{i}_{layout}.jpeg` — comic strips, only when requested

Quick start
-----------
```rust,no_run
use std::path::Path;
use aswcomic::{ComicLayout, LayoutParams, process_image};

fn main() -> aswcomic::Result<()> {
    let report = process_image(
        Path::new("/photos/beach.jpg"),
        &LayoutParams::default(),
        Some(ComicLayout::Vertical),
    )?;
    println!("{} squares, {} slides", report.squares.len(), report.slides.len());
    Ok(())
}
```

In-memory geometry
------------------
```rust
use aswcomic::{Layout, LayoutParams};

let layout = Layout::new(&LayoutParams::default(), 787, 630).unwrap();
assert_eq!(layout.padding(), 39.25);
for placement in layout.placements() {
    let (x, y) = placement.rect.origin();
    assert!(x >= 0 && y >= 0);
}
```

Useful modules
--------------
- [`api`] — high-level entry points.
- [`core`] — parameters, crop geometry, resize, enhancement and the stages.
- [`io`] — loading, writers, and batch-directory housekeeping.
- [`types`] — `Orientation`, `ComicLayout`, `CropRect`.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use crate::core::params::LayoutParams;
pub use crate::core::processing::geometry::{Layout, Placement};
pub use error::{Error, Result};
pub use types::{ComicLayout, CropRect, Orientation};

pub use api::{RunReport, prepare_raster, process_image};
