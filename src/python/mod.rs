//! Python bindings for the Kuba rules engine.
//!
//! # Quick Start
//!
//! ```python
//! import kuba
//!
//! game = kuba.KubaGame(("PlayerA", "W"), ("PlayerB", "B"))
//! game.get_marble_count()              # (8, 8, 13)
//! game.make_move("PlayerA", (6, 5), "F")   # True
//! game.make_move("PlayerA", (6, 5), "L")   # False, not PlayerA's turn
//! game.get_current_turn()              # "PlayerB"
//! game.get_marble((5, 5))              # "W"
//! ```
//!
//! `make_move` and `is_valid_move` never raise on bad arguments. A name that
//! is not a string, coordinates that are not a `(row, col)` tuple of ints
//! (lists, floats, out-of-range ints) and any direction other than exactly
//! `"L"`, `"R"`, `"F"` or `"B"` all return `False`.
//!
//! Build the importable module with the `extension-module` feature; run the
//! binding tests with `cargo test --features python`.

use pyo3::prelude::*;

mod py_game;

pub use py_game::*;

/// kuba: rules engine for the Kuba marble game.
#[pymodule]
fn kuba(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyKubaGame>()?;
    Ok(())
}
