//! Console-facing UI facade.
//!
//! Groups the output contract (`render`), console cosmetics and keypress waits
//! (`console`), and the shared palette (`settings`).

pub mod console;
pub mod render;
pub mod settings;
