pub mod fragment;
pub mod indent;
pub mod marker;
pub mod patcher;

pub use fragment::FragmentRenderer;
pub use indent::DocumentStyle;
pub use marker::MarkerPattern;
pub use patcher::{PatchOutcome, PomPatcher};
