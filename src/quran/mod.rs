/*!
 * Quran text: model, structural annotations and the corpus parser.
 */

pub mod annotations;
pub mod model;
pub mod parser;

pub use annotations::{BISMILLAH, period_of, sajdah_of};
pub use model::{Ayah, Mushaf, Period, Quran, Sajdah, Surah, Word};
pub use parser::{ParseOptions, parse, parse_str};
