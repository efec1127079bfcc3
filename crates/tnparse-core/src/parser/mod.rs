pub mod assemble;
pub mod classifier;
pub mod matcher;
pub mod range;
pub mod segmenter;
pub mod unified;

pub use classifier::{classify, Classified};
pub use matcher::{Matcher, ResolvedMatch};
pub use segmenter::gaps;
pub use unified::{parse, parse_default, Parser, ParserConfig};
