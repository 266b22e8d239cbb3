pub mod block_quote;
pub mod code_fence;
pub mod definition;
pub mod heading;
pub mod indented_code;
pub mod list;
pub mod paragraph;
pub mod table;
pub mod thematic_break;

pub use block_quote::{BlockQuote, QuoteLine};
pub use code_fence::{CodeFence, FenceKind, FenceSig};
pub use definition::DefinitionList;
pub use heading::{AtxHeading, SetextUnderline};
pub use indented_code::IndentedCode;
pub use list::{BulletItem, NumberedItem};
pub use paragraph::Paragraph;
pub use table::Table;
pub use thematic_break::ThematicBreak;
